//! SVG serialization of a [`PlateDrawing`].
//!
//! The output is hand-assembled text rather than a DOM: the document is three
//! flat groups of `<rect>` elements, and laser/CNC toolchains care about the
//! group ids and stroke styling more than about XML generality.
//!
//! Layer conventions (matching the hardware workflow this replaces):
//! - `plate_outline` — black, the cut boundary, rounded corners.
//! - `switches`      — red, the switch cutouts.
//! - `keycaps`       — blue at half opacity, visual-verification only.

use crate::application::generate_plate::{PlateDrawing, Rect};

/// Serializes `drawing` into a complete standalone SVG document.
///
/// The viewBox matches the expanded bounding box so that coordinates in the
/// file are real millimeters; `width`/`height` carry explicit `mm` units so
/// the drawing imports at true scale.
pub fn render_svg(drawing: &PlateDrawing, source_name: &str) -> String {
    let outline = &drawing.outline;

    let mut lines = vec![
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}mm" height="{}mm" viewBox="{} {} {} {}">"#,
            outline.width, outline.height, outline.x, outline.y, outline.width, outline.height
        ),
        format!("  <!-- Generated from {source_name} -->"),
        r#"  <g id="plate_outline" style="stroke:black; fill:none; stroke-width:0.5">"#.to_string(),
        format!(
            r#"    <rect x="{}" y="{}" width="{}" height="{}" rx="3" ry="3" />"#,
            outline.x, outline.y, outline.width, outline.height
        ),
        "  </g>".to_string(),
        r#"  <g id="switches" style="stroke:red; fill:none; stroke-width:0.1">"#.to_string(),
    ];

    for hole in &drawing.holes {
        lines.push(rect_element(hole));
    }
    lines.push("  </g>".to_string());

    if !drawing.keycaps.is_empty() {
        lines.push(
            r#"  <g id="keycaps" style="stroke:blue; fill:none; stroke-width:0.1; opacity:0.5">"#
                .to_string(),
        );
        for cap in &drawing.keycaps {
            lines.push(rect_element(cap));
        }
        lines.push("  </g>".to_string());
    }

    lines.push("</svg>".to_string());
    lines.join("\n")
}

fn rect_element(rect: &Rect) -> String {
    format!(
        r#"    <rect x="{}" y="{}" width="{}" height="{}" />"#,
        rect.x, rect.y, rect.width, rect.height
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────
