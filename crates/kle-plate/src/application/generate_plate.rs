//! GeneratePlateUseCase: from a layout document to plate drawing geometry.
//!
//! The main entry point is [`build_plate`], which resolves the document,
//! scales everything into millimeters, and assembles a [`PlateDrawing`]:
//! one outline rectangle sized to the layout's bounding box plus margin, one
//! switch-hole rectangle per key centered on the key's centroid, and
//! (optionally) one keycap rectangle per key sized to its full footprint for
//! visual verification.
//!
//! The drawing is pure geometry; turning it into SVG text is the job of
//! [`crate::infrastructure::svg`].

use kle_core::{resolve, BoundingBox, Document};
use thiserror::Error;

/// Error type for plate generation.
#[derive(Debug, Error, PartialEq)]
pub enum PlateError {
    /// The document contains no key tokens, so there is nothing to draw.
    #[error("layout contains no keys; nothing to draw")]
    EmptyLayout,
}

/// Physical parameters of the plate, all in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateSpec {
    /// Pitch of one layout unit (19.05 mm for MX-style switches).
    pub unit_size_mm: f64,
    /// Side length of the square switch cutout (14.0 mm for MX).
    pub hole_size_mm: f64,
    /// Border added around the layout's bounding box on all sides.
    pub margin_mm: f64,
    /// Whether to include per-key footprint outlines in the drawing.
    pub draw_keycaps: bool,
}

impl Default for PlateSpec {
    fn default() -> Self {
        Self {
            unit_size_mm: 19.05,
            hole_size_mm: 14.0,
            margin_mm: 5.0,
            draw_keycaps: true,
        }
    }
}

/// An axis-aligned rectangle in millimeters, top-left anchored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// The assembled plate drawing, ready for serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct PlateDrawing {
    /// The plate outline: bounding box of all keys expanded by the margin.
    pub outline: Rect,
    /// One switch cutout per key, centered on the key centroid.
    pub holes: Vec<Rect>,
    /// One full-footprint outline per key; empty when `draw_keycaps` is off.
    pub keycaps: Vec<Rect>,
}

/// Builds the plate drawing for `document`.
///
/// # Errors
///
/// Returns [`PlateError::EmptyLayout`] when the document resolves to zero
/// keys — an outline around nothing has no meaningful size.
pub fn build_plate(document: &Document, spec: &PlateSpec) -> Result<PlateDrawing, PlateError> {
    let keys = resolve(document);

    let bbox = BoundingBox::of(&keys)
        .ok_or(PlateError::EmptyLayout)?
        .scale(spec.unit_size_mm)
        .expand(spec.margin_mm);

    let outline = Rect {
        x: bbox.min_x,
        y: bbox.min_y,
        width: bbox.width(),
        height: bbox.height(),
    };

    let mut holes = Vec::with_capacity(keys.len());
    let mut keycaps = Vec::with_capacity(if spec.draw_keycaps { keys.len() } else { 0 });

    for key in &keys {
        let physical = key.to_physical(spec.unit_size_mm);
        holes.push(Rect {
            x: physical.center_x_mm - spec.hole_size_mm / 2.0,
            y: physical.center_y_mm - spec.hole_size_mm / 2.0,
            width: spec.hole_size_mm,
            height: spec.hole_size_mm,
        });
        if spec.draw_keycaps {
            keycaps.push(Rect {
                x: physical.x_mm,
                y: physical.y_mm,
                width: physical.width_mm,
                height: physical.height_mm,
            });
        }
    }

    Ok(PlateDrawing {
        outline,
        holes,
        keycaps,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
