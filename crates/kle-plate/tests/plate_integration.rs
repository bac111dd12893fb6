//! Integration tests for the plate generation pipeline.
//!
//! These tests exercise kle-plate end to end: JSON text through the kle-core
//! document model and resolver, into [`build_plate`], out through the SVG
//! serializer.

use kle_core::document::parse::parse_document;
use kle_plate::application::generate_plate::{build_plate, PlateError, PlateSpec};
use kle_plate::infrastructure::svg::render_svg;

fn generate(json: &str, spec: &PlateSpec) -> String {
    let document = parse_document(json).expect("test layout must parse");
    let drawing = build_plate(&document, spec).expect("test layout must build");
    render_svg(&drawing, "test-layout.json")
}

// ── Happy path ────────────────────────────────────────────────────────────────

#[test]
fn test_two_row_layout_produces_complete_svg() {
    let json = r#"[
        ["Esc", "Q", "W"],
        [{"w": 1.5}, "Tab", "A"]
    ]"#;
    let svg = generate(json, &PlateSpec::default());

    assert!(svg.contains(r#"<g id="plate_outline""#));
    assert!(svg.contains(r#"<g id="switches""#));
    assert!(svg.contains(r#"<g id="keycaps""#));
    // Five keys → five cutout rects.
    let cutouts = svg.lines().filter(|l| l.contains(r#"width="14""#)).count();
    assert_eq!(cutouts, 5);
}

#[test]
fn test_outline_width_is_bbox_plus_margin_on_both_sides() {
    // Three 1u keys in one row: bbox width = 3 * 19.05 = 57.15 mm.
    let json = r#"[["A", "B", "C"]]"#;
    let document = parse_document(json).unwrap();
    let spec = PlateSpec::default();
    let drawing = build_plate(&document, &spec).unwrap();

    assert_eq!(drawing.outline.width, 3.0 * 19.05 + 2.0 * spec.margin_mm);
    assert_eq!(drawing.outline.height, 19.05 + 2.0 * spec.margin_mm);
    assert_eq!(drawing.outline.x, -spec.margin_mm);
    assert_eq!(drawing.outline.y, -spec.margin_mm);
}

#[test]
fn test_offset_keys_shift_the_view_box() {
    // y offset of 0.25u pushes the bbox top to 0.25 * 19.05 mm before margin.
    let json = r#"[[{"y": 0.25}, "Esc"]]"#;
    let document = parse_document(json).unwrap();
    let spec = PlateSpec::default();
    let drawing = build_plate(&document, &spec).unwrap();

    assert_eq!(drawing.outline.y, 0.25 * 19.05 - spec.margin_mm);
}

#[test]
fn test_metadata_heavy_kle_export_is_tolerated() {
    // Real KLE exports start with a metadata object and sprinkle styling
    // fields through the rows; none of that must disturb geometry.
    let json = r##"[
        {"name": "test board", "author": "nobody"},
        [{"c": "#cccccc", "y": 0.5}, "SW0", {"t": "#ff0000"}, "SW1"]
    ]"##;
    let document = parse_document(json).unwrap();
    let drawing = build_plate(&document, &PlateSpec::default()).unwrap();
    assert_eq!(drawing.holes.len(), 2);
}

// ── Failure paths ─────────────────────────────────────────────────────────────

#[test]
fn test_unparseable_source_fails_before_any_geometry() {
    let result = parse_document("this is not json at all");
    assert!(result.is_err(), "garbage input must be rejected up front");
}

#[test]
fn test_layout_with_no_keys_is_an_empty_layout_error() {
    let document = parse_document(r#"[{"name": "only metadata"}]"#).unwrap();
    let result = build_plate(&document, &PlateSpec::default());
    assert_eq!(result, Err(PlateError::EmptyLayout));
}

// ── Custom spec ───────────────────────────────────────────────────────────────

#[test]
fn test_custom_hole_size_flows_through_to_svg() {
    let spec = PlateSpec {
        hole_size_mm: 13.5,
        ..PlateSpec::default()
    };
    let svg = generate(r#"[["A"]]"#, &spec);
    assert!(svg.contains(r#"width="13.5""#));
}
