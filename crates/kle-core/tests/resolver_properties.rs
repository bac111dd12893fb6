//! Integration tests for the kle-core resolver.
//!
//! These tests exercise the public API end to end — JSON text through
//! [`kle_core::document::parse::parse_document`] into [`kle_core::resolve`] —
//! and pin down the behavioral properties both sinks rely on.

use kle_core::document::parse::parse_document;
use kle_core::{resolve, BoundingBox, Document};

fn resolve_json(json: &str) -> Vec<kle_core::ResolvedKey> {
    let document = parse_document(json).expect("test JSON must parse");
    resolve(&document)
}

// ── Count invariant ───────────────────────────────────────────────────────────

#[test]
fn test_resolved_key_count_equals_key_token_count() {
    let json = r#"[
        {"name": "metadata is not a key"},
        [{"y": 0.5}, "Esc", {"x": 1}, "F1", "F2"],
        [{"w": 2}, "Tab"],
        [{"x": 3}]
    ]"#;
    let document = parse_document(json).unwrap();
    let keys = resolve(&document);
    assert_eq!(keys.len(), document.key_count());
    assert_eq!(keys.len(), 4);
}

#[test]
fn test_empty_document_yields_empty_sequence_not_error() {
    assert!(resolve(&Document::default()).is_empty());
    assert!(resolve_json("[]").is_empty());
}

// ── Defaults ──────────────────────────────────────────────────────────────────

#[test]
fn test_lone_key_token_resolves_to_unit_key_at_origin() {
    let keys = resolve_json(r#"[["Esc"]]"#);
    assert_eq!(keys.len(), 1);
    assert_eq!((keys[0].x, keys[0].y), (0.0, 0.0));
    assert_eq!((keys[0].width, keys[0].height), (1.0, 1.0));
}

// ── Width consumption ─────────────────────────────────────────────────────────

#[test]
fn test_width_two_applies_once_then_defaults_back() {
    let keys = resolve_json(r#"[[{"w": 2}, "Backspace", "Insert"]]"#);
    assert_eq!(keys[0].width, 2.0);
    assert_eq!(keys[1].width, 1.0);
}

// ── Vertical accumulation ─────────────────────────────────────────────────────

#[test]
fn test_vertical_cursor_equals_row_index_without_y_deltas() {
    let json = r#"[["A"], ["B"], ["C"], ["D"], ["E"]]"#;
    for (row_index, key) in resolve_json(json).iter().enumerate() {
        assert_eq!(key.y, row_index as f64, "row {row_index} baseline");
    }
}

#[test]
fn test_vertical_cursor_only_moves_by_explicit_y_delta_within_document() {
    let json = r#"[["A"], [{"y": 0.5}, "B"], ["C"]]"#;
    let keys = resolve_json(json);
    assert_eq!(keys[0].y, 0.0);
    assert_eq!(keys[1].y, 1.5);
    assert_eq!(keys[2].y, 2.5, "delta persists for the rest of the document");
}

// ── Idempotence ───────────────────────────────────────────────────────────────

#[test]
fn test_resolution_is_idempotent_by_value() {
    let json = r#"[
        [{"y": 0.25}, "Esc", {"x": 1, "w": 1.5}, "Tab"],
        ["Ctrl", {"x": 2.75}, "Space"]
    ]"#;
    let document = parse_document(json).unwrap();
    assert_eq!(resolve(&document), resolve(&document));
}

// ── End-to-end example from the format's documentation ────────────────────────

#[test]
fn test_escape_tab_row_resolves_to_documented_positions() {
    let keys = resolve_json(r#"[[{"y": 0.25}, "Esc", {"x": 1}, "Tab"]]"#);
    assert_eq!(keys.len(), 2);

    assert_eq!(keys[0].label, "Esc");
    assert_eq!((keys[0].x, keys[0].y), (0.0, 0.25));
    assert_eq!((keys[0].width, keys[0].height), (1.0, 1.0));

    // "Esc" advanced the cursor by 1u, then the x offset added another 1u.
    assert_eq!(keys[1].label, "Tab");
    assert_eq!((keys[1].x, keys[1].y), (2.0, 0.25));
    assert_eq!((keys[1].width, keys[1].height), (1.0, 1.0));
}

// ── Bounding box over resolved output ─────────────────────────────────────────

#[test]
fn test_bounding_box_over_resolved_keys_is_tight() {
    let keys = resolve_json(r#"[["A", "B"], [{"w": 1.5}, "C"]]"#);
    let bbox = BoundingBox::of(&keys).expect("nonempty layout has a bbox");
    assert_eq!(bbox.min_x, 0.0);
    assert_eq!(bbox.min_y, 0.0);
    assert_eq!(bbox.max_x, 2.0);
    assert_eq!(bbox.max_y, 2.0);
}

#[test]
fn test_margin_expansion_is_exact_for_any_nonempty_key_set() {
    let keys = resolve_json(r#"[[{"x": 0.5}, "A", "B"], ["C"]]"#);
    let bbox = BoundingBox::of(&keys).unwrap();
    let margin = 5.0;
    let expanded = bbox.expand(margin);
    assert_eq!(expanded.width(), bbox.width() + 2.0 * margin);
    assert_eq!(expanded.height(), bbox.height() + 2.0 * margin);
}
