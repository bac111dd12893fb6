//! Reference-designator extraction from key legends.
//!
//! A KLE legend is display text: it can hold multiple lines ("!\n1"), icon
//! markup, or nothing at all.  When a layout doubles as a PCB placement
//! source, the convention is to embed the switch footprint's reference
//! designator somewhere in the legend, e.g. `"Esc\n\nSW0"`.
//!
//! The pattern is fixed: the literal prefix `SW` followed by one to three
//! ASCII digits, i.e. `SW0` through `SW999`.  Extraction lives here as one
//! named function rather than ad-hoc matching at call sites, so the pattern
//! has exactly one definition.

use once_cell::sync::Lazy;
use regex::Regex;

/// `SW` + 1–3 digits, anywhere in the legend text.
static REFERENCE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"SW[0-9]{1,3}").expect("reference pattern must compile"));

/// Extracts the first switch reference designator from a key legend.
///
/// Returns `None` when the legend carries no designator — common for purely
/// decorative layouts that are only ever rendered, never placed.
///
/// # Examples
///
/// ```rust
/// use kle_core::extract_reference;
///
/// assert_eq!(extract_reference("Esc\n\nSW0"), Some("SW0".to_string()));
/// assert_eq!(extract_reference("SW123"), Some("SW123".to_string()));
/// assert_eq!(extract_reference("Enter"), None);
/// ```
pub fn extract_reference(label: &str) -> Option<String> {
    REFERENCE_PATTERN
        .find(label)
        .map(|m| m.as_str().to_string())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
