//! PlaceFootprintsUseCase: moves switch footprints to their layout positions.
//!
//! For every resolved key whose legend carries an extractable reference
//! designator (see [`kle_core::extract_reference`]), the use case computes
//! the key centroid in millimeters, offsets it by the board origin, and asks
//! the board to move the matching footprint there.
//!
//! Lookup failures are deliberately non-fatal: a layout often references
//! switches that have not been added to the schematic yet, and one missing
//! footprint must not abandon the placement of a hundred others.  Misses are
//! logged per key and reported in the returned [`PlacementReport`].

use kle_core::{extract_reference, resolve, Document};
use tracing::{debug, info, warn};

use crate::infrastructure::board::{BoardError, BoardModel};

/// Physical placement parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementSpec {
    /// Pitch of one layout unit (19.05 mm for MX-style switches).
    pub unit_size_mm: f64,
    /// X of the layout origin on the board sheet, in millimeters.
    pub origin_x_mm: f64,
    /// Y of the layout origin on the board sheet, in millimeters.
    pub origin_y_mm: f64,
}

impl Default for PlacementSpec {
    fn default() -> Self {
        // The 50 mm inset keeps the layout clear of the sheet border.
        Self {
            unit_size_mm: 19.05,
            origin_x_mm: 50.0,
            origin_y_mm: 50.0,
        }
    }
}

/// Outcome summary of one placement run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlacementReport {
    /// Footprints successfully moved.
    pub placed: usize,
    /// Keys whose legend carried no reference designator (decorative keys).
    pub skipped_no_reference: usize,
    /// References that were extracted but matched no footprint on the board.
    pub missing: Vec<String>,
}

/// Places every referenced footprint of `document` onto `board`.
///
/// Keys are processed in document order, so stacked footprints sharing one
/// placement directive land side by side exactly as resolved.  The function
/// never fails: per-key problems are reported, not raised.
pub fn place_footprints(
    document: &Document,
    spec: &PlacementSpec,
    board: &mut dyn BoardModel,
) -> PlacementReport {
    let mut report = PlacementReport::default();

    for key in resolve(document) {
        let Some(reference) = extract_reference(&key.label) else {
            debug!("key {:?} carries no reference designator; skipped", key.label);
            report.skipped_no_reference += 1;
            continue;
        };

        let physical = key.to_physical(spec.unit_size_mm);
        let x_mm = physical.center_x_mm + spec.origin_x_mm;
        let y_mm = physical.center_y_mm + spec.origin_y_mm;

        match board.move_footprint(&reference, x_mm, y_mm) {
            Ok(()) => {
                debug!("placed {reference} at ({x_mm:.2}, {y_mm:.2}) mm");
                report.placed += 1;
            }
            Err(BoardError::FootprintNotFound(_)) => {
                warn!("{reference} not found on the board; skipping key {:?}", key.label);
                report.missing.push(reference);
            }
        }
    }

    info!(
        "placement finished: {} placed, {} without reference, {} missing",
        report.placed,
        report.skipped_no_reference,
        report.missing.len()
    );
    report
}

// ── Tests ─────────────────────────────────────────────────────────────────────
