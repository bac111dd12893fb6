//! Board-model abstraction.
//!
//! The PCB lives inside a CAD application; this tool never parses or writes
//! board files.  Everything it needs from the board is captured in the
//! [`BoardModel`] trait: find a footprint by its reference designator and
//! move it.
//!
//! # Testability
//!
//! The trait boundary allows unit tests to run against [`mock::MockBoard`]
//! without a CAD application installed, and lets a host adapter bind the same
//! placement logic to a live board session.

use thiserror::Error;

pub mod mock;

/// Error type for board operations.
#[derive(Debug, Error, PartialEq)]
pub enum BoardError {
    /// No footprint on the board carries the requested reference designator.
    ///
    /// Non-fatal by design: the layout may reference switches that have not
    /// been added to the schematic yet.
    #[error("no footprint with reference {0} on the board")]
    FootprintNotFound(String),
}

/// A mutable view of a physically-placed circuit board.
pub trait BoardModel {
    /// Moves the footprint identified by `reference` so its anchor sits at
    /// `(x_mm, y_mm)` in board sheet coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::FootprintNotFound`] when the reference does not
    /// exist on the board.  Implementations must not treat this as fatal.
    fn move_footprint(&mut self, reference: &str, x_mm: f64, y_mm: f64)
        -> Result<(), BoardError>;
}
