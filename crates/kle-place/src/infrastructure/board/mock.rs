//! Mock board model for unit testing.
//!
//! # Why a mock board?
//!
//! A real board model lives inside a CAD application session that:
//!
//! - Requires the CAD application to be installed and a project open.
//! - Actually moves copper and silkscreen on the user's design.
//! - Cannot be observed directly from Rust test code.
//!
//! The `MockBoard` replaces the CAD session with in-memory recording.  Each
//! successful move is pushed into a `Vec` so test assertions can inspect
//! exactly which footprints were moved, where, and in what order.
//!
//! # Usage in tests
//!
//! ```rust
//! use kle_place::infrastructure::board::mock::MockBoard;
//! use kle_place::BoardModel;
//!
//! let mut board = MockBoard::with_references(["SW0", "SW1"]);
//! board.move_footprint("SW0", 50.0, 69.05).unwrap();
//!
//! assert_eq!(board.position_of("SW0"), Some((50.0, 69.05)));
//! assert!(board.move_footprint("SW99", 0.0, 0.0).is_err());
//! ```

use std::collections::HashSet;

use super::{BoardError, BoardModel};

/// A board that records moves without a CAD application.
#[derive(Debug, Default)]
pub struct MockBoard {
    /// References that exist on the board; moves to anything else fail.
    known_references: HashSet<String>,
    /// Every successful `(reference, x_mm, y_mm)` move, in call order.
    pub moves: Vec<(String, f64, f64)>,
}

impl MockBoard {
    /// Creates a board populated with the given footprint references.
    pub fn with_references<I, S>(references: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known_references: references.into_iter().map(Into::into).collect(),
            moves: Vec::new(),
        }
    }

    /// Returns the most recent position of `reference`, if it was ever moved.
    pub fn position_of(&self, reference: &str) -> Option<(f64, f64)> {
        self.moves
            .iter()
            .rev()
            .find(|(r, _, _)| r == reference)
            .map(|(_, x, y)| (*x, *y))
    }
}

impl BoardModel for MockBoard {
    fn move_footprint(
        &mut self,
        reference: &str,
        x_mm: f64,
        y_mm: f64,
    ) -> Result<(), BoardError> {
        if !self.known_references.contains(reference) {
            return Err(BoardError::FootprintNotFound(reference.to_string()));
        }
        self.moves.push((reference.to_string(), x_mm, y_mm));
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_of_known_reference_is_recorded() {
        let mut board = MockBoard::with_references(["SW0"]);
        board.move_footprint("SW0", 10.0, 20.0).unwrap();
        assert_eq!(board.moves, vec![("SW0".to_string(), 10.0, 20.0)]);
    }

    #[test]
    fn test_move_of_unknown_reference_fails_and_records_nothing() {
        let mut board = MockBoard::with_references(["SW0"]);
        let result = board.move_footprint("SW7", 0.0, 0.0);
        assert_eq!(result, Err(BoardError::FootprintNotFound("SW7".to_string())));
        assert!(board.moves.is_empty());
    }

    #[test]
    fn test_position_of_reports_latest_move() {
        let mut board = MockBoard::with_references(["SW0"]);
        board.move_footprint("SW0", 1.0, 1.0).unwrap();
        board.move_footprint("SW0", 2.0, 3.0).unwrap();
        assert_eq!(board.position_of("SW0"), Some((2.0, 3.0)));
    }

    #[test]
    fn test_position_of_unmoved_reference_is_none() {
        let board = MockBoard::with_references(["SW0"]);
        assert_eq!(board.position_of("SW0"), None);
    }
}
