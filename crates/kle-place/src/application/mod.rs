//! Application layer use cases for footprint placement.
//!
//! One use case lives here: **`place_footprints`**, which walks the resolved
//! layout geometry and moves each referenced footprint on the board.  It
//! depends on the [`crate::infrastructure::board::BoardModel`] trait rather
//! than any concrete CAD binding, so the same logic drives a live board
//! session and the in-memory mock used in tests.

pub mod place_footprints;
