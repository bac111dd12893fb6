//! # kle-place
//!
//! Footprint placement for KLE-Tools: maps each key of a resolved layout to a
//! physically-placed switch footprint on a PCB and moves that footprint to
//! the key's centroid.
//!
//! The board itself is an external collaborator — a CAD application owns it
//! and this crate only ever talks to it through the
//! [`infrastructure::board::BoardModel`] trait.  A host adapter (e.g. a CAD
//! scripting bridge) implements the trait against the live board; tests and
//! headless runs use the in-memory [`infrastructure::board::mock::MockBoard`].
//! No file is produced by this crate itself.

pub mod application;
pub mod infrastructure;

pub use application::place_footprints::{place_footprints, PlacementReport, PlacementSpec};
pub use infrastructure::board::{BoardError, BoardModel};
