//! # kle-core
//!
//! Shared library for KLE-Tools containing the layout document model, the
//! geometry resolver, and reference-designator extraction.
//!
//! This crate is used by both the plate generator and the footprint placer.
//! It has zero dependencies on file systems, CAD applications, or output
//! formats.
//!
//! # Architecture overview (for beginners)
//!
//! KLE-Tools turns a keyboard-layout-editor description (the JSON format
//! exported by keyboard-layout-editor.com, "KLE" for short) into physical
//! geometry for a custom keyboard build.  A KLE file is a list of rows, and
//! each row mixes two kinds of entries: bare strings (the key legends) and
//! little objects like `{"x": 0.5, "w": 2}` that nudge or resize whatever
//! key comes next.  The format is compact to write by hand but carries a lot
//! of implicit state, which is what this crate untangles.
//!
//! This crate (`kle-core`) is the shared foundation.  It defines:
//!
//! - **`document`** – How the loosely-typed JSON becomes typed Rust values.
//!   Every row entry is classified exactly once into a [`Token`]: either a
//!   [`StateUpdate`] (position/size adjustment) or a key label.
//!
//! - **`domain`** – Pure geometry logic with no I/O.  The most important
//!   piece is [`resolve`]: a left-to-right, top-to-bottom walk over the
//!   document that threads an explicit [`Cursor`] through every token and
//!   emits one [`ResolvedKey`] per key token.

pub mod document;
pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `kle_core::ResolvedKey` instead of `kle_core::domain::resolver::ResolvedKey`.
pub use document::model::{Document, Row, StateUpdate, Token};
pub use document::parse::DocumentError;
pub use domain::geometry::BoundingBox;
pub use domain::reference::extract_reference;
pub use domain::resolver::{resolve, Cursor, PhysicalKey, ResolvedKey};
