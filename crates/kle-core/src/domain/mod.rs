//! Domain logic for KLE-Tools.
//!
//! This module contains pure geometry computation with no infrastructure
//! dependencies.
//!
//! # What is "domain" in Clean Architecture? (for beginners)
//!
//! Clean Architecture organises code into concentric layers.  The innermost
//! layer is called the **domain** (or "entities" layer).  Domain code:
//!
//! - Contains the core business rules of the application.
//! - Has **no** imports from file systems, CAD APIs, or output serializers.
//! - Can be compiled and tested on any platform without any external setup.
//! - Defines the data types and operations that make the system uniquely what
//!   it is: in this case, turning a token stream with implicit positional
//!   state into explicit per-key geometry.
//!
//! Code in outer layers (the SVG writer, the board adapter, the CLI) depends
//! on the domain, but the domain never depends on them.  This makes the
//! resolver easy to unit-test in isolation.

/// The layout resolver — the core domain operation.
///
/// See [`resolver::resolve`] for the main entry point.
pub mod resolver;

/// Bounding boxes and unit-to-millimeter scaling shared by both sinks.
pub mod geometry;

/// Reference-designator extraction from key legends.
pub mod reference;
