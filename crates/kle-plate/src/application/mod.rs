//! Application layer use cases for the plate generator.
//!
//! # What is the "application" layer? (for beginners)
//!
//! In Clean Architecture the *application* layer sits between the domain
//! (pure geometry rules, living in `kle-core`) and the infrastructure
//! (file system, SVG text, configuration files).
//!
//! Use cases in this layer:
//!
//! - **Orchestrate** domain objects to fulfil a user goal (e.g., "turn this
//!   layout into a drilling/cutting drawing for a switch plate").
//! - **Contain no file system access and no output-format text** — the
//!   drawing they produce is plain geometry that `infrastructure::svg`
//!   serializes.
//!
//! # Sub-modules
//!
//! - **`generate_plate`** – Resolves the layout, scales it to millimeters,
//!   and assembles the outline, switch-hole, and keycap rectangles.

pub mod generate_plate;
