//! Document module containing the typed layout model and the JSON parser.

pub mod model;
pub mod parse;

pub use model::{Document, Row, StateUpdate, Token};
pub use parse::DocumentError;
