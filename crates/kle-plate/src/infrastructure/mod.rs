//! Infrastructure adapters for the plate generator: SVG text serialization
//! and TOML configuration storage.

pub mod storage;
pub mod svg;
