//! Infrastructure adapters for footprint placement: the board-model
//! abstraction and TOML configuration storage.

pub mod board;
pub mod storage;
