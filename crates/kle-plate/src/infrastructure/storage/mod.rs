//! Persistence adapters for the plate generator (TOML configuration).

pub mod config;
