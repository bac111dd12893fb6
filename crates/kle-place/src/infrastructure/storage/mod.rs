//! Persistence adapters for footprint placement (TOML configuration).

pub mod config;
