//! TOML-based configuration for footprint placement.
//!
//! The host adapter that drives a live board session loads this file to know
//! which layout to place and where on the sheet the layout origin sits:
//!
//! ```toml
//! input_path = "keyboard-layout.json"
//!
//! [placement]
//! unit_size_mm = 19.05
//! origin_x_mm = 50.0
//! origin_y_mm = 50.0
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::place_footprints::PlacementSpec;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level placement configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    /// Path of the layout JSON to place; the host adapter resolves it
    /// relative to the board project when relative.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_path: Option<PathBuf>,
    #[serde(default)]
    pub placement: PlacementSection,
}

/// Physical placement parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlacementSection {
    /// Pitch of one layout unit in millimeters.
    #[serde(default = "default_unit_size")]
    pub unit_size_mm: f64,
    /// X of the layout origin on the board sheet, in millimeters.
    #[serde(default = "default_origin")]
    pub origin_x_mm: f64,
    /// Y of the layout origin on the board sheet, in millimeters.
    #[serde(default = "default_origin")]
    pub origin_y_mm: f64,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_unit_size() -> f64 {
    19.05
}
fn default_origin() -> f64 {
    50.0
}

impl Default for PlacementSection {
    fn default() -> Self {
        Self {
            unit_size_mm: default_unit_size(),
            origin_x_mm: default_origin(),
            origin_y_mm: default_origin(),
        }
    }
}

impl From<&PlacementSection> for PlacementSpec {
    fn from(section: &PlacementSection) -> Self {
        Self {
            unit_size_mm: section.unit_size_mm,
            origin_x_mm: section.origin_x_mm,
            origin_y_mm: section.origin_y_mm,
        }
    }
}

// ── Config loading ────────────────────────────────────────────────────────────

/// Loads the configuration from `path`, returning `AppConfig::default()` if
/// the file does not yet exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let cfg: AppConfig = toml::from_str(&content)?;
            Ok(cfg)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
