//! TOML-based configuration for the plate generator.
//!
//! All physical parameters have sensible MX-switch defaults, so the tool runs
//! with no config file at all.  A config file only needs the fields it wants
//! to override:
//!
//! ```toml
//! [plate]
//! unit_size_mm = 19.05
//! hole_size_mm = 13.9   # tighter cutouts for side-loading plates
//! margin_mm = 7.5
//! draw_keycaps = false
//! ```
//!
//! # Serde default values
//!
//! Fields annotated with `#[serde(default = "some_fn")]` use the return value
//! of `some_fn()` when the field is absent from the TOML file.  This allows
//! the tool to work correctly with a partial config file and on first run
//! (before a config file exists).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::generate_plate::PlateSpec;

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

/// Top-level plate-generator configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub plate: PlateSection,
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Physical plate parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlateSection {
    /// Pitch of one layout unit in millimeters.
    #[serde(default = "default_unit_size")]
    pub unit_size_mm: f64,
    /// Switch cutout side length in millimeters.
    #[serde(default = "default_hole_size")]
    pub hole_size_mm: f64,
    /// Border around the layout bounding box in millimeters.
    #[serde(default = "default_margin")]
    pub margin_mm: f64,
    /// Whether to emit the keycap-outline verification layer.
    #[serde(default = "default_true")]
    pub draw_keycaps: bool,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_unit_size() -> f64 {
    19.05
}
fn default_hole_size() -> f64 {
    14.0
}
fn default_margin() -> f64 {
    5.0
}
fn default_true() -> bool {
    true
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            plate: PlateSection::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for PlateSection {
    fn default() -> Self {
        Self {
            unit_size_mm: default_unit_size(),
            hole_size_mm: default_hole_size(),
            margin_mm: default_margin(),
            draw_keycaps: default_true(),
        }
    }
}

impl From<&PlateSection> for PlateSpec {
    fn from(section: &PlateSection) -> Self {
        Self {
            unit_size_mm: section.unit_size_mm,
            hole_size_mm: section.hole_size_mm,
            margin_mm: section.margin_mm,
            draw_keycaps: section.draw_keycaps,
        }
    }
}

// ── Config loading ────────────────────────────────────────────────────────────

/// Loads the configuration from `path`, or returns `AppConfig::default()`
/// when no path is given or the file does not exist yet.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };

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
