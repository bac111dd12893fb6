//! Bounding-box computation over resolved keys.
//!
//! Both sinks need the extent of the layout: the plate drawing sizes its
//! outline to the bounding box plus a margin, and a board layout review wants
//! the overall footprint.  The box is axis-aligned; the format has no
//! rotation support.

use crate::domain::resolver::ResolvedKey;

/// An axis-aligned rectangle spanning a set of keys.
///
/// Units are whatever the inputs carried — layout units or millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Computes the tight bounding box over `keys`, or `None` when the set is
    /// empty (an empty layout has no meaningful extent).
    pub fn of(keys: &[ResolvedKey]) -> Option<Self> {
        let first = keys.first()?;
        let mut bbox = Self {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x + first.width,
            max_y: first.y + first.height,
        };
        for key in &keys[1..] {
            bbox.min_x = bbox.min_x.min(key.x);
            bbox.min_y = bbox.min_y.min(key.y);
            bbox.max_x = bbox.max_x.max(key.x + key.width);
            bbox.max_y = bbox.max_y.max(key.y + key.height);
        }
        Some(bbox)
    }

    /// Total width of the box.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Total height of the box.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Grows the box by `margin` on all four sides.
    pub fn expand(&self, margin: f64) -> Self {
        Self {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }

    /// Scales all coordinates by `factor` (layout units → millimeters).
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            min_x: self.min_x * factor,
            min_y: self.min_y * factor,
            max_x: self.max_x * factor,
            max_y: self.max_y * factor,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
