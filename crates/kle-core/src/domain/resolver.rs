//! Layout resolver: from token stream to absolute per-key geometry.
//!
//! The KLE format threads implicit state across tokens — a `{"x": 1}` object
//! shifts every key that follows it in the row, a `{"w": 2}` object resizes
//! only the next key.  The resolver makes that state explicit in a [`Cursor`]
//! value that is created per document, threaded through the walk, and never
//! observable from outside, which keeps [`resolve`] a pure function.
//!
//! # Offset semantics
//!
//! An `x`/`y` field **adds** to the row cursor and persists for the rest of
//! the row (and, for `y`, for the rest of the document).  A `w`/`h` field
//! **replaces** the pending key size and is consumed by the next key token,
//! after which the size snaps back to the default 1u × 1u.

use crate::document::model::{Document, StateUpdate, Token};

/// The positional state threaded through the document walk.
///
/// Exposed publicly so tests and callers can drive the resolver one token at
/// a time, but [`resolve`] is the intended entry point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    /// Horizontal position in layout units; resets to 0 at each row start.
    pub x: f64,
    /// Vertical position in layout units; carries across rows, never resets.
    pub y: f64,
    /// Width consumed by the next key token.
    pub pending_w: f64,
    /// Height consumed by the next key token.
    pub pending_h: f64,
}

impl Cursor {
    /// Creates a cursor at the document origin with the default 1u key size.
    pub fn new() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            pending_w: 1.0,
            pending_h: 1.0,
        }
    }

    /// Begins a new row: the horizontal cursor and pending size reset, the
    /// vertical cursor carries over from the previous row's final value.
    pub fn start_row(&mut self) {
        self.x = 0.0;
        self.pending_w = 1.0;
        self.pending_h = 1.0;
    }

    /// Merges a state-update token into the cursor.
    ///
    /// Offsets add, sizes replace.
    pub fn apply(&mut self, update: &StateUpdate) {
        if let Some(dx) = update.x {
            self.x += dx;
        }
        if let Some(dy) = update.y {
            self.y += dy;
        }
        if let Some(w) = update.w {
            self.pending_w = w;
        }
        if let Some(h) = update.h {
            self.pending_h = h;
        }
    }

    /// Consumes one key token: emits the key at the current position, advances
    /// the horizontal cursor by the consumed width, and resets the pending
    /// size to the default.
    pub fn consume_key(&mut self, label: &str) -> ResolvedKey {
        let key = ResolvedKey {
            label: label.to_string(),
            x: self.x,
            y: self.y,
            width: self.pending_w,
            height: self.pending_h,
        };
        self.x += self.pending_w;
        self.pending_w = 1.0;
        self.pending_h = 1.0;
        key
    }

    /// Ends the current row: the vertical cursor advances by exactly one
    /// unit, independent of any `h` values seen in the row.
    pub fn end_row(&mut self) {
        self.y += 1.0;
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

/// Fully computed geometry for one physical key, in layout units.
///
/// Coordinates are the top-left corner of the key footprint.  Keys are
/// produced in strict document order; order is semantically meaningful (it
/// determines default positions and reference-number inference downstream).
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedKey {
    /// Raw legend text from the document, decorative markup included.
    pub label: String,
    /// Top-left X in layout units.
    pub x: f64,
    /// Top-left Y in layout units.
    pub y: f64,
    /// Width in layout units.
    pub width: f64,
    /// Height in layout units.
    pub height: f64,
}

impl ResolvedKey {
    /// Horizontal centroid in layout units.
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Vertical centroid in layout units.
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Scales this key into physical millimeters.
    ///
    /// `unit_size_mm` is the pitch of one layout unit (19.05 mm for MX-style
    /// switches).
    pub fn to_physical(&self, unit_size_mm: f64) -> PhysicalKey {
        PhysicalKey {
            label: self.label.clone(),
            x_mm: self.x * unit_size_mm,
            y_mm: self.y * unit_size_mm,
            width_mm: self.width * unit_size_mm,
            height_mm: self.height * unit_size_mm,
            center_x_mm: self.center_x() * unit_size_mm,
            center_y_mm: self.center_y() * unit_size_mm,
        }
    }
}

/// A [`ResolvedKey`] scaled into millimeters.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalKey {
    pub label: String,
    pub x_mm: f64,
    pub y_mm: f64,
    pub width_mm: f64,
    pub height_mm: f64,
    pub center_x_mm: f64,
    pub center_y_mm: f64,
}

/// Resolves a document into the ordered sequence of key geometries.
///
/// Pure function: no I/O, no shared state, identical output for identical
/// input.  An empty document yields an empty vector.  The output length
/// always equals [`Document::key_count`].
pub fn resolve(document: &Document) -> Vec<ResolvedKey> {
    let mut cursor = Cursor::new();
    let mut keys = Vec::with_capacity(document.key_count());

    for row in &document.rows {
        cursor.start_row();
        for token in &row.tokens {
            match token {
                Token::StateUpdate(update) => cursor.apply(update),
                Token::Key(label) => keys.push(cursor.consume_key(label)),
            }
        }
        cursor.end_row();
    }
    keys
}

// ── Tests ─────────────────────────────────────────────────────────────────────
