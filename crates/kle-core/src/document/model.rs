//! Typed layout document model.
//!
//! KLE rows are loosely typed on disk: a row entry is either a JSON object
//! (a position/size adjustment) or a JSON string (a key legend).  The model
//! resolves that looseness exactly once, at parse time, into the [`Token`]
//! enum — downstream code never re-inspects JSON shapes.

/// A position/size adjustment carried by a JSON object inside a row.
///
/// All fields are optional; an object may carry any subset.  `x` and `y` are
/// deltas in layout units applied to the cursor, `w` and `h` replace the
/// pending key size consumed by the next key token.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StateUpdate {
    /// Horizontal offset in layout units, added to the row cursor.
    pub x: Option<f64>,
    /// Vertical offset in layout units, added to the running row baseline.
    pub y: Option<f64>,
    /// Width of the next key in layout units (replaces, not adds).
    pub w: Option<f64>,
    /// Height of the next key in layout units (replaces, not adds).
    pub h: Option<f64>,
}

impl StateUpdate {
    /// Returns `true` when the object carried none of the recognized fields.
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.w.is_none() && self.h.is_none()
    }
}

/// One entry of a row, classified at parse time.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A cursor adjustment that does not itself represent a physical key.
    StateUpdate(StateUpdate),
    /// A physical key, identified by its raw legend text.
    ///
    /// The legend may contain embedded newlines and decorative markup; see
    /// [`crate::domain::reference::extract_reference`] for pulling a
    /// reference designator out of the noise.
    Key(String),
}

/// An ordered sequence of tokens sharing one vertical baseline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    pub tokens: Vec<Token>,
}

/// An ordered sequence of rows — the whole layout.
///
/// Top-level metadata objects from the source JSON are already skipped by the
/// time a `Document` exists.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub rows: Vec<Row>,
}

impl Document {
    /// Counts the key tokens across all rows.
    ///
    /// The resolver emits exactly one [`crate::ResolvedKey`] per key token,
    /// so this is also the length of the resolved output.
    pub fn key_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| {
                row.tokens
                    .iter()
                    .filter(|t| matches!(t, Token::Key(_)))
                    .count()
            })
            .sum()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
