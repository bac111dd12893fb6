//! Parser from KLE JSON text to the typed [`Document`] model.
//!
//! The KLE export format is deliberately permissive, so parsing is split in
//! two stages with very different failure behavior:
//!
//! 1. **JSON syntax** – `serde_json` must be able to read the text at all.
//!    A syntax error aborts the whole run ([`DocumentError::Json`]).
//! 2. **Shape classification** – once a `serde_json::Value` exists, nothing
//!    can fail.  Entries that are not rows (the top-level metadata object KLE
//!    writes first), row entries that are neither objects nor strings, and
//!    object fields of unrecognized names or wrong types are all skipped
//!    silently.  This mirrors how the format is consumed in practice: tools
//!    only understand a subset of KLE and ignore the rest.

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::document::model::{Document, Row, StateUpdate, Token};

/// Error type for reading a layout document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The text was not valid JSON.
    #[error("failed to parse layout JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The top level of the JSON was not an array of rows.
    #[error("layout JSON top level must be an array, got {0}")]
    NotAnArray(&'static str),
}

/// Parses layout JSON text into a [`Document`].
///
/// # Errors
///
/// Returns [`DocumentError::Json`] when the text is not valid JSON and
/// [`DocumentError::NotAnArray`] when the top level is not a JSON array.
/// Everything below the top level is tolerated via best-effort skipping.
pub fn parse_document(json: &str) -> Result<Document, DocumentError> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Array(entries) = value else {
        return Err(DocumentError::NotAnArray(json_type_name(&value)));
    };

    let mut rows = Vec::new();
    for entry in &entries {
        // Top-level non-array entries are KLE metadata (title, author, ...).
        if let Value::Array(items) = entry {
            rows.push(parse_row(items));
        } else {
            debug!("skipping non-row top-level entry ({})", json_type_name(entry));
        }
    }
    Ok(Document { rows })
}

/// Classifies the entries of one row into [`Token`]s.
fn parse_row(items: &[Value]) -> Row {
    let mut tokens = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::Object(fields) => {
                let update = StateUpdate {
                    x: field_f64(fields, "x"),
                    y: field_f64(fields, "y"),
                    w: field_f64(fields, "w"),
                    h: field_f64(fields, "h"),
                };
                tokens.push(Token::StateUpdate(update));
            }
            Value::String(label) => tokens.push(Token::Key(label.clone())),
            // Anything else inside a row is noise.
            _ => {}
        }
    }
    Row { tokens }
}

/// Reads a numeric field, ignoring it when absent or of the wrong type.
fn field_f64(fields: &serde_json::Map<String, Value>, name: &str) -> Option<f64> {
    fields.get(name).and_then(Value::as_f64)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
