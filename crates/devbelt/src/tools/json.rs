//! JSON formatting and minification.
//!
//! Thin wrappers over `serde_json` that keep object keys in document
//! order. Parse failures carry the parser's own diagnostic, with line
//! and column, through the `Json` error variant.

use serde_json::Value;

use crate::error::Result;

/// Pretty-print a JSON document with two-space indentation.
///
/// Blank input yields an empty string.
pub fn format(input: &str) -> Result<String> {
    if input.trim().is_empty() {
        return Ok(String::new());
    }
    let value: Value = serde_json::from_str(input)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Collapse a JSON document onto a single line.
///
/// Blank input yields an empty string.
pub fn minify(input: &str) -> Result<String> {
    if input.trim().is_empty() {
        return Ok(String::new());
    }
    let value: Value = serde_json::from_str(input)?;
    Ok(serde_json::to_string(&value)?)
}
