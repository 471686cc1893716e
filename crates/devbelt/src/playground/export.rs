//! Clipboard-ready exports.
//!
//! Two formats leave the playground: the match list as pretty-printed
//! JSON, and the pattern plus flags as a slash-delimited literal.

use super::flags::Flags;
use super::matches::MatchSequence;
use crate::error::Result;

/// Serialize `matches` as a pretty-printed JSON array.
///
/// Each element carries the byte span, matched text, and numbered
/// capture groups of one match.
pub fn matches_to_json(matches: &MatchSequence) -> Result<String> {
    Ok(serde_json::to_string_pretty(&matches.records)?)
}

/// Render `pattern` and `flags` as a slash-delimited regex literal,
/// e.g. `/\d+/gi`.
#[must_use]
pub fn pattern_literal(pattern: &str, flags: Flags) -> String {
    format!("/{pattern}/{flags}")
}
