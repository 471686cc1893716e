//! Match records and bounded enumeration.
//!
//! [`enumerate`] drives a [`CompiledMatcher`] over the text and
//! collects [`MatchRecord`]s in document order. Enumeration is bounded
//! by [`Limits::max_matches`]; hitting the cap is a qualified success
//! reported through [`MatchSequence::truncated`], not an error.

use regex::Captures;
use serde::Serialize;

use super::pattern::CompiledMatcher;
use crate::config::Limits;
use crate::error::{DevbeltError, Result};

/// One numbered capture group inside a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaptureGroup {
    /// 1-based group index.
    pub index: usize,

    /// Captured text, empty if the group did not participate.
    pub text: String,
}

/// A single match with its byte span and capture groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    /// Byte offset where the match starts.
    pub start: usize,

    /// Byte offset one past the end of the match.
    pub end: usize,

    /// The matched text.
    pub text: String,

    /// Numbered capture groups in index order.
    pub groups: Vec<CaptureGroup>,
}

impl MatchRecord {
    /// Build a record from one set of captures.
    fn from_captures(caps: &Captures<'_>) -> Option<Self> {
        let whole = caps.get(0)?;
        let groups = caps
            .iter()
            .skip(1)
            .enumerate()
            .map(|(i, group)| CaptureGroup {
                index: i + 1,
                text: group.map_or_else(String::new, |m| m.as_str().to_string()),
            })
            .collect();
        Some(Self {
            start: whole.start(),
            end: whole.end(),
            text: whole.as_str().to_string(),
            groups,
        })
    }

    /// Length of the match in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check whether the match is zero-width.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Get a capture group's text by 1-based index.
    #[must_use]
    pub fn group(&self, index: usize) -> Option<&str> {
        self.groups
            .iter()
            .find(|group| group.index == index)
            .map(|group| group.text.as_str())
    }
}

/// All matches from one enumeration pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSequence {
    /// Matches in document order.
    pub records: Vec<MatchRecord>,

    /// Whether enumeration stopped at the match cap with a further
    /// match still in the text.
    pub truncated: bool,
}

impl MatchSequence {
    /// Number of matches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether no matches were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Enumerate matches for `matcher` over `text`, bounded by `limits`.
///
/// With [`Flags::GLOBAL`](super::flags::Flags::GLOBAL) every
/// non-overlapping match is collected in document order; otherwise only
/// the first match is attempted. The sequence is marked truncated only
/// when the cap is full and at least one further match exists.
pub fn enumerate(
    matcher: &mut CompiledMatcher,
    text: &str,
    limits: &Limits,
) -> Result<MatchSequence> {
    let mut sequence = MatchSequence::default();

    if !matcher.flags().is_global() {
        if let Some(record) = matcher
            .next_match(text)
            .and_then(|caps| MatchRecord::from_captures(&caps))
        {
            sequence.records.push(record);
        }
        return Ok(sequence);
    }

    loop {
        let before = matcher.cursor();
        let Some(caps) = matcher.next_match(text) else {
            break;
        };
        if matcher.cursor() <= before {
            return Err(DevbeltError::enumeration("search cursor failed to advance"));
        }
        let Some(record) = MatchRecord::from_captures(&caps) else {
            break;
        };
        if sequence.records.len() == limits.max_matches {
            // The cap is already full and a further match exists.
            sequence.truncated = true;
            break;
        }
        sequence.records.push(record);
    }

    Ok(sequence)
}
