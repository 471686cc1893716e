//! Segment tiling for highlight rendering.
//!
//! [`build_segments`] cuts the text into an alternating sequence of
//! plain and matched pieces that concatenates back to the input byte
//! for byte. Zero-width matches become empty [`Segment::Matched`]
//! entries so frontends can still mark the position.

use super::matches::MatchSequence;

/// One piece of the tiled text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text outside any match.
    Plain(String),

    /// Text inside a match. Empty for a zero-width match.
    Matched(String),
}

impl Segment {
    /// The text of the segment regardless of kind.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) | Self::Matched(text) => text,
        }
    }

    /// Check whether this segment is part of a match.
    #[must_use]
    pub const fn is_matched(&self) -> bool {
        matches!(self, Self::Matched(_))
    }
}

/// Tile `text` into plain and matched segments.
///
/// Records must be in document order and non-overlapping, which is
/// what [`enumerate`](super::matches::enumerate) produces. Empty plain
/// gaps are skipped; zero-width matches are kept.
#[must_use]
pub fn build_segments(text: &str, matches: &MatchSequence) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(matches.len() * 2 + 1);
    let mut cursor = 0;
    for record in &matches.records {
        if record.start > cursor {
            segments.push(Segment::Plain(text[cursor..record.start].to_string()));
        }
        segments.push(Segment::Matched(text[record.start..record.end].to_string()));
        cursor = record.end;
    }
    if cursor < text.len() {
        segments.push(Segment::Plain(text[cursor..].to_string()));
    }
    segments
}
