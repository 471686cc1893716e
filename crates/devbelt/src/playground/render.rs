//! Terminal rendering of match highlights.
//!
//! Segments render either with ANSI colors for a terminal or as plain
//! text with guillemets around matches. A zero-width match still gets
//! a visible highlight through [`EMPTY_MATCH_MARKER`].

use crossterm::style::Stylize;

use super::segment::Segment;

/// Marker rendered in place of a zero-width match.
pub const EMPTY_MATCH_MARKER: &str = "[empty]";

/// Render segments with ANSI colors, match text black on yellow.
#[must_use]
pub fn render_ansi(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Plain(text) => out.push_str(text),
            Segment::Matched(text) if text.is_empty() => {
                out.push_str(&EMPTY_MATCH_MARKER.black().on_yellow().to_string());
            }
            Segment::Matched(text) => {
                out.push_str(&text.as_str().black().on_yellow().to_string());
            }
        }
    }
    out
}

/// Render segments as plain text with `«»` around matches.
#[must_use]
pub fn render_plain(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Plain(text) => out.push_str(text),
            Segment::Matched(text) => {
                out.push('«');
                out.push_str(text);
                out.push('»');
            }
        }
    }
    out
}
