//! Pattern compilation.
//!
//! A pattern string plus [`Flags`] compiles into a [`CompiledMatcher`],
//! which owns the search cursor for one enumeration pass. Compilation
//! maps the JavaScript-style flags onto the host regex engine: `i`,
//! `m`, and `s` become builder options, `g` drives the enumeration
//! loop, and `u` is accepted as a no-op since the engine is always
//! Unicode-aware on `str` input.

use regex::{Captures, Regex, RegexBuilder};

use super::flags::Flags;
use crate::error::Result;

/// A compiled pattern with its enumeration cursor.
///
/// The cursor is byte-indexed and only ever lands on character
/// boundaries (or the out-of-range sentinel one past the end). A fresh
/// matcher starts at offset zero; use one matcher per evaluation pass.
#[derive(Debug, Clone)]
pub struct CompiledMatcher {
    /// The original pattern string.
    pattern: String,

    /// The flags the pattern was compiled with.
    flags: Flags,

    /// The compiled regex.
    regex: Regex,

    /// Next byte offset to search from.
    cursor: usize,
}

impl CompiledMatcher {
    /// Compile `pattern` under `flags`.
    pub fn compile(pattern: &str, flags: Flags) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(flags.contains(Flags::IGNORE_CASE))
            .multi_line(flags.contains(Flags::MULTILINE))
            .dot_matches_new_line(flags.contains(Flags::DOT_MATCHES_NEWLINE))
            .build()?;
        Ok(Self {
            pattern: pattern.to_string(),
            flags,
            regex,
            cursor: 0,
        })
    }

    /// Find the next match at or after the cursor, advancing the cursor
    /// past it.
    ///
    /// Returns `None` once the cursor has walked off the end of the
    /// text. A zero-width match advances the cursor by one character so
    /// enumeration always makes progress.
    pub fn next_match<'t>(&mut self, text: &'t str) -> Option<Captures<'t>> {
        if self.cursor > text.len() {
            return None;
        }
        let caps = self.regex.captures_at(text, self.cursor)?;
        let whole = caps.get(0)?;
        if whole.start() == whole.end() {
            // One character past the zero-width match; at the end of the
            // text this lands on the out-of-range sentinel.
            self.cursor = text[whole.end()..]
                .chars()
                .next()
                .map_or(text.len() + 1, |ch| whole.end() + ch.len_utf8());
        } else {
            self.cursor = whole.end();
        }
        Some(caps)
    }

    /// The original pattern string.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The flags the pattern was compiled with.
    #[must_use]
    pub const fn flags(&self) -> Flags {
        self.flags
    }

    /// Current cursor position in bytes.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Rewind the cursor to the start of the text.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}
