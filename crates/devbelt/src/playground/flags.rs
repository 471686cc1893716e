//! JavaScript-style regex flag strings.
//!
//! Patterns travel with a compact flag string such as `"gim"`. Each
//! character toggles one behavior; order and repetition do not matter
//! on input, and [`Display`](std::fmt::Display) always renders the
//! canonical `gimsu` order.

use std::fmt;
use std::str::FromStr;

use crate::error::{DevbeltError, Result};

bitflags::bitflags! {
    /// Behavior toggles for a pattern, one per flag character.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Flags: u8 {
        /// `g`: enumerate every non-overlapping match instead of the first.
        const GLOBAL = 0b0000_0001;
        /// `i`: case-insensitive matching.
        const IGNORE_CASE = 0b0000_0010;
        /// `m`: `^` and `$` also match at line boundaries.
        const MULTILINE = 0b0000_0100;
        /// `s`: `.` also matches newlines.
        const DOT_MATCHES_NEWLINE = 0b0000_1000;
        /// `u`: accepted for JavaScript familiarity; matching is always Unicode-aware.
        const UNICODE = 0b0001_0000;
    }
}

impl Flags {
    /// Parse a flag string such as `"gim"`.
    ///
    /// Repeated characters are idempotent. Any character outside
    /// `g`, `i`, `m`, `s`, `u` is an error.
    pub fn parse(input: &str) -> Result<Self> {
        let mut flags = Self::empty();
        for ch in input.chars() {
            flags |= match ch {
                'g' => Self::GLOBAL,
                'i' => Self::IGNORE_CASE,
                'm' => Self::MULTILINE,
                's' => Self::DOT_MATCHES_NEWLINE,
                'u' => Self::UNICODE,
                _ => return Err(DevbeltError::flag(ch)),
            };
        }
        Ok(flags)
    }

    /// Check whether every match should be enumerated.
    #[must_use]
    pub const fn is_global(&self) -> bool {
        self.contains(Self::GLOBAL)
    }
}

impl FromStr for Flags {
    type Err = DevbeltError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (flag, ch) in [
            (Self::GLOBAL, 'g'),
            (Self::IGNORE_CASE, 'i'),
            (Self::MULTILINE, 'm'),
            (Self::DOT_MATCHES_NEWLINE, 's'),
            (Self::UNICODE, 'u'),
        ] {
            if self.contains(flag) {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
