//! Error types for devbelt.
//!
//! A single enum covers the regex playground and every micro-tool, so
//! callers can mix tools behind one `Result` alias. Conversions from the
//! underlying parser errors keep `?` usable at call sites. The regex
//! compiler diagnostic passes through verbatim, suitable for display
//! next to the pattern input.

use thiserror::Error;

/// The main error type for devbelt operations.
#[derive(Debug, Error)]
pub enum DevbeltError {
    /// The regex pattern failed to compile.
    #[error(transparent)]
    Pattern(#[from] regex::Error),

    /// A flag string contained a character outside `g`, `i`, `m`, `s`, `u`.
    #[error("unknown flag '{ch}' (valid flags are g, i, m, s, u)")]
    Flag {
        /// The offending character.
        ch: char,
    },

    /// Match enumeration aborted before reaching the end of the text.
    #[error("match enumeration stopped: {message}")]
    Enumeration {
        /// Description of why enumeration stopped.
        message: String,
    },

    /// JSON input could not be parsed.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Base64 input could not be decoded.
    #[error("invalid Base64 string: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Decoded bytes were not valid UTF-8.
    #[error("decoded bytes are not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// A JWT could not be decoded.
    #[error("invalid JWT: {reason}")]
    Jwt {
        /// Description of what is wrong with the token.
        reason: String,
    },

    /// A cron expression could not be parsed.
    #[error("invalid cron expression: {reason}")]
    Cron {
        /// Description of what is wrong with the expression.
        reason: String,
    },

    /// A timestamp or date string could not be interpreted.
    #[error("invalid date format: '{input}'")]
    Timestamp {
        /// The input that could not be interpreted.
        input: String,
    },
}

/// Result type alias for devbelt operations.
pub type Result<T> = std::result::Result<T, DevbeltError>;

impl DevbeltError {
    /// Create an unknown flag error.
    #[must_use]
    pub const fn flag(ch: char) -> Self {
        Self::Flag { ch }
    }

    /// Create an enumeration error.
    pub fn enumeration(message: impl Into<String>) -> Self {
        Self::Enumeration {
            message: message.into(),
        }
    }

    /// Create a JWT error.
    pub fn jwt(reason: impl Into<String>) -> Self {
        Self::Jwt {
            reason: reason.into(),
        }
    }

    /// Create a cron error.
    pub fn cron(reason: impl Into<String>) -> Self {
        Self::Cron {
            reason: reason.into(),
        }
    }

    /// Create a timestamp error.
    pub fn timestamp(input: impl Into<String>) -> Self {
        Self::Timestamp {
            input: input.into(),
        }
    }

    /// Check if this is a pattern compilation error.
    #[must_use]
    pub const fn is_pattern(&self) -> bool {
        matches!(self, Self::Pattern(_))
    }

    /// Check if this is an enumeration error.
    #[must_use]
    pub const fn is_enumeration(&self) -> bool {
        matches!(self, Self::Enumeration { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_error_passes_diagnostic_through() {
        let compile_err = regex::Regex::new("(unclosed").unwrap_err();
        let diagnostic = compile_err.to_string();
        let err = DevbeltError::from(compile_err);
        assert_eq!(err.to_string(), diagnostic);
        assert!(err.is_pattern());
    }

    #[test]
    fn flag_error_display() {
        let err = DevbeltError::flag('x');
        let msg = err.to_string();
        assert!(msg.contains("'x'"));
        assert!(msg.contains("g, i, m, s, u"));
    }

    #[test]
    fn enumeration_error_display() {
        let err = DevbeltError::enumeration("search cursor failed to advance");
        assert!(err.is_enumeration());
        assert!(err.to_string().contains("cursor failed to advance"));
    }

    #[test]
    fn json_error_display() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = DevbeltError::from(parse_err);
        assert!(err.to_string().starts_with("invalid JSON:"));
    }

    #[test]
    fn jwt_error_display() {
        let err = DevbeltError::jwt("expected 3 segments, found 2");
        assert!(err.to_string().contains("expected 3 segments"));
    }

    #[test]
    fn cron_error_display() {
        let err = DevbeltError::cron("expected 5 fields, found 3");
        let msg = err.to_string();
        assert!(msg.contains("invalid cron expression"));
        assert!(msg.contains("5 fields"));
    }

    #[test]
    fn timestamp_error_display() {
        let err = DevbeltError::timestamp("not-a-date");
        assert!(err.to_string().contains("'not-a-date'"));
    }

    #[test]
    fn predicates_do_not_overlap() {
        let err = DevbeltError::cron("bad");
        assert!(!err.is_pattern());
        assert!(!err.is_enumeration());
    }
}
