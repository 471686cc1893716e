//! One-shot pattern evaluation.
//!
//! [`evaluate`] runs the full pipeline synchronously: compile the
//! pattern, enumerate matches, and time the work. The result is a
//! self-contained snapshot carrying the inputs it was computed from,
//! so a consumer holding a result never needs to guess which edit it
//! belongs to.

use std::time::{Duration, Instant};

use super::export;
use super::flags::Flags;
use super::matches::{self, MatchSequence};
use super::pattern::CompiledMatcher;
use super::segment::{Segment, build_segments};
use crate::config::Limits;
use crate::error::{DevbeltError, Result};

/// Everything produced by one evaluation pass.
#[derive(Debug)]
pub struct EvaluationResult {
    /// The pattern that was evaluated.
    pub pattern: String,

    /// The flags the pattern was evaluated under.
    pub flags: Flags,

    /// The text that was searched.
    pub text: String,

    /// Matches in document order; empty on error.
    pub matches: MatchSequence,

    /// The compile or enumeration error, if any.
    pub error: Option<DevbeltError>,

    /// Wall-clock time spent compiling and enumerating.
    pub elapsed: Duration,

    /// Monotonic pass counter assigned by the scheduler; zero for
    /// direct calls.
    pub generation: u64,
}

impl EvaluationResult {
    /// Tile the text into segments for rendering.
    #[must_use]
    pub fn segments(&self) -> Vec<Segment> {
        build_segments(&self.text, &self.matches)
    }

    /// Check whether the pass completed without error.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Whether enumeration stopped at the match cap.
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        self.matches.truncated
    }

    /// Number of matches found.
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// The match list as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        export::matches_to_json(&self.matches)
    }

    /// The pattern and flags as a slash-delimited literal.
    #[must_use]
    pub fn literal(&self) -> String {
        export::pattern_literal(&self.pattern, self.flags)
    }
}

/// Evaluate `pattern` with `flags` against `text`.
///
/// An empty pattern short-circuits to an empty match list without
/// touching the compiler. A compile failure is reported through
/// [`EvaluationResult::error`] with the diagnostic verbatim; the match
/// list stays empty so the text renders as a single plain segment.
#[must_use]
pub fn evaluate(pattern: &str, flags: Flags, text: &str, limits: &Limits) -> EvaluationResult {
    let started = Instant::now();
    let (matches, error) = if pattern.is_empty() {
        (MatchSequence::default(), None)
    } else {
        match CompiledMatcher::compile(pattern, flags)
            .and_then(|mut matcher| matches::enumerate(&mut matcher, text, limits))
        {
            Ok(matches) => (matches, None),
            Err(err) => (MatchSequence::default(), Some(err)),
        }
    };

    EvaluationResult {
        pattern: pattern.to_string(),
        flags,
        text: text.to_string(),
        matches,
        error,
        elapsed: started.elapsed(),
        generation: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(pattern: &str, flags: &str, text: &str) -> EvaluationResult {
        evaluate(pattern, Flags::parse(flags).unwrap(), text, &Limits::default())
    }

    #[test]
    fn successful_evaluation() {
        let result = eval(r"\d+", "g", "a 12 b 345");
        assert!(result.is_ok());
        assert_eq!(result.match_count(), 2);
        assert_eq!(result.pattern, r"\d+");
        assert_eq!(result.text, "a 12 b 345");
        assert!(!result.is_truncated());
        assert_eq!(result.generation, 0);
    }

    #[test]
    fn empty_pattern_short_circuits() {
        let result = eval("", "g", "anything at all");
        assert!(result.is_ok());
        assert!(result.matches.is_empty());
        assert_eq!(
            result.segments(),
            [Segment::Plain("anything at all".to_string())]
        );
    }

    #[test]
    fn compile_error_is_carried_verbatim() {
        let diagnostic = regex::Regex::new("(abc").unwrap_err().to_string();
        let result = eval("(abc", "g", "abc");
        assert!(!result.is_ok());
        assert_eq!(result.error.as_ref().unwrap().to_string(), diagnostic);
        assert!(result.matches.is_empty());
    }

    #[test]
    fn error_result_renders_single_plain_segment() {
        let result = eval("(abc", "g", "some text");
        let segments = result.segments();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text(), "some text");
        assert!(!segments[0].is_matched());
    }

    #[test]
    fn truncation_is_not_an_error() {
        let limits = Limits::new().max_matches(2);
        let result = evaluate("a", Flags::GLOBAL, "aaaa", &limits);
        assert!(result.is_ok());
        assert!(result.is_truncated());
        assert_eq!(result.match_count(), 2);
    }

    #[test]
    fn empty_text_succeeds_with_no_matches() {
        let result = eval(r"\d+", "g", "");
        assert!(result.is_ok());
        assert!(result.matches.is_empty());
        assert!(result.segments().is_empty());
    }

    #[test]
    fn result_exports_json_and_literal() {
        let result = eval(r"\d+", "gi", "a 12");
        assert!(result.to_json().unwrap().contains("\"text\": \"12\""));
        assert_eq!(result.literal(), "/\\d+/gi");
    }
}
