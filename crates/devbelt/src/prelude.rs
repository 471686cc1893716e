//! Convenient re-exports for common devbelt usage.
//!
//! This module provides a single import to access the evaluation
//! pipeline, its configuration, and the error type.
//!
//! # Example
//!
//! ```ignore
//! use devbelt::prelude::*;
//!
//! fn main() {
//!     let result = evaluate(r"\d+", Flags::GLOBAL, "a 12 b 345", &Limits::default());
//!     assert_eq!(result.match_count(), 2);
//! }
//! ```

// Configuration
pub use crate::config::{DEFAULT_DEBOUNCE, DEFAULT_MATCH_LIMIT, Limits, PlaygroundConfig};

// Error handling
pub use crate::error::{DevbeltError, Result};

// The evaluation pipeline
pub use crate::playground::{
    CaptureGroup, EvaluationResult, Flags, MatchRecord, MatchSequence, Playground,
    PlaygroundInput, Segment, build_segments, evaluate,
};

// Palette and shortcuts
pub use crate::palette::{ToolId, filter_tools};
pub use crate::shortcut::{Modifiers, PALETTE_SHORTCUT, Platform, Shortcut};
