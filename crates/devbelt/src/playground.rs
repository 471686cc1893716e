//! Live regex playground.
//!
//! This module provides the pattern evaluation pipeline: flag parsing,
//! pattern compilation, bounded match enumeration, and segment tiling
//! for display. [`evaluate`] runs the stages synchronously;
//! [`Playground`] wraps them in a debounced background worker that
//! publishes results over a watch channel.

pub mod cheatsheet;
pub mod presets;

mod evaluate;
mod export;
mod flags;
mod matches;
mod pattern;
mod render;
mod scheduler;
mod segment;

pub use evaluate::{EvaluationResult, evaluate};
pub use export::{matches_to_json, pattern_literal};
pub use flags::Flags;
pub use matches::{CaptureGroup, MatchRecord, MatchSequence, enumerate};
pub use pattern::CompiledMatcher;
pub use presets::{PRESETS, Preset};
pub use render::{EMPTY_MATCH_MARKER, render_ansi, render_plain};
pub use scheduler::{Playground, PlaygroundInput};
pub use segment::{Segment, build_segments};
