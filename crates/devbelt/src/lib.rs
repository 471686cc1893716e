//! devbelt: Local-first developer toolbelt with a live regex playground
//!
//! This crate bundles the conversion utilities behind a set of developer
//! micro-tools. Its core is a debounced regex evaluation pipeline; around
//! it sit stateless converters for JSON, Base64, timestamps, JWTs, cron
//! expressions, and Markdown, plus the command-palette helpers that tie
//! the tools together.
//!
//! # Features
//!
//! - **Live evaluation sessions** debounced on the Tokio runtime
//! - **Bounded match enumeration** over the `regex` crate, safe for
//!   zero-width patterns
//! - **Lossless segment tiling** for match highlighting
//! - **Micro-tools** for JSON, Base64, timestamps, JWT, cron, and
//!   Markdown
//! - **Command palette** filtering and keyboard-shortcut matching
//!
//! # Example
//!
//! ```ignore
//! use devbelt::prelude::*;
//!
//! fn main() {
//!     let limits = Limits::default();
//!     let result = evaluate(r"[a-z]+@[a-z.]+", Flags::GLOBAL, "mail dev@example.com", &limits);
//!     println!("{} match(es) in {:?}", result.match_count(), result.elapsed);
//! }
//! ```

// Core types
pub mod config;
pub mod error;
pub mod prelude;

// The regex playground engine
pub mod playground;

// Shell support
pub mod palette;
pub mod shortcut;

// Stateless micro-tools
pub mod tools;

pub use config::{DEFAULT_DEBOUNCE, DEFAULT_MATCH_LIMIT, Limits, PlaygroundConfig};
pub use error::{DevbeltError, Result};
pub use palette::{ToolId, ToolInfo, filter_tools};
pub use playground::{
    CaptureGroup, CompiledMatcher, EMPTY_MATCH_MARKER, EvaluationResult, Flags, MatchRecord,
    MatchSequence, PRESETS, Playground, PlaygroundInput, Preset, Segment, build_segments,
    enumerate, evaluate, matches_to_json, pattern_literal, render_ansi, render_plain,
};
pub use shortcut::{Modifiers, PALETTE_SHORTCUT, Platform, Shortcut};
pub use tools::{
    Advisory, CRON_PRESETS, ClaimSummary, Conversions, CronPreset, CronSchedule, DecodedJwt,
    Severity, TextStats,
};
