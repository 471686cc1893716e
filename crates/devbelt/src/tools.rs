//! Stateless developer micro-tools.
//!
//! Each submodule is a pure conversion: strings in, strings or
//! structured values out. Failures are error values, blank input
//! means "nothing to do", and nothing here keeps state between
//! calls.

pub mod base64;
pub mod cron;
pub mod json;
pub mod jwt;
pub mod markdown;
pub mod stats;
pub mod timestamp;

pub use cron::{CRON_PRESETS, CronPreset, CronSchedule};
pub use jwt::{Advisory, ClaimSummary, DecodedJwt, Severity};
pub use stats::TextStats;
pub use timestamp::Conversions;
