//! Configuration types for devbelt.
//!
//! This module defines the tunable knobs of the playground scheduler:
//! how long edits are debounced before an evaluation pass runs, and how
//! many matches a single pass may enumerate.

use std::time::Duration;

/// Default debounce window between the last edit and the evaluation pass.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

/// Default cap on the number of matches enumerated in one pass.
pub const DEFAULT_MATCH_LIMIT: usize = 10_000;

/// Limits applied to a single evaluation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of matches kept before enumeration stops.
    pub max_matches: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_matches: DEFAULT_MATCH_LIMIT,
        }
    }
}

impl Limits {
    /// Create limits with the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of matches kept per pass.
    #[must_use]
    pub const fn max_matches(mut self, max_matches: usize) -> Self {
        self.max_matches = max_matches;
        self
    }
}

/// Configuration for the playground scheduler.
#[derive(Debug, Clone)]
pub struct PlaygroundConfig {
    /// Debounce window between the last edit and the evaluation pass.
    pub debounce: Duration,

    /// Limits applied to each evaluation pass.
    pub limits: Limits,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            limits: Limits::default(),
        }
    }
}

impl PlaygroundConfig {
    /// Create a configuration with the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the debounce window.
    #[must_use]
    pub const fn debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Set the evaluation limits.
    #[must_use]
    pub const fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the match cap for each evaluation pass.
    #[must_use]
    pub const fn max_matches(mut self, max_matches: usize) -> Self {
        self.limits.max_matches = max_matches;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlaygroundConfig::default();
        assert_eq!(config.debounce, DEFAULT_DEBOUNCE);
        assert_eq!(config.limits.max_matches, DEFAULT_MATCH_LIMIT);
    }

    #[test]
    fn builder_chain() {
        let config = PlaygroundConfig::new()
            .debounce(Duration::from_millis(50))
            .max_matches(100);
        assert_eq!(config.debounce, Duration::from_millis(50));
        assert_eq!(config.limits.max_matches, 100);
    }

    #[test]
    fn limits_builder() {
        let limits = Limits::new().max_matches(5);
        assert_eq!(limits.max_matches, 5);
    }
}
