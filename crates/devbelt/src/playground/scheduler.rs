//! Debounced evaluation scheduling.
//!
//! A [`Playground`] owns a background worker that coalesces rapid
//! edits: each incoming event renews a deadline instead of firing an
//! evaluation immediately, and only once the input has been quiet for
//! the debounce window does a pass run. Results are published over a
//! watch channel, so subscribers always observe the newest pass and
//! superseded passes are never materialized at all.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::time::Instant;

use super::evaluate::{EvaluationResult, evaluate};
use super::flags::Flags;
use super::presets::{DEFAULT_FLAGS, DEFAULT_PATTERN, DEFAULT_TEXT, Preset};
use crate::config::PlaygroundConfig;

/// The pattern, flags, and text under edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaygroundInput {
    /// The pattern string.
    pub pattern: String,

    /// The flags.
    pub flags: Flags,

    /// The text being searched.
    pub text: String,
}

impl Default for PlaygroundInput {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            flags: DEFAULT_FLAGS,
            text: DEFAULT_TEXT.to_string(),
        }
    }
}

/// Edits accepted by the worker.
#[derive(Debug)]
enum Event {
    Pattern(String),
    Flags(Flags),
    Text(String),
    Preset(Preset),
    Clear,
}

/// Handle to a running evaluation scheduler.
///
/// The handle is cheap to clone. Dropping every handle closes the
/// event channel and shuts the worker down.
#[derive(Debug, Clone)]
pub struct Playground {
    events: mpsc::UnboundedSender<Event>,
    results: watch::Receiver<Arc<EvaluationResult>>,
}

impl Playground {
    /// Spawn the worker on the current Tokio runtime.
    ///
    /// The default input is evaluated synchronously first, so the watch
    /// channel always holds a real result; the worker then debounces
    /// subsequent edits. Panics outside a runtime, same as
    /// `tokio::spawn`.
    #[must_use]
    pub fn spawn(config: PlaygroundConfig) -> Self {
        let input = PlaygroundInput::default();
        let seed = evaluate(&input.pattern, input.flags, &input.text, &config.limits);
        let (results_tx, results_rx) = watch::channel(Arc::new(seed));
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let worker = Worker {
            config,
            input,
            generation: 0,
            results: results_tx,
        };
        tokio::spawn(worker.run(events_rx));

        Self {
            events: events_tx,
            results: results_rx,
        }
    }

    /// Replace the pattern.
    pub fn set_pattern(&self, pattern: impl Into<String>) {
        self.send(Event::Pattern(pattern.into()));
    }

    /// Replace the flags.
    pub fn set_flags(&self, flags: Flags) {
        self.send(Event::Flags(flags));
    }

    /// Replace the text.
    pub fn set_text(&self, text: impl Into<String>) {
        self.send(Event::Text(text.into()));
    }

    /// Load a preset, replacing pattern, flags, and text together.
    pub fn apply_preset(&self, preset: Preset) {
        self.send(Event::Preset(preset));
    }

    /// Clear the pattern and text. Flags are kept.
    pub fn clear(&self) {
        self.send(Event::Clear);
    }

    /// Subscribe to evaluation results.
    ///
    /// The receiver immediately holds the latest result and is marked
    /// changed on every published pass.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<EvaluationResult>> {
        self.results.clone()
    }

    /// The most recently published result.
    #[must_use]
    pub fn latest(&self) -> Arc<EvaluationResult> {
        self.results.borrow().clone()
    }

    fn send(&self, event: Event) {
        if self.events.send(event).is_err() {
            tracing::warn!("playground worker is gone, edit dropped");
        }
    }
}

/// The background task owning the input state.
struct Worker {
    config: PlaygroundConfig,
    input: PlaygroundInput,
    generation: u64,
    results: watch::Sender<Arc<EvaluationResult>>,
}

impl Worker {
    /// Apply one edit to the input state.
    fn handle_event(&mut self, event: Event) {
        tracing::trace!(?event, "edit applied");
        match event {
            Event::Pattern(pattern) => self.input.pattern = pattern,
            Event::Flags(flags) => self.input.flags = flags,
            Event::Text(text) => self.input.text = text,
            Event::Preset(preset) => {
                self.input.pattern = preset.pattern.to_string();
                self.input.flags = preset.flags;
                self.input.text = preset.text.to_string();
            }
            Event::Clear => {
                self.input.pattern.clear();
                self.input.text.clear();
            }
        }
    }

    /// Evaluate the current input and publish the result.
    fn run_pass(&mut self) {
        self.generation += 1;
        let mut result = evaluate(
            &self.input.pattern,
            self.input.flags,
            &self.input.text,
            &self.config.limits,
        );
        result.generation = self.generation;
        tracing::debug!(
            generation = self.generation,
            matches = result.match_count(),
            truncated = result.is_truncated(),
            elapsed_us = result.elapsed.as_micros() as u64,
            "evaluation pass"
        );
        // A send error only means every receiver is gone; the worker
        // keeps running until the event channel closes too.
        let _ = self.results.send(Arc::new(result));
    }

    /// Event loop: every edit renews the deadline, and the pass runs
    /// only when a deadline expires with no edit arriving first.
    async fn run(mut self, mut events: mpsc::UnboundedReceiver<Event>) {
        let mut deadline: Option<Instant> = None;
        loop {
            let event = match deadline {
                Some(instant) => {
                    match tokio::time::timeout_at(instant, events.recv()).await {
                        Ok(event) => event,
                        Err(_) => {
                            deadline = None;
                            self.run_pass();
                            continue;
                        }
                    }
                }
                None => events.recv().await,
            };
            let Some(event) = event else { break };
            self.handle_event(event);
            deadline = Some(Instant::now() + self.config.debounce);
        }
    }
}
