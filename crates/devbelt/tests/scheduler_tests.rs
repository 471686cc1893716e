//! Integration tests for the debounced playground session.

use std::time::Duration;

use devbelt::playground::presets::{self, DEFAULT_PATTERN};
use devbelt::{Flags, Playground, PlaygroundConfig};
use tokio::time::timeout;

/// The seed result is published before any edit arrives.
#[tokio::test(start_paused = true)]
async fn seed_result_is_immediately_available() {
    let playground = Playground::spawn(PlaygroundConfig::default());
    let seed = playground.latest();
    assert_eq!(seed.generation, 0);
    assert_eq!(seed.pattern, DEFAULT_PATTERN);
    assert_eq!(seed.match_count(), 2);
}

/// A burst of edits inside the debounce window coalesces into one pass.
#[tokio::test(start_paused = true)]
async fn burst_of_edits_coalesces_into_one_pass() {
    let playground = Playground::spawn(PlaygroundConfig::default());
    let mut results = playground.subscribe();
    assert_eq!(results.borrow_and_update().generation, 0);

    playground.set_pattern(r"\d+");
    playground.set_flags(Flags::GLOBAL);
    playground.set_text("a 12 b 345");

    results.changed().await.unwrap();
    let result = results.borrow_and_update().clone();
    assert_eq!(result.generation, 1);
    assert_eq!(result.pattern, r"\d+");
    assert_eq!(result.match_count(), 2);
}

/// With no further edits, no further results are published.
#[tokio::test(start_paused = true)]
async fn quiet_playground_publishes_nothing_new() {
    let playground = Playground::spawn(PlaygroundConfig::default());
    let mut results = playground.subscribe();

    playground.set_text("one edit");
    results.changed().await.unwrap();
    assert_eq!(results.borrow_and_update().generation, 1);

    let quiet = timeout(Duration::from_secs(10), results.changed()).await;
    assert!(quiet.is_err());
}

/// Every expired deadline publishes with the next generation number.
#[tokio::test(start_paused = true)]
async fn sequential_edits_bump_the_generation() {
    let playground = Playground::spawn(PlaygroundConfig::default());
    let mut results = playground.subscribe();

    playground.set_pattern("a+");
    results.changed().await.unwrap();
    assert_eq!(results.borrow_and_update().generation, 1);

    playground.set_text("aaa bb aa");
    results.changed().await.unwrap();
    let result = results.borrow_and_update().clone();
    assert_eq!(result.generation, 2);
    assert_eq!(result.match_count(), 2);
}

/// A preset swaps pattern, flags, and text in a single pass.
#[tokio::test(start_paused = true)]
async fn preset_applies_atomically() {
    let playground = Playground::spawn(PlaygroundConfig::default());
    let mut results = playground.subscribe();

    let date = *presets::find("date").unwrap();
    playground.apply_preset(date);
    results.changed().await.unwrap();

    let result = results.borrow_and_update().clone();
    assert_eq!(result.pattern, date.pattern);
    assert_eq!(result.flags, date.flags);
    assert_eq!(result.match_count(), 3);
    assert_eq!(result.matches.records[0].group(1), Some("2024"));
}

/// Clear empties pattern and text but keeps the flags.
#[tokio::test(start_paused = true)]
async fn clear_keeps_flags_and_reports_no_matches() {
    let playground = Playground::spawn(PlaygroundConfig::default());
    let mut results = playground.subscribe();

    playground.set_flags(Flags::IGNORE_CASE);
    results.changed().await.unwrap();

    playground.clear();
    results.changed().await.unwrap();

    let result = results.borrow_and_update().clone();
    assert!(result.pattern.is_empty());
    assert!(result.text.is_empty());
    assert_eq!(result.flags, Flags::IGNORE_CASE);
    assert!(result.is_ok());
    assert_eq!(result.match_count(), 0);
}

/// The configured debounce window elapses before a pass runs.
#[tokio::test(start_paused = true)]
async fn debounce_waits_the_configured_window() {
    let config = PlaygroundConfig::new().debounce(Duration::from_millis(50));
    let playground = Playground::spawn(config);
    let mut results = playground.subscribe();

    let started = tokio::time::Instant::now();
    playground.set_text("abc");
    results.changed().await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(50));
}

/// Every subscriber observes the same published pass.
#[tokio::test(start_paused = true)]
async fn multiple_subscribers_see_the_same_pass() {
    let playground = Playground::spawn(PlaygroundConfig::default());
    let mut first = playground.subscribe();
    let mut second = playground.subscribe();

    playground.set_pattern("b");
    first.changed().await.unwrap();
    second.changed().await.unwrap();
    assert_eq!(first.borrow().generation, second.borrow().generation);
}

/// Dropping the handle closes the event channel and stops the worker.
#[tokio::test]
async fn dropping_the_handle_stops_the_worker() {
    let playground = Playground::spawn(PlaygroundConfig::default());
    let mut results = playground.subscribe();
    drop(playground);
    assert!(results.changed().await.is_err());
}
