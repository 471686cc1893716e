//! Live regex playground example.
//!
//! This example drives a debounced playground session the way an
//! interactive frontend would: edit, wait for the published pass, and
//! render the highlighted text.
//!
//! Run with: `cargo run --example playground`

use std::time::Duration;

use devbelt::playground::presets;
use devbelt::prelude::*;
use devbelt::{PRESETS, matches_to_json, pattern_literal, render_plain};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("devbelt Regex Playground");
    println!("========================\n");

    // Example 1: One-shot evaluation
    println!("1. One-shot evaluation...");
    let result = evaluate(
        r"(\w+)@(\w+)\.com",
        Flags::parse("g")?,
        "mail bob@site.com and eve@db.com",
        &Limits::default(),
    );
    println!(
        "   {} matches for {}",
        result.match_count(),
        pattern_literal(&result.pattern, result.flags)
    );
    println!("   {}", render_plain(&result.segments()));
    for record in &result.matches.records {
        println!(
            "   [{}..{}] '{}' user='{}' host='{}'",
            record.start,
            record.end,
            record.text,
            record.group(1).unwrap_or(""),
            record.group(2).unwrap_or("")
        );
    }

    // Example 2: Debounced live session
    println!("\n2. Debounced live session...");
    let config = PlaygroundConfig::new().debounce(Duration::from_millis(50));
    let playground = Playground::spawn(config);
    let mut results = playground.subscribe();

    let seed = playground.latest();
    println!("   Seed pass found {} matches", seed.match_count());

    // A typing burst: only one pass runs once the input settles.
    playground.set_pattern(r"\d{3}-\d{4}");
    playground.set_flags(Flags::GLOBAL);
    playground.set_text("Call 555-1234 or 555-9876 today");

    results.changed().await.unwrap();
    let live = results.borrow_and_update().clone();
    println!(
        "   Pass {} found {} matches in {:?}",
        live.generation,
        live.match_count(),
        live.elapsed
    );
    println!("   {}", render_plain(&live.segments()));

    // Example 3: Presets and the command palette
    println!("\n3. Presets and the command palette...");
    for preset in PRESETS {
        println!(
            "   preset '{}' loads {}",
            preset.name,
            pattern_literal(preset.pattern, preset.flags)
        );
    }

    let date = *presets::find("date").unwrap();
    playground.apply_preset(date);
    results.changed().await.unwrap();
    let loaded = results.borrow_and_update().clone();
    println!("   '{}' matched {} dates", date.name, loaded.match_count());

    let offered: Vec<_> = filter_tools("regex").iter().map(|tool| tool.name()).collect();
    println!("   palette query 'regex' offers: {offered:?}");

    // Example 4: Clipboard-ready exports
    println!("\n4. Exports...");
    println!("{}", matches_to_json(&loaded.matches)?);

    // Example 5: Compile errors stay inline
    println!("\n5. Compile errors stay inline...");
    playground.set_pattern("(unclosed");
    results.changed().await.unwrap();
    let failed = results.borrow_and_update().clone();
    if let Some(error) = &failed.error {
        println!("   diagnostic: {error}");
    }

    println!("\nPlayground example completed!");
    Ok(())
}
