//! Micro-tool walkthrough.
//!
//! Every developer utility in devbelt is a pure function over strings;
//! this example runs each one over realistic input.
//!
//! Run with: `cargo run --example toolbox`

use chrono::Utc;
use devbelt::tools::{json, jwt, markdown, stats, timestamp};
use devbelt::{CRON_PRESETS, CronSchedule, Result};

fn main() -> Result<()> {
    println!("devbelt Micro-Tools");
    println!("===================\n");

    // JSON formatting
    println!("=== JSON Formatter ===");
    let raw = r#"{"service":"devbelt","port":8080,"features":["regex","jwt"]}"#;
    println!("{}", json::format(raw)?);
    println!("minified: {}", json::minify(raw)?);

    // Base64
    println!("\n=== Base64 ===");
    let encoded = devbelt::tools::base64::encode("Hello, World!");
    println!("encoded: {encoded}");
    println!("decoded: {}", devbelt::tools::base64::decode(&encoded)?);

    // Timestamps
    println!("\n=== Timestamp Converter ===");
    if let Some(conversions) = timestamp::convert("1705267800")? {
        println!("unix seconds: {}", conversions.unix_seconds);
        println!("iso 8601:     {}", conversions.iso_8601);
        println!("utc:          {}", conversions.utc);
        println!("local:        {}", conversions.local);
    }
    let now = timestamp::now_unix_seconds();
    println!("an hour from now is {}", timestamp::relative(now + 3600, now));

    // JWT inspection (the well-known HS256 sample token)
    println!("\n=== JWT Inspector ===");
    let token = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
                 eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ.\
                 SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c";
    if let Some(decoded) = jwt::decode(token)? {
        println!("alg: {}", decoded.header["alg"]);
        println!("sub: {}", decoded.payload["sub"]);
        let summary = decoded.claims_at(now);
        println!("expired: {}  active: {}", summary.is_expired, summary.is_active);
        if let Some(issued_at) = summary.issued_at {
            println!("issued {}", timestamp::relative(issued_at, now));
        }
        for advisory in &summary.advisories {
            println!("  [{}] {}", advisory.severity, advisory.message);
        }
    }

    // Cron schedules
    println!("\n=== Cron Helper ===");
    for preset in &CRON_PRESETS {
        let schedule: CronSchedule = preset.expression.parse()?;
        println!("{:<14} {}", preset.expression, schedule.describe());
    }
    let expression = "*/15 9-17 * * mon-fri";
    let schedule: CronSchedule = expression.parse()?;
    println!("\n'{expression}' means: {}", schedule.describe());
    println!("next runs:");
    for run in schedule.next_occurrences(3, Utc::now())? {
        println!("  {run}");
    }

    // Markdown preview
    println!("\n=== Markdown Preview ===");
    let document = "# devbelt\n\nA **local-first** toolbelt.\n\n- [x] regex\n- [ ] kitchen sink\n";
    println!("{}", markdown::to_html(document));

    // Text statistics
    println!("=== Text Stats ===");
    let report = stats::measure(document);
    println!(
        "{} chars, {} words, {} lines",
        report.characters, report.words, report.lines
    );

    println!("\nToolbox examples completed!");
    Ok(())
}
