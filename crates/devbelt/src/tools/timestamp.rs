//! Timestamp parsing and conversion.
//!
//! One parser accepts Unix seconds, Unix milliseconds, and common
//! date strings; [`Conversions`] carries every rendering the
//! converter shows. Numeric input is disambiguated by magnitude:
//! anything whose absolute value is below `1e11` is seconds, the
//! rest is milliseconds.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};

use crate::error::{DevbeltError, Result};

/// Numeric input at or above this magnitude is milliseconds.
const MILLIS_THRESHOLD: f64 = 1e11;

/// Timestamps past this are taken as milliseconds (the year 3000 in
/// seconds).
const YEAR_3000_SECONDS: i64 = 32_503_680_000;

/// Every rendering of one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversions {
    /// Whole seconds since the Unix epoch, floored.
    pub unix_seconds: i64,

    /// Milliseconds since the Unix epoch.
    pub unix_millis: i64,

    /// RFC 3339 in UTC with millisecond precision, e.g.
    /// `2024-01-14T21:30:00.000Z`.
    pub iso_8601: String,

    /// RFC 2822-style UTC string, e.g. `Sun, 14 Jan 2024 21:30:00 GMT`.
    pub utc: String,

    /// Local-time rendering with its UTC offset.
    pub local: String,
}

/// Parse user input into a conversion table.
///
/// Returns `Ok(None)` for blank input. Numeric strings follow the
/// magnitude heuristic; textual input is tried as RFC 3339, then
/// `YYYY-MM-DD HH:MM:SS` (with space or `T`), then a bare date, all
/// read as UTC.
pub fn convert(input: &str) -> Result<Option<Conversions>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    parse_millis(trimmed)
        .and_then(from_unix_millis)
        .map(Some)
        .ok_or_else(|| DevbeltError::timestamp(trimmed))
}

/// Current time as Unix seconds.
#[must_use]
pub fn now_unix_seconds() -> i64 {
    Utc::now().timestamp()
}

/// Current time as Unix milliseconds.
#[must_use]
pub fn now_unix_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Humanize a Unix timestamp relative to `now` (both in seconds).
///
/// Future instants read `in 2h 5m`, past ones `4m ago`, with the
/// past form rounding away from zero. Values beyond the year 3000
/// are assumed to be milliseconds and scaled down first.
#[must_use]
pub fn relative(timestamp: i64, now: i64) -> String {
    let seconds = if timestamp > YEAR_3000_SECONDS {
        timestamp.div_euclid(1000)
    } else {
        timestamp
    };
    let delta = seconds - now;
    if delta > 0 {
        let hours = delta / 3600;
        let minutes = (delta % 3600) / 60;
        format!("in {hours}h {minutes}m")
    } else {
        format!("{}m ago", delta.div_euclid(60).unsigned_abs())
    }
}

fn parse_millis(text: &str) -> Option<i64> {
    if is_numeric(text) {
        let value: f64 = text.parse().ok()?;
        let millis = if value.abs() < MILLIS_THRESHOLD {
            value * 1000.0
        } else {
            value
        };
        return Some(millis.round() as i64);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.timestamp_millis());
    }
    parse_naive(text).map(|naive| naive.and_utc().timestamp_millis())
}

/// Matches the shape `-?digits(.digits)?`.
fn is_numeric(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() {
        return false;
    }
    match digits.split_once('.') {
        Some((whole, fraction)) => {
            !whole.is_empty()
                && !fraction.is_empty()
                && whole.bytes().all(|byte| byte.is_ascii_digit())
                && fraction.bytes().all(|byte| byte.is_ascii_digit())
        }
        None => digits.bytes().all(|byte| byte.is_ascii_digit()),
    }
}

/// Date strings without an offset are read as UTC.
fn parse_naive(text: &str) -> Option<NaiveDateTime> {
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive);
        }
    }
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()?;
    date.and_hms_opt(0, 0, 0)
}

fn from_unix_millis(millis: i64) -> Option<Conversions> {
    let instant = Utc.timestamp_millis_opt(millis).single()?;
    Some(Conversions {
        unix_seconds: millis.div_euclid(1000),
        unix_millis: millis,
        iso_8601: instant.to_rfc3339_opts(SecondsFormat::Millis, true),
        utc: instant.format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
        local: instant
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S %Z")
            .to_string(),
    })
}
