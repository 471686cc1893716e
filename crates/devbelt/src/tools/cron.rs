//! Five-field cron expressions: parse, describe, and project.
//!
//! The grammar is classic crontab: `*`, steps (`*/5`, `2-10/2`),
//! ranges, lists, and three-letter month and weekday names. When both
//! day fields are restricted they combine with OR, the Vixie cron
//! rule, where "restricted" means the field does not start with `*`.

use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike, Utc};

use crate::error::{DevbeltError, Result};

/// Search depth for [`CronSchedule::next_occurrences`], in minutes
/// (five years).
const SEARCH_LIMIT_MINUTES: u32 = 5 * 366 * 24 * 60;

const MONTH_ABBREVS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];
const WEEKDAY_ABBREVS: [&str; 7] = ["sun", "mon", "tue", "wed", "thu", "fri", "sat"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const MINUTE: FieldSpec = FieldSpec {
    name: "minute",
    min: 0,
    max: 59,
    names: None,
};
const HOUR: FieldSpec = FieldSpec {
    name: "hour",
    min: 0,
    max: 23,
    names: None,
};
const DAY_OF_MONTH: FieldSpec = FieldSpec {
    name: "day-of-month",
    min: 1,
    max: 31,
    names: None,
};
const MONTH: FieldSpec = FieldSpec {
    name: "month",
    min: 1,
    max: 12,
    names: Some(&MONTH_ABBREVS),
};
// Both 0 and 7 mean Sunday; 7 is folded onto 0 after parsing.
const DAY_OF_WEEK: FieldSpec = FieldSpec {
    name: "day-of-week",
    min: 0,
    max: 7,
    names: Some(&WEEKDAY_ABBREVS),
};

/// A labeled expression from the preset row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CronPreset {
    /// Button label.
    pub label: &'static str,

    /// The expression itself.
    pub expression: &'static str,
}

/// Preset expressions, in display order.
pub const CRON_PRESETS: [CronPreset; 6] = [
    CronPreset {
        label: "Every minute",
        expression: "* * * * *",
    },
    CronPreset {
        label: "Every 5 minutes",
        expression: "*/5 * * * *",
    },
    CronPreset {
        label: "Every hour",
        expression: "0 * * * *",
    },
    CronPreset {
        label: "Midnight daily",
        expression: "0 0 * * *",
    },
    CronPreset {
        label: "At 2:30 AM",
        expression: "30 2 * * *",
    },
    CronPreset {
        label: "Weekdays at 9 AM",
        expression: "0 9 * * 1-5",
    },
];

/// A parsed five-field cron expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CronSchedule {
    minute: FieldSet,
    hour: FieldSet,
    day_of_month: FieldSet,
    month: FieldSet,
    day_of_week: FieldSet,
    dom_restricted: bool,
    dow_restricted: bool,
}

impl CronSchedule {
    /// Parse a classic five-field expression.
    pub fn parse(expression: &str) -> Result<Self> {
        let fields: Vec<&str> = expression.split_whitespace().collect();
        let &[minute, hour, day_of_month, month, day_of_week] = fields.as_slice() else {
            return Err(DevbeltError::cron(format!(
                "expected 5 fields, found {}",
                fields.len()
            )));
        };
        Ok(Self {
            minute: parse_field(minute, &MINUTE)?,
            hour: parse_field(hour, &HOUR)?,
            day_of_month: parse_field(day_of_month, &DAY_OF_MONTH)?,
            month: parse_field(month, &MONTH)?,
            day_of_week: parse_day_of_week(day_of_week)?,
            dom_restricted: !day_of_month.starts_with('*'),
            dow_restricted: !day_of_week.starts_with('*'),
        })
    }

    /// Whether the schedule fires at the given minute.
    ///
    /// When both day fields are restricted, either one matching is
    /// enough; otherwise both must match.
    #[must_use]
    pub fn fires_at(&self, at: DateTime<Utc>) -> bool {
        if !self.minute.contains(at.minute() as u8)
            || !self.hour.contains(at.hour() as u8)
            || !self.month.contains(at.month() as u8)
        {
            return false;
        }
        let dom = self.day_of_month.contains(at.day() as u8);
        let dow = self
            .day_of_week
            .contains(at.weekday().num_days_from_sunday() as u8);
        if self.dom_restricted && self.dow_restricted {
            dom || dow
        } else {
            dom && dow
        }
    }

    /// The next `count` fire times strictly after `from`.
    ///
    /// Stepping is bounded; a schedule that cannot fire within five
    /// years (such as `0 0 30 2 *`) is an error rather than a hang.
    pub fn next_occurrences(
        &self,
        count: usize,
        from: DateTime<Utc>,
    ) -> Result<Vec<DateTime<Utc>>> {
        let mut runs = Vec::with_capacity(count);
        if count == 0 {
            return Ok(runs);
        }
        let start = from.timestamp().div_euclid(60) * 60 + 60;
        let mut cursor = Utc
            .timestamp_opt(start, 0)
            .single()
            .ok_or_else(|| DevbeltError::cron("start time is out of range"))?;
        for _ in 0..SEARCH_LIMIT_MINUTES {
            if self.fires_at(cursor) {
                runs.push(cursor);
                if runs.len() == count {
                    return Ok(runs);
                }
            }
            cursor += Duration::minutes(1);
        }
        Err(DevbeltError::cron(
            "no matching time within the next five years",
        ))
    }

    /// A human-readable sentence for the schedule.
    #[must_use]
    pub fn describe(&self) -> String {
        let mut sentence = self.time_phrase();
        let show_dom = !self.day_of_month.is_full();
        let show_dow = !self.day_of_week.is_full();
        if show_dom {
            sentence.push_str(&format!(
                " on {} of the month",
                number_phrase("day", self.day_of_month)
            ));
        }
        if show_dow {
            let joiner = match (show_dom, self.dom_restricted && self.dow_restricted) {
                (false, _) => " on ",
                (true, true) => " or on ",
                (true, false) => " and on ",
            };
            sentence.push_str(joiner);
            sentence.push_str(&name_phrase(self.day_of_week, &WEEKDAY_NAMES, 0));
        }
        if !self.month.is_full() {
            sentence.push_str(&format!(
                ", in {}",
                name_phrase(self.month, &MONTH_NAMES, 1)
            ));
        }
        sentence
    }

    fn time_phrase(&self) -> String {
        if self.minute.is_full() && self.hour.is_full() {
            return "Every minute".to_string();
        }
        if self.hour.is_full() {
            if let Some(step) = self.minute.stride() {
                return format!("Every {step} minutes");
            }
            if self.minute.single() == Some(0) {
                return "Every hour".to_string();
            }
        }
        if let (Some(minute), Some(hour)) = (self.minute.single(), self.hour.single()) {
            return format!("At {hour:02}:{minute:02}");
        }
        let minutes = number_phrase("minute", self.minute);
        if self.hour.is_full() {
            format!("At {minutes} past every hour")
        } else {
            format!("At {minutes} past {}", number_phrase("hour", self.hour))
        }
    }
}

impl std::str::FromStr for CronSchedule {
    type Err = DevbeltError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Allowed values for one field, as a bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FieldSet {
    bits: u64,
    min: u8,
    max: u8,
}

impl FieldSet {
    const fn contains(self, value: u8) -> bool {
        value <= self.max && self.bits & (1 << value) != 0
    }

    const fn is_full(self) -> bool {
        self.bits == full_mask(self.min, self.max)
    }

    fn values(self) -> impl Iterator<Item = u8> {
        (self.min..=self.max).filter(move |&value| self.bits & (1 << value) != 0)
    }

    fn single(self) -> Option<u8> {
        let mut values = self.values();
        let first = values.next()?;
        values.next().is_none().then_some(first)
    }

    /// Detect `*/n`-shaped sets: constant spacing from the range
    /// start with no room for one more value at the end.
    fn stride(self) -> Option<u8> {
        let values: Vec<u8> = self.values().collect();
        let first = *values.first()?;
        let second = *values.get(1)?;
        if first != self.min {
            return None;
        }
        let step = second - first;
        let spaced = values.windows(2).all(|pair| pair[1] - pair[0] == step);
        (spaced && *values.last()? + step > self.max).then_some(step)
    }
}

const fn full_mask(min: u8, max: u8) -> u64 {
    ((1 << (max + 1)) - 1) & !((1 << min) - 1)
}

struct FieldSpec {
    name: &'static str,
    min: u8,
    max: u8,
    names: Option<&'static [&'static str]>,
}

fn parse_field(text: &str, spec: &FieldSpec) -> Result<FieldSet> {
    let mut set = FieldSet {
        bits: 0,
        min: spec.min,
        max: spec.max,
    };
    for term in text.split(',') {
        parse_term(term, spec, &mut set)?;
    }
    Ok(set)
}

fn parse_day_of_week(text: &str) -> Result<FieldSet> {
    let mut set = parse_field(text, &DAY_OF_WEEK)?;
    if set.contains(7) {
        set.bits = (set.bits | 1) & !(1 << 7);
    }
    set.max = 6;
    Ok(set)
}

fn parse_term(term: &str, spec: &FieldSpec, set: &mut FieldSet) -> Result<()> {
    if term.is_empty() {
        return Err(DevbeltError::cron(format!(
            "empty term in the {} field",
            spec.name
        )));
    }
    let (base, step) = match term.split_once('/') {
        Some((base, step_text)) => {
            let step: u8 = step_text.parse().map_err(|_| {
                DevbeltError::cron(format!(
                    "invalid step '{step_text}' in the {} field",
                    spec.name
                ))
            })?;
            if step == 0 {
                return Err(DevbeltError::cron(format!(
                    "step must be at least 1 in the {} field",
                    spec.name
                )));
            }
            (base, step)
        }
        None => (term, 1),
    };
    let stepped = term.contains('/');
    let (start, end) = match base {
        "*" => (spec.min, spec.max),
        _ => match base.split_once('-') {
            Some((low, high)) => {
                let low = parse_value(low, spec)?;
                let high = parse_value(high, spec)?;
                if low > high {
                    return Err(DevbeltError::cron(format!(
                        "range start {low} exceeds end {high} in the {} field",
                        spec.name
                    )));
                }
                (low, high)
            }
            None => {
                let value = parse_value(base, spec)?;
                // "5/10" runs from 5 to the top of the range.
                if stepped {
                    (value, spec.max)
                } else {
                    (value, value)
                }
            }
        },
    };
    let mut value = start;
    loop {
        set.bits |= 1 << value;
        match value.checked_add(step) {
            Some(next) if next <= end => value = next,
            _ => break,
        }
    }
    Ok(())
}

fn parse_value(text: &str, spec: &FieldSpec) -> Result<u8> {
    if let Some(position) = spec
        .names
        .and_then(|names| names.iter().position(|name| name.eq_ignore_ascii_case(text)))
    {
        return Ok(spec.min + position as u8);
    }
    let value: u8 = text.parse().map_err(|_| {
        DevbeltError::cron(format!("invalid value '{text}' in the {} field", spec.name))
    })?;
    if value < spec.min || value > spec.max {
        return Err(DevbeltError::cron(format!(
            "value {value} is out of range {}-{} for the {} field",
            spec.min, spec.max, spec.name
        )));
    }
    Ok(value)
}

/// `"minute 5"` or `"minutes 5 and 35"`.
fn number_phrase(noun: &str, set: FieldSet) -> String {
    let values: Vec<String> = set.values().map(|value| value.to_string()).collect();
    if values.len() == 1 {
        format!("{noun} {}", values[0])
    } else {
        format!("{noun}s {}", join_and(&values))
    }
}

/// `"Monday through Friday"` for contiguous runs, otherwise an
/// and-joined list.
fn name_phrase(set: FieldSet, names: &[&str], offset: u8) -> String {
    let values: Vec<u8> = set.values().collect();
    if values.len() >= 2 && contiguous(&values) {
        let first = names[(values[0] - offset) as usize];
        let last = names[(values[values.len() - 1] - offset) as usize];
        return format!("{first} through {last}");
    }
    let labels: Vec<String> = values
        .iter()
        .map(|&value| names[(value - offset) as usize].to_string())
        .collect();
    join_and(&labels)
}

fn contiguous(values: &[u8]) -> bool {
    values.windows(2).all(|pair| pair[1] == pair[0] + 1)
}

/// `"a"`, `"a and b"`, or `"a, b, and c"`.
fn join_and(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [head @ .., tail] => format!("{}, and {tail}", head.join(", ")),
    }
}
