//! Time parsing and day-name normalization
//!
//! Uploaded schedules carry times as "8", "8:30", "5:00 pm" or "5 p.m."
//! and day names in whatever shape the spreadsheet author used, so
//! parsing here is best-effort with documented fallbacks rather than
//! strict. Malformed input never raises; it falls back and logs.

use chrono::{Datelike, Local, Timelike};
use shared::util::{DAY_NAMES, day_name_for_weekday};

/// Known day-name spellings that are not plain prefixes of the full
/// name, plus single letters and numeric weekdays (Sunday = 0).
const DAY_ALIASES: [(&str, &str); 10] = [
    ("m", "monday"),
    ("t", "tuesday"),
    ("w", "wednesday"),
    ("th", "thursday"),
    ("f", "friday"),
    ("sa", "saturday"),
    ("su", "sunday"),
    ("tues", "tuesday"),
    ("thur", "thursday"),
    ("thurs", "thursday"),
];

/// Parse a time-of-day string to minutes since midnight, in [0, 1439].
///
/// Accepts "HH:MM", a bare hour "H", and 12-hour forms with an
/// "am"/"pm" suffix including dot-abbreviated "a.m."/"p.m." variants.
///
/// Unparseable or out-of-range input returns 0. Callers must not treat
/// 0 as "midnight" without checking for malformed input upstream; the
/// fallback exists because upstream data is uncontrolled.
pub fn parse_time_to_minutes(raw: &str) -> u32 {
    let lowered = raw.trim().to_lowercase().replace('.', "");
    let is_pm = lowered.ends_with("pm");
    let is_am = lowered.ends_with("am");
    let body = lowered
        .trim_end_matches("pm")
        .trim_end_matches("am")
        .trim();

    let (hour_part, minute_part) = match body.split_once(':') {
        Some((hour, minute)) => (hour.trim(), minute.trim()),
        None => (body, "0"),
    };

    let (Ok(hour), Ok(minute)) = (hour_part.parse::<u32>(), minute_part.parse::<u32>()) else {
        tracing::warn!(input = raw, "unparseable time string, falling back to 0");
        return 0;
    };

    let hour = match (is_pm, is_am, hour) {
        (true, _, h) if h != 12 => h + 12,
        (_, true, 12) => 0,
        (_, _, h) => h,
    };

    if hour > 23 || minute > 59 {
        tracing::warn!(input = raw, "time out of range, falling back to 0");
        return 0;
    }
    hour * 60 + minute
}

/// Strict interval intersection: two ranges overlap iff
/// `a_start < b_end && b_start < a_end`.
///
/// Touching endpoints (17:00-20:00 vs 20:00-21:00) do NOT overlap. Note
/// the asymmetry with [`crate::directory::is_on_shift_at`], which treats
/// shift boundaries inclusively; both rules are load-bearing.
pub fn intervals_overlap(a_start: u32, a_end: u32, b_start: u32, b_end: u32) -> bool {
    a_start < b_end && b_start < a_end
}

/// Normalize arbitrary day-name input to a canonical lowercase name.
///
/// Resolution order: exact lookup (full names, aliases, numeric
/// weekdays), then prefix match for inputs longer than one letter, then
/// a substring search for a full day name inside free text such as
/// "Thursday, June 15". Returns None when nothing matches.
pub fn normalize_day_name(raw: &str) -> Option<&'static str> {
    let needle = raw.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    if let Some(&full) = DAY_NAMES.iter().find(|d| **d == needle) {
        return Some(full);
    }
    if let Some(&(_, full)) = DAY_ALIASES.iter().find(|(alias, _)| *alias == needle) {
        return Some(full);
    }
    if let Ok(index) = needle.parse::<usize>()
        && let Some(&full) = DAY_NAMES.get(index)
    {
        return Some(full);
    }
    if needle.len() > 1
        && let Some(&full) = DAY_NAMES.iter().find(|d| d.starts_with(needle.as_str()))
    {
        return Some(full);
    }
    DAY_NAMES.iter().find(|d| needle.contains(*d)).copied()
}

/// 12-hour display label for an hour number (0 -> "12 AM", 13 -> "1 PM")
pub fn format_hour_12(hour: u32) -> String {
    let suffix = if hour % 24 >= 12 { "PM" } else { "AM" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{} {}", display, suffix)
}

/// 12-hour display label for a raw time string ("14:30" -> "2:30 PM")
pub fn format_time_12h(raw: &str) -> String {
    let minutes = parse_time_to_minutes(raw);
    let (hour, minute) = (minutes / 60, minutes % 60);
    if minute == 0 {
        format_hour_12(hour)
    } else {
        let suffix = if hour >= 12 { "PM" } else { "AM" };
        let display = match hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{}:{:02} {}", display, minute, suffix)
    }
}

/// Parse a "<start> - <end>" roster range into minute offsets
pub fn parse_range(raw: &str) -> Option<(u32, u32)> {
    let (start, end) = raw.split_once('-')?;
    Some((parse_time_to_minutes(start), parse_time_to_minutes(end)))
}

/// Canonical name of the current local weekday
pub fn today_day_name() -> &'static str {
    day_name_for_weekday(Local::now().weekday())
}

/// Current local wall-clock time as minutes since midnight
pub fn current_minute() -> u32 {
    let now = Local::now();
    now.hour() * 60 + now.minute()
}
