//! Cell value parsing for Garmin exports.
//!
//! The export is locale dependent: the Czech export writes `1 234,5` where the
//! English one writes `1,234.5`, and both use `--` for "no value". Parsers here
//! return `Ok(None)` for an absent value and `Err(reason)` for text that is
//! present but unreadable.

use chrono::{NaiveDate, NaiveDateTime};
use std::time::Duration;

/// Placeholder the export writes for a missing measurement.
pub const ABSENT_PLACEHOLDER: &str = "--";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y"];

fn clean(raw: &str) -> &str {
    raw.trim().trim_matches('"').trim()
}

/// True for empty cells and the `--` placeholder.
pub fn is_absent(raw: &str) -> bool {
    let value = clean(raw);
    value.is_empty() || value == ABSENT_PLACEHOLDER
}

/// Parse a calendar date, ignoring any time of day.
pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    let value = clean(raw);
    if is_absent(value) {
        return Err("date is empty".to_string());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(dt.date());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Ok(date);
        }
    }

    Err("expected a date like 2024-03-15 or 2024-03-15 07:30:00".to_string())
}

/// Parse a number written in either export locale.
///
/// Thousands separators may be spaces (including NBSP), commas or dots; the
/// decimal separator is whichever of `.`/`,` comes last when both appear.
/// A lone separator followed by exactly three-digit groups (`5.972`, `2,738`)
/// is read as grouping, anything else as a decimal point.
pub fn parse_number(raw: &str) -> Result<Option<f64>, String> {
    let compact: String = clean(raw)
        .chars()
        .filter(|c| !matches!(c, ' ' | '\u{a0}' | '\u{202f}'))
        .collect();
    if is_absent(&compact) {
        return Ok(None);
    }

    let (sign, digits) = match compact.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, compact.as_str()),
    };

    let normalized = match (digits.rfind('.'), digits.rfind(',')) {
        (Some(dot), Some(comma)) if dot > comma => digits.replace(',', ""),
        (Some(_), Some(_)) => digits.replace('.', "").replace(',', "."),
        _ if is_grouped(digits, '.') => digits.replace('.', ""),
        _ if is_grouped(digits, ',') => digits.replace(',', ""),
        _ => digits.replace(',', "."),
    };

    if !normalized.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err("not a number".to_string());
    }

    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(sign * value)),
        _ => Err("not a number".to_string()),
    }
}

/// Parse a non-negative count, rounding fractional values.
pub fn parse_count(raw: &str) -> Result<Option<u64>, String> {
    match parse_number(raw)? {
        None => Ok(None),
        Some(value) if value < 0.0 => Err("count cannot be negative".to_string()),
        // u64::MAX rounds up to 2^64 as f64, so anything at or above it is out of range
        Some(value) if value.round() >= u64::MAX as f64 => {
            Err("count is out of range".to_string())
        }
        Some(value) => Ok(Some(value.round() as u64)),
    }
}

/// Parse a non-negative measurement (distance, ascent).
pub fn parse_amount(raw: &str) -> Result<Option<f64>, String> {
    match parse_number(raw)? {
        Some(value) if value < 0.0 => Err("value cannot be negative".to_string()),
        other => Ok(other),
    }
}

/// Parse an elapsed time written as `H:MM:SS`, `H:MM:SS.s` or `MM:SS`.
pub fn parse_duration(raw: &str) -> Result<Option<Duration>, String> {
    let value = clean(raw);
    if is_absent(value) {
        return Ok(None);
    }

    let parts: Vec<&str> = value.split(':').collect();
    let (hours, minutes, seconds) = match parts.as_slice() {
        [h, m, s] => (parse_whole(h)?, parse_whole(m)?, parse_seconds(s)?),
        [m, s] => (0, parse_whole(m)?, parse_seconds(s)?),
        _ => return Err("expected H:MM:SS or MM:SS".to_string()),
    };

    let whole = hours
        .checked_mul(3600)
        .and_then(|secs| secs.checked_add(minutes.checked_mul(60)?))
        .ok_or_else(|| "duration is out of range".to_string())?;
    Duration::from_secs(whole)
        .checked_add(seconds)
        .map(Some)
        .ok_or_else(|| "duration is out of range".to_string())
}

fn parse_whole(part: &str) -> Result<u64, String> {
    let part = part.trim();
    if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
        return Err(format!("invalid time component {part:?}"));
    }
    part.parse::<u64>()
        .map_err(|_| format!("invalid time component {part:?}"))
}

/// Seconds as digits with an optional `.`/`,` fraction.
fn parse_seconds(part: &str) -> Result<Duration, String> {
    let part = part.trim().replace(',', ".");
    let (whole, fraction) = part.split_once('.').unwrap_or((part.as_str(), ""));
    let digits_only = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if whole.is_empty() || !digits_only(whole) || !digits_only(fraction) {
        return Err(format!("invalid seconds {part:?}"));
    }
    part.parse::<f64>()
        .ok()
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        .ok_or_else(|| format!("invalid seconds {part:?}"))
}

/// `1-3 digits` followed by one or more `sep + 3 digits` groups.
fn is_grouped(value: &str, sep: char) -> bool {
    let mut groups = value.split(sep);
    let head = match groups.next() {
        Some(head) => head,
        None => return false,
    };
    let mut tail_count = 0;
    for group in groups {
        if group.len() != 3 || !group.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        tail_count += 1;
    }
    tail_count > 0 && (1..=3).contains(&head.len()) && head.chars().all(|c| c.is_ascii_digit())
}

/// Swimming distances are exported in meters rather than kilometers.
pub fn is_swimming(activity_type: &str) -> bool {
    let lower = activity_type.to_lowercase();
    lower.contains("swim") || lower.contains("plav")
}
