//! Display formatting for summary values.
//!
//! Conventions:
//! - integers are grouped in thousands with a single space: `1 234 567`
//! - distance has two decimals: `123.46 km`
//! - elevation is whole meters: `8 765 m`
//! - durations are `{hours}h {minutes}m`, hours not wrapped at a day,
//!   seconds truncated

use std::time::Duration;

use activity_common::ActivityTypeCount;

/// Thousands separator used in every grouped number.
pub const THOUSANDS_SEPARATOR: char = ' ';

/// Group an integer's digits in threes.
pub fn format_count(value: u64) -> String {
    group_digits(&value.to_string())
}

/// Fixed-precision decimal with a grouped integer part.
pub fn format_decimal(value: f64, decimal_places: usize) -> String {
    let formatted = format!("{:.*}", decimal_places, value);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };

    match unsigned.split_once('.') {
        Some((whole, fraction)) => format!("{}{}.{}", sign, group_digits(whole), fraction),
        None => format!("{}{}", sign, group_digits(unsigned)),
    }
}

pub fn format_distance(km: f64) -> String {
    format!("{} km", format_decimal(km, 2))
}

pub fn format_elevation(meters: f64) -> String {
    format!("{} m", format_decimal(meters, 0))
}

pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    format!("{}h {}m", format_count(hours), minutes)
}

/// `"{count}x {type}"`, e.g. `42x Running`; just the sentinel for an empty year.
pub fn format_most_frequent(most_frequent: &ActivityTypeCount) -> String {
    if most_frequent.count == 0 {
        return most_frequent.activity_type.clone();
    }
    format!("{}x {}", most_frequent.count, most_frequent.activity_type)
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(c);
    }
    grouped
}
