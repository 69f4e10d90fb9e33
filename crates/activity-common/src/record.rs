//! Parsed activity rows.

use chrono::{Datelike, NaiveDate};
use std::time::Duration;

/// One exported activity.
///
/// Built by the export parser and never mutated afterwards. Distance is always
/// kilometers, whatever unit the export used for the activity type.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRecord {
    /// Calendar date the activity started on
    pub date: NaiveDate,
    /// Activity type label as exported (e.g. "Running", "Běh")
    pub activity_type: String,
    /// Elapsed time
    pub duration: Duration,
    /// Distance in kilometers
    pub distance_km: f64,
    /// Total ascent in meters
    pub elevation_gain_m: f64,
    /// Active calories (kcal)
    pub calories: u64,
    /// Step count, 0 for activities without steps
    pub steps: u64,
}

impl ActivityRecord {
    /// Calendar year of the activity date.
    pub fn year(&self) -> i32 {
        self.date.year()
    }
}
