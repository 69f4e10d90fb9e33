//! Builders for synthetic activity records.

use activity_common::ActivityRecord;
use chrono::NaiveDate;
use std::time::Duration;

/// Builder for [`ActivityRecord`] with zeroed measurements.
///
/// # Example
///
/// ```
/// use test_utils::RecordBuilder;
///
/// let record = RecordBuilder::new(2024, 5, 1, "Running").steps(4200).build();
/// assert_eq!(record.steps, 4200);
/// assert_eq!(record.distance_km, 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    record: ActivityRecord,
}

impl RecordBuilder {
    pub fn new(year: i32, month: u32, day: u32, activity_type: &str) -> Self {
        let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid test date");
        Self {
            record: ActivityRecord {
                date,
                activity_type: activity_type.to_string(),
                duration: Duration::ZERO,
                distance_km: 0.0,
                elevation_gain_m: 0.0,
                calories: 0,
                steps: 0,
            },
        }
    }

    pub fn minutes(mut self, minutes: u64) -> Self {
        self.record.duration = Duration::from_secs(minutes * 60);
        self
    }

    pub fn distance_km(mut self, km: f64) -> Self {
        self.record.distance_km = km;
        self
    }

    pub fn elevation_m(mut self, meters: f64) -> Self {
        self.record.elevation_gain_m = meters;
        self
    }

    pub fn calories(mut self, kcal: u64) -> Self {
        self.record.calories = kcal;
        self
    }

    pub fn steps(mut self, steps: u64) -> Self {
        self.record.steps = steps;
        self
    }

    pub fn build(self) -> ActivityRecord {
        self.record
    }
}

/// Records on consecutive January days of `year`, one per activity type.
pub fn records_of_types(year: i32, types: &[&str]) -> Vec<ActivityRecord> {
    types
        .iter()
        .enumerate()
        .map(|(i, t)| RecordBuilder::new(year, 1, i as u32 + 1, t).build())
        .collect()
}
