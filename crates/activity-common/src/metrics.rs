//! Aggregated yearly totals.

use serde::{Serialize, Serializer};
use std::time::Duration;

/// Activity type reported when no record matched the target year.
pub const NO_ACTIVITY: &str = "N/A";

/// Occurrence count of one activity type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityTypeCount {
    pub activity_type: String,
    pub count: u64,
}

impl ActivityTypeCount {
    pub fn new(activity_type: impl Into<String>, count: u64) -> Self {
        Self {
            activity_type: activity_type.into(),
            count,
        }
    }

    /// Sentinel used for an empty year.
    pub fn none() -> Self {
        Self::new(NO_ACTIVITY, 0)
    }
}

/// Totals over the records of one year.
///
/// Every numeric field is a sum or a count over exactly the records that
/// passed the year filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryMetrics {
    pub total_steps: u64,
    pub total_activities: u64,
    /// Mode of the activity type; ties go to the type seen first
    pub most_frequent: ActivityTypeCount,
    #[serde(rename = "total_duration_secs", serialize_with = "serialize_secs")]
    pub total_duration: Duration,
    pub total_distance_km: f64,
    pub total_elevation_m: f64,
    pub total_calories: u64,
    /// Per-type counts, most frequent first, ties in order of first appearance
    pub breakdown: Vec<ActivityTypeCount>,
}

impl SummaryMetrics {
    /// Zero-valued summary for a year without activities.
    pub fn empty() -> Self {
        Self {
            total_steps: 0,
            total_activities: 0,
            most_frequent: ActivityTypeCount::none(),
            total_duration: Duration::ZERO,
            total_distance_km: 0.0,
            total_elevation_m: 0.0,
            total_calories: 0,
            breakdown: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_activities == 0
    }
}

impl Default for SummaryMetrics {
    fn default() -> Self {
        Self::empty()
    }
}

fn serialize_secs<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration.as_secs())
}
