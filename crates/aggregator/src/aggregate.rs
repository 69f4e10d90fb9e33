//! Single-pass reduction of activity records into yearly totals.

use std::collections::HashMap;
use std::time::Duration;

use activity_common::{ActivityRecord, ActivityTypeCount, SummaryMetrics};
use tracing::debug;

/// Accumulates [`SummaryMetrics`] one record at a time.
///
/// Activity type counts are kept in first-seen order so the mode is
/// deterministic: on equal counts the type that appeared first wins.
#[derive(Debug, Default)]
pub struct MetricAggregator {
    total_steps: u64,
    total_activities: u64,
    total_duration: Duration,
    total_distance_km: f64,
    total_elevation_m: f64,
    total_calories: u64,
    type_counts: Vec<ActivityTypeCount>,
    type_index: HashMap<String, usize>,
}

impl MetricAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: &ActivityRecord) {
        // Integer totals saturate instead of wrapping
        self.total_steps = self.total_steps.saturating_add(record.steps);
        self.total_activities += 1;
        self.total_duration = self.total_duration.saturating_add(record.duration);
        self.total_distance_km += record.distance_km;
        self.total_elevation_m += record.elevation_gain_m;
        self.total_calories = self.total_calories.saturating_add(record.calories);

        match self.type_index.get(&record.activity_type) {
            Some(&i) => self.type_counts[i].count += 1,
            None => {
                self.type_index
                    .insert(record.activity_type.clone(), self.type_counts.len());
                self.type_counts
                    .push(ActivityTypeCount::new(record.activity_type.clone(), 1));
            }
        }
    }

    pub fn count(&self) -> u64 {
        self.total_activities
    }

    /// Current mode of the activity type, if any record was pushed.
    pub fn most_frequent(&self) -> Option<&ActivityTypeCount> {
        // Strictly greater keeps the earliest type on ties
        self.type_counts.iter().fold(None, |best, candidate| match best {
            Some(b) if b.count >= candidate.count => Some(b),
            _ => Some(candidate),
        })
    }

    pub fn finish(self) -> SummaryMetrics {
        if self.total_activities == 0 {
            return SummaryMetrics::empty();
        }

        let most_frequent = self
            .most_frequent()
            .cloned()
            .unwrap_or_else(ActivityTypeCount::none);

        // Stable sort keeps first-seen order among equal counts
        let mut breakdown = self.type_counts;
        breakdown.sort_by(|a, b| b.count.cmp(&a.count));

        debug!(
            activities = self.total_activities,
            types = breakdown.len(),
            most_frequent = %most_frequent.activity_type,
            "Aggregated activity metrics"
        );

        SummaryMetrics {
            total_steps: self.total_steps,
            total_activities: self.total_activities,
            most_frequent,
            total_duration: self.total_duration,
            total_distance_km: self.total_distance_km,
            total_elevation_m: self.total_elevation_m,
            total_calories: self.total_calories,
            breakdown,
        }
    }
}

/// Aggregate a whole record sequence.
pub fn aggregate<'a, I>(records: I) -> SummaryMetrics
where
    I: IntoIterator<Item = &'a ActivityRecord>,
{
    let mut aggregator = MetricAggregator::new();
    for record in records {
        aggregator.push(record);
    }
    aggregator.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{assert_approx_eq, records_of_types, RecordBuilder};

    #[test]
    fn test_empty_input_gives_zero_summary() {
        let summary = aggregate(&Vec::<ActivityRecord>::new());
        assert_eq!(summary, SummaryMetrics::empty());
        assert_eq!(summary.most_frequent.activity_type, "N/A");
    }

    #[test]
    fn test_sums_every_field() {
        let records = vec![
            RecordBuilder::new(2024, 1, 1, "Run")
                .minutes(30)
                .distance_km(5.5)
                .elevation_m(40.0)
                .calories(350)
                .steps(6000)
                .build(),
            RecordBuilder::new(2024, 1, 2, "Bike")
                .minutes(60)
                .distance_km(25.25)
                .elevation_m(300.5)
                .calories(700)
                .build(),
        ];

        let summary = aggregate(&records);
        assert_eq!(summary.total_activities, 2);
        assert_eq!(summary.total_steps, 6000);
        assert_eq!(summary.total_duration, Duration::from_secs(90 * 60));
        assert_approx_eq!(summary.total_distance_km, 30.75, 1e-9);
        assert_approx_eq!(summary.total_elevation_m, 340.5, 1e-9);
        assert_eq!(summary.total_calories, 1050);
    }

    #[test]
    fn test_huge_counts_saturate_instead_of_overflowing() {
        let huge = ActivityRecord {
            steps: u64::MAX - 10,
            calories: u64::MAX - 10,
            duration: Duration::MAX,
            ..RecordBuilder::new(2024, 1, 1, "Walk").build()
        };
        let records = vec![huge.clone(), huge];

        let summary = aggregate(&records);
        assert_eq!(summary.total_activities, 2);
        assert_eq!(summary.total_steps, u64::MAX);
        assert_eq!(summary.total_calories, u64::MAX);
        assert_eq!(summary.total_duration, Duration::MAX);
    }

    #[test]
    fn test_mode_tie_goes_to_first_seen() {
        let records = records_of_types(2024, &["Run", "Bike", "Run", "Bike"]);
        let summary = aggregate(&records);
        assert_eq!(summary.most_frequent, ActivityTypeCount::new("Run", 2));

        let records = records_of_types(2024, &["Bike", "Run", "Run", "Bike"]);
        let summary = aggregate(&records);
        assert_eq!(summary.most_frequent, ActivityTypeCount::new("Bike", 2));
    }

    #[test]
    fn test_mode_strict_majority_wins() {
        let records = records_of_types(2024, &["Run", "Bike", "Bike", "Swim", "Bike"]);
        let summary = aggregate(&records);
        assert_eq!(summary.most_frequent, ActivityTypeCount::new("Bike", 3));
    }

    #[test]
    fn test_breakdown_sorted_by_count_then_first_seen() {
        let records = records_of_types(2024, &["Walk", "Run", "Swim", "Run", "Swim", "Yoga"]);
        let summary = aggregate(&records);

        let order: Vec<(&str, u64)> = summary
            .breakdown
            .iter()
            .map(|c| (c.activity_type.as_str(), c.count))
            .collect();
        assert_eq!(
            order,
            vec![("Run", 2), ("Swim", 2), ("Walk", 1), ("Yoga", 1)]
        );
    }

    #[test]
    fn test_incremental_push_matches_batch() {
        let records = records_of_types(2024, &["A", "B", "A"]);
        let mut aggregator = MetricAggregator::new();
        for r in &records {
            aggregator.push(r);
        }
        assert_eq!(aggregator.count(), 3);
        assert_eq!(aggregator.most_frequent().map(|m| m.count), Some(2));
        assert_eq!(aggregator.finish(), aggregate(&records));
    }
}
