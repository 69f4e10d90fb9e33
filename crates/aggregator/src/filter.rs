//! Calendar-year record filter.

use activity_common::ActivityRecord;

/// Selects records dated within one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearFilter {
    year: i32,
}

impl YearFilter {
    pub fn new(year: i32) -> Self {
        Self { year }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn matches(&self, record: &ActivityRecord) -> bool {
        record.year() == self.year
    }

    /// Lazily keep the matching records, in input order.
    pub fn apply<I>(self, records: I) -> impl Iterator<Item = ActivityRecord>
    where
        I: IntoIterator<Item = ActivityRecord>,
    {
        records.into_iter().filter(move |r| self.matches(r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::RecordBuilder;

    #[test]
    fn test_matches_year_boundaries() {
        let filter = YearFilter::new(2024);
        assert!(filter.matches(&RecordBuilder::new(2024, 1, 1, "Run").build()));
        assert!(filter.matches(&RecordBuilder::new(2024, 12, 31, "Run").build()));
        assert!(!filter.matches(&RecordBuilder::new(2023, 12, 31, "Run").build()));
        assert!(!filter.matches(&RecordBuilder::new(2025, 1, 1, "Run").build()));
    }

    #[test]
    fn test_apply_keeps_order() {
        let records = vec![
            RecordBuilder::new(2024, 3, 1, "A").build(),
            RecordBuilder::new(2023, 3, 1, "B").build(),
            RecordBuilder::new(2024, 1, 1, "C").build(),
        ];

        let kept: Vec<String> = YearFilter::new(2024)
            .apply(records)
            .map(|r| r.activity_type)
            .collect();
        assert_eq!(kept, vec!["A", "C"]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let records = vec![RecordBuilder::new(2023, 3, 1, "B").build()];
        assert_eq!(YearFilter::new(1999).apply(records).count(), 0);
    }
}
