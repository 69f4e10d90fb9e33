//! Console output of the computed summary.

use std::path::Path;

use activity_common::{ActivityTypeCount, SummaryMetrics};
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Table};
use renderer::format;
use serde::Serialize;

use crate::pipeline::PipelineOutcome;

/// Machine-readable form printed with `--json`.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub year: i32,
    pub output: &'a Path,
    pub rows_read: usize,
    pub summary: &'a SummaryMetrics,
}

/// Formats run results for stdout.
pub struct SummaryReport;

impl SummaryReport {
    /// Format the outcome as a console table.
    pub fn format_table(outcome: &PipelineOutcome) -> String {
        let metrics = &outcome.summary.metrics;
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_header(vec![format!("Activity Summary: {}", outcome.summary.year)]);

        table.add_row(vec!["Steps:", &format::format_count(metrics.total_steps)]);
        table.add_row(vec![
            "Total activities:",
            &format::format_count(metrics.total_activities),
        ]);
        table.add_row(vec![
            "Most frequent:",
            &format::format_most_frequent(&metrics.most_frequent),
        ]);
        table.add_row(vec![
            "Activity time:",
            &format::format_duration(metrics.total_duration),
        ]);
        table.add_row(vec![
            "Distance:",
            &format::format_distance(metrics.total_distance_km),
        ]);
        table.add_row(vec![
            "Elevation gain:",
            &format::format_elevation(metrics.total_elevation_m),
        ]);
        table.add_row(vec!["Calories:", &format::format_count(metrics.total_calories)]);

        if !metrics.breakdown.is_empty() {
            table.add_row(vec!["", ""]);
            table.add_row(vec!["By type", "count"]);
            for ActivityTypeCount {
                activity_type,
                count,
            } in &metrics.breakdown
            {
                table.add_row(vec![activity_type.clone(), count.to_string()]);
            }
        }

        table.add_row(vec!["", ""]);
        table.add_row(vec![
            "Image:".to_string(),
            outcome.output_path.display().to_string(),
        ]);

        table.to_string()
    }

    /// Format the outcome as pretty-printed JSON.
    pub fn format_json(outcome: &PipelineOutcome) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&JsonReport {
            year: outcome.summary.year,
            output: &outcome.output_path,
            rows_read: outcome.summary.rows_read,
            summary: &outcome.summary.metrics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::YearSummary;
    use std::path::PathBuf;
    use std::time::Duration;

    fn outcome(metrics: SummaryMetrics) -> PipelineOutcome {
        PipelineOutcome {
            summary: YearSummary {
                year: 2024,
                metrics,
                rows_read: 9,
            },
            output_path: PathBuf::from("data/garmin-2024.png"),
        }
    }

    fn metrics() -> SummaryMetrics {
        SummaryMetrics {
            total_steps: 14_990,
            total_activities: 4,
            most_frequent: ActivityTypeCount::new("Běh", 2),
            total_duration: Duration::from_secs(13_732),
            total_distance_km: 59.33,
            total_elevation_m: 505.0,
            total_calories: 2_617,
            breakdown: vec![
                ActivityTypeCount::new("Běh", 2),
                ActivityTypeCount::new("Cyklistika", 1),
            ],
        }
    }

    #[test]
    fn test_table_lists_formatted_totals() {
        let table = SummaryReport::format_table(&outcome(metrics()));

        assert!(table.contains("Activity Summary: 2024"));
        assert!(table.contains("14 990"));
        assert!(table.contains("2x Běh"));
        assert!(table.contains("3h 48m"));
        assert!(table.contains("59.33 km"));
        assert!(table.contains("Cyklistika"));
        assert!(table.contains("data/garmin-2024.png"));
    }

    #[test]
    fn test_empty_year_table_has_no_breakdown() {
        let table = SummaryReport::format_table(&outcome(SummaryMetrics::empty()));
        assert!(table.contains("N/A"));
        assert!(!table.contains("By type"));
    }

    #[test]
    fn test_json_report_fields() {
        let json = SummaryReport::format_json(&outcome(metrics())).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["year"], 2024);
        assert_eq!(value["rows_read"], 9);
        assert_eq!(value["output"], "data/garmin-2024.png");
        assert_eq!(value["summary"]["total_steps"], 14_990);
        assert_eq!(value["summary"]["total_duration_secs"], 13_732);
        assert_eq!(value["summary"]["most_frequent"]["activity_type"], "Běh");
    }
}
