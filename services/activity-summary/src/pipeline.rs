//! Parse, filter, aggregate, render, save.

use std::path::{Path, PathBuf};

use activity_common::{SummaryMetrics, SummaryResult};
use aggregator::{MetricAggregator, YearFilter};
use export_parser::RecordReader;
use renderer::{save_png, FontSet, SummaryRenderer};
use tracing::{info, warn};

use crate::config::SummaryConfig;

/// Metrics for one year plus how much of the export was read.
#[derive(Debug, Clone, PartialEq)]
pub struct YearSummary {
    pub year: i32,
    pub metrics: SummaryMetrics,
    pub rows_read: usize,
}

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub summary: YearSummary,
    pub output_path: PathBuf,
}

/// Stream the export at `path` and fold the records dated in `year`.
///
/// The first bad row aborts the run; nothing is partially summarised.
pub fn summarize_file(path: &Path, year: i32) -> SummaryResult<YearSummary> {
    let mut reader = RecordReader::from_path(path)?;
    let filter = YearFilter::new(year);
    let mut aggregator = MetricAggregator::new();

    for record in reader.by_ref() {
        let record = record?;
        if filter.matches(&record) {
            aggregator.push(&record);
        }
    }

    let rows_read = reader.rows_read();
    if aggregator.count() == 0 {
        warn!(year, rows_read, "No activities recorded in the target year; rendering an empty summary");
    }

    let metrics = aggregator.finish();
    info!(
        year,
        rows_read,
        activities = metrics.total_activities,
        "Aggregated export"
    );

    Ok(YearSummary {
        year,
        metrics,
        rows_read,
    })
}

/// Run the whole pipeline for `config`.
///
/// Fonts are loaded before the export is opened so a missing font fails fast.
pub fn run(config: &SummaryConfig) -> SummaryResult<PipelineOutcome> {
    let fonts = FontSet::load(&config.font_dirs)?;
    let renderer = SummaryRenderer::new(fonts);

    info!(input = %config.input.display(), year = config.year, "Summarising export");
    let summary = summarize_file(&config.input, config.year)?;

    let img = renderer.render(&summary.metrics, summary.year);
    save_png(&img, &config.output_path)?;

    Ok(PipelineOutcome {
        summary,
        output_path: config.output_path.clone(),
    })
}
