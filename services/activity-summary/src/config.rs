//! Command-line and environment configuration.

use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use clap::Parser;
use renderer::{output_path, FontSet};

pub const DEFAULT_INPUT: &str = "data/Activities.csv";

/// Render a yearly summary image from a Garmin Connect activity export.
#[derive(Parser, Debug, Clone)]
#[command(name = "activity-summary")]
#[command(about = "Render a yearly activity summary image from a Garmin Connect CSV export")]
pub struct Args {
    /// Activity export (CSV, Czech or English headers)
    #[arg(short, long, default_value = DEFAULT_INPUT, env = "CSV_PATH")]
    pub input: PathBuf,

    /// Calendar year to summarise (defaults to the current year)
    #[arg(short, long, env = "YEAR")]
    pub year: Option<i32>,

    /// Directory for garmin-{year}.png (defaults to the input's directory)
    #[arg(short, long, env = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Directory holding DejaVuSans.ttf and DejaVuSans-Bold.ttf
    #[arg(long, env = "FONT_DIR")]
    pub font_dir: Option<PathBuf>,

    /// Print the summary as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    pub log_level: String,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryConfig {
    pub input: PathBuf,
    pub year: i32,
    pub output_path: PathBuf,
    pub font_dirs: Vec<PathBuf>,
    pub json: bool,
}

impl SummaryConfig {
    /// Resolve defaults against `today`, which the caller reads from the clock.
    pub fn resolve(args: &Args, today: NaiveDate) -> Self {
        let year = args.year.unwrap_or_else(|| today.year());
        let output_dir = args
            .output_dir
            .clone()
            .unwrap_or_else(|| input_dir(&args.input));

        Self {
            input: args.input.clone(),
            year,
            output_path: output_path(&output_dir, year),
            font_dirs: FontSet::search_dirs(args.font_dir.as_deref()),
            json: args.json,
        }
    }
}

/// Directory containing `input`; `.` for a bare file name.
fn input_dir(input: &Path) -> PathBuf {
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
