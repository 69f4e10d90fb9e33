//! Activity Summary CLI
//!
//! Turns a Garmin Connect activity export into a yearly summary image.

use std::process::ExitCode;

use activity_common::SummaryError;
use anyhow::Context;
use chrono::Local;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use activity_summary::pipeline;
use activity_summary::report::SummaryReport;
use activity_summary::{Args, SummaryConfig};

fn main() -> ExitCode {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = SummaryConfig::resolve(&args, Local::now().date_naive());

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let summary_err = err.downcast_ref::<SummaryError>();
            let stage = summary_err.map(SummaryError::stage).unwrap_or("output");
            error!(stage, error = %err, "Activity summary failed");
            eprintln!("error: {err:#}");
            ExitCode::from(summary_err.map(SummaryError::exit_code).unwrap_or(1))
        }
    }
}

fn run(config: &SummaryConfig) -> anyhow::Result<()> {
    info!(
        input = %config.input.display(),
        year = config.year,
        output = %config.output_path.display(),
        "Starting activity summary"
    );

    let outcome = pipeline::run(config)?;

    let report = if config.json {
        SummaryReport::format_json(&outcome).context("failed to serialise summary")?
    } else {
        SummaryReport::format_table(&outcome)
    };
    println!("{report}");

    Ok(())
}
