//! Activity summary service library.
//!
//! Exposes configuration, the parse/aggregate/render pipeline and console
//! reporting so they can be tested without spawning the binary.

pub mod config;
pub mod pipeline;
pub mod report;

pub use config::{Args, SummaryConfig};
pub use pipeline::{run, summarize_file, PipelineOutcome, YearSummary};
