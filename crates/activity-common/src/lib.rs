//! Common types shared across the activity summary crates.

pub mod error;
pub mod fonts;
pub mod metrics;
pub mod record;

pub use error::{SummaryError, SummaryResult};
pub use metrics::{ActivityTypeCount, SummaryMetrics, NO_ACTIVITY};
pub use record::ActivityRecord;
