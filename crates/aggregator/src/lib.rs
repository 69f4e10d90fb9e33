//! Year selection and metric aggregation.
//!
//! Both stages are pure: the target year comes in as a parameter and the
//! aggregator never touches I/O or the clock.

pub mod aggregate;
pub mod filter;

pub use aggregate::{aggregate, MetricAggregator};
pub use filter::YearFilter;
