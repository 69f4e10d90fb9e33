//! Summary image rendering.
//!
//! Lays the yearly totals out on a fixed 900×1000 canvas:
//! - Gradient background
//! - One row per metric: icon, value, label
//! - Brand lettering and the `connect {year}` title
//! - PNG output named after the year

pub mod fonts;
pub mod format;
pub mod gradient;
pub mod icons;
pub mod layout;
pub mod output;

pub use fonts::FontSet;
pub use layout::{MetricPanel, SummaryRenderer};
pub use output::{output_path, save_png};
