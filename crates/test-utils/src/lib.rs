//! Shared test utilities for the activity summary workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Sample CSV exports in both export locales
//! - Temporary export files
//! - Record builders
//! - Skip macros for tests that need system fonts
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{require_fonts, fixtures};
//! ```

pub mod fixtures;
pub mod generators;
pub mod paths;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;
pub use paths::*;

/// Macro to skip a test if the DejaVu fonts are not installed.
///
/// Evaluates to the directory holding `DejaVuSans.ttf` and
/// `DejaVuSans-Bold.ttf`.
///
/// # Usage
///
/// ```ignore
/// use test_utils::require_fonts;
///
/// #[test]
/// fn test_render() {
///     let font_dir = require_fonts!();
///     // Test code using font_dir...
/// }
/// ```
#[macro_export]
macro_rules! require_fonts {
    () => {{
        match $crate::find_font_dir() {
            Some(dir) => dir,
            None => {
                eprintln!("SKIPPED: DejaVu fonts not found. Install fonts-dejavu or set FONT_DIR.");
                return;
            }
        }
    }};
}

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64); // passes
/// assert_approx_eq!(1.1_f32, 1.0_f32, 0.001_f32);    // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}
