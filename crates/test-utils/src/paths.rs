//! Path helpers for test inputs and outputs.

use std::fs;
use std::path::{Path, PathBuf};

use activity_common::fonts::{BOLD_FONT_FILE, REGULAR_FONT_FILE, SYSTEM_FONT_DIRS};

/// Finds a directory containing both DejaVu font files.
///
/// Checks `FONT_DIR` first, then the usual system locations.
pub fn find_font_dir() -> Option<PathBuf> {
    let mut candidates = Vec::new();
    if let Ok(dir) = std::env::var("FONT_DIR") {
        candidates.push(PathBuf::from(dir));
    }
    candidates.extend(SYSTEM_FONT_DIRS.iter().map(PathBuf::from));

    candidates
        .into_iter()
        .find(|dir| dir.join(REGULAR_FONT_FILE).is_file() && dir.join(BOLD_FONT_FILE).is_file())
}

/// Creates a temporary directory for test output.
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn temp_test_dir() -> tempfile::TempDir {
    tempfile::Builder::new()
        .prefix("activity_summary_")
        .tempdir()
        .expect("Failed to create temporary test directory")
}

/// Writes `contents` to `name` inside `dir` and returns the full path.
pub fn write_export(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write test export");
    path
}
