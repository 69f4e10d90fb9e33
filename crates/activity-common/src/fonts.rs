//! Where the DejaVu faces used by the summary card live on disk.

/// Regular face file name.
pub const REGULAR_FONT_FILE: &str = "DejaVuSans.ttf";
/// Bold face file name.
pub const BOLD_FONT_FILE: &str = "DejaVuSans-Bold.ttf";

/// Directories searched after any explicitly configured one.
pub const SYSTEM_FONT_DIRS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu",
    "/usr/share/fonts/dejavu",
    "/usr/share/fonts/TTF",
    "/usr/local/share/fonts",
];
