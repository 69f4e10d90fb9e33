//! TrueType font loading.
//!
//! Fonts are read from disk once at startup. There is no built-in fallback
//! face, so a missing font is a fatal configuration error.

use std::fs;
use std::path::{Path, PathBuf};

pub use activity_common::fonts::{BOLD_FONT_FILE, REGULAR_FONT_FILE, SYSTEM_FONT_DIRS};
use activity_common::{SummaryError, SummaryResult};
use rusttype::{point, Font, Scale};
use tracing::{debug, info};

/// The two faces the summary layout uses.
pub struct FontSet {
    pub regular: Font<'static>,
    pub bold: Font<'static>,
    /// Directory the faces were loaded from
    pub source_dir: PathBuf,
}

impl FontSet {
    /// Search path: the configured directory first, then the system locations.
    pub fn search_dirs(configured: Option<&Path>) -> Vec<PathBuf> {
        configured
            .map(Path::to_path_buf)
            .into_iter()
            .chain(SYSTEM_FONT_DIRS.iter().map(PathBuf::from))
            .collect()
    }

    /// Load both faces from the first directory that holds them.
    pub fn load(search_dirs: &[PathBuf]) -> SummaryResult<Self> {
        for dir in search_dirs {
            let regular_path = dir.join(REGULAR_FONT_FILE);
            let bold_path = dir.join(BOLD_FONT_FILE);
            if !(regular_path.is_file() && bold_path.is_file()) {
                debug!(dir = %dir.display(), "Fonts not found in directory");
                continue;
            }

            let regular = load_font(&regular_path)?;
            let bold = load_font(&bold_path)?;
            info!(dir = %dir.display(), "Loaded fonts");
            return Ok(Self {
                regular,
                bold,
                source_dir: dir.clone(),
            });
        }

        let searched: Vec<String> = search_dirs.iter().map(|d| d.display().to_string()).collect();
        Err(SummaryError::Render(format!(
            "fonts {} and {} not found in any of: {}",
            REGULAR_FONT_FILE,
            BOLD_FONT_FILE,
            searched.join(", ")
        )))
    }
}

fn load_font(path: &Path) -> SummaryResult<Font<'static>> {
    let data = fs::read(path)
        .map_err(|e| SummaryError::Render(format!("cannot read font {}: {}", path.display(), e)))?;
    Font::try_from_vec(data)
        .ok_or_else(|| SummaryError::Render(format!("invalid font file {}", path.display())))
}

/// Width in pixels of `text` laid out at `size`.
pub fn text_width(font: &Font<'_>, size: f32, text: &str) -> i32 {
    let scale = Scale::uniform(size);
    font.layout(text, scale, point(0.0, 0.0))
        .filter_map(|glyph| glyph.pixel_bounding_box())
        .map(|bb| bb.max.x)
        .max()
        .unwrap_or(0)
}
