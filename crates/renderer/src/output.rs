//! PNG output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use activity_common::{SummaryError, SummaryResult};
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, RgbImage};
use tracing::info;

/// `{dir}/garmin-{year}.png`; repeat runs for a year overwrite the same file.
pub fn output_path(dir: &Path, year: i32) -> PathBuf {
    dir.join(format!("garmin-{year}.png"))
}

/// Encode `img` as PNG at `path`, creating or truncating the file.
pub fn save_png(img: &RgbImage, path: &Path) -> SummaryResult<()> {
    let render_err =
        |e: &dyn std::fmt::Display| SummaryError::Render(format!("cannot write {}: {}", path.display(), e));

    let file = File::create(path).map_err(|e| render_err(&e))?;
    let mut writer = BufWriter::new(file);

    PngEncoder::new(&mut writer)
        .write_image(img.as_raw(), img.width(), img.height(), ColorType::Rgb8)
        .map_err(|e| render_err(&e))?;
    writer.flush().map_err(|e| render_err(&e))?;

    info!(path = %path.display(), width = img.width(), height = img.height(), "Saved summary image");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use test_utils::temp_test_dir;

    #[test]
    fn test_output_path_embeds_year() {
        let path = output_path(Path::new("/data"), 2024);
        assert_eq!(path, PathBuf::from("/data/garmin-2024.png"));
    }

    #[test]
    fn test_save_png_writes_decodable_file() {
        let dir = temp_test_dir();
        let path = output_path(dir.path(), 2023);
        let img = RgbImage::from_pixel(4, 3, Rgb([10, 20, 30]));

        save_png(&img, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded, img);
    }

    #[test]
    fn test_save_png_overwrites_existing_file() {
        let dir = temp_test_dir();
        let path = output_path(dir.path(), 2023);
        std::fs::write(&path, b"stale").unwrap();

        save_png(&RgbImage::new(2, 2), &path).unwrap();
        assert_eq!(image::open(&path).unwrap().width(), 2);
    }

    #[test]
    fn test_unwritable_path_is_render_error() {
        let dir = temp_test_dir();
        let path = dir.path().join("missing").join("garmin-2024.png");

        let err = save_png(&RgbImage::new(2, 2), &path).unwrap_err();
        assert!(matches!(err, SummaryError::Render(_)));
        assert!(err.to_string().contains("missing"));
    }
}
