//! Fixed summary layout.
//!
//! ```text
//!  +--------------------------------------+
//!  |  (icon) 14 990                     G |
//!  |         Steps                      A |
//!  |  (icon) 4                          R |
//!  |         Total activities           M |
//!  |   ... five more rows ...           I |
//!  |                                    N |
//!  |  ----------------------------------  |
//!  |                       connect 2024   |
//!  +--------------------------------------+
//! ```

use activity_common::SummaryMetrics;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_line_segment_mut, draw_text_mut};
use rusttype::{Font, Scale};
use tracing::debug;

use crate::fonts::{text_width, FontSet};
use crate::format;
use crate::gradient;
use crate::icons::{draw_icon, MetricKind};

pub const CANVAS_WIDTH: u32 = 900;
pub const CANVAS_HEIGHT: u32 = 1000;

const ROW_START_Y: i32 = 60;
const ROW_HEIGHT: i32 = 110;
const ICON_X: i32 = 50;
const ICON_SIZE: i32 = 40;
const VALUE_X: i32 = 100;
const LABEL_OFFSET_Y: i32 = 55;

const TITLE_SIZE: f32 = 48.0;
const VALUE_SIZE: f32 = 42.0;
const LABEL_SIZE: f32 = 24.0;

const TEXT_COLOR: Rgb<u8> = Rgb([255, 255, 255]);
const LABEL_COLOR: Rgb<u8> = Rgb([150, 180, 210]);
const RULE_COLOR: Rgb<u8> = Rgb([100, 130, 160]);

const BRAND: &str = "GARMIN";
const BRAND_X_FROM_RIGHT: i32 = 80;
const BRAND_TOP: i32 = 100;
const BRAND_LETTER_STEP: i32 = 50;

/// One metric row: formatted value over a static label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricPanel {
    pub kind: MetricKind,
    pub value: String,
    pub label: &'static str,
}

impl MetricPanel {
    /// Rows for every metric, in layout order.
    pub fn for_summary(metrics: &SummaryMetrics) -> Vec<MetricPanel> {
        MetricKind::ALL
            .iter()
            .map(|&kind| MetricPanel {
                kind,
                value: panel_value(kind, metrics),
                label: kind.label(),
            })
            .collect()
    }

    /// Top edge of the row at `index`.
    pub fn row_y(index: usize) -> i32 {
        ROW_START_Y + index as i32 * ROW_HEIGHT
    }
}

fn panel_value(kind: MetricKind, metrics: &SummaryMetrics) -> String {
    match kind {
        MetricKind::Steps => format::format_count(metrics.total_steps),
        MetricKind::Activities => format::format_count(metrics.total_activities),
        MetricKind::MostFrequent => format::format_most_frequent(&metrics.most_frequent),
        MetricKind::Time => format::format_duration(metrics.total_duration),
        MetricKind::Distance => format::format_distance(metrics.total_distance_km),
        MetricKind::Elevation => format::format_elevation(metrics.total_elevation_m),
        MetricKind::Calories => format::format_count(metrics.total_calories),
    }
}

/// Title shown at the bottom right.
pub fn title(year: i32) -> String {
    format!("connect {year}")
}

/// Draws summaries with a loaded [`FontSet`].
pub struct SummaryRenderer {
    fonts: FontSet,
}

impl SummaryRenderer {
    pub fn new(fonts: FontSet) -> Self {
        Self { fonts }
    }

    pub fn fonts(&self) -> &FontSet {
        &self.fonts
    }

    /// Render the full summary canvas for `year`.
    pub fn render(&self, metrics: &SummaryMetrics, year: i32) -> RgbImage {
        let mut img = gradient::background(CANVAS_WIDTH, CANVAS_HEIGHT);
        let width = CANVAS_WIDTH as i32;
        let height = CANVAS_HEIGHT as i32;

        for (i, panel) in MetricPanel::for_summary(metrics).iter().enumerate() {
            let y = MetricPanel::row_y(i);
            draw_icon(&mut img, panel.kind, ICON_X, y + 10, ICON_SIZE);
            draw_text(&mut img, &self.fonts.bold, VALUE_SIZE, VALUE_X, y, TEXT_COLOR, &panel.value);
            draw_text(
                &mut img,
                &self.fonts.regular,
                LABEL_SIZE,
                VALUE_X,
                y + LABEL_OFFSET_Y,
                LABEL_COLOR,
                panel.label,
            );
        }

        // Brand letters stacked down the right edge, each centred on one column
        let brand_x = width - BRAND_X_FROM_RIGHT;
        for (i, letter) in BRAND.chars().enumerate() {
            let letter = letter.to_string();
            let letter_width = text_width(&self.fonts.bold, TITLE_SIZE, &letter);
            let y = BRAND_TOP + i as i32 * BRAND_LETTER_STEP;
            draw_text(
                &mut img,
                &self.fonts.bold,
                TITLE_SIZE,
                brand_x - letter_width / 2,
                y,
                TEXT_COLOR,
                &letter,
            );
        }

        let rule_y = (height - 150) as f32;
        draw_line_segment_mut(&mut img, (50.0, rule_y), ((width - 50) as f32, rule_y), RULE_COLOR);

        let title = title(year);
        let title_width = text_width(&self.fonts.bold, TITLE_SIZE, &title);
        draw_text(
            &mut img,
            &self.fonts.bold,
            TITLE_SIZE,
            width - title_width - 50,
            height - 80,
            TEXT_COLOR,
            &title,
        );

        debug!(year, activities = metrics.total_activities, "Rendered summary canvas");
        img
    }
}

fn draw_text(
    img: &mut RgbImage,
    font: &Font<'_>,
    size: f32,
    x: i32,
    y: i32,
    color: Rgb<u8>,
    text: &str,
) {
    draw_text_mut(img, color, x, y, Scale::uniform(size), font, text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use activity_common::ActivityTypeCount;
    use std::time::Duration;

    fn sample_metrics() -> SummaryMetrics {
        SummaryMetrics {
            total_steps: 1_234_567,
            total_activities: 312,
            most_frequent: ActivityTypeCount::new("Running", 140),
            total_duration: Duration::from_secs(250 * 3600 + 15 * 60 + 30),
            total_distance_km: 2345.678,
            total_elevation_m: 18_765.4,
            total_calories: 210_000,
            breakdown: vec![ActivityTypeCount::new("Running", 140)],
        }
    }

    #[test]
    fn test_panels_follow_layout_order() {
        let panels = MetricPanel::for_summary(&sample_metrics());
        let values: Vec<&str> = panels.iter().map(|p| p.value.as_str()).collect();

        assert_eq!(
            values,
            vec![
                "1 234 567",
                "312",
                "140x Running",
                "250h 15m",
                "2 345.68 km",
                "18 765 m",
                "210 000",
            ]
        );
        assert_eq!(panels[0].label, "Steps");
        assert_eq!(panels[6].label, "Calories");
    }

    #[test]
    fn test_empty_summary_panels() {
        let panels = MetricPanel::for_summary(&SummaryMetrics::empty());
        let values: Vec<&str> = panels.iter().map(|p| p.value.as_str()).collect();

        assert_eq!(
            values,
            vec!["0", "0", "N/A", "0h 0m", "0.00 km", "0 m", "0"]
        );
    }

    #[test]
    fn test_rows_fit_above_the_rule() {
        let last_label_bottom =
            MetricPanel::row_y(MetricKind::ALL.len() - 1) + LABEL_OFFSET_Y + LABEL_SIZE as i32;
        assert!(last_label_bottom < CANVAS_HEIGHT as i32 - 150);
    }

    #[test]
    fn test_title_embeds_year() {
        assert_eq!(title(2024), "connect 2024");
    }
}
