//! Simple vector icons drawn next to each metric.

use image::{Rgb, RgbImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_ellipse_mut, draw_hollow_circle_mut,
    draw_line_segment_mut, draw_polygon_mut,
};
use imageproc::point::Point;

/// The seven metrics shown on the summary, in layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Steps,
    Activities,
    MostFrequent,
    Time,
    Distance,
    Elevation,
    Calories,
}

impl MetricKind {
    pub const ALL: [MetricKind; 7] = [
        MetricKind::Steps,
        MetricKind::Activities,
        MetricKind::MostFrequent,
        MetricKind::Time,
        MetricKind::Distance,
        MetricKind::Elevation,
        MetricKind::Calories,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MetricKind::Steps => "Steps",
            MetricKind::Activities => "Total activities",
            MetricKind::MostFrequent => "Most frequent activity",
            MetricKind::Time => "Activity time",
            MetricKind::Distance => "Distance",
            MetricKind::Elevation => "Elevation gain",
            MetricKind::Calories => "Calories",
        }
    }

    pub fn color(&self) -> Rgb<u8> {
        match self {
            MetricKind::Steps => Rgb([100, 149, 237]),       // cornflower blue
            MetricKind::Activities => Rgb([255, 99, 71]),    // tomato
            MetricKind::MostFrequent => Rgb([255, 165, 0]),  // orange
            MetricKind::Time => Rgb([218, 112, 214]),        // orchid
            MetricKind::Distance => Rgb([255, 200, 100]),    // gold
            MetricKind::Elevation => Rgb([50, 205, 50]),     // lime green
            MetricKind::Calories => Rgb([255, 69, 0]),       // red-orange
        }
    }
}

/// Draw the icon for `kind` inside the `size`×`size` square at `(x, y)`.
pub fn draw_icon(img: &mut RgbImage, kind: MetricKind, x: i32, y: i32, size: i32) {
    let color = kind.color();
    let s = size;

    match kind {
        MetricKind::Steps => {
            // Two footprints
            draw_filled_ellipse_mut(img, (x + s / 4, y + s / 2), s / 4, s / 2, color);
            draw_filled_ellipse_mut(img, (x + 3 * s / 4, y + s / 2), s / 4, s / 4, color);
        }
        MetricKind::Activities => {
            // Figure with arms out
            draw_filled_circle_mut(img, (x + s / 2, y + s / 6), s / 6, color);
            thick_line(img, (x + s / 2, y + s / 3), (x + s / 2, y + 2 * s / 3), 3, color);
            thick_line(img, (x + s / 4, y + s / 2), (x + 3 * s / 4, y + s / 2), 3, color);
            thick_line(img, (x + s / 2, y + 2 * s / 3), (x + s / 4, y + s), 3, color);
            thick_line(img, (x + s / 2, y + 2 * s / 3), (x + 3 * s / 4, y + s), 3, color);
        }
        MetricKind::MostFrequent => {
            // Badge
            ring(img, (x + s / 2, y + s / 2), s / 2, 2, color);
            draw_filled_circle_mut(img, (x + s / 2, y + s / 2), s / 4, color);
        }
        MetricKind::Time => {
            // Clock
            let center = (x + s / 2, y + s / 2);
            ring(img, center, s / 2, 3, color);
            thick_line(img, center, (x + s / 2, y + s / 4), 2, color);
            thick_line(img, center, (x + 3 * s / 4, y + s / 2), 2, color);
        }
        MetricKind::Distance => {
            // Road in perspective
            let corners = [
                (x, y + s),
                (x + s / 3, y),
                (x + 2 * s / 3, y),
                (x + s, y + s),
            ];
            for i in 0..corners.len() {
                let next = corners[(i + 1) % corners.len()];
                thick_line(img, corners[i], next, 2, color);
            }
        }
        MetricKind::Elevation => {
            // Mountain
            let peak = [
                Point::new(x, y + s),
                Point::new(x + s / 2, y),
                Point::new(x + s, y + s),
            ];
            draw_polygon_mut(img, &peak, color);
        }
        MetricKind::Calories => {
            // Flame
            draw_filled_ellipse_mut(img, (x + s / 2, y + 2 * s / 3), s / 4, s / 3, color);
            let tip = [
                Point::new(x + s / 2, y),
                Point::new(x + s / 4, y + s / 2),
                Point::new(x + 3 * s / 4, y + s / 2),
            ];
            draw_polygon_mut(img, &tip, color);
        }
    }
}

/// Line segment `width` pixels thick, widened perpendicular to its dominant axis.
fn thick_line(img: &mut RgbImage, start: (i32, i32), end: (i32, i32), width: i32, color: Rgb<u8>) {
    let horizontal = (end.0 - start.0).abs() >= (end.1 - start.1).abs();
    for offset in 0..width.max(1) {
        let d = (offset - width / 2) as f32;
        let (dx, dy) = if horizontal { (0.0, d) } else { (d, 0.0) };
        draw_line_segment_mut(
            img,
            (start.0 as f32 + dx, start.1 as f32 + dy),
            (end.0 as f32 + dx, end.1 as f32 + dy),
            color,
        );
    }
}

/// Circle outline `width` pixels thick, growing inwards from `radius`.
fn ring(img: &mut RgbImage, center: (i32, i32), radius: i32, width: i32, color: Rgb<u8>) {
    for inset in 0..width.max(1) {
        draw_hollow_circle_mut(img, center, radius - inset, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_paints_inside_its_box() {
        for kind in MetricKind::ALL {
            let background = Rgb([0, 0, 0]);
            let mut img = RgbImage::from_pixel(80, 80, background);
            draw_icon(&mut img, kind, 20, 20, 40);

            let painted: Vec<(u32, u32)> = img
                .enumerate_pixels()
                .filter(|(_, _, p)| **p == kind.color())
                .map(|(x, y, _)| (x, y))
                .collect();

            assert!(!painted.is_empty(), "{kind:?} drew nothing");
            assert!(
                painted
                    .iter()
                    .all(|&(x, y)| (18..=62).contains(&x) && (18..=62).contains(&y)),
                "{kind:?} drew outside its box"
            );
        }
    }

    #[test]
    fn test_labels_and_colors_are_distinct() {
        for (i, a) in MetricKind::ALL.iter().enumerate() {
            for b in &MetricKind::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
                assert_ne!(a.color(), b.color());
            }
        }
    }
}
