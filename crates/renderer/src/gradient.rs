//! Vertical gradient background.

use image::{Rgb, RgbImage};

/// Top colour of the background (dark blue).
pub const GRADIENT_TOP: Rgb<u8> = Rgb([0, 40, 80]);
/// Bottom colour of the background (lighter blue).
pub const GRADIENT_BOTTOM: Rgb<u8> = Rgb([0, 80, 140]);

/// Linear interpolation between two colours, `t` clamped to `[0, 1]`.
pub fn interpolate_color(from: Rgb<u8>, to: Rgb<u8>, t: f32) -> Rgb<u8> {
    let t = t.clamp(0.0, 1.0);
    let t_inv = 1.0 - t;
    let channel = |i: usize| ((from[i] as f32 * t_inv) + (to[i] as f32 * t)) as u8;
    Rgb([channel(0), channel(1), channel(2)])
}

/// Canvas filled row by row from `top` to `bottom`.
pub fn vertical_gradient(width: u32, height: u32, top: Rgb<u8>, bottom: Rgb<u8>) -> RgbImage {
    let mut img = RgbImage::new(width, height);
    for y in 0..height {
        let color = interpolate_color(top, bottom, y as f32 / height as f32);
        for x in 0..width {
            img.put_pixel(x, y, color);
        }
    }
    img
}

/// The summary background.
pub fn background(width: u32, height: u32) -> RgbImage {
    vertical_gradient(width, height, GRADIENT_TOP, GRADIENT_BOTTOM)
}
