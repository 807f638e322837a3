//! Vertical linear gradients.

use image::{Rgb, RgbImage};

/// Render a vertical gradient from `top` at row 0 to `bottom` at the last row.
///
/// Every row is a single color. Channels are interpolated linearly and
/// rounded to the nearest integer, so the output is fully deterministic.
///
/// # Examples
///
/// ```
/// use cardart::gradient::vertical_gradient;
/// use image::Rgb;
///
/// let img = vertical_gradient(4, 3, Rgb([0, 0, 0]), Rgb([200, 100, 50]));
/// assert_eq!(img.get_pixel(0, 0), &Rgb([0, 0, 0]));
/// assert_eq!(img.get_pixel(3, 1), &Rgb([100, 50, 25]));
/// assert_eq!(img.get_pixel(2, 2), &Rgb([200, 100, 50]));
/// ```
pub fn vertical_gradient(width: u32, height: u32, top: Rgb<u8>, bottom: Rgb<u8>) -> RgbImage {
    let mut img = RgbImage::new(width, height);
    let span = height.saturating_sub(1);

    for y in 0..height {
        let color = row_color(top, bottom, y, span);
        for x in 0..width {
            img.put_pixel(x, y, color);
        }
    }

    img
}

/// Color of row `y` out of `span` interpolation steps.
fn row_color(top: Rgb<u8>, bottom: Rgb<u8>, y: u32, span: u32) -> Rgb<u8> {
    if span == 0 {
        return top;
    }
    let t = y as f64 / span as f64;
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    Rgb([mix(top[0], bottom[0]), mix(top[1], bottom[1]), mix(top[2], bottom[2])])
}
