//! Procedural overlay textures.
//!
//! Four fixed generators, none of which depend on card data:
//!
//! - **Holographic stripes**: diagonal rainbow bands at partial opacity
//! - **Foil texture**: a gray crosshatch of lighter and darker diagonals
//! - **Premium shine**: a soft radial highlight toward the top-left
//! - **Promo stamp**: a gold disc with a white star
//!
//! Shapes are painted back to front and each shape overwrites the pixels
//! beneath it, alpha included; nothing is blended.

use crate::shapes::{
    fill_pixels, rasterize_circle, rasterize_line, rasterize_polygon, rasterize_ring,
};
use image::{GrayImage, Luma, Rgba, RgbImage, RgbaImage};

/// Size of the holographic and shine overlays (matches medium card art).
pub const OVERLAY_SIZE: (u32, u32) = (280, 400);

/// Edge length of the square foil texture.
pub const FOIL_SIZE: u32 = 512;

/// Edge length of the square promo stamp.
pub const STAMP_SIZE: u32 = 80;

/// Width of each holographic band.
pub const STRIPE_STEP: i32 = 20;

/// Alpha of every holographic band (about 24% opacity).
pub const STRIPE_ALPHA: u8 = 60;

/// Band colors in cycle order: red, orange, yellow, green, blue, indigo, violet.
pub const STRIPE_HUES: [[u8; 3]; 7] = [
    [255, 0, 0],
    [255, 165, 0],
    [255, 255, 0],
    [0, 128, 0],
    [0, 0, 255],
    [75, 0, 130],
    [238, 130, 238],
];

const FOIL_BASE: u8 = 128;
const FOIL_LIGHT: u8 = 170;
const FOIL_DARK: u8 = 85;
const FOIL_SPACING: usize = 8;

const SHINE_STEP: usize = 8;
const SHINE_PEAK_ALPHA: f64 = 80.0;

/// Opaque gold fill of the promo stamp.
pub const STAMP_GOLD: Rgba<u8> = Rgba([255, 215, 0, 255]);
/// Darker gold outline of the promo stamp.
pub const STAMP_OUTLINE: Rgba<u8> = Rgba([230, 180, 0, 255]);
/// Near-opaque white of the stamp's star.
pub const STAMP_STAR: Rgba<u8> = Rgba([255, 255, 255, 220]);
const STAMP_OUTLINE_WIDTH: i32 = 3;
const STAMP_STAR_POINTS: [(i32, i32); 10] = [
    (40, 12),
    (47, 32),
    (68, 32),
    (51, 44),
    (58, 64),
    (40, 52),
    (22, 64),
    (29, 44),
    (12, 32),
    (33, 32),
];

/// Diagonal rainbow stripes with transparency.
///
/// Bands are parallelograms leaning 45 degrees. The sweep starts one canvas
/// height left of the canvas and ends one height right of it, so the sheared
/// bands cover every pixel.
pub fn holographic_stripes() -> RgbaImage {
    let (w, h) = OVERLAY_SIZE;
    let (w, h) = (w as i32, h as i32);
    let mut img = RgbaImage::new(w as u32, h as u32);

    let mut i = -h;
    while i < w + h {
        let index = i.div_euclid(STRIPE_STEP).rem_euclid(STRIPE_HUES.len() as i32);
        let hue = STRIPE_HUES[index as usize];
        let band = rasterize_polygon(&[
            (i, 0),
            (i + STRIPE_STEP, 0),
            (i - h + STRIPE_STEP, h),
            (i - h, h),
        ]);
        fill_pixels(&mut img, &band, Rgba([hue[0], hue[1], hue[2], STRIPE_ALPHA]));
        i += STRIPE_STEP;
    }

    img
}

/// Gray crosshatch simulating an etched foil, promoted to RGB.
///
/// One family of anti-diagonals every 8 pixels runs through the top-left
/// half in the light shade; a second family through the bottom-right half
/// uses the dark shade.
pub fn foil_texture() -> RgbImage {
    let size = FOIL_SIZE as i32;
    let mut tex = GrayImage::from_pixel(FOIL_SIZE, FOIL_SIZE, Luma([FOIL_BASE]));

    for i in (0..size).step_by(FOIL_SPACING) {
        fill_pixels(&mut tex, &rasterize_line((i, 0), (0, i)), Luma([FOIL_LIGHT]));
        fill_pixels(&mut tex, &rasterize_line((size, i), (i, size)), Luma([FOIL_DARK]));
    }

    image::DynamicImage::ImageLuma8(tex).to_rgb8()
}

/// Radial white highlight centered at a quarter of the canvas size.
///
/// Concentric discs shrink from half the canvas diagonal to zero in 8px
/// steps; each smaller disc overwrites the previous one with a higher alpha,
/// `80 * (1 - r / max_r)`, which reads as a glow toward the center.
pub fn premium_shine() -> RgbaImage {
    let (w, h) = OVERLAY_SIZE;
    let mut img = RgbaImage::new(w, h);

    let cx = (w / 4) as i32;
    let cy = (h / 4) as i32;
    let max_r = shine_max_radius(w, h);

    for r in (1..=max_r).rev().step_by(SHINE_STEP) {
        let alpha = shine_alpha(r, max_r);
        fill_pixels(&mut img, &rasterize_circle(cx, cy, r), Rgba([255, 255, 255, alpha]));
    }

    img
}

/// Radius of the outermost shine disc: half the canvas diagonal, floored.
pub fn shine_max_radius(w: u32, h: u32) -> i32 {
    (((w as f64).powi(2) + (h as f64).powi(2)).sqrt() / 2.0) as i32
}

/// Alpha of the shine disc with radius `r`.
pub fn shine_alpha(r: i32, max_r: i32) -> u8 {
    if max_r <= 0 {
        return 0;
    }
    (SHINE_PEAK_ALPHA * (1.0 - r as f64 / max_r as f64)).max(0.0) as u8
}

/// Gold promo stamp with a ten-point star, transparent outside the disc.
pub fn promo_stamp() -> RgbaImage {
    let mut img = RgbaImage::new(STAMP_SIZE, STAMP_SIZE);
    let center = (STAMP_SIZE / 2) as i32;
    let radius = (STAMP_SIZE / 2) as i32;

    fill_pixels(&mut img, &rasterize_circle(center, center, radius), STAMP_GOLD);
    fill_pixels(
        &mut img,
        &rasterize_ring(center, center, radius, STAMP_OUTLINE_WIDTH),
        STAMP_OUTLINE,
    );
    fill_pixels(&mut img, &rasterize_polygon(&STAMP_STAR_POINTS), STAMP_STAR);

    img
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holographic_dimensions_and_coverage() {
        let img = holographic_stripes();
        assert_eq!(img.dimensions(), OVERLAY_SIZE);
        for p in img.pixels() {
            assert_eq!(p[3], STRIPE_ALPHA);
        }
    }

    #[test]
    fn test_holographic_bands_follow_diagonal() {
        let img = holographic_stripes();
        // Bands run along x + y = const, leaning right as they rise
        for (x, y) in [(10u32, 10u32), (100, 50), (200, 300)] {
            assert_eq!(img.get_pixel(x, y), img.get_pixel(x + 1, y - 1));
        }
    }

    #[test]
    fn test_holographic_uses_all_hues() {
        let img = holographic_stripes();
        for hue in STRIPE_HUES {
            assert!(
                img.pixels().any(|p| p[0] == hue[0] && p[1] == hue[1] && p[2] == hue[2]),
                "hue {:?} missing",
                hue
            );
        }
    }

    #[test]
    fn test_holographic_first_band_color() {
        let img = holographic_stripes();
        // Pixel (0, 0) lies in the band starting at i = 0: hue index 0
        assert_eq!(img.get_pixel(0, 0), &Rgba([255, 0, 0, STRIPE_ALPHA]));
        // Band starting at i = 20 has hue index 1
        assert_eq!(img.get_pixel(25, 0), &Rgba([255, 165, 0, STRIPE_ALPHA]));
    }

    #[test]
    fn test_foil_shades() {
        let img = foil_texture();
        assert_eq!(img.dimensions(), (FOIL_SIZE, FOIL_SIZE));
        // (4, 4) lies on the anti-diagonal x + y = 8
        assert_eq!(img.get_pixel(4, 4).0, [FOIL_LIGHT; 3]);
        // (5, 4) lies between lines
        assert_eq!(img.get_pixel(5, 4).0, [FOIL_BASE; 3]);
        // (510, 506) lies on the dark line from (512, 504) to (504, 512)
        assert_eq!(img.get_pixel(510, 506).0, [FOIL_DARK; 3]);
    }

    #[test]
    fn test_foil_is_gray() {
        let img = foil_texture();
        for p in img.pixels() {
            assert!(p[0] == p[1] && p[1] == p[2]);
        }
    }

    #[test]
    fn test_shine_radius_and_alpha() {
        assert_eq!(shine_max_radius(280, 400), 244);
        assert_eq!(shine_alpha(244, 244), 0);
        assert_eq!(shine_alpha(4, 244), 78);
        assert_eq!(shine_alpha(0, 0), 0);
    }

    #[test]
    fn test_shine_brightest_at_center() {
        let img = premium_shine();
        assert_eq!(img.dimensions(), OVERLAY_SIZE);
        let center = img.get_pixel(70, 100)[3];
        let mid = img.get_pixel(140, 200)[3];
        let far = img.get_pixel(279, 399)[3];
        assert!(center > mid);
        assert!(mid > far);
        assert_eq!(img.get_pixel(70, 100), &Rgba([255, 255, 255, 78]));
    }

    #[test]
    fn test_stamp_corners_transparent() {
        let img = promo_stamp();
        assert_eq!(img.dimensions(), (STAMP_SIZE, STAMP_SIZE));
        for (x, y) in [(0, 0), (79, 0), (0, 79), (79, 79), (5, 5)] {
            assert_eq!(img.get_pixel(x, y)[3], 0, "corner ({}, {})", x, y);
        }
    }

    #[test]
    fn test_stamp_body_gold_outline_star() {
        let img = promo_stamp();
        // Inside the disc, below the star's lower notch
        assert_eq!(img.get_pixel(40, 66), &STAMP_GOLD);
        assert_eq!(img.get_pixel(20, 40), &STAMP_GOLD);
        // Rim
        assert_eq!(img.get_pixel(40, 79), &STAMP_OUTLINE);
        assert_eq!(img.get_pixel(1, 40), &STAMP_OUTLINE);
        // Star center
        assert_eq!(img.get_pixel(40, 40), &STAMP_STAR);
    }

    #[test]
    fn test_patterns_deterministic() {
        assert_eq!(holographic_stripes(), holographic_stripes());
        assert_eq!(foil_texture(), foil_texture());
        assert_eq!(premium_shine(), premium_shine());
        assert_eq!(promo_stamp(), promo_stamp());
    }
}
