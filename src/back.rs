//! Generic card back.

use crate::gradient::vertical_gradient;
use crate::shapes::{fill_pixels, rasterize_ring, rasterize_stroke};
use image::{Rgb, RgbImage};
use std::collections::HashSet;

/// Card back dimensions (matches medium card art).
pub const BACK_SIZE: (u32, u32) = (280, 400);

const BACK_TOP: Rgb<u8> = Rgb([40, 40, 40]);
const BACK_BOTTOM: Rgb<u8> = Rgb([10, 10, 10]);

/// Outer border: inset, color
const OUTER_BORDER: (u32, Rgb<u8>) = (10, Rgb([200, 200, 200]));
/// Inner border: inset, color
const INNER_BORDER: (u32, Rgb<u8>) = (18, Rgb([120, 120, 120]));
const BORDER_WIDTH: i32 = 2;

const EMBLEM_RADIUS: i32 = 50;
const EMBLEM_WIDTH: i32 = 4;
const EMBLEM_COLOR: Rgb<u8> = Rgb([220, 220, 220]);

/// Render the default card back.
///
/// A near-black vertical gradient framed by two inset borders, with an
/// unfilled ring in the middle standing in for an emblem.
pub fn default_back() -> RgbImage {
    let (w, h) = BACK_SIZE;
    let mut img = vertical_gradient(w, h, BACK_TOP, BACK_BOTTOM);

    for (inset, color) in [OUTER_BORDER, INNER_BORDER] {
        let border = inset_border(w, h, inset);
        fill_pixels(&mut img, &border, color);
    }

    let ring = rasterize_ring((w / 2) as i32, (h / 2) as i32, EMBLEM_RADIUS, EMBLEM_WIDTH);
    fill_pixels(&mut img, &ring, EMBLEM_COLOR);

    img
}

/// Border spanning `(inset, inset)` to `(w - inset, h - inset)` inclusive.
fn inset_border(w: u32, h: u32, inset: u32) -> HashSet<(i32, i32)> {
    let inset = inset as i32;
    let (w, h) = (w as i32, h as i32);
    rasterize_stroke(inset, inset, w - 2 * inset + 1, h - 2 * inset + 1, BORDER_WIDTH)
}
