//! Fallback artwork shown when a card's own art is unavailable.
//!
//! Unlike every other asset, the placeholder is meant to be replaced by hand;
//! the pipeline only writes it when the file does not exist yet.

use crate::gradient::vertical_gradient;
use crate::label::{apply_label, label_text, LabelFont};
use image::{Rgb, RgbImage};

/// Placeholder dimensions (matches high-resolution card art).
pub const PLACEHOLDER_SIZE: (u32, u32) = (560, 800);

/// Text drawn on the placeholder.
pub const PLACEHOLDER_LABEL: &str = "Placeholder Art";

const PLACEHOLDER_TOP: Rgb<u8> = Rgb([90, 90, 90]);
const PLACEHOLDER_BOTTOM: Rgb<u8> = Rgb([30, 30, 30]);

/// Render the gray, labelled placeholder image.
pub fn placeholder_art(font: &LabelFont) -> RgbImage {
    let (w, h) = PLACEHOLDER_SIZE;
    let mut img = vertical_gradient(w, h, PLACEHOLDER_TOP, PLACEHOLDER_BOTTOM);
    apply_label(&mut img, &label_text(PLACEHOLDER_LABEL), font);
    img
}
