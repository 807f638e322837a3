//! Per-card front artwork.

use crate::catalog::CardEntry;
use crate::gradient::vertical_gradient;
use crate::label::{apply_label, label_text, LabelFont};
use crate::layout::Resolution;
use crate::palette::gradient_for;
use image::RgbImage;

/// Render the art for `card` at `resolution`.
///
/// The card's color category picks the gradient; the id, with underscores
/// shown as spaces, is drawn in the bottom-left corner.
pub fn card_art(card: &CardEntry, resolution: Resolution, font: &LabelFont) -> RgbImage {
    let (w, h) = resolution.size();
    let spec = gradient_for(&card.color);
    let mut img = vertical_gradient(w, h, spec.top, spec.bottom);
    apply_label(&mut img, &label_text(&card.id), font);
    img
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_card_art_sizes() {
        let card = CardEntry::new("red_pawn_goblin", "red");
        for res in Resolution::ALL {
            assert_eq!(card_art(&card, res, &LabelFont::Bitmap).dimensions(), res.size());
        }
    }

    #[test]
    fn test_card_art_uses_category_gradient() {
        let card = CardEntry::new("blue_knight", "blue");
        let img = card_art(&card, Resolution::Medium, &LabelFont::Bitmap);
        // Top-right corner stays clear of the label
        assert_eq!(img.get_pixel(279, 0), &Rgb([30, 136, 229]));
        assert_eq!(img.get_pixel(279, 399), &Rgb([21, 101, 192]));
    }

    #[test]
    fn test_unknown_color_renders_red() {
        let teal = card_art(&CardEntry::new("x", "teal"), Resolution::Low, &LabelFont::Bitmap);
        let red = card_art(&CardEntry::new("x", "red"), Resolution::Low, &LabelFont::Bitmap);
        assert_eq!(teal, red);
    }

    #[test]
    fn test_card_art_is_labelled() {
        let card = CardEntry::new("skeleton_001", "green");
        let img = card_art(&card, Resolution::High, &LabelFont::Bitmap);
        let spec = gradient_for("green");
        assert_ne!(img, vertical_gradient(560, 800, spec.top, spec.bottom));
    }
}
