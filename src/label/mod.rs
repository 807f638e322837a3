//! Text labels drawn onto card art.
//!
//! A label is anchored to the bottom-left corner with a margin proportional
//! to the image width, and drawn twice: a black shadow offset by two pixels,
//! then the white text on top. Labels never fail to draw; without a usable
//! TrueType font the built-in bitmap font is used instead.

pub mod bitmap;

use ab_glyph::{point, Font, FontVec, OutlinedGlyph, PxScale, ScaleFont};
use image::{Rgb, RgbImage};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Smallest scalable font size in pixels.
pub const MIN_FONT_PX: u32 = 12;

/// Offset of the drop shadow from the text, in pixels.
pub const SHADOW_OFFSET: i64 = 2;

const SHADOW: Rgb<u8> = Rgb([0, 0, 0]);
const FOREGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Error loading a TrueType font.
#[derive(Debug, Error)]
pub enum FontError {
    /// The font file could not be read
    #[error("failed to read font {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not a font ab_glyph understands
    #[error("invalid font data in {0}")]
    Invalid(PathBuf),
}

/// Font used to draw labels.
pub enum LabelFont {
    /// TrueType/OpenType font loaded from disk, scaled to the image width
    Scalable { font: FontVec, path: PathBuf },
    /// Fixed-size built-in bitmap font
    Bitmap,
}

impl fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelFont::Scalable { path, .. } => {
                f.debug_struct("Scalable").field("path", path).finish()
            }
            LabelFont::Bitmap => write!(f, "Bitmap"),
        }
    }
}

impl LabelFont {
    /// Load a TrueType/OpenType font file.
    pub fn from_file(path: &Path) -> Result<Self, FontError> {
        let data = std::fs::read(path)
            .map_err(|source| FontError::Io { path: path.to_path_buf(), source })?;
        let font = FontVec::try_from_vec(data)
            .map_err(|_| FontError::Invalid(path.to_path_buf()))?;
        Ok(LabelFont::Scalable { font, path: path.to_path_buf() })
    }

    /// Use the first candidate that loads, or the bitmap font if none do.
    pub fn discover(candidates: &[PathBuf]) -> Self {
        candidates.iter().find_map(|p| Self::from_file(p).ok()).unwrap_or(LabelFont::Bitmap)
    }

    /// Whether this is a scalable font rather than the bitmap fallback.
    pub fn is_scalable(&self) -> bool {
        matches!(self, LabelFont::Scalable { .. })
    }

    /// Short description for progress output.
    pub fn describe(&self) -> String {
        match self {
            LabelFont::Scalable { path, .. } => path.display().to_string(),
            LabelFont::Bitmap => "built-in bitmap font".to_string(),
        }
    }
}

/// Human-readable label for a card identifier: underscores become spaces.
///
/// # Examples
///
/// ```
/// use cardart::label::label_text;
///
/// assert_eq!(label_text("red_pawn_goblin"), "red pawn goblin");
/// ```
pub fn label_text(id: &str) -> String {
    id.replace('_', " ")
}

/// Scalable font size for an image of the given width.
pub fn font_px(width: u32) -> u32 {
    (width / 18).max(MIN_FONT_PX)
}

/// Distance of the label from the left and bottom edges.
pub fn margin(width: u32) -> u32 {
    width / 20
}

/// Rendered text as a coverage grid with its ink box at the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct TextMask {
    /// Ink box width in pixels
    pub width: u32,
    /// Ink box height in pixels
    pub height: u32,
    coverage: Vec<f32>,
}

impl TextMask {
    fn new(width: u32, height: u32) -> Self {
        Self { width, height, coverage: vec![0.0; (width * height) as usize] }
    }

    fn add(&mut self, x: u32, y: u32, c: f32) {
        if x < self.width && y < self.height {
            let cell = &mut self.coverage[(y * self.width + x) as usize];
            *cell = cell.max(c.clamp(0.0, 1.0));
        }
    }

    /// Coverage at (x, y) in `0.0..=1.0`.
    pub fn coverage(&self, x: u32, y: u32) -> f32 {
        if x < self.width && y < self.height {
            self.coverage[(y * self.width + x) as usize]
        } else {
            0.0
        }
    }

    /// Whether the text produced any ink at all.
    pub fn is_blank(&self) -> bool {
        self.coverage.iter().all(|c| *c == 0.0)
    }
}

/// Render `text` for an image `image_width` pixels wide.
pub fn render_text(text: &str, font: &LabelFont, image_width: u32) -> TextMask {
    match font {
        LabelFont::Scalable { font, .. } => render_scalable(text, font, font_px(image_width)),
        LabelFont::Bitmap => render_bitmap(text),
    }
}

fn render_bitmap(text: &str) -> TextMask {
    let (w, h) = bitmap::measure(text);
    let mut mask = TextMask::new(w, h);
    bitmap::for_each_pixel(text, |x, y| mask.add(x, y, 1.0));
    mask
}

fn render_scalable(text: &str, font: &FontVec, px: u32) -> TextMask {
    let scale = PxScale::from(px as f32);
    let scaled = font.as_scaled(scale);

    let mut outlined: Vec<OutlinedGlyph> = Vec::new();
    let mut caret = 0.0f32;
    let mut previous = None;
    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(prev) = previous {
            caret += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(scale, point(caret, scaled.ascent()));
        caret += scaled.h_advance(id);
        previous = Some(id);
        if let Some(g) = font.outline_glyph(glyph) {
            outlined.push(g);
        }
    }

    if outlined.is_empty() {
        return TextMask::new(0, 0);
    }

    let min_x = outlined.iter().map(|g| g.px_bounds().min.x).fold(f32::MAX, f32::min);
    let min_y = outlined.iter().map(|g| g.px_bounds().min.y).fold(f32::MAX, f32::min);
    let max_x = outlined.iter().map(|g| g.px_bounds().max.x).fold(f32::MIN, f32::max);
    let max_y = outlined.iter().map(|g| g.px_bounds().max.y).fold(f32::MIN, f32::max);

    let mut mask = TextMask::new((max_x - min_x).ceil() as u32, (max_y - min_y).ceil() as u32);
    for g in &outlined {
        let bounds = g.px_bounds();
        let ox = (bounds.min.x - min_x) as u32;
        let oy = (bounds.min.y - min_y) as u32;
        g.draw(|x, y, c| mask.add(ox + x, oy + y, c));
    }
    mask
}

/// Draw a label onto `img`, anchored bottom-left.
///
/// The ink box starts `margin` pixels from the left edge and ends `margin`
/// pixels above the bottom edge.
pub fn apply_label(img: &mut RgbImage, text: &str, font: &LabelFont) {
    let mask = render_text(text, font, img.width());
    if mask.is_blank() {
        return;
    }

    let m = margin(img.width()) as i64;
    let x = m;
    let y = img.height() as i64 - m - mask.height as i64;

    blend_mask(img, &mask, x + SHADOW_OFFSET, y + SHADOW_OFFSET, SHADOW);
    blend_mask(img, &mask, x, y, FOREGROUND);
}

fn blend_mask(img: &mut RgbImage, mask: &TextMask, left: i64, top: i64, color: Rgb<u8>) {
    let (w, h) = img.dimensions();
    for my in 0..mask.height {
        for mx in 0..mask.width {
            let c = mask.coverage(mx, my);
            if c <= 0.0 {
                continue;
            }
            let px = left + mx as i64;
            let py = top + my as i64;
            if px < 0 || py < 0 || px >= w as i64 || py >= h as i64 {
                continue;
            }
            let dst = img.get_pixel_mut(px as u32, py as u32);
            for ch in 0..3 {
                let mixed = dst[ch] as f32 * (1.0 - c) + color[ch] as f32 * c;
                dst[ch] = mixed.round() as u8;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::vertical_gradient;

    fn card(width: u32, height: u32) -> RgbImage {
        vertical_gradient(width, height, Rgb([211, 47, 47]), Rgb([183, 28, 28]))
    }

    #[test]
    fn test_label_text() {
        assert_eq!(label_text("skeleton_001"), "skeleton 001");
        assert_eq!(label_text("plain"), "plain");
    }

    #[test]
    fn test_font_px_scales_with_minimum() {
        assert_eq!(font_px(140), 12);
        assert_eq!(font_px(280), 15);
        assert_eq!(font_px(560), 31);
    }

    #[test]
    fn test_margin() {
        assert_eq!(margin(140), 7);
        assert_eq!(margin(280), 14);
        assert_eq!(margin(560), 28);
    }

    #[test]
    fn test_discover_falls_back_to_bitmap() {
        let font = LabelFont::discover(&[PathBuf::from("/nonexistent/NoSuchFont.ttf")]);
        assert!(!font.is_scalable());
        assert_eq!(font.describe(), "built-in bitmap font");
    }

    #[test]
    fn test_from_file_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"not a font").unwrap();
        assert!(matches!(LabelFont::from_file(&path), Err(FontError::Invalid(_))));
    }

    #[test]
    fn test_bitmap_label_anchored_bottom_left() {
        let mut img = card(280, 400);
        apply_label(&mut img, "red pawn goblin", &LabelFont::Bitmap);

        let (_, text_h) = bitmap::measure("red pawn goblin");
        let m = margin(280);
        let top = 400 - m - text_h;

        // First column of 'R' is fully lit from top to bottom of the glyph
        assert_eq!(img.get_pixel(m, top), &Rgb([255, 255, 255]));
        assert_eq!(img.get_pixel(m, 400 - m - 1), &Rgb([255, 255, 255]));

        // Nothing drawn left of the margin or below the shadow
        let base = card(280, 400);
        for y in 0..400 {
            for x in 0..m {
                assert_eq!(img.get_pixel(x, y), base.get_pixel(x, y));
            }
        }
        for x in 0..280 {
            for y in (400 - m + SHADOW_OFFSET as u32)..400 {
                assert_eq!(img.get_pixel(x, y), base.get_pixel(x, y));
            }
        }
    }

    #[test]
    fn test_shadow_is_black() {
        let mut img = card(280, 400);
        apply_label(&mut img, "I", &LabelFont::Bitmap);
        let m = margin(280);
        let bottom = 400 - m - 1;
        // Bottom bar of 'I' spans x = m+2..=m+7; the shadow copy sits two
        // pixels right and two pixels down
        assert_eq!(img.get_pixel(m + 7, bottom), &Rgb([255, 255, 255]));
        assert_eq!(img.get_pixel(m + 9, bottom + 2), &Rgb([0, 0, 0]));
    }

    #[test]
    fn test_blank_text_leaves_image_untouched() {
        let mut img = card(140, 200);
        apply_label(&mut img, "   ", &LabelFont::Bitmap);
        assert_eq!(img, card(140, 200));
    }

    #[test]
    fn test_label_clipped_on_tiny_image() {
        let mut img = card(20, 10);
        apply_label(&mut img, "a very long label that cannot fit", &LabelFont::Bitmap);
        assert_eq!(img.dimensions(), (20, 10));
    }

    /// The first configured TrueType font, if this host has one installed.
    fn system_font() -> Option<LabelFont> {
        let font = LabelFont::discover(&crate::config::CardartConfig::default().render.fonts);
        font.is_scalable().then_some(font)
    }

    #[test]
    fn test_scalable_label_placement() {
        let Some(font) = system_font() else {
            eprintln!("skipping: no DejaVuSans.ttf on this host");
            return;
        };
        let text = "red pawn goblin";
        let gray = Rgb([128, 128, 128]);

        for (w, h) in [(140, 200), (280, 400), (560, 800)] {
            let mut img = RgbImage::from_pixel(w, h, gray);
            apply_label(&mut img, text, &font);

            let mask = render_text(text, &font, w);
            assert!(!mask.is_blank());
            let m = margin(w);
            let top = h - m - mask.height;

            // Anything brighter than the base is foreground ink
            let lit: Vec<(u32, u32)> =
                img.enumerate_pixels().filter(|(_, _, p)| p[0] > 128).map(|(x, y, _)| (x, y)).collect();
            let left = lit.iter().map(|&(x, _)| x).min().unwrap();
            let bottom = lit.iter().map(|&(_, y)| y).max().unwrap();
            assert!((m..=m + 1).contains(&left), "{}px wide: ink starts at x={}", w, left);
            let gap = h - 1 - bottom;
            assert!((m..=m + 2).contains(&gap), "{}px wide: bottom gap {}", w, gap);

            // A solid ink pixel whose (+2, +2) neighbour has no ink shows the shadow there
            let (mx, my) = (0..mask.height)
                .flat_map(|y| (0..mask.width).map(move |x| (x, y)))
                .find(|&(x, y)| mask.coverage(x, y) >= 0.999 && mask.coverage(x + 2, y + 2) == 0.0)
                .unwrap();
            assert_eq!(img.get_pixel(m + mx, top + my), &Rgb([255, 255, 255]));
            let shadow = img.get_pixel(m + mx + 2, top + my + 2);
            assert!(shadow.0.iter().all(|&c| c <= 1), "{}px wide: shadow {:?}", w, shadow);
        }
    }

    #[test]
    fn test_label_deterministic() {
        let mut a = card(560, 800);
        let mut b = card(560, 800);
        apply_label(&mut a, "Placeholder Art", &LabelFont::Bitmap);
        apply_label(&mut b, "Placeholder Art", &LabelFont::Bitmap);
        assert_eq!(a.as_raw(), b.as_raw());
    }
}
