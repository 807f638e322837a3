//! In-memory raster buffers handed from the renderers to the asset writer.

use image::{DynamicImage, RgbImage, RgbaImage};

/// A rendered pixel buffer, either opaque RGB or RGB with alpha.
#[derive(Debug, Clone, PartialEq)]
pub enum Raster {
    /// Opaque RGB pixels
    Rgb(RgbImage),
    /// RGB pixels with a straight (non-premultiplied) alpha channel
    Rgba(RgbaImage),
}

impl Raster {
    /// Width in pixels.
    pub fn width(&self) -> u32 {
        match self {
            Raster::Rgb(img) => img.width(),
            Raster::Rgba(img) => img.width(),
        }
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        match self {
            Raster::Rgb(img) => img.height(),
            Raster::Rgba(img) => img.height(),
        }
    }

    /// Whether the raster carries an alpha channel.
    pub fn has_alpha(&self) -> bool {
        matches!(self, Raster::Rgba(_))
    }

    /// Drop the alpha channel, keeping the color channels as stored.
    ///
    /// Untouched pixels of a fresh RGBA canvas are `(0, 0, 0, 0)` and so come
    /// out black. Opaque rasters are returned unchanged.
    pub fn strip_alpha(self) -> RgbImage {
        match self {
            Raster::Rgb(img) => img,
            Raster::Rgba(img) => DynamicImage::ImageRgba8(img).to_rgb8(),
        }
    }
}

impl From<RgbImage> for Raster {
    fn from(img: RgbImage) -> Self {
        Raster::Rgb(img)
    }
}

impl From<RgbaImage> for Raster {
    fn from(img: RgbaImage) -> Self {
        Raster::Rgba(img)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, Rgba};

    #[test]
    fn test_dimensions() {
        let raster = Raster::from(RgbaImage::new(3, 5));
        assert_eq!(raster.width(), 3);
        assert_eq!(raster.height(), 5);
        assert!(raster.has_alpha());
    }

    #[test]
    fn test_strip_alpha_keeps_channels() {
        let mut img = RgbaImage::new(3, 1);
        img.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
        img.put_pixel(1, 0, Rgba([255, 255, 255, 0]));
        let rgb = Raster::Rgba(img).strip_alpha();
        assert_eq!(rgb.get_pixel(0, 0), &Rgb([255, 255, 255]));
        assert_eq!(rgb.get_pixel(1, 0), &Rgb([255, 255, 255]));
        // never painted
        assert_eq!(rgb.get_pixel(2, 0), &Rgb([0, 0, 0]));
    }

    #[test]
    fn test_strip_alpha_ignores_partial_alpha() {
        let mut img = RgbaImage::new(1, 1);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 60]));
        let rgb = Raster::Rgba(img).strip_alpha();
        assert_eq!(rgb.get_pixel(0, 0), &Rgb([255, 0, 0]));
    }

    #[test]
    fn test_strip_alpha_opaque_is_identity() {
        let img = RgbImage::from_pixel(2, 2, Rgb([1, 2, 3]));
        assert_eq!(Raster::Rgb(img.clone()).strip_alpha(), img);
    }
}
