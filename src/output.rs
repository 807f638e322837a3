//! Asset encoding and file output

use crate::raster::Raster;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::{WebPEncoder, WebPQuality};
use image::{ColorType, ImageEncoder};
use std::io;
use std::path::Path;

/// Quality used for every lossy encoding (0-100), WebP and JPEG alike.
pub const DEFAULT_QUALITY: u8 = 88;

/// Error type for output operations
#[derive(Debug)]
pub enum OutputError {
    /// IO error during file operations
    Io(io::Error),
    /// Image encoding error
    Image(image::ImageError),
}

impl std::fmt::Display for OutputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputError::Io(e) => write!(f, "IO error: {}", e),
            OutputError::Image(e) => write!(f, "Image error: {}", e),
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OutputError::Io(e) => Some(e),
            OutputError::Image(e) => Some(e),
        }
    }
}

impl From<io::Error> for OutputError {
    fn from(e: io::Error) -> Self {
        OutputError::Io(e)
    }
}

impl From<image::ImageError> for OutputError {
    fn from(e: image::ImageError) -> Self {
        OutputError::Image(e)
    }
}

/// Encoded file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetFormat {
    /// Lossy WebP at [`DEFAULT_QUALITY`] (card art, textures, back)
    WebP,
    /// PNG with alpha (promo stamp)
    Png,
    /// JPEG at [`DEFAULT_QUALITY`] (placeholder)
    Jpeg,
}

impl AssetFormat {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            AssetFormat::WebP => "webp",
            AssetFormat::Png => "png",
            AssetFormat::Jpeg => "jpg",
        }
    }

    /// Whether assets in this format keep their alpha channel.
    ///
    /// The other formats drop the alpha channel and keep the stored colors.
    pub fn preserves_alpha(self) -> bool {
        matches!(self, AssetFormat::Png)
    }
}

impl std::fmt::Display for AssetFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Encode a raster to bytes.
///
/// WebP and JPEG are both lossy at [`DEFAULT_QUALITY`]. Encoding is
/// deterministic for identical input.
pub fn encode_asset(raster: Raster, format: AssetFormat) -> Result<Vec<u8>, OutputError> {
    let raster = if format.preserves_alpha() { raster } else { Raster::Rgb(raster.strip_alpha()) };
    let (w, h) = (raster.width(), raster.height());
    let (data, color) = match &raster {
        Raster::Rgb(img) => (img.as_raw().as_slice(), ColorType::Rgb8),
        Raster::Rgba(img) => (img.as_raw().as_slice(), ColorType::Rgba8),
    };

    let mut buf = Vec::new();
    match format {
        AssetFormat::WebP => {
            let quality = WebPQuality::lossy(DEFAULT_QUALITY);
            WebPEncoder::new_with_quality(&mut buf, quality).encode(data, w, h, color)?;
        }
        AssetFormat::Png => {
            PngEncoder::new(&mut buf).write_image(data, w, h, color)?;
        }
        AssetFormat::Jpeg => {
            let mut encoder = JpegEncoder::new_with_quality(&mut buf, DEFAULT_QUALITY);
            encoder.encode(data, w, h, color)?;
        }
    }
    Ok(buf)
}

/// Encode a raster and write it to `path`, replacing any existing file.
///
/// Parent directories are created as needed.
///
/// # Returns
///
/// * `Ok(())` on success
/// * `Err(OutputError)` on failure
pub fn write_asset(raster: Raster, path: &Path, format: AssetFormat) -> Result<(), OutputError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let bytes = encode_asset(raster, format)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
