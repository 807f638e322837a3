//! Output directory layout and asset naming.
//!
//! # Naming Rules
//!
//! | Asset | Path under the asset root |
//! |-------|---------------------------|
//! | Card art | `cards/art/{id}_standard_{low,medium,high}.webp` |
//! | Holographic overlay | `cards/overlays/holographic_pattern.webp` |
//! | Foil overlay | `cards/overlays/foil_etched_texture.webp` |
//! | Shine overlay | `cards/overlays/premium_shine.webp` |
//! | Promo stamp | `cards/overlays/promo_stamp.png` |
//! | Card back | `cards/backs/default_back.webp` |
//! | Placeholder | `images/placeholder_card_art.jpg` |

use crate::output::AssetFormat;
use std::fmt;
use std::path::{Path, PathBuf};

/// Resolution presets for card art.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// 140x200
    Low,
    /// 280x400
    Medium,
    /// 560x800
    High,
}

impl Resolution {
    /// Every preset, smallest first.
    pub const ALL: [Resolution; 3] = [Resolution::Low, Resolution::Medium, Resolution::High];

    /// Width and height in pixels.
    pub fn size(self) -> (u32, u32) {
        match self {
            Resolution::Low => (140, 200),
            Resolution::Medium => (280, 400),
            Resolution::High => (560, 800),
        }
    }

    /// Name used in file names.
    pub fn name(self) -> &'static str {
        match self {
            Resolution::Low => "low",
            Resolution::Medium => "medium",
            Resolution::High => "high",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shared overlay textures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlay {
    Holographic,
    Foil,
    Shine,
    PromoStamp,
}

impl Overlay {
    /// Every overlay in generation order.
    pub const ALL: [Overlay; 4] =
        [Overlay::Holographic, Overlay::Foil, Overlay::Shine, Overlay::PromoStamp];

    /// File stem of the overlay.
    pub fn file_stem(self) -> &'static str {
        match self {
            Overlay::Holographic => "holographic_pattern",
            Overlay::Foil => "foil_etched_texture",
            Overlay::Shine => "premium_shine",
            Overlay::PromoStamp => "promo_stamp",
        }
    }

    /// Short name used in target ids.
    pub fn name(self) -> &'static str {
        match self {
            Overlay::Holographic => "holographic",
            Overlay::Foil => "foil",
            Overlay::Shine => "shine",
            Overlay::PromoStamp => "promo_stamp",
        }
    }

    /// Encoding of the overlay. Only the stamp keeps its alpha channel.
    pub fn format(self) -> AssetFormat {
        match self {
            Overlay::PromoStamp => AssetFormat::Png,
            _ => AssetFormat::WebP,
        }
    }
}

/// Encoding used for card art and the card back.
pub const ART_FORMAT: AssetFormat = AssetFormat::WebP;

/// Encoding used for the placeholder.
pub const PLACEHOLDER_FORMAT: AssetFormat = AssetFormat::Jpeg;

/// Directories the pipeline creates under the asset root.
pub const LAYOUT_DIRS: [&str; 5] =
    ["cards/art", "cards/overlays", "cards/backs", "cards/frames", "images"];

/// Paths of every generated asset, relative to an asset root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLayout {
    root: PathBuf,
}

impl AssetLayout {
    /// Create a layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The asset root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Card art for `id` at `resolution`.
    pub fn art_path(&self, id: &str, resolution: Resolution) -> PathBuf {
        self.root.join("cards/art").join(format!(
            "{}_standard_{}.{}",
            id,
            resolution.name(),
            ART_FORMAT.extension()
        ))
    }

    /// Shared overlay texture.
    pub fn overlay_path(&self, overlay: Overlay) -> PathBuf {
        self.root
            .join("cards/overlays")
            .join(format!("{}.{}", overlay.file_stem(), overlay.format().extension()))
    }

    /// Default card back.
    pub fn back_path(&self) -> PathBuf {
        self.root.join("cards/backs").join(format!("default_back.{}", ART_FORMAT.extension()))
    }

    /// Fallback placeholder art.
    pub fn placeholder_path(&self) -> PathBuf {
        self.root
            .join("images")
            .join(format!("placeholder_card_art.{}", PLACEHOLDER_FORMAT.extension()))
    }

    /// Create every layout directory under the root.
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        for dir in LAYOUT_DIRS {
            std::fs::create_dir_all(self.root.join(dir))?;
        }
        Ok(())
    }
}
