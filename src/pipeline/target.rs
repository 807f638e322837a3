//! Generation target definitions.
//!
//! A target is one output file: what to render, where to write it and how
//! to encode it.

use crate::catalog::CardEntry;
use crate::layout::{AssetLayout, Overlay, Resolution, ART_FORMAT, PLACEHOLDER_FORMAT};
use crate::output::AssetFormat;
use std::path::PathBuf;

/// Type of generation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// Front art for one card at one resolution
    Art,
    /// Shared overlay texture
    Overlay,
    /// Card back
    Back,
    /// Fallback placeholder art
    Placeholder,
}

impl std::fmt::Display for TargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetKind::Art => write!(f, "art"),
            TargetKind::Overlay => write!(f, "overlay"),
            TargetKind::Back => write!(f, "back"),
            TargetKind::Placeholder => write!(f, "placeholder"),
        }
    }
}

/// What a target renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Asset {
    /// Card art
    Art { card: CardEntry, resolution: Resolution },
    /// One of the overlay textures
    Overlay(Overlay),
    /// The default card back
    Back,
    /// The placeholder image
    Placeholder,
}

impl Asset {
    /// Kind of target this asset belongs to.
    pub fn kind(&self) -> TargetKind {
        match self {
            Asset::Art { .. } => TargetKind::Art,
            Asset::Overlay(_) => TargetKind::Overlay,
            Asset::Back => TargetKind::Back,
            Asset::Placeholder => TargetKind::Placeholder,
        }
    }
}

/// A generation target representing one file to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetTarget {
    /// Unique identifier for this target (e.g., "art:red_pawn_goblin:low")
    pub id: String,
    /// What to render
    pub asset: Asset,
    /// Output path for this target
    pub output: PathBuf,
    /// Output encoding
    pub format: AssetFormat,
}

impl AssetTarget {
    /// Create a card art target.
    pub fn art(card: &CardEntry, resolution: Resolution, layout: &AssetLayout) -> Self {
        Self {
            id: format!("art:{}:{}", card.id, resolution),
            output: layout.art_path(&card.id, resolution),
            format: ART_FORMAT,
            asset: Asset::Art { card: card.clone(), resolution },
        }
    }

    /// Create an overlay target.
    pub fn overlay(overlay: Overlay, layout: &AssetLayout) -> Self {
        Self {
            id: format!("overlay:{}", overlay.name()),
            output: layout.overlay_path(overlay),
            format: overlay.format(),
            asset: Asset::Overlay(overlay),
        }
    }

    /// Create the card back target.
    pub fn back(layout: &AssetLayout) -> Self {
        Self {
            id: "back:default".to_string(),
            output: layout.back_path(),
            format: ART_FORMAT,
            asset: Asset::Back,
        }
    }

    /// Create the placeholder target.
    pub fn placeholder(layout: &AssetLayout) -> Self {
        Self {
            id: "placeholder".to_string(),
            output: layout.placeholder_path(),
            format: PLACEHOLDER_FORMAT,
            asset: Asset::Placeholder,
        }
    }

    /// Kind of this target.
    pub fn kind(&self) -> TargetKind {
        self.asset.kind()
    }
}

/// An ordered collection of generation targets.
#[derive(Debug, Default)]
pub struct GenerationPlan {
    /// All targets in the run
    targets: Vec<AssetTarget>,
}

impl GenerationPlan {
    /// Create a new empty plan.
    pub fn new() -> Self {
        Self { targets: vec![] }
    }

    /// Add a target to the plan.
    pub fn add_target(&mut self, target: AssetTarget) {
        self.targets.push(target);
    }

    /// Get all targets in the plan.
    pub fn targets(&self) -> &[AssetTarget] {
        &self.targets
    }

    /// Get the number of targets in the plan.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Check if the plan is empty.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Get a target by id.
    pub fn get(&self, id: &str) -> Option<&AssetTarget> {
        self.targets.iter().find(|t| t.id == id)
    }
}

/// Plan every output for `cards`.
///
/// Card art comes first, three resolutions per card in catalog order,
/// followed by the overlays, the back and the placeholder.
pub fn create_plan(cards: &[CardEntry], layout: &AssetLayout) -> GenerationPlan {
    let mut plan = GenerationPlan::new();

    for card in cards {
        for resolution in Resolution::ALL {
            plan.add_target(AssetTarget::art(card, resolution, layout));
        }
    }

    for overlay in Overlay::ALL {
        plan.add_target(AssetTarget::overlay(overlay, layout));
    }

    plan.add_target(AssetTarget::back(layout));
    plan.add_target(AssetTarget::placeholder(layout));

    plan
}
