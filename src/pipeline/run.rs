//! Pipeline execution.
//!
//! A run goes through these steps:
//!
//! 1. Load the label font (abort if a scalable font is required but missing)
//! 2. Read the catalog (abort if it is empty or unreadable)
//! 3. Create the output directories
//! 4. Plan one target per output file
//! 5. Render and write every target on a rayon pool
//!
//! Nothing is written before steps 1 and 2 succeed.

use crate::art::card_art;
use crate::back::default_back;
use crate::catalog::{read_catalog, CatalogError};
use crate::label::LabelFont;
use crate::layout::Overlay;
use crate::output::write_asset;
use crate::patterns::{foil_texture, holographic_stripes, premium_shine, promo_stamp};
use crate::pipeline::{
    create_plan, Asset, AssetTarget, GenerateContext, NullProgress, ProgressEvent,
    ProgressReporter, RunResult, TargetResult,
};
use crate::placeholder::placeholder_art;
use crate::raster::Raster;
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::Instant;
use thiserror::Error;

/// Package suggested when no scalable font can be loaded.
pub const FONT_INSTALL_HINT: &str =
    "install the DejaVu fonts (e.g. `apt install fonts-dejavu-core`) or list a font file under [render] fonts";

/// Fatal pipeline error. Per-target failures are reported in [`RunResult`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PipelineError {
    /// A scalable font is required and none of the candidates loaded
    #[error("no usable label font among {}; {}", format_candidates(.candidates), FONT_INSTALL_HINT)]
    FontUnavailable { candidates: Vec<PathBuf> },
    /// The catalog could not be read or was empty
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// Output directories could not be created
    #[error("failed to create output directories: {0}")]
    Io(#[from] std::io::Error),
    /// The worker pool could not be started
    #[error("failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

fn format_candidates(candidates: &[PathBuf]) -> String {
    candidates.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
}

/// Asset generation pipeline.
pub struct Pipeline {
    /// Run context
    context: GenerateContext,
    /// Progress sink
    reporter: Box<dyn ProgressReporter>,
}

impl Pipeline {
    /// Create a pipeline that reports nothing.
    pub fn new(context: GenerateContext) -> Self {
        Self { context, reporter: Box::new(NullProgress) }
    }

    /// Report progress through `reporter`.
    pub fn with_reporter(mut self, reporter: Box<dyn ProgressReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Get the run context.
    pub fn context(&self) -> &GenerateContext {
        &self.context
    }

    /// Run the pipeline.
    ///
    /// # Errors
    ///
    /// Returns an error, before writing anything, when the required font is
    /// missing or the catalog is empty or unreadable. Failures of individual
    /// targets do not abort the run; check [`RunResult::is_success`].
    pub fn run(&self) -> Result<RunResult, PipelineError> {
        let start = Instant::now();

        let font = self.load_font()?;
        let cards = read_catalog(&self.context.registry_path())?;

        let layout = self.context.layout();
        if !self.context.is_dry_run() {
            layout.ensure_dirs()?;
        }

        let plan = create_plan(&cards, &layout);
        self.reporter
            .report(ProgressEvent::RunStarted { cards: cards.len(), total_targets: plan.len() });

        let pool = rayon::ThreadPoolBuilder::new().num_threads(self.context.jobs()).build()?;
        let results: Vec<TargetResult> = pool.install(|| {
            plan.targets().par_iter().map(|target| self.execute_target(target, &font)).collect()
        });

        let mut result = RunResult::new(cards.len());
        for target_result in results {
            result.add_result(target_result);
        }
        let result = result.with_duration(start.elapsed());

        self.reporter.report(ProgressEvent::RunCompleted {
            success: result.is_success(),
            duration_ms: result.total_duration.as_millis() as u64,
            succeeded: result.success_count(),
            skipped: result.skipped_count(),
            failed: result.failed_count(),
        });

        Ok(result)
    }

    fn load_font(&self) -> Result<LabelFont, PipelineError> {
        let candidates = self.context.font_candidates();
        let font = LabelFont::discover(candidates);

        if !font.is_scalable() {
            if self.context.requires_font() {
                return Err(PipelineError::FontUnavailable { candidates: candidates.to_vec() });
            }
            self.reporter.report(ProgressEvent::Warning {
                target_id: None,
                message: format!("no scalable font found, labels use the {}", font.describe()),
            });
        }

        Ok(font)
    }

    /// Render and write a single target.
    fn execute_target(&self, target: &AssetTarget, font: &LabelFont) -> TargetResult {
        let result = self.execute_target_internal(target, font);
        self.reporter.report(ProgressEvent::TargetCompleted {
            target_id: result.target_id.clone(),
            status: result.status.clone(),
            duration_ms: result.duration.as_millis() as u64,
        });
        result
    }

    fn execute_target_internal(&self, target: &AssetTarget, font: &LabelFont) -> TargetResult {
        let start = Instant::now();

        if self.context.is_dry_run() {
            return TargetResult::skipped(target.id.clone());
        }

        // The placeholder is the one asset that is never overwritten
        if matches!(target.asset, Asset::Placeholder) && target.output.exists() {
            return TargetResult::skipped(target.id.clone());
        }

        let raster = render(&target.asset, font);
        match write_asset(raster, &target.output, target.format) {
            Ok(()) => {
                TargetResult::success(target.id.clone(), target.output.clone(), start.elapsed())
            }
            Err(e) => TargetResult::failed(
                target.id.clone(),
                format!("{}: {}", target.output.display(), e),
                start.elapsed(),
            ),
        }
    }
}

/// Render the pixels of `asset`.
pub fn render(asset: &Asset, font: &LabelFont) -> Raster {
    match asset {
        Asset::Art { card, resolution } => card_art(card, *resolution, font).into(),
        Asset::Overlay(Overlay::Holographic) => holographic_stripes().into(),
        Asset::Overlay(Overlay::Foil) => foil_texture().into(),
        Asset::Overlay(Overlay::Shine) => premium_shine().into(),
        Asset::Overlay(Overlay::PromoStamp) => promo_stamp().into(),
        Asset::Back => default_back().into(),
        Asset::Placeholder => placeholder_art(font).into(),
    }
}
