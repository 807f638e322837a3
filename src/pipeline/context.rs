//! Generation context containing configuration and run options.

use crate::config::CardartConfig;
use crate::layout::AssetLayout;
use std::path::PathBuf;

/// Number of worker threads when the config asks for the default.
fn default_jobs() -> usize {
    std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}

/// Generation context containing configuration and options for one run.
#[derive(Debug, Clone)]
pub struct GenerateContext {
    /// The loaded configuration
    config: CardartConfig,
    /// Whether to run in verbose mode
    verbose: bool,
    /// Whether to plan without writing anything
    dry_run: bool,
}

impl GenerateContext {
    /// Create a new context from a loaded configuration.
    pub fn new(config: CardartConfig) -> Self {
        Self { config, verbose: false, dry_run: false }
    }

    /// Get the configuration.
    pub fn config(&self) -> &CardartConfig {
        &self.config
    }

    /// Registry file the catalog is read from.
    pub fn registry_path(&self) -> PathBuf {
        self.config.registry_path()
    }

    /// Output layout rooted at the configured asset directory.
    pub fn layout(&self) -> AssetLayout {
        AssetLayout::new(self.config.assets_dir())
    }

    /// Font candidates for labels, in priority order.
    pub fn font_candidates(&self) -> &[PathBuf] {
        &self.config.render.fonts
    }

    /// Whether a scalable font is mandatory.
    pub fn requires_font(&self) -> bool {
        self.config.render.require_font
    }

    /// Number of worker threads, resolving 0 to available parallelism.
    pub fn jobs(&self) -> usize {
        match self.config.render.jobs {
            0 => default_jobs(),
            n => n,
        }
    }

    /// Whether verbose mode is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Whether dry-run mode is enabled.
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Set verbose mode.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Set the number of worker threads (0 = available parallelism).
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.config.render.jobs = jobs;
        self
    }
}
