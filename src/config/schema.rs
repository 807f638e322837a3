//! Configuration schema types for `cardart.toml`
//!
//! Defines the structure and validation rules for the asset pipeline
//! configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Repository locations section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Repository root; `registry` and `assets` are relative to it
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// Card registry file (Go source, `.json` or `.toml`)
    #[serde(default = "default_registry")]
    pub registry: PathBuf,
    /// Asset output root
    #[serde(default = "default_assets")]
    pub assets: PathBuf,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_registry() -> PathBuf {
    PathBuf::from("backend/internal/repository/card_repository.go")
}

fn default_assets() -> PathBuf {
    PathBuf::from("assets")
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self { root: default_root(), registry: default_registry(), assets: default_assets() }
    }
}

/// Rendering settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Worker threads (0 = available parallelism)
    #[serde(default)]
    pub jobs: usize,
    /// Font files tried in order for labels
    #[serde(default = "default_fonts")]
    pub fonts: Vec<PathBuf>,
    /// Abort when none of `fonts` loads instead of using the bitmap font
    #[serde(default)]
    pub require_font: bool,
}

fn default_fonts() -> Vec<PathBuf> {
    [
        "DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { jobs: 0, fonts: default_fonts(), require_font: false }
    }
}

/// Complete cardart.toml configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardartConfig {
    /// Repository locations
    #[serde(default)]
    pub project: ProjectConfig,
    /// Rendering settings
    #[serde(default)]
    pub render: RenderConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "project.registry")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cardart.toml: '{}' {}", self.field, self.message)
    }
}

impl CardartConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.project.registry.as_os_str().is_empty() {
            errors.push(ConfigValidationError {
                field: "project.registry".to_string(),
                message: "must be a non-empty path".to_string(),
            });
        }

        if self.project.assets.as_os_str().is_empty() {
            errors.push(ConfigValidationError {
                field: "project.assets".to_string(),
                message: "must be a non-empty path".to_string(),
            });
        }

        if self.render.require_font && self.render.fonts.is_empty() {
            errors.push(ConfigValidationError {
                field: "render.fonts".to_string(),
                message: "must list at least one font when require_font is set".to_string(),
            });
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Registry path resolved against the project root.
    pub fn registry_path(&self) -> PathBuf {
        resolve(&self.project.root, &self.project.registry)
    }

    /// Asset root resolved against the project root.
    pub fn assets_dir(&self) -> PathBuf {
        resolve(&self.project.root, &self.project.assets)
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
