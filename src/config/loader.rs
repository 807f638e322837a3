//! Configuration loading and discovery for `cardart.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::CardartConfig;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file looked up by [`find_config`].
pub const CONFIG_FILE_NAME: &str = "cardart.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse cardart.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override repository root
    pub root: Option<PathBuf>,
    /// Override registry path
    pub registry: Option<PathBuf>,
    /// Override asset output root
    pub assets: Option<PathBuf>,
    /// Number of parallel jobs
    pub jobs: Option<usize>,
    /// Require a scalable label font
    pub require_font: Option<bool>,
}

/// Find cardart.toml by walking up from the current working directory.
///
/// # Returns
/// - `Some(path)` if a cardart.toml file is found
/// - `None` if no config file is found
pub fn find_config() -> Option<PathBuf> {
    env::current_dir().ok().and_then(find_config_from)
}

/// Find cardart.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a cardart.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate the config file. If no config file is found, returns a default
/// configuration.
///
/// A relative `project.root` in a loaded file is resolved against the
/// directory containing the file.
///
/// # Returns
/// - `Ok(CardartConfig)` on success
/// - `Err(ConfigError)` if the file cannot be read, parsed or validated
///
/// # Example
/// ```ignore
/// // Load from discovered config
/// let config = load_config(None)?;
///
/// // Load from specific path
/// let config = load_config(Some(Path::new("game/cardart.toml")))?;
/// ```
pub fn load_config(path: Option<&Path>) -> Result<CardartConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(default_config()),
    }
}

/// Load configuration from a specific file path.
fn load_config_file(path: &Path) -> Result<CardartConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let mut config: CardartConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    if let Some(dir) = project_root(path) {
        config.project.root = resolve_path(dir, &config.project.root);
    }

    Ok(config)
}

/// Create a default configuration when no cardart.toml is found.
///
/// Paths resolve against the current working directory.
pub fn default_config() -> CardartConfig {
    CardartConfig::default()
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut CardartConfig, overrides: &CliOverrides) {
    if let Some(ref root) = overrides.root {
        config.project.root = root.clone();
    }

    if let Some(ref registry) = overrides.registry {
        config.project.registry = registry.clone();
    }

    if let Some(ref assets) = overrides.assets {
        config.project.assets = assets.clone();
    }

    if let Some(jobs) = overrides.jobs {
        config.render.jobs = jobs;
    }

    if let Some(require_font) = overrides.require_font {
        config.render.require_font = require_font;
    }
}

/// Get the directory containing a config file.
///
/// Returns `None` for a bare file name, which resolves against the
/// working directory anyway.
pub fn project_root(config_path: &Path) -> Option<&Path> {
    config_path.parent().filter(|p| !p.as_os_str().is_empty())
}

/// Resolve a path relative to the project root.
///
/// If the path is absolute, returns it unchanged.
/// If relative, joins it with the project root.
pub fn resolve_path(project_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}
