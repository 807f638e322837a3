//! Command-line interface implementation

use crate::config::{
    default_config, find_config, load_config, merge_cli_overrides, CardartConfig, CliOverrides,
    ConfigError,
};
use crate::pipeline::{ConsoleProgress, GenerateContext, Pipeline};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;

/// cardart - Generate placeholder card art, overlays and card backs
#[derive(Debug, Parser)]
#[command(name = "cardart")]
#[command(about = "Generate placeholder card art, overlay textures and card backs from the card registry")]
#[command(version)]
pub struct Cli {
    /// Config file (default: nearest cardart.toml, else built-in defaults)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Repository root that registry and asset paths are relative to
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Card registry file (Go source, .json or .toml)
    #[arg(long)]
    pub registry: Option<PathBuf>,

    /// Asset output root
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Worker threads (0 = available parallelism)
    #[arg(long, short = 'j')]
    pub jobs: Option<usize>,

    /// Fail instead of falling back to the built-in bitmap font
    #[arg(long)]
    pub require_font: bool,

    /// Read the catalog and plan outputs without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Show per-asset progress
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Config overrides carried by the flags.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            root: self.root.clone(),
            registry: self.registry.clone(),
            assets: self.assets.clone(),
            jobs: self.jobs,
            require_font: self.require_font.then_some(true),
        }
    }
}

/// Parse the process arguments and run.
pub fn run() -> ExitCode {
    run_with(Cli::parse())
}

/// Run with already-parsed arguments.
pub fn run_with(cli: Cli) -> ExitCode {
    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let context =
        GenerateContext::new(config).with_verbose(cli.verbose).with_dry_run(cli.dry_run);
    if context.is_verbose() {
        eprintln!("Registry: {}", context.registry_path().display());
        eprintln!("Assets:   {}", context.config().assets_dir().display());
    }

    let reporter = ConsoleProgress::new()
        .with_verbose(context.is_verbose())
        .with_colors(std::io::stderr().is_terminal());

    let result = match Pipeline::new(context).with_reporter(Box::new(reporter)).run() {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if !result.is_success() {
        eprintln!("{}", result.summary());
        return ExitCode::from(EXIT_ERROR);
    }

    if cli.dry_run {
        println!("Dry run: would generate art for {} cards.", result.cards);
    } else {
        println!("Generated art for {} cards.", result.cards);
    }
    ExitCode::from(EXIT_SUCCESS)
}

/// Load the config named by `--config` or discovered from the working
/// directory, then apply the flag overrides.
fn resolve_config(cli: &Cli) -> Result<CardartConfig, ConfigError> {
    let config_path = cli.config.clone().or_else(find_config);

    let mut config = match &config_path {
        Some(path) => {
            if cli.verbose {
                eprintln!("Using config: {}", path.display());
            }
            load_config(Some(path))?
        }
        None => {
            if cli.verbose {
                eprintln!("No cardart.toml found, using defaults");
            }
            default_config()
        }
    };

    merge_cli_overrides(&mut config, &cli.overrides());

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }
    Ok(config)
}
