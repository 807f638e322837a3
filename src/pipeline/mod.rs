//! Asset generation pipeline
//!
//! Turns the card catalog into image files.
//!
//! # Overview
//!
//! The pipeline consists of:
//! - **Context**: configuration and run options ([`GenerateContext`])
//! - **Planning**: one [`AssetTarget`] per output file ([`create_plan`])
//! - **Execution**: render and write every target in parallel ([`Pipeline`])
//! - **Reporting**: [`ProgressEvent`]s and a final [`RunResult`]
//!
//! # Example
//!
//! ```ignore
//! use cardart::config::load_config;
//! use cardart::pipeline::{ConsoleProgress, GenerateContext, Pipeline};
//!
//! let context = GenerateContext::new(load_config(None)?);
//! let result = Pipeline::new(context)
//!     .with_reporter(Box::new(ConsoleProgress::new()))
//!     .run()?;
//! println!("Generated art for {} cards.", result.cards);
//! ```

pub mod context;
pub mod progress;
pub mod result;
pub mod run;
pub mod target;

pub use context::*;
pub use progress::*;
pub use result::*;
pub use run::*;
pub use target::*;
