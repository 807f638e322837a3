//! cardart - Library for generating placeholder card game assets
//!
//! This library provides functionality to:
//! - Read the card catalog from the card registry
//! - Render per-card art from color gradients and text labels
//! - Generate the shared overlay textures, card back and placeholder
//! - Encode and write every asset to a fixed directory layout

pub mod art;
pub mod back;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod gradient;
pub mod label;
pub mod layout;
pub mod output;
pub mod palette;
pub mod patterns;
pub mod pipeline;
pub mod placeholder;
pub mod raster;
pub mod shapes;
