//! Configuration module for the asset pipeline
//!
//! Provides types and parsing for `cardart.toml` configuration.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
