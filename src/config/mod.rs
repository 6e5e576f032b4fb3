//! Application configuration for layerconf.
//!
//! This module defines the Config struct that represents `layerconf.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! per-user defaults for every directory, and validation of config values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::DEFAULT_CONFIG_FILE;
