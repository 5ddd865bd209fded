//! Configuration loading and layering.
//!
//! Handles `.primer.toml` loading, environment variable resolution,
//! and the defaults that CLI flags are merged over.

pub mod loader;

pub use loader::{CalculatorConfig, Config, ConfigError, LoopsConfig, OutputConfig};
