//! Configuration module.
//!
//! This module provides the built-in defaults and the logic for merging
//! them with provider files and command-line overrides.

pub mod defaults;
pub mod loader;

pub use loader::{BenchmarkConfig, ConfigLoader};
