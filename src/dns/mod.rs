//! DNS module.
//!
//! This module provides DNS-related functionality including:
//! - Timed queries against individual providers
//! - Sequential benchmark execution
//! - Core data types

pub mod benchmark;
pub mod query;
pub mod types;

pub use benchmark::BenchmarkRunner;
pub use query::QueryTimer;
pub use types::*;
