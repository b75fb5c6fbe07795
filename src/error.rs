//! Error types module.
//!
//! This module defines the error types used throughout the dnsbench
//! application. It uses `thiserror` for structured error handling and
//! provides a custom `Result` type alias for convenience.

use thiserror::Error;

/// A specialized `Result` type for dnsbench operations.
///
/// This type is used throughout the crate to handle errors consistently.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the dnsbench application.
///
/// Each variant represents a different category of error that can occur
/// while resolving configuration or reporting results. Individual query
/// failures are not errors: they are recorded as unsuccessful
/// [`QueryResult`](crate::dns::types::QueryResult)s and the run continues.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (CSV file operations, terminal writes)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error (provider list files)
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// DNS resolver error (system resolver setup, hostname resolution)
    #[error("DNS resolver error: {0}")]
    Resolver(#[from] trust_dns_resolver::error::ResolveError),

    /// Configuration error (empty provider set, unresolvable `--dns` host)
    #[error("Config error: {0}")]
    Config(String),

    /// Parse error (invalid provider address, malformed record type)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl Error {
    /// Create a new configuration error with a message.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new parse error with a message.
    #[must_use]
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
