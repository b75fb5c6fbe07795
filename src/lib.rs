//! dnsbench - DNS query latency benchmarking across providers.
//!
//! This crate provides both a library API and a CLI tool for:
//! - Timing real DNS queries (no cache, no retries) against a set of providers
//! - Aggregating per-domain and per-provider latency statistics
//! - Rendering bordered result tables and appending summary history to CSV
//!
//! # Library Usage
//!
//! ```ignore
//! use dnsbench::{aggregate, BenchmarkRunner, ConfigLoader, Provider};
//!
//! let config = ConfigLoader::resolve(&cli).await?;
//! let runner = BenchmarkRunner::with_settings(config.timeout, config.query_count);
//! let results = runner.run(&config, None::<fn(usize, usize, &Provider, &str)>).await;
//! let (details, summary) = aggregate(&results);
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! # Benchmark the built-in provider set
//! dnsbench
//!
//! # Add providers and domains
//! dnsbench --dns 8.8.8.8#Google --domains example.org
//!
//! # MX records, 10 samples per pair, fastest provider first
//! dnsbench --record MX --count 10 --sort
//!
//! # Append the per-provider summary to a CSV log
//! dnsbench --csv results.csv
//! ```
//!
//! # Features
//!
//! - **Real Query Timing**: Each sample is a live wire query, never a cache hit
//! - **Provider Sets**: Built-in defaults, JSON provider files, ad-hoc `--dns` additions
//! - **Record Types**: A, AAAA, TXT, MX, NS and CNAME lookups
//! - **CSV History**: Append-only summary log for tracking providers over time
//! - **IPv4/IPv6 Support**: Works with both address families

pub mod cli;
pub mod config;
pub mod dns;
pub mod error;
pub mod report;
pub mod stats;

// Re-export commonly used types
pub use cli::Cli;
pub use config::{BenchmarkConfig, ConfigLoader};
pub use dns::types::{Provider, ProviderList, QueryResult, RecordKind};
pub use dns::{BenchmarkRunner, QueryTimer};
pub use error::{Error, Result};
pub use report::{append_csv, print_report};
pub use stats::{aggregate, DetailRow, SummaryRow};
