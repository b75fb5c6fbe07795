//! Command-line interface (CLI) argument parsing module.
//!
//! This module provides CLI argument parsing using `clap`. The tool has a
//! single operation — run the benchmark — so the interface is a flat flag
//! set rather than subcommands.

use crate::dns::types::RecordKind;
use clap::Parser;
use std::path::PathBuf;

/// CLI argument parser using clap derive macro.
///
/// # Example
///
/// ```ignore
/// let cli = Cli::parse();
/// let config = ConfigLoader::resolve(&cli).await?;
/// ```
#[derive(Parser, Debug)]
#[command(
    name = "dnsbench",
    version,
    about = "Benchmark DNS provider query latency",
    long_about = "Measures DNS query resolution time across a set of providers and domains, \
printing per-pair and per-provider statistics and optionally appending summary rows to a CSV log."
)]
pub struct Cli {
    /// Extra DNS providers to test: IP, hostname, or HOST#Name label
    #[arg(long = "dns", value_name = "HOST", value_delimiter = ',')]
    pub dns: Vec<String>,

    /// Extra domains to test in addition to the defaults
    #[arg(long = "domains", value_name = "DOMAIN", value_delimiter = ',')]
    pub domains: Vec<String>,

    /// DNS record type to query
    #[arg(long, value_name = "TYPE", default_value = "A")]
    pub record: RecordKind,

    /// Append per-provider summary rows to a CSV file
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Provider list file (JSON), replaces the default provider set
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Number of queries per provider/domain pair
    #[arg(short, long, default_value = "3")]
    pub count: usize,

    /// Timeout per query in seconds
    #[arg(short, long, default_value = "5")]
    pub timeout: u64,

    /// Sort the summary table by overall average (fastest first)
    #[arg(long = "sort")]
    pub sort: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (only errors)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Parse CLI arguments.
///
/// # Returns
///
/// Returns the parsed `Cli` struct.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
