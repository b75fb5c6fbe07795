//! dnsbench - DNS query latency benchmark
//!
//! Binary entry point for the dnsbench CLI application.

#![warn(clippy::all, warnings)]
#![warn(clippy::pedantic, clippy::nursery)]

use dnsbench::cli::Cli;
use dnsbench::config::ConfigLoader;
use dnsbench::dns::{BenchmarkRunner, Provider};
use dnsbench::error::Result;
use dnsbench::{aggregate, print_report, report};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Set up logging based on verbosity level.
///
/// # Arguments
///
/// * `verbose` - Enable debug-level logging
/// * `quiet` - Enable error-level only logging
fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"))
    } else if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().without_time())
        .init();
}

/// Run the benchmark and emit the report.
async fn run(cli: Cli) -> Result<()> {
    let config = ConfigLoader::resolve(&cli).await?;

    println!(
        "Benchmarking {} providers across {} domains ({} record, {} queries per pair)...\n",
        config.providers.len(),
        config.domains.len(),
        config.record,
        config.query_count
    );

    let runner = BenchmarkRunner::with_settings(config.timeout, config.query_count);
    let results = runner
        .run(
            &config,
            Some(|idx: usize, total: usize, provider: &Provider, domain: &str| {
                print!(
                    "\rQuerying [{:>3}/{}] {} ({}) {}",
                    idx + 1,
                    total,
                    provider.name,
                    provider.ip,
                    domain
                );
                let _ = std::io::Write::flush(&mut std::io::stdout());
            }),
        )
        .await;

    println!("\n");

    let (details, mut summary) = aggregate(&results);

    // Sort if requested
    if config.sort_summary {
        summary.sort_by(|a, b| {
            a.overall_avg
                .partial_cmp(&b.overall_avg)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    print_report(&details, &summary);

    if let Some(path) = &config.csv_path {
        match report::append_csv(path, &summary) {
            Ok(()) => println!("\nResults saved to {}", path.display()),
            Err(e) => {
                tracing::error!("failed to append CSV log {}: {e}", path.display());
                eprintln!("Warning: could not write {}: {e}", path.display());
            }
        }
    }

    Ok(())
}

/// Main entry point for the dnsbench CLI application.
#[tokio::main]
async fn main() {
    // Set up panic hook for better error reporting
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Process crashed: {panic_info}");
    }));

    let cli = dnsbench::cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    tracing::debug!("dnsbench starting...");

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
