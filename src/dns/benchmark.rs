//! Sequential benchmark execution.
//!
//! This module walks every (provider, domain) pair in configuration order
//! and collects the timed query results into a single ordered sequence.
//! Queries are strictly sequential so measurements never contend with each
//! other for sockets or bandwidth.

use crate::config::defaults::{DEFAULT_QUERY_COUNT, DEFAULT_TIMEOUT};
use crate::config::BenchmarkConfig;
use crate::dns::query::QueryTimer;
use crate::dns::types::{Provider, QueryResult};
use std::time::Duration;

/// Sequential DNS benchmark runner.
///
/// Visits providers in configuration order, reusing one resolver per
/// provider so construction cost never leaks into the measurements.
///
/// # Example
///
/// ```ignore
/// let runner = BenchmarkRunner::with_settings(Duration::from_secs(5), 3);
/// let results = runner.run(&config, None::<fn(usize, usize, &Provider, &str)>).await;
/// ```
pub struct BenchmarkRunner {
    timeout: Duration,
    query_count: usize,
}

impl BenchmarkRunner {
    /// Create a runner with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            query_count: DEFAULT_QUERY_COUNT,
        }
    }

    /// Create a runner with custom settings.
    ///
    /// # Arguments
    ///
    /// * `timeout` - Timeout for each query
    /// * `query_count` - Number of queries per (provider, domain) pair
    #[must_use]
    pub fn with_settings(timeout: Duration, query_count: usize) -> Self {
        Self {
            timeout,
            query_count,
        }
    }

    /// Run the benchmark over every (provider, domain) pair.
    ///
    /// Pairs are visited in configuration order: all domains for the first
    /// provider, then all domains for the second, and so on. Each pair gets
    /// `query_count` sequential queries and every result, success or
    /// failure, lands in the returned sequence in issue order.
    ///
    /// A provider whose resolver cannot be constructed is not fatal: one
    /// failure result per domain is recorded for it and the run continues
    /// with the next provider.
    ///
    /// # Arguments
    ///
    /// * `config` - Providers, domains and record type to benchmark
    /// * `progress` - Optional callback invoked once per pair before its
    ///   queries run, with (pair index, pair total, provider, domain)
    ///
    /// # Returns
    ///
    /// Returns all query results in issue order.
    pub async fn run(
        &self,
        config: &BenchmarkConfig,
        progress: Option<impl Fn(usize, usize, &Provider, &str)>,
    ) -> Vec<QueryResult> {
        let pair_total = config.total_pairs();
        let mut results = Vec::with_capacity(pair_total * self.query_count);
        let mut pair_index = 0;

        for provider in &config.providers {
            match QueryTimer::for_provider(provider, config.record, self.timeout) {
                Ok(timer) => {
                    for domain in &config.domains {
                        if let Some(ref cb) = progress {
                            cb(pair_index, pair_total, provider, domain);
                        }
                        pair_index += 1;

                        let samples = timer.sample(domain, self.query_count).await;
                        results.extend(samples);
                    }
                }
                Err(e) => {
                    tracing::warn!("skipping provider {}: {e}", provider.name);
                    for domain in &config.domains {
                        if let Some(ref cb) = progress {
                            cb(pair_index, pair_total, provider, domain);
                        }
                        pair_index += 1;

                        results.push(QueryResult::failure(
                            provider.clone(),
                            domain,
                            config.record,
                            Duration::ZERO,
                            e.to_string(),
                        ));
                    }
                }
            }
        }

        results
    }
}

impl Default for BenchmarkRunner {
    fn default() -> Self {
        Self::new()
    }
}
