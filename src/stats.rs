//! Result aggregation.
//!
//! This module turns the flat sequence of query results into per-pair
//! detail rows and per-provider summary rows. Statistics cover successful
//! queries only; failed queries are counted and logged but never skew the
//! averages.

use crate::dns::types::{Provider, QueryResult};

/// Per (provider, domain) statistics, in seconds.
///
/// Only produced for pairs with at least one successful query, so the
/// invariant `min <= avg <= max` always holds.
#[derive(Debug, Clone)]
pub struct DetailRow {
    /// Provider the queries were sent to
    pub provider: Provider,
    /// Domain that was resolved
    pub domain: String,
    /// Arithmetic mean of successful query times
    pub avg: f64,
    /// Fastest successful query time
    pub min: f64,
    /// Slowest successful query time
    pub max: f64,
}

/// Per-provider overall average, in seconds.
///
/// `overall_avg` is the unweighted mean of the provider's per-domain
/// averages: every domain counts equally, regardless of how many samples
/// succeeded for it.
#[derive(Debug, Clone)]
pub struct SummaryRow {
    /// Provider the average belongs to
    pub provider: Provider,
    /// Unweighted mean of the provider's per-domain averages
    pub overall_avg: f64,
}

/// Aggregate query results into detail and summary rows.
///
/// Results are grouped by (provider IP, domain) in encounter order, which
/// matches configuration order because the runner iterates
/// deterministically. Pairs whose queries all failed produce no detail
/// row, and a provider with no detail rows is omitted from the summary.
///
/// # Arguments
///
/// * `results` - Query results in issue order
///
/// # Returns
///
/// Returns `(details, summary)`, both in configuration order.
#[must_use]
pub fn aggregate(results: &[QueryResult]) -> (Vec<DetailRow>, Vec<SummaryRow>) {
    struct Group<'a> {
        provider: &'a Provider,
        domain: &'a str,
        samples: Vec<f64>,
        failures: usize,
    }

    let mut groups: Vec<Group> = Vec::new();
    for result in results {
        let idx = match groups
            .iter()
            .position(|g| g.provider.ip == result.provider.ip && g.domain == result.domain)
        {
            Some(i) => i,
            None => {
                groups.push(Group {
                    provider: &result.provider,
                    domain: &result.domain,
                    samples: Vec::new(),
                    failures: 0,
                });
                groups.len() - 1
            }
        };

        if result.success {
            groups[idx].samples.push(result.elapsed_seconds());
        } else {
            groups[idx].failures += 1;
        }
    }

    let mut details = Vec::new();
    for group in &groups {
        if group.failures > 0 {
            tracing::warn!(
                "{} failed {}/{} queries for {}",
                group.provider.name,
                group.failures,
                group.samples.len() + group.failures,
                group.domain
            );
        }
        if group.samples.is_empty() {
            continue;
        }

        let min = group.samples.iter().fold(f64::INFINITY, |a, &b| a.min(b));
        let max = group.samples.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
        let avg = group.samples.iter().sum::<f64>() / group.samples.len() as f64;

        details.push(DetailRow {
            provider: group.provider.clone(),
            domain: group.domain.to_string(),
            avg,
            min,
            max,
        });
    }

    let mut per_provider: Vec<(Provider, Vec<f64>)> = Vec::new();
    for row in &details {
        let idx = match per_provider
            .iter()
            .position(|(p, _)| p.ip == row.provider.ip)
        {
            Some(i) => i,
            None => {
                per_provider.push((row.provider.clone(), Vec::new()));
                per_provider.len() - 1
            }
        };
        per_provider[idx].1.push(row.avg);
    }

    let summary = per_provider
        .into_iter()
        .map(|(provider, avgs)| SummaryRow {
            overall_avg: avgs.iter().sum::<f64>() / avgs.len() as f64,
            provider,
        })
        .collect();

    (details, summary)
}
