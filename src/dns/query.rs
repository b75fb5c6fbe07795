//! Timed DNS queries against a single provider.
//!
//! This module issues individual DNS queries to one provider and measures
//! the wall-clock time of each. The resolver is configured so that every
//! query is a real network round trip: caching is disabled, the hosts file
//! is ignored, and no retries are made.

use crate::dns::types::{Provider, QueryResult, RecordKind};
use crate::error::{Error, Result};
use std::net::IpAddr;
use std::time::{Duration, Instant};
use tokio::time::timeout;
use trust_dns_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use trust_dns_resolver::error::ResolveErrorKind;
use trust_dns_resolver::TokioAsyncResolver;

/// Plain DNS port.
const DNS_PORT: u16 = 53;

/// Timed query issuer bound to a single DNS provider.
///
/// Each timer owns a resolver that talks only to its provider's IP, so a
/// measured duration is attributable to that provider alone.
///
/// # Example
///
/// ```ignore
/// let provider = Provider::new("Cloudflare", "1.1.1.1");
/// let timer = QueryTimer::for_provider(&provider, RecordKind::A, Duration::from_secs(5))?;
/// let result = timer.query_once("google.com").await;
/// println!("{:.5}s", result.elapsed_seconds());
/// ```
pub struct QueryTimer {
    resolver: TokioAsyncResolver,
    provider: Provider,
    record: RecordKind,
    timeout: Duration,
}

impl QueryTimer {
    /// Create a timer whose resolver targets a single provider.
    ///
    /// # Arguments
    ///
    /// * `provider` - The DNS provider to query
    /// * `record` - Record type requested for every query
    /// * `timeout` - Upper bound for each query
    ///
    /// # Errors
    ///
    /// Returns an error if the provider's IP address does not parse or the
    /// resolver cannot be constructed.
    pub fn for_provider(provider: &Provider, record: RecordKind, timeout: Duration) -> Result<Self> {
        let ip: IpAddr = provider.ip.parse().map_err(|_| {
            Error::config(format!(
                "provider '{}' has invalid IP address '{}'",
                provider.name, provider.ip
            ))
        })?;

        let config = ResolverConfig::from_parts(
            None,
            vec![],
            NameServerConfigGroup::from_ips_clear(&[ip], DNS_PORT, true),
        );

        // Every sample must hit the wire: no cache, no hosts file, and a
        // single attempt so one timeout never hides behind a retry.
        let mut opts = ResolverOpts::default();
        opts.timeout = timeout;
        opts.attempts = 1;
        opts.cache_size = 0;
        opts.use_hosts_file = false;

        let resolver = TokioAsyncResolver::tokio(config, opts)?;

        Ok(Self {
            resolver,
            provider: provider.clone(),
            record,
            timeout,
        })
    }

    /// Issue one timed query for a domain.
    ///
    /// The elapsed time is recorded for failures as well, so a timeout
    /// shows up as roughly the configured limit rather than as a gap.
    ///
    /// # Arguments
    ///
    /// * `domain` - The domain name to resolve
    ///
    /// # Returns
    ///
    /// Returns a `QueryResult` carrying the measured duration and outcome.
    pub async fn query_once(&self, domain: &str) -> QueryResult {
        // Ensure the name is fully qualified so no search suffixes apply.
        let fqdn = if domain.ends_with('.') {
            domain.to_string()
        } else {
            format!("{domain}.")
        };

        let start = Instant::now();
        let outcome = timeout(
            self.timeout,
            self.resolver.lookup(fqdn.as_str(), self.record.record_type()),
        )
        .await;
        let elapsed = start.elapsed();

        match outcome {
            Ok(Ok(_lookup)) => {
                QueryResult::success(self.provider.clone(), domain, self.record, elapsed)
            }
            Ok(Err(e)) => {
                let message = if matches!(e.kind(), ResolveErrorKind::Timeout) {
                    "timeout".to_string()
                } else {
                    e.to_string()
                };
                tracing::debug!("{} failed to resolve {domain}: {message}", self.provider.name);
                QueryResult::failure(self.provider.clone(), domain, self.record, elapsed, message)
            }
            Err(_) => {
                tracing::debug!("{} timed out resolving {domain}", self.provider.name);
                QueryResult::failure(self.provider.clone(), domain, self.record, elapsed, "timeout")
            }
        }
    }

    /// Issue `count` timed queries for a domain, one after another.
    ///
    /// Queries are sequential so samples never contend with each other.
    pub async fn sample(&self, domain: &str, count: usize) -> Vec<QueryResult> {
        let mut results = Vec::with_capacity(count);
        for _ in 0..count {
            results.push(self.query_once(domain).await);
        }
        results
    }
}
