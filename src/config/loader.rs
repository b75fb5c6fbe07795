//! Benchmark configuration loader.
//!
//! This module merges the built-in defaults with user-supplied overrides
//! (provider files, `--dns`/`--domains` additions, record type, CSV path)
//! into a single read-only [`BenchmarkConfig`] that is threaded through
//! every other component.

use crate::cli::Cli;
use crate::config::defaults;
use crate::dns::types::{Provider, ProviderList, RecordKind};
use crate::error::{Error, Result};
use std::collections::HashSet;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use trust_dns_resolver::name_server::TokioHandle;
use trust_dns_resolver::TokioAsyncResolver;

/// Resolved benchmark configuration.
///
/// Built once at startup and read-only thereafter. Providers are unique by
/// IP address and domains are unique, both in configuration order; that
/// order determines query issuance and report row ordering.
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Providers to benchmark, unique by IP, in configuration order
    pub providers: Vec<Provider>,
    /// Domains to resolve against every provider, unique, in configuration order
    pub domains: Vec<String>,
    /// Record type requested for every query
    pub record: RecordKind,
    /// Number of queries per (provider, domain) pair
    pub query_count: usize,
    /// Timeout for each query attempt
    pub timeout: Duration,
    /// Optional CSV file that summary rows are appended to
    pub csv_path: Option<PathBuf>,
    /// Sort the summary table by overall average instead of configuration order
    pub sort_summary: bool,
}

impl BenchmarkConfig {
    /// Number of (provider, domain) pairs the benchmark will visit.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.providers.len() * self.domains.len()
    }

    /// Total number of queries the benchmark will issue.
    #[must_use]
    pub fn total_queries(&self) -> usize {
        self.total_pairs() * self.query_count
    }
}

/// Benchmark configuration loader.
///
/// Provides methods to load provider lists from different sources and to
/// merge them with command-line overrides.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Built-in default provider set.
    #[must_use]
    pub fn default_providers() -> Vec<Provider> {
        defaults::DEFAULT_PROVIDERS
            .iter()
            .map(|(name, ip)| Provider::new(*name, *ip))
            .collect()
    }

    /// Built-in default domain list.
    #[must_use]
    pub fn default_domains() -> Vec<String> {
        defaults::DEFAULT_DOMAINS
            .iter()
            .map(|d| (*d).to_string())
            .collect()
    }

    /// Load a provider list from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let list = ConfigLoader::load_from_file("providers.json")?;
    /// for provider in &list.providers {
    ///     println!("{}: {}", provider.name, provider.ip);
    /// }
    /// ```
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ProviderList> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let list: ProviderList = serde_json::from_str(&content)?;
        Ok(list)
    }

    /// Get the user config directory path.
    #[must_use]
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dnsbench")
    }

    /// Load the optional user provider list from the config directory.
    ///
    /// Looks for `providers.json` under [`Self::config_dir`]. Returns `None`
    /// when the file is absent, empty, or unreadable; an unreadable file is
    /// logged and ignored so a broken config never blocks a run.
    #[must_use]
    pub fn load_user_providers() -> Option<ProviderList> {
        let path = Self::config_dir().join(defaults::USER_PROVIDERS_FILE);
        if !path.exists() {
            return None;
        }
        match Self::load_from_file(&path) {
            Ok(list) if !list.is_empty() => {
                tracing::debug!("loaded {} providers from {}", list.len(), path.display());
                Some(list)
            }
            Ok(_) => None,
            Err(e) => {
                tracing::warn!("ignoring unreadable provider list {}: {e}", path.display());
                None
            }
        }
    }

    /// Resolve the final benchmark configuration from CLI arguments.
    ///
    /// The base provider set comes from `--file` if given, otherwise the
    /// user config directory, otherwise the built-in defaults. Every
    /// `--dns` value is appended to the base set and every `--domains`
    /// value is appended to the default domains.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a provider file cannot be loaded,
    /// a `--dns` hostname cannot be resolved, a domain is empty, or the
    /// count/timeout values are zero. All of these are fatal before any
    /// queries run.
    pub async fn resolve(cli: &Cli) -> Result<BenchmarkConfig> {
        let base = if let Some(path) = &cli.file {
            Self::load_from_file(path)?.providers
        } else if let Some(list) = Self::load_user_providers() {
            list.providers
        } else {
            Self::default_providers()
        };

        Self::resolve_with_base(cli, base).await
    }

    /// Resolve the final configuration from an explicit base provider set.
    ///
    /// Exposed separately so the merge semantics can be exercised without
    /// touching the filesystem.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::resolve`], minus file loading.
    pub async fn resolve_with_base(cli: &Cli, base: Vec<Provider>) -> Result<BenchmarkConfig> {
        let mut providers = base;
        for arg in &cli.dns {
            providers.push(Self::provider_from_arg(arg).await?);
        }
        let providers = Self::dedupe_providers(providers);
        if providers.is_empty() {
            return Err(Error::config("provider set is empty"));
        }

        let mut domains = Self::default_domains();
        for domain in &cli.domains {
            let domain = domain.trim();
            if domain.is_empty() {
                return Err(Error::config("domain must not be empty"));
            }
            domains.push(domain.to_string());
        }
        let domains = Self::dedupe_domains(domains);
        if domains.is_empty() {
            return Err(Error::config("domain list is empty"));
        }

        if cli.count == 0 {
            return Err(Error::config("count must be at least 1"));
        }
        if cli.timeout == 0 {
            return Err(Error::config("timeout must be at least 1 second"));
        }

        Ok(BenchmarkConfig {
            providers,
            domains,
            record: cli.record,
            query_count: cli.count,
            timeout: Duration::from_secs(cli.timeout),
            csv_path: cli.csv.clone(),
            sort_summary: cli.sort,
        })
    }

    /// Build a provider from a `--dns` argument.
    ///
    /// Accepts `HOST` or `HOST#NAME`, where `HOST` is an IP literal or a
    /// hostname. A hostname is resolved through the system's default
    /// resolver, since all benchmark queries must target a server by IP.
    /// The provider name defaults to the `HOST` text when no label is
    /// given.
    ///
    /// # Errors
    ///
    /// Returns an error if the host is empty or a hostname cannot be
    /// resolved.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let provider = ConfigLoader::provider_from_arg("9.9.9.9#Quad9").await?;
    /// assert_eq!(provider.name, "Quad9");
    /// ```
    pub async fn provider_from_arg(arg: &str) -> Result<Provider> {
        let parts: Vec<&str> = arg.splitn(2, '#').collect();
        let host = parts[0].trim();
        let name = parts
            .get(1)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .unwrap_or(host);

        if host.is_empty() {
            return Err(Error::parse("provider host must not be empty"));
        }

        if host.parse::<IpAddr>().is_ok() {
            return Ok(Provider::new(name, host));
        }

        let ip = Self::resolve_host(host).await?;
        Ok(Provider::new(name, ip.to_string()))
    }

    /// Resolve a provider hostname to an IP address via the system resolver.
    async fn resolve_host(host: &str) -> Result<IpAddr> {
        let resolver = TokioAsyncResolver::from_system_conf(TokioHandle)
            .map_err(|e| Error::config(format!("cannot initialize system resolver: {e}")))?;

        let lookup = resolver
            .lookup_ip(host)
            .await
            .map_err(|e| Error::config(format!("cannot resolve provider host '{host}': {e}")))?;

        lookup
            .iter()
            .next()
            .ok_or_else(|| Error::config(format!("provider host '{host}' resolved to no addresses")))
    }

    /// Remove duplicate providers by IP address.
    ///
    /// The first occurrence wins and configuration order is preserved, so
    /// report rows keep the order providers were configured in.
    #[must_use]
    pub fn dedupe_providers(providers: Vec<Provider>) -> Vec<Provider> {
        let mut seen = HashSet::new();
        providers
            .into_iter()
            .filter(|p| seen.insert(p.ip.clone()))
            .collect()
    }

    /// Remove duplicate domains, preserving configuration order.
    #[must_use]
    pub fn dedupe_domains(domains: Vec<String>) -> Vec<String> {
        let mut seen = HashSet::new();
        domains
            .into_iter()
            .filter(|d| seen.insert(d.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["dnsbench"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_default_providers() {
        let providers = ConfigLoader::default_providers();
        assert_eq!(providers.len(), 15);
        assert_eq!(providers[0].name, "Google DNS");
        assert_eq!(providers[0].ip, "8.8.8.8");

        // The default table must itself be unique by IP.
        let deduped = ConfigLoader::dedupe_providers(providers.clone());
        assert_eq!(deduped.len(), providers.len());
    }

    #[test]
    fn test_default_domains() {
        let domains = ConfigLoader::default_domains();
        assert_eq!(
            domains,
            vec!["google.com", "apple.com", "office365.com", "icloud.com"]
        );
    }

    #[test]
    fn test_dedupe_providers_keeps_first() {
        let providers = vec![
            Provider::new("First", "8.8.8.8"),
            Provider::new("Other", "1.1.1.1"),
            Provider::new("Duplicate", "8.8.8.8"),
        ];
        let deduped = ConfigLoader::dedupe_providers(providers);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].name, "First");
        assert_eq!(deduped[1].name, "Other");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("providers.json");
        std::fs::write(
            &path,
            r#"{"providers": [{"name": "My DNS", "ip": "10.0.0.53"}]}"#,
        )
        .unwrap();

        let list = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.providers[0].ip, "10.0.0.53");
    }

    #[test]
    fn test_load_from_file_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("providers.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(ConfigLoader::load_from_file(&path).is_err());

        assert!(ConfigLoader::load_from_file(dir.path().join("missing.json")).is_err());
    }

    #[tokio::test]
    async fn test_provider_from_arg_ip_literal() {
        let provider = ConfigLoader::provider_from_arg("9.9.9.9").await.unwrap();
        assert_eq!(provider.name, "9.9.9.9");
        assert_eq!(provider.ip, "9.9.9.9");
    }

    #[tokio::test]
    async fn test_provider_from_arg_with_label() {
        let provider = ConfigLoader::provider_from_arg("9.9.9.9#Quad9").await.unwrap();
        assert_eq!(provider.name, "Quad9");
        assert_eq!(provider.ip, "9.9.9.9");

        let v6 = ConfigLoader::provider_from_arg("2606:4700:4700::1111#CF v6")
            .await
            .unwrap();
        assert_eq!(v6.name, "CF v6");
        assert!(v6.is_ipv6());
    }

    #[tokio::test]
    async fn test_provider_from_arg_empty() {
        assert!(ConfigLoader::provider_from_arg("").await.is_err());
        assert!(ConfigLoader::provider_from_arg("#Name").await.is_err());
    }

    #[tokio::test]
    #[ignore = "resolves a hostname through the system resolver"]
    async fn test_provider_from_arg_hostname() {
        let provider = ConfigLoader::provider_from_arg("dns.quad9.net").await.unwrap();
        assert_eq!(provider.name, "dns.quad9.net");
        assert!(provider.ip_addr().is_some());
    }

    #[tokio::test]
    async fn test_resolve_merges_cli_providers() {
        let cli = cli(&["--dns", "192.0.2.1,192.0.2.2#Lab"]);
        let base = vec![Provider::new("Base", "192.0.2.9")];
        let config = ConfigLoader::resolve_with_base(&cli, base).await.unwrap();

        let ips: Vec<&str> = config.providers.iter().map(|p| p.ip.as_str()).collect();
        assert_eq!(ips, vec!["192.0.2.9", "192.0.2.1", "192.0.2.2"]);
        assert_eq!(config.providers[2].name, "Lab");
    }

    #[tokio::test]
    async fn test_resolve_dedupes_by_ip() {
        let cli = cli(&["--dns", "192.0.2.9"]);
        let base = vec![Provider::new("Base", "192.0.2.9")];
        let config = ConfigLoader::resolve_with_base(&cli, base).await.unwrap();
        assert_eq!(config.providers.len(), 1);
        assert_eq!(config.providers[0].name, "Base");
    }

    #[tokio::test]
    async fn test_resolve_appends_domains() {
        let cli = cli(&["--domains", "example.org, example.net"]);
        let base = vec![Provider::new("Base", "192.0.2.9")];
        let config = ConfigLoader::resolve_with_base(&cli, base).await.unwrap();

        assert_eq!(config.domains.len(), 6);
        assert_eq!(config.domains[4], "example.org");
        assert_eq!(config.domains[5], "example.net");

        // A domain that is already a default is not duplicated.
        let cli = self::cli(&["--domains", "google.com"]);
        let base = vec![Provider::new("Base", "192.0.2.9")];
        let config = ConfigLoader::resolve_with_base(&cli, base).await.unwrap();
        assert_eq!(config.domains.len(), 4);
    }

    #[tokio::test]
    async fn test_resolve_rejects_empty_domain() {
        let cli = cli(&["--domains", "  "]);
        let base = vec![Provider::new("Base", "192.0.2.9")];
        assert!(ConfigLoader::resolve_with_base(&cli, base).await.is_err());
    }

    #[tokio::test]
    async fn test_resolve_rejects_zero_count_and_timeout() {
        let base = vec![Provider::new("Base", "192.0.2.9")];
        let zero_count = cli(&["--count", "0"]);
        assert!(ConfigLoader::resolve_with_base(&zero_count, base.clone())
            .await
            .is_err());

        let zero_timeout = cli(&["--timeout", "0"]);
        assert!(ConfigLoader::resolve_with_base(&zero_timeout, base)
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_resolve_rejects_empty_provider_set() {
        let cli = cli(&[]);
        assert!(ConfigLoader::resolve_with_base(&cli, vec![]).await.is_err());
    }

    #[tokio::test]
    async fn test_resolve_carries_settings() {
        let cli = cli(&[
            "--record", "MX", "--csv", "out.csv", "--count", "5", "--timeout", "2", "--sort",
        ]);
        let base = vec![Provider::new("Base", "192.0.2.9")];
        let config = ConfigLoader::resolve_with_base(&cli, base).await.unwrap();

        assert_eq!(config.record, RecordKind::MX);
        assert_eq!(config.csv_path, Some(PathBuf::from("out.csv")));
        assert_eq!(config.query_count, 5);
        assert_eq!(config.timeout, Duration::from_secs(2));
        assert!(config.sort_summary);
        assert_eq!(config.total_pairs(), 4);
        assert_eq!(config.total_queries(), 20);
    }

    #[tokio::test]
    async fn test_resolve_with_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("providers.json");
        std::fs::write(
            &path,
            r#"{"providers": [{"name": "Lab", "ip": "10.0.0.53"}]}"#,
        )
        .unwrap();

        let cli = cli(&["--file", path.to_str().unwrap()]);
        let config = ConfigLoader::resolve(&cli).await.unwrap();
        assert_eq!(config.providers.len(), 1);
        assert_eq!(config.providers[0].name, "Lab");
    }
}
