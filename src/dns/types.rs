//! DNS types and data structures.
//!
//! This module provides the core types used for provider representation,
//! record-type selection, and per-query timing results.

use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::time::Duration;
use trust_dns_resolver::proto::rr::RecordType;

/// DNS provider information.
///
/// Represents a single DNS provider with its display name and server IP
/// address. Providers are immutable once constructed; identity is the IP
/// address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Provider {
    /// Provider name (e.g., "Cloudflare DNS 1", "Google DNS")
    pub name: String,
    /// IP address of the DNS server (IPv4 or IPv6 literal)
    pub ip: String,
}

impl Provider {
    /// Create a new provider.
    ///
    /// # Arguments
    ///
    /// * `name` - Provider name
    /// * `ip` - IP address (IPv4 or IPv6)
    ///
    /// # Example
    ///
    /// ```ignore
    /// let provider = Provider::new("Cloudflare", "1.1.1.1");
    /// ```
    pub fn new(name: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ip: ip.into(),
        }
    }

    /// Parse the IP address string into an `IpAddr`.
    ///
    /// # Returns
    ///
    /// Returns `Some(IpAddr)` if parsing succeeds, `None` otherwise.
    #[must_use]
    pub fn ip_addr(&self) -> Option<IpAddr> {
        self.ip.parse().ok()
    }

    /// Check if the provider uses IPv4.
    #[must_use]
    pub fn is_ipv4(&self) -> bool {
        self.ip_addr().is_some_and(|ip| ip.is_ipv4())
    }

    /// Check if the provider uses IPv6.
    #[must_use]
    pub fn is_ipv6(&self) -> bool {
        self.ip_addr().is_some_and(|ip| ip.is_ipv6())
    }
}

/// Provider list container.
///
/// Represents a collection of providers, typically loaded from a JSON
/// file supplied with `--file` or found in the user config directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderList {
    /// List of providers
    pub providers: Vec<Provider>,
}

impl ProviderList {
    /// Create a new empty provider list.
    #[must_use]
    pub fn new() -> Self {
        Self { providers: vec![] }
    }

    /// Create a provider list from a vector of providers.
    #[must_use]
    pub fn from_providers(providers: Vec<Provider>) -> Self {
        Self { providers }
    }

    /// Get the number of providers in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Check if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl Default for ProviderList {
    fn default() -> Self {
        Self::new()
    }
}

/// DNS record type to query.
///
/// The supported set matches what the tool accepts on the command line;
/// anything else is rejected while the configuration is resolved, before
/// any queries run.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordKind {
    /// IPv4 host address record (default)
    #[default]
    A,
    /// IPv6 host address record
    AAAA,
    /// Text record
    TXT,
    /// Mail exchange record
    MX,
    /// Name server record
    NS,
    /// Canonical name record
    CNAME,
}

impl RecordKind {
    /// Get all supported record-type names.
    #[must_use]
    pub fn names() -> &'static [&'static str] {
        &["A", "AAAA", "TXT", "MX", "NS", "CNAME"]
    }

    /// Convert to the resolver library's record type.
    #[must_use]
    pub fn record_type(self) -> RecordType {
        match self {
            Self::A => RecordType::A,
            Self::AAAA => RecordType::AAAA,
            Self::TXT => RecordType::TXT,
            Self::MX => RecordType::MX,
            Self::NS => RecordType::NS,
            Self::CNAME => RecordType::CNAME,
        }
    }
}

impl std::str::FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(Self::A),
            "AAAA" => Ok(Self::AAAA),
            "TXT" => Ok(Self::TXT),
            "MX" => Ok(Self::MX),
            "NS" => Ok(Self::NS),
            "CNAME" => Ok(Self::CNAME),
            _ => Err(format!(
                "Unknown record type: {}. Valid options are: {:?}",
                s,
                Self::names()
            )),
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::AAAA => write!(f, "AAAA"),
            Self::TXT => write!(f, "TXT"),
            Self::MX => write!(f, "MX"),
            Self::NS => write!(f, "NS"),
            Self::CNAME => write!(f, "CNAME"),
        }
    }
}

/// Result of a single timed DNS query.
///
/// One `QueryResult` is created per query attempt, success or failure, and
/// never mutated afterwards. Failed queries still carry the wall-clock time
/// consumed up to the failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResult {
    /// The provider that was queried
    pub provider: Provider,
    /// Domain name that was resolved
    pub domain: String,
    /// Record type that was requested
    pub record: RecordKind,
    /// Wall-clock time the query took, up to completion or failure
    pub elapsed: Duration,
    /// Whether the query produced a resolvable response
    pub success: bool,
    /// Error message if the query failed
    pub error: Option<String>,
}

impl QueryResult {
    /// Create a successful result.
    #[must_use]
    pub fn success(provider: Provider, domain: impl Into<String>, record: RecordKind, elapsed: Duration) -> Self {
        Self {
            provider,
            domain: domain.into(),
            record,
            elapsed,
            success: true,
            error: None,
        }
    }

    /// Create a failed result.
    pub fn failure(
        provider: Provider,
        domain: impl Into<String>,
        record: RecordKind,
        elapsed: Duration,
        error: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            domain: domain.into(),
            record,
            elapsed,
            success: false,
            error: Some(error.into()),
        }
    }

    /// Elapsed query time in seconds.
    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Check if the result indicates a timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        !self.success && matches!(self.error.as_deref(), Some("timeout"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_creation() {
        let provider = Provider::new("Test DNS", "8.8.8.8");
        assert_eq!(provider.name, "Test DNS");
        assert_eq!(provider.ip, "8.8.8.8");
    }

    #[test]
    fn test_provider_ip_parse() {
        let provider = Provider::new("Test", "8.8.8.8");
        let ip = provider.ip_addr();
        assert!(ip.is_some());
        assert!(ip.unwrap().is_ipv4());

        let provider_v6 = Provider::new("Test", "::1");
        let ip_v6 = provider_v6.ip_addr();
        assert!(ip_v6.is_some());
        assert!(ip_v6.unwrap().is_ipv6());

        let bad = Provider::new("Test", "not-an-ip");
        assert!(bad.ip_addr().is_none());
    }

    #[test]
    fn test_provider_is_ipv4_ipv6() {
        let provider_v4 = Provider::new("Test", "8.8.8.8");
        assert!(provider_v4.is_ipv4());
        assert!(!provider_v4.is_ipv6());

        let provider_v6 = Provider::new("Test", "2606:4700:4700::1111");
        assert!(!provider_v6.is_ipv4());
        assert!(provider_v6.is_ipv6());
    }

    #[test]
    fn test_provider_list() {
        let list = ProviderList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        let providers = vec![
            Provider::new("Test1", "8.8.8.8"),
            Provider::new("Test2", "1.1.1.1"),
        ];
        let list = ProviderList::from_providers(providers);
        assert!(!list.is_empty());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_provider_list_json() {
        let json = r#"{"providers": [{"name": "Google DNS", "ip": "8.8.8.8"}]}"#;
        let list: ProviderList = serde_json::from_str(json).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.providers[0].name, "Google DNS");
        assert_eq!(list.providers[0].ip, "8.8.8.8");
    }

    #[test]
    fn test_record_kind_parse() {
        assert_eq!("A".parse::<RecordKind>(), Ok(RecordKind::A));
        assert_eq!("aaaa".parse::<RecordKind>(), Ok(RecordKind::AAAA));
        assert_eq!("txt".parse::<RecordKind>(), Ok(RecordKind::TXT));
        assert_eq!("MX".parse::<RecordKind>(), Ok(RecordKind::MX));
        assert_eq!("ns".parse::<RecordKind>(), Ok(RecordKind::NS));
        assert_eq!("Cname".parse::<RecordKind>(), Ok(RecordKind::CNAME));

        let err = "SRV".parse::<RecordKind>().unwrap_err();
        assert!(err.contains("Unknown record type: SRV"));
        assert!(err.contains("Valid options"));
    }

    #[test]
    fn test_record_kind_display() {
        assert_eq!(RecordKind::A.to_string(), "A");
        assert_eq!(RecordKind::AAAA.to_string(), "AAAA");
        assert_eq!(RecordKind::CNAME.to_string(), "CNAME");
    }

    #[test]
    fn test_record_kind_default() {
        assert_eq!(RecordKind::default(), RecordKind::A);
    }

    #[test]
    fn test_record_kind_record_type() {
        assert_eq!(RecordKind::A.record_type(), RecordType::A);
        assert_eq!(RecordKind::AAAA.record_type(), RecordType::AAAA);
        assert_eq!(RecordKind::MX.record_type(), RecordType::MX);
    }

    #[test]
    fn test_query_result() {
        let provider = Provider::new("Test", "8.8.8.8");

        let ok = QueryResult::success(
            provider.clone(),
            "example.com",
            RecordKind::A,
            Duration::from_millis(20),
        );
        assert!(ok.success);
        assert!(ok.error.is_none());
        assert!((ok.elapsed_seconds() - 0.020).abs() < 1e-9);

        let failed = QueryResult::failure(
            provider.clone(),
            "example.com",
            RecordKind::A,
            Duration::from_secs(5),
            "timeout",
        );
        assert!(!failed.success);
        assert!(failed.is_timeout());
        assert!(failed.error.is_some());

        let refused = QueryResult::failure(
            provider,
            "example.com",
            RecordKind::A,
            Duration::from_millis(3),
            "connection refused",
        );
        assert!(!refused.is_timeout());
    }
}
