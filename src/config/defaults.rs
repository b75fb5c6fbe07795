//! Built-in defaults.
//!
//! The default provider and domain tables live here as process-wide
//! constants; the configuration loader copies them into a
//! [`BenchmarkConfig`](crate::config::BenchmarkConfig) at startup so no
//! component ever reads them ambiently.

use std::time::Duration;

/// Default DNS providers tested when no provider file is supplied.
pub const DEFAULT_PROVIDERS: &[(&str, &str)] = &[
    ("Google DNS", "8.8.8.8"),
    ("Cloudflare DNS 1", "1.1.1.1"),
    ("Cloudflare DNS 2", "1.0.0.1"),
    ("OpenDNS 1", "208.67.222.123"),
    ("OpenDNS 2", "208.67.222.222"),
    ("Level3 DNS", "4.2.2.1"),
    ("Quad9 DNS", "9.9.9.9"),
    ("AdGuard DNS", "176.103.130.132"),
    ("Comodo Secure DNS", "8.26.56.26"),
    ("NextDNS 1", "45.90.28.202"),
    ("NextDNS 2", "45.90.28.0"),
    ("FIOS Default 1", "71.252.0.12"),
    ("FIOS Default 2", "68.237.161.12"),
    ("FIOS VA Opt-Out", "71.252.0.14"),
    ("FIOS NY Opt-Out", "68.237.161.14"),
];

/// Default domains resolved against every provider.
pub const DEFAULT_DOMAINS: &[&str] = &["google.com", "apple.com", "office365.com", "icloud.com"];

/// Default number of queries per (provider, domain) pair.
///
/// Each pair is queried this many times so min/max spread is meaningful;
/// overridable with `--count`.
pub const DEFAULT_QUERY_COUNT: usize = 3;

/// Default timeout for each query attempt.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// File name of the optional user provider list inside the config directory.
pub const USER_PROVIDERS_FILE: &str = "providers.json";
