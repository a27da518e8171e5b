//! Probe configuration.

use sdscan_core::{ProbeError, Result};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::Path;
use std::time::Duration;

/// Service names probed when none are configured.
pub const DEFAULT_SERVICE_NAMES: &[&str] = &[
    "_sip._tcp",
    "_sip._udp",
    "_sips._tcp",
    "_xmpp-client._tcp",
    "_xmpp-server._tcp",
    "_ldap._tcp",
    "_kerberos._udp",
    "_caldav._tcp",
    "_carddav._tcp",
    "_imaps._tcp",
    "_submission._tcp",
    "_autodiscover._tcp",
];

/// What to probe and how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Candidate service names for the SRV probe (e.g. `_sip._tcp`).
    #[serde(default = "default_service_names")]
    pub service_names: Vec<String>,

    /// Annotate records with DNSSEC validation statuses.
    #[serde(default)]
    pub validate: bool,

    /// Maximum resolutions in flight (1 = strictly sequential).
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Resolver used by the hickory-backed client.
    #[serde(default)]
    pub resolver: ResolverSettings,
}

/// Upstream resolver settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverSettings {
    /// Nameservers to query; empty means the system configuration.
    #[serde(default)]
    pub nameservers: Vec<IpAddr>,

    /// Nameserver port (default: 53).
    #[serde(default = "default_port")]
    pub port: u16,

    /// Per-query timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Attempts per query before giving up.
    #[serde(default = "default_attempts")]
    pub attempts: usize,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            service_names: default_service_names(),
            validate: false,
            concurrency: default_concurrency(),
            resolver: ResolverSettings::default(),
        }
    }
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            nameservers: Vec::new(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            attempts: default_attempts(),
        }
    }
}

impl ProbeConfig {
    /// Load config from a TOML file, falling back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| ProbeError::Config(e.to_string()))
    }

    /// Set the candidate service names
    #[must_use]
    pub fn service_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.service_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable DNSSEC annotation
    #[must_use]
    pub const fn validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Set the maximum resolutions in flight
    #[must_use]
    pub const fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Set the resolver settings
    #[must_use]
    pub fn resolver(mut self, resolver: ResolverSettings) -> Self {
        self.resolver = resolver;
        self
    }
}

impl ResolverSettings {
    /// Per-query timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// Default value functions for serde.
fn default_service_names() -> Vec<String> {
    DEFAULT_SERVICE_NAMES
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

const fn default_concurrency() -> usize {
    1
}

const fn default_port() -> u16 {
    53
}

const fn default_timeout_secs() -> u64 {
    5
}

const fn default_attempts() -> usize {
    2
}
