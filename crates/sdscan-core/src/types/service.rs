use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::net::IpAddr;

use super::ValidationStatus;

/// SRV target meaning "service not available at this domain" (RFC 2782)
pub const NO_SERVICE_TARGET: &str = ".";

/// One SRV answer, with the addresses of its target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInstance {
    /// SRV owner name that was queried
    pub name: String,

    /// SRV priority
    pub priority: u16,

    /// SRV weight
    pub weight: u16,

    /// Port the service listens on
    pub port: u16,

    /// Target hostname
    pub target: String,

    /// Addresses of the target, glue first, explicit lookup otherwise
    #[serde(default)]
    pub addresses: Vec<IpAddr>,

    /// DNSSEC status of the SRV record set, shared by sibling instances
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub srv_validation: Option<ValidationStatus>,

    /// DNSSEC status of the target's A record set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a_validation: Option<ValidationStatus>,

    /// DNSSEC status of the target's AAAA record set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aaaa_validation: Option<ValidationStatus>,
}

impl ServiceInstance {
    /// Create an instance with no addresses and no validation statuses
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        priority: u16,
        weight: u16,
        port: u16,
        target: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            priority,
            weight,
            port,
            target: target.into(),
            addresses: Vec::new(),
            srv_validation: None,
            a_validation: None,
            aaaa_validation: None,
        }
    }

    /// Returns true if the target is the "no service" sentinel `.`
    #[must_use]
    pub fn is_no_service(&self) -> bool {
        self.target == NO_SERVICE_TARGET
    }
}

/// Result of probing a list of candidate service names under one domain.
///
/// Keys are the bare service names as supplied by the caller (`_sip._tcp`),
/// not the fully qualified owner names that were queried.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SrvProbeResult {
    /// Service instances per service name
    pub services: BTreeMap<String, Vec<ServiceInstance>>,
}

impl SrvProbeResult {
    /// Create an empty result
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the instances found for a service name
    #[must_use]
    pub fn get(&self, service: &str) -> Option<&[ServiceInstance]> {
        self.services.get(service).map(Vec::as_slice)
    }

    /// Service names that produced at least one instance
    pub fn service_names(&self) -> impl Iterator<Item = &str> {
        self.services.keys().map(String::as_str)
    }

    /// Number of service names with results
    #[must_use]
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Returns true if no service name produced results
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Iterate over service name / instances pairs
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<ServiceInstance>)> {
        self.services.iter()
    }
}

impl IntoIterator for SrvProbeResult {
    type Item = (String, Vec<ServiceInstance>);
    type IntoIter = std::collections::btree_map::IntoIter<String, Vec<ServiceInstance>>;

    fn into_iter(self) -> Self::IntoIter {
        self.services.into_iter()
    }
}
