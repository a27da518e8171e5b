use serde::{Deserialize, Serialize};

use super::{NaptrProbeResult, Probe, SrvProbeResult};

/// Everything discovered for one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryReport {
    /// Domain that was probed
    pub domain: String,

    /// NAPTR probe, absent only if the NAPTR query failed
    pub naptr: Probe<NaptrProbeResult>,

    /// SRV probe, absent unless some candidate service name had instances
    pub srv: Probe<SrvProbeResult>,
}

impl DiscoveryReport {
    /// Returns true if neither probe produced any record
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let naptr = self.naptr.present();
        let no_naptr = naptr.map_or(true, NaptrProbeResult::is_empty);
        no_naptr && self.srv.is_absent()
    }

    /// Total number of service instances, direct and NAPTR-delegated
    #[must_use]
    pub fn instance_count(&self) -> usize {
        let delegated: usize = self
            .naptr
            .present()
            .map_or(0, |r| r.iter().map(|n| n.services.len()).sum());
        let direct: usize = self
            .srv
            .present()
            .map_or(0, |r| r.iter().map(|(_, v)| v.len()).sum());
        delegated + direct
    }
}
