//! Discovery runs over one or more domains.

use sdscan_core::{DiscoveryReport, NaptrProbeResult, Probe, Result, SrvProbeResult};
use tracing::info;

use crate::client::{DnsClient, DnssecValidator};
use crate::config::ProbeConfig;
use crate::hickory::HickoryClient;
use crate::naptr::probe_naptr_with_concurrency;
use crate::srv::probe_srv_with_concurrency;

/// Runs the NAPTR and SRV probes with a fixed configuration.
pub struct Prober<C> {
    client: C,
    config: ProbeConfig,
}

impl Prober<HickoryClient> {
    /// Create a prober backed by hickory-resolver
    pub fn from_config(config: ProbeConfig) -> Result<Self> {
        let client = HickoryClient::new(&config.resolver)?;
        Ok(Self::new(client, config))
    }
}

impl<C> Prober<C>
where
    C: DnsClient + DnssecValidator,
{
    /// Create a prober over any DNS client
    #[must_use]
    pub const fn new(client: C, config: ProbeConfig) -> Self {
        Self { client, config }
    }

    /// The active configuration
    #[must_use]
    pub const fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// The underlying client
    #[must_use]
    pub const fn client(&self) -> &C {
        &self.client
    }

    /// NAPTR probe of `domain`
    pub async fn naptr(&self, domain: &str) -> Probe<NaptrProbeResult> {
        probe_naptr_with_concurrency(
            &self.client,
            domain,
            self.config.validate,
            self.config.concurrency,
        )
        .await
    }

    /// SRV probe of the configured service names under `domain`
    pub async fn srv(&self, domain: &str) -> Probe<SrvProbeResult> {
        probe_srv_with_concurrency(
            &self.client,
            domain,
            &self.config.service_names,
            self.config.validate,
            self.config.concurrency,
        )
        .await
    }

    /// NAPTR probe followed by SRV probe of `domain`
    pub async fn discover(&self, domain: &str) -> DiscoveryReport {
        let naptr = self.naptr(domain).await;
        let srv = self.srv(domain).await;

        let report = DiscoveryReport {
            domain: domain.to_string(),
            naptr,
            srv,
        };
        info!(
            domain,
            naptr_records = report.naptr.present().map_or(0, NaptrProbeResult::len),
            srv_services = report.srv.present().map_or(0, SrvProbeResult::len),
            instances = report.instance_count(),
            "discovery complete"
        );
        report
    }

    /// [`Prober::discover`] for each domain, in input order
    pub async fn discover_all<I, S>(&self, domains: I) -> Vec<DiscoveryReport>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut reports = Vec::new();
        for domain in domains {
            reports.push(self.discover(domain.as_ref()).await);
        }
        reports
    }
}
