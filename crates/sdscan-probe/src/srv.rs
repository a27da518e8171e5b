//! SRV probe over a list of candidate service names.

use futures_util::stream::{self, StreamExt};
use sdscan_core::{Probe, SrvProbeResult};
use tracing::debug;

use crate::client::{DnsClient, DnssecValidator};
use crate::instance::resolve_service_instances;

/// Fully qualified SRV owner name for `service` under `domain`
#[must_use]
pub fn owner_name(service: &str, domain: &str) -> String {
    format!("{service}.{domain}")
}

/// Probe each candidate service name under `domain`, one at a time.
///
/// Returns [`Probe::Absent`] unless at least one service name produced at
/// least one instance. Keys of the result are the bare service names.
pub async fn probe_srv<C, S>(
    client: &C,
    domain: &str,
    service_names: &[S],
    validate: bool,
) -> Probe<SrvProbeResult>
where
    C: DnsClient + DnssecValidator + ?Sized,
    S: AsRef<str>,
{
    probe_srv_with_concurrency(client, domain, service_names, validate, 1)
        .await
}

/// Like [`probe_srv`], with up to `concurrency` service names in flight.
///
/// Results are collected in the order of `service_names`.
pub async fn probe_srv_with_concurrency<C, S>(
    client: &C,
    domain: &str,
    service_names: &[S],
    validate: bool,
    concurrency: usize,
) -> Probe<SrvProbeResult>
where
    C: DnsClient + DnssecValidator + ?Sized,
    S: AsRef<str>,
{
    let resolved: Vec<_> = stream::iter(service_names.iter().map(|s| s.as_ref()))
        .map(|service| async move {
            let owner = owner_name(service, domain);
            let instances = resolve_service_instances(client, &owner, validate).await;
            (service, instances)
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let mut result = SrvProbeResult::new();
    for (service, instances) in resolved {
        match instances {
            Probe::Present(instances) if !instances.is_empty() => {
                result.services.insert(service.to_string(), instances);
            }
            _ => debug!(service, domain, "no SRV instances"),
        }
    }

    if result.is_empty() {
        Probe::Absent
    } else {
        Probe::Present(result)
    }
}
