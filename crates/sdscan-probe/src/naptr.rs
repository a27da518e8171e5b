//! NAPTR probe with delegation into SRV resolution.

use futures_util::stream::{self, StreamExt};
use hickory_proto::rr::RecordType;
use sdscan_core::{NaptrProbeResult, NaptrRecord, Probe};
use tracing::debug;

use crate::client::{collect_records, DnsClient, DnssecValidator, NaptrAnswer};
use crate::instance::resolve_service_instances;

/// Query the NAPTR record set of `domain` and follow `s`-flagged records into SRV.
///
/// Returns [`Probe::Absent`] only if the NAPTR query fails; otherwise every
/// NAPTR answer appears in the result, in answer order, whether or not its
/// delegation produced any instances.
pub async fn probe_naptr<C>(client: &C, domain: &str, validate: bool) -> Probe<NaptrProbeResult>
where
    C: DnsClient + DnssecValidator + ?Sized,
{
    probe_naptr_with_concurrency(client, domain, validate, 1)
        .await
}

/// Like [`probe_naptr`], with up to `concurrency` delegations in flight.
pub async fn probe_naptr_with_concurrency<C>(
    client: &C,
    domain: &str,
    validate: bool,
    concurrency: usize,
) -> Probe<NaptrProbeResult>
where
    C: DnsClient + DnssecValidator + ?Sized,
{
    debug!(name = domain, "querying NAPTR");
    let response = match client.lookup(domain, RecordType::NAPTR).await {
        Ok(response) => response,
        Err(e) => {
            debug!(name = domain, error = %e, "NAPTR query failed");
            return Probe::Absent;
        }
    };

    let validation = if validate {
        Some(client.check(domain, RecordType::NAPTR).await)
    } else {
        None
    };

    let records = collect_records::<NaptrAnswer>(&response.answers)
        .into_iter()
        .map(|answer| NaptrRecord {
            order: answer.order,
            preference: answer.preference,
            flags: answer.flags,
            service: answer.service,
            regexp: answer.regexp,
            replacement: answer.replacement,
            validation,
            services: Vec::new(),
        });

    let records: Vec<NaptrRecord> = stream::iter(records)
        .map(|mut record| async move {
            if let Some(target) = record.delegation_target().map(str::to_owned) {
                debug!(name = domain, replacement = %target, "following NAPTR delegation");
                let services = resolve_service_instances(client, &target, validate).await;
                if let Probe::Present(services) = services {
                    record.services = services;
                }
            }
            record
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    Probe::Present(NaptrProbeResult { records })
}
