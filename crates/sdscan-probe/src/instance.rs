//! SRV query primitive shared by the SRV and NAPTR probes.

use hickory_proto::rr::RecordType;
use sdscan_core::{Probe, ServiceInstance};
use std::net::IpAddr;
use tracing::{debug, trace};

use crate::client::{
    collect_records, AddressAnswer, DnsClient, DnsMessage, DnssecValidator, SrvAnswer,
};

/// Query the SRV records at `owner` and build one [`ServiceInstance`] per answer.
///
/// Returns [`Probe::Absent`] only when the SRV query itself fails; a response
/// without SRV answers is an empty list. With `validate`, the SRV records are
/// checked once and the status shared by every instance, and each instance
/// with a real target gets its own A and AAAA checks.
pub async fn resolve_service_instances<C>(
    client: &C,
    owner: &str,
    validate: bool,
) -> Probe<Vec<ServiceInstance>>
where
    C: DnsClient + DnssecValidator + ?Sized,
{
    debug!(name = owner, "querying SRV");
    let response = match client.lookup(owner, RecordType::SRV).await {
        Ok(response) => response,
        Err(e) => {
            debug!(name = owner, error = %e, "SRV query failed");
            return Probe::Absent;
        }
    };

    let srv_validation = if validate {
        Some(client.check(owner, RecordType::SRV).await)
    } else {
        None
    };

    let mut instances = Vec::new();
    for srv in collect_records::<SrvAnswer>(&response.answers) {
        let mut instance =
            ServiceInstance::new(owner, srv.priority, srv.weight, srv.port, srv.target);
        instance.srv_validation = srv_validation;

        if !instance.is_no_service() {
            resolve_target(client, &mut instance, &response, validate)
                .await;
        }

        instances.push(instance);
    }

    Probe::Present(instances)
}

/// Fill in the target's addresses and, with `validate`, its A/AAAA statuses.
async fn resolve_target<C>(
    client: &C,
    instance: &mut ServiceInstance,
    response: &DnsMessage,
    validate: bool,
) where
    C: DnsClient + DnssecValidator + ?Sized,
{
    let target = instance.target.clone();
    instance.addresses = target_addresses(client, &target, response).await;

    if validate {
        instance.a_validation = Some(client.check(&target, RecordType::A).await);
        instance.aaaa_validation = Some(client.check(&target, RecordType::AAAA).await);
    }
}

/// Addresses of `target`: glue from the additional section if there is any,
/// an explicit lookup otherwise. A failed lookup yields no addresses.
async fn target_addresses<C>(client: &C, target: &str, response: &DnsMessage) -> Vec<IpAddr>
where
    C: DnsClient + ?Sized,
{
    let glue = glue_addresses(target, response);
    if !glue.is_empty() {
        trace!(target_host = target, count = glue.len(), "using glue addresses");
        return glue;
    }

    match client.resolve_addresses(target).await {
        Ok(addrs) => addrs,
        Err(e) => {
            debug!(target_host = target, error = %e, "address lookup failed");
            Vec::new()
        }
    }
}

fn glue_addresses(target: &str, response: &DnsMessage) -> Vec<IpAddr> {
    collect_records::<AddressAnswer>(&response.additionals)
        .into_iter()
        .filter(|answer| answer.owner == target)
        .map(|answer| answer.addr)
        .collect()
}
