//! Production DNS client backed by hickory-resolver.

use async_trait::async_trait;
use hickory_proto::dnssec::Proof;
use hickory_proto::rr::{Record, RecordType};
use hickory_resolver::config::{LookupIpStrategy, NameServerConfigGroup, ResolverConfig};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::{ResolveError, TokioResolver};
use sdscan_core::{ProbeError, Result, ValidationStatus};
use std::net::IpAddr;
use tracing::debug;

use crate::client::{DnsClient, DnsMessage, DnssecValidator};
use crate::config::ResolverSettings;

/// DNS client and DNSSEC validator over hickory's tokio resolver.
///
/// Lookups go through a plain resolver so that records are reported even
/// when their signatures do not validate; status checks go through a
/// second, validating resolver.
pub struct HickoryClient {
    resolver: TokioResolver,
    validating: TokioResolver,
}

impl HickoryClient {
    /// Create a client from resolver settings
    pub fn new(settings: &ResolverSettings) -> Result<Self> {
        Ok(Self {
            resolver: build_resolver(settings, false)?,
            validating: build_resolver(settings, true)?,
        })
    }

    /// Create a client using the system resolver configuration
    pub fn system() -> Result<Self> {
        Self::new(&ResolverSettings::default())
    }
}

fn build_resolver(settings: &ResolverSettings, validate: bool) -> Result<TokioResolver> {
    let mut builder = if settings.nameservers.is_empty() {
        TokioResolver::builder_tokio()
            .map_err(|e| ProbeError::Resolver(format!("system resolver config: {e}")))?
    } else {
        let group =
            NameServerConfigGroup::from_ips_clear(&settings.nameservers, settings.port, true);
        TokioResolver::builder_with_config(
            ResolverConfig::from_parts(None, Vec::new(), group),
            TokioConnectionProvider::default(),
        )
    };

    let opts = builder.options_mut();
    opts.timeout = settings.timeout();
    opts.attempts = settings.attempts;
    opts.validate = validate;
    // Fallback address lookups report both families.
    opts.ip_strategy = LookupIpStrategy::Ipv4AndIpv6;

    Ok(builder.build())
}

#[async_trait]
impl DnsClient for HickoryClient {
    async fn lookup(&self, name: &str, record_type: RecordType) -> Result<DnsMessage> {
        match self.resolver.lookup(name, record_type).await {
            Ok(lookup) => Ok(split_sections(lookup.records(), record_type)),
            Err(e) => classify_failure(name, record_type, &e),
        }
    }

    async fn resolve_addresses(&self, host: &str) -> Result<Vec<IpAddr>> {
        let lookup = self
            .resolver
            .lookup_ip(host)
            .await
            .map_err(|e| ProbeError::AddressLookup {
                host: host.to_string(),
                reason: e.to_string(),
            })?;
        Ok(lookup.iter().collect())
    }
}

#[async_trait]
impl DnssecValidator for HickoryClient {
    async fn check(&self, name: &str, record_type: RecordType) -> ValidationStatus {
        match self.validating.lookup(name, record_type).await {
            Ok(lookup) => fold_proofs(
                lookup
                    .records()
                    .iter()
                    .filter(|r| r.record_type() == record_type)
                    .map(Record::proof),
            ),
            Err(e) => {
                debug!(name, %record_type, error = %e, "validating lookup failed");
                ValidationStatus::Indeterminate
            }
        }
    }
}

/// Turn a failed resolver lookup into a lookup result.
///
/// NOERROR without answers is a successful, empty message. NXDOMAIN and
/// every other failure is a failed query.
fn classify_failure(name: &str, record_type: RecordType, err: &ResolveError) -> Result<DnsMessage> {
    if err.is_no_records_found() && !err.is_nx_domain() {
        Ok(DnsMessage::default())
    } else {
        Err(ProbeError::query(name, record_type, err))
    }
}

/// Split a resolver record set into the queried records and the glue the
/// resolver kept alongside them.
fn split_sections(records: &[Record], record_type: RecordType) -> DnsMessage {
    let (answers, additionals) = records
        .iter()
        .cloned()
        .partition(|r| is_answer(r, record_type));
    DnsMessage::new(answers, additionals)
}

fn is_answer(record: &Record, record_type: RecordType) -> bool {
    let found = record.record_type();
    found == record_type || found == RecordType::CNAME
}

/// Collapse per-record proofs into one status for the record set.
fn fold_proofs(proofs: impl Iterator<Item = Proof>) -> ValidationStatus {
    let mut seen = false;
    let mut all_secure = true;
    let mut any_insecure = false;

    for proof in proofs {
        seen = true;
        match proof {
            Proof::Bogus => return ValidationStatus::Bogus,
            Proof::Secure => {}
            Proof::Insecure => {
                all_secure = false;
                any_insecure = true;
            }
            Proof::Indeterminate => all_secure = false,
        }
    }

    if !seen {
        ValidationStatus::Indeterminate
    } else if all_secure {
        ValidationStatus::Secure
    } else if any_insecure {
        ValidationStatus::Insecure
    } else {
        ValidationStatus::Indeterminate
    }
}
