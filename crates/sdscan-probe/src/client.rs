//! Interfaces to the DNS query engine and the DNSSEC validator.
//!
//! The probes only talk to DNS through these traits. [`HickoryClient`]
//! implements both for real networks; tests script them in memory.
//!
//! [`HickoryClient`]: crate::HickoryClient

use async_trait::async_trait;
use hickory_proto::rr::{RData, Record, RecordType};
use sdscan_core::{Result, ValidationStatus};
use std::net::IpAddr;

/// Sections of a DNS response the probes read.
#[derive(Debug, Clone, Default)]
pub struct DnsMessage {
    /// Answer section
    pub answers: Vec<Record>,
    /// Additional section (glue)
    pub additionals: Vec<Record>,
}

impl DnsMessage {
    /// Create a message from its sections
    #[must_use]
    pub const fn new(answers: Vec<Record>, additionals: Vec<Record>) -> Self {
        Self {
            answers,
            additionals,
        }
    }
}

/// Issues DNS queries.
#[async_trait]
pub trait DnsClient: Send + Sync {
    /// Query `name` for records of `record_type`.
    ///
    /// A successful response with no answers is `Ok` with an empty answer
    /// section, not an error.
    async fn lookup(&self, name: &str, record_type: RecordType) -> Result<DnsMessage>;

    /// Resolve `host` to its IPv4 and IPv6 addresses.
    async fn resolve_addresses(&self, host: &str) -> Result<Vec<IpAddr>>;
}

/// Reports the DNSSEC status of a record set.
#[async_trait]
pub trait DnssecValidator: Send + Sync {
    /// Check the record set of `record_type` at `name`
    async fn check(&self, name: &str, record_type: RecordType) -> ValidationStatus;
}

/// Typed view of a record in a response section.
pub trait FromRecord: Sized {
    /// Extract the view, or `None` if the record is of another type
    fn from_record(record: &Record) -> Option<Self>;
}

/// Every record in `section` that `T` understands, in section order.
pub fn collect_records<T: FromRecord>(section: &[Record]) -> Vec<T> {
    section.iter().filter_map(T::from_record).collect()
}

/// SRV answer fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrvAnswer {
    /// Priority
    pub priority: u16,
    /// Weight
    pub weight: u16,
    /// Port
    pub port: u16,
    /// Target hostname
    pub target: String,
}

impl FromRecord for SrvAnswer {
    fn from_record(record: &Record) -> Option<Self> {
        match record.data() {
            RData::SRV(srv) => Some(Self {
                priority: srv.priority(),
                weight: srv.weight(),
                port: srv.port(),
                target: srv.target().to_string(),
            }),
            _ => None,
        }
    }
}

/// NAPTR answer fields, character strings decoded lossily
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NaptrAnswer {
    /// Order
    pub order: u16,
    /// Preference
    pub preference: u16,
    /// Flags
    pub flags: String,
    /// Service parameters
    pub service: String,
    /// Regexp
    pub regexp: String,
    /// Replacement domain name
    pub replacement: String,
}

impl FromRecord for NaptrAnswer {
    fn from_record(record: &Record) -> Option<Self> {
        match record.data() {
            RData::NAPTR(naptr) => Some(Self {
                order: naptr.order(),
                preference: naptr.preference(),
                flags: String::from_utf8_lossy(naptr.flags()).into_owned(),
                service: String::from_utf8_lossy(naptr.services()).into_owned(),
                regexp: String::from_utf8_lossy(naptr.regexp()).into_owned(),
                replacement: naptr.replacement().to_string(),
            }),
            _ => None,
        }
    }
}

/// A or AAAA record with its owner name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressAnswer {
    /// Owner name
    pub owner: String,
    /// Address
    pub addr: IpAddr,
}

impl FromRecord for AddressAnswer {
    fn from_record(record: &Record) -> Option<Self> {
        let addr = match record.data() {
            RData::A(a) => IpAddr::V4(a.0),
            RData::AAAA(aaaa) => IpAddr::V6(aaaa.0),
            _ => return None,
        };
        Some(Self {
            owner: record.name().to_string(),
            addr,
        })
    }
}
