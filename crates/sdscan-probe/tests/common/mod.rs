//! Scripted in-memory DNS collaborator.

#![allow(dead_code)]

use async_trait::async_trait;
use hickory_proto::rr::rdata::{A, AAAA, NAPTR, SRV};
use hickory_proto::rr::{Name, RData, Record, RecordType};
use sdscan_core::{ProbeError, Result, ValidationStatus};
use sdscan_probe::{DnsClient, DnsMessage, DnssecValidator};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Mutex;

type Key = (String, RecordType);

#[derive(Default)]
pub struct MockDns {
    responses: HashMap<Key, DnsMessage>,
    addresses: HashMap<String, Vec<IpAddr>>,
    statuses: HashMap<Key, ValidationStatus>,
    lookups: Mutex<Vec<Key>>,
    address_lookups: Mutex<Vec<String>>,
    checks: Mutex<Vec<Key>>,
}

impl MockDns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a response; names without one fail the query
    pub fn respond(mut self, name: &str, record_type: RecordType, message: DnsMessage) -> Self {
        self.responses.insert(key(name, record_type), message);
        self
    }

    /// Script the fallback address lookup; hosts without one fail
    pub fn resolve(mut self, host: &str, addrs: Vec<IpAddr>) -> Self {
        self.addresses.insert(host.to_string(), addrs);
        self
    }

    /// Script a validation status; unscripted checks are indeterminate
    pub fn status(mut self, name: &str, record_type: RecordType, status: ValidationStatus) -> Self {
        self.statuses.insert(key(name, record_type), status);
        self
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.lock().unwrap().len()
    }

    pub fn address_lookups_for(&self, host: &str) -> usize {
        let lookups = self.address_lookups.lock().unwrap();
        lookups.iter().filter(|h| *h == host).count()
    }

    pub fn checks_for(&self, name: &str, record_type: RecordType) -> usize {
        let wanted = key(name, record_type);
        let checks = self.checks.lock().unwrap();
        checks.iter().filter(|k| **k == wanted).count()
    }

    pub fn check_count(&self) -> usize {
        self.checks.lock().unwrap().len()
    }
}

#[async_trait]
impl DnsClient for MockDns {
    async fn lookup(&self, name: &str, record_type: RecordType) -> Result<DnsMessage> {
        let wanted = key(name, record_type);
        self.lookups.lock().unwrap().push(wanted.clone());
        self.responses
            .get(&wanted)
            .cloned()
            .ok_or_else(|| ProbeError::query(name, record_type, "SERVFAIL"))
    }

    async fn resolve_addresses(&self, host: &str) -> Result<Vec<IpAddr>> {
        self.address_lookups.lock().unwrap().push(host.to_string());
        self.addresses
            .get(host)
            .cloned()
            .ok_or_else(|| ProbeError::AddressLookup {
                host: host.to_string(),
                reason: "NXDOMAIN".to_string(),
            })
    }
}

#[async_trait]
impl DnssecValidator for MockDns {
    async fn check(&self, name: &str, record_type: RecordType) -> ValidationStatus {
        let wanted = key(name, record_type);
        self.checks.lock().unwrap().push(wanted.clone());
        self.statuses
            .get(&wanted)
            .copied()
            .unwrap_or(ValidationStatus::Indeterminate)
    }
}

fn key(name: &str, record_type: RecordType) -> Key {
    (name.to_string(), record_type)
}

pub fn ip(addr: &str) -> IpAddr {
    addr.parse().unwrap()
}

pub fn name(s: &str) -> Name {
    if s == "." {
        Name::root()
    } else {
        Name::from_ascii(s).unwrap()
    }
}

pub fn srv(owner: &str, priority: u16, weight: u16, port: u16, target: &str) -> Record {
    let rdata = SRV::new(priority, weight, port, name(target));
    Record::from_rdata(name(owner), 300, RData::SRV(rdata))
}

pub fn naptr(
    owner: &str,
    order: u16,
    preference: u16,
    flags: &str,
    service: &str,
    replacement: &str,
) -> Record {
    let rdata = NAPTR::new(
        order,
        preference,
        flags.as_bytes().into(),
        service.as_bytes().into(),
        Box::default(),
        name(replacement),
    );
    Record::from_rdata(name(owner), 300, RData::NAPTR(rdata))
}

pub fn glue(owner: &str, addr: &str) -> Record {
    let rdata = match ip(addr) {
        IpAddr::V4(v4) => RData::A(A::from(v4)),
        IpAddr::V6(v6) => RData::AAAA(AAAA::from(v6)),
    };
    Record::from_rdata(name(owner), 300, rdata)
}

pub fn answers(records: Vec<Record>) -> DnsMessage {
    DnsMessage::new(records, Vec::new())
}
