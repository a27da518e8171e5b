//! DNS-based service discovery probes.
//!
//! Given a domain, finds service endpoints advertised through NAPTR records
//! (following `s`-flagged records into SRV) and through SRV records for a
//! list of candidate service names, resolves every SRV target to addresses
//! and optionally annotates each answer with its DNSSEC status.
//!
//! # Example
//!
//! ```rust,ignore
//! use sdscan_probe::{ProbeConfig, Prober};
//!
//! #[tokio::main]
//! async fn main() -> sdscan_core::Result<()> {
//!     let config = ProbeConfig::default().validate(true);
//!     let prober = Prober::from_config(config)?;
//!
//!     let report = prober.discover("example.com").await;
//!     println!("{} service instances", report.instance_count());
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/sdscan-probe/0.1.0")]

pub mod client;
mod config;
mod hickory;
mod instance;
mod naptr;
mod prober;
mod srv;

pub use client::{DnsClient, DnsMessage, DnssecValidator};
pub use config::*;
pub use hickory::HickoryClient;
pub use instance::resolve_service_instances;
pub use naptr::{probe_naptr, probe_naptr_with_concurrency};
pub use prober::Prober;
pub use srv::{owner_name, probe_srv, probe_srv_with_concurrency};

// Record types callers pass to the collaborator traits
pub use hickory_proto::rr::RecordType;
pub use sdscan_core::{ProbeError, Result};
