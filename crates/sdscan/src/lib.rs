//! DNS-based service discovery.
//!
//! Discovers the service endpoints a domain advertises through NAPTR and SRV
//! records, resolves their targets to addresses, and can annotate every
//! answer with its DNSSEC validation status.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use sdscan::{ProbeConfig, Prober};
//!
//! #[tokio::main]
//! async fn main() -> sdscan::Result<()> {
//!     let config = ProbeConfig::default()
//!         .service_names(["_sip._tcp", "_sips._tcp"])
//!         .validate(true);
//!     let prober = Prober::from_config(config)?;
//!
//!     let report = prober.discover("example.com").await;
//!     if let Some(naptrs) = report.naptr.present() {
//!         for naptr in naptrs {
//!             println!("{} -> {}", naptr.service, naptr.replacement);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Absence
//!
//! Each probe reports [`Probe::Absent`] under its own rule:
//!
//! - NAPTR probe: only when the NAPTR query fails
//! - SRV probe: unless some service name produced at least one instance
//! - service instance resolution: only when the SRV query fails

#![doc(html_root_url = "https://docs.rs/sdscan/0.1.0")]

// Re-export core types
pub use sdscan_core::*;

// Re-export probes
pub use sdscan_probe::{
    owner_name, probe_naptr, probe_naptr_with_concurrency, probe_srv, probe_srv_with_concurrency,
    resolve_service_instances, DnsClient, DnsMessage, DnssecValidator, HickoryClient, ProbeConfig,
    Prober, RecordType, ResolverSettings, DEFAULT_SERVICE_NAMES,
};
pub use sdscan_probe::client;

// Re-export runtime for convenience
pub use serde;
pub use tokio;
