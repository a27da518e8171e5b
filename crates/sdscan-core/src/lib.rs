//! Core types for DNS-based service discovery.
//!
//! This crate provides the data model shared by the sdscan probes:
//!
//! - **Types**: NAPTR records, SRV service instances, DNSSEC validation
//!   statuses and the per-probe result containers
//! - **Absence**: [`Probe`], which keeps "the query failed" distinct from
//!   "the query succeeded with nothing in it"
//! - **Errors**: collaborator failures via [`ProbeError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use sdscan_core::{NaptrProbeResult, Probe};
//!
//! fn report(result: &Probe<NaptrProbeResult>) {
//!     match result {
//!         Probe::Absent => println!("NAPTR query failed"),
//!         Probe::Present(naptrs) => println!("{} NAPTR records", naptrs.len()),
//!     }
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/sdscan-core/0.1.0")]

mod error;
pub mod types;

pub use error::{ProbeError, Result};
pub use types::*;
