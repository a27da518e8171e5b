use thiserror::Error;

/// Result type alias for collaborator operations
pub type Result<T> = std::result::Result<T, ProbeError>;

/// Errors reported by the DNS collaborators and configuration layer.
///
/// The probes themselves never surface these: a failed primary query becomes
/// [`Probe::Absent`](crate::Probe::Absent) and a failed fallback address
/// lookup becomes an empty address list.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// A primary lookup (NAPTR, SRV, ...) failed
    #[error("{record_type} query for {name} failed: {reason}")]
    Query {
        /// Name that was queried
        name: String,
        /// Record type mnemonic
        record_type: String,
        /// Failure reported by the transport
        reason: String,
    },

    /// Explicit A/AAAA resolution of an SRV target failed
    #[error("address lookup for {host} failed: {reason}")]
    AddressLookup {
        /// Hostname being resolved
        host: String,
        /// Failure reported by the transport
        reason: String,
    },

    /// The resolver could not be constructed
    #[error("resolver error: {0}")]
    Resolver(String),

    /// Configuration is invalid
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProbeError {
    /// Build a [`ProbeError::Query`] from anything displayable
    pub fn query(
        name: impl Into<String>,
        record_type: impl std::fmt::Display,
        reason: impl std::fmt::Display,
    ) -> Self {
        Self::Query {
            name: name.into(),
            record_type: record_type.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Returns true if a primary query failed
    #[must_use]
    pub const fn is_query_failure(&self) -> bool {
        matches!(self, Self::Query { .. })
    }
}
