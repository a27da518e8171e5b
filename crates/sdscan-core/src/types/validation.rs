use serde::{Deserialize, Serialize};
use std::fmt;

/// DNSSEC status reported by the validation collaborator.
///
/// The probes never compute this; they only attach it to the records built
/// from the query that was checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    /// A chain of trust to a trust anchor was verified
    Secure,
    /// The zone is provably unsigned
    Insecure,
    /// Signatures are present but do not validate
    Bogus,
    /// No conclusion could be reached
    Indeterminate,
}

impl ValidationStatus {
    /// Lowercase name of the status
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Secure => "secure",
            Self::Insecure => "insecure",
            Self::Bogus => "bogus",
            Self::Indeterminate => "indeterminate",
        }
    }

    /// Returns true for [`ValidationStatus::Secure`]
    #[must_use]
    pub const fn is_secure(self) -> bool {
        matches!(self, Self::Secure)
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
