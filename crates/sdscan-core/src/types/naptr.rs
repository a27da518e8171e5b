use serde::{Deserialize, Serialize};

use super::{ServiceInstance, ValidationStatus};

/// NAPTR flag requesting an SRV lookup on the replacement (RFC 3403)
const SRV_DELEGATION_FLAG: char = 's';

/// Replacement value meaning "no replacement"
const EMPTY_REPLACEMENT: &str = ".";

/// One NAPTR answer, plus the SRV instances it delegates to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NaptrRecord {
    /// Processing order
    pub order: u16,

    /// Preference among records of equal order
    pub preference: u16,

    /// Flags string as received
    pub flags: String,

    /// Service parameters (e.g. `SIP+D2T`)
    pub service: String,

    /// Substitution expression
    pub regexp: String,

    /// Replacement domain name
    pub replacement: String,

    /// DNSSEC status of the NAPTR record set, shared by sibling records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationStatus>,

    /// Instances found by following the replacement, when delegation fired
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<ServiceInstance>,
}

impl NaptrRecord {
    /// Name to follow with an SRV query, if this record delegates.
    ///
    /// A record delegates when its flags contain `s` in either case and its
    /// replacement is neither `.` nor blank.
    #[must_use]
    pub fn delegation_target(&self) -> Option<&str> {
        let flags = self.flags.to_lowercase();
        if !flags.contains(SRV_DELEGATION_FLAG) {
            return None;
        }
        if self.replacement == EMPTY_REPLACEMENT || self.replacement.trim().is_empty() {
            return None;
        }
        Some(&self.replacement)
    }
}

/// NAPTR records for a domain, in DNS answer order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NaptrProbeResult {
    /// The records
    pub records: Vec<NaptrRecord>,
}

impl NaptrProbeResult {
    /// Number of NAPTR records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the query returned no NAPTR records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records
    pub fn iter(&self) -> std::slice::Iter<'_, NaptrRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a NaptrProbeResult {
    type Item = &'a NaptrRecord;
    type IntoIter = std::slice::Iter<'a, NaptrRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
