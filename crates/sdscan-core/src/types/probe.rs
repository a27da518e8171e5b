use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Outcome of a single probe component.
///
/// `Absent` and `Present(empty)` are different answers: the first means the
/// query behind the component failed (or, for the SRV probe, found nothing at
/// all), the second means it succeeded with zero records. Each component
/// documents which convention it follows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Probe<T> {
    /// No data for this query
    #[default]
    Absent,
    /// The query produced a result
    Present(T),
}

impl<T> Probe<T> {
    /// Returns true if the probe produced a result
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns true if the probe has no result
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Borrow the result, if any
    #[must_use]
    pub const fn present(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Convert into an `Option`
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Map the present value
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Probe<U> {
        match self {
            Self::Present(value) => Probe::Present(f(value)),
            Self::Absent => Probe::Absent,
        }
    }
}

impl<T> From<Option<T>> for Probe<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Self::Present)
    }
}

impl<T: Serialize> Serialize for Probe<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Probe<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}
