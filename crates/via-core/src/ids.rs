//! Strongly typed identifier wrappers.
//!
//! Vehicle identifiers come from configuration files as free-form strings
//! ("V1", "bus_12"), so the wrapper owns a `String` rather than an integer
//! index.  It is `Ord + Hash` so it keys sorted maps without ceremony, and
//! `Borrow<str>` so maps keyed by `VehicleId` accept `&str` lookups.

use std::borrow::Borrow;
use std::fmt;

/// Identifier of a vehicle, unique within its owning segment.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct VehicleId(pub String);

impl VehicleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VehicleId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for VehicleId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for VehicleId {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}
