//! Identifiers for the two sides of a dispatch.
//!
//! Riders and drivers are keyed by caller-supplied integers. Uniqueness is
//! enforced by the collections that admit them, not by the id types.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RiderId
// ---------------------------------------------------------------------------

/// Unique identifier for a rider waiting to be matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct RiderId(pub u64);

impl RiderId {
    #[must_use]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for RiderId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for RiderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rider:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// DriverId
// ---------------------------------------------------------------------------

/// Unique identifier for an available driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct DriverId(pub u64);

impl DriverId {
    #[must_use]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for DriverId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for DriverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "driver:{}", self.0)
    }
}
