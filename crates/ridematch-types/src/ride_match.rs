//! Match records produced by the dispatcher.
//!
//! A [`RideMatch`] is the immutable audit record of one pairing. An
//! [`Assignment`] carries the consumed rider and driver themselves, for
//! callers that report more than the ids.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Driver, DriverId, Rider, RiderId};

/// A committed pairing of one rider to one driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RideMatch {
    pub rider_id: RiderId,
    pub driver_id: DriverId,
}

impl RideMatch {
    #[must_use]
    pub fn new(rider_id: RiderId, driver_id: DriverId) -> Self {
        Self {
            rider_id,
            driver_id,
        }
    }
}

impl fmt::Display for RideMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rider {} -> Driver {}", self.rider_id.0, self.driver_id.0)
    }
}

/// The rider and driver consumed by a single match step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub rider: Rider,
    pub driver: Driver,
}

impl Assignment {
    #[must_use]
    pub fn new(rider: Rider, driver: Driver) -> Self {
        Self { rider, driver }
    }

    /// The audit record for this assignment.
    #[must_use]
    pub fn ride_match(&self) -> RideMatch {
        RideMatch::new(self.rider.id(), self.driver.id())
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matched {} with {}", self.rider, self.driver)
    }
}
