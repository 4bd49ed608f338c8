//! Driver records.
//!
//! Distance and rating are carried as [`Decimal`] so that the dispatch
//! ordering compares exact values and every pair of drivers is comparable.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{DispatchError, DriverId, Result};

/// An available driver.
///
/// Immutable once built; consumed when extracted from the pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Driver {
    id: DriverId,
    /// Distance from the driver to the pickup point. Never negative.
    distance_to_pickup: Decimal,
    /// Rating, usually within `[0, 5]`. Bounded only when a pool sets a ceiling.
    rating: Decimal,
}

impl Driver {
    /// Create a driver.
    ///
    /// # Errors
    /// `InvalidDriver` on a negative distance.
    pub fn new(id: DriverId, distance_to_pickup: Decimal, rating: Decimal) -> Result<Self> {
        if distance_to_pickup < Decimal::ZERO {
            return Err(DispatchError::InvalidDriver {
                id,
                reason: format!("distance must be non-negative, got {distance_to_pickup}"),
            });
        }
        Ok(Self {
            id,
            distance_to_pickup,
            rating,
        })
    }

    /// Check the rating against a configured ceiling.
    ///
    /// # Errors
    /// `InvalidDriver` if the rating lies outside `[0, max_rating]`.
    pub fn check_rating(&self, max_rating: Decimal) -> Result<()> {
        if self.rating < Decimal::ZERO || self.rating > max_rating {
            return Err(DispatchError::InvalidDriver {
                id: self.id,
                reason: format!("rating {} outside [0, {max_rating}]", self.rating),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn id(&self) -> DriverId {
        self.id
    }

    #[must_use]
    pub fn distance_to_pickup(&self) -> Decimal {
        self.distance_to_pickup
    }

    #[must_use]
    pub fn rating(&self) -> Decimal {
        self.rating
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Driver {} [Dist={}, Rating={}]",
            self.id.0, self.distance_to_pickup, self.rating
        )
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Driver {
    /// Build a driver from tenths, e.g. `dummy(103, 12, 49)` is distance 1.2, rating 4.9.
    pub fn dummy(id: u64, distance_tenths: i64, rating_tenths: i64) -> Self {
        Self {
            id: DriverId(id),
            distance_to_pickup: Decimal::new(distance_tenths, 1),
            rating: Decimal::new(rating_tenths, 1),
        }
    }
}
