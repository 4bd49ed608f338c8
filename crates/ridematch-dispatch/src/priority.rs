//! The dispatch ordering rule, as a key extracted from a driver.
//!
//! Drivers themselves carry no ordering. The pool derives a
//! [`DispatchPriority`] for each admission and orders by that key alone:
//!
//! 1. `distance_to_pickup` ascending
//! 2. `rating` descending
//! 3. admission sequence ascending (fully tied drivers leave in the order they arrived)
//!
//! The smallest key is dispatched first.

use std::cmp::Reverse;

use ridematch_types::Driver;
use rust_decimal::Decimal;

/// Composite dispatch key. Field order is the comparison order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DispatchPriority {
    distance: Decimal,
    rating: Reverse<Decimal>,
    sequence: u64,
}

impl DispatchPriority {
    /// Key for `driver`, admitted as the `sequence`-th driver of its pool.
    #[must_use]
    pub fn of(driver: &Driver, sequence: u64) -> Self {
        Self {
            distance: driver.distance_to_pickup(),
            rating: Reverse(driver.rating()),
            sequence,
        }
    }

    #[must_use]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}
