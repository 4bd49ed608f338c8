//! Append-only log of committed matches.

use ridematch_types::{DispatchError, DriverId, RideMatch, RiderId, Result};
use serde::Serialize;

use crate::determinism::compute_history_root;

/// The authoritative audit trail of matches, in the order they were recorded.
///
/// There is no removal or mutation: records only ever accumulate. Serializes
/// as a JSON array of matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RideHistory {
    matches: Vec<RideMatch>,
}

impl RideHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a match.
    pub fn record(&mut self, ride_match: RideMatch) {
        self.matches.push(ride_match);
    }

    /// All matches, oldest first.
    #[must_use]
    pub fn all(&self) -> &[RideMatch] {
        &self.matches
    }

    pub fn iter(&self) -> impl Iterator<Item = &RideMatch> {
        self.matches.iter()
    }

    /// Replay the log as `(position, match)` in insertion order.
    pub fn replay(&self) -> impl Iterator<Item = (usize, &RideMatch)> {
        self.matches.iter().enumerate()
    }

    #[must_use]
    pub fn contains_rider(&self, rider_id: RiderId) -> bool {
        self.matches.iter().any(|m| m.rider_id == rider_id)
    }

    #[must_use]
    pub fn contains_driver(&self, driver_id: DriverId) -> bool {
        self.matches.iter().any(|m| m.driver_id == driver_id)
    }

    /// Root hash over the full history.
    #[must_use]
    pub fn root(&self) -> [u8; 32] {
        compute_history_root(&self.matches)
    }

    /// Check this history against a root produced by another run.
    ///
    /// # Errors
    /// `HistoryRootMismatch` if the roots differ.
    pub fn verify_root(&self, expected: &[u8; 32]) -> Result<()> {
        let actual = self.root();
        if actual != *expected {
            return Err(DispatchError::HistoryRootMismatch {
                expected: hex::encode(expected),
                actual: hex::encode(actual),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

impl<'a> IntoIterator for &'a RideHistory {
    type Item = &'a RideMatch;
    type IntoIter = std::slice::Iter<'a, RideMatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}
