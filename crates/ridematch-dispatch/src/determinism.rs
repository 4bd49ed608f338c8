//! Determinism verification for ride histories.
//!
//! Two runs over the same rider/driver snapshot must produce the same
//! matches in the same order. The history root is a SHA-256 digest over the
//! ordered matches so runs can be compared without shipping the full log.

use ridematch_types::RideMatch;
use sha2::{Digest, Sha256};

/// Compute the root hash over an ordered sequence of matches.
///
/// Depends on the number of matches and each (rider, driver) pair in order.
#[must_use]
pub fn compute_history_root(matches: &[RideMatch]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(b"ridematch:history_root:v1:");
    hasher.update((matches.len() as u64).to_le_bytes());

    for m in matches {
        hasher.update(m.rider_id.0.to_le_bytes());
        hasher.update(m.driver_id.0.to_le_bytes());
    }

    let result = hasher.finalize();
    let mut root = [0u8; 32];
    root.copy_from_slice(&result);
    root
}

/// Recompute the root from `matches` and compare with `expected_root`.
#[must_use]
pub fn verify_history_root(matches: &[RideMatch], expected_root: &[u8; 32]) -> bool {
    compute_history_root(matches) == *expected_root
}
