//! Priority pool of available drivers.
//!
//! A min-heap built from [`BinaryHeap`] over `Reverse<PoolEntry>`, keyed by
//! [`DispatchPriority`]. Insert and extract are both O(log N).

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};

use ridematch_types::{DispatchConfig, DispatchError, Driver, DriverId, Result};
use rust_decimal::Decimal;

use crate::priority::DispatchPriority;

/// A driver together with the key it was admitted under.
#[derive(Debug, Clone)]
struct PoolEntry {
    priority: DispatchPriority,
    driver: Driver,
}

impl PartialEq for PoolEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl Eq for PoolEntry {}

impl PartialOrd for PoolEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PoolEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority.cmp(&other.priority)
    }
}

/// Drivers available for dispatch.
///
/// [`extract_min`](Self::extract_min) always yields the nearest driver,
/// preferring the higher rating at equal distance and the earlier admission
/// when both tie, regardless of insertion order otherwise.
///
/// Admitted ids are kept for the pool's whole lifetime and never pruned.
#[derive(Debug, Clone)]
pub struct DriverPool {
    heap: BinaryHeap<Reverse<PoolEntry>>,
    /// Ids admitted over the pool's lifetime.
    admitted: HashSet<DriverId>,
    /// Next admission sequence number.
    next_sequence: u64,
    /// Maximum number of drivers held at once.
    capacity: usize,
    /// Optional ceiling for admitted ratings.
    max_rating: Option<Decimal>,
}

impl DriverPool {
    /// Create an empty pool with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&DispatchConfig::default())
    }

    /// Create an empty pool holding at most `capacity` drivers.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::new()
        }
    }

    #[must_use]
    pub fn from_config(config: &DispatchConfig) -> Self {
        Self {
            heap: BinaryHeap::new(),
            admitted: HashSet::new(),
            next_sequence: 0,
            capacity: config.pool_capacity,
            max_rating: config.max_rating,
        }
    }

    /// Admit a driver.
    ///
    /// # Errors
    /// - `DuplicateDriver` if this id was admitted before
    /// - `InvalidDriver` if a rating ceiling is configured and the rating is outside it
    /// - `PoolFull` if the pool is at capacity
    ///
    /// The pool is unchanged on error.
    pub fn insert(&mut self, driver: Driver) -> Result<()> {
        if self.admitted.contains(&driver.id()) {
            tracing::warn!(driver = %driver.id(), "Driver rejected: id already admitted");
            return Err(DispatchError::DuplicateDriver(driver.id()));
        }
        if let Some(max_rating) = self.max_rating {
            driver.check_rating(max_rating)?;
        }
        if self.heap.len() >= self.capacity {
            tracing::warn!(driver = %driver.id(), capacity = self.capacity, "Driver rejected: pool full");
            return Err(DispatchError::PoolFull);
        }

        let priority = DispatchPriority::of(&driver, self.next_sequence);
        self.next_sequence += 1;
        self.admitted.insert(driver.id());
        self.heap.push(Reverse(PoolEntry { priority, driver }));
        Ok(())
    }

    /// Remove and return the highest-priority driver, or `None` if the pool is empty.
    pub fn extract_min(&mut self) -> Option<Driver> {
        self.heap.pop().map(|Reverse(entry)| entry.driver)
    }

    /// Like [`extract_min`](Self::extract_min), but reports emptiness as `EmptyPool`.
    pub fn try_extract_min(&mut self) -> Result<Driver> {
        self.extract_min().ok_or(DispatchError::EmptyPool)
    }

    /// The driver [`extract_min`](Self::extract_min) would return next.
    #[must_use]
    pub fn peek_min(&self) -> Option<&Driver> {
        self.heap.peek().map(|Reverse(entry)| &entry.driver)
    }

    /// Empty the pool, returning its drivers in dispatch order.
    pub fn drain_sorted(&mut self) -> Vec<Driver> {
        std::iter::from_fn(|| self.extract_min()).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl Default for DriverPool {
    fn default() -> Self {
        Self::new()
    }
}
