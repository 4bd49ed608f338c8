//! FIFO queue of riders awaiting a driver.
//!
//! Riders are stored in arrival order using a [`VecDeque`]: the front has
//! waited longest and is matched first.

use std::collections::{HashSet, VecDeque};

use ridematch_types::{DispatchConfig, DispatchError, Result, Rider, RiderId};

/// Riders waiting to be matched, in arrival order.
///
/// Every id ever admitted is remembered, so a rider that has been dequeued
/// (and possibly matched) cannot be enqueued a second time. Admitted ids
/// are kept for the queue's whole lifetime and never pruned.
#[derive(Debug, Clone)]
pub struct RiderQueue {
    /// Riders in arrival order (front = oldest).
    riders: VecDeque<Rider>,
    /// Ids admitted over the queue's lifetime.
    admitted: HashSet<RiderId>,
    /// Maximum number of riders waiting at once.
    capacity: usize,
}

impl RiderQueue {
    /// Create an empty queue with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&DispatchConfig::default())
    }

    /// Create an empty queue holding at most `capacity` riders.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            riders: VecDeque::new(),
            admitted: HashSet::new(),
            capacity,
        }
    }

    #[must_use]
    pub fn from_config(config: &DispatchConfig) -> Self {
        Self::with_capacity(config.queue_capacity)
    }

    /// Append a rider to the tail.
    ///
    /// # Errors
    /// - `DuplicateRider` if this id was admitted before
    /// - `QueueFull` if the queue is at capacity
    ///
    /// The queue is unchanged on error.
    pub fn enqueue(&mut self, rider: Rider) -> Result<()> {
        if self.admitted.contains(&rider.id()) {
            tracing::warn!(rider = %rider.id(), "Rider rejected: id already admitted");
            return Err(DispatchError::DuplicateRider(rider.id()));
        }
        if self.riders.len() >= self.capacity {
            tracing::warn!(rider = %rider.id(), capacity = self.capacity, "Rider rejected: queue full");
            return Err(DispatchError::QueueFull);
        }
        self.admitted.insert(rider.id());
        self.riders.push_back(rider);
        Ok(())
    }

    /// Remove and return the rider at the head, or `None` if nobody is waiting.
    pub fn dequeue(&mut self) -> Option<Rider> {
        self.riders.pop_front()
    }

    /// Like [`dequeue`](Self::dequeue), but reports emptiness as `EmptyQueue`.
    pub fn try_dequeue(&mut self) -> Result<Rider> {
        self.dequeue().ok_or(DispatchError::EmptyQueue)
    }

    /// Peek at the head without removing it.
    #[must_use]
    pub fn front(&self) -> Option<&Rider> {
        self.riders.front()
    }

    /// Waiting riders, head first.
    pub fn iter(&self) -> impl Iterator<Item = &Rider> {
        self.riders.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.riders.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.riders.len()
    }
}

impl Default for RiderQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enqueue_dequeue_fifo() {
        let mut queue = RiderQueue::new();
        for id in 1..=3 {
            queue.enqueue(Rider::dummy(id)).unwrap();
        }
        assert_eq!(queue.len(), 3);
        let order: Vec<u64> = std::iter::from_fn(|| queue.dequeue())
            .map(|r| r.id().0)
            .collect();
        assert_eq!(order, vec![1, 2, 3], "FIFO: first in should be first out");
        assert!(queue.is_empty());
    }

    #[test]
    fn fifo_holds_across_interleaving() {
        let mut queue = RiderQueue::new();
        queue.enqueue(Rider::dummy(1)).unwrap();
        queue.enqueue(Rider::dummy(2)).unwrap();
        assert_eq!(queue.dequeue().unwrap().id(), RiderId(1));
        queue.enqueue(Rider::dummy(3)).unwrap();
        assert_eq!(queue.dequeue().unwrap().id(), RiderId(2));
        assert_eq!(queue.dequeue().unwrap().id(), RiderId(3));
    }

    #[test]
    fn empty_queue_signals_none() {
        let mut queue = RiderQueue::new();
        assert!(queue.is_empty());
        assert!(queue.front().is_none());
        assert!(queue.dequeue().is_none());
        assert_eq!(queue.try_dequeue().unwrap_err(), DispatchError::EmptyQueue);
    }

    #[test]
    fn is_empty_has_no_side_effects() {
        let mut queue = RiderQueue::new();
        queue.enqueue(Rider::dummy(1)).unwrap();
        assert!(!queue.is_empty());
        assert!(!queue.is_empty());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn duplicate_rider_rejected() {
        let mut queue = RiderQueue::new();
        queue.enqueue(Rider::dummy(1)).unwrap();
        let err = queue.enqueue(Rider::dummy(1)).unwrap_err();
        assert_eq!(err, DispatchError::DuplicateRider(RiderId(1)));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn consumed_rider_cannot_return() {
        let mut queue = RiderQueue::new();
        queue.enqueue(Rider::dummy(1)).unwrap();
        queue.dequeue().unwrap();
        assert!(queue.enqueue(Rider::dummy(1)).is_err());
        assert!(queue.is_empty());
    }

    #[test]
    fn queue_full() {
        let mut queue = RiderQueue::with_capacity(2);
        queue.enqueue(Rider::dummy(1)).unwrap();
        queue.enqueue(Rider::dummy(2)).unwrap();
        let err = queue.enqueue(Rider::dummy(3)).unwrap_err();
        assert_eq!(err, DispatchError::QueueFull);
        // A rejected rider was never admitted and may try again later.
        queue.dequeue().unwrap();
        queue.enqueue(Rider::dummy(3)).unwrap();
    }

    #[test]
    fn iter_is_head_first() {
        let mut queue = RiderQueue::new();
        queue.enqueue(Rider::dummy(5)).unwrap();
        queue.enqueue(Rider::dummy(4)).unwrap();
        let ids: Vec<RiderId> = queue.iter().map(Rider::id).collect();
        assert_eq!(ids, vec![RiderId(5), RiderId(4)]);
        assert_eq!(queue.front().unwrap().id(), RiderId(5));
    }
}
