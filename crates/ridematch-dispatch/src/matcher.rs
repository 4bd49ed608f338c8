//! The dispatch loop.
//!
//! ```text
//! run_matching(RiderQueue, DriverPool, RideHistory) -> MatchRun
//! ```
//!
//! Pairs the head of the rider queue with the highest-priority driver until
//! either side runs out. Nothing waits, retries, or backfills: whoever is
//! left over stays where they are.

use ridematch_types::{Assignment, RideMatch};

use crate::{DriverPool, RideHistory, RiderQueue};

/// The outcome of one [`run_matching`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchRun {
    /// Matches made by this call, in the order they were made.
    pub assignments: Vec<Assignment>,
    /// Riders still waiting when the loop stopped.
    pub riders_remaining: usize,
    /// Drivers still available when the loop stopped.
    pub drivers_remaining: usize,
}

impl MatchRun {
    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// The audit records for this run's assignments.
    #[must_use]
    pub fn ride_matches(&self) -> Vec<RideMatch> {
        self.assignments.iter().map(Assignment::ride_match).collect()
    }
}

/// Drain riders and drivers pairwise, recording every match in `history`.
///
/// ## Algorithm
///
/// 1. Stop if either the queue or the pool is empty
/// 2. Dequeue the longest-waiting rider
/// 3. Extract the nearest driver (higher rating on distance ties)
/// 4. Append `RideMatch(rider, driver)` to `history`
/// 5. Repeat
///
/// ## Determinism Guarantee
///
/// Given the same queue contents and the same pool contents, the sequence
/// of matches is always the same. Exactly `min(R, D)` matches are made.
pub fn run_matching(
    riders: &mut RiderQueue,
    drivers: &mut DriverPool,
    history: &mut RideHistory,
) -> MatchRun {
    let mut assignments = Vec::with_capacity(riders.len().min(drivers.len()));

    while !riders.is_empty() && !drivers.is_empty() {
        // Both sides were non-empty a line ago.
        let (Some(rider), Some(driver)) = (riders.dequeue(), drivers.extract_min()) else {
            break;
        };

        let assignment = Assignment::new(rider, driver);
        let ride_match = assignment.ride_match();

        tracing::debug!(
            rider = %ride_match.rider_id,
            driver = %ride_match.driver_id,
            distance = %assignment.driver.distance_to_pickup(),
            rating = %assignment.driver.rating(),
            "Rider matched"
        );

        history.record(ride_match);
        assignments.push(assignment);
    }

    let run = MatchRun {
        assignments,
        riders_remaining: riders.len(),
        drivers_remaining: drivers.len(),
    };

    tracing::info!(
        matched = run.len(),
        riders_remaining = run.riders_remaining,
        drivers_remaining = run.drivers_remaining,
        history_len = history.len(),
        "Matching run complete"
    );

    run
}

#[cfg(test)]
mod tests {
    use ridematch_types::{Driver, DriverId, Rider, RiderId};

    use super::*;

    fn queue_of(ids: &[u64]) -> RiderQueue {
        let mut queue = RiderQueue::new();
        for &id in ids {
            queue.enqueue(Rider::dummy(id)).unwrap();
        }
        queue
    }

    fn pool_of(drivers: Vec<Driver>) -> DriverPool {
        let mut pool = DriverPool::new();
        for d in drivers {
            pool.insert(d).unwrap();
        }
        pool
    }

    #[test]
    fn empty_queue_leaves_pool_untouched() {
        let mut riders = RiderQueue::new();
        let mut drivers = pool_of(vec![Driver::dummy(1, 10, 40), Driver::dummy(2, 5, 40)]);
        let mut history = RideHistory::new();

        let run = run_matching(&mut riders, &mut drivers, &mut history);
        assert!(run.is_empty());
        assert_eq!(run.drivers_remaining, 2);
        assert_eq!(drivers.len(), 2);
        assert_eq!(drivers.peek_min().unwrap().id(), DriverId(2));
        assert!(history.is_empty());
    }

    #[test]
    fn empty_pool_leaves_queue_untouched() {
        let mut riders = queue_of(&[1, 2]);
        let mut drivers = DriverPool::new();
        let mut history = RideHistory::new();

        let run = run_matching(&mut riders, &mut drivers, &mut history);
        assert!(run.is_empty());
        assert_eq!(run.riders_remaining, 2);
        assert_eq!(riders.front().unwrap().id(), RiderId(1));
        assert!(history.is_empty());
    }

    #[test]
    fn more_riders_than_drivers() {
        let mut riders = queue_of(&[1, 2, 3, 4]);
        let mut drivers = pool_of(vec![Driver::dummy(10, 20, 40), Driver::dummy(11, 10, 40)]);
        let mut history = RideHistory::new();

        let run = run_matching(&mut riders, &mut drivers, &mut history);
        assert_eq!(run.len(), 2);
        assert_eq!(
            run.ride_matches(),
            vec![
                RideMatch::new(RiderId(1), DriverId(11)),
                RideMatch::new(RiderId(2), DriverId(10)),
            ]
        );
        assert_eq!(run.riders_remaining, 2);
        assert_eq!(run.drivers_remaining, 0);
        assert_eq!(riders.front().unwrap().id(), RiderId(3));
    }

    #[test]
    fn run_appends_to_existing_history() {
        let mut history = RideHistory::new();
        history.record(RideMatch::new(RiderId(99), DriverId(999)));

        let mut riders = queue_of(&[1]);
        let mut drivers = pool_of(vec![Driver::dummy(5, 10, 40)]);
        let run = run_matching(&mut riders, &mut drivers, &mut history);

        assert_eq!(run.len(), 1);
        assert_eq!(history.len(), 2);
        assert_eq!(history.all()[1], RideMatch::new(RiderId(1), DriverId(5)));
    }

    #[test]
    fn second_run_after_drain_is_a_no_op() {
        let mut riders = queue_of(&[1, 2]);
        let mut drivers = pool_of(vec![Driver::dummy(5, 10, 40)]);
        let mut history = RideHistory::new();

        run_matching(&mut riders, &mut drivers, &mut history);
        let again = run_matching(&mut riders, &mut drivers, &mut history);
        assert!(again.is_empty());
        assert_eq!(history.len(), 1);
        assert_eq!(riders.len(), 1);
    }
}
