//! # ridematch-dispatch
//!
//! **Pure deterministic dispatch engine for RideMatch.**
//!
//! Takes a snapshot of waiting riders and available drivers and pairs them:
//!
//! - **Riders** are served strictly in arrival order ([`RiderQueue`])
//! - **Drivers** are chosen nearest first, higher rating breaking distance
//!   ties, earlier admission breaking full ties ([`DriverPool`])
//! - **Matches** are appended to an append-only audit log ([`RideHistory`])
//! - **Determinism**: same snapshot -> same matches -> same history root
//!
//! No I/O and no console output: the only side channel is `tracing` events.

pub mod determinism;
pub mod driver_pool;
pub mod history;
pub mod matcher;
pub mod priority;
pub mod rider_queue;

pub use determinism::{compute_history_root, verify_history_root};
pub use driver_pool::DriverPool;
pub use history::RideHistory;
pub use matcher::{MatchRun, run_matching};
pub use priority::DispatchPriority;
pub use rider_queue::RiderQueue;
