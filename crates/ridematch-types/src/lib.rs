//! # ridematch-types
//!
//! Shared types, errors, and configuration for the **RideMatch** dispatcher.
//!
//! This crate is the leaf dependency of the workspace. It defines:
//!
//! - **Identifiers**: [`RiderId`], [`DriverId`]
//! - **Entity records**: [`Rider`], [`Driver`]
//! - **Match model**: [`RideMatch`], [`Assignment`]
//! - **Configuration**: [`DispatchConfig`]
//! - **Errors**: [`DispatchError`] with `RD_ERR_` prefix codes
//! - **Constants**: default capacities and rating bounds

pub mod config;
pub mod constants;
pub mod driver;
pub mod error;
pub mod ids;
pub mod ride_match;
pub mod rider;

pub use config::*;
pub use driver::*;
pub use error::*;
pub use ids::*;
pub use ride_match::*;
pub use rider::*;

// Constants are accessed via `ridematch_types::constants::FOO`.
