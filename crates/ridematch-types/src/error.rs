//! Error types for the RideMatch dispatcher.
//!
//! All errors use the `RD_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Validation errors (entity construction, admission)
//! - 2xx: Collection errors (empty / full queue and pool)
//! - 3xx: Determinism errors
//! - 9xx: General / configuration errors

use thiserror::Error;

use crate::{DriverId, RiderId};

/// Central error enum for all RideMatch operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    // =================================================================
    // Validation Errors (1xx)
    // =================================================================
    /// The rider record failed validation.
    #[error("RD_ERR_100: Invalid rider: {reason}")]
    InvalidRider { reason: String },

    /// The driver record failed validation (negative distance, rating out of range).
    #[error("RD_ERR_101: Invalid driver {id}: {reason}")]
    InvalidDriver { id: DriverId, reason: String },

    /// A rider with this id was already admitted to the queue.
    #[error("RD_ERR_102: Rider already admitted: {0}")]
    DuplicateRider(RiderId),

    /// A driver with this id was already admitted to the pool.
    #[error("RD_ERR_103: Driver already admitted: {0}")]
    DuplicateDriver(DriverId),

    // =================================================================
    // Collection Errors (2xx)
    // =================================================================
    /// No riders are waiting.
    #[error("RD_ERR_200: No riders waiting")]
    EmptyQueue,

    /// No drivers are available.
    #[error("RD_ERR_201: No drivers available")]
    EmptyPool,

    /// The rider queue reached its configured capacity.
    #[error("RD_ERR_202: Rider queue full")]
    QueueFull,

    /// The driver pool reached its configured capacity.
    #[error("RD_ERR_203: Driver pool full")]
    PoolFull,

    // =================================================================
    // Determinism Errors (3xx)
    // =================================================================
    /// A replayed history does not hash to the expected root.
    #[error("RD_ERR_300: History root mismatch: expected {expected}, got {actual}")]
    HistoryRootMismatch { expected: String, actual: String },

    // =================================================================
    // General (9xx)
    // =================================================================
    /// Configuration error (invalid values, unreadable file).
    #[error("RD_ERR_902: Configuration error: {0}")]
    Configuration(String),

    /// I/O error (config file, report output).
    #[error("RD_ERR_903: I/O error: {0}")]
    Io(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, DispatchError>;

impl From<std::io::Error> for DispatchError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_contains_prefix() {
        let err = DispatchError::DuplicateDriver(DriverId(101));
        let msg = format!("{err}");
        assert!(msg.starts_with("RD_ERR_103"), "Got: {msg}");
        assert!(msg.contains("driver:101"));
    }

    #[test]
    fn invalid_driver_display() {
        let err = DispatchError::InvalidDriver {
            id: DriverId(7),
            reason: "distance must be non-negative".into(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("RD_ERR_101"));
        assert!(msg.contains("driver:7"));
        assert!(msg.contains("non-negative"));
    }

    #[test]
    fn all_errors_have_rd_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(DispatchError::EmptyQueue),
            Box::new(DispatchError::EmptyPool),
            Box::new(DispatchError::QueueFull),
            Box::new(DispatchError::PoolFull),
            Box::new(DispatchError::DuplicateRider(RiderId(1))),
            Box::new(DispatchError::Configuration("test".into())),
            Box::new(DispatchError::from(std::io::Error::other("broken pipe"))),
            Box::new(DispatchError::HistoryRootMismatch {
                expected: "a".into(),
                actual: "b".into(),
            }),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("RD_ERR_"),
                "Error missing RD_ERR_ prefix: {msg}"
            );
        }
    }
}
