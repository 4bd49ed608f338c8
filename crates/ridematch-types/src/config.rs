//! Configuration for a dispatch run.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{DispatchError, Result, constants};

/// Capacity and validation limits for the rider queue and driver pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Maximum riders held in the queue at once.
    pub queue_capacity: usize,
    /// Maximum drivers held in the pool at once.
    pub pool_capacity: usize,
    /// Optional ceiling for driver ratings admitted to the pool. `None` admits any rating.
    pub max_rating: Option<Decimal>,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            queue_capacity: constants::DEFAULT_QUEUE_CAPACITY,
            pool_capacity: constants::DEFAULT_POOL_CAPACITY,
            max_rating: None,
        }
    }
}

impl DispatchConfig {
    /// Reject configurations that could never admit anything.
    ///
    /// # Errors
    /// `Configuration` on a zero capacity or a non-positive rating ceiling.
    pub fn validate(&self) -> Result<()> {
        if self.queue_capacity == 0 {
            return Err(DispatchError::Configuration(
                "queue_capacity must be at least 1".to_string(),
            ));
        }
        if self.pool_capacity == 0 {
            return Err(DispatchError::Configuration(
                "pool_capacity must be at least 1".to_string(),
            ));
        }
        if let Some(max_rating) = self.max_rating.filter(|m| *m <= Decimal::ZERO) {
            return Err(DispatchError::Configuration(format!(
                "max_rating must be positive, got {max_rating}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = DispatchConfig::default();
        assert_eq!(cfg.queue_capacity, 100_000);
        assert_eq!(cfg.pool_capacity, 100_000);
        assert_eq!(cfg.max_rating, None);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_capacity_rejected() {
        let cfg = DispatchConfig {
            pool_capacity: 0,
            ..DispatchConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(DispatchError::Configuration(_))));
    }

    #[test]
    fn non_positive_rating_ceiling_rejected() {
        let cfg = DispatchConfig {
            max_rating: Some(Decimal::ZERO),
            ..DispatchConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: DispatchConfig = serde_json::from_str(r#"{"queue_capacity": 3}"#).unwrap();
        assert_eq!(cfg.queue_capacity, 3);
        assert_eq!(cfg.pool_capacity, constants::DEFAULT_POOL_CAPACITY);
        assert_eq!(cfg.max_rating, None);
    }

    #[test]
    fn rating_ceiling_from_json() {
        let cfg: DispatchConfig = serde_json::from_str(r#"{"max_rating": "4.5"}"#).unwrap();
        assert_eq!(cfg.max_rating, Some(Decimal::new(45, 1)));
        assert!(cfg.validate().is_ok());
    }
}
