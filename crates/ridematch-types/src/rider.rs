//! Rider records.
//!
//! A [`Rider`] is created once at load time and never mutated. It is
//! consumed when the matcher dequeues it.

use std::fmt;

use serde::Serialize;

use crate::{DispatchError, Result, RiderId};

/// A rider waiting for a driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rider {
    id: RiderId,
    name: String,
}

impl Rider {
    /// Create a rider.
    ///
    /// # Errors
    /// `InvalidRider` if `name` is empty or whitespace only.
    pub fn new(id: RiderId, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DispatchError::InvalidRider {
                reason: "name must not be empty".to_string(),
            });
        }
        Ok(Self { id, name })
    }

    #[must_use]
    pub fn id(&self) -> RiderId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Rider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rider {} ({})", self.id.0, self.name)
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Rider {
    pub fn dummy(id: u64) -> Self {
        Self {
            id: RiderId(id),
            name: format!("rider-{id}"),
        }
    }
}
