//! System-wide constants for the RideMatch dispatcher.

/// Maximum riders waiting in a single queue.
pub const DEFAULT_QUEUE_CAPACITY: usize = 100_000;

/// Maximum drivers held in a single pool.
pub const DEFAULT_POOL_CAPACITY: usize = 100_000;

/// Environment variable naming a JSON [`crate::DispatchConfig`] file.
pub const CONFIG_ENV_VAR: &str = "RIDEMATCH_CONFIG";

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "RideMatch";
