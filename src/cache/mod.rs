//! Cache Module
//!
//! Provides in-memory response caching with a single global TTL, lazy expiry
//! on read and an expired-entry sweep once the store grows past a soft cap.

mod clock;
mod entry;
mod key;
mod shared;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use key::{CacheKey, KEY_DELIMITER};
pub use shared::{Cached, ResponseCache};
pub use stats::CacheStats;
pub use store::TtlStore;

// == Public Constants ==
/// Default maximum age of a cached response, in seconds
pub const DEFAULT_TTL_SECS: u64 = 5 * 60;

/// Default entry count above which a write sweeps expired entries
pub const DEFAULT_SOFT_CAP: usize = 100;
