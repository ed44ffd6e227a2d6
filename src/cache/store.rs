//! Cache Store Module
//!
//! Single-threaded cache engine: HashMap storage, lazy expiry on read and a
//! full expired-entry sweep whenever a write pushes the store past its soft cap.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, Clock, SystemClock};

// == TTL Store ==
/// Keyed storage with one global TTL applied to every entry.
#[derive(Debug)]
pub struct TtlStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum age of a live entry
    ttl: Duration,
    /// Entry count above which a write triggers a sweep
    soft_cap: usize,
    /// Time source for insertion stamps and age checks
    clock: Arc<dyn Clock>,
}

impl<V> TtlStore<V> {
    // == Constructor ==
    /// Creates a store backed by the system clock.
    ///
    /// # Arguments
    /// * `ttl` - Maximum age of a live entry
    /// * `soft_cap` - Entry count above which `set` sweeps expired entries
    pub fn new(ttl: Duration, soft_cap: usize) -> Self {
        Self::with_clock(ttl, soft_cap, Arc::new(SystemClock))
    }

    /// Creates a store that reads time from `clock`.
    pub fn with_clock(ttl: Duration, soft_cap: usize, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl,
            soft_cap,
            clock,
        }
    }

    // == Set ==
    /// Stores `value` under `key`, stamped with the current time.
    ///
    /// An existing entry is replaced outright and its age reset to zero.
    /// If the store now holds more than `soft_cap` entries, every expired
    /// entry is swept.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        let now = self.clock.now();
        self.entries.insert(key.into(), CacheEntry::new(value, now));

        if self.entries.len() > self.soft_cap {
            let removed = self.sweep_expired();
            debug!(
                removed,
                remaining = self.entries.len(),
                "Soft cap exceeded, swept expired entries"
            );
        }

        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns a clone of the live value stored under `key`.
    ///
    /// An expired entry is removed and reported as absent.
    pub fn get(&mut self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        let now = self.clock.now();

        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(now, self.ttl),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            self.entries.remove(key);
            self.stats.record_expired_read();
            self.stats.set_total_entries(self.entries.len());
            return None;
        }

        self.stats.record_hit();
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Sweep Expired ==
    /// Removes every entry older than the TTL.
    ///
    /// Returns the number of entries removed.
    pub fn sweep_expired(&mut self) -> usize {
        let now = self.clock.now();
        let ttl = self.ttl;
        let before = self.entries.len();

        self.entries.retain(|_, entry| !entry.is_expired(now, ttl));

        let removed = before - self.entries.len();
        self.stats.record_sweep(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Contains Key ==
    /// Checks whether `key` is physically stored, live or not.
    ///
    /// Unlike `get`, this neither checks expiry nor touches statistics.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Returns the configured TTL.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the configured soft cap.
    pub fn soft_cap(&self) -> usize {
        self.soft_cap
    }

    /// Returns the number of stored entries, including expired ones not yet removed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
