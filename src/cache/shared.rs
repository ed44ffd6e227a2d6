//! Shared Cache Handle
//!
//! Thread-safe handle over a `TtlStore`, cloned into every caller at startup.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheStats, Clock, TtlStore};

// == Cached ==
/// A value together with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Cached<V> {
    pub value: V,
    /// `true` if served from the cache, `false` if freshly fetched
    pub cached: bool,
}

// == Response Cache ==
/// Cloneable handle to one process-wide store.
///
/// Every operation runs inside a single mutex, so `get` and `set` (including
/// any sweep it triggers) are atomic with respect to each other. The lock is
/// never held across an `.await`.
#[derive(Debug)]
pub struct ResponseCache<V> {
    inner: Arc<Mutex<TtlStore<V>>>,
}

impl<V> Clone for ResponseCache<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> ResponseCache<V> {
    // == Constructor ==
    /// Creates a cache backed by the system clock.
    pub fn new(ttl: Duration, soft_cap: usize) -> Self {
        Self::from_store(TtlStore::new(ttl, soft_cap))
    }

    /// Creates a cache that reads time from `clock`.
    pub fn with_clock(ttl: Duration, soft_cap: usize, clock: Arc<dyn Clock>) -> Self {
        Self::from_store(TtlStore::with_clock(ttl, soft_cap, clock))
    }

    pub fn from_store(store: TtlStore<V>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Store methods leave the map consistent even if a caller panics, so a
    /// poisoned lock is taken over.
    fn lock(&self) -> MutexGuard<'_, TtlStore<V>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // == Get ==
    /// Returns the live value for `key`, dropping it if expired.
    pub fn get(&self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        self.lock().get(key)
    }

    // == Set ==
    /// Stores `value` under `key`, resetting its age.
    pub fn set(&self, key: impl Into<String>, value: V) {
        self.lock().set(key, value);
    }

    // == Get Or Fetch ==
    /// Serves `key` from the cache, or runs `fetch` and caches its success.
    ///
    /// The lock is released while `fetch` runs, so concurrent misses on the
    /// same key may each fetch; the last successful `set` wins. Errors are
    /// returned as-is and never stored.
    pub async fn get_or_fetch<F, Fut, E>(&self, key: &str, fetch: F) -> Result<Cached<V>, E>
    where
        V: Clone,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.get(key) {
            debug!(key, "Cache hit");
            return Ok(Cached {
                value,
                cached: true,
            });
        }

        debug!(key, "Cache miss, fetching upstream");
        let value = fetch().await?;
        self.set(key, value.clone());

        Ok(Cached {
            value,
            cached: false,
        })
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    pub fn stats(&self) -> CacheStats {
        self.lock().stats()
    }

    pub fn ttl(&self) -> Duration {
        self.lock().ttl()
    }

    pub fn soft_cap(&self) -> usize {
        self.lock().soft_cap()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
