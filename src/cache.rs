//! Degrading cache facade
//!
//! Read-through/write-through facade over a [`KeyValueStore`] that
//! absorbs every store failure at this single boundary: reads degrade
//! to a miss, writes degrade to a no-op. Upstream request handling
//! must never fail because the cache is unavailable.

use crate::config::CacheConfig;
use crate::store::KeyValueStore;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Degrading cache facade
///
/// Thread-safe and cloneable; clones share the underlying store.
/// Holds no entry state of its own; every call trusts the live store
/// outcome, so a `get` during an outage misses even for keys the
/// store still has.
///
/// `get` and `set` are infallible by construction: the store trait
/// returns `Result`, this surface does not. An absorbed failure is
/// visible only as a warning-level log record tagged with the key.
#[derive(Clone)]
pub struct DegradingCache {
    store: Arc<dyn KeyValueStore>,
    config: CacheConfig,
}

impl DegradingCache {
    /// Create a new cache facade over any store implementation
    pub fn new<S: KeyValueStore + 'static>(store: S, config: CacheConfig) -> Self {
        Self {
            store: Arc::new(store),
            config,
        }
    }

    /// Create a new cache facade from a shared store
    pub fn from_arc(store: Arc<dyn KeyValueStore>, config: CacheConfig) -> Self {
        Self { store, config }
    }

    /// Read the cached value for `key`
    ///
    /// Returns `None` both when the key is absent and when the store
    /// could not be reached: a degraded read is observably identical
    /// to a genuine miss. Only the failure path logs.
    pub async fn get(&self, key: &str) -> Option<String> {
        match self.store.read(key).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "cache read failed, degrading to miss");
                None
            }
        }
    }

    /// Write `value` under `key`, expiring `ttl_seconds` from now
    ///
    /// Best-effort and fire-and-forget: a failed write is dropped
    /// without retry or queuing. `ttl_seconds` is normally one of the
    /// two configured classes ([`Self::ttl`] or [`Self::refusal_ttl`])
    /// but any value is accepted and handed to the store untouched.
    pub async fn set(&self, key: &str, value: &str, ttl_seconds: u64) {
        let ttl = Duration::from_secs(ttl_seconds);
        if let Err(e) = self.store.write(key, value, ttl).await {
            tracing::warn!(key, error = %e, "cache write failed, entry dropped");
        }
    }

    /// TTL class for normal entries
    pub fn ttl(&self) -> Duration {
        self.config.ttl()
    }

    /// TTL class for refusal entries
    pub fn refusal_ttl(&self) -> Duration {
        self.config.refusal_ttl()
    }

    /// The configuration this facade was built with
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }
}

impl fmt::Debug for DegradingCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DegradingCache")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
