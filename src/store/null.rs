//! Null store for testing
//!
//! A store implementation that doesn't store anything. Useful for
//! tests and for disabling caching without touching call sites.

use crate::error::Result;
use crate::store::KeyValueStore;
use async_trait::async_trait;
use std::time::Duration;

/// Null store that doesn't store anything
///
/// Always reports a miss on reads and accepts writes without keeping
/// the data.
///
/// # Example
///
/// ```rust
/// use agent_cache::store::NullStore;
///
/// let store = NullStore::new();
/// // All operations succeed but nothing is cached
/// ```
#[derive(Debug, Clone, Default)]
pub struct NullStore;

impl NullStore {
    /// Create a new null store
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl KeyValueStore for NullStore {
    async fn read(&self, _key: &str) -> Result<Option<String>> {
        // Always a miss
        Ok(None)
    }

    async fn write(&self, _key: &str, _value: &str, _ttl: Duration) -> Result<()> {
        // Accept the write but don't store anything
        Ok(())
    }
}
