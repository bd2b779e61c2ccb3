//! Key-value store port
//!
//! The capability pair the cache facade depends on. Implementations
//! own connection lifecycle and timeouts; the facade owns nothing but
//! the degrade boundary on top of this trait.
//!
//! ## Available backends
//!
//! | Backend | Type | Description |
//! |---------|------|-------------|
//! | [`RedisStore`] | Remote | Redis-backed, for production use |
//! | [`NullStore`] | Testing | Always misses, drops writes |

pub mod null;
pub mod redis;

pub use null::NullStore;
pub use redis::RedisStore;

use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Key-Value Store Port
///
/// Backends must report a missing key as `Ok(None)` and reserve `Err`
/// for transport, timeout, and protocol failures. The distinction
/// matters: the facade treats both the same way observably, but only
/// the failure path is logged.
#[async_trait]
pub trait KeyValueStore: Send + Sync + std::fmt::Debug {
    /// Read the value stored under `key`
    ///
    /// # Returns
    /// The stored value if present, `None` if the key does not exist
    /// or has expired
    async fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, expiring `ttl` from now
    ///
    /// The TTL is handed to the backend untouched; backends are free
    /// to reject values they consider invalid (e.g. a zero TTL), and
    /// that rejection surfaces as an `Err` like any other failure.
    async fn write(&self, key: &str, value: &str, ttl: Duration) -> Result<()>;
}
