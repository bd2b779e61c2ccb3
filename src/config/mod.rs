//! Cache configuration types

pub mod loader;

pub use loader::ConfigLoader;

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default TTL for normal cache entries (seconds)
pub const DEFAULT_TTL_SECS: u64 = 600;

/// Default TTL for refusal cache entries (seconds)
pub const DEFAULT_REFUSAL_TTL_SECS: u64 = 30;

/// Cache configuration
///
/// Two expiration classes: normal entries and refusal entries. Refusal
/// entries (answers produced when the upstream declined to answer)
/// expire faster so a stale refusal does not outlive a real answer.
///
/// Immutable after load; the facade takes ownership of a copy at
/// construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// TTL for normal entries, in seconds
    pub ttl_seconds: u64,

    /// TTL for refusal entries, in seconds
    pub refusal_ttl_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: DEFAULT_TTL_SECS,
            refusal_ttl_seconds: DEFAULT_REFUSAL_TTL_SECS,
        }
    }
}

impl CacheConfig {
    /// TTL for normal entries
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }

    /// TTL for refusal entries
    pub fn refusal_ttl(&self) -> Duration {
        Duration::from_secs(self.refusal_ttl_seconds)
    }
}
