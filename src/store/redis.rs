//! Redis key-value store backend
//!
//! Remote store implementation using Redis. Reads are GET, writes are
//! SETEX. Uses multiplexed connections for efficient connection reuse;
//! socket timeouts are configured through the connection URL and bound
//! blocking time for every operation; this layer adds no deadline of
//! its own.
//!
//! ## Example
//!
//! ```ignore
//! use agent_cache::store::RedisStore;
//!
//! let store = RedisStore::new("redis://localhost:6379")?;
//! // Or with host/port
//! let store = RedisStore::with_host_port("localhost", 6379)?;
//! ```

use crate::error::{Error, Result};
use crate::store::KeyValueStore;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::MultiplexedConnection};
use std::time::Duration;

/// Classify Redis client errors into the store error taxonomy
impl From<redis::RedisError> for Error {
    fn from(err: redis::RedisError) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                message: err.to_string(),
            }
        } else if err.is_io_error() || err.is_connection_refusal() || err.is_connection_dropped() {
            Self::Transport {
                message: err.to_string(),
                source: Some(Box::new(err)),
            }
        } else {
            // Response/type/parse errors: the server answered, but not
            // with anything we can use.
            Self::Protocol {
                message: err.to_string(),
                source: Some(Box::new(err)),
            }
        }
    }
}

/// Redis store backend
///
/// Cloneable; clones share the underlying client and its connection
/// pool.
#[derive(Clone)]
pub struct RedisStore {
    client: Client,
}

impl RedisStore {
    /// Create a new Redis store with a connection URL
    ///
    /// # Arguments
    /// * `url` - Redis connection URL (e.g., "redis://localhost:6379")
    pub fn new(url: &str) -> Result<Self> {
        let client = Client::open(url).map_err(|e| Error::Transport {
            message: format!("failed to create redis client: {}", e),
            source: Some(Box::new(e)),
        })?;

        Ok(Self { client })
    }

    /// Create a new Redis store with host and port
    pub fn with_host_port(host: &str, port: u16) -> Result<Self> {
        Self::new(&format!("redis://{}:{}", host, port))
    }

    /// Get a connection from the client's pool
    async fn connection(&self) -> Result<MultiplexedConnection> {
        Ok(self.client.get_multiplexed_async_connection().await?)
    }

    /// Verify the server is reachable and answering
    pub async fn ping(&self) -> Result<()> {
        let mut conn = self.connection().await?;

        let pong: String = redis::cmd("PING").query_async(&mut conn).await?;
        if pong != "PONG" {
            return Err(Error::protocol(format!(
                "redis ping returned {:?} instead of PONG",
                pong
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection().await?;

        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn write(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        let mut conn = self.connection().await?;

        // TTL passes through untouched; Redis rejects SETEX with a
        // zero expiry and the caller's degrade boundary absorbs that.
        conn.set_ex::<_, _, ()>(key, value, ttl.as_secs()).await?;
        Ok(())
    }
}

impl std::fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStore").finish_non_exhaustive()
    }
}
