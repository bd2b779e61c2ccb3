//! Degrading cache facade for the agent request pipeline
//!
//! A read-through/write-through cache in front of a remote key-value
//! store (Redis), used to avoid recomputing expensive agent responses.
//! The contract that matters: **cache unavailability never becomes a
//! request failure**. Every store error (transport, timeout,
//! protocol) is absorbed at the facade boundary and converted into a
//! miss (reads) or a no-op (writes), logged at warning level and never
//! propagated.
//!
//! Two TTL classes are configured: normal entries (default 600 s) and
//! refusal entries (default 30 s), so a cached "declined to answer"
//! result is evicted sooner than a real answer. Which class a write
//! uses is the caller's choice.
//!
//! # Example
//!
//! ```ignore
//! use agent_cache::{CacheConfig, ConfigLoader, DegradingCache};
//! use agent_cache::store::RedisStore;
//!
//! let config = ConfigLoader::new().load()?;
//! let store = RedisStore::new("redis://localhost:6379")?;
//! let cache = DegradingCache::new(store, config);
//!
//! // Miss or outage, same answer: recompute.
//! if let Some(hit) = cache.get("agent:q:42").await {
//!     return Ok(hit);
//! }
//! let answer = expensive_pipeline().await?;
//! let ttl = if answer.is_refusal() {
//!     cache.refusal_ttl()
//! } else {
//!     cache.ttl()
//! };
//! cache.set("agent:q:42", &answer.text, ttl.as_secs()).await;
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod logging;
pub mod store;

pub use cache::DegradingCache;
pub use config::{CacheConfig, ConfigLoader};
pub use error::{Error, Result};
pub use store::KeyValueStore;
