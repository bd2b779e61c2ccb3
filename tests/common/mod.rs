//! Test stores for exercising the facade without a live Redis

use agent_cache::error::{Error, Result};
use agent_cache::store::KeyValueStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// In-memory store with an outage switch
///
/// Healthy mode behaves like a real store (minus expiry; entries
/// live until overwritten). Flipping the switch makes every call fail
/// with a transport error while the stored entries stay put, which is
/// exactly the situation the facade must degrade through: the data
/// still exists, the store just can't be asked.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    outage: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the store going down (or coming back)
    pub fn set_outage(&self, down: bool) {
        self.outage.store(down, Ordering::SeqCst);
    }

    fn check_reachable(&self) -> Result<()> {
        if self.outage.load(Ordering::SeqCst) {
            Err(Error::transport("connection refused"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        self.check_reachable()?;
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str, _ttl: Duration) -> Result<()> {
        self.check_reachable()?;
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Which failure a [`FailingStore`] produces
#[derive(Debug, Clone, Copy)]
pub enum FailureMode {
    Transport,
    Timeout,
    Protocol,
}

impl FailureMode {
    fn to_error(self) -> Error {
        match self {
            Self::Transport => Error::transport("connection reset by peer"),
            Self::Timeout => Error::timeout("deadline elapsed"),
            Self::Protocol => Error::protocol("unexpected reply type"),
        }
    }
}

/// Store that fails every operation with a chosen failure class
#[derive(Debug)]
pub struct FailingStore {
    mode: FailureMode,
}

impl FailingStore {
    pub fn new(mode: FailureMode) -> Self {
        Self { mode }
    }
}

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn read(&self, _key: &str) -> Result<Option<String>> {
        Err(self.mode.to_error())
    }

    async fn write(&self, _key: &str, _value: &str, _ttl: Duration) -> Result<()> {
        Err(self.mode.to_error())
    }
}

/// Tracing layer that records warning-level events
///
/// The facade's only observable on the failure path is a WARN record
/// tagged with the key; this layer captures those so tests can assert
/// on them. Install with [`LogSpy::set_default`] and keep the guard
/// alive for the duration of the test (the default is thread-local,
/// which is enough under the single-threaded test runtime).
#[derive(Debug, Clone, Default)]
pub struct LogSpy {
    warnings: Arc<Mutex<Vec<String>>>,
}

impl LogSpy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install this spy as the thread's default subscriber
    pub fn set_default(&self) -> tracing::subscriber::DefaultGuard {
        tracing::subscriber::set_default(tracing_subscriber::registry().with(self.clone()))
    }

    /// Rendered `field=value` lines of the WARN events seen so far
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }
}

impl<S: tracing::Subscriber> Layer<S> for LogSpy {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            let mut rendered = String::new();
            event.record(&mut FieldRenderer(&mut rendered));
            self.warnings.lock().unwrap().push(rendered);
        }
    }
}

struct FieldRenderer<'a>(&'a mut String);

impl tracing::field::Visit for FieldRenderer<'_> {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        let _ = write!(self.0, "{}={:?} ", field.name(), value);
    }
}
