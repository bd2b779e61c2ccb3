//! Structured logging with tracing
//!
//! The facade itself only emits `tracing` events; which subscriber
//! handles them is the host's choice. This module is for binaries and
//! tests that have no subscriber of their own.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable consulted for log filter overrides
pub const LOG_ENV_VAR: &str = "AGENT_CACHE_LOG";

/// Initialize a global tracing subscriber
///
/// The filter comes from `AGENT_CACHE_LOG` when set, otherwise from
/// `default_level` (e.g. "info" or "agent_cache=debug"). Calling this
/// twice is harmless: a second init is a no-op rather than a panic,
/// since a logging problem must never take the caller down with it.
pub fn init_logging(default_level: &str, json_format: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // Types differ per format, so two branches
    let result = if json_format {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_target(true))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true))
            .try_init()
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed, keeping it");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice_does_not_panic() {
        init_logging("debug", false);
        init_logging("info", true);
    }
}
