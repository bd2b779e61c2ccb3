//! Configuration loader
//!
//! Merges defaults, an optional TOML file, and `AGENT_CACHE_`-prefixed
//! environment variables into a [`CacheConfig`]. Loading happens once
//! at bootstrap; unlike the cache operations themselves, a malformed
//! configuration is a real error and is propagated.

use crate::config::CacheConfig;
use crate::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::path::{Path, PathBuf};

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "AGENT_CACHE_";

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILENAME: &str = "agent-cache.toml";

/// Configuration loader service
///
/// Sources are merged in this order (later sources override earlier):
/// 1. Default values from `CacheConfig::default()`
/// 2. TOML configuration file (if present)
/// 3. Environment variables: `AGENT_CACHE_TTL_SECONDS`,
///    `AGENT_CACHE_REFUSAL_TTL_SECONDS`
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path; `None` means try the default location
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    pub fn load(&self) -> Result<CacheConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(CacheConfig::default()));

        match &self.config_path {
            Some(config_path) => {
                if config_path.exists() {
                    figment = figment.merge(Toml::file(config_path));
                    tracing::debug!(path = %config_path.display(), "cache config file loaded");
                } else {
                    tracing::debug!(
                        path = %config_path.display(),
                        "cache config file not found, using defaults"
                    );
                }
            }
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILENAME);
                if default_path.exists() {
                    figment = figment.merge(Toml::file(default_path));
                    tracing::debug!(path = %default_path.display(), "cache config file loaded");
                }
            }
        }

        figment = figment.merge(Env::prefixed(&self.env_prefix));

        let config: CacheConfig = figment.extract().map_err(|e| {
            Error::configuration_with_source("failed to extract cache configuration", Box::new(e))
        })?;

        Ok(config)
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
