//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for store and configuration failures
///
/// These errors travel between the store client and the cache facade.
/// They never cross the facade's public `get`/`set` surface, which
/// degrades every store failure into a miss or a no-op.
#[derive(Error, Debug)]
pub enum Error {
    /// Connection or network-level failure talking to the store
    #[error("transport error: {message}")]
    Transport {
        /// Description of the transport failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The store client's configured deadline elapsed
    #[error("timeout: {message}")]
    Timeout {
        /// Description of the timed-out operation
        message: String,
    },

    /// Malformed or unexpected response from the store
    #[error("protocol error: {message}")]
    Protocol {
        /// Description of the protocol failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration loading or parsing failure (bootstrap only)
    #[error("configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create a transport error without a source
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// Create a timeout error
    pub fn timeout<S: Into<String>>(message: S) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Create a protocol error without a source
    pub fn protocol<S: Into<String>>(message: S) -> Self {
        Self::Protocol {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with a source
    pub fn configuration_with_source<S: Into<String>>(
        message: S,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(source),
        }
    }
}
