//! crates/logging/src/tracing_bridge.rs
//! Installs a `tracing-subscriber` filtered by a [`VerbosityConfig`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{VerbosityConfig, init_tracing};
//!
//! init_tracing(&VerbosityConfig::from_verbose_level(2))?;
//! tracing::debug!(target: logging::FILTER_TARGET, "rule matched");
//! ```

use super::config::VerbosityConfig;
use tracing_subscriber::EnvFilter;

/// Failure to install the global subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The rendered directive was rejected by `EnvFilter`.
    #[error("invalid log directive: {0}")]
    Directive(#[from] tracing_subscriber::filter::ParseError),
    /// A global subscriber is already installed.
    #[error("tracing subscriber already initialised: {0}")]
    AlreadyInitialized(String),
}

/// Builds the `EnvFilter` corresponding to `config`.
pub fn env_filter(config: &VerbosityConfig) -> Result<EnvFilter, LoggingError> {
    Ok(EnvFilter::try_new(config.directive())?)
}

/// Installs a fmt subscriber that writes to stderr, filtered by `config`.
///
/// Returns [`LoggingError::AlreadyInitialized`] when called a second time in
/// the same process.
pub fn init_tracing(config: &VerbosityConfig) -> Result<(), LoggingError> {
    let filter = env_filter(config)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| LoggingError::AlreadyInitialized(err.to_string()))
}
