#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` owns the verbosity model for the workspace's diagnostics. Library
//! crates emit `tracing` events on the targets exported here; binaries and
//! test harnesses translate a `-v` count into a [`VerbosityConfig`] and install
//! a subscriber with `init_tracing` (feature `tracing`).
//!
//! # Design
//!
//! - [`LogTarget`] names each diagnostic category and maps it to a stable
//!   `tracing` target string such as [`FILTER_TARGET`].
//! - [`Verbosity`] is the per-category level, ordered from `Warn` to `Trace`.
//! - [`VerbosityConfig`] holds one [`Verbosity`] per category and renders an
//!   `EnvFilter` directive via [`VerbosityConfig::directive`].
//!
//! # Examples
//!
//! ```
//! use logging::{LogTarget, Verbosity, VerbosityConfig};
//!
//! let config = VerbosityConfig::from_verbose_level(2);
//! assert_eq!(config.level(LogTarget::Filter), Verbosity::Debug);
//! assert!(config.directive().contains("leaf::filter=debug"));
//! ```

mod config;
mod levels;
mod targets;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::VerbosityConfig;
pub use levels::{ParseVerbosityError, Verbosity};
pub use targets::{FILTER_TARGET, LogTarget, RULES_TARGET};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{LoggingError, env_filter, init_tracing};
