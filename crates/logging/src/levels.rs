//! crates/logging/src/levels.rs
//! Per-category verbosity levels.

use std::fmt;
use std::str::FromStr;

/// Verbosity of a single diagnostic category, from quietest to loudest.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Verbosity {
    /// Warnings and errors only.
    #[default]
    Warn,
    /// Summary information.
    Info,
    /// Per-rule and per-path decisions.
    Debug,
    /// Every evaluation step.
    Trace,
}

impl Verbosity {
    /// Maps a `-v` count to a level. Counts above three saturate at `Trace`.
    #[must_use]
    pub const fn from_verbose_count(count: u8) -> Self {
        match count {
            0 => Self::Warn,
            1 => Self::Info,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Returns the level name as used in `EnvFilter` directives.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown verbosity name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown verbosity level '{0}'")]
pub struct ParseVerbosityError(pub String);

impl FromStr for Verbosity {
    type Err = ParseVerbosityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warn" | "quiet" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(ParseVerbosityError(s.to_owned())),
        }
    }
}
