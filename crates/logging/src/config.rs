//! crates/logging/src/config.rs
//! Verbosity configuration combining the per-category levels.

use super::levels::Verbosity;
use super::targets::LogTarget;

/// Verbosity for each diagnostic category plus the fallback for other targets.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VerbosityConfig {
    /// Level applied to targets outside the workspace categories.
    pub fallback: Verbosity,
    /// Rule evaluation level.
    pub filter: Verbosity,
    /// Rule loading level.
    pub rules: Verbosity,
}

impl VerbosityConfig {
    /// Create a configuration from a `-v` count.
    ///
    /// Loading diagnostics stay at `Info` through level 2 and jump to
    /// `Trace` at level 3.
    pub fn from_verbose_level(level: u8) -> Self {
        let filter = Verbosity::from_verbose_count(level);
        let rules = match level {
            0 => Verbosity::Warn,
            1 | 2 => Verbosity::Info,
            _ => Verbosity::Trace,
        };
        Self {
            fallback: Verbosity::Warn,
            filter,
            rules,
        }
    }

    /// Returns the level configured for `target`.
    #[must_use]
    pub const fn level(&self, target: LogTarget) -> Verbosity {
        match target {
            LogTarget::Filter => self.filter,
            LogTarget::Rules => self.rules,
        }
    }

    /// Sets the level for `target`.
    pub fn set_level(&mut self, target: LogTarget, level: Verbosity) {
        match target {
            LogTarget::Filter => self.filter = level,
            LogTarget::Rules => self.rules = level,
        }
    }

    /// Builder form of [`set_level`](Self::set_level).
    #[must_use]
    pub fn with_level(mut self, target: LogTarget, level: Verbosity) -> Self {
        self.set_level(target, level);
        self
    }

    /// Returns `true` if events at `level` on `target` would be recorded.
    #[must_use]
    pub fn enabled(&self, target: LogTarget, level: Verbosity) -> bool {
        level <= self.level(target)
    }

    /// Renders the configuration as an `EnvFilter` directive string.
    ///
    /// The fallback comes first, followed by one `target=level` entry per
    /// category.
    #[must_use]
    pub fn directive(&self) -> String {
        let mut directive = self.fallback.as_str().to_owned();
        for target in LogTarget::ALL {
            directive.push(',');
            directive.push_str(target.target());
            directive.push('=');
            directive.push_str(self.level(target).as_str());
        }
        directive
    }
}
