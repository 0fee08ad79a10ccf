//! crates/logging/src/targets.rs
//! Tracing target names shared by emitting crates and subscribers.

use std::fmt;

/// Target for rule evaluation events (rule matched, list decision).
pub const FILTER_TARGET: &str = "leaf::filter";

/// Target for rule loading events (parsed lines, rule files read).
pub const RULES_TARGET: &str = "leaf::rules";

/// Diagnostic categories with independently configurable verbosity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LogTarget {
    /// Rule evaluation against candidate paths.
    Filter,
    /// Rule text parsing and rule file loading.
    Rules,
}

impl LogTarget {
    /// All categories, in directive order.
    pub const ALL: [Self; 2] = [Self::Filter, Self::Rules];

    /// Returns the `tracing` target string for the category.
    #[must_use]
    pub const fn target(self) -> &'static str {
        match self {
            Self::Filter => FILTER_TARGET,
            Self::Rules => RULES_TARGET,
        }
    }
}

impl fmt::Display for LogTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.target())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_share_prefix() {
        for target in LogTarget::ALL {
            assert!(target.target().starts_with("leaf::"));
        }
    }

    #[test]
    fn display_matches_target() {
        assert_eq!(LogTarget::Filter.to_string(), FILTER_TARGET);
        assert_eq!(LogTarget::Rules.to_string(), RULES_TARGET);
    }
}
