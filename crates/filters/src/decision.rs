use std::fmt;

use crate::Polarity;

/// Outcome applied when no rule in a list matches.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DefaultDecision {
    /// Unmatched paths are included.
    #[default]
    Include,
    /// Unmatched paths are excluded.
    Exclude,
}

impl DefaultDecision {
    /// Returns `true` for [`DefaultDecision::Include`].
    #[must_use]
    pub const fn includes(self) -> bool {
        matches!(self, Self::Include)
    }
}

impl From<Polarity> for DefaultDecision {
    fn from(polarity: Polarity) -> Self {
        match polarity {
            Polarity::Include => Self::Include,
            Polarity::Exclude => Self::Exclude,
        }
    }
}

impl fmt::Display for DefaultDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Include => f.write_str("include"),
            Self::Exclude => f.write_str("exclude"),
        }
    }
}

/// Result of evaluating a path against a [`FilterList`](crate::FilterList).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Decision {
    included: bool,
    matched_rule: Option<usize>,
}

impl Decision {
    pub(crate) const fn from_rule(index: usize, polarity: Polarity) -> Self {
        Self {
            included: matches!(polarity, Polarity::Include),
            matched_rule: Some(index),
        }
    }

    pub(crate) const fn from_default(default: DefaultDecision) -> Self {
        Self {
            included: default.includes(),
            matched_rule: None,
        }
    }

    /// Returns `true` when the path is included.
    #[must_use]
    pub const fn is_included(self) -> bool {
        self.included
    }

    /// Returns `true` when the path is excluded.
    #[must_use]
    pub const fn is_excluded(self) -> bool {
        !self.included
    }

    /// Index of the rule that decided, or `None` when the default applied.
    #[must_use]
    pub const fn matched_rule(self) -> Option<usize> {
        self.matched_rule
    }

    /// Returns `true` when no rule matched.
    #[must_use]
    pub const fn is_default(self) -> bool {
        self.matched_rule.is_none()
    }
}
