use std::fmt;

/// Tri-state answer from a single rule or a rule list.
///
/// `NotApplicable` means "this rule does not decide"; callers fall through to
/// the next rule rather than treating it as a negative answer.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum RuleVerdict {
    /// The rule matched and answers the question affirmatively.
    Yes,
    /// The rule matched and answers the question negatively.
    No,
    /// The rule did not match.
    #[default]
    NotApplicable,
}

impl RuleVerdict {
    /// Builds a decided verdict from a boolean.
    #[must_use]
    pub const fn decided(answer: bool) -> Self {
        if answer { Self::Yes } else { Self::No }
    }

    /// Returns `true` for [`RuleVerdict::Yes`].
    #[must_use]
    pub const fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }

    /// Returns `true` for [`RuleVerdict::No`].
    #[must_use]
    pub const fn is_no(self) -> bool {
        matches!(self, Self::No)
    }

    /// Returns `true` unless the verdict is [`RuleVerdict::NotApplicable`].
    #[must_use]
    pub const fn is_decided(self) -> bool {
        !matches!(self, Self::NotApplicable)
    }

    /// `Some(answer)` for decided verdicts, `None` otherwise.
    #[must_use]
    pub const fn to_option(self) -> Option<bool> {
        match self {
            Self::Yes => Some(true),
            Self::No => Some(false),
            Self::NotApplicable => None,
        }
    }

    /// Swaps `Yes` and `No`; `NotApplicable` stays put.
    #[must_use]
    pub const fn negate(self) -> Self {
        match self {
            Self::Yes => Self::No,
            Self::No => Self::Yes,
            Self::NotApplicable => Self::NotApplicable,
        }
    }

    /// Resolves the verdict, using `default` when undecided.
    #[must_use]
    pub const fn unwrap_or(self, default: bool) -> bool {
        match self {
            Self::Yes => true,
            Self::No => false,
            Self::NotApplicable => default,
        }
    }
}

impl From<RuleVerdict> for Option<bool> {
    fn from(verdict: RuleVerdict) -> Self {
        verdict.to_option()
    }
}

impl From<Option<bool>> for RuleVerdict {
    fn from(answer: Option<bool>) -> Self {
        answer.map_or(Self::NotApplicable, Self::decided)
    }
}

impl fmt::Display for RuleVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yes => f.write_str("yes"),
            Self::No => f.write_str("no"),
            Self::NotApplicable => f.write_str("not applicable"),
        }
    }
}
