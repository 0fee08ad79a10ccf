use std::fmt;

/// Whether a matching rule includes or excludes the path.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Polarity {
    /// Include the matching path.
    Include,
    /// Exclude the matching path.
    Exclude,
}

impl Polarity {
    /// Returns the short rule-text prefix (`+` or `-`).
    #[must_use]
    pub const fn sign(self) -> char {
        match self {
            Self::Include => '+',
            Self::Exclude => '-',
        }
    }
}

impl From<bool> for Polarity {
    /// `true` maps to [`Polarity::Include`].
    fn from(include: bool) -> Self {
        if include { Self::Include } else { Self::Exclude }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Include => f.write_str("include"),
            Self::Exclude => f.write_str("exclude"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Polarity;

    #[test]
    fn display_variants_matches_expected_tokens() {
        let cases = [(Polarity::Include, "include"), (Polarity::Exclude, "exclude")];

        for (polarity, expected) in cases {
            assert_eq!(polarity.to_string(), expected);
        }
    }

    #[test]
    fn bool_conversion() {
        assert_eq!(Polarity::from(true), Polarity::Include);
        assert_eq!(Polarity::from(false), Polarity::Exclude);
    }

    #[test]
    fn signs() {
        assert_eq!(Polarity::Include.sign(), '+');
        assert_eq!(Polarity::Exclude.sign(), '-');
    }
}
