use std::convert::Infallible;
use std::ffi::OsStr;
use std::fmt;
use std::str::FromStr;

use crate::fold::fold_chars;
use crate::matcher;
use crate::token::{Token, tokenize};

/// Compiled wildcard pattern.
///
/// The pattern is immutable once built. It keeps the original source text for
/// display and diagnostics alongside the token sequence used for matching.
///
/// # Examples
///
/// ```
/// use wildcard::Pattern;
///
/// let pattern: Pattern = "A.BA*".parse().unwrap();
/// assert!(pattern.is_match("A.BA"));
/// assert!(pattern.is_match("a.bacd"));
/// assert!(!pattern.is_match("ba.ba"));
/// assert_eq!(pattern.to_string(), "A.BA*");
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Pattern {
    source: String,
    tokens: Vec<Token>,
    min_len: usize,
    has_run: bool,
}

impl Pattern {
    /// Compiles `source` into a pattern. Every string is accepted.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let tokens = tokenize(&source);
        let min_len = tokens.iter().map(Token::fixed_len).sum();
        let has_run = tokens.contains(&Token::AnyRun);
        Self {
            source,
            tokens,
            min_len,
            has_run,
        }
    }

    /// Returns the source text the pattern was built from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns the compiled token sequence.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Minimum number of characters a matching candidate must have.
    #[must_use]
    pub const fn min_len(&self) -> usize {
        self.min_len
    }

    /// Returns `true` when the pattern contains no `*` or `?`.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        self.tokens
            .iter()
            .all(|token| matches!(token, Token::Literal(_)))
    }

    /// Returns `true` when the pattern reduces to a single `*`.
    #[must_use]
    pub fn matches_everything(&self) -> bool {
        self.tokens == [Token::AnyRun]
    }

    /// Returns `true` when `candidate` fully matches the pattern.
    #[must_use]
    pub fn is_match(&self, candidate: &str) -> bool {
        if self.matches_everything() {
            return true;
        }

        // Cheap length checks before folding the candidate.
        let len = candidate.chars().count();
        if len < self.min_len || (!self.has_run && len != self.min_len) {
            return false;
        }

        matcher::matches(&self.tokens, &fold_chars(candidate))
    }

    /// Matches an OS string through its lossy UTF-8 view.
    #[must_use]
    pub fn is_match_os(&self, candidate: &OsStr) -> bool {
        self.is_match(&candidate.to_string_lossy())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for Pattern {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Pattern {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<String> for Pattern {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}

impl AsRef<str> for Pattern {
    fn as_ref(&self) -> &str {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::Pattern;
    use std::ffi::OsStr;

    #[test]
    fn min_len_ignores_stars() {
        assert_eq!(Pattern::new("ABC?.XYZ").min_len(), 8);
        assert_eq!(Pattern::new("*.obj").min_len(), 4);
        assert_eq!(Pattern::new("").min_len(), 0);
    }

    #[test]
    fn literal_detection() {
        assert!(Pattern::new("readme.md").is_literal());
        assert!(Pattern::new("").is_literal());
        assert!(!Pattern::new("read?e.md").is_literal());
    }

    #[test]
    fn repeated_stars_match_everything() {
        assert!(Pattern::new("***").matches_everything());
        assert!(!Pattern::new("*?").matches_everything());
    }

    #[test]
    fn source_text_is_preserved() {
        let pattern = Pattern::new("Make**File");
        assert_eq!(pattern.as_str(), "Make**File");
        assert_eq!(pattern.to_string(), "Make**File");
    }

    #[test]
    fn os_str_candidates_match() {
        let pattern = Pattern::new("*.RS");
        assert!(pattern.is_match_os(OsStr::new("lib.rs")));
    }

    #[test]
    fn length_shortcut_rejects_without_matching() {
        let pattern = Pattern::new("ABC?.XYZ");
        assert!(!pattern.is_match("ABCD"));
        assert!(!pattern.is_match("ABC12.XYZ"));
    }
}
