use std::borrow::Cow;
use std::fmt;
use std::path::{Component, Path};
use std::str::FromStr;

use wildcard::Pattern;

use crate::{
    Applicability, EntryKind, FilterError, ParseError, ParseErrorKind, Polarity, RuleVerdict,
};

/// Single include or exclude rule over a wildcard leaf pattern.
///
/// Rules are immutable once built. The pattern is compared against the last
/// component of a candidate path, case-insensitively; the applicability scope
/// limits which entry kinds the rule may decide for.
///
/// # Examples
///
/// ```
/// use filters::{EntryKind, FilterPattern, RuleVerdict};
///
/// let rule = FilterPattern::exclude("*.tmp");
/// assert_eq!(rule.includes_file("build/a.TMP")?, RuleVerdict::No);
/// assert_eq!(rule.excludes_file("build/a.TMP")?, RuleVerdict::Yes);
/// assert_eq!(rule.excludes_file("build/a.txt")?, RuleVerdict::NotApplicable);
/// # Ok::<(), filters::FilterError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FilterPattern {
    polarity: Polarity,
    pattern: Pattern,
    applicability: Applicability,
}

impl FilterPattern {
    /// Creates a rule from its three parts.
    ///
    /// `polarity` accepts a [`Polarity`] or a `bool` (`true` = include).
    #[must_use]
    pub fn new(
        polarity: impl Into<Polarity>,
        pattern: impl Into<String>,
        applicability: Applicability,
    ) -> Self {
        Self {
            polarity: polarity.into(),
            pattern: Pattern::new(pattern),
            applicability,
        }
    }

    /// Creates an include rule for files and directories.
    #[must_use]
    pub fn include(pattern: impl Into<String>) -> Self {
        Self::new(Polarity::Include, pattern, Applicability::FilesAndDirectories)
    }

    /// Creates an exclude rule for files and directories.
    #[must_use]
    pub fn exclude(pattern: impl Into<String>) -> Self {
        Self::new(Polarity::Exclude, pattern, Applicability::FilesAndDirectories)
    }

    /// Replaces the applicability scope.
    #[must_use]
    pub const fn with_applicability(mut self, applicability: Applicability) -> Self {
        self.applicability = applicability;
        self
    }

    /// Restricts the rule to files.
    #[must_use]
    pub const fn files_only(self) -> Self {
        self.with_applicability(Applicability::FilesOnly)
    }

    /// Restricts the rule to directories.
    #[must_use]
    pub const fn directories_only(self) -> Self {
        self.with_applicability(Applicability::DirectoriesOnly)
    }

    /// Returns the rule polarity.
    #[must_use]
    pub const fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Returns the compiled pattern.
    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Returns the pattern source text.
    #[must_use]
    pub fn pattern_text(&self) -> &str {
        self.pattern.as_str()
    }

    /// Returns the applicability scope.
    #[must_use]
    pub const fn applicability(&self) -> Applicability {
        self.applicability
    }

    /// Returns `true` for include rules.
    #[must_use]
    pub const fn is_include(&self) -> bool {
        matches!(self.polarity, Polarity::Include)
    }

    /// Returns `true` for exclude rules.
    #[must_use]
    pub const fn is_exclude(&self) -> bool {
        matches!(self.polarity, Polarity::Exclude)
    }

    /// Returns `true` when the leaf of `path` matches the pattern and the
    /// scope accepts `kind`.
    ///
    /// Returns [`FilterError::EmptyPath`] when `path` is empty.
    pub fn matches_path(&self, path: impl AsRef<Path>, kind: EntryKind) -> Result<bool, FilterError> {
        let leaf = leaf_name(path.as_ref())?;
        Ok(self.matches_leaf(&leaf, kind))
    }

    /// Answers "should `path` be included?" from this rule's perspective.
    ///
    /// `Yes` for a matching include rule, `No` for a matching exclude rule and
    /// `NotApplicable` when the rule does not match.
    pub fn includes_path(
        &self,
        path: impl AsRef<Path>,
        kind: EntryKind,
    ) -> Result<RuleVerdict, FilterError> {
        let matched = self.matches_path(path, kind)?;
        Ok(self.verdict(matched, Polarity::Include))
    }

    /// Answers "should `path` be excluded?" from this rule's perspective.
    ///
    /// Mirror of [`includes_path`](Self::includes_path).
    pub fn excludes_path(
        &self,
        path: impl AsRef<Path>,
        kind: EntryKind,
    ) -> Result<RuleVerdict, FilterError> {
        let matched = self.matches_path(path, kind)?;
        Ok(self.verdict(matched, Polarity::Exclude))
    }

    /// [`matches_path`](Self::matches_path) for a file.
    pub fn matches_file(&self, path: impl AsRef<Path>) -> Result<bool, FilterError> {
        self.matches_path(path, EntryKind::File)
    }

    /// [`includes_path`](Self::includes_path) for a file.
    pub fn includes_file(&self, path: impl AsRef<Path>) -> Result<RuleVerdict, FilterError> {
        self.includes_path(path, EntryKind::File)
    }

    /// [`excludes_path`](Self::excludes_path) for a file.
    pub fn excludes_file(&self, path: impl AsRef<Path>) -> Result<RuleVerdict, FilterError> {
        self.excludes_path(path, EntryKind::File)
    }

    /// Renders the rule as text that [`parse_rule`](crate::parse_rule) reads
    /// back to an identical rule.
    ///
    /// Unlike [`Display`](fmt::Display), this refuses patterns rule text
    /// cannot carry and reports them as
    /// [`ParseErrorKind::UnrepresentablePattern`].
    ///
    /// ```
    /// use filters::{FilterPattern, ParseErrorKind};
    ///
    /// assert_eq!(FilterPattern::exclude("*.o").files_only().to_rule_text()?, "-f *.o");
    ///
    /// let err = FilterPattern::include("").to_rule_text().unwrap_err();
    /// assert_eq!(err.kind(), &ParseErrorKind::UnrepresentablePattern);
    /// # Ok::<(), filters::ParseError>(())
    /// ```
    pub fn to_rule_text(&self) -> Result<String, ParseError> {
        let text = self.pattern_text();
        let representable = !text.is_empty()
            && text.trim() == text
            && !text.ends_with('/')
            && !text.contains('\n');
        if representable {
            Ok(self.to_string())
        } else {
            Err(ParseError::new(text, ParseErrorKind::UnrepresentablePattern))
        }
    }

    pub(crate) fn matches_leaf(&self, leaf: &str, kind: EntryKind) -> bool {
        self.applicability.accepts(kind) && self.pattern.is_match(leaf)
    }

    pub(crate) const fn verdict(&self, matched: bool, asking: Polarity) -> RuleVerdict {
        if !matched {
            return RuleVerdict::NotApplicable;
        }
        RuleVerdict::decided(matches!(
            (self.polarity, asking),
            (Polarity::Include, Polarity::Include) | (Polarity::Exclude, Polarity::Exclude)
        ))
    }
}

impl fmt::Display for FilterPattern {
    /// Renders the rule in the text form accepted by [`crate::parse_rule`].
    ///
    /// Patterns that rule text cannot carry render lossily; use
    /// [`FilterPattern::to_rule_text`] when the text must parse back.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.polarity.sign())?;
        if let Some(modifier) = self.applicability.modifier() {
            write!(f, "{modifier}")?;
        }
        write!(f, " {}", self.pattern)
    }
}

impl FromStr for FilterPattern {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_rule(s)?.ok_or_else(|| {
            ParseError::new(s, ParseErrorKind::MissingPattern)
        })
    }
}

/// Returns the last component of `path` as text.
///
/// Paths without a file name (`/`, `..`) yield their final component as
/// written. Non-UTF-8 names are viewed lossily.
pub(crate) fn leaf_name(path: &Path) -> Result<Cow<'_, str>, FilterError> {
    if path.as_os_str().is_empty() {
        return Err(FilterError::EmptyPath);
    }
    let leaf = path
        .file_name()
        .or_else(|| path.components().next_back().map(Component::as_os_str))
        .unwrap_or_else(|| path.as_os_str());
    Ok(leaf.to_string_lossy())
}
