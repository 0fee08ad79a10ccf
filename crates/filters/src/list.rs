use std::path::Path;

use crate::debug_filter::{
    FilterTracer, trace_filter_decision, trace_filter_evaluate, trace_filter_rule_added,
};
use crate::rule::leaf_name;
use crate::{Decision, DefaultDecision, EntryKind, FilterError, FilterPattern, Polarity, RuleVerdict};

/// Ordered list of include/exclude rules with first-match-wins evaluation.
///
/// Rules are evaluated in insertion order and the first rule whose pattern
/// matches the candidate's leaf (and whose scope accepts the candidate's kind)
/// decides. When no rule matches, the list's [`DefaultDecision`] applies.
///
/// Lists are append-only. Queries take `&self` and never mutate, so one list
/// can be shared across threads and evaluated concurrently.
///
/// # Examples
///
/// ```
/// use filters::{DefaultDecision, EntryKind, FilterList, FilterPattern};
///
/// let list = FilterList::from_rules([
///     FilterPattern::exclude("*.tmp"),
///     FilterPattern::include("*"),
/// ]);
///
/// assert!(!list.allows("a.tmp", EntryKind::File)?);
/// assert!(list.allows("a.txt", EntryKind::File)?);
///
/// let strict = FilterList::new(DefaultDecision::Exclude);
/// assert!(!strict.allows("anything", EntryKind::File)?);
/// # Ok::<(), filters::FilterError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FilterList {
    rules: Vec<FilterPattern>,
    default: DefaultDecision,
}

impl FilterList {
    /// Creates an empty list with the given default decision.
    #[must_use]
    pub const fn new(default: DefaultDecision) -> Self {
        Self {
            rules: Vec::new(),
            default,
        }
    }

    /// Builds a list from `rules` in iteration order, defaulting to include.
    pub fn from_rules<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = FilterPattern>,
    {
        let mut list = Self::default();
        list.extend(rules);
        list
    }

    /// Replaces the default decision.
    #[must_use]
    pub const fn with_default(mut self, default: DefaultDecision) -> Self {
        self.default = default;
        self
    }

    /// Appends a rule with the lowest precedence so far.
    pub fn push(&mut self, rule: FilterPattern) {
        trace_filter_rule_added(rule.pattern_text(), rule.is_include(), rule.applicability());
        self.rules.push(rule);
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the list holds no rules.
    ///
    /// An empty list answers every query with its default decision.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the rules in precedence order.
    #[must_use]
    pub fn rules(&self) -> &[FilterPattern] {
        &self.rules
    }

    /// Iterates over the rules in precedence order.
    pub fn iter(&self) -> std::slice::Iter<'_, FilterPattern> {
        self.rules.iter()
    }

    /// Returns the decision applied when no rule matches.
    #[must_use]
    pub const fn default_decision(&self) -> DefaultDecision {
        self.default
    }

    /// Returns the first rule that matches `path`, with its index.
    pub fn first_match(
        &self,
        path: impl AsRef<Path>,
        kind: EntryKind,
    ) -> Result<Option<(usize, &FilterPattern)>, FilterError> {
        let path = path.as_ref();
        let leaf = leaf_name(path)?;
        Ok(self.rules.iter().enumerate().find(|(_, rule)| {
            let matched = rule.matches_leaf(&leaf, kind);
            trace_filter_evaluate(&leaf, rule.pattern_text(), rule.is_include(), matched);
            matched
        }))
    }

    /// Verdict of the first matching rule on "should `path` be included?".
    ///
    /// `NotApplicable` when no rule matches; the default decision is not
    /// consulted.
    pub fn includes_path(
        &self,
        path: impl AsRef<Path>,
        kind: EntryKind,
    ) -> Result<RuleVerdict, FilterError> {
        Ok(self
            .first_match(path, kind)?
            .map_or(RuleVerdict::NotApplicable, |(_, rule)| {
                rule.verdict(true, Polarity::Include)
            }))
    }

    /// Verdict of the first matching rule on "should `path` be excluded?".
    pub fn excludes_path(
        &self,
        path: impl AsRef<Path>,
        kind: EntryKind,
    ) -> Result<RuleVerdict, FilterError> {
        Ok(self.includes_path(path, kind)?.negate())
    }

    /// Evaluates `path`, falling back to the default decision.
    pub fn evaluate(&self, path: impl AsRef<Path>, kind: EntryKind) -> Result<Decision, FilterError> {
        let path = path.as_ref();
        let decision = match self.first_match(path, kind)? {
            Some((index, rule)) => Decision::from_rule(index, rule.polarity()),
            None => Decision::from_default(self.default),
        };
        trace_filter_decision(
            &path.to_string_lossy(),
            decision.is_included(),
            decision
                .matched_rule()
                .map(|index| self.rules[index].pattern_text()),
        );
        Ok(decision)
    }

    /// Returns `true` if `path` is included.
    pub fn allows(&self, path: impl AsRef<Path>, kind: EntryKind) -> Result<bool, FilterError> {
        Ok(self.evaluate(path, kind)?.is_included())
    }

    /// Keeps the candidates this list includes, preserving their order.
    ///
    /// Stops at the first empty path with [`FilterError::EmptyPath`].
    pub fn filter_paths<I, P>(&self, candidates: I) -> Result<Vec<P>, FilterError>
    where
        I: IntoIterator<Item = (P, EntryKind)>,
        P: AsRef<Path>,
    {
        let mut tracer = FilterTracer::new();
        let mut kept = Vec::new();
        for (path, kind) in candidates {
            let decision = self.evaluate(&path, kind)?;
            tracer.record_evaluation(&decision);
            if decision.is_included() {
                kept.push(path);
            }
        }
        tracer.summary();
        Ok(kept)
    }
}

impl Extend<FilterPattern> for FilterList {
    fn extend<I: IntoIterator<Item = FilterPattern>>(&mut self, iter: I) {
        for rule in iter {
            self.push(rule);
        }
    }
}

impl FromIterator<FilterPattern> for FilterList {
    fn from_iter<I: IntoIterator<Item = FilterPattern>>(iter: I) -> Self {
        Self::from_rules(iter)
    }
}

impl<'a> IntoIterator for &'a FilterList {
    type Item = &'a FilterPattern;
    type IntoIter = std::slice::Iter<'a, FilterPattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
