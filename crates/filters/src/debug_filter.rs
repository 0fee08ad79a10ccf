//! Tracing for rule loading and rule evaluation.
//!
//! Every helper here is compiled to an inline no-op unless the `tracing`
//! feature is enabled. Events are emitted on [`logging::FILTER_TARGET`]
//! (evaluation) and [`logging::RULES_TARGET`] (loading) so a subscriber built
//! from [`logging::VerbosityConfig`] can dial them independently.
//!
//! # Examples
//!
//! ```rust,ignore
//! use filters::debug_filter::{FilterTracer, trace_filter_evaluate};
//!
//! let mut tracer = FilterTracer::new();
//!
//! trace_filter_evaluate("test.tmp", "*.tmp", false, true);
//! tracer.record_evaluation(&decision);
//!
//! tracer.summary();
//! ```

use crate::{Applicability, Decision};

#[cfg(feature = "tracing")]
use logging::{FILTER_TARGET, RULES_TARGET};

// ============================================================================
// Tracing functions (feature-gated)
// ============================================================================

/// Traces a rule being appended to a list.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_filter_rule_added(pattern: &str, is_include: bool, applicability: Applicability) {
    tracing::debug!(
        target: RULES_TARGET,
        pattern = %pattern,
        is_include = is_include,
        applicability = %applicability,
        "filter_rule_added"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_filter_rule_added(_pattern: &str, _is_include: bool, _applicability: Applicability) {}

/// Traces evaluation of a leaf name against one rule.
///
/// # Arguments
///
/// * `leaf` - The leaf name being tested (e.g. "test.tmp")
/// * `rule_pattern` - The pattern being tested against the leaf
/// * `is_include` - Whether this is an include rule
/// * `matched` - Whether the rule matched
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_filter_evaluate(leaf: &str, rule_pattern: &str, is_include: bool, matched: bool) {
    tracing::trace!(
        target: FILTER_TARGET,
        leaf = %leaf,
        rule_pattern = %rule_pattern,
        is_include = is_include,
        matched = matched,
        "filter_evaluate"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_filter_evaluate(_leaf: &str, _rule_pattern: &str, _is_include: bool, _matched: bool) {}

/// Traces the final decision for a path.
///
/// `matching_rule` is the pattern of the deciding rule, or `None` when the
/// list default applied.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_filter_decision(path: &str, included: bool, matching_rule: Option<&str>) {
    tracing::debug!(
        target: FILTER_TARGET,
        path = %path,
        included = included,
        matching_rule = ?matching_rule,
        "filter_decision"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_filter_decision(_path: &str, _included: bool, _matching_rule: Option<&str>) {}

/// Traces a batch of rules loaded from text or a file.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_rules_loaded(source: &str, rule_count: usize) {
    tracing::info!(
        target: RULES_TARGET,
        source = %source,
        rule_count = rule_count,
        "rules_loaded"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_rules_loaded(_source: &str, _rule_count: usize) {}

/// Traces aggregate statistics for a batch of evaluations.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_filter_summary(
    total_evaluated: usize,
    total_included: usize,
    total_excluded: usize,
    total_defaulted: usize,
) {
    tracing::info!(
        target: FILTER_TARGET,
        total_evaluated = total_evaluated,
        total_included = total_included,
        total_excluded = total_excluded,
        total_defaulted = total_defaulted,
        "filter_summary"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_filter_summary(
    _total_evaluated: usize,
    _total_included: usize,
    _total_excluded: usize,
    _total_defaulted: usize,
) {
}

// ============================================================================
// FilterTracer - aggregates statistics across evaluations
// ============================================================================

/// Aggregates statistics across a batch of evaluations.
///
/// # Examples
///
/// ```
/// # use filters::{EntryKind, FilterList, FilterPattern};
/// # use filters::debug_filter::FilterTracer;
/// let list = FilterList::from_rules([FilterPattern::exclude("*.tmp")]);
/// let mut tracer = FilterTracer::new();
///
/// for path in ["a.tmp", "b.txt", "c.txt"] {
///     tracer.record_evaluation(&list.evaluate(path, EntryKind::File)?);
/// }
///
/// tracer.summary();
/// assert_eq!(tracer.total_evaluated(), 3);
/// assert_eq!(tracer.total_included(), 2);
/// assert_eq!(tracer.total_excluded(), 1);
/// assert_eq!(tracer.total_defaulted(), 2);
/// # Ok::<(), filters::FilterError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterTracer {
    total_evaluated: usize,
    total_included: usize,
    total_excluded: usize,
    total_defaulted: usize,
}

impl FilterTracer {
    /// Creates a tracer with zero counts.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total_evaluated: 0,
            total_included: 0,
            total_excluded: 0,
            total_defaulted: 0,
        }
    }

    /// Records one evaluation result.
    pub fn record_evaluation(&mut self, decision: &Decision) {
        self.total_evaluated += 1;
        if decision.is_included() {
            self.total_included += 1;
        } else {
            self.total_excluded += 1;
        }
        if decision.is_default() {
            self.total_defaulted += 1;
        }
    }

    /// Emits a summary trace event with the accumulated counts.
    pub fn summary(&self) {
        trace_filter_summary(
            self.total_evaluated,
            self.total_included,
            self.total_excluded,
            self.total_defaulted,
        );
    }

    /// Returns the total number of paths evaluated.
    #[must_use]
    pub const fn total_evaluated(&self) -> usize {
        self.total_evaluated
    }

    /// Returns the number of paths included.
    #[must_use]
    pub const fn total_included(&self) -> usize {
        self.total_included
    }

    /// Returns the number of paths excluded.
    #[must_use]
    pub const fn total_excluded(&self) -> usize {
        self.total_excluded
    }

    /// Returns the number of paths no rule matched.
    #[must_use]
    pub const fn total_defaulted(&self) -> usize {
        self.total_defaulted
    }
}
