#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `wildcard` decides whether a single path leaf (a file or directory name)
//! matches a wildcard pattern. Patterns consist of literal characters plus two
//! wildcard tokens:
//!
//! - `*` consumes zero or more arbitrary characters.
//! - `?` consumes exactly one arbitrary character.
//!
//! There is no escape syntax and no character classes; every other character
//! is literal.
//!
//! # Design
//!
//! - [`Pattern`] compiles the source text once into a token sequence of
//!   literal runs, `?` and `*`. Consecutive `*` collapse to a single token and
//!   literal runs are stored case-folded, so matching only folds the candidate.
//! - Matching tracks the set of candidate positions reachable after each
//!   token. A literal run or `?` shifts reachable positions forward; a `*`
//!   extends every reachable position to the end of the candidate. The
//!   candidate matches when its end is reachable after the final token.
//!
//! # Invariants
//!
//! - Matches are anchored at both ends. `"A.BA*"` never matches `"xA.BA"`.
//! - Comparison is ordinal and case-insensitive, character by character. No
//!   locale-aware collation takes place.
//! - An empty pattern matches only the empty candidate. A pattern made only of
//!   `*` matches every candidate, including the empty one.
//! - Matching runs in `O(pattern_len * candidate_len)` time and
//!   `O(candidate_len)` memory regardless of how many `*` the pattern holds.
//!
//! # Errors
//!
//! None. Every string is a valid pattern and a failed match is a plain
//! `false`.
//!
//! # Examples
//!
//! ```
//! use wildcard::{Pattern, wildcard_match};
//!
//! let objects = Pattern::new("*.obj");
//! assert!(objects.is_match("main.OBJ"));
//! assert!(objects.is_match(".obj"));
//! assert!(!objects.is_match("main.obj.bak"));
//!
//! assert!(wildcard_match("ABC?.XYZ", "abc1.xyz"));
//! assert!(!wildcard_match("ABC?.XYZ", "ABC.XYZ"));
//! ```
//!
//! # See also
//!
//! - `filters` builds ordered include/exclude rule lists on top of
//!   [`Pattern`].

mod fold;
mod matcher;
mod pattern;
mod token;

pub use pattern::Pattern;
pub use token::Token;

/// Returns `true` when `candidate` fully matches the wildcard `pattern`.
///
/// Convenience wrapper that compiles `pattern` on every call. Callers
/// matching the same pattern repeatedly should build a [`Pattern`] once.
///
/// ```
/// assert!(wildcard::wildcard_match("*", ""));
/// assert!(wildcard::wildcard_match("A.BA*", "a.ba.c"));
/// assert!(!wildcard::wildcard_match("A.BA*", "ba.ba"));
/// ```
#[must_use]
pub fn wildcard_match(pattern: &str, candidate: &str) -> bool {
    Pattern::new(pattern).is_match(candidate)
}
