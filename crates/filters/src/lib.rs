#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `filters` provides ordered include/exclude rule evaluation over wildcard
//! leaf patterns. A directory walker hands each candidate path, together with
//! whether it is a file or a directory, to a [`FilterList`]; the list answers
//! whether the candidate is included.
//!
//! # Design
//!
//! - [`FilterPattern`] pairs a [`Polarity`] (`Include`/`Exclude`) with a
//!   compiled [`wildcard::Pattern`] and an [`Applicability`] scope (files,
//!   directories, or both). Its queries return a [`RuleVerdict`] so "this rule
//!   does not apply" stays distinct from "this rule says no".
//! - [`FilterList`] holds rules in insertion order and a [`DefaultDecision`]
//!   for paths no rule matches. Evaluation yields a [`Decision`] recording which
//!   rule decided.
//! - [`parse_rules`] and [`FilterListConfig`] load lists from rule text and
//!   from serialized project configuration.
//!
//! # Invariants
//!
//! - Only the last path component is matched. `"*.tmp"` does not match
//!   `"cache.tmp/data.bin"`.
//! - Rules are applied in definition order. The first matching rule wins;
//!   later rules are never consulted for that path.
//! - A rule whose scope rejects the candidate's kind does not match, and
//!   evaluation falls through to the next rule.
//! - Lists are never mutated by queries and are `Send + Sync`.
//!
//! # Errors
//!
//! Queries return [`FilterError::EmptyPath`] for an empty candidate path.
//! Parsing reports [`ParseError`] with the offending line, and
//! [`read_rules`] reports I/O failures as [`FilterError::Io`]. A pattern that
//! does not match is never an error.
//!
//! # Examples
//!
//! Exclude scratch files and build directories, keep everything else:
//!
//! ```
//! use filters::{EntryKind, FilterList, parse_rules};
//!
//! let list: FilterList = parse_rules("- *.tmp\n- target/\n+ *\n")?.into_iter().collect();
//!
//! assert!(list.allows("src/main.rs", EntryKind::File)?);
//! assert!(!list.allows("notes.TMP", EntryKind::File)?);
//! assert!(!list.allows("crate/target", EntryKind::Directory)?);
//! assert!(list.allows("docs/target", EntryKind::File)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # See also
//!
//! - [`wildcard`] for the matching primitives used internally.
//! - `logging` for the verbosity model behind [`debug_filter`].

mod applicability;
mod config;
pub mod debug_filter;
mod decision;
mod error;
mod list;
mod parse;
mod polarity;
mod rule;
mod verdict;

pub use applicability::{Applicability, EntryKind};
pub use config::FilterListConfig;
pub use decision::{Decision, DefaultDecision};
pub use error::{FilterError, ParseError, ParseErrorKind};
pub use list::FilterList;
pub use parse::{parse_rule, parse_rules, read_rules};
pub use polarity::Polarity;
pub use rule::FilterPattern;
pub use verdict::RuleVerdict;
pub use wildcard::Pattern;
