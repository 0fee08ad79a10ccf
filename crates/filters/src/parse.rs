//! Rule text parsing.
//!
//! One rule per line:
//!
//! ```text
//! # comment            ; also a comment
//! + *.rs               include rule
//! - *.tmp              exclude rule
//! -d target            directories-only exclude
//! +f Makefile          files-only include
//! +*.txt               no separator: everything after the sign is the pattern
//! -*.my notes          a wildcard right after the sign also starts the pattern
//! exclude,d node_modules
//! - build/             trailing slash = directories only
//! ```
//!
//! Any other text glued to the sign is read as modifier letters, so `+ab c`
//! is rejected as an unknown modifier rather than taken as the pattern `ab c`.

use std::fs;
use std::path::Path;

use crate::debug_filter::trace_rules_loaded;
use crate::{Applicability, FilterError, FilterPattern, ParseError, ParseErrorKind, Polarity};

/// Parses a single line of rule text.
///
/// Returns `Ok(None)` for blank lines and comments (`#` or `;`).
///
/// # Examples
///
/// ```
/// use filters::{Applicability, FilterPattern, parse_rule};
///
/// let rule = parse_rule("- build/").unwrap().unwrap();
/// assert_eq!(rule, FilterPattern::exclude("build").directories_only());
/// assert!(parse_rule("# nothing here").unwrap().is_none());
/// ```
pub fn parse_rule(line: &str) -> Result<Option<FilterPattern>, ParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
        return Ok(None);
    }

    let (head, rest) = match trimmed.split_once(char::is_whitespace) {
        // `+*.my notes`: wildcards never appear among modifiers.
        Some((head, _)) if is_inline_pattern(head) => trimmed.split_at(1),
        Some((head, rest)) => (head, rest.trim_start()),
        // `+*.txt`: a signed rule with no separator carries its pattern inline.
        None if trimmed.len() > 1 && trimmed.starts_with(['+', '-']) => trimmed.split_at(1),
        None => (trimmed, ""),
    };

    let (polarity, modifiers) = split_head(head).ok_or_else(|| {
        ParseError::new(trimmed, ParseErrorKind::UnknownRule(head.to_owned()))
    })?;

    let mut files_only = false;
    let mut dirs_only = false;
    for modifier in modifiers.chars() {
        match modifier {
            'f' => files_only = true,
            'd' => dirs_only = true,
            other => {
                return Err(ParseError::new(
                    trimmed,
                    ParseErrorKind::UnknownModifier(other),
                ));
            }
        }
    }

    let pattern = rest.trim_end_matches('/');
    if pattern.len() != rest.len() {
        dirs_only = true;
    }
    if pattern.is_empty() {
        return Err(ParseError::new(trimmed, ParseErrorKind::MissingPattern));
    }

    let applicability = match (files_only, dirs_only) {
        (true, true) => {
            return Err(ParseError::new(
                trimmed,
                ParseErrorKind::ConflictingModifiers,
            ));
        }
        (true, false) => Applicability::FilesOnly,
        (false, true) => Applicability::DirectoriesOnly,
        (false, false) => Applicability::FilesAndDirectories,
    };

    Ok(Some(FilterPattern::new(polarity, pattern, applicability)))
}

/// A signed head holding a wildcard is the start of an inline pattern.
fn is_inline_pattern(head: &str) -> bool {
    head.starts_with(['+', '-']) && head[1..].contains(['*', '?'])
}

/// Splits `+f`, `-,d`, `include,f` into polarity and modifier letters.
fn split_head(head: &str) -> Option<(Polarity, &str)> {
    if let Some(modifiers) = head.strip_prefix('+') {
        return Some((Polarity::Include, modifiers.strip_prefix(',').unwrap_or(modifiers)));
    }
    if let Some(modifiers) = head.strip_prefix('-') {
        return Some((Polarity::Exclude, modifiers.strip_prefix(',').unwrap_or(modifiers)));
    }

    let (word, modifiers) = head.split_once(',').unwrap_or((head, ""));
    if word.eq_ignore_ascii_case("include") {
        Some((Polarity::Include, modifiers))
    } else if word.eq_ignore_ascii_case("exclude") {
        Some((Polarity::Exclude, modifiers))
    } else {
        None
    }
}

/// Parses multi-line rule text, skipping blanks and comments.
///
/// Errors carry the 1-based line number of the offending rule.
pub fn parse_rules(text: &str) -> Result<Vec<FilterPattern>, ParseError> {
    let mut rules = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if let Some(rule) = parse_rule(line).map_err(|err| err.at_line(index + 1))? {
            rules.push(rule);
        }
    }
    trace_rules_loaded("<text>", rules.len());
    Ok(rules)
}

/// Reads and parses a rules file.
pub fn read_rules(path: impl AsRef<Path>) -> Result<Vec<FilterPattern>, FilterError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| FilterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rules = parse_rules(&text)?;
    trace_rules_loaded(&path.to_string_lossy(), rules.len());
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(line: &str) -> FilterPattern {
        parse_rule(line).unwrap().unwrap()
    }

    fn error_kind(line: &str) -> ParseErrorKind {
        parse_rule(line).unwrap_err().kind().clone()
    }

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        for line in ["", "   ", "# note", "; note", "  # indented"] {
            assert!(parse_rule(line).unwrap().is_none(), "{line:?}");
        }
    }

    #[test]
    fn short_forms() {
        assert_eq!(parsed("+ *.rs"), FilterPattern::include("*.rs"));
        assert_eq!(parsed("- *.tmp"), FilterPattern::exclude("*.tmp"));
        assert_eq!(parsed("-d target"), FilterPattern::exclude("target").directories_only());
        assert_eq!(parsed("+f Makefile"), FilterPattern::include("Makefile").files_only());
        assert_eq!(parsed("-,f *.o"), FilterPattern::exclude("*.o").files_only());
    }

    #[test]
    fn short_form_without_space_is_all_pattern() {
        assert_eq!(parsed("+*.txt"), FilterPattern::include("*.txt"));
        assert_eq!(parsed("-f"), FilterPattern::exclude("f"));
        assert_eq!(parsed("-cache/"), FilterPattern::exclude("cache").directories_only());
    }

    #[test]
    fn wildcard_after_sign_starts_pattern_with_spaces() {
        assert_eq!(parsed("+*.my notes"), FilterPattern::include("*.my notes"));
        assert_eq!(parsed("-?? draft *"), FilterPattern::exclude("?? draft *"));
        assert_eq!(parsed("-f*.o old/"), FilterPattern::exclude("f*.o old").directories_only());
        assert_eq!(error_kind("+ab c"), ParseErrorKind::UnknownModifier('a'));
    }

    #[test]
    fn long_forms() {
        assert_eq!(parsed("include *.rs"), FilterPattern::include("*.rs"));
        assert_eq!(parsed("EXCLUDE *.tmp"), FilterPattern::exclude("*.tmp"));
        assert_eq!(
            parsed("exclude,d node_modules"),
            FilterPattern::exclude("node_modules").directories_only()
        );
    }

    #[test]
    fn trailing_slash_marks_directories() {
        assert_eq!(parsed("- build/"), FilterPattern::exclude("build").directories_only());
        assert_eq!(parsed("-d build/"), FilterPattern::exclude("build").directories_only());
        assert_eq!(parsed("- build//"), FilterPattern::exclude("build").directories_only());
    }

    #[test]
    fn pattern_keeps_inner_whitespace() {
        assert_eq!(parsed("+   My Documents  "), FilterPattern::include("My Documents"));
    }

    #[test]
    fn malformed_rules_are_rejected() {
        assert_eq!(error_kind("+"), ParseErrorKind::MissingPattern);
        assert_eq!(error_kind("- /"), ParseErrorKind::MissingPattern);
        assert_eq!(error_kind("- //"), ParseErrorKind::MissingPattern);
        assert_eq!(error_kind("+x foo"), ParseErrorKind::UnknownModifier('x'));
        assert_eq!(error_kind("-fd foo"), ParseErrorKind::ConflictingModifiers);
        assert_eq!(error_kind("-f foo/"), ParseErrorKind::ConflictingModifiers);
        assert_eq!(
            error_kind("protect foo"),
            ParseErrorKind::UnknownRule("protect".into())
        );
    }

    #[test]
    fn parse_rules_numbers_lines() {
        let err = parse_rules("+ a\n\n# c\n? b\n").unwrap_err();
        assert_eq!(err.line(), Some(4));
        assert_eq!(err.text(), "? b");
    }

    #[test]
    fn parse_rules_preserves_order() {
        let rules = parse_rules("- *.tmp\r\n+ *\r\n").unwrap();
        assert_eq!(rules, vec![FilterPattern::exclude("*.tmp"), FilterPattern::include("*")]);
    }

    #[test]
    fn read_rules_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.rules");
        let err = read_rules(&missing).unwrap_err();
        assert!(matches!(err, FilterError::Io { ref path, .. } if path == &missing));
    }
}
