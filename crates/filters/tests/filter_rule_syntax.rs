//! Tests for filter rule text syntax.
//!
//! These tests cover the forms accepted by [`parse_rules`] and
//! [`read_rules`]:
//!
//! 1. Include rules (`+ pattern`, `include pattern`)
//! 2. Exclude rules (`- pattern`, `exclude pattern`)
//! 3. Scope modifiers (`f`, `d`, trailing slash)
//! 4. Comments and blank lines
//! 5. Malformed rules
//! 6. Rule files

use std::fs;

use filters::{
    Applicability, EntryKind, FilterError, FilterList, FilterPattern, ParseErrorKind, Polarity,
    parse_rule, parse_rules, read_rules,
};

// ============================================================================
// 1. Include Rules
// ============================================================================

mod include_rules {
    use super::*;

    #[test]
    fn short_form_include() {
        let rules = parse_rules("+ *.txt").unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].polarity(), Polarity::Include);
        assert_eq!(rules[0].pattern_text(), "*.txt");
    }

    #[test]
    fn short_form_include_no_space() {
        let rules = parse_rules("+*.txt").unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].polarity(), Polarity::Include);
        assert_eq!(rules[0].pattern_text(), "*.txt");
    }

    #[test]
    fn short_form_inline_pattern_with_spaces() {
        let rules = parse_rules("+*.my notes").unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].polarity(), Polarity::Include);
        assert_eq!(rules[0].pattern_text(), "*.my notes");
    }

    #[test]
    fn long_form_include() {
        let rules = parse_rules("include *.txt").unwrap();
        assert_eq!(rules[0].polarity(), Polarity::Include);
        assert_eq!(rules[0].pattern_text(), "*.txt");
    }

    #[test]
    fn long_form_include_case_insensitive() {
        let rules = parse_rules("INCLUDE *.txt").unwrap();
        assert_eq!(rules[0].polarity(), Polarity::Include);
    }
}

// ============================================================================
// 2. Exclude Rules
// ============================================================================

mod exclude_rules {
    use super::*;

    #[test]
    fn short_form_exclude() {
        let rules = parse_rules("- *.bak").unwrap();
        assert_eq!(rules[0].polarity(), Polarity::Exclude);
        assert_eq!(rules[0].pattern_text(), "*.bak");
    }

    #[test]
    fn long_form_exclude() {
        let rules = parse_rules("Exclude *.bak").unwrap();
        assert_eq!(rules[0], FilterPattern::exclude("*.bak"));
    }

    #[test]
    fn pattern_with_spaces() {
        let rules = parse_rules("- Program Files").unwrap();
        assert_eq!(rules[0].pattern_text(), "Program Files");
    }
}

// ============================================================================
// 3. Scope Modifiers
// ============================================================================

mod scope_modifiers {
    use super::*;

    #[test]
    fn files_only_short() {
        let rule = parse_rule("+f *.c").unwrap().unwrap();
        assert_eq!(rule.applicability(), Applicability::FilesOnly);
    }

    #[test]
    fn directories_only_short() {
        let rule = parse_rule("-d .git").unwrap().unwrap();
        assert_eq!(rule.applicability(), Applicability::DirectoriesOnly);
    }

    #[test]
    fn modifiers_after_comma() {
        assert_eq!(
            parse_rule("-,d .git").unwrap().unwrap().applicability(),
            Applicability::DirectoriesOnly
        );
        assert_eq!(
            parse_rule("include,f Makefile").unwrap().unwrap().applicability(),
            Applicability::FilesOnly
        );
    }

    #[test]
    fn trailing_slash_is_directories_only() {
        let rule = parse_rule("- node_modules/").unwrap().unwrap();
        assert_eq!(rule.pattern_text(), "node_modules");
        assert_eq!(rule.applicability(), Applicability::DirectoriesOnly);
    }

    #[test]
    fn no_modifier_covers_both() {
        let rule = parse_rule("- core").unwrap().unwrap();
        assert_eq!(rule.applicability(), Applicability::FilesAndDirectories);
    }

    #[test]
    fn parsed_scopes_drive_evaluation() {
        let list: FilterList = parse_rules("-d build\n-f *.o\n").unwrap().into_iter().collect();

        assert!(!list.allows("build", EntryKind::Directory).unwrap());
        assert!(list.allows("build", EntryKind::File).unwrap());
        assert!(!list.allows("main.o", EntryKind::File).unwrap());
        assert!(list.allows("objects.o", EntryKind::Directory).unwrap());
    }
}

// ============================================================================
// 4. Comments and Blank Lines
// ============================================================================

mod comments {
    use super::*;

    #[test]
    fn comments_and_blanks_are_skipped() {
        let text = "\
# project rules
; legacy comment

- *.tmp

+ *
";
        let rules = parse_rules(text).unwrap();
        assert_eq!(
            rules,
            vec![FilterPattern::exclude("*.tmp"), FilterPattern::include("*")]
        );
    }

    #[test]
    fn only_comments_yields_empty() {
        assert!(parse_rules("# a\n# b\n").unwrap().is_empty());
        assert!(parse_rules("").unwrap().is_empty());
    }

    #[test]
    fn crlf_line_endings() {
        let rules = parse_rules("- *.tmp\r\n+ *.rs\r\n").unwrap();
        assert_eq!(rules[0].pattern_text(), "*.tmp");
        assert_eq!(rules[1].pattern_text(), "*.rs");
    }
}

// ============================================================================
// 5. Malformed Rules
// ============================================================================

mod malformed {
    use super::*;

    #[test]
    fn unknown_rule_word() {
        let err = parse_rules("+ ok\nhide *.o\n").unwrap_err();
        assert_eq!(err.line(), Some(2));
        assert_eq!(err.kind(), &ParseErrorKind::UnknownRule("hide".into()));
        assert_eq!(err.text(), "hide *.o");
    }

    #[test]
    fn unknown_modifier() {
        let err = parse_rules("-s *.o").unwrap_err();
        assert_eq!(err.kind(), &ParseErrorKind::UnknownModifier('s'));
    }

    #[test]
    fn missing_pattern() {
        for line in ["+", "-", "include", "exclude,d", "- /"] {
            let err = parse_rules(line).unwrap_err();
            assert_eq!(err.kind(), &ParseErrorKind::MissingPattern, "{line:?}");
        }
    }

    #[test]
    fn conflicting_scope() {
        let err = parse_rules("+fd x").unwrap_err();
        assert_eq!(err.kind(), &ParseErrorKind::ConflictingModifiers);
    }

    #[test]
    fn error_message_names_line() {
        let err = parse_rules("\n\n+q x").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid filter rule on line 3 '+q x': unknown modifier 'q'"
        );
    }

    #[test]
    fn from_str_rejects_non_rules() {
        assert!("".parse::<FilterPattern>().is_err());
        assert!("? x".parse::<FilterPattern>().is_err());
    }
}

// ============================================================================
// 6. Rule Files
// ============================================================================

mod rule_files {
    use super::*;

    #[test]
    fn read_rules_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".leafrules");
        fs::write(&path, "- *.tmp\n-d target\n+ *\n").unwrap();

        let rules = read_rules(&path).unwrap();
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[1], FilterPattern::exclude("target").directories_only());
    }

    #[test]
    fn read_rules_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_rules(dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, FilterError::Io { .. }));
        assert!(err.to_string().starts_with("failed to read filter rules from"));
    }

    #[test]
    fn read_rules_parse_error_is_wrapped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.rules");
        fs::write(&path, "+ ok\n+x nope\n").unwrap();

        match read_rules(&path).unwrap_err() {
            FilterError::Parse(err) => assert_eq!(err.line(), Some(2)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn exported_rule_text_reloads_identically() {
        let list = FilterList::from_rules([
            FilterPattern::exclude("*.my notes").files_only(),
            FilterPattern::include("keep?").directories_only(),
        ]);
        let text: String = list
            .iter()
            .map(|rule| rule.to_rule_text().unwrap() + "\n")
            .collect();

        let reloaded: FilterList = parse_rules(&text).unwrap().into_iter().collect();
        assert_eq!(reloaded, list);
    }

    #[test]
    fn rendered_rules_reload_identically() {
        let list = FilterList::from_rules([
            FilterPattern::exclude("*.tmp"),
            FilterPattern::include("src").directories_only(),
            FilterPattern::exclude("*.o").files_only(),
            FilterPattern::include("*"),
        ]);
        let text: String = list.iter().map(|rule| format!("{rule}\n")).collect();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules");
        fs::write(&path, text).unwrap();

        let reloaded: FilterList = read_rules(&path).unwrap().into_iter().collect();
        assert_eq!(reloaded, list);
    }
}
