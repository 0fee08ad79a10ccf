#![no_main]

//! Fuzz target for list evaluation.
//!
//! Checks that evaluation never panics and that the list's decision agrees
//! with the first rule whose tri-state verdict is decided.

use arbitrary::Arbitrary;
use filters::{Applicability, EntryKind, FilterList, FilterPattern, RuleVerdict};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    rules: Vec<(bool, u8, String)>,
    path: String,
    is_dir: bool,
}

fuzz_target!(|input: Input| {
    let list: FilterList = input
        .rules
        .into_iter()
        .map(|(include, scope, pattern)| {
            let applicability = match scope % 3 {
                0 => Applicability::FilesOnly,
                1 => Applicability::DirectoriesOnly,
                _ => Applicability::FilesAndDirectories,
            };
            FilterPattern::new(include, pattern, applicability)
        })
        .collect();

    let kind = EntryKind::from_is_dir(input.is_dir);
    let Ok(decision) = list.evaluate(&input.path, kind) else {
        assert!(input.path.is_empty());
        return;
    };

    let expected = list
        .iter()
        .map(|rule| rule.includes_path(&input.path, kind).expect("path already validated"))
        .find(|verdict| verdict.is_decided())
        .unwrap_or(RuleVerdict::NotApplicable);

    assert_eq!(decision.is_included(), expected.unwrap_or(true));
});
