#![no_main]

//! Fuzz target for rule text parsing.
//!
//! Arbitrary text must either parse or be rejected with a `ParseError`.
//! Every rule that parses must render back through `to_rule_text` to text
//! that parses to the same rule.

use filters::{FilterPattern, parse_rules};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let Ok(rules) = parse_rules(text) else {
        return;
    };

    for rule in rules {
        // Parsed patterns are never empty, padded or slash-terminated, so the
        // rule always renders to text that reads back identically.
        let text = rule.to_rule_text().expect("parsed rule is representable");
        let reparsed: FilterPattern = text.parse().expect("rendered rule parses");
        assert_eq!(reparsed, rule);
    }
});
