//! Per-character case folding used for ordinal case-insensitive comparison.

/// Folds `c` to the form used for comparison.
///
/// Characters fold to their uppercase form. ASCII takes the fast path. Other
/// characters use their uppercase mapping only when it is a single character,
/// so folding never changes the length of a string and `?` keeps meaning "one
/// character". `ı` and `i` both fold to `I`; `ς` and `σ` both fold to `Σ`.
#[inline]
pub(crate) fn fold_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_uppercase();
    }
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

/// Folds every character of `text` into a freshly allocated buffer.
pub(crate) fn fold_chars(text: &str) -> Vec<char> {
    text.chars().map(fold_char).collect()
}
