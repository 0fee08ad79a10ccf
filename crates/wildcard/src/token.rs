use std::fmt;

use crate::fold::fold_char;

/// One element of a compiled wildcard pattern.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Token {
    /// A run of literal characters, stored case-folded.
    Literal(Box<[char]>),
    /// `?`: exactly one arbitrary character.
    AnyOne,
    /// `*`: zero or more arbitrary characters.
    AnyRun,
}

impl Token {
    /// Number of candidate characters this token always consumes.
    #[must_use]
    pub fn fixed_len(&self) -> usize {
        match self {
            Self::Literal(run) => run.len(),
            Self::AnyOne => 1,
            Self::AnyRun => 0,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(run) => run.iter().try_for_each(|c| fmt::Write::write_char(f, *c)),
            Self::AnyOne => f.write_str("?"),
            Self::AnyRun => f.write_str("*"),
        }
    }
}

/// Splits `source` into tokens, folding literals and collapsing `**` runs.
pub(crate) fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut literal = Vec::new();

    for c in source.chars() {
        match c {
            '*' | '?' => {
                if !literal.is_empty() {
                    tokens.push(Token::Literal(std::mem::take(&mut literal).into_boxed_slice()));
                }
                if c == '?' {
                    tokens.push(Token::AnyOne);
                } else if tokens.last() != Some(&Token::AnyRun) {
                    tokens.push(Token::AnyRun);
                }
            }
            _ => literal.push(fold_char(c)),
        }
    }

    if !literal.is_empty() {
        tokens.push(Token::Literal(literal.into_boxed_slice()));
    }

    tokens
}
