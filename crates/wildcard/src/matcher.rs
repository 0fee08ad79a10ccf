//! Reachability matcher over candidate positions.
//!
//! `reach[i]` is true when the tokens processed so far can consume exactly the
//! first `i` candidate characters. Each token rewrites the vector in one pass,
//! so a pattern of `m` characters against a candidate of `n` characters costs
//! `O(m * n)` no matter how the `*` tokens are arranged.

use crate::token::Token;

/// Returns `true` when `tokens` consume all of the folded `candidate`.
pub(crate) fn matches(tokens: &[Token], candidate: &[char]) -> bool {
    let n = candidate.len();
    let mut reach = vec![false; n + 1];
    reach[0] = true;
    let mut next = vec![false; n + 1];

    for token in tokens {
        next.fill(false);
        let mut any = false;

        match token {
            Token::Literal(run) => {
                let len = run.len();
                if len > n {
                    return false;
                }
                for start in 0..=n - len {
                    if reach[start] && candidate[start..start + len] == run[..] {
                        next[start + len] = true;
                        any = true;
                    }
                }
            }
            Token::AnyOne => {
                for start in 0..n {
                    if reach[start] {
                        next[start + 1] = true;
                        any = true;
                    }
                }
            }
            Token::AnyRun => {
                // Everything at or after the first reachable position is reachable.
                if let Some(first) = reach.iter().position(|&r| r) {
                    next[first..].fill(true);
                    any = true;
                }
            }
        }

        if !any {
            return false;
        }
        std::mem::swap(&mut reach, &mut next);
    }

    reach[n]
}
