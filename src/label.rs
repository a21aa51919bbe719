//! Label token parsing for exercise slots.
//!
//! A label token is a line-start marker like `A1. ` denoting an exercise
//! slot within a superset: one uppercase letter, a number starting at 1, a
//! period, and exactly one space. Tokens are recomputed from the full text
//! after every accepted edit, never mutated in place.

use std::sync::OnceLock;

use regex::Regex;

use crate::span::Span;

/// Line-start label pattern: uppercase letter, positive integer without a
/// leading zero, period, one space.
fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^([A-Z])([1-9][0-9]*)\. ").expect("token pattern compiles"))
}

/// A parsed label token (e.g. `A1. `).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelToken {
    /// Uppercase ASCII letter naming the superset group.
    pub letter: char,
    /// Slot number within the group, starting at 1.
    pub number: u64,
    /// Byte range of the literal `"<letter><number>. "` text.
    /// Always starts at column 0 of its line.
    pub range: Span,
}

impl LabelToken {
    /// A detached token with an empty range, e.g. one produced by [`next`].
    ///
    /// [`next`]: LabelToken::next
    pub const fn new(letter: char, number: u64) -> Self {
        Self {
            letter,
            number,
            range: Span::caret(0),
        }
    }

    /// The literal text this token renders as, including the trailing space.
    pub fn text(&self) -> String {
        format!("{}{}. ", self.letter, self.number)
    }

    /// The next slot in the same superset group: same letter, number + 1.
    pub fn next(&self) -> LabelToken {
        LabelToken::new(self.letter, self.number + 1)
    }
}

/// Find all label tokens in `text`, ordered by ascending start offset.
///
/// Pure and deterministic: the same text always yields the same sequence.
/// A digit run too large for `u64` fails the parse and the candidate is
/// skipped; matching never errors.
pub fn find_tokens(text: &str) -> Vec<LabelToken> {
    token_regex()
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let letter = caps.get(1)?.as_str().chars().next()?;
            let number = caps.get(2)?.as_str().parse().ok()?;
            Some(LabelToken {
                letter,
                number,
                range: Span::new(whole.start(), whole.end()),
            })
        })
        .collect()
}

/// The token whose range contains `offset`, if any.
pub fn token_at(offset: usize, tokens: &[LabelToken]) -> Option<&LabelToken> {
    tokens.iter().find(|token| token.range.contains(offset))
}

/// The first token whose range overlaps `range`, if any.
pub fn token_intersecting(range: Span, tokens: &[LabelToken]) -> Option<&LabelToken> {
    tokens.iter().find(|token| token.range.intersects(range))
}
