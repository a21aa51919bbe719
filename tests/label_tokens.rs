//! Label token parsing tests - pattern matching, lookups, increment

mod common;

use common::{offset_of, sample_note};
use superset::label::{find_tokens, token_at, token_intersecting};
use superset::{LabelToken, Span};

// ========================================================================
// Pattern matching
// ========================================================================

#[test]
fn test_finds_token_at_line_start() {
    let tokens = find_tokens("A1. Squats");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].letter, 'A');
    assert_eq!(tokens[0].number, 1);
    assert_eq!(tokens[0].range, Span::new(0, 4));
}

#[test]
fn test_finds_all_tokens_in_sample_note() {
    let note = sample_note();
    let tokens = find_tokens(&note);
    let labels: Vec<String> = tokens.iter().map(LabelToken::text).collect();
    assert_eq!(labels, vec!["A1. ", "A2. ", "B1. ", "B2. "]);

    for token in &tokens {
        assert!(
            token.range.start == 0 || note.as_bytes()[token.range.start - 1] == b'\n',
            "token {:?} does not start a line",
            token
        );
    }
}

#[test]
fn test_rejected_shapes() {
    assert!(find_tokens("A0. x").is_empty());
    assert!(find_tokens("AA1. x").is_empty());
    assert!(find_tokens("a1. x").is_empty());
    assert!(find_tokens("A1.NoSpace").is_empty());
    assert!(find_tokens("mid-line A1. x").is_empty());
}

#[test]
fn test_large_number() {
    let tokens = find_tokens("Z99. x");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].letter, 'Z');
    assert_eq!(tokens[0].number, 99);
}

#[test]
fn test_rescan_is_deterministic() {
    let note = sample_note();
    assert_eq!(find_tokens(&note), find_tokens(&note));
}

// ========================================================================
// Next label calculation
// ========================================================================

#[test]
fn test_next_label_increments_number() {
    let next = LabelToken::new('A', 9).next();
    assert_eq!(next.letter, 'A');
    assert_eq!(next.number, 10);
    assert_eq!(next.text(), "A10. ");
}

#[test]
fn test_next_label_preserves_letter() {
    let next = LabelToken::new('C', 3).next();
    assert_eq!(next.letter, 'C');
    assert_eq!(next.number, 4);
}

// ========================================================================
// Lookups
// ========================================================================

#[test]
fn test_token_at_offset() {
    let note = sample_note();
    let tokens = find_tokens(&note);
    let a1 = offset_of(&note, "A1. ");

    let hit = token_at(a1 + 2, &tokens).expect("inside A1");
    assert_eq!(hit.text(), "A1. ");
    // End of the token range is exclusive
    assert!(token_at(a1 + 4, &tokens).is_none());
}

#[test]
fn test_token_intersecting_range() {
    let note = sample_note();
    let tokens = find_tokens(&note);
    let b1 = offset_of(&note, "B1. ");

    let hit = token_intersecting(Span::new(b1 + 3, b1 + 8), &tokens).expect("overlaps B1");
    assert_eq!(hit.text(), "B1. ");
    assert!(token_intersecting(Span::new(b1 + 4, b1 + 8), &tokens).is_none());
}
