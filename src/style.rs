//! Span classification for rendering.
//!
//! [`classify`] partitions text into styled spans consumed by the rendering
//! layer. Spans are emitted in application order: where ranges overlap, a
//! later span overrides an earlier one. The layering is a hard contract —
//! a line that is both a label line and prescription-shaped always renders
//! as a label, never as a prescription line.

use crate::label;
use crate::line;
use crate::section;
use crate::span::Span;

/// What a classified span renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanRole {
    /// Default body text.
    Body,
    /// A sets/rest prescription line, e.g. `3 sets • rest 90s`.
    Prescription,
    /// A section header line, e.g. `Skill Work`.
    Header,
    /// A label token in a label-enabled section, e.g. `A1. `.
    Label,
}

/// A classified range of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledSpan {
    pub range: Span,
    pub role: SpanRole,
}

/// Classify `text` into styled spans, in application order:
/// body (whole text), then prescription lines, then header lines, then
/// label tokens. Later spans win where they overlap earlier ones.
///
/// Prescription styling skips lines that intersect an active label token;
/// label spans are emitted only where labels are enabled at the token start.
pub fn classify(text: &str) -> Vec<StyledSpan> {
    let mut spans = vec![StyledSpan {
        range: Span::new(0, text.len()),
        role: SpanRole::Body,
    }];

    let tokens = label::find_tokens(text);
    let active: Vec<_> = tokens
        .iter()
        .filter(|token| section::labels_enabled(token.range.start, text))
        .collect();

    let lines = line::line_infos(text);

    for info in &lines {
        if !section::is_prescription_line(info.content) {
            continue;
        }
        if active.iter().any(|token| token.range.intersects(info.range)) {
            continue;
        }
        spans.push(StyledSpan {
            range: info.range,
            role: SpanRole::Prescription,
        });
    }

    for info in &lines {
        if section::is_section_header(info.content) {
            spans.push(StyledSpan {
                range: info.range,
                role: SpanRole::Header,
            });
        }
    }

    for token in &active {
        spans.push(StyledSpan {
            range: token.range,
            role: SpanRole::Label,
        });
    }

    spans
}
