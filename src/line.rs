//! Line boundary utilities over byte offsets.
//!
//! Lines are terminated by `'\n'`; line spans exclude the terminator. An
//! offset sitting on a `'\n'` byte belongs to the line that newline
//! terminates, and the offset immediately after it belongs to the
//! following line.

use memchr::{memchr, memrchr};

use crate::label;
use crate::span::Span;

/// A single line with its content and byte span (excluding the terminator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineInfo<'a> {
    pub content: &'a str,
    pub range: Span,
}

/// The span of the line containing `offset`, excluding the terminator.
/// Out-of-bounds offsets are clamped to the end of the text.
pub fn line_span(offset: usize, text: &str) -> Span {
    let offset = offset.min(text.len());
    let bytes = text.as_bytes();
    let start = memrchr(b'\n', &bytes[..offset]).map_or(0, |i| i + 1);
    let end = memchr(b'\n', &bytes[offset..]).map_or(text.len(), |i| offset + i);
    Span::new(start, end)
}

/// The content of the line containing `offset`, excluding the terminator.
pub fn line_content(offset: usize, text: &str) -> &str {
    let span = line_span(offset, text);
    &text[span.start..span.end]
}

/// True at the very end of the text or on a line terminator.
pub fn is_at_end_of_line(offset: usize, text: &str) -> bool {
    if offset >= text.len() {
        return offset == text.len();
    }
    text.as_bytes()[offset] == b'\n'
}

/// Whether `line` is exactly one label token at the start of the line,
/// followed by nothing but whitespace.
pub fn is_label_only_line(line: &str) -> bool {
    let tokens = label::find_tokens(line);
    let Some(token) = tokens.first() else {
        return false;
    };
    if token.range.start != 0 {
        return false;
    }
    line[token.range.end..].trim().is_empty()
}

/// Enumerate all lines of `text` with their byte spans, in order.
pub fn line_infos(text: &str) -> Vec<LineInfo<'_>> {
    let mut lines = Vec::new();
    let mut start = 0;
    for segment in text.split_inclusive('\n') {
        let end = start + segment.len();
        let content_end = if segment.ends_with('\n') { end - 1 } else { end };
        lines.push(LineInfo {
            content: &text[start..content_end],
            range: Span::new(start, content_end),
        });
        start = end;
    }
    lines
}
