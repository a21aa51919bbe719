//! Editing session state machine for label-aware text editing.
//!
//! [`EditSession`] sits between a text-input widget and the document store.
//! The widget proposes every keystroke as `(range, replacement)` before
//! applying it; the session decides whether to accept it verbatim, rewrite
//! it (smart Enter injects the next label), or expand/redirect it (atomic
//! token deletion, mid-token insert redirection), and hands back the
//! resolved cursor. Selection moves without a text edit go through
//! [`adjust_selection`].
//!
//! All special handling is scoped to label-enabled sections; everywhere
//! else the session is a transparent pass-through.
//!
//! [`adjust_selection`]: EditSession::adjust_selection

use crate::label::{self, LabelToken};
use crate::line;
use crate::section::{self, WorkoutSection};
use crate::span::Span;
use crate::style::{self, StyledSpan};

/// How a proposed edit was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditDecision {
    /// Applied exactly as proposed.
    Verbatim,
    /// Newline rewritten to also insert the next label in the superset.
    SmartEnter {
        /// The injected label text, e.g. `"A2. "`.
        label: String,
    },
    /// Deletion expanded to remove every intersecting label token whole.
    ExpandedDeletion {
        /// The full range that was deleted.
        removed: Span,
    },
    /// Insertion redirected past the label token the caret was inside.
    RedirectedInsert {
        /// Where the replacement actually landed (the token end).
        at: usize,
    },
    /// Malformed range or re-entrant call; nothing changed.
    Rejected,
}

/// Result of [`EditSession::propose_edit`].
///
/// The accepted text itself is read from [`EditSession::text`] after the
/// call; the outcome carries what was decided and where the cursor goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    pub decision: EditDecision,
    /// Cursor/selection after the edit. Collapsed for every decision except
    /// `Rejected`, which echoes the proposed range back unchanged.
    pub cursor: Span,
}

/// Per-document editing session.
///
/// Owns a copy of the document text and a token cache recomputed on every
/// accepted mutation. The session never persists anything; the external
/// store owns the document and is handed the new text after each edit.
#[derive(Debug, Clone)]
pub struct EditSession {
    text: String,
    cached_tokens: Vec<LabelToken>,
    /// Set while the session is resolving its own rewrite, so that change
    /// notifications echoing that rewrite are not treated as new user edits.
    programmatic_update: bool,
}

impl EditSession {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cached_tokens = label::find_tokens(&text);
        Self {
            text,
            cached_tokens,
            programmatic_update: false,
        }
    }

    /// The current document text (the accepted text after an edit).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// All label tokens in the current text, in document order.
    pub fn tokens(&self) -> &[LabelToken] {
        &self.cached_tokens
    }

    /// The section governing `offset`, if any header precedes it.
    pub fn current_section(&self, offset: usize) -> Option<WorkoutSection> {
        section::current_section(offset, &self.text)
    }

    /// Whether a rewrite is currently being resolved. A change notification
    /// observed while this is set is an echo of the session's own mutation.
    pub fn is_programmatic_update(&self) -> bool {
        self.programmatic_update
    }

    /// Classify the current text into styled spans (see [`style::classify`]).
    pub fn classify(&self) -> Vec<StyledSpan> {
        style::classify(&self.text)
    }

    /// Decide a proposed edit and apply the resolved mutation.
    ///
    /// The pipeline is evaluated in order, short-circuiting: pass-through
    /// outside label-enabled sections, smart Enter, atomic deletion,
    /// mid-token insert redirection, verbatim accept. Malformed ranges
    /// (out of bounds, inverted, or splitting a UTF-8 character) are a
    /// no-op: the text is untouched and the proposed range echoes back.
    pub fn propose_edit(&mut self, range: Span, replacement: &str) -> EditOutcome {
        if self.programmatic_update {
            tracing::debug!("propose_edit re-entered while resolving a rewrite, ignoring");
            return EditOutcome {
                decision: EditDecision::Rejected,
                cursor: range,
            };
        }
        if !range.is_valid_for(&self.text) {
            tracing::warn!(
                start = range.start,
                end = range.end,
                len = self.text.len(),
                "malformed edit range, treating as no-op"
            );
            return EditOutcome {
                decision: EditDecision::Rejected,
                cursor: range,
            };
        }

        self.programmatic_update = true;
        let outcome = self.resolve_edit(range, replacement);
        self.programmatic_update = false;
        outcome
    }

    fn resolve_edit(&mut self, range: Span, replacement: &str) -> EditOutcome {
        // No special handling anywhere outside label-enabled sections.
        if !section::labels_enabled(range.start, &self.text) {
            return self.apply_verbatim(range, replacement);
        }

        // Smart Enter at the end of a line.
        if replacement == "\n" && line::is_at_end_of_line(range.start, &self.text) {
            return self.smart_enter(range);
        }

        // Atomic deletion: a delete touching a token removes it whole.
        if replacement.is_empty() && !range.is_empty() {
            let tokens = self.active_tokens();
            return self.atomic_delete(range, &tokens);
        }

        // Typing with the caret strictly inside a token lands after it.
        let tokens = self.active_tokens();
        if let Some(token) = label::token_at(range.start, &tokens) {
            if token.range.strictly_contains(range.start) {
                let at = token.range.end;
                return self.redirect_insert(at, replacement);
            }
        }

        self.apply_verbatim(range, replacement)
    }

    /// Enter at the end of a labeled, non-empty line inserts the next label
    /// in the superset. Enter on a bare label (no content after it) is an
    /// intentional exit from the labeled block: plain newline, no new label.
    fn smart_enter(&mut self, range: Span) -> EditOutcome {
        let (line_token, label_only) = {
            let content = line::line_content(range.start, &self.text);
            let tokens = label::find_tokens(content);
            (tokens.first().copied(), line::is_label_only_line(content))
        };

        let Some(line_token) = line_token else {
            return self.apply_verbatim(range, "\n");
        };
        if label_only {
            tracing::debug!(label = %line_token.text(), "enter on bare label, exiting labeled block");
            return self.apply_verbatim(range, "\n");
        }

        let next = line_token.next();
        let inserted = format!("\n{}", next.text());
        self.splice(range, &inserted);
        tracing::debug!(label = %next.text(), "smart enter injected next label");
        EditOutcome {
            decision: EditDecision::SmartEnter { label: next.text() },
            cursor: Span::caret(range.start + inserted.len()),
        }
    }

    /// Expand a deletion to the union of the proposed range and every token
    /// it intersects, so no token is ever left half-deleted.
    fn atomic_delete(&mut self, range: Span, tokens: &[LabelToken]) -> EditOutcome {
        let mut expanded = range;
        let mut touched = 0usize;
        for token in tokens {
            if token.range.intersects(range) {
                expanded = expanded.union(token.range);
                touched += 1;
            }
        }
        if touched == 0 {
            return self.apply_verbatim(range, "");
        }

        self.splice(expanded, "");
        tracing::debug!(
            tokens = touched,
            start = expanded.start,
            end = expanded.end,
            "deletion expanded to whole tokens"
        );
        EditOutcome {
            decision: EditDecision::ExpandedDeletion { removed: expanded },
            cursor: Span::caret(expanded.start),
        }
    }

    fn redirect_insert(&mut self, at: usize, replacement: &str) -> EditOutcome {
        self.splice(Span::caret(at), replacement);
        tracing::debug!(at, "insert redirected past label token");
        EditOutcome {
            decision: EditDecision::RedirectedInsert { at },
            cursor: Span::caret(at + replacement.len()),
        }
    }

    fn apply_verbatim(&mut self, range: Span, replacement: &str) -> EditOutcome {
        self.splice(range, replacement);
        EditOutcome {
            decision: EditDecision::Verbatim,
            cursor: Span::caret(range.start + replacement.len()),
        }
    }

    fn splice(&mut self, range: Span, replacement: &str) {
        self.text.replace_range(range.start..range.end, replacement);
        self.cached_tokens = label::find_tokens(&self.text);
    }

    /// Adjust a selection change that did not come from a text edit
    /// (arrow keys, taps, programmatic moves). Pure: no text mutation.
    ///
    /// A caret landing strictly inside a token snaps to the token end; a
    /// non-empty selection expands to cover every token it partially
    /// intersects. Outside label-enabled sections, and for malformed
    /// ranges, the proposed selection is returned unchanged.
    pub fn adjust_selection(&self, proposed: Span) -> Span {
        if !proposed.is_valid_for(&self.text) {
            return proposed;
        }
        if !section::labels_enabled(proposed.start, &self.text) {
            return proposed;
        }
        let tokens = self.active_tokens();

        if proposed.is_empty() {
            if let Some(token) = label::token_at(proposed.start, &tokens) {
                if token.range.strictly_contains(proposed.start) {
                    return Span::caret(token.range.end);
                }
            }
            return proposed;
        }

        let mut expanded = proposed;
        for token in &tokens {
            let Some(overlap) = token.range.intersection(proposed) else {
                continue;
            };
            // Partial intersection only: a fully selected token needs no expansion.
            if overlap.len() < token.range.len() {
                expanded = expanded.union(token.range);
            }
        }
        expanded
    }

    /// Adopt a text change made by the external store or widget.
    ///
    /// Returns whether the change was adopted. Echoes of the session's own
    /// rewrites are ignored: identical text, or a notification arriving
    /// while a rewrite is still being resolved.
    pub fn sync_text(&mut self, text: &str) -> bool {
        if self.programmatic_update {
            tracing::debug!("ignoring change notification from own rewrite");
            return false;
        }
        if text == self.text {
            return false;
        }
        self.text.clear();
        self.text.push_str(text);
        self.cached_tokens = label::find_tokens(&self.text);
        true
    }

    /// Cached tokens whose own start sits in a label-enabled section.
    /// Tokens typed into other sections get no special treatment.
    fn active_tokens(&self) -> Vec<LabelToken> {
        self.cached_tokens
            .iter()
            .copied()
            .filter(|token| section::labels_enabled(token.range.start, &self.text))
            .collect()
    }
}
