//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use superset::EditSession;

/// Initialize tracing output for a test run (RUST_LOG controls filtering).
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A representative workout note covering every section kind.
pub fn sample_note() -> String {
    [
        "Warm Up",
        "5 min row",
        "",
        "Skill Work",
        "3 sets • rest TBD",
        "A1. Pull-ups",
        "A2. Dips",
        "",
        "Main Work",
        "3 sets • rest 90s",
        "B1. Squats",
        "B2. RDL",
        "",
        "Notes",
        "Felt strong today",
    ]
    .join("\n")
}

/// Session over [`sample_note`].
pub fn sample_session() -> EditSession {
    EditSession::new(sample_note())
}

/// Byte offset of the first occurrence of `needle` in `text`.
pub fn offset_of(text: &str, needle: &str) -> usize {
    text.find(needle)
        .unwrap_or_else(|| panic!("{:?} not found in text", needle))
}

/// Byte offset of the end of the line containing `needle` (before the newline).
pub fn end_of_line_with(text: &str, needle: &str) -> usize {
    let start = offset_of(text, needle);
    text[start..].find('\n').map_or(text.len(), |i| start + i)
}
