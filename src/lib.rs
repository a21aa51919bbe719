//! Superset - structured editing core for workout notes
//!
//! This crate provides the label-aware editing logic behind a workout
//! note editor: line-start label tokens (`A1. `, `B2. `, ...) that style,
//! auto-increment, and behave as atomic units inside the sections of a
//! note that support them (Skill Work, Main Work).
//!
//! The core is pure and synchronous. A text-input widget proposes every
//! keystroke through [`EditSession::propose_edit`] before applying it and
//! routes selection moves through [`EditSession::adjust_selection`]; the
//! rendering layer obtains styled spans from [`classify`] and maps them to
//! presentation attributes with a [`Theme`]. Storage, navigation, and the
//! actual rendering live outside this crate.

pub mod label;
pub mod line;
pub mod section;
pub mod session;
pub mod span;
pub mod style;
pub mod theme;

// Re-export commonly used types
pub use label::LabelToken;
pub use section::WorkoutSection;
pub use session::{EditDecision, EditOutcome, EditSession};
pub use span::Span;
pub use style::{classify, SpanRole, StyledSpan};
pub use theme::Theme;
