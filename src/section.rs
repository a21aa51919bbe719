//! Workout section detection.
//!
//! A note is partitioned into sections by literal header lines (`Warm Up`,
//! `Skill Work`, ...). The section at an offset is found by scanning
//! backward for the nearest preceding header; only Skill Work and Main Work
//! permit label tokens.

use std::sync::OnceLock;

use regex::Regex;

/// The closed set of workout note sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutSection {
    WarmUp,
    Mobility,
    SkillWork,
    MainWork,
    CoolDown,
    Notes,
}

impl WorkoutSection {
    pub const ALL: [WorkoutSection; 6] = [
        WorkoutSection::WarmUp,
        WorkoutSection::Mobility,
        WorkoutSection::SkillWork,
        WorkoutSection::MainWork,
        WorkoutSection::CoolDown,
        WorkoutSection::Notes,
    ];

    /// The fixed lowercase header string identifying this section.
    pub const fn header(&self) -> &'static str {
        match self {
            WorkoutSection::WarmUp => "warm up",
            WorkoutSection::Mobility => "mobility",
            WorkoutSection::SkillWork => "skill work",
            WorkoutSection::MainWork => "main work",
            WorkoutSection::CoolDown => "cool down",
            WorkoutSection::Notes => "notes",
        }
    }

    /// Whether label tokens are active inside this section.
    pub const fn supports_labels(&self) -> bool {
        matches!(self, WorkoutSection::SkillWork | WorkoutSection::MainWork)
    }

    /// Parse a header line. Case-insensitive, surrounding whitespace ignored.
    pub fn from_header_line(line: &str) -> Option<WorkoutSection> {
        let trimmed = line.trim().to_lowercase();
        WorkoutSection::ALL
            .into_iter()
            .find(|section| section.header() == trimmed)
    }
}

/// Prescription line: `3 sets • rest 90s`, `2-3 sets • rest TBD`, ...
fn prescription_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*\d+(?:-\d+)?\s+sets\s*•\s*rest\s+.+$")
            .expect("prescription pattern compiles")
    })
}

/// The section governing `offset`: the nearest header line at or before it.
///
/// Returns `None` when no header precedes the offset (labels disabled,
/// no section styling) or when `offset` is not a valid position in `text`.
pub fn current_section(offset: usize, text: &str) -> Option<WorkoutSection> {
    let before = text.get(..offset)?;
    before.lines().rev().find_map(WorkoutSection::from_header_line)
}

/// Whether label tokens are active at `offset`.
pub fn labels_enabled(offset: usize, text: &str) -> bool {
    current_section(offset, text).is_some_and(|section| section.supports_labels())
}

/// Whether `line` is a section header line.
pub fn is_section_header(line: &str) -> bool {
    WorkoutSection::from_header_line(line).is_some()
}

/// Whether `line` is a sets/rest prescription line.
pub fn is_prescription_line(line: &str) -> bool {
    prescription_regex().is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_skill_work_section() {
        let text = "Warm Up\n\nSkill Work\nA1. Pull-ups";
        let section = current_section(text.len(), text);
        assert_eq!(section, Some(WorkoutSection::SkillWork));
        assert!(labels_enabled(text.len(), text));
    }

    #[test]
    fn test_detects_latest_section() {
        let text = "Skill Work\nA1. Something\n\nMain Work\nB1. Squats";
        assert_eq!(
            current_section(text.len(), text),
            Some(WorkoutSection::MainWork)
        );
    }

    #[test]
    fn test_labels_disabled_in_warm_up() {
        let text = "Warm Up\nSome text";
        assert_eq!(
            current_section(text.len(), text),
            Some(WorkoutSection::WarmUp)
        );
        assert!(!labels_enabled(text.len(), text));
    }

    #[test]
    fn test_no_section_before_any_header() {
        let text = "Free-form notes\nSkill Work\nA1. Pull-ups";
        assert_eq!(current_section(0, text), None);
        assert_eq!(current_section(9, text), None);
        assert!(!labels_enabled(0, text));
    }

    #[test]
    fn test_header_matching_is_case_and_whitespace_insensitive() {
        assert!(is_section_header("  SKILL WORK  "));
        assert!(is_section_header("main work"));
        assert!(is_section_header("Cool Down"));
        assert!(!is_section_header("skill  work")); // internal spacing is literal
        assert!(!is_section_header("skill working"));
    }

    #[test]
    fn test_section_scan_only_sees_text_before_offset() {
        let text = "Skill Work\nA1. Pull-ups";
        // Offset inside the header line itself: only "Skill Wo" is visible
        assert_eq!(current_section(8, text), None);
        assert_eq!(current_section(11, text), Some(WorkoutSection::SkillWork));
    }

    #[test]
    fn test_out_of_bounds_offset_has_no_section() {
        let text = "Skill Work\n";
        assert_eq!(current_section(text.len() + 1, text), None);
    }

    #[test]
    fn test_prescription_lines() {
        assert!(is_prescription_line("3 sets • rest 90s"));
        assert!(is_prescription_line("2-3 sets • rest TBD"));
        assert!(is_prescription_line("  4 sets • rest 2 min"));
        assert!(!is_prescription_line("3 sets"));
        assert!(!is_prescription_line("sets • rest 90s"));
        assert!(!is_prescription_line("A1. 3 sets • rest 90s extra")); // label prefix breaks the shape
    }

    #[test]
    fn test_supports_labels_only_for_work_sections() {
        let with_labels: Vec<_> = WorkoutSection::ALL
            .into_iter()
            .filter(WorkoutSection::supports_labels)
            .collect();
        assert_eq!(
            with_labels,
            vec![WorkoutSection::SkillWork, WorkoutSection::MainWork]
        );
    }
}
