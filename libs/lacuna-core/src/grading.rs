//! Answer grading for submitted blanks.

use std::collections::HashMap;

use serde::Serialize;

use crate::types::{AggregateGrade, BlankGrade, BlankKey, VisualState};

/// Feedback shown when no blank was filled in.
pub const MSG_UNATTEMPTED: &str = "Aucune réponse n'a été complétée.";
/// Feedback shown when every blank is exact.
pub const MSG_ALL_CORRECT: &str = "Toutes les réponses sont correctes !";
/// Feedback shown when at least one blank is exact or close.
pub const MSG_MIXED_SUCCESS: &str = "Certaines réponses sont correctes ou presque correctes.";
/// Feedback shown when every attempted blank is wrong.
pub const MSG_ALL_WRONG: &str = "Toutes les réponses sont incorrectes.";

/// User-entered values for one check, keyed by blank field name.
///
/// Nothing persists between checks; each check reads a fresh submission.
#[derive(Debug, Clone, Default)]
pub struct Submission(HashMap<String, String>);

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    /// Raw value entered for a blank; a missing field counts as empty.
    pub fn value(&self, key: &BlankKey) -> &str {
        self.0.get(&key.field_name()).map_or("", String::as_str)
    }
}

impl From<HashMap<String, String>> for Submission {
    fn from(fields: HashMap<String, String>) -> Self {
        Self(fields)
    }
}

/// Grade of one blank, in rendering order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlankReport {
    pub key: BlankKey,
    pub grade: BlankGrade,
}

/// Result of one check action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub blanks: Vec<BlankReport>,
    pub aggregate: AggregateGrade,
    pub message: &'static str,
    pub state: VisualState,
}

impl CheckReport {
    pub fn grade_of(&self, key: &BlankKey) -> Option<BlankGrade> {
        self.blanks
            .iter()
            .find(|report| &report.key == key)
            .map(|report| report.grade)
    }
}

/// Classify one user value against the expected answer.
///
/// The user value is trimmed first; the expected answer is compared as-is
/// (whitespace inside a marker is significant).
pub fn grade_blank(user: &str, expected: &str) -> BlankGrade {
    let user = user.trim();
    if user.is_empty() {
        BlankGrade::Empty
    } else if user == expected {
        BlankGrade::Exact
    } else if user.to_lowercase() == expected.to_lowercase() {
        BlankGrade::Close
    } else {
        BlankGrade::Wrong
    }
}

/// Collapse per-blank grades into the overall verdict, in priority order:
/// unattempted, all correct, mixed success, all wrong.
pub fn aggregate_grades(grades: &[BlankGrade]) -> (AggregateGrade, &'static str, VisualState) {
    if grades.iter().all(|g| *g == BlankGrade::Empty) {
        (
            AggregateGrade::Unattempted,
            MSG_UNATTEMPTED,
            VisualState::Unverified,
        )
    } else if grades.iter().all(|g| *g == BlankGrade::Exact) {
        (
            AggregateGrade::AllCorrect,
            MSG_ALL_CORRECT,
            VisualState::Correct,
        )
    } else if grades
        .iter()
        .any(|g| matches!(g, BlankGrade::Exact | BlankGrade::Close))
    {
        (
            AggregateGrade::MixedSuccess,
            MSG_MIXED_SUCCESS,
            VisualState::Almost,
        )
    } else {
        (
            AggregateGrade::AllWrong,
            MSG_ALL_WRONG,
            VisualState::Incorrect,
        )
    }
}
