//! Core types for fill-in-the-blank exercises.

use serde::{Deserialize, Serialize};

/// Title used when a definition does not provide one.
pub const DEFAULT_TITLE: &str = "Exercice";

/// Statement used when a definition does not provide one.
pub const DEFAULT_STATEMENT: &str = "Compléter les blancs";

/// Exercise record as supplied by a JSON source.
///
/// Field names follow the wire format of existing exercise content
/// (camelCase, `textWithBlanks`). Optional fields fall back to the
/// documented defaults when the exercise is built.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExerciseDefinition {
    pub id: Option<String>,
    pub title: Option<String>,
    pub statement: Option<String>,
    pub text_with_blanks: String,
    pub notions: Vec<String>,
    pub authors: Vec<String>,
}

/// One unit produced by template parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Raw text displayed as-is.
    Literal(String),
    /// A fill-in gap annotated with its expected answer.
    Blank(String),
}

/// Stable identifier for one blank: the owning exercise id plus the
/// segment index within the parsed template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlankKey {
    pub exercise_id: String,
    pub index: usize,
}

impl BlankKey {
    pub fn new(exercise_id: impl Into<String>, index: usize) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            index,
        }
    }

    /// Form field name carried by the rendered input control.
    pub fn field_name(&self) -> String {
        format!("blank-{}-{}", self.exercise_id, self.index)
    }
}

/// Correctness classification of a single blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlankGrade {
    /// Byte-for-byte equal to the expected answer.
    Exact,
    /// Equal ignoring case, but not byte-for-byte.
    Close,
    Wrong,
    /// Nothing entered (after trimming).
    Empty,
}

/// Overall verdict across all blanks in one check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregateGrade {
    Unattempted,
    AllCorrect,
    MixedSuccess,
    AllWrong,
}

/// Visual feedback state of a rendered exercise.
///
/// Exactly one state is active at a time; the presentation layer maps
/// each to a single container class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualState {
    Unverified,
    Correct,
    Almost,
    Incorrect,
}

impl Default for VisualState {
    fn default() -> Self {
        Self::Unverified
    }
}

impl VisualState {
    /// Container class understood by the stylesheet.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Unverified => "notverified",
            Self::Correct => "correct",
            Self::Almost => "almost",
            Self::Incorrect => "incorrect",
        }
    }
}
