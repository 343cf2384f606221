//! Core fill-in-the-blank exercise library shared by the backend.
//!
//! Provides:
//! - Parser for the `rep{...}` blank marker template format
//! - Exercise construction with wire-format defaults and a fixed answer key
//! - UI-neutral view-model rendering
//! - Answer grading (per-blank and aggregate classification)

pub mod catalog;
pub mod error;
pub mod exercise;
pub mod grading;
pub mod parser;
pub mod types;
pub mod view;

pub use catalog::Catalog;
pub use error::{ExerciseError, Result};
pub use exercise::Exercise;
pub use grading::{
    aggregate_grades, grade_blank, BlankReport, CheckReport, Submission, MSG_ALL_CORRECT,
    MSG_ALL_WRONG, MSG_MIXED_SUCCESS, MSG_UNATTEMPTED,
};
pub use parser::parse_template;
pub use types::{
    AggregateGrade, BlankGrade, BlankKey, ExerciseDefinition, Segment, VisualState,
    DEFAULT_STATEMENT, DEFAULT_TITLE,
};
pub use view::{
    authors_line, format_text, ExerciseView, Inline, InputField, ViewNode, AUTHORS_PREFIX,
    SUBMIT_LABEL,
};
