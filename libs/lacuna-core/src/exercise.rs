//! The central exercise abstraction: parse once, render, check.

use std::collections::BTreeMap;

use crate::error::{ExerciseError, Result};
use crate::grading::{aggregate_grades, grade_blank, BlankReport, CheckReport, Submission};
use crate::parser::parse_template;
use crate::types::{
    BlankKey, ExerciseDefinition, Segment, VisualState, DEFAULT_STATEMENT, DEFAULT_TITLE,
};
use crate::view::{authors_line, format_text, ExerciseView, InputField, ViewNode, SUBMIT_LABEL};

/// One fill-in-the-blank exercise.
///
/// Built once from a definition: the template is parsed eagerly and the
/// answer key is fixed at construction. Rendering and checking are pure;
/// no submission state is retained between checks.
#[derive(Debug, Clone)]
pub struct Exercise {
    id: String,
    title: String,
    statement: String,
    notions: Vec<String>,
    authors: Vec<String>,
    segments: Vec<Segment>,
    /// Expected answer per blank, keyed by (exercise id, segment index).
    /// BTreeMap keeps rendering order for iteration.
    answers: BTreeMap<BlankKey, String>,
}

impl Exercise {
    /// Build an exercise, applying defaults for missing optional fields.
    ///
    /// The id is required: it anchors blank identity and later lookup, so
    /// a definition without one is rejected outright.
    pub fn new(definition: ExerciseDefinition) -> Result<Self> {
        let id = definition
            .id
            .filter(|id| !id.trim().is_empty())
            .ok_or(ExerciseError::MissingId)?;

        let segments = parse_template(&definition.text_with_blanks);
        let mut answers = BTreeMap::new();
        for (index, segment) in segments.iter().enumerate() {
            if let Segment::Blank(expected) = segment {
                answers.insert(BlankKey::new(id.clone(), index), expected.clone());
            }
        }

        Ok(Self {
            id,
            title: definition.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            statement: definition
                .statement
                .unwrap_or_else(|| DEFAULT_STATEMENT.to_string()),
            notions: definition.notions,
            authors: definition.authors,
            segments,
            answers,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn notions(&self) -> &[String] {
        &self.notions
    }

    pub fn has_notion(&self, notion: &str) -> bool {
        self.notions.iter().any(|n| n == notion)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of blanks in the template.
    pub fn blank_count(&self) -> usize {
        self.answers.len()
    }

    /// Render the exercise into its view model, starting unverified with
    /// an empty feedback slot.
    pub fn render(&self) -> ExerciseView {
        let mut body = Vec::with_capacity(self.segments.len());
        for (index, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Literal(text) => body.push(ViewNode::Literal(format_text(text))),
                Segment::Blank(expected) => body.push(ViewNode::Input(InputField {
                    key: BlankKey::new(self.id.clone(), index),
                    width_ch: expected.chars().count(),
                })),
            }
        }

        ExerciseView {
            exercise_id: self.id.clone(),
            title: self.title.clone(),
            statement: format_text(&self.statement),
            body,
            submit_label: SUBMIT_LABEL,
            feedback: String::new(),
            state: VisualState::Unverified,
            authors_line: authors_line(&self.authors),
        }
    }

    /// Grade a submission against the answer key.
    ///
    /// Recomputes everything from the submitted values; checking twice
    /// with the same submission yields the same report.
    pub fn check(&self, submission: &Submission) -> CheckReport {
        let mut blanks = Vec::with_capacity(self.answers.len());
        for (key, expected) in &self.answers {
            blanks.push(BlankReport {
                key: key.clone(),
                grade: grade_blank(submission.value(key), expected),
            });
        }

        let grades: Vec<_> = blanks.iter().map(|report| report.grade).collect();
        let (aggregate, message, state) = aggregate_grades(&grades);
        CheckReport {
            blanks,
            aggregate,
            message,
            state,
        }
    }
}
