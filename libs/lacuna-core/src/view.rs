//! UI-neutral view model produced by rendering an exercise.
//!
//! The core never touches markup; it emits a node tree that a presentation
//! layer maps deterministically to its own primitives.

use crate::types::{BlankKey, VisualState};

/// Label of the check control.
pub const SUBMIT_LABEL: &str = "Vérifier";

/// Prefix of the authors line.
pub const AUTHORS_PREFIX: &str = "Auteurs : ";

/// Four non-breaking spaces, the rendering of a literal tab.
const TAB_GLYPHS: &str = "\u{a0}\u{a0}\u{a0}\u{a0}";

/// Inline content of a literal run: text interleaved with line breaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    LineBreak,
}

/// A single-line text input sized to its expected answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputField {
    pub key: BlankKey,
    /// Width in character units, the length of the expected answer.
    pub width_ch: usize,
}

/// One node of the rendered exercise body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewNode {
    Literal(Vec<Inline>),
    Input(InputField),
}

/// Complete rendered exercise: title, statement, body, submit control,
/// feedback slot and authors line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseView {
    pub exercise_id: String,
    pub title: String,
    pub statement: Vec<Inline>,
    pub body: Vec<ViewNode>,
    pub submit_label: &'static str,
    /// Feedback message, empty until a check ran.
    pub feedback: String,
    pub state: VisualState,
    pub authors_line: String,
}

/// Expand formatting markers: newlines become explicit line breaks, tabs
/// become four non-breaking spaces.
pub fn format_text(text: &str) -> Vec<Inline> {
    let mut runs = Vec::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            runs.push(Inline::LineBreak);
        }
        if !line.is_empty() {
            runs.push(Inline::Text(line.replace('\t', TAB_GLYPHS)));
        }
    }
    runs
}

/// Authors joined by ", ", or "N/A" when the list is empty.
pub fn authors_line(authors: &[String]) -> String {
    if authors.is_empty() {
        format!("{AUTHORS_PREFIX}N/A")
    } else {
        format!("{AUTHORS_PREFIX}{}", authors.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_text_is_one_run() {
        assert_eq!(
            format_text("bonjour"),
            vec![Inline::Text("bonjour".to_string())]
        );
    }

    #[test]
    fn newlines_become_line_breaks() {
        assert_eq!(
            format_text("un\ndeux"),
            vec![
                Inline::Text("un".to_string()),
                Inline::LineBreak,
                Inline::Text("deux".to_string()),
            ]
        );
    }

    #[test]
    fn consecutive_newlines_keep_every_break() {
        assert_eq!(
            format_text("a\n\nb"),
            vec![
                Inline::Text("a".to_string()),
                Inline::LineBreak,
                Inline::LineBreak,
                Inline::Text("b".to_string()),
            ]
        );
    }

    #[test]
    fn tabs_become_non_breaking_spaces() {
        assert_eq!(
            format_text("\tindenté"),
            vec![Inline::Text(format!("{TAB_GLYPHS}indenté"))]
        );
    }

    #[test]
    fn empty_text_yields_no_runs() {
        assert_eq!(format_text(""), Vec::<Inline>::new());
    }

    #[test]
    fn authors_joined_with_comma() {
        let authors = vec!["Alice".to_string(), "Bob".to_string()];
        assert_eq!(authors_line(&authors), "Auteurs : Alice, Bob");
    }

    #[test]
    fn no_authors_renders_na() {
        assert_eq!(authors_line(&[]), "Auteurs : N/A");
    }
}
