//! HTML mapping for the exercise view model.
//!
//! The view model is UI-neutral; this module is the single place deciding
//! how it becomes markup. Visual states map one-to-one onto container
//! classes, blank grades onto input border colors.

use lacuna_core::{BlankGrade, CheckReport, ExerciseView, Inline, Submission, ViewNode};

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2em auto; max-width: 48em; }\n\
.exercise { margin-bottom: 2em; }\n\
.container { padding: 0.75em; border: 2px solid transparent; line-height: 2; }\n\
.container.notverified { border-color: #cccccc; }\n\
.container.correct { border-color: green; }\n\
.container.almost { border-color: orange; }\n\
.container.incorrect { border-color: red; }\n\
.input-field { min-width: 2ch; }\n\
.message { margin-top: 0.5em; }\n\
.authors { color: #555555; font-size: 0.9em; }\n\
.error { color: red; }";

/// Escape text for interpolation into element content or double-quoted
/// attribute values.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn inline_html(runs: &[Inline]) -> String {
    runs.iter()
        .map(|run| match run {
            Inline::Text(text) => escape(text),
            Inline::LineBreak => "<br>".to_string(),
        })
        .collect()
}

/// Border color marker per grade; an empty blank gets none.
fn border_color(grade: BlankGrade) -> Option<&'static str> {
    match grade {
        BlankGrade::Exact => Some("green"),
        BlankGrade::Close => Some("orange"),
        BlankGrade::Wrong => Some("red"),
        BlankGrade::Empty => None,
    }
}

/// Render one exercise as an article. With a report, the submitted values
/// are echoed back and the grading markers applied; without one the
/// exercise renders in its unverified state.
pub fn exercise_article(
    view: &ExerciseView,
    report: Option<&CheckReport>,
    submission: Option<&Submission>,
) -> String {
    let state = report.map_or(view.state, |r| r.state);
    let feedback = report.map_or(view.feedback.as_str(), |r| r.message);

    let mut body = String::new();
    for node in &view.body {
        match node {
            ViewNode::Literal(runs) => body.push_str(&inline_html(runs)),
            ViewNode::Input(input) => {
                let value = submission.map_or("", |s| s.value(&input.key));
                let mut style = format!("width: {}ch", input.width_ch);
                if let Some(color) = report
                    .and_then(|r| r.grade_of(&input.key))
                    .and_then(border_color)
                {
                    style.push_str("; border-color: ");
                    style.push_str(color);
                }
                body.push_str(&format!(
                    "<input type=\"text\" class=\"input-field\" name=\"{}\" value=\"{}\" style=\"{}\">",
                    escape(&input.key.field_name()),
                    escape(value),
                    style,
                ));
            }
        }
    }

    format!(
        "<article class=\"exercise\">\n\
         <h2>{title}</h2>\n\
         <p>{statement}</p>\n\
         <form method=\"post\" action=\"/exercises/{id}/check\">\n\
         <div class=\"container {class}\">{body}</div>\n\
         <button type=\"submit\">{submit}</button>\n\
         </form>\n\
         <div class=\"message\">{feedback}</div>\n\
         <p class=\"authors\">{authors}</p>\n\
         </article>",
        title = escape(&view.title),
        statement = inline_html(&view.statement),
        id = escape(&view.exercise_id),
        class = state.class_name(),
        body = body,
        submit = escape(view.submit_label),
        feedback = escape(feedback),
        authors = escape(&view.authors_line),
    )
}

/// Wrap rendered articles in the page skeleton.
pub fn page(title: &str, content: &str) -> String {
    format!(
        "<!doctype html>\n\
         <html lang=\"fr\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{}</title>\n\
         <style>{}</style>\n\
         </head>\n\
         <body>\n\
         <div id=\"exercise-container\">\n{}\n</div>\n\
         </body>\n\
         </html>",
        escape(title),
        STYLE,
        content,
    )
}

/// Page shown when a request fails.
pub fn error_page(message: &str) -> String {
    page(
        "Erreur",
        &format!("<p class=\"error\">{}</p>", escape(message)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lacuna_core::{BlankKey, Exercise, ExerciseDefinition};

    fn exercise() -> Exercise {
        Exercise::new(ExerciseDefinition {
            id: Some("geo-1".to_string()),
            title: Some("Capitales".to_string()),
            text_with_blanks: "La France : rep{Paris}.".to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }

    #[test]
    fn unverified_article_has_no_markers() {
        let html = exercise_article(&exercise().render(), None, None);
        assert!(html.contains("class=\"container notverified\""));
        assert!(html.contains("name=\"blank-geo-1-1\""));
        assert!(html.contains("width: 5ch"));
        assert!(!html.contains("border-color"));
        assert!(html.contains("action=\"/exercises/geo-1/check\""));
        assert!(html.contains("<div class=\"message\"></div>"));
    }

    #[test]
    fn report_applies_state_and_markers() {
        let exercise = exercise();
        let mut submission = Submission::new();
        submission.insert(BlankKey::new("geo-1", 1).field_name(), "paris");
        let report = exercise.check(&submission);

        let html = exercise_article(&exercise.render(), Some(&report), Some(&submission));
        assert!(html.contains("class=\"container almost\""));
        assert!(html.contains("border-color: orange"));
        assert!(html.contains("value=\"paris\""));
        assert!(html.contains(lacuna_core::MSG_MIXED_SUCCESS));
    }

    #[test]
    fn error_page_contains_message() {
        let html = error_page("la source est indisponible");
        assert!(html.contains("la source est indisponible"));
        assert!(html.contains("class=\"error\""));
    }
}
