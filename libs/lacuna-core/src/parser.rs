//! Template parser for blank-annotated exercise text.
//!
//! # Format
//! ```text
//! La capitale de la France est rep{Paris}.
//! ```
//! Each `rep{...}` marker becomes a blank whose content is the expected
//! answer; everything else is literal text.

use crate::types::Segment;

/// Opening token of a blank marker.
const MARKER_OPEN: &str = "rep{";

/// Parse a template into alternating literal and blank segments.
///
/// The result always starts and ends with a literal segment (possibly
/// empty), so every odd-indexed segment is a blank. Marker content is the
/// shortest run of characters up to the next `}`, which may be empty. An
/// unterminated `rep{` is kept as literal text.
pub fn parse_template(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut rest = text;

    while !rest.is_empty() {
        let Some(open) = rest.find(MARKER_OPEN) else {
            literal.push_str(rest);
            break;
        };
        let after = &rest[open + MARKER_OPEN.len()..];
        let Some(close) = after.find('}') else {
            // No closing brace anywhere after this marker.
            literal.push_str(rest);
            break;
        };

        literal.push_str(&rest[..open]);
        segments.push(Segment::Literal(std::mem::take(&mut literal)));
        segments.push(Segment::Blank(after[..close].to_string()));
        rest = &after[close + 1..];
    }

    segments.push(Segment::Literal(literal));
    segments
}
