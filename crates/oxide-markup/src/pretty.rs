//! Re-indentation of rendered output.
//!
//! Units are classified by their text alone, one pattern per kind. The
//! patterns are line-anchored, so a unit spanning several lines is
//! classified by whichever of its lines matches first.

use once_cell::sync::Lazy;
use regex::Regex;

/// First line of pretty output.
pub const BEGIN_MARKER: &str = "<!-- begin generated output -->";

/// Last line of pretty output.
pub const END_MARKER: &str = "<!-- end generated output -->";

/// Indentation added per nesting level.
pub const INDENT: &str = " ";

static CLOSING: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^</.*>$").expect("valid pattern"));
static BALANCED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^<.*</.*>$").expect("valid pattern"));
static SELF_CLOSING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^<.*/>$").expect("valid pattern"));
static OPENING: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^<.*>$").expect("valid pattern"));

/// How a rendered unit affects indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    /// A lone closing tag; dedents before printing.
    Closing,
    /// An opening and a closing tag on one line.
    Balanced,
    /// A self-closing tag.
    SelfClosing,
    /// A lone opening tag; indents after printing.
    Opening,
    /// Anything else.
    Other,
}

/// Classifies a unit, testing the kinds in declaration order.
pub fn classify(unit: &str) -> UnitKind {
    if CLOSING.is_match(unit) {
        UnitKind::Closing
    } else if BALANCED.is_match(unit) {
        UnitKind::Balanced
    } else if SELF_CLOSING.is_match(unit) {
        UnitKind::SelfClosing
    } else if OPENING.is_match(unit) {
        UnitKind::Opening
    } else {
        UnitKind::Other
    }
}

/// Prints each unit on its own line, indented by nesting, between the
/// begin and end markers.
pub fn pretty_print<S: AsRef<str>>(units: &[S]) -> String {
    let mut html = format!("{BEGIN_MARKER}\n");
    let mut indent = 0usize;
    for unit in units {
        let unit = unit.as_ref();
        let kind = classify(unit);
        if kind == UnitKind::Closing {
            indent = indent.saturating_sub(1);
        }
        html.push_str(&INDENT.repeat(indent));
        html.push_str(unit);
        html.push('\n');
        if kind == UnitKind::Opening {
            indent += 1;
        }
    }
    html.push_str(END_MARKER);
    html.push('\n');
    html
}
