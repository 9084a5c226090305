//! The canonical form of a tag, and how it renders.

use serde_json::Value;

use crate::attrs::Attributes;
use crate::error::{MarkupError, Result};

/// Multi-line text control; never rendered self-closed.
pub const TEXTAREA: &str = "textarea";

/// A normalized tag, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor {
    /// Tag name.
    pub tag: String,
    /// Attributes in render order. Never contains `text`.
    pub attrs: Attributes,
    /// Text segments, joined with newlines when rendered.
    pub text: Vec<String>,
    /// Whether a nested-content producer was supplied.
    pub has_children: bool,
}

impl Descriptor {
    /// Splits the `text` attribute off `attrs` and builds the descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::TextType`] when `text` holds anything other
    /// than a string or a list of strings.
    pub fn new(tag: &str, mut attrs: Attributes, has_children: bool) -> Result<Self> {
        let mut text = take_text(tag, &mut attrs)?;
        if tag == TEXTAREA && text.is_empty() && !has_children {
            text.push(String::new());
        }
        Ok(Self {
            tag: tag.to_string(),
            attrs,
            text,
            has_children,
        })
    }

    /// `<tag attrs>`
    pub fn open(&self) -> String {
        format!("<{}{}>", self.tag, self.attrs.to_html())
    }

    /// `</tag>`
    pub fn close(&self) -> String {
        format!("</{}>", self.tag)
    }

    /// `<tag attrs />`
    pub fn self_closing(&self) -> String {
        format!("<{}{} />", self.tag, self.attrs.to_html())
    }

    /// `<tag attrs>text</tag>`
    pub fn with_text(&self) -> String {
        format!("{}{}{}", self.open(), self.text.join("\n"), self.close())
    }
}

fn take_text(tag: &str, attrs: &mut Attributes) -> Result<Vec<String>> {
    match attrs.remove("text") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::String(text)) => Ok(vec![text]),
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                Value::String(text) => Ok(text),
                other => Err(text_type(tag, &format!("a list containing {}", kind(&other)))),
            })
            .collect(),
        Some(other) => Err(text_type(tag, kind(&other))),
    }
}

fn text_type(tag: &str, found: &str) -> MarkupError {
    MarkupError::TextType {
        tag: tag.to_string(),
        found: found.to_string(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
