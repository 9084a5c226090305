//! Error types for markup generation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while generating markup.
///
/// Every variant aborts the call that raised it. Units appended to the
/// builder before the failing call stay in the buffer.
#[derive(Debug, Error)]
pub enum MarkupError {
    /// The argument bundle matched none of the recognized call shapes.
    #[error("unrecognized arguments for <{tag}>: {args}")]
    Shape { tag: String, args: String },

    /// A `text` attribute was neither a string nor a list of strings.
    #[error("text for <{tag}> must be a string or a list of strings, got {found}")]
    TextType { tag: String, found: String },

    /// Nesting went past [`MAX_DEPTH`](crate::MAX_DEPTH).
    #[error("looping on <{tag}>, output so far: {output:?}")]
    RecursionOverflow { tag: String, output: Vec<String> },

    /// A data source could not be constructed.
    #[error("invalid data source: {0}")]
    Construction(String),
}

/// Collection of validation messages by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    /// Messages keyed by field name.
    pub errors: HashMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Creates a new empty ValidationErrors.
    pub fn new() -> Self {
        Self {
            errors: HashMap::new(),
        }
    }

    /// Adds a message for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Builder method to add a message.
    #[must_use]
    pub fn with(mut self, field: &str, message: impl Into<String>) -> Self {
        self.add(field, message);
        self
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the messages for a specific field.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }
}

/// Result type alias for markup operations.
pub type Result<T> = std::result::Result<T, MarkupError>;
