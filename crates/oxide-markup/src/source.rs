//! Bound data sources.
//!
//! A builder can be bound to a [`DataSource`], from which it fills in the
//! values of named controls and reads their validation messages.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{MarkupError, Result, ValidationErrors};

/// Key under which [`FormData::from_json`] expects validation messages.
pub const ERRORS_KEY: &str = "errors";

/// Field values and validation messages consulted while generating markup.
///
/// The builder only reads from a source; it never mutates it.
pub trait DataSource {
    /// Returns the value of a field, if any.
    fn lookup(&self, field: &str) -> Option<Value>;

    /// Returns the validation messages for a field, if any.
    fn errors_for(&self, field: &str) -> Option<&[String]>;
}

/// An in-memory data source: field values plus their validation errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormData {
    /// Field values by name.
    #[serde(default)]
    pub values: Map<String, Value>,
    /// Validation messages by field name.
    #[serde(default)]
    pub errors: ValidationErrors,
}

impl FormData {
    /// Creates an empty data source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field value.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(field.into(), value.into());
    }

    /// Builder method to set a field value.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(field, value);
        self
    }

    /// Adds a validation message for a field.
    pub fn add_error(&mut self, field: &str, message: impl Into<String>) {
        self.errors.add(field, message);
    }

    /// Builder method to add a validation message.
    #[must_use]
    pub fn with_error(mut self, field: &str, message: impl Into<String>) -> Self {
        self.add_error(field, message);
        self
    }

    /// Builds a data source from a JSON object.
    ///
    /// Every key except `errors` is a field value. The `errors` key must be
    /// present and map field names to lists of messages.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::Construction`] when the document is not an
    /// object, has no `errors` mapping, or the mapping is malformed.
    pub fn from_json(document: Value) -> Result<Self> {
        let Value::Object(mut values) = document else {
            return Err(MarkupError::Construction(
                "expected a JSON object of field values".to_string(),
            ));
        };

        let errors = values.remove(ERRORS_KEY).ok_or_else(|| {
            MarkupError::Construction(format!("missing an `{ERRORS_KEY}` mapping"))
        })?;
        let errors: ValidationErrors = serde_json::from_value(errors).map_err(|e| {
            MarkupError::Construction(format!(
                "`{ERRORS_KEY}` must map field names to lists of messages: {e}"
            ))
        })?;

        Ok(Self { values, errors })
    }
}

impl DataSource for FormData {
    fn lookup(&self, field: &str) -> Option<Value> {
        self.values.get(field).cloned()
    }

    fn errors_for(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field)
    }
}
