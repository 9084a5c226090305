//! Shortcuts for common form controls.
//!
//! Each shortcut builds the attributes of one or more tags and hands them
//! to [`Builder::element`], so binding, labels and validation messages
//! apply as for any other call.

use serde_json::Value;

use crate::attrs::{value_to_string, Attributes};
use crate::builder::{Builder, INPUT, SELECT};
use crate::error::{MarkupError, Result};

/// Value/label pairs of a choice control, in display order.
pub type Choices<'c> = &'c [(&'c str, &'c str)];

impl<U> Builder<'_, U> {
    /// Generates one checkbox per choice, named `name[1]`, `name[2]`, ...
    ///
    /// A choice is checked when the bound value of `name` contains it: a
    /// comma-separated string, a list of strings, or a mapping whose values
    /// are strings.
    ///
    /// # Errors
    ///
    /// As [`Builder::tag`].
    pub fn checkbox(&mut self, name: &str, opts: &Attributes, choices: Choices<'_>) -> Result<()> {
        let checked = self
            .source()
            .and_then(|source| source.lookup(name))
            .map(|data| checked_values(&data))
            .unwrap_or_default();

        for (n, (value, label)) in choices.iter().enumerate() {
            let mut attrs = opts.clone();
            attrs.set("name", format!("{name}[{}]", n + 1));
            attrs.set("type", "checkbox");
            attrs.set("value", *value);
            attrs.set("text", *label);
            if checked.iter().any(|c| c == value) {
                attrs.set("checked", "true");
            }
            self.element(INPUT, attrs)?;
        }
        Ok(())
    }

    /// Generates one radio button per choice, all named `name`.
    ///
    /// # Errors
    ///
    /// As [`Builder::tag`].
    pub fn radio(&mut self, name: &str, opts: &Attributes, choices: Choices<'_>) -> Result<()> {
        let current = self.bound_str(name);
        for (value, label) in choices {
            let mut attrs = opts.clone();
            attrs.set("name", name);
            attrs.set("type", "radio");
            attrs.set("value", *value);
            attrs.set("text", *label);
            if current.as_deref() == Some(*value) {
                attrs.set("checked", "true");
            }
            self.element(INPUT, attrs)?;
        }
        Ok(())
    }

    /// Generates a dropdown with one option per choice.
    ///
    /// # Errors
    ///
    /// As [`Builder::tag`].
    pub fn select(&mut self, name: &str, opts: &Attributes, choices: Choices<'_>) -> Result<()> {
        let mut attrs = Attributes::new().with("name", name);
        attrs.merge(opts.clone());
        let current = self.bound_str(name);

        self.element_with(SELECT, attrs, |b| {
            for (value, label) in choices {
                let mut option = Attributes::new().with("value", *value);
                if current.as_deref() == Some(*value) {
                    option.set("selected", "true");
                }
                option.set("text", *label);
                b.element("option", option)?;
            }
            Ok(())
        })
    }

    /// Generates a submit button showing `text`.
    ///
    /// # Errors
    ///
    /// As [`Builder::tag`].
    pub fn submit(&mut self, text: &str, opts: &Attributes) -> Result<()> {
        let mut attrs = Attributes::new().with("type", "submit").with("value", text);
        attrs.merge(opts.clone());
        self.element(INPUT, attrs)
    }

    /// Generates a link showing `text`.
    ///
    /// `opts` must contain `href`. Non-empty `params` are appended to it as
    /// a query string, unencoded.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::Shape`] when `opts` has no `href`.
    pub fn link(&mut self, text: &str, opts: &Attributes, params: Choices<'_>) -> Result<()> {
        let mut attrs = opts.clone();
        let href = match attrs.remove("href") {
            Some(href) if !href.is_null() => value_to_string(&href).into_owned(),
            _ => {
                return Err(MarkupError::Shape {
                    tag: "a".to_string(),
                    args: "link options without an href".to_string(),
                })
            }
        };

        let href = if params.is_empty() {
            href
        } else {
            let query: Vec<String> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
            format!("{href}?{}", query.join("&"))
        };
        attrs.set("href", href);
        attrs.set("text", text);
        self.element("a", attrs)
    }

    fn bound_str(&self, name: &str) -> Option<String> {
        match self.source()?.lookup(name)? {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

fn checked_values(data: &Value) -> Vec<String> {
    match data {
        Value::String(s) => s.split(',').map(str::to_string).collect(),
        Value::Array(items) => strings(items.iter()),
        Value::Object(map) => strings(map.values()),
        _ => Vec::new(),
    }
}

fn strings<'v>(values: impl Iterator<Item = &'v Value>) -> Vec<String> {
    values.filter_map(Value::as_str).map(str::to_string).collect()
}
