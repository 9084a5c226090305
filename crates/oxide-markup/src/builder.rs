//! The markup builder.
//!
//! Every tag call goes through the same steps: the arguments are
//! normalized into attributes, a missing value is filled in from the bound
//! data source, a prior label may supply the `id`, and the rendered unit
//! (plus any validation message) is appended to the output buffer.

use std::fmt;

use tracing::{debug, trace, warn};

use crate::args::{normalize, Arg, Args, Normalized};
use crate::attrs::{value_to_string, Attributes};
use crate::config::OutputFormat;
use crate::descriptor::{Descriptor, TEXTAREA};
use crate::error::{MarkupError, Result};
use crate::pretty::pretty_print;
use crate::source::DataSource;

/// Deepest allowed nesting of tag calls.
pub const MAX_DEPTH: usize = 500;

/// Tag name of form controls.
pub const INPUT: &str = "input";

/// Tag name of dropdowns.
pub const SELECT: &str = "select";

/// Tags that receive trailing validation messages.
pub const FIELD_TAGS: [&str; 2] = [INPUT, SELECT];

/// Tag names that render as `<input type="...">` of the same name.
pub const INPUT_LIKE: [&str; 19] = [
    "button",
    "color",
    "date",
    "datetime_local",
    "email",
    "hidden",
    "image",
    "month",
    "number",
    "password",
    "range",
    "reset",
    "search",
    "submit",
    "tel",
    "text",
    "time",
    "url",
    "week",
];

/// Builds markup from a sequence of tag calls.
///
/// A builder owns its output buffer and the names of the labels it has
/// generated. It may borrow a [`DataSource`] and carries an opaque `user`
/// value that it never looks at.
///
/// ```rust
/// use oxide_markup::{attrs, Builder, FormData};
///
/// let data = FormData::new().with("a_button", "Push Me");
/// let mut b = Builder::with_source(&data);
/// b.tag("input", attrs! { "name" => "a_button", "type" => "button" })?;
/// assert_eq!(
///     b.compact(),
///     r#"<input name="a_button" type="button" value="Push Me" />"#
/// );
/// # Ok::<(), oxide_markup::MarkupError>(())
/// ```
pub struct Builder<'a, U = ()> {
    depth: usize,
    out: Vec<String>,
    labels: Vec<String>,
    source: Option<&'a dyn DataSource>,
    user: U,
}

impl<U: fmt::Debug> fmt::Debug for Builder<'_, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("depth", &self.depth)
            .field("out", &self.out)
            .field("labels", &self.labels)
            .field("has_source", &self.source.is_some())
            .field("user", &self.user)
            .finish()
    }
}

impl Default for Builder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Builder<'a> {
    /// Creates a builder with no data source.
    pub fn new() -> Self {
        Self::with_user(None, ())
    }

    /// Creates a builder bound to a data source.
    pub fn with_source(source: &'a dyn DataSource) -> Self {
        Self::with_user(Some(source), ())
    }
}

impl<'a, U> Builder<'a, U> {
    /// Creates a builder with an optional data source and a passthrough value.
    pub fn with_user(source: Option<&'a dyn DataSource>, user: U) -> Self {
        Self {
            depth: 0,
            out: Vec::new(),
            labels: Vec::new(),
            source,
            user,
        }
    }

    /// Creates a builder and immediately runs `content` against it.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `content`.
    pub fn build<F>(source: Option<&'a dyn DataSource>, user: U, content: F) -> Result<Self>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let mut builder = Self::with_user(source, user);
        content(&mut builder)?;
        Ok(builder)
    }

    /// Resets the output, labels and depth, keeping the data source and
    /// the user value.
    pub fn clear(&mut self) -> &mut Self {
        debug!(units = self.out.len(), labels = self.labels.len(), "clearing builder");
        self.depth = 0;
        self.out.clear();
        self.labels.clear();
        self
    }

    /// Returns the rendered units, in order.
    pub fn units(&self) -> &[String] {
        &self.out
    }

    /// Returns the label targets generated so far.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the bound data source.
    pub fn source(&self) -> Option<&'a dyn DataSource> {
        self.source
    }

    /// Returns the passthrough value.
    pub fn user(&self) -> &U {
        &self.user
    }

    /// Concatenates the rendered units.
    pub fn compact(&self) -> String {
        self.out.concat()
    }

    /// Renders the units one per line, indented by nesting.
    pub fn pretty(&self) -> String {
        pretty_print(self.out.as_slice())
    }

    /// Renders the output in the given format.
    pub fn output(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Compact => self.compact(),
            OutputFormat::Pretty => self.pretty(),
        }
    }

    /// Appends a unit of raw text, such as a comment or inline content.
    pub fn raw(&mut self, text: impl Into<String>) {
        self.push(text.into());
    }

    /// Generates a tag with no nested content.
    ///
    /// Names in [`INPUT_LIKE`] become `input` tags with a matching `type`.
    ///
    /// # Errors
    ///
    /// Fails on unrecognized arguments, malformed text, or when nesting is
    /// too deep.
    pub fn tag(&mut self, tag: &str, args: impl Into<Args>) -> Result<()> {
        let (tag, args) = dispatch(tag, args.into());
        self.emit(tag, args, None::<fn(&mut Self) -> Result<()>>)
    }

    /// Generates a tag whose content is produced by `content`.
    ///
    /// `content` runs only when the tag has no text of its own.
    ///
    /// # Errors
    ///
    /// As [`Builder::tag`], plus any error returned by `content`.
    pub fn tag_with<F>(&mut self, tag: &str, args: impl Into<Args>, content: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let (tag, args) = dispatch(tag, args.into());
        self.emit(tag, args, Some(content))
    }

    /// Generates a tag exactly as named, without `input` aliasing.
    ///
    /// # Errors
    ///
    /// As [`Builder::tag`].
    pub fn element(&mut self, tag: &str, args: impl Into<Args>) -> Result<()> {
        self.emit(tag, args.into(), None::<fn(&mut Self) -> Result<()>>)
    }

    /// Generates a tag exactly as named, with nested content.
    ///
    /// # Errors
    ///
    /// As [`Builder::tag_with`].
    pub fn element_with<F>(&mut self, tag: &str, args: impl Into<Args>, content: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.emit(tag, args.into(), Some(content))
    }

    /// Generates an `input` of the given type.
    ///
    /// # Errors
    ///
    /// As [`Builder::tag`].
    pub fn input_like(&mut self, kind: &str, args: impl Into<Args>) -> Result<()> {
        self.element(INPUT, with_type(kind, args.into()))
    }

    fn emit<F>(&mut self, tag: &str, args: Args, content: Option<F>) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        if self.depth >= MAX_DEPTH {
            warn!(tag, depth = self.depth, "nesting limit reached");
            return Err(MarkupError::RecursionOverflow {
                tag: tag.to_string(),
                output: self.out.clone(),
            });
        }

        self.depth += 1;
        let result = self.emit_unit(tag, args, content);
        self.depth -= 1;
        result
    }

    fn emit_unit<F>(&mut self, tag: &str, args: Args, content: Option<F>) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let Normalized { mut attrs, label } = normalize(tag, args)?;
        if let Some(label) = label {
            debug!(tag, field = %label, "registered label");
            self.labels.push(label);
        }

        let name = attrs
            .get("name")
            .filter(|name| !name.is_null())
            .map(|name| value_to_string(name).into_owned());

        if let Some(name) = &name {
            self.bind(tag, name, &mut attrs);
            if tag == INPUT && !attrs.contains_key("id") && self.labels.contains(name) {
                attrs.set("id", name.as_str());
            }
        }

        let annotation = name
            .as_deref()
            .and_then(|name| self.annotation(tag, name))
            .unwrap_or_default();

        let descriptor = Descriptor::new(tag, attrs, content.is_some())?;
        match content {
            _ if !descriptor.text.is_empty() => {
                self.push(format!("{}{annotation}", descriptor.with_text()));
            }
            Some(content) => {
                self.push(descriptor.open());
                content(self)?;
                self.push(format!("{}{annotation}", descriptor.close()));
            }
            None => self.push(format!("{}{annotation}", descriptor.self_closing())),
        }
        Ok(())
    }

    /// Fills in `value` (or `text` for text areas) from the data source.
    fn bind(&self, tag: &str, name: &str, attrs: &mut Attributes) {
        let Some(source) = self.source else {
            return;
        };
        if attrs.get("value").is_some_and(|value| !value.is_null()) {
            return;
        }
        let Some(value) = source.lookup(name) else {
            return;
        };
        if value.is_null() || value.as_str() == Some("") {
            return;
        }

        let key = if tag == TEXTAREA { "text" } else { "value" };
        if !attrs.contains_key(key) {
            debug!(tag, field = name, key, "bound value from data source");
            attrs.set(key, value);
        }
    }

    /// The trailing validation message for a field, if it has one.
    fn annotation(&self, tag: &str, name: &str) -> Option<String> {
        let source = self.source?;
        if !FIELD_TAGS.contains(&tag) {
            return None;
        }
        let message = source.errors_for(name)?.first()?;
        Some(format!("<warn> <-- {message}</warn>"))
    }

    fn push(&mut self, unit: String) {
        trace!(depth = self.depth, unit = %unit, "emitted unit");
        self.out.push(unit);
    }
}

/// Redirects [`INPUT_LIKE`] names to `input`.
fn dispatch(tag: &str, args: Args) -> (&str, Args) {
    if INPUT_LIKE.contains(&tag) {
        (INPUT, with_type(tag, args))
    } else {
        (tag, args)
    }
}

/// Sets `type` in the trailing attribute mapping, adding one if needed.
fn with_type(kind: &str, args: Args) -> Args {
    let mut list = match args {
        Args::Attrs(attrs) => vec![Arg::Attrs(attrs)],
        Args::List(list) => list,
    };
    match list.last_mut() {
        Some(Arg::Attrs(attrs)) => attrs.set("type", kind),
        _ => list.push(Arg::Attrs(Attributes::new().with("type", kind))),
    }
    Args::List(list)
}
