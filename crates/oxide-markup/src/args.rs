//! Call arguments and their normalization.
//!
//! A tag call takes either a bare attribute mapping or a short positional
//! list. The list is classified by arity and by the variant of each
//! position into one [`Shape`], which then yields the attributes of the tag.

use std::fmt;

use crate::attrs::Attributes;
use crate::error::{MarkupError, Result};

/// Tag name that registers label targets.
pub const LABEL: &str = "label";

/// One positional argument of a tag call.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// A string, used as text content.
    Str(String),
    /// A bare identifier, used as the `name` (or `for`) of the tag.
    Ident(String),
    /// An attribute mapping.
    Attrs(Attributes),
}

impl Arg {
    /// Creates an identifier argument.
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<Attributes> for Arg {
    fn from(attrs: Attributes) -> Self {
        Self::Attrs(attrs)
    }
}

/// The argument bundle of a tag call.
#[derive(Debug, Clone, PartialEq)]
pub enum Args {
    /// A bare attribute mapping.
    Attrs(Attributes),
    /// Positional arguments.
    List(Vec<Arg>),
}

impl Args {
    /// No arguments.
    pub fn none() -> Self {
        Self::List(Vec::new())
    }

    /// A single string, used as text.
    pub fn text(text: impl Into<String>) -> Self {
        Self::List(vec![Arg::Str(text.into())])
    }

    /// A single identifier, used as the name.
    pub fn name(name: impl Into<String>) -> Self {
        Self::List(vec![Arg::Ident(name.into())])
    }

    /// An identifier followed by attributes.
    pub fn named(name: impl Into<String>, attrs: Attributes) -> Self {
        Self::List(vec![Arg::Ident(name.into()), Arg::Attrs(attrs)])
    }

    /// An identifier followed by text. For `label` the identifier becomes
    /// the `for` target.
    pub fn name_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::List(vec![Arg::Ident(name.into()), Arg::Str(text.into())])
    }
}

impl Default for Args {
    fn default() -> Self {
        Self::none()
    }
}

impl From<()> for Args {
    fn from((): ()) -> Self {
        Self::none()
    }
}

impl From<&str> for Args {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for Args {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

impl From<Attributes> for Args {
    fn from(attrs: Attributes) -> Self {
        Self::Attrs(attrs)
    }
}

impl From<Vec<Arg>> for Args {
    fn from(args: Vec<Arg>) -> Self {
        Self::List(args)
    }
}

impl fmt::Display for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attrs(attrs) => write!(f, "{{{}}}", attrs.to_html().trim_start()),
            Self::List(args) => {
                f.write_str("[")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    match arg {
                        Arg::Str(s) => write!(f, "{s:?}")?,
                        Arg::Ident(name) => write!(f, ":{name}")?,
                        Arg::Attrs(attrs) => write!(f, "{{{}}}", attrs.to_html().trim_start())?,
                    }
                }
                f.write_str("]")
            }
        }
    }
}

/// The recognized call shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Attributes only.
    Attrs(Attributes),
    /// No arguments at all.
    Empty,
    /// Text only.
    Text(String),
    /// A name only.
    Name(String),
    /// A name plus attributes.
    NamedAttrs(String, Attributes),
    /// A name plus text.
    NamedText(String, String),
}

impl Shape {
    /// Classifies an argument bundle, handing it back when no shape fits.
    pub fn classify(args: Args) -> std::result::Result<Self, Args> {
        let list = match args {
            Args::Attrs(attrs) => return Ok(Self::Attrs(attrs)),
            Args::List(list) => list,
        };

        let mut iter = list.into_iter();
        match (iter.next(), iter.next(), iter.next()) {
            (None, _, _) => Ok(Self::Empty),
            (Some(Arg::Str(text)), None, _) => Ok(Self::Text(text)),
            (Some(Arg::Ident(name)), None, _) => Ok(Self::Name(name)),
            (Some(Arg::Attrs(attrs)), None, _) => Ok(Self::Attrs(attrs)),
            (Some(Arg::Ident(name)), Some(Arg::Attrs(attrs)), None) => {
                Ok(Self::NamedAttrs(name, attrs))
            }
            (Some(Arg::Ident(name)), Some(Arg::Str(text)), None) => {
                Ok(Self::NamedText(name, text))
            }
            (first, second, third) => Err(Args::List(
                first
                    .into_iter()
                    .chain(second)
                    .chain(third)
                    .chain(iter)
                    .collect(),
            )),
        }
    }
}

/// Attributes produced by normalizing one call.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    /// The attributes, in insertion order.
    pub attrs: Attributes,
    /// The label target to register, for `label` calls with a name and text.
    pub label: Option<String>,
}

/// Normalizes the arguments of a call to `tag`.
///
/// # Errors
///
/// Returns [`MarkupError::Shape`] when the arguments match no known shape.
pub fn normalize(tag: &str, args: Args) -> Result<Normalized> {
    let shape = Shape::classify(args).map_err(|args| MarkupError::Shape {
        tag: tag.to_string(),
        args: args.to_string(),
    })?;

    let mut label = None;
    let attrs = match shape {
        Shape::Attrs(attrs) => attrs,
        Shape::Empty => Attributes::new(),
        Shape::Text(text) => Attributes::new().with("text", text),
        Shape::Name(name) => Attributes::new().with("name", name),
        Shape::NamedAttrs(name, extra) => {
            let mut attrs = Attributes::new().with("name", name);
            attrs.merge(extra);
            attrs
        }
        Shape::NamedText(name, text) if tag == LABEL => {
            label = Some(name.clone());
            Attributes::new().with("for", name).with("text", text)
        }
        Shape::NamedText(name, text) => Attributes::new().with("name", name).with("text", text),
    };

    Ok(Normalized { attrs, label })
}
