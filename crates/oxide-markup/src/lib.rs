//! # oxide-markup
//!
//! Programmatic HTML markup generation with data binding and inline
//! validation messages.
//!
//! This crate provides:
//! - A [`Builder`] that turns tag calls into well-formed, nested markup
//! - Automatic values for named controls from a bound [`DataSource`]
//! - Automatic `id`s for controls that follow their `<label>`
//! - Inline validation messages after `input` and `select` controls
//! - Compact or indented output
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_markup::{attrs, Args, Builder, FormData};
//!
//! let data = FormData::new()
//!     .with("username", "bobama")
//!     .with_error("username", "Username already used.");
//!
//! let mut b = Builder::with_source(&data);
//! b.tag_with("form", attrs! { "action" => "/register", "method" => "post" }, |b| {
//!     b.tag("label", Args::name_text("username", "Username"))?;
//!     b.tag("text", Args::name("username"))?;
//!     b.submit("Register", &attrs! {})
//! })?;
//!
//! assert_eq!(
//!     b.compact(),
//!     concat!(
//!         r#"<form action="/register" method="post">"#,
//!         r#"<label for="username">Username</label>"#,
//!         r#"<input name="username" type="text" value="bobama" id="username" />"#,
//!         r#"<warn> <-- Username already used.</warn>"#,
//!         r#"<input type="submit" value="Register" />"#,
//!         "</form>",
//!     )
//! );
//! # Ok::<(), oxide_markup::MarkupError>(())
//! ```
//!
//! ## Call Shapes
//!
//! A tag call takes an [`Args`] bundle, which is one of:
//!
//! - an attribute mapping: `attrs! { "class" => "x" }`
//! - nothing: `()`
//! - text: `"ABC"`
//! - a name: `Args::name("field")`
//! - a name and attributes: `Args::named("field", attrs! { ... })`
//! - a name and text: `Args::name_text("field", "Text")`
//!
//! Anything else is a [`MarkupError::Shape`].
//!
//! ## Pretty Output
//!
//! ```rust
//! use oxide_markup::Builder;
//!
//! let mut b = Builder::new();
//! b.tag_with("div", (), |b| b.tag("br", ()))?;
//! assert_eq!(
//!     b.pretty(),
//!     "<!-- begin generated output -->\n<div>\n <br />\n</div>\n<!-- end generated output -->\n"
//! );
//! # Ok::<(), oxide_markup::MarkupError>(())
//! ```

mod args;
mod attrs;
mod builder;
mod config;
mod descriptor;
mod error;
pub mod pretty;
mod shortcuts;
mod source;

pub use args::{normalize, Arg, Args, Normalized, Shape, LABEL};
pub use attrs::{value_to_string, Attributes};
pub use builder::{Builder, FIELD_TAGS, INPUT, INPUT_LIKE, MAX_DEPTH, SELECT};
pub use config::{render, OutputFormat};
pub use descriptor::{Descriptor, TEXTAREA};
pub use error::{MarkupError, Result, ValidationErrors};
pub use shortcuts::Choices;
pub use source::{DataSource, FormData, ERRORS_KEY};
