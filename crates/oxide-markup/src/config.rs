//! Output configuration and one-shot rendering.

use serde::{Deserialize, Serialize};

use crate::builder::Builder;
use crate::error::Result;
use crate::source::DataSource;

/// How the rendered units are joined into the final string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Units concatenated with no added whitespace.
    #[default]
    Compact,
    /// One unit per line, indented by nesting, between marker comments.
    Pretty,
}

/// Builds markup with a fresh builder and returns it in `format`.
///
/// ```rust
/// use oxide_markup::{render, OutputFormat};
///
/// let html = render(None, OutputFormat::Compact, |b| b.tag("p", "ABC"))?;
/// assert_eq!(html, "<p>ABC</p>");
/// # Ok::<(), oxide_markup::MarkupError>(())
/// ```
///
/// # Errors
///
/// Returns the first error raised by `content`.
pub fn render<'a, F>(
    source: Option<&'a dyn DataSource>,
    format: OutputFormat,
    content: F,
) -> Result<String>
where
    F: FnOnce(&mut Builder<'a>) -> Result<()>,
{
    let builder = Builder::build(source, (), content)?;
    Ok(builder.output(format))
}
