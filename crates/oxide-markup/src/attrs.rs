//! Ordered attribute mappings.

use std::borrow::Cow;

use indexmap::IndexMap;
use serde_json::Value;

/// An ordered mapping of attribute names to values.
///
/// Keys are unique. Insertion order is preserved and is the order in which
/// attributes are rendered; overwriting an existing key keeps its position.
#[derive(Debug, Clone, Default)]
pub struct Attributes {
    entries: IndexMap<String, Value>,
}

impl Attributes {
    /// Creates new empty attributes.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Sets an attribute, keeping the position of an existing key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Gets an attribute.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns whether the key is present, even with a null value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes an attribute, keeping the order of the others.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Sets every attribute of `other` on top of these.
    pub fn merge(&mut self, other: Attributes) {
        self.entries.extend(other.entries);
    }

    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Renders the attributes as ` key="value"` pairs.
    ///
    /// Each pair carries a leading space, so the result can be placed right
    /// after the tag name. Values are not escaped.
    pub fn to_html(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!(r#" {k}="{}""#, value_to_string(v)))
            .collect()
    }
}

// Attribute order is rendered, so it takes part in equality.
impl PartialEq for Attributes {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len() && self.entries.iter().eq(other.entries.iter())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Coerces a value to the string placed in markup.
///
/// Strings are used verbatim, `null` becomes the empty string, and lists
/// and mappings render as compact JSON.
pub fn value_to_string(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        Value::Null => Cow::Borrowed(""),
        Value::Bool(b) => Cow::Owned(b.to_string()),
        Value::Number(n) => Cow::Owned(n.to_string()),
        other => Cow::Owned(other.to_string()),
    }
}

/// Builds [`Attributes`] from `key => value` pairs, in order.
///
/// ```rust
/// use oxide_markup::attrs;
///
/// let attrs = attrs! { "name" => "a_button", "type" => "button" };
/// assert_eq!(attrs.to_html(), r#" name="a_button" type="button""#);
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::Attributes::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut attrs = $crate::Attributes::new();
        $( attrs.set($key, $value); )+
        attrs
    }};
}
