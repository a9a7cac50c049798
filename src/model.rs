//! Style object model: StyleObject, StyleValue.

use indexmap::IndexMap;

/// The value side of a style object entry.
///
/// A declaration like `color: red` produces a [`StyleValue::Value`]; a block
/// like `a { ... }` produces a [`StyleValue::Nested`] holding the parsed body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleValue {
    /// A CSS value string, kept verbatim (e.g. `"blue !important"`).
    Value(String),
    /// A nested rule body keyed by a selector or at-rule head.
    Nested(StyleObject),
}

impl StyleValue {
    /// Returns the value string if this is a leaf.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Value(s) => Some(s),
            StyleValue::Nested(_) => None,
        }
    }

    /// Returns the nested object if this is a block body.
    pub fn as_object(&self) -> Option<&StyleObject> {
        match self {
            StyleValue::Value(_) => None,
            StyleValue::Nested(o) => Some(o),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Value(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Value(s)
    }
}

impl From<StyleObject> for StyleValue {
    fn from(o: StyleObject) -> Self {
        StyleValue::Nested(o)
    }
}

/// An ordered mapping from keys to [`StyleValue`]s.
///
/// Keys are declaration property names (camelCase), selectors, or at-rule
/// heads. Iteration yields entries in insertion order; re-inserting an
/// existing key replaces its value but keeps its original position, so
/// last-write-wins never reorders the mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleObject {
    entries: IndexMap<String, StyleValue>,
}

impl StyleObject {
    /// Create an empty style object.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by key.
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.get(key)
    }

    /// Insert an entry. An existing key is overwritten in place (its position
    /// in the iteration order is unchanged); the previous value is returned.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<StyleValue>,
    ) -> Option<StyleValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleObject {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for StyleObject {
    type Item = (String, StyleValue);
    type IntoIter = indexmap::map::IntoIter<String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
