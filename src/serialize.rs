//! Style object to CSS text serialization.
//!
//! The inverse of [`crate::parser`], used when a template substitution is
//! itself a style object: the object is rendered back to CSS text so it can
//! be spliced into the surrounding template and re-parsed.

use std::fmt;

use crate::case::to_kebab_case;
use crate::model::{StyleObject, StyleValue};

/// Serialize a style object back to CSS text.
///
/// Leaf entries emit `property: value;` with the key converted back to
/// kebab-case; the space after the colon is what lets the parser recognize
/// the declaration again. Nested entries emit `key{...}` with the key
/// verbatim. The output carries no other formatting: it exists to be fed
/// back into the parser, not to be read.
pub fn object_to_css(object: &StyleObject) -> String {
    object.to_string()
}

impl fmt::Display for StyleObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.iter() {
            match value {
                StyleValue::Value(v) => write!(f, "{}: {};", to_kebab_case(key), v)?,
                StyleValue::Nested(inner) => write!(f, "{key}{{{inner}}}")?,
            }
        }
        Ok(())
    }
}
