//! Template composition: splice literal CSS segments and substituted values
//! into one string, then parse it.

use crate::model::StyleObject;
use crate::parser::parse_css;
use crate::serialize::object_to_css;

/// A value substituted into a CSS template.
///
/// Strings and numbers splice in as text. A [`StyleObject`] is serialized
/// back to CSS first, so an object dropped inside an already-open block
/// becomes sibling declarations and blocks of that block once the assembled
/// string is re-parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Substitution {
    /// Plain text, spliced verbatim.
    Text(String),
    /// A style object, serialized via [`object_to_css`] before splicing.
    Object(StyleObject),
}

impl From<&str> for Substitution {
    fn from(s: &str) -> Self {
        Substitution::Text(s.to_string())
    }
}

impl From<String> for Substitution {
    fn from(s: String) -> Self {
        Substitution::Text(s)
    }
}

impl From<StyleObject> for Substitution {
    fn from(o: StyleObject) -> Self {
        Substitution::Object(o)
    }
}

impl From<&StyleObject> for Substitution {
    fn from(o: &StyleObject) -> Self {
        Substitution::Object(o.clone())
    }
}

macro_rules! substitution_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Substitution {
                fn from(n: $ty) -> Self {
                    // `{}` renders whole floats without a decimal point, so
                    // a substituted `12.0` splices as `12`.
                    Substitution::Text(n.to_string())
                }
            }
        )*
    };
}

substitution_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64);

/// Assemble one CSS string from literal segments and substitutions, then
/// parse it in a single pass.
///
/// Segments and substitutions interleave as
/// `segments[0] substitutions[0] segments[1] ...`. A well-formed template has
/// one more segment than substitutions; mismatched lengths are tolerated,
/// with the leftover tail of the longer slice appended in order.
/// Substitutions are never parsed on their own — only the fully assembled
/// string is, exactly once.
pub fn compose(segments: &[&str], substitutions: &[Substitution]) -> StyleObject {
    let mut css = String::new();

    for i in 0..segments.len().max(substitutions.len()) {
        if let Some(segment) = segments.get(i) {
            css.push_str(segment);
        }
        if let Some(substitution) = substitutions.get(i) {
            match substitution {
                Substitution::Text(text) => css.push_str(text),
                Substitution::Object(object) => css.push_str(&object_to_css(object)),
            }
        }
    }

    parse_css(&css)
}
