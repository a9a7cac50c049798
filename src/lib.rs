//! # cssobj
//!
//! A permissive CSS parser that turns CSS text into an ordered, nested
//! key-value tree (a [`StyleObject`]) and back.
//!
//! Parsing never fails: malformed input produces a best-effort partial tree.
//! Declaration property names are converted to camelCase
//! (`background-color` → `backgroundColor`); selector and at-rule keys are
//! kept verbatim.
//!
//! ## Core Systems
//!
//! - **[`parser`]** — Recursive descent scanner: CSS text → [`StyleObject`]
//! - **[`serialize`]** — The inverse: [`StyleObject`] → CSS text
//! - **[`template`]** — Template composition: literal segments +
//!   substituted values/objects, spliced and parsed in one pass
//! - **[`case`]** — kebab-case ↔ camelCase property-name conversion
//! - **[`model`]** — [`StyleObject`] / [`StyleValue`] data model
//!
//! ## Example
//!
//! ```
//! use cssobj::{css_to_object, StyleValue};
//!
//! let styles = css_to_object("a:hover { background-color: blue; }");
//! let rule = styles.get("a:hover").and_then(StyleValue::as_object).unwrap();
//! assert_eq!(
//!     rule.get("backgroundColor").and_then(StyleValue::as_str),
//!     Some("blue"),
//! );
//! ```

pub mod case;
pub mod model;
pub mod parser;
pub mod serialize;
pub mod template;

pub use case::{to_camel_case, to_kebab_case};
pub use model::{StyleObject, StyleValue};
pub use parser::parse_css;
pub use serialize::object_to_css;
pub use template::{compose, Substitution};

/// Parse a plain CSS string into a [`StyleObject`].
///
/// Thin pass-through to [`parse_css`] for callers with no template parts.
pub fn css_to_object(css: &str) -> StyleObject {
    parser::parse_css(css)
}

// Proc macros (feature-gated)
#[cfg(feature = "macros")]
pub use cssobj_macros::css;
