//! Proc macros for cssobj: the `css!` template macro.
//!
//! This crate is not meant to be used directly — enable the `macros` feature on `cssobj`.

use proc_macro::TokenStream;

mod css_macro;

/// CSS template macro.
///
/// Takes a comma-separated sequence of string literals (literal CSS
/// segments) and expressions (substitutions), and expands to a
/// `cssobj::compose` call that splices the substitutions into the segments
/// and parses the assembled string.
///
/// String substitutions splice in verbatim, numbers are formatted to text,
/// and a `StyleObject` is serialized back to CSS so it nests into the
/// surrounding template.
///
/// # Syntax
///
/// ```ignore
/// let hover: StyleObject = css!("color: blue;");
/// let styles = css!(
///     "a { color: red; ",
///     css!("&:hover { ", hover, " }"),
///     " }",
/// );
/// ```
///
/// Adjacent string literals are concatenated; substitutions may appear
/// anywhere in the sequence, including first, last, or back to back.
#[proc_macro]
pub fn css(input: TokenStream) -> TokenStream {
    css_macro::css_impl(input.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
