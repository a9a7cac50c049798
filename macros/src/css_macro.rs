//! css! macro: assemble literal CSS segments and interpolated substitutions
//! into a `cssobj::compose` call.

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Expr, ExprLit, Lit, Result, Token};

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// One comma-separated argument to the macro.
enum Part {
    /// A string literal: a literal CSS segment.
    Segment(String),
    /// Any other expression: a substitution.
    Substitution(Expr),
}

/// The top-level input to the css! macro.
struct CssInput {
    parts: Vec<Part>,
}

impl Parse for CssInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let args = Punctuated::<Expr, Token![,]>::parse_terminated(input)?;
        let parts = args
            .into_iter()
            .map(|expr| match expr {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(s), ..
                }) => Part::Segment(s.value()),
                other => Part::Substitution(other),
            })
            .collect();
        Ok(CssInput { parts })
    }
}

// ---------------------------------------------------------------------------
// Interleaving
// ---------------------------------------------------------------------------

/// Normalize parts into the interleaving `compose` expects: segments always
/// outnumber substitutions by exactly one. Adjacent literals are
/// concatenated; a leading, trailing, or doubled substitution gets an empty
/// segment next to it.
fn interleave(parts: Vec<Part>) -> (Vec<String>, Vec<Expr>) {
    let mut segments: Vec<String> = Vec::new();
    let mut substitutions: Vec<Expr> = Vec::new();

    for part in parts {
        match part {
            Part::Segment(text) => {
                if segments.len() == substitutions.len() {
                    segments.push(text);
                } else if let Some(last) = segments.last_mut() {
                    last.push_str(&text);
                }
            }
            Part::Substitution(expr) => {
                if segments.len() == substitutions.len() {
                    segments.push(String::new());
                }
                substitutions.push(expr);
            }
        }
    }

    if segments.len() == substitutions.len() {
        segments.push(String::new());
    }

    (segments, substitutions)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Generate the `cssobj::compose` call for the entire css! macro.
pub(crate) fn css_impl(input: TokenStream) -> Result<TokenStream> {
    let parsed: CssInput = syn::parse2(input)?;
    let (segments, substitutions) = interleave(parsed.parts);

    Ok(quote! {
        cssobj::compose(
            &[#(#segments),*],
            &[#(cssobj::Substitution::from(#substitutions)),*],
        )
    })
}

// ===========================================================================
// Tests
// ===========================================================================
