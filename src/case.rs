//! Property-name case conversion: kebab-case to camelCase and back.

/// Convert a kebab-case property name to camelCase.
///
/// Every hyphen followed by a lowercase ASCII letter is deleted and the
/// letter uppercased; everything else passes through unchanged. A leading
/// vendor hyphen is consumed the same way, so `-webkit-appearance` becomes
/// `WebkitAppearance`.
pub fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '-' {
            match chars.peek() {
                Some(&next) if next.is_ascii_lowercase() => {
                    out.push(next.to_ascii_uppercase());
                    chars.next();
                }
                _ => out.push(c),
            }
        } else {
            out.push(c);
        }
    }

    out
}

/// Convert a camelCase property name to kebab-case.
///
/// Every uppercase ASCII letter gains a hyphen before it and is lowercased,
/// so `fontSize` becomes `font-size` and `WebkitAppearance` becomes
/// `-webkit-appearance`.
pub fn to_kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);

    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}
