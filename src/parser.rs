//! Recursive descent CSS scanner.
//!
//! Parses CSS text into a [`StyleObject`]. The parser is total: malformed
//! input yields a best-effort partial tree, never an error. Unterminated
//! constructs (blocks, values, quoted strings, comments) close implicitly at
//! end of input, and unrecognized content is dropped silently.

use crate::case::to_camel_case;
use crate::model::StyleObject;

/// Parse a CSS fragment into a [`StyleObject`].
///
/// Block comments are stripped up front, once; the scan itself is a single
/// pass that recurses into `{ ... }` bodies on already-cleaned substrings.
pub fn parse_css(input: &str) -> StyleObject {
    let cleaned = strip_comments(input);
    parse_fragment(cleaned.trim())
}

/// Parse one comment-free fragment (a whole input or a block body).
fn parse_fragment(fragment: &str) -> StyleObject {
    Scanner::new(fragment).parse()
}

/// Strip CSS block comments (`/* ... */`, non-nesting) from the input.
///
/// Comment spans are removed outright, so `a/* x */:hover` reads back as the
/// selector `a:hover`. An unterminated comment swallows the rest of the
/// input.
fn strip_comments(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let bytes = input.as_bytes();
    let len = bytes.len();
    let mut i = 0;
    let mut run_start = 0;

    while i < len {
        if i + 1 < len && bytes[i] == b'/' && bytes[i + 1] == b'*' {
            result.push_str(&input[run_start..i]);
            i += 2;
            loop {
                if i + 1 >= len {
                    i = len;
                    break;
                }
                if bytes[i] == b'*' && bytes[i + 1] == b'/' {
                    i += 2;
                    break;
                }
                i += 1;
            }
            run_start = i;
        } else {
            i += 1;
        }
    }

    result.push_str(&input[run_start..]);
    result
}

/// What ended a head scan.
enum HeadEnd {
    /// `{` at paren depth 0: the head is a selector or at-rule name.
    Block,
    /// `:` at paren depth 0 followed by whitespace: the head is a property
    /// name. The whitespace lookahead is what keeps a pseudo-class colon
    /// (`a:hover`) from being read as a declaration.
    Declaration,
    /// `;` at paren depth 0, or end of input: no recognized form.
    Separator,
}

/// Byte-cursor scanner over one fragment.
///
/// Every structural character is ASCII, so the cursor moves byte-wise and
/// head/value text is sliced straight out of the source. The fragment is
/// never mutated; each scan owns its own cursor.
struct Scanner<'a> {
    src: &'a str,
    bytes: &'a [u8],
    cursor: usize,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            cursor: 0,
        }
    }

    fn is_eof(&self) -> bool {
        self.cursor >= self.bytes.len()
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.cursor).copied()
    }

    fn bump(&mut self) {
        self.cursor += 1;
    }

    /// Skip whitespace between tokens. A stray `}` left over from an
    /// over-closed block is skipped the same way.
    fn skip_trivia(&mut self) {
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace() || b == b'}' {
                self.bump();
            } else {
                break;
            }
        }
    }

    /// `true` if the byte after `pos` exists and is whitespace.
    fn whitespace_after(&self, pos: usize) -> bool {
        self.bytes
            .get(pos + 1)
            .is_some_and(|b| b.is_ascii_whitespace())
    }

    /// Accumulate declarations and blocks until the fragment runs out.
    fn parse(&mut self) -> StyleObject {
        let mut result = StyleObject::new();

        loop {
            self.skip_trivia();
            if self.is_eof() {
                break;
            }

            let (head, end) = self.scan_head();
            match end {
                HeadEnd::Block => {
                    let body = self.scan_block();
                    if !head.is_empty() {
                        result.insert(head, parse_fragment(body));
                    }
                }
                HeadEnd::Declaration => {
                    self.bump(); // consume `:`
                    let value = self.scan_value();
                    if !head.is_empty() && !value.is_empty() {
                        result.insert(to_camel_case(head), value);
                    }
                    if self.peek() == Some(b';') {
                        self.bump();
                    }
                }
                HeadEnd::Separator => {
                    if let Some((name, value)) = split_bodyless_at_rule(head) {
                        result.insert(name, value);
                    }
                    if self.peek() == Some(b';') {
                        self.bump();
                    }
                }
            }
        }

        result
    }

    /// Scan a head: everything up to a form-deciding character at paren
    /// depth 0. Leaves the cursor on that character (or at end of input).
    ///
    /// The depth counter is a plain signed counter: a stray `)` drives it
    /// negative, and form checks require depth exactly zero.
    fn scan_head(&mut self) -> (&'a str, HeadEnd) {
        let start = self.cursor;
        let mut paren_depth: i32 = 0;
        let mut end = HeadEnd::Separator;

        while let Some(b) = self.peek() {
            match b {
                b'{' if paren_depth == 0 => {
                    end = HeadEnd::Block;
                    break;
                }
                b':' if paren_depth == 0 && self.whitespace_after(self.cursor) => {
                    end = HeadEnd::Declaration;
                    break;
                }
                b';' if paren_depth == 0 => break,
                b'(' => paren_depth += 1,
                b')' => paren_depth -= 1,
                _ => {}
            }
            self.bump();
        }

        (self.src[start..self.cursor].trim(), end)
    }

    /// Scan a `{ ... }` body. The cursor sits on the opening brace; on
    /// return it is past the matching close, or at end of input for an
    /// unterminated block. Returns the text between the braces.
    fn scan_block(&mut self) -> &'a str {
        self.bump(); // consume `{`
        let body_start = self.cursor;
        let mut depth = 1u32;

        while let Some(b) = self.peek() {
            match b {
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        let body = &self.src[body_start..self.cursor];
                        self.bump(); // consume `}`
                        return body;
                    }
                }
                _ => {}
            }
            self.bump();
        }

        &self.src[body_start..]
    }

    /// Scan a declaration value. The cursor sits just past the colon; the
    /// value runs to a `;` at paren depth 0 outside a double-quoted string,
    /// or to end of input. Parens are not counted inside a string, so
    /// `url("a;b")` and `url(data:...;base64,...)` survive intact.
    fn scan_value(&mut self) -> &'a str {
        let start = self.cursor;
        let mut paren_depth: i32 = 0;
        let mut in_string = false;

        while let Some(b) = self.peek() {
            match b {
                b'"' => in_string = !in_string,
                b'(' if !in_string => paren_depth += 1,
                b')' if !in_string => paren_depth -= 1,
                b';' if paren_depth == 0 && !in_string => break,
                _ => {}
            }
            self.bump();
        }

        self.src[start..self.cursor].trim()
    }
}

/// Split a bodyless at-rule head like `@charset "UTF-8"` into its name and
/// value at the first whitespace run. Both halves are kept verbatim. Heads
/// that do not start with `@`, or that carry no value, are dropped.
fn split_bodyless_at_rule(head: &str) -> Option<(&str, &str)> {
    if !head.starts_with('@') {
        return None;
    }
    let split = head.find(char::is_whitespace)?;
    Some((&head[..split], head[split..].trim_start()))
}
