//! vCard value parsers.

use crate::rfc::vcard::core::{Address, StructuredName};

/// Unescapes a vCard text value.
///
/// Exact left inverse of [`crate::rfc::vcard::build::escape_text`]:
/// `\n`/`\N` (newline), `\,` (comma), `\;` (semicolon), `\\` (backslash).
/// A backslash followed by anything else passes through verbatim.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('n' | 'N') => {
                    chars.next();
                    result.push('\n');
                }
                Some(',') => {
                    chars.next();
                    result.push(',');
                }
                Some(';') => {
                    chars.next();
                    result.push(';');
                }
                Some('\\') => {
                    chars.next();
                    result.push('\\');
                }
                _ => result.push(c),
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Splits a structured value on unescaped semicolons.
#[must_use]
pub fn split_structured(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut prev_backslash = false;

    for (i, c) in s.char_indices() {
        if c == '\\' {
            prev_backslash = !prev_backslash;
            continue;
        }

        if c == ';' && !prev_backslash {
            parts.push(&s[start..i]);
            start = i + 1;
        }

        prev_backslash = false;
    }

    parts.push(&s[start..]);
    parts
}

/// Parses a structured name (N property).
///
/// The wire form is `family;given;additional;prefixes;suffixes`; only the
/// first two components are kept, each independently unescaped. Missing
/// components default to empty.
#[must_use]
pub fn parse_structured_name(value: &str) -> StructuredName {
    let parts = split_structured(value);

    StructuredName {
        family: parts.first().map(|s| unescape_text(s)).unwrap_or_default(),
        given: parts.get(1).map(|s| unescape_text(s)).unwrap_or_default(),
    }
}

/// Parses an address (ADR property).
///
/// The wire form is `pobox;extended;street;locality;region;postal;country`;
/// components 2-6 are kept. Missing trailing components default to empty.
#[must_use]
pub fn parse_address(value: &str) -> Address {
    let parts = split_structured(value);
    let component = |i: usize| parts.get(i).map(|s| unescape_text(s)).unwrap_or_default();

    Address {
        street: component(2),
        city: component(3),
        region: component(4),
        postal: component(5),
        country: component(6),
    }
}
