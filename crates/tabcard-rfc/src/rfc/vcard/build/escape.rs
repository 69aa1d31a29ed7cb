//! vCard text value escaping.

/// Escapes a text value for emission into a vCard line.
///
/// Replaces `\` with `\\`, `;` with `\;`, `,` with `\,`, and newline with
/// the literal two-character sequence `\n`. The single pass never re-escapes
/// the backslashes it introduces. No other characters are touched.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            ';' => result.push_str("\\;"),
            ',' => result.push_str("\\,"),
            '\n' => result.push_str("\\n"),
            _ => result.push(c),
        }
    }

    result
}
