//! vCard lexer for line unfolding and content line parsing.
//!
//! vCard 3.0 folds long property lines by continuing them on the next
//! physical line behind a single space or tab (RFC 2426 §2.6).

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::vcard::core::VCardParameter;

/// Splits raw input into logical lines, merging folded continuations.
///
/// Blank lines are dropped. A line starting with a space or tab continues
/// the previous logical line with that one marker character removed; folding
/// inserts exactly one marker, so exactly one is stripped. A continuation
/// with no preceding line is kept as its own logical line.
#[must_use]
pub fn split_lines(input: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim().is_empty() {
            continue;
        }

        if let Some(continuation) = strip_fold_marker(line) {
            if let Some(prev) = lines.last_mut() {
                prev.push_str(continuation);
            } else {
                lines.push(continuation.to_string());
            }
        } else {
            lines.push(line.to_string());
        }
    }

    lines
}

fn strip_fold_marker(line: &str) -> Option<&str> {
    line.strip_prefix(' ').or_else(|| line.strip_prefix('\t'))
}

/// A parsed content line before field interpretation.
#[derive(Debug, Clone)]
pub struct ContentLine {
    /// Property name (uppercase).
    pub name: String,
    /// Parameters.
    pub params: Vec<VCardParameter>,
    /// Raw value string.
    pub value: String,
}

/// Parses a single content line into its components.
///
/// Format: `name[;param=value]*:value`
///
/// ## Errors
/// Returns an error if the line is missing the colon separator, the property
/// name is invalid, or a parameter is malformed.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<ContentLine> {
    // Find the colon separating name/params from value
    let colon_pos = find_value_separator(line).ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::InvalidPropertyName,
            line_num,
            "missing colon separator",
        )
    })?;

    let (name_params, value) = line.split_at(colon_pos);
    let value = &value[1..]; // Skip the colon

    // Split name from parameters
    let (name, params_str) = if let Some(semi_pos) = name_params.find(';') {
        (&name_params[..semi_pos], Some(&name_params[semi_pos + 1..]))
    } else {
        (name_params, None)
    };

    // Validate property name
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(ParseError::new(
            ParseErrorKind::InvalidPropertyName,
            line_num,
            format!("invalid property name: {name}"),
        ));
    }

    // Parse parameters
    let params = if let Some(params_str) = params_str {
        parse_parameters(params_str, line_num)?
    } else {
        Vec::new()
    };

    Ok(ContentLine {
        name: name.to_ascii_uppercase(),
        params,
        value: value.to_string(),
    })
}

/// Finds the colon that separates name/params from value.
///
/// Must handle quoted parameter values that may contain colons.
fn find_value_separator(line: &str) -> Option<usize> {
    let mut in_quotes = false;

    for (i, c) in line.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ':' if !in_quotes => return Some(i),
            _ => {}
        }
    }

    None
}

/// Parses parameter string into parameters.
fn parse_parameters(s: &str, line_num: usize) -> ParseResult<Vec<VCardParameter>> {
    let mut params = Vec::new();
    let mut remaining = s;

    while !remaining.is_empty() {
        let (param, rest) = parse_single_parameter(remaining, line_num)?;
        params.push(param);
        remaining = rest;
    }

    Ok(params)
}

/// Parses a single parameter and returns remaining string.
fn parse_single_parameter(s: &str, line_num: usize) -> ParseResult<(VCardParameter, &str)> {
    let eq_pos = s.find('=').ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::InvalidParameter,
            line_num,
            "missing = in parameter",
        )
    })?;

    let name = &s[..eq_pos];
    let after_eq = &s[eq_pos + 1..];

    let (values, remaining) = parse_param_values(after_eq);

    Ok((VCardParameter::multi(name, values), remaining))
}

/// Parses parameter values (comma-separated, possibly quoted).
fn parse_param_values(s: &str) -> (Vec<String>, &str) {
    let mut values = Vec::new();
    let mut current_value = String::new();
    let mut in_quotes = false;
    let mut consumed = 0;

    for c in s.chars() {
        consumed += c.len_utf8();

        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => values.push(std::mem::take(&mut current_value)),
            ';' if !in_quotes => {
                // Next parameter
                if !current_value.is_empty() || !values.is_empty() {
                    values.push(current_value);
                }
                return (values, &s[consumed..]);
            }
            _ => current_value.push(c),
        }
    }

    // End of string
    if !current_value.is_empty() || !values.is_empty() {
        values.push(current_value);
    }

    (values, "")
}
