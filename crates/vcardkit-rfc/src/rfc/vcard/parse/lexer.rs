//! vCard lexer for line unfolding and content line parsing.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::vcard::core::VCardParameter;

/// Splits a document into logical lines.
///
/// Folded lines (CRLF or bare LF followed by a space or tab) are joined by
/// removing the break and the single whitespace character. A
/// quoted-printable line ending in `=` continues on the next physical
/// line, which is not indented. Blank lines are dropped.
#[must_use]
pub fn split_lines(input: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut soft_break = false;

    for raw in input.lines() {
        if soft_break && let Some(prev) = lines.last_mut() {
            prev.pop();
            prev.push_str(raw);
            soft_break = has_soft_break(prev);
            continue;
        }

        if let Some(continuation) = raw.strip_prefix([' ', '\t']) {
            if let Some(prev) = lines.last_mut() {
                prev.push_str(continuation);
            } else if !continuation.trim().is_empty() {
                lines.push(continuation.to_string());
            }
        } else if raw.trim().is_empty() {
            continue;
        } else {
            lines.push(raw.to_string());
        }

        soft_break = lines.last().is_some_and(|line| has_soft_break(line));
    }

    lines
}

/// Whether `line` is a quoted-printable line that ends in a soft break.
fn has_soft_break(line: &str) -> bool {
    if !line.ends_with('=') {
        return false;
    }
    find_value_separator(line).is_some_and(|colon| {
        line[..colon]
            .to_ascii_uppercase()
            .contains("QUOTED-PRINTABLE")
    })
}

/// A parsed content line before value interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Property group (e.g., "item1" in "item1.TEL").
    pub group: Option<String>,
    /// Property name (uppercase).
    pub name: String,
    /// Parameters.
    pub params: Vec<VCardParameter>,
    /// Raw value string.
    pub value: String,
}

impl ContentLine {
    /// Returns the first parameter named `name`.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&VCardParameter> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Whether the value is quoted-printable encoded.
    #[must_use]
    pub fn is_quoted_printable(&self) -> bool {
        self.param("ENCODING")
            .is_some_and(|p| p.has_value("QUOTED-PRINTABLE"))
    }
}

/// Parses a single content line into its components.
///
/// Format: `[group.]name[;param[=value]]*:value`. A parameter without `=`
/// is a vCard 2.1 bare parameter (`TEL;HOME;VOICE:`).
///
/// ## Errors
/// Returns an error if the line is malformed or missing the colon separator.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<ContentLine> {
    let colon_pos = find_value_separator(line).ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::InvalidPropertyName,
            line_num,
            "missing colon separator",
        )
    })?;

    let (name_params, value) = line.split_at(colon_pos);
    let value = &value[1..];

    let (group, name_params) = parse_group(name_params);

    let (name, params_str) = match name_params.split_once(';') {
        Some((name, params)) => (name, Some(params)),
        None => (name_params, None),
    };

    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(ParseError::new(
            ParseErrorKind::InvalidPropertyName,
            line_num,
            format!("invalid property name: {name}"),
        ));
    }

    let params = if let Some(params_str) = params_str {
        parse_parameters(params_str, line_num)?
    } else {
        Vec::new()
    };

    Ok(ContentLine {
        group: group.map(String::from),
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

/// Parses optional group prefix.
fn parse_group(s: &str) -> (Option<&str>, &str) {
    let name_end = s.find(';').unwrap_or(s.len());
    if let Some(dot_pos) = s[..name_end].find('.') {
        let potential_group = &s[..dot_pos];
        if !potential_group.is_empty()
            && potential_group
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return (Some(potential_group), &s[dot_pos + 1..]);
        }
    }
    (None, s)
}

/// Parses parameter string into parameters.
fn parse_parameters(s: &str, line_num: usize) -> ParseResult<Vec<VCardParameter>> {
    let mut params = Vec::new();
    let mut remaining = s;

    while !remaining.is_empty() {
        let (param, rest) = parse_single_parameter(remaining, line_num)?;
        params.extend(param);
        remaining = rest;
    }

    Ok(params)
}

/// Parses a single parameter and returns remaining string.
///
/// Empty segments (`TEL;;HOME`) yield no parameter.
fn parse_single_parameter(s: &str, line_num: usize) -> ParseResult<(Option<VCardParameter>, &str)> {
    let segment_end = s.find([';', '=']).unwrap_or(s.len());

    if s[segment_end..].starts_with('=') {
        let name = s[..segment_end].trim();
        if name.is_empty() {
            return Err(ParseError::new(
                ParseErrorKind::InvalidParameter,
                line_num,
                "parameter without a name",
            ));
        }
        let (values, remaining) = parse_param_values(&s[segment_end + 1..]);
        return Ok((Some(VCardParameter::multi(name, values)), remaining));
    }

    let token = s[..segment_end].trim();
    let remaining = s.get(segment_end + 1..).unwrap_or_default();
    let param = (!token.is_empty()).then(|| VCardParameter::bare(token));
    Ok((param, remaining))
}

/// Parses parameter values (comma-separated, possibly quoted).
fn parse_param_values(s: &str) -> (Vec<String>, &str) {
    let mut values = Vec::new();
    let mut chars = s.chars().peekable();
    let mut current_value = String::new();
    let mut in_quotes = false;
    let mut consumed = 0;

    while let Some(&c) = chars.peek() {
        consumed += c.len_utf8();

        match c {
            '"' => {
                chars.next();
                in_quotes = !in_quotes;
            }
            ',' if !in_quotes => {
                chars.next();
                values.push(std::mem::take(&mut current_value));
            }
            ';' if !in_quotes => {
                chars.next();
                if !current_value.is_empty() || !values.is_empty() {
                    values.push(current_value);
                }
                return (values, &s[consumed..]);
            }
            '^' => {
                // RFC 6868 caret encoding
                chars.next();
                if let Some(&next) = chars.peek() {
                    consumed += next.len_utf8();
                    chars.next();
                    match next {
                        'n' | 'N' => current_value.push('\n'),
                        '\'' => current_value.push('"'),
                        '^' => current_value.push('^'),
                        _ => {
                            current_value.push('^');
                            current_value.push(next);
                        }
                    }
                } else {
                    current_value.push('^');
                }
            }
            _ => {
                chars.next();
                current_value.push(c);
            }
        }
    }

    if !current_value.is_empty() || !values.is_empty() {
        values.push(current_value);
    }

    (values, "")
}
