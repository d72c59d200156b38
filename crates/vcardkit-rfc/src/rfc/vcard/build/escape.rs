//! vCard text masking.

use crate::rfc::vcard::core::{VCardVersion, policy};

/// Masks a text value for serialization.
///
/// vCard 2.1 only masks the semicolon; line breaks travel quoted-printable
/// encoded. 3.0 and 4.0 mask backslash, newline, comma and semicolon, and
/// drop carriage returns.
#[must_use]
pub fn escape_text(s: &str, version: VCardVersion) -> String {
    let mut result = String::with_capacity(s.len());
    append_escaped(&mut result, s, version);
    result
}

/// Appends the masked form of `s` to `builder`.
pub fn append_escaped(builder: &mut String, s: &str, version: VCardVersion) {
    if version == VCardVersion::V2_1 {
        for c in s.chars() {
            if c == ';' {
                builder.push_str("\\;");
            } else {
                builder.push(c);
            }
        }
        return;
    }

    for c in s.chars() {
        match c {
            '\\' => builder.push_str("\\\\"),
            '\n' => builder.push_str("\\n"),
            ',' => builder.push_str("\\,"),
            ';' => builder.push_str("\\;"),
            '\r' => {} // Skip CR (use \n for newlines)
            _ => builder.push(c),
        }
    }
}

/// Escapes a parameter value for serialization.
///
/// 4.0 uses RFC 6868 caret encoding. Older versions cannot express a
/// double quote or a line break in a parameter, so those are replaced.
/// Returns `(value, needs_quotes)`.
#[must_use]
pub fn escape_param_value(s: &str, version: VCardVersion) -> (String, bool) {
    let carets = policy::uses_caret_encoding(version);
    let mut result = String::with_capacity(s.len());
    let mut needs_quotes = false;

    for c in s.chars() {
        match c {
            '^' if carets => result.push_str("^^"),
            '\n' if carets => result.push_str("^n"),
            '"' if carets => {
                result.push_str("^'");
                needs_quotes = true;
            }
            '\n' => result.push(' '),
            '"' => result.push('\''),
            ':' | ';' | ',' => {
                result.push(c);
                needs_quotes = true;
            }
            _ if c.is_control() => {
                // Skip other control characters
            }
            _ => result.push(c),
        }
    }

    (result, needs_quotes)
}

/// Appends an escaped parameter value, quoted when necessary.
pub fn append_param_value(builder: &mut String, s: &str, version: VCardVersion) {
    let (escaped, needs_quotes) = escape_param_value(s, version);
    if needs_quotes {
        builder.push('"');
        builder.push_str(&escaped);
        builder.push('"');
    } else {
        builder.push_str(&escaped);
    }
}
