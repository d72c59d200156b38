//! Quoted-printable transfer encoding (RFC 2045 §6.7) as vCard 2.1 uses it.
//!
//! The encoder produces one unbroken line; soft line breaks are inserted
//! by [`fold_quoted_printable`](crate::rfc::vcard::build::fold_quoted_printable)
//! when the content line is finished.

use std::fmt::Write as _;

use super::charset::decode_bytes;

/// Encodes `text` as UTF-8 quoted-printable. Line breaks become `=0D=0A`.
#[must_use]
pub fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3 / 2);
    append_encoded(&mut out, text);
    out
}

/// Appends the quoted-printable form of `text` to `builder`.
pub fn append_encoded(builder: &mut String, text: &str) {
    let normalized = text.replace("\r\n", "\n");
    let bytes = normalized.as_bytes();

    for (i, &byte) in bytes.iter().enumerate() {
        let literal = match byte {
            b'=' => false,
            b' ' | b'\t' => {
                // Trailing whitespace would be stripped in transport.
                bytes.get(i + 1).is_some_and(|next| *next != b'\n')
            }
            33..=126 => true,
            _ => false,
        };

        if byte == b'\n' {
            builder.push_str("=0D=0A");
        } else if literal {
            builder.push(char::from(byte));
        } else {
            write!(builder, "={byte:02X}").ok();
        }
    }
}

/// Decodes a quoted-printable value with the given charset (UTF-8 when
/// absent or unknown).
///
/// Soft line breaks (`=` at the end of a line) are removed. Malformed
/// escapes are kept literally.
#[must_use]
pub fn decode(value: &str, charset: Option<&str>) -> String {
    decode_bytes(&decode_to_bytes(value), charset)
}

/// Decodes the quoted-printable escapes of `value` to raw octets.
#[must_use]
pub fn decode_to_bytes(value: &str) -> Vec<u8> {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        let byte = bytes[i];
        if byte != b'=' {
            out.push(byte);
            i += 1;
            continue;
        }

        match (bytes.get(i + 1), bytes.get(i + 2)) {
            (Some(b'\r'), Some(b'\n')) => i += 3,
            (Some(b'\n'), _) => i += 2,
            (None, _) => i += 1,
            (Some(&hi), Some(&lo)) => match (hex_value(hi), hex_value(lo)) {
                (Some(hi), Some(lo)) => {
                    out.push((hi << 4) | lo);
                    i += 3;
                }
                _ => {
                    out.push(byte);
                    i += 1;
                }
            },
            (Some(_), None) => {
                out.push(byte);
                i += 1;
            }
        }
    }

    out
}

const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        _ => None,
    }
}
