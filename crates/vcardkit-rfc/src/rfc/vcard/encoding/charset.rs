//! CHARSET parameter handling.

use encoding_rs::{Encoding, UTF_8};

/// Looks up the encoding named by a CHARSET parameter.
#[must_use]
pub fn encoding_for_label(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
}

/// Decodes `bytes` with `charset`, falling back to UTF-8.
///
/// Malformed sequences are replaced with U+FFFD.
#[must_use]
pub fn decode_bytes(bytes: &[u8], charset: Option<&str>) -> String {
    let encoding = match charset {
        Some(label) => encoding_for_label(label).unwrap_or_else(|| {
            tracing::warn!(charset = label, "unknown charset, decoding as UTF-8");
            UTF_8
        }),
        None => UTF_8,
    };
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::debug!(charset = encoding.name(), "replaced malformed byte sequences");
    }
    text.into_owned()
}
