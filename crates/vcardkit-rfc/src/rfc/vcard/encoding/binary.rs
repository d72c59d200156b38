//! Base64 for inline binary values (PHOTO, LOGO, SOUND, KEY).

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD as BASE64_STANDARD, STANDARD_NO_PAD};

/// Encodes `data` as standard base64 without line breaks.
#[must_use]
pub fn encode(data: &[u8]) -> String {
    BASE64_STANDARD.encode(data)
}

/// Decodes base64, ignoring embedded whitespace left over from folding.
/// Missing padding is tolerated.
#[must_use]
pub fn decode(value: &str) -> Option<Vec<u8>> {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    BASE64_STANDARD
        .decode(&compact)
        .or_else(|_| STANDARD_NO_PAD.decode(compact.trim_end_matches('=')))
        .ok()
}
