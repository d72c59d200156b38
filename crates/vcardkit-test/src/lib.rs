//! vcardkit - integration test support.
//!
//! Re-exports the codec under short paths and provides the helpers shared
//! by the tests in `tests/`.

pub use vcardkit_rfc::rfc::vcard;

use vcard::core::{TextProperty, VCard, VCardVersion, VcfOptions};
use vcard::parse::ParseResult;

/// ## Summary
/// Writes `card` in `version` and reads the text back.
///
/// ## Errors
/// Returns the parse error of the second pass.
pub fn reparse(card: &VCard, version: VCardVersion, options: VcfOptions) -> ParseResult<VCard> {
    let text = vcard::serialize_single(card, version, options);
    tracing::trace!(%version, text = %text, "Serialized card");
    vcard::parse_single(&text)
}

/// A card holding only a formatted name.
#[must_use]
pub fn named(name: &str) -> VCard {
    let mut card = VCard::new();
    card.formatted_names.push(TextProperty::new(name));
    card
}

/// All versions the codec reads and writes.
pub const VERSIONS: [VCardVersion; 3] = [VCardVersion::V2_1, VCardVersion::V3_0, VCardVersion::V4_0];
