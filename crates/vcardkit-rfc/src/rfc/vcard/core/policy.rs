//! Version-dependent serialization decisions.
//!
//! Every compound value and property asks these functions instead of
//! matching on [`VCardVersion`] itself, so the per-version rules live in
//! one place.

use super::options::VcfOptions;
use super::version::VCardVersion;

pub use vcardkit_core::constants::DEFAULT_CHARSET;

/// Separator placed between the items of a multi-valued component.
///
/// 4.0 lists items with commas. Older versions have no list syntax for
/// structured components, so the items are joined into one text with a space.
#[must_use]
pub const fn value_separator(version: VCardVersion) -> char {
    match version {
        VCardVersion::V4_0 => ',',
        VCardVersion::V2_1 | VCardVersion::V3_0 => ' ',
    }
}

/// Whether the RFC 9554 components of N and ADR are written.
#[must_use]
pub fn writes_extensions(version: VCardVersion, options: VcfOptions) -> bool {
    version >= VCardVersion::V4_0 && options.contains(VcfOptions::WRITE_RFC9554_EXTENSIONS)
}

/// Whether a component containing an unmasked comma is a list of items.
///
/// 2.1 never masks commas, so a comma there is plain text.
#[must_use]
pub const fn splits_multi_values(version: VCardVersion) -> bool {
    !matches!(version, VCardVersion::V2_1)
}

/// Whether `text` has to travel quoted-printable encoded.
///
/// Only 2.1 supports the encoding; it is needed for anything outside
/// printable ASCII, line breaks included.
#[must_use]
pub fn needs_quoted_printable(version: VCardVersion, text: &str) -> bool {
    version == VCardVersion::V2_1 && text.chars().any(requires_transport_encoding)
}

/// Characters that cannot appear literally in a 2.1 value.
#[must_use]
pub fn requires_transport_encoding(c: char) -> bool {
    !c.is_ascii() || (c.is_ascii_control() && c != '\t')
}

/// Whether the TYPE parameter lists its values comma-separated.
///
/// 2.1 writes each type as a bare parameter (`TEL;HOME;VOICE`).
#[must_use]
pub const fn writes_bare_type_parameters(version: VCardVersion) -> bool {
    matches!(version, VCardVersion::V2_1)
}

/// Whether preference is a `PREF=n` parameter rather than `TYPE=PREF`.
#[must_use]
pub fn writes_numeric_preference(version: VCardVersion) -> bool {
    version >= VCardVersion::V4_0
}

/// Whether a parameter value is RFC 6868 caret-encoded.
#[must_use]
pub fn uses_caret_encoding(version: VCardVersion) -> bool {
    version >= VCardVersion::V4_0
}

/// Whether GUIDs are written as `urn:uuid:` URNs.
#[must_use]
pub fn writes_uuid_urn(version: VCardVersion) -> bool {
    version >= VCardVersion::V4_0
}

/// Whether date and time values use the basic ISO 8601 format
/// (`19960415`) rather than the extended one (`1996-04-15`).
#[must_use]
pub fn uses_basic_date_format(version: VCardVersion) -> bool {
    version >= VCardVersion::V4_0
}
