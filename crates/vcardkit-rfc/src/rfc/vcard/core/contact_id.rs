//! Contact identifier (UID, MEMBER): a GUID, an absolute URI or free text.

use uuid::Uuid;

use crate::error::{RfcError, RfcResult};
use crate::rfc::vcard::build::append_escaped;

use super::policy;
use super::uri::AbsoluteUri;
use super::version::VCardVersion;

/// Exactly one of GUID, absolute URI or free text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContactId {
    Uuid(Uuid),
    Uri(AbsoluteUri),
    Text(String),
}

impl Default for ContactId {
    fn default() -> Self {
        Self::empty()
    }
}

impl ContactId {
    /// The empty identifier.
    #[must_use]
    pub const fn empty() -> Self {
        Self::Text(String::new())
    }

    /// Classifies a text: a GUID first, then an absolute URI (a
    /// `urn:uuid:` URN becomes the GUID), otherwise text.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Self::empty();
        }
        if let Ok(uuid) = Uuid::try_parse(text) {
            return Self::Uuid(uuid);
        }
        if let Some(uri) = AbsoluteUri::parse(text) {
            return Self::from_uri(uri);
        }
        Self::Text(text.to_string())
    }

    /// Wraps an absolute URI, unwrapping `urn:uuid:` URNs to the GUID.
    #[must_use]
    pub fn from_uri(uri: AbsoluteUri) -> Self {
        uuid_from_urn(&uri).map_or(Self::Uri(uri), Self::Uuid)
    }

    /// Parses `uri` as an absolute URI.
    ///
    /// ## Errors
    /// Returns an invalid-argument error if `uri` is not an absolute URI.
    pub fn from_uri_str(uri: &str) -> RfcResult<Self> {
        AbsoluteUri::parse(uri.trim())
            .map(Self::from_uri)
            .ok_or_else(|| RfcError::InvalidArgument(format!("not an absolute URI: {uri}")))
    }

    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self::Uuid(uuid)
    }

    #[must_use]
    pub const fn as_uuid(&self) -> Option<&Uuid> {
        match self {
            Self::Uuid(uuid) => Some(uuid),
            Self::Uri(_) | Self::Text(_) => None,
        }
    }

    #[must_use]
    pub const fn as_uri(&self) -> Option<&AbsoluteUri> {
        match self {
            Self::Uri(uri) => Some(uri),
            Self::Uuid(_) | Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Uuid(_) | Self::Uri(_) => None,
        }
    }

    /// Structural emptiness: empty text or the nil GUID.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Uuid(uuid) => uuid.is_nil(),
            Self::Uri(_) => false,
            Self::Text(text) => text.trim().is_empty(),
        }
    }

    /// Whether the value is written as a URI (`VALUE=uri` in 4.0).
    #[must_use]
    pub const fn is_uri_valued(&self, version: VCardVersion) -> bool {
        match self {
            Self::Uuid(_) => matches!(version, VCardVersion::V4_0),
            Self::Uri(_) => true,
            Self::Text(_) => false,
        }
    }

    /// Appends the identifier: GUIDs as `urn:uuid:` URN in 4.0 and bare
    /// before.
    pub fn append_to(&self, builder: &mut String, version: VCardVersion) {
        match self {
            Self::Uuid(uuid) if policy::writes_uuid_urn(version) => {
                builder.push_str(uuid.urn().encode_lower(&mut Uuid::encode_buffer()));
            }
            Self::Uuid(uuid) => {
                builder.push_str(uuid.hyphenated().encode_lower(&mut Uuid::encode_buffer()));
            }
            Self::Uri(uri) => builder.push_str(uri.as_str()),
            Self::Text(text) => append_escaped(builder, text, version),
        }
    }
}

impl From<Uuid> for ContactId {
    fn from(uuid: Uuid) -> Self {
        Self::Uuid(uuid)
    }
}

/// The GUID of a `urn:uuid:` URN.
pub(crate) fn uuid_from_urn(uri: &AbsoluteUri) -> Option<Uuid> {
    if !uri.scheme().eq_ignore_ascii_case("urn") {
        return None;
    }
    let path = uri.url().path();
    let nid = path.get(..5)?;
    if !nid.eq_ignore_ascii_case("uuid:") {
        return None;
    }
    Uuid::try_parse(&path[5..]).ok()
}
