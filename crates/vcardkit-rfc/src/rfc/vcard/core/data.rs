//! Binary or referenced content (PHOTO, LOGO, SOUND, KEY).

use crate::rfc::vcard::build::append_escaped;
use crate::rfc::vcard::encoding::binary;

use super::uri::AbsoluteUri;
use super::version::VCardVersion;

/// Media type written for inline data of unknown type.
pub const DEFAULT_MEDIA_TYPE: &str = "application/octet-stream";

/// Exactly one of inline bytes, a URI, or free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataValue {
    Bytes {
        data: Vec<u8>,
        media_type: Option<String>,
    },
    Uri(AbsoluteUri),
    Text(String),
}

impl Default for DataValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl DataValue {
    #[must_use]
    pub fn from_bytes(data: Vec<u8>, media_type: Option<String>) -> Self {
        Self::Bytes {
            data,
            media_type: media_type.filter(|m| !m.trim().is_empty()),
        }
    }

    /// A `data:` URL is stored as the bytes it carries.
    #[must_use]
    pub fn from_uri(uri: AbsoluteUri) -> Self {
        if uri.scheme().eq_ignore_ascii_case("data")
            && let Some(value) = parse_data_url(uri.as_str())
        {
            return value;
        }
        Self::Uri(uri)
    }

    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Classifies a raw value that was not declared as inline binary:
    /// a `data:` URL, another absolute URI, or text.
    #[must_use]
    pub fn classify(raw: &str) -> Self {
        let raw = raw.trim();
        if let Some(value) = parse_data_url(raw) {
            return value;
        }
        AbsoluteUri::parse(raw).map_or_else(|| Self::Text(raw.to_string()), Self::Uri)
    }

    /// Decodes base64 content. Undecodable content is kept as text.
    #[must_use]
    pub fn from_base64(raw: &str, media_type: Option<String>) -> Self {
        binary::decode(raw).map_or_else(
            || {
                tracing::warn!("undecodable base64 data kept as text");
                Self::Text(raw.trim().to_string())
            },
            |data| Self::from_bytes(data, media_type),
        )
    }

    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes { data, .. } => Some(data),
            Self::Uri(_) | Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn media_type(&self) -> Option<&str> {
        match self {
            Self::Bytes { media_type, .. } => media_type.as_deref(),
            Self::Uri(_) | Self::Text(_) => None,
        }
    }

    #[must_use]
    pub const fn as_uri(&self) -> Option<&AbsoluteUri> {
        match self {
            Self::Uri(uri) => Some(uri),
            Self::Bytes { .. } | Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Bytes { .. } | Self::Uri(_) => None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Bytes { data, .. } => data.is_empty(),
            Self::Uri(_) => false,
            Self::Text(text) => text.trim().is_empty(),
        }
    }

    /// The TYPE token 2.1 and 3.0 use for the media type (`JPEG` for
    /// `image/jpeg`).
    #[must_use]
    pub fn legacy_type_token(&self) -> Option<String> {
        let media_type = self.media_type()?;
        let subtype = media_type.split_once('/').map_or(media_type, |(_, s)| s);
        let subtype = subtype.split(';').next().unwrap_or(subtype).trim();
        (!subtype.is_empty()).then(|| subtype.to_ascii_uppercase())
    }

    /// Appends the value: bytes as a `data:` URL in 4.0 and as plain base64
    /// before.
    pub fn append_to(&self, builder: &mut String, version: VCardVersion) {
        match self {
            Self::Bytes { data, media_type } if version == VCardVersion::V4_0 => {
                builder.push_str("data:");
                builder.push_str(media_type.as_deref().unwrap_or(DEFAULT_MEDIA_TYPE));
                builder.push_str(";base64,");
                builder.push_str(&binary::encode(data));
            }
            Self::Bytes { data, .. } => builder.push_str(&binary::encode(data)),
            Self::Uri(uri) => builder.push_str(uri.as_str()),
            Self::Text(text) => append_escaped(builder, text, version),
        }
    }
}

/// Media type for a legacy TYPE token such as `JPEG` or `WAVE`.
#[must_use]
pub fn media_type_from_legacy_token(token: &str) -> Option<String> {
    if token.contains('/') {
        return Some(token.to_ascii_lowercase());
    }
    let media_type = match token.to_ascii_uppercase().as_str() {
        "JPEG" | "JPG" => "image/jpeg",
        "GIF" => "image/gif",
        "PNG" => "image/png",
        "BMP" => "image/bmp",
        "TIFF" => "image/tiff",
        "WAVE" | "WAV" => "audio/wav",
        "MP3" | "MPEG" => "audio/mpeg",
        "AIFF" => "audio/aiff",
        "PGP" => "application/pgp-keys",
        "X509" => "application/pkix-cert",
        _ => return None,
    };
    Some(media_type.to_string())
}

/// Parses `data:[<media type>][;base64],<data>`.
fn parse_data_url(raw: &str) -> Option<DataValue> {
    let scheme = raw.get(..5)?;
    if !scheme.eq_ignore_ascii_case("data:") {
        return None;
    }
    let (header, payload) = raw[5..].split_once(',')?;

    let mut parts = header.split(';');
    let media_type = parts
        .next()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_ascii_lowercase);
    let is_base64 = parts.any(|p| p.trim().eq_ignore_ascii_case("base64"));

    let data = if is_base64 {
        binary::decode(payload)?
    } else {
        percent_decode(payload)
    };
    Some(DataValue::from_bytes(data, media_type))
}

fn percent_decode(s: &str) -> Vec<u8> {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%'
            && let Some(byte) = s.get(i + 1..i + 3).and_then(|h| u8::from_str_radix(h, 16).ok())
        {
            out.push(byte);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    out
}
