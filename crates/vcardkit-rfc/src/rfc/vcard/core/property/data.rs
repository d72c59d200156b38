//! PHOTO, LOGO, SOUND and KEY.

use crate::rfc::vcard::build::VcfSerializer;
use crate::rfc::vcard::core::data::{DataValue, media_type_from_legacy_token};
use crate::rfc::vcard::core::options::VcfOptions;
use crate::rfc::vcard::core::parameter_section::{DataType, ParameterSection, ValueEncoding};
use crate::rfc::vcard::core::version::VCardVersion;
use crate::rfc::vcard::parse::unescape_text;

use super::PropertyValue;

/// Takes the media type from MEDIATYPE or from a legacy TYPE token such
/// as `JPEG`.
fn take_media_type(parameters: &mut ParameterSection) -> Option<String> {
    if let Some(media_type) = parameters.media_type.take() {
        return Some(media_type);
    }
    let index = parameters
        .other_types
        .iter()
        .position(|token| media_type_from_legacy_token(token).is_some())?;
    let token = parameters.other_types.remove(index);
    media_type_from_legacy_token(&token)
}

impl PropertyValue for DataValue {
    fn parse_value(
        raw: &str,
        parameters: &mut ParameterSection,
        version: VCardVersion,
    ) -> Option<Self> {
        let media_type = take_media_type(parameters);
        let data_type = parameters.data_type.take();

        if parameters.encoding == Some(ValueEncoding::Base64) {
            parameters.encoding = None;
            return Some(Self::from_base64(raw, media_type));
        }

        let value = match data_type {
            Some(DataType::Text) => Self::Text(unescape_text(raw, version)),
            _ => match Self::classify(raw) {
                Self::Text(text) => Self::Text(unescape_text(&text, version)),
                Self::Uri(uri) => {
                    parameters.media_type = media_type;
                    Self::Uri(uri)
                }
                bytes @ Self::Bytes { .. } => bytes,
            },
        };
        Some(value)
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }

    fn write(&self, builder: &mut String, version: VCardVersion, _options: VcfOptions) {
        self.append_to(builder, version);
    }

    /// 4.0 carries inline bytes as `data:` URL; 2.1 and 3.0 declare base64
    /// and the media type as TYPE token.
    fn prepare(&self, serializer: &mut VcfSerializer) {
        let version = serializer.version();
        serializer.normalize_parameters(self.as_text());
        let parameters = serializer.parameters_mut();

        match self {
            Self::Bytes { .. } if version == VCardVersion::V4_0 => {
                parameters.data_type = None;
                parameters.media_type = None;
            }
            Self::Bytes { .. } => {
                parameters.encoding = Some(ValueEncoding::Base64);
                parameters.charset = None;
                parameters.data_type = None;
                if let Some(token) = self.legacy_type_token()
                    && !parameters
                        .other_types
                        .iter()
                        .any(|t| t.eq_ignore_ascii_case(&token))
                {
                    parameters.other_types.push(token);
                }
            }
            Self::Uri(_) => {
                parameters.data_type = (version != VCardVersion::V4_0).then_some(DataType::Uri);
            }
            Self::Text(_) => {
                parameters.data_type = (version == VCardVersion::V4_0).then_some(DataType::Text);
            }
        }
    }
}
