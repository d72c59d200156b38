//! UID, MEMBER, RELATED and AGENT.

use crate::rfc::vcard::build::{VcfSerializer, append_escaped, serialize_single};
use crate::rfc::vcard::core::contact_id::ContactId;
use crate::rfc::vcard::core::options::VcfOptions;
use crate::rfc::vcard::core::parameter_section::{DataType, ParameterSection};
use crate::rfc::vcard::core::relation::Relation;
use crate::rfc::vcard::core::version::VCardVersion;
use crate::rfc::vcard::parse::unescape_text;

use super::PropertyValue;

/// `VALUE` for identifier-like values: 4.0 defaults to URI and needs
/// `VALUE=text` for free text; older versions default to text and need
/// `VALUE=uri` for a URI.
fn identifier_data_type(version: VCardVersion, is_text: bool, is_uri: bool) -> Option<DataType> {
    match version {
        VCardVersion::V4_0 => is_text.then_some(DataType::Text),
        VCardVersion::V2_1 | VCardVersion::V3_0 => is_uri.then_some(DataType::Uri),
    }
}

impl PropertyValue for ContactId {
    fn parse_value(
        raw: &str,
        parameters: &mut ParameterSection,
        version: VCardVersion,
    ) -> Option<Self> {
        let text = unescape_text(raw, version);
        let value = if parameters.data_type == Some(DataType::Text) {
            Self::Text(text.trim().to_string())
        } else {
            Self::from_text(&text)
        };
        parameters.data_type = None;
        Some(value)
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }

    fn write(&self, builder: &mut String, version: VCardVersion, _options: VcfOptions) {
        self.append_to(builder, version);
    }

    fn prepare(&self, serializer: &mut VcfSerializer) {
        serializer.normalize_parameters(self.as_text());
        let version = serializer.version();
        serializer.parameters_mut().data_type =
            identifier_data_type(version, self.as_text().is_some(), self.as_uri().is_some());
    }
}

impl PropertyValue for Relation {
    fn parse_value(
        raw: &str,
        parameters: &mut ParameterSection,
        version: VCardVersion,
    ) -> Option<Self> {
        let text = unescape_text(raw, version);
        let value = if parameters.data_type == Some(DataType::Text) {
            Self::Text(text.trim().to_string())
        } else {
            Self::from_text(&text)
        };
        parameters.data_type = None;
        Some(value)
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }

    /// An embedded card is written inline and masked in 3.0. 2.1 writes it
    /// as nested lines after the property (see [`append`](Self::append)).
    /// 4.0 cannot embed; a card that was not replaced by a reference is
    /// written as its UID, or as its formatted name.
    fn write(&self, builder: &mut String, version: VCardVersion, options: VcfOptions) {
        match self {
            Self::VCard(card) => match version {
                VCardVersion::V2_1 => {}
                VCardVersion::V3_0 => {
                    let unfolded = options.difference(VcfOptions::LIMIT_LINE_LENGTH);
                    let nested = serialize_single(card, version, unfolded);
                    append_escaped(builder, nested.trim_end(), version);
                }
                VCardVersion::V4_0 => {
                    if let Some(uid) = card.uid() {
                        uid.append_to(builder, version);
                    } else if let Some(name) = card.formatted_name() {
                        append_escaped(builder, name, version);
                    }
                }
            },
            Self::Uuid(uuid) => ContactId::Uuid(*uuid).append_to(builder, version),
            Self::Uri(uri) => builder.push_str(uri.as_str()),
            Self::Text(text) => append_escaped(builder, text, version),
        }
    }

    fn prepare(&self, serializer: &mut VcfSerializer) {
        let version = serializer.version();
        let data_type = match self {
            Self::VCard(card) => (version == VCardVersion::V4_0 && card.uid().is_none())
                .then_some(DataType::Text),
            Self::Uuid(_) => None,
            Self::Uri(_) => identifier_data_type(version, false, true),
            Self::Text(_) => identifier_data_type(version, true, false),
        };
        serializer.normalize_parameters(self.as_text());
        serializer.parameters_mut().data_type = data_type;
    }

    fn append(&self, serializer: &mut VcfSerializer) {
        if let Self::VCard(card) = self
            && serializer.version() == VCardVersion::V2_1
        {
            let nested = serialize_single(card, VCardVersion::V2_1, serializer.options());
            serializer.embed_lines(nested);
            return;
        }
        serializer.append_value_with(|builder, version, options| {
            self.write(builder, version, options);
        });
    }
}
