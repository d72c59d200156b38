//! BDAY, ANNIVERSARY and REV.

use chrono::{DateTime, Utc};

use crate::rfc::vcard::build::{VcfSerializer, append_timestamp};
use crate::rfc::vcard::core::datetime::DateAndOrTime;
use crate::rfc::vcard::core::options::VcfOptions;
use crate::rfc::vcard::core::parameter_section::ParameterSection;
use crate::rfc::vcard::core::version::VCardVersion;
use crate::rfc::vcard::parse::{parse_timestamp, unescape_text};

use super::PropertyValue;

impl PropertyValue for DateAndOrTime {
    fn parse_value(
        raw: &str,
        parameters: &mut ParameterSection,
        version: VCardVersion,
    ) -> Option<Self> {
        let value = match Self::parse(raw, parameters.data_type.as_ref()) {
            Self::Text(text) => Self::Text(unescape_text(&text, version)),
            value => value,
        };
        // The VALUE parameter is derived from the value when writing.
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
        let text = self.as_text().map(str::to_string);
        serializer.normalize_parameters(text.as_deref());
        serializer.parameters_mut().data_type = self.data_type();
    }
}

impl PropertyValue for DateTime<Utc> {
    fn parse_value(
        raw: &str,
        parameters: &mut ParameterSection,
        _version: VCardVersion,
    ) -> Option<Self> {
        parameters.data_type = None;
        parse_timestamp(raw)
    }

    fn is_empty_value(&self) -> bool {
        false
    }

    fn write(&self, builder: &mut String, version: VCardVersion, _options: VcfOptions) {
        append_timestamp(builder, *self, version);
    }

    fn prepare(&self, serializer: &mut VcfSerializer) {
        serializer.normalize_parameters(None);
        serializer.parameters_mut().data_type = None;
    }
}
