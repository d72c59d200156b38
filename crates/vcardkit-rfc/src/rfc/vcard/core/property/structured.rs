//! Compound values: N, ADR, ORG, GENDER, KIND, CLIENTPIDMAP.

use crate::rfc::vcard::core::address::Address;
use crate::rfc::vcard::core::name::Name;
use crate::rfc::vcard::core::options::VcfOptions;
use crate::rfc::vcard::core::parameter_section::ParameterSection;
use crate::rfc::vcard::core::structured::{ClientPidMap, Gender, Organization, VCardKind};
use crate::rfc::vcard::core::version::VCardVersion;

use super::PropertyValue;

impl PropertyValue for Name {
    fn parse_value(
        raw: &str,
        _parameters: &mut ParameterSection,
        version: VCardVersion,
    ) -> Option<Self> {
        Some(Self::parse(raw, version))
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }

    fn write(&self, builder: &mut String, version: VCardVersion, options: VcfOptions) {
        self.append_to(builder, version, options);
    }
}

impl PropertyValue for Address {
    fn parse_value(
        raw: &str,
        _parameters: &mut ParameterSection,
        version: VCardVersion,
    ) -> Option<Self> {
        Some(Self::parse(raw, version))
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }

    fn write(&self, builder: &mut String, version: VCardVersion, options: VcfOptions) {
        self.append_to(builder, version, options);
    }
}

impl PropertyValue for Organization {
    fn parse_value(
        raw: &str,
        _parameters: &mut ParameterSection,
        version: VCardVersion,
    ) -> Option<Self> {
        Some(Self::parse(raw, version))
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }

    fn write(&self, builder: &mut String, version: VCardVersion, _options: VcfOptions) {
        self.append_to(builder, version);
    }
}

/// Before 4.0 the value is the `X-GENDER` text, which only knows male and
/// female.
impl PropertyValue for Gender {
    fn parse_value(
        raw: &str,
        _parameters: &mut ParameterSection,
        version: VCardVersion,
    ) -> Option<Self> {
        Some(Self::parse(raw, version))
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }

    fn write(&self, builder: &mut String, version: VCardVersion, _options: VcfOptions) {
        if version == VCardVersion::V4_0 {
            self.append_to(builder, version);
        } else if let Some(text) = self.sex.and_then(|sex| sex.legacy_text()) {
            builder.push_str(text);
        }
    }
}

impl PropertyValue for VCardKind {
    fn parse_value(
        raw: &str,
        _parameters: &mut ParameterSection,
        _version: VCardVersion,
    ) -> Option<Self> {
        Self::parse(raw)
    }

    fn is_empty_value(&self) -> bool {
        false
    }

    fn write(&self, builder: &mut String, _version: VCardVersion, _options: VcfOptions) {
        builder.push_str(self.as_str());
    }
}

impl PropertyValue for ClientPidMap {
    fn parse_value(
        raw: &str,
        _parameters: &mut ParameterSection,
        _version: VCardVersion,
    ) -> Option<Self> {
        Self::parse(raw)
    }

    fn is_empty_value(&self) -> bool {
        false
    }

    fn write(&self, builder: &mut String, _version: VCardVersion, _options: VcfOptions) {
        self.append_to(builder);
    }
}
