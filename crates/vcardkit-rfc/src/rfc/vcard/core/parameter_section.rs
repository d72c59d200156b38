//! Typed parameter metadata attached to every property.

use std::fmt;

use crate::error::{RfcError, RfcResult};
use crate::rfc::vcard::build::append_param_value;

use super::flags::{
    AddressKind, FlagOption, ImppKind, PhoneKind, PropertyClassKind, RelationKind, TypeTokens,
};
use super::geo::GeoCoordinate;
use super::options::VcfOptions;
use super::parameter::VCardParameter;
use super::policy;
use super::timezone::TimeZoneId;
use super::version::VCardVersion;

/// Transfer encoding of a property value (ENCODING parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueEncoding {
    QuotedPrintable,
    Base64,
    EightBit,
}

impl ValueEncoding {
    /// Parses an ENCODING value; `b` is the 3.0 spelling of base64.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "QUOTED-PRINTABLE" => Some(Self::QuotedPrintable),
            "BASE64" | "B" => Some(Self::Base64),
            "8BIT" => Some(Self::EightBit),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self, version: VCardVersion) -> &'static str {
        match (self, version) {
            (Self::QuotedPrintable, _) => "QUOTED-PRINTABLE",
            (Self::Base64, VCardVersion::V2_1) => "BASE64",
            (Self::Base64, _) => "b",
            (Self::EightBit, _) => "8BIT",
        }
    }
}

/// Declared value type (VALUE parameter).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataType {
    Text,
    Uri,
    Date,
    Time,
    DateTime,
    DateAndOrTime,
    Timestamp,
    Boolean,
    Integer,
    Float,
    UtcOffset,
    LanguageTag,
    /// 3.0 `VALUE=binary`.
    Binary,
    /// 2.1 `VALUE=CONTENT-ID`.
    ContentId,
    /// 3.0 `VALUE=vcard` (inline AGENT).
    VCard,
    Other(String),
}

impl DataType {
    /// Parses a VALUE parameter. 2.1 spells URIs `URL`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Self::Text,
            "uri" | "url" => Self::Uri,
            "date" => Self::Date,
            "time" => Self::Time,
            "date-time" => Self::DateTime,
            "date-and-or-time" => Self::DateAndOrTime,
            "timestamp" => Self::Timestamp,
            "boolean" => Self::Boolean,
            "integer" => Self::Integer,
            "float" => Self::Float,
            "utc-offset" => Self::UtcOffset,
            "language-tag" => Self::LanguageTag,
            "binary" => Self::Binary,
            "content-id" | "cid" => Self::ContentId,
            "vcard" => Self::VCard,
            _ => Self::Other(s.trim().to_string()),
        }
    }

    /// Token written for `version`.
    #[must_use]
    pub fn as_str(&self, version: VCardVersion) -> &str {
        match self {
            Self::Text => "text",
            Self::Uri if version == VCardVersion::V2_1 => "URL",
            Self::Uri => "uri",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime => "date-time",
            Self::DateAndOrTime => "date-and-or-time",
            Self::Timestamp => "timestamp",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::UtcOffset => "utc-offset",
            Self::LanguageTag => "language-tag",
            Self::Binary => "binary",
            Self::ContentId => "CONTENT-ID",
            Self::VCard => "vcard",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str(VCardVersion::V4_0))
    }
}

/// Per-property metadata: preference, type flags, encoding, language and
/// the remaining vCard parameters.
///
/// The property value itself never changes after construction; this
/// section is the mutable half of a property and is adjusted by
/// [`normalize`](Self::normalize) before serialization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSection {
    preference: Option<u8>,
    pub property_class: Option<PropertyClassKind>,
    pub address_kind: Option<AddressKind>,
    pub phone_kind: Option<PhoneKind>,
    pub relation_kind: Option<RelationKind>,
    pub impp_kind: Option<ImppKind>,
    /// TYPE tokens no flag enumeration knows (`internet`, `x-custom`).
    pub other_types: Vec<String>,
    pub language: Option<String>,
    pub encoding: Option<ValueEncoding>,
    pub charset: Option<String>,
    pub data_type: Option<DataType>,
    /// Formatted delivery address (ADR LABEL parameter).
    pub label: Option<String>,
    pub alt_id: Option<String>,
    pub pid: Vec<String>,
    pub media_type: Option<String>,
    pub sort_as: Vec<String>,
    pub calendar_scale: Option<String>,
    pub geo: Option<GeoCoordinate>,
    pub time_zone: Option<TimeZoneId>,
    /// RFC 9554.
    pub phonetic: Option<String>,
    /// RFC 9554.
    pub script: Option<String>,
    /// RFC 9554.
    pub service_type: Option<String>,
    /// RFC 9554.
    pub user_name: Option<String>,
    /// RFC 9554.
    pub author_name: Option<String>,
    /// RFC 9554.
    pub derived: bool,
    /// `X-` parameters and parameters this crate does not interpret.
    pub non_standard: Vec<VCardParameter>,
}

impl ParameterSection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the section from the raw parameters of a content line.
    ///
    /// Unknown TYPE tokens are kept in [`other_types`](Self::other_types),
    /// unknown parameters in [`non_standard`](Self::non_standard).
    #[must_use]
    pub fn parse(params: &[VCardParameter], version: VCardVersion) -> Self {
        let mut section = Self::default();

        for param in params {
            let first = param.value().unwrap_or_default();
            match param.name.as_str() {
                "TYPE" => {
                    for token in param.values.iter().flat_map(|v| v.split(',')) {
                        section.add_type_token(token.trim());
                    }
                }
                "PREF" => match first.trim().parse::<u8>() {
                    Ok(pref) if (1..=100).contains(&pref) => section.preference = Some(pref),
                    _ => tracing::warn!(value = first, "ignoring invalid PREF parameter"),
                },
                "LANGUAGE" => section.language = non_empty(first),
                "ENCODING" => section.encoding = ValueEncoding::parse(first),
                "CHARSET" => section.charset = non_empty(first),
                "VALUE" => {
                    section.data_type = (!first.trim().is_empty()).then(|| DataType::parse(first));
                }
                "LABEL" => section.label = non_empty(&param.values.join(",")),
                "ALTID" => section.alt_id = non_empty(first),
                "PID" => section.pid.clone_from(&param.values),
                "MEDIATYPE" => section.media_type = non_empty(first),
                "SORT-AS" => section.sort_as.clone_from(&param.values),
                "CALSCALE" => section.calendar_scale = non_empty(first),
                "GEO" => section.geo = GeoCoordinate::parse(&param.values.join(",")),
                "TZ" => section.time_zone = TimeZoneId::parse(first),
                "PHONETIC" => section.phonetic = non_empty(first),
                "SCRIPT" => section.script = non_empty(first),
                "SERVICE-TYPE" => section.service_type = non_empty(first),
                "USERNAME" => section.user_name = non_empty(first),
                "AUTHOR-NAME" => section.author_name = non_empty(first),
                "DERIVED" => section.derived = first.trim().eq_ignore_ascii_case("true"),
                _ => section.non_standard.push(param.clone()),
            }
        }

        if version == VCardVersion::V2_1 && section.encoding == Some(ValueEncoding::EightBit) {
            section.encoding = None;
        }

        section
    }

    /// Preference 1 (most preferred) to 100, if set.
    #[must_use]
    pub const fn preference(&self) -> Option<u8> {
        self.preference
    }

    /// Sets or clears the preference.
    ///
    /// ## Errors
    /// Returns an invalid-argument error for values outside 1..=100.
    pub fn set_preference(&mut self, preference: Option<u8>) -> RfcResult<()> {
        if let Some(pref) = preference
            && !(1..=100).contains(&pref)
        {
            return Err(RfcError::InvalidArgument(format!(
                "preference must be within 1..=100, got {pref}"
            )));
        }
        self.preference = preference;
        Ok(())
    }

    /// Classifies one TYPE token into the matching flag enumeration.
    pub fn add_type_token(&mut self, token: &str) {
        if token.is_empty() {
            return;
        }
        if token.eq_ignore_ascii_case("pref") {
            self.preference.get_or_insert(1);
        } else if let Some(flag) = PropertyClassKind::from_token(token) {
            self.property_class = Some(self.property_class.set(flag));
        } else if let Some(flag) = PhoneKind::from_token(token) {
            self.phone_kind = Some(self.phone_kind.set(flag));
        } else if let Some(flag) = AddressKind::from_token(token) {
            self.address_kind = Some(self.address_kind.set(flag));
        } else if let Some(flag) = ImppKind::from_token(token) {
            self.impp_kind = Some(self.impp_kind.set(flag));
        } else if let Some(flag) = RelationKind::from_token(token) {
            self.relation_kind = Some(self.relation_kind.set(flag));
        } else if let Some(encoding) = ValueEncoding::parse(token) {
            self.encoding = Some(encoding);
        } else if !self
            .other_types
            .iter()
            .any(|t| t.eq_ignore_ascii_case(token))
        {
            self.other_types.push(token.to_string());
        }
    }

    /// Applies the default adjustments for `version` before a value is
    /// written: 4.0 forbids legacy encodings and charsets, 3.0 has no
    /// quoted-printable and is always UTF-8, and 2.1 switches to
    /// quoted-printable when `text` cannot travel literally.
    pub fn normalize(&mut self, version: VCardVersion, text: Option<&str>) {
        match version {
            VCardVersion::V4_0 => {
                self.encoding = None;
                self.charset = None;
            }
            VCardVersion::V3_0 => {
                self.charset = None;
                if self.encoding == Some(ValueEncoding::QuotedPrintable) {
                    self.encoding = None;
                }
            }
            VCardVersion::V2_1 => {
                if self.encoding == Some(ValueEncoding::QuotedPrintable) {
                    self.encoding = None;
                }
                self.charset = None;
                if let Some(text) = text
                    && policy::needs_quoted_printable(version, text)
                {
                    self.encoding = Some(ValueEncoding::QuotedPrintable);
                    self.charset = Some(policy::DEFAULT_CHARSET.to_string());
                }
            }
        }
    }

    /// Whether the value that follows is quoted-printable encoded.
    #[must_use]
    pub fn is_quoted_printable(&self) -> bool {
        self.encoding == Some(ValueEncoding::QuotedPrintable)
    }

    /// Uppercase for 2.1/3.0, lowercase for 4.0.
    fn type_tokens(&self, version: VCardVersion) -> Vec<String> {
        let mut tokens: Vec<&str> = Vec::new();
        if let Some(kind) = self.property_class {
            tokens.extend(kind.type_tokens(version));
        }
        if let Some(kind) = self.phone_kind {
            tokens.extend(kind.type_tokens(version));
        }
        if let Some(kind) = self.address_kind {
            tokens.extend(kind.type_tokens(version));
        }
        if let Some(kind) = self.impp_kind {
            tokens.extend(kind.type_tokens(version));
        }
        if let Some(kind) = self.relation_kind {
            tokens.extend(kind.type_tokens(version));
        }

        let mut result: Vec<String> = if version == VCardVersion::V4_0 {
            tokens.into_iter().map(str::to_string).collect()
        } else {
            tokens.into_iter().map(str::to_ascii_uppercase).collect()
        };
        result.extend(self.other_types.iter().cloned());

        if self.preference.is_some() && !policy::writes_numeric_preference(version) {
            result.push("PREF".to_string());
        }

        result
    }

    /// Appends `;NAME=value` segments for `version`.
    ///
    /// Parameters the version cannot express are left out; `X-`
    /// parameters are only written with
    /// [`VcfOptions::WRITE_NON_STANDARD_PARAMETERS`].
    pub fn append_to(&self, builder: &mut String, version: VCardVersion, options: VcfOptions) {
        if let Some(data_type) = &self.data_type {
            append_param(builder, "VALUE", data_type.as_str(version), version);
        }

        let types = self.type_tokens(version);
        if policy::writes_bare_type_parameters(version) {
            for token in &types {
                builder.push(';');
                builder.push_str(token);
            }
        } else if !types.is_empty() {
            builder.push_str(";TYPE=");
            for (i, token) in types.iter().enumerate() {
                if i > 0 {
                    builder.push(',');
                }
                append_param_value(builder, token, version);
            }
        }

        if let Some(pref) = self.preference
            && policy::writes_numeric_preference(version)
        {
            append_param(builder, "PREF", &pref.to_string(), version);
        }
        if let Some(language) = &self.language {
            append_param(builder, "LANGUAGE", language, version);
        }
        if let Some(encoding) = self.encoding {
            append_param(builder, "ENCODING", encoding.as_str(version), version);
        }
        if let Some(charset) = &self.charset {
            append_param(builder, "CHARSET", charset, version);
        }

        if version == VCardVersion::V4_0 {
            self.append_modern(builder, version);
        }

        if options.contains(VcfOptions::WRITE_NON_STANDARD_PARAMETERS) {
            for param in &self.non_standard {
                builder.push(';');
                builder.push_str(&param.name);
                builder.push('=');
                for (i, value) in param.values.iter().enumerate() {
                    if i > 0 {
                        builder.push(',');
                    }
                    append_param_value(builder, value, version);
                }
            }
        }
    }

    fn append_modern(&self, builder: &mut String, version: VCardVersion) {
        let optional = [
            ("LABEL", &self.label),
            ("ALTID", &self.alt_id),
            ("MEDIATYPE", &self.media_type),
            ("CALSCALE", &self.calendar_scale),
        ];
        for (name, value) in optional {
            if let Some(value) = value {
                append_param(builder, name, value, version);
            }
        }

        if !self.pid.is_empty() {
            append_param(builder, "PID", &self.pid.join(","), version);
        }
        if !self.sort_as.is_empty() {
            append_param(builder, "SORT-AS", &self.sort_as.join(","), version);
        }
        if let Some(geo) = &self.geo {
            let mut uri = String::new();
            geo.append_uri(&mut uri);
            append_param(builder, "GEO", &uri, version);
        }
        if let Some(tz) = &self.time_zone {
            append_param(builder, "TZ", tz.as_str(), version);
        }

        let rfc9554 = [
            ("PHONETIC", &self.phonetic),
            ("SCRIPT", &self.script),
            ("SERVICE-TYPE", &self.service_type),
            ("USERNAME", &self.user_name),
            ("AUTHOR-NAME", &self.author_name),
        ];
        for (name, value) in rfc9554 {
            if let Some(value) = value {
                append_param(builder, name, value, version);
            }
        }
        if self.derived {
            builder.push_str(";DERIVED=true");
        }
    }
}

fn append_param(builder: &mut String, name: &str, value: &str, version: VCardVersion) {
    builder.push(';');
    builder.push_str(name);
    builder.push('=');
    append_param_value(builder, value, version);
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}
