//! Values kept as text when they cannot be read.

use crate::rfc::vcard::build::{VcfSerializer, append_escaped};
use crate::rfc::vcard::core::options::VcfOptions;
use crate::rfc::vcard::core::parameter_section::ParameterSection;
use crate::rfc::vcard::core::version::VCardVersion;
use crate::rfc::vcard::parse::unescape_text;

use super::PropertyValue;

/// A `V`, or the text of a value that could not be read as one.
///
/// GEO, REV, TZ, KIND and CLIENTPIDMAP use this so that a malformed value
/// keeps its group and parameters and is written back as it was read.
#[derive(Debug, Clone, PartialEq)]
pub enum OrText<V> {
    Value(V),
    Text(String),
}

impl<V> OrText<V> {
    #[must_use]
    pub const fn value(&self) -> Option<&V> {
        match self {
            Self::Value(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Value(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

impl<V> From<V> for OrText<V> {
    fn from(value: V) -> Self {
        Self::Value(value)
    }
}

impl<V: PropertyValue> PropertyValue for OrText<V> {
    fn parse_value(
        raw: &str,
        parameters: &mut ParameterSection,
        version: VCardVersion,
    ) -> Option<Self> {
        let value = if let Some(value) = V::parse_value(raw, parameters, version) {
            Self::Value(value)
        } else {
            if !raw.trim().is_empty() {
                tracing::warn!(value = raw, "Keeping unreadable value as text");
            }
            Self::Text(unescape_text(raw, version))
        };
        Some(value)
    }

    fn is_empty_value(&self) -> bool {
        match self {
            Self::Value(value) => value.is_empty_value(),
            Self::Text(text) => text.trim().is_empty(),
        }
    }

    fn write(&self, builder: &mut String, version: VCardVersion, options: VcfOptions) {
        match self {
            Self::Value(value) => value.write(builder, version, options),
            Self::Text(text) => append_escaped(builder, text, version),
        }
    }

    fn prepare(&self, serializer: &mut VcfSerializer) {
        match self {
            Self::Value(value) => value.prepare(serializer),
            Self::Text(text) => {
                serializer.normalize_parameters(Some(text));
                serializer.parameters_mut().data_type = None;
            }
        }
    }

    fn append(&self, serializer: &mut VcfSerializer) {
        match self {
            Self::Value(value) => value.append(serializer),
            Self::Text(text) => serializer.append_value_with(|builder, version, _| {
                append_escaped(builder, text, version);
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;
    use crate::rfc::vcard::core::geo::GeoCoordinate;

    #[test]
    fn readable_value_is_kept() {
        let mut params = ParameterSection::default();
        let value =
            OrText::<GeoCoordinate>::parse_value("geo:1.5,2.5", &mut params, VCardVersion::V4_0)
                .unwrap();
        assert!(value.value().is_some());
        assert_eq!(value.as_text(), None);
    }

    #[test]
    fn unreadable_value_becomes_text() {
        let mut params = ParameterSection::default();
        let value =
            OrText::<DateTime<Utc>>::parse_value("yesterday", &mut params, VCardVersion::V4_0)
                .unwrap();
        assert_eq!(value.as_text(), Some("yesterday"));
        assert!(!value.is_empty_value());

        let mut out = String::new();
        value.write(&mut out, VCardVersion::V3_0, VcfOptions::default());
        assert_eq!(out, "yesterday");
    }

    #[test]
    fn blank_value_is_empty() {
        let mut params = ParameterSection::default();
        let value =
            OrText::<GeoCoordinate>::parse_value("  ", &mut params, VCardVersion::V4_0).unwrap();
        assert!(value.is_empty_value());
    }
}
