//! GEO and TZ.

use crate::rfc::vcard::build::{VcfSerializer, append_escaped, append_utc_offset};
use crate::rfc::vcard::core::geo::GeoCoordinate;
use crate::rfc::vcard::core::options::VcfOptions;
use crate::rfc::vcard::core::parameter_section::{DataType, ParameterSection};
use crate::rfc::vcard::core::policy;
use crate::rfc::vcard::core::timezone::TimeZoneId;
use crate::rfc::vcard::core::version::VCardVersion;
use crate::rfc::vcard::parse::{parse_utc_offset, unescape_text};

use super::PropertyValue;

/// `geo:` URI in 4.0, `lat;lon` in 3.0, `lat,lon` in 2.1.
impl PropertyValue for GeoCoordinate {
    fn parse_value(
        raw: &str,
        parameters: &mut ParameterSection,
        _version: VCardVersion,
    ) -> Option<Self> {
        parameters.data_type = None;
        Self::parse(raw)
    }

    fn is_empty_value(&self) -> bool {
        false
    }

    fn write(&self, builder: &mut String, version: VCardVersion, _options: VcfOptions) {
        match version {
            VCardVersion::V4_0 => self.append_uri(builder),
            VCardVersion::V3_0 => self.append_pair(builder, ';'),
            VCardVersion::V2_1 => self.append_pair(builder, ','),
        }
    }
}

impl PropertyValue for TimeZoneId {
    fn parse_value(
        raw: &str,
        parameters: &mut ParameterSection,
        version: VCardVersion,
    ) -> Option<Self> {
        parameters.data_type = None;
        Self::parse(&unescape_text(raw, version))
    }

    fn is_empty_value(&self) -> bool {
        self.as_str().trim().is_empty()
    }

    /// Offsets are written in the version's offset syntax, names as text.
    fn write(&self, builder: &mut String, version: VCardVersion, _options: VcfOptions) {
        match parse_utc_offset(self.as_str()) {
            Some(offset) if offset.local_minus_utc() == 0 => {
                builder.push_str(if policy::uses_basic_date_format(version) {
                    "+0000"
                } else {
                    "+00:00"
                });
            }
            Some(offset) => append_utc_offset(builder, offset, version),
            None => append_escaped(builder, self.as_str(), version),
        }
    }

    fn prepare(&self, serializer: &mut VcfSerializer) {
        let is_offset = self.is_utc_offset();
        serializer.normalize_parameters(Some(self.as_str()));
        serializer.parameters_mut().data_type = match (serializer.version(), is_offset) {
            (VCardVersion::V4_0, true) => Some(DataType::UtcOffset),
            (VCardVersion::V3_0, false) => Some(DataType::Text),
            _ => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write<V: PropertyValue>(value: &V, version: VCardVersion) -> String {
        let mut out = String::new();
        value.write(&mut out, version, VcfOptions::default());
        out
    }

    #[test]
    fn geo_per_version() {
        let geo = GeoCoordinate::new(37.386_013, -122.082_932).unwrap();
        assert_eq!(write(&geo, VCardVersion::V4_0), "geo:37.386013,-122.082932");
        assert_eq!(write(&geo, VCardVersion::V3_0), "37.386013;-122.082932");
        assert_eq!(write(&geo, VCardVersion::V2_1), "37.386013,-122.082932");
    }

    #[test]
    fn time_zone_offsets() {
        let tz = TimeZoneId::parse("-05:00").unwrap();
        assert_eq!(write(&tz, VCardVersion::V4_0), "-0500");
        assert_eq!(write(&tz, VCardVersion::V3_0), "-05:00");

        let utc = TimeZoneId::parse("Z").unwrap();
        assert_eq!(write(&utc, VCardVersion::V3_0), "+00:00");
    }

    #[test]
    fn time_zone_names() {
        let tz = TimeZoneId::parse("America/New_York").unwrap();
        assert_eq!(write(&tz, VCardVersion::V4_0), "America/New_York");
    }
}
