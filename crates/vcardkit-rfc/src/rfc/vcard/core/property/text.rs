//! Text and text-list values.

use crate::rfc::vcard::build::append_escaped;
use crate::rfc::vcard::core::options::VcfOptions;
use crate::rfc::vcard::core::parameter_section::ParameterSection;
use crate::rfc::vcard::core::version::VCardVersion;
use crate::rfc::vcard::parse::{split_component, unescape_text};

use super::PropertyValue;

impl PropertyValue for String {
    fn parse_value(
        raw: &str,
        _parameters: &mut ParameterSection,
        version: VCardVersion,
    ) -> Option<Self> {
        Some(unescape_text(raw, version))
    }

    fn is_empty_value(&self) -> bool {
        self.trim().is_empty()
    }

    fn write(&self, builder: &mut String, version: VCardVersion, _options: VcfOptions) {
        append_escaped(builder, self, version);
    }
}

impl PropertyValue for Vec<String> {
    fn parse_value(
        raw: &str,
        _parameters: &mut ParameterSection,
        version: VCardVersion,
    ) -> Option<Self> {
        Some(
            split_component(raw, version)
                .into_iter()
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect(),
        )
    }

    fn is_empty_value(&self) -> bool {
        self.iter().all(|item| item.trim().is_empty())
    }

    fn write(&self, builder: &mut String, version: VCardVersion, _options: VcfOptions) {
        let mut first = true;
        for item in self.iter().filter(|item| !item.trim().is_empty()) {
            if !first {
                builder.push(',');
            }
            first = false;
            append_escaped(builder, item, version);
        }
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
    fn text_masking_per_version() {
        let text = "a;b,c".to_string();
        assert_eq!(write(&text, VCardVersion::V4_0), r"a\;b\,c");
        assert_eq!(write(&text, VCardVersion::V2_1), r"a\;b,c");
    }

    #[test]
    fn collection_splits_on_unmasked_commas() {
        let mut params = ParameterSection::default();
        let items =
            Vec::<String>::parse_value(r"work, a\,b ,,friends", &mut params, VCardVersion::V3_0)
                .unwrap();
        assert_eq!(items, ["work", "a,b", "friends"]);
        assert_eq!(write(&items, VCardVersion::V3_0), r"work,a\,b,friends");
    }

    #[test]
    fn collection_emptiness() {
        assert!(vec![String::new(), " ".to_string()].is_empty_value());
        assert!(!vec!["x".to_string()].is_empty_value());
    }
}
