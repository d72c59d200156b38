//! `X-` properties.

use crate::error::{RfcError, RfcResult};
use crate::rfc::vcard::build::VcfSerializer;
use crate::rfc::vcard::core::parameter_section::ParameterSection;
use crate::rfc::vcard::core::version::VCardVersion;
use crate::rfc::vcard::parse::ContentLine;

use super::VcfProperty;

/// An extension property whose value is kept verbatim.
///
/// Its parameters are written exactly as they are; no version-dependent
/// normalization is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct NonStandardProperty {
    key: String,
    pub group: Option<String>,
    pub parameters: ParameterSection,
    value: String,
}

impl NonStandardProperty {
    /// Creates an `X-` property.
    ///
    /// ## Errors
    /// Returns an invalid-argument error if `key` does not start with
    /// `X-`, has nothing after the prefix, or contains whitespace.
    pub fn new(key: &str, value: impl Into<String>) -> RfcResult<Self> {
        validate_key(key)?;
        Ok(Self {
            key: key.to_ascii_uppercase(),
            group: None,
            parameters: ParameterSection::default(),
            value: value.into(),
        })
    }

    /// Builds the property from a parsed content line.
    ///
    /// ## Errors
    /// Returns an invalid-argument error if the line is not an `X-` line.
    pub fn from_line(line: &ContentLine, version: VCardVersion) -> RfcResult<Self> {
        validate_key(&line.name)?;
        Ok(Self {
            key: line.name.to_ascii_uppercase(),
            group: line.group.clone(),
            parameters: ParameterSection::parse(&line.params, version),
            value: line.value.clone(),
        })
    }

    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into()).filter(|g: &String| !g.is_empty());
        self
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The raw value, masking included.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

fn validate_key(key: &str) -> RfcResult<()> {
    let has_prefix = key.get(..2).is_some_and(|p| p.eq_ignore_ascii_case("X-"));
    if !has_prefix || key.len() <= 2 || key.chars().any(char::is_whitespace) {
        return Err(RfcError::InvalidArgument(format!(
            "not a non-standard property key: {key:?}"
        )));
    }
    Ok(())
}

impl VcfProperty for NonStandardProperty {
    fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    fn parameters(&self) -> &ParameterSection {
        &self.parameters
    }

    fn parameters_mut(&mut self) -> &mut ParameterSection {
        &mut self.parameters
    }

    fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }

    fn prepare_for_vcf_serialization(&self, _serializer: &mut VcfSerializer) {}

    /// Line breaks cannot appear in a content line and are masked.
    fn append_value(&self, serializer: &mut VcfSerializer) {
        serializer.append_value_with(|builder, _, _| {
            for c in self.value.chars() {
                match c {
                    '\n' => builder.push_str("\\n"),
                    '\r' => {}
                    _ => builder.push(c),
                }
            }
        });
    }
}
