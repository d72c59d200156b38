//! vCard properties: a typed value plus its parameter section and group.
//!
//! ## Summary
//! Every property follows the same two-step serialization protocol driven
//! by [`VcfSerializer`]:
//!
//! 1. [`VcfProperty::prepare_for_vcf_serialization`] adjusts the working
//!    copy of the parameters for the target version. It writes no text.
//! 2. [`VcfProperty::append_value`] appends the value, and only the value,
//!    to the current line.
//!
//! The key, the parameters, line folding and the line break belong to the
//! serializer.

mod data;
mod datetime;
mod fallback;
mod location;
mod non_standard;
mod relation;
mod structured;
mod text;

use std::fmt;

use chrono::{DateTime, Utc};

use crate::rfc::vcard::build::VcfSerializer;
use crate::rfc::vcard::parse::ContentLine;

use super::address::Address;
use super::contact_id::ContactId;
use super::data::DataValue;
use super::datetime::DateAndOrTime;
use super::geo::GeoCoordinate;
use super::name::Name;
use super::options::VcfOptions;
use super::parameter_section::ParameterSection;
use super::relation::Relation;
use super::structured::{ClientPidMap, Gender, Organization, VCardKind};
use super::timezone::TimeZoneId;
use super::version::VCardVersion;

pub use fallback::OrText;
pub use non_standard::NonStandardProperty;

/// The serialization protocol every property implements.
pub trait VcfProperty {
    /// `item1` in `item1.TEL:…`.
    fn group(&self) -> Option<&str>;

    fn parameters(&self) -> &ParameterSection;

    fn parameters_mut(&mut self) -> &mut ParameterSection;

    /// Whether the property carries nothing worth writing.
    fn is_empty(&self) -> bool;

    /// Adjusts the serializer's working copy of the parameters.
    fn prepare_for_vcf_serialization(&self, serializer: &mut VcfSerializer) {
        serializer.normalize_parameters(None);
    }

    /// Appends the value to the serializer's current line.
    fn append_value(&self, serializer: &mut VcfSerializer);
}

/// A value type that can sit inside a [`Property`].
pub trait PropertyValue: Clone + PartialEq + fmt::Debug {
    /// Parses the raw value of a content line. The value has already been
    /// transfer-decoded. Parameters the value consumes may be removed from
    /// `parameters`.
    ///
    /// Returns `None` if the value cannot be represented at all; the line
    /// is then skipped.
    fn parse_value(
        raw: &str,
        parameters: &mut ParameterSection,
        version: VCardVersion,
    ) -> Option<Self>;

    fn is_empty_value(&self) -> bool;

    /// Writes the value text for `version`.
    fn write(&self, builder: &mut String, version: VCardVersion, options: VcfOptions);

    /// Default preparation: normalize with the rendered text so that 2.1
    /// switches to quoted-printable when needed.
    fn prepare(&self, serializer: &mut VcfSerializer) {
        let text = serializer.render(|builder, version, options| {
            self.write(builder, version, options);
        });
        serializer.normalize_parameters(Some(&text));
    }

    fn append(&self, serializer: &mut VcfSerializer) {
        serializer.append_value_with(|builder, version, options| {
            self.write(builder, version, options);
        });
    }
}

/// A property holding a value of type `V`.
///
/// The value is fixed at construction; the parameters stay mutable.
#[derive(Debug, Clone, PartialEq)]
pub struct Property<V> {
    pub group: Option<String>,
    pub parameters: ParameterSection,
    value: V,
}

impl<V: PropertyValue> Property<V> {
    #[must_use]
    pub fn new(value: impl Into<V>) -> Self {
        Self {
            group: None,
            parameters: ParameterSection::default(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn with_parameters(value: impl Into<V>, parameters: ParameterSection) -> Self {
        Self {
            group: None,
            parameters,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into()).filter(|g: &String| !g.is_empty());
        self
    }

    /// Builds the property from a parsed content line.
    ///
    /// Returns `None` if the value is not representable; the caller logs
    /// and skips the line.
    #[must_use]
    pub fn from_line(line: &ContentLine, version: VCardVersion) -> Option<Self> {
        let mut parameters = ParameterSection::parse(&line.params, version);
        let value = V::parse_value(&line.value, &mut parameters, version)?;
        Some(Self {
            group: line.group.clone(),
            parameters,
            value,
        })
    }

    #[must_use]
    pub const fn value(&self) -> &V {
        &self.value
    }

    #[must_use]
    pub fn into_value(self) -> V {
        self.value
    }
}

impl<V: PropertyValue> VcfProperty for Property<V> {
    fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    fn parameters(&self) -> &ParameterSection {
        &self.parameters
    }

    fn parameters_mut(&mut self) -> &mut ParameterSection {
        &mut self.parameters
    }

    /// A label keeps an otherwise empty property meaningful.
    fn is_empty(&self) -> bool {
        self.value.is_empty_value() && self.parameters.label.is_none()
    }

    fn prepare_for_vcf_serialization(&self, serializer: &mut VcfSerializer) {
        self.value.prepare(serializer);
    }

    fn append_value(&self, serializer: &mut VcfSerializer) {
        self.value.append(serializer);
    }
}

/// FN, TITLE, ROLE, NOTE, EMAIL, TEL, URL and the other single texts.
pub type TextProperty = Property<String>;
/// NICKNAME, CATEGORIES.
pub type StringCollectionProperty = Property<Vec<String>>;
/// N.
pub type NameProperty = Property<Name>;
/// ADR.
pub type AddressProperty = Property<Address>;
/// ORG.
pub type OrgProperty = Property<Organization>;
/// GENDER, or `X-GENDER` before 4.0.
pub type GenderProperty = Property<Gender>;
/// KIND.
pub type KindProperty = Property<OrText<VCardKind>>;
/// CLIENTPIDMAP.
pub type ClientPidMapProperty = Property<OrText<ClientPidMap>>;
/// BDAY, ANNIVERSARY.
pub type DateAndOrTimeProperty = Property<DateAndOrTime>;
/// REV.
pub type TimeStampProperty = Property<OrText<DateTime<Utc>>>;
/// GEO.
pub type GeoProperty = Property<OrText<GeoCoordinate>>;
/// TZ.
pub type TimeZoneProperty = Property<OrText<TimeZoneId>>;
/// RELATED, AGENT.
pub type RelationProperty = Property<Relation>;
/// UID, MEMBER.
pub type ContactIdProperty = Property<ContactId>;
/// PHOTO, LOGO, SOUND, KEY.
pub type DataProperty = Property<DataValue>;
