//! vCard data model.
//!
//! Value types (names, addresses, dates, identifiers), the parameter
//! section, the property wrappers and the [`VCard`] document.

mod address;
mod components;
mod contact_id;
mod data;
mod datetime;
mod flags;
mod geo;
mod name;
mod options;
mod parameter;
mod parameter_section;
pub mod policy;
mod property;
mod relation;
mod structured;
mod timezone;
mod uri;
mod vcard;
mod version;

pub use address::{Address, AddressComponent};
pub use components::{ComponentTable, append_components};
pub use contact_id::ContactId;
pub use data::{DEFAULT_MEDIA_TYPE, DataValue, media_type_from_legacy_token};
pub use datetime::{DateAndOrTime, DateMask, SENTINEL_MONTH_DAY, SENTINEL_YEAR};
pub use flags::{
    AddressKind, Availability, FlagOption, ImppKind, PhoneKind, PropertyClassKind, RelationKind,
    TypeTokens,
};
pub use geo::GeoCoordinate;
pub use name::{Name, NameComponent};
pub use options::VcfOptions;
pub use parameter::VCardParameter;
pub use parameter_section::{DataType, ParameterSection, ValueEncoding};
pub use property::{
    AddressProperty, ClientPidMapProperty, ContactIdProperty, DataProperty,
    DateAndOrTimeProperty, GenderProperty, GeoProperty, KindProperty, NameProperty,
    NonStandardProperty, OrText, OrgProperty, Property, PropertyValue, RelationProperty,
    StringCollectionProperty, TextProperty, TimeStampProperty, TimeZoneProperty, VcfProperty,
};
pub use relation::Relation;
pub use structured::{ClientPidMap, Gender, Organization, Sex, VCardKind};
pub use timezone::TimeZoneId;
pub use uri::AbsoluteUri;
pub use vcard::VCard;
pub use version::VCardVersion;
