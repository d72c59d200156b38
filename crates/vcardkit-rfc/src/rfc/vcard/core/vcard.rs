//! vCard document type.

use super::contact_id::ContactId;
use super::property::{
    AddressProperty, ClientPidMapProperty, ContactIdProperty, DataProperty,
    DateAndOrTimeProperty, GenderProperty, GeoProperty, KindProperty, NameProperty,
    NonStandardProperty, OrgProperty, RelationProperty, StringCollectionProperty, TextProperty,
    TimeStampProperty, TimeZoneProperty,
};
use super::structured::VCardKind;
use super::version::VCardVersion;

/// A complete vCard.
///
/// Properties are kept per category in the order they appeared. Single
/// occurrence properties are `Option`s.
#[derive(Debug, Clone, PartialEq)]
pub struct VCard {
    /// Version the card was read from. Serialization targets a version of
    /// its own.
    pub version: VCardVersion,

    pub kind: Option<KindProperty>,
    pub product_id: Option<TextProperty>,
    pub revision: Option<TimeStampProperty>,
    pub uid: Option<ContactIdProperty>,

    pub formatted_names: Vec<TextProperty>,
    pub names: Vec<NameProperty>,
    pub nicknames: Vec<StringCollectionProperty>,
    pub photos: Vec<DataProperty>,
    pub birthdays: Vec<DateAndOrTimeProperty>,
    pub anniversaries: Vec<DateAndOrTimeProperty>,
    pub gender: Vec<GenderProperty>,

    pub addresses: Vec<AddressProperty>,
    pub phones: Vec<TextProperty>,
    pub emails: Vec<TextProperty>,
    pub messengers: Vec<TextProperty>,
    pub languages: Vec<TextProperty>,

    pub time_zones: Vec<TimeZoneProperty>,
    pub geo: Vec<GeoProperty>,

    pub titles: Vec<TextProperty>,
    pub roles: Vec<TextProperty>,
    pub logos: Vec<DataProperty>,
    pub organizations: Vec<OrgProperty>,
    /// MEMBER, for cards of kind group.
    pub members: Vec<ContactIdProperty>,
    /// RELATED, and AGENT of 2.1 and 3.0.
    pub relations: Vec<RelationProperty>,

    pub categories: Vec<StringCollectionProperty>,
    pub notes: Vec<TextProperty>,
    pub sounds: Vec<DataProperty>,
    pub client_pid_maps: Vec<ClientPidMapProperty>,
    pub urls: Vec<TextProperty>,

    pub keys: Vec<DataProperty>,
    pub free_busy_urls: Vec<TextProperty>,
    pub calendar_addresses: Vec<TextProperty>,
    pub calendar_urls: Vec<TextProperty>,

    pub sources: Vec<TextProperty>,
    /// MAILER (2.1, 3.0).
    pub mailers: Vec<TextProperty>,

    pub non_standard: Vec<NonStandardProperty>,
}

impl Default for VCard {
    fn default() -> Self {
        Self::new()
    }
}

impl VCard {
    /// Creates an empty vCard 4.0.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_version(VCardVersion::V4_0)
    }

    /// Creates an empty vCard of `version`.
    #[must_use]
    pub const fn with_version(version: VCardVersion) -> Self {
        Self {
            version,
            kind: None,
            product_id: None,
            revision: None,
            uid: None,
            formatted_names: Vec::new(),
            names: Vec::new(),
            nicknames: Vec::new(),
            photos: Vec::new(),
            birthdays: Vec::new(),
            anniversaries: Vec::new(),
            gender: Vec::new(),
            addresses: Vec::new(),
            phones: Vec::new(),
            emails: Vec::new(),
            messengers: Vec::new(),
            languages: Vec::new(),
            time_zones: Vec::new(),
            geo: Vec::new(),
            titles: Vec::new(),
            roles: Vec::new(),
            logos: Vec::new(),
            organizations: Vec::new(),
            members: Vec::new(),
            relations: Vec::new(),
            categories: Vec::new(),
            notes: Vec::new(),
            sounds: Vec::new(),
            client_pid_maps: Vec::new(),
            urls: Vec::new(),
            keys: Vec::new(),
            free_busy_urls: Vec::new(),
            calendar_addresses: Vec::new(),
            calendar_urls: Vec::new(),
            sources: Vec::new(),
            mailers: Vec::new(),
            non_standard: Vec::new(),
        }
    }

    /// Returns the first FN value.
    #[must_use]
    pub fn formatted_name(&self) -> Option<&str> {
        self.formatted_names
            .iter()
            .map(|p| p.value().as_str())
            .find(|v| !v.trim().is_empty())
    }

    /// Returns the UID unless it is empty.
    #[must_use]
    pub fn uid(&self) -> Option<&ContactId> {
        self.uid
            .as_ref()
            .map(ContactIdProperty::value)
            .filter(|id| !id.is_empty())
    }

    pub fn set_uid(&mut self, id: ContactId) {
        self.uid = Some(ContactIdProperty::new(id));
    }

    /// Returns the KIND, individual when absent.
    #[must_use]
    pub fn kind(&self) -> VCardKind {
        self.kind
            .as_ref()
            .and_then(|p| p.value().value().cloned())
            .unwrap_or(VCardKind::Individual)
    }

    /// Returns all EMAIL values.
    #[must_use]
    pub fn email_addresses(&self) -> Vec<&str> {
        self.emails.iter().map(|p| p.value().as_str()).collect()
    }

    /// Returns all TEL values.
    #[must_use]
    pub fn telephone_numbers(&self) -> Vec<&str> {
        self.phones.iter().map(|p| p.value().as_str()).collect()
    }

    /// Whether the card holds no property at all apart from its version.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.product_id.is_none()
            && self.revision.is_none()
            && self.uid.is_none()
            && self.formatted_names.is_empty()
            && self.names.is_empty()
            && self.nicknames.is_empty()
            && self.photos.is_empty()
            && self.birthdays.is_empty()
            && self.anniversaries.is_empty()
            && self.gender.is_empty()
            && self.addresses.is_empty()
            && self.phones.is_empty()
            && self.emails.is_empty()
            && self.messengers.is_empty()
            && self.languages.is_empty()
            && self.time_zones.is_empty()
            && self.geo.is_empty()
            && self.titles.is_empty()
            && self.roles.is_empty()
            && self.logos.is_empty()
            && self.organizations.is_empty()
            && self.members.is_empty()
            && self.relations.is_empty()
            && self.categories.is_empty()
            && self.notes.is_empty()
            && self.sounds.is_empty()
            && self.client_pid_maps.is_empty()
            && self.urls.is_empty()
            && self.keys.is_empty()
            && self.free_busy_urls.is_empty()
            && self.calendar_addresses.is_empty()
            && self.calendar_urls.is_empty()
            && self.sources.is_empty()
            && self.mailers.is_empty()
            && self.non_standard.is_empty()
    }
}
