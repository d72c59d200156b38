//! Relation target (RELATED, AGENT): another card, a GUID, a URI or text.

use uuid::Uuid;

use super::contact_id::{ContactId, uuid_from_urn};
use super::uri::AbsoluteUri;
use super::vcard::VCard;

/// Exactly one of embedded card, GUID, absolute URI or free text.
///
/// An embedded card is an owned deep copy, so a card can never reach
/// itself through its relations.
#[derive(Debug, Clone, PartialEq)]
pub enum Relation {
    VCard(Box<VCard>),
    Uuid(Uuid),
    Uri(AbsoluteUri),
    Text(String),
}

impl Default for Relation {
    fn default() -> Self {
        Self::empty()
    }
}

impl Relation {
    #[must_use]
    pub const fn empty() -> Self {
        Self::Text(String::new())
    }

    /// Classifies a text the same way as [`ContactId::from_text`].
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Self::empty();
        }
        if let Ok(uuid) = Uuid::try_parse(text) {
            return Self::Uuid(uuid);
        }
        AbsoluteUri::parse(text).map_or_else(|| Self::Text(text.to_string()), Self::from_uri)
    }

    #[must_use]
    pub fn from_uri(uri: AbsoluteUri) -> Self {
        uuid_from_urn(&uri).map_or(Self::Uri(uri), Self::Uuid)
    }

    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self::Uuid(uuid)
    }

    /// Embeds a copy of `card`.
    #[must_use]
    pub fn from_vcard(card: &VCard) -> Self {
        Self::VCard(Box::new(card.clone()))
    }

    #[must_use]
    pub fn from_contact_id(id: &ContactId) -> Self {
        match id {
            ContactId::Uuid(uuid) => Self::Uuid(*uuid),
            ContactId::Uri(uri) => Self::Uri(uri.clone()),
            ContactId::Text(text) => Self::Text(text.clone()),
        }
    }

    #[must_use]
    pub fn as_vcard(&self) -> Option<&VCard> {
        match self {
            Self::VCard(card) => Some(card),
            Self::Uuid(_) | Self::Uri(_) | Self::Text(_) => None,
        }
    }

    #[must_use]
    pub const fn as_uuid(&self) -> Option<&Uuid> {
        match self {
            Self::Uuid(uuid) => Some(uuid),
            Self::VCard(_) | Self::Uri(_) | Self::Text(_) => None,
        }
    }

    #[must_use]
    pub const fn as_uri(&self) -> Option<&AbsoluteUri> {
        match self {
            Self::Uri(uri) => Some(uri),
            Self::VCard(_) | Self::Uuid(_) | Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::VCard(_) | Self::Uuid(_) | Self::Uri(_) => None,
        }
    }

    /// The identifier this relation points at, if it is not an embedded
    /// card.
    #[must_use]
    pub fn to_contact_id(&self) -> Option<ContactId> {
        match self {
            Self::VCard(_) => None,
            Self::Uuid(uuid) => Some(ContactId::Uuid(*uuid)),
            Self::Uri(uri) => Some(ContactId::Uri(uri.clone())),
            Self::Text(text) => Some(ContactId::Text(text.clone())),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::VCard(card) => card.is_empty(),
            Self::Uuid(uuid) => uuid.is_nil(),
            Self::Uri(_) => false,
            Self::Text(text) => text.trim().is_empty(),
        }
    }
}

impl From<ContactId> for Relation {
    fn from(id: ContactId) -> Self {
        Self::from_contact_id(&id)
    }
}
