//! Small structured vCard values: ORG, GENDER, CLIENTPIDMAP and KIND.

use std::fmt;

use crate::rfc::vcard::build::append_escaped;
use crate::rfc::vcard::parse::{split_structured, unescape_text};

use super::version::VCardVersion;

/// Organization (ORG property, RFC 6350 §6.6.4).
///
/// First value is the organizational name, subsequent values are
/// organizational units in order of decreasing specificity. Every
/// component is a single text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Organization {
    name: Option<String>,
    units: Vec<String>,
}

impl Organization {
    /// Creates an organization with name and units. Blank units are dropped.
    #[must_use]
    pub fn new(name: Option<String>, units: Vec<String>) -> Self {
        Self {
            name: name.filter(|n| !n.trim().is_empty()),
            units: units.into_iter().filter(|u| !u.trim().is_empty()).collect(),
        }
    }

    /// Parses a raw ORG value.
    #[must_use]
    pub fn parse(raw: &str, version: VCardVersion) -> Self {
        let mut parts = split_structured(raw)
            .into_iter()
            .map(|part| unescape_text(part, version));
        let name = parts.next();
        Self::new(name, parts.collect())
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn units(&self) -> &[String] {
        &self.units
    }

    /// Returns whether the organization is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.units.is_empty()
    }

    pub fn append_to(&self, builder: &mut String, version: VCardVersion) {
        if let Some(name) = &self.name {
            append_escaped(builder, name, version);
        }
        for unit in &self.units {
            builder.push(';');
            append_escaped(builder, unit, version);
        }
    }
}

/// Sex component of GENDER property (RFC 6350 §6.2.7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    Male,
    Female,
    Other,
    /// None or not applicable.
    None,
    Unknown,
}

impl Sex {
    /// Parses from single character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'M' | 'm' => Some(Self::Male),
            'F' | 'f' => Some(Self::Female),
            'O' | 'o' => Some(Self::Other),
            'N' | 'n' => Some(Self::None),
            'U' | 'u' => Some(Self::Unknown),
            _ => Option::None,
        }
    }

    /// Returns the single-character representation.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Male => 'M',
            Self::Female => 'F',
            Self::Other => 'O',
            Self::None => 'N',
            Self::Unknown => 'U',
        }
    }

    /// Parses the `X-GENDER` text written by 2.1 and 3.0 clients.
    #[must_use]
    pub fn from_legacy_text(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.eq_ignore_ascii_case("male") {
            Some(Self::Male)
        } else if text.eq_ignore_ascii_case("female") {
            Some(Self::Female)
        } else {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), Option::None) => Self::from_char(c),
                _ => Option::None,
            }
        }
    }

    /// `X-GENDER` text for 2.1 and 3.0; only male and female exist there.
    #[must_use]
    pub const fn legacy_text(self) -> Option<&'static str> {
        match self {
            Self::Male => Some("Male"),
            Self::Female => Some("Female"),
            Self::Other | Self::None | Self::Unknown => Option::None,
        }
    }
}

/// Gender (GENDER property, RFC 6350 §6.2.7).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Gender {
    /// Sex component: M, F, O, N, or U.
    pub sex: Option<Sex>,
    /// Gender identity text (free-form).
    pub identity: Option<String>,
}

impl Gender {
    /// Creates a gender with just sex.
    #[must_use]
    pub const fn sex(sex: Sex) -> Self {
        Self {
            sex: Some(sex),
            identity: Option::None,
        }
    }

    /// Creates a gender with both sex and identity.
    #[must_use]
    pub fn full(sex: Option<Sex>, identity: Option<String>) -> Self {
        Self {
            sex,
            identity: identity.filter(|i| !i.trim().is_empty()),
        }
    }

    /// Parses a raw GENDER value (`sex[;identity]`).
    #[must_use]
    pub fn parse(raw: &str, version: VCardVersion) -> Self {
        let parts = split_structured(raw);

        let sex = parts
            .first()
            .and_then(|s| s.trim().chars().next())
            .and_then(Sex::from_char);

        let identity = parts.get(1).map(|s| unescape_text(s, version));

        Self::full(sex, identity)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sex.is_none() && self.identity.is_none()
    }

    pub fn append_to(&self, builder: &mut String, version: VCardVersion) {
        if let Some(sex) = self.sex {
            builder.push(sex.as_char());
        }
        if let Some(identity) = &self.identity {
            builder.push(';');
            append_escaped(builder, identity, version);
        }
    }
}

/// Client PID map entry (CLIENTPIDMAP property, RFC 6350 §6.7.7).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientPidMap {
    /// Source ID (integer ≥ 1).
    pub source_id: u32,
    /// URI identifying the source.
    pub uri: String,
}

impl ClientPidMap {
    /// Creates a new client PID map entry. `None` for a source id of 0 or
    /// an empty URI.
    #[must_use]
    pub fn new(source_id: u32, uri: impl Into<String>) -> Option<Self> {
        let uri = uri.into();
        (source_id > 0 && !uri.trim().is_empty()).then(|| Self {
            source_id,
            uri: uri.trim().to_string(),
        })
    }

    /// Parses `source_id;uri`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let (source_id, uri) = raw.split_once(';')?;
        Self::new(source_id.trim().parse().ok()?, uri)
    }

    pub fn append_to(&self, builder: &mut String) {
        builder.push_str(&self.source_id.to_string());
        builder.push(';');
        builder.push_str(&self.uri);
    }
}

/// Kind of object the vCard represents (KIND property, RFC 6350 §6.1.4
/// and RFC 6473).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VCardKind {
    Individual,
    Group,
    Org,
    Location,
    Application,
    /// `x-name` or IANA token.
    Other(String),
}

impl VCardKind {
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Option::None;
        }
        Some(match s.to_ascii_lowercase().as_str() {
            "individual" => Self::Individual,
            "group" => Self::Group,
            "org" => Self::Org,
            "location" => Self::Location,
            "application" => Self::Application,
            _ => Self::Other(s.to_string()),
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Individual => "individual",
            Self::Group => "group",
            Self::Org => "org",
            Self::Location => "location",
            Self::Application => "application",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for VCardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn organization_with_units() {
        let org = Organization::parse("Acme Inc.;Engineering;Backend Team", VCardVersion::V4_0);
        assert_eq!(org.name(), Some("Acme Inc."));
        assert_eq!(org.units(), ["Engineering", "Backend Team"]);
    }

    #[test]
    fn organization_keeps_commas() {
        let org = Organization::parse(r"Smith\, Jones & Co.", VCardVersion::V3_0);
        assert_eq!(org.name(), Some("Smith, Jones & Co."));

        let mut out = String::new();
        org.append_to(&mut out, VCardVersion::V3_0);
        assert_eq!(out, r"Smith\, Jones & Co.");
    }

    #[test]
    fn organization_empty() {
        assert!(Organization::parse(";", VCardVersion::V4_0).is_empty());
    }

    #[test]
    fn gender_full() {
        let gender = Gender::parse("F;female", VCardVersion::V4_0);
        assert_eq!(gender.sex, Some(Sex::Female));
        assert_eq!(gender.identity.as_deref(), Some("female"));

        let mut out = String::new();
        gender.append_to(&mut out, VCardVersion::V4_0);
        assert_eq!(out, "F;female");
    }

    #[test]
    fn gender_identity_only() {
        let gender = Gender::parse(";it's complicated", VCardVersion::V4_0);
        assert_eq!(gender.sex, None);
        let mut out = String::new();
        gender.append_to(&mut out, VCardVersion::V4_0);
        assert_eq!(out, ";it's complicated");
    }

    #[test]
    fn sex_from_char() {
        assert_eq!(Sex::from_char('M'), Some(Sex::Male));
        assert_eq!(Sex::from_char('f'), Some(Sex::Female));
        assert_eq!(Sex::from_char('X'), None);
        assert_eq!(Sex::from_legacy_text("FEMALE"), Some(Sex::Female));
    }

    #[test]
    fn client_pid_map() {
        let map = ClientPidMap::parse("1;urn:uuid:3df403f4-5924-4bb7-b077-3c711d9eb34b").unwrap();
        assert_eq!(map.source_id, 1);
        assert!(ClientPidMap::parse("0;urn:x").is_none());
        assert!(ClientPidMap::parse("abc").is_none());
    }

    #[test]
    fn kind_tokens() {
        assert_eq!(VCardKind::parse("GROUP"), Some(VCardKind::Group));
        assert_eq!(
            VCardKind::parse("x-robot"),
            Some(VCardKind::Other("x-robot".into()))
        );
        assert_eq!(VCardKind::parse(""), None);
    }
}
