//! Flag enumerations used as TYPE parameter indicators.
//!
//! Each kind is a `bitflags` type that is stored as `Option<Kind>` inside
//! [`ParameterSection`](super::ParameterSection): `None` means the parameter
//! is absent. [`FlagOption`] supplies the set/test/clear operations on that
//! optional form.

use bitflags::{Flags, bitflags};

use super::version::VCardVersion;

/// Set, test and clear operations on an optional flag value.
pub trait FlagOption<F> {
    /// Returns `flags` if `self` is `None`, otherwise the union of both.
    #[must_use]
    fn set(self, flags: F) -> F;

    /// Returns whether every bit of `flags` is present. `None` never matches.
    #[must_use]
    fn is_set(self, flags: F) -> bool;

    /// Removes `flags`. A result without any bit left becomes `None`, so
    /// clearing everything is indistinguishable from never having set a flag.
    #[must_use]
    fn unset(self, flags: F) -> Option<F>;
}

impl<F: Flags + Copy> FlagOption<F> for Option<F> {
    fn set(self, flags: F) -> F {
        match self {
            Some(value) => value.union(flags),
            None => flags,
        }
    }

    fn is_set(self, flags: F) -> bool {
        self.is_some_and(|value| value.contains(flags))
    }

    fn unset(self, flags: F) -> Option<F> {
        let remaining = self?.difference(flags);
        (!remaining.is_empty()).then_some(remaining)
    }
}

/// Versions a TYPE token may be written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// Every version.
    All,
    /// 2.1 and 3.0.
    Legacy,
    /// 4.0.
    Modern,
}

impl Availability {
    #[must_use]
    pub const fn includes(self, version: VCardVersion) -> bool {
        match self {
            Self::All => true,
            Self::Legacy => !matches!(version, VCardVersion::V4_0),
            Self::Modern => matches!(version, VCardVersion::V4_0),
        }
    }
}

/// Mapping between flag bits and TYPE parameter tokens.
pub trait TypeTokens: Flags + Copy + 'static {
    /// `(flag, lowercase token, availability)` triples.
    const TOKENS: &'static [(Self, &'static str, Availability)];

    /// Parses one TYPE token (case-insensitive).
    #[must_use]
    fn from_token(token: &str) -> Option<Self> {
        Self::TOKENS
            .iter()
            .find(|(_, name, _)| name.eq_ignore_ascii_case(token))
            .map(|(flag, _, _)| *flag)
    }

    /// Lowercase tokens of every set flag that `version` can express.
    #[must_use]
    fn type_tokens(self, version: VCardVersion) -> Vec<&'static str> {
        Self::TOKENS
            .iter()
            .filter(|(flag, _, availability)| self.contains(*flag) && availability.includes(version))
            .map(|(_, name, _)| *name)
            .collect()
    }
}

bitflags! {
    /// Delivery address kinds (ADR TYPE).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AddressKind: u8 {
        const DOM = 1;
        const INTL = 1 << 1;
        const POSTAL = 1 << 2;
        const PARCEL = 1 << 3;
        /// RFC 9554.
        const BILLING = 1 << 4;
        /// RFC 9554.
        const DELIVERY = 1 << 5;
    }
}

impl TypeTokens for AddressKind {
    const TOKENS: &'static [(Self, &'static str, Availability)] = &[
        (Self::DOM, "dom", Availability::Legacy),
        (Self::INTL, "intl", Availability::Legacy),
        (Self::POSTAL, "postal", Availability::Legacy),
        (Self::PARCEL, "parcel", Availability::Legacy),
        (Self::BILLING, "billing", Availability::Modern),
        (Self::DELIVERY, "delivery", Availability::Modern),
    ];
}

bitflags! {
    /// Telephone kinds (TEL TYPE).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PhoneKind: u16 {
        const VOICE = 1;
        const FAX = 1 << 1;
        const MSG = 1 << 2;
        const CELL = 1 << 3;
        const PAGER = 1 << 4;
        const BBS = 1 << 5;
        const MODEM = 1 << 6;
        const CAR = 1 << 7;
        const ISDN = 1 << 8;
        const VIDEO = 1 << 9;
        const PCS = 1 << 10;
        const TEXT = 1 << 11;
        const TEXTPHONE = 1 << 12;
    }
}

impl TypeTokens for PhoneKind {
    const TOKENS: &'static [(Self, &'static str, Availability)] = &[
        (Self::VOICE, "voice", Availability::All),
        (Self::FAX, "fax", Availability::All),
        (Self::MSG, "msg", Availability::Legacy),
        (Self::CELL, "cell", Availability::All),
        (Self::PAGER, "pager", Availability::All),
        (Self::BBS, "bbs", Availability::Legacy),
        (Self::MODEM, "modem", Availability::Legacy),
        (Self::CAR, "car", Availability::Legacy),
        (Self::ISDN, "isdn", Availability::Legacy),
        (Self::VIDEO, "video", Availability::All),
        (Self::PCS, "pcs", Availability::Legacy),
        (Self::TEXT, "text", Availability::Modern),
        (Self::TEXTPHONE, "textphone", Availability::Modern),
    ];
}

bitflags! {
    /// Relationship kinds (RELATED TYPE, RFC 6350 §6.6.6).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RelationKind: u32 {
        const CONTACT = 1;
        const ACQUAINTANCE = 1 << 1;
        const FRIEND = 1 << 2;
        const MET = 1 << 3;
        const CO_WORKER = 1 << 4;
        const COLLEAGUE = 1 << 5;
        const CO_RESIDENT = 1 << 6;
        const NEIGHBOR = 1 << 7;
        const CHILD = 1 << 8;
        const PARENT = 1 << 9;
        const SIBLING = 1 << 10;
        const SPOUSE = 1 << 11;
        const KIN = 1 << 12;
        const MUSE = 1 << 13;
        const CRUSH = 1 << 14;
        const DATE = 1 << 15;
        const SWEETHEART = 1 << 16;
        const ME = 1 << 17;
        const AGENT = 1 << 18;
        const EMERGENCY = 1 << 19;
    }
}

impl TypeTokens for RelationKind {
    const TOKENS: &'static [(Self, &'static str, Availability)] = &[
        (Self::CONTACT, "contact", Availability::Modern),
        (Self::ACQUAINTANCE, "acquaintance", Availability::Modern),
        (Self::FRIEND, "friend", Availability::Modern),
        (Self::MET, "met", Availability::Modern),
        (Self::CO_WORKER, "co-worker", Availability::Modern),
        (Self::COLLEAGUE, "colleague", Availability::Modern),
        (Self::CO_RESIDENT, "co-resident", Availability::Modern),
        (Self::NEIGHBOR, "neighbor", Availability::Modern),
        (Self::CHILD, "child", Availability::Modern),
        (Self::PARENT, "parent", Availability::Modern),
        (Self::SIBLING, "sibling", Availability::Modern),
        (Self::SPOUSE, "spouse", Availability::Modern),
        (Self::KIN, "kin", Availability::Modern),
        (Self::MUSE, "muse", Availability::Modern),
        (Self::CRUSH, "crush", Availability::Modern),
        (Self::DATE, "date", Availability::Modern),
        (Self::SWEETHEART, "sweetheart", Availability::Modern),
        (Self::ME, "me", Availability::Modern),
        (Self::AGENT, "agent", Availability::Modern),
        (Self::EMERGENCY, "emergency", Availability::Modern),
    ];
}

bitflags! {
    /// Instant messenger kinds (IMPP TYPE, RFC 4770).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ImppKind: u8 {
        const PERSONAL = 1;
        const BUSINESS = 1 << 1;
        const MOBILE = 1 << 2;
    }
}

impl TypeTokens for ImppKind {
    const TOKENS: &'static [(Self, &'static str, Availability)] = &[
        (Self::PERSONAL, "personal", Availability::All),
        (Self::BUSINESS, "business", Availability::All),
        (Self::MOBILE, "mobile", Availability::All),
    ];
}

bitflags! {
    /// Whether a property belongs to private or professional life.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PropertyClassKind: u8 {
        const HOME = 1;
        const WORK = 1 << 1;
    }
}

impl TypeTokens for PropertyClassKind {
    const TOKENS: &'static [(Self, &'static str, Availability)] = &[
        (Self::HOME, "home", Availability::All),
        (Self::WORK, "work", Availability::All),
    ];
}
