//! vCard version.

use std::fmt;

/// vCard version.
///
/// Ordered from oldest to newest so version gates read as comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum VCardVersion {
    /// vCard 2.1 (IMC, 1996).
    V2_1,
    /// vCard 3.0 (RFC 2426).
    #[default]
    V3_0,
    /// vCard 4.0 (RFC 6350, RFC 9554).
    V4_0,
}

impl VCardVersion {
    /// Parses from version string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "2.1" => Some(Self::V2_1),
            "3.0" => Some(Self::V3_0),
            "4.0" => Some(Self::V4_0),
            _ => None,
        }
    }

    /// Returns the version string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V2_1 => "2.1",
            Self::V3_0 => "3.0",
            Self::V4_0 => "4.0",
        }
    }
}

impl fmt::Display for VCardVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for VCardVersion {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_versions() {
        assert_eq!(VCardVersion::parse("2.1"), Some(VCardVersion::V2_1));
        assert_eq!(VCardVersion::parse(" 3.0 "), Some(VCardVersion::V3_0));
        assert_eq!(VCardVersion::parse("4.0"), Some(VCardVersion::V4_0));
        assert_eq!(VCardVersion::parse("5.0"), None);
    }

    #[test]
    fn versions_are_ordered() {
        assert!(VCardVersion::V2_1 < VCardVersion::V3_0);
        assert!(VCardVersion::V3_0 < VCardVersion::V4_0);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(VCardVersion::V4_0.to_string(), "4.0");
    }
}
