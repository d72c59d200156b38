//! Time zone identifier (TZ property and TZ parameter).

use chrono::{DateTime, FixedOffset, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::rfc::vcard::parse::parse_utc_offset;

/// A time zone, given either as an IANA name (`Europe/Berlin`) or as a UTC
/// offset (`-05:00`, `+0100`, `Z`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimeZoneId(String);

impl TimeZoneId {
    /// Wraps a time zone text. Returns `None` for empty input.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        (!value.is_empty()).then(|| Self(value.to_string()))
    }

    /// Creates the identifier of a fixed offset, written as `±HH:MM`.
    #[must_use]
    pub fn from_offset(offset: FixedOffset) -> Self {
        let total = offset.local_minus_utc() / 60;
        let sign = if total < 0 { '-' } else { '+' };
        let total = total.abs();
        Self(format!("{sign}{:02}:{:02}", total / 60, total % 60))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier itself is a UTC offset.
    #[must_use]
    pub fn is_utc_offset(&self) -> bool {
        parse_utc_offset(&self.0).is_some()
    }

    /// Resolves the offset from UTC that applies right now.
    #[must_use]
    pub fn utc_offset(&self) -> Option<FixedOffset> {
        self.utc_offset_at(Utc::now())
    }

    /// Resolves the offset from UTC that applies at `instant`.
    ///
    /// IANA names are looked up in the `chrono-tz` database; unknown names
    /// resolve to `None`.
    #[must_use]
    pub fn utc_offset_at(&self, instant: DateTime<Utc>) -> Option<FixedOffset> {
        if let Some(offset) = parse_utc_offset(&self.0) {
            return Some(offset);
        }

        let tz: Tz = self.0.parse().ok()?;
        Some(tz.offset_from_utc_datetime(&instant.naive_utc()).fix())
    }
}
