//! Date-and-or-time values (BDAY, ANNIVERSARY, DEATHDATE).
//!
//! vCard dates may omit the year, the month or the day. `chrono` needs all
//! three, so an omitted part is backfilled with a sentinel and a
//! [`DateMask`] records which parts are real.

use chrono::{Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{RfcError, RfcResult};
use crate::rfc::vcard::build::{append_date, append_escaped, append_time, append_utc_offset};
use crate::rfc::vcard::parse::{PartialDate, PartialTime, parse_date, parse_time};

use super::parameter_section::DataType;
use super::version::VCardVersion;

/// Year stored for dates without a year. A leap year, so that February 29
/// survives.
pub const SENTINEL_YEAR: i32 = 4;
/// Month or day stored when it is omitted.
pub const SENTINEL_MONTH_DAY: u32 = 1;

/// Which parts of a date carry real data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateMask {
    pub has_year: bool,
    pub has_month: bool,
    pub has_day: bool,
}

impl DateMask {
    pub const FULL: Self = Self {
        has_year: true,
        has_month: true,
        has_day: true,
    };
}

/// A BDAY-style value: exactly one of date, date with time, time, or
/// free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateAndOrTime {
    DateOnly {
        date: NaiveDate,
        mask: DateMask,
    },
    DateTime {
        date_time: NaiveDateTime,
        offset: Option<FixedOffset>,
        mask: DateMask,
    },
    TimeOnly {
        time: NaiveTime,
        offset: Option<FixedOffset>,
    },
    Text(String),
}

impl Default for DateAndOrTime {
    fn default() -> Self {
        Self::empty()
    }
}

impl DateAndOrTime {
    /// The empty value.
    #[must_use]
    pub const fn empty() -> Self {
        Self::Text(String::new())
    }

    #[must_use]
    pub const fn from_date(date: NaiveDate) -> Self {
        Self::DateOnly {
            date,
            mask: DateMask::FULL,
        }
    }

    /// Creates a date of which parts may be unknown, e.g. a birthday
    /// without year.
    ///
    /// ## Errors
    /// Returns an invalid-argument error if every part is missing, if only
    /// the month is missing while year and day are given, or if the parts
    /// do not form a calendar date.
    pub fn from_partial_date(
        year: Option<i32>,
        month: Option<u32>,
        day: Option<u32>,
    ) -> RfcResult<Self> {
        let partial = PartialDate { year, month, day };
        let (date, mask) = resolve_date(partial).ok_or_else(|| {
            RfcError::InvalidArgument(format!(
                "not a representable vCard date: year {year:?}, month {month:?}, day {day:?}"
            ))
        })?;
        Ok(Self::DateOnly { date, mask })
    }

    #[must_use]
    pub const fn from_date_time(date_time: NaiveDateTime, offset: Option<FixedOffset>) -> Self {
        Self::DateTime {
            date_time,
            offset,
            mask: DateMask::FULL,
        }
    }

    #[must_use]
    pub const fn from_time(time: NaiveTime, offset: Option<FixedOffset>) -> Self {
        Self::TimeOnly { time, offset }
    }

    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Parses a raw value. Never fails: anything that is not a valid date
    /// or time under the declared or inferred kind becomes text.
    #[must_use]
    pub fn parse(raw: &str, data_type: Option<&DataType>) -> Self {
        let s = raw.trim();
        if s.is_empty() {
            return Self::empty();
        }

        let parsed = match data_type {
            Some(DataType::Text) => None,
            Some(DataType::Time) => Self::parse_time_only(s.strip_prefix('T').unwrap_or(s)),
            _ => {
                if let Some(time) = s.strip_prefix('T') {
                    Self::parse_time_only(time)
                } else if let Some((date, time)) = s.split_once('T') {
                    Self::parse_date_time(date, time)
                } else {
                    parse_date(s)
                        .and_then(resolve_date)
                        .map(|(date, mask)| Self::DateOnly { date, mask })
                }
            }
        };

        parsed.unwrap_or_else(|| {
            if !matches!(data_type, Some(DataType::Text)) {
                tracing::debug!(value = s, "date-and-or-time value degraded to text");
            }
            Self::Text(s.to_string())
        })
    }

    fn parse_time_only(s: &str) -> Option<Self> {
        let partial = parse_time(s)?;
        Some(Self::TimeOnly {
            time: resolve_time(partial)?,
            offset: partial.offset,
        })
    }

    fn parse_date_time(date: &str, time: &str) -> Option<Self> {
        let (date, mask) = resolve_date(parse_date(date)?)?;
        let partial = parse_time(time)?;
        Some(Self::DateTime {
            date_time: date.and_time(resolve_time(partial)?),
            offset: partial.offset,
            mask,
        })
    }

    #[must_use]
    pub const fn mask(&self) -> Option<DateMask> {
        match self {
            Self::DateOnly { mask, .. } | Self::DateTime { mask, .. } => Some(*mask),
            Self::TimeOnly { .. } | Self::Text(_) => None,
        }
    }

    /// Whether the year is real data and not the sentinel.
    #[must_use]
    pub fn has_year(&self) -> bool {
        self.mask().is_some_and(|m| m.has_year)
    }

    /// The year, `None` when it is unknown.
    #[must_use]
    pub fn known_year(&self) -> Option<i32> {
        self.date().filter(|_| self.has_year()).map(|d| d.year())
    }

    #[must_use]
    pub fn has_month(&self) -> bool {
        self.mask().is_some_and(|m| m.has_month)
    }

    #[must_use]
    pub fn has_day(&self) -> bool {
        self.mask().is_some_and(|m| m.has_day)
    }

    #[must_use]
    pub const fn as_date_only(&self) -> Option<NaiveDate> {
        match self {
            Self::DateOnly { date, .. } => Some(*date),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_date_time(&self) -> Option<(NaiveDateTime, Option<FixedOffset>)> {
        match self {
            Self::DateTime {
                date_time, offset, ..
            } => Some((*date_time, *offset)),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_time_only(&self) -> Option<(NaiveTime, Option<FixedOffset>)> {
        match self {
            Self::TimeOnly { time, offset } => Some((*time, *offset)),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The calendar date, if any part of one is known.
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::DateOnly { date, .. } => Some(*date),
            Self::DateTime { date_time, .. } => Some(date_time.date()),
            Self::TimeOnly { .. } | Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(text) if text.trim().is_empty())
    }

    /// VALUE parameter the value needs.
    #[must_use]
    pub const fn data_type(&self) -> Option<DataType> {
        match self {
            Self::Text(_) => Some(DataType::Text),
            Self::DateOnly { .. } | Self::DateTime { .. } | Self::TimeOnly { .. } => None,
        }
    }

    /// Appends the value for `version`, omitting the parts the mask marks
    /// as absent.
    pub fn append_to(&self, builder: &mut String, version: VCardVersion) {
        match self {
            Self::DateOnly { date, mask } => append_date(builder, *date, *mask, version),
            Self::DateTime {
                date_time,
                offset,
                mask,
            } => {
                append_date(builder, date_time.date(), *mask, version);
                builder.push('T');
                append_time(builder, date_time.time(), version);
                if let Some(offset) = offset {
                    append_utc_offset(builder, *offset, version);
                }
            }
            Self::TimeOnly { time, offset } => {
                builder.push('T');
                append_time(builder, *time, version);
                if let Some(offset) = offset {
                    append_utc_offset(builder, *offset, version);
                }
            }
            Self::Text(text) => append_escaped(builder, text, version),
        }
    }
}

/// Backfills sentinels. A date with year and day but no month cannot be
/// written in any vCard form and is rejected.
fn resolve_date(partial: PartialDate) -> Option<(NaiveDate, DateMask)> {
    let mask = DateMask {
        has_year: partial.year.is_some(),
        has_month: partial.month.is_some(),
        has_day: partial.day.is_some(),
    };
    if !(mask.has_year || mask.has_month || mask.has_day)
        || (mask.has_year && mask.has_day && !mask.has_month)
    {
        return None;
    }

    let date = NaiveDate::from_ymd_opt(
        partial.year.unwrap_or(SENTINEL_YEAR),
        partial.month.unwrap_or(SENTINEL_MONTH_DAY),
        partial.day.unwrap_or(SENTINEL_MONTH_DAY),
    )?;
    Some((date, mask))
}

/// Times without an hour have no `NaiveTime` form and stay text.
fn resolve_time(partial: PartialTime) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(
        partial.hour?,
        partial.minute.unwrap_or(0),
        partial.second.unwrap_or(0),
    )
}

impl From<NaiveDate> for DateAndOrTime {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn write(value: &DateAndOrTime, version: VCardVersion) -> String {
        let mut out = String::new();
        value.append_to(&mut out, version);
        out
    }

    #[test]
    fn year_unknown_birthday() {
        let value = DateAndOrTime::from_partial_date(None, Some(3), Some(5)).unwrap();
        assert!(!value.has_year());
        assert!(value.has_month());
        assert!(value.has_day());
        assert_eq!(value.as_date_only().unwrap().year(), SENTINEL_YEAR);
        assert_eq!(value.known_year(), None);
        assert_eq!(write(&value, VCardVersion::V4_0), "--0305");
        assert_eq!(write(&value, VCardVersion::V3_0), "--03-05");
    }

    #[test]
    fn february_29_without_year() {
        let value = DateAndOrTime::parse("--0229", None);
        assert_eq!(
            value.as_date_only(),
            NaiveDate::from_ymd_opt(SENTINEL_YEAR, 2, 29)
        );
        assert_eq!(write(&value, VCardVersion::V4_0), "--0229");
    }

    #[test]
    fn partial_date_rejects_nonsense() {
        assert!(DateAndOrTime::from_partial_date(None, None, None).is_err());
        assert!(DateAndOrTime::from_partial_date(Some(2000), None, Some(3)).is_err());
        assert!(DateAndOrTime::from_partial_date(Some(2001), Some(2), Some(29)).is_err());
    }

    #[test]
    fn parse_date_time_with_offset() {
        let value = DateAndOrTime::parse("19531015T231000Z", None);
        let (date_time, offset) = value.as_date_time().unwrap();
        assert_eq!(date_time.hour(), 23);
        assert_eq!(offset, FixedOffset::east_opt(0));
        assert_eq!(write(&value, VCardVersion::V4_0), "19531015T231000Z");
        assert_eq!(write(&value, VCardVersion::V3_0), "1953-10-15T23:10:00Z");
    }

    #[test]
    fn parse_time_only() {
        let value = DateAndOrTime::parse("T1022-0500", None);
        let (time, offset) = value.as_time_only().unwrap();
        assert_eq!(time.minute(), 22);
        assert_eq!(offset, FixedOffset::west_opt(5 * 3600));
        assert!(!value.has_year());
    }

    #[test]
    fn truncated_time_degrades_to_text() {
        let value = DateAndOrTime::parse("T--30", None);
        assert_eq!(value.as_text(), Some("T--30"));
    }

    #[test]
    fn declared_text_wins() {
        let value = DateAndOrTime::parse("20010101", Some(&DataType::Text));
        assert_eq!(value.as_text(), Some("20010101"));
        assert_eq!(value.data_type(), Some(DataType::Text));
    }

    #[test]
    fn garbage_degrades_to_text() {
        let value = DateAndOrTime::parse("circa 1800", None);
        assert_eq!(value.as_text(), Some("circa 1800"));
        assert!(!value.is_empty());
        assert!(DateAndOrTime::parse("  ", None).is_empty());
    }

    #[test]
    fn exactly_one_alternative() {
        for raw in ["19960415", "19960415T120000", "T120000", "sometime"] {
            let value = DateAndOrTime::parse(raw, None);
            let populated = [
                value.as_date_only().is_some(),
                value.as_date_time().is_some(),
                value.as_time_only().is_some(),
                value.as_text().is_some(),
            ];
            assert_eq!(populated.iter().filter(|&&p| p).count(), 1, "{raw}");
        }
    }
}
