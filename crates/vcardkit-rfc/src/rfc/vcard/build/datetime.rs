//! Date and time formatting.
//!
//! 4.0 writes the basic ISO 8601 format (`19960415T213000-0500`); 2.1 and
//! 3.0 the extended one (`1996-04-15T21:30:00-05:00`).

use std::fmt::Write as _;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime, Timelike, Utc};

use crate::rfc::vcard::core::{DateMask, VCardVersion, policy};

/// Appends a date, leaving out the parts `mask` marks as absent.
pub fn append_date(builder: &mut String, date: NaiveDate, mask: DateMask, version: VCardVersion) {
    let basic = policy::uses_basic_date_format(version);
    let (year, month, day) = (date.year(), date.month(), date.day());

    let written = match (mask.has_year, mask.has_month, mask.has_day) {
        (true, true, true) if basic => write!(builder, "{year:04}{month:02}{day:02}"),
        (true, true, true) => write!(builder, "{year:04}-{month:02}-{day:02}"),
        (true, true, false) => write!(builder, "{year:04}-{month:02}"),
        (true, false, _) => write!(builder, "{year:04}"),
        (false, true, true) if basic => write!(builder, "--{month:02}{day:02}"),
        (false, true, true) => write!(builder, "--{month:02}-{day:02}"),
        (false, true, false) => write!(builder, "--{month:02}"),
        (false, false, _) => write!(builder, "---{day:02}"),
    };
    written.ok();
}

/// Appends a time of day with seconds.
pub fn append_time(builder: &mut String, time: NaiveTime, version: VCardVersion) {
    let (hour, minute, second) = (time.hour(), time.minute(), time.second());
    if policy::uses_basic_date_format(version) {
        write!(builder, "{hour:02}{minute:02}{second:02}").ok();
    } else {
        write!(builder, "{hour:02}:{minute:02}:{second:02}").ok();
    }
}

/// Appends a UTC offset; a zero offset is written as `Z`.
pub fn append_utc_offset(builder: &mut String, offset: FixedOffset, version: VCardVersion) {
    let seconds = offset.local_minus_utc();
    if seconds == 0 {
        builder.push('Z');
        return;
    }

    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.abs() / 60;
    let (hours, minutes) = (minutes / 60, minutes % 60);
    if policy::uses_basic_date_format(version) {
        write!(builder, "{sign}{hours:02}{minutes:02}").ok();
    } else {
        write!(builder, "{sign}{hours:02}:{minutes:02}").ok();
    }
}

/// Appends a UTC timestamp (REV).
pub fn append_timestamp(builder: &mut String, timestamp: DateTime<Utc>, version: VCardVersion) {
    let naive = timestamp.naive_utc();
    append_date(builder, naive.date(), DateMask::FULL, version);
    builder.push('T');
    append_time(builder, naive.time(), version);
    builder.push('Z');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn written(mask: DateMask, version: VCardVersion) -> String {
        let mut out = String::new();
        append_date(&mut out, date(1996, 4, 15), mask, version);
        out
    }

    #[test]
    fn full_dates() {
        assert_eq!(written(DateMask::FULL, VCardVersion::V4_0), "19960415");
        assert_eq!(written(DateMask::FULL, VCardVersion::V3_0), "1996-04-15");
    }

    #[test]
    fn truncated_dates() {
        let no_year = DateMask {
            has_year: false,
            has_month: true,
            has_day: true,
        };
        assert_eq!(written(no_year, VCardVersion::V4_0), "--0415");
        assert_eq!(written(no_year, VCardVersion::V3_0), "--04-15");

        let year_month = DateMask {
            has_year: true,
            has_month: true,
            has_day: false,
        };
        assert_eq!(written(year_month, VCardVersion::V4_0), "1996-04");

        let day_only = DateMask {
            has_year: false,
            has_month: false,
            has_day: true,
        };
        assert_eq!(written(day_only, VCardVersion::V4_0), "---15");
    }

    #[test]
    fn offsets() {
        let mut out = String::new();
        append_utc_offset(&mut out, FixedOffset::west_opt(5 * 3600).unwrap(), VCardVersion::V4_0);
        append_utc_offset(&mut out, FixedOffset::east_opt(5 * 3600 + 1800).unwrap(), VCardVersion::V3_0);
        append_utc_offset(&mut out, FixedOffset::east_opt(0).unwrap(), VCardVersion::V3_0);
        assert_eq!(out, "-0500+05:30Z");
    }

    #[test]
    fn timestamps() {
        let ts = date(2024, 1, 15)
            .and_hms_opt(10, 30, 0)
            .unwrap()
            .and_utc();

        let mut out = String::new();
        append_timestamp(&mut out, ts, VCardVersion::V4_0);
        assert_eq!(out, "20240115T103000Z");

        let mut out = String::new();
        append_timestamp(&mut out, ts, VCardVersion::V2_1);
        assert_eq!(out, "2024-01-15T10:30:00Z");
    }
}
