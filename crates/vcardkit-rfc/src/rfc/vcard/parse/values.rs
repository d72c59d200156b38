//! vCard value parsers.
//!
//! Value-level grammar never raises: every parser returns `None` for text
//! it cannot classify and the caller degrades to a free-text or empty value.

use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Utc};

use crate::rfc::vcard::core::{VCardVersion, policy};

/// Unmasks a vCard text value.
///
/// 3.0 and 4.0 escapes: `\n`, `\N` (newline), `\,` (comma), `\;`
/// (semicolon), `\\` (backslash). 2.1 only masks the semicolon, so every
/// other backslash is literal there.
#[must_use]
pub fn unescape_text(s: &str, version: VCardVersion) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    let legacy = version == VCardVersion::V2_1;

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }

        match chars.peek() {
            Some(';') => {
                chars.next();
                result.push(';');
            }
            Some('n' | 'N') if !legacy => {
                chars.next();
                result.push('\n');
            }
            Some(',') if !legacy => {
                chars.next();
                result.push(',');
            }
            Some('\\') if !legacy => {
                chars.next();
                result.push('\\');
            }
            _ => result.push(c),
        }
    }

    result
}

/// Splits a structured value on unescaped semicolons.
#[must_use]
pub fn split_structured(s: &str) -> Vec<&str> {
    split_unescaped(s, ';')
}

fn split_unescaped(s: &str, delimiter: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == delimiter {
            parts.push(&s[start..i]);
            start = i + delimiter.len_utf8();
        }
    }

    parts.push(&s[start..]);
    parts
}

/// Splits one component of a structured value into its unmasked items.
///
/// Commas separate items except in 2.1, which has no list syntax. Empty
/// items are dropped.
#[must_use]
pub fn split_component(s: &str, version: VCardVersion) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }

    if !policy::splits_multi_values(version) {
        return vec![unescape_text(s, version)];
    }

    split_unescaped(s, ',')
        .into_iter()
        .filter(|item| !item.is_empty())
        .map(|item| unescape_text(item, version))
        .collect()
}

/// A calendar date of which any part may be omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PartialDate {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

/// A time of day of which the leading parts may be omitted, with an
/// optional UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PartialTime {
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub second: Option<u32>,
    pub offset: Option<FixedOffset>,
}

/// Parses exactly `len` ASCII digits.
fn digits<T: FromStr>(s: &str, len: usize) -> Option<T> {
    (s.len() == len && s.bytes().all(|b| b.is_ascii_digit()))
        .then(|| s.parse().ok())
        .flatten()
}

/// Parses a date in basic or extended ISO 8601 form, including the
/// truncated vCard forms (`--MMDD`, `--MM-DD`, `--MM`, `---DD`, `YYYY-MM`,
/// `YYYY`).
#[must_use]
pub fn parse_date(value: &str) -> Option<PartialDate> {
    let s = value.trim();

    let date = if let Some(rest) = s.strip_prefix("---") {
        PartialDate {
            day: Some(digits(rest, 2)?),
            ..PartialDate::default()
        }
    } else if let Some(rest) = s.strip_prefix("--") {
        let rest = rest.replace('-', "");
        match rest.len() {
            2 => PartialDate {
                month: Some(digits(&rest, 2)?),
                ..PartialDate::default()
            },
            4 => PartialDate {
                month: Some(digits(&rest[..2], 2)?),
                day: Some(digits(&rest[2..], 2)?),
                ..PartialDate::default()
            },
            _ => return None,
        }
    } else {
        let parts: Vec<&str> = s.split('-').collect();
        match parts.as_slice() {
            [year, month, day] => PartialDate {
                year: Some(digits(year, 4)?),
                month: Some(digits(month, 2)?),
                day: Some(digits(day, 2)?),
            },
            [year, month] => PartialDate {
                year: Some(digits(year, 4)?),
                month: Some(digits(month, 2)?),
                day: None,
            },
            [basic] if basic.len() == 8 => PartialDate {
                year: Some(digits(&basic[..4], 4)?),
                month: Some(digits(&basic[4..6], 2)?),
                day: Some(digits(&basic[6..], 2)?),
            },
            [year] => PartialDate {
                year: Some(digits(year, 4)?),
                ..PartialDate::default()
            },
            _ => return None,
        }
    };

    let month_ok = date.month.is_none_or(|m| (1..=12).contains(&m));
    let day_ok = date.day.is_none_or(|d| (1..=31).contains(&d));
    (month_ok && day_ok).then_some(date)
}

/// Parses a time (without the leading `T`) in basic or extended form,
/// including the truncated forms `-MMSS`, `-MM` and `--SS`, followed by an
/// optional UTC offset. Fractional seconds are dropped.
#[must_use]
pub fn parse_time(value: &str) -> Option<PartialTime> {
    let s = value.trim();
    let (time, offset) = split_offset(s)?;

    let (hour, minute, second): (Option<u32>, Option<u32>, Option<u32>) = if let Some(rest) =
        time.strip_prefix("--")
    {
        (None, None, Some(digits(rest, 2)?))
    } else if let Some(rest) = time.strip_prefix('-') {
        let rest = rest.replace(':', "");
        match rest.len() {
            2 => (None, Some(digits(&rest, 2)?), None),
            4 => (
                None,
                Some(digits(&rest[..2], 2)?),
                Some(digits(&rest[2..], 2)?),
            ),
            _ => return None,
        }
    } else {
        let time = time.split(['.', ',']).next().unwrap_or(time);
        let basic = time.replace(':', "");
        match basic.len() {
            2 => (Some(digits(&basic, 2)?), None, None),
            4 => (
                Some(digits(&basic[..2], 2)?),
                Some(digits(&basic[2..], 2)?),
                None,
            ),
            6 => (
                Some(digits(&basic[..2], 2)?),
                Some(digits(&basic[2..4], 2)?),
                Some(digits(&basic[4..], 2)?),
            ),
            _ => return None,
        }
    };

    // 24:00:00 is not representable.
    if hour.is_some_and(|h| h > 23)
        || minute.is_some_and(|m| m > 59)
        || second.is_some_and(|s| s > 59)
    {
        return None;
    }

    Some(PartialTime {
        hour,
        minute,
        second,
        offset,
    })
}

/// Separates a trailing UTC offset from a time. The outer `None` means the
/// offset is malformed.
fn split_offset(s: &str) -> Option<(&str, Option<FixedOffset>)> {
    if let Some(time) = s.strip_suffix(['Z', 'z']) {
        return Some((time, FixedOffset::east_opt(0)));
    }

    // A sign only starts an offset after a digit; leading dashes belong to
    // the truncated forms.
    let bytes = s.as_bytes();
    let position = (1..bytes.len())
        .rev()
        .find(|&i| matches!(bytes[i], b'+' | b'-') && bytes[i - 1].is_ascii_digit());

    match position {
        Some(i) => Some((&s[..i], Some(parse_utc_offset(&s[i..])?))),
        None => Some((s, None)),
    }
}

/// Parses a UTC offset: `Z`, `±HH`, `±HHMM` or `±HH:MM`.
///
/// A single linear pass over at most six characters; anything longer is
/// rejected before inspection.
#[must_use]
pub fn parse_utc_offset(value: &str) -> Option<FixedOffset> {
    let s = value.trim();
    if s.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0);
    }
    if s.len() > 6 {
        return None;
    }

    let mut bytes = s.bytes();
    let sign = match bytes.next()? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };

    let mut numbers = [0i32; 4];
    let mut count = 0;
    let mut colon_at = None;
    for b in bytes {
        match b {
            b'0'..=b'9' if count < 4 => {
                numbers[count] = i32::from(b - b'0');
                count += 1;
            }
            b':' if count == 2 && colon_at.is_none() => colon_at = Some(count),
            _ => return None,
        }
    }

    let (hours, minutes) = match (count, colon_at) {
        (2, None) => (numbers[0] * 10 + numbers[1], 0),
        (4, _) => (
            numbers[0] * 10 + numbers[1],
            numbers[2] * 10 + numbers[3],
        ),
        _ => return None,
    };
    if hours > 23 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Parses a timestamp (REV): `YYYYMMDDTHHMMSSZ`, the extended
/// `YYYY-MM-DDTHH:MM:SSZ` form or either with a numeric offset.
///
/// A timestamp without offset is taken as UTC.
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let s = value.trim();
    let (date, time) = s.split_once(['T', 't'])?;

    let date = parse_date(date)?;
    let date = NaiveDate::from_ymd_opt(date.year?, date.month?, date.day?)?;

    let time = parse_time(time)?;
    let naive = NaiveTime::from_hms_opt(
        time.hour?,
        time.minute.unwrap_or(0),
        time.second.unwrap_or(0),
    )?;
    let offset = time.offset.unwrap_or(FixedOffset::east_opt(0)?);

    date.and_time(naive)
        .and_local_timezone(offset)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn unescape_text_newline() {
        assert_eq!(unescape_text(r"Line1\nLine2", VCardVersion::V4_0), "Line1\nLine2");
        assert_eq!(unescape_text(r"Line1\NLine2", VCardVersion::V3_0), "Line1\nLine2");
    }

    #[test]
    fn unescape_text_special() {
        assert_eq!(
            unescape_text(r"a\,b\;c\\d", VCardVersion::V4_0),
            "a,b;c\\d"
        );
    }

    #[test]
    fn unescape_text_v21_keeps_backslashes() {
        assert_eq!(
            unescape_text(r"C:\temp\new\;x", VCardVersion::V2_1),
            r"C:\temp\new;x"
        );
    }

    #[test]
    fn split_structured_basic() {
        let parts = split_structured("Doe;John;Q;Mr.;Jr.");
        assert_eq!(parts, vec!["Doe", "John", "Q", "Mr.", "Jr."]);
    }

    #[test]
    fn split_structured_escaped() {
        let parts = split_structured(r"Doe\;Smith;John");
        assert_eq!(parts, vec![r"Doe\;Smith", "John"]);
    }

    #[test]
    fn split_structured_escaped_backslash_before_delimiter() {
        let parts = split_structured(r"a\\;b");
        assert_eq!(parts, vec![r"a\\", "b"]);
    }

    #[test]
    fn split_component_commas() {
        let parts = split_component(r"a,b\,c,,d", VCardVersion::V4_0);
        assert_eq!(parts, vec!["a", "b,c", "d"]);
    }

    #[test]
    fn split_component_v21_has_no_lists() {
        let parts = split_component("Smith, Jr.", VCardVersion::V2_1);
        assert_eq!(parts, vec!["Smith, Jr."]);
    }

    #[test]
    fn parse_date_forms() {
        let full = PartialDate {
            year: Some(1990),
            month: Some(6),
            day: Some(15),
        };
        assert_eq!(parse_date("1990-06-15"), Some(full));
        assert_eq!(parse_date("19900615"), Some(full));
        assert_eq!(
            parse_date("--0305"),
            Some(PartialDate {
                year: None,
                month: Some(3),
                day: Some(5)
            })
        );
        assert_eq!(parse_date("--03-05"), parse_date("--0305"));
        assert_eq!(
            parse_date("---22"),
            Some(PartialDate {
                day: Some(22),
                ..PartialDate::default()
            })
        );
        assert_eq!(
            parse_date("1985-04"),
            Some(PartialDate {
                year: Some(1985),
                month: Some(4),
                day: None
            })
        );
        assert_eq!(
            parse_date("1985"),
            Some(PartialDate {
                year: Some(1985),
                ..PartialDate::default()
            })
        );
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert_eq!(parse_date("circa 1800"), None);
        assert_eq!(parse_date("1990-13-01"), None);
        assert_eq!(parse_date("--1"), None);
    }

    #[test]
    fn parse_time_forms() {
        let t = parse_time("143000").unwrap();
        assert_eq!((t.hour, t.minute, t.second), (Some(14), Some(30), Some(0)));
        let t = parse_time("14:30:00.250").unwrap();
        assert_eq!((t.hour, t.minute, t.second), (Some(14), Some(30), Some(0)));
        let t = parse_time("-1530").unwrap();
        assert_eq!((t.hour, t.minute, t.second), (None, Some(15), Some(30)));
        let t = parse_time("--30Z").unwrap();
        assert_eq!(t.second, Some(30));
        assert_eq!(t.offset, FixedOffset::east_opt(0));
    }

    #[test]
    fn parse_time_with_offset() {
        let t = parse_time("1430-0800").unwrap();
        assert_eq!((t.hour, t.minute), (Some(14), Some(30)));
        assert_eq!(t.offset, FixedOffset::west_opt(8 * 3600));
    }

    #[test]
    fn parse_time_rejects_out_of_range() {
        assert_eq!(parse_time("2500"), None);
        assert_eq!(parse_time("1261"), None);
    }

    #[test]
    fn parse_utc_offset_forms() {
        assert_eq!(parse_utc_offset("Z"), FixedOffset::east_opt(0));
        assert_eq!(parse_utc_offset("+05:30"), FixedOffset::east_opt(5 * 3600 + 1800));
        assert_eq!(parse_utc_offset("-0800"), FixedOffset::west_opt(8 * 3600));
        assert_eq!(parse_utc_offset("+01"), FixedOffset::east_opt(3600));
    }

    #[test]
    fn parse_utc_offset_rejects_malformed() {
        assert_eq!(parse_utc_offset("0800"), None);
        assert_eq!(parse_utc_offset("+8"), None);
        assert_eq!(parse_utc_offset("+08:0"), None);
        assert_eq!(parse_utc_offset("+0800000000000"), None);
        assert_eq!(parse_utc_offset("+25:00"), None);
    }

    #[test]
    fn parse_utc_offset_long_input_is_cheap() {
        let long = format!("+{}", "0".repeat(100_000));
        assert_eq!(parse_utc_offset(&long), None);
    }

    #[test]
    fn parse_timestamp_forms() {
        let ts = parse_timestamp("20240115T103000Z").unwrap();
        assert_eq!(ts.hour(), 10);
        let ts = parse_timestamp("2024-01-15T10:30:00Z").unwrap();
        assert_eq!(ts.minute(), 30);
        let ts = parse_timestamp("20240115T103000+0100").unwrap();
        assert_eq!(ts.hour(), 9);
        assert_eq!(parse_timestamp("yesterday"), None);
    }
}
