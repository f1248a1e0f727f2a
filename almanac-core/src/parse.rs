//! Calendar string parsing
//!
//! Supported formats:
//! - 2025-06-15, 2025-06, 2025, +012025-06-15
//! - 2025-06-15T14:30, 2025-06-15T14:30:00, 2025-06-15T14:30:00.123
//! - any of the above with a time, followed by `Z` or `+05:30` / `-0800`
//!
//! A string without a zone designator yields no offset; the caller decides
//! which zone reads it.

use crate::civil::{days_from_civil, days_in_month, make_time};
use crate::consts::{MS_PER_DAY, MS_PER_MINUTE};

/// Fields of a parsed calendar string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ParsedDate {
    /// Wall-clock milliseconds, as if the reading were UTC
    pub wall_ms: i64,
    /// Designated offset east of UTC, if the string carries one
    pub offset_ms: Option<i64>,
}

impl ParsedDate {
    /// UTC milliseconds, handing undesignated readings to `to_utc`
    pub fn resolve(&self, to_utc: impl FnOnce(i64) -> i64) -> i64 {
        match self.offset_ms {
            Some(offset) => self.wall_ms - offset,
            None => to_utc(self.wall_ms),
        }
    }
}

/// Parse a calendar string, `None` when it is not one
pub(crate) fn parse_calendar_string(s: &str) -> Option<ParsedDate> {
    let s = s.trim();
    let (date_part, time_part) = match s.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (s, None),
    };

    let days = parse_date_part(date_part)?;
    let (time_ms, offset_ms) = match time_part {
        Some(time) => parse_time_part(time)?,
        None => (0, None),
    };

    Some(ParsedDate {
        wall_ms: days * MS_PER_DAY + time_ms,
        offset_ms,
    })
}

/// `YYYY[-MM[-DD]]` or `±YYYYYY[-MM[-DD]]` as a day number
fn parse_date_part(s: &str) -> Option<i64> {
    let (year, rest) = match s.as_bytes().first()? {
        b'+' | b'-' => {
            let (value, rest) = take_digits(&s[1..], 6)?;
            let year = if s.starts_with('-') { -(value as i64) } else { value as i64 };
            // -000000 is not a year
            if year == 0 && s.starts_with('-') {
                return None;
            }
            (year, rest)
        }
        _ => {
            let (value, rest) = take_digits(s, 4)?;
            (value as i64, rest)
        }
    };

    let (month, rest) = match rest.strip_prefix('-') {
        Some(rest) => take_digits(rest, 2)?,
        None if rest.is_empty() => (1, rest),
        None => return None,
    };
    let (day, rest) = match rest.strip_prefix('-') {
        Some(rest) => take_digits(rest, 2)?,
        None if rest.is_empty() => (1, rest),
        None => return None,
    };
    if !rest.is_empty() {
        return None;
    }

    if !(1..=12).contains(&month) || day < 1 || day > days_in_month(year, month) {
        return None;
    }
    Some(days_from_civil(year, month, day))
}

/// `HH:mm[:ss[.fff]][Z|±HH:mm]` as milliseconds into the day plus offset
fn parse_time_part(s: &str) -> Option<(i64, Option<i64>)> {
    let (clock, offset_ms) = split_designator(s)?;

    let (hour, rest) = take_digits(clock, 2)?;
    let rest = rest.strip_prefix(':')?;
    let (minute, rest) = take_digits(rest, 2)?;

    let (second, rest) = match rest.strip_prefix(':') {
        Some(rest) => take_digits(rest, 2)?,
        None => (0, rest),
    };
    let millisecond = match rest.strip_prefix('.') {
        Some(fraction) => parse_fraction_ms(fraction)?,
        None if rest.is_empty() => 0,
        None => return None,
    };

    // 24:00 is accepted as the end of the day, nothing later
    let end_of_day = hour == 24 && minute == 0 && second == 0 && millisecond == 0;
    if (hour > 23 && !end_of_day) || minute > 59 || second > 59 {
        return None;
    }

    let time = make_time(hour as i64, minute as i64, second as i64, millisecond as i64);
    Some((time, offset_ms))
}

/// Split a trailing `Z` or `±HH:mm` / `±HHmm` designator off a clock reading
fn split_designator(s: &str) -> Option<(&str, Option<i64>)> {
    if let Some(clock) = s.strip_suffix('Z').or_else(|| s.strip_suffix('z')) {
        return Some((clock, Some(0)));
    }

    let Some(pos) = s.rfind(['+', '-']) else {
        return Some((s, None));
    };
    let (clock, designator) = s.split_at(pos);
    let sign = if designator.starts_with('-') { -1 } else { 1 };
    let body = &designator[1..];

    let (hours, rest) = take_digits(body, 2)?;
    let rest = rest.strip_prefix(':').unwrap_or(rest);
    let (minutes, rest) = take_digits(rest, 2)?;
    if !rest.is_empty() || hours > 23 || minutes > 59 {
        return None;
    }

    let offset = sign * (hours as i64 * 60 + minutes as i64) * MS_PER_MINUTE;
    Some((clock, Some(offset)))
}

/// Fractional seconds to milliseconds; extra digits are truncated
fn parse_fraction_ms(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let digits: String = s.chars().chain("00".chars()).take(3).collect();
    digits.parse().ok()
}

/// Exactly `count` ASCII digits from the front of `s`
fn take_digits(s: &str, count: usize) -> Option<(u32, &str)> {
    let head = s.get(..count)?;
    if !head.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((head.parse().ok()?, &s[count..]))
}
