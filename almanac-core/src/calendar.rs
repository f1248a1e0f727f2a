//! Calendar: reads and writes calendar fields of instants in one zone
//!
//! `Calendar::utc()` and `Calendar::local()` give the two common flavours of
//! every accessor and mutator. The zone is plain configuration, so tests and
//! servers can pin any IANA zone with `Calendar::new(Zone::named(..)?)`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::civil::{make_day, CivilParts};
use crate::consts::{
    IsoWeekday, Weekday, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND, MS_PER_WEEK,
};
use crate::error::CalendarError;
use crate::instant::{DateInput, Instant};
use crate::parse::parse_calendar_string;
use crate::zone::Zone;

/// Time appended to calendar strings that carry no time part
const MIDNIGHT_SUFFIX: &str = "T00:00:00.000";

/// Month shifts beyond this leave the valid instant range from anywhere
const MAX_MONTH_SHIFT: i64 = 12 * 600_000;

/// Calendar field addressed by field-based arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

/// Calendar fields of an instant as seen in a zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateParts {
    pub year: i64,
    /// 1-12
    pub month: u32,
    /// 1-31
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
    pub weekday: Weekday,
}

impl From<CivilParts> for DateParts {
    fn from(parts: CivilParts) -> Self {
        Self {
            year: parts.year,
            month: parts.month,
            day: parts.day,
            hour: parts.hour,
            minute: parts.minute,
            second: parts.second,
            millisecond: parts.millisecond,
            weekday: parts.weekday,
        }
    }
}

/// Field accessors and field arithmetic bound to a zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Calendar {
    zone: Zone,
}

impl Calendar {
    pub fn new(zone: Zone) -> Self {
        Self { zone }
    }

    pub fn utc() -> Self {
        Self::new(Zone::Utc)
    }

    /// Calendar in the host zone
    pub fn local() -> Self {
        Self::new(Zone::System)
    }

    pub fn with_zone(mut self, zone: Zone) -> Self {
        self.zone = zone;
        self
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    // ========== Parsing ==========

    /// Read a date-like value.
    ///
    /// Strings without a `T` get `T00:00:00.000` appended and are read in this
    /// calendar's zone, as are strings with a time but no designator. A
    /// string that is not a calendar string gives `Instant::INVALID`.
    pub fn parse<'a>(&self, input: impl Into<DateInput<'a>>) -> Result<Option<Instant>, CalendarError> {
        let instant = match input.into() {
            DateInput::Instant(instant) => instant,
            DateInput::Millis(ms) => Instant::from_millis(ms),
            DateInput::Text(text) => self.parse_text(text),
            DateInput::Null => return Ok(None),
        };
        Ok(Some(instant))
    }

    /// Like `parse`, but null input is an error
    pub fn parse_non_null<'a>(&self, input: impl Into<DateInput<'a>>) -> Result<Instant, CalendarError> {
        self.parse(input)?.ok_or(CalendarError::InvalidInstant)
    }

    /// Independent instant with the same millisecond value as the input
    pub fn copy<'a>(&self, input: impl Into<DateInput<'a>>) -> Result<Instant, CalendarError> {
        self.parse_non_null(input).map(|instant| instant.copy())
    }

    fn parse_text(&self, text: &str) -> Instant {
        let augmented;
        let text = if text.contains('T') {
            text
        } else {
            augmented = format!("{}{}", text, MIDNIGHT_SUFFIX);
            &augmented
        };

        match parse_calendar_string(text) {
            Some(parsed) => Instant::from_millis(parsed.resolve(|wall| self.zone.to_utc_ms(wall))),
            None => {
                debug!(text, "not a calendar string");
                Instant::INVALID
            }
        }
    }

    // ========== Wall clock ==========

    /// Wall-clock milliseconds of an instant in this zone
    pub(crate) fn wall_ms(&self, instant: Instant) -> i64 {
        self.zone.to_local_ms(instant.as_millis())
    }

    /// Instant of a wall-clock reading in this zone
    pub(crate) fn from_wall_ms(&self, wall_ms: i64) -> Instant {
        Instant::from_millis(self.zone.to_utc_ms(wall_ms))
    }

    pub(crate) fn civil(&self, instant: Instant) -> CivilParts {
        CivilParts::from_ms(self.wall_ms(instant))
    }

    /// Civil fields, `None` for an invalid instant
    pub(crate) fn valid_civil(&self, instant: Instant) -> Option<CivilParts> {
        instant.is_valid().then(|| self.civil(instant))
    }

    // ========== Accessors ==========
    //
    // Every accessor is `None` for `Instant::INVALID`.

    /// All calendar fields at once
    pub fn parts(&self, instant: Instant) -> Option<DateParts> {
        self.valid_civil(instant).map(DateParts::from)
    }

    pub fn year(&self, instant: Instant) -> Option<i64> {
        self.parts(instant).map(|p| p.year)
    }

    /// Month, 1-12
    pub fn month(&self, instant: Instant) -> Option<u32> {
        self.parts(instant).map(|p| p.month)
    }

    /// Day of month, 1-31
    pub fn day(&self, instant: Instant) -> Option<u32> {
        self.parts(instant).map(|p| p.day)
    }

    pub fn hour(&self, instant: Instant) -> Option<u32> {
        self.parts(instant).map(|p| p.hour)
    }

    pub fn minute(&self, instant: Instant) -> Option<u32> {
        self.parts(instant).map(|p| p.minute)
    }

    pub fn second(&self, instant: Instant) -> Option<u32> {
        self.parts(instant).map(|p| p.second)
    }

    pub fn millisecond(&self, instant: Instant) -> Option<u32> {
        self.parts(instant).map(|p| p.millisecond)
    }

    pub fn weekday(&self, instant: Instant) -> Option<Weekday> {
        self.parts(instant).map(|p| p.weekday)
    }

    pub fn iso_weekday(&self, instant: Instant) -> Option<IsoWeekday> {
        self.weekday(instant).map(Weekday::to_iso)
    }

    /// Saturday or Sunday
    pub fn is_weekend_day(&self, instant: Instant) -> bool {
        self.weekday(instant).is_some_and(Weekday::is_weekend)
    }

    /// Monday through Friday
    pub fn is_work_day(&self, instant: Instant) -> bool {
        self.weekday(instant).is_some_and(|w| !w.is_weekend())
    }

    // ========== Padded accessors ==========

    /// Year, at least 4 digits
    pub fn year_string(&self, instant: Instant) -> Option<String> {
        self.year(instant).map(pad_year)
    }

    pub fn month_string(&self, instant: Instant) -> Option<String> {
        self.month(instant).map(|v| format!("{:02}", v))
    }

    pub fn day_string(&self, instant: Instant) -> Option<String> {
        self.day(instant).map(|v| format!("{:02}", v))
    }

    pub fn hour_string(&self, instant: Instant) -> Option<String> {
        self.hour(instant).map(|v| format!("{:02}", v))
    }

    pub fn minute_string(&self, instant: Instant) -> Option<String> {
        self.minute(instant).map(|v| format!("{:02}", v))
    }

    pub fn second_string(&self, instant: Instant) -> Option<String> {
        self.second(instant).map(|v| format!("{:02}", v))
    }

    pub fn millisecond_string(&self, instant: Instant) -> Option<String> {
        self.millisecond(instant).map(|v| format!("{:03}", v))
    }

    // ========== Field-based arithmetic ==========

    /// Set `unit`'s field to its current value plus `amount`.
    ///
    /// Overflowing fields carry into coarser ones instead of clamping, so
    /// Jan 31 plus one month is Mar 3 (Mar 2 in leap years). The new
    /// wall-clock reading is resolved in this zone, which makes "one day"
    /// 23 or 25 hours long across a DST transition.
    pub fn add(&self, instant: Instant, unit: CalendarUnit, amount: i64) -> Instant {
        if !instant.is_valid() {
            return instant;
        }
        let parts = self.civil(instant);
        let wall = parts.days() * MS_PER_DAY + parts.time_ms();

        let shifted = match unit {
            CalendarUnit::Month | CalendarUnit::Year => {
                let months = if unit == CalendarUnit::Year {
                    amount.checked_mul(12)
                } else {
                    Some(amount)
                };
                let Some(month0) = months
                    .and_then(|m| m.checked_add(parts.month as i64 - 1))
                    .filter(|m| m.abs() <= MAX_MONTH_SHIFT)
                else {
                    return Instant::INVALID;
                };
                make_day(parts.year, month0, parts.day as i64)
                    .checked_mul(MS_PER_DAY)
                    .and_then(|ms| ms.checked_add(parts.time_ms()))
            }
            _ => amount
                .checked_mul(unit_ms(unit))
                .and_then(|delta| wall.checked_add(delta)),
        };

        shifted.map_or(Instant::INVALID, |wall| self.from_wall_ms(wall))
    }

    pub fn add_ms(&self, instant: Instant, amount: i64) -> Instant {
        self.add(instant, CalendarUnit::Millisecond, amount)
    }

    pub fn add_seconds(&self, instant: Instant, amount: i64) -> Instant {
        self.add(instant, CalendarUnit::Second, amount)
    }

    pub fn add_minutes(&self, instant: Instant, amount: i64) -> Instant {
        self.add(instant, CalendarUnit::Minute, amount)
    }

    pub fn add_hours(&self, instant: Instant, amount: i64) -> Instant {
        self.add(instant, CalendarUnit::Hour, amount)
    }

    pub fn add_days(&self, instant: Instant, amount: i64) -> Instant {
        self.add(instant, CalendarUnit::Day, amount)
    }

    pub fn add_weeks(&self, instant: Instant, amount: i64) -> Instant {
        self.add(instant, CalendarUnit::Week, amount)
    }

    pub fn add_months(&self, instant: Instant, amount: i64) -> Instant {
        self.add(instant, CalendarUnit::Month, amount)
    }

    pub fn add_years(&self, instant: Instant, amount: i64) -> Instant {
        self.add(instant, CalendarUnit::Year, amount)
    }
}

/// Wall-clock length of the fixed-size units
fn unit_ms(unit: CalendarUnit) -> i64 {
    match unit {
        CalendarUnit::Millisecond => 1,
        CalendarUnit::Second => MS_PER_SECOND,
        CalendarUnit::Minute => MS_PER_MINUTE,
        CalendarUnit::Hour => MS_PER_HOUR,
        CalendarUnit::Day => MS_PER_DAY,
        CalendarUnit::Week => MS_PER_WEEK,
        // variable length, handled through make_day
        CalendarUnit::Month | CalendarUnit::Year => 0,
    }
}

/// 4-digit year; years past 9999 or before 0 use the signed 6-digit form
pub(crate) fn pad_year(year: i64) -> String {
    if (0..=9999).contains(&year) {
        format!("{:04}", year)
    } else if year < 0 {
        format!("-{:06}", -year)
    } else {
        format!("+{:06}", year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MAX_INSTANT_MS;

    fn utc(text: &str) -> Instant {
        Calendar::utc().parse_non_null(text).unwrap()
    }

    fn berlin() -> Calendar {
        Calendar::new(Zone::named("Europe/Berlin").unwrap())
    }

    // ========== Parsing ==========

    #[test]
    fn test_parse_passes_instants_and_millis() {
        let cal = Calendar::utc();
        let t = Instant::from_millis(42);
        assert_eq!(cal.parse(t).unwrap(), Some(t));
        assert_eq!(cal.parse(42i64).unwrap(), Some(t));
        assert_eq!(cal.parse(DateInput::Null).unwrap(), None);
    }

    #[test]
    fn test_parse_non_null_rejects_null() {
        assert_eq!(
            Calendar::utc().parse_non_null(None::<Instant>),
            Err(CalendarError::InvalidInstant)
        );
    }

    #[test]
    fn test_date_string_is_local_midnight() {
        let cal = berlin();
        let t = cal.parse_non_null("2000-01-01").unwrap();
        // Berlin is UTC+1 in winter
        assert_eq!(t.to_iso_string(), "1999-12-31T23:00:00.000Z");
        assert_eq!(
            (cal.year(t), cal.month(t), cal.day(t), cal.hour(t)),
            (Some(2000), Some(1), Some(1), Some(0))
        );
    }

    #[test]
    fn test_date_string_matches_host_offset() {
        let cal = Calendar::local();
        let t = cal.parse_non_null("2000-01-01").unwrap();
        let offset = Zone::System.offset_ms(t.as_millis());
        assert_eq!(t.as_millis() + offset, utc("2000-01-01").as_millis());
    }

    #[test]
    fn test_designator_wins_over_zone() {
        let t = berlin().parse_non_null("2000-01-01T00:00:00.000Z").unwrap();
        assert_eq!(t.as_millis(), 946_684_800_000);
        let t = berlin().parse_non_null("2000-01-01T00:00:00+02:00").unwrap();
        assert_eq!(t.to_iso_string(), "1999-12-31T22:00:00.000Z");
    }

    #[test]
    fn test_unparseable_string_is_invalid_instant() {
        let t = Calendar::utc().parse_non_null("not a date").unwrap();
        assert!(!t.is_valid());
        assert_eq!(t.to_string(), "Invalid Date");
    }

    #[test]
    fn test_copy() {
        let t = utc("2000-01-01");
        assert_eq!(Calendar::utc().copy(t).unwrap(), t);
    }

    // ========== Accessors ==========

    #[test]
    fn test_utc_accessors() {
        let cal = Calendar::utc();
        let t = utc("2001-02-03T04:05:06.007Z");
        assert_eq!(cal.year(t), Some(2001));
        assert_eq!(cal.month(t), Some(2));
        assert_eq!(cal.day(t), Some(3));
        assert_eq!(cal.hour(t), Some(4));
        assert_eq!(cal.minute(t), Some(5));
        assert_eq!(cal.second(t), Some(6));
        assert_eq!(cal.millisecond(t), Some(7));
        assert_eq!(cal.weekday(t), Some(Weekday::Saturday));
        assert_eq!(cal.iso_weekday(t), Some(IsoWeekday::Saturday));
    }

    #[test]
    fn test_padded_accessors() {
        let cal = Calendar::utc();
        let t = utc("0099-02-03T04:05:06.007Z");
        assert_eq!(cal.year_string(t).as_deref(), Some("0099"));
        assert_eq!(cal.month_string(t).as_deref(), Some("02"));
        assert_eq!(cal.day_string(t).as_deref(), Some("03"));
        assert_eq!(cal.hour_string(t).as_deref(), Some("04"));
        assert_eq!(cal.minute_string(t).as_deref(), Some("05"));
        assert_eq!(cal.second_string(t).as_deref(), Some("06"));
        assert_eq!(cal.millisecond_string(t).as_deref(), Some("007"));
    }

    #[test]
    fn test_local_accessors_follow_zone() {
        let t = utc("2000-06-30T23:30:00Z");
        let cal = berlin();
        assert_eq!((cal.month(t), cal.day(t), cal.hour(t)), (Some(7), Some(1), Some(1)));
        assert_eq!(Calendar::utc().day(t), Some(30));
    }

    #[test]
    fn test_accessors_on_invalid() {
        let cal = Calendar::utc();
        let bad = Instant::INVALID;
        assert_eq!(cal.parts(bad), None);
        assert_eq!(cal.year(bad), None);
        assert_eq!(cal.weekday(bad), None);
        assert_eq!(cal.year_string(bad), None);
        assert!(!cal.is_weekend_day(bad));
        assert!(!cal.is_work_day(bad));
    }

    #[test]
    fn test_year_at_range_end() {
        let cal = Calendar::utc();
        let last = Instant::from_millis(MAX_INSTANT_MS);
        assert_eq!(cal.year(last), Some(275_760));
        assert_eq!(cal.year_string(last).as_deref(), Some("+275760"));
    }

    #[test]
    fn test_weekend_and_work_days() {
        let cal = Calendar::utc();
        assert!(cal.is_weekend_day(utc("2022-01-29")));
        assert!(cal.is_weekend_day(utc("2022-01-30")));
        assert!(cal.is_work_day(utc("2022-01-31")));
        assert!(!cal.is_work_day(utc("2022-01-30")));
    }

    // ========== Field-based arithmetic ==========

    #[test]
    fn test_add_months_and_years() {
        let cal = Calendar::utc();
        assert_eq!(cal.add_months(utc("2000-01-01"), 1), utc("2000-02-01"));
        assert_eq!(cal.add_months(utc("2000-02-01"), -1), utc("2000-01-01"));
        assert_eq!(cal.add_years(utc("2000-01-01"), 1), utc("2001-01-01"));
        assert_eq!(cal.add_years(utc("2000-01-01"), -1), utc("1999-01-01"));
        assert_eq!(cal.add_months(utc("2000-11-15"), 14), utc("2002-01-15"));
    }

    #[test]
    fn test_add_months_overflows_short_months() {
        let cal = Calendar::utc();
        assert_eq!(cal.add_months(utc("2001-01-31"), 1), utc("2001-03-03"));
        assert_eq!(cal.add_months(utc("2000-01-31"), 1), utc("2000-03-02"));
        assert_eq!(cal.add_years(utc("2000-02-29"), 1), utc("2001-03-01"));
    }

    #[test]
    fn test_add_keeps_time_of_day() {
        let cal = Calendar::utc();
        let t = utc("2000-01-31T10:20:30.400Z");
        assert_eq!(cal.add_days(t, 1), utc("2000-02-01T10:20:30.400Z"));
        assert_eq!(cal.add_weeks(t, -1), utc("2000-01-24T10:20:30.400Z"));
        assert_eq!(cal.add_hours(t, 14), utc("2000-02-01T00:20:30.400Z"));
        assert_eq!(cal.add_minutes(t, 40), utc("2000-01-31T11:00:30.400Z"));
        assert_eq!(cal.add_seconds(t, 30), utc("2000-01-31T10:21:00.400Z"));
        assert_eq!(cal.add_ms(t, 600), utc("2000-01-31T10:20:31.000Z"));
    }

    #[test]
    fn test_field_add_differs_from_value_add_across_dst() {
        let cal = berlin();
        let before = cal.parse_non_null("2023-03-25T12:00").unwrap();
        let field = cal.add_days(before, 1);
        let value = before.add_days(1);
        assert_eq!(field.diff_ms(before), 23 * MS_PER_HOUR);
        assert_eq!(value.diff_ms(before), 24 * MS_PER_HOUR);
        assert_eq!(cal.hour(field), Some(12));
        assert_eq!(cal.hour(value), Some(13));
    }

    #[test]
    fn test_field_add_into_gap() {
        let cal = berlin();
        let t = cal.parse_non_null("2023-03-25T02:30").unwrap();
        let next = cal.add_days(t, 1);
        assert_eq!(cal.hour(next), Some(3));
        assert_eq!(cal.minute(next), Some(30));
        assert_eq!(next.diff_ms(t), 24 * MS_PER_HOUR);
    }

    #[test]
    fn test_add_leaves_argument_alone() {
        let cal = Calendar::utc();
        let t = utc("2000-01-01");
        let _ = cal.add_years(t, 3);
        assert_eq!(t, utc("2000-01-01"));
    }

    #[test]
    fn test_add_on_invalid() {
        let cal = Calendar::utc();
        assert!(!cal.add_months(Instant::INVALID, 1).is_valid());
        assert!(!cal.add_years(utc("2000-01-01"), i64::MAX).is_valid());
        assert_eq!(cal.add_minutes(utc("2000-01-01"), 0), utc("2000-01-01"));
    }

    #[test]
    fn test_pad_year() {
        assert_eq!(pad_year(5), "0005");
        assert_eq!(pad_year(2024), "2024");
        assert_eq!(pad_year(12_024), "+012024");
        assert_eq!(pad_year(-1), "-000001");
    }
}
