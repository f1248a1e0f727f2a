//! Proleptic Gregorian day arithmetic
//!
//! Days are counted from 1970-01-01. Conversions follow Howard Hinnant's
//! algorithms: http://howardhinnant.github.io/date_algorithms.html

use crate::consts::{Weekday, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND};

/// Days from 0000-03-01 to 1970-01-01
const UNIX_EPOCH_DAYS: i64 = 719_468;

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Days in `month` (1-12), zero for anything else
pub fn days_in_month(year: i64, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        1..=12 => DAYS_IN_MONTH[(month - 1) as usize],
        _ => 0,
    }
}

/// Day number of a valid civil date
pub fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400; // [0, 399]
    let m = month as i64;
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + day as i64 - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * 146_097 + doe - UNIX_EPOCH_DAYS
}

/// Civil date `(year, month 1-12, day 1-31)` of a day number
pub fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + UNIX_EPOCH_DAYS;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
    (year, month, day)
}

/// Day number for a year, 0-based month and 1-based day that may overflow.
///
/// Months outside 0..12 carry into the year and days outside the month carry
/// into neighbouring months, so `(2000, 0, 32)` is 2000-02-01 and
/// `(2000, -1, 1)` is 1999-12-01.
pub fn make_day(year: i64, month0: i64, day: i64) -> i64 {
    let y = year + month0.div_euclid(12);
    let m = month0.rem_euclid(12) as u32 + 1;
    days_from_civil(y, m, 1) + day - 1
}

/// Milliseconds into the day for a wall-clock time; fields may overflow
pub fn make_time(hour: i64, minute: i64, second: i64, ms: i64) -> i64 {
    hour * MS_PER_HOUR + minute * MS_PER_MINUTE + second * MS_PER_SECOND + ms
}

/// Weekday of a day number (1970-01-01 was a Thursday)
pub fn weekday_from_days(days: i64) -> Weekday {
    Weekday::from_index(days + 4)
}

/// Broken-down wall-clock fields of a millisecond count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilParts {
    pub year: i64,
    /// 1-12
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
    pub weekday: Weekday,
}

impl CivilParts {
    pub fn from_ms(ms: i64) -> Self {
        let days = ms.div_euclid(MS_PER_DAY);
        let time = ms.rem_euclid(MS_PER_DAY);
        let (year, month, day) = civil_from_days(days);
        Self {
            year,
            month,
            day,
            hour: (time / MS_PER_HOUR) as u32,
            minute: (time % MS_PER_HOUR / MS_PER_MINUTE) as u32,
            second: (time % MS_PER_MINUTE / MS_PER_SECOND) as u32,
            millisecond: (time % MS_PER_SECOND) as u32,
            weekday: weekday_from_days(days),
        }
    }

    /// Day number of the date part
    pub fn days(&self) -> i64 {
        days_from_civil(self.year, self.month, self.day)
    }

    /// Milliseconds into the day
    pub fn time_ms(&self) -> i64 {
        make_time(
            self.hour as i64,
            self.minute as i64,
            self.second as i64,
            self.millisecond as i64,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_year() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(-4));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2001, 2), 28);
        assert_eq!(days_in_month(2001, 4), 30);
        assert_eq!(days_in_month(2001, 13), 0);
    }

    #[test]
    fn test_epoch() {
        assert_eq!(days_from_civil(1970, 1, 1), 0);
        assert_eq!(civil_from_days(0), (1970, 1, 1));
        assert_eq!(civil_from_days(-1), (1969, 12, 31));
        assert_eq!(days_from_civil(2000, 1, 1), 10_957);
    }

    #[test]
    fn test_civil_round_trip_across_eras() {
        for days in [-800_000, -146_097, -1, 0, 59, 60, 11_016, 146_097, 2_932_896] {
            let (y, m, d) = civil_from_days(days);
            assert_eq!(days_from_civil(y, m, d), days, "day {}", days);
        }
    }

    #[test]
    fn test_make_day_overflow() {
        assert_eq!(make_day(2000, 0, 32), days_from_civil(2000, 2, 1));
        assert_eq!(make_day(2000, -1, 1), days_from_civil(1999, 12, 1));
        assert_eq!(make_day(2000, 12, 1), days_from_civil(2001, 1, 1));
        assert_eq!(make_day(2000, 1, 0), days_from_civil(2000, 1, 31));
        // Feb 31 2001 is Mar 3
        assert_eq!(make_day(2001, 1, 31), days_from_civil(2001, 3, 3));
    }

    #[test]
    fn test_weekday() {
        assert_eq!(weekday_from_days(0), Weekday::Thursday);
        assert_eq!(weekday_from_days(days_from_civil(2000, 1, 1)), Weekday::Saturday);
        assert_eq!(weekday_from_days(-1), Weekday::Wednesday);
    }

    #[test]
    fn test_parts_before_epoch() {
        let parts = CivilParts::from_ms(-1);
        assert_eq!((parts.year, parts.month, parts.day), (1969, 12, 31));
        assert_eq!((parts.hour, parts.minute, parts.second, parts.millisecond), (23, 59, 59, 999));
        assert_eq!(parts.days() * MS_PER_DAY + parts.time_ms(), -1);
    }
}
