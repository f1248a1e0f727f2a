//! Time constants and the small enumerations shared by the calendar modules
//!
//! Month and year lengths are averages of the Gregorian cycle, used only by
//! duration decomposition. Calendar arithmetic works on real month lengths.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Constants
// ============================================================================

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;
pub const MS_PER_WEEK: i64 = 7 * MS_PER_DAY;

/// Average days in a Gregorian month (146097 / 4800)
pub const AVG_DAYS_PER_MONTH: f64 = 30.436875;
/// Average days in a Julian year
pub const AVG_DAYS_PER_YEAR: f64 = 365.25;

/// `MS_PER_DAY * AVG_DAYS_PER_MONTH`, exact in integers
pub const MS_PER_MONTH: i64 = 2_629_746_000;
/// `MS_PER_DAY * AVG_DAYS_PER_YEAR`, exact in integers
pub const MS_PER_YEAR: i64 = 31_557_600_000;

/// Largest distance from the epoch an instant may have (100 million days)
pub const MAX_INSTANT_MS: i64 = 100_000_000 * MS_PER_DAY;

// ============================================================================
// Weekday
// ============================================================================

/// Day of week, Sunday first (0..=6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    /// Weekday for an index, wrapping modulo 7
    pub fn from_index(index: i64) -> Self {
        match index.rem_euclid(7) {
            0 => Weekday::Sunday,
            1 => Weekday::Monday,
            2 => Weekday::Tuesday,
            3 => Weekday::Wednesday,
            4 => Weekday::Thursday,
            5 => Weekday::Friday,
            _ => Weekday::Saturday,
        }
    }

    /// 0 for Sunday through 6 for Saturday
    pub fn index(self) -> u32 {
        self as u32
    }

    /// Days to go back to reach the previous (or same) Monday
    pub fn days_from_monday(self) -> u32 {
        (self.index() + 6) % 7
    }

    pub fn is_weekend(self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }

    pub fn to_iso(self) -> IsoWeekday {
        IsoWeekday::from(self)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

// ============================================================================
// IsoWeekday
// ============================================================================

/// ISO-8601 day of week, Monday first (1..=7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IsoWeekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl IsoWeekday {
    /// 1 for Monday through 7 for Sunday
    pub fn number(self) -> u32 {
        self as u32
    }

    pub fn is_weekend(self) -> bool {
        matches!(self, IsoWeekday::Saturday | IsoWeekday::Sunday)
    }
}

impl From<Weekday> for IsoWeekday {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Monday => IsoWeekday::Monday,
            Weekday::Tuesday => IsoWeekday::Tuesday,
            Weekday::Wednesday => IsoWeekday::Wednesday,
            Weekday::Thursday => IsoWeekday::Thursday,
            Weekday::Friday => IsoWeekday::Friday,
            Weekday::Saturday => IsoWeekday::Saturday,
            Weekday::Sunday => IsoWeekday::Sunday,
        }
    }
}

// ============================================================================
// DiffLevel
// ============================================================================

/// Granularity of a duration decomposition, finest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffLevel {
    Ms,
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

impl DiffLevel {
    /// All levels, coarsest first
    pub const DESCENDING: [DiffLevel; 8] = [
        DiffLevel::Years,
        DiffLevel::Months,
        DiffLevel::Weeks,
        DiffLevel::Days,
        DiffLevel::Hours,
        DiffLevel::Minutes,
        DiffLevel::Seconds,
        DiffLevel::Ms,
    ];

    /// Milliseconds in one unit of this level
    pub fn unit_ms(self) -> i64 {
        match self {
            DiffLevel::Ms => 1,
            DiffLevel::Seconds => MS_PER_SECOND,
            DiffLevel::Minutes => MS_PER_MINUTE,
            DiffLevel::Hours => MS_PER_HOUR,
            DiffLevel::Days => MS_PER_DAY,
            DiffLevel::Weeks => MS_PER_WEEK,
            DiffLevel::Months => MS_PER_MONTH,
            DiffLevel::Years => MS_PER_YEAR,
        }
    }

    /// Next finer level, `None` for `Ms`
    pub fn finer(self) -> Option<DiffLevel> {
        match self {
            DiffLevel::Ms => None,
            DiffLevel::Seconds => Some(DiffLevel::Ms),
            DiffLevel::Minutes => Some(DiffLevel::Seconds),
            DiffLevel::Hours => Some(DiffLevel::Minutes),
            DiffLevel::Days => Some(DiffLevel::Hours),
            DiffLevel::Weeks => Some(DiffLevel::Days),
            DiffLevel::Months => Some(DiffLevel::Weeks),
            DiffLevel::Years => Some(DiffLevel::Months),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DiffLevel::Ms => "ms",
            DiffLevel::Seconds => "seconds",
            DiffLevel::Minutes => "minutes",
            DiffLevel::Hours => "hours",
            DiffLevel::Days => "days",
            DiffLevel::Weeks => "weeks",
            DiffLevel::Months => "months",
            DiffLevel::Years => "years",
        }
    }
}

impl fmt::Display for DiffLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ms_constants() {
        assert_eq!(MS_PER_WEEK, 604_800_000);
        assert_eq!(MS_PER_MONTH as f64, MS_PER_DAY as f64 * AVG_DAYS_PER_MONTH);
        assert_eq!(MS_PER_YEAR as f64, MS_PER_DAY as f64 * AVG_DAYS_PER_YEAR);
        assert_eq!(MAX_INSTANT_MS, 8_640_000_000_000_000);
    }

    #[test]
    fn test_weekday_numbering() {
        assert_eq!(Weekday::Sunday.index(), 0);
        assert_eq!(Weekday::Saturday.index(), 6);
        assert_eq!(Weekday::from_index(-1), Weekday::Saturday);
        assert_eq!(Weekday::from_index(7), Weekday::Sunday);
    }

    #[test]
    fn test_iso_weekday_numbering() {
        assert_eq!(Weekday::Sunday.to_iso().number(), 7);
        assert_eq!(Weekday::Monday.to_iso().number(), 1);
        assert_eq!(Weekday::Sunday.days_from_monday(), 6);
        assert_eq!(Weekday::Monday.days_from_monday(), 0);
    }

    #[test]
    fn test_weekend() {
        assert!(Weekday::Saturday.is_weekend());
        assert!(Weekday::Sunday.is_weekend());
        assert!(!Weekday::Friday.is_weekend());
        assert!(IsoWeekday::Sunday.is_weekend());
        assert!(!IsoWeekday::Monday.is_weekend());
    }

    #[test]
    fn test_diff_level_order() {
        assert!(DiffLevel::Ms < DiffLevel::Seconds);
        assert!(DiffLevel::Months < DiffLevel::Years);
        assert_eq!(DiffLevel::Years.finer(), Some(DiffLevel::Months));
        assert_eq!(DiffLevel::Ms.finer(), None);
        assert_eq!(serde_json::to_string(&DiffLevel::Ms).unwrap(), "\"ms\"");
    }
}
