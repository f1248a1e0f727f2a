//! Instant and date-like inputs
//!
//! An `Instant` is a millisecond count since 1970-01-01T00:00:00Z. It is a
//! plain `Copy` value: every operation returns a new one.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::consts::{MAX_INSTANT_MS, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND, MS_PER_WEEK};

// ============================================================================
// Instant
// ============================================================================

/// A point in time with millisecond resolution
///
/// Values farther than `MAX_INSTANT_MS` from the epoch are invalid; they are
/// produced by unparseable strings and by arithmetic leaving the range, and
/// they stay invalid through further arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct Instant {
    ms: i64,
}

impl Instant {
    /// 1970-01-01T00:00:00.000Z, the anchor for durations
    pub const EPOCH: Instant = Instant { ms: 0 };

    /// The "Invalid Date" value
    pub const INVALID: Instant = Instant { ms: i64::MIN };

    // ========== Construction ==========

    /// Instant from milliseconds since the epoch; out-of-range input is invalid
    pub fn from_millis(ms: i64) -> Self {
        if ms.unsigned_abs() > MAX_INSTANT_MS as u64 {
            Self::INVALID
        } else {
            Self { ms }
        }
    }

    /// Independent copy with the same millisecond value
    pub fn copy(&self) -> Self {
        *self
    }

    // ========== Accessors ==========

    pub fn as_millis(&self) -> i64 {
        self.ms
    }

    pub fn is_valid(&self) -> bool {
        self.ms.unsigned_abs() <= MAX_INSTANT_MS as u64
    }

    // ========== Value-based arithmetic ==========

    /// Add milliseconds to the raw value, ignoring zones and calendars
    pub fn add_ms(self, delta: i64) -> Self {
        if !self.is_valid() {
            return self;
        }
        self.ms.checked_add(delta).map_or(Self::INVALID, Self::from_millis)
    }

    pub fn add_seconds(self, delta: i64) -> Self {
        self.add_scaled(delta, MS_PER_SECOND)
    }

    pub fn add_minutes(self, delta: i64) -> Self {
        self.add_scaled(delta, MS_PER_MINUTE)
    }

    pub fn add_hours(self, delta: i64) -> Self {
        self.add_scaled(delta, MS_PER_HOUR)
    }

    /// Add exact 24-hour days
    pub fn add_days(self, delta: i64) -> Self {
        self.add_scaled(delta, MS_PER_DAY)
    }

    pub fn add_weeks(self, delta: i64) -> Self {
        self.add_scaled(delta, MS_PER_WEEK)
    }

    fn add_scaled(self, delta: i64, unit_ms: i64) -> Self {
        delta.checked_mul(unit_ms).map_or(Self::INVALID, |ms| self.add_ms(ms))
    }

    /// Signed difference `self - other` in milliseconds
    pub fn diff_ms(self, other: Instant) -> i64 {
        self.ms.saturating_sub(other.ms)
    }
}

impl From<i64> for Instant {
    fn from(ms: i64) -> Self {
        Instant::from_millis(ms)
    }
}

impl From<Instant> for i64 {
    fn from(instant: Instant) -> Self {
        instant.ms
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}

// ============================================================================
// DateInput
// ============================================================================

/// Anything that can be read as an instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput<'a> {
    Instant(Instant),
    Millis(i64),
    /// Calendar string, read in the calendar's zone unless it carries one
    Text(&'a str),
    Null,
}

impl DateInput<'_> {
    pub fn is_null(&self) -> bool {
        matches!(self, DateInput::Null)
    }
}

impl From<Instant> for DateInput<'_> {
    fn from(instant: Instant) -> Self {
        DateInput::Instant(instant)
    }
}

impl From<i64> for DateInput<'_> {
    fn from(ms: i64) -> Self {
        DateInput::Millis(ms)
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(text: &'a str) -> Self {
        DateInput::Text(text)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(text: &'a String) -> Self {
        DateInput::Text(text.as_str())
    }
}

impl<'a, T: Into<DateInput<'a>>> From<Option<T>> for DateInput<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(DateInput::Null, Into::into)
    }
}

/// True only for an `Instant` holding a valid time value
pub fn is_valid(input: &DateInput<'_>) -> bool {
    matches!(input, DateInput::Instant(instant) if instant.is_valid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_millis() {
        assert_eq!(Instant::from_millis(0), Instant::EPOCH);
        assert_eq!(Instant::from_millis(-5).as_millis(), -5);
        assert!(Instant::from_millis(MAX_INSTANT_MS).is_valid());
        assert!(!Instant::from_millis(MAX_INSTANT_MS + 1).is_valid());
        assert!(!Instant::from_millis(i64::MIN).is_valid());
    }

    #[test]
    fn test_deserialize_checks_range() {
        let t: Instant = serde_json::from_str("946684800000").unwrap();
        assert_eq!(t.as_millis(), 946_684_800_000);
        let far: Instant = serde_json::from_str("9000000000000000000").unwrap();
        assert!(!far.is_valid());
        assert_eq!(far, Instant::INVALID);
        assert_eq!(serde_json::to_string(&Instant::from_millis(42)).unwrap(), "42");
    }

    #[test]
    fn test_ordering_by_millis() {
        let a = Instant::from_millis(1);
        let b = Instant::from_millis(2);
        assert!(a < b);
        assert_eq!(a, Instant::from_millis(1));
        assert_eq!(a.copy(), a);
    }

    #[test]
    fn test_value_based_add() {
        let t = Instant::EPOCH;
        assert_eq!(t.add_ms(5).as_millis(), 5);
        assert_eq!(t.add_seconds(-2).as_millis(), -2_000);
        assert_eq!(t.add_minutes(1).as_millis(), 60_000);
        assert_eq!(t.add_hours(1).as_millis(), 3_600_000);
        assert_eq!(t.add_days(1).as_millis(), 86_400_000);
        assert_eq!(t.add_weeks(1).as_millis(), 604_800_000);
        // the argument is untouched
        assert_eq!(t, Instant::EPOCH);
    }

    #[test]
    fn test_invalid_propagates() {
        assert!(!Instant::INVALID.add_days(1).is_valid());
        assert!(!Instant::EPOCH.add_ms(MAX_INSTANT_MS + 1).is_valid());
        assert!(!Instant::EPOCH.add_weeks(i64::MAX).is_valid());
    }

    #[test]
    fn test_diff_ms_is_signed() {
        let a = Instant::from_millis(1_000);
        let b = Instant::from_millis(250);
        assert_eq!(a.diff_ms(b), 750);
        assert_eq!(b.diff_ms(a), -750);
    }

    #[test]
    fn test_date_input_conversions() {
        assert_eq!(DateInput::from(5i64), DateInput::Millis(5));
        assert_eq!(DateInput::from("2000-01-01"), DateInput::Text("2000-01-01"));
        assert_eq!(DateInput::from(None::<Instant>), DateInput::Null);
        assert_eq!(DateInput::from(Some(Instant::EPOCH)), DateInput::Instant(Instant::EPOCH));
        assert!(DateInput::Null.is_null());
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid(&Instant::EPOCH.into()));
        assert!(!is_valid(&Instant::INVALID.into()));
        assert!(!is_valid(&DateInput::Millis(0)));
        assert!(!is_valid(&DateInput::Text("2000-01-01")));
        assert!(!is_valid(&DateInput::Null));
    }
}
