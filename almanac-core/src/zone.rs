//! Time zones and wall-clock resolution
//!
//! A `Zone` answers two questions: what offset applies at a UTC instant, and
//! which UTC instant a wall-clock reading maps to. The second is not always a
//! function. Readings repeated by a backward transition resolve to the
//! earlier instant; readings skipped by a forward transition are read with
//! the offset in effect before the gap, so 02:30 in a 02:00 -> 03:00 gap
//! becomes 03:30.

use chrono::{DateTime, FixedOffset, Local, MappedLocalTime, Offset, TimeZone};
use chrono_tz::Tz;
use tracing::trace;

use crate::consts::MS_PER_SECOND;
use crate::error::CalendarError;

/// Zone used to read and write calendar fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    /// Host zone, consulted on every call
    #[default]
    System,
    Utc,
    Fixed(FixedOffset),
    /// IANA zone from the bundled database
    Named(Tz),
}

impl Zone {
    /// Zone from an IANA name such as `Europe/Berlin`
    pub fn named(name: &str) -> Result<Self, CalendarError> {
        name.parse::<Tz>()
            .map(Zone::Named)
            .map_err(|_| CalendarError::UnknownZone(name.to_string()))
    }

    /// Fixed offset east of UTC
    pub fn fixed_minutes(minutes: i32) -> Result<Self, CalendarError> {
        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(Zone::Fixed)
            .ok_or(CalendarError::InvalidOffset(minutes))
    }

    pub fn is_utc(&self) -> bool {
        match self {
            Zone::Utc => true,
            Zone::Fixed(offset) => offset.local_minus_utc() == 0,
            _ => false,
        }
    }

    /// Offset (local minus UTC) in effect at a UTC instant
    pub fn offset_ms(&self, utc_ms: i64) -> i64 {
        match self {
            Zone::Utc => 0,
            Zone::Fixed(offset) => offset_to_ms(offset),
            Zone::System => offset_at(&Local, utc_ms),
            Zone::Named(tz) => offset_at(tz, utc_ms),
        }
    }

    /// Wall-clock milliseconds of a UTC instant
    pub fn to_local_ms(&self, utc_ms: i64) -> i64 {
        utc_ms.saturating_add(self.offset_ms(utc_ms))
    }

    /// UTC instant of a wall-clock reading
    pub fn to_utc_ms(&self, local_ms: i64) -> i64 {
        match self {
            Zone::Utc => local_ms,
            Zone::Fixed(offset) => local_ms.saturating_sub(offset_to_ms(offset)),
            Zone::System => self.resolve_local(&Local, local_ms),
            Zone::Named(tz) => self.resolve_local(tz, local_ms),
        }
    }

    fn resolve_local<Z: TimeZone>(&self, zone: &Z, local_ms: i64) -> i64 {
        let Some(naive) = DateTime::from_timestamp_millis(local_ms).map(|dt| dt.naive_utc()) else {
            return local_ms;
        };
        match zone.offset_from_local_datetime(&naive) {
            MappedLocalTime::Single(offset) => local_ms - offset_to_ms(&offset.fix()),
            MappedLocalTime::Ambiguous(first, second) => {
                trace!(local_ms, "repeated wall-clock time, taking the earlier instant");
                let a = local_ms - offset_to_ms(&first.fix());
                let b = local_ms - offset_to_ms(&second.fix());
                a.min(b)
            }
            MappedLocalTime::None => {
                trace!(local_ms, "wall-clock time skipped by a transition");
                local_ms - offset_before_gap(zone, local_ms)
            }
        }
    }
}

/// Offset in effect just before the gap holding `local_ms`.
///
/// Reading the wall time with either neighbouring offset lands on opposite
/// sides of the transition, so the two lookups below return both offsets.
/// A forward gap raises the offset, which makes the smaller one the earlier.
fn offset_before_gap<Z: TimeZone>(zone: &Z, local_ms: i64) -> i64 {
    let first = offset_at(zone, local_ms.saturating_sub(offset_at(zone, local_ms)));
    let second = offset_at(zone, local_ms.saturating_sub(first));
    first.min(second)
}

fn offset_to_ms(offset: &FixedOffset) -> i64 {
    offset.local_minus_utc() as i64 * MS_PER_SECOND
}

/// Offset of `zone` at a UTC instant; outside chrono's range, UTC
fn offset_at<Z: TimeZone>(zone: &Z, utc_ms: i64) -> i64 {
    match DateTime::from_timestamp_millis(utc_ms) {
        Some(dt) => offset_to_ms(&zone.offset_from_utc_datetime(&dt.naive_utc()).fix()),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::civil::{days_from_civil, make_time};
    use crate::consts::{MS_PER_DAY, MS_PER_HOUR};

    fn wall(year: i64, month: u32, day: u32, hour: i64, minute: i64) -> i64 {
        days_from_civil(year, month, day) * MS_PER_DAY + make_time(hour, minute, 0, 0)
    }

    fn berlin() -> Zone {
        Zone::named("Europe/Berlin").unwrap()
    }

    #[test]
    fn test_named_zone() {
        assert!(matches!(berlin(), Zone::Named(_)));
        assert_eq!(
            Zone::named("Mars/Olympus"),
            Err(CalendarError::UnknownZone("Mars/Olympus".to_string()))
        );
    }

    #[test]
    fn test_fixed_zone() {
        let zone = Zone::fixed_minutes(330).unwrap();
        assert_eq!(zone.offset_ms(0), 330 * 60 * 1000);
        assert_eq!(zone.to_utc_ms(zone.to_local_ms(12_345)), 12_345);
        assert!(Zone::fixed_minutes(0).unwrap().is_utc());
        assert_eq!(Zone::fixed_minutes(24 * 60), Err(CalendarError::InvalidOffset(1440)));
    }

    #[test]
    fn test_berlin_offsets() {
        let zone = berlin();
        assert_eq!(zone.offset_ms(wall(2023, 1, 15, 12, 0)), MS_PER_HOUR);
        assert_eq!(zone.offset_ms(wall(2023, 7, 15, 12, 0)), 2 * MS_PER_HOUR);
    }

    #[test]
    fn test_gap_uses_offset_before_transition() {
        // 2023-03-26 02:00 CET jumps to 03:00 CEST
        let zone = berlin();
        let utc = zone.to_utc_ms(wall(2023, 3, 26, 2, 30));
        assert_eq!(utc, wall(2023, 3, 26, 1, 30));
        assert_eq!(zone.to_local_ms(utc), wall(2023, 3, 26, 3, 30));
    }

    #[test]
    fn test_skipped_day_resolves_past_gap() {
        // Apia moved from UTC-10 to UTC+14 and skipped 2011-12-30 entirely
        let zone = Zone::named("Pacific/Apia").unwrap();
        let utc = zone.to_utc_ms(wall(2011, 12, 30, 12, 0));
        assert_eq!(utc, wall(2011, 12, 30, 22, 0));
        assert_eq!(zone.to_local_ms(utc), wall(2011, 12, 31, 12, 0));
    }

    #[test]
    fn test_gap_right_after_transition() {
        let zone = berlin();
        let utc = zone.to_utc_ms(wall(2023, 3, 26, 2, 0));
        assert_eq!(zone.to_local_ms(utc), wall(2023, 3, 26, 3, 0));
    }

    #[test]
    fn test_overlap_takes_earlier_instant() {
        // 2023-10-29 03:00 CEST falls back to 02:00 CET
        let zone = berlin();
        let utc = zone.to_utc_ms(wall(2023, 10, 29, 2, 30));
        assert_eq!(utc, wall(2023, 10, 29, 0, 30));
    }

    #[test]
    fn test_utc_is_identity() {
        assert_eq!(Zone::Utc.to_utc_ms(42), 42);
        assert_eq!(Zone::Utc.to_local_ms(42), 42);
    }
}
