//! Start and end of calendar periods
//!
//! `end_of` is always the start of the following period minus one
//! millisecond, so month lengths, leap days and DST shifts need no special
//! cases.

use serde::{Deserialize, Serialize};

use crate::calendar::{Calendar, CalendarUnit};
use crate::civil::{make_day, make_time};
use crate::consts::MS_PER_DAY;
use crate::instant::Instant;

/// Calendar period with a start and an end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Period {
    Second,
    Minute,
    Hour,
    Day,
    /// Sunday to Saturday
    Week,
    /// Monday to Sunday
    WorkWeek,
    Month,
    Quarter,
    HalfYear,
    Year,
}

impl Period {
    /// Length of the period as a field-based step
    fn step(self) -> (CalendarUnit, i64) {
        match self {
            Period::Second => (CalendarUnit::Second, 1),
            Period::Minute => (CalendarUnit::Minute, 1),
            Period::Hour => (CalendarUnit::Hour, 1),
            Period::Day => (CalendarUnit::Day, 1),
            Period::Week | Period::WorkWeek => (CalendarUnit::Week, 1),
            Period::Month => (CalendarUnit::Month, 1),
            Period::Quarter => (CalendarUnit::Month, 3),
            Period::HalfYear => (CalendarUnit::Month, 6),
            Period::Year => (CalendarUnit::Year, 1),
        }
    }
}

impl Calendar {
    /// First millisecond of the period containing `instant`
    pub fn start_of(&self, period: Period, instant: Instant) -> Instant {
        if !instant.is_valid() {
            return instant;
        }
        let p = self.civil(instant);
        let (year, month0, day) = (p.year, p.month as i64 - 1, p.day as i64);
        let (h, m, s) = (p.hour as i64, p.minute as i64, p.second as i64);

        let wall = match period {
            Period::Second => make_day(year, month0, day) * MS_PER_DAY + make_time(h, m, s, 0),
            Period::Minute => make_day(year, month0, day) * MS_PER_DAY + make_time(h, m, 0, 0),
            Period::Hour => make_day(year, month0, day) * MS_PER_DAY + make_time(h, 0, 0, 0),
            Period::Day => make_day(year, month0, day) * MS_PER_DAY,
            Period::Week => make_day(year, month0, day - p.weekday.index() as i64) * MS_PER_DAY,
            Period::WorkWeek => {
                make_day(year, month0, day - p.weekday.days_from_monday() as i64) * MS_PER_DAY
            }
            Period::Month => make_day(year, month0, 1) * MS_PER_DAY,
            Period::Quarter => make_day(year, month0 / 3 * 3, 1) * MS_PER_DAY,
            Period::HalfYear => make_day(year, month0 / 6 * 6, 1) * MS_PER_DAY,
            Period::Year => make_day(year, 0, 1) * MS_PER_DAY,
        };
        self.from_wall_ms(wall)
    }

    /// Last millisecond of the period containing `instant`
    pub fn end_of(&self, period: Period, instant: Instant) -> Instant {
        let (unit, amount) = period.step();
        let next = self.add(self.start_of(period, instant), unit, amount);
        next.add_ms(-1)
    }
}
