//! ISO-8601 week numbering
//!
//! Weeks run Monday to Sunday and week 1 is the week holding the year's
//! first Thursday. The week number always follows that rule.
//!
//! The year reported next to it is the calendar year, stepped back by one
//! when a January day sits in week 52 or 53. Late December days in week 1
//! keep their own year, so 2007-12-31 is `2007-W01`. `thursday_year_week`
//! reports the strict ISO week-year (`2008-W01`) instead.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calendar::{pad_year, Calendar};
use crate::civil::{civil_from_days, make_day, weekday_from_days, CivilParts};
use crate::consts::Weekday;
use crate::error::CalendarError;
use crate::instant::Instant;
use crate::period::Period;

/// ISO week-year pair, shown as `2005-W01`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IsoYearWeek {
    pub year: i64,
    pub week: u32,
}

impl IsoYearWeek {
    pub fn new(year: i64, week: u32) -> Self {
        Self { year, week }
    }
}

impl fmt::Display for IsoYearWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", pad_year(self.year), self.week)
    }
}

impl Calendar {
    // ========== ISO week-year ==========

    /// Week number and week-year of `instant` in this calendar's zone.
    ///
    /// `None` for an invalid instant.
    pub fn iso_year_week(&self, instant: Instant) -> Option<IsoYearWeek> {
        let parts = self.valid_civil(instant)?;
        let (_, week) = thursday_week(&parts);
        let year = if week >= 52 && parts.month == 1 {
            parts.year - 1
        } else {
            parts.year
        };
        Some(IsoYearWeek::new(year, week))
    }

    /// Week number with the calendar year of that week's Thursday
    pub fn thursday_year_week(&self, instant: Instant) -> Option<IsoYearWeek> {
        let parts = self.valid_civil(instant)?;
        let (year, week) = thursday_week(&parts);
        Some(IsoYearWeek::new(year, week))
    }

    pub fn iso_week(&self, instant: Instant) -> Option<u32> {
        self.iso_year_week(instant).map(|yw| yw.week)
    }

    pub fn iso_year(&self, instant: Instant) -> Option<i64> {
        self.iso_year_week(instant).map(|yw| yw.year)
    }

    /// `"{yyyy}-W{ww}"`
    pub fn iso_week_string(&self, instant: Instant) -> Option<String> {
        self.iso_year_week(instant).map(|yw| yw.to_string())
    }

    /// Monday 00:00 of ISO week `week`, counted from the ISO year of `reference`
    pub fn move_to_start_of_iso_week(&self, reference: Instant, week: u32) -> Instant {
        let Some(current) = self.iso_week(reference) else {
            return Instant::INVALID;
        };
        let shift = week as i64 - current as i64;
        self.start_of(Period::WorkWeek, self.add_weeks(reference, shift))
    }

    /// Monday 00:00 of an ISO week-year
    pub fn start_of_iso_year_week(&self, year_week: IsoYearWeek) -> Result<Instant, CalendarError> {
        // mid-January always lies in ISO week 2 or 3 of the same year
        let anchor = format!("{}-01-15", pad_year(year_week.year));
        let reference = self.parse_non_null(anchor.as_str())?;
        Ok(self.move_to_start_of_iso_week(reference, year_week.week))
    }
}

/// Calendar year of the Thursday in the Monday-start week of `parts`, and
/// that week's number counted from the year's first Thursday
fn thursday_week(parts: &CivilParts) -> (i64, u32) {
    let thursday = parts.days() - parts.weekday.days_from_monday() as i64 + 3;
    let (thursday_year, _, _) = civil_from_days(thursday);

    let january_first = make_day(thursday_year, 0, 1);
    let to_thursday = (Weekday::Thursday.index() as i64
        - weekday_from_days(january_first).index() as i64)
        .rem_euclid(7);
    let first_thursday = january_first + to_thursday;

    (thursday_year, (1 + (thursday - first_thursday) / 7) as u32)
}
