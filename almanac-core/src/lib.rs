//! Almanac Core - calendar engine
//!
//! This crate provides the calendar types used throughout Almanac:
//! - `Instant`: millisecond-resolution point in time
//! - `Calendar`: field accessors, field arithmetic, period bounds and ISO weeks in a `Zone`
//! - `Decomposition`: signed differences split into units
//! - `CalendarError`: errors for null and invalid inputs

mod calendar;
mod civil;
mod compare;
mod consts;
mod diff;
mod error;
mod instant;
mod iso_week;
mod parse;
mod period;
mod stringify;
mod zone;

pub use calendar::{Calendar, CalendarUnit, DateParts};
pub use civil::{days_in_month, is_leap_year};
pub use compare::{max, min};
pub use consts::{
    DiffLevel, IsoWeekday, Weekday, AVG_DAYS_PER_MONTH, AVG_DAYS_PER_YEAR, MAX_INSTANT_MS,
    MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_MONTH, MS_PER_SECOND, MS_PER_WEEK, MS_PER_YEAR,
};
pub use diff::{decompose, Decomposition};
pub use error::CalendarError;
pub use instant::{is_valid, DateInput, Instant};
pub use iso_week::IsoYearWeek;
pub use period::Period;
pub use stringify::{iso_date_part, iso_hh_mm_part};
pub use zone::Zone;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Calendar, CalendarError, CalendarUnit, DateInput, Decomposition, DiffLevel, Instant,
        IsoYearWeek, Period, Zone,
    };
}
