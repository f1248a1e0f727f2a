//! Signed differences and their decomposition into units
//!
//! Decomposition divides with truncation toward zero at every level, so a
//! negative difference decomposes into the exact negation of its positive
//! mirror. Months and years use the average lengths from `consts`; an exact
//! split across real months would need an anchor date.

use serde::{Deserialize, Serialize};
use std::ops::Neg;

use crate::calendar::Calendar;
use crate::consts::DiffLevel;
use crate::error::CalendarError;
use crate::instant::{DateInput, Instant};

// ============================================================================
// Decomposition
// ============================================================================

/// A millisecond span split into units down from `level`
///
/// Fields coarser than `level` are `None` and omitted when serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decomposition {
    pub level: DiffLevel,
    pub ms: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seconds: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minutes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weeks: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub months: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years: Option<i64>,
}

/// Split `ms` into units from `level` down to milliseconds
pub fn decompose(level: DiffLevel, ms: i64) -> Decomposition {
    let mut out = Decomposition {
        level,
        ms: 0,
        seconds: None,
        minutes: None,
        hours: None,
        days: None,
        weeks: None,
        months: None,
        years: None,
    };
    let mut remainder = ms;
    let mut current = Some(level);

    while let Some(unit) = current {
        if unit == DiffLevel::Ms {
            out.ms = remainder;
            break;
        }
        // i64 division truncates toward zero
        let value = remainder / unit.unit_ms();
        remainder -= value * unit.unit_ms();
        *out.slot_mut(unit) = Some(value);
        current = unit.finer();
    }
    out
}

impl Decomposition {
    /// Value of a unit, `None` above the decomposition level
    pub fn get(&self, unit: DiffLevel) -> Option<i64> {
        match unit {
            DiffLevel::Ms => Some(self.ms),
            DiffLevel::Seconds => self.seconds,
            DiffLevel::Minutes => self.minutes,
            DiffLevel::Hours => self.hours,
            DiffLevel::Days => self.days,
            DiffLevel::Weeks => self.weeks,
            DiffLevel::Months => self.months,
            DiffLevel::Years => self.years,
        }
    }

    fn slot_mut(&mut self, unit: DiffLevel) -> &mut Option<i64> {
        match unit {
            // ms is never optional; callers stop before it
            DiffLevel::Ms | DiffLevel::Seconds => &mut self.seconds,
            DiffLevel::Minutes => &mut self.minutes,
            DiffLevel::Hours => &mut self.hours,
            DiffLevel::Days => &mut self.days,
            DiffLevel::Weeks => &mut self.weeks,
            DiffLevel::Months => &mut self.months,
            DiffLevel::Years => &mut self.years,
        }
    }

    /// Copy with the given units cleared; clearing `Ms` zeroes it
    pub fn without(&self, levels: &[DiffLevel]) -> Self {
        let mut out = *self;
        for &unit in levels {
            if unit == DiffLevel::Ms {
                out.ms = 0;
            } else {
                *out.slot_mut(unit) = None;
            }
        }
        out
    }

    /// `(unit, value)` pairs that are present, coarsest first
    pub fn entries(&self) -> Vec<(DiffLevel, i64)> {
        DiffLevel::DESCENDING
            .iter()
            .filter_map(|&unit| self.get(unit).map(|value| (unit, value)))
            .collect()
    }
}

impl Neg for Decomposition {
    type Output = Decomposition;

    fn neg(self) -> Self::Output {
        Decomposition {
            level: self.level,
            ms: -self.ms,
            seconds: self.seconds.map(Neg::neg),
            minutes: self.minutes.map(Neg::neg),
            hours: self.hours.map(Neg::neg),
            days: self.days.map(Neg::neg),
            weeks: self.weeks.map(Neg::neg),
            months: self.months.map(Neg::neg),
            years: self.years.map(Neg::neg),
        }
    }
}

// ============================================================================
// Diff and duration entry points
// ============================================================================

impl Calendar {
    fn valid_instant<'a>(&self, input: impl Into<DateInput<'a>>) -> Result<Instant, CalendarError> {
        let instant = self.parse_non_null(input)?;
        if instant.is_valid() {
            Ok(instant)
        } else {
            Err(CalendarError::InvalidTimeValue)
        }
    }

    /// `left - right` in milliseconds
    pub fn diff_ms<'a, 'b>(
        &self,
        left: impl Into<DateInput<'a>>,
        right: impl Into<DateInput<'b>>,
    ) -> Result<i64, CalendarError> {
        let left = self.valid_instant(left)?;
        let right = self.valid_instant(right)?;
        Ok(left.diff_ms(right))
    }

    /// `left - right` decomposed from `level` down
    pub fn diff<'a, 'b>(
        &self,
        level: DiffLevel,
        left: impl Into<DateInput<'a>>,
        right: impl Into<DateInput<'b>>,
    ) -> Result<Decomposition, CalendarError> {
        Ok(decompose(level, self.diff_ms(left, right)?))
    }

    fn diff_field<'a, 'b>(
        &self,
        level: DiffLevel,
        left: impl Into<DateInput<'a>>,
        right: impl Into<DateInput<'b>>,
    ) -> Result<i64, CalendarError> {
        Ok(self.diff(level, left, right)?.get(level).unwrap_or_default())
    }

    pub fn diff_seconds<'a, 'b>(
        &self,
        left: impl Into<DateInput<'a>>,
        right: impl Into<DateInput<'b>>,
    ) -> Result<i64, CalendarError> {
        self.diff_field(DiffLevel::Seconds, left, right)
    }

    pub fn diff_minutes<'a, 'b>(
        &self,
        left: impl Into<DateInput<'a>>,
        right: impl Into<DateInput<'b>>,
    ) -> Result<i64, CalendarError> {
        self.diff_field(DiffLevel::Minutes, left, right)
    }

    pub fn diff_hours<'a, 'b>(
        &self,
        left: impl Into<DateInput<'a>>,
        right: impl Into<DateInput<'b>>,
    ) -> Result<i64, CalendarError> {
        self.diff_field(DiffLevel::Hours, left, right)
    }

    pub fn diff_days<'a, 'b>(
        &self,
        left: impl Into<DateInput<'a>>,
        right: impl Into<DateInput<'b>>,
    ) -> Result<i64, CalendarError> {
        self.diff_field(DiffLevel::Days, left, right)
    }

    pub fn diff_weeks<'a, 'b>(
        &self,
        left: impl Into<DateInput<'a>>,
        right: impl Into<DateInput<'b>>,
    ) -> Result<i64, CalendarError> {
        self.diff_field(DiffLevel::Weeks, left, right)
    }

    /// Whole average months (30.436875 days)
    pub fn diff_months<'a, 'b>(
        &self,
        left: impl Into<DateInput<'a>>,
        right: impl Into<DateInput<'b>>,
    ) -> Result<i64, CalendarError> {
        self.diff_field(DiffLevel::Months, left, right)
    }

    /// Whole average years (365.25 days)
    pub fn diff_years<'a, 'b>(
        &self,
        left: impl Into<DateInput<'a>>,
        right: impl Into<DateInput<'b>>,
    ) -> Result<i64, CalendarError> {
        self.diff_field(DiffLevel::Years, left, right)
    }

    // ========== Durations ==========

    /// Milliseconds since the epoch, i.e. the diff against `Instant::EPOCH`
    pub fn duration_ms<'a>(&self, input: impl Into<DateInput<'a>>) -> Result<i64, CalendarError> {
        self.diff_ms(input, Instant::EPOCH)
    }

    pub fn duration<'a>(&self, level: DiffLevel, input: impl Into<DateInput<'a>>) -> Result<Decomposition, CalendarError> {
        self.diff(level, input, Instant::EPOCH)
    }

    pub fn duration_seconds<'a>(&self, input: impl Into<DateInput<'a>>) -> Result<i64, CalendarError> {
        self.diff_seconds(input, Instant::EPOCH)
    }

    pub fn duration_minutes<'a>(&self, input: impl Into<DateInput<'a>>) -> Result<i64, CalendarError> {
        self.diff_minutes(input, Instant::EPOCH)
    }

    pub fn duration_hours<'a>(&self, input: impl Into<DateInput<'a>>) -> Result<i64, CalendarError> {
        self.diff_hours(input, Instant::EPOCH)
    }

    pub fn duration_days<'a>(&self, input: impl Into<DateInput<'a>>) -> Result<i64, CalendarError> {
        self.diff_days(input, Instant::EPOCH)
    }

    pub fn duration_weeks<'a>(&self, input: impl Into<DateInput<'a>>) -> Result<i64, CalendarError> {
        self.diff_weeks(input, Instant::EPOCH)
    }

    pub fn duration_months<'a>(&self, input: impl Into<DateInput<'a>>) -> Result<i64, CalendarError> {
        self.diff_months(input, Instant::EPOCH)
    }

    pub fn duration_years<'a>(&self, input: impl Into<DateInput<'a>>) -> Result<i64, CalendarError> {
        self.diff_years(input, Instant::EPOCH)
    }
}
