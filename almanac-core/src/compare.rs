//! Equality and extremes of instants

use crate::calendar::Calendar;
use crate::error::CalendarError;
use crate::instant::{DateInput, Instant};

impl Calendar {
    /// Same millisecond after parsing both sides
    pub fn equal<'a, 'b>(
        &self,
        left: impl Into<DateInput<'a>>,
        right: impl Into<DateInput<'b>>,
    ) -> Result<bool, CalendarError> {
        Ok(self.diff_ms(left, right)? == 0)
    }
}

/// Latest valid instant, `None` when there is none
pub fn max<I: IntoIterator<Item = Instant>>(instants: I) -> Option<Instant> {
    instants.into_iter().filter(Instant::is_valid).max()
}

/// Earliest valid instant, `None` when there is none
pub fn min<I: IntoIterator<Item = Instant>>(instants: I) -> Option<Instant> {
    instants.into_iter().filter(Instant::is_valid).min()
}
