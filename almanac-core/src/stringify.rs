//! Fixed-format strings: `yyyy-mm-dd`, `hh:mm`, `hh:mm:ss` and ISO 8601

use crate::calendar::{pad_year, Calendar};
use crate::civil::CivilParts;
use crate::instant::Instant;

/// Shown for invalid instants
const INVALID_DATE: &str = "Invalid Date";

const ISO_DATE_LEN: usize = "yyyy-mm-dd".len();
const ISO_HH_MM_START: usize = "yyyy-mm-ddT".len();
const ISO_HH_MM_END: usize = "yyyy-mm-ddThh:mm".len();

impl Instant {
    /// `2000-01-01T00:00:00.000Z`, or `Invalid Date`
    pub fn to_iso_string(&self) -> String {
        if !self.is_valid() {
            return INVALID_DATE.to_string();
        }
        let p = CivilParts::from_ms(self.as_millis());
        format!(
            "{}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            pad_year(p.year),
            p.month,
            p.day,
            p.hour,
            p.minute,
            p.second,
            p.millisecond
        )
    }
}

impl Calendar {
    // Each of these reads `Invalid Date` for an invalid instant, like `to_iso_string`.

    /// `yyyy-mm-dd`
    pub fn date_part(&self, instant: Instant) -> String {
        self.render(instant, |p| format!("{}-{:02}-{:02}", pad_year(p.year), p.month, p.day))
    }

    /// `hh:mm`
    pub fn hh_mm_part(&self, instant: Instant) -> String {
        self.render(instant, |p| format!("{:02}:{:02}", p.hour, p.minute))
    }

    /// `hh:mm:ss`
    pub fn time_part(&self, instant: Instant) -> String {
        self.render(instant, |p| format!("{:02}:{:02}:{:02}", p.hour, p.minute, p.second))
    }

    /// `yyyy-mm-ddThh:mm:ss`
    pub fn date_time(&self, instant: Instant) -> String {
        self.render(instant, |p| {
            format!(
                "{}-{:02}-{:02}T{:02}:{:02}:{:02}",
                pad_year(p.year),
                p.month,
                p.day,
                p.hour,
                p.minute,
                p.second
            )
        })
    }

    fn render(&self, instant: Instant, write: impl FnOnce(&CivilParts) -> String) -> String {
        match self.valid_civil(instant) {
            Some(parts) => write(&parts),
            None => INVALID_DATE.to_string(),
        }
    }
}

/// `yyyy-mm-dd` prefix of an ISO string
pub fn iso_date_part(iso: &str) -> &str {
    iso.get(..ISO_DATE_LEN).unwrap_or(iso)
}

/// `hh:mm` of an ISO string
pub fn iso_hh_mm_part(iso: &str) -> &str {
    iso.get(ISO_HH_MM_START..ISO_HH_MM_END).unwrap_or("")
}
