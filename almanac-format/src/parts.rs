//! Duration values handed to formatters

use almanac_core::{Decomposition, DiffLevel};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

/// Presentation style of a formatted duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationStyle {
    /// `1 year, 2 days`
    Long,
    /// `1 yr, 2 days`
    #[default]
    Short,
    /// `1y 2d`
    Narrow,
    /// `1 day, 2:03:04`
    Digital,
}

impl fmt::Display for DurationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DurationStyle::Long => "long",
            DurationStyle::Short => "short",
            DurationStyle::Narrow => "narrow",
            DurationStyle::Digital => "digital",
        };
        f.write_str(name)
    }
}

impl FromStr for DurationStyle {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "long" => Ok(DurationStyle::Long),
            "short" => Ok(DurationStyle::Short),
            "narrow" => Ok(DurationStyle::Narrow),
            "digital" => Ok(DurationStyle::Digital),
            _ => Err(FormatError::UnsupportedStyle(s.to_string())),
        }
    }
}

/// Unit of a duration field, coarsest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DurationUnit {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
    Microseconds,
    Nanoseconds,
}

impl DurationUnit {
    pub const ALL: [DurationUnit; 10] = [
        DurationUnit::Years,
        DurationUnit::Months,
        DurationUnit::Weeks,
        DurationUnit::Days,
        DurationUnit::Hours,
        DurationUnit::Minutes,
        DurationUnit::Seconds,
        DurationUnit::Milliseconds,
        DurationUnit::Microseconds,
        DurationUnit::Nanoseconds,
    ];

    /// Plural English key, as used by the unlocalized formatter
    pub fn key(self) -> &'static str {
        match self {
            DurationUnit::Years => "years",
            DurationUnit::Months => "months",
            DurationUnit::Weeks => "weeks",
            DurationUnit::Days => "days",
            DurationUnit::Hours => "hours",
            DurationUnit::Minutes => "minutes",
            DurationUnit::Seconds => "seconds",
            DurationUnit::Milliseconds => "milliseconds",
            DurationUnit::Microseconds => "microseconds",
            DurationUnit::Nanoseconds => "nanoseconds",
        }
    }

    /// Position in `ALL`, used to index label tables
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Hours and finer, shown on the clock in digital style
    pub(crate) fn is_clock(self) -> bool {
        self >= DurationUnit::Hours
    }
}

impl From<DiffLevel> for DurationUnit {
    fn from(level: DiffLevel) -> Self {
        match level {
            DiffLevel::Ms => DurationUnit::Milliseconds,
            DiffLevel::Seconds => DurationUnit::Seconds,
            DiffLevel::Minutes => DurationUnit::Minutes,
            DiffLevel::Hours => DurationUnit::Hours,
            DiffLevel::Days => DurationUnit::Days,
            DiffLevel::Weeks => DurationUnit::Weeks,
            DiffLevel::Months => DurationUnit::Months,
            DiffLevel::Years => DurationUnit::Years,
        }
    }
}

/// Duration fields to format; absent fields are never shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DurationParts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub months: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weeks: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minutes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seconds: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milliseconds: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub microseconds: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nanoseconds: Option<i64>,
}

impl DurationParts {
    pub fn new() -> Self {
        Self::default()
    }

    /// A single field
    pub fn single(unit: DurationUnit, value: i64) -> Self {
        Self::new().with(unit, value)
    }

    /// Set one field
    pub fn with(mut self, unit: DurationUnit, value: i64) -> Self {
        *self.slot_mut(unit) = Some(value);
        self
    }

    /// Clear one field
    pub fn without(mut self, unit: DurationUnit) -> Self {
        *self.slot_mut(unit) = None;
        self
    }

    pub fn get(&self, unit: DurationUnit) -> Option<i64> {
        match unit {
            DurationUnit::Years => self.years,
            DurationUnit::Months => self.months,
            DurationUnit::Weeks => self.weeks,
            DurationUnit::Days => self.days,
            DurationUnit::Hours => self.hours,
            DurationUnit::Minutes => self.minutes,
            DurationUnit::Seconds => self.seconds,
            DurationUnit::Milliseconds => self.milliseconds,
            DurationUnit::Microseconds => self.microseconds,
            DurationUnit::Nanoseconds => self.nanoseconds,
        }
    }

    fn slot_mut(&mut self, unit: DurationUnit) -> &mut Option<i64> {
        match unit {
            DurationUnit::Years => &mut self.years,
            DurationUnit::Months => &mut self.months,
            DurationUnit::Weeks => &mut self.weeks,
            DurationUnit::Days => &mut self.days,
            DurationUnit::Hours => &mut self.hours,
            DurationUnit::Minutes => &mut self.minutes,
            DurationUnit::Seconds => &mut self.seconds,
            DurationUnit::Milliseconds => &mut self.milliseconds,
            DurationUnit::Microseconds => &mut self.microseconds,
            DurationUnit::Nanoseconds => &mut self.nanoseconds,
        }
    }

    /// Present fields in natural order
    pub fn entries(&self) -> impl Iterator<Item = (DurationUnit, i64)> + '_ {
        DurationUnit::ALL
            .into_iter()
            .filter_map(|unit| self.get(unit).map(|value| (unit, value)))
    }

    pub fn is_negative(&self) -> bool {
        self.entries().any(|(_, value)| value < 0)
    }
}

impl From<Decomposition> for DurationParts {
    fn from(decomposition: Decomposition) -> Self {
        decomposition
            .entries()
            .into_iter()
            .fold(DurationParts::new(), |parts, (level, value)| parts.with(level.into(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_core::decompose;
    use serde_json::json;

    #[test]
    fn test_builder() {
        let parts = DurationParts::new()
            .with(DurationUnit::Days, 1)
            .with(DurationUnit::Hours, 2);
        assert_eq!(parts.days, Some(1));
        assert_eq!(parts.hours, Some(2));
        assert_eq!(parts.years, None);
        assert_eq!(parts.without(DurationUnit::Days).days, None);
    }

    #[test]
    fn test_entries_in_natural_order() {
        let parts = DurationParts::new()
            .with(DurationUnit::Nanoseconds, 3)
            .with(DurationUnit::Years, 1);
        let units: Vec<_> = parts.entries().collect();
        assert_eq!(units, vec![(DurationUnit::Years, 1), (DurationUnit::Nanoseconds, 3)]);
    }

    #[test]
    fn test_from_decomposition() {
        let parts = DurationParts::from(decompose(DiffLevel::Seconds, -1123));
        assert_eq!(parts.seconds, Some(-1));
        assert_eq!(parts.milliseconds, Some(-123));
        assert_eq!(parts.minutes, None);
        assert!(parts.is_negative());
    }

    #[test]
    fn test_serialized_keys() {
        let parts = DurationParts::single(DurationUnit::Milliseconds, 999);
        assert_eq!(serde_json::to_value(parts).unwrap(), json!({"milliseconds": 999}));
        assert_eq!(serde_json::to_value(DurationStyle::Digital).unwrap(), json!("digital"));
    }

    #[test]
    fn test_style_from_str() {
        assert_eq!("long".parse::<DurationStyle>(), Ok(DurationStyle::Long));
        assert_eq!("Digital".parse::<DurationStyle>(), Ok(DurationStyle::Digital));
        assert_eq!(
            "tiny".parse::<DurationStyle>(),
            Err(FormatError::UnsupportedStyle("tiny".to_string()))
        );
        assert_eq!(DurationStyle::Narrow.to_string(), "narrow");
    }

    #[test]
    fn test_clock_units() {
        assert!(!DurationUnit::Days.is_clock());
        assert!(DurationUnit::Hours.is_clock());
        assert!(DurationUnit::Nanoseconds.is_clock());
    }
}
