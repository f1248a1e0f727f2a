//! Configured duration formatting
//!
//! `DurationFormat` probes its locale once on construction. When the locale
//! has no unit labels it degrades to plain `{value} {unit}` output instead
//! of failing.

use almanac_core::{
    decompose, DiffLevel, AVG_DAYS_PER_MONTH, AVG_DAYS_PER_YEAR, MS_PER_MONTH, MS_PER_YEAR,
};
use std::sync::Arc;
use tracing::debug;

use crate::formatter::{probe, DurationFormatter, FallbackFormatter};
use crate::parts::{DurationParts, DurationStyle, DurationUnit};

/// Locale and style bound to a formatting strategy
#[derive(Clone)]
pub struct DurationFormat {
    locale: String,
    style: DurationStyle,
    formatter: Arc<dyn DurationFormatter>,
}

impl DurationFormat {
    pub fn new(locale: &str, style: DurationStyle) -> Self {
        let formatter: Arc<dyn DurationFormatter> = match probe(locale, style) {
            Ok(localized) => Arc::new(localized),
            Err(err) => {
                debug!(locale, %style, error = %err, "using unlocalized duration format");
                Arc::new(FallbackFormatter)
            }
        };
        Self {
            locale: locale.to_string(),
            style,
            formatter,
        }
    }

    /// Same locale, different style
    pub fn with_style(self, style: DurationStyle) -> Self {
        Self::new(&self.locale, style)
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn style(&self) -> DurationStyle {
        self.style
    }

    /// Whether output uses locale data rather than the plain fallback
    pub fn is_localized(&self) -> bool {
        self.formatter.locale().is_some()
    }

    pub fn format(&self, parts: &DurationParts) -> String {
        self.formatter.format(parts)
    }

    /// The single most significant unit of `|ms|`, rounded half up
    pub fn format_shortest(&self, ms: i64) -> String {
        self.format(&shortest_parts(ms))
    }

    /// Years down to hours, minutes and finer dropped
    pub fn format_up_to_hours(&self, ms: i64) -> String {
        self.format(&up_to_hours_parts(ms))
    }
}

impl std::fmt::Debug for DurationFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DurationFormat")
            .field("locale", &self.locale)
            .field("style", &self.style)
            .field("localized", &self.is_localized())
            .finish()
    }
}

// ============================================================================
// Unit selection
// ============================================================================

/// One unit describing `|ms|`
pub fn shortest_parts(ms: i64) -> DurationParts {
    let ms = ms.saturating_abs();

    let years = ms as f64 / MS_PER_YEAR as f64;
    if years >= 1.0 {
        return DurationParts::single(DurationUnit::Years, years.round() as i64);
    }
    let months = ms as f64 / MS_PER_MONTH as f64;
    if months >= 1.0 {
        return DurationParts::single(DurationUnit::Months, months.round() as i64);
    }

    let split = decompose(DiffLevel::Years, ms);
    let field = |level| split.get(level).unwrap_or(0);
    let Some(level) = DiffLevel::DESCENDING.into_iter().find(|&level| field(level) != 0) else {
        return DurationParts::single(DurationUnit::Milliseconds, ms);
    };

    let round_up = match level {
        DiffLevel::Years => field(DiffLevel::Days) as f64 >= AVG_DAYS_PER_YEAR / 2.0,
        DiffLevel::Months => field(DiffLevel::Days) as f64 >= AVG_DAYS_PER_MONTH / 2.0,
        DiffLevel::Weeks => field(DiffLevel::Days) as f64 >= 3.5,
        DiffLevel::Days => field(DiffLevel::Hours) >= 12,
        DiffLevel::Hours => field(DiffLevel::Minutes) >= 30,
        DiffLevel::Minutes => field(DiffLevel::Seconds) >= 30,
        DiffLevel::Seconds => field(DiffLevel::Ms) >= 500,
        DiffLevel::Ms => false,
    };
    DurationParts::single(level.into(), field(level) + i64::from(round_up))
}

/// `ms` split from years to hours
pub fn up_to_hours_parts(ms: i64) -> DurationParts {
    let split = decompose(DiffLevel::Years, ms).without(&[
        DiffLevel::Minutes,
        DiffLevel::Seconds,
        DiffLevel::Ms,
    ]);
    DurationParts::from(split).without(DurationUnit::Milliseconds)
}

// ============================================================================
// Shortcuts
// ============================================================================

pub fn format_duration(style: DurationStyle, locale: &str, parts: &DurationParts) -> String {
    DurationFormat::new(locale, style).format(parts)
}

pub fn format_shortest_duration(style: DurationStyle, locale: &str, ms: i64) -> String {
    DurationFormat::new(locale, style).format_shortest(ms)
}

pub fn format_duration_up_to_hours(style: DurationStyle, locale: &str, ms: i64) -> String {
    DurationFormat::new(locale, style).format_up_to_hours(ms)
}
