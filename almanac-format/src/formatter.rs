//! Formatting strategies
//!
//! `probe` decides once whether a locale can be served: its language needs a
//! label table and icu needs plural, number and list data for the tag.
//! Callers hold the outcome as a `DurationFormatter` and never probe again
//! per call.

use fixed_decimal::Decimal;
use icu::decimal::options::DecimalFormatterOptions;
use icu::decimal::{DecimalFormatter, DecimalFormatterPreferences};
use icu::list::options::{ListFormatterOptions, ListLength};
use icu::list::ListFormatter;
use icu::locale::Locale as IcuLocale;
use icu::plurals::{
    PluralCategory, PluralOperands, PluralRuleType, PluralRules as IcuPluralRules,
    PluralRulesOptions as IcuPluralRulesOptions, PluralRulesPreferences,
};
use tracing::debug;

use crate::error::FormatError;
use crate::locale::{lookup, UnitLabels};
use crate::parts::{DurationParts, DurationStyle, DurationUnit};

const NANOS_PER_SECOND: u128 = 1_000_000_000;

/// Turns duration fields into display text
pub trait DurationFormatter: Send + Sync {
    /// Locale the output is localized for, `None` when unlocalized
    fn locale(&self) -> Option<&str>;

    fn format(&self, parts: &DurationParts) -> String;
}

/// Check that `locale` and `style` can be formatted with locale data
pub fn probe(locale: &str, style: DurationStyle) -> Result<LocalizedFormatter, FormatError> {
    let (icu_locale, labels) = lookup(locale)?;
    let formatter = LocalizedFormatter {
        locale: locale.to_string(),
        icu_locale,
        style,
        labels,
    };
    formatter.tools()?;
    Ok(formatter)
}

// ============================================================================
// Localized
// ============================================================================

/// Formats with CLDR plural rules, digits and unit lists
#[derive(Debug, Clone)]
pub struct LocalizedFormatter {
    locale: String,
    icu_locale: IcuLocale,
    style: DurationStyle,
    labels: &'static UnitLabels,
}

/// icu formatters for one call
struct Tools {
    plurals: IcuPluralRules,
    numbers: DecimalFormatter,
    list: ListFormatter,
}

impl LocalizedFormatter {
    pub fn style(&self) -> DurationStyle {
        self.style
    }

    // `DurationFormatter` is `Send + Sync` and icu formatters need not be, so
    // they are built per call from compiled data.
    fn tools(&self) -> Result<Tools, FormatError> {
        let locale_data = |err: &dyn std::fmt::Display| {
            FormatError::LocaleData(format!("{}: {}", self.locale, err))
        };

        let mut plural_opts = IcuPluralRulesOptions::default();
        plural_opts.rule_type = Some(PluralRuleType::Cardinal);
        let plurals =
            IcuPluralRules::try_new(PluralRulesPreferences::from(&self.icu_locale), plural_opts)
                .map_err(|err| locale_data(&err))?;

        let numbers = DecimalFormatter::try_new(
            DecimalFormatterPreferences::from(&self.icu_locale),
            DecimalFormatterOptions::default(),
        )
        .map_err(|err| locale_data(&err))?;

        // digital output lists its date units with the short pattern
        let length = match self.style {
            DurationStyle::Long => ListLength::Wide,
            DurationStyle::Short | DurationStyle::Digital => ListLength::Short,
            DurationStyle::Narrow => ListLength::Narrow,
        };
        let list_opts = ListFormatterOptions::default().with_length(length);
        let list = ListFormatter::try_new_unit((&self.icu_locale).into(), list_opts)
            .map_err(|err| locale_data(&err))?;

        Ok(Tools {
            plurals,
            numbers,
            list,
        })
    }

    fn render(&self, tools: &Tools, parts: &DurationParts) -> String {
        let digital = self.style == DurationStyle::Digital;
        // only the first displayed unit carries the sign
        let mut sign_pending = parts.is_negative();
        let mut items = Vec::new();

        for (unit, value) in parts.entries() {
            if value == 0 || (digital && unit.is_clock()) {
                continue;
            }
            let number = tools.number(value, std::mem::take(&mut sign_pending));
            let category = tools.category(value);
            items.push(self.labels.get(self.style, unit).apply(&number, category));
        }
        if digital {
            items.push(tools.clock(parts, sign_pending));
        }

        tools.list.format_to_string(items.iter().map(String::as_str))
    }
}

impl Tools {
    fn category(&self, value: i64) -> PluralCategory {
        self.plurals.category_for(PluralOperands::from(value.unsigned_abs()))
    }

    /// Locale digits of `|value|`, with the locale minus sign when `signed`
    fn number(&self, value: i64, signed: bool) -> String {
        let magnitude = i128::from(value.unsigned_abs());
        let decimal = Decimal::from(if signed { -magnitude } else { magnitude });
        self.numbers.format(&decimal).to_string()
    }

    /// `h:mm:ss` plus a trimmed fraction when sub-second fields are set
    fn clock(&self, parts: &DurationParts, signed: bool) -> String {
        let field = |unit| u128::from(parts.get(unit).unwrap_or(0).unsigned_abs());
        let nanos = field(DurationUnit::Seconds) * NANOS_PER_SECOND
            + field(DurationUnit::Milliseconds) * 1_000_000
            + field(DurationUnit::Microseconds) * 1_000
            + field(DurationUnit::Nanoseconds);
        let seconds = nanos / NANOS_PER_SECOND;
        let fraction = nanos % NANOS_PER_SECOND;

        let mut out = format!(
            "{}{}:{:02}:{:02}",
            if signed { "-" } else { "" },
            field(DurationUnit::Hours),
            field(DurationUnit::Minutes),
            seconds
        );
        if fraction != 0 {
            out.push_str(&self.fraction(fraction));
        }
        out
    }

    /// Decimal separator and digits of `nanos / 1e9`, e.g. `,5` in German
    fn fraction(&self, nanos: u128) -> String {
        let digits = format!("0.{:09}", nanos);
        let digits = digits.trim_end_matches('0');
        match Decimal::try_from_str(digits) {
            Ok(decimal) => {
                let text = self.numbers.format(&decimal).to_string();
                text.strip_prefix('0').unwrap_or(&text).to_string()
            }
            Err(_) => digits.trim_start_matches('0').to_string(),
        }
    }
}

impl DurationFormatter for LocalizedFormatter {
    fn locale(&self) -> Option<&str> {
        Some(&self.locale)
    }

    fn format(&self, parts: &DurationParts) -> String {
        match self.tools() {
            Ok(tools) => self.render(&tools, parts),
            Err(err) => {
                debug!(locale = %self.locale, error = %err, "icu formatters unavailable, using plain output");
                FallbackFormatter.format(parts)
            }
        }
    }
}

// ============================================================================
// Fallback
// ============================================================================

/// `{value} {unit}` pairs for every present field, joined with `, `
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackFormatter;

impl DurationFormatter for FallbackFormatter {
    fn locale(&self) -> Option<&str> {
        None
    }

    fn format(&self, parts: &DurationParts) -> String {
        parts
            .entries()
            .map(|(unit, value)| format!("{} {}", value, unit.key()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
