//! Unit labels per language
//!
//! Plural categories, digits and list joining come from icu. The words
//! themselves live here, one table per language and style.

use icu::locale::Locale;
use icu::plurals::PluralCategory;

use crate::error::FormatError;
use crate::parts::{DurationStyle, DurationUnit};

/// Label appended to a number, picked by plural category
#[derive(Debug, Clone, Copy)]
pub(crate) struct UnitLabel {
    one: &'static str,
    other: &'static str,
}

const fn label(one: &'static str, other: &'static str) -> UnitLabel {
    UnitLabel { one, other }
}

/// Same text for every category
const fn fixed(text: &'static str) -> UnitLabel {
    UnitLabel { one: text, other: text }
}

impl UnitLabel {
    pub(crate) fn apply(&self, number: &str, category: PluralCategory) -> String {
        let suffix = match category {
            PluralCategory::One => self.one,
            _ => self.other,
        };
        format!("{}{}", number, suffix)
    }
}

#[derive(Debug)]
pub(crate) struct UnitLabels {
    pub language: &'static str,
    long: [UnitLabel; 10],
    short: [UnitLabel; 10],
    narrow: [UnitLabel; 10],
}

impl UnitLabels {
    /// Label for `unit`; digital style labels its date units like short
    pub(crate) fn get(&self, style: DurationStyle, unit: DurationUnit) -> &UnitLabel {
        let table = match style {
            DurationStyle::Long => &self.long,
            DurationStyle::Short | DurationStyle::Digital => &self.short,
            DurationStyle::Narrow => &self.narrow,
        };
        &table[unit.index()]
    }
}

// ============================================================================
// Tables
// ============================================================================

static ENGLISH: UnitLabels = UnitLabels {
    language: "en",
    long: [
        label(" year", " years"),
        label(" month", " months"),
        label(" week", " weeks"),
        label(" day", " days"),
        label(" hour", " hours"),
        label(" minute", " minutes"),
        label(" second", " seconds"),
        label(" millisecond", " milliseconds"),
        label(" microsecond", " microseconds"),
        label(" nanosecond", " nanoseconds"),
    ],
    short: [
        label(" yr", " yrs"),
        label(" mth", " mths"),
        label(" wk", " wks"),
        label(" day", " days"),
        fixed(" hr"),
        fixed(" min"),
        fixed(" sec"),
        fixed(" ms"),
        fixed(" μs"),
        fixed(" ns"),
    ],
    narrow: [
        fixed("y"),
        fixed("mo"),
        fixed("w"),
        fixed("d"),
        fixed("h"),
        fixed("min"),
        fixed("s"),
        fixed("ms"),
        fixed("μs"),
        fixed("ns"),
    ],
};

static GERMAN: UnitLabels = UnitLabels {
    language: "de",
    long: [
        label(" Jahr", " Jahre"),
        label(" Monat", " Monate"),
        label(" Woche", " Wochen"),
        label(" Tag", " Tage"),
        label(" Stunde", " Stunden"),
        label(" Minute", " Minuten"),
        label(" Sekunde", " Sekunden"),
        label(" Millisekunde", " Millisekunden"),
        label(" Mikrosekunde", " Mikrosekunden"),
        label(" Nanosekunde", " Nanosekunden"),
    ],
    short: [
        fixed(" J"),
        fixed(" Mon."),
        fixed(" Wo."),
        fixed(" Tg."),
        fixed(" Std."),
        fixed(" Min."),
        fixed(" Sek."),
        fixed(" ms"),
        fixed(" μs"),
        fixed(" ns"),
    ],
    narrow: [
        fixed(" J"),
        fixed(" M"),
        fixed(" W"),
        fixed(" T"),
        fixed(" Std."),
        fixed(" Min."),
        fixed(" S"),
        fixed(" ms"),
        fixed(" μs"),
        fixed(" ns"),
    ],
};

static FRENCH: UnitLabels = UnitLabels {
    language: "fr",
    long: [
        label(" an", " ans"),
        fixed(" mois"),
        label(" semaine", " semaines"),
        label(" jour", " jours"),
        label(" heure", " heures"),
        label(" minute", " minutes"),
        label(" seconde", " secondes"),
        label(" milliseconde", " millisecondes"),
        label(" microseconde", " microsecondes"),
        label(" nanoseconde", " nanosecondes"),
    ],
    short: [
        label(" an", " ans"),
        fixed(" m."),
        fixed(" sem."),
        fixed(" j"),
        fixed(" h"),
        fixed(" min"),
        fixed(" s"),
        fixed(" ms"),
        fixed(" μs"),
        fixed(" ns"),
    ],
    narrow: [
        fixed("a"),
        fixed("m."),
        fixed("sem."),
        fixed("j"),
        fixed("h"),
        fixed("min"),
        fixed("s"),
        fixed("ms"),
        fixed("μs"),
        fixed("ns"),
    ],
};

static SPANISH: UnitLabels = UnitLabels {
    language: "es",
    long: [
        label(" año", " años"),
        label(" mes", " meses"),
        label(" semana", " semanas"),
        label(" día", " días"),
        label(" hora", " horas"),
        label(" minuto", " minutos"),
        label(" segundo", " segundos"),
        label(" milisegundo", " milisegundos"),
        label(" microsegundo", " microsegundos"),
        label(" nanosegundo", " nanosegundos"),
    ],
    short: [
        fixed(" a"),
        fixed(" m."),
        fixed(" sem."),
        fixed(" d"),
        fixed(" h"),
        fixed(" min"),
        fixed(" s"),
        fixed(" ms"),
        fixed(" μs"),
        fixed(" ns"),
    ],
    narrow: [
        fixed("a"),
        fixed("m"),
        fixed("sem"),
        fixed("d"),
        fixed("h"),
        fixed("min"),
        fixed("s"),
        fixed("ms"),
        fixed("μs"),
        fixed("ns"),
    ],
};

static JAPANESE: UnitLabels = UnitLabels {
    language: "ja",
    long: [
        fixed(" 年"),
        fixed(" か月"),
        fixed(" 週間"),
        fixed(" 日"),
        fixed(" 時間"),
        fixed(" 分"),
        fixed(" 秒"),
        fixed(" ミリ秒"),
        fixed(" マイクロ秒"),
        fixed(" ナノ秒"),
    ],
    short: [
        fixed(" 年"),
        fixed(" か月"),
        fixed(" 週間"),
        fixed(" 日"),
        fixed(" 時間"),
        fixed(" 分"),
        fixed(" 秒"),
        fixed(" ms"),
        fixed(" μs"),
        fixed(" ns"),
    ],
    narrow: [
        fixed("年"),
        fixed("か月"),
        fixed("週間"),
        fixed("日"),
        fixed("時間"),
        fixed("分"),
        fixed("秒"),
        fixed("ms"),
        fixed("μs"),
        fixed("ns"),
    ],
};

static LABELS: [&UnitLabels; 5] = [&ENGLISH, &GERMAN, &FRENCH, &SPANISH, &JAPANESE];

// ============================================================================
// Lookup
// ============================================================================

/// Parsed tag and the label table for its language
pub(crate) fn lookup(locale: &str) -> Result<(Locale, &'static UnitLabels), FormatError> {
    let unsupported = || FormatError::UnsupportedLocale(locale.to_string());
    let parsed: Locale = locale.parse().map_err(|_| unsupported())?;
    let labels = LABELS
        .iter()
        .copied()
        .find(|labels| labels.language == parsed.id.language.as_str())
        .ok_or_else(unsupported)?;
    Ok((parsed, labels))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn language(locale: &str) -> Option<&'static str> {
        lookup(locale).ok().map(|(_, labels)| labels.language)
    }

    #[test]
    fn test_lookup_by_language() {
        assert_eq!(language("de-AT"), Some("de"));
        assert_eq!(language("en"), Some("en"));
        assert_eq!(language("en-US-u-nu-latn"), Some("en"));
        assert_eq!(language("ja-JP"), Some("ja"));
        assert_eq!(language("es-419"), Some("es"));
    }

    #[test]
    fn test_lookup_rejects() {
        for tag in ["", "nope", "d3", "xx-YY"] {
            assert_eq!(
                lookup(tag).unwrap_err(),
                FormatError::UnsupportedLocale(tag.to_string()),
                "{:?}",
                tag
            );
        }
    }

    #[test]
    fn test_labels_by_category() {
        let year = ENGLISH.get(DurationStyle::Long, DurationUnit::Years);
        assert_eq!(year.apply("1", PluralCategory::One), "1 year");
        assert_eq!(year.apply("2", PluralCategory::Other), "2 years");
        let hours = ENGLISH.get(DurationStyle::Narrow, DurationUnit::Hours);
        assert_eq!(hours.apply("5", PluralCategory::Other), "5h");
        let days = GERMAN.get(DurationStyle::Digital, DurationUnit::Days);
        assert_eq!(days.apply("1", PluralCategory::One), "1 Tg.");
        let months = FRENCH.get(DurationStyle::Long, DurationUnit::Months);
        assert_eq!(months.apply("1", PluralCategory::One), "1 mois");
        assert_eq!(months.apply("1 000 000", PluralCategory::Many), "1 000 000 mois");
    }
}
