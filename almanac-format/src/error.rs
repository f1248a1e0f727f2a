//! Formatting errors

use thiserror::Error;

/// Error type for locale and style resolution
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("No duration data for locale: {0}")]
    UnsupportedLocale(String),

    #[error("Locale data unavailable: {0}")]
    LocaleData(String),

    #[error("Unknown duration style: {0}")]
    UnsupportedStyle(String),
}
