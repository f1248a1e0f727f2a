//! Almanac Format - duration formatting
//!
//! Durations are formatted through a `DurationFormatter` chosen once per
//! `DurationFormat`:
//! - `LocalizedFormatter`: unit labels for `en`, `de`, `fr`, `es` and `ja`,
//!   with icu plural rules, digits and unit lists
//! - `FallbackFormatter`: `{value} {unit}` pairs for any other locale

mod duration_format;
mod error;
mod formatter;
mod locale;
mod parts;

pub use duration_format::{
    format_duration, format_duration_up_to_hours, format_shortest_duration, shortest_parts,
    up_to_hours_parts, DurationFormat,
};
pub use error::FormatError;
pub use formatter::{probe, DurationFormatter, FallbackFormatter, LocalizedFormatter};
pub use parts::{DurationParts, DurationStyle, DurationUnit};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{DurationFormat, DurationFormatter, DurationParts, DurationStyle, DurationUnit};
}
