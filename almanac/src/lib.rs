//! Almanac - calendar engine
//!
//! Parses calendar strings into instants, reads and shifts their fields in a
//! time zone, bounds periods, numbers ISO weeks, and formats the spans between
//! instants for people.
//!
//! ```
//! use almanac::prelude::*;
//!
//! let cal = Calendar::utc();
//! let start = cal.parse_non_null("2000-01-01").unwrap();
//! let end = cal.add_days(start, 3);
//! assert_eq!(cal.date_part(end), "2000-01-04");
//!
//! let span = cal.diff_ms(end, start).unwrap();
//! let format = DurationFormat::new("en", DurationStyle::Long);
//! assert_eq!(format.format_shortest(span), "3 days");
//! ```

pub use almanac_core::*;
pub use almanac_format::{
    format_duration, format_duration_up_to_hours, format_shortest_duration, probe,
    shortest_parts, up_to_hours_parts, DurationFormat, DurationFormatter, DurationParts,
    DurationStyle, DurationUnit, FallbackFormatter, FormatError, LocalizedFormatter,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use almanac_core::prelude::*;
    pub use almanac_format::prelude::*;
}
