//! Calendar errors

use thiserror::Error;

/// Error type for calendar operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("Parsed null date should not be null")]
    InvalidInstant,

    #[error("Invalid time value")]
    InvalidTimeValue,

    #[error("Unknown time zone: {0}")]
    UnknownZone(String),

    #[error("UTC offset out of range: {0} minutes")]
    InvalidOffset(i32),
}
