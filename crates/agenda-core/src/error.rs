//! Error taxonomy for parsing and scheduling.

use thiserror::Error;

/// Errors raised by the core while parsing input or scheduling recurrences.
///
/// Every variant is produced at the point of detection and travels unchanged
/// to the caller; the core never renders or recovers from these itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A date string could not be interpreted.
    #[error("invalid date '{input}': {reason}")]
    DateFormat { input: String, reason: &'static str },

    /// A time string could not be interpreted.
    #[error("invalid time '{input}'")]
    TimeFormat { input: String },

    /// The recurrence unit is not one of daily, weekly, monthly or yearly.
    #[error("invalid interval '{0}', expected daily, weekly, monthly or yearly")]
    InvalidInterval(String),

    /// The recurrence count is below one.
    #[error("invalid number of iterations: {count}")]
    InvalidCount { count: i64 },
    /// The recurrence would exceed the occurrence limit or run off the calendar.
    #[error("cannot repeat {count} time(s): limit is {max} and dates must stay within the calendar")]
    TooManyIterations { count: i64, max: i64 },

    /// A 1-based index does not address an event in the list.
    #[error("index {index} is out of range for {len} event(s)")]
    IndexOutOfRange { index: i64, len: usize },

    /// The event has no date to anchor a recurrence to.
    #[error("event '{description}' has no date to repeat from")]
    MissingAnchor { description: String },

    /// The raw command had the wrong number of fields.
    #[error("expected {expected}, got {found} field(s)")]
    MissingArgument {
        expected: &'static str,
        found: usize,
    },

    /// The category name is not Personal, Timetable or Zoom.
    #[error("unrecognized category '{0}'")]
    UnrecognizedCategory(String),

    /// A numeric argument was not a number.
    #[error("{field} must be a number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },
}

/// Convenience alias used throughout the core.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub(crate) fn date(input: &str, reason: &'static str) -> Self {
        Self::DateFormat {
            input: input.to_string(),
            reason,
        }
    }

    pub(crate) fn time(input: &str) -> Self {
        Self::TimeFormat {
            input: input.to_string(),
        }
    }
}
