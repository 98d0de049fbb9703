//! Error types for the kairos-timescale crate.

/// Error type for all fallible operations in the kairos-timescale crate.
///
/// Everything here is a boundary-parsing failure: the engine's arithmetic is
/// total and never rejects a value, so errors only arise when turning
/// user-supplied strings into instants or granularities.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimescaleError {
    /// Returned when a timestamp string does not match the accepted shapes.
    #[error("malformed timestamp {input:?} (expected YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS[.mmm]])")]
    MalformedTimestamp {
        /// The string that failed to parse.
        input: String,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u32,
        /// The month (1..=12) for which the day is invalid.
        month: u32,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when an hour, minute, second, or millisecond field is out of range.
    #[error("invalid {field}: {value} (max {max})")]
    InvalidTimeField {
        /// Which field was out of range.
        field: &'static str,
        /// The invalid value that was provided.
        value: u32,
        /// The maximum valid value for the field.
        max: u32,
    },

    /// Returned when a granularity name is not recognized.
    #[error(
        "unknown granularity {input:?} (expected year, quarter-year, month, week, day, quarter-day, half-day, or hour)"
    )]
    UnknownGranularity {
        /// The string that failed to parse.
        input: String,
    },
}
