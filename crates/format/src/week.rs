//! ISO-8601 week numbers.

use kairos_timescale::{Instant, TimeUnit};

const MS_PER_WEEK: i64 = 7 * 24 * 60 * 60 * 1000;

/// Returns the ISO-8601 week number (1..=53) of the instant's week.
///
/// First-Thursday rule: weeks run Monday through Sunday, and week 1 is the
/// week containing the year's first Thursday. Dates in late December or
/// early January may therefore belong to the adjacent year's numbering.
/// Callers wanting the conventional two-digit form zero-pad the result.
pub fn iso_week_number(date: Instant) -> u32 {
    let monday_based = (date.weekday() + 6) % 7;
    // The Thursday of this date's week decides which year's numbering owns it.
    let thursday = date
        .start_of(TimeUnit::Day)
        .add(3.0 - f64::from(monday_based), TimeUnit::Day);
    let jan1 = Instant::from_ymd(thursday.year(), 0, 1);
    let week1_thursday = if jan1.weekday() == 4 {
        jan1
    } else {
        Instant::from_ymd(thursday.year(), 0, 1 + (11 - jan1.weekday()) % 7)
    };
    // Both instants are Thursdays at midnight, so the quotient is exact.
    (1 + (thursday.millis() - week1_thursday.millis()) / MS_PER_WEEK) as u32
}
