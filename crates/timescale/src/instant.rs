//! Millisecond-resolution instants on the proleptic Gregorian calendar.

use std::fmt;

pub(crate) const MS_PER_SECOND: i64 = 1_000;
pub(crate) const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub(crate) const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub(crate) const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Calendar field units, ordered finest to coarsest.
///
/// The ordering drives truncation: [`Instant::start_of`] resets every unit
/// that compares less than the given unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

/// Days in each month of a non-leap year (index 0 = January).
const DAYS_PER_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap-year rule.
pub(crate) fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `month` (0 = January) of `year`.
///
/// # Panics
///
/// Panics if `month` is greater than 11.
pub fn days_in_month(month: u32, year: i32) -> u8 {
    if month == 1 && is_leap_year(year) {
        29
    } else {
        DAYS_PER_MONTH[month as usize]
    }
}

/// A point in local wall-clock time at millisecond resolution.
///
/// Internally a signed millisecond count from 1970-01-01T00:00:00.000 on the
/// proleptic Gregorian calendar. No timezone offset is tracked; every instant
/// is interpreted in local wall-clock terms. Values are immutable: every
/// operation returns a new `Instant`.
///
/// Months are 0-based throughout the engine (0 = January), matching the
/// field convention the arithmetic normalizes over. Display and parsing use
/// human 1-based months on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    millis: i64,
}

/// Raw calendar fields prior to normalization.
///
/// Values may be out of range or fractional; [`Instant::from_fields`]
/// truncates each toward zero and lets overflow carry into coarser fields.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fields {
    pub year: f64,
    pub month: f64,
    pub day: f64,
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
    pub millisecond: f64,
}

impl Instant {
    /// Wraps a raw epoch-millisecond count.
    pub fn from_millis(millis: i64) -> Self {
        Self { millis }
    }

    /// The raw epoch-millisecond count.
    pub fn millis(self) -> i64 {
        self.millis
    }

    /// Builds an instant from calendar fields, normalizing out-of-range
    /// values.
    ///
    /// `month` is 0-based (0 = January). Out-of-range fields carry into
    /// coarser ones the way field assignment does: month 12 becomes January
    /// of the following year, day 0 the last day of the preceding month,
    /// hour 108 rolls four days forward.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> Self {
        Self::from_fields(Fields {
            year: f64::from(year),
            month: f64::from(month),
            day: f64::from(day),
            hour: f64::from(hour),
            minute: f64::from(minute),
            second: f64::from(second),
            millisecond: f64::from(millisecond),
        })
    }

    /// Shorthand for a midnight instant. `month` is 0-based.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 0, 0, 0, 0)
    }

    /// Normalizing constructor with field-assignment semantics: each value is
    /// truncated toward zero, months carry into years via a Euclidean split,
    /// and day/time overflow carries through the day-number arithmetic.
    pub(crate) fn from_fields(f: Fields) -> Self {
        let year = f.year.trunc() as i64;
        let month = f.month.trunc() as i64;
        let day = f.day.trunc() as i64;
        let year = year + month.div_euclid(12);
        let month = month.rem_euclid(12) as u32;
        let day_number = days_from_civil(year, month, day);
        let time = (f.hour.trunc() as i64) * MS_PER_HOUR
            + (f.minute.trunc() as i64) * MS_PER_MINUTE
            + (f.second.trunc() as i64) * MS_PER_SECOND
            + f.millisecond.trunc() as i64;
        Self {
            millis: day_number * MS_PER_DAY + time,
        }
    }

    /// Decomposes into raw fields for perturb-and-rebuild arithmetic.
    pub(crate) fn fields(self) -> Fields {
        let (year, month, day) = self.civil();
        Fields {
            year: f64::from(year),
            month: f64::from(month),
            day: f64::from(day),
            hour: f64::from(self.hour()),
            minute: f64::from(self.minute()),
            second: f64::from(self.second()),
            millisecond: f64::from(self.millisecond()),
        }
    }

    fn day_number(self) -> i64 {
        self.millis.div_euclid(MS_PER_DAY)
    }

    fn time_of_day(self) -> i64 {
        self.millis.rem_euclid(MS_PER_DAY)
    }

    fn civil(self) -> (i32, u32, u32) {
        civil_from_days(self.day_number())
    }

    /// Calendar year.
    pub fn year(self) -> i32 {
        self.civil().0
    }

    /// Month of year, 0-based (0 = January).
    pub fn month(self) -> u32 {
        self.civil().1
    }

    /// Day of month, 1-based.
    pub fn day(self) -> u32 {
        self.civil().2
    }

    /// Hour of day (0..=23).
    pub fn hour(self) -> u32 {
        (self.time_of_day() / MS_PER_HOUR) as u32
    }

    /// Minute of hour (0..=59).
    pub fn minute(self) -> u32 {
        (self.time_of_day() % MS_PER_HOUR / MS_PER_MINUTE) as u32
    }

    /// Second of minute (0..=59).
    pub fn second(self) -> u32 {
        (self.time_of_day() % MS_PER_MINUTE / MS_PER_SECOND) as u32
    }

    /// Millisecond of second (0..=999).
    pub fn millisecond(self) -> u32 {
        (self.time_of_day() % MS_PER_SECOND) as u32
    }

    /// Day of week, 0 = Sunday .. 6 = Saturday.
    pub fn weekday(self) -> u32 {
        (self.day_number() + 4).rem_euclid(7) as u32
    }
}

impl fmt::Display for Instant {
    /// `YYYY-MM-DDTHH:MM:SS.mmm`, month 1-based on the wire.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day) = self.civil();
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}",
            year,
            month + 1,
            day,
            self.hour(),
            self.minute(),
            self.second(),
            self.millisecond()
        )
    }
}

/// Day number of `year-month-day` (month 0-based) relative to 1970-01-01.
///
/// `day` may be any integer; values outside the month roll over, which is
/// what lets the normalizing constructor fold day offsets in directly.
fn days_from_civil(year: i64, month: u32, day: i64) -> i64 {
    debug_assert!(month < 12);
    let m = i64::from(month) + 1;
    let y = if m <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400; // 0..=399
    let mp = (m + 9) % 12; // March-pivot month, March = 0
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Splits a day number back into `(year, month 0-based, day 1-based)`.
fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097; // 0..=146096
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 }; // 1-based
    let year = if m <= 2 { y + 1 } else { y };
    (year as i32, (m - 1) as u32, day as u32)
}
