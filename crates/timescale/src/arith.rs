//! Field-wise date arithmetic: single-unit offsets and truncation.

use crate::instant::{Fields, Instant, TimeUnit};

impl Instant {
    /// Adds `quantity` of `unit` to this instant.
    ///
    /// Only the named field is perturbed; the result is renormalized, so
    /// overflow carries into coarser fields (month 12 becomes January of the
    /// next year) and underflow borrows from them. `quantity` may be negative
    /// and may be fractional: the perturbed field is truncated toward zero
    /// during reassignment, never explicitly rounded, so `+1.5` months from
    /// March lands in April while `-0.5` months from January stays put.
    pub fn add(self, quantity: f64, unit: TimeUnit) -> Instant {
        let mut f = self.fields();
        match unit {
            TimeUnit::Year => f.year += quantity,
            TimeUnit::Month => f.month += quantity,
            TimeUnit::Day => f.day += quantity,
            TimeUnit::Hour => f.hour += quantity,
            TimeUnit::Minute => f.minute += quantity,
            TimeUnit::Second => f.second += quantity,
            TimeUnit::Millisecond => f.millisecond += quantity,
        }
        Instant::from_fields(f)
    }

    /// Truncates to the start of `unit`.
    ///
    /// Every field strictly finer than `unit` is reset to its minimum
    /// (January for months, 1 for days, 0 elsewhere); `unit` itself and all
    /// coarser fields are preserved. Idempotent.
    pub fn start_of(self, unit: TimeUnit) -> Instant {
        let f = self.fields();
        let keep = |field: TimeUnit, value: f64, minimum: f64| {
            if field < unit {
                minimum
            } else {
                value
            }
        };
        Instant::from_fields(Fields {
            year: f.year,
            month: keep(TimeUnit::Month, f.month, 0.0),
            day: keep(TimeUnit::Day, f.day, 1.0),
            hour: keep(TimeUnit::Hour, f.hour, 0.0),
            minute: keep(TimeUnit::Minute, f.minute, 0.0),
            second: keep(TimeUnit::Second, f.second, 0.0),
            millisecond: keep(TimeUnit::Millisecond, f.millisecond, 0.0),
        })
    }
}
