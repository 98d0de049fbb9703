//! Visible-range derivation from scheduled task spans.

use tracing::debug;

use crate::granularity::{Granularity, Pad};
use crate::instant::{Fields, Instant, TimeUnit};

/// The start/end pair of a scheduled item; the only fields the engine reads.
///
/// `start <= end` is assumed, not validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSpan {
    pub start: Instant,
    pub end: Instant,
}

impl TaskSpan {
    pub fn new(start: Instant, end: Instant) -> Self {
        Self { start, end }
    }
}

/// The inclusive visible range of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: Instant,
    pub end: Instant,
}

/// Derives the padded visible range for `granularity` from `spans`.
///
/// Scans once for the earliest start and latest end, then widens each side
/// according to the granularity's [padding policy](Granularity::padding).
/// `lead_steps` scales the start-side padding for the granularities that
/// honor it. The result always satisfies `start <= end`, and before padding
/// the tracked bounds already bracket every span.
///
/// # Panics
///
/// Panics if `spans` is empty; callers must supply at least one span.
pub fn derive_range(spans: &[TaskSpan], granularity: Granularity, lead_steps: u32) -> DateRange {
    assert!(
        !spans.is_empty(),
        "derive_range requires at least one task span"
    );
    let mut start = spans[0].start;
    let mut end = spans[0].start;
    for span in spans {
        if span.start < start {
            start = span.start;
        }
        if span.end > end {
            end = span.end;
        }
    }

    let policy = granularity.padding();
    let start = apply_pad(start, policy.start, lead_steps);
    let end = apply_pad(end, policy.end, lead_steps);
    debug!(%start, %end, %granularity, "derived visible range");
    DateRange { start, end }
}

fn apply_pad(instant: Instant, pad: Pad, lead_steps: u32) -> Instant {
    match pad {
        Pad::OffsetThenTruncate {
            amount,
            unit,
            truncate_to,
        } => instant
            .add(amount.resolve(lead_steps), unit)
            .start_of(truncate_to),
        Pad::TruncateThenOffset {
            truncate_to,
            amount,
            unit,
        } => instant
            .start_of(truncate_to)
            .add(amount.resolve(lead_steps), unit),
        Pad::MondayAligned => monday_of(instant.start_of(TimeUnit::Day))
            .add(-7.0 * f64::from(lead_steps), TimeUnit::Day),
    }
}

/// Snaps to the Monday of the instant's week; Sunday belongs to the week
/// before it.
///
/// The day-of-month is reassigned to `day - weekday + 1` (or `- 6` from a
/// Sunday) and the calendar normalizes any rollover into the previous month.
fn monday_of(instant: Instant) -> Instant {
    let weekday = instant.weekday(); // 0 = Sunday
    let shift = if weekday == 0 { -6.0 } else { 1.0 };
    let f = instant.fields();
    Instant::from_fields(Fields {
        day: f.day - f64::from(weekday) + shift,
        ..f
    })
}
