//! Current-time marker placement.

use kairos_timescale::{Instant, TimeUnit};
use tracing::trace;

/// Resolved screen position of the current-time marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NowMarker {
    /// Index of the tick whose interval contains `now`.
    pub tick_index: usize,
    /// Horizontal pixel offset from the left edge of the chart.
    pub x: f64,
}

/// Locates `now` within `ticks` and returns the marker position, if any.
///
/// A tick at index `i` matches when `ticks[i] <= now < ticks[i + 1]`. The
/// final tick has no successor, so it instead matches while `now` is within
/// one synthetic step past it, the step being the distance to the preceding
/// tick. Within a matched tick the sub-offset follows a coarse hour-of-day
/// schedule (buckets at 0/6/12/18 hours) regardless of granularity.
///
/// Under a reversed reading direction (`rtl`) the caller supplies the ticks
/// in descending order; a gap match there places the marker one full tick
/// width past the matched tick instead of using the hour schedule.
///
/// Returns `None` when `now` falls outside the covered window.
pub fn locate_now(ticks: &[Instant], now: Instant, tick_width: f64, rtl: bool) -> Option<NowMarker> {
    let mut marker = None;
    for (i, &tick) in ticks.iter().enumerate() {
        let tick_x = i as f64 * tick_width;

        let in_interval = i + 1 < ticks.len() && tick <= now && now < ticks[i + 1];
        let in_final_window = i > 0 && i + 1 == ticks.len() && tick <= now && {
            let step_ms = tick.millis() - ticks[i - 1].millis();
            now < tick.add(step_ms as f64, TimeUnit::Millisecond)
        };
        if in_interval || in_final_window {
            marker = Some(NowMarker {
                tick_index: i,
                x: tick_x + hour_offset(now.hour(), tick_width),
            });
        }

        // Descending sequence: "now" sits between a tick and its smaller
        // successor, and the marker pins to a whole tick width.
        if rtl && i + 1 < ticks.len() && tick >= now && now > ticks[i + 1] {
            marker = Some(NowMarker {
                tick_index: i,
                x: tick_x + tick_width,
            });
        }
    }
    if let Some(m) = marker {
        trace!(tick_index = m.tick_index, x = m.x, "located now marker");
    }
    marker
}

/// Sub-tick offset for the marker, stepped by hour of day.
///
/// Intentionally coarse and independent of how much time one tick spans:
/// 00-05 -> 0, 06-11 -> 1/3, 12-17 -> 2/3, 18-23 -> 2.5/3 of a tick width.
fn hour_offset(hour: u32, tick_width: f64) -> f64 {
    if hour < 6 {
        0.0
    } else if hour < 12 {
        tick_width * (1.0 / 3.0)
    } else if hour < 18 {
        tick_width * (2.0 / 3.0)
    } else {
        tick_width * (2.5 / 3.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn hour_offset_buckets() {
        assert_relative_eq!(hour_offset(0, 90.0), 0.0);
        assert_relative_eq!(hour_offset(5, 90.0), 0.0);
        assert_relative_eq!(hour_offset(6, 90.0), 30.0);
        assert_relative_eq!(hour_offset(11, 90.0), 30.0);
        assert_relative_eq!(hour_offset(12, 90.0), 60.0);
        assert_relative_eq!(hour_offset(17, 90.0), 60.0);
        assert_relative_eq!(hour_offset(18, 90.0), 75.0);
        assert_relative_eq!(hour_offset(23, 90.0), 75.0);
    }

    #[test]
    fn now_on_a_tick_matches_that_tick() {
        let ticks: Vec<Instant> = (1..=5)
            .map(|d| Instant::from_ymd(2024, 2, d))
            .collect();
        let marker = locate_now(&ticks, ticks[2], 100.0, false).unwrap();
        assert_eq!(marker.tick_index, 2);
        assert_relative_eq!(marker.x, 200.0);
    }

    #[test]
    fn before_first_tick_yields_none() {
        let ticks: Vec<Instant> = (10..=12)
            .map(|d| Instant::from_ymd(2024, 2, d))
            .collect();
        let now = Instant::from_ymd(2024, 2, 9);
        assert_eq!(locate_now(&ticks, now, 100.0, false), None);
    }

    #[test]
    fn single_tick_sequence_has_no_synthetic_window() {
        // With one tick there is no preceding step to synthesize from.
        let ticks = [Instant::from_ymd(2024, 2, 10)];
        assert_eq!(locate_now(&ticks, ticks[0], 100.0, false), None);
    }
}
