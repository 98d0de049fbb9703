//! Tick sequence generation.

use tracing::debug;

use crate::granularity::Granularity;
use crate::instant::Instant;

/// Generates the ordered tick dates covering `start..end` at `granularity`.
///
/// The first element is always `start`. Ticks advance by the granularity's
/// fixed step while the last produced tick is strictly before `end`; the
/// terminal tick at or past `end` is included. Month- and year-stepped
/// sequences have a fixed unit count per step even though the wall-clock
/// distance varies with month lengths and leap years.
///
/// If `start >= end` the loop never runs and the result is just `[start]`.
pub fn tick_sequence(start: Instant, end: Instant, granularity: Granularity) -> Vec<Instant> {
    let step = granularity.step();
    let mut ticks = vec![start];
    let mut current = start;
    while current < end {
        current = current.add(step.quantity, step.unit);
        ticks.push(current);
    }
    debug!(n_ticks = ticks.len(), %granularity, "seeded tick sequence");
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_bounds_yield_single_tick() {
        let start = Instant::from_ymd(2024, 2, 10);
        for g in Granularity::ALL {
            assert_eq!(tick_sequence(start, start, g), vec![start], "{g}");
        }
    }

    #[test]
    fn inverted_bounds_yield_single_tick() {
        let start = Instant::from_ymd(2024, 2, 10);
        let end = Instant::from_ymd(2024, 2, 1);
        assert_eq!(tick_sequence(start, end, Granularity::Day), vec![start]);
    }

    #[test]
    fn first_element_is_start() {
        let start = Instant::new(2024, 2, 10, 7, 0, 0, 0);
        let end = Instant::from_ymd(2024, 2, 20);
        let ticks = tick_sequence(start, end, Granularity::Day);
        assert_eq!(ticks[0], start);
    }

    #[test]
    fn strictly_increasing() {
        let ticks = tick_sequence(
            Instant::from_ymd(2024, 0, 1),
            Instant::from_ymd(2025, 0, 1),
            Granularity::Week,
        );
        for pair in ticks.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn terminal_tick_at_or_past_end_is_included() {
        // 10 days in 7-day steps: ticks at day 0, 7, 14; 14 >= 10 closes it.
        let ticks = tick_sequence(
            Instant::from_ymd(2024, 2, 1),
            Instant::from_ymd(2024, 2, 11),
            Granularity::Week,
        );
        assert_eq!(
            ticks,
            vec![
                Instant::from_ymd(2024, 2, 1),
                Instant::from_ymd(2024, 2, 8),
                Instant::from_ymd(2024, 2, 15),
            ]
        );
    }

    #[test]
    fn exact_landing_on_end_stops_there() {
        let ticks = tick_sequence(
            Instant::from_ymd(2024, 2, 1),
            Instant::from_ymd(2024, 2, 15),
            Granularity::Week,
        );
        assert_eq!(ticks.len(), 3);
        assert_eq!(*ticks.last().unwrap(), Instant::from_ymd(2024, 2, 15));
    }

    #[test]
    fn month_steps_ride_variable_month_lengths() {
        let ticks = tick_sequence(
            Instant::from_ymd(2024, 0, 31),
            Instant::from_ymd(2024, 3, 30),
            Granularity::Month,
        );
        // Jan 31 -> Feb 31 (normalizes to Mar 2) -> Apr 2 -> May 2.
        assert_eq!(ticks[1], Instant::from_ymd(2024, 2, 2));
        assert_eq!(ticks[2], Instant::from_ymd(2024, 3, 2));
        assert_eq!(ticks[3], Instant::from_ymd(2024, 4, 2));
        assert_eq!(ticks.len(), 4);
    }

    #[test]
    fn half_day_steps_split_days() {
        let ticks = tick_sequence(
            Instant::from_ymd(2024, 2, 10),
            Instant::from_ymd(2024, 2, 11),
            Granularity::HalfDay,
        );
        assert_eq!(
            ticks,
            vec![
                Instant::from_ymd(2024, 2, 10),
                Instant::new(2024, 2, 10, 12, 0, 0, 0),
                Instant::from_ymd(2024, 2, 11),
            ]
        );
    }

    #[test]
    fn quarter_day_steps_are_six_hours() {
        let ticks = tick_sequence(
            Instant::from_ymd(2024, 2, 10),
            Instant::new(2024, 2, 10, 18, 0, 0, 0),
            Granularity::QuarterDay,
        );
        assert_eq!(ticks.len(), 4);
        assert_eq!(ticks[1], Instant::new(2024, 2, 10, 6, 0, 0, 0));
    }
}
