use approx::assert_relative_eq;
use kairos_marker::locate_now;
use kairos_timescale::{tick_sequence, Granularity, Instant};

fn daily_ticks(from_day: u32, to_day: u32) -> Vec<Instant> {
    tick_sequence(
        Instant::from_ymd(2024, 2, from_day),
        Instant::from_ymd(2024, 2, to_day),
        Granularity::Day,
    )
}

#[test]
fn afternoon_lands_two_thirds_into_its_tick() {
    // Ticks at Mar 1..=Mar 10; 14:00 on Mar 4 is inside tick index 3 and the
    // 12-18 bucket.
    let ticks = daily_ticks(1, 10);
    let now = Instant::new(2024, 2, 4, 14, 0, 0, 0);
    let marker = locate_now(&ticks, now, 100.0, false).unwrap();
    assert_eq!(marker.tick_index, 3);
    assert_relative_eq!(marker.x, 300.0 + 100.0 * (2.0 / 3.0), max_relative = 1e-12);
}

#[test]
fn all_four_buckets_inside_one_tick() {
    let ticks = daily_ticks(1, 10);
    let tick_width = 60.0;
    let cases = [(3, 0.0), (8, 20.0), (14, 40.0), (20, 50.0)];
    for (hour, offset) in cases {
        let now = Instant::new(2024, 2, 4, hour, 0, 0, 0);
        let marker = locate_now(&ticks, now, tick_width, false).unwrap();
        assert_eq!(marker.tick_index, 3, "hour {hour}");
        assert_relative_eq!(marker.x, 180.0 + offset, max_relative = 1e-12);
    }
}

#[test]
fn final_tick_matches_within_one_synthetic_step() {
    let ticks = daily_ticks(1, 5);
    // Last tick is Mar 5; the synthetic window extends one day past it.
    let inside = Instant::new(2024, 2, 5, 9, 0, 0, 0);
    let marker = locate_now(&ticks, inside, 100.0, false).unwrap();
    assert_eq!(marker.tick_index, 4);
    assert_relative_eq!(marker.x, 400.0 + 100.0 / 3.0, max_relative = 1e-12);

    let past = Instant::from_ymd(2024, 2, 6);
    assert_eq!(locate_now(&ticks, past, 100.0, false), None);
}

#[test]
fn outside_the_window_yields_no_marker() {
    let ticks = daily_ticks(10, 15);
    assert_eq!(
        locate_now(&ticks, Instant::from_ymd(2024, 2, 1), 100.0, false),
        None
    );
    assert_eq!(
        locate_now(&ticks, Instant::from_ymd(2024, 3, 1), 100.0, false),
        None
    );
}

#[test]
fn reversed_direction_pins_to_a_whole_tick_width() {
    let mut ticks = daily_ticks(1, 10);
    ticks.reverse();
    // Descending ticks Mar 10..Mar 1; now mid-morning on Mar 7 falls in the
    // gap between index 3 (Mar 7) and index 4 (Mar 6).
    let now = Instant::new(2024, 2, 6, 10, 0, 0, 0);
    let marker = locate_now(&ticks, now, 100.0, true).unwrap();
    assert_eq!(marker.tick_index, 3);
    assert_relative_eq!(marker.x, 400.0);
}

#[test]
fn reversed_direction_ignores_hour_buckets() {
    let mut ticks = daily_ticks(1, 10);
    ticks.reverse();
    let morning = Instant::new(2024, 2, 6, 1, 0, 0, 0);
    let evening = Instant::new(2024, 2, 6, 22, 0, 0, 0);
    let a = locate_now(&ticks, morning, 100.0, true).unwrap();
    let b = locate_now(&ticks, evening, 100.0, true).unwrap();
    assert_relative_eq!(a.x, b.x);
}

#[test]
fn hour_buckets_apply_even_to_coarse_granularities() {
    // One tick spans a whole year, yet the sub-offset still keys off the
    // hour of day: mid-July at 02:00 sits at the tick's left edge.
    let ticks = tick_sequence(
        Instant::from_ymd(2023, 0, 1),
        Instant::from_ymd(2026, 0, 1),
        Granularity::Year,
    );
    let now = Instant::new(2024, 6, 15, 2, 0, 0, 0);
    let marker = locate_now(&ticks, now, 300.0, false).unwrap();
    assert_eq!(marker.tick_index, 1);
    assert_relative_eq!(marker.x, 300.0);

    let later = Instant::new(2024, 6, 15, 19, 0, 0, 0);
    let marker = locate_now(&ticks, later, 300.0, false).unwrap();
    assert_relative_eq!(marker.x, 300.0 + 300.0 * (2.5 / 3.0), max_relative = 1e-12);
}

#[test]
fn hour_granularity_window_places_on_the_matching_hour() {
    let ticks = tick_sequence(
        Instant::new(2024, 2, 10, 6, 0, 0, 0),
        Instant::new(2024, 2, 10, 18, 0, 0, 0),
        Granularity::Hour,
    );
    let now = Instant::new(2024, 2, 10, 9, 30, 0, 0);
    let marker = locate_now(&ticks, now, 40.0, false).unwrap();
    assert_eq!(marker.tick_index, 3);
    // 09:30 is in the 6-12 bucket, a third of the tick width in.
    assert_relative_eq!(marker.x, 120.0 + 40.0 / 3.0, max_relative = 1e-12);
}
