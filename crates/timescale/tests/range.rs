use kairos_timescale::{derive_range, Granularity, Instant, TaskSpan};

#[test]
fn day_view_pads_one_back_nineteen_forward() {
    let spans = [TaskSpan::new(
        Instant::from_ymd(2024, 2, 10),
        Instant::from_ymd(2024, 2, 12),
    )];
    let range = derive_range(&spans, Granularity::Day, 1);
    assert_eq!(range.start, Instant::from_ymd(2024, 2, 9));
    assert_eq!(range.end, Instant::from_ymd(2024, 2, 31));
}

#[test]
fn week_view_aligns_wednesday_to_monday_then_steps_back() {
    let spans = [TaskSpan::new(
        Instant::from_ymd(2024, 2, 13), // a Wednesday
        Instant::from_ymd(2024, 2, 20),
    )];
    let range = derive_range(&spans, Granularity::Week, 2);
    assert_eq!(range.start, Instant::from_ymd(2024, 1, 26));
}

#[test]
fn bounds_bracket_every_span_before_padding_widens() {
    let spans = [
        TaskSpan::new(
            Instant::new(2024, 3, 2, 9, 0, 0, 0),
            Instant::new(2024, 3, 18, 17, 0, 0, 0),
        ),
        TaskSpan::new(
            Instant::new(2024, 3, 10, 0, 0, 0, 0),
            Instant::new(2024, 4, 2, 12, 0, 0, 0),
        ),
        TaskSpan::new(
            Instant::new(2024, 2, 28, 8, 0, 0, 0),
            Instant::new(2024, 3, 5, 8, 0, 0, 0),
        ),
    ];
    for g in Granularity::ALL {
        let range = derive_range(&spans, g, 1);
        assert!(range.start <= range.end, "{g}");
        for span in &spans {
            assert!(range.start <= span.start, "{g}");
            assert!(range.end >= span.end, "{g}");
        }
    }
}

#[test]
fn lead_steps_only_move_the_start_side() {
    let spans = [TaskSpan::new(
        Instant::from_ymd(2024, 2, 10),
        Instant::from_ymd(2024, 2, 12),
    )];
    let narrow = derive_range(&spans, Granularity::Day, 1);
    let wide = derive_range(&spans, Granularity::Day, 5);
    assert_eq!(wide.start, Instant::from_ymd(2024, 2, 5));
    assert_eq!(wide.end, narrow.end);
}

#[test]
fn single_instant_span_still_produces_a_window() {
    let point = Instant::new(2024, 6, 4, 12, 0, 0, 0);
    let spans = [TaskSpan::new(point, point)];
    let range = derive_range(&spans, Granularity::Hour, 1);
    assert_eq!(range.start, Instant::new(2024, 6, 4, 11, 0, 0, 0));
    assert_eq!(range.end, Instant::from_ymd(2024, 6, 5));
}

#[test]
fn december_span_pads_across_the_year_boundary() {
    let spans = [TaskSpan::new(
        Instant::from_ymd(2024, 11, 28),
        Instant::from_ymd(2024, 11, 31),
    )];
    let range = derive_range(&spans, Granularity::Day, 3);
    assert_eq!(range.start, Instant::from_ymd(2024, 11, 25));
    assert_eq!(range.end, Instant::from_ymd(2025, 0, 19));
}
