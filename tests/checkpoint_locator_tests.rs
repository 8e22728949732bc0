use skytune::core::{Checkpoint, locate, normalize_time_of_day};

#[test]
fn canonical_segments_cover_the_day() {
    let span = locate(0.1);
    assert_eq!(span.before, Checkpoint::Midnight);
    assert_eq!(span.after, Checkpoint::Dawn);
    assert!((span.t - 0.4).abs() <= 1e-12);

    let span = locate(0.3);
    assert_eq!(span.before, Checkpoint::Dawn);
    assert_eq!(span.after, Checkpoint::Noon);
    assert!((span.t - 0.2).abs() <= 1e-12);

    let span = locate(0.6);
    assert_eq!(span.before, Checkpoint::Noon);
    assert_eq!(span.after, Checkpoint::Dusk);
    assert!((span.t - 0.4).abs() <= 1e-12);

    let span = locate(0.8);
    assert_eq!(span.before, Checkpoint::Dusk);
    assert_eq!(span.after, Checkpoint::Midnight);
    assert!((span.t - 0.2).abs() <= 1e-12);
}

#[test]
fn anchor_times_sit_at_their_segment_start() {
    for checkpoint in Checkpoint::ALL {
        let span = locate(checkpoint.time_of_day());
        assert_eq!(span.before, checkpoint);
        assert_eq!(span.t, 0.0);
    }
}

#[test]
fn out_of_range_times_wrap() {
    let wrapped = locate(1.3);
    let direct = locate(0.3);
    assert_eq!(wrapped.before, direct.before);
    assert_eq!(wrapped.after, direct.after);
    assert!((wrapped.t - direct.t).abs() <= 1e-12);

    let negative = locate(-0.7);
    assert_eq!(negative.before, direct.before);
    assert_eq!(negative.after, direct.after);
    assert!((negative.t - direct.t).abs() <= 1e-12);
}

#[test]
fn non_finite_input_falls_back_to_midnight_segment() {
    for weird in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let span = locate(weird);
        assert_eq!(span.before, Checkpoint::Midnight);
        assert_eq!(span.after, Checkpoint::Dawn);
        assert_eq!(span.t, 0.0);
    }
}

#[test]
fn adjacent_pair_ordering_is_circular() {
    let ordered = Checkpoint::ordered_by_time();
    for (index, &before) in ordered.iter().enumerate() {
        let after = ordered[(index + 1) % ordered.len()];
        let midpoint = {
            let start = before.time_of_day();
            let mut end = after.time_of_day();
            if end <= start {
                end += 1.0;
            }
            normalize_time_of_day((start + end) / 2.0)
        };
        let span = locate(midpoint);
        assert_eq!(span.before, before);
        assert_eq!(span.after, after);
        assert!((span.t - 0.5).abs() <= 1e-12);
    }
}
