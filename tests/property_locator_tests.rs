use proptest::prelude::*;
use skytune::core::{Checkpoint, locate};

fn circularly_adjacent(before: Checkpoint, after: Checkpoint) -> bool {
    let ordered = Checkpoint::ordered_by_time();
    ordered.iter().enumerate().any(|(index, &cp)| {
        cp == before && ordered[(index + 1) % ordered.len()] == after
    })
}

proptest! {
    #[test]
    fn locate_is_total_over_unit_times(time in 0.0f64..1.0) {
        let span = locate(time);
        prop_assert!((0.0..=1.0).contains(&span.t));
        prop_assert!(circularly_adjacent(span.before, span.after));
    }

    #[test]
    fn locate_tolerates_arbitrary_finite_times(time in -1_000.0f64..1_000.0) {
        let span = locate(time);
        prop_assert!((0.0..=1.0).contains(&span.t));
        prop_assert!(circularly_adjacent(span.before, span.after));
    }

    #[test]
    fn wrapped_times_resolve_to_the_same_segment(
        time in 0.0f64..1.0,
        whole_days in 1u32..4
    ) {
        let direct = locate(time);
        let wrapped = locate(time + f64::from(whole_days));
        prop_assert_eq!(direct.before, wrapped.before);
        prop_assert_eq!(direct.after, wrapped.after);
        prop_assert!((direct.t - wrapped.t).abs() <= 1e-9);
    }
}
