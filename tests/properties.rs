use gauged_value::{GaugedValue, ManualClock};
use proptest::prelude::*;

type TestGauge = GaugedValue<Vec<String>, ManualClock>;

fn gauge(min: i32, max: i32, increment: i32) -> TestGauge {
    GaugedValue::with_parts("prop", min, max, increment, Vec::new(), ManualClock::new(0))
}

proptest! {
    #[test]
    fn accepted_steps_stay_within_one_increment_and_bounds(
        min in -1000i32..=0,
        max in 1i32..=1000,
        increment in -50i32..=50,
        requests in prop::collection::vec(-3000i32..=3000, 0..100)
    ) {
        let mut gauge = gauge(min, max, increment);
        gauge.set_min_max(min, max);

        for request in requests {
            let baseline = gauge.last_value();
            let before = gauge.current();
            let lines = gauge.sink().len();

            if gauge.set_current(request) {
                prop_assert!((gauge.current() - baseline).abs() <= increment.abs());
                prop_assert_eq!(gauge.last_value(), before);
                prop_assert_eq!(gauge.sink().len(), lines + 1);
            } else {
                prop_assert_eq!(gauge.current(), before);
                prop_assert_eq!(gauge.last_value(), baseline);
                prop_assert_eq!(gauge.sink().len(), lines);
            }
            prop_assert!((min..=max).contains(&gauge.current()));
            prop_assert!((min..=max).contains(&gauge.last_value()));
        }
    }

    #[test]
    fn sub_increment_request_never_moves(
        increment in 2i32..=50,
        steps in 1usize..10,
        offset in 0i32..50
    ) {
        let mut gauge = gauge(0, 0, increment);
        gauge.set_min_max(-10_000, 10_000);
        for step in 1..=steps {
            gauge.set_current(increment * step as i32);
        }

        let offset = offset % increment;
        let before = gauge.current();
        prop_assert!(!gauge.set_current(gauge.last_value() + offset));
        prop_assert_eq!(gauge.current(), before);
    }

    #[test]
    fn fresh_gauge_is_initialized_iff_a_bound_is_nonzero(min: i32, max: i32) {
        let mut gauge = gauge(min, max, 1);
        prop_assert!(!gauge.is_initialized());

        gauge.set_min_max(min, max);
        prop_assert_eq!(gauge.is_initialized(), min != 0 || max != 0);
    }

    #[test]
    fn initialized_tracks_current_once_bounds_are_cleared(
        min in -100i32..=0,
        max in 0i32..=100,
        increment in 1i32..=20,
        request in -100i32..=100
    ) {
        let mut gauge = gauge(0, 0, increment);
        gauge.set_min_max(min, max);
        gauge.set_current(request);
        prop_assert_eq!(
            gauge.is_initialized(),
            gauge.current() != 0 || min != 0 || max != 0
        );

        // bounds are not re-clamped, so a moved current survives on its own
        gauge.set_min_max(0, 0);
        prop_assert_eq!(gauge.is_initialized(), gauge.current() != 0);
    }
}
