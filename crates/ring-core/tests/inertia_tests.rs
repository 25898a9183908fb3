// Host-side tests for the release animation and slot snapping.

use ring_core::*;
use std::time::Duration;

fn params() -> InertiaParams {
    InertiaParams {
        power: DEFAULT_INERTIA_POWER,
        time_constant_ms: DEFAULT_INERTIA_TIME_CONSTANT_MS,
        rest_delta: DEFAULT_REST_DELTA_DEG,
    }
}

fn settle(anim: &mut InertiaAnimation) -> Vec<f64> {
    let mut trace = Vec::new();
    for _ in 0..10_000 {
        if anim.is_settled() {
            return trace;
        }
        trace.push(anim.advance(Duration::from_millis(16)));
    }
    panic!("animation did not settle");
}

#[test]
fn snap_rounds_to_nearest_slot() {
    assert_eq!(snap_to_slot(185.0, 60.0), 180.0);
    assert_eq!(snap_to_slot(29.9, 60.0), 0.0);
    assert_eq!(snap_to_slot(30.0, 60.0), 60.0);
    assert_eq!(snap_to_slot(-29.0, 60.0), 0.0);
    assert_eq!(snap_to_slot(-31.0, 60.0), -60.0);
    assert_eq!(snap_to_slot(725.0, 360.0), 720.0);
}

#[test]
fn snap_halves_round_towards_positive() {
    assert_eq!(snap_to_slot(-30.0, 60.0), 0.0);
    assert_eq!(snap_to_slot(90.0, 60.0), 120.0);
}

#[test]
fn six_items_release_185_settles_on_180() {
    let ring = RingConfig::new(6).unwrap();
    assert_eq!(ring.slot_angle(), 60.0);

    let mut anim = InertiaAnimation::new(0.0, 185.0, ring.slot_angle(), params());
    assert_eq!(anim.raw_target(), 185.0);
    assert_eq!(anim.target(), 180.0);

    let trace = settle(&mut anim);
    let last = *trace.last().unwrap();
    assert!((last - 180.0).abs() <= DEFAULT_REST_DELTA_DEG);
    assert_eq!(anim.current(), 180.0);
}

#[test]
fn decay_is_monotonic_and_never_overshoots() {
    let mut anim = InertiaAnimation::new(10.0, 300.0, 45.0, params());
    assert_eq!(anim.target(), 315.0);
    let trace = settle(&mut anim);
    let mut prev = 10.0;
    for v in trace {
        assert!(v >= prev, "went backwards: {v} < {prev}");
        assert!(v <= 315.0);
        prev = v;
    }
}

#[test]
fn decay_curve_starts_at_release_angle() {
    let anim = InertiaAnimation::new(-40.0, -100.0, 30.0, params());
    assert_eq!(anim.target(), -150.0);
    assert!((anim.value_at(0.0) - (-40.0)).abs() < 1e-12);
    let one_tau = anim.value_at(DEFAULT_INERTIA_TIME_CONSTANT_MS);
    let expected = -150.0 + 110.0 * (-1.0f64).exp();
    assert!((one_tau - expected).abs() < 1e-9);
}

#[test]
fn lower_power_has_longer_tail() {
    let slow = InertiaParams {
        power: 0.5,
        ..params()
    };
    let fast = InertiaParams {
        power: 1.0,
        ..params()
    };
    let a = InertiaAnimation::new(0.0, 180.0, 60.0, slow);
    let b = InertiaAnimation::new(0.0, 180.0, 60.0, fast);
    let late = 4.0 * DEFAULT_INERTIA_TIME_CONSTANT_MS;
    assert!(a.value_at(late) < b.value_at(late));
}

#[test]
fn release_within_rest_delta_is_settled_from_the_start() {
    let mut anim = InertiaAnimation::new(59.8, 0.0, 60.0, params());
    assert!(anim.is_settled());
    assert_eq!(anim.current(), 60.0);
    assert_eq!(anim.advance(Duration::from_millis(16)), 60.0);
}

#[test]
fn non_finite_velocity_is_treated_as_zero() {
    let anim = InertiaAnimation::new(100.0, f64::NAN, 60.0, params());
    assert_eq!(anim.initial_velocity(), 0.0);
    assert_eq!(anim.target(), 120.0);
}

#[test]
fn single_item_ring_snaps_to_whole_turns() {
    let ring = RingConfig::new(1).unwrap();
    let mut anim = InertiaAnimation::new(0.0, 250.0, ring.slot_angle(), params());
    assert_eq!(anim.target(), 360.0);
    settle(&mut anim);
    assert_eq!(anim.current(), 360.0);
}

#[test]
fn drag_tracker_session_lifecycle() {
    let mut drag = DragTracker::new(DEFAULT_DRAG_SENSITIVITY);
    assert_eq!(drag.move_to(5.0), None);
    assert_eq!(drag.end(), None);

    drag.start(10.0);
    assert_eq!(drag.session().map(|s| s.velocity), Some(0.0));
    assert_eq!(drag.move_to(14.0), Some(-2.0));
    assert_eq!(drag.session().map(|s| s.last_pointer_x), Some(14.0));
    assert_eq!(drag.end(), Some(-2.0));
    assert!(!drag.is_active());
}
