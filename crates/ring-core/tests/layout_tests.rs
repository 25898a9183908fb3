// Host-side tests for item placement, responsive scale, entrance and hover.

use ring_core::*;
use std::time::Duration;

#[test]
fn items_are_spread_by_negative_slot_angles() {
    let ring = RingConfig::new(12).unwrap();
    for i in 0..12 {
        let t = project(i, &ring, 700.0, 1.0);
        assert!((t.rotate_y_deg + 30.0 * i as f64).abs() < 1e-9);
        assert_eq!(t.translate_z, -700.0);
        assert_eq!(t.origin_z, 700.0);
    }
}

#[test]
fn depth_scales_with_responsive_factor() {
    let ring = RingConfig::new(6).unwrap();
    let t = project(3, &ring, 1000.0, 0.7);
    assert!((t.translate_z + 700.0).abs() < 1e-9);
    assert!((t.origin_z - 700.0).abs() < 1e-9);
}

#[test]
fn scale_switches_at_breakpoint() {
    assert_eq!(scale_for_viewport(500.0, 768.0, 0.7), 0.7);
    assert_eq!(scale_for_viewport(768.0, 768.0, 0.7), 0.7);
    assert_eq!(scale_for_viewport(1024.0, 768.0, 0.7), 1.0);

    let mut s = ResponsiveScale::new(768.0, 0.7);
    assert_eq!(s.current(), 1.0);
    assert!(s.on_resize(500.0));
    assert!(!s.on_resize(600.0));
    assert!(s.on_resize(1200.0));
    assert_eq!(s.current(), 1.0);
}

#[test]
fn facing_item_is_on_the_front_of_the_ring() {
    let ring = RingConfig::new(4).unwrap();
    assert_eq!(facing_index(0.0, &ring), 0);
    assert_eq!(facing_index(89.0, &ring), 1);
    assert_eq!(facing_index(720.0 + 180.0, &ring), 2);
    assert_eq!(facing_index(-90.0, &ring), 3);
}

#[test]
fn entrance_is_staggered_per_item() {
    let mut e = Entrance::new(3, 1.0, 0.5, Easing::Linear);
    assert_eq!(e.sample(0), ItemEntrance::HIDDEN);
    assert!((e.total_duration_sec() - 2.0).abs() < 1e-12);

    e.advance(Duration::from_millis(500));
    let first = e.sample(0);
    assert!((first.opacity - 0.5).abs() < 1e-9);
    assert!((first.offset_y - 100.0).abs() < 1e-9);
    assert_eq!(e.sample(1), ItemEntrance::HIDDEN);

    e.advance(Duration::from_millis(1_000));
    assert_eq!(e.sample(0), ItemEntrance::VISIBLE);
    assert!((e.progress(1) - 1.0).abs() < 1e-9);
    assert!((e.progress(2) - 0.5).abs() < 1e-9);
    assert!(!e.is_finished());

    e.advance(Duration::from_millis(600));
    assert!(e.is_finished());
    assert_eq!(e.sample(2), ItemEntrance::VISIBLE);
}

#[test]
fn zero_duration_entrance_pops_in_after_delay() {
    let mut e = Entrance::new(2, 0.0, 0.2, Easing::EaseOut);
    e.advance(Duration::from_millis(100));
    assert_eq!(e.sample(0), ItemEntrance::VISIBLE);
    assert_eq!(e.sample(1), ItemEntrance::HIDDEN);
}

#[test]
fn easing_endpoints_are_exact() {
    let all = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::CircIn,
        Easing::CircOut,
        Easing::CircInOut,
        Easing::BackIn,
        Easing::BackOut,
        Easing::BackInOut,
        Easing::Anticipate,
    ];
    for e in all {
        assert_eq!(e.apply(0.0), 0.0, "{}", e.name());
        assert_eq!(e.apply(1.0), 1.0, "{}", e.name());
    }
    assert!(Easing::EaseOut.apply(0.5) > 0.5);
    assert!(Easing::EaseIn.apply(0.5) < 0.5);
    assert!(Easing::BackOut.apply(0.7) > 1.0);
    assert!(Easing::BackIn.apply(0.2) < 0.0);
}

#[test]
fn hover_dimmer_tracks_one_item() {
    let mut h = HoverDimmer::new(0.3);
    assert_eq!(h.opacity(0), 1.0);
    assert!(h.start(2));
    assert!(!h.start(2));
    assert_eq!(h.opacity(2), 1.0);
    assert_eq!(h.opacity(1), 0.3);
    assert!(h.end());
    assert!(!h.end());
    assert_eq!(h.opacity(1), 1.0);
}
