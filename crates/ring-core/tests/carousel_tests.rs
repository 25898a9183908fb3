// Host-side tests for the drag -> release -> snap interaction model.

use ring_core::*;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn images(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("img-{i}.jpg")).collect()
}

fn make_carousel(n: usize, initial_rotation: f64) -> Carousel<Vec<f64>> {
    let mut options = SliderOptions::new(images(n), 350.0, 700.0);
    options.initial_rotation = initial_rotation;
    Carousel::new(&options, Vec::new()).expect("valid options")
}

fn run_until_settled(c: &mut Carousel<Vec<f64>>) {
    for _ in 0..10_000 {
        if c.inertia().is_none() {
            return;
        }
        c.tick(FRAME);
    }
    panic!("inertia never settled");
}

#[test]
fn initial_rotation_is_published_on_construction() {
    let c = make_carousel(6, 60.0);
    assert_eq!(c.angle(), 60.0);
    assert_eq!(c.sink().as_slice(), &[60.0]);
}

#[test]
fn empty_image_list_is_rejected() {
    let options = SliderOptions::new(Vec::new(), 350.0, 700.0);
    let err = Carousel::new(&options, ()).err();
    assert_eq!(err, Some(ConfigError::NoImages));
}

#[test]
fn dragging_left_increases_angle_and_right_decreases_it() {
    let mut c = make_carousel(6, 0.0);
    c.on_drag_start(100.0);
    c.on_drag_move(90.0);
    assert!((c.angle() - 5.0).abs() < 1e-9, "left drag gave {}", c.angle());

    c.on_drag_move(110.0);
    assert!((c.angle() - (-5.0)).abs() < 1e-9, "right drag gave {}", c.angle());
}

#[test]
fn every_move_is_published_in_order() {
    let mut c = make_carousel(6, 0.0);
    c.on_drag_start(0.0);
    c.on_drag_move(-2.0);
    c.on_drag_move(-6.0);
    assert_eq!(c.sink().as_slice(), &[0.0, 1.0, 3.0]);
}

#[test]
fn move_and_end_without_a_drag_are_noops() {
    let mut c = make_carousel(6, 42.0);
    c.on_drag_move(500.0);
    c.on_drag_end();
    assert_eq!(c.angle(), 42.0);
    assert!(c.inertia().is_none());
    assert_eq!(c.sink().len(), 1);
}

#[test]
fn zero_movement_release_snaps_to_nearest_slot() {
    let mut c = make_carousel(6, 29.0);
    c.on_drag_start(200.0);
    c.on_drag_end();

    let anim = c.inertia().expect("release animation");
    assert_eq!(anim.initial_velocity(), 0.0);
    assert_eq!(anim.target(), snap_to_slot(29.0, 60.0));
    assert_eq!(anim.target(), 0.0);

    run_until_settled(&mut c);
    assert_eq!(c.angle(), 0.0);
}

#[test]
fn zero_movement_release_on_a_slot_settles_immediately() {
    let mut c = make_carousel(6, 120.0);
    c.on_drag_start(10.0);
    c.on_drag_end();
    assert!(c.inertia().is_none());
    assert_eq!(c.angle(), 120.0);
}

#[test]
fn release_velocity_is_boosted_and_snapped() {
    let mut c = make_carousel(6, 0.0);
    c.on_drag_start(100.0);
    // -delta * 0.5 = 5 degrees, boosted by 14 -> 70
    c.on_drag_move(90.0);
    c.on_drag_end();

    let anim = c.inertia().expect("release animation");
    assert!((anim.start_angle() - 5.0).abs() < 1e-9);
    assert!((anim.initial_velocity() - 70.0).abs() < 1e-9);
    assert!((anim.raw_target() - 75.0).abs() < 1e-9);
    assert_eq!(anim.target(), 60.0);

    run_until_settled(&mut c);
    assert_eq!(c.angle(), 60.0);
    assert!(!c.is_dragging());
}

#[test]
fn only_the_last_move_sets_release_velocity() {
    let mut c = make_carousel(6, 0.0);
    c.on_drag_start(0.0);
    c.on_drag_move(-100.0);
    c.on_drag_move(-100.0);
    c.on_drag_end();
    // last delta was zero, so the ring snaps from 50 to the nearest slot
    let anim = c.inertia().expect("release animation");
    assert_eq!(anim.initial_velocity(), 0.0);
    assert_eq!(anim.target(), 60.0);
}

#[test]
fn drag_start_cancels_running_inertia_without_a_jump() {
    let mut c = make_carousel(6, 0.0);
    c.on_drag_start(100.0);
    c.on_drag_move(80.0);
    c.on_drag_end();
    c.tick(FRAME);
    c.tick(FRAME);
    let mid_flight = c.angle();
    assert!(c.inertia().is_some());

    assert!(c.on_drag_start(300.0));
    assert!(c.inertia().is_none());
    assert_eq!(c.angle(), mid_flight);

    let published = c.sink().len();
    for _ in 0..30 {
        c.tick(FRAME);
    }
    assert_eq!(c.angle(), mid_flight);
    assert_eq!(c.sink().len(), published);

    c.on_drag_move(298.0);
    assert!((c.angle() - (mid_flight + 1.0)).abs() < 1e-9);
}

#[test]
fn disabled_dragging_ignores_pointer_input() {
    let mut options = SliderOptions::new(images(4), 350.0, 700.0);
    options.draggable = false;
    let mut c = Carousel::new(&options, Vec::new()).unwrap();

    assert!(!c.on_drag_start(0.0));
    c.on_drag_move(-50.0);
    c.on_drag_end();
    assert_eq!(c.angle(), 60.0);
    assert!(c.inertia().is_none());
    assert_eq!(c.cursor(), Cursor::Default);
}

#[test]
fn cursor_follows_drag_state() {
    let mut c = make_carousel(3, 0.0);
    assert_eq!(c.cursor(), Cursor::Grab);
    c.on_drag_start(0.0);
    assert_eq!(c.cursor(), Cursor::Grabbing);
    c.on_drag_end();
    assert_eq!(c.cursor(), Cursor::Grab);
    assert_eq!(Cursor::Grabbing.css(), "grabbing");
}

#[test]
fn angle_accumulates_past_a_full_turn() {
    let mut c = make_carousel(12, 0.0);
    c.on_drag_start(0.0);
    for step in 1..=100 {
        c.on_drag_move(-(step as f64) * 10.0);
    }
    assert!((c.angle() - 500.0).abs() < 1e-9);
    c.on_drag_end();
    run_until_settled(&mut c);
    let slot = c.ring().slot_angle();
    assert!(c.angle() > 360.0);
    assert!((c.angle() / slot - (c.angle() / slot).round()).abs() < 1e-9);
}

#[test]
fn hover_dims_other_items_but_not_while_dragging() {
    let mut c = make_carousel(4, 0.0);
    for _ in 0..1_000 {
        c.tick(FRAME);
    }
    assert!(c.entrance_finished());

    c.on_hover_start(1);
    assert_eq!(c.item_opacity(1), 1.0);
    assert_eq!(c.item_opacity(0), 0.5);
    c.on_hover_end();
    assert_eq!(c.item_opacity(0), 1.0);

    c.on_drag_start(0.0);
    c.on_hover_start(2);
    assert_eq!(c.hovered(), None);
    assert_eq!(c.item_opacity(0), 1.0);
}

#[test]
fn resize_switches_scale_and_item_depth() {
    let mut c = make_carousel(6, 0.0);
    c.take_items_dirty();

    assert_eq!(c.on_resize(500.0), 0.7);
    assert!(c.take_items_dirty());
    assert!((c.item_transform(0).translate_z - (-490.0)).abs() < 1e-9);

    assert_eq!(c.on_resize(1024.0), 1.0);
    assert_eq!(c.item_transform(2).translate_z, -700.0);
    assert_eq!(c.item_transform(2).rotate_y_deg, -120.0);
}

#[test]
fn tick_reports_activity_until_entrance_and_inertia_finish() {
    let mut c = make_carousel(2, 0.0);
    assert!(c.is_animating());
    let mut frames = 0;
    while c.tick(FRAME) {
        frames += 1;
        assert!(frames < 1_000);
    }
    assert!(c.entrance_finished());
    assert!(!c.is_animating());
}

#[test]
fn facing_index_tracks_rotation() {
    let c = make_carousel(6, 60.0);
    assert_eq!(c.facing_index(), 1);
    let c = make_carousel(6, -60.0);
    assert_eq!(c.facing_index(), 5);
}

#[test]
fn idle_ring_needs_no_frames_until_input_arrives() {
    let mut c = make_carousel(6, 0.0);
    while c.tick(FRAME) {}
    c.take_items_dirty();
    assert!(!c.needs_frame());

    c.on_hover_start(2);
    assert!(c.needs_frame());
    c.take_items_dirty();
    assert!(!c.needs_frame());

    c.on_resize(500.0);
    assert!(c.needs_frame());
    c.take_items_dirty();

    c.on_drag_start(0.0);
    c.on_drag_move(-40.0);
    c.on_drag_end();
    assert!(c.inertia().is_some());
    assert!(c.needs_frame());
    run_until_settled(&mut c);
    c.take_items_dirty();
    assert!(!c.needs_frame());
}
