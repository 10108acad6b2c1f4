use std::cell::Cell;
use std::rc::Rc;

use super::super::*;
use super::{FixedScene, FixedWidgets, Fixture, MAIN, fixture, initialized_fixture, main_win};
use crate::Point;

/// Scene probe whose answer the test can flip between ticks.
struct SharedScene {
    answer: Rc<Cell<bool>>,
}

impl SceneProbe for SharedScene {
    fn blocking_at(&self, _point: Point, _channel: TraceChannel) -> bool {
        self.answer.get()
    }
}

/// Scene probe that records the channel it was asked about.
struct ChannelRecorder {
    seen: Rc<Cell<TraceChannel>>,
}

impl SceneProbe for ChannelRecorder {
    fn blocking_at(&self, _point: Point, channel: TraceChannel) -> bool {
        self.seen.set(channel);
        false
    }
}

fn raycast_fixture(scene_blocks: bool, widgets_block: bool) -> Fixture {
    let mut f = initialized_fixture();
    f.engine.set_dwm_transparency(true);
    f.engine.set_hit_test_enabled(true);
    f.engine.set_hit_test_mode(HitTestMode::GameRaycast);
    f.engine.set_scene_probe(Box::new(FixedScene(scene_blocks)));
    f.engine.set_widget_probe(Box::new(FixedWidgets(widgets_block)));
    f
}

#[test]
fn tick_defaults_to_opaque_without_hit_testing() {
    let mut f = initialized_fixture();

    f.engine.tick(0.016);

    assert!(f.engine.is_mouse_over_opaque_area());
    assert_eq!(main_win(&f.os).ex_style_writes, 0);
}

#[test]
fn tick_engages_click_through_over_transparent_content() {
    let mut f = raycast_fixture(false, false);

    f.engine.tick(0.016);

    assert!(!f.engine.is_mouse_over_opaque_area());
    assert!(f.engine.is_click_through_active());
    assert!(style::is_transparent(main_win(&f.os).ex_style));
}

#[test]
fn tick_keeps_input_when_scene_geometry_blocks() {
    let mut f = raycast_fixture(true, false);

    f.engine.tick(0.016);

    assert!(f.engine.is_mouse_over_opaque_area());
    assert!(!f.engine.is_click_through_active());
    assert!(!style::is_transparent(main_win(&f.os).ex_style));
}

#[test]
fn tick_consults_widgets_when_the_scene_misses() {
    let mut f = raycast_fixture(false, true);

    f.engine.tick(0.016);

    assert!(f.engine.is_mouse_over_opaque_area());
    assert!(!f.engine.is_click_through_active());
}

#[test]
fn tick_without_compositor_transparency_never_releases_input() {
    let mut f = initialized_fixture();
    f.engine.set_hit_test_enabled(true);
    f.engine.set_hit_test_mode(HitTestMode::GameRaycast);
    f.engine.set_scene_probe(Box::new(FixedScene(false)));
    f.engine.set_widget_probe(Box::new(FixedWidgets(false)));

    f.engine.tick(0.016);

    assert!(!f.engine.is_mouse_over_opaque_area());
    assert!(!f.engine.is_click_through_active());
    assert_eq!(main_win(&f.os).ex_style_writes, 0);
}

#[test]
fn tick_restores_input_when_content_returns_under_the_cursor() {
    let answer = Rc::new(Cell::new(false));
    let mut f = initialized_fixture();
    f.engine.set_dwm_transparency(true);
    f.engine.set_hit_test_enabled(true);
    f.engine.set_hit_test_mode(HitTestMode::GameRaycast);
    f.engine.set_scene_probe(Box::new(SharedScene {
        answer: Rc::clone(&answer),
    }));

    f.engine.tick(0.016);
    assert!(f.engine.is_click_through_active());

    answer.set(true);
    f.engine.tick(0.016);

    assert!(f.engine.is_mouse_over_opaque_area());
    assert!(!f.engine.is_click_through_active());
    assert!(!style::is_transparent(main_win(&f.os).ex_style));
    assert_eq!(main_win(&f.os).ex_style_writes, 2);
}

#[test]
fn tick_treats_an_unresolvable_cursor_as_transparent() {
    let mut f = raycast_fixture(true, true);
    f.os.borrow_mut().cursor = None;

    f.engine.tick(0.016);

    assert!(!f.engine.is_mouse_over_opaque_area());
    assert!(f.engine.is_click_through_active());
}

#[test]
fn tick_with_mode_none_reports_opaque() {
    let mut f = raycast_fixture(false, false);
    f.engine.set_hit_test_mode(HitTestMode::None);

    f.engine.tick(0.016);

    assert!(f.engine.is_mouse_over_opaque_area());
}

#[test]
fn tick_skips_quietly_with_no_window_available() {
    let mut f = fixture();
    f.source.set(None);

    f.engine.tick(0.016);

    assert!(!f.engine.is_initialized());
}

#[test]
fn disabling_hit_testing_restores_input_immediately() {
    let mut f = raycast_fixture(false, false);
    f.engine.tick(0.016);
    assert!(f.engine.is_click_through_active());

    f.engine.set_hit_test_enabled(false);

    assert!(!f.engine.is_click_through_active());
    assert!(!style::is_transparent(main_win(&f.os).ex_style));
    assert!(f.engine.is_mouse_over_opaque_area());
}

#[test]
fn raycast_channel_reaches_the_scene_probe() {
    let seen = Rc::new(Cell::new(0));
    let mut f = initialized_fixture();
    f.engine.set_hit_test_enabled(true);
    f.engine.set_hit_test_mode(HitTestMode::GameRaycast);
    f.engine.set_raycast_channel(7);
    f.engine.set_scene_probe(Box::new(ChannelRecorder {
        seen: Rc::clone(&seen),
    }));

    f.engine.tick(0.016);

    assert_eq!(seen.get(), 7);
}

// -- cursor mapping --

#[test]
fn mouse_position_maps_into_window_space() {
    let mut f = initialized_fixture();

    let pos = f.engine.mouse_position_in_window();

    assert_eq!(pos, Some(Point::new(400, 300)));
}

#[test]
fn mouse_position_is_none_without_a_cursor() {
    let mut f = initialized_fixture();
    f.os.borrow_mut().cursor = None;

    assert_eq!(f.engine.mouse_position_in_window(), None);
}

#[test]
fn mouse_position_drops_a_dead_window() {
    let mut f = initialized_fixture();
    f.os.borrow_mut().windows.get_mut(&MAIN).unwrap().alive = false;

    let pos = f.engine.mouse_position_in_window();

    assert_eq!(pos, None);
    assert_eq!(f.engine.raw_handle(), None);
}
