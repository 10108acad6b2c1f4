use super::super::*;
use super::{
    FixedScene, FixedWidgets, MAIN, WORKER, fixture, good_layer, initialized_fixture, main_win,
    plain_window,
};
use crate::window::{IconLayer, ZOrder};
use crate::Rect;

fn empty_layer() -> IconLayer {
    IconLayer {
        handle: WORKER,
        client: Rect::new(0, 0, 0, 0),
    }
}

#[test]
fn desktop_mode_reparents_behind_the_icon_layer() {
    let mut f = initialized_fixture();
    f.os.borrow_mut().icon_layers.push(Ok(good_layer()));

    f.engine.set_as_desktop_background(true);

    let w = main_win(&f.os);
    assert_eq!(w.parent, Some(WORKER));
    assert!(style::has_popup(w.style));
    assert!(style::is_borderless(w.style));
    assert!(style::is_transparent(w.ex_style));
    assert!(style::is_layered(w.ex_style));
    assert_eq!(w.rect, good_layer().client);
    assert_eq!(w.last_z, Some(ZOrder::Bottom));
    assert!(f.engine.is_desktop_background_active());
    assert!(f.engine.is_click_through_active());
}

#[test]
fn desktop_mode_initializes_an_unresolved_window_first() {
    let mut f = fixture();
    f.os.borrow_mut().icon_layers.push(Ok(good_layer()));

    f.engine.set_as_desktop_background(true);

    assert!(f.engine.is_initialized());
    assert!(f.engine.is_desktop_background_active());
    assert_eq!(main_win(&f.os).parent, Some(WORKER));
}

#[test]
fn desktop_discovery_retries_while_the_layer_is_not_ready() {
    let mut f = initialized_fixture();
    {
        let mut os = f.os.borrow_mut();
        os.icon_layers.push(Ok(empty_layer()));
        os.icon_layers.push(Ok(good_layer()));
    }

    f.engine.set_as_desktop_background(true);

    assert_eq!(f.os.borrow().locate_calls, 2);
    assert!(f.engine.is_desktop_background_active());
    assert_eq!(main_win(&f.os).parent, Some(WORKER));
}

#[test]
fn desktop_aborts_when_the_layer_never_appears() {
    let mut f = initialized_fixture();

    f.engine.set_as_desktop_background(true);

    let w = main_win(&f.os);
    assert_eq!(f.os.borrow().locate_calls, 2);
    assert!(!f.engine.is_desktop_background_active());
    assert_eq!(w.parent, None);
    assert_eq!(w.style_writes, 0);
    assert_eq!(w.ex_style_writes, 0);
}

#[test]
fn desktop_reparent_failure_rolls_every_style_back() {
    let mut f = initialized_fixture();
    let before = main_win(&f.os);
    {
        let mut os = f.os.borrow_mut();
        os.icon_layers.push(Ok(good_layer()));
        os.parent_failures = 1;
    }

    f.engine.set_as_desktop_background(true);

    let w = main_win(&f.os);
    assert!(!f.engine.is_desktop_background_active());
    assert_eq!(w.parent, None);
    assert_eq!(w.style, before.style);
    assert_eq!(w.ex_style, before.ex_style);
    assert_eq!(w.style_writes, 2);
    assert_eq!(w.ex_style_writes, 2);
}

#[test]
fn desktop_mode_aborts_before_reparenting_when_the_style_write_is_dropped() {
    let mut f = initialized_fixture();
    {
        let mut os = f.os.borrow_mut();
        os.icon_layers.push(Ok(good_layer()));
        os.windows.get_mut(&MAIN).unwrap().drops_style_writes = true;
    }

    f.engine.set_as_desktop_background(true);

    let w = main_win(&f.os);
    assert!(!f.engine.is_desktop_background_active());
    assert_eq!(w.parent, None);
    assert_eq!(w.parent_writes, 0);
    // The dropped style write is detected before the extended style is
    // ever touched.
    assert_eq!(w.ex_style_writes, 0);
}

#[test]
fn desktop_off_restores_the_first_captured_state() {
    let mut f = initialized_fixture();
    let before = main_win(&f.os);
    f.os.borrow_mut().icon_layers.push(Ok(good_layer()));

    f.engine.enable_borderless(true);
    f.engine.set_as_desktop_background(true);
    f.engine.set_as_desktop_background(false);

    let w = main_win(&f.os);
    assert_eq!(w.parent, None);
    assert_eq!(w.style, before.style);
    assert_eq!(w.ex_style, before.ex_style);
    assert!(!f.engine.is_desktop_background_active());
    assert!(!f.engine.is_click_through_active());
    assert!(!f.engine.is_borderless_active());
    // The round trip through the shell invalidates everything learned
    // about the window; the next operation re-resolves it.
    assert!(!f.engine.is_initialized());
}

#[test]
fn first_captured_state_survives_window_swaps() {
    let mut f = initialized_fixture();
    let original = main_win(&f.os);
    let replacement: RawHandle = 0x3000;
    let scrollbar_bit: isize = 0x0020_0000;
    {
        let mut os = f.os.borrow_mut();
        os.windows.get_mut(&MAIN).unwrap().alive = false;
        let mut w = plain_window();
        w.style |= scrollbar_bit;
        os.windows.insert(replacement, w);
        os.icon_layers.push(Ok(good_layer()));
    }
    f.source.set(Some(replacement));
    f.engine.tick(0.016);
    assert_eq!(f.engine.raw_handle(), Some(replacement));

    f.engine.set_as_desktop_background(true);
    f.engine.set_as_desktop_background(false);

    // Restoration reaches back to the styles of the very first window
    // this engine ever managed.
    let w = f.os.borrow().windows[&replacement].clone();
    assert_eq!(w.style, original.style);
    assert_eq!(w.ex_style, original.ex_style);
}

#[test]
fn desktop_off_retries_with_a_plain_reparent() {
    let owner: RawHandle = 0x4242;
    let mut f = fixture();
    f.os.borrow_mut().windows.get_mut(&MAIN).unwrap().parent = Some(owner);
    assert!(f.engine.initialize());
    f.os.borrow_mut().icon_layers.push(Ok(good_layer()));

    f.engine.set_as_desktop_background(true);
    assert_eq!(main_win(&f.os).parent, Some(WORKER));

    f.os.borrow_mut().parent_failures = 1;
    f.engine.set_as_desktop_background(false);

    let w = main_win(&f.os);
    assert_eq!(w.parent, None);
    assert!(!f.engine.is_desktop_background_active());
}

#[test]
fn desktop_off_with_a_dead_window_just_resets() {
    let mut f = initialized_fixture();
    f.os.borrow_mut().icon_layers.push(Ok(good_layer()));
    f.engine.set_as_desktop_background(true);

    f.os.borrow_mut().windows.get_mut(&MAIN).unwrap().alive = false;
    f.engine.set_as_desktop_background(false);

    assert!(!f.engine.is_desktop_background_active());
    assert!(!f.engine.is_initialized());
    assert_eq!(f.engine.raw_handle(), None);
}

#[test]
fn desktop_mode_ignores_source_disagreement() {
    let mut f = initialized_fixture();
    f.os.borrow_mut().icon_layers.push(Ok(good_layer()));
    f.engine.set_as_desktop_background(true);

    // While parented to the shell, the host's source keeps reporting
    // its own idea of the window; that must not trigger a re-init.
    f.source.set(Some(0x9999));
    let _ = f.engine.other_windows();

    assert!(f.engine.is_desktop_background_active());
    assert_eq!(main_win(&f.os).parent, Some(WORKER));
}

#[test]
fn desktop_on_twice_runs_the_full_sequence_again() {
    let mut f = initialized_fixture();
    {
        let mut os = f.os.borrow_mut();
        os.icon_layers.push(Ok(good_layer()));
        os.icon_layers.push(Ok(good_layer()));
    }

    f.engine.set_as_desktop_background(true);
    f.engine.set_as_desktop_background(true);

    assert_eq!(f.os.borrow().locate_calls, 2);
    assert!(f.engine.is_desktop_background_active());
    assert_eq!(main_win(&f.os).parent, Some(WORKER));
}

#[test]
fn active_borderless_skips_the_style_rewrite_on_entry() {
    let mut f = initialized_fixture();
    f.os.borrow_mut().icon_layers.push(Ok(good_layer()));

    f.engine.enable_borderless(true);
    let writes_before = main_win(&f.os).style_writes;
    f.engine.set_as_desktop_background(true);

    assert_eq!(main_win(&f.os).style_writes, writes_before);
    assert!(f.engine.is_desktop_background_active());
}

#[test]
fn tick_stands_down_in_desktop_mode() {
    let mut f = initialized_fixture();
    f.os.borrow_mut().icon_layers.push(Ok(good_layer()));
    f.engine.set_dwm_transparency(true);
    f.engine.set_hit_test_enabled(true);
    f.engine.set_hit_test_mode(HitTestMode::GameRaycast);
    f.engine.set_scene_probe(Box::new(FixedScene(false)));
    f.engine.set_widget_probe(Box::new(FixedWidgets(false)));

    f.engine.set_as_desktop_background(true);
    let writes_before = main_win(&f.os).ex_style_writes;

    f.engine.tick(0.016);

    assert_eq!(main_win(&f.os).ex_style_writes, writes_before);
}
