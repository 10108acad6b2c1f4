//! Host-facing facade over the overlay engine.

use vitrine_core::OverlayEngine;
use vitrine_core::config::Config;
use vitrine_core::hittest::{HitTestMode, SceneProbe, TraceChannel, WidgetProbe};
use vitrine_core::info::{OtherWindowInfo, WindowInfo};
use vitrine_core::window::{RawHandle, Tickable, WindowSource};
use vitrine_core::{Point, WindowResult};

use crate::NativeSystem;

/// Owns the engine for one managed window and forwards host calls.
///
/// Hosts construct one of these for their viewport window, tick it
/// from the main loop, and drop it on shutdown. Drop hands the window
/// back in its original state, so a host that tears down mid-session
/// never strands the user with an unclickable window.
pub struct OverlayManager {
    engine: OverlayEngine<NativeSystem>,
}

impl OverlayManager {
    /// Creates a manager that resolves its window through `source`.
    pub fn new(source: Box<dyn WindowSource>) -> Self {
        Self {
            engine: OverlayEngine::new(NativeSystem::default(), source),
        }
    }

    /// Creates a manager seeded with the configured hit-test defaults.
    pub fn with_config(source: Box<dyn WindowSource>, config: &Config) -> Self {
        Self {
            engine: OverlayEngine::with_config(NativeSystem::default(), source, &config.hittest),
        }
    }

    /// Registers the probe consulted for scene geometry under the cursor.
    pub fn set_scene_probe(&mut self, probe: Box<dyn SceneProbe>) {
        self.engine.set_scene_probe(probe);
    }

    /// Registers the probe consulted for interactive UI under the cursor.
    pub fn set_widget_probe(&mut self, probe: Box<dyn WidgetProbe>) {
        self.engine.set_widget_probe(probe);
    }

    /// Acquires the managed window now instead of on first use.
    pub fn initialize(&mut self) -> bool {
        self.engine.initialize()
    }

    pub fn raw_handle(&self) -> Option<RawHandle> {
        self.engine.raw_handle()
    }

    pub fn is_initialized(&self) -> bool {
        self.engine.is_initialized()
    }

    pub fn is_borderless_active(&self) -> bool {
        self.engine.is_borderless_active()
    }

    pub fn is_click_through_active(&self) -> bool {
        self.engine.is_click_through_active()
    }

    pub fn is_topmost_active(&self) -> bool {
        self.engine.is_topmost_active()
    }

    pub fn is_dwm_transparency_active(&self) -> bool {
        self.engine.is_dwm_transparency_active()
    }

    pub fn is_desktop_background_active(&self) -> bool {
        self.engine.is_desktop_background_active()
    }

    pub fn is_mouse_over_opaque_area(&self) -> bool {
        self.engine.is_mouse_over_opaque_area()
    }

    pub fn is_hit_testing_enabled(&self) -> bool {
        self.engine.is_hit_testing_enabled()
    }

    pub fn hit_test_mode(&self) -> HitTestMode {
        self.engine.hit_test_mode()
    }

    /// Strips or restores the window frame.
    pub fn enable_borderless(&mut self, enable: bool) {
        self.engine.enable_borderless(enable);
    }

    /// Makes the window invisible to mouse input, or clickable again.
    pub fn enable_click_through(&mut self, enable: bool) {
        self.engine.enable_click_through(enable);
    }

    /// Keeps the window above all normal windows, or releases it.
    pub fn set_topmost(&mut self, topmost: bool) {
        self.engine.set_topmost(topmost);
    }

    /// Extends the compositor frame so alpha rendering reaches the
    /// desktop, or resets it.
    pub fn set_dwm_transparency(&mut self, enable: bool) {
        self.engine.set_dwm_transparency(enable);
    }

    /// Applies all four window toggles in one call.
    pub fn configure(&mut self, dwm: bool, borderless: bool, click_through: bool, topmost: bool) {
        self.engine.configure(dwm, borderless, click_through, topmost);
    }

    /// Reparents the window behind the desktop icons, or restores it.
    pub fn set_as_desktop_background(&mut self, enable: bool) {
        self.engine.set_as_desktop_background(enable);
    }

    /// Returns the window to its first-seen state.
    pub fn restore_defaults(&mut self) {
        self.engine.restore_defaults();
    }

    /// Starts or stops per-tick cursor hit-testing.
    pub fn set_hit_test_enabled(&mut self, enabled: bool) {
        self.engine.set_hit_test_enabled(enabled);
    }

    pub fn set_hit_test_mode(&mut self, mode: HitTestMode) {
        self.engine.set_hit_test_mode(mode);
    }

    pub fn set_raycast_channel(&mut self, channel: TraceChannel) {
        self.engine.set_raycast_channel(channel);
    }

    /// Cursor position in window-local coordinates, when resolvable.
    pub fn mouse_position_in_window(&mut self) -> Option<Point> {
        self.engine.mouse_position_in_window()
    }

    /// The managed window's title and geometry.
    pub fn window_info(&mut self) -> WindowResult<WindowInfo> {
        self.engine.window_info()
    }

    /// Every other listable top-level window.
    pub fn other_windows(&mut self) -> WindowResult<Vec<OtherWindowInfo>> {
        self.engine.other_windows()
    }
}

impl Tickable for OverlayManager {
    fn tick(&mut self, delta_seconds: f32) {
        self.engine.tick(delta_seconds);
    }
}

impl Drop for OverlayManager {
    fn drop(&mut self) {
        // Both are no-ops when nothing is active.
        self.engine.set_as_desktop_background(false);
        self.engine.restore_defaults();
    }
}
