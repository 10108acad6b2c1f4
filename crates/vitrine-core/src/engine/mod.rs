//! The overlay engine: owns the managed window's logical state and
//! drives every OS-facing change through the platform traits.
//!
//! One engine manages exactly one window. The host constructs it with
//! a [`WindowSystem`] implementation and a [`WindowSource`] that can
//! name the window to manage, then calls the toggle operations and
//! drives [`Tickable::tick`] from its main loop.

mod desktop;
mod mutate;
mod tick;


use crate::config::HitTestConfig;
use crate::hittest::{HitTestMode, SceneProbe, TraceChannel, WidgetProbe};
use crate::info::{OtherWindowInfo, WindowInfo, should_list};
use crate::window::{RawHandle, StyleSnapshot, WindowOps, WindowSource, WindowSystem};
use crate::{Tickable, WindowError, WindowResult, log_info, log_warn, style};

/// Runtime window-state engine for a single managed window.
///
/// All operations are resilient: a missing or dying window downgrades
/// them to logged no-ops, and the next operation or tick re-resolves
/// the window and carries on.
pub struct OverlayEngine<S: WindowSystem> {
    system: S,
    source: Box<dyn WindowSource>,
    scene_probe: Option<Box<dyn SceneProbe>>,
    widget_probe: Option<Box<dyn WidgetProbe>>,

    window: Option<Box<dyn WindowOps>>,
    /// Styles of the very first window ever resolved. Never recaptured;
    /// leaving desktop-background mode restores these.
    true_original: Option<StyleSnapshot>,
    /// Styles at the most recent (re)initialization. Toggle disable
    /// paths restore these.
    baseline: Option<StyleSnapshot>,
    icon_layer: Option<RawHandle>,

    initialized: bool,
    can_tick: bool,
    borderless_active: bool,
    /// Last known OS-level click-through state. Deliberately tracked
    /// separately from what the scheduler wants, so drift gets detected
    /// and logged instead of compounding.
    click_through_os: bool,
    topmost_active: bool,
    dwm_active: bool,
    desktop_active: bool,

    hit_test_enabled: bool,
    hit_test_mode: HitTestMode,
    trace_channel: TraceChannel,
    mouse_over_opaque: bool,
}

impl<S: WindowSystem> OverlayEngine<S> {
    /// Creates an engine with hit-testing off. No OS calls happen until
    /// [`initialize`](Self::initialize) or the first operation.
    pub fn new(system: S, source: Box<dyn WindowSource>) -> Self {
        Self {
            system,
            source,
            scene_probe: None,
            widget_probe: None,
            window: None,
            true_original: None,
            baseline: None,
            icon_layer: None,
            initialized: false,
            can_tick: false,
            borderless_active: false,
            click_through_os: false,
            topmost_active: false,
            dwm_active: false,
            desktop_active: false,
            hit_test_enabled: false,
            hit_test_mode: HitTestMode::None,
            trace_channel: 0,
            mouse_over_opaque: true,
        }
    }

    /// Creates an engine seeded with the configured hit-test defaults.
    pub fn with_config(system: S, source: Box<dyn WindowSource>, config: &HitTestConfig) -> Self {
        let mut engine = Self::new(system, source);
        engine.hit_test_enabled = config.enabled;
        engine.hit_test_mode = config.mode;
        engine.trace_channel = config.channel;
        engine
    }

    /// Installs the 3D geometry probe used by raycast hit-testing.
    pub fn set_scene_probe(&mut self, probe: Box<dyn SceneProbe>) {
        self.scene_probe = Some(probe);
    }

    /// Installs the widget probe used by raycast hit-testing.
    pub fn set_widget_probe(&mut self, probe: Box<dyn WidgetProbe>) {
        self.widget_probe = Some(probe);
    }

    /// Resolves the managed window and captures its styles.
    ///
    /// Safe to call at any time, including before the host has created
    /// a window; returns `false` until one can be resolved. On first
    /// success the window's styles and parent are captured both as the
    /// permanent original and as the current baseline.
    pub fn initialize(&mut self) -> bool {
        if self.initialized && self.window_alive() && !self.desktop_active {
            return true;
        }

        let Some(handle) = self.resolve_handle() else {
            self.initialized = false;
            self.can_tick = false;
            log_warn!("initialize: no window handle could be resolved");
            return false;
        };

        let window = match self.system.attach(handle) {
            Ok(window) => window,
            Err(e) => {
                self.initialized = false;
                self.can_tick = false;
                log_warn!("initialize: attach to {handle:#x} failed: {e}");
                return false;
            }
        };

        let styles = match window.styles() {
            Ok(styles) => styles,
            Err(e) => {
                self.initialized = false;
                self.can_tick = false;
                log_warn!("initialize: style read on {handle:#x} failed: {e}");
                return false;
            }
        };

        if self.true_original.is_none() {
            let snapshot = StyleSnapshot {
                styles,
                parent: window.parent(),
            };
            self.true_original = Some(snapshot);
            self.baseline = Some(snapshot);
            log_info!(
                "initialize: captured original state of {handle:#x}, style={:#x} ex={:#x}",
                styles.style,
                styles.ex_style
            );
        } else if self.baseline.is_none() && !self.desktop_active {
            // Re-entry after desktop mode or a dead window: the current
            // styles become the new baseline, the permanent original is
            // left alone.
            self.baseline = Some(StyleSnapshot {
                styles,
                parent: window.parent(),
            });
            log_info!(
                "initialize: recaptured baseline of {handle:#x}, style={:#x} ex={:#x}",
                styles.style,
                styles.ex_style
            );
        }

        self.click_through_os = style::is_transparent(styles.ex_style);
        self.window = Some(window);
        self.initialized = true;
        self.can_tick = true;
        true
    }

    /// Handle of the currently managed window, if one is resolved.
    pub fn raw_handle(&self) -> Option<RawHandle> {
        self.window.as_ref().map(|w| w.raw())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_borderless_active(&self) -> bool {
        self.borderless_active
    }

    pub fn is_click_through_active(&self) -> bool {
        self.click_through_os
    }

    pub fn is_topmost_active(&self) -> bool {
        self.topmost_active
    }

    pub fn is_dwm_transparency_active(&self) -> bool {
        self.dwm_active
    }

    pub fn is_desktop_background_active(&self) -> bool {
        self.desktop_active
    }

    /// Whether the cursor sat over opaque content on the last tick.
    ///
    /// Defaults to `true`; hit-testing being off or undetermined must
    /// never leave the window unclickable.
    pub fn is_mouse_over_opaque_area(&self) -> bool {
        self.mouse_over_opaque
    }

    pub fn is_hit_testing_enabled(&self) -> bool {
        self.hit_test_enabled
    }

    pub fn hit_test_mode(&self) -> HitTestMode {
        self.hit_test_mode
    }

    /// Turns hit-testing on or off.
    ///
    /// Turning it off re-enables input immediately: a window left
    /// click-through with nobody updating it would be unusable.
    pub fn set_hit_test_enabled(&mut self, enabled: bool) {
        self.hit_test_enabled = enabled;
        if !enabled {
            if self.click_through_os {
                log_info!("hit-testing disabled while click-through, making window interactive");
                self.enable_click_through(false);
            }
            self.mouse_over_opaque = true;
        } else {
            log_info!("hit-testing enabled");
        }
    }

    pub fn set_hit_test_mode(&mut self, mode: HitTestMode) {
        if self.hit_test_mode != mode {
            self.hit_test_mode = mode;
            log_info!("hit-test mode set to {mode:?}");
        }
    }

    pub fn set_raycast_channel(&mut self, channel: TraceChannel) {
        if self.trace_channel != channel {
            self.trace_channel = channel;
            log_info!("raycast channel set to {channel}");
        }
    }

    /// Lists the other top-level windows on the desktop.
    ///
    /// The managed window itself, shell desktop hosts and invisible or
    /// degenerate windows are filtered out, see
    /// [`should_list`](crate::info::should_list).
    pub fn other_windows(&mut self) -> WindowResult<Vec<OtherWindowInfo>> {
        self.ensure_valid();
        let Some(own) = self.raw_handle() else {
            log_warn!("other_windows: no managed window, cannot exclude self");
            return Err(WindowError::NotInitialized);
        };

        let facts = self.system.enumerate()?;
        Ok(facts
            .iter()
            .filter(|f| should_list(f, Some(own)))
            .map(OtherWindowInfo::from_facts)
            .collect())
    }

    /// Geometry and title of the managed window.
    pub fn window_info(&mut self) -> WindowResult<WindowInfo> {
        self.ensure_valid();
        let Some(window) = self.window.as_ref() else {
            return Err(WindowError::NotInitialized);
        };

        let rect = window.rect()?;
        Ok(WindowInfo {
            title: window.title().unwrap_or_default(),
            handle: window.raw().to_string(),
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        })
    }

    /// Re-resolves the managed window when it died or the host points
    /// at a different one.
    ///
    /// In desktop-background mode only liveness matters; the host's
    /// source is expected to disagree while the window is parented to
    /// the shell.
    fn ensure_valid(&mut self) {
        if self.desktop_active {
            if !self.window_alive() {
                log_warn!("managed window died in desktop background mode, forcing full re-init");
                self.desktop_active = false;
                self.icon_layer = None;
                self.forget_window();
                self.initialize();
            }
            return;
        }

        let needs_reinit = !self.initialized
            || !self.window_alive()
            || match (self.source.native_handle(), self.raw_handle()) {
                (Some(wanted), Some(current)) => wanted != current,
                // A source with no opinion keeps the current window.
                _ => false,
            };

        if needs_reinit {
            self.forget_window();
            self.initialize();
        }
    }

    fn window_alive(&self) -> bool {
        self.window.as_ref().is_some_and(|w| w.is_alive())
    }

    /// Resolution order: whatever the host source reports, then the
    /// foreground window as a last resort.
    fn resolve_handle(&self) -> Option<RawHandle> {
        if let Some(handle) = self.source.native_handle() {
            return Some(handle);
        }
        self.system.active_window()
    }

    /// Drops the resolved window and all handle-dependent state, keeping
    /// the permanent original snapshot.
    fn forget_window(&mut self) {
        self.window = None;
        self.initialized = false;
        self.baseline = None;
        self.can_tick = false;
    }
}

/// Writes the style word and re-reads it to confirm the OS kept it.
///
/// A style write can report success while the window silently discards
/// the change, so the write call alone proves nothing.
fn write_style_checked(window: &dyn WindowOps, value: isize) -> WindowResult<()> {
    window.set_style(value)?;
    if window.styles()?.style != value {
        return Err(WindowError::StyleNotApplied("style word"));
    }
    Ok(())
}

/// Writes the extended style word and re-reads it to confirm it landed.
fn write_ex_style_checked(window: &dyn WindowOps, value: isize) -> WindowResult<()> {
    window.set_ex_style(value)?;
    if window.styles()?.ex_style != value {
        return Err(WindowError::StyleNotApplied("extended style word"));
    }
    Ok(())
}

impl<S: WindowSystem> Tickable for OverlayEngine<S> {
    fn tick(&mut self, delta_seconds: f32) {
        self.run_tick(delta_seconds);
    }
}
