//! Per-tick hit detection and the cursor mapping it relies on.

use crate::hittest::HitTestMode;
use crate::window::WindowSystem;
use crate::{Point, log_debug, log_error};

use super::OverlayEngine;

impl<S: WindowSystem> OverlayEngine<S> {
    /// Cursor position relative to the managed window's top-left
    /// corner, or `None` when either cannot be resolved.
    ///
    /// A window-rect failure caused by a dead handle drops all
    /// handle-dependent state so the next operation re-resolves.
    pub fn mouse_position_in_window(&mut self) -> Option<Point> {
        let cursor = match self.system.cursor_pos() {
            Ok(cursor) => cursor,
            Err(_) => return None,
        };

        let Some(window) = self.window.as_ref() else {
            return None;
        };
        match window.rect() {
            Ok(rect) => Some(rect.to_local(cursor)),
            Err(e) => {
                log_error!("mouse position: window rect read failed: {e}");
                if e.is_dead_handle() {
                    self.forget_window();
                }
                None
            }
        }
    }

    /// One scheduler step. Delta time is accepted for interface parity
    /// but the detection itself is stateless per tick.
    pub(super) fn run_tick(&mut self, _delta_seconds: f32) {
        // A desktop-background window already ignores input through its
        // forced click-through state; there is nothing to schedule.
        if self.desktop_active {
            return;
        }

        if !self.can_tick || !self.initialized || !self.window_alive() {
            self.ensure_valid();
            if !self.can_tick || !self.initialized || !self.window_alive() {
                return;
            }
        }

        if !self.hit_test_enabled || self.hit_test_mode == HitTestMode::None {
            self.mouse_over_opaque = true;
            return;
        }

        self.update_hit_detection();

        let should_click_through = self.dwm_active && !self.mouse_over_opaque;
        if self.click_through_os != should_click_through {
            log_debug!(
                "tick: click-through should be {should_click_through}, OS state is {}, updating",
                self.click_through_os
            );
            self.enable_click_through(should_click_through);
        }
    }

    fn update_hit_detection(&mut self) {
        let Some(point) = self.mouse_position_in_window() else {
            // No cursor means nothing to block; treat the spot as
            // transparent for this tick.
            self.mouse_over_opaque = false;
            return;
        };

        self.mouse_over_opaque = match self.hit_test_mode {
            HitTestMode::GameRaycast => self.cursor_over_opaque_content(point),
            HitTestMode::None => true,
        };
    }

    /// Scene geometry wins over widgets; a probe that is not installed
    /// simply cannot block.
    fn cursor_over_opaque_content(&self, point: Point) -> bool {
        if let Some(probe) = &self.scene_probe
            && probe.blocking_at(point, self.trace_channel)
        {
            return true;
        }
        if let Some(probe) = &self.widget_probe
            && probe.blocking_at(point)
        {
            return true;
        }
        false
    }
}
