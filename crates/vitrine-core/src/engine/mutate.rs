//! The toggle operations applied to the managed window.
//!
//! Every operation follows the same discipline: revalidate the handle,
//! compare the request against both the engine's bookkeeping and the
//! actual OS state, write only when something would change, and re-read
//! to confirm the write landed before trusting it.

use crate::window::{WindowSystem, ZOrder};
use crate::{log_error, log_info, log_warn, style};

use super::{OverlayEngine, write_ex_style_checked, write_style_checked};

impl<S: WindowSystem> OverlayEngine<S> {
    /// Removes or restores the window frame.
    ///
    /// Enabling rewrites the baseline style as a bare popup; disabling
    /// writes the baseline style back verbatim.
    pub fn enable_borderless(&mut self, enable: bool) {
        self.ensure_valid();
        let window = self.window.as_deref().filter(|_| self.initialized);
        let (Some(window), Some(baseline)) = (window, self.baseline) else {
            log_warn!("borderless: not initialized or baseline styles missing, ignoring request");
            return;
        };

        let currently = match window.styles() {
            Ok(styles) => style::is_borderless(styles.style),
            Err(e) => {
                log_warn!("borderless: style read failed: {e}");
                return;
            }
        };
        if enable == self.borderless_active && enable == currently {
            return;
        }

        let new_style = if enable {
            style::without_standard_frame(baseline.styles.style)
        } else {
            baseline.styles.style
        };
        if let Err(e) = window.set_style(new_style) {
            log_error!("borderless: style write failed: {e}");
            return;
        }
        let verified = window
            .styles()
            .is_ok_and(|s| style::is_borderless(s.style) == enable);
        if !verified {
            log_error!("borderless: style change was not applied");
            return;
        }

        let _ = window.refresh_frame(false);
        window.invalidate();
        self.borderless_active = enable;
        log_info!("borderless mode set to {enable}");
    }

    /// Makes clicks pass through the window, or catches them again.
    ///
    /// When no window is resolved the request is recorded so the
    /// scheduler's view of the OS state stays consistent once one
    /// appears.
    pub fn enable_click_through(&mut self, enable: bool) {
        self.ensure_valid();
        let Some(window) = self.window.as_deref().filter(|_| self.initialized) else {
            log_warn!("click-through: no window, recording requested state {enable}");
            self.click_through_os = enable;
            return;
        };

        let current_ex = match window.styles() {
            Ok(styles) => styles.ex_style,
            Err(e) => {
                log_warn!("click-through: style read failed: {e}");
                return;
            }
        };
        let currently = style::is_transparent(current_ex);

        if self.click_through_os != currently && enable != currently {
            log_warn!(
                "click-through: internal state {} disagrees with OS state {} before change to {enable}",
                self.click_through_os,
                currently
            );
        }

        if enable == currently {
            self.click_through_os = enable;
            return;
        }

        let new_ex = if enable {
            style::with_click_through(current_ex)
        } else if let Some(baseline) = self.baseline {
            // Fall back to the baseline word. The layered bit stays
            // when DWM transparency still needs it or the window was
            // layered to begin with.
            let mut ex = style::strip_transparent(baseline.styles.ex_style);
            if !self.dwm_active && !style::is_layered(baseline.styles.ex_style) {
                ex = style::strip_layered(ex);
            }
            ex
        } else {
            let mut ex = style::strip_transparent(current_ex);
            if !self.dwm_active {
                ex = style::strip_layered(ex);
            }
            ex
        };

        if new_ex != current_ex {
            match window.set_ex_style(new_ex) {
                Ok(()) => {
                    let verified = window
                        .styles()
                        .is_ok_and(|s| style::is_transparent(s.ex_style) == enable);
                    if verified {
                        let _ = window.refresh_frame(false);
                        log_info!("click-through set to {enable}");
                    } else {
                        log_error!("click-through: extended style change was not applied");
                    }
                }
                Err(e) => log_error!("click-through: extended style write failed: {e}"),
            }
        }
        self.click_through_os = enable;
    }

    /// Keeps the window above all normal windows, or returns it to the
    /// regular z-order.
    pub fn set_topmost(&mut self, topmost: bool) {
        self.ensure_valid();
        let Some(window) = self.window.as_deref().filter(|_| self.initialized) else {
            log_warn!("topmost: not initialized, ignoring request");
            return;
        };

        let currently = match window.styles() {
            Ok(styles) => style::is_topmost(styles.ex_style),
            Err(e) => {
                log_warn!("topmost: style read failed: {e}");
                return;
            }
        };
        if topmost == self.topmost_active && topmost == currently {
            return;
        }

        let order = if topmost {
            ZOrder::Topmost
        } else {
            ZOrder::NotTopmost
        };
        if let Err(e) = window.set_z_order(order) {
            log_error!("topmost: z-order change failed: {e}");
            return;
        }
        let verified = window
            .styles()
            .is_ok_and(|s| style::is_topmost(s.ex_style) == topmost);
        if !verified {
            log_error!("topmost: z-order change is not reflected in the window state");
            return;
        }

        self.topmost_active = topmost;
        log_info!("topmost set to {topmost}");
    }

    /// Extends the compositor frame across the client area so the
    /// host's alpha output composites against what is behind the
    /// window.
    pub fn set_dwm_transparency(&mut self, enable: bool) {
        self.ensure_valid();
        let Some(window) = self.window.as_deref().filter(|_| self.initialized) else {
            log_warn!("dwm transparency: not initialized, ignoring request");
            return;
        };
        if enable == self.dwm_active {
            return;
        }

        if let Err(e) = window.set_dwm_extended(enable) {
            log_error!("dwm transparency: frame extension failed: {e}");
        }
        window.invalidate();
        self.dwm_active = enable;
        log_info!("DWM transparency set to {enable}");
    }

    /// Applies the common overlay toggles in one call.
    ///
    /// Order matters: the frame goes first so the compositor change
    /// applies to the final client area, input changes last.
    pub fn configure(&mut self, dwm: bool, borderless: bool, click_through: bool, topmost: bool) {
        self.enable_borderless(borderless);
        self.set_dwm_transparency(dwm);
        self.enable_click_through(click_through);
        self.set_topmost(topmost);
    }

    /// Puts the window back the way the host found it.
    ///
    /// Hit-testing is switched off first so the scheduler cannot undo
    /// the restoration on the next tick. Each toggle is restored
    /// independently; one failing does not stop the others.
    pub fn restore_defaults(&mut self) {
        log_info!("restoring default window settings");
        if !self.window_alive() {
            log_warn!("restore: window missing or dead, resetting internal flags only");
            self.borderless_active = false;
            self.click_through_os = false;
            self.topmost_active = false;
            self.dwm_active = false;
            self.hit_test_enabled = false;
            return;
        }

        self.hit_test_enabled = false;
        let Some(window) = self.window.as_deref() else {
            return;
        };
        let mut restored = false;

        // Extended style first: input behavior is the most visible
        // thing to get stuck.
        match self.baseline {
            Some(baseline) => {
                let target = baseline.styles.ex_style;
                if window.styles().is_ok_and(|s| s.ex_style != target) {
                    match write_ex_style_checked(window, target) {
                        Ok(()) => restored = true,
                        Err(e) => log_error!("restore: extended style restore failed: {e}"),
                    }
                }
            }
            None => {
                if self.click_through_os
                    && let Ok(styles) = window.styles()
                {
                    let new_ex =
                        style::strip_layered(style::strip_transparent(styles.ex_style));
                    if new_ex != styles.ex_style {
                        match write_ex_style_checked(window, new_ex) {
                            Ok(()) => restored = true,
                            Err(e) => log_error!("restore: extended style restore failed: {e}"),
                        }
                    }
                }
            }
        }
        self.click_through_os = window
            .styles()
            .is_ok_and(|s| style::is_transparent(s.ex_style));

        if self.dwm_active {
            if let Err(e) = window.set_dwm_extended(false) {
                log_error!("restore: disabling frame extension failed: {e}");
            }
            self.dwm_active = false;
            restored = true;
        }

        if self.borderless_active {
            // The flag clears only once the frame verifiably came back,
            // so a dropped write keeps reporting the window borderless.
            let target = match (self.baseline, window.styles()) {
                (Some(baseline), _) => Some(baseline.styles.style),
                (None, Ok(styles)) => Some(style::with_standard_frame(styles.style)),
                (None, Err(e)) => {
                    log_warn!("restore: style read failed: {e}");
                    None
                }
            };
            if let Some(target) = target {
                if window.styles().is_ok_and(|s| s.style == target) {
                    self.borderless_active = false;
                } else {
                    match write_style_checked(window, target) {
                        Ok(()) => {
                            restored = true;
                            self.borderless_active = false;
                        }
                        Err(e) => log_error!("restore: style restore failed: {e}"),
                    }
                }
            }
        }

        if self.topmost_active {
            if let Err(e) = window.set_z_order(ZOrder::NotTopmost) {
                log_error!("restore: clearing topmost failed: {e}");
            }
            self.topmost_active = false;
            restored = true;
        }

        if restored {
            let _ = window.refresh_frame(false);
            window.invalidate();
            log_info!("window settings restored");
        }
    }
}
