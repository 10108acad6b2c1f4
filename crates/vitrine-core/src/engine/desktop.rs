//! Desktop-background mode: parenting the managed window beneath the
//! shell's icon layer so it renders behind the desktop icons.

use crate::window::{IconLayer, WindowSystem, ZOrder};
use crate::{log_error, log_info, log_warn, style};

use super::{OverlayEngine, write_ex_style_checked, write_style_checked};

impl<S: WindowSystem> OverlayEngine<S> {
    /// Moves the window behind the desktop icons, or restores it to a
    /// normal top-level window.
    ///
    /// While the mode is active the window is forced borderless and
    /// click-through, ordinary toggles keep their bookkeeping but the
    /// scheduler stands down, and leaving the mode restores the
    /// window's very first captured state.
    pub fn set_as_desktop_background(&mut self, enable: bool) {
        if enable {
            self.enter_desktop_background();
        } else {
            self.leave_desktop_background();
        }
    }

    fn enter_desktop_background(&mut self) {
        if !self.initialized || !self.window_alive() {
            log_info!("desktop background: window not resolved yet, initializing first");
            if !self.initialize() {
                log_error!("desktop background: initialize failed, aborting");
                return;
            }
        }

        let Some(layer) = self.locate_icon_layer_checked() else {
            return;
        };
        let Some(window) = self.window.as_deref() else {
            return;
        };

        let before = match window.styles() {
            Ok(styles) => styles,
            Err(e) => {
                log_error!("desktop background: style read failed: {e}");
                return;
            }
        };

        // Force the popup look unless a borderless toggle already did.
        if !self.borderless_active
            && let Err(e) = write_style_checked(window, style::desktop_popup(before.style))
        {
            log_error!("desktop background: style write failed: {e}");
            return;
        }
        if let Err(e) = write_ex_style_checked(window, style::with_click_through(before.ex_style)) {
            log_error!("desktop background: extended style write failed: {e}");
            if !self.borderless_active {
                let _ = window.set_style(before.style);
            }
            return;
        }
        let _ = window.refresh_frame(false);

        if let Err(e) = window.set_parent(Some(layer.handle)) {
            log_error!(
                "desktop background: reparenting under {:#x} failed: {e}",
                layer.handle
            );
            // Undo the style changes so the window is not left looking
            // like a background without being one.
            if !self.borderless_active {
                let _ = window.set_style(before.style);
            }
            let _ = window.set_ex_style(before.ex_style);
            let _ = window.refresh_frame(false);
            return;
        }

        if !layer.client.is_empty()
            && let Err(e) = window.move_to(layer.client)
        {
            log_warn!("desktop background: sizing to the icon layer failed: {e}");
        }
        let _ = window.set_z_order(ZOrder::Bottom);

        self.icon_layer = Some(layer.handle);
        self.desktop_active = true;
        self.click_through_os = true;
        log_info!(
            "window set as desktop background beneath {:#x}",
            layer.handle
        );
    }

    fn leave_desktop_background(&mut self) {
        if !self.desktop_active {
            return;
        }
        if !self.window_alive() {
            log_error!("desktop background: window died, resetting state without restore");
            self.desktop_active = false;
            self.icon_layer = None;
            self.forget_window();
            return;
        }
        let Some(window) = self.window.as_deref() else {
            return;
        };

        let target = self.true_original.and_then(|s| s.parent);
        if let Err(e) = window.set_parent(target) {
            if target.is_some() {
                // Last resort: make it a plain top-level window.
                match window.set_parent(None) {
                    Ok(()) => log_info!("desktop background: restored parent to top level"),
                    Err(e2) => log_error!("desktop background: restoring parent failed: {e2}"),
                }
            } else {
                log_error!("desktop background: restoring parent failed: {e}");
            }
        }

        match self.true_original.or(self.baseline) {
            Some(snapshot) => {
                if let Err(e) = write_style_checked(window, snapshot.styles.style) {
                    log_error!("desktop background: style restore failed: {e}");
                }
                if let Err(e) = write_ex_style_checked(window, snapshot.styles.ex_style) {
                    log_error!("desktop background: extended style restore failed: {e}");
                }
            }
            None => log_warn!("desktop background: no stored styles to restore"),
        }

        let after = window.styles().ok();
        let _ = window.refresh_frame(true);
        window.invalidate();

        self.click_through_os = after.is_some_and(|s| style::is_transparent(s.ex_style));
        self.borderless_active =
            after.is_some_and(|s| style::has_popup(s.style) && style::is_borderless(s.style));
        self.topmost_active = after.is_some_and(|s| style::is_topmost(s.ex_style));
        self.desktop_active = false;
        self.icon_layer = None;

        // The window went through a reparent; whatever the host's
        // source reports now wins on the next operation.
        self.initialized = false;
        self.baseline = None;
        log_info!("window removed from desktop background, re-initialization pending");
    }

    /// Icon-layer discovery with one retry.
    ///
    /// The shell spawns the layer on demand; right after the spawn
    /// message it can be missing or report a zero-sized client area
    /// for a moment. One repeat attempt absorbs that without making
    /// the caller call the whole operation twice.
    fn locate_icon_layer_checked(&self) -> Option<IconLayer> {
        match self.system.locate_icon_layer() {
            Ok(layer) if !layer.client.is_empty() => Some(layer),
            first => {
                match &first {
                    Ok(layer) => log_warn!(
                        "desktop background: icon layer {:#x} reports an empty client area, retrying discovery",
                        layer.handle
                    ),
                    Err(e) => {
                        log_warn!("desktop background: icon layer discovery failed ({e}), retrying")
                    }
                }
                match self.system.locate_icon_layer() {
                    Ok(layer) if !layer.client.is_empty() => Some(layer),
                    Ok(_) => {
                        log_error!(
                            "desktop background: icon layer still reports an empty client area"
                        );
                        None
                    }
                    Err(e) => {
                        log_error!("desktop background: icon layer discovery failed: {e}");
                        None
                    }
                }
            }
        }
    }
}
