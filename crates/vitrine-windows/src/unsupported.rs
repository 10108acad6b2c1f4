//! Stub window system for platforms without Win32.

use vitrine_core::info::WindowFacts;
use vitrine_core::window::{IconLayer, RawHandle, WindowOps, WindowSystem};
use vitrine_core::{Point, WindowError, WindowResult};

/// Window system that fails every operation.
///
/// Lets hosts on other platforms construct a manager and call it; every
/// state change degrades to a logged no-op through the usual error
/// path.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedSystem;

impl WindowSystem for UnsupportedSystem {
    fn attach(&self, _handle: RawHandle) -> WindowResult<Box<dyn WindowOps>> {
        Err(WindowError::Unsupported)
    }

    fn active_window(&self) -> Option<RawHandle> {
        None
    }

    fn cursor_pos(&self) -> WindowResult<Point> {
        Err(WindowError::Unsupported)
    }

    fn locate_icon_layer(&self) -> WindowResult<IconLayer> {
        Err(WindowError::Unsupported)
    }

    fn enumerate(&self) -> WindowResult<Vec<WindowFacts>> {
        Err(WindowError::Unsupported)
    }
}
