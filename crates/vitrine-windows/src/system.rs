//! Process-wide window services backed by Win32.

use vitrine_core::info::WindowFacts;
use vitrine_core::window::{IconLayer, RawHandle, WindowOps, WindowSystem};
use vitrine_core::{Point, WindowError, WindowResult};

use windows::Win32::Foundation::POINT;
use windows::Win32::System::Console::GetConsoleWindow;
use windows::Win32::UI::WindowsAndMessaging::{GetCursorPos, GetForegroundWindow};

use crate::window::{Win32Window, map_os_error};
use crate::{desktop, enumerate};

/// The live Win32 window system.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32System;

/// The window of the console this process is attached to, if any.
pub fn console_window() -> Option<RawHandle> {
    // SAFETY: no arguments, returns null without an attached console.
    let hwnd = unsafe { GetConsoleWindow() };
    if hwnd.0.is_null() {
        None
    } else {
        Some(hwnd.0 as usize)
    }
}

impl WindowSystem for Win32System {
    fn attach(&self, handle: RawHandle) -> WindowResult<Box<dyn WindowOps>> {
        let window = Win32Window::from_raw(handle);
        if !window.is_alive() {
            return Err(WindowError::InvalidHandle);
        }
        Ok(Box::new(window))
    }

    fn active_window(&self) -> Option<RawHandle> {
        // SAFETY: no arguments, returns null when nothing has focus.
        let hwnd = unsafe { GetForegroundWindow() };
        if hwnd.0.is_null() {
            None
        } else {
            Some(hwnd.0 as usize)
        }
    }

    fn cursor_pos(&self) -> WindowResult<Point> {
        let mut point = POINT::default();
        // SAFETY: out-pointer to a stack POINT.
        unsafe { GetCursorPos(&mut point) }.map_err(|e| map_os_error("GetCursorPos", e))?;
        Ok(Point::new(point.x, point.y))
    }

    fn locate_icon_layer(&self) -> WindowResult<IconLayer> {
        desktop::locate_icon_layer()
    }

    fn enumerate(&self) -> WindowResult<Vec<WindowFacts>> {
        enumerate::gather_facts()
    }
}
