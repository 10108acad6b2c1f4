use vitrine_core::window::{RawHandle, StylePair, WindowOps, ZOrder};
use vitrine_core::{Rect, WindowError, WindowResult};

use windows::Win32::Foundation::{
    ERROR_INVALID_WINDOW_HANDLE, GetLastError, HWND, RECT, SetLastError, WIN32_ERROR,
};
use windows::Win32::Graphics::Gdi::{InvalidateRect, UpdateWindow};
use windows::Win32::UI::WindowsAndMessaging::{
    GWL_EXSTYLE, GWL_STYLE, GetParent, GetWindowLongPtrW, GetWindowRect, GetWindowTextLengthW,
    GetWindowTextW, HWND_BOTTOM, HWND_NOTOPMOST, HWND_TOPMOST, IsIconic, IsWindow, IsWindowVisible,
    RealGetWindowClassW, SWP_FRAMECHANGED, SWP_NOACTIVATE, SWP_NOMOVE, SWP_NOSIZE, SWP_NOZORDER,
    SWP_SHOWWINDOW, SetParent, SetWindowLongPtrW, SetWindowPos, WINDOW_LONG_PTR_INDEX,
};
use windows::core::HRESULT;

use crate::dwm;

/// Maps a failed OS call to the engine's error type, folding the
/// dead-handle code into its own variant so callers can react to it.
pub(crate) fn map_os_error(context: &'static str, error: windows::core::Error) -> WindowError {
    if error.code() == HRESULT::from_win32(ERROR_INVALID_WINDOW_HANDLE.0) {
        WindowError::InvalidHandle
    } else {
        WindowError::Os {
            code: error.code().0 as u32,
            context,
        }
    }
}

/// Captures the thread's last OS error for calls that report failure
/// out of band.
pub(crate) fn last_os_error(context: &'static str) -> WindowError {
    // SAFETY: GetLastError reads thread-local state.
    let code = unsafe { GetLastError() };
    if code == ERROR_INVALID_WINDOW_HANDLE {
        WindowError::InvalidHandle
    } else {
        WindowError::Os {
            code: code.0,
            context,
        }
    }
}

/// A window on the Windows platform, wrapping a Win32 `HWND`.
///
/// `HWND` values are recycled by the OS, so every operation checks the
/// handle still names a window before touching it.
#[derive(Debug, Clone, Copy)]
pub struct Win32Window {
    hwnd: HWND,
}

impl Win32Window {
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    /// Creates a window from a raw handle value (pointer-sized integer).
    ///
    /// This allows callers to construct one without depending on the
    /// `windows` crate directly.
    pub fn from_raw(handle: RawHandle) -> Self {
        Self {
            hwnd: HWND(handle as *mut _),
        }
    }

    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    fn ensure_alive(&self) -> WindowResult<()> {
        if self.is_alive() {
            Ok(())
        } else {
            Err(WindowError::InvalidHandle)
        }
    }

    /// Returns the window class name.
    pub fn class_name(&self) -> String {
        // SAFETY: RealGetWindowClassW reads the window class name.
        // 256 is the maximum class name length in Win32.
        unsafe {
            let mut buffer = [0u16; 256];
            let length = RealGetWindowClassW(self.hwnd, &mut buffer);
            String::from_utf16_lossy(&buffer[..length as usize])
        }
    }

    pub fn is_visible(&self) -> bool {
        // SAFETY: IsWindowVisible is a simple query that returns a BOOL.
        unsafe { IsWindowVisible(self.hwnd).as_bool() }
    }

    pub fn is_minimized(&self) -> bool {
        // SAFETY: IsIconic is a simple query that returns a BOOL.
        unsafe { IsIconic(self.hwnd).as_bool() }
    }

    fn style_word(&self, index: WINDOW_LONG_PTR_INDEX) -> WindowResult<isize> {
        self.ensure_alive()?;
        // SAFETY: GetWindowLongPtrW reads a style word from a window we
        // just checked is alive.
        Ok(unsafe { GetWindowLongPtrW(self.hwnd, index) })
    }

    fn set_style_word(&self, index: WINDOW_LONG_PTR_INDEX, value: isize) -> WindowResult<()> {
        self.ensure_alive()?;
        // SetWindowLongPtrW legitimately returns 0 when the previous
        // word was 0, so the last error has to be cleared first to tell
        // that apart from a failure.
        //
        // SAFETY: writing a style word to a live window.
        unsafe {
            SetLastError(WIN32_ERROR(0));
            let previous = SetWindowLongPtrW(self.hwnd, index, value);
            if previous == 0 && GetLastError() != WIN32_ERROR(0) {
                return Err(last_os_error("SetWindowLongPtrW"));
            }
        }
        Ok(())
    }
}

impl WindowOps for Win32Window {
    fn raw(&self) -> RawHandle {
        self.hwnd.0 as usize
    }

    fn is_alive(&self) -> bool {
        // SAFETY: IsWindow accepts any handle value and reports whether
        // it currently names a window.
        unsafe { IsWindow(Some(self.hwnd)).as_bool() }
    }

    fn title(&self) -> WindowResult<String> {
        // SAFETY: GetWindowTextLengthW and GetWindowTextW are safe to
        // call with a valid HWND. They read window text without
        // modifying state.
        unsafe {
            let length = GetWindowTextLengthW(self.hwnd);
            if length == 0 {
                return Ok(String::new());
            }

            // +1 for the null terminator that Windows requires
            let mut buffer = vec![0u16; (length + 1) as usize];
            let copied = GetWindowTextW(self.hwnd, &mut buffer);
            Ok(String::from_utf16_lossy(&buffer[..copied as usize]))
        }
    }

    fn styles(&self) -> WindowResult<StylePair> {
        Ok(StylePair {
            style: self.style_word(GWL_STYLE)?,
            ex_style: self.style_word(GWL_EXSTYLE)?,
        })
    }

    fn set_style(&self, style: isize) -> WindowResult<()> {
        self.set_style_word(GWL_STYLE, style)
    }

    fn set_ex_style(&self, ex_style: isize) -> WindowResult<()> {
        self.set_style_word(GWL_EXSTYLE, ex_style)
    }

    fn parent(&self) -> Option<RawHandle> {
        // SAFETY: GetParent is a query; it errors for top-level windows,
        // which is exactly the None case.
        unsafe { GetParent(self.hwnd) }
            .ok()
            .map(|parent| parent.0 as usize)
    }

    fn set_parent(&self, parent: Option<RawHandle>) -> WindowResult<()> {
        self.ensure_alive()?;
        let target = parent.map(|handle| HWND(handle as *mut _));
        // SAFETY: SetParent with a live child handle. A None target
        // makes the window top-level again.
        unsafe { SetParent(self.hwnd, target) }
            .map_err(|e| map_os_error("SetParent", e))?;
        Ok(())
    }

    fn rect(&self) -> WindowResult<Rect> {
        let mut rect = RECT::default();
        // SAFETY: GetWindowRect writes the outer bounds into rect.
        unsafe { GetWindowRect(self.hwnd, &mut rect) }
            .map_err(|e| map_os_error("GetWindowRect", e))?;
        Ok(Rect::new(
            rect.left,
            rect.top,
            rect.right - rect.left,
            rect.bottom - rect.top,
        ))
    }

    fn move_to(&self, rect: Rect) -> WindowResult<()> {
        // SAFETY: SetWindowPos with a valid HWND is safe.
        unsafe {
            SetWindowPos(
                self.hwnd,
                None,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                SWP_NOZORDER | SWP_NOACTIVATE | SWP_FRAMECHANGED,
            )
        }
        .map_err(|e| map_os_error("SetWindowPos", e))
    }

    fn set_z_order(&self, order: ZOrder) -> WindowResult<()> {
        let (insert_after, flags) = match order {
            ZOrder::Topmost => (HWND_TOPMOST, SWP_NOMOVE | SWP_NOSIZE),
            ZOrder::NotTopmost => (HWND_NOTOPMOST, SWP_NOMOVE | SWP_NOSIZE),
            ZOrder::Bottom => (HWND_BOTTOM, SWP_NOMOVE | SWP_NOSIZE | SWP_NOACTIVATE),
        };
        // SAFETY: SetWindowPos with a valid HWND is safe.
        unsafe { SetWindowPos(self.hwnd, Some(insert_after), 0, 0, 0, 0, flags) }
            .map_err(|e| map_os_error("SetWindowPos", e))
    }

    fn refresh_frame(&self, show: bool) -> WindowResult<()> {
        let mut flags = SWP_FRAMECHANGED | SWP_NOMOVE | SWP_NOSIZE | SWP_NOZORDER | SWP_NOACTIVATE;
        if show {
            flags |= SWP_SHOWWINDOW;
        }
        // SAFETY: SetWindowPos with a valid HWND is safe.
        unsafe { SetWindowPos(self.hwnd, None, 0, 0, 0, 0, flags) }
            .map_err(|e| map_os_error("SetWindowPos", e))
    }

    fn set_dwm_extended(&self, extend: bool) -> WindowResult<()> {
        dwm::extend_frame(self.hwnd, extend)
    }

    fn invalidate(&self) {
        // SAFETY: InvalidateRect with a null region marks the whole
        // client area dirty; UpdateWindow forces the repaint now.
        unsafe {
            let _ = InvalidateRect(Some(self.hwnd), None, true);
            let _ = UpdateWindow(self.hwnd);
        }
    }
}
