use std::mem;

use vitrine_core::WindowResult;

use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Dwm::{
    DWMWA_CLOAKED, DwmExtendFrameIntoClientArea, DwmGetWindowAttribute,
};
use windows::Win32::UI::Controls::MARGINS;

use crate::window::map_os_error;

/// Extends the compositor frame into the whole client area, or resets
/// it to the plain window frame.
///
/// A margin of -1 on every side is the documented "sheet of glass"
/// request. With the frame extended everywhere, per-pixel alpha in the
/// client area composites against whatever is behind the window.
pub fn extend_frame(hwnd: HWND, extend: bool) -> WindowResult<()> {
    let width = if extend { -1 } else { 0 };
    let margins = MARGINS {
        cxLeftWidth: width,
        cxRightWidth: width,
        cyTopHeight: width,
        cyBottomHeight: width,
    };

    // SAFETY: DwmExtendFrameIntoClientArea reads the margins struct.
    unsafe { DwmExtendFrameIntoClientArea(hwnd, &margins) }
        .map_err(|e| map_os_error("DwmExtendFrameIntoClientArea", e))
}

/// Whether the compositor has cloaked this window: nominally visible
/// but not actually shown, as with suspended store apps or windows on
/// another virtual desktop.
pub fn is_cloaked(hwnd: HWND) -> bool {
    let mut cloaked: u32 = 0;
    // SAFETY: DwmGetWindowAttribute writes a DWORD for DWMWA_CLOAKED.
    let result = unsafe {
        DwmGetWindowAttribute(
            hwnd,
            DWMWA_CLOAKED,
            &mut cloaked as *mut u32 as *mut _,
            mem::size_of::<u32>() as u32,
        )
    };

    result.is_ok() && cloaked != 0
}
