//! Win32 window style words and the transforms applied to them.
//!
//! Styles are kept as raw pointer-sized integers exactly as
//! `GetWindowLongPtrW` returns them. The bit constants mirror the Win32
//! headers because this crate stays platform-agnostic; the platform crate
//! pins them against the real SDK values in its own tests.

/// Title bar. `WS_CAPTION`.
pub const CAPTION: isize = 0x00C0_0000;
/// Sizing border. `WS_THICKFRAME`.
pub const THICKFRAME: isize = 0x0004_0000;
/// System menu box. `WS_SYSMENU`.
pub const SYSMENU: isize = 0x0008_0000;
/// Popup window, no frame. `WS_POPUP`.
pub const POPUP: isize = 0x8000_0000_u32 as isize;
/// The standard resizable frame set. `WS_OVERLAPPEDWINDOW`.
pub const OVERLAPPED_WINDOW: isize = 0x00CF_0000;

/// Layered window, required for per-pixel alpha. `WS_EX_LAYERED`.
pub const EX_LAYERED: isize = 0x0008_0000;
/// Input passes through to the window below. `WS_EX_TRANSPARENT`.
pub const EX_TRANSPARENT: isize = 0x0000_0020;
/// Above all non-topmost windows. `WS_EX_TOPMOST`.
pub const EX_TOPMOST: isize = 0x0000_0008;

/// Strips the standard frame and turns the window into a bare popup.
pub fn without_standard_frame(style: isize) -> isize {
    (style & !OVERLAPPED_WINDOW) | POPUP
}

/// Re-adds the standard resizable frame.
///
/// Used when restoring a window whose pre-borderless style was never
/// captured; the result is a generic framed window rather than the
/// original one.
pub fn with_standard_frame(style: isize) -> isize {
    style | OVERLAPPED_WINDOW
}

/// The style a window needs while parented to the desktop icon layer:
/// caption, sizing border and system menu removed, popup set.
pub fn desktop_popup(style: isize) -> isize {
    (style & !(CAPTION | THICKFRAME | SYSMENU)) | POPUP
}

/// Adds the extended-style bits that make clicks fall through.
pub fn with_click_through(ex_style: isize) -> isize {
    ex_style | EX_LAYERED | EX_TRANSPARENT
}

/// Clears the input pass-through bit, leaving `WS_EX_LAYERED` alone.
pub fn strip_transparent(ex_style: isize) -> isize {
    ex_style & !EX_TRANSPARENT
}

/// Clears the layered bit.
pub fn strip_layered(ex_style: isize) -> isize {
    ex_style & !EX_LAYERED
}

/// A window with neither caption nor sizing border reads as borderless,
/// regardless of how it got that way.
pub fn is_borderless(style: isize) -> bool {
    (style & CAPTION) == 0 && (style & THICKFRAME) == 0
}

pub fn has_popup(style: isize) -> bool {
    (style & POPUP) != 0
}

pub fn is_transparent(ex_style: isize) -> bool {
    (ex_style & EX_TRANSPARENT) != 0
}

pub fn is_layered(ex_style: isize) -> bool {
    (ex_style & EX_LAYERED) != 0
}

pub fn is_topmost(ex_style: isize) -> bool {
    (ex_style & EX_TOPMOST) != 0
}
