//! Locating the shell's wallpaper worker window.
//!
//! Windows draws the desktop as a stack of shell-owned windows:
//! `Progman` at the bottom, a `SHELLDLL_DefView` hosting the icons, and
//! on most systems a separate `WorkerW` carrying the wallpaper. A
//! window reparented into that worker renders behind the icons.

use vitrine_core::info::WORKER_CLASS;
use vitrine_core::window::IconLayer;
use vitrine_core::{Rect, WindowError, WindowResult};

use windows::Win32::Foundation::{HWND, LPARAM, RECT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    EnumChildWindows, EnumWindows, FindWindowExW, FindWindowW, GetClientRect, SMTO_NORMAL,
    SendMessageTimeoutW,
};
use windows::core::{BOOL, w};

use crate::window::Win32Window;

/// Undocumented message that makes Progman split the wallpaper off
/// into its own `WorkerW`.
const WM_SPAWN_WORKER: u32 = 0x052C;

struct WorkerSearch {
    found: Option<(HWND, Rect)>,
}

/// Finds the worker window that sits behind the desktop icons.
///
/// Sends the worker-spawn message to Progman first, then looks for the
/// worker in two places: as a top-level sibling of Progman (the common
/// arrangement) and, failing that, as a child of Progman itself (how
/// some shell builds host it).
pub fn locate_icon_layer() -> WindowResult<IconLayer> {
    // SAFETY: plain window lookup by class name.
    let progman = unsafe { FindWindowW(w!("Progman"), None) }
        .map_err(|_| WindowError::TargetNotFound("Progman"))?;

    // Fire-and-forget; some shells already have the worker up and
    // ignore this entirely.
    let mut ignored = 0usize;
    // SAFETY: message send with a timeout, no pointers outlive the call.
    unsafe {
        let _ = SendMessageTimeoutW(
            progman,
            WM_SPAWN_WORKER,
            WPARAM(0xD),
            LPARAM(0),
            SMTO_NORMAL,
            1000,
            Some(&mut ignored),
        );
        let _ = SendMessageTimeoutW(
            progman,
            WM_SPAWN_WORKER,
            WPARAM(0),
            LPARAM(0),
            SMTO_NORMAL,
            1000,
            Some(&mut ignored),
        );
    }

    let mut search = WorkerSearch { found: None };

    // SAFETY: the search struct outlives the synchronous enumeration.
    // Stopping early makes EnumWindows report failure, so its return
    // value means nothing here; the struct carries the outcome.
    unsafe {
        let _ = EnumWindows(
            Some(worker_callback),
            LPARAM(&mut search as *mut WorkerSearch as isize),
        );
    }

    if search.found.is_none() {
        vitrine_core::log_debug!("no top-level worker window, checking under Progman");
        // SAFETY: same contract as the top-level pass.
        unsafe {
            let _ = EnumChildWindows(
                Some(progman),
                Some(worker_callback),
                LPARAM(&mut search as *mut WorkerSearch as isize),
            );
        }
    }

    match search.found {
        Some((handle, client)) => {
            vitrine_core::log_debug!(
                "icon layer worker {:#x}, client {}x{}",
                handle.0 as usize,
                client.width,
                client.height
            );
            Ok(IconLayer {
                handle: handle.0 as usize,
                client,
            })
        }
        None => Err(WindowError::TargetNotFound("desktop worker window")),
    }
}

/// Accepts the first visible `WorkerW` that does not host the icon
/// view and has a non-degenerate client area.
unsafe extern "system" fn worker_callback(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: lparam is the WorkerSearch pointer from locate_icon_layer.
    let search = unsafe { &mut *(lparam.0 as *mut WorkerSearch) };

    let window = Win32Window::new(hwnd);
    if window.class_name() != WORKER_CLASS {
        return BOOL(1);
    }

    // The worker hosting SHELLDLL_DefView draws the icons themselves.
    // The one we want is the bare wallpaper worker behind it.
    // SAFETY: read-only child lookup.
    if unsafe { FindWindowExW(Some(hwnd), None, w!("SHELLDLL_DefView"), None) }.is_ok() {
        return BOOL(1);
    }

    if !window.is_visible() {
        return BOOL(1);
    }

    match client_rect(hwnd) {
        Some(client) if !client.is_empty() => {
            search.found = Some((hwnd, client));
            BOOL(0)
        }
        _ => BOOL(1),
    }
}

fn client_rect(hwnd: HWND) -> Option<Rect> {
    let mut rect = RECT::default();
    // SAFETY: hwnd comes straight from the enumeration.
    unsafe { GetClientRect(hwnd, &mut rect) }.ok()?;
    Some(Rect::new(
        rect.left,
        rect.top,
        rect.right - rect.left,
        rect.bottom - rect.top,
    ))
}
