use vitrine_core::WindowResult;
use vitrine_core::info::WindowFacts;
use vitrine_core::window::WindowOps;

use windows::Win32::Foundation::{HWND, LPARAM};
use windows::Win32::UI::WindowsAndMessaging::EnumWindows;
use windows::core::BOOL;

use crate::dwm;
use crate::window::{Win32Window, map_os_error};

/// Gathers raw facts about every top-level window.
///
/// Wraps the Win32 `EnumWindows` API, which walks the top-level
/// windows and hands each one to a callback. No filtering happens
/// here; the listing policy lives in
/// [`vitrine_core::info::should_list`] where it can be tested.
pub fn gather_facts() -> WindowResult<Vec<WindowFacts>> {
    let mut facts: Vec<WindowFacts> = Vec::new();

    // SAFETY: the callback receives a pointer to `facts` through the
    // LPARAM user-data slot and writes only through it. EnumWindows
    // runs synchronously, so the Vec outlives every callback
    // invocation.
    unsafe {
        EnumWindows(
            Some(enum_window_callback),
            LPARAM(&mut facts as *mut _ as isize),
        )
        .map_err(|e| map_os_error("EnumWindows", e))?;
    }

    Ok(facts)
}

/// Records one `WindowFacts` entry per enumerated window. Returning
/// `TRUE` keeps the enumeration going.
unsafe extern "system" fn enum_window_callback(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: lparam is the Vec pointer installed by gather_facts().
    let facts = unsafe { &mut *(lparam.0 as *mut Vec<WindowFacts>) };

    let window = Win32Window::new(hwnd);
    facts.push(WindowFacts {
        handle: window.raw(),
        title: window.title().unwrap_or_default(),
        class: window.class_name(),
        rect: window.rect().unwrap_or_default(),
        visible: window.is_visible(),
        minimized: window.is_minimized(),
        cloaked: dwm::is_cloaked(hwnd),
    });

    BOOL(1) // TRUE, continue enumerating
}
