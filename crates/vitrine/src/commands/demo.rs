use std::thread;
use std::time::Duration;

use vitrine_core::config;
use vitrine_core::window::{RawHandle, WindowSource};
use vitrine_windows::OverlayManager;

/// Hands out the window of the console this process runs in.
struct ConsoleSource;

impl WindowSource for ConsoleSource {
    fn native_handle(&self) -> Option<RawHandle> {
        console_handle()
    }
}

#[cfg(target_os = "windows")]
fn console_handle() -> Option<RawHandle> {
    vitrine_windows::system::console_window()
}

#[cfg(not(target_os = "windows"))]
fn console_handle() -> Option<RawHandle> {
    None
}

/// Walks this console window through each overlay toggle, holding
/// every state briefly, then restores it.
pub fn execute(hold: u64) {
    let config = config::load();
    vitrine_core::log::init(&config.logging);

    let mut manager = OverlayManager::new(Box::new(ConsoleSource));
    if !manager.initialize() {
        eprintln!("Could not attach to a window. Run this from a console on Windows.");
        std::process::exit(1);
    }

    match manager.window_info() {
        Ok(info) => println!("Attached to \"{}\" (handle {})", info.title, info.handle),
        Err(e) => println!("Attached, but could not read window info: {e}"),
    }

    let pause = Duration::from_secs(hold);

    println!("Topmost on");
    manager.set_topmost(true);
    thread::sleep(pause);
    println!("Topmost off");
    manager.set_topmost(false);
    thread::sleep(pause);

    println!("Borderless on");
    manager.enable_borderless(true);
    thread::sleep(pause);
    println!("Borderless off");
    manager.enable_borderless(false);
    thread::sleep(pause);

    println!("Compositor transparency on");
    manager.set_dwm_transparency(true);
    thread::sleep(pause);
    println!("Compositor transparency off");
    manager.set_dwm_transparency(false);
    thread::sleep(pause);

    println!("Click-through on (clicks fall through to whatever is behind)");
    manager.enable_click_through(true);
    thread::sleep(pause);
    println!("Click-through off");
    manager.enable_click_through(false);

    manager.restore_defaults();
    println!("Restored.");
}
