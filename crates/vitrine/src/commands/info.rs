use vitrine_core::window::{RawHandle, WindowSource};
use vitrine_windows::OverlayManager;

/// Source with no opinion, so the engine falls back to the window
/// holding foreground focus.
struct ForegroundSource;

impl WindowSource for ForegroundSource {
    fn native_handle(&self) -> Option<RawHandle> {
        None
    }
}

/// Shows the foreground window the way the engine snapshots it.
pub fn execute() {
    let mut manager = OverlayManager::new(Box::new(ForegroundSource));
    match manager.window_info() {
        Ok(info) => {
            println!("Title:    {}", info.title);
            println!("Handle:   {}", info.handle);
            println!("Position: {}, {}", info.x, info.y);
            println!("Size:     {} x {}", info.width, info.height);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
