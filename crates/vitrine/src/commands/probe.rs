use vitrine_core::window::WindowSystem;
use vitrine_windows::NativeSystem;

/// Runs desktop worker discovery and reports what it found.
///
/// Useful when desktop-background mode misbehaves on a particular
/// shell build: the worker either shows up here with a sane client
/// area, or the shell arrangement is one we do not recognize.
pub fn execute() {
    let system = NativeSystem::default();
    match system.locate_icon_layer() {
        Ok(layer) => {
            println!("Worker window: 0x{:X}", layer.handle);
            println!(
                "Client area:   {} x {} at ({}, {})",
                layer.client.width, layer.client.height, layer.client.x, layer.client.y
            );
        }
        Err(e) => {
            eprintln!("Discovery failed: {e}");
            std::process::exit(1);
        }
    }
}
