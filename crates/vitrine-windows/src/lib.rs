/// Shell worker window discovery.
#[cfg(target_os = "windows")]
pub mod desktop;

/// Compositor frame extension and cloak queries.
#[cfg(target_os = "windows")]
pub mod dwm;

/// Win32 window enumeration.
#[cfg(target_os = "windows")]
pub mod enumerate;

/// Host-facing facade owning the engine.
pub mod manager;

/// Process-wide Win32 services.
#[cfg(target_os = "windows")]
pub mod system;

/// Stub services for platforms without Win32.
pub mod unsupported;

/// Window type wrapping a Win32 `HWND`.
#[cfg(target_os = "windows")]
pub mod window;

/// The window system for the compilation target.
#[cfg(target_os = "windows")]
pub type NativeSystem = system::Win32System;

/// The window system for the compilation target.
#[cfg(not(target_os = "windows"))]
pub type NativeSystem = unsupported::UnsupportedSystem;

pub use manager::OverlayManager;
#[cfg(target_os = "windows")]
pub use system::Win32System;
#[cfg(target_os = "windows")]
pub use window::Win32Window;
