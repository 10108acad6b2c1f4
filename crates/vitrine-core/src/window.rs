use crate::info::WindowFacts;
use crate::{Point, Rect, WindowResult};

/// Raw OS window handle carried as a pointer-sized integer.
///
/// Core never dereferences this; platform crates convert it back into
/// their native handle type.
pub type RawHandle = usize;

/// The two style words every Win32 window carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StylePair {
    pub style: isize,
    pub ex_style: isize,
}

/// A captured window configuration used for later restoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSnapshot {
    pub styles: StylePair,
    /// Parent at capture time. `None` for a top-level window.
    pub parent: Option<RawHandle>,
}

/// Z-order positions the engine moves its window between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZOrder {
    Topmost,
    NotTopmost,
    Bottom,
}

/// Platform-agnostic handle to one live window.
///
/// Each platform crate provides its own implementation. Implementations
/// re-validate the underlying handle on every call and report a dead
/// window as [`WindowError::InvalidHandle`](crate::WindowError) rather
/// than touching a recycled handle.
pub trait WindowOps {
    /// The raw handle value this window wraps.
    fn raw(&self) -> RawHandle;

    /// Whether the OS still knows this handle.
    fn is_alive(&self) -> bool;

    /// The window's title bar text, empty when it has none.
    fn title(&self) -> WindowResult<String>;

    /// Reads both style words.
    fn styles(&self) -> WindowResult<StylePair>;

    /// Writes the primary style word.
    fn set_style(&self, style: isize) -> WindowResult<()>;

    /// Writes the extended style word.
    fn set_ex_style(&self, ex_style: isize) -> WindowResult<()>;

    /// Current parent window, `None` when top-level.
    fn parent(&self) -> Option<RawHandle>;

    /// Reparents the window. `None` makes it top-level again.
    fn set_parent(&self, parent: Option<RawHandle>) -> WindowResult<()>;

    /// Outer bounds in screen coordinates.
    fn rect(&self) -> WindowResult<Rect>;

    /// Moves and resizes the window, repainting it.
    fn move_to(&self, rect: Rect) -> WindowResult<()>;

    /// Moves the window within the z-order without touching its bounds.
    fn set_z_order(&self, order: ZOrder) -> WindowResult<()>;

    /// Tells the OS the frame changed so the non-client area is
    /// recalculated. Optionally shows the window in the same call.
    fn refresh_frame(&self, show: bool) -> WindowResult<()>;

    /// Extends the compositor frame into the whole client area
    /// (`true`) or resets it to the window frame only (`false`).
    fn set_dwm_extended(&self, extend: bool) -> WindowResult<()>;

    /// Forces a repaint of the client area.
    fn invalidate(&self);
}

/// The desktop icon layer a window can be reparented beneath.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconLayer {
    pub handle: RawHandle,
    /// Client bounds of the layer host at discovery time.
    pub client: Rect,
}

/// Process-wide window services a platform crate provides.
pub trait WindowSystem {
    /// Wraps a raw handle, failing when the OS no longer knows it.
    fn attach(&self, handle: RawHandle) -> WindowResult<Box<dyn WindowOps>>;

    /// The window currently holding foreground focus, if any.
    fn active_window(&self) -> Option<RawHandle>;

    /// Cursor position in screen coordinates.
    fn cursor_pos(&self) -> WindowResult<Point>;

    /// Finds the shell surface that hosts the desktop icons, spawning
    /// it first when the shell has not created one yet.
    fn locate_icon_layer(&self) -> WindowResult<IconLayer>;

    /// Gathers raw facts about every top-level window. Filtering is
    /// the caller's concern, see [`crate::info::should_list`].
    fn enumerate(&self) -> WindowResult<Vec<WindowFacts>>;
}

/// Supplies the handle of the window the host wants managed.
///
/// Game hosts hand out their main viewport window here; the engine
/// re-asks on every liveness check so a recreated window is picked up
/// automatically.
pub trait WindowSource {
    fn native_handle(&self) -> Option<RawHandle>;
}

/// Per-frame work driven by the host's main loop.
///
/// The host decides the cadence and whether to keep ticking while the
/// simulation is paused; implementations only assume calls are
/// single-threaded.
pub trait Tickable {
    fn tick(&mut self, delta_seconds: f32);
}
