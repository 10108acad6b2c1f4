pub mod config;
pub mod engine;
pub mod error;
pub mod hittest;
pub mod info;
pub mod log;
pub mod rect;
pub mod style;
pub mod window;

pub use config::Config;
pub use engine::OverlayEngine;
pub use error::{WindowError, WindowResult};
pub use hittest::{HitTestMode, SceneProbe, TraceChannel, WidgetProbe};
pub use info::{OtherWindowInfo, WindowInfo};
pub use rect::{Point, Rect};
pub use window::{RawHandle, Tickable, WindowOps, WindowSource, WindowSystem};
