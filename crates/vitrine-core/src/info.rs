//! Window descriptions handed to hosts and the listing policy behind
//! them.

use serde::{Deserialize, Serialize};

use crate::Rect;
use crate::window::RawHandle;

/// Class name of the shell's program manager window.
pub const PROGMAN_CLASS: &str = "Progman";
/// Class name of the shell's worker windows, including the icon layer.
pub const WORKER_CLASS: &str = "WorkerW";

/// Raw facts about one top-level window, as gathered by the platform.
///
/// No filtering happens at gather time; [`should_list`] decides what a
/// caller gets to see.
#[derive(Debug, Clone)]
pub struct WindowFacts {
    pub handle: RawHandle,
    pub title: String,
    pub class: String,
    pub rect: Rect,
    pub visible: bool,
    pub minimized: bool,
    pub cloaked: bool,
}

/// A foreign top-level window as reported to the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtherWindowInfo {
    pub title: String,
    /// Handle value in decimal. Kept as a string so consumers that
    /// mangle large integers (JSON tooling, spreadsheets) stay exact.
    pub handle: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl OtherWindowInfo {
    pub fn from_facts(facts: &WindowFacts) -> Self {
        Self {
            title: facts.title.clone(),
            handle: facts.handle.to_string(),
            x: facts.rect.x,
            y: facts.rect.y,
            width: facts.rect.width,
            height: facts.rect.height,
        }
    }
}

/// The managed window's own geometry snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowInfo {
    pub title: String,
    pub handle: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Decides whether a window belongs in the listing handed to hosts.
///
/// Excludes the caller's own window, anything invisible, untitled or
/// minimized, the shell's desktop host windows, DWM-cloaked surfaces
/// (backgrounded UWP apps), and degenerate zero-area windows.
pub fn should_list(facts: &WindowFacts, own: Option<RawHandle>) -> bool {
    if own == Some(facts.handle) {
        return false;
    }
    if !facts.visible {
        return false;
    }
    if facts.title.is_empty() {
        return false;
    }
    if facts.minimized {
        return false;
    }
    if facts.class == PROGMAN_CLASS || facts.class == WORKER_CLASS {
        return false;
    }
    if facts.cloaked {
        return false;
    }
    !facts.rect.is_empty()
}
