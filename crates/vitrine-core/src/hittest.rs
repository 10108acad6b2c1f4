//! Cursor hit-testing vocabulary.
//!
//! The engine never inspects the host's scene or UI itself. It asks two
//! probes, one for 3D geometry and one for widgets, and combines their
//! answers into the per-tick opaque flag. This module holds the probe
//! traits and the widget classification the UI probe is expected to
//! apply.

use serde::{Deserialize, Serialize};

use crate::Point;

/// Raycast channel identifier handed through to the scene probe.
///
/// Opaque to the engine. By convention channel 0 is the host's default
/// visibility channel.
pub type TraceChannel = u32;

/// How the engine decides whether the cursor is over opaque content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitTestMode {
    /// No detection. The window always counts as opaque.
    #[default]
    None,
    /// Raycast into the scene, then consult the widget tree.
    GameRaycast,
}

/// Answers whether scene geometry blocks the cursor at a point.
///
/// The point is in window-local coordinates. Implementations that have
/// no scene to query should return `false`.
pub trait SceneProbe {
    fn blocking_at(&self, point: Point, channel: TraceChannel) -> bool;
}

/// Answers whether an interactive widget sits under the cursor.
///
/// Implementations typically resolve the widget path under the point
/// and classify its deepest widget with [`WidgetHit::blocks`].
pub trait WidgetProbe {
    fn blocking_at(&self, point: Point) -> bool;
}

/// Broad role of a widget found under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    /// The OS-level window surface itself.
    Window,
    /// The root layer that hosts the game viewport.
    RootLayer,
    /// The viewport rendering the scene.
    Viewport,
    /// A decorative border container.
    Border,
    /// A stacking container.
    Overlay,
    /// An aspect-scaling container.
    ScaleBox,
    /// A free-placement panel.
    Canvas,
    /// The root of a user-authored widget.
    ObjectRoot,
    /// Anything else: buttons, text, images, custom widgets.
    Other,
}

/// The deepest widget found under the cursor, as reported by the host.
#[derive(Debug, Clone, Copy)]
pub struct WidgetHit {
    pub kind: WidgetKind,
    /// Number of widgets in the path from the window down to this one.
    pub path_len: usize,
    pub visible: bool,
    pub enabled: bool,
}

impl WidgetHit {
    /// Whether this widget should capture the click.
    ///
    /// Invisible or disabled widgets never block. Structural widgets,
    /// the containers every UI tree starts with, never block either;
    /// shallow wrapper containers are treated as structural because a
    /// bare viewport still reports them under the cursor.
    pub fn blocks(&self) -> bool {
        self.visible && self.enabled && !self.is_structural()
    }

    fn is_structural(&self) -> bool {
        match self.kind {
            WidgetKind::Window | WidgetKind::RootLayer | WidgetKind::Viewport => true,
            WidgetKind::Border | WidgetKind::Overlay | WidgetKind::ScaleBox | WidgetKind::Canvas => {
                self.path_len <= 2
            }
            WidgetKind::ObjectRoot => self.path_len <= 1,
            WidgetKind::Other => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(kind: WidgetKind, path_len: usize) -> WidgetHit {
        WidgetHit {
            kind,
            path_len,
            visible: true,
            enabled: true,
        }
    }

    #[test]
    fn surface_widgets_never_block() {
        assert!(!hit(WidgetKind::Window, 1).blocks());
        assert!(!hit(WidgetKind::RootLayer, 5).blocks());
        assert!(!hit(WidgetKind::Viewport, 9).blocks());
    }

    #[test]
    fn wrapper_containers_block_only_when_deep() {
        assert!(!hit(WidgetKind::Border, 2).blocks());
        assert!(hit(WidgetKind::Border, 3).blocks());
        assert!(!hit(WidgetKind::Overlay, 1).blocks());
        assert!(hit(WidgetKind::Canvas, 4).blocks());
        assert!(!hit(WidgetKind::ScaleBox, 2).blocks());
    }

    #[test]
    fn object_root_blocks_below_the_window() {
        assert!(!hit(WidgetKind::ObjectRoot, 1).blocks());
        assert!(hit(WidgetKind::ObjectRoot, 2).blocks());
    }

    #[test]
    fn interactive_widgets_block_at_any_depth() {
        assert!(hit(WidgetKind::Other, 1).blocks());
        assert!(hit(WidgetKind::Other, 12).blocks());
    }

    #[test]
    fn invisible_or_disabled_widgets_never_block() {
        let mut h = hit(WidgetKind::Other, 3);
        h.visible = false;
        assert!(!h.blocks());

        let mut h = hit(WidgetKind::Other, 3);
        h.enabled = false;
        assert!(!h.blocks());
    }

    #[test]
    fn mode_parses_snake_case() {
        #[derive(Deserialize)]
        struct Wrap {
            mode: HitTestMode,
        }

        let wrap: Wrap = toml::from_str("mode = \"game_raycast\"").unwrap();
        assert_eq!(wrap.mode, HitTestMode::GameRaycast);

        let wrap: Wrap = toml::from_str("mode = \"none\"").unwrap();
        assert_eq!(wrap.mode, HitTestMode::None);
    }
}
