/// A rectangle in screen coordinates, as origin plus extent.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns whether the rectangle encloses no pixels.
    ///
    /// Degenerate rects show up a lot in window code: minimized windows,
    /// cloaked surfaces, and freshly spawned shell workers all report
    /// zero or negative extents.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Maps a screen-space point into this rectangle's local space.
    pub fn to_local(&self, point: Point) -> Point {
        Point {
            x: point.x - self.x,
            y: point.y - self.y,
        }
    }
}

/// A point in screen or window coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_negative_extents_are_empty() {
        assert!(Rect::new(10, 10, 0, 5).is_empty());
        assert!(Rect::new(10, 10, 5, -1).is_empty());
        assert!(!Rect::new(0, 0, 1, 1).is_empty());
    }

    #[test]
    fn to_local_subtracts_origin() {
        let rect = Rect::new(100, 200, 800, 600);

        let local = rect.to_local(Point::new(150, 260));

        assert_eq!(local, Point::new(50, 60));
    }
}
