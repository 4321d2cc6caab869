//! Integer pixel geometry: points and half-open rectangles.

use serde::{Deserialize, Serialize};

/// A point (or a size) in integer pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A rectangle covering `x0 <= x < x1`, `y0 <= y < y1`.
///
/// Constructed rectangles are always well-formed: `x0 <= x1` and `y0 <= y1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Self = Self {
        x0: 0,
        y0: 0,
        x1: 0,
        y1: 0,
    };

    /// Build a rectangle from two corners, swapping coordinates if needed so
    /// the result is well-formed.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    /// A `w` x `h` rectangle anchored at the origin. Negative extents clamp to 0.
    pub fn from_size(w: i32, h: i32) -> Self {
        Self::new(0, 0, w.max(0), h.max(0))
    }

    /// Top-left corner.
    pub fn min(&self) -> Point {
        Point::new(self.x0, self.y0)
    }

    /// Bottom-right corner (exclusive).
    pub fn max(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn width(&self) -> i32 {
        self.x1.saturating_sub(self.x0)
    }

    pub fn height(&self) -> i32 {
        self.y1.saturating_sub(self.y0)
    }

    /// Width and height as a point.
    pub fn size(&self) -> Point {
        Point::new(self.width(), self.height())
    }

    pub fn is_empty(&self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }

    /// The same rectangle moved by `delta`, clamped to the `i32` range.
    pub fn translate(&self, delta: Point) -> Self {
        Self {
            x0: self.x0.saturating_add(delta.x),
            y0: self.y0.saturating_add(delta.y),
            x1: self.x1.saturating_add(delta.x),
            y1: self.y1.saturating_add(delta.y),
        }
    }

    /// Whether `p` lies inside the rectangle.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x0 && p.x < self.x1 && p.y >= self.y0 && p.y < self.y1
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})-({},{})", self.x0, self.y0, self.x1, self.y1)
    }
}
