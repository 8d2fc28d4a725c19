use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A point in logical pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Create a [`Point`] from x, y.
pub fn point(x: f32, y: f32) -> Point {
    Point { x, y }
}

/// A width and height in logical pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// Create a [`Size`] from width, height.
pub fn size(width: f32, height: f32) -> Size {
    Size { width, height }
}

impl Size {
    /// Returns true if either side is not a positive, finite length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width.is_finite() && self.width > 0.0)
            || !(self.height.is_finite() && self.height > 0.0)
    }
}

/// A control's rectangle in window coordinates, used to turn pointer events
/// into control-local positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Bounds {
    pub origin: Point,
    pub size: Size,
}

/// Create [`Bounds`] from an origin and a size.
pub fn bounds(origin: Point, size: Size) -> Bounds {
    Bounds { origin, size }
}

impl Bounds {
    /// Translate a window position into a position relative to the origin.
    ///
    /// The result is not clamped, dragging past the edges is expected.
    #[inline]
    pub fn localize(&self, position: Point) -> Point {
        point(position.x - self.origin.x, position.y - self.origin.y)
    }
}
