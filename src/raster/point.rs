//! Point structure for pixel coordinates

/// A point in pixel space: origin at the top-left, y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// Returns this point moved by (dx, dy)
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Point::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Rounds floating point coordinates to the nearest pixel
    pub fn from_f64(x: f64, y: f64) -> Self {
        Point::new(x.round() as i32, y.round() as i32)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}
