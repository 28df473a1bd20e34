//! Integer line rasterization
//!
//! All-octant Bresenham. Endpoints are put in a canonical order before
//! stepping, so the error term always breaks ties the same way and a line
//! covers the same pixels whichever endpoint comes first.

use crate::pnm::image::Sample;
use crate::raster::painter::Painter;
use crate::raster::point::Point;

/// Visits every pixel of the 8-connected Bresenham path from `p1` to `p2`,
/// both endpoints included
pub fn bresenham(p1: Point, p2: Point, mut visit: impl FnMut(i32, i32)) {
    let (start, end) = if p1 <= p2 { (p1, p2) } else { (p2, p1) };

    let (mut x, mut y) = (start.x as i64, start.y as i64);
    let (x1, y1) = (end.x as i64, end.y as i64);
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        visit(x as i32, y as i32);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

impl<'a, T: Sample> Painter<'a, T> {
    /// Draws a straight line between two points, endpoints included
    pub fn draw_line(&mut self, p1: Point, p2: Point, color: T) {
        bresenham(p1, p2, |x, y| {
            self.put(x, y, color);
        });
    }

    /// Draws consecutive segments through `points`
    pub(crate) fn draw_polyline(&mut self, points: &[Point], color: T) {
        for pair in points.windows(2) {
            self.draw_line(pair[0], pair[1], color);
        }
    }
}
