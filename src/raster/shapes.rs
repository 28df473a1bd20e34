//! Rectangles, circles and triangles

use crate::pnm::image::Sample;
use crate::raster::painter::Painter;
use crate::raster::point::Point;

/// Inclusive x range covered by `edge` on scanline `y`.
///
/// A horizontal edge covers both endpoints; other edges are interpolated
/// and rounded. Returns `None` if the edge does not reach `y`.
pub(crate) fn edge_span(a: Point, b: Point, y: i32) -> Option<(i32, i32)> {
    let (top, bottom) = if a.y <= b.y { (a, b) } else { (b, a) };
    if y < top.y || y > bottom.y {
        return None;
    }
    if top.y == bottom.y {
        // Zero-height edge: no interpolation, the whole edge lies on this row
        return Some((top.x.min(bottom.x), top.x.max(bottom.x)));
    }
    let t = (y as f64 - top.y as f64) / (bottom.y as f64 - top.y as f64);
    let x = (top.x as f64 + (bottom.x as f64 - top.x as f64) * t).round() as i32;
    Some((x, x))
}

impl<'a, T: Sample> Painter<'a, T> {
    /// Draws the outline of a `width` x `height` rectangle whose top-left
    /// pixel is `origin`
    ///
    /// The outline covers exactly the border of the area filled by
    /// `draw_filled_rectangle` with the same arguments.
    pub fn draw_rectangle(&mut self, origin: Point, width: i32, height: i32, color: T) {
        if width <= 0 || height <= 0 {
            return;
        }
        let top_right = origin.offset(width - 1, 0);
        let bottom_right = origin.offset(width - 1, height - 1);
        let bottom_left = origin.offset(0, height - 1);

        self.draw_line(origin, top_right, color);
        self.draw_line(top_right, bottom_right, color);
        self.draw_line(bottom_right, bottom_left, color);
        self.draw_line(bottom_left, origin, color);
    }

    /// Fills the `width` x `height` block whose top-left pixel is `origin`
    pub fn draw_filled_rectangle(&mut self, origin: Point, width: i32, height: i32, color: T) {
        if width <= 0 || height <= 0 {
            return;
        }
        let top = origin.y.max(0);
        let bottom = origin.y.saturating_add(height - 1).min(self.height() - 1);
        for y in top..=bottom {
            self.span(origin.x, origin.x.saturating_add(width - 1), y, color);
        }
    }

    /// Draws a circle outline with the midpoint algorithm
    ///
    /// Each step computes one octant point and mirrors it into the other
    /// seven. A zero radius draws the center pixel; a negative one draws
    /// nothing.
    pub fn draw_circle(&mut self, center: Point, radius: i32, color: T) {
        if radius < 0 {
            return;
        }
        let (cx, cy) = (center.x as i64, center.y as i64);
        let mut x = radius as i64;
        let mut y = 0i64;
        let mut err = 1 - x;

        while x >= y {
            for (dx, dy) in [(x, y), (y, x), (-y, x), (-x, y), (-x, -y), (-y, -x), (y, -x), (x, -y)] {
                self.put_wide(cx + dx, cy + dy, color);
            }
            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
    }

    /// Fills every pixel with `dx² + dy² <= r²` around `center`
    ///
    /// Only the part of the bounding box that overlaps the canvas is visited.
    pub fn draw_filled_circle(&mut self, center: Point, radius: i32, color: T) {
        if radius < 0 {
            return;
        }
        let (cx, cy, r) = (center.x as i64, center.y as i64, radius as i64);
        let r2 = r * r;
        let (x_lo, x_hi) = ((cx - r).max(0), (cx + r).min(self.width() as i64 - 1));
        let (y_lo, y_hi) = ((cy - r).max(0), (cy + r).min(self.height() as i64 - 1));

        for y in y_lo..=y_hi {
            let dy = y - cy;
            for x in x_lo..=x_hi {
                let dx = x - cx;
                if dx * dx + dy * dy <= r2 {
                    self.put_wide(x, y, color);
                }
            }
        }
    }

    /// Draws the three edges of a triangle
    pub fn draw_triangle(&mut self, p1: Point, p2: Point, p3: Point, color: T) {
        self.draw_line(p1, p2, color);
        self.draw_line(p2, p3, color);
        self.draw_line(p3, p1, color);
    }

    /// Fills a triangle by scanlines
    ///
    /// Vertices are sorted by y and the triangle is split at the middle
    /// vertex. On each row the span runs between the long edge (top to
    /// bottom vertex) and whichever short edge is active; horizontal edges
    /// contribute both endpoints instead of being interpolated.
    pub fn draw_filled_triangle(&mut self, p1: Point, p2: Point, p3: Point, color: T) {
        let mut v = [p1, p2, p3];
        v.sort_by_key(|p| p.y);
        let [top, mid, bottom] = v;

        for y in top.y.max(0)..=bottom.y.min(self.height() - 1) {
            let short = if y <= mid.y { (top, mid) } else { (mid, bottom) };
            let spans = [edge_span(top, bottom, y), edge_span(short.0, short.1, y)];

            let mut lo = i32::MAX;
            let mut hi = i32::MIN;
            for (a, b) in spans.iter().flatten() {
                lo = lo.min(*a);
                hi = hi.max(*b);
            }
            if lo <= hi {
                self.span(lo, hi, y, color);
            }
        }
    }
}
