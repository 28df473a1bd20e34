//! Polygon outline and scanline fill

use log::debug;

use crate::pnm::image::Sample;
use crate::raster::painter::Painter;
use crate::raster::point::Point;

/// X coordinates where scanline `y` crosses the polygon's edges, sorted.
///
/// An edge counts when `y` lies in its half-open span `[min_y, max_y)`, so
/// a vertex shared by two edges is counted once and horizontal edges are
/// skipped.
pub(crate) fn scanline_intersections(points: &[Point], y: i32) -> Vec<i32> {
    let mut xs = Vec::new();
    for (i, &a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        let crosses = (a.y <= y && b.y > y) || (b.y <= y && a.y > y);
        if crosses {
            let t = (y as f64 - a.y as f64) / (b.y as f64 - a.y as f64);
            xs.push((a.x as f64 + (b.x as f64 - a.x as f64) * t).round() as i32);
        }
    }
    xs.sort_unstable();
    xs
}

/// Pairs sorted intersections into inclusive spans `[x0, x1]`, `[x2, x3]`, ...
///
/// An odd count leaves one intersection without a partner; it is dropped.
pub(crate) fn pair_intersections(xs: &[i32]) -> Vec<(i32, i32)> {
    if xs.len() % 2 == 1 {
        debug!("Odd intersection count {}, dropping trailing x={}", xs.len(), xs[xs.len() - 1]);
    }
    xs.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect()
}

impl<'a, T: Sample> Painter<'a, T> {
    /// Draws the closed outline through `points`
    pub fn draw_polygon(&mut self, points: &[Point], color: T) {
        match points {
            [] => {}
            [only] => {
                self.put(only.x, only.y, color);
            }
            [first, .., last] => {
                self.draw_polyline(points, color);
                self.draw_line(*last, *first, color);
            }
        }
    }

    /// Fills a polygon with the even-odd scanline rule
    ///
    /// Every row between the lowest and highest vertex is filled between
    /// paired edge crossings. The outline is drawn as well so that
    /// boundary rows and vertices are covered; for an axis-aligned
    /// rectangle this gives the same pixels as `draw_filled_rectangle`.
    pub fn draw_filled_polygon(&mut self, points: &[Point], color: T) {
        if points.len() < 3 {
            self.draw_polygon(points, color);
            return;
        }

        let min_y = points.iter().map(|p| p.y).min().unwrap_or(0).max(0);
        let max_y = points.iter().map(|p| p.y).max().unwrap_or(-1).min(self.height() - 1);

        for y in min_y..=max_y {
            let xs = scanline_intersections(points, y);
            for (x0, x1) in pair_intersections(&xs) {
                self.span(x0, x1, y, color);
            }
        }

        self.draw_polygon(points, color);
    }
}
