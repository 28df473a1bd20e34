//! Recursive fractal generators
//!
//! Both generators start from the equilateral triangle standing on
//! `start` with side `size` (apex above the base) and recurse with
//! `depth - 1`. Depth 0 draws nothing. Requests deeper than
//! `RasterOptions::max_fractal_depth` are clamped before recursing.

use log::warn;

use crate::pnm::image::Sample;
use crate::raster::painter::Painter;
use crate::raster::point::Point;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Corners of the equilateral triangle with base from `start` to the
/// right and apex above
fn equilateral(start: Point, size: i32) -> (Point, Point, Point) {
    let height = (size as f64 * SQRT_3 / 2.0).round() as i32;
    let p1 = start;
    let p2 = start.offset(size, 0);
    let p3 = start.offset(size / 2, -height);
    (p1, p2, p3)
}

/// Point `num/3` of the way from `a` to `b`
fn third(a: Point, b: Point, num: i32) -> Point {
    let t = num as f64 / 3.0;
    Point::from_f64(
        a.x as f64 + (b.x as f64 - a.x as f64) * t,
        a.y as f64 + (b.y as f64 - a.y as f64) * t,
    )
}

/// Integer mean of `points`, truncated toward zero
fn average(points: &[Point]) -> Point {
    let n = points.len().max(1) as i64;
    let sx: i64 = points.iter().map(|p| p.x as i64).sum();
    let sy: i64 = points.iter().map(|p| p.y as i64).sum();
    Point::new((sx / n) as i32, (sy / n) as i32)
}

/// Tip of the equilateral spike raised on segment `a`-`b`
fn spike(a: Point, b: Point) -> Point {
    let dx = b.x as f64 - a.x as f64;
    let dy = b.y as f64 - a.y as f64;
    Point::from_f64(
        a.x as f64 + dx * 0.5 - dy * SQRT_3 / 2.0,
        a.y as f64 + dx * SQRT_3 / 2.0 + dy * 0.5,
    )
}

impl<'a, T: Sample> Painter<'a, T> {
    fn clamp_depth(&self, depth: u32) -> u32 {
        let max = self.options.max_fractal_depth;
        if depth > max {
            warn!("Fractal depth {} exceeds limit {}, clamping", depth, max);
            max
        } else {
            depth
        }
    }

    /// Draws a Koch snowflake approximation
    ///
    /// Each level draws its triangle, then splits the left edge into
    /// thirds, draws the middle third, raises a spike on it and recurses
    /// at one third of the size from the six resulting vertices.
    pub fn draw_koch_snowflake(&mut self, depth: u32, start: Point, size: i32, color: T) {
        let depth = self.clamp_depth(depth);
        self.koch(depth, start, size, color);
    }

    fn koch(&mut self, depth: u32, start: Point, size: i32, color: T) {
        if depth == 0 {
            return;
        }

        let (p1, p2, p3) = equilateral(start, size);
        self.draw_triangle(p1, p2, p3, color);

        let p4 = third(p1, p3, 1);
        let p5 = third(p1, p3, 2);
        let p6 = spike(p4, p5);
        self.draw_line(p4, p5, color);

        for anchor in [p1, p4, p5, p2, p6, p3] {
            self.koch(depth - 1, anchor, size / 3, color);
        }
    }

    /// Draws a Sierpinski triangle approximation
    ///
    /// Each level draws the triangle joining the edge midpoints, then
    /// recurses at half the size from the start corner, the three
    /// midpoints and the centroid.
    pub fn draw_sierpinski_triangle(&mut self, depth: u32, start: Point, size: i32, color: T) {
        let depth = self.clamp_depth(depth);
        self.sierpinski(depth, start, size, color);
    }

    fn sierpinski(&mut self, depth: u32, start: Point, size: i32, color: T) {
        if depth == 0 {
            return;
        }

        let (p1, p2, p3) = equilateral(start, size);
        let mid1 = average(&[p1, p2]);
        let mid2 = average(&[p2, p3]);
        let mid3 = average(&[p3, p1]);
        let centroid = average(&[p1, p2, p3]);

        self.draw_triangle(mid1, mid2, mid3, color);

        for anchor in [p1, mid1, mid2, mid3, centroid] {
            self.sierpinski(depth - 1, anchor, size / 2, color);
        }
    }
}
