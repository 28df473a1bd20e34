//! 2-D rasterizer
//!
//! Drawing primitives and procedural generators. Everything writes through
//! `Painter::put`, which silently drops off-canvas coordinates, so no
//! drawing operation can fail.

mod point;
mod painter;
mod line;
mod shapes;
mod polygon;
mod fractal;
mod noise;
#[cfg(test)]
mod tests;

pub use point::Point;
pub use painter::Painter;
pub use line::bresenham;
pub use noise::GradientGrid;
