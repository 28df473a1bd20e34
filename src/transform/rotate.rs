//! Quarter-turn rotation

use crate::pnm::image::{Grid, RasterImage, Samples};

/// Rotates a grid 90 degrees clockwise into a new buffer.
/// Source (x, y) lands at (height - 1 - y, x).
fn rotate_grid<T: Copy + Default>(grid: &Grid<T>) -> Grid<T> {
    let (width, height) = (grid.width(), grid.height());
    let mut rotated = Grid::new(height, width);
    for (y, row) in grid.rows().enumerate() {
        for (x, &sample) in row.iter().enumerate() {
            rotated.set(height - 1 - y, x, sample);
        }
    }
    rotated
}

impl RasterImage {
    /// Returns a copy rotated 90 degrees clockwise
    ///
    /// The new image is `height` wide and `width` tall; the original is
    /// left untouched.
    pub fn rotate_90_cw(&self) -> RasterImage {
        let samples = match self.samples() {
            Samples::Bitmap(grid) => Samples::Bitmap(rotate_grid(grid)),
            Samples::Gray(grid) => Samples::Gray(rotate_grid(grid)),
            Samples::Color(grid) => Samples::Color(rotate_grid(grid)),
        };
        self.with_samples(samples)
    }
}
