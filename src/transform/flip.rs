//! In-place mirroring

use crate::pnm::image::{Grid, RasterImage, Samples};

/// Mirror axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Left and right swap
    Horizontal,
    /// Top and bottom swap
    Vertical,
}

fn mirror<T: Copy + Default>(grid: &mut Grid<T>, axis: Axis) {
    let (width, height) = (grid.width(), grid.height());
    match axis {
        Axis::Horizontal => {
            for y in 0..height {
                for x in 0..width / 2 {
                    grid.swap((x, y), (width - 1 - x, y));
                }
            }
        }
        Axis::Vertical => {
            for y in 0..height / 2 {
                for x in 0..width {
                    grid.swap((x, y), (x, height - 1 - y));
                }
            }
        }
    }
}

impl RasterImage {
    /// Mirrors the image along `axis`
    pub fn flip(&mut self, axis: Axis) {
        match self.samples_mut() {
            Samples::Bitmap(grid) => mirror(grid, axis),
            Samples::Gray(grid) => mirror(grid, axis),
            Samples::Color(grid) => mirror(grid, axis),
        }
    }

    /// Mirrors left to right
    pub fn flip_horizontal(&mut self) {
        self.flip(Axis::Horizontal);
    }

    /// Mirrors top to bottom
    pub fn flip_vertical(&mut self) {
        self.flip(Axis::Vertical);
    }

    /// Horizontal flip followed by vertical flip (a 180 degree turn)
    pub fn flip_and_flop(&mut self) {
        self.flip_horizontal();
        self.flip_vertical();
    }
}
