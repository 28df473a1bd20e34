//! Drawing surface
//!
//! A `Painter` borrows one typed sample grid and is the only way the
//! rasterizer touches pixels. Its `put` method drops coordinates outside
//! the grid, so primitives may compute off-canvas points freely.

use crate::pnm::config::RasterOptions;
use crate::pnm::image::{Grid, RasterImage, Sample, DEFAULT_MAX_VALUE};

/// Bounds-checked drawing handle over a sample grid
pub struct Painter<'a, T: Sample> {
    grid: &'a mut Grid<T>,
    /// Written samples are capped at this value
    max: u8,
    pub(crate) options: RasterOptions,
}

impl<'a, T: Sample> Painter<'a, T> {
    /// Creates a painter over a bare grid (samples capped at 255)
    pub fn new(grid: &'a mut Grid<T>) -> Self {
        Painter {
            grid,
            max: DEFAULT_MAX_VALUE,
            options: RasterOptions::default(),
        }
    }

    /// Replaces the procedural generator options
    pub fn with_options(mut self, options: RasterOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &RasterOptions {
        &self.options
    }

    pub fn width(&self) -> i32 {
        self.grid.width().min(i32::MAX as usize) as i32
    }

    pub fn height(&self) -> i32 {
        self.grid.height().min(i32::MAX as usize) as i32
    }

    /// Writes one pixel
    ///
    /// # Returns
    /// `false` if (x, y) lies outside the grid; nothing is written then
    pub fn put(&mut self, x: i32, y: i32, color: T) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        self.grid.set(x as usize, y as usize, color.clamp_to(self.max))
    }

    /// `put` for widened coordinates; values outside `i32` are off-canvas
    pub(crate) fn put_wide(&mut self, x: i64, y: i64, color: T) -> bool {
        match (i32::try_from(x), i32::try_from(y)) {
            (Ok(x), Ok(y)) => self.put(x, y, color),
            _ => false,
        }
    }

    /// Reads one pixel, `None` outside the grid
    pub fn get(&self, x: i32, y: i32) -> Option<T> {
        if x < 0 || y < 0 {
            return None;
        }
        self.grid.get(x as usize, y as usize)
    }

    /// Writes the inclusive horizontal run `[x0, x1]` on row `y`
    pub(crate) fn span(&mut self, x0: i32, x1: i32, y: i32, color: T) {
        if y < 0 || y >= self.height() {
            return;
        }
        let (lo, hi) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let lo = lo.max(0);
        let hi = hi.min(self.width() - 1);
        for x in lo..=hi {
            self.put(x, y, color);
        }
    }
}

impl RasterImage {
    /// Opens a painter on this image
    ///
    /// # Returns
    /// `None` if the image does not store samples of type `T`
    pub fn painter<T: Sample>(&mut self) -> Option<Painter<'_, T>> {
        let max = self.max_value().unwrap_or(DEFAULT_MAX_VALUE);
        T::grid_mut(self.samples_mut()).map(|grid| Painter {
            grid,
            max,
            options: RasterOptions::default(),
        })
    }
}
