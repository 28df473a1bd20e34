//! Sample inversion

use log::debug;

use crate::pnm::image::{RasterImage, Rgb, Samples};

impl RasterImage {
    /// Inverts every sample
    ///
    /// Bitmaps flip each boolean; gray and color samples become
    /// `max_value - value`, channel by channel.
    pub fn invert(&mut self) {
        let max = self.effective_max();
        debug!("Inverting {}x{} image against max {}", self.width(), self.height(), max);

        match self.samples_mut() {
            Samples::Bitmap(grid) => grid.map_in_place(|v| !v),
            Samples::Gray(grid) => grid.map_in_place(|v| max - v.min(max)),
            Samples::Color(grid) => grid.map_in_place(|p| {
                Rgb::new(max - p.r.min(max), max - p.g.min(max), max - p.b.min(max))
            }),
        }
    }
}
