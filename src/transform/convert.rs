//! Variant conversion
//!
//! Down-conversions use fixed formulas: rounded Rec. 601 luma for color to
//! gray, and `sample > max_value / 2` for anything to bitmap (the mean of
//! the three channels for color). Converted images keep the source
//! encoding.

use log::debug;

use crate::pnm::format::Variant;
use crate::pnm::image::{RasterImage, Rgb, Samples};

impl RasterImage {
    /// Converts to a gray image
    ///
    /// Color samples become their rounded luma and the max value is kept.
    /// Bitmaps become a 0/255 image (true is 255). Gray images are cloned.
    pub fn to_gray(&self) -> RasterImage {
        debug!("Converting {:?} image to gray", self.variant());
        match self.samples() {
            Samples::Gray(_) => self.clone(),
            Samples::Color(grid) => {
                // Luma is a convex combination, so it never exceeds the max value
                self.with_samples(Samples::Gray(grid.map(|p| p.luma())))
            }
            Samples::Bitmap(grid) => {
                let max = crate::pnm::image::DEFAULT_MAX_VALUE;
                self.with_samples(Samples::Gray(grid.map(|v| if v { max } else { 0 })))
            }
        }
    }

    /// Converts to a bitmap by thresholding at half the max value
    pub fn to_bitmap(&self) -> RasterImage {
        debug!("Converting {:?} image to bitmap", self.variant());
        let half = self.effective_max() / 2;
        match self.samples() {
            Samples::Bitmap(_) => self.clone(),
            Samples::Gray(grid) => self.with_samples(Samples::Bitmap(grid.map(|v| v > half))),
            Samples::Color(grid) => self.with_samples(Samples::Bitmap(grid.map(|p| p.mean() > half))),
        }
    }

    /// Converts to a color image
    ///
    /// Gray samples are replicated into all three channels; bitmaps become
    /// black and white with true as white.
    pub fn to_color(&self) -> RasterImage {
        debug!("Converting {:?} image to color", self.variant());
        match self.samples() {
            Samples::Color(_) => self.clone(),
            Samples::Gray(grid) => self.with_samples(Samples::Color(grid.map(|v| Rgb::new(v, v, v)))),
            Samples::Bitmap(grid) => {
                let max = crate::pnm::image::DEFAULT_MAX_VALUE;
                self.with_samples(Samples::Color(grid.map(|v| {
                    if v { Rgb::new(max, max, max) } else { Rgb::default() }
                })))
            }
        }
    }

    /// Converts to the requested variant
    pub fn convert(&self, variant: Variant) -> RasterImage {
        match variant {
            Variant::Bitmap => self.to_bitmap(),
            Variant::Gray => self.to_gray(),
            Variant::Color => self.to_color(),
        }
    }
}
