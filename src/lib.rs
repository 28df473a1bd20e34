pub mod pnm;
pub mod transform;
pub mod raster;
pub mod scene;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::PnmKit;

pub use pnm::{decode, encode, PnmError, PnmResult, RasterImage, Rgb, Variant, Encoding, PnmFormat};
pub use raster::{Painter, Point};
pub use scene::Scene;
