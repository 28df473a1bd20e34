//! Netpbm image model and codec
//!
//! This module provides the in-memory `RasterImage`, the table of the six
//! Netpbm formats and the reader/writer pair that converts between bytes
//! and images.

pub mod errors;
pub mod format;
pub mod image;
pub mod header;
pub mod reader;
pub mod writer;
pub mod config;
#[cfg(test)]
mod tests;

pub use errors::{PnmError, PnmResult};
pub use format::{Encoding, PnmFormat, Variant};
pub use image::{Grid, RasterImage, Rgb, Sample, Samples, DEFAULT_MAX_VALUE, MAX_SAMPLE_COUNT};
pub use header::{parse_header, PnmHeader};
pub use reader::{decode, PnmReader};
pub use writer::{encode, PnmWriter};
pub use config::{DecodeOptions, PnmConfig, RasterOptions, RowPolicy};
