//! Whole-image transforms
//!
//! Inversion, mirroring, rotation and variant conversion. All of them work
//! on any variant; the dimension-changing rotation and the conversions
//! return a new image, the rest mutate in place.

mod invert;
mod flip;
mod rotate;
mod convert;
#[cfg(test)]
mod tests;

pub use flip::Axis;
