//! In-memory raster image
//!
//! A `RasterImage` owns a row-major sample grid together with its format
//! metadata. All pixel access goes through the bounds-checked `Grid`
//! accessors, so out-of-range coordinates never reach the buffer.

use std::fmt;

use crate::pnm::errors::{PnmError, PnmResult};
use crate::pnm::format::{Encoding, PnmFormat, Variant};

/// Default max value for newly built gray and color images
pub const DEFAULT_MAX_VALUE: u8 = 255;

/// Upper bound on `width * height * components` for any image
pub const MAX_SAMPLE_COUNT: usize = 1 << 28;

/// An RGB triplet of 8-bit components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Rounded Rec. 601 luma
    pub fn luma(&self) -> u8 {
        let y = 0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64;
        y.round().min(255.0) as u8
    }

    /// Integer mean of the three channels
    pub fn mean(&self) -> u8 {
        ((self.r as u16 + self.g as u16 + self.b as u16) / 3) as u8
    }
}

/// A pixel sample type that can live in a `Grid`
///
/// Implemented for `bool` (bitmap), `u8` (gray) and `Rgb` (color). The
/// trait lets the rasterizer and the transforms stay generic over the
/// three variants.
pub trait Sample: Copy + Default + PartialEq + fmt::Debug {
    /// Variant that stores this sample type
    const VARIANT: Variant;

    /// Borrows the grid if `samples` holds this sample type
    fn grid(samples: &Samples) -> Option<&Grid<Self>>;

    /// Mutably borrows the grid if `samples` holds this sample type
    fn grid_mut(samples: &mut Samples) -> Option<&mut Grid<Self>>;

    /// Caps every component at `max`
    fn clamp_to(self, max: u8) -> Self;

    /// Converts a color into this sample type (luma for gray, threshold for bitmap)
    fn from_rgb(rgb: Rgb) -> Self;

    /// Linear interpolation from `self` (t = 0) to `other` (t = 1)
    fn lerp(self, other: Self, t: f64) -> Self;
}

fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    let t = t.clamp(0.0, 1.0);
    (a as f64 * (1.0 - t) + b as f64 * t).round().clamp(0.0, 255.0) as u8
}

impl Sample for bool {
    const VARIANT: Variant = Variant::Bitmap;

    fn grid(samples: &Samples) -> Option<&Grid<Self>> {
        match samples {
            Samples::Bitmap(grid) => Some(grid),
            _ => None,
        }
    }

    fn grid_mut(samples: &mut Samples) -> Option<&mut Grid<Self>> {
        match samples {
            Samples::Bitmap(grid) => Some(grid),
            _ => None,
        }
    }

    fn clamp_to(self, _max: u8) -> Self {
        self
    }

    fn from_rgb(rgb: Rgb) -> Self {
        rgb.mean() > DEFAULT_MAX_VALUE / 2
    }

    fn lerp(self, other: Self, t: f64) -> Self {
        if t >= 0.5 { other } else { self }
    }
}

impl Sample for u8 {
    const VARIANT: Variant = Variant::Gray;

    fn grid(samples: &Samples) -> Option<&Grid<Self>> {
        match samples {
            Samples::Gray(grid) => Some(grid),
            _ => None,
        }
    }

    fn grid_mut(samples: &mut Samples) -> Option<&mut Grid<Self>> {
        match samples {
            Samples::Gray(grid) => Some(grid),
            _ => None,
        }
    }

    fn clamp_to(self, max: u8) -> Self {
        self.min(max)
    }

    fn from_rgb(rgb: Rgb) -> Self {
        rgb.luma()
    }

    fn lerp(self, other: Self, t: f64) -> Self {
        lerp_channel(self, other, t)
    }
}

impl Sample for Rgb {
    const VARIANT: Variant = Variant::Color;

    fn grid(samples: &Samples) -> Option<&Grid<Self>> {
        match samples {
            Samples::Color(grid) => Some(grid),
            _ => None,
        }
    }

    fn grid_mut(samples: &mut Samples) -> Option<&mut Grid<Self>> {
        match samples {
            Samples::Color(grid) => Some(grid),
            _ => None,
        }
    }

    fn clamp_to(self, max: u8) -> Self {
        Rgb::new(self.r.min(max), self.g.min(max), self.b.min(max))
    }

    fn from_rgb(rgb: Rgb) -> Self {
        rgb
    }

    fn lerp(self, other: Self, t: f64) -> Self {
        Rgb::new(
            lerp_channel(self.r, other.r, t),
            lerp_channel(self.g, other.g, t),
            lerp_channel(self.b, other.b, t),
        )
    }
}

/// Owned, bounds-checked 2-D sample buffer stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T: Copy + Default> Grid<T> {
    /// Creates a grid filled with the default (zero) sample
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            data: vec![T::default(); width * height],
        }
    }

    /// Builds a grid from explicit rows
    ///
    /// # Returns
    /// The grid, or a `ShapeError` if any row is not exactly as wide as the first
    pub fn from_rows(rows: Vec<Vec<T>>) -> PnmResult<Self> {
        let height = rows.len();
        let width = rows.first().map(|row| row.len()).unwrap_or(0);
        let mut data = Vec::with_capacity(width * height);

        for row in rows {
            if row.len() != width {
                return Err(PnmError::ShapeError { expected: width, found: row.len() });
            }
            data.extend(row);
        }

        Ok(Grid { width, height, data })
    }

    pub(crate) fn from_vec(width: usize, height: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Grid { width, height, data }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Returns the sample at (x, y), or `None` outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<T> {
        self.index(x, y).map(|i| self.data[i])
    }

    /// Writes the sample at (x, y)
    ///
    /// # Returns
    /// `true` if the coordinate was inside the grid and the write happened
    pub fn set(&mut self, x: usize, y: usize, value: T) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.data[i] = value;
                true
            }
            None => false,
        }
    }

    /// Exchanges two samples; out-of-range positions leave the grid untouched
    pub fn swap(&mut self, a: (usize, usize), b: (usize, usize)) {
        if let (Some(i), Some(j)) = (self.index(a.0, a.1), self.index(b.0, b.1)) {
            self.data.swap(i, j);
        }
    }

    /// Borrows row `y`
    pub fn row(&self, y: usize) -> Option<&[T]> {
        if y < self.height {
            Some(&self.data[y * self.width..(y + 1) * self.width])
        } else {
            None
        }
    }

    /// Iterates over the rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks(self.width.max(1)).take(self.height)
    }

    /// Applies `f` to every sample in place
    pub fn map_in_place(&mut self, f: impl Fn(T) -> T) {
        for sample in self.data.iter_mut() {
            *sample = f(*sample);
        }
    }

    /// Builds a new grid of the same size by mapping every sample
    pub fn map<U: Copy + Default>(&self, f: impl Fn(T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|&s| f(s)).collect(),
        }
    }

    /// Iterates over all samples in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

/// The sample grid of an image, tagged by variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Samples {
    Bitmap(Grid<bool>),
    Gray(Grid<u8>),
    Color(Grid<Rgb>),
}

impl Samples {
    /// Zero-initialized samples of the given variant
    pub fn new(variant: Variant, width: usize, height: usize) -> Self {
        match variant {
            Variant::Bitmap => Samples::Bitmap(Grid::new(width, height)),
            Variant::Gray => Samples::Gray(Grid::new(width, height)),
            Variant::Color => Samples::Color(Grid::new(width, height)),
        }
    }

    pub fn variant(&self) -> Variant {
        match self {
            Samples::Bitmap(_) => Variant::Bitmap,
            Samples::Gray(_) => Variant::Gray,
            Samples::Color(_) => Variant::Color,
        }
    }

    pub fn width(&self) -> usize {
        match self {
            Samples::Bitmap(grid) => grid.width(),
            Samples::Gray(grid) => grid.width(),
            Samples::Color(grid) => grid.width(),
        }
    }

    pub fn height(&self) -> usize {
        match self {
            Samples::Bitmap(grid) => grid.height(),
            Samples::Gray(grid) => grid.height(),
            Samples::Color(grid) => grid.height(),
        }
    }

    /// Largest component value present (0 for bitmaps)
    fn peak(&self) -> u8 {
        match self {
            Samples::Bitmap(_) => 0,
            Samples::Gray(grid) => grid.iter().copied().max().unwrap_or(0),
            Samples::Color(grid) => grid
                .iter()
                .map(|p| p.r.max(p.g).max(p.b))
                .max()
                .unwrap_or(0),
        }
    }
}

/// A Netpbm image held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    encoding: Encoding,
    max_value: Option<u8>,
    samples: Samples,
}

impl RasterImage {
    /// Creates a zero-initialized image
    ///
    /// Gray and color images get a max value of 255.
    ///
    /// # Arguments
    /// * `variant` - Sample kind
    /// * `encoding` - Encoding used when the image is written
    /// * `width` - Width in pixels, must be positive
    /// * `height` - Height in pixels, must be positive
    pub fn new(variant: Variant, encoding: Encoding, width: usize, height: usize) -> PnmResult<Self> {
        validate_dimensions(width, height)?;
        checked_sample_count(width, height, variant.components())?;
        let max_value = if variant.has_max_value() { Some(DEFAULT_MAX_VALUE) } else { None };
        Ok(RasterImage {
            encoding,
            max_value,
            samples: Samples::new(variant, width, height),
        })
    }

    /// Wraps an existing sample grid
    ///
    /// # Arguments
    /// * `encoding` - Encoding used when the image is written
    /// * `max_value` - Required for gray and color, ignored for bitmaps
    /// * `samples` - The sample grid
    ///
    /// # Returns
    /// The image, or an error if a dimension is zero, the max value is
    /// missing or zero, or a sample exceeds the max value
    pub fn from_samples(encoding: Encoding, max_value: Option<u8>, samples: Samples) -> PnmResult<Self> {
        validate_dimensions(samples.width(), samples.height())?;

        let max_value = if samples.variant().has_max_value() {
            let max = max_value
                .filter(|&m| m > 0)
                .ok_or_else(|| PnmError::DimensionError("max value must be positive".to_string()))?;
            let peak = samples.peak();
            if peak > max {
                return Err(PnmError::SampleParseError(format!(
                    "sample {} exceeds max value {}", peak, max
                )));
            }
            Some(max)
        } else {
            None
        };

        Ok(RasterImage { encoding, max_value, samples })
    }

    pub fn format(&self) -> PnmFormat {
        PnmFormat::new(self.variant(), self.encoding)
    }

    pub fn variant(&self) -> Variant {
        self.samples.variant()
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Switches between ASCII and binary output without touching samples
    pub fn set_encoding(&mut self, encoding: Encoding) {
        self.encoding = encoding;
    }

    pub fn width(&self) -> usize {
        self.samples.width()
    }

    pub fn height(&self) -> usize {
        self.samples.height()
    }

    /// Returns (width, height)
    pub fn size(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    /// Max sample value; `None` for bitmaps
    pub fn max_value(&self) -> Option<u8> {
        self.max_value
    }

    /// Max value used for arithmetic; 1 for bitmaps
    pub(crate) fn effective_max(&self) -> u8 {
        self.max_value.unwrap_or(1)
    }

    /// Changes the max value of a gray or color image
    ///
    /// Samples are rescaled proportionally (rounded) so that every component
    /// stays within the new bound. Bitmaps and a zero max value are ignored.
    pub fn set_max_value(&mut self, max_value: u8) {
        let old = match self.max_value {
            Some(old) if max_value > 0 => old,
            _ => return,
        };
        if old == max_value {
            return;
        }

        let rescale = move |v: u8| -> u8 {
            ((v as u32 * max_value as u32 + old as u32 / 2) / old as u32).min(max_value as u32) as u8
        };
        match &mut self.samples {
            Samples::Bitmap(_) => {}
            Samples::Gray(grid) => grid.map_in_place(rescale),
            Samples::Color(grid) => {
                grid.map_in_place(|p| Rgb::new(rescale(p.r), rescale(p.g), rescale(p.b)))
            }
        }
        self.max_value = Some(max_value);
    }

    pub fn samples(&self) -> &Samples {
        &self.samples
    }

    pub(crate) fn samples_mut(&mut self) -> &mut Samples {
        &mut self.samples
    }

    /// Builds an image that keeps this one's encoding around new samples.
    /// The max value is carried over, or defaults to 255 coming from a bitmap.
    pub(crate) fn with_samples(&self, samples: Samples) -> RasterImage {
        let max_value = if samples.variant().has_max_value() {
            Some(self.max_value.unwrap_or(DEFAULT_MAX_VALUE))
        } else {
            None
        };
        RasterImage { encoding: self.encoding, max_value, samples }
    }

    /// Borrows the typed grid if the image stores samples of type `T`
    pub fn grid<T: Sample>(&self) -> Option<&Grid<T>> {
        T::grid(&self.samples)
    }

    /// Returns the sample at (x, y); `None` if out of range or of another type
    pub fn get<T: Sample>(&self, x: usize, y: usize) -> Option<T> {
        self.grid::<T>().and_then(|grid| grid.get(x, y))
    }

    /// Writes the sample at (x, y), capped at the max value
    ///
    /// Out-of-range coordinates and mismatched sample types are ignored.
    ///
    /// # Returns
    /// `true` if a sample was written
    pub fn set<T: Sample>(&mut self, x: usize, y: usize, value: T) -> bool {
        let max = self.max_value.unwrap_or(DEFAULT_MAX_VALUE);
        match T::grid_mut(&mut self.samples) {
            Some(grid) => grid.set(x, y, value.clamp_to(max)),
            None => false,
        }
    }
}

/// Number of sample components in a `width` x `height` image
///
/// # Returns
/// The count, or a `DimensionError` if it overflows or exceeds `MAX_SAMPLE_COUNT`
pub(crate) fn checked_sample_count(width: usize, height: usize, components: usize) -> PnmResult<usize> {
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(components))
        .filter(|&n| n <= MAX_SAMPLE_COUNT)
        .ok_or_else(|| {
            PnmError::DimensionError(format!(
                "{}x{} image with {} component(s) per pixel exceeds the limit of {} samples",
                width, height, components, MAX_SAMPLE_COUNT
            ))
        })
}

fn validate_dimensions(width: usize, height: usize) -> PnmResult<()> {
    if width == 0 || height == 0 {
        return Err(PnmError::DimensionError(format!(
            "width and height must be positive, got {}x{}", width, height
        )));
    }
    Ok(())
}

impl fmt::Display for RasterImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Netpbm Image:")?;
        writeln!(f, "  Format: {}", self.format())?;
        writeln!(f, "  Dimensions: {}x{}", self.width(), self.height())?;
        if let Some(max) = self.max_value {
            writeln!(f, "  Max value: {}", max)?;
        }
        Ok(())
    }
}
