//! Netpbm decoder
//!
//! Turns the bytes of any of the six Netpbm formats into a `RasterImage`.
//! The header is parsed by `header::parse_header`; the sample section is
//! then read either as a stream of decimal tokens (ASCII formats) or as raw
//! bytes (binary formats). What happens when the data runs out early is
//! controlled by `DecodeOptions::row_policy`.

use log::{debug, info, warn};
use std::fs;

use crate::pnm::config::{DecodeOptions, RowPolicy};
use crate::pnm::errors::{PnmError, PnmResult};
use crate::pnm::format::{Encoding, Variant};
use crate::pnm::header::{parse_header, PnmHeader};
use crate::pnm::image::{Grid, RasterImage, Rgb, Samples};

/// Decodes `data` with the default (zero-padding) options
pub fn decode(data: &[u8]) -> PnmResult<RasterImage> {
    PnmReader::default().read(data)
}

/// Reader for Netpbm files
#[derive(Debug, Default)]
pub struct PnmReader {
    options: DecodeOptions,
    /// Path of the last file loaded, for diagnostics
    current_file: Option<String>,
}

impl PnmReader {
    pub fn new(options: DecodeOptions) -> Self {
        PnmReader { options, current_file: None }
    }

    pub fn current_file(&self) -> Option<&str> {
        self.current_file.as_deref()
    }

    /// Reads and decodes a whole file
    ///
    /// # Arguments
    /// * `filepath` - Path to the Netpbm file
    pub fn load(&mut self, filepath: &str) -> PnmResult<RasterImage> {
        info!("Loading Netpbm file: {}", filepath);
        self.current_file = Some(filepath.to_string());
        let data = fs::read(filepath)?;
        self.read(&data)
    }

    /// Decodes an in-memory Netpbm image
    ///
    /// # Arguments
    /// * `data` - The complete encoded image
    ///
    /// # Returns
    /// The decoded image; no partial image is returned on error
    pub fn read(&self, data: &[u8]) -> PnmResult<RasterImage> {
        let (header, offset) = parse_header(data)?;
        let body = &data[offset..];
        debug!("Sample section starts at byte {} ({} bytes)", offset, body.len());

        let samples = match header.format.encoding {
            Encoding::Ascii => self.read_ascii(&header, body)?,
            Encoding::Binary => self.read_binary(&header, body)?,
        };

        RasterImage::from_samples(header.format.encoding, header.max_value, samples)
    }

    fn read_ascii(&self, header: &PnmHeader, body: &[u8]) -> PnmResult<Samples> {
        let max = header.max_value.unwrap_or(1) as u32;
        let mut tokens = AsciiTokens::new(body);

        let samples = match header.format.variant {
            Variant::Bitmap => {
                let mut values = Vec::with_capacity(header.pixel_count().min(body.len()));
                while values.len() < header.pixel_count() {
                    let token = match tokens.next() {
                        Some(token) => token,
                        None => break,
                    };
                    // Plain PBM allows digits without separating whitespace
                    for &b in token {
                        match b {
                            b'0' => values.push(false),
                            b'1' => values.push(true),
                            _ => {
                                return Err(PnmError::SampleParseError(format!(
                                    "invalid bitmap token {:?}", String::from_utf8_lossy(token)
                                )))
                            }
                        }
                    }
                }
                values.truncate(header.pixel_count());
                let values = self.complete(values, header.pixel_count(), Encoding::Ascii)?;
                Samples::Bitmap(Grid::from_vec(header.width, header.height, values))
            }
            Variant::Gray => {
                let mut values = Vec::with_capacity(header.pixel_count().min(body.len()));
                while values.len() < header.pixel_count() {
                    match tokens.next() {
                        Some(token) => values.push(parse_sample(token, max)?),
                        None => break,
                    }
                }
                let values = self.complete(values, header.pixel_count(), Encoding::Ascii)?;
                Samples::Gray(Grid::from_vec(header.width, header.height, values))
            }
            Variant::Color => {
                let needed = header.sample_count();
                let mut channels = Vec::with_capacity(needed.min(body.len()));
                while channels.len() < needed {
                    match tokens.next() {
                        Some(token) => channels.push(parse_sample(token, max)?),
                        None => break,
                    }
                }
                let channels = self.complete(channels, needed, Encoding::Ascii)?;
                Samples::Color(Grid::from_vec(header.width, header.height, pack_rgb(&channels)))
            }
        };

        if tokens.next().is_some() {
            warn!("Ignoring trailing tokens after {} samples", header.pixel_count());
        }
        Ok(samples)
    }

    fn read_binary(&self, header: &PnmHeader, body: &[u8]) -> PnmResult<Samples> {
        let max = header.max_value.unwrap_or(1);

        let samples = match header.format.variant {
            Variant::Bitmap => {
                let row_bytes = header.bitmap_row_bytes();
                let bytes = self.complete(body.iter().take(row_bytes * header.height).copied().collect::<Vec<u8>>(),
                                          row_bytes * header.height,
                                          Encoding::Binary)?;
                let mut values = Vec::with_capacity(header.pixel_count());
                for row in bytes.chunks(row_bytes) {
                    for x in 0..header.width {
                        values.push(row[x / 8] & (0x80 >> (x % 8)) != 0);
                    }
                }
                Samples::Bitmap(Grid::from_vec(header.width, header.height, values))
            }
            Variant::Gray => {
                let values = self.complete(body.iter().take(header.pixel_count()).copied().collect::<Vec<u8>>(),
                                           header.pixel_count(),
                                           Encoding::Binary)?;
                check_binary_range(&values, max)?;
                Samples::Gray(Grid::from_vec(header.width, header.height, values))
            }
            Variant::Color => {
                let needed = header.sample_count();
                let channels = self.complete(body.iter().take(needed).copied().collect::<Vec<u8>>(),
                                             needed,
                                             Encoding::Binary)?;
                check_binary_range(&channels, max)?;
                Samples::Color(Grid::from_vec(header.width, header.height, pack_rgb(&channels)))
            }
        };

        Ok(samples)
    }

    /// Applies the row policy to a sample buffer that may be short
    fn complete<T: Copy + Default>(&self, mut values: Vec<T>, expected: usize, encoding: Encoding) -> PnmResult<Vec<T>> {
        let found = values.len();
        if found >= expected {
            return Ok(values);
        }

        match (self.options.row_policy, encoding) {
            (RowPolicy::Pad, _) => {
                warn!("Sample data ended early ({} of {}), zero-padding", found, expected);
                values.resize(expected, T::default());
                Ok(values)
            }
            (RowPolicy::Strict, Encoding::Ascii) => Err(PnmError::ShapeError { expected, found }),
            (RowPolicy::Strict, Encoding::Binary) => Err(PnmError::SampleParseError(format!(
                "binary data truncated: expected {} bytes, found {}", expected, found
            ))),
        }
    }
}

fn parse_sample(token: &[u8], max: u32) -> PnmResult<u8> {
    let text = std::str::from_utf8(token).unwrap_or("");
    let value = text.parse::<u32>().map_err(|_| {
        PnmError::SampleParseError(format!("invalid sample token {:?}", String::from_utf8_lossy(token)))
    })?;
    if value > max {
        return Err(PnmError::SampleParseError(format!("sample {} exceeds max value {}", value, max)));
    }
    Ok(value as u8)
}

fn check_binary_range(values: &[u8], max: u8) -> PnmResult<()> {
    match values.iter().find(|&&v| v > max) {
        Some(v) => Err(PnmError::SampleParseError(format!("sample {} exceeds max value {}", v, max))),
        None => Ok(()),
    }
}

fn pack_rgb(channels: &[u8]) -> Vec<Rgb> {
    channels
        .chunks_exact(3)
        .map(|c| Rgb::new(c[0], c[1], c[2]))
        .collect()
}

/// Whitespace-separated tokens of an ASCII sample section, skipping `#` comments
struct AsciiTokens<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> AsciiTokens<'a> {
    fn new(data: &'a [u8]) -> Self {
        AsciiTokens { data, pos: 0 }
    }
}

impl<'a> Iterator for AsciiTokens<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            while self.pos < self.data.len() && self.data[self.pos].is_ascii_whitespace() {
                self.pos += 1;
            }
            if self.pos >= self.data.len() {
                return None;
            }
            if self.data[self.pos] == b'#' {
                while self.pos < self.data.len() && self.data[self.pos] != b'\n' {
                    self.pos += 1;
                }
                continue;
            }

            let start = self.pos;
            while self.pos < self.data.len()
                && !self.data[self.pos].is_ascii_whitespace()
                && self.data[self.pos] != b'#'
            {
                self.pos += 1;
            }
            return Some(&self.data[start..self.pos]);
        }
    }
}
