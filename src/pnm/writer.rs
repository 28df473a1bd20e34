//! Netpbm encoder
//!
//! Writes the magic number, the dimensions line, the max value line (gray
//! and color only) and then the samples in the layout the decoder reads:
//! one text line per row for ASCII formats, raw bytes for binary formats.

use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::pnm::errors::PnmResult;
use crate::pnm::format::Encoding;
use crate::pnm::image::{RasterImage, Samples};

/// Encodes an image into a byte buffer
pub fn encode(image: &RasterImage) -> PnmResult<Vec<u8>> {
    let mut buffer = Vec::new();
    PnmWriter::new().write(image, &mut buffer)?;
    Ok(buffer)
}

/// Writer for Netpbm files
#[derive(Debug, Default)]
pub struct PnmWriter;

impl PnmWriter {
    pub fn new() -> Self {
        PnmWriter
    }

    /// Encodes `image` and writes it to `path` in one pass
    pub fn save(&self, image: &RasterImage, path: impl AsRef<Path>) -> PnmResult<()> {
        let path = path.as_ref();
        info!("Saving {} image to {}", image.format().magic(), path.display());
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write(image, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Writes the encoded image to any writer
    ///
    /// # Arguments
    /// * `image` - The image to encode
    /// * `writer` - Destination
    pub fn write(&self, image: &RasterImage, writer: &mut impl Write) -> PnmResult<()> {
        let format = image.format();
        debug!("Encoding {}x{} {}", image.width(), image.height(), format);

        writeln!(writer, "{}", format.magic())?;
        writeln!(writer, "{} {}", image.width(), image.height())?;
        if let Some(max) = image.max_value() {
            writeln!(writer, "{}", max)?;
        }

        match format.encoding {
            Encoding::Ascii => write_ascii(image.samples(), writer),
            Encoding::Binary => write_binary(image.samples(), writer),
        }
    }
}

fn write_ascii(samples: &Samples, writer: &mut impl Write) -> PnmResult<()> {
    match samples {
        Samples::Bitmap(grid) => {
            for row in grid.rows() {
                let line: Vec<&str> = row.iter().map(|&v| if v { "1" } else { "0" }).collect();
                writeln!(writer, "{}", line.join(" "))?;
            }
        }
        Samples::Gray(grid) => {
            for row in grid.rows() {
                let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
                writeln!(writer, "{}", line.join(" "))?;
            }
        }
        Samples::Color(grid) => {
            for row in grid.rows() {
                let line: Vec<String> = row
                    .iter()
                    .map(|p| format!("{} {} {}", p.r, p.g, p.b))
                    .collect();
                writeln!(writer, "{}", line.join(" "))?;
            }
        }
    }
    Ok(())
}

fn write_binary(samples: &Samples, writer: &mut impl Write) -> PnmResult<()> {
    match samples {
        Samples::Bitmap(grid) => {
            let row_bytes = (grid.width() + 7) / 8;
            for row in grid.rows() {
                let mut packed = vec![0u8; row_bytes];
                for (x, &bit) in row.iter().enumerate() {
                    if bit {
                        packed[x / 8] |= 0x80 >> (x % 8);
                    }
                }
                writer.write_all(&packed)?;
            }
        }
        Samples::Gray(grid) => {
            for row in grid.rows() {
                writer.write_all(row)?;
            }
        }
        Samples::Color(grid) => {
            for row in grid.rows() {
                let bytes: Vec<u8> = row.iter().flat_map(|p| [p.r, p.g, p.b]).collect();
                writer.write_all(&bytes)?;
            }
        }
    }
    Ok(())
}
