//! Netpbm format table
//!
//! Every supported format is a pair of a sample variant (bitmap, gray,
//! color) and an encoding (ASCII or binary). The six magic tokens, the
//! samples-per-pixel count and the presence of a max value line are all
//! looked up from one table instead of being repeated per format.

use std::collections::HashMap;
use std::fmt;
use lazy_static::lazy_static;

use crate::pnm::errors::{PnmError, PnmResult};

/// Kind of sample stored in an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// One boolean per pixel (PBM)
    Bitmap,
    /// One 8-bit magnitude per pixel (PGM)
    Gray,
    /// One RGB triplet per pixel (PPM)
    Color,
}

/// On-disk sample encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Whitespace separated decimal tokens ("plain" Netpbm)
    Ascii,
    /// Raw bytes following the header ("raw" Netpbm)
    Binary,
}

/// A complete Netpbm format: variant plus encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PnmFormat {
    pub variant: Variant,
    pub encoding: Encoding,
}

/// Row of the format table
struct FormatEntry {
    magic: &'static str,
    format: PnmFormat,
    name: &'static str,
    extension: &'static str,
}

const FORMAT_TABLE: [FormatEntry; 6] = [
    FormatEntry {
        magic: "P1",
        format: PnmFormat { variant: Variant::Bitmap, encoding: Encoding::Ascii },
        name: "Bitmap (ASCII)",
        extension: "pbm",
    },
    FormatEntry {
        magic: "P2",
        format: PnmFormat { variant: Variant::Gray, encoding: Encoding::Ascii },
        name: "Graymap (ASCII)",
        extension: "pgm",
    },
    FormatEntry {
        magic: "P3",
        format: PnmFormat { variant: Variant::Color, encoding: Encoding::Ascii },
        name: "Pixmap (ASCII)",
        extension: "ppm",
    },
    FormatEntry {
        magic: "P4",
        format: PnmFormat { variant: Variant::Bitmap, encoding: Encoding::Binary },
        name: "Bitmap (binary)",
        extension: "pbm",
    },
    FormatEntry {
        magic: "P5",
        format: PnmFormat { variant: Variant::Gray, encoding: Encoding::Binary },
        name: "Graymap (binary)",
        extension: "pgm",
    },
    FormatEntry {
        magic: "P6",
        format: PnmFormat { variant: Variant::Color, encoding: Encoding::Binary },
        name: "Pixmap (binary)",
        extension: "ppm",
    },
];

lazy_static! {
    // Magic token -> table index, built once
    static ref MAGIC_LOOKUP: HashMap<&'static str, usize> = FORMAT_TABLE
        .iter()
        .enumerate()
        .map(|(i, entry)| (entry.magic, i))
        .collect();
}

impl Variant {
    /// Number of decimal tokens (ASCII) or bytes (binary) per pixel.
    /// Bitmaps pack eight pixels per byte in binary form.
    pub fn components(&self) -> usize {
        match self {
            Variant::Bitmap | Variant::Gray => 1,
            Variant::Color => 3,
        }
    }

    /// Whether the header carries a max value line
    pub fn has_max_value(&self) -> bool {
        !matches!(self, Variant::Bitmap)
    }
}

impl PnmFormat {
    pub fn new(variant: Variant, encoding: Encoding) -> Self {
        PnmFormat { variant, encoding }
    }

    /// Looks up a format by its magic token
    ///
    /// # Arguments
    /// * `token` - The first whitespace-delimited token of the file
    ///
    /// # Returns
    /// The matching format or a `MagicNumberError`
    pub fn from_magic(token: &str) -> PnmResult<Self> {
        MAGIC_LOOKUP
            .get(token)
            .map(|&i| FORMAT_TABLE[i].format)
            .ok_or_else(|| PnmError::MagicNumberError(token.to_string()))
    }

    fn entry(&self) -> &'static FormatEntry {
        // Indices follow the row order of FORMAT_TABLE
        let index = match (self.variant, self.encoding) {
            (Variant::Bitmap, Encoding::Ascii) => 0,
            (Variant::Gray, Encoding::Ascii) => 1,
            (Variant::Color, Encoding::Ascii) => 2,
            (Variant::Bitmap, Encoding::Binary) => 3,
            (Variant::Gray, Encoding::Binary) => 4,
            (Variant::Color, Encoding::Binary) => 5,
        };
        &FORMAT_TABLE[index]
    }

    /// Magic token written at the start of an encoded file
    pub fn magic(&self) -> &'static str {
        self.entry().magic
    }

    /// Human readable format name
    pub fn name(&self) -> &'static str {
        self.entry().name
    }

    /// Conventional file extension
    pub fn extension(&self) -> &'static str {
        self.entry().extension
    }
}

impl fmt::Display for PnmFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name(), self.magic())
    }
}
