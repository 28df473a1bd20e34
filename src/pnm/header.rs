//! Netpbm header parsing
//!
//! The header is line oriented: a magic-number line, a `width height`
//! line and, for gray and color images, a max value line. Blank lines and
//! lines starting with `#` may appear between them. Binary sample data
//! starts right after the newline that ends the last header line.

use log::{debug, warn};

use crate::pnm::errors::{PnmError, PnmResult};
use crate::pnm::format::PnmFormat;
use crate::pnm::image::checked_sample_count;

/// Parsed header fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PnmHeader {
    pub format: PnmFormat,
    pub width: usize,
    pub height: usize,
    /// Present for gray and color formats only
    pub max_value: Option<u8>,
}

impl PnmHeader {
    /// Number of pixels the raster section must provide
    ///
    /// Headers from `parse_header` stay within `MAX_SAMPLE_COUNT`; the
    /// product saturates for hand-built ones.
    pub fn pixel_count(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// Number of decimal tokens (ASCII) or bytes (binary gray/color) in the raster section
    pub fn sample_count(&self) -> usize {
        self.pixel_count().saturating_mul(self.format.variant.components())
    }

    /// Bytes per packed row of a binary bitmap
    pub fn bitmap_row_bytes(&self) -> usize {
        self.width / 8 + usize::from(self.width % 8 != 0)
    }
}

/// Cursor over raw bytes that hands out header lines
struct LineCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> LineCursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        LineCursor { data, pos: 0 }
    }

    /// Returns the next line without its terminator, or `None` at end of input
    fn next_line(&mut self) -> Option<&'a [u8]> {
        if self.pos >= self.data.len() {
            return None;
        }
        let rest = &self.data[self.pos..];
        match rest.iter().position(|&b| b == b'\n') {
            Some(end) => {
                self.pos += end + 1;
                Some(trim_cr(&rest[..end]))
            }
            None => {
                self.pos = self.data.len();
                Some(trim_cr(rest))
            }
        }
    }

    /// Returns the next line that is neither blank nor a comment
    fn next_content_line(&mut self) -> Option<&'a [u8]> {
        while let Some(line) = self.next_line() {
            match line.iter().find(|b| !b.is_ascii_whitespace()) {
                None | Some(b'#') => continue,
                Some(_) => return Some(line),
            }
        }
        None
    }

    fn position(&self) -> usize {
        self.pos
    }
}

fn trim_cr(line: &[u8]) -> &[u8] {
    match line.last() {
        Some(b'\r') => &line[..line.len() - 1],
        _ => line,
    }
}

/// Splits a header line into tokens, dropping a trailing `#` comment
fn header_tokens(line: &[u8]) -> Vec<&str> {
    let content = match line.iter().position(|&b| b == b'#') {
        Some(i) => &line[..i],
        None => line,
    };
    std::str::from_utf8(content)
        .map(|s| s.split_ascii_whitespace().collect())
        .unwrap_or_default()
}

/// Parses the header at the start of `data`
///
/// # Arguments
/// * `data` - The complete encoded image
///
/// # Returns
/// The header and the byte offset at which sample data begins
pub fn parse_header(data: &[u8]) -> PnmResult<(PnmHeader, usize)> {
    let mut cursor = LineCursor::new(data);

    let magic_line = cursor
        .next_content_line()
        .ok_or_else(|| PnmError::MagicNumberError(String::new()))?;
    let magic_tokens = header_tokens(magic_line);
    let magic = magic_tokens.first().copied().unwrap_or("");
    let format = PnmFormat::from_magic(magic)?;
    if magic_tokens.len() > 1 {
        warn!("Ignoring {} extra token(s) on the magic number line", magic_tokens.len() - 1);
    }
    debug!("Magic number: {} ({})", magic, format.name());

    let dims_line = cursor
        .next_content_line()
        .ok_or_else(|| PnmError::DimensionError("missing dimensions line".to_string()))?;
    let (width, height) = parse_dimensions(dims_line)?;
    checked_sample_count(width, height, format.variant.components())?;
    debug!("Dimensions: {}x{}", width, height);

    let max_value = if format.variant.has_max_value() {
        let max_line = cursor
            .next_content_line()
            .ok_or_else(|| PnmError::DimensionError("missing max value line".to_string()))?;
        let max = parse_max_value(max_line)?;
        debug!("Max value: {}", max);
        Some(max)
    } else {
        None
    };

    let header = PnmHeader { format, width, height, max_value };
    Ok((header, cursor.position()))
}

fn parse_dimensions(line: &[u8]) -> PnmResult<(usize, usize)> {
    let tokens = header_tokens(line);
    if tokens.len() != 2 {
        return Err(PnmError::DimensionError(format!(
            "expected `width height`, found {} token(s)", tokens.len()
        )));
    }

    let width = parse_positive(tokens[0], "width")?;
    let height = parse_positive(tokens[1], "height")?;
    Ok((width, height))
}

fn parse_max_value(line: &[u8]) -> PnmResult<u8> {
    let tokens = header_tokens(line);
    if tokens.len() != 1 {
        return Err(PnmError::DimensionError(format!(
            "expected a single max value, found {} token(s)", tokens.len()
        )));
    }

    let max = parse_positive(tokens[0], "max value")?;
    if max > u8::MAX as usize {
        return Err(PnmError::DimensionError(format!(
            "max value {} needs 16-bit samples, which are not supported", max
        )));
    }
    Ok(max as u8)
}

fn parse_positive(token: &str, what: &str) -> PnmResult<usize> {
    match token.parse::<usize>() {
        Ok(0) => Err(PnmError::DimensionError(format!("{} must be positive", what))),
        Ok(v) => Ok(v),
        Err(_) => Err(PnmError::DimensionError(format!("invalid {}: {:?}", what, token))),
    }
}
