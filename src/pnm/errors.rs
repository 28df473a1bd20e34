//! Custom error types for Netpbm processing

use std::fmt;
use std::io;

/// Netpbm-specific error types
#[derive(Debug)]
pub enum PnmError {
    /// I/O error
    IoError(io::Error),
    /// Missing or unrecognized magic number token
    MagicNumberError(String),
    /// Missing or malformed width, height or max value
    DimensionError(String),
    /// Non-numeric or out-of-range sample, or truncated binary data
    SampleParseError(String),
    /// Row or sample count mismatch under the strict row policy
    ShapeError { expected: usize, found: usize },
    /// Invalid configuration or scene file
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for PnmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PnmError::IoError(e) => write!(f, "I/O error: {}", e),
            PnmError::MagicNumberError(token) => write!(f, "Unrecognized magic number: {:?}", token),
            PnmError::DimensionError(msg) => write!(f, "Invalid dimensions: {}", msg),
            PnmError::SampleParseError(msg) => write!(f, "Invalid sample data: {}", msg),
            PnmError::ShapeError { expected, found } => {
                write!(f, "Sample count mismatch: expected {}, found {}", expected, found)
            }
            PnmError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            PnmError::GenericError(msg) => write!(f, "Netpbm error: {}", msg),
        }
    }
}

impl std::error::Error for PnmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PnmError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PnmError {
    fn from(error: io::Error) -> Self {
        PnmError::IoError(error)
    }
}

/// Result type for Netpbm operations
pub type PnmResult<T> = Result<T, PnmError>;

impl From<String> for PnmError {
    fn from(msg: String) -> Self {
        PnmError::GenericError(msg)
    }
}
