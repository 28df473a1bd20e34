//! Runtime configuration
//!
//! Settings are read from an optional TOML file. Unknown keys are ignored
//! and every missing key falls back to its default.

use std::fs;
use log::{debug, info};

use crate::pnm::errors::{PnmError, PnmResult};

/// Policy for sample data that ends before `width * height` samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowPolicy {
    /// Missing samples are zero-filled
    #[default]
    Pad,
    /// Missing samples are an error
    Strict,
}

impl RowPolicy {
    pub fn from_name(name: &str) -> PnmResult<Self> {
        match name.to_lowercase().as_str() {
            "pad" | "permissive" => Ok(RowPolicy::Pad),
            "strict" => Ok(RowPolicy::Strict),
            _ => Err(PnmError::ConfigError(format!("Unknown row policy: {}", name))),
        }
    }
}

/// Options for decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    pub row_policy: RowPolicy,
}

impl DecodeOptions {
    pub fn strict() -> Self {
        DecodeOptions { row_policy: RowPolicy::Strict }
    }
}

/// Default recursion bound for fractal generators
pub const DEFAULT_MAX_FRACTAL_DEPTH: u32 = 7;
/// Default gradient lattice spacing for noise, in pixels
pub const DEFAULT_NOISE_CELL_SIZE: u32 = 8;

/// Options for the rasterizer's procedural generators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterOptions {
    /// Deeper fractal requests are clamped to this depth
    pub max_fractal_depth: u32,
    /// Pixels per noise lattice cell (at least 1)
    pub noise_cell_size: u32,
    /// Seed for the gradient generator; `None` draws from system entropy
    pub noise_seed: Option<u64>,
}

impl Default for RasterOptions {
    fn default() -> Self {
        RasterOptions {
            max_fractal_depth: DEFAULT_MAX_FRACTAL_DEPTH,
            noise_cell_size: DEFAULT_NOISE_CELL_SIZE,
            noise_seed: None,
        }
    }
}

/// Complete configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PnmConfig {
    pub decode: DecodeOptions,
    pub raster: RasterOptions,
}

impl PnmConfig {
    /// Parses a configuration from TOML text
    ///
    /// Recognized keys: `row_policy`, `max_fractal_depth`,
    /// `noise_cell_size` and `noise_seed`.
    pub fn from_str(content: &str) -> PnmResult<Self> {
        let toml_value: toml::Table = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(PnmError::ConfigError(format!("Failed to parse TOML: {}", e))),
        };

        let mut config = PnmConfig::default();

        if let Some(value) = toml_value.get("row_policy") {
            let name = value
                .as_str()
                .ok_or_else(|| PnmError::ConfigError("row_policy must be a string".to_string()))?;
            config.decode.row_policy = RowPolicy::from_name(name)?;
        }

        if let Some(depth) = read_unsigned(&toml_value, "max_fractal_depth")? {
            config.raster.max_fractal_depth = depth as u32;
        }

        if let Some(cell) = read_unsigned(&toml_value, "noise_cell_size")? {
            if cell == 0 {
                return Err(PnmError::ConfigError("noise_cell_size must be positive".to_string()));
            }
            config.raster.noise_cell_size = cell as u32;
        }

        config.raster.noise_seed = read_unsigned(&toml_value, "noise_seed")?;

        debug!("Parsed configuration: {:?}", config);
        Ok(config)
    }

    /// Loads a configuration file
    pub fn load(path: &str) -> PnmResult<Self> {
        info!("Loading configuration from {}", path);
        let content = fs::read_to_string(path)?;
        Self::from_str(&content)
    }
}

fn read_unsigned(table: &toml::Table, key: &str) -> PnmResult<Option<u64>> {
    match table.get(key) {
        None => Ok(None),
        Some(value) => match value.as_integer() {
            Some(n) if n >= 0 && n <= u32::MAX as i64 => Ok(Some(n as u64)),
            Some(n) if n >= 0 && key == "noise_seed" => Ok(Some(n as u64)),
            _ => Err(PnmError::ConfigError(format!("{} must be a non-negative integer", key))),
        },
    }
}
