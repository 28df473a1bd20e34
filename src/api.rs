use log::info;

use crate::commands::analyze_command::describe;
use crate::pnm::config::PnmConfig;
use crate::pnm::errors::PnmResult;
use crate::pnm::format::{Encoding, Variant};
use crate::pnm::image::RasterImage;
use crate::pnm::reader::PnmReader;
use crate::pnm::writer::PnmWriter;
use crate::scene::Scene;
use crate::utils::logger::Logger;

/// Main interface to the pnmkit library
pub struct PnmKit {
    logger: Logger,
    config: PnmConfig,
}

impl PnmKit {
    /// Create a new PnmKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to an operation log; nothing is logged without one
    /// * `config` - Decoding and rasterizer settings
    ///
    /// # Returns
    /// A PnmKit instance or an error if the log file cannot be created
    pub fn new(log_file: Option<&str>, config: PnmConfig) -> PnmResult<Self> {
        let logger = match log_file {
            Some(path) => Logger::new(path)?,
            None => Logger::disabled(),
        };
        Ok(PnmKit { logger, config })
    }

    pub fn config(&self) -> &PnmConfig {
        &self.config
    }

    /// Reads an image file with the configured decode options
    pub fn open(&self, input_path: &str) -> PnmResult<RasterImage> {
        PnmReader::new(self.config.decode).load(input_path)
    }

    /// Analyze a Netpbm file and return a printable summary
    pub fn analyze(&self, input_path: &str) -> PnmResult<String> {
        let image = self.open(input_path)?;
        let entries = describe(&image);
        self.logger.log_section(&format!("Analysis of {}", input_path), &entries)?;

        let mut result = String::from("Netpbm Analysis Results:\n");
        for (key, value) in &entries {
            result.push_str(&format!("  {}: {}\n", key, value));
        }
        Ok(result)
    }

    /// Converts a file to another variant and encoding
    ///
    /// # Arguments
    /// * `input_path` - Source image
    /// * `output_path` - Destination path, overwritten
    /// * `variant` - Target variant
    /// * `encoding` - Target encoding
    pub fn convert(&self, input_path: &str, output_path: &str, variant: Variant, encoding: Encoding) -> PnmResult<()> {
        let mut image = self.open(input_path)?.convert(variant);
        image.set_encoding(encoding);
        PnmWriter::new().save(&image, output_path)?;
        info!("Converted {} to {}", input_path, image.format());
        self.logger.log(&format!("Converted {} into {} ({})", input_path, output_path, image.format()))?;
        Ok(())
    }

    /// Draws a scene file onto an image file
    ///
    /// # Returns
    /// Number of scene items drawn
    pub fn render(&self, input_path: &str, scene_path: &str, output_path: &str) -> PnmResult<usize> {
        let scene = Scene::load(scene_path)?;
        let mut image = self.open(input_path)?;
        scene.apply(&mut image, self.config.raster, |_| {});
        PnmWriter::new().save(&image, output_path)?;
        self.logger.log(&format!("Rendered {} shape(s) into {}", scene.len(), output_path))?;
        Ok(scene.len())
    }
}
