//! Scene rendering command
//!
//! Draws a TOML scene onto the input image and writes the result.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::{load_config, load_input, required_arg};
use crate::pnm::config::PnmConfig;
use crate::pnm::errors::PnmResult;
use crate::pnm::writer::PnmWriter;
use crate::scene::Scene;
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// Command for drawing a scene onto an image
pub struct RenderCommand<'a> {
    input_file: String,
    scene_file: String,
    output_file: String,
    verbose: bool,
    config: PnmConfig,
    logger: &'a Logger,
}

impl<'a> RenderCommand<'a> {
    /// Create a new render command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new RenderCommand, or an error when the output path is missing
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> PnmResult<Self> {
        Ok(RenderCommand {
            input_file: required_arg(args, "input", "input file")?,
            scene_file: required_arg(args, "scene", "scene file")?,
            output_file: required_arg(args, "output", "output file path for rendering")?,
            verbose: args.get_flag("verbose"),
            config: load_config(args)?,
            logger,
        })
    }
}

impl<'a> Command for RenderCommand<'a> {
    fn execute(&self) -> PnmResult<()> {
        info!("Rendering {} onto {}", self.scene_file, self.input_file);

        let scene = Scene::load(&self.scene_file)?;
        let mut image = load_input(&self.input_file, &self.config)?;

        let progress = if self.verbose {
            ProgressTracker::new(scene.len() as u64, "Drawing shapes")
        } else {
            ProgressTracker::hidden(scene.len() as u64)
        };
        scene.apply(&mut image, self.config.raster, |_| progress.increment(1));
        progress.finish();

        PnmWriter::new().save(&image, &self.output_file)?;
        info!("Wrote {} shape(s) to {}", progress.position(), self.output_file);
        self.logger.log(&format!(
            "Rendered {} shape(s) from {} onto {} into {}",
            scene.len(),
            self.scene_file,
            self.input_file,
            self.output_file
        ))?;
        Ok(())
    }
}
