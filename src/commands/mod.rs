//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod analyze_command;
pub mod transform_command;
pub mod render_command;

pub use command_traits::{Command, CommandFactory};
pub use analyze_command::AnalyzeCommand;
pub use transform_command::TransformCommand;
pub use render_command::RenderCommand;

use clap::ArgMatches;
use log::debug;

use crate::pnm::config::PnmConfig;
use crate::pnm::errors::{PnmError, PnmResult};
use crate::pnm::image::RasterImage;
use crate::pnm::reader::PnmReader;
use crate::utils::logger::Logger;

/// Flags that turn an invocation into a transform
const TRANSFORM_FLAGS: [&str; 6] = ["invert", "flip-horizontal", "flip-vertical", "to-gray", "to-bitmap", "to-color"];

/// Factory for creating command instances based on CLI arguments
///
/// `--scene` selects rendering, any transform flag, `--rotate`,
/// `--encoding` or `-o` selects transforming, and analysis is the default.
pub struct PnmkitCommandFactory;

impl PnmkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        PnmkitCommandFactory
    }
}

impl Default for PnmkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for PnmkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> PnmResult<Box<dyn Command + 'a>> {
        if args.get_one::<String>("scene").is_some() {
            Ok(Box::new(RenderCommand::new(args, logger)?))
        } else if wants_transform(args) {
            Ok(Box::new(TransformCommand::new(args, logger)?))
        } else {
            Ok(Box::new(AnalyzeCommand::new(args, logger)?))
        }
    }
}

fn wants_transform(args: &ArgMatches) -> bool {
    TRANSFORM_FLAGS.iter().any(|flag| args.get_flag(flag))
        || args.get_one::<String>("rotate").is_some()
        || args.get_one::<String>("encoding").is_some()
        || args.get_one::<String>("output").is_some()
}

/// Reads the string argument `name` or fails with a message naming it
pub(crate) fn required_arg(args: &ArgMatches, name: &str, what: &str) -> PnmResult<String> {
    args.get_one::<String>(name)
        .cloned()
        .ok_or_else(|| PnmError::GenericError(format!("Missing {}", what)))
}

/// Builds the configuration from `--config` and `--strict`
pub(crate) fn load_config(args: &ArgMatches) -> PnmResult<PnmConfig> {
    let mut config = match args.get_one::<String>("config") {
        Some(path) => PnmConfig::load(path)?,
        None => PnmConfig::default(),
    };
    if args.get_flag("strict") {
        config.decode = crate::pnm::config::DecodeOptions::strict();
    }
    debug!("Effective configuration: {:?}", config);
    Ok(config)
}

/// Loads the input image with the configured decode options
pub(crate) fn load_input(path: &str, config: &PnmConfig) -> PnmResult<RasterImage> {
    let mut reader = PnmReader::new(config.decode);
    reader.load(path)
}
