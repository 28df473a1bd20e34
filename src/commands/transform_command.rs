//! Whole-image transform command
//!
//! Applies the transform flags in a fixed order: variant conversion,
//! inversion, horizontal flip, vertical flip, rotation, then the output
//! encoding. The result is written to `-o` when given.

use clap::ArgMatches;
use log::{debug, info, warn};

use crate::commands::command_traits::Command;
use crate::commands::{load_config, load_input, required_arg};
use crate::pnm::config::PnmConfig;
use crate::pnm::errors::{PnmError, PnmResult};
use crate::pnm::format::{Encoding, Variant};
use crate::pnm::image::RasterImage;
use crate::pnm::writer::PnmWriter;
use crate::utils::logger::Logger;

/// Transforms selected on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformPlan {
    pub convert_to: Option<Variant>,
    pub invert: bool,
    pub flip_horizontal: bool,
    pub flip_vertical: bool,
    /// Clockwise quarter turns, reduced modulo 4
    pub quarter_turns: u32,
    pub encoding: Option<Encoding>,
}

impl TransformPlan {
    /// Reads the plan from parsed CLI arguments
    pub fn from_args(args: &ArgMatches) -> PnmResult<Self> {
        let targets: Vec<Variant> = [
            ("to-gray", Variant::Gray),
            ("to-bitmap", Variant::Bitmap),
            ("to-color", Variant::Color),
        ]
        .iter()
        .filter(|(flag, _)| args.get_flag(flag))
        .map(|(_, variant)| *variant)
        .collect();
        if targets.len() > 1 {
            return Err(PnmError::GenericError(
                "Only one of --to-gray, --to-bitmap and --to-color may be given".to_string(),
            ));
        }

        let quarter_turns = match args.get_one::<String>("rotate") {
            Some(turns) => turns
                .parse::<u32>()
                .map(|n| n % 4)
                .map_err(|_| PnmError::GenericError(format!("Invalid rotation count: {}", turns)))?,
            None => 0,
        };

        let encoding = match args.get_one::<String>("encoding").map(|s| s.to_lowercase()) {
            None => None,
            Some(name) if name == "ascii" || name == "plain" => Some(Encoding::Ascii),
            Some(name) if name == "binary" || name == "raw" => Some(Encoding::Binary),
            Some(name) => return Err(PnmError::GenericError(format!("Unknown encoding: {}", name))),
        };

        Ok(TransformPlan {
            convert_to: targets.first().copied(),
            invert: args.get_flag("invert"),
            flip_horizontal: args.get_flag("flip-horizontal"),
            flip_vertical: args.get_flag("flip-vertical"),
            quarter_turns,
            encoding,
        })
    }

    /// Applies the plan to `image`
    pub fn apply(&self, image: RasterImage) -> RasterImage {
        let mut image = match self.convert_to {
            Some(variant) if variant != image.variant() => image.convert(variant),
            _ => image,
        };
        if self.invert {
            image.invert();
        }
        if self.flip_horizontal {
            image.flip_horizontal();
        }
        if self.flip_vertical {
            image.flip_vertical();
        }
        for _ in 0..self.quarter_turns {
            image = image.rotate_90_cw();
        }
        if let Some(encoding) = self.encoding {
            image.set_encoding(encoding);
        }
        image
    }
}

/// Command for transforming a Netpbm file
pub struct TransformCommand<'a> {
    input_file: String,
    output_file: Option<String>,
    plan: TransformPlan,
    config: PnmConfig,
    logger: &'a Logger,
}

impl<'a> TransformCommand<'a> {
    /// Create a new transform command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> PnmResult<Self> {
        Ok(TransformCommand {
            input_file: required_arg(args, "input", "input file")?,
            output_file: args.get_one::<String>("output").cloned(),
            plan: TransformPlan::from_args(args)?,
            config: load_config(args)?,
            logger,
        })
    }
}

impl<'a> Command for TransformCommand<'a> {
    fn execute(&self) -> PnmResult<()> {
        info!("Transforming file: {}", self.input_file);
        debug!("Transform plan: {:?}", self.plan);

        let image = load_input(&self.input_file, &self.config)?;
        let result = self.plan.apply(image);
        info!("Result: {} {}x{}", result.format(), result.width(), result.height());

        match &self.output_file {
            Some(path) => {
                PnmWriter::new().save(&result, path)?;
                info!("Wrote {}", path);
                self.logger.log(&format!("Transformed {} into {} ({})", self.input_file, path, result.format()))?;
            }
            None => warn!("No output file given, result discarded"),
        }
        Ok(())
    }
}
