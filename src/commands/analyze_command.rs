//! Netpbm image analysis command
//!
//! Reports the format, dimensions and sample range of an image and,
//! in verbose mode, its sample rows.

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::commands::{load_config, load_input, required_arg};
use crate::pnm::config::PnmConfig;
use crate::pnm::errors::PnmResult;
use crate::pnm::image::{RasterImage, Samples};
use crate::utils::logger::Logger;

/// Rows printed in verbose mode before the listing is cut short
const MAX_LISTED_ROWS: usize = 16;

/// Command for analyzing a Netpbm file
pub struct AnalyzeCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Whether to list sample rows
    verbose: bool,
    config: PnmConfig,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> AnalyzeCommand<'a> {
    /// Create a new analyze command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new AnalyzeCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> PnmResult<Self> {
        Ok(AnalyzeCommand {
            input_file: required_arg(args, "input", "input file")?,
            verbose: args.get_flag("verbose"),
            config: load_config(args)?,
            logger,
        })
    }

    fn display_rows(&self, image: &RasterImage) {
        let listed = image.height().min(MAX_LISTED_ROWS);
        info!("  First {} row(s):", listed);
        for y in 0..listed {
            info!("    {}", format_row(image.samples(), y));
        }
        if image.height() > MAX_LISTED_ROWS {
            info!("    ... ({} more rows)", image.height() - MAX_LISTED_ROWS);
        }
    }
}

/// Summary entries for an image: format, size, max value and sample range
pub fn describe(image: &RasterImage) -> Vec<(&'static str, String)> {
    let format = image.format();
    let mut entries = vec![
        ("Format", format!("{} ({})", format.name(), format.magic())),
        ("Dimensions", format!("{}x{}", image.width(), image.height())),
    ];
    entries.push((
        "Max value",
        image.max_value().map_or_else(|| "n/a".to_string(), |m| m.to_string()),
    ));
    entries.push(("Sample range", sample_range(image.samples())));
    entries
}

fn sample_range(samples: &Samples) -> String {
    match samples {
        Samples::Bitmap(grid) => {
            let set = grid.iter().filter(|bit| **bit).count();
            format!("{} of {} bits set", set, grid.width() * grid.height())
        }
        Samples::Gray(grid) => {
            let min = grid.iter().copied().min().unwrap_or(0);
            let max = grid.iter().copied().max().unwrap_or(0);
            format!("{}..={}", min, max)
        }
        Samples::Color(grid) => {
            let channels = grid.iter().flat_map(|c| [c.r, c.g, c.b]);
            let (min, max) = channels.fold((u8::MAX, u8::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)));
            format!("{}..={}", min, max)
        }
    }
}

fn format_row(samples: &Samples, y: usize) -> String {
    match samples {
        Samples::Bitmap(grid) => grid
            .row(y)
            .map(|row| row.iter().map(|bit| if *bit { '1' } else { '0' }).collect())
            .unwrap_or_default(),
        Samples::Gray(grid) => grid
            .row(y)
            .map(|row| row.iter().map(|v| format!("{:>3}", v)).collect::<Vec<_>>().join(" "))
            .unwrap_or_default(),
        Samples::Color(grid) => grid
            .row(y)
            .map(|row| {
                row.iter()
                    .map(|c| format!("({},{},{})", c.r, c.g, c.b))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_default(),
    }
}

impl<'a> Command for AnalyzeCommand<'a> {
    fn execute(&self) -> PnmResult<()> {
        info!("Analyzing file: {}", self.input_file);

        let image = load_input(&self.input_file, &self.config)?;
        let entries = describe(&image);

        info!("Netpbm Analysis Results:");
        for (key, value) in &entries {
            info!("  {}: {}", key, value);
        }

        if self.verbose {
            debug!("Verbose mode enabled");
            self.display_rows(&image);
        }

        self.logger.log_section(&format!("Analysis of {}", self.input_file), &entries)?;
        debug!("Analysis completed successfully");
        Ok(())
    }
}
