//! Command pattern interfaces
//!
//! Each CLI operation is a [`Command`]; a [`CommandFactory`] picks the
//! command matching the parsed arguments.

use crate::utils::logger::Logger;
use crate::pnm::errors::PnmResult;

/// Represents an executable command in the application
pub trait Command {
    /// Execute the command
    ///
    /// # Returns
    /// Result indicating success or an error
    fn execute(&self) -> PnmResult<()>;
}

/// Factory for creating commands from CLI arguments
pub trait CommandFactory<'a> {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A command that implements the Command trait, or an error
    fn create_command(&self, args: &clap::ArgMatches, logger: &'a Logger) -> PnmResult<Box<dyn Command + 'a>>;
}
