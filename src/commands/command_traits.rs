//! Command pattern interfaces for the CLI

use crate::errors::WarpResult;
use crate::utils::logger::Logger;

/// One runnable subcommand, built from its parsed arguments
pub trait Command {
    fn execute(&self) -> WarpResult<()>;
}

/// Builds the command selected on the command line
pub trait CommandFactory<'a> {
    /// Pick the subcommand from `args`; `logger` is handed to the command
    fn create_command(&self, args: &clap::ArgMatches, logger: &'a Logger) -> WarpResult<Box<dyn Command + 'a>>;
}
