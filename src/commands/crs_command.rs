//! CRS lookup command

use clap::ArgMatches;

use crate::commands::command_traits::Command;
use crate::commands::{required_arg, resolve_crs};
use crate::errors::WarpResult;
use crate::utils::io_utils::write_output;
use crate::utils::logger::Logger;

/// Command printing the PROJ definition of a CRS code
pub struct CrsCommand<'a> {
    code: String,
    output_file: Option<String>,
    logger: &'a Logger,
}

impl<'a> CrsCommand<'a> {
    /// Create a new crs command
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> WarpResult<Self> {
        Ok(CrsCommand {
            code: required_arg(args, "code")?,
            output_file: args.get_one::<String>("output").cloned(),
            logger,
        })
    }
}

impl<'a> Command for CrsCommand<'a> {
    fn execute(&self) -> WarpResult<()> {
        let definition = resolve_crs(&self.code)?;
        write_output(self.output_file.as_deref(), &definition)?;
        self.logger.log(&format!("Resolved {}", self.code))?;
        Ok(())
    }
}
