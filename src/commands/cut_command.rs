//! Antimeridian cut command
//!
//! Splits a geographic ring and writes `{"within": [...], "outside": [...]}`.

use clap::ArgMatches;
use log::info;

use crate::antimeridian::{cut_ring_at_antimeridian, CutOptions};
use crate::commands::command_traits::Command;
use crate::commands::{read_ring, required_arg};
use crate::errors::WarpResult;
use crate::utils::io_utils::write_output;
use crate::utils::logger::Logger;

/// Command cutting a ring at the antimeridian
pub struct CutCommand<'a> {
    /// Input path, `-` for stdin
    input_file: String,
    /// Keep self-intersecting fragments instead of failing
    allow_selfintersection: bool,
    /// Output path, stdout if absent
    output_file: Option<String>,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> CutCommand<'a> {
    /// Create a new cut command
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> WarpResult<Self> {
        Ok(CutCommand {
            input_file: required_arg(args, "input")?,
            allow_selfintersection: args.get_flag("allow-selfintersection"),
            output_file: args.get_one::<String>("output").cloned(),
            logger,
        })
    }
}

impl<'a> Command for CutCommand<'a> {
    fn execute(&self) -> WarpResult<()> {
        let ring = read_ring(&self.input_file)?;
        let options = CutOptions::default().with_allow_selfintersection(self.allow_selfintersection);
        let cut = cut_ring_at_antimeridian(&ring, options)?;
        info!("{} within and {} outside fragments", cut.within.len(), cut.outside.len());

        write_output(self.output_file.as_deref(), &serde_json::to_string(&cut)?)?;
        self.logger.log("Cut completed successfully")?;
        Ok(())
    }
}
