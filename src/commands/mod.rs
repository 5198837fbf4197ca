//! CLI command implementations
//!
//! This module contains the subcommands of the `ringwarp` binary,
//! implemented with the Command pattern, and the clap definition that
//! feeds them.

pub mod command_traits;
pub mod ring_command;
pub mod bbox_command;
pub mod cut_command;
pub mod crs_command;

pub use command_traits::{Command, CommandFactory};
pub use ring_command::RingCommand;
pub use bbox_command::BboxCommand;
pub use cut_command::CutCommand;
pub use crs_command::CrsCommand;

use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};

use crate::coordinate::get_crs;
use crate::errors::{WarpError, WarpResult};
use crate::geometry::Ring;
use crate::utils::io_utils::read_input;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
///
/// Dispatches on the subcommand name and hands the subcommand's own
/// matches to the command constructor.
pub struct RingwarpCommandFactory;

impl RingwarpCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        RingwarpCommandFactory
    }
}

impl Default for RingwarpCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for RingwarpCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> WarpResult<Box<dyn Command + 'a>> {
        match args.subcommand() {
            Some(("ring", sub)) => Ok(Box::new(RingCommand::new(sub, logger)?)),
            Some(("bbox", sub)) => Ok(Box::new(BboxCommand::new(sub, logger)?)),
            Some(("cut", sub)) => Ok(Box::new(CutCommand::new(sub, logger)?)),
            Some(("crs", sub)) => Ok(Box::new(CrsCommand::new(sub, logger)?)),
            Some((name, _)) => Err(WarpError::GenericError(format!("Unknown command: {}", name))),
            None => Err(WarpError::GenericError("Missing command".to_string())),
        }
    }
}

/// Command line definition of the `ringwarp` binary
pub fn cli() -> ClapCommand {
    let crs_arg = Arg::new("crs")
        .long("crs")
        .help("Source CRS: EPSG code (4326, EPSG:3857) or PROJ definition")
        .value_name("CODE")
        .default_value("4326");
    let partition_arg = Arg::new("partition")
        .short('p')
        .long("partition")
        .help("Points inserted on every edge before reprojection")
        .value_name("N");

    ClapCommand::new("ringwarp")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalize rings into antimeridian-safe and pole-safe geographic geometry")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write the result to this file instead of stdout")
                .value_name("FILE")
                .global(true),
        )
        .subcommand(
            ClapCommand::new("ring")
                .about("Convert a ring (JSON coordinate array) into a GeoJSON feature")
                .arg(Arg::new("input").help("Input JSON file, - for stdin").required(true).index(1))
                .arg(crs_arg.clone())
                .arg(partition_arg.clone()),
        )
        .subcommand(
            ClapCommand::new("bbox")
                .about("Reproject a bounding box into EPSG:4326")
                .arg(
                    Arg::new("bounds")
                        .help("minx,miny,maxx,maxy or minx,miny,minh,maxx,maxy,maxh")
                        .required(true)
                        .allow_hyphen_values(true)
                        .index(1),
                )
                .arg(crs_arg)
                .arg(partition_arg)
                .arg(
                    Arg::new("expand")
                        .long("expand")
                        .help("Report the east edge of wrapped bounds past 180")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            ClapCommand::new("cut")
                .about("Cut a geographic ring at the antimeridian")
                .arg(Arg::new("input").help("Input JSON file, - for stdin").required(true).index(1))
                .arg(
                    Arg::new("allow-selfintersection")
                        .long("allow-selfintersection")
                        .help("Keep self-intersecting fragments instead of failing")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            ClapCommand::new("crs")
                .about("Print the PROJ definition of a CRS code")
                .arg(Arg::new("code").help("EPSG code, e.g. 4326 or EPSG:3857").required(true).index(1)),
        )
}

pub(crate) fn required_arg(args: &ArgMatches, id: &str) -> WarpResult<String> {
    args.get_one::<String>(id)
        .cloned()
        .ok_or_else(|| WarpError::GenericError(format!("Missing argument: {}", id)))
}

pub(crate) fn parse_partition(args: &ArgMatches, default: usize) -> WarpResult<usize> {
    match args.get_one::<String>("partition") {
        Some(value) => value
            .trim()
            .parse::<usize>()
            .map_err(|_| WarpError::GenericError(format!("Invalid partition: {}", value))),
        None => Ok(default),
    }
}

/// Resolve a command-line CRS; bare numbers are EPSG codes
pub(crate) fn resolve_crs(value: &str) -> WarpResult<String> {
    match value.trim().parse::<u32>() {
        Ok(code) => get_crs(code),
        Err(_) => get_crs(value),
    }
}

/// Read a ring given as a JSON array of coordinate arrays
pub(crate) fn read_ring(path: &str) -> WarpResult<Ring> {
    let coords: Vec<Vec<f64>> = serde_json::from_str(&read_input(path)?)?;
    Ring::from_coords(&coords)
}
