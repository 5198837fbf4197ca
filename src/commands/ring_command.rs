//! Ring to GeoJSON command
//!
//! Reads a ring as a JSON coordinate array and writes the GeoJSON feature
//! of its geographic footprint.

use clap::ArgMatches;
use log::info;

use crate::builders::{GeoJsonOptions, Geometry};
use crate::commands::command_traits::Command;
use crate::commands::{parse_partition, read_ring, required_arg, resolve_crs};
use crate::errors::WarpResult;
use crate::transform::RingTransformer;
use crate::utils::io_utils::write_output;
use crate::utils::logger::Logger;

/// Command converting a ring into a GeoJSON feature
pub struct RingCommand<'a> {
    /// Input path, `-` for stdin
    input_file: String,
    /// Source CRS as given on the command line
    crs: String,
    /// Interior points per edge
    partition: usize,
    /// Output path, stdout if absent
    output_file: Option<String>,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> RingCommand<'a> {
    /// Create a new ring command
    ///
    /// # Arguments
    /// * `args` - subcommand argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> WarpResult<Self> {
        Ok(RingCommand {
            input_file: required_arg(args, "input")?,
            crs: required_arg(args, "crs")?,
            partition: parse_partition(args, GeoJsonOptions::default().partition)?,
            output_file: args.get_one::<String>("output").cloned(),
            logger,
        })
    }
}

impl<'a> Command for RingCommand<'a> {
    fn execute(&self) -> WarpResult<()> {
        let ring = read_ring(&self.input_file)?;
        let src_crs = resolve_crs(&self.crs)?;
        info!("Building GeoJSON for a ring of {} points from '{}'", ring.len(), src_crs);

        let options = GeoJsonOptions::default().with_partition(self.partition);
        let feature = RingTransformer::new().geojson_from_linear_ring(&ring, &src_crs, options)?;

        match &feature.geometry {
            Geometry::Polygon { .. } => info!("Result is a Polygon"),
            Geometry::MultiPolygon { .. } => info!("Result was cut at the antimeridian into a MultiPolygon"),
        }

        write_output(self.output_file.as_deref(), &feature.to_json()?)?;
        self.logger.log("Ring conversion completed successfully")?;
        Ok(())
    }
}
