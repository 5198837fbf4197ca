//! Bounding box reprojection command

use clap::ArgMatches;
use log::info;

use crate::builders::BboxOptions;
use crate::commands::command_traits::Command;
use crate::commands::{parse_partition, required_arg, resolve_crs};
use crate::coordinate::BoundingBox;
use crate::errors::WarpResult;
use crate::transform::RingTransformer;
use crate::utils::io_utils::write_output;
use crate::utils::logger::Logger;

/// Command reprojecting a bounding box into EPSG:4326
pub struct BboxCommand<'a> {
    /// Bounds with 4 or 6 values
    bounds: Vec<f64>,
    /// Source CRS as given on the command line
    crs: String,
    /// Interior points per edge
    partition: usize,
    /// Report a wrapped east edge past 180
    expand: bool,
    /// Output path, stdout if absent
    output_file: Option<String>,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> BboxCommand<'a> {
    /// Create a new bbox command
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> WarpResult<Self> {
        let bounds = BoundingBox::from_string(&required_arg(args, "bounds")?)?.to_vec();

        Ok(BboxCommand {
            bounds,
            crs: required_arg(args, "crs")?,
            partition: parse_partition(args, BboxOptions::default().partition)?,
            expand: args.get_flag("expand"),
            output_file: args.get_one::<String>("output").cloned(),
            logger,
        })
    }
}

impl<'a> Command for BboxCommand<'a> {
    fn execute(&self) -> WarpResult<()> {
        let src_crs = resolve_crs(&self.crs)?;
        let options = BboxOptions::default()
            .with_partition(self.partition)
            .with_expand(self.expand);

        let bbox = RingTransformer::new().transform_bbox(&self.bounds, &src_crs, options)?;
        if bbox.is_wrapped() {
            info!("Bounds wrap around the antimeridian");
        }

        write_output(self.output_file.as_deref(), &serde_json::to_string(&bbox.to_vec())?)?;
        self.logger.log("Bounding box reprojection completed successfully")?;
        Ok(())
    }
}
