//! Bounding box reprojection

use log::debug;

use super::CutExtent;
use crate::antimeridian::{cut_ring_at_antimeridian, CutOptions};
use crate::coordinate::{BoundingBox, Reprojector};
use crate::errors::{WarpError, WarpResult};
use crate::geometry::is_ccw;
use crate::transform::{RingTransformer, TransformOptions};

/// Options for [`transform_bbox`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BboxOptions {
    /// Interior points per bbox edge before reprojection
    pub partition: usize,
    /// Report the eastern edge of a wrapped box past 180 instead of wrapping it
    pub expand: bool,
}

impl Default for BboxOptions {
    fn default() -> Self {
        BboxOptions {
            partition: 9,
            expand: false,
        }
    }
}

impl BboxOptions {
    pub fn with_partition(mut self, partition: usize) -> Self {
        self.partition = partition;
        self
    }

    pub fn with_expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }
}

impl<R: Reprojector> RingTransformer<R> {
    /// Reproject a bounding box into EPSG:4326
    ///
    /// `bounds` is `[left, bottom, right, top]` or
    /// `[left, bottom, min_h, right, top, max_h]`; heights are copied to the
    /// result. A box that lands across the antimeridian comes back with
    /// `max_x < min_x`, or with `max_x > 180` when `expand` is set.
    pub fn transform_bbox(&self, bounds: &[f64], src_crs: &str, options: BboxOptions) -> WarpResult<BoundingBox> {
        let source = BoundingBox::from_slice(bounds)?;
        if source.is_wrapped() {
            return Err(WarpError::NotAllowedWarpBounds);
        }

        let ring = self.transform_ring(
            &source.to_ring()?,
            src_crs,
            TransformOptions::default().with_partition(options.partition),
        )?;

        let mut result = if is_ccw(&ring) {
            BoundingBox::from_points(ring.points()).ok_or(WarpError::InvalidBounds)?
        } else {
            debug!("Reprojected bounds are clockwise, cutting at the antimeridian");
            let extent = cut_ring_at_antimeridian(&ring, CutOptions::default())
                .and_then(|cut| CutExtent::new(&cut, &ring))
                .map_err(|e| WarpError::FailedCuttingAntimeridian(Box::new(e)))?;
            let east = if options.expand { extent.east + 360.0 } else { extent.east };
            BoundingBox::new(extent.west, extent.south, east, extent.north)
        };

        result.heights = source.heights;
        Ok(result)
    }
}

/// Reproject a bounding box with the default `proj4rs` engine
pub fn transform_bbox(bounds: &[f64], src_crs: &str, options: BboxOptions) -> WarpResult<BoundingBox> {
    RingTransformer::new().transform_bbox(bounds, src_crs, options)
}
