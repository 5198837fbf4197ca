//! Ring densification and reprojection into geographic coordinates

use log::{debug, info};

use super::pole::Pole;
use crate::coordinate::{CoordinateTransformer, Proj4Reprojector, Reprojector, CRS_EPSG4326};
use crate::errors::{WarpError, WarpResult};
use crate::geometry::{subdivide, within, Point, Ring, WithinOptions};

/// Options for [`RingTransformer::transform_ring`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformOptions {
    /// Interior points inserted on every edge before reprojection
    pub partition: usize,
}

impl TransformOptions {
    /// Set the number of interior points per edge
    pub fn with_partition(mut self, partition: usize) -> Self {
        self.partition = partition;
        self
    }
}

/// Converts rings from any CRS into EPSG:4326, handling enclosed poles
#[derive(Debug, Clone, Default)]
pub struct RingTransformer<R = Proj4Reprojector> {
    pub(crate) coordinates: CoordinateTransformer<R>,
}

impl RingTransformer<Proj4Reprojector> {
    /// Create a ring transformer backed by `proj4rs`
    pub fn new() -> Self {
        RingTransformer {
            coordinates: CoordinateTransformer::new(),
        }
    }
}

impl<R: Reprojector> RingTransformer<R> {
    /// Create a ring transformer around another projection engine
    pub fn with_engine(engine: R) -> Self {
        RingTransformer {
            coordinates: CoordinateTransformer::with_engine(engine),
        }
    }

    /// Transform a ring from `src_crs` into geographic coordinates
    ///
    /// Rings enclosing one pole are rebuilt through a polar stereographic
    /// projection. Rings enclosing both poles are rejected.
    pub fn transform_ring(&self, ring: &Ring, src_crs: &str, options: TransformOptions) -> WarpResult<Ring> {
        let north = self.encloses_pole(ring, src_crs, Pole::North)?;
        let south = self.encloses_pole(ring, src_crs, Pole::South)?;

        match (north, south) {
            (true, true) => Err(WarpError::EnclosingBothPoles),
            (true, false) => self.transform_enclosing_pole_ring(ring, src_crs, options.partition, Pole::North),
            (false, true) => self.transform_enclosing_pole_ring(ring, src_crs, options.partition, Pole::South),
            (false, false) => {
                let densified = densify(ring.points(), options.partition)?;
                debug!(
                    "Densified ring from {} to {} points (partition {})",
                    ring.len(),
                    densified.len(),
                    options.partition
                );
                let projected = self.coordinates.transform_points(&densified, src_crs, CRS_EPSG4326)?;
                Ring::new(projected)
            }
        }
    }

    fn encloses_pole(&self, ring: &Ring, src_crs: &str, pole: Pole) -> WarpResult<bool> {
        let geographic = Point::new(0.0, pole.latitude());
        match self.coordinates.transform_point(&geographic, CRS_EPSG4326, src_crs) {
            Ok(projected) => {
                let enclosed = within(&projected, ring, WithinOptions::default())?;
                if enclosed {
                    info!("Ring encloses the {} pole", pole);
                }
                Ok(enclosed)
            }
            Err(e) => {
                debug!("The {} pole is not representable in the source CRS: {}", pole, e);
                Ok(false)
            }
        }
    }
}

/// Subdivide every edge and close the result
///
/// The last point of every subdivided edge is dropped, so shared vertices
/// appear once.
fn densify(points: &[Point], partition: usize) -> WarpResult<Vec<Point>> {
    let mut densified = Vec::with_capacity((points.len().saturating_sub(1)) * (partition + 1) + 1);
    for pair in points.windows(2) {
        let mut edge = subdivide(&pair[0], &pair[1], partition)?;
        edge.pop();
        densified.extend(edge);
    }
    if let Some(first) = densified.first().cloned() {
        densified.push(first);
    }
    Ok(densified)
}

/// Transform a ring with the default `proj4rs` engine
pub fn transform_ring(ring: &Ring, src_crs: &str, options: TransformOptions) -> WarpResult<Ring> {
    RingTransformer::new().transform_ring(ring, src_crs, options)
}
