//! High-level builders
//!
//! Combine reprojection and antimeridian cutting into bounding boxes and
//! GeoJSON features in EPSG:4326.

mod bbox;
mod geojson;

pub use self::bbox::{transform_bbox, BboxOptions};
pub use self::geojson::{
    geojson_from_corner_coordinates, geojson_from_linear_ring, Feature, GeoJsonOptions, Geometry,
};

use crate::antimeridian::CutRing;
use crate::errors::{WarpError, WarpResult};
use crate::geometry::Ring;

/// Extent of a ring that was cut at the antimeridian
///
/// `west` is the smallest longitude of the `within` fragments and `east`
/// the largest longitude of the `outside` fragments, so `east < west`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CutExtent {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl CutExtent {
    pub(crate) fn new(cut: &CutRing, ring: &Ring) -> WarpResult<Self> {
        let west = cut.within.iter().flat_map(|r| r.points()).map(|p| p.x).reduce(f64::min);
        let east = cut.outside.iter().flat_map(|r| r.points()).map(|p| p.x).reduce(f64::max);
        let south = ring.points().iter().map(|p| p.y).reduce(f64::min);
        let north = ring.points().iter().map(|p| p.y).reduce(f64::max);

        match (west, south, east, north) {
            (Some(west), Some(south), Some(east), Some(north)) => Ok(CutExtent { west, south, east, north }),
            _ => Err(WarpError::GenericError(format!(
                "cut produced {} within and {} outside fragments",
                cut.within.len(),
                cut.outside.len()
            ))),
        }
    }
}
