//! Antimeridian-safe and pole-safe normalization of planar rings
//!
//! Rings in any CRS are densified, reprojected into EPSG:4326, routed
//! around enclosed poles and cut at the antimeridian, then emitted as
//! GeoJSON features or bounding boxes.

pub mod errors;
pub mod geometry;
pub mod coordinate;
pub mod antimeridian;
pub mod transform;
pub mod builders;
pub mod commands;
pub mod utils;

pub use errors::{WarpError, WarpResult};
pub use geometry::{Point, Ring, WithinOptions};
pub use coordinate::{get_crs, BoundingBox, CoordinateTransformer, Proj4Reprojector, Reprojector};
pub use antimeridian::{cut_ring_at_antimeridian, expand_ring_at_antimeridian, CutOptions, CutRing};
pub use transform::{transform_ring, RingTransformer, TransformOptions};
pub use builders::{
    geojson_from_corner_coordinates, geojson_from_linear_ring, transform_bbox, BboxOptions, Feature, GeoJsonOptions,
    Geometry,
};
