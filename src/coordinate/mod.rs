//! Coordinate reference systems and reprojection
//!
//! This module provides the CRS constants and EPSG lookup, the
//! reprojection gateway and the bounding box type.

mod bbox;
mod crs;
mod transform;

// Re-export key types
pub use self::bbox::BoundingBox;
pub use self::crs::{
    get_crs, is_geographic, same_crs, CrsCode, EpsgDefinitions, CRS_ANTARCTIC_POLAR_STEREOGRAPHIC,
    CRS_ARCTIC_POLAR_STEREOGRAPHIC, CRS_EPSG4326,
};
pub use self::transform::{CoordinateTransformer, Proj4Reprojector, Reprojector};
