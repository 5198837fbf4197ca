//! GeoJSON features from rings in any CRS

use log::debug;
use serde::Serialize;
use serde_json::{Map, Value};

use super::CutExtent;
use crate::antimeridian::{cut_ring_at_antimeridian, CutOptions};
use crate::coordinate::{BoundingBox, Reprojector};
use crate::errors::{WarpError, WarpResult};
use crate::geometry::{is_ccw, Point, Ring};
use crate::transform::{RingTransformer, TransformOptions};

/// Options for the GeoJSON builders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeoJsonOptions {
    /// Interior points per edge before reprojection
    pub partition: usize,
}

impl Default for GeoJsonOptions {
    fn default() -> Self {
        GeoJsonOptions { partition: 9 }
    }
}

impl GeoJsonOptions {
    pub fn with_partition(mut self, partition: usize) -> Self {
        self.partition = partition;
        self
    }
}

/// GeoJSON geometry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon { coordinates: Vec<Ring> },
    /// First polygon holds the `within` fragments, second the `outside` ones
    MultiPolygon { coordinates: Vec<Vec<Ring>> },
}

/// GeoJSON feature with an empty property set
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    pub bbox: Vec<f64>,
    pub properties: Map<String, Value>,
    pub geometry: Geometry,
}

impl Feature {
    fn new(bbox: BoundingBox, geometry: Geometry) -> Self {
        Feature {
            bbox: bbox.to_vec(),
            properties: Map::new(),
            geometry,
        }
    }

    /// Serialize to a JSON string
    pub fn to_json(&self) -> WarpResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<R: Reprojector> RingTransformer<R> {
    /// Build a GeoJSON feature from a counter-clockwise ring
    ///
    /// If the reprojected ring is still counter-clockwise it becomes a
    /// Polygon. Otherwise it wraps around the antimeridian and is cut into
    /// a MultiPolygon whose bbox has `bbox[2] < bbox[0]`.
    pub fn geojson_from_linear_ring(&self, ring: &Ring, src_crs: &str, options: GeoJsonOptions) -> WarpResult<Feature> {
        if !is_ccw(ring) {
            return Err(WarpError::NotAllowedCwLinearRing);
        }

        let points = self.transform_ring(ring, src_crs, TransformOptions::default().with_partition(options.partition))?;

        if is_ccw(&points) {
            let bbox = BoundingBox::from_points(points.points()).ok_or(WarpError::InvalidLinearRing)?;
            return Ok(Feature::new(bbox, Geometry::Polygon { coordinates: vec![points] }));
        }

        let cut = cut_ring_at_antimeridian(&points, CutOptions::default())?;
        let extent = CutExtent::new(&cut, &points)?;
        debug!(
            "Feature split into {} within and {} outside rings",
            cut.within.len(),
            cut.outside.len()
        );

        let bbox = BoundingBox::new(extent.west, extent.south, extent.east, extent.north);
        Ok(Feature::new(
            bbox,
            Geometry::MultiPolygon {
                coordinates: vec![cut.within, cut.outside],
            },
        ))
    }

    /// Build a GeoJSON feature from the four corners of a raster footprint
    pub fn geojson_from_corner_coordinates(
        &self,
        upper_left: &Point,
        lower_left: &Point,
        upper_right: &Point,
        lower_right: &Point,
        src_crs: &str,
        options: GeoJsonOptions,
    ) -> WarpResult<Feature> {
        let ring = Ring::new(vec![
            upper_left.clone(),
            lower_left.clone(),
            lower_right.clone(),
            upper_right.clone(),
            upper_left.clone(),
        ])?;
        self.geojson_from_linear_ring(&ring, src_crs, options)
    }
}

/// [`RingTransformer::geojson_from_linear_ring`] with the default `proj4rs` engine
pub fn geojson_from_linear_ring(ring: &Ring, src_crs: &str, options: GeoJsonOptions) -> WarpResult<Feature> {
    RingTransformer::new().geojson_from_linear_ring(ring, src_crs, options)
}

/// [`RingTransformer::geojson_from_corner_coordinates`] with the default `proj4rs` engine
pub fn geojson_from_corner_coordinates(
    upper_left: &Point,
    lower_left: &Point,
    upper_right: &Point,
    lower_right: &Point,
    src_crs: &str,
    options: GeoJsonOptions,
) -> WarpResult<Feature> {
    RingTransformer::new().geojson_from_corner_coordinates(
        upper_left,
        lower_left,
        upper_right,
        lower_right,
        src_crs,
        options,
    )
}
