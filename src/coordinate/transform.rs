//! Coordinate transformation gateway
//!
//! Projection mathematics live in an external engine behind the
//! [`Reprojector`] trait. [`CoordinateTransformer`] wraps an engine, adds
//! the identity shortcut and keeps pass-through components intact.

use log::debug;
use proj4rs::transform::transform;
use proj4rs::Proj;

use super::crs::same_crs;
use crate::errors::{WarpError, WarpResult};
use crate::geometry::Point;

/// A point-wise projection engine
pub trait Reprojector {
    /// Project planar coordinates from `src_crs` to `dst_crs`
    ///
    /// Geographic coordinates are in degrees on both sides.
    fn project(&self, coords: &[(f64, f64)], src_crs: &str, dst_crs: &str) -> WarpResult<Vec<(f64, f64)>>;
}

/// Engine backed by the pure-Rust `proj4rs` port
#[derive(Debug, Clone, Copy, Default)]
pub struct Proj4Reprojector;

impl Proj4Reprojector {
    fn parse(definition: &str) -> WarpResult<Proj> {
        Proj::from_proj_string(definition.trim())
            .map_err(|e| WarpError::Projection(format!("invalid definition '{}': {:?}", definition.trim(), e)))
    }
}

impl Reprojector for Proj4Reprojector {
    fn project(&self, coords: &[(f64, f64)], src_crs: &str, dst_crs: &str) -> WarpResult<Vec<(f64, f64)>> {
        let src = Self::parse(src_crs)?;
        let dst = Self::parse(dst_crs)?;

        coords
            .iter()
            .map(|&(x, y)| {
                let mut point = if src.is_latlong() {
                    (x.to_radians(), y.to_radians(), 0.0)
                } else {
                    (x, y, 0.0)
                };
                transform(&src, &dst, &mut point)
                    .map_err(|e| WarpError::Projection(format!("cannot project ({}, {}): {:?}", x, y, e)))?;
                if dst.is_latlong() {
                    Ok((point.0.to_degrees(), point.1.to_degrees()))
                } else {
                    Ok((point.0, point.1))
                }
            })
            .collect()
    }
}

/// Transformer for converting points between coordinate systems
#[derive(Debug, Clone, Default)]
pub struct CoordinateTransformer<R = Proj4Reprojector> {
    engine: R,
}

impl CoordinateTransformer<Proj4Reprojector> {
    /// Create a transformer using the `proj4rs` engine
    pub fn new() -> Self {
        CoordinateTransformer { engine: Proj4Reprojector }
    }
}

impl<R: Reprojector> CoordinateTransformer<R> {
    /// Create a transformer around another engine
    pub fn with_engine(engine: R) -> Self {
        CoordinateTransformer { engine }
    }

    /// Transform a single point
    pub fn transform_point(&self, point: &Point, src_crs: &str, dst_crs: &str) -> WarpResult<Point> {
        let mut points = self.transform_points(std::slice::from_ref(point), src_crs, dst_crs)?;
        points
            .pop()
            .ok_or_else(|| WarpError::Projection("engine returned no point".to_string()))
    }

    /// Transform a batch of points
    ///
    /// Identity when both definitions are equal. Components beyond x and y
    /// are copied from the input. A non-finite result is an error.
    pub fn transform_points(&self, points: &[Point], src_crs: &str, dst_crs: &str) -> WarpResult<Vec<Point>> {
        if same_crs(src_crs, dst_crs) {
            return Ok(points.to_vec());
        }

        let coords: Vec<(f64, f64)> = points.iter().map(|p| (p.x, p.y)).collect();
        let projected = self.engine.project(&coords, src_crs, dst_crs)?;
        if projected.len() != points.len() {
            return Err(WarpError::Projection(format!(
                "engine returned {} points for {} inputs",
                projected.len(),
                points.len()
            )));
        }

        debug!("Projected {} points from '{}' to '{}'", points.len(), src_crs.trim(), dst_crs.trim());

        points
            .iter()
            .zip(projected)
            .map(|(p, (x, y))| {
                if x.is_finite() && y.is_finite() {
                    Ok(p.moved_to(x, y))
                } else {
                    Err(WarpError::Projection(format!("non-finite result for ({}, {})", p.x, p.y)))
                }
            })
            .collect()
    }
}
