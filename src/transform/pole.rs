//! Rings enclosing a geographic pole
//!
//! In plate carrée a ring around a pole cannot close without
//! self-intersecting. The ring is moved into a polar stereographic plane,
//! where the pole is the origin and the 0/180 meridian is the y axis. The
//! single edge crossing the ray from the origin towards the antimeridian
//! is split there and the ring is routed along ±180 up to the pole and back.

use std::fmt;

use log::debug;

use super::ring_transformer::RingTransformer;
use crate::coordinate::{Reprojector, CRS_ANTARCTIC_POLAR_STEREOGRAPHIC, CRS_ARCTIC_POLAR_STEREOGRAPHIC, CRS_EPSG4326};
use crate::errors::{WarpError, WarpResult};
use crate::geometry::{interpolate_y, intersection, subdivide, Point, Ring};

/// Length of the antimeridian ray in the stereographic plane (2^53 - 1)
const RAY_LENGTH: f64 = 9007199254740991.0;

/// A geographic pole
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pole {
    North,
    South,
}

impl Pole {
    /// Latitude of the pole in degrees
    pub fn latitude(self) -> f64 {
        match self {
            Pole::North => 90.0,
            Pole::South => -90.0,
        }
    }

    /// Auxiliary CRS centered on the pole
    pub fn stereographic_crs(self) -> &'static str {
        match self {
            Pole::North => CRS_ARCTIC_POLAR_STEREOGRAPHIC,
            Pole::South => CRS_ANTARCTIC_POLAR_STEREOGRAPHIC,
        }
    }

    // The antimeridian lies on +y around the north pole, on -y around the south pole.
    fn ray_end(self) -> Point {
        match self {
            Pole::North => Point::new(0.0, RAY_LENGTH),
            Pole::South => Point::new(0.0, -RAY_LENGTH),
        }
    }
}

impl fmt::Display for Pole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pole::North => write!(f, "north"),
            Pole::South => write!(f, "south"),
        }
    }
}

impl<R: Reprojector> RingTransformer<R> {
    /// Rebuild a ring that encloses `pole` as a geographic ring
    ///
    /// Fails with `InvalidLinearRingEnclosingPole` unless exactly one edge
    /// crosses the antimeridian ray in the stereographic plane.
    pub fn transform_enclosing_pole_ring(
        &self,
        ring: &Ring,
        src_crs: &str,
        partition: usize,
        pole: Pole,
    ) -> WarpResult<Ring> {
        let temp_crs = pole.stereographic_crs();
        let polar = self.coordinates.transform_points(ring.points(), src_crs, temp_crs)?;

        let origin = Point::new(0.0, 0.0);
        let ray_end = pole.ray_end();
        let mut crossings: Vec<(usize, f64)> = Vec::new();
        for (i, edge) in polar.windows(2).enumerate() {
            if intersection(&edge[0], &edge[1], &origin, &ray_end)? {
                crossings.push((i, interpolate_y(&edge[0], &edge[1], 0.0)?));
            }
        }

        let (crossing_edge, crossing_y) = match crossings.as_slice() {
            [single] => *single,
            _ => {
                debug!("Expected one antimeridian crossing around the {} pole, found {}", pole, crossings.len());
                return Err(WarpError::InvalidLinearRingEnclosingPole);
            }
        };

        let crossing = Point::new(0.0, crossing_y);
        let mut points = Vec::new();
        for (i, edge) in polar.windows(2).enumerate() {
            if i != crossing_edge {
                let mut part = self.to_geographic(&subdivide(&edge[0], &edge[1], partition)?, temp_crs)?;
                part.pop();
                points.extend(part);
                continue;
            }

            let head = self.to_geographic(&subdivide(&edge[0], &crossing, partition)?, temp_crs)?;
            let (turn, body) = head.split_last().ok_or(WarpError::InvalidLinearRingEnclosingPole)?;
            points.extend_from_slice(body);

            let side = if head[0].x >= 0.0 { 180.0 } else { -180.0 };
            points.push(Point::new(side, turn.y));
            points.push(Point::new(side, pole.latitude()));
            points.push(Point::new(-side, pole.latitude()));
            points.push(Point::new(-side, turn.y));

            let tail = self.to_geographic(&subdivide(&crossing, &edge[1], partition)?, temp_crs)?;
            if tail.len() > 2 {
                points.extend_from_slice(&tail[1..tail.len() - 1]);
            }
        }

        if let Some(first) = points.first().cloned() {
            points.push(first);
        }
        debug!("Rebuilt {} pole ring with {} points", pole, points.len());
        Ring::new(points)
    }

    fn to_geographic(&self, points: &[Point], temp_crs: &str) -> WarpResult<Vec<Point>> {
        self.coordinates.transform_points(points, temp_crs, CRS_EPSG4326)
    }
}
