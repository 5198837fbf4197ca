//! Point structure for representing coordinates

use serde::ser::{Serialize, SerializeSeq, Serializer};
use crate::errors::{WarpError, WarpResult};

/// Tolerance used for every floating-point equality comparison
pub const EPSILON: f64 = 1e-8;

/// Compare two values with the shared tolerance
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// A point in a coordinate system
///
/// Components beyond x and y (height, measure, ...) are carried through
/// every operation unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// X coordinate (longitude in geographic systems)
    pub x: f64,
    /// Y coordinate (latitude in geographic systems)
    pub y: f64,
    /// Additional components, passed through untouched
    pub extra: Vec<f64>,
}

impl Point {
    /// Create a new 2D point
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y, extra: Vec::new() }
    }

    /// Create a point with pass-through components
    pub fn with_extra(x: f64, y: f64, extra: Vec<f64>) -> Self {
        Point { x, y, extra }
    }

    /// Build a point from a raw coordinate tuple, validating it first
    pub fn from_coords(coords: &[f64]) -> WarpResult<Self> {
        valid_point(coords)?;
        Ok(Point::with_extra(coords[0], coords[1], coords[2..].to_vec()))
    }

    /// Same planar location, ignoring pass-through components
    pub fn same_xy(&self, other: &Point) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Check that every component is a finite number
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.extra.iter().all(|v| v.is_finite())
    }

    /// Fail with `InvalidPoint` unless every component is finite
    pub fn validate(&self) -> WarpResult<()> {
        if self.is_finite() {
            Ok(())
        } else {
            Err(WarpError::InvalidPoint)
        }
    }

    /// Copy of this point with new planar coordinates and the same extras
    pub fn moved_to(&self, x: f64, y: f64) -> Point {
        Point::with_extra(x, y, self.extra.clone())
    }
}

impl Serialize for Point {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(2 + self.extra.len()))?;
        seq.serialize_element(&self.x)?;
        seq.serialize_element(&self.y)?;
        for v in &self.extra {
            seq.serialize_element(v)?;
        }
        seq.end()
    }
}

/// Validate a single coordinate value
pub fn valid_number(value: f64) -> WarpResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(WarpError::InvalidNumber)
    }
}

/// Validate a raw point: at least two components, all finite
pub fn valid_point(coords: &[f64]) -> WarpResult<()> {
    if coords.len() < 2 || coords.iter().any(|v| valid_number(*v).is_err()) {
        return Err(WarpError::InvalidPoint);
    }
    Ok(())
}

/// Validate a raw point sequence
pub fn valid_points(points: &[Vec<f64>]) -> WarpResult<()> {
    if points.iter().any(|p| valid_point(p).is_err()) {
        return Err(WarpError::InvalidPoints);
    }
    Ok(())
}

/// True if any component of any point is NaN or infinite
pub fn has_singularity(points: &[Point]) -> bool {
    points.iter().any(|p| !p.is_finite())
}
