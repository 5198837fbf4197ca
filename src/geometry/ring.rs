//! Closed rings and the planar predicates defined on them

use serde::ser::{Serialize, Serializer};

use super::point::{valid_points, Point, EPSILON};
use super::segment::segments_intersect;
use crate::errors::{WarpError, WarpResult};

/// A closed vertex sequence: at least 4 points, first equal to last
///
/// Construction through [`Ring::new`] or [`Ring::from_coords`] validates the
/// sequence, so every function taking a `&Ring` works on well-formed input.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    points: Vec<Point>,
}

impl Ring {
    /// Create a ring from points, validating closure and finiteness
    pub fn new(points: Vec<Point>) -> WarpResult<Self> {
        if points.iter().any(|p| !p.is_finite()) {
            return Err(WarpError::InvalidLinearRing);
        }
        valid_closure(&points)?;
        Ok(Ring { points })
    }

    /// Create a ring from raw coordinate tuples
    pub fn from_coords(coords: &[Vec<f64>]) -> WarpResult<Self> {
        valid_linear_ring(coords)?;
        let points = coords
            .iter()
            .map(|c| Point::with_extra(c[0], c[1], c[2..].to_vec()))
            .collect();
        Ok(Ring { points })
    }

    /// Wrap points produced internally from an already valid ring
    pub(crate) fn from_points_unchecked(points: Vec<Point>) -> Self {
        debug_assert!(points.len() > 3);
        Ring { points }
    }

    /// All points, closing point included
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points, closing point included
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a valid ring has at least 4 points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of edges (one less than the number of points)
    pub fn edge_count(&self) -> usize {
        self.points.len() - 1
    }

    /// Iterate over consecutive point pairs
    pub fn edges(&self) -> impl Iterator<Item = (&Point, &Point)> {
        self.points.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// The same ring traversed in the opposite direction
    pub fn reversed(&self) -> Ring {
        let mut points = self.points.clone();
        points.reverse();
        Ring { points }
    }
}

impl Serialize for Ring {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.points.serialize(serializer)
    }
}

fn valid_closure(points: &[Point]) -> WarpResult<()> {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() > 3 && first.same_xy(last) => Ok(()),
        _ => Err(WarpError::InvalidLinearRing),
    }
}

/// Validate raw coordinates as a linear ring
///
/// Any structural problem, including an invalid point, is reported as
/// `InvalidLinearRing`.
pub fn valid_linear_ring(coords: &[Vec<f64>]) -> WarpResult<()> {
    valid_points(coords).map_err(|_| WarpError::InvalidLinearRing)?;
    let closed = match (coords.first(), coords.last()) {
        (Some(first), Some(last)) => first[0] == last[0] && first[1] == last[1],
        _ => false,
    };
    if coords.len() <= 3 || !closed {
        return Err(WarpError::InvalidLinearRing);
    }
    Ok(())
}

/// Shoelace area; positive for counter-clockwise rings
pub fn signed_area(ring: &Ring) -> f64 {
    ring.edges().map(|(a, b)| a.x * b.y - a.y * b.x).sum::<f64>() / 2.0
}

/// Unsigned planar area
pub fn area(ring: &Ring) -> f64 {
    signed_area(ring).abs()
}

/// Counter-clockwise iff the signed area is not negative
pub fn is_ccw(ring: &Ring) -> bool {
    signed_area(ring) >= 0.0
}

/// Options for [`within`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WithinOptions {
    /// Report points lying exactly on an edge as inside
    pub include_border: bool,
}

impl WithinOptions {
    /// Set whether border points count as inside
    pub fn with_include_border(mut self, include_border: bool) -> Self {
        self.include_border = include_border;
        self
    }
}

/// Winding-number containment test
pub fn within(point: &Point, ring: &Ring, options: WithinOptions) -> WarpResult<bool> {
    if !point.is_finite() {
        return Err(WarpError::InvalidPoint);
    }

    let mut theta = 0.0;
    for (a, b) in ring.edges() {
        let (x1, y1) = (a.x - point.x, a.y - point.y);
        let (x2, y2) = (b.x - point.x, b.y - point.y);

        let dot = x1 * x2 + y1 * y2;
        let cross = x1 * y2 - x2 * y1;
        if cross.abs() < EPSILON && dot <= 0.0 {
            return Ok(options.include_border);
        }
        theta += cross.atan2(dot);
    }

    // about 2*pi inside, about 0 outside
    Ok(theta.abs() > 1.0)
}

/// Check whether a ring intersects itself
///
/// Consecutive duplicate vertices are collapsed first. A triangle is
/// reported as self-intersecting only when it is degenerate.
pub fn selfintersection(ring: &Ring) -> bool {
    let mut vertices: Vec<&Point> = Vec::with_capacity(ring.len());
    for p in ring.points() {
        if vertices.last().map_or(true, |last| !last.same_xy(p)) {
            vertices.push(p);
        }
    }

    if vertices.len() < 4 {
        return false;
    }

    if vertices.len() == 4 {
        let (a, b, c) = (vertices[0], vertices[1], vertices[2]);
        let doubled = a.y * (b.x - c.x) + b.y * (c.x - a.x) + c.y * (a.x - b.x);
        return doubled.abs() < EPSILON;
    }

    let edge_count = vertices.len() - 1;
    for i in 0..edge_count {
        for j in (i + 2)..edge_count {
            // first and last edge share the closing vertex
            if i == 0 && j == edge_count - 1 {
                continue;
            }
            if segments_intersect(vertices[i], vertices[i + 1], vertices[j], vertices[j + 1]) {
                return true;
            }
        }
    }

    false
}

/// True if the two rings share any area, edge or vertex
pub fn overlapping(a: &Ring, b: &Ring) -> WarpResult<bool> {
    let border = WithinOptions::default().with_include_border(true);
    for p in a.points() {
        if within(p, b, border)? {
            return Ok(true);
        }
    }
    for p in b.points() {
        if within(p, a, border)? {
            return Ok(true);
        }
    }

    Ok(a
        .edges()
        .any(|(p1, p2)| b.edges().any(|(p3, p4)| segments_intersect(p1, p2, p3, p4))))
}

/// True if every vertex of `inner` lies within `outer` (border included)
pub fn enclosing(inner: &Ring, outer: &Ring) -> WarpResult<bool> {
    let border = WithinOptions::default().with_include_border(true);
    for p in inner.points() {
        if !within(p, outer, border)? {
            return Ok(false);
        }
    }
    Ok(true)
}
