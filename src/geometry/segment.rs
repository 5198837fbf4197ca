//! Segment-segment intersection

use super::point::Point;
use crate::errors::WarpResult;

/// Test whether segment p1-p2 and segment p3-p4 intersect
///
/// Touching endpoints and collinear overlapping segments count as
/// intersecting. Non-finite points are rejected with `InvalidPoint`.
pub fn intersection(p1: &Point, p2: &Point, p3: &Point, p4: &Point) -> WarpResult<bool> {
    for p in [p1, p2, p3, p4] {
        p.validate()?;
    }
    Ok(segments_intersect(p1, p2, p3, p4))
}

// Ring edges are validated on construction.
pub(crate) fn segments_intersect(p1: &Point, p2: &Point, p3: &Point, p4: &Point) -> bool {
    if separated(p1.x, p2.x, p3.x, p4.x) || separated(p1.y, p2.y, p3.y, p4.y) {
        return false;
    }

    if side(p1, p2, p3) * side(p1, p2, p4) > 0.0 {
        return false;
    }

    if side(p3, p4, p1) * side(p3, p4, p2) > 0.0 {
        return false;
    }

    true
}

// Axis-aligned rejection on one axis.
fn separated(a1: f64, a2: f64, b1: f64, b2: f64) -> bool {
    let (hi, lo) = if a1 >= a2 { (a1, a2) } else { (a2, a1) };
    (hi < b1 && hi < b2) || (lo > b1 && lo > b2)
}

// Orientation of `q` relative to the line through a-b.
fn side(a: &Point, b: &Point, q: &Point) -> f64 {
    (a.x - b.x) * (q.y - a.y) + (a.y - b.y) * (a.x - q.x)
}
