//! Linear interpolation along straight segments
//!
//! Reprojection does not preserve straight lines, so edges are densified
//! with [`subdivide`] before their points are sent through a projection.

use super::point::{approx_eq, valid_number, Point};
use crate::errors::WarpResult;

/// X coordinate on the line p1-p2 at the given y
///
/// A horizontal segment has no unique answer; p1.x is returned.
pub fn interpolate_x(p1: &Point, p2: &Point, y: f64) -> WarpResult<f64> {
    p1.validate()?;
    p2.validate()?;
    valid_number(y)?;
    if approx_eq(p1.y, p2.y) {
        return Ok(p1.x);
    }
    Ok(p1.x + ((y - p1.y) * (p2.x - p1.x)) / (p2.y - p1.y))
}

/// Y coordinate on the line p1-p2 at the given x
///
/// A vertical segment has no unique answer; p1.y is returned.
pub fn interpolate_y(p1: &Point, p2: &Point, x: f64) -> WarpResult<f64> {
    p1.validate()?;
    p2.validate()?;
    valid_number(x)?;
    Ok(y_at(p1, p2, x))
}

fn y_at(p1: &Point, p2: &Point, x: f64) -> f64 {
    if approx_eq(p1.x, p2.x) {
        return p1.y;
    }
    p1.y + ((x - p1.x) * (p2.y - p1.y)) / (p2.x - p1.x)
}

/// Split p1-p2 into `partition + 1` equal steps
///
/// Returns `partition + 2` points, starting with p1 and ending with p2.
/// The endpoints keep their pass-through components; inserted points are 2D.
pub fn subdivide(p1: &Point, p2: &Point, partition: usize) -> WarpResult<Vec<Point>> {
    p1.validate()?;
    p2.validate()?;
    if partition == 0 {
        return Ok(vec![p1.clone(), p2.clone()]);
    }

    let steps = (partition + 1) as f64;
    let mut points = Vec::with_capacity(partition + 2);
    points.push(p1.clone());
    for i in 1..=partition {
        let t = i as f64;
        let point = if approx_eq(p1.x, p2.x) {
            Point::new(p1.x, p1.y + (t * (p2.y - p1.y)) / steps)
        } else if approx_eq(p1.y, p2.y) {
            Point::new(p1.x + (t * (p2.x - p1.x)) / steps, p1.y)
        } else {
            let x = p1.x + (t * (p2.x - p1.x)) / steps;
            Point::new(x, y_at(p1, p2, x))
        };
        points.push(point);
    }
    points.push(p2.clone());
    Ok(points)
}
