//! Antimeridian crossing detection
//!
//! These are local heuristics on longitude values, not geodesic
//! computations: an edge crosses when its endpoints sit on opposite sides
//! and are more than 180 degrees apart after normalization.

use crate::errors::WarpResult;
use crate::geometry::{interpolate_y, valid_number, Point};

/// Wrap a longitude into [-180, 180]
///
/// Values below -180 land in [-180, 180), values above 180 in (-180, 180].
/// Non-finite values fail with `InvalidNumber`.
pub fn wrap_within(lon: f64) -> WarpResult<f64> {
    valid_number(lon)?;
    if lon < -180.0 {
        return Ok((lon + 180.0).rem_euclid(360.0) - 180.0);
    }
    if lon > 180.0 {
        let offset = (lon - 180.0).rem_euclid(360.0);
        return Ok(if offset == 0.0 { 180.0 } else { offset - 180.0 });
    }
    Ok(lon)
}

/// Test whether the edge between two longitudes crosses the antimeridian
///
/// An endpoint lying exactly on +-180 never counts as crossing.
pub fn is_crossing_antimeridian(lon1: f64, lon2: f64) -> WarpResult<bool> {
    let wrapped1 = wrap_within(lon1)?;
    let wrapped2 = wrap_within(lon2)?;
    if (lon1 - lon2).abs() > 360.0 {
        return Ok(true);
    }

    if wrapped1.abs() == 180.0 || wrapped2.abs() == 180.0 {
        return Ok(false);
    }

    if wrapped1 * wrapped2 > 0.0 {
        return Ok(false);
    }

    Ok((wrapped1 - wrapped2).abs() > 180.0)
}

/// Latitude where the edge p1-p2 meets the boundary meridian
///
/// Negative longitudes are shifted into [0, 360) and the latitude is
/// interpolated linearly at the nearest multiple of 180 below the larger
/// shifted longitude.
pub fn crossing_antimeridian_point_lat(p1: &Point, p2: &Point) -> WarpResult<f64> {
    p1.validate()?;
    p2.validate()?;
    let x1 = shift_positive(p1.x);
    let x2 = shift_positive(p2.x);
    let bound = 180.0 * (x1.max(x2) / 180.0).floor();

    interpolate_y(&Point::new(x1, p1.y), &Point::new(x2, p2.y), bound)
}

fn shift_positive(x: f64) -> f64 {
    if x < 0.0 {
        x.rem_euclid(360.0)
    } else {
        x
    }
}
