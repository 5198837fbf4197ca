//! Deterministic projection engines for tests

use crate::antimeridian::wrap_within;
use crate::coordinate::{
    same_crs, Reprojector, CRS_ANTARCTIC_POLAR_STEREOGRAPHIC, CRS_ARCTIC_POLAR_STEREOGRAPHIC, CRS_EPSG4326,
};
use crate::errors::{WarpError, WarpResult};

/// Stereographic distance of the equator from the pole
pub const SCALE: f64 = 1_000_000.0;

/// Spherical polar stereographic projections keyed by the polar CRS constants
pub struct SphericalStereographic;

#[derive(Clone, Copy)]
enum Plane {
    Geographic,
    North,
    South,
}

fn plane(crs: &str) -> WarpResult<Plane> {
    if same_crs(crs, CRS_EPSG4326) {
        Ok(Plane::Geographic)
    } else if same_crs(crs, CRS_ARCTIC_POLAR_STEREOGRAPHIC) {
        Ok(Plane::North)
    } else if same_crs(crs, CRS_ANTARCTIC_POLAR_STEREOGRAPHIC) {
        Ok(Plane::South)
    } else {
        Err(WarpError::Projection(format!("unsupported test CRS '{}'", crs)))
    }
}

fn to_lonlat(plane: Plane, x: f64, y: f64) -> (f64, f64) {
    let rho = x.hypot(y);
    match plane {
        Plane::Geographic => (x, y),
        Plane::North => (x.atan2(-y).to_degrees(), 90.0 - 2.0 * (rho / SCALE).atan().to_degrees()),
        Plane::South => (x.atan2(y).to_degrees(), -90.0 + 2.0 * (rho / SCALE).atan().to_degrees()),
    }
}

fn from_lonlat(plane: Plane, lon: f64, lat: f64) -> (f64, f64) {
    let lambda = lon.to_radians();
    let phi = lat.to_radians();
    match plane {
        Plane::Geographic => (lon, lat),
        Plane::North => {
            let rho = SCALE * (std::f64::consts::FRAC_PI_4 - phi / 2.0).tan();
            (rho * lambda.sin(), -rho * lambda.cos())
        }
        Plane::South => {
            let rho = SCALE * (std::f64::consts::FRAC_PI_4 + phi / 2.0).tan();
            (rho * lambda.sin(), rho * lambda.cos())
        }
    }
}

impl Reprojector for SphericalStereographic {
    fn project(&self, coords: &[(f64, f64)], src_crs: &str, dst_crs: &str) -> WarpResult<Vec<(f64, f64)>> {
        let src = plane(src_crs)?;
        let dst = plane(dst_crs)?;
        Ok(coords
            .iter()
            .map(|&(x, y)| {
                let (lon, lat) = to_lonlat(src, x, y);
                from_lonlat(dst, lon, lat)
            })
            .collect())
    }
}

/// Treats any non-geographic CRS as unwrapped longitudes, wrapping into [-180, 180] on the way out
pub struct WrapLongitude;

impl Reprojector for WrapLongitude {
    fn project(&self, coords: &[(f64, f64)], _src_crs: &str, dst_crs: &str) -> WarpResult<Vec<(f64, f64)>> {
        let geographic = same_crs(dst_crs, CRS_EPSG4326);
        coords
            .iter()
            .map(|&(x, y)| -> WarpResult<(f64, f64)> { Ok(if geographic { (wrap_within(x)?, y) } else { (x, y) }) })
            .collect()
    }
}

/// Mirrors longitudes, turning counter-clockwise rings clockwise
pub struct MirrorLongitude;

impl Reprojector for MirrorLongitude {
    fn project(&self, coords: &[(f64, f64)], _src_crs: &str, _dst_crs: &str) -> WarpResult<Vec<(f64, f64)>> {
        Ok(coords.iter().map(|&(x, y)| (-x, y)).collect())
    }
}
