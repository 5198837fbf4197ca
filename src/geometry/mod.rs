//! Planar geometry primitives
//!
//! Points, closed rings and the predicates the cutter and the ring
//! transformer rely on. Every equality test uses [`EPSILON`].

mod interpolation;
mod point;
mod ring;
mod segment;

pub use self::interpolation::{interpolate_x, interpolate_y, subdivide};
pub use self::point::{approx_eq, has_singularity, valid_number, valid_point, valid_points, Point, EPSILON};
pub use self::ring::{
    area, enclosing, is_ccw, overlapping, selfintersection, signed_area, valid_linear_ring, within, Ring,
    WithinOptions,
};
pub use self::segment::intersection;
