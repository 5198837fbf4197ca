//! Antimeridian handling
//!
//! Crossing detection on longitudes, recursive cutting of rings into
//! `within` and `outside` fragments, and expansion into continuous
//! longitudes.

mod crossing;
mod cutter;
mod expand;

pub use self::crossing::{crossing_antimeridian_point_lat, is_crossing_antimeridian, wrap_within};
pub use self::cutter::{cut_ring_at_antimeridian, find_crossings, CrossingLat, CutOptions, CutRing};
pub use self::expand::expand_ring_at_antimeridian;
