//! Recursive ring cutting at the antimeridian
//!
//! A ring is walked as a fixed point arena with cyclic indices. The two
//! highest-latitude crossings split it into two fragments, each closed along
//! the boundary meridian, and each fragment is cut again until no fragment
//! crosses twice.

use log::debug;
use serde::Serialize;

use super::crossing::{crossing_antimeridian_point_lat, is_crossing_antimeridian};
use crate::errors::{WarpError, WarpResult};
use crate::geometry::{selfintersection, Point, Ring};

/// An edge crossing the antimeridian and the latitude at the crossing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossingLat {
    /// Index of the edge start
    pub from: usize,
    /// Index of the edge end
    pub to: usize,
    /// Interpolated latitude on the boundary meridian
    pub lat: f64,
}

/// Options for [`cut_ring_at_antimeridian`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CutOptions {
    /// The ring lies past the canonical range and belongs to `outside`
    pub overflowing: bool,
    /// Skip the self-intersection check on produced fragments
    pub allow_selfintersection: bool,
}

impl CutOptions {
    /// Set the overflowing flag
    pub fn with_overflowing(mut self, overflowing: bool) -> Self {
        self.overflowing = overflowing;
        self
    }

    /// Allow self-intersecting fragments
    pub fn with_allow_selfintersection(mut self, allow: bool) -> Self {
        self.allow_selfintersection = allow;
        self
    }
}

/// Fragments of a ring split at the antimeridian
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CutRing {
    /// Fragments in the canonical longitude range
    pub within: Vec<Ring>,
    /// Fragments mirrored past the boundary
    pub outside: Vec<Ring>,
}

impl CutRing {
    /// Total number of fragments
    pub fn len(&self) -> usize {
        self.within.len() + self.outside.len()
    }

    /// True if there are no fragments
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over every fragment, `within` first
    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        self.within.iter().chain(self.outside.iter())
    }
}

struct CutArea {
    overflowing: bool,
    ring: Ring,
}

/// Every edge of the ring that crosses the antimeridian, in ring order
pub fn find_crossings(ring: &Ring) -> WarpResult<Vec<CrossingLat>> {
    let points = ring.points();
    let mut crossings = Vec::new();
    for i in 0..ring.edge_count() {
        if is_crossing_antimeridian(points[i].x, points[i + 1].x)? {
            crossings.push(CrossingLat {
                from: i,
                to: i + 1,
                lat: crossing_antimeridian_point_lat(&points[i], &points[i + 1])?,
            });
        }
    }
    Ok(crossings)
}

/// Split a ring into `within` and `outside` fragments at the antimeridian
///
/// A ring with fewer than two crossings is returned unchanged, in `within`
/// unless `options.overflowing` is set. Unless self-intersection is
/// allowed, any self-intersecting fragment is an error. A split that does
/// not reduce the number of crossings fails with `InvalidLinearRing`.
pub fn cut_ring_at_antimeridian(ring: &Ring, options: CutOptions) -> WarpResult<CutRing> {
    let result = split(ring, options.overflowing, usize::MAX)?;

    if result.len() > 1 {
        debug!(
            "Cut ring of {} points into {} within and {} outside fragments",
            ring.len(),
            result.within.len(),
            result.outside.len()
        );
        if !options.allow_selfintersection && result.rings().any(selfintersection) {
            return Err(WarpError::InvalidSelfintersection);
        }
    }

    Ok(result)
}

// `limit` is the crossing count of the parent ring; every split must remove crossings.
fn split(ring: &Ring, overflowing: bool, limit: usize) -> WarpResult<CutRing> {
    let mut crossings = find_crossings(ring)?;
    if crossings.len() < 2 {
        return Ok(if overflowing {
            CutRing { within: Vec::new(), outside: vec![ring.clone()] }
        } else {
            CutRing { within: vec![ring.clone()], outside: Vec::new() }
        });
    }
    if crossings.len() >= limit {
        debug!("Cut made no progress on a fragment with {} crossings", crossings.len());
        return Err(WarpError::InvalidLinearRing);
    }

    crossings.sort_by(|a, b| b.lat.total_cmp(&a.lat));
    let start = crossings[0];
    let end = crossings[1];

    let mut result = CutRing::default();
    for (from, to) in [(start, end), (end, start)] {
        let area = cutting(ring.points(), &from, &to);
        let part = split(&area.ring, area.overflowing, crossings.len())?;
        result.within.extend(part.within);
        result.outside.extend(part.outside);
    }
    Ok(result)
}

fn cutting(points: &[Point], start: &CrossingLat, end: &CrossingLat) -> CutArea {
    let vertex_count = points.len() - 1;
    let mut index = start.to % vertex_count;

    let diff = points[start.to].x - points[start.from].x;
    let right_to_left = if diff.abs() < 180.0 { diff < 0.0 } else { diff > 0.0 };
    let bound_lon = if right_to_left {
        180.0 * (points[index].x / 180.0).ceil()
    } else {
        180.0 * (points[index].x / 180.0).floor()
    };

    let head = Point::new(bound_lon, start.lat);
    let mut fragment = vec![head.clone(), points[start.to].clone()];

    // at most one lap around the ring
    for _ in 0..vertex_count {
        if index == end.from {
            break;
        }
        index = (index + 1) % vertex_count;
        fragment.push(points[index].clone());
    }

    fragment.push(Point::new(bound_lon, end.lat));
    fragment.push(head);

    CutArea {
        overflowing: !right_to_left,
        ring: Ring::from_points_unchecked(fragment),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(coords: &[[f64; 2]]) -> Ring {
        let raw: Vec<Vec<f64>> = coords.iter().map(|c| c.to_vec()).collect();
        Ring::from_coords(&raw).unwrap()
    }

    fn assert_rings(actual: &[Ring], expected: &[&[[f64; 2]]]) {
        assert_eq!(actual.len(), expected.len(), "fragment count: {:?}", actual);
        for (r, e) in actual.iter().zip(expected) {
            assert_eq!(r.len(), e.len(), "fragment length: {:?}", r);
            for (p, q) in r.points().iter().zip(e.iter()) {
                assert!(
                    (p.x - q[0]).abs() < 1e-9 && (p.y - q[1]).abs() < 1e-9,
                    "expected {:?}, got {:?} in {:?}",
                    q,
                    p,
                    r
                );
            }
        }
    }

    #[test]
    fn test_find_crossings() {
        let r = ring(&[[-160.0, 40.0], [175.0, 40.0], [-175.0, 35.0], [175.0, 30.0], [-160.0, 30.0], [-160.0, 40.0]]);
        let crossings = find_crossings(&r).unwrap();
        let lats: Vec<f64> = crossings.iter().map(|c| c.lat).collect();
        assert_eq!(lats, vec![40.0, 37.5, 32.5, 30.0]);
        assert_eq!((crossings[2].from, crossings[2].to), (2, 3));
    }

    #[test]
    fn test_cut_zigzag() {
        let r = ring(&[[-160.0, 40.0], [175.0, 40.0], [-175.0, 35.0], [175.0, 30.0], [-160.0, 30.0], [-160.0, 40.0]]);
        let cut = cut_ring_at_antimeridian(&r, CutOptions::default()).unwrap();
        assert_rings(&cut.within, &[
            &[[180.0, 40.0], [175.0, 40.0], [180.0, 37.5], [180.0, 40.0]],
            &[[180.0, 32.5], [175.0, 30.0], [180.0, 30.0], [180.0, 32.5]],
        ]);
        assert_rings(&cut.outside, &[&[
            [-180.0, 30.0], [-160.0, 30.0], [-160.0, 40.0], [-180.0, 40.0],
            [-180.0, 37.5], [-175.0, 35.0], [-180.0, 32.5], [-180.0, 30.0],
        ]]);
    }

    #[test]
    fn test_cut_with_detour_through_prime_meridian() {
        let r = ring(&[
            [-160.0, 40.0], [175.0, 40.0], [-1.0, 40.0], [-1.0, 35.0], [45.0, 35.0],
            [-175.0, 35.0], [175.0, 30.0], [-160.0, 30.0], [-160.0, 40.0],
        ]);
        let cut = cut_ring_at_antimeridian(&r, CutOptions::default()).unwrap();
        assert_rings(&cut.within, &[
            &[[180.0, 40.0], [175.0, 40.0], [-1.0, 40.0], [-1.0, 35.0], [45.0, 35.0], [180.0, 35.0], [180.0, 40.0]],
            &[[180.0, 32.5], [175.0, 30.0], [180.0, 30.0], [180.0, 32.5]],
        ]);
        assert_rings(&cut.outside, &[&[
            [-180.0, 30.0], [-160.0, 30.0], [-160.0, 40.0], [-180.0, 40.0],
            [-180.0, 35.0], [-175.0, 35.0], [-180.0, 32.5], [-180.0, 30.0],
        ]]);
    }

    #[test]
    fn test_cut_simple_box() {
        let r = ring(&[[-160.0, 40.0], [175.0, 40.0], [175.0, 30.0], [-160.0, 30.0], [-160.0, 40.0]]);
        let cut = cut_ring_at_antimeridian(&r, CutOptions::default()).unwrap();
        assert_rings(&cut.within, &[&[[180.0, 40.0], [175.0, 40.0], [175.0, 30.0], [180.0, 30.0], [180.0, 40.0]]]);
        assert_rings(&cut.outside, &[&[[-180.0, 30.0], [-160.0, 30.0], [-160.0, 40.0], [-180.0, 40.0], [-180.0, 30.0]]]);
    }

    #[test]
    fn test_no_crossing_returns_ring() {
        let east = ring(&[[160.0, 40.0], [175.0, 40.0], [175.0, 30.0], [160.0, 30.0], [160.0, 40.0]]);
        let cut = cut_ring_at_antimeridian(&east, CutOptions::default()).unwrap();
        assert_eq!(cut.within, vec![east.clone()]);
        assert!(cut.outside.is_empty());

        let center = ring(&[[-10.0, 30.0], [15.0, 30.0], [15.0, 40.0], [-10.0, 40.0], [-10.0, 30.0]]);
        let cut = cut_ring_at_antimeridian(&center, CutOptions::default()).unwrap();
        assert_eq!(cut.within, vec![center]);
    }

    #[test]
    fn test_no_crossing_overflowing_goes_outside() {
        let east = ring(&[[160.0, 40.0], [175.0, 40.0], [175.0, 30.0], [160.0, 30.0], [160.0, 40.0]]);
        let cut = cut_ring_at_antimeridian(&east, CutOptions::default().with_overflowing(true)).unwrap();
        assert!(cut.within.is_empty());
        assert_eq!(cut.outside, vec![east]);
    }

    #[test]
    fn test_degenerate_fragments_when_allowed() {
        let r = ring(&[[-160.0, 40.0], [175.0, 40.0], [-175.0, 30.0], [175.0, 30.0], [-160.0, 30.0], [-160.0, 40.0]]);
        let options = CutOptions::default().with_allow_selfintersection(true);
        let cut = cut_ring_at_antimeridian(&r, options).unwrap();
        assert_rings(&cut.within, &[
            &[[180.0, 40.0], [175.0, 40.0], [180.0, 35.0], [180.0, 40.0]],
            &[[180.0, 30.0], [175.0, 30.0], [180.0, 30.0], [180.0, 30.0]],
        ]);
        assert_rings(&cut.outside, &[&[
            [-180.0, 30.0], [-160.0, 30.0], [-160.0, 40.0], [-180.0, 40.0],
            [-180.0, 35.0], [-175.0, 30.0], [-180.0, 30.0], [-180.0, 30.0],
        ]]);
    }

    #[test]
    fn test_degenerate_fragments_rejected_by_default() {
        let r = ring(&[[-160.0, 40.0], [175.0, 40.0], [-175.0, 30.0], [175.0, 30.0], [-160.0, 30.0], [-160.0, 40.0]]);
        let result = cut_ring_at_antimeridian(&r, CutOptions::default());
        assert!(matches!(result, Err(WarpError::InvalidSelfintersection)));
    }

    #[test]
    fn test_cut_reverse_orientation() {
        let r = ring(&[[-160.0, 40.0], [-160.0, 30.0], [175.0, 30.0], [-175.0, 35.0], [175.0, 40.0], [-160.0, 40.0]]);
        let cut = cut_ring_at_antimeridian(&r, CutOptions::default()).unwrap();
        assert_rings(&cut.within, &[
            &[[180.0, 30.0], [175.0, 30.0], [180.0, 32.5], [180.0, 30.0]],
            &[[180.0, 37.5], [175.0, 40.0], [180.0, 40.0], [180.0, 37.5]],
        ]);
        assert_rings(&cut.outside, &[&[
            [-180.0, 32.5], [-175.0, 35.0], [-180.0, 37.5], [-180.0, 40.0],
            [-160.0, 40.0], [-160.0, 30.0], [-180.0, 30.0], [-180.0, 32.5],
        ]]);
    }

    #[test]
    fn test_cut_shifted_east() {
        let r = ring(&[[185.0, 50.0], [175.0, 40.0], [175.0, 30.0], [185.0, 40.0], [185.0, 50.0]]);
        let cut = cut_ring_at_antimeridian(&r, CutOptions::default()).unwrap();
        assert_rings(&cut.within, &[&[[180.0, 45.0], [175.0, 40.0], [175.0, 30.0], [180.0, 35.0], [180.0, 45.0]]]);
        assert_rings(&cut.outside, &[&[[180.0, 35.0], [185.0, 40.0], [185.0, 50.0], [180.0, 45.0], [180.0, 35.0]]]);
    }

    #[test]
    fn test_cut_shifted_west() {
        let r = ring(&[[-170.0, 70.0], [-185.0, 40.0], [-185.0, 30.0], [-170.0, 60.0], [-170.0, 70.0]]);
        let cut = cut_ring_at_antimeridian(&r, CutOptions::default()).unwrap();
        assert_rings(&cut.within, &[&[[-180.0, 50.0], [-185.0, 40.0], [-185.0, 30.0], [-180.0, 40.0], [-180.0, 50.0]]]);
        assert_rings(&cut.outside, &[&[[-180.0, 40.0], [-170.0, 60.0], [-170.0, 70.0], [-180.0, 50.0], [-180.0, 40.0]]]);
    }

    #[test]
    fn test_cut_far_shifted_ranges() {
        let r = ring(&[[-530.0, 70.0], [-545.0, 40.0], [-545.0, 30.0], [-530.0, 60.0], [-530.0, 70.0]]);
        let cut = cut_ring_at_antimeridian(&r, CutOptions::default()).unwrap();
        assert_rings(&cut.within, &[&[[-540.0, 50.0], [-545.0, 40.0], [-545.0, 30.0], [-540.0, 40.0], [-540.0, 50.0]]]);
        assert_rings(&cut.outside, &[&[[-540.0, 40.0], [-530.0, 60.0], [-530.0, 70.0], [-540.0, 50.0], [-540.0, 40.0]]]);

        for coords in [
            [[370.0, 50.0], [350.0, 40.0], [350.0, 30.0], [370.0, 40.0], [370.0, 50.0]],
            [[200.0, 50.0], [190.0, 40.0], [190.0, 30.0], [200.0, 40.0], [200.0, 50.0]],
        ] {
            let r = ring(&coords);
            let cut = cut_ring_at_antimeridian(&r, CutOptions::default()).unwrap();
            assert_eq!(cut.within, vec![r]);
            assert!(cut.outside.is_empty());
        }
    }

    #[test]
    fn test_cut_huge_longitudes_terminates() {
        let r = ring(&[[1e20, 0.0], [1e20, 1.0], [1e20 + 1e6, 1.0], [1e20, 0.0]]);
        let cut = cut_ring_at_antimeridian(&r, CutOptions::default()).unwrap();
        assert_eq!(cut.within.len(), 1);
        assert_eq!(cut.outside.len(), 1);
    }

    #[test]
    fn test_cut_rejects_fragment_without_progress() {
        // at this magnitude the boundary longitude rounds away from the vertex,
        // so one fragment crosses as often as its parent
        let r = ring(&[[1.3e20, 0.0], [1.3e20, 10.0], [1.3e20 + 1e6, -10.0], [1.3e20, 0.0]]);
        assert_eq!(find_crossings(&r).unwrap().len(), 2);
        let options = CutOptions::default().with_allow_selfintersection(true);
        assert!(matches!(cut_ring_at_antimeridian(&r, options), Err(WarpError::InvalidLinearRing)));
    }

    #[test]
    fn test_multi_crossing_rings_make_progress() {
        let r = ring(&[
            [-160.0, 40.0],
            [175.0, 40.0],
            [-175.0, 35.0],
            [175.0, 30.0],
            [-175.0, 25.0],
            [175.0, 20.0],
            [-160.0, 20.0],
            [-160.0, 40.0],
        ]);
        assert_eq!(find_crossings(&r).unwrap().len(), 6);
        let options = CutOptions::default().with_allow_selfintersection(true);
        let cut = cut_ring_at_antimeridian(&r, options).unwrap();
        assert_eq!(cut.len(), 4);
    }
}
