//! Continuous longitudes across the antimeridian

use log::debug;

use super::crossing::is_crossing_antimeridian;
use crate::errors::WarpResult;
use crate::geometry::Ring;

/// Shift the negative side of a crossing ring by +360 degrees
///
/// Returns a new ring whose longitudes run continuously across the
/// boundary. A ring with fewer than two crossings is returned unchanged.
/// The input is never modified.
pub fn expand_ring_at_antimeridian(ring: &Ring) -> WarpResult<Ring> {
    let points = ring.points();
    let mut crossings = Vec::new();
    for i in 0..ring.edge_count() {
        if is_crossing_antimeridian(points[i].x, points[i + 1].x)? {
            crossings.push((i, i + 1));
        }
    }

    if crossings.len() < 2 {
        return Ok(ring.clone());
    }

    let mut expanded = points.to_vec();
    let mut before = 0;
    for (i, &(from, to)) in crossings.iter().enumerate() {
        let end_from = crossings.get(i + 1).map_or(expanded.len(), |next| next.0);

        if expanded[to].x * expanded[from].x < 0.0 {
            let shifted = if expanded[to].x < 0.0 {
                &mut expanded[to..end_from]
            } else {
                &mut expanded[before..=from]
            };
            for p in shifted {
                p.x += 360.0;
            }
        }
        before = end_from;
    }

    debug!("Expanded ring of {} points across {} crossings", expanded.len(), crossings.len());
    Ring::new(expanded)
}
