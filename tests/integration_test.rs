//! Integration tests for the public ring normalization API

use ringwarp::coordinate::CRS_EPSG4326;
use ringwarp::{
    cut_ring_at_antimeridian, expand_ring_at_antimeridian, geojson_from_linear_ring, get_crs, transform_bbox,
    transform_ring, BboxOptions, CutOptions, GeoJsonOptions, Geometry, Ring, TransformOptions, WarpError,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn ring(coords: &[[f64; 2]]) -> Ring {
    let raw: Vec<Vec<f64>> = coords.iter().map(|c| c.to_vec()).collect();
    Ring::from_coords(&raw).unwrap()
}

#[test]
fn test_cut_then_expand_same_ring() {
    init_logging();
    let input = ring(&[[-160.0, 40.0], [175.0, 40.0], [-175.0, 35.0], [175.0, 30.0], [-160.0, 30.0], [-160.0, 40.0]]);

    let cut = cut_ring_at_antimeridian(&input, CutOptions::default()).unwrap();
    assert_eq!(cut.within.len(), 2);
    assert_eq!(cut.outside.len(), 1);
    assert!(cut.within.iter().flat_map(|r| r.points()).all(|p| p.x >= 0.0));
    assert!(cut.outside.iter().flat_map(|r| r.points()).all(|p| p.x <= 0.0));

    let expanded = expand_ring_at_antimeridian(&input).unwrap();
    assert!(expanded.points().iter().all(|p| p.x > 170.0));
    assert_eq!(input.points()[0].x, -160.0);
}

#[test]
fn test_cut_result_serializes() {
    init_logging();
    let input = ring(&[[-160.0, 40.0], [175.0, 40.0], [175.0, 30.0], [-160.0, 30.0], [-160.0, 40.0]]);
    let cut = cut_ring_at_antimeridian(&input, CutOptions::default()).unwrap();
    let value = serde_json::to_value(&cut).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "within": [[[180.0, 40.0], [175.0, 40.0], [175.0, 30.0], [180.0, 30.0], [180.0, 40.0]]],
            "outside": [[[-180.0, 30.0], [-160.0, 30.0], [-160.0, 40.0], [-180.0, 40.0], [-180.0, 30.0]]]
        })
    );
}

#[test]
fn test_geographic_identity() {
    init_logging();
    let input = ring(&[[100.0, -20.0], [120.0, -20.0], [120.0, 0.0], [100.0, 0.0], [100.0, -20.0]]);
    let output = transform_ring(&input, &get_crs("EPSG:4326").unwrap(), TransformOptions::default()).unwrap();
    assert_eq!(output, input);
}

#[test]
fn test_north_polar_stereographic_ring() {
    init_logging();
    let crs = get_crs(3995u32).unwrap();
    let input = ring(&[
        [-1_000_000.0, -1_000_000.0],
        [1_000_000.0, -1_000_000.0],
        [1_000_000.0, 1_000_000.0],
        [-1_000_000.0, 1_000_000.0],
        [-1_000_000.0, -1_000_000.0],
    ]);

    let output = transform_ring(&input, &crs, TransformOptions::default()).unwrap();
    let points = output.points();
    assert_eq!(points.len(), 9);
    let detour: Vec<(f64, f64)> = points[3..7].iter().map(|p| (p.x, p.y)).collect();
    assert_eq!(detour[0].0, 180.0);
    assert_eq!(detour[1], (180.0, 90.0));
    assert_eq!(detour[2], (-180.0, 90.0));
    assert_eq!(detour[3].0, -180.0);

    let feature = geojson_from_linear_ring(&input, &crs, GeoJsonOptions::default()).unwrap();
    assert!(matches!(feature.geometry, Geometry::Polygon { .. }));
    assert_eq!(feature.bbox[0], -180.0);
    assert_eq!(feature.bbox[2], 180.0);
    assert_eq!(feature.bbox[3], 90.0);
    assert!(feature.bbox[1] > 70.0 && feature.bbox[1] < 85.0);
}

#[test]
fn test_geographic_bbox() {
    init_logging();
    let bbox = transform_bbox(&[-10.0, -5.0, 0.0, 10.0, 5.0, 100.0], CRS_EPSG4326, BboxOptions::default()).unwrap();
    assert_eq!(bbox.to_vec(), vec![-10.0, -5.0, 0.0, 10.0, 5.0, 100.0]);
}

#[test]
fn test_error_taxonomy() {
    init_logging();
    let both = ring(&[[-10.0, -95.0], [10.0, -95.0], [10.0, 95.0], [-10.0, 95.0], [-10.0, -95.0]]);
    assert!(matches!(
        transform_ring(&both, CRS_EPSG4326, TransformOptions::default()),
        Err(WarpError::EnclosingBothPoles)
    ));

    let clockwise = ring(&[[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]]);
    assert!(matches!(
        geojson_from_linear_ring(&clockwise, CRS_EPSG4326, GeoJsonOptions::default()),
        Err(WarpError::NotAllowedCwLinearRing)
    ));

    assert!(matches!(get_crs("epsg:1"), Err(WarpError::InvalidCode(_))));
    assert!(matches!(Ring::from_coords(&[vec![0.0, 0.0], vec![1.0, 1.0]]), Err(WarpError::InvalidLinearRing)));
}
