//! Tests for the latitude/longitude to grid-index remaps.

use grid_interpolator::{InterpolationError, LinearRemap};
use test_utils::assert_approx_eq;

fn latitude() -> LinearRemap {
    LinearRemap::new((36.0, 41.0), (0.0, 100.0)).unwrap()
}

fn longitude() -> LinearRemap {
    LinearRemap::new((-103.0, -93.6), (0.0, 100.0)).unwrap()
}

#[test]
fn test_latitude_endpoints() {
    assert_eq!(latitude().apply(36.0), 0.0);
    assert_eq!(latitude().apply(41.0), 100.0);
}

#[test]
fn test_longitude_endpoints() {
    assert_approx_eq!(longitude().apply(-103.0), 0.0, 1e-12);
    assert_approx_eq!(longitude().apply(-93.6), 100.0, 1e-12);
}

#[test]
fn test_forward_then_inverse_recovers_input() {
    let forward = latitude();
    let inverse = forward.inverse().unwrap();
    for lat in [36.0, 37.123, 38.5, 39.99, 41.0] {
        assert_approx_eq!(inverse.apply(forward.apply(lat)), lat, 1e-12);
    }

    let forward = longitude();
    let inverse = forward.inverse().unwrap();
    for lon in [-103.0, -101.07, -96.59, -93.6] {
        assert_approx_eq!(inverse.apply(forward.apply(lon)), lon, 1e-12);
    }
}

#[test]
fn test_inverse_maps_grid_edges_to_bounds() {
    let inverse = longitude().inverse().unwrap();
    assert_approx_eq!(inverse.apply(0.0), -103.0, 1e-12);
    assert_approx_eq!(inverse.apply(100.0), -93.6, 1e-12);
    assert_eq!(inverse.source_bounds(), (0.0, 100.0));
}

#[test]
fn test_apply_extrapolates_outside_range() {
    assert_approx_eq!(latitude().apply(41.5), 110.0, 1e-9);
}

#[test]
fn test_apply_checked_rejects_out_of_area() {
    assert!(matches!(
        latitude().apply_checked(35.9),
        Err(InterpolationError::OutOfRange { min, max, .. }) if min == 36.0 && max == 41.0
    ));
    assert!(latitude().apply_checked(f64::NAN).is_err());
    assert_approx_eq!(latitude().apply_checked(38.5).unwrap(), 50.0, 1e-12);
}
