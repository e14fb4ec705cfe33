//! # Tests for Config Constants
//!
//! Unit tests verifying the relationships between tolerances and the
//! validation rules of [`Tolerance`].

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_point_epsilon_is_positive() {
    assert!(POINT_EPSILON > 0.0, "POINT_EPSILON must be positive");
}

#[test]
fn test_point_epsilon_tighter_than_geometry_epsilon() {
    assert!(
        POINT_EPSILON < GEOMETRY_EPSILON,
        "point dedup must be stricter than geometric predicates"
    );
}

#[test]
fn test_determinant_epsilon_is_small() {
    assert!(DETERMINANT_EPSILON < 1e-6);
}

#[test]
fn test_normalize_epsilon_matches_point_epsilon_scale() {
    assert!(NORMALIZE_EPSILON <= GEOMETRY_EPSILON);
}

// =============================================================================
// HULL TESTS
// =============================================================================

#[test]
fn test_min_supporting_planes_is_three() {
    // Three faces meet at every vertex of a 3D polytope
    assert_eq!(MIN_SUPPORTING_PLANES, 3);
}

#[test]
fn test_parallel_threshold_reasonable() {
    assert!(PARALLEL_THRESHOLD >= 4);
}

// =============================================================================
// TOLERANCE TESTS
// =============================================================================

#[test]
fn test_tolerance_default_matches_constants() {
    let tolerance = Tolerance::default();
    assert_eq!(tolerance.point, POINT_EPSILON);
    assert_eq!(tolerance.geometry, GEOMETRY_EPSILON);
}

#[test]
fn test_tolerance_rejects_non_positive() {
    assert_eq!(
        Tolerance::new(-1.0, 1e-6),
        Err(ConfigError::InvalidTolerance(-1.0))
    );
    assert_eq!(
        Tolerance::new(1e-10, 0.0),
        Err(ConfigError::InvalidTolerance(0.0))
    );
}

#[test]
fn test_tolerance_rejects_non_finite() {
    assert!(Tolerance::new(f64::NAN, 1e-6).is_err());
    assert!(Tolerance::new(1e-10, f64::INFINITY).is_err());
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidTolerance(0.0);
    assert!(err.to_string().contains("tolerance"));
}
