//! Tests covering hull configuration behavior.

use super::*;
use crate::error::HullError;
use config::constants::{ConfigError, GEOMETRY_EPSILON, POINT_EPSILON};

#[test]
fn default_matches_constants() {
    let cfg = HullConfig::default();
    assert_eq!(cfg.tolerance.point, POINT_EPSILON);
    assert_eq!(cfg.tolerance.geometry, GEOMETRY_EPSILON);
    assert!(cfg.parallel);
    assert!(!cfg.merge_coplanar);
}

#[test]
fn builder_validates_input() {
    let err = HullConfig::new(1e-10, 0.0).unwrap_err();
    assert!(matches!(
        err,
        HullError::InvalidConfig(ConfigError::InvalidTolerance(v)) if v == 0.0
    ));
}

#[test]
fn switches_toggle() {
    let cfg = HullConfig::default()
        .with_merge_coplanar(true)
        .with_parallel(false);
    assert!(cfg.merge_coplanar);
    assert!(!cfg.parallel);
}
