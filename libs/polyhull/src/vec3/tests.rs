//! Tests for the Vec3 helpers.

use super::*;
use approx::assert_relative_eq;

#[test]
fn almost_equals_respects_tolerance() {
    let a = Vec3::new(1.0, 1.0, 1.0);
    assert!(a.almost_equals(Vec3::new(1.0, 1.0, 1.0 + 1e-11), 1e-10));
    assert!(!a.almost_equals(Vec3::new(1.0, 1.0, 1.0 + 1e-9), 1e-10));
    assert!(a.almost_equals(Vec3::new(1.0, 1.0, 1.0 + 1e-9), 1e-6));
}

#[test]
fn dir_almost_equals_ignores_length() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    assert!(a.dir_almost_equals(a * 42.0, 1e-6));
    assert!(!a.dir_almost_equals(-a, 1e-6));
    assert!(!a.dir_almost_equals(Vec3::new(3.0, 2.0, 1.0), 1e-6));
}

#[test]
fn dir_almost_equals_rejects_zero() {
    assert!(!Vec3::ZERO.dir_almost_equals(Vec3::ZERO, 1e-6));
    assert!(!Vec3::X.dir_almost_equals(Vec3::ZERO, 1e-6));
}

#[test]
fn normalize_or_self_unit_length() {
    let n = Vec3::new(3.0, 4.0, 0.0).normalize_or_self();
    assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(n.x, 0.6, epsilon = 1e-12);
}

#[test]
fn normalize_or_self_passes_tiny_vectors_through() {
    let tiny = Vec3::new(1e-12, 0.0, 0.0);
    assert_eq!(tiny.normalize_or_self(), tiny);
}

#[test]
fn proj_onto_axis() {
    let v = Vec3::new(3.0, 4.0, 5.0);
    assert_eq!(v.proj(Vec3::new(0.0, 2.0, 0.0)), Vec3::new(0.0, 4.0, 0.0));
    assert_eq!(v.proj_plane(Vec3::Y), Vec3::new(3.0, 0.0, 5.0));
}

#[test]
fn proj_onto_zero_is_zero() {
    assert_eq!(Vec3::ONE.proj(Vec3::ZERO), Vec3::ZERO);
}

#[test]
fn glam_arithmetic_covers_remaining_ops() {
    let a = Vec3::new(1.0, 0.0, 0.0);
    let b = Vec3::new(0.0, 1.0, 0.0);
    assert_eq!(a.cross(b), Vec3::Z);
    assert_eq!(a.dot(b), 0.0);
    assert_eq!(a.lerp(b, 0.5), Vec3::new(0.5, 0.5, 0.0));
    assert_eq!(-a, Vec3::NEG_X);
}

#[test]
fn centroid_of_square() {
    let c = centroid(&[
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(2.0, 2.0, 0.0),
        Vec3::new(0.0, 2.0, 0.0),
    ]);
    assert_eq!(c, Some(Vec3::new(1.0, 1.0, 0.0)));
}
