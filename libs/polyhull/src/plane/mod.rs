//! # Plane
//!
//! Plane given by a point on it and a normal direction, with side
//! classification, intersections and reflection.
//!
//! The normal is not required to be unit length. Side tests compare
//! `dot(point - pos, dir)` against `±eps` directly, so the effective
//! distance tolerance scales with `|dir|`.

use crate::line::Line;
use crate::vec3::{Vec3, Vec3Ext};
use config::constants::DETERMINANT_EPSILON;
use glam::DMat3;

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Classification of a point relative to a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Point is in front of the plane (the side `dir` points to).
    Front,
    /// Point is behind the plane.
    Back,
    /// Point is on the plane within tolerance.
    On,
}

// =============================================================================
// PLANE
// =============================================================================

/// A plane in 3D space defined by an anchor point and a normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Any point on the plane.
    pub pos: Vec3,
    /// Normal direction, front side is where it points.
    pub dir: Vec3,
}

impl Plane {
    /// Create plane from anchor point and normal.
    pub fn new(pos: Vec3, dir: Vec3) -> Self {
        Self { pos, dir }
    }

    /// Plane through the origin with the normalized `dir`.
    pub fn through_origin(dir: Vec3) -> Self {
        Self::new(Vec3::ZERO, dir.normalize_or_self())
    }

    /// Plane with normal `dir` at signed distance `offset` from the origin.
    pub fn at_offset(dir: Vec3, offset: f64) -> Self {
        Self::new(dir.normalize_or_self() * offset, dir)
    }

    pub fn x_plus() -> Self {
        Self::through_origin(Vec3::X)
    }

    pub fn y_plus() -> Self {
        Self::through_origin(Vec3::Y)
    }

    pub fn z_plus() -> Self {
        Self::through_origin(Vec3::Z)
    }

    pub fn x_minus() -> Self {
        Self::through_origin(Vec3::NEG_X)
    }

    pub fn y_minus() -> Self {
        Self::through_origin(Vec3::NEG_Y)
    }

    pub fn z_minus() -> Self {
        Self::through_origin(Vec3::NEG_Z)
    }

    pub fn x_plus_offset(offset: f64) -> Self {
        Self::at_offset(Vec3::X, offset)
    }

    pub fn y_plus_offset(offset: f64) -> Self {
        Self::at_offset(Vec3::Y, offset)
    }

    pub fn z_plus_offset(offset: f64) -> Self {
        Self::at_offset(Vec3::Z, offset)
    }

    pub fn x_minus_offset(offset: f64) -> Self {
        Self::at_offset(Vec3::NEG_X, offset)
    }

    pub fn y_minus_offset(offset: f64) -> Self {
        Self::at_offset(Vec3::NEG_Y, offset)
    }

    pub fn z_minus_offset(offset: f64) -> Self {
        Self::at_offset(Vec3::NEG_Z, offset)
    }

    /// Create plane through three points.
    ///
    /// The normal is `cross(b - a, c - a)`, so counter-clockwise points seen
    /// from the front produce a front-facing normal. Returns `None` for
    /// collinear points, whose cross product is shorter than `eps`.
    pub fn from_points(a: Vec3, b: Vec3, c: Vec3, eps: f64) -> Option<Self> {
        let dir = (b - a).cross(c - a);
        if dir.is_almost_zero(eps) {
            return None;
        }
        Some(Self::new(a, dir))
    }

    /// Same plane facing the other way.
    pub fn invert(&self) -> Plane {
        Plane::new(self.pos, -self.dir)
    }

    /// `dot(point - pos, dir)`: positive in front, negative behind.
    pub fn signed_offset(&self, point: Vec3) -> f64 {
        (point - self.pos).dot(self.dir)
    }

    /// Classify a point relative to this plane.
    pub fn side_of(&self, point: Vec3, eps: f64) -> Side {
        let offset = self.signed_offset(point);
        if offset > eps {
            Side::Front
        } else if offset < -eps {
            Side::Back
        } else {
            Side::On
        }
    }

    pub fn is_in_front(&self, point: Vec3, eps: f64) -> bool {
        self.side_of(point, eps) == Side::Front
    }

    pub fn is_behind(&self, point: Vec3, eps: f64) -> bool {
        self.side_of(point, eps) == Side::Back
    }

    pub fn is_on(&self, point: Vec3, eps: f64) -> bool {
        self.side_of(point, eps) == Side::On
    }

    /// Returns true when both planes face the same way and `self.pos` lies
    /// on `other`.
    ///
    /// Opposite-facing planes through the same points are not equal.
    pub fn almost_equals(&self, other: &Plane, eps: f64) -> bool {
        self.dir.dir_almost_equals(other.dir, eps) && other.is_on(self.pos, eps)
    }

    /// Unique point shared by three planes.
    ///
    /// Solves the 3×3 system `nᵢ · x = nᵢ · posᵢ` over the unit normals by
    /// Cramer's rule. Returns `None` when the determinant magnitude is below
    /// `DETERMINANT_EPSILON` (two or more planes near-parallel).
    pub fn intersection(p1: &Plane, p2: &Plane, p3: &Plane) -> Option<Vec3> {
        let n1 = p1.dir.normalize_or_self();
        let n2 = p2.dir.normalize_or_self();
        let n3 = p3.dir.normalize_or_self();
        let d = Vec3::new(n1.dot(p1.pos), n2.dot(p2.pos), n3.dot(p3.pos));

        // Columns of the coefficient matrix whose rows are the normals
        let cx = Vec3::new(n1.x, n2.x, n3.x);
        let cy = Vec3::new(n1.y, n2.y, n3.y);
        let cz = Vec3::new(n1.z, n2.z, n3.z);

        let det = DMat3::from_cols(cx, cy, cz).determinant();
        if det.abs() < DETERMINANT_EPSILON {
            return None;
        }

        Some(Vec3::new(
            DMat3::from_cols(d, cy, cz).determinant() / det,
            DMat3::from_cols(cx, d, cz).determinant() / det,
            DMat3::from_cols(cx, cy, d).determinant() / det,
        ))
    }

    /// Point where `line` crosses this plane.
    ///
    /// Components are infinite or NaN when the line is parallel to the plane;
    /// guard with [`Line::is_parallel_to`] where that case is reachable.
    pub fn line_intersection(&self, line: &Line) -> Vec3 {
        let normal = self.dir.normalize_or_self();
        let line_dir = line.dir().normalize_or_self();
        let along_normal = line_dir.dot(normal);
        let to_plane = (self.pos - line.from).dot(normal);
        line.from + line_dir * (to_plane / along_normal)
    }

    // =========================================================================
    // REFLECTION
    // =========================================================================

    /// Reflect a direction across this plane (translation-free).
    pub fn flip_dir(&self, dir: Vec3) -> Vec3 {
        dir - dir.proj(self.dir) * 2.0
    }

    /// Reflect a point across this plane.
    pub fn flip_pos(&self, pos: Vec3) -> Vec3 {
        self.flip_dir(pos - self.pos) + self.pos
    }

    /// Reflect another plane across this plane.
    pub fn flip_plane(&self, plane: &Plane) -> Plane {
        Plane::new(self.flip_pos(plane.pos), self.flip_dir(plane.dir))
    }
}
