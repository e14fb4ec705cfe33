//! # Polygon
//!
//! Planar polygon as an ordered vertex cycle. Winding follows the outward
//! normal by the right-hand rule on the first three vertices.
//!
//! Equality is rotation-invariant but orientation-sensitive: a polygon and
//! its reversal are different faces.

mod merge;

use crate::error::{HullError, HullResult};
use crate::plane::Plane;
use crate::triangle::Triangle;
use crate::vec3::{centroid, Vec3, Vec3Ext};

// =============================================================================
// POLYGON
// =============================================================================

/// An ordered cycle of coplanar vertices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    points: Vec<Vec3>,
}

impl Polygon {
    /// Create polygon from vertices in boundary order.
    pub fn new(points: Vec<Vec3>) -> Self {
        Self { points }
    }

    /// Get polygon vertices.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Vec3> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Same vertices traversed the other way (flips the face).
    pub fn reversed(&self) -> Polygon {
        let mut points = self.points.clone();
        points.reverse();
        Polygon { points }
    }

    /// Build the face polygon of `plane` from the points lying on it.
    ///
    /// Points within `eps` of the plane are projected into an orthonormal
    /// in-plane basis around their centroid and ordered by polar angle, which
    /// traces a convex point set counter-clockwise about `plane.dir`. The
    /// returned vertices are the input points themselves, reordered.
    ///
    /// With no supporting points the polygon is empty.
    pub fn from_plane(plane: &Plane, points: &[Vec3], eps: f64) -> Polygon {
        let on_plane: Vec<Vec3> = points
            .iter()
            .copied()
            .filter(|p| plane.is_on(*p, eps))
            .collect();

        let Some(center) = centroid(&on_plane) else {
            return Polygon::default();
        };

        // Pick the world axis least parallel to the normal
        let option_x = plane.dir.cross(Vec3::X);
        let option_y = plane.dir.cross(Vec3::Y);
        let axis = if option_x.length() > option_y.length() {
            option_x
        } else {
            option_y
        };
        let x = axis.normalize_or_self();
        let y = plane.dir.cross(x).normalize_or_self();

        let mut by_angle: Vec<(f64, Vec3)> = on_plane
            .into_iter()
            .map(|p| {
                let rel = p - center;
                (rel.dot(y).atan2(rel.dot(x)), p)
            })
            .collect();
        by_angle.sort_by(|a, b| a.0.total_cmp(&b.0));

        Polygon::new(by_angle.into_iter().map(|(_, p)| p).collect())
    }

    /// Plane through the first vertex with normal from the first three.
    ///
    /// # Errors
    ///
    /// [`HullError::TooFewPoints`] for polygons with fewer than 3 vertices.
    pub fn to_plane(&self) -> HullResult<Plane> {
        match self.points.as_slice() {
            [p1, p2, p3, ..] => Ok(Plane::new(*p1, (*p2 - *p1).cross(*p3 - *p1))),
            _ => Err(HullError::TooFewPoints {
                count: self.points.len(),
            }),
        }
    }

    /// Unit normal over the whole boundary by Newell's method.
    ///
    /// Unlike [`Polygon::to_plane`] this stays well-defined when the leading
    /// vertices are collinear. Zero for degenerate polygons.
    pub fn normal(&self) -> Vec3 {
        let n = self.points.len();
        let mut normal = Vec3::ZERO;
        for i in 0..n {
            let current = self.points[i];
            let next = self.points[(i + 1) % n];
            normal.x += (current.y - next.y) * (current.z + next.z);
            normal.y += (current.z - next.z) * (current.x + next.x);
            normal.z += (current.x - next.x) * (current.y + next.y);
        }
        normal.normalize_or_self()
    }

    /// Returns true when `point` is strictly in front of the polygon's plane.
    pub fn is_in_front(&self, point: Vec3, eps: f64) -> HullResult<bool> {
        Ok(self.to_plane()?.is_in_front(point, eps))
    }

    /// Returns true when some cyclic rotation of `other` matches `self`
    /// vertex by vertex within `eps`.
    pub fn almost_equals(&self, other: &Polygon, eps: f64) -> bool {
        let n = self.points.len();
        if n != other.points.len() {
            return false;
        }
        if n == 0 {
            return true;
        }
        (0..n).any(|offset| {
            self.points
                .iter()
                .enumerate()
                .all(|(i, p)| p.almost_equals(other.points[(offset + i) % n], eps))
        })
    }
}

impl From<Triangle> for Polygon {
    fn from(triangle: Triangle) -> Self {
        Polygon::new(triangle.to_vec())
    }
}
