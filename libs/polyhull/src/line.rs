//! # Line
//!
//! Line through two points, used for line/plane and line/triangle
//! intersection.

use crate::plane::Plane;
use crate::vec3::{Vec3, Vec3Ext};

/// Infinite line through `from` and `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// First point on the line.
    pub from: Vec3,
    /// Second point on the line.
    pub to: Vec3,
}

impl Line {
    /// Create line through two points.
    pub fn new(from: Vec3, to: Vec3) -> Self {
        Self { from, to }
    }

    /// Direction from `from` to `to` (not normalized).
    pub fn dir(&self) -> Vec3 {
        self.to - self.from
    }

    /// Returns true when the line never crosses `plane` at a single point.
    ///
    /// Guard for [`Plane::line_intersection`], which divides by the line's
    /// component along the plane normal.
    pub fn is_parallel_to(&self, plane: &Plane, eps: f64) -> bool {
        let dir = self.dir().normalize_or_self();
        let normal = plane.dir.normalize_or_self();
        dir.dot(normal).abs() < eps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_dir() {
        let line = Line::new(Vec3::new(1.0, 1.0, 1.0), Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(line.dir(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_line_parallel_to_plane() {
        let plane = Plane::z_plus();
        let flat = Line::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0));
        let steep = Line::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 1.0));
        assert!(flat.is_parallel_to(&plane, 1e-6));
        assert!(!steep.is_parallel_to(&plane, 1e-6));
    }
}
