//! # Mirror
//!
//! Symmetric point sets from reflection planes. Handy for building hull
//! inputs: model one octant and let the mirror produce the rest.

use crate::plane::Plane;
use crate::vec3::Vec3;

/// Sequence of reflection planes applied one after another.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mirror {
    planes: Vec<Plane>,
}

impl Mirror {
    /// Create mirror from reflection planes, applied in order.
    pub fn new(planes: Vec<Plane>) -> Self {
        Self { planes }
    }

    /// Reflection across z = 0.
    pub fn z() -> Self {
        Self::new(vec![Plane::z_plus()])
    }

    /// Reflections across x = 0 and z = 0.
    pub fn xz() -> Self {
        Self::new(vec![Plane::x_plus(), Plane::z_plus()])
    }

    /// Reflections across all three coordinate planes.
    pub fn xyz() -> Self {
        Self::new(vec![Plane::x_plus(), Plane::y_plus(), Plane::z_plus()])
    }

    /// Each plane in turn appends the reflection of everything so far, so
    /// `k` planes multiply the point count by `2^k`. Points on a mirror
    /// plane are duplicated, not merged.
    pub fn apply(&self, points: &[Vec3]) -> Vec<Vec3> {
        self.planes.iter().fold(points.to_vec(), |mut acc, plane| {
            let reflected: Vec<Vec3> = acc.iter().map(|p| plane.flip_pos(*p)).collect();
            acc.extend(reflected);
            acc
        })
    }
}
