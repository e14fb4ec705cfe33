//! Thin layer over `glam::DVec3` shared across kernel modules.
//!
//! glam already supplies the arithmetic (add, sub, scale, negate, dot, cross,
//! length, lerp). [`Vec3Ext`] adds the tolerance-aware comparisons and the
//! degenerate-input policies the hull pipeline relies on.

use config::constants::NORMALIZE_EPSILON;

pub use glam::DVec3 as Vec3;

/// Tolerance-aware helpers on [`Vec3`].
pub trait Vec3Ext: Sized {
    /// Returns true when `self` and `other` are closer than `eps`.
    ///
    /// # Examples
    /// ```
    /// use polyhull::{Vec3, Vec3Ext};
    /// let a = Vec3::new(1.0, 2.0, 3.0);
    /// assert!(a.almost_equals(a + Vec3::splat(1e-9), 1e-6));
    /// assert!(!a.almost_equals(a + Vec3::X, 1e-6));
    /// ```
    fn almost_equals(self, other: Self, eps: f64) -> bool;

    /// Returns true when both vectors point the same way, ignoring length.
    ///
    /// Opposite directions are not equal. Zero vectors never match.
    ///
    /// # Examples
    /// ```
    /// use polyhull::{Vec3, Vec3Ext};
    /// assert!(Vec3::X.dir_almost_equals(Vec3::new(5.0, 0.0, 0.0), 1e-6));
    /// assert!(!Vec3::X.dir_almost_equals(Vec3::NEG_X, 1e-6));
    /// ```
    fn dir_almost_equals(self, other: Self, eps: f64) -> bool;

    /// Returns true when the vector is shorter than `eps`.
    fn is_almost_zero(self, eps: f64) -> bool;

    /// Normalizes to unit length, or returns `self` unchanged when its length
    /// is below `NORMALIZE_EPSILON`.
    ///
    /// # Examples
    /// ```
    /// use polyhull::{Vec3, Vec3Ext};
    /// assert_eq!(Vec3::new(0.0, 3.0, 0.0).normalize_or_self(), Vec3::Y);
    /// assert_eq!(Vec3::ZERO.normalize_or_self(), Vec3::ZERO);
    /// ```
    fn normalize_or_self(self) -> Self;

    /// Projection of `self` onto `onto`.
    fn proj(self, onto: Self) -> Self;

    /// Component of `self` orthogonal to `normal`.
    fn proj_plane(self, normal: Self) -> Self;
}

impl Vec3Ext for Vec3 {
    fn almost_equals(self, other: Self, eps: f64) -> bool {
        (self - other).length() < eps
    }

    fn dir_almost_equals(self, other: Self, eps: f64) -> bool {
        let a = self.normalize_or_self();
        let b = other.normalize_or_self();
        if a.is_almost_zero(eps) || b.is_almost_zero(eps) {
            return false;
        }
        a.cross(b).length() < eps && a.dot(b) > 0.0
    }

    fn is_almost_zero(self, eps: f64) -> bool {
        self.length() < eps
    }

    fn normalize_or_self(self) -> Self {
        let len = self.length();
        if len < NORMALIZE_EPSILON {
            return self;
        }
        self / len
    }

    fn proj(self, onto: Self) -> Self {
        let denom = onto.dot(onto);
        if denom < NORMALIZE_EPSILON * NORMALIZE_EPSILON {
            return Vec3::ZERO;
        }
        onto * (self.dot(onto) / denom)
    }

    fn proj_plane(self, normal: Self) -> Self {
        self - self.proj(normal)
    }
}

/// Arithmetic mean of `points`, or `None` for an empty slice.
///
/// # Examples
/// ```
/// use polyhull::vec3::{centroid, Vec3};
/// assert_eq!(centroid(&[]), None);
/// assert_eq!(
///     centroid(&[Vec3::ZERO, Vec3::new(2.0, 4.0, 6.0)]),
///     Some(Vec3::new(1.0, 2.0, 3.0))
/// );
/// ```
pub fn centroid(points: &[Vec3]) -> Option<Vec3> {
    if points.is_empty() {
        return None;
    }
    let sum: Vec3 = points.iter().copied().sum();
    Some(sum / points.len() as f64)
}

#[cfg(test)]
mod tests;
