//! # Coplanar Merge
//!
//! Splicing two faces along a shared edge into one polygon.
//!
//! Adjacent faces with consistent winding traverse their shared edge in
//! opposite directions, so `a[i] → a[i+1]` appears in `b` as
//! `b[j] → b[j+1]` with `b[j] == a[i+1]` and `b[j+1] == a[i]`. Matching is
//! exact: merge candidates come from the same point set, so shared vertices
//! are bit-identical.

use super::Polygon;
use crate::error::{HullError, HullResult};
use crate::vec3::Vec3Ext;

impl Polygon {
    /// First `(i, j)` where edge `i` of `self` is edge `j` of `other`
    /// reversed, scanning `self` in the outer loop.
    pub fn common_edge(&self, other: &Polygon) -> Option<(usize, usize)> {
        let a = self.points();
        let b = other.points();
        for i in 0..a.len() {
            let a_from = a[i];
            let a_to = a[(i + 1) % a.len()];
            for j in 0..b.len() {
                if a_from == b[(j + 1) % b.len()] && a_to == b[j] {
                    return Some((i, j));
                }
            }
        }
        None
    }

    /// Returns true when the polygons share an edge and face the same way.
    pub fn can_merge(&self, other: &Polygon, eps: f64) -> bool {
        self.common_edge(other).is_some() && self.normal().dir_almost_equals(other.normal(), eps)
    }

    /// Splice `other` into `self` along edge `i` of `self` / edge `j` of
    /// `other`.
    ///
    /// Result: `self[..=i]`, then `other` from `j + 2` around to `j - 1`,
    /// then `self[i + 1..]`. Both shared vertices appear once.
    pub fn merge_at(&self, i: usize, other: &Polygon, j: usize) -> Polygon {
        let a = self.points();
        let b = other.points();
        let mut points = Vec::with_capacity((a.len() + b.len()).saturating_sub(2));
        points.extend_from_slice(&a[..=i]);
        points.extend((2..b.len()).map(|k| b[(j + k) % b.len()]));
        points.extend_from_slice(&a[i + 1..]);
        Polygon::new(points)
    }

    /// Merge two polygons along their common edge.
    ///
    /// # Errors
    ///
    /// [`HullError::NoCommonEdge`] when the polygons are not adjacent.
    pub fn merge(&self, other: &Polygon) -> HullResult<Polygon> {
        let (i, j) = self.common_edge(other).ok_or(HullError::NoCommonEdge)?;
        Ok(self.merge_at(i, other, j).without_spikes())
    }

    /// Drop repeated neighbours and backtracking runs (`x, y, x` becomes
    /// `x`), treating the vertex list as a cycle.
    ///
    /// [`Polygon::merge_at`] splices out a single shared edge. When the two
    /// polygons share a longer chain of edges, as the last triangle of a fan
    /// does with the rest of the fan, the splice leaves the chain behind as
    /// a spike that this removes.
    pub fn without_spikes(self) -> Polygon {
        let mut points = self.into_points();
        let mut i = 0;
        while points.len() >= 3 && i < points.len() {
            let n = points.len();
            let prev = (i + n - 1) % n;
            let next = (i + 1) % n;
            if points[i] == points[next] {
                points.remove(next);
                i = 0;
            } else if points[prev] == points[next] {
                points.remove(i.max(next));
                points.remove(i.min(next));
                i = 0;
            } else {
                i += 1;
            }
        }
        Polygon::new(points)
    }
}
