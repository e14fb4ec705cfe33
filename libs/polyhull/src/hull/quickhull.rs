//! # QuickHull Triangulator
//!
//! Triangulated 3D convex hull by QuickHull (Barber, Dobkin, Huhdanpaa),
//! used as the built-in [`Triangulator`] for the merge-based hull.
//!
//! ## Algorithm Steps
//!
//! 1. Find 6 extreme points (min/max on each axis)
//! 2. Build initial tetrahedron from 4 non-coplanar points
//! 3. Assign remaining points to faces they're outside of
//! 4. For each face with outside points:
//!    a. Find farthest point
//!    b. Find horizon edges (boundary of visible faces)
//!    c. Create new faces from horizon to farthest point
//!    d. Reassign the orphaned outside points
//! 5. Repeat until no faces have outside points
//!
//! Triangles index the caller's slice, so duplicate inputs are collapsed
//! internally and mapped back to their first occurrence.

use super::Triangulator;
use crate::error::{HullError, HullResult};
use crate::vec3::{Vec3, Vec3Ext};
use config::constants::Tolerance;
use std::collections::{HashMap, HashSet};

/// QuickHull triangulator.
///
/// # Example
///
/// ```rust
/// use polyhull::{QuickHull, Triangulator, Vec3};
///
/// let points = [
///     Vec3::new(0.0, 0.0, 0.0),
///     Vec3::new(1.0, 0.0, 0.0),
///     Vec3::new(0.0, 1.0, 0.0),
///     Vec3::new(0.0, 0.0, 1.0),
///     Vec3::new(0.1, 0.1, 0.1),
/// ];
/// let triangles = QuickHull::default().triangulate(&points)?;
/// assert_eq!(triangles.len(), 4);
/// assert!(triangles.iter().flatten().all(|&i| i < 4));
/// # Ok::<(), polyhull::HullError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QuickHull {
    /// `point` collapses duplicates, `geometry` is the outside-of-face margin.
    pub tolerance: Tolerance,
}

impl QuickHull {
    pub fn new(tolerance: Tolerance) -> Self {
        Self { tolerance }
    }
}

impl Triangulator for QuickHull {
    /// # Errors
    ///
    /// [`HullError::Degenerate`] when fewer than 4 distinct points remain or
    /// the points are collinear or coplanar.
    fn triangulate(&self, points: &[Vec3]) -> HullResult<Vec<[usize; 3]>> {
        let (unique, origin) = unique_points(points, self.tolerance.point);
        if unique.len() < 4 {
            return Err(HullError::degenerate(format!(
                "hull requires at least 4 distinct points, got {}",
                unique.len()
            )));
        }

        let eps = self.tolerance.geometry;
        let initial = build_initial_simplex(&unique, eps)?;
        let faces = quickhull_iterate(initial, &unique, eps);
        log::debug!(
            "quickhull: {} points, {} distinct, {} triangles",
            points.len(),
            unique.len(),
            faces.len()
        );

        Ok(faces
            .iter()
            .map(|face| face.vertices.map(|v| origin[v]))
            .collect())
    }

    fn merge_tolerance(&self) -> f64 {
        self.tolerance.geometry
    }
}

/// A triangular face of the hull under construction.
#[derive(Debug, Clone)]
struct HullFace {
    /// Indices into the distinct point list, counter-clockwise from outside
    vertices: [usize; 3],
    /// Outward unit normal
    normal: Vec3,
    /// Distance from origin along normal
    distance: f64,
    /// Points outside this face
    outside_points: Vec<usize>,
}

impl HullFace {
    fn new(v0: usize, v1: usize, v2: usize, points: &[Vec3]) -> Self {
        let p0 = points[v0];
        let normal = (points[v1] - p0).cross(points[v2] - p0).normalize_or_self();
        Self {
            vertices: [v0, v1, v2],
            normal,
            distance: normal.dot(p0),
            outside_points: Vec::new(),
        }
    }

    fn signed_distance(&self, point: Vec3) -> f64 {
        self.normal.dot(point) - self.distance
    }

    fn is_outside(&self, point: Vec3, eps: f64) -> bool {
        self.signed_distance(point) > eps
    }

    fn farthest_point(&self, points: &[Vec3]) -> Option<usize> {
        self.outside_points
            .iter()
            .copied()
            .max_by(|&a, &b| {
                self.signed_distance(points[a])
                    .total_cmp(&self.signed_distance(points[b]))
            })
    }
}

/// Distinct points plus, for each, the index of its first occurrence in
/// `points`.
fn unique_points(points: &[Vec3], eps: f64) -> (Vec<Vec3>, Vec<usize>) {
    let mut unique: Vec<Vec3> = Vec::with_capacity(points.len());
    let mut origin = Vec::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        if !unique.iter().any(|u| u.almost_equals(*p, eps)) {
            unique.push(*p);
            origin.push(i);
        }
    }
    (unique, origin)
}

// =============================================================================
// INITIAL SIMPLEX
// =============================================================================

fn build_initial_simplex(points: &[Vec3], eps: f64) -> HullResult<Vec<HullFace>> {
    let mut extremes = [0usize; 6];
    for (i, p) in points.iter().enumerate() {
        for axis in 0..3 {
            if p[axis] < points[extremes[2 * axis]][axis] {
                extremes[2 * axis] = i;
            }
            if p[axis] > points[extremes[2 * axis + 1]][axis] {
                extremes[2 * axis + 1] = i;
            }
        }
    }

    let (p0, p1) = find_farthest_pair(&extremes, points);
    let p2 = find_farthest_from_line(p0, p1, points, eps)?;
    let p3 = find_farthest_from_plane(p0, p1, p2, points, eps)?;

    let centroid = (points[p0] + points[p1] + points[p2] + points[p3]) / 4.0;
    let mut faces = vec![
        create_face_outward(p0, p1, p2, centroid, points),
        create_face_outward(p0, p2, p3, centroid, points),
        create_face_outward(p0, p3, p1, centroid, points),
        create_face_outward(p1, p3, p2, centroid, points),
    ];

    let used = [p0, p1, p2, p3];
    let remaining: Vec<usize> = (0..points.len()).filter(|i| !used.contains(i)).collect();
    assign_outside(&mut faces, &remaining, points, eps);

    Ok(faces)
}

fn find_farthest_pair(indices: &[usize], points: &[Vec3]) -> (usize, usize) {
    let mut max_dist = 0.0;
    let mut best = (indices[0], indices[1]);

    for (i, &a) in indices.iter().enumerate() {
        for &b in indices.iter().skip(i + 1) {
            let dist = (points[a] - points[b]).length_squared();
            if dist > max_dist {
                max_dist = dist;
                best = (a, b);
            }
        }
    }
    best
}

fn find_farthest_from_line(p0: usize, p1: usize, points: &[Vec3], eps: f64) -> HullResult<usize> {
    let line_dir = (points[p1] - points[p0]).normalize_or_self();
    let mut max_dist = eps;
    let mut best = None;

    for (i, p) in points.iter().enumerate() {
        if i == p0 || i == p1 {
            continue;
        }
        let v = *p - points[p0];
        let dist = (v - v.dot(line_dir) * line_dir).length();
        if dist > max_dist {
            max_dist = dist;
            best = Some(i);
        }
    }

    best.ok_or_else(|| HullError::degenerate("all points are collinear"))
}

fn find_farthest_from_plane(
    p0: usize,
    p1: usize,
    p2: usize,
    points: &[Vec3],
    eps: f64,
) -> HullResult<usize> {
    let normal = (points[p1] - points[p0])
        .cross(points[p2] - points[p0])
        .normalize_or_self();

    let mut max_dist = eps;
    let mut best = None;

    for (i, p) in points.iter().enumerate() {
        if i == p0 || i == p1 || i == p2 {
            continue;
        }
        let dist = normal.dot(*p - points[p0]).abs();
        if dist > max_dist {
            max_dist = dist;
            best = Some(i);
        }
    }

    best.ok_or_else(|| HullError::degenerate("all points are coplanar"))
}

/// Face through `v0, v1, v2` wound so its normal points away from `centroid`.
fn create_face_outward(v0: usize, v1: usize, v2: usize, centroid: Vec3, points: &[Vec3]) -> HullFace {
    let face = HullFace::new(v0, v1, v2, points);
    let face_center = (points[v0] + points[v1] + points[v2]) / 3.0;

    if face.normal.dot(centroid - face_center) > 0.0 {
        HullFace::new(v0, v2, v1, points)
    } else {
        face
    }
}

/// Give each point to the first face it is outside of; points inside every
/// face are dropped.
fn assign_outside(faces: &mut [HullFace], candidates: &[usize], points: &[Vec3], eps: f64) {
    for &idx in candidates {
        let point = points[idx];
        if let Some(face) = faces.iter_mut().find(|f| f.is_outside(point, eps)) {
            face.outside_points.push(idx);
        }
    }
}

// =============================================================================
// ITERATION
// =============================================================================

fn quickhull_iterate(mut faces: Vec<HullFace>, points: &[Vec3], eps: f64) -> Vec<HullFace> {
    let max_iterations = points.len() * 2;

    for _ in 0..max_iterations {
        let Some(face_idx) = faces.iter().position(|f| !f.outside_points.is_empty()) else {
            break;
        };
        let Some(farthest) = faces[face_idx].farthest_point(points) else {
            continue;
        };

        let visible: Vec<usize> = faces
            .iter()
            .enumerate()
            .filter(|(_, f)| f.is_outside(points[farthest], eps))
            .map(|(i, _)| i)
            .collect();
        if visible.is_empty() {
            faces[face_idx].outside_points.retain(|&p| p != farthest);
            continue;
        }

        let horizon = find_horizon_edges(&faces, &visible);

        let mut reassign: Vec<usize> = visible
            .iter()
            .flat_map(|&idx| faces[idx].outside_points.iter().copied())
            .collect();
        reassign.retain(|&p| p != farthest);

        // Descending so swap_remove never moves a face still to be removed
        let mut visible_sorted = visible;
        visible_sorted.sort_unstable_by(|a, b| b.cmp(a));
        for idx in visible_sorted {
            faces.swap_remove(idx);
        }

        let centroid = compute_centroid(&faces, points);
        for (e0, e1) in horizon {
            faces.push(create_face_outward(e0, e1, farthest, centroid, points));
        }

        assign_outside(&mut faces, &reassign, points, eps);
    }

    faces
}

/// Edges of the visible region bordering faces that stay.
fn find_horizon_edges(faces: &[HullFace], visible: &[usize]) -> Vec<(usize, usize)> {
    let edges_of = |idx: usize| {
        let v = faces[idx].vertices;
        [(v[0], v[1]), (v[1], v[2]), (v[2], v[0])]
    };
    let key = |(a, b): (usize, usize)| if a < b { (a, b) } else { (b, a) };

    let mut edge_count: HashMap<(usize, usize), usize> = HashMap::new();
    for &idx in visible {
        for edge in edges_of(idx) {
            *edge_count.entry(key(edge)).or_insert(0) += 1;
        }
    }

    visible
        .iter()
        .flat_map(|&idx| edges_of(idx))
        .filter(|&edge| edge_count.get(&key(edge)) == Some(&1))
        .collect()
}

/// Centroid of the vertices still on the hull.
fn compute_centroid(faces: &[HullFace], points: &[Vec3]) -> Vec3 {
    let mut sum = Vec3::ZERO;
    let mut seen: HashSet<usize> = HashSet::new();

    for face in faces {
        for &v in &face.vertices {
            if seen.insert(v) {
                sum += points[v];
            }
        }
    }

    if seen.is_empty() {
        Vec3::ZERO
    } else {
        sum / seen.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_cube() -> Vec<Vec3> {
        let mut points = Vec::new();
        for x in [0.0, 1.0] {
            for y in [0.0, 1.0] {
                for z in [0.0, 1.0] {
                    points.push(Vec3::new(x, y, z));
                }
            }
        }
        points
    }

    /// Every hull point lies on or behind every returned triangle.
    fn assert_outward(points: &[Vec3], triangles: &[[usize; 3]]) {
        for [a, b, c] in triangles {
            let normal = (points[*b] - points[*a]).cross(points[*c] - points[*a]);
            for p in points {
                assert!(normal.dot(*p - points[*a]) <= 1e-9, "{p:?} in front of {a},{b},{c}");
            }
        }
    }

    #[test]
    fn test_quickhull_tetrahedron() {
        let points = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.5, 1.0, 0.0),
            Vec3::new(0.5, 0.5, 1.0),
        ];
        let triangles = QuickHull::default().triangulate(&points).unwrap();
        assert_eq!(triangles.len(), 4);
        assert_outward(&points, &triangles);
    }

    #[test]
    fn test_quickhull_cube() {
        let points = unit_cube();
        let triangles = QuickHull::default().triangulate(&points).unwrap();
        assert_eq!(triangles.len(), 12);
        assert_outward(&points, &triangles);
    }

    #[test]
    fn test_quickhull_skips_interior_points() {
        let mut points = unit_cube();
        points.push(Vec3::new(0.5, 0.5, 0.5));
        let triangles = QuickHull::default().triangulate(&points).unwrap();
        assert_eq!(triangles.len(), 12);
        assert!(triangles.iter().flatten().all(|&i| i < 8));
    }

    #[test]
    fn test_quickhull_maps_duplicates_to_first_occurrence() {
        let mut points = unit_cube();
        points.insert(0, points[7]);
        let triangles = QuickHull::default().triangulate(&points).unwrap();
        assert_eq!(triangles.len(), 12);
        assert!(triangles.iter().flatten().all(|&i| i != 8));
    }

    #[test]
    fn test_quickhull_too_few_points() {
        let points = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.5, 1.0, 0.0),
        ];
        let err = QuickHull::default().triangulate(&points).unwrap_err();
        assert!(matches!(err, HullError::Degenerate { .. }));
    }

    #[test]
    fn test_quickhull_coplanar_points() {
        let points = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.5, 0.5, 0.0),
        ];
        let err = QuickHull::default().triangulate(&points).unwrap_err();
        assert!(err.to_string().contains("coplanar"));
    }

    #[test]
    fn test_quickhull_merges_with_its_own_tolerance() {
        let tolerance = Tolerance::new(1e-12, 1e-3).unwrap();
        assert_eq!(QuickHull::new(tolerance).merge_tolerance(), 1e-3);
        assert_eq!(
            QuickHull::default().merge_tolerance(),
            config::constants::GEOMETRY_EPSILON
        );
    }
}
