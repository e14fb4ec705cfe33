//! # Convex Hull
//!
//! Convex hull of a point cloud as a list of planar polygonal faces.
//!
//! ## Algorithm
//!
//! 1. Drop near-duplicate points (tight tolerance)
//! 2. Form a candidate plane from every non-collinear point triple
//! 3. Orient each normal away from the centroid of the cloud
//! 4. Drop duplicate planes
//! 5. Keep only supporting planes (no point strictly in front)
//! 6. Cull points lying on fewer than three supporting planes
//! 7. Repeat 2-5 on the surviving points
//! 8. Rebuild one polygon per plane from the points on it
//! 9. Drop polygons with a point strictly in front
//! 10. Drop duplicate polygons
//!
//! Step 2 enumerates O(n³) triples and dominates the cost, so this path
//! suits modest point counts.
//!
//! The alternative entry point, [`points_to_convex_hull_via_triangulation`],
//! takes triangles from a [`Triangulator`] and merges coplanar neighbours.

mod merge;
mod quickhull;


pub use quickhull::QuickHull;

use crate::config::HullConfig;
use crate::dedup::remove_almost_duplicates;
use crate::error::{HullError, HullResult};
use crate::plane::Plane;
use crate::polygon::Polygon;
use crate::vec3::{centroid, Vec3, Vec3Ext};
use config::constants::{GEOMETRY_EPSILON, MIN_SUPPORTING_PLANES, PARALLEL_THRESHOLD};
use rayon::prelude::*;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Compute the faces of the convex hull of `points` with default tolerances.
///
/// Empty input yields no faces.
///
/// # Scale
///
/// The default tolerances are absolute and suit models with extents
/// around one unit. Side tests measure offsets along the unnormalized
/// normal of a point triple, whose length grows with the square of the
/// edge lengths, so very small models read as flat (a cube of half-extent
/// `1e-3` splits into spurious faces) and very large ones as noisy. Scale
/// the tolerances with the model through [`HullConfig::new`] and call
/// [`ConvexHull::build`] instead.
///
/// # Example
///
/// ```rust
/// use polyhull::{points_to_convex_hull, Vec3};
///
/// let mut cube = Vec::new();
/// for x in [-1.0, 1.0] {
///     for y in [-1.0, 1.0] {
///         for z in [-1.0, 1.0] {
///             cube.push(Vec3::new(x, y, z));
///         }
///     }
/// }
/// let faces = points_to_convex_hull(&cube);
/// assert_eq!(faces.len(), 6);
/// assert!(faces.iter().all(|face| face.len() == 4));
/// ```
pub fn points_to_convex_hull(points: &[Vec3]) -> Vec<Polygon> {
    ConvexHull::build(points, &HullConfig::default()).into_polygons()
}

/// Compute hull faces by triangulating with `triangulator` and merging
/// coplanar triangles that share an edge.
///
/// Normals are compared with [`Triangulator::merge_tolerance`], so a
/// [`QuickHull`] built with custom tolerances merges with its own
/// `geometry` tolerance.
///
/// Faster than [`points_to_convex_hull`] for larger clouds, but face
/// minimality depends on the triangulator placing coplanar triangles
/// edge to edge.
///
/// # Errors
///
/// Propagates triangulator failures and rejects triangles that reference
/// points outside `points` with [`HullError::InvalidTriangulation`].
///
/// # Example
///
/// ```rust
/// use polyhull::{points_to_convex_hull_via_triangulation, QuickHull, Vec3};
///
/// let points = [
///     Vec3::new(0.0, 0.0, 0.0),
///     Vec3::new(1.0, 0.0, 0.0),
///     Vec3::new(0.0, 1.0, 0.0),
///     Vec3::new(0.0, 0.0, 1.0),
/// ];
/// let faces = points_to_convex_hull_via_triangulation(&points, &QuickHull::default())?;
/// assert_eq!(faces.len(), 4);
/// # Ok::<(), polyhull::HullError>(())
/// ```
pub fn points_to_convex_hull_via_triangulation<T>(
    points: &[Vec3],
    triangulator: &T,
) -> HullResult<Vec<Polygon>>
where
    T: Triangulator + ?Sized,
{
    if points.is_empty() {
        return Ok(Vec::new());
    }

    let triangles = triangulator.triangulate(points)?;
    let mut polygons = Vec::with_capacity(triangles.len());
    for [a, b, c] in triangles {
        if let Some(&index) = [a, b, c].iter().find(|&&i| i >= points.len()) {
            log::warn!(
                "triangulator returned index {} for {} points",
                index,
                points.len()
            );
            return Err(HullError::InvalidTriangulation {
                index,
                count: points.len(),
            });
        }
        polygons.push(Polygon::from([points[a], points[b], points[c]]));
    }

    let triangle_count = polygons.len();
    let faces = merge::merge_coplanar(polygons, triangulator.merge_tolerance());
    log::debug!(
        "triangulated hull: {} triangles merged into {} faces",
        triangle_count,
        faces.len()
    );
    Ok(faces)
}

// =============================================================================
// TRIANGULATOR
// =============================================================================

/// Source of hull triangles for [`points_to_convex_hull_via_triangulation`].
///
/// Implementations return index triples into `points`, wound
/// counter-clockwise when seen from outside the hull. Any closure
/// `Fn(&[Vec3]) -> Vec<[usize; 3]>` qualifies.
pub trait Triangulator {
    /// Triangulate the convex hull of `points`.
    fn triangulate(&self, points: &[Vec3]) -> HullResult<Vec<[usize; 3]>>;

    /// Tolerance for deciding that two output triangles face the same way
    /// and may be merged.
    fn merge_tolerance(&self) -> f64 {
        GEOMETRY_EPSILON
    }
}

impl<F> Triangulator for F
where
    F: Fn(&[Vec3]) -> Vec<[usize; 3]>,
{
    fn triangulate(&self, points: &[Vec3]) -> HullResult<Vec<[usize; 3]>> {
        Ok(self(points))
    }
}

// =============================================================================
// CONVEX HULL
// =============================================================================

/// Faces of a convex hull together with the vertices that survived
/// interior-point culling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvexHull {
    points: Vec<Vec3>,
    polygons: Vec<Polygon>,
}

impl ConvexHull {
    /// Build the hull of `points`.
    ///
    /// Tolerances in `config` are absolute; see [`points_to_convex_hull`]
    /// for how they interact with model scale.
    pub fn build(points: &[Vec3], config: &HullConfig) -> ConvexHull {
        let point_eps = config.tolerance.point;
        let eps = config.tolerance.geometry;

        let unique = remove_almost_duplicates(points.to_vec(), |kept, p| {
            kept.almost_equals(*p, point_eps)
        });
        if unique.is_empty() {
            return ConvexHull::default();
        }

        let planes = supporting_planes(&unique, eps, fans_out(config, unique.len()));

        let reduced: Vec<Vec3> = unique
            .iter()
            .copied()
            .filter(|p| {
                planes.iter().filter(|plane| !plane.is_behind(*p, eps)).count()
                    >= MIN_SUPPORTING_PLANES
            })
            .collect();
        log::debug!(
            "hull pass 1: {} unique points, {} supporting planes, {} vertex candidates",
            unique.len(),
            planes.len(),
            reduced.len()
        );

        let parallel = fans_out(config, reduced.len());
        let planes = supporting_planes(&reduced, eps, parallel);

        let faces = map_maybe_parallel(planes, parallel, |plane| {
            Polygon::from_plane(plane, &reduced, eps)
        });
        let faces = filter_maybe_parallel(faces, parallel, |face| !is_stale(face, &reduced, eps));
        let mut polygons = remove_almost_duplicates(faces, |kept, face| kept.almost_equals(face, eps));

        if config.merge_coplanar {
            polygons = merge::merge_coplanar(polygons, eps);
        }
        log::debug!(
            "hull pass 2: {} vertices, {} faces",
            reduced.len(),
            polygons.len()
        );

        ConvexHull {
            points: reduced,
            polygons,
        }
    }

    /// Hull vertices: the deduplicated input minus interior points.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Hull faces, each wound counter-clockwise seen from outside.
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn into_polygons(self) -> Vec<Polygon> {
        self.polygons
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

// =============================================================================
// PIPELINE STAGES
// =============================================================================

fn fans_out(config: &HullConfig, point_count: usize) -> bool {
    config.parallel && point_count >= PARALLEL_THRESHOLD
}

/// Steps 2-5: candidate planes, outward orientation, dedup, support filter.
fn supporting_planes(points: &[Vec3], eps: f64, parallel: bool) -> Vec<Plane> {
    let Some(center) = centroid(points) else {
        return Vec::new();
    };

    let oriented: Vec<Plane> = candidate_planes(points, eps, parallel)
        .into_iter()
        .map(|plane| {
            if (plane.pos - center).dot(plane.dir) <= 0.0 {
                plane.invert()
            } else {
                plane
            }
        })
        .collect();
    let candidate_count = oriented.len();

    let unique = remove_almost_duplicates(oriented, |kept, plane| plane.almost_equals(kept, eps));
    let unique_count = unique.len();

    let supporting = filter_maybe_parallel(unique, parallel, |plane| {
        !points.iter().any(|p| plane.is_in_front(*p, eps))
    });
    log::debug!(
        "{} candidate planes, {} unique, {} supporting",
        candidate_count,
        unique_count,
        supporting.len()
    );
    supporting
}

/// Step 2: one plane per non-collinear triple `i < j < k`.
fn candidate_planes(points: &[Vec3], eps: f64, parallel: bool) -> Vec<Plane> {
    let n = points.len();
    let planes_from = move |i: usize| {
        ((i + 1)..n).flat_map(move |j| {
            ((j + 1)..n).filter_map(move |k| Plane::from_points(points[i], points[j], points[k], eps))
        })
    };

    if parallel {
        (0..n).into_par_iter().flat_map_iter(planes_from).collect()
    } else {
        (0..n).flat_map(planes_from).collect()
    }
}

/// Step 9: a face is stale when some hull point lies in front of it.
fn is_stale(face: &Polygon, points: &[Vec3], eps: f64) -> bool {
    match face.to_plane() {
        Ok(plane) => points.iter().any(|p| plane.is_in_front(*p, eps)),
        Err(_) => true,
    }
}

fn map_maybe_parallel<T, U, F>(items: Vec<T>, parallel: bool, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    if parallel {
        items.par_iter().map(f).collect()
    } else {
        items.iter().map(f).collect()
    }
}

fn filter_maybe_parallel<T, F>(items: Vec<T>, parallel: bool, keep: F) -> Vec<T>
where
    T: Send,
    F: Fn(&T) -> bool + Sync + Send,
{
    if parallel {
        items.into_par_iter().filter(|item| keep(item)).collect()
    } else {
        items.into_iter().filter(|item| keep(item)).collect()
    }
}
