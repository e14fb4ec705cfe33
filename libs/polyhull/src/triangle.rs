//! # Triangle
//!
//! Three-vertex faces, the unit produced by triangulating hull routines.

use crate::line::Line;
use crate::plane::Plane;
use crate::vec3::Vec3;

/// Triangle vertices, counter-clockwise when seen from the front.
pub type Triangle = [Vec3; 3];

/// Plane of a triangle: anchored at `t[0]`, normal `cross(t[1] - t[0], t[2] - t[0])`.
pub fn triangle_to_plane(t: &Triangle) -> Plane {
    let first = Line::new(t[0], t[1]);
    let second = Line::new(t[0], t[2]);
    Plane::new(t[0], first.dir().cross(second.dir()))
}

/// Point where `line` passes through `triangle`, edges included.
///
/// Returns `None` when the line is parallel to the triangle's plane or
/// crosses the plane outside the triangle.
pub fn line_triangle_intersection(line: &Line, triangle: &Triangle, eps: f64) -> Option<Vec3> {
    let plane = triangle_to_plane(triangle);
    if line.is_parallel_to(&plane, eps) {
        return None;
    }
    let hit = plane.line_intersection(line);

    // Inside when the hit is left of (or on) every edge, seen along the normal
    let inside = (0..3).all(|i| {
        let from = triangle[i];
        let to = triangle[(i + 1) % 3];
        (to - from).cross(hit - from).dot(plane.dir) >= -eps
    });
    inside.then_some(hit)
}
