//! Coplanar face merging.
//!
//! Works on a list of faces until no two of them share an edge and a
//! normal direction. Each merge replaces the first face of the pair and
//! removes the second, then the scan restarts from the front. Merged faces
//! are cleaned of spikes, since a triangle can share more than one edge
//! with the face it joins.

use crate::polygon::Polygon;

/// Merge edge-adjacent coplanar polygons until none remain.
pub(crate) fn merge_coplanar(mut polygons: Vec<Polygon>, eps: f64) -> Vec<Polygon> {
    while let Some((i, j, edge_i, edge_j)) = find_mergeable(&polygons, eps) {
        let other = polygons.remove(j);
        let merged = polygons[i].merge_at(edge_i, &other, edge_j).without_spikes();
        log::trace!(
            "merged face {} ({} points) into face {} -> {} points",
            j,
            other.len(),
            i,
            merged.len()
        );
        polygons[i] = merged;
    }
    polygons
}

/// First pair `(i, j)` with `i < j` that can merge, with the shared edge
/// position in each.
fn find_mergeable(polygons: &[Polygon], eps: f64) -> Option<(usize, usize, usize, usize)> {
    for (i, a) in polygons.iter().enumerate() {
        for (j, b) in polygons.iter().enumerate().skip(i + 1) {
            if !a.can_merge(b, eps) {
                continue;
            }
            if let Some((edge_i, edge_j)) = a.common_edge(b) {
                return Some((i, j, edge_i, edge_j));
            }
        }
    }
    None
}
