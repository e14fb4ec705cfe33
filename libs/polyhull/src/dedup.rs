//! # Approximate Deduplication
//!
//! Order-preserving removal of near-duplicates under an arbitrary
//! approximate-equality predicate. Shared by the point, plane and polygon
//! dedup steps of the hull pipeline.

/// Removes every item that is approximately equal to an earlier item.
///
/// The first occurrence wins and relative order is preserved. Runs in
/// O(n·u) predicate calls where `u` is the number of unique items.
///
/// # Examples
/// ```
/// use polyhull::dedup::remove_almost_duplicates;
/// let values = vec![1.0, 1.05, 2.0, 0.98, 3.0];
/// let unique = remove_almost_duplicates(values, |a: &f64, b: &f64| (a - b).abs() < 0.1);
/// assert_eq!(unique, vec![1.0, 2.0, 3.0]);
/// ```
pub fn remove_almost_duplicates<T, F>(items: Vec<T>, almost_equals: F) -> Vec<T>
where
    F: Fn(&T, &T) -> bool,
{
    let mut unique: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !unique.iter().any(|kept| almost_equals(kept, &item)) {
            unique.push(item);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3::{Vec3, Vec3Ext};

    #[test]
    fn test_dedup_empty() {
        let unique = remove_almost_duplicates(Vec::<Vec3>::new(), |a, b| a.almost_equals(*b, 1e-10));
        assert!(unique.is_empty());
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let points = vec![
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 1e-12),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        let unique = remove_almost_duplicates(points, |a, b| a.almost_equals(*b, 1e-10));
        assert_eq!(unique, vec![Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)]);
    }

    #[test]
    fn test_dedup_distinct_points_untouched() {
        let points = vec![Vec3::X, Vec3::Y, Vec3::Z];
        let unique = remove_almost_duplicates(points.clone(), |a, b| a.almost_equals(*b, 1e-10));
        assert_eq!(unique, points);
    }
}
