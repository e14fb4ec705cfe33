use polyhull::{points_to_convex_hull, Mirror, Plane, Polygon, Vec3};

fn cube(half: f64) -> Vec<Vec3> {
    Mirror::xyz().apply(&[Vec3::splat(half)])
}

fn octagon_ring(z: f64) -> Vec<Vec3> {
    (0..8)
        .map(|i| {
            let angle = i as f64 * std::f64::consts::FRAC_PI_4;
            Vec3::new(2.0 * angle.cos(), 2.0 * angle.sin(), z)
        })
        .collect()
}

#[test]
fn empty_cloud_has_no_faces() {
    assert!(points_to_convex_hull(&[]).is_empty());
}

#[test]
fn tetrahedron_has_four_triangles() {
    let faces = points_to_convex_hull(&[
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
    ]);
    assert_eq!(faces.len(), 4);
    assert!(faces.iter().all(|face| face.len() == 3));
}

#[test]
fn cube_with_inner_points_has_six_quads() {
    let corners = cube(1.0);
    let mut points = corners.clone();
    points.extend([
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.5, 0.0, 0.0),
        Vec3::new(0.99999, 0.0, 0.0),
    ]);

    let faces = points_to_convex_hull(&points);
    assert_eq!(faces.len(), 6);
    for face in &faces {
        assert_eq!(face.len(), 4);
        assert!(face.points().iter().all(|p| corners.contains(p)));
    }
}

#[test]
fn octagonal_prism_has_ten_faces() {
    let mut points = octagon_ring(2.0);
    points.extend(octagon_ring(-2.0));

    let faces = points_to_convex_hull(&points);
    assert_eq!(faces.len(), 10);
    assert_eq!(faces.iter().filter(|face| face.len() == 8).count(), 2);
    assert_eq!(faces.iter().filter(|face| face.len() == 4).count(), 8);
}

#[test]
fn mirrored_octant_builds_a_box() {
    let points = Mirror::xyz().apply(&[Vec3::new(1.0, 2.0, 3.0)]);
    let faces = points_to_convex_hull(&points);
    assert_eq!(faces.len(), 6);

    let top = faces
        .iter()
        .find(|face| face.points().iter().all(|p| p.z == 3.0))
        .expect("top face");
    assert_eq!(top.len(), 4);
    assert!(top.normal().z > 0.0);
}

#[test]
fn face_from_plane_keeps_only_points_on_it() {
    let points = [
        Vec3::new(0.0, 1.0, 1.0),
        Vec3::new(5.0, 0.0, 0.0),
        Vec3::new(0.0, -1.0, 1.0),
        Vec3::new(0.0, -1.0, -1.0),
        Vec3::new(0.0, 1.0, -1.0),
    ];
    let face = Polygon::from_plane(&Plane::x_plus(), &points, 1e-6);

    assert_eq!(face.len(), 4);
    assert!(!face.points().contains(&Vec3::new(5.0, 0.0, 0.0)));
    assert!(face.normal().x > 0.0);

    let expected = Polygon::new(vec![
        Vec3::new(0.0, -1.0, -1.0),
        Vec3::new(0.0, 1.0, -1.0),
        Vec3::new(0.0, 1.0, 1.0),
        Vec3::new(0.0, -1.0, 1.0),
    ]);
    assert!(face.almost_equals(&expected, 1e-6));
}
