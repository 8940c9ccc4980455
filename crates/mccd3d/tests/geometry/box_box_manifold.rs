use mccd3d::math::{Isometry, Real, Vector};
use mccd3d::query::{details, ContactManifold};
use mccd3d::shape::Cuboid;

fn manifold(pos12: &Isometry<Real>, c1: &Cuboid, c2: &Cuboid, prediction: Real) -> ContactManifold {
    let mut manifold = ContactManifold::new();
    details::contact_manifold_cuboid_cuboid(pos12, c1, c2, prediction, &mut manifold);
    manifold
}

#[test]
fn stacked_boxes_have_four_points() {
    let base = Cuboid::new(Vector::new(2.0, 0.5, 2.0));
    let cube = Cuboid::new(Vector::repeat(0.5));
    let pos12 = Isometry::translation(0.3, 0.95, -0.2);

    let m = manifold(&pos12, &base, &cube, 0.0);
    assert_eq!(m.points.len(), 4);
    assert_relative_eq!(m.local_n1, Vector::y(), epsilon = 1.0e-9);
    for pt in &m.points {
        assert_relative_eq!(pt.dist, -0.05, epsilon = 1.0e-9);
    }
}

#[test]
fn manifold_never_exceeds_four_points() {
    let cube = Cuboid::new(Vector::repeat(0.5));

    // A cube rotated by 45 degrees around the normal: the clipped polygon is an octagon.
    let pos12 = Isometry::new(
        Vector::new(0.0, 0.99, 0.0),
        Vector::y() * std::f64::consts::FRAC_PI_4,
    );
    let m = manifold(&pos12, &cube, &cube, 0.0);
    assert!(!m.points.is_empty());
    assert!(m.points.len() <= 4);

    // Same input, same output.
    let again = manifold(&pos12, &cube, &cube, 0.0);
    assert_eq!(m, again);
}

#[test]
fn edge_edge_contact_has_one_point() {
    let cube = Cuboid::new(Vector::repeat(0.5));
    // Two cubes rotated around orthogonal axes touching along crossed edges.
    let h = (0.5 as Real).sqrt();
    let pos1 = Isometry::new(Vector::zeros(), Vector::z() * std::f64::consts::FRAC_PI_4);
    let pos2 = Isometry::new(
        Vector::new(0.0, 2.0 * h - 0.01, 0.0),
        Vector::x() * std::f64::consts::FRAC_PI_4,
    );
    let m = manifold(&pos1.inv_mul(&pos2), &cube, &cube, 0.0);
    assert_eq!(m.points.len(), 1);
    assert_relative_eq!(m.points[0].dist, -0.01, epsilon = 1.0e-6);
}

#[test]
fn separated_boxes_within_prediction() {
    let cube = Cuboid::new(Vector::repeat(0.5));
    let pos12 = Isometry::translation(1.05, 0.0, 0.0);

    assert!(manifold(&pos12, &cube, &cube, 0.0).points.is_empty());

    let m = manifold(&pos12, &cube, &cube, 0.1);
    assert_eq!(m.points.len(), 4);
    for pt in &m.points {
        assert_relative_eq!(pt.dist, 0.05, epsilon = 1.0e-9);
    }
}
