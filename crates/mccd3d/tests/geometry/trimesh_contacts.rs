use mccd3d::math::{Isometry, Point, Vector};
use mccd3d::query::{ContactDispatcher, ContactManifold, Unsupported};
use mccd3d::shape::CollisionShape;

fn floor() -> CollisionShape {
    CollisionShape::trimesh(
        vec![
            Point::new(-5.0, 0.0, -5.0),
            Point::new(5.0, 0.0, -5.0),
            Point::new(5.0, 0.0, 5.0),
            Point::new(-5.0, 0.0, 5.0),
        ],
        vec![[0, 2, 1], [0, 3, 2]],
    )
    .unwrap()
}

#[test]
fn cuboid_resting_on_a_mesh() {
    let dispatcher = ContactDispatcher::default();
    let cube = CollisionShape::cuboid(Vector::repeat(0.5)).unwrap();
    // Away from the diagonal shared by both triangles.
    let pos12 = Isometry::translation(2.0, 0.45, -3.0);

    let mut manifolds: Vec<ContactManifold> = Vec::new();
    dispatcher
        .contact_manifolds(&pos12, &floor(), &cube, 0.0, &mut manifolds)
        .unwrap();

    assert_eq!(manifolds.len(), 1);
    let manifold = &manifolds[0];
    assert_eq!(manifold.subshape2, None);
    assert_eq!(manifold.subshape1, Some(0));
    assert_relative_eq!(manifold.local_n1, Vector::y(), epsilon = 1.0e-4);
    for pt in &manifold.points {
        assert_relative_eq!(pt.dist, -0.05, epsilon = 1.0e-4);
    }
}

#[test]
fn mesh_mesh_is_unsupported() {
    let dispatcher = ContactDispatcher::default();
    let mut manifolds = Vec::new();
    let result = dispatcher.contact_manifolds(
        &Isometry::identity(),
        &floor(),
        &floor(),
        0.0,
        &mut manifolds,
    );
    assert_eq!(result, Err(Unsupported));
    assert!(manifolds.is_empty());
}
