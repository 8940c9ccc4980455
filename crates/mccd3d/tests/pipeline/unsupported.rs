use super::{at, ball, World};
use mccd3d::math::{Point, Vector};
use mccd3d::pipeline::CollisionSettings;
use mccd3d::query::Ray;
use mccd3d::shape::CollisionShape;

fn plate(y: f64) -> CollisionShape {
    CollisionShape::trimesh(
        vec![
            Point::new(-2.0, y, -2.0),
            Point::new(2.0, y, -2.0),
            Point::new(2.0, y, 2.0),
            Point::new(-2.0, y, 2.0),
        ],
        vec![[0, 2, 1], [0, 3, 2]],
    )
    .unwrap()
}

#[test]
fn mesh_mesh_pairs_are_skipped_and_counted() {
    let mut world = World::new(CollisionSettings::default());
    let _ = world.add_body(plate(0.0), at(0.0, 0.0, 0.0));
    let (_, second_plate) = world.add_body(plate(0.0), at(0.0, 0.0, 0.0));
    // Balls on the plates are still handled.
    let (ball_body, _) = world.add_body(ball(0.5), at(1.0, 0.4, -1.5));
    world.run();

    assert_eq!(world.system.unsupported_pair_count(), 1);
    assert_eq!(world.system.overlapping_pairs().len(), 3);

    let contacts = world.system.contacts();
    assert_eq!(contacts.len(), 2);
    for manifold in contacts {
        assert_eq!(manifold.body2, ball_body);
        assert!(manifold.subshape1.is_some());
        assert_eq!(manifold.subshape2, None);
        assert_relative_eq!(manifold.normal, Vector::y(), epsilon = 1.0e-9);
        assert_relative_eq!(manifold.points[0].depth, 0.1, epsilon = 1.0e-9);
    }

    // Without the mesh-mesh pair, the counter is reset.
    assert!(world.system.remove(second_plate).is_some());
    world.run();
    assert_eq!(world.system.unsupported_pair_count(), 0);
    assert_eq!(world.system.contacts().len(), 1);
}

#[test]
fn ray_casts_always_fail() {
    let mut world = World::new(CollisionSettings::default());
    let (_, model) = world.add_body(ball(1.0), at(0.0, 0.0, 0.0));
    world.run();

    let ray = Ray::new(Point::new(-5.0, 0.0, 0.0), Vector::x());
    assert!(world.system.ray_hit(&ray, 10.0).is_none());
    assert!(world.system.ray_hit_model(model, &ray, 10.0).is_none());
}
