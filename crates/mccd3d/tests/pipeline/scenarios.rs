use super::{at, ball, World};
use mccd3d::math::{Isometry, Point, Vector};
use mccd3d::pipeline::{CollisionSettings, ContactContainer, ShapeId, VecContactContainer};

#[test]
fn overlapping_spheres() {
    let mut world = World::new(CollisionSettings::default());
    let _ = world.add_body(ball(1.0), at(0.0, 0.0, 0.0));
    let _ = world.add_body(ball(1.0), at(0.0, 0.0, 1.5));
    world.run();

    let contacts = world.system.contacts();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].points.len(), 1);
    assert_relative_eq!(contacts[0].points[0].depth, 0.5, epsilon = 1.0e-9);
    assert_relative_eq!(contacts[0].normal, Vector::z(), epsilon = 1.0e-9);

    let mut container = VecContactContainer::new();
    world.system.report_contacts(&mut container);
    assert_eq!(container.num_contacts(), 1);
}

#[test]
fn distant_spheres() {
    let mut world = World::new(CollisionSettings::default());
    let _ = world.add_body(ball(1.0), at(0.0, 0.0, 0.0));
    let _ = world.add_body(ball(1.0), at(0.0, 0.0, 3.0));
    world.run();

    assert!(world.system.overlapping_pairs().is_empty());
    assert!(world.system.contacts().is_empty());
}

#[test]
fn envelope_reports_separated_contacts() {
    let settings = CollisionSettings {
        envelope: 0.2,
        ..CollisionSettings::default()
    };
    let mut world = World::new(settings);
    let _ = world.add_body(ball(1.0), at(0.0, 0.0, 0.0));
    let _ = world.add_body(ball(1.0), at(0.0, 0.0, 2.1));
    world.run();

    let contacts = world.system.contacts();
    assert_eq!(contacts.len(), 1);
    assert_relative_eq!(contacts[0].points[0].depth, -0.1, epsilon = 1.0e-9);
}

#[test]
fn bodies_in_distinct_bins() {
    let settings = CollisionSettings {
        num_bins: Vector::repeat(2),
        fixed_bins: true,
        ..CollisionSettings::default()
    };
    let mut world = World::new(settings);
    let _ = world.add_body(ball(0.5), at(0.0, 0.0, 0.0));
    let _ = world.add_body(ball(0.5), at(10.0, 0.0, 0.0));
    let (third, _) = world.add_body(ball(0.5), at(0.0, 10.0, 0.0));
    world.run();

    assert_eq!(world.system.num_bins(), Vector::repeat(2));
    assert!(world.system.overlapping_pairs().is_empty());

    // Move the third body onto the first one.
    world.move_body(third, Isometry::translation(0.5, 0.0, 0.0));
    world.run();
    assert_eq!(world.system.overlapping_pairs(), &[(ShapeId(0), ShapeId(2))]);
}

#[test]
fn body_leaving_the_active_box() {
    let mut world = World::new(CollisionSettings::default());
    world
        .system
        .enable_active_bounding_box(Point::new(-5.0, -5.0, -5.0), Point::new(5.0, 5.0, 5.0))
        .unwrap();

    let _ = world.add_body(ball(1.0), at(0.0, 0.0, 0.0));
    let _ = world.add_body(ball(1.0), at(1.0, 0.0, 0.0));
    let (runaway, _) = world.add_body(ball(1.0), at(2.5, 0.0, 0.0));
    world.run();
    assert_eq!(world.system.overlapping_pairs().len(), 2);

    world.move_body(runaway, Isometry::translation(10.0, 0.0, 0.0));
    world.run();

    assert!(!world.system.is_body_active(runaway));
    assert_eq!(world.system.overlapping_pairs(), &[(ShapeId(0), ShapeId(1))]);
    assert_eq!(world.system.contacts().len(), 1);
}
