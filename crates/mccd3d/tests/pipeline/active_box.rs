use super::{at, ball, World};
use mccd3d::math::{Isometry, Point};
use mccd3d::pipeline::CollisionSettings;

fn boxed_world() -> World {
    let mut world = World::new(CollisionSettings::default());
    world
        .system
        .enable_active_bounding_box(Point::new(-5.0, -5.0, -5.0), Point::new(5.0, 5.0, 5.0))
        .unwrap();
    world
}

#[test]
fn frozen_bodies_stay_frozen_until_reactivated() {
    let mut world = boxed_world();
    let (a, _) = world.add_body(ball(1.0), at(0.0, 0.0, 0.0));
    let (b, _) = world.add_body(ball(1.0), at(20.0, 0.0, 0.0));
    world.run();

    assert!(world.system.is_body_active(a));
    assert!(!world.system.is_body_active(b));

    // Coming back into the active box does not reactivate the body.
    world.move_body(b, Isometry::translation(0.5, 0.0, 0.0));
    world.run();
    assert!(!world.system.is_body_active(b));
    assert!(world.system.overlapping_pairs().is_empty());
    assert!(world.system.contacts().is_empty());

    assert!(world.system.reactivate_body(b));
    assert!(!world.system.reactivate_body(b));
    world.run();
    assert!(world.system.is_body_active(b));
    assert_eq!(world.system.overlapping_pairs().len(), 1);
    assert_eq!(world.system.contacts().len(), 1);
}

#[test]
fn reactivate_all_unfreezes_every_body() {
    let mut world = boxed_world();
    let (a, _) = world.add_body(ball(1.0), at(10.0, 0.0, 0.0));
    let (b, _) = world.add_body(ball(1.0), at(10.0, 1.0, 0.0));
    world.run();
    assert!(!world.system.is_body_active(a) && !world.system.is_body_active(b));

    world.system.disable_active_bounding_box();
    assert!(world.system.active_bounding_box().is_none());
    world.system.reactivate_all();
    world.run();

    assert!(world.system.is_body_active(a) && world.system.is_body_active(b));
    assert_eq!(world.system.contacts().len(), 1);
}

#[test]
fn bounding_box_only_covers_active_bodies() {
    let mut world = boxed_world();
    let _ = world.add_body(ball(1.0), at(0.0, 0.0, 0.0));
    let _ = world.add_body(ball(1.0), at(2.0, 0.0, 0.0));
    let _ = world.add_body(ball(1.0), at(30.0, 0.0, 0.0));
    world.run();

    let aabb = world.system.bounding_box().unwrap();
    assert_eq!(aabb.mins, Point::new(-1.0, -1.0, -1.0));
    assert_eq!(aabb.maxs, Point::new(3.0, 1.0, 1.0));
}

#[test]
fn overlapping_aabb_returns_exactly_the_contained_bodies() {
    let mut world = boxed_world();
    let (a, _) = world.add_body(ball(1.0), at(0.0, 0.0, 0.0));
    let (b, _) = world.add_body(ball(1.0), at(3.0, 0.0, 0.0));
    let (c, _) = world.add_body(ball(1.0), at(20.0, 0.0, 0.0));
    world.run();

    let mut found = world
        .system
        .overlapping_aabb(Point::new(-1.0, -1.0, -1.0), Point::new(4.0, 1.0, 1.0));
    found.sort();
    assert_eq!(found, vec![a, b]);

    // `b` sticks out of this box.
    let found = world
        .system
        .overlapping_aabb(Point::new(-1.0, -1.0, -1.0), Point::new(3.9, 1.0, 1.0));
    assert_eq!(found, vec![a]);

    // Frozen bodies are still reported.
    let found = world
        .system
        .overlapping_aabb(Point::new(19.0, -1.0, -1.0), Point::new(21.0, 1.0, 1.0));
    assert_eq!(found, vec![c]);
}
