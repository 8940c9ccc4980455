use super::World;
use mccd3d::bounding_volume::BoundingVolume;
use mccd3d::math::{Isometry, Real, Vector};
use mccd3d::pipeline::{
    BodyHandle, BodyState, CollisionModel, CollisionSettings, Group, ShapeId,
};
use mccd3d::shape::CollisionShape;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

fn random_shape(rng: &mut StdRng) -> CollisionShape {
    let size = rng.gen_range(0.2..1.0);
    match rng.gen_range(0..5) {
        0 => CollisionShape::ball(size).unwrap(),
        1 => CollisionShape::cuboid(Vector::new(size, size * 0.5, size * 0.8)).unwrap(),
        2 => CollisionShape::capsule(size, size * 0.5).unwrap(),
        3 => CollisionShape::cylinder(size * 0.5, size).unwrap(),
        _ => CollisionShape::cone(size * 0.5, size).unwrap(),
    }
}

/// A scene of random convex shapes, with random families and masks.
pub fn random_world(seed: u64, num_bodies: usize, settings: CollisionSettings) -> World {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut world = World::new(settings);
    let families = [Group::GROUP_1, Group::GROUP_2, Group::GROUP_3];

    for _ in 0..num_bodies {
        let translation = Vector::new(
            rng.gen_range(-5.0..5.0),
            rng.gen_range(-5.0..5.0),
            rng.gen_range(-5.0..5.0),
        );
        let axisangle = Vector::new(
            rng.gen_range(-3.0..3.0),
            rng.gen_range(-3.0..3.0),
            rng.gen_range(-3.0..3.0),
        );
        let position = Isometry::new(translation, axisangle);
        let state = if rng.gen_bool(0.1) {
            BodyState::new_fixed(position)
        } else {
            BodyState::new(position)
        };

        let shape = random_shape(&mut rng);
        let family = families[rng.gen_range(0..families.len())];
        let mask = if rng.gen_bool(0.2) {
            Group::ALL.difference(families[rng.gen_range(0..families.len())])
        } else {
            Group::ALL
        };

        let body = BodyHandle(world.bodies.len() as u64);
        let _ = world.bodies.insert(body, state);
        let _ = world.system.add(
            CollisionModel::new(body)
                .with_shape(shape, Isometry::identity())
                .with_family(family)
                .with_mask(mask),
        );
    }

    world
}

#[test]
fn broad_phase_pairs_match_brute_force() {
    let settings = CollisionSettings {
        envelope: 0.05,
        num_bins: Vector::new(3, 4, 5),
        ..CollisionSettings::default()
    };
    let mut world = random_world(0, 300, settings);
    world.run();

    let data = world.system.data();
    let mut expected = Vec::new();
    for i in 0..data.num_shapes() as u32 {
        for j in i + 1..data.num_shapes() as u32 {
            let (id1, id2) = (ShapeId(i), ShapeId(j));
            if data.aabbs()[i as usize].intersects(&data.aabbs()[j as usize])
                && data.are_compatible(id1, id2)
            {
                expected.push((id1, id2));
            }
        }
    }

    assert!(!expected.is_empty());
    assert_eq!(world.system.overlapping_pairs(), &expected[..]);
}

#[test]
fn pairs_have_no_duplicates_and_respect_masks() {
    let settings = CollisionSettings {
        fixed_bins: false,
        grid_density: 2.0,
        ..CollisionSettings::default()
    };
    let mut world = random_world(1, 400, settings);
    world.run();

    let data = world.system.data();
    let mut seen = HashSet::new();
    for (id1, id2) in world.system.overlapping_pairs() {
        assert!(id1 < id2);
        assert!(seen.insert((*id1, *id2)), "duplicate pair {:?}", (id1, id2));

        let (d1, d2) = (data.descriptor(*id1), data.descriptor(*id2));
        assert!(Group::test(d1.family, d1.mask, d2.family, d2.mask));
        assert_ne!(d1.body, d2.body);
    }
}

#[test]
fn contacts_only_come_from_overlapping_aabbs() {
    let settings = CollisionSettings {
        envelope: 0.02,
        ..CollisionSettings::default()
    };
    let mut world = random_world(2, 300, settings);
    world.run();

    let data = world.system.data();
    let pairs: HashSet<_> = world.system.overlapping_pairs().iter().copied().collect();
    assert!(!world.system.contacts().is_empty());

    for manifold in world.system.contacts() {
        assert!(pairs.contains(&(manifold.shape1, manifold.shape2)));
        let aabb1 = &data.aabbs()[manifold.shape1.index()];
        let aabb2 = &data.aabbs()[manifold.shape2.index()];
        assert!(aabb1.intersects(aabb2));

        assert_relative_eq!(manifold.normal.norm(), 1.0, epsilon = 1.0e-6);
        assert!(!manifold.points.is_empty() && manifold.points.len() <= 4);

        let margin: Real = data
            .descriptor(manifold.shape1)
            .margin
            .max(data.descriptor(manifold.shape2).margin);
        for pt in &manifold.points {
            let depth = -(pt.point2 - pt.point1).dot(&manifold.normal);
            assert_relative_eq!(pt.depth, depth, epsilon = 1.0e-6);
            assert!(pt.depth >= -margin - 1.0e-6);
        }
    }
}
