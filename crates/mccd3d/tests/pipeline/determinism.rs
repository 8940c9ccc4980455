use super::soundness::random_world;
use mccd3d::pipeline::{CollisionSettings, ContactManifold, NarrowPhaseAlgorithm};

fn contacts(seed: u64, settings: CollisionSettings) -> Vec<ContactManifold> {
    let mut world = random_world(seed, 250, settings);
    world.run();
    world.system.contacts().to_vec()
}

#[test]
fn repeated_runs_produce_identical_contacts() {
    let settings = CollisionSettings {
        num_threads: 4,
        envelope: 0.01,
        ..CollisionSettings::default()
    };
    let mut world = random_world(3, 250, settings);
    world.run();
    let first = world.system.contacts().to_vec();
    assert!(!first.is_empty());

    for _ in 0..3 {
        world.run();
        assert_eq!(world.system.contacts(), &first[..]);
    }
}

#[test]
fn thread_count_does_not_change_the_contacts() {
    for algorithm in [NarrowPhaseAlgorithm::Hybrid, NarrowPhaseAlgorithm::AlwaysGeneral] {
        let single = CollisionSettings {
            num_threads: 1,
            narrowphase_algorithm: algorithm,
            ..CollisionSettings::default()
        };
        let multi = CollisionSettings {
            num_threads: 4,
            ..single
        };
        assert_eq!(contacts(4, single), contacts(4, multi));
    }
}
