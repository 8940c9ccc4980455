use mccd3d::math::{Isometry, Real, Vector};
use mccd3d::query::{ContactDispatcher, ContactManifold, NarrowPhaseAlgorithm};
use mccd3d::shape::CollisionShape;

fn deepest(
    algorithm: NarrowPhaseAlgorithm,
    pos12: &Isometry<Real>,
    s1: &CollisionShape,
    s2: &CollisionShape,
) -> Option<(Real, Vector<Real>)> {
    let dispatcher = ContactDispatcher::new(algorithm);
    let mut manifolds: Vec<ContactManifold> = Vec::new();
    dispatcher
        .contact_manifolds(pos12, s1, s2, 0.0, &mut manifolds)
        .unwrap();
    let manifold = manifolds.first()?;
    let deepest = manifold.find_deepest_contact()?;
    Some((-deepest.dist, manifold.local_n1))
}

fn assert_agreement(pos12: Isometry<Real>, s1: &CollisionShape, s2: &CollisionShape) {
    let hybrid = deepest(NarrowPhaseAlgorithm::Hybrid, &pos12, s1, s2);
    let general = deepest(NarrowPhaseAlgorithm::AlwaysGeneral, &pos12, s1, s2);

    match (hybrid, general) {
        (Some((depth1, n1)), Some((depth2, n2))) => {
            assert_relative_eq!(depth1, depth2, epsilon = 1.0e-4);
            assert_relative_eq!(n1, n2, epsilon = 1.0e-3);
        }
        (None, None) => {}
        _ => panic!(
            "The algorithms disagree on the existence of a contact: {:?} vs. {:?}",
            hybrid, general
        ),
    }
}

#[test]
fn ball_ball() {
    let ball = CollisionShape::ball(1.0).unwrap();
    assert_agreement(Isometry::translation(0.0, 0.0, 1.5), &ball, &ball);
    assert_agreement(Isometry::translation(0.3, -1.2, 0.4), &ball, &ball);
    assert_agreement(Isometry::translation(0.0, 2.5, 0.0), &ball, &ball);
}

#[test]
fn ball_cuboid_face() {
    let ball = CollisionShape::ball(0.5).unwrap();
    let cube = CollisionShape::cuboid(Vector::repeat(0.5)).unwrap();
    assert_agreement(Isometry::translation(0.0, 0.9, 0.0), &cube, &ball);
    assert_agreement(Isometry::translation(0.0, -0.9, 0.0), &ball, &cube);
    assert_agreement(Isometry::translation(1.2, 0.0, 0.0), &cube, &ball);
}

#[test]
fn capsule_capsule_parallel() {
    let capsule = CollisionShape::capsule(1.0, 0.5).unwrap();
    assert_agreement(Isometry::translation(0.8, 0.0, 0.0), &capsule, &capsule);
    assert_agreement(Isometry::translation(1.1, 0.0, 0.0), &capsule, &capsule);
}

#[test]
fn cuboid_cuboid_face() {
    let cube = CollisionShape::cuboid(Vector::repeat(0.5)).unwrap();
    assert_agreement(Isometry::translation(0.0, 0.0, 0.95), &cube, &cube);
    assert_agreement(Isometry::translation(0.0, 0.0, 1.05), &cube, &cube);
}
