use crate::math::{Isometry, Real, Vector, DEFAULT_EPSILON};
use crate::query::closest_points::closest_points_segment_segment_params;
use crate::query::{ContactManifold, TrackedContact};
use crate::shape::{Capsule, CollisionShape};
use na::Unit;

/// Computes the contact manifold between two capsules given as `CollisionShape`s.
pub fn contact_manifold_capsule_capsule_shapes(
    pos12: &Isometry<Real>,
    shape1: &CollisionShape,
    shape2: &CollisionShape,
    prediction: Real,
    manifold: &mut ContactManifold,
) {
    if let (CollisionShape::Capsule(capsule1), CollisionShape::Capsule(capsule2)) =
        (shape1, shape2)
    {
        contact_manifold_capsule_capsule(pos12, capsule1, capsule2, prediction, manifold);
    }
}

/// Computes the contact manifold between two capsules.
pub fn contact_manifold_capsule_capsule(
    pos12: &Isometry<Real>,
    capsule1: &Capsule,
    capsule2: &Capsule,
    prediction: Real,
    manifold: &mut ContactManifold,
) {
    manifold.clear();

    let seg1 = capsule1.segment;
    let seg2_1 = capsule2.segment.transformed(pos12);
    let (s, t) = closest_points_segment_segment_params(&seg1, &seg2_1);
    let local_p1 = seg1.point_at(s);
    let local_p2_1 = seg2_1.point_at(t);

    // Intersecting axes: fall back to the direction between the capsule centers.
    let local_n1 = Unit::try_new(local_p2_1 - local_p1, DEFAULT_EPSILON)
        .or_else(|| {
            Unit::try_new(
                pos12 * capsule2.center() - capsule1.center(),
                DEFAULT_EPSILON,
            )
        })
        .unwrap_or_else(Vector::y_axis);
    let dist = (local_p2_1 - local_p1).dot(&local_n1) - capsule1.radius - capsule2.radius;

    if dist <= prediction {
        manifold.set_normal(pos12, *local_n1);
        let contact = TrackedContact::new(
            local_p1 + *local_n1 * capsule1.radius,
            pos12.inverse_transform_point(&local_p2_1) + manifold.local_n2 * capsule2.radius,
            dist,
        );
        manifold.points.push(contact);
    }
}

#[cfg(test)]
mod tests {
    use super::contact_manifold_capsule_capsule;
    use crate::math::{Isometry, Vector};
    use crate::query::ContactManifold;
    use crate::shape::Capsule;

    #[test]
    fn crossed_capsules() {
        let capsule = Capsule::new_y(1.0, 0.25);
        // Second capsule lying along x, slightly above the first one's top.
        let pos12 = Isometry::new(
            Vector::new(0.0, 1.4, 0.0),
            Vector::z() * std::f64::consts::FRAC_PI_2,
        );
        let mut manifold = ContactManifold::new();
        contact_manifold_capsule_capsule(&pos12, &capsule, &capsule, 0.0, &mut manifold);

        assert_eq!(manifold.points.len(), 1);
        assert_relative_eq!(manifold.local_n1, Vector::y(), epsilon = 1.0e-9);
        assert_relative_eq!(manifold.points[0].dist, -0.1, epsilon = 1.0e-9);
    }
}
