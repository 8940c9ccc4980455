use crate::math::{Isometry, Real};
use crate::query::mpr::mpr_penetration;
use crate::query::{ContactManifold, TrackedContact};
use crate::shape::{CollisionShape, DilatedShape, SupportMap};

/// Computes the contact manifold between two convex shapes given as `CollisionShape`s.
///
/// Nothing is computed if one of the shapes has no support map.
pub fn contact_manifold_support_map_support_map_shapes(
    pos12: &Isometry<Real>,
    shape1: &CollisionShape,
    shape2: &CollisionShape,
    prediction: Real,
    manifold: &mut ContactManifold,
) {
    if let (Some(sm1), Some(sm2)) = (shape1.as_support_map(), shape2.as_support_map()) {
        contact_manifold_support_map_support_map(pos12, sm1, sm2, prediction, manifold);
    }
}

/// Computes the contact manifold between two convex shapes with the general MPR algorithm.
///
/// Contacts within `prediction` are found by running MPR on the first shape dilated by
/// `prediction`, then removing the dilation from the result. A single contact point is
/// generated.
pub fn contact_manifold_support_map_support_map<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    prediction: Real,
    manifold: &mut ContactManifold,
) where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    manifold.clear();

    let penetration = if prediction > 0.0 {
        let dilated1 = DilatedShape {
            shape: g1,
            radius: prediction,
        };
        mpr_penetration(pos12, &dilated1, g2)
    } else {
        mpr_penetration(pos12, g1, g2)
    };

    if let Some(pen) = penetration {
        let local_n1 = pen.normal.into_inner();
        let local_p1 = pen.point1 - local_n1 * prediction.max(0.0);
        let dist = (pen.point2 - local_p1).dot(&local_n1);

        if dist <= prediction {
            manifold.set_normal(pos12, local_n1);
            let local_p2 = pos12.inverse_transform_point(&pen.point2);
            manifold
                .points
                .push(TrackedContact::new(local_p1, local_p2, dist));
        }
    }
}
