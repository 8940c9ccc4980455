use crate::math::{Isometry, Point, Real, Vector};
use na::Unit;
use crate::query::{ContactManifold, TrackedContact};
use crate::shape::{Ball, CollisionShape};

/// [`contact_manifold_ball_ball`] on two [`CollisionShape::Ball`]s. Other shapes are ignored.
pub fn contact_manifold_ball_ball_shapes(
    pos12: &Isometry<Real>,
    shape1: &CollisionShape,
    shape2: &CollisionShape,
    prediction: Real,
    manifold: &mut ContactManifold,
) {
    if let (CollisionShape::Ball(ball1), CollisionShape::Ball(ball2)) = (shape1, shape2) {
        contact_manifold_ball_ball(pos12, ball1, ball2, prediction, manifold);
    }
}

/// The single contact between two balls, reported if their surfaces are at most `prediction`
/// apart.
///
/// Concentric balls are pushed apart along `+y`.
pub fn contact_manifold_ball_ball(
    pos12: &Isometry<Real>,
    ball1: &Ball,
    ball2: &Ball,
    prediction: Real,
    manifold: &mut ContactManifold,
) {
    manifold.clear();

    let center2 = pos12.translation.vector;
    let (local_n1, center_dist) =
        Unit::try_new_and_get(center2, 0.0).unwrap_or((Vector::y_axis(), 0.0));
    let dist = center_dist - ball1.radius - ball2.radius;

    if dist > prediction {
        return;
    }

    manifold.set_normal(pos12, local_n1.into_inner());
    let local_p1 = Point::from(local_n1.into_inner() * ball1.radius);
    let local_p2 = Point::from(manifold.local_n2 * ball2.radius);
    manifold.points.push(TrackedContact::new(local_p1, local_p2, dist));
}
