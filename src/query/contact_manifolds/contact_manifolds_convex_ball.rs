use crate::math::{Isometry, Point, Real, Vector};
use crate::query::{ContactManifold, PointQuery, TrackedContact};
use crate::shape::{Ball, CollisionShape};
use na::Unit;

/// Computes the contact manifold between a ball and a cuboid, capsule or triangle, given as
/// `CollisionShape`s in any order.
pub fn contact_manifold_convex_ball_shapes(
    pos12: &Isometry<Real>,
    shape1: &CollisionShape,
    shape2: &CollisionShape,
    prediction: Real,
    manifold: &mut ContactManifold,
) {
    fn as_point_query(shape: &CollisionShape) -> Option<&dyn PointQuery> {
        match shape {
            CollisionShape::Cuboid(s) => Some(s as &dyn PointQuery),
            CollisionShape::Capsule(s) => Some(s as &dyn PointQuery),
            CollisionShape::Triangle(s) => Some(s as &dyn PointQuery),
            _ => None,
        }
    }

    if let (Some(convex1), CollisionShape::Ball(ball2)) = (as_point_query(shape1), shape2) {
        contact_manifold_convex_ball(pos12, convex1, ball2, prediction, manifold, false);
    } else if let (CollisionShape::Ball(ball1), Some(convex2)) = (shape1, as_point_query(shape2)) {
        contact_manifold_convex_ball(
            &pos12.inverse(),
            convex2,
            ball1,
            prediction,
            manifold,
            true,
        );
    }
}

/// Computes the contact manifold between a convex shape and a ball.
///
/// If `flipped` is `true`, the ball is the first shape of the pair: `pos12` then gives the
/// position of the ball relative to `shape1`, and the manifold is flipped before returning so
/// that its first side is the ball.
pub fn contact_manifold_convex_ball<S1>(
    pos12: &Isometry<Real>,
    shape1: &S1,
    ball2: &Ball,
    prediction: Real,
    manifold: &mut ContactManifold,
    flipped: bool,
) where
    S1: ?Sized + PointQuery,
{
    manifold.clear();

    let local_p2_1 = Point::from(pos12.translation.vector);
    let proj = shape1.project_local_point(&local_p2_1, false);
    let local_p1 = proj.point;
    let dpos = local_p2_1 - local_p1;

    // local_n1 points from the surface towards the ball center if defined, otherwise from the
    // other shape's origin towards the ball center if defined, otherwise towards +y.
    let (mut local_n1, mut dist) = Unit::try_new_and_get(dpos, 0.0).unwrap_or_else(|| {
        (
            Unit::try_new(pos12.translation.vector, 0.0).unwrap_or_else(Vector::y_axis),
            0.0,
        )
    });

    if proj.is_inside {
        local_n1 = -local_n1;
        dist = -dist;
    }

    if dist <= ball2.radius + prediction {
        manifold.set_normal(pos12, *local_n1);
        let local_p2 = Point::from(manifold.local_n2 * ball2.radius);
        manifold.points.push(TrackedContact::new(
            local_p1,
            local_p2,
            dist - ball2.radius,
        ));

        if flipped {
            manifold.flip();
        }
    }
}
