use na::Unit;

use crate::math::{Point, Real, Vector};
use crate::query::{PointProjection, PointQuery};
use crate::shape::Capsule;

impl PointQuery for Capsule {
    #[inline]
    fn project_local_point(&self, pt: &Point<Real>, solid: bool) -> PointProjection {
        let proj = self.segment.project_local_point(pt, solid);
        let dproj = *pt - proj.point;

        if let Some((dir, dist)) = Unit::try_new_and_get(dproj, crate::math::DEFAULT_EPSILON) {
            let inside = dist <= self.radius;
            if solid && inside {
                PointProjection::new(true, *pt)
            } else {
                PointProjection::new(inside, proj.point + dir.into_inner() * self.radius)
            }
        } else if solid {
            PointProjection::new(true, *pt)
        } else {
            // The point lies on the capsule axis: push it along any direction orthogonal to it.
            let axis = self.segment.direction().unwrap_or_else(Vector::y_axis);
            let ortho = if axis.x.abs() < 0.9 {
                axis.cross(&Vector::x())
            } else {
                axis.cross(&Vector::z())
            };
            let dir = Unit::try_new(ortho, 0.0).unwrap_or_else(Vector::x_axis);
            PointProjection::new(true, proj.point + *dir * self.radius)
        }
    }
}
