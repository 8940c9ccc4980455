use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, DIM};
use crate::query::{PointProjection, PointQuery};

impl PointQuery for Aabb {
    fn project_local_point(&self, pt: &Point<Real>, solid: bool) -> PointProjection {
        let clamped = pt.sup(&self.mins).inf(&self.maxs);

        if clamped != *pt {
            return PointProjection::new(false, clamped);
        }

        if solid {
            return PointProjection::new(true, *pt);
        }

        // Move the point onto the nearest face. On ties the smallest axis wins, and `maxs`
        // wins over `mins` on the same axis.
        let mut best = (Real::MAX, 0, self.maxs[0]);
        for i in 0..DIM {
            for bound in [self.maxs[i], self.mins[i]] {
                let gap = (bound - pt[i]).abs();
                if gap < best.0 {
                    best = (gap, i, bound);
                }
            }
        }

        let (_, axis, bound) = best;
        let mut proj = *pt;
        proj[axis] = bound;
        PointProjection::new(true, proj)
    }
}
