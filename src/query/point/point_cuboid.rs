use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::query::{PointProjection, PointQuery};
use crate::shape::Cuboid;

// A cuboid is its own local AABB.
impl PointQuery for Cuboid {
    fn project_local_point(&self, pt: &Point<Real>, solid: bool) -> PointProjection {
        let he = self.half_extents;
        Aabb::new(Point::from(-he), Point::from(he)).project_local_point(pt, solid)
    }
}
