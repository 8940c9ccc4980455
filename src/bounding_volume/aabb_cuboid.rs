use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real};
use crate::shape::Cuboid;
use crate::utils::IsometryOps;

impl Cuboid {
    /// The tight AABB of this cuboid placed at `pos`.
    ///
    /// Each world axis sees the sum of the absolute projections of the rotated half-extents.
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        Aabb::from_half_extents(
            Point::from(pos.translation.vector),
            pos.absolute_transform_vector(&self.half_extents),
        )
    }
}
