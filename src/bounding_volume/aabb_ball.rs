use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::Ball;

/// The cube of half-side `radius` centered at `center`.
pub fn ball_aabb(center: &Point<Real>, radius: Real) -> Aabb {
    Aabb::from_half_extents(*center, Vector::repeat(radius))
}

impl Ball {
    /// The AABB of this ball centered at `pos.translation`. Rotations do not matter.
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        ball_aabb(&pos.translation.vector.into(), self.radius)
    }
}
