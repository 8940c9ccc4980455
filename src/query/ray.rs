//! Rays, for the ray-cast entry points of the collision system.

use crate::math::{Point, Real, Vector};

/// The half-line `origin + t * dir` for `t >= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Ray {
    /// Where the ray starts.
    pub origin: Point<Real>,
    /// Where the ray goes. Not necessarily normalized.
    pub dir: Vector<Real>,
}

impl Ray {
    /// The ray from `origin` along `dir`.
    pub fn new(origin: Point<Real>, dir: Vector<Real>) -> Ray {
        Ray { origin, dir }
    }

    /// `origin + t * dir`.
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.dir * t
    }
}

/// Where a ray hits a collision model.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct RayIntersection {
    /// The ray parameter of the hit, see [`Ray::point_at`].
    pub time_of_impact: Real,
    /// The surface normal at the hit point.
    pub normal: Vector<Real>,
}
