use na::Unit;

use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;

/// A sphere of radius `radius` centered at its local origin.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Ball {
    /// Sphere radius.
    pub radius: Real,
}

impl Ball {
    /// A ball of radius `radius`.
    pub fn new(radius: Real) -> Ball {
        Ball { radius }
    }
}

impl SupportMap for Ball {
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        // Any point of the sphere supports the null direction.
        let dir = Unit::try_new(*dir, 0.0).unwrap_or_else(Vector::y_axis);
        self.local_support_point_toward(&dir)
    }

    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        Point::from(dir.as_ref() * self.radius)
    }
}
