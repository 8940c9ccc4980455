use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;

/// A cylinder centered at the origin, with its axis along the local `y` axis.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cylinder {
    /// Half the distance between the two caps.
    pub half_height: Real,
    /// The radius of the caps.
    pub radius: Real,
}

impl Cylinder {
    /// A cylinder spanning `[-half_height, half_height]` along `y`.
    pub fn new(half_height: Real, radius: Real) -> Cylinder {
        Cylinder {
            half_height,
            radius,
        }
    }
}

/// The unit projection of `dir` on the `xz` plane, or `None` if `dir` is parallel to `y`.
pub(crate) fn radial_direction(dir: &Vector<Real>) -> Option<Vector<Real>> {
    let radial = Vector::new(dir.x, 0.0, dir.z);
    let norm = radial.norm();

    if norm > 0.0 {
        Some(radial / norm)
    } else {
        None
    }
}

impl SupportMap for Cylinder {
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        // A point on the rim of the cap facing `dir`.
        let rim = radial_direction(dir).map_or_else(Vector::zeros, |r| r * self.radius);
        Point::new(rim.x, self.half_height.copysign(dir.y), rim.z)
    }
}

#[cfg(test)]
mod tests {
    use super::Cylinder;
    use crate::math::{Point, Vector};
    use crate::shape::SupportMap;

    #[test]
    fn cylinder_support_points() {
        let cylinder = Cylinder::new(1.0, 2.0);
        assert_eq!(
            cylinder.local_support_point(&Vector::new(1.0, 1.0, 0.0)),
            Point::new(2.0, 1.0, 0.0)
        );
        assert_eq!(
            cylinder.local_support_point(&Vector::new(0.0, -1.0, 0.0)),
            Point::new(0.0, -1.0, 0.0)
        );
    }
}
