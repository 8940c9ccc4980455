use crate::math::{Point, Real, Vector};
use crate::shape::cylinder::radial_direction;
use crate::shape::SupportMap;

/// A cone with its axis along the local `y` axis.
///
/// The apex is at `(0, half_height, 0)` and the base disk is centered at
/// `(0, -half_height, 0)`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cone {
    /// Half the distance between the apex and the base.
    pub half_height: Real,
    /// The radius of the base disk.
    pub radius: Real,
}

impl Cone {
    /// A cone spanning `[-half_height, half_height]` along `y`.
    pub fn new(half_height: Real, radius: Real) -> Cone {
        Cone {
            half_height,
            radius,
        }
    }

    /// The tip of this cone.
    pub fn apex(&self) -> Point<Real> {
        Point::new(0.0, self.half_height, 0.0)
    }
}

impl SupportMap for Cone {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let apex = self.apex();

        match radial_direction(dir) {
            Some(radial) => {
                let rim = Point::new(
                    radial.x * self.radius,
                    -self.half_height,
                    radial.z * self.radius,
                );

                if rim.coords.dot(dir) > apex.coords.dot(dir) {
                    rim
                } else {
                    apex
                }
            }
            None if dir.y < 0.0 => Point::new(0.0, -self.half_height, 0.0),
            None => apex,
        }
    }

    /// The centroid, at a quarter of the height above the base.
    fn local_center(&self) -> Point<Real> {
        Point::new(0.0, -self.half_height * 0.5, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Cone;
    use crate::math::{Point, Vector};
    use crate::shape::SupportMap;

    #[test]
    fn cone_support_points() {
        let cone = Cone::new(1.0, 1.0);
        assert_eq!(cone.local_support_point(&Vector::y()), cone.apex());
        assert_eq!(
            cone.local_support_point(&Vector::new(1.0, -0.1, 0.0)),
            Point::new(1.0, -1.0, 0.0)
        );
        assert_eq!(
            cone.local_support_point(&-Vector::y()),
            Point::new(0.0, -1.0, 0.0)
        );
        assert_eq!(cone.local_center(), Point::new(0.0, -0.5, 0.0));
    }
}
