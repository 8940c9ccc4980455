use crate::math::{Point, Real, Vector};
use crate::shape::{Segment, SupportMap};
use na::Unit;

/// A segment inflated by a radius.
///
/// Capsules built by [`CollisionShape::capsule`](crate::shape::CollisionShape::capsule) are
/// centered at the origin, with their segment along the local `y` axis.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Capsule {
    /// The inner segment of the capsule.
    pub segment: Segment,
    /// The distance between the inner segment and the surface.
    pub radius: Real,
}

impl Capsule {
    /// A capsule centered at the origin whose segment spans `[-half_height, half_height]`
    /// along `y`.
    pub fn new_y(half_height: Real, radius: Real) -> Self {
        let top = Point::new(0.0, half_height, 0.0);
        Self::new(Point::new(0.0, -half_height, 0.0), top, radius)
    }

    /// A capsule around the segment `[a, b]`.
    pub fn new(a: Point<Real>, b: Point<Real>, radius: Real) -> Self {
        Self {
            segment: Segment::new(a, b),
            radius,
        }
    }

    /// The length of the inner segment, excluding the spherical caps.
    pub fn height(&self) -> Real {
        self.segment.length()
    }

    /// The midpoint of the inner segment.
    pub fn center(&self) -> Point<Real> {
        na::center(&self.segment.a, &self.segment.b)
    }
}

impl SupportMap for Capsule {
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        match Unit::try_new(*dir, 0.0) {
            Some(dir) => self.local_support_point_toward(&dir),
            // Any point of the surface is a valid support point for a null direction.
            None => self.segment.b + Vector::y() * self.radius,
        }
    }

    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        self.segment.local_support_point(dir) + dir.into_inner() * self.radius
    }

    fn local_center(&self) -> Point<Real> {
        self.center()
    }
}
