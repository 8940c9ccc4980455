//! Line segments.

use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::SupportMap;

use na::Unit;

/// The segment joining `a` to `b`.
///
/// Not a collision shape on its own: it is the core of a capsule and the edge type of the
/// polyhedral contact routines.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// Start point.
    pub a: Point<Real>,
    /// End point.
    pub b: Point<Real>,
}

impl Segment {
    /// The segment from `a` to `b`.
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }

    /// `b - a`.
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// The distance between both endpoints.
    pub fn length(&self) -> Real {
        na::distance(&self.a, &self.b)
    }

    /// The unit vector from `a` toward `b`, or `None` for a degenerate segment.
    pub fn direction(&self) -> Option<Unit<Vector<Real>>> {
        Unit::try_new(self.scaled_direction(), DEFAULT_EPSILON)
    }

    /// This segment with both endpoints moved by `pos`.
    pub fn transformed(&self, pos: &Isometry<Real>) -> Self {
        Segment::new(pos * self.a, pos * self.b)
    }

    /// The point `a + t (b - a)`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.a + self.scaled_direction() * t
    }
}

impl SupportMap for Segment {
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        if self.b.coords.dot(dir) >= self.a.coords.dot(dir) {
            self.b
        } else {
            self.a
        }
    }

    fn local_center(&self) -> Point<Real> {
        na::center(&self.a, &self.b)
    }
}
