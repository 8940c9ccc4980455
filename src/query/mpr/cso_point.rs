use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::SupportMap;
use std::ops::Sub;

/// A point of the Minkowski difference `shape1 - shape2`, remembering the two shape points
/// it was computed from.
///
/// Everything is expressed in the local-space of the first shape.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CSOPoint {
    /// The point of the Minkowski difference, `orig1 - orig2` unless it was shifted by
    /// [`CSOPoint::translate`].
    pub point: Point<Real>,
    /// The point of the first shape.
    pub orig1: Point<Real>,
    /// The point of the second shape.
    pub orig2: Point<Real>,
}

impl CSOPoint {
    /// The difference point `orig1 - orig2`.
    pub fn new(orig1: Point<Real>, orig2: Point<Real>) -> Self {
        CSOPoint {
            point: Point::from(orig1 - orig2),
            orig1,
            orig2,
        }
    }

    /// The support point of the Minkowski difference in the direction `dir`.
    ///
    /// `pos12` is the position of `g2` relative to `g1`.
    pub fn from_shapes<G1, G2>(pos12: &Isometry<Real>, g1: &G1, g2: &G2, dir: &Vector<Real>) -> Self
    where
        G1: ?Sized + SupportMap,
        G2: ?Sized + SupportMap,
    {
        CSOPoint::new(
            g1.local_support_point(dir),
            g2.support_point(pos12, &-dir),
        )
    }

    /// A point strictly inside of the Minkowski difference, built from the interior points of
    /// both shapes.
    pub fn from_centers<G1, G2>(pos12: &Isometry<Real>, g1: &G1, g2: &G2) -> Self
    where
        G1: ?Sized + SupportMap,
        G2: ?Sized + SupportMap,
    {
        CSOPoint::new(g1.local_center(), pos12 * g2.local_center())
    }

    /// Shifts the difference point by `shift`, keeping the original shape points.
    pub fn translate(&self, shift: &Vector<Real>) -> Self {
        CSOPoint {
            point: self.point + shift,
            ..*self
        }
    }
}

impl Sub<CSOPoint> for CSOPoint {
    type Output = Vector<Real>;

    #[inline]
    fn sub(self, rhs: CSOPoint) -> Vector<Real> {
        self.point - rhs.point
    }
}
