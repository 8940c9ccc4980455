//! Shapes described by their support function.

use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON};
use na::Unit;

/// A convex shape described by its support function.
///
/// The support point in a direction `d` is the point of the shape maximizing its dot product
/// with `d`. It is all the general contact algorithm needs to know about a convex shape.
pub trait SupportMap {
    /// The support point in the direction `dir`, in the shape's own frame.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// Like [`SupportMap::local_support_point`] with an already normalized direction.
    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        self.local_support_point(dir)
    }

    /// A point inside of the shape, in its own frame.
    ///
    /// Flat shapes may return a point of their boundary. The general contact algorithm starts
    /// its search from here.
    fn local_center(&self) -> Point<Real> {
        Point::origin()
    }

    /// The support point in the world-space direction `dir` of this shape placed at `pos`.
    fn support_point(&self, pos: &Isometry<Real>, dir: &Vector<Real>) -> Point<Real> {
        pos * self.local_support_point(&pos.inverse_transform_vector(dir))
    }
}

/// A shape grown by `radius` in every direction.
///
/// Used to give a margin to shapes passed to the general contact algorithm.
pub struct DilatedShape<'a, S: ?Sized + SupportMap> {
    /// The original shape.
    pub shape: &'a S,
    /// How much the shape is grown.
    pub radius: Real,
}

impl<S: ?Sized + SupportMap> SupportMap for DilatedShape<'_, S> {
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        Unit::try_new(*dir, DEFAULT_EPSILON).map_or_else(
            || self.shape.local_support_point(dir),
            |dir| self.local_support_point_toward(&dir),
        )
    }

    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        self.shape.local_support_point_toward(dir) + dir.into_inner() * self.radius
    }

    fn local_center(&self) -> Point<Real> {
        self.shape.local_center()
    }
}

#[cfg(test)]
mod tests {
    use super::{DilatedShape, SupportMap};
    use crate::math::{Isometry, Point, Vector};
    use crate::shape::Cuboid;

    #[test]
    fn dilated_cuboid_support() {
        let cuboid = Cuboid::new(Vector::new(1.0, 1.0, 1.0));
        let dilated = DilatedShape {
            shape: &cuboid,
            radius: 0.5,
        };
        let pt = dilated.local_support_point(&Vector::x());
        assert_relative_eq!(pt, Point::new(1.5, 1.0, 1.0));

        let pos = Isometry::translation(2.0, 0.0, 0.0);
        let pt = dilated.support_point(&pos, &-Vector::x());
        assert_relative_eq!(pt.x, 0.5);
    }
}
