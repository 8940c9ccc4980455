use crate::math::Real;

/// A coarse volume enclosing a shape, cheap to test against another volume of the same kind.
///
/// Every test uses closed sets: volumes sharing only a boundary point intersect.
pub trait BoundingVolume: Sized {
    /// Do `self` and `other` share at least one point?
    fn intersects(&self, other: &Self) -> bool;

    /// Is `other` entirely inside of `self`?
    fn contains(&self, other: &Self) -> bool;

    /// Grows `self` so it also encloses `other`.
    fn merge(&mut self, other: &Self);

    /// The smallest volume enclosing both `self` and `other`.
    fn merged(&self, other: &Self) -> Self;

    /// This volume grown by `margin` in every direction.
    ///
    /// # Panics
    /// If `margin` is negative.
    fn loosened(&self, margin: Real) -> Self;
}
