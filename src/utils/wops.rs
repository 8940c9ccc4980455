use crate::math::{Real, Vector};

/// Componentwise sign transfer.
pub trait WSign<Rhs>: Sized {
    /// `to` with each component given the sign of the matching component of `self`.
    fn copy_sign_to(self, to: Rhs) -> Rhs;
}

impl WSign<Vector<Real>> for Vector<Real> {
    #[inline]
    fn copy_sign_to(self, to: Self) -> Self {
        to.zip_map(&self, Real::copysign)
    }
}

#[cfg(test)]
mod tests {
    use super::WSign;
    use crate::math::Vector;

    #[test]
    fn signs_are_copied_per_component() {
        let signs = Vector::new(-2.0, 0.0, 3.0);
        let v = signs.copy_sign_to(Vector::new(1.0, -1.0, -1.0));
        assert_eq!(v, Vector::new(-1.0, 1.0, 1.0));
    }
}
