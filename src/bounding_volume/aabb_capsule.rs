use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Real, Vector};
use crate::shape::Capsule;

impl Capsule {
    /// The world-space AABB of this capsule positioned at `pos`.
    ///
    /// This is the AABB of the transformed segment, grown by the radius.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        let segment = self.segment.transformed(pos);
        segment_aabb(&segment.a.coords, &segment.b.coords, self.radius)
    }
}

fn segment_aabb(a: &Vector<Real>, b: &Vector<Real>, radius: Real) -> Aabb {
    let radius = Vector::repeat(radius);
    Aabb::new((a.inf(b) - radius).into(), (a.sup(b) + radius).into())
}
