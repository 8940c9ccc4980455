//! Support mapping based Cuboid shape.

use crate::math::{Point, Real, Vector, DIM};
use crate::shape::{Segment, SupportMap};
use crate::utils::WSign;

/// Shape of a box.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Cuboid {
    /// The half-extents of the cuboid.
    pub half_extents: Vector<Real>,
}

impl Cuboid {
    /// Creates a new box from its half-extents. Half-extents are the box half-width along each
    /// axis. Each half-extent must be positive.
    #[inline]
    pub fn new(half_extents: Vector<Real>) -> Cuboid {
        Cuboid { half_extents }
    }

    /// The face of this cuboid with the normal closest to `local_dir`.
    ///
    /// Returns the index of the face axis, the sign of its normal along that axis, and its
    /// four vertices in counter-clockwise order when seen from outside of the cuboid.
    pub fn local_support_face(&self, local_dir: &Vector<Real>) -> (usize, Real, [Point<Real>; 4]) {
        let iamax = local_dir.iamax();
        let sign = Real::copysign(1.0, local_dir[iamax]);
        let i2 = (iamax + 1) % DIM;
        let i3 = (iamax + 2) % DIM;

        let mut vertex = self.half_extents;
        vertex[iamax] *= sign;

        // Corners (+,+), (-,+), (-,-), (+,-) on the (i2, i3) plane are counter-clockwise
        // around `+axis`, and clockwise around `-axis`.
        let signs: [(Real, Real); 4] = if sign > 0.0 {
            [(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)]
        } else {
            [(1.0, 1.0), (1.0, -1.0), (-1.0, -1.0), (-1.0, 1.0)]
        };

        let vertices = signs.map(|(s2, s3)| {
            let mut v = vertex;
            v[i2] = s2 * self.half_extents[i2];
            v[i3] = s3 * self.half_extents[i3];
            Point::from(v)
        });

        (iamax, sign, vertices)
    }

    /// The edge of this cuboid parallel to the `axis`-th coordinate axis with the largest dot
    /// product with `local_dir`.
    pub fn local_support_edge_segment(&self, axis: usize, local_dir: &Vector<Real>) -> Segment {
        let mut a = Point::from(local_dir.copy_sign_to(self.half_extents));
        a[axis] = self.half_extents[axis];

        let mut b = a;
        b[axis] = -self.half_extents[axis];

        Segment::new(a, b)
    }
}

impl SupportMap for Cuboid {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        dir.copy_sign_to(self.half_extents).into()
    }
}
