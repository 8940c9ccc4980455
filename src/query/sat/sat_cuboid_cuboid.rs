use crate::math::{Isometry, Real, Vector, DIM};
use crate::shape::{Cuboid, SupportMap};

// Edge pairs closer to parallel than this do not define a usable axis.
const EDGE_AXIS_EPSILON: Real = 1.0e-6;

/// The signed gap between both cuboids along the unit `axis1`, given in the frame of `cuboid1`.
///
/// `axis1` is first oriented from `cuboid1` toward `cuboid2`. The oriented axis is returned
/// with the gap, which is negative when the projections overlap.
pub fn cuboid_separation_along(
    cuboid1: &Cuboid,
    cuboid2: &Cuboid,
    pos12: &Isometry<Real>,
    axis1: &Vector<Real>,
) -> (Real, Vector<Real>) {
    let axis1 = if pos12.translation.vector.dot(axis1) < 0.0 {
        -axis1
    } else {
        *axis1
    };
    let deepest1 = cuboid1.local_support_point(&axis1);
    let deepest2 = cuboid2.support_point(pos12, &-axis1);
    ((deepest2 - deepest1).dot(&axis1), axis1)
}

/// The largest gap along the face normals of `cuboid1`.
///
/// Only the normal facing `cuboid2` is tried on each axis.
pub fn cuboid_face_separation(
    cuboid1: &Cuboid,
    cuboid2: &Cuboid,
    pos12: &Isometry<Real>,
) -> (Real, Vector<Real>) {
    (0..DIM)
        .map(|i| {
            let axis1 = Vector::ith(i, Real::copysign(1.0, pos12.translation.vector[i]));
            let deepest2 = cuboid2.support_point(pos12, &-axis1);
            (deepest2.coords.dot(&axis1) - cuboid1.half_extents[i], axis1)
        })
        .fold((-Real::MAX, Vector::zeros()), |best, candidate| {
            if candidate.0 > best.0 {
                candidate
            } else {
                best
            }
        })
}

/// The largest gap along the cross products of one edge direction of each cuboid.
///
/// Also returns the local axis index `[i, j]` of the edge of `cuboid1` and of `cuboid2` the
/// best axis comes from.
pub fn cuboid_edge_separation(
    cuboid1: &Cuboid,
    cuboid2: &Cuboid,
    pos12: &Isometry<Real>,
) -> (Real, Vector<Real>, [usize; 2]) {
    let mut best = (-Real::MAX, Vector::zeros(), [0, 0]);

    for j in 0..DIM {
        let edge2 = pos12.rotation * Vector::ith(j, 1.0);

        for i in 0..DIM {
            let Some(axis1) = Vector::ith(i, 1.0).cross(&edge2).try_normalize(EDGE_AXIS_EPSILON)
            else {
                continue;
            };

            let (separation, axis1) = cuboid_separation_along(cuboid1, cuboid2, pos12, &axis1);
            if separation > best.0 {
                best = (separation, axis1, [i, j]);
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Isometry, Vector};
    use crate::shape::Cuboid;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn face_separation_of_stacked_cuboids() {
        let cuboid = Cuboid::new(Vector::repeat(1.0));
        let pos12 = Isometry::translation(0.0, 1.5, 0.0);
        let (sep, axis) = cuboid_face_separation(&cuboid, &cuboid, &pos12);
        assert_relative_eq!(sep, -0.5);
        assert_eq!(axis, Vector::y());
    }

    #[test]
    fn edge_separation_of_crossed_cuboids() {
        let cuboid = Cuboid::new(Vector::repeat(1.0));
        let pos12 = Isometry::new(Vector::new(0.0, 0.0, 3.0), Vector::new(FRAC_PI_4, 0.0, 0.0))
            * Isometry::rotation(Vector::new(0.0, FRAC_PI_4, 0.0));
        let (sep, axis, _) = cuboid_edge_separation(&cuboid, &cuboid, &pos12);
        assert!(sep.is_finite());
        assert_relative_eq!(axis.norm(), 1.0, epsilon = 1.0e-9);
        assert!(axis.z >= 0.0);
    }
}
