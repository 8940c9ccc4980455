use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector, DIM};
use crate::shape::SupportMap;

/// The AABB of a support-mapped shape positioned at `pos`.
///
/// Its faces are given by the support points along each positive and negative axis.
pub fn support_map_aabb<G>(pos: &Isometry<Real>, shape: &G) -> Aabb
where
    G: SupportMap + ?Sized,
{
    let mut aabb = Aabb::new(Point::origin(), Point::origin());

    for i in 0..DIM {
        aabb.maxs[i] = shape.support_point(pos, &Vector::ith(i, 1.0))[i];
        aabb.mins[i] = shape.support_point(pos, &Vector::ith(i, -1.0))[i];
    }

    aabb
}

/// The AABB of a set of points transformed by `pos`.
///
/// The result is invalid (see [`Aabb::is_valid`]) if `pts` is empty.
pub fn point_cloud_aabb<'a, I>(pos: &Isometry<Real>, pts: I) -> Aabb
where
    I: IntoIterator<Item = &'a Point<Real>>,
{
    pts.into_iter()
        .fold(Aabb::new_invalid(), |aabb, pt| grow(aabb, &(pos * pt)))
}

/// The AABB of a set of points.
///
/// The result is invalid (see [`Aabb::is_valid`]) if `pts` is empty.
pub fn local_point_cloud_aabb<'a, I>(pts: I) -> Aabb
where
    I: IntoIterator<Item = &'a Point<Real>>,
{
    pts.into_iter().fold(Aabb::new_invalid(), |aabb, pt| grow(aabb, pt))
}

#[inline]
fn grow(aabb: Aabb, pt: &Point<Real>) -> Aabb {
    Aabb::new(aabb.mins.inf(pt), aabb.maxs.sup(pt))
}
