//! Axis-aligned bounding boxes.

use crate::bounding_volume::BoundingVolume;
use crate::math::{Isometry, Point, Real, Vector, DIM};
use crate::utils::IsometryOps;

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is defined by its minimum and maximum corners and its edges are always parallel
/// to the coordinate axes. All the overlap tests of this type use closed intervals: two boxes
/// that are merely touching, or a degenerate (zero-volume) box lying on the boundary of
/// another box, are considered intersecting.
///
/// # Invariant
///
/// `mins.x ≤ maxs.x`, `mins.y ≤ maxs.y` and `mins.z ≤ maxs.z`, except for the result of
/// [`Aabb::new_invalid`] which is only meant as an initial value for merges.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// The AABB with corners `mins` and `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// An empty box, neutral for [`BoundingVolume::merge`].
    ///
    /// Its `mins` are `+Real::MAX` and its `maxs` are `-Real::MAX`.
    pub fn new_invalid() -> Self {
        Self::new(Point::from([Real::MAX; DIM]), Point::from([-Real::MAX; DIM]))
    }

    /// The AABB centered at `center`, extending by `half_extents` on each side.
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// The smallest AABB containing all the points of `pts`.
    ///
    /// Invalid if `pts` is empty.
    pub fn from_points<'a, I>(pts: I) -> Self
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        super::aabb_utils::local_point_cloud_aabb(pts)
    }

    /// Whether `mins <= maxs` componentwise.
    pub fn is_valid(&self) -> bool {
        (0..DIM).all(|i| self.mins[i] <= self.maxs[i])
    }

    /// The middle point between both corners.
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// Half of [`Aabb::extents`].
    pub fn half_extents(&self) -> Vector<Real> {
        self.extents() / 2.0
    }

    /// The product of the extents.
    pub fn volume(&self) -> Real {
        self.extents().product()
    }

    /// The size of the box along each axis.
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// Whether `point` lies inside of this box or on its boundary.
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        (0..DIM).all(|i| point[i] >= self.mins[i] && point[i] <= self.maxs[i])
    }

    /// The world-space box enclosing this local box once moved by `pos`.
    ///
    /// Not tight in general: the rotated box is itself re-bounded.
    pub fn transform_by(&self, pos: &Isometry<Real>) -> Self {
        let center = pos * self.center();
        let half_extents = pos.absolute_transform_vector(&self.half_extents());
        Aabb::from_half_extents(center, half_extents)
    }

    /// The common part of both boxes, if any.
    pub fn intersection(&self, other: &Aabb) -> Option<Aabb> {
        let common = Aabb::new(self.mins.sup(&other.mins), self.maxs.inf(&other.maxs));
        common.is_valid().then_some(common)
    }

    /// The eight corners, indexed so that bit `i` of the index selects `maxs[i]` over `mins[i]`.
    pub fn vertices(&self) -> [Point<Real>; 8] {
        std::array::from_fn(|k| {
            Point::from(std::array::from_fn::<Real, DIM, _>(|i| {
                if k & (1 << i) != 0 {
                    self.maxs[i]
                } else {
                    self.mins[i]
                }
            }))
        })
    }
}

impl BoundingVolume for Aabb {
    #[inline]
    fn intersects(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }

    #[inline]
    fn contains(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.mins) && na::partial_ge(&self.maxs, &other.maxs)
    }

    #[inline]
    fn merge(&mut self, other: &Aabb) {
        self.mins = self.mins.inf(&other.mins);
        self.maxs = self.maxs.sup(&other.maxs);
    }

    #[inline]
    fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }

    #[inline]
    fn loosened(&self, margin: Real) -> Aabb {
        assert!(margin >= 0.0, "an AABB cannot be loosened by a negative margin");
        let margin = Vector::repeat(margin);
        Aabb::new(self.mins - margin, self.maxs + margin)
    }
}
