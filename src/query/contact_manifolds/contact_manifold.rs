use crate::math::{Isometry, Point, Real, Vector};
use arrayvec::ArrayVec;

/// A manifold never holds more points than this. Polygon clipping results are reduced to it.
pub const MAX_MANIFOLD_POINTS: usize = 4;

/// One contact point, as a pair of witness points on both shapes.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TrackedContact {
    /// Witness point on the first shape, in its frame.
    pub local_p1: Point<Real>,
    /// Witness point on the second shape, in its frame.
    pub local_p2: Point<Real>,
    /// `(p2 - p1) . n1`, negative when the shapes overlap.
    pub dist: Real,
}

impl TrackedContact {
    /// A contact from its witness points and signed distance.
    pub fn new(local_p1: Point<Real>, local_p2: Point<Real>, dist: Real) -> Self {
        TrackedContact { local_p1, local_p2, dist }
    }
}

/// Up to [`MAX_MANIFOLD_POINTS`] contacts sharing one normal.
///
/// Everything is expressed in the frames of the two shapes, the first shape being the one
/// `pos12` is relative to.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ContactManifold {
    /// The contacts.
    pub points: ArrayVec<TrackedContact, MAX_MANIFOLD_POINTS>,
    /// Unit normal in the first shape's frame, pointing toward the second shape.
    pub local_n1: Vector<Real>,
    /// The opposite of `local_n1`, in the second shape's frame.
    pub local_n2: Vector<Real>,
    /// Triangle index when the first shape is a mesh.
    pub subshape1: Option<u32>,
    /// Triangle index when the second shape is a mesh.
    pub subshape2: Option<u32>,
}

impl ContactManifold {
    /// An empty manifold.
    pub fn new() -> Self {
        Self::default()
    }

    /// `self.points.len()`.
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Drops the points and the subshape indices. The normal is left as is.
    pub fn clear(&mut self) {
        self.points.clear();
        self.subshape1 = None;
        self.subshape2 = None;
    }

    /// Exchanges the first and second shape.
    pub fn flip(&mut self) {
        for pt in &mut self.points {
            std::mem::swap(&mut pt.local_p1, &mut pt.local_p2);
        }
        std::mem::swap(&mut self.local_n1, &mut self.local_n2);
        std::mem::swap(&mut self.subshape1, &mut self.subshape2);
    }

    /// The contact with the smallest `dist`, the first one on ties.
    pub fn find_deepest_contact(&self) -> Option<&TrackedContact> {
        self.points
            .iter()
            .reduce(|deepest, pt| if pt.dist < deepest.dist { pt } else { deepest })
    }

    /// Sets `local_n1` and derives `local_n2` from it.
    pub fn set_normal(&mut self, pos12: &Isometry<Real>, local_n1: Vector<Real>) {
        self.local_n1 = local_n1;
        self.local_n2 = pos12.inverse_transform_vector(&-local_n1);
    }
}
