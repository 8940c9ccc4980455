use crate::math::{Isometry, Point, Real, Vector};
use crate::pipeline::{BodyHandle, ShapeId};
use crate::query::{self, MAX_MANIFOLD_POINTS};
use arrayvec::ArrayVec;

/// A contact point between two shapes, in world-space.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContactPoint {
    /// The contact point on the first shape.
    pub point1: Point<Real>,
    /// The contact point on the second shape.
    pub point2: Point<Real>,
    /// The penetration depth: `-(point2 - point1).dot(normal)`.
    ///
    /// It is positive if the shapes overlap and negative if they are separated but closer
    /// than their combined margin.
    pub depth: Real,
}

/// All the contact points between two shapes, sharing the same normal.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ContactManifold {
    /// The first shape, with the smallest identifier of the pair.
    pub shape1: ShapeId,
    /// The second shape.
    pub shape2: ShapeId,
    /// The body of the first shape.
    pub body1: BodyHandle,
    /// The body of the second shape.
    pub body2: BodyHandle,
    /// The triangle of the first shape in contact, if it is a triangle mesh.
    pub subshape1: Option<u32>,
    /// The triangle of the second shape in contact, if it is a triangle mesh.
    pub subshape2: Option<u32>,
    /// The world-space unit contact normal, pointing from the first shape toward the second.
    pub normal: Vector<Real>,
    /// The contact points.
    pub points: ArrayVec<ContactPoint, MAX_MANIFOLD_POINTS>,
}

impl ContactManifold {
    /// Converts a manifold expressed in the local frames of its shapes to world-space.
    pub(crate) fn from_local(
        shapes: [ShapeId; 2],
        bodies: [BodyHandle; 2],
        pos1: &Isometry<Real>,
        pos2: &Isometry<Real>,
        local: &query::ContactManifold,
    ) -> Self {
        let points = local
            .points
            .iter()
            .map(|pt| ContactPoint {
                point1: pos1 * pt.local_p1,
                point2: pos2 * pt.local_p2,
                depth: -pt.dist,
            })
            .collect();

        Self {
            shape1: shapes[0],
            shape2: shapes[1],
            body1: bodies[0],
            body2: bodies[1],
            subshape1: local.subshape1,
            subshape2: local.subshape2,
            normal: pos1 * local.local_n1,
            points,
        }
    }

    /// The contact point with the largest penetration depth.
    pub fn deepest_point(&self) -> Option<&ContactPoint> {
        self.points
            .iter()
            .max_by(|a, b| a.depth.total_cmp(&b.depth))
    }
}
