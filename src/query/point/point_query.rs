use crate::math::{Point, Real};

/// The closest point of a shape to a query point.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PointProjection {
    /// `true` if the query point was inside of the shape.
    pub is_inside: bool,
    /// The projected point.
    pub point: Point<Real>,
}

impl PointProjection {
    /// A projection result.
    pub fn new(is_inside: bool, point: Point<Real>) -> Self {
        PointProjection { is_inside, point }
    }
}

/// Shapes a point can be projected on.
///
/// This is how the convex-vs-ball contact routine finds the closest feature of the convex shape
/// to the ball center.
pub trait PointQuery {
    /// Projects `pt`, given in the shape's own frame, on the shape.
    ///
    /// With `solid` set, an inner point is its own projection. Otherwise inner points are
    /// pushed to the boundary, which is what penetration computations need.
    fn project_local_point(&self, pt: &Point<Real>, solid: bool) -> PointProjection;
}
