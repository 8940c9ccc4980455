use crate::math::{Point, Real};
use crate::query::{PointProjection, PointQuery};
use crate::shape::Segment;

impl Segment {
    /// The `t` such that [`Segment::point_at`] gives the point of this segment closest to `pt`.
    ///
    /// Always in `[0, 1]`, and `0` for a degenerate segment.
    pub fn project_local_point_param(&self, pt: &Point<Real>) -> Real {
        let ab = self.scaled_direction();
        match ab.norm_squared() {
            len2 if len2 > 0.0 => (ab.dot(&(pt - self.a)) / len2).clamp(0.0, 1.0),
            _ => 0.0,
        }
    }
}

impl PointQuery for Segment {
    // A segment has no interior: `solid` changes nothing.
    fn project_local_point(&self, pt: &Point<Real>, _solid: bool) -> PointProjection {
        let proj = self.point_at(self.project_local_point_param(pt));
        PointProjection::new(relative_eq!(proj, *pt), proj)
    }
}
