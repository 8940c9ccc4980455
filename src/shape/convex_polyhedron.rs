use crate::math::{Point, Real, Vector};
use crate::shape::{ShapeError, SupportMap};
use crate::utils;

/// A convex polyhedron described by the point cloud its convex hull is built from.
///
/// Only the support mapping of the hull is needed for contact generation, so the hull
/// topology is never computed explicitly.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub struct ConvexPolyhedron {
    points: Vec<Point<Real>>,
    centroid: Point<Real>,
}

impl ConvexPolyhedron {
    /// Creates a convex polyhedron from the given set of points.
    ///
    /// Fails if the point cloud is empty or contains non-finite coordinates.
    pub fn from_points(points: Vec<Point<Real>>) -> Result<Self, ShapeError> {
        if points.is_empty() {
            return Err(ShapeError::EmptyPointCloud);
        }

        if points.iter().any(|pt| !pt.coords.iter().all(|x| x.is_finite())) {
            return Err(ShapeError::NonFiniteCoordinates);
        }

        let sum = points
            .iter()
            .fold(Vector::zeros(), |acc, pt| acc + pt.coords);
        let centroid = Point::from(sum / points.len() as Real);

        Ok(ConvexPolyhedron { points, centroid })
    }

    /// The points this polyhedron is the convex hull of.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points[..]
    }

    /// The average of the points of this polyhedron.
    #[inline]
    pub fn centroid(&self) -> Point<Real> {
        self.centroid
    }
}

impl SupportMap for ConvexPolyhedron {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        utils::point_cloud_support_point_id(dir, &self.points)
            .map_or(self.centroid, |id| self.points[id])
    }

    #[inline]
    fn local_center(&self) -> Point<Real> {
        self.centroid
    }
}

#[cfg(test)]
mod tests {
    use super::ConvexPolyhedron;
    use crate::math::{Point, Vector};
    use crate::shape::{ShapeError, SupportMap};

    #[test]
    fn empty_point_cloud_is_rejected() {
        assert_eq!(
            ConvexPolyhedron::from_points(vec![]),
            Err(ShapeError::EmptyPointCloud)
        );
    }

    #[test]
    fn support_point_of_tetrahedron() {
        let tetra = ConvexPolyhedron::from_points(vec![
            Point::origin(),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            Point::new(0.0, 0.0, 1.0),
        ])
        .unwrap();

        assert_eq!(
            tetra.local_support_point(&Vector::new(0.0, 0.0, 2.0)),
            Point::new(0.0, 0.0, 1.0)
        );
        assert_eq!(tetra.local_center(), Point::new(0.25, 0.25, 0.25));
    }
}
