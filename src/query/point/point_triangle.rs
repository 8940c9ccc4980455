use crate::math::{Point, Real};
use crate::query::{PointProjection, PointQuery};
use crate::shape::Triangle;

impl Triangle {
    /// Projects `pt` on this triangle and returns the barycentric coordinates of the projection.
    ///
    /// The region tests follow the classic Voronoi-region decomposition of the triangle: each
    /// vertex and edge region is tested before falling back to the face interior.
    pub fn project_local_point_barycentric(&self, pt: &Point<Real>) -> [Real; 3] {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        let ap = pt - self.a;

        let d1 = ab.dot(&ap);
        let d2 = ac.dot(&ap);
        if d1 <= 0.0 && d2 <= 0.0 {
            return [1.0, 0.0, 0.0];
        }

        let bp = pt - self.b;
        let d3 = ab.dot(&bp);
        let d4 = ac.dot(&bp);
        if d3 >= 0.0 && d4 <= d3 {
            return [0.0, 1.0, 0.0];
        }

        let vc = d1 * d4 - d3 * d2;
        if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
            let v = d1 / (d1 - d3);
            return [1.0 - v, v, 0.0];
        }

        let cp = pt - self.c;
        let d5 = ab.dot(&cp);
        let d6 = ac.dot(&cp);
        if d6 >= 0.0 && d5 <= d6 {
            return [0.0, 0.0, 1.0];
        }

        let vb = d5 * d2 - d1 * d6;
        if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
            let w = d2 / (d2 - d6);
            return [1.0 - w, 0.0, w];
        }

        let va = d3 * d6 - d5 * d4;
        if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
            let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
            return [0.0, 1.0 - w, w];
        }

        let denom = va + vb + vc;
        if denom == 0.0 {
            // Degenerate triangle.
            return [1.0, 0.0, 0.0];
        }

        let v = vb / denom;
        let w = vc / denom;
        [1.0 - v - w, v, w]
    }
}

impl PointQuery for Triangle {
    #[inline]
    fn project_local_point(&self, pt: &Point<Real>, _: bool) -> PointProjection {
        let [u, v, w] = self.project_local_point_barycentric(pt);
        let proj = Point::from(self.a.coords * u + self.b.coords * v + self.c.coords * w);
        // A triangle has no interior, so a point is inside only if it lies on the triangle.
        let inside = relative_eq!(proj, *pt);
        PointProjection::new(inside, proj)
    }
}
