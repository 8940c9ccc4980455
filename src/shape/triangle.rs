//! Triangles, as found in triangle meshes.

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::SupportMap;

use na::Unit;

/// A triangle with vertices `a`, `b`, `c`.
///
/// Standalone triangles are convex shapes. Triangles of a [`crate::shape::TriMesh`] are
/// extracted one by one when a mesh is tested against another shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone, Default)]
pub struct Triangle {
    /// First vertex.
    pub a: Point<Real>,
    /// Second vertex.
    pub b: Point<Real>,
    /// Third vertex.
    pub c: Point<Real>,
}

impl Triangle {
    /// A triangle from its three vertices.
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// The unit normal `(b - a) × (c - a)`, or `None` if the vertices are aligned.
    pub fn normal(&self) -> Option<Unit<Vector<Real>>> {
        let n = (self.b - self.a).cross(&(self.c - self.a));
        Unit::try_new(n, DEFAULT_EPSILON)
    }

    /// The barycenter of the vertices.
    pub fn center(&self) -> Point<Real> {
        Point::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }
}

impl SupportMap for Triangle {
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let mut best = self.a;
        let mut best_dot = self.a.coords.dot(dir);

        for pt in [self.b, self.c] {
            let dot = pt.coords.dot(dir);
            if dot > best_dot {
                best = pt;
                best_dot = dot;
            }
        }

        best
    }

    fn local_center(&self) -> Point<Real> {
        self.center()
    }
}
