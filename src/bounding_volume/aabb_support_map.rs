use crate::bounding_volume::details::{point_cloud_aabb, support_map_aabb};
use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Real};
use crate::shape::{Cone, ConvexPolyhedron, Cylinder, Segment, Triangle};

// Curved shapes are bounded through their support function, polytopes through their vertices.

impl Cone {
    /// The AABB of this cone placed at `pos`.
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        support_map_aabb(pos, self)
    }
}

impl Cylinder {
    /// The AABB of this cylinder placed at `pos`.
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        support_map_aabb(pos, self)
    }
}

impl Segment {
    /// The AABB of this segment placed at `pos`.
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        point_cloud_aabb(pos, [&self.a, &self.b])
    }
}

impl Triangle {
    /// The AABB of this triangle placed at `pos`.
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        point_cloud_aabb(pos, [&self.a, &self.b, &self.c])
    }
}

impl ConvexPolyhedron {
    /// The AABB of this polyhedron placed at `pos`.
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        point_cloud_aabb(pos, self.points())
    }
}

#[cfg(test)]
mod tests {
    use crate::math::{Isometry, Point, Vector};
    use crate::shape::{Cone, Cylinder};

    #[test]
    fn cylinder_aabb_is_tight() {
        let cylinder = Cylinder::new(2.0, 0.5);
        let aabb = cylinder.aabb(&Isometry::translation(1.0, 0.0, 0.0));
        assert_relative_eq!(aabb.mins, Point::new(0.5, -2.0, -0.5));
        assert_relative_eq!(aabb.maxs, Point::new(1.5, 2.0, 0.5));
    }

    #[test]
    fn rotated_cone_aabb() {
        let cone = Cone::new(1.0, 0.5);
        let pos = Isometry::rotation(Vector::z() * std::f64::consts::FRAC_PI_2);
        let aabb = cone.aabb(&pos);
        // The apex (+y) is rotated onto -x.
        assert_relative_eq!(aabb.mins, Point::new(-1.0, -0.5, -0.5), epsilon = 1.0e-9);
        assert_relative_eq!(aabb.maxs, Point::new(1.0, 0.5, 0.5), epsilon = 1.0e-9);
    }
}
