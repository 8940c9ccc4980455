use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Real};
use crate::shape::TriMesh;

impl TriMesh {
    /// A bound of this mesh placed at `pos`, derived from its cached local AABB.
    ///
    /// Looser than bounding the transformed vertices when `pos` rotates the mesh.
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        self.local_aabb().transform_by(pos)
    }
}
