use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::pipeline::CollisionData;
use rayon::prelude::*;

/// Computes the world-space AABB of every shape, inflated by the shape's margin.
#[derive(Copy, Clone, Debug, Default)]
pub struct AabbGenerator;

impl AabbGenerator {
    /// Creates a new AABB generator.
    pub fn new() -> Self {
        AabbGenerator
    }

    /// Recomputes the AABBs of all the shapes and of all the bodies.
    ///
    /// Every AABB only depends on its own shape so they are computed in parallel, on the
    /// current rayon thread pool.
    pub fn generate(&self, data: &mut CollisionData) {
        let CollisionData {
            models,
            shapes,
            positions,
            aabbs,
            ..
        } = data;

        shapes
            .par_iter()
            .zip(positions.par_iter())
            .map(|(desc, pos)| {
                let shape = &models[desc.model.index()].model.shapes[desc.index_in_model].shape;
                shape.compute_aabb(pos).loosened(desc.margin)
            })
            .collect_into_vec(aabbs);

        data.update_body_aabbs();
    }

    /// The union of the AABBs of all the shapes of active bodies, if there is any.
    pub fn active_bounding_box(data: &CollisionData) -> Option<Aabb> {
        data.shapes
            .iter()
            .zip(data.aabbs.iter())
            .filter(|(desc, _)| data.bodies[desc.body].active)
            .map(|(_, aabb)| *aabb)
            .reduce(|a, b| a.merged(&b))
    }
}
