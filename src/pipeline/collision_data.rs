use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Isometry, Real};
use crate::pipeline::{
    BodyHandle, BodySet, BodyState, CollisionModel, ContactManifold, Group, ModelHandle,
};
use crate::shape::{CollisionShape, ShapeType};
use slab::Slab;
use std::collections::{HashMap, HashSet};

/// The dense index of a shape for the current step.
///
/// Shape identifiers are reassigned by every synchronization: they are only stable
/// between two calls to [`CollisionSystem::synchronize`](crate::pipeline::CollisionSystem::synchronize).
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub u32);

impl ShapeId {
    /// The index of this shape in the per-step arrays of [`CollisionData`].
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Per-step information about a shape.
#[derive(Copy, Clone, Debug)]
pub struct ShapeDescriptor {
    /// The collision model this shape is part of.
    pub model: ModelHandle,
    /// The index of this shape in its model's shape list.
    pub index_in_model: usize,
    /// The index of this shape's body in [`CollisionData::bodies`].
    pub body: usize,
    /// The geometric type of this shape.
    pub shape_type: ShapeType,
    /// The collision families of this shape.
    pub family: Group,
    /// The collision mask of this shape.
    pub mask: Group,
    /// The effective margin of this shape: the largest of the global envelope and
    /// its own margin.
    pub margin: Real,
}

/// An arena slot: a model and the generation of the handle that designates it.
#[derive(Clone, Debug)]
pub(crate) struct ModelSlot {
    pub(crate) generation: u32,
    pub(crate) model: CollisionModel,
}

/// Per-step information about a body referenced by at least one collision model.
#[derive(Copy, Clone, Debug)]
pub struct BodyEntry {
    /// The handle of this body.
    pub handle: BodyHandle,
    /// The state of this body read during the last synchronization.
    pub state: BodyState,
    /// Was this body frozen by the active-region filter?
    pub frozen: bool,
    /// Does this body take part in the broad-phase and narrow-phase?
    pub active: bool,
    /// The union of the AABBs of this body's shapes.
    pub aabb: Aabb,
}

/// The collision data store.
///
/// It owns the collision models, and the per-step arrays overwritten by each
/// synchronization: shape descriptors, world-space shape positions, AABBs, body table,
/// candidate pairs and contacts.
#[derive(Clone, Debug, Default)]
pub struct CollisionData {
    pub(crate) models: Slab<ModelSlot>,
    pub(crate) next_generation: u32,
    pub(crate) shapes: Vec<ShapeDescriptor>,
    pub(crate) positions: Vec<Isometry<Real>>,
    pub(crate) aabbs: Vec<Aabb>,
    pub(crate) bodies: Vec<BodyEntry>,
    pub(crate) body_ids: HashMap<BodyHandle, usize>,
    pub(crate) frozen: HashSet<BodyHandle>,
    pub(crate) pairs: Vec<(ShapeId, ShapeId)>,
    pub(crate) contacts: Vec<ContactManifold>,
    pub(crate) unsupported_pairs: usize,
    pub(crate) bounding_box: Option<Aabb>,
}

impl CollisionData {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert_model(&mut self, model: CollisionModel) -> ModelHandle {
        let generation = self.next_generation;
        self.next_generation = self.next_generation.wrapping_add(1);
        let index = self.models.insert(ModelSlot { generation, model });
        ModelHandle { index, generation }
    }

    pub(crate) fn remove_model(&mut self, handle: ModelHandle) -> Option<CollisionModel> {
        let _ = self.model(handle)?;
        self.models.try_remove(handle.index).map(|slot| slot.model)
    }

    /// Removes all the models and all the per-step data.
    ///
    /// Generations keep counting so that handles of the cleared models stay invalid.
    pub(crate) fn clear(&mut self) {
        let next_generation = self.next_generation;
        *self = Self {
            next_generation,
            ..Self::default()
        };
    }

    /// The collision model with the given handle.
    pub fn model(&self, handle: ModelHandle) -> Option<&CollisionModel> {
        self.models
            .get(handle.index)
            .filter(|slot| slot.generation == handle.generation)
            .map(|slot| &slot.model)
    }

    /// Iterates through all the collision models.
    pub fn models(&self) -> impl ExactSizeIterator<Item = (ModelHandle, &CollisionModel)> {
        self.models.iter().map(|(index, slot)| {
            let handle = ModelHandle {
                index,
                generation: slot.generation,
            };
            (handle, &slot.model)
        })
    }

    /// The number of shapes of the last synchronization.
    pub fn num_shapes(&self) -> usize {
        self.shapes.len()
    }

    /// The descriptors of all the shapes, indexed by [`ShapeId`].
    pub fn shapes(&self) -> &[ShapeDescriptor] {
        &self.shapes
    }

    /// The world-space positions of all the shapes, indexed by [`ShapeId`].
    pub fn positions(&self) -> &[Isometry<Real>] {
        &self.positions
    }

    /// The AABBs computed by the last run, indexed by [`ShapeId`].
    pub fn aabbs(&self) -> &[Aabb] {
        &self.aabbs
    }

    /// The bodies referenced by the collision models.
    pub fn bodies(&self) -> &[BodyEntry] {
        &self.bodies
    }

    /// The candidate pairs emitted by the last broad-phase.
    pub fn pairs(&self) -> &[(ShapeId, ShapeId)] {
        &self.pairs
    }

    /// The contact manifolds computed by the last narrow-phase.
    pub fn contacts(&self) -> &[ContactManifold] {
        &self.contacts
    }

    /// The descriptor of a shape.
    ///
    /// # Panics
    /// If `id` is not a shape of the last synchronization.
    pub fn descriptor(&self, id: ShapeId) -> &ShapeDescriptor {
        match self.shapes.get(id.index()) {
            Some(desc) => desc,
            None => panic!(
                "shape id {} is out of range: only {} shapes were synchronized",
                id.0,
                self.shapes.len()
            ),
        }
    }

    /// The geometry of a shape.
    ///
    /// # Panics
    /// If `id` is not a shape of the last synchronization.
    pub fn shape(&self, id: ShapeId) -> &CollisionShape {
        let desc = self.descriptor(id);
        &self.models[desc.model.index].model.shapes[desc.index_in_model].shape
    }

    /// The body entry of the given body, if one of the models refers to it.
    pub fn body(&self, handle: BodyHandle) -> Option<&BodyEntry> {
        self.body_ids.get(&handle).map(|i| &self.bodies[*i])
    }

    /// Does the given shape take part in the broad-phase?
    #[inline]
    pub fn is_shape_active(&self, id: ShapeId) -> bool {
        self.bodies[self.descriptor(id).body].active
    }

    /// Are the two shapes allowed to collide?
    ///
    /// This is the case if they belong to different bodies, not both of them fixed, and
    /// their families and masks are compatible.
    pub fn are_compatible(&self, id1: ShapeId, id2: ShapeId) -> bool {
        let desc1 = self.descriptor(id1);
        let desc2 = self.descriptor(id2);

        if desc1.body == desc2.body {
            return false;
        }

        let body1 = &self.bodies[desc1.body];
        let body2 = &self.bodies[desc2.body];

        !(body1.state.fixed && body2.state.fixed)
            && Group::test(desc1.family, desc1.mask, desc2.family, desc2.mask)
    }

    /// Copies the body states and collision models into the per-step arrays.
    ///
    /// The AABBs, candidate pairs and contacts of the previous step are discarded.
    ///
    /// # Panics
    /// If a collision model refers to a body unknown to `bodies`.
    pub fn synchronize(&mut self, bodies: &dyn BodySet, envelope: Real) {
        self.shapes.clear();
        self.positions.clear();
        self.aabbs.clear();
        self.bodies.clear();
        self.body_ids.clear();
        self.pairs.clear();
        self.contacts.clear();
        self.unsupported_pairs = 0;
        self.bounding_box = None;

        for (index, slot) in self.models.iter() {
            let model = &slot.model;
            let body = match self.body_ids.get(&model.body) {
                Some(body) => *body,
                None => {
                    let state = match bodies.body_state(model.body) {
                        Some(state) => state,
                        None => panic!(
                            "collision model {} refers to the unknown body {:?}",
                            index, model.body
                        ),
                    };
                    let frozen = self.frozen.contains(&model.body);
                    self.bodies.push(BodyEntry {
                        handle: model.body,
                        state,
                        frozen,
                        active: state.collide && !frozen,
                        aabb: Aabb::new_invalid(),
                    });
                    let _ = self.body_ids.insert(model.body, self.bodies.len() - 1);
                    self.bodies.len() - 1
                }
            };

            let body_pos = self.bodies[body].state.position;

            for (index_in_model, model_shape) in model.shapes.iter().enumerate() {
                self.shapes.push(ShapeDescriptor {
                    model: ModelHandle {
                        index,
                        generation: slot.generation,
                    },
                    index_in_model,
                    body,
                    shape_type: model_shape.shape.shape_type(),
                    family: model.family,
                    mask: model.mask,
                    margin: model_shape.margin.map_or(envelope, |m| m.max(envelope)),
                });
                self.positions.push(body_pos * model_shape.position);
            }
        }
    }

    /// Recomputes the AABB of every body from the AABBs of its shapes.
    pub(crate) fn update_body_aabbs(&mut self) {
        for body in &mut self.bodies {
            body.aabb = Aabb::new_invalid();
        }

        for (desc, aabb) in self.shapes.iter().zip(self.aabbs.iter()) {
            self.bodies[desc.body].aabb.merge(aabb);
        }
    }

    /// Marks a body as frozen: it stays excluded from the broad-phase until reactivated.
    pub(crate) fn freeze_body(&mut self, index: usize) {
        let body = &mut self.bodies[index];
        body.frozen = true;
        body.active = false;
        let _ = self.frozen.insert(body.handle);
    }

    /// Unfreezes a body. Returns `false` if it was not frozen.
    pub(crate) fn unfreeze_body(&mut self, handle: BodyHandle) -> bool {
        if !self.frozen.remove(&handle) {
            return false;
        }

        if let Some(i) = self.body_ids.get(&handle) {
            let body = &mut self.bodies[*i];
            body.frozen = false;
            body.active = body.state.collide;
        }

        true
    }

    /// Unfreezes all the bodies.
    pub(crate) fn unfreeze_all(&mut self) {
        self.frozen.clear();

        for body in &mut self.bodies {
            body.frozen = false;
            body.active = body.state.collide;
        }
    }

    /// Is the given body frozen by the active-region filter?
    pub fn is_body_frozen(&self, handle: BodyHandle) -> bool {
        self.frozen.contains(&handle)
    }
}

#[cfg(test)]
mod tests {
    use super::{CollisionData, ShapeId};
    use crate::math::{Isometry, Real, Vector};
    use crate::pipeline::{BodyHandle, BodyState, CollisionModel, Group};
    use crate::shape::CollisionShape;
    use std::collections::HashMap;

    fn ball(radius: Real) -> CollisionShape {
        CollisionShape::ball(radius).unwrap()
    }

    #[test]
    fn synchronize_flattens_models() {
        let mut data = CollisionData::new();
        let b1 = BodyHandle(1);
        let b2 = BodyHandle(2);

        let _ = data.insert_model(
            CollisionModel::new(b1)
                .with_shape(ball(1.0), Isometry::translation(1.0, 0.0, 0.0))
                .with_shape_and_margin(ball(1.0), Isometry::identity(), 0.3),
        );
        let h2 = data.insert_model(
            CollisionModel::new(b2)
                .with_shape(ball(0.5), Isometry::identity())
                .with_family(Group::GROUP_2),
        );

        let mut bodies = HashMap::new();
        let _ = bodies.insert(b1, BodyState::new(Isometry::translation(0.0, 2.0, 0.0)));
        let _ = bodies.insert(b2, BodyState::new_fixed(Isometry::identity()));

        data.synchronize(&bodies, 0.1);

        assert_eq!(data.num_shapes(), 3);
        assert_eq!(data.bodies().len(), 2);
        assert_eq!(data.positions()[0].translation.vector, Vector::new(1.0, 2.0, 0.0));
        assert_eq!(data.descriptor(ShapeId(0)).margin, 0.1);
        assert_eq!(data.descriptor(ShapeId(1)).margin, 0.3);
        assert_eq!(data.descriptor(ShapeId(2)).model, h2);

        // Same body.
        assert!(!data.are_compatible(ShapeId(0), ShapeId(1)));
        assert!(data.are_compatible(ShapeId(0), ShapeId(2)));
    }

    #[test]
    fn stale_handles_do_not_alias_new_models() {
        let mut data = CollisionData::new();
        let model = |body| CollisionModel::new(BodyHandle(body)).with_shape(ball(1.0), Isometry::identity());

        let a = data.insert_model(model(1));
        assert_eq!(data.remove_model(a).map(|m| m.body), Some(BodyHandle(1)));

        let b = data.insert_model(model(2));
        assert_eq!(a.index(), b.index());
        assert_ne!(a, b);
        assert!(data.model(a).is_none());
        assert!(data.remove_model(a).is_none());
        assert_eq!(data.model(b).map(|m| m.body), Some(BodyHandle(2)));

        data.clear();
        let c = data.insert_model(model(3));
        assert_ne!(b, c);
        assert!(data.model(b).is_none());
        assert_eq!(data.models().map(|(h, _)| h).collect::<Vec<_>>(), vec![c]);
    }

    #[test]
    #[should_panic]
    fn unknown_body_panics() {
        let mut data = CollisionData::new();
        let _ = data.insert_model(
            CollisionModel::new(BodyHandle(7)).with_shape(ball(1.0), Isometry::identity()),
        );
        let bodies: HashMap<BodyHandle, BodyState> = HashMap::new();
        data.synchronize(&bodies, 0.0);
    }

    #[test]
    #[should_panic]
    fn out_of_range_shape_id_panics() {
        let data = CollisionData::new();
        let _ = data.shape(ShapeId(0));
    }
}
