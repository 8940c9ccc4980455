use crate::math::{Isometry, Real, Vector};
use crate::pipeline::Group;
use crate::shape::CollisionShape;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// The handle of a body owned by the caller.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub u64);

/// The handle of a collision model added to a [`CollisionSystem`](crate::pipeline::CollisionSystem).
///
/// Removing the model invalidates the handle for good: arena slots are reused, but each
/// insertion gets a new generation, so a stale handle never designates a later model.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelHandle {
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

impl ModelHandle {
    /// The slot of this handle in the collision model arena.
    #[inline]
    pub fn index(self) -> usize {
        self.index
    }

    /// The insertion count of the arena when this handle was created.
    #[inline]
    pub fn generation(self) -> u32 {
        self.generation
    }
}

/// The state of a body, as read by the collision system during synchronization.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BodyState {
    /// The world-space position of the body.
    pub position: Isometry<Real>,
    /// The linear velocity of the body.
    pub linvel: Vector<Real>,
    /// The angular velocity of the body.
    pub angvel: Vector<Real>,
    /// Is this body fixed? Two fixed bodies never collide with each other.
    pub fixed: bool,
    /// Does this body take part in collision detection at all?
    pub collide: bool,
}

impl BodyState {
    /// A colliding, non-fixed, body at rest at the given position.
    pub fn new(position: Isometry<Real>) -> Self {
        Self {
            position,
            linvel: Vector::zeros(),
            angvel: Vector::zeros(),
            fixed: false,
            collide: true,
        }
    }

    /// A colliding fixed body at the given position.
    pub fn new_fixed(position: Isometry<Real>) -> Self {
        Self {
            fixed: true,
            ..Self::new(position)
        }
    }
}

/// The set of bodies the collision models are attached to.
///
/// The collision system only ever reads the body states.
pub trait BodySet {
    /// The current state of the body with the given handle, if it exists.
    fn body_state(&self, handle: BodyHandle) -> Option<BodyState>;
}

impl<S: BuildHasher> BodySet for HashMap<BodyHandle, BodyState, S> {
    fn body_state(&self, handle: BodyHandle) -> Option<BodyState> {
        self.get(&handle).copied()
    }
}

/// A shape of a collision model, positioned relative to the model's body.
#[derive(Clone, Debug)]
pub struct ModelShape {
    /// The geometry of this shape.
    pub shape: CollisionShape,
    /// The position of this shape relative to its body.
    pub position: Isometry<Real>,
    /// The collision margin of this shape.
    ///
    /// The effective margin is the largest of the global envelope and this one. `None`
    /// means the global envelope alone.
    pub margin: Option<Real>,
}

/// A set of collision shapes attached to the same body.
#[derive(Clone, Debug)]
pub struct CollisionModel {
    /// The body this model is attached to.
    pub body: BodyHandle,
    /// The shapes of this model.
    pub shapes: SmallVec<[ModelShape; 1]>,
    /// The collision families this model belongs to.
    pub family: Group,
    /// The collision families this model can collide with.
    pub mask: Group,
}

impl CollisionModel {
    /// An empty collision model attached to `body`, belonging to and colliding with all
    /// the families.
    pub fn new(body: BodyHandle) -> Self {
        Self {
            body,
            shapes: SmallVec::new(),
            family: Group::ALL,
            mask: Group::ALL,
        }
    }

    /// Adds a shape at the given position relative to the body.
    pub fn with_shape(mut self, shape: CollisionShape, position: Isometry<Real>) -> Self {
        self.shapes.push(ModelShape {
            shape,
            position,
            margin: None,
        });
        self
    }

    /// Adds a shape with its own collision margin.
    pub fn with_shape_and_margin(
        mut self,
        shape: CollisionShape,
        position: Isometry<Real>,
        margin: Real,
    ) -> Self {
        self.shapes.push(ModelShape {
            shape,
            position,
            margin: Some(margin),
        });
        self
    }

    /// Sets the collision families of this model.
    pub fn with_family(mut self, family: Group) -> Self {
        self.family = family;
        self
    }

    /// Sets the collision mask of this model.
    pub fn with_mask(mut self, mask: Group) -> Self {
        self.mask = mask;
        self
    }
}
