use crate::math::{Point, Real, Vector};
use crate::pipeline::{BodyHandle, ContactManifold, ContactPoint, ModelHandle, ShapeId};

/// A single contact point, as reported to a [`ContactContainer`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContactInfo {
    /// The collision model of the first shape.
    pub model1: ModelHandle,
    /// The collision model of the second shape.
    pub model2: ModelHandle,
    /// The body of the first shape.
    pub body1: BodyHandle,
    /// The body of the second shape.
    pub body2: BodyHandle,
    /// The first shape.
    pub shape1: ShapeId,
    /// The second shape.
    pub shape2: ShapeId,
    /// The triangle of the first shape, if it is a triangle mesh.
    pub subshape1: Option<u32>,
    /// The triangle of the second shape, if it is a triangle mesh.
    pub subshape2: Option<u32>,
    /// The world-space unit normal, pointing from the first shape toward the second.
    pub normal: Vector<Real>,
    /// The world-space contact point on the first shape.
    pub point1: Point<Real>,
    /// The world-space contact point on the second shape.
    pub point2: Point<Real>,
    /// The penetration depth (positive if the shapes overlap).
    pub depth: Real,
}

impl ContactInfo {
    pub(crate) fn new(
        models: [ModelHandle; 2],
        manifold: &ContactManifold,
        point: &ContactPoint,
    ) -> Self {
        Self {
            model1: models[0],
            model2: models[1],
            body1: manifold.body1,
            body2: manifold.body2,
            shape1: manifold.shape1,
            shape2: manifold.shape2,
            subshape1: manifold.subshape1,
            subshape2: manifold.subshape2,
            normal: manifold.normal,
            point1: point.point1,
            point2: point.point2,
            depth: point.depth,
        }
    }

    /// The signed distance between the contact points, i.e., the opposite of the depth.
    #[inline]
    pub fn distance(&self) -> Real {
        -self.depth
    }
}

/// A consumer of the contacts computed by a [`CollisionSystem`](crate::pipeline::CollisionSystem).
pub trait ContactContainer {
    /// Removes all the contacts of this container.
    fn remove_all_contacts(&mut self);

    /// The number of contacts stored in this container.
    fn num_contacts(&self) -> usize;

    /// Called before the first contact of a step is added.
    ///
    /// Removes all the contacts of the previous step by default.
    fn begin_add_contact(&mut self) {
        self.remove_all_contacts();
    }

    /// Adds a contact point to this container.
    fn add_contact(&mut self, contact: &ContactInfo);

    /// Called after the last contact of a step is added.
    fn end_add_contact(&mut self) {}
}

/// A contact container storing the contacts into a vector.
#[derive(Clone, Debug, Default)]
pub struct VecContactContainer {
    /// The contacts reported since the last call to `begin_add_contact`.
    pub contacts: Vec<ContactInfo>,
}

impl VecContactContainer {
    /// An empty contact container.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContactContainer for VecContactContainer {
    fn remove_all_contacts(&mut self) {
        self.contacts.clear();
    }

    fn num_contacts(&self) -> usize {
        self.contacts.len()
    }

    fn add_contact(&mut self, contact: &ContactInfo) {
        self.contacts.push(*contact);
    }
}
