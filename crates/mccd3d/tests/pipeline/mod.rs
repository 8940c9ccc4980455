use mccd3d::math::{Isometry, Real};
use mccd3d::pipeline::{
    BodyHandle, BodyState, CollisionModel, CollisionSettings, CollisionSystem, ModelHandle,
};
use mccd3d::shape::CollisionShape;
use std::collections::HashMap;

mod active_box;
mod config;
mod determinism;
mod scenarios;
mod soundness;
mod unsupported;

/// A collision system together with the bodies its models are attached to.
pub struct World {
    pub system: CollisionSystem,
    pub bodies: HashMap<BodyHandle, BodyState>,
}

impl World {
    pub fn new(settings: CollisionSettings) -> Self {
        Self {
            system: CollisionSystem::with_settings(settings).unwrap(),
            bodies: HashMap::new(),
        }
    }

    /// Adds a body with a single shape.
    pub fn add_body(
        &mut self,
        shape: CollisionShape,
        state: BodyState,
    ) -> (BodyHandle, ModelHandle) {
        let handle = BodyHandle(self.bodies.len() as u64);
        let _ = self.bodies.insert(handle, state);
        let model = self
            .system
            .add(CollisionModel::new(handle).with_shape(shape, Isometry::identity()));
        (handle, model)
    }

    pub fn move_body(&mut self, handle: BodyHandle, position: Isometry<Real>) {
        self.bodies.get_mut(&handle).unwrap().position = position;
    }

    pub fn run(&mut self) {
        self.system.run(&self.bodies);
    }
}

pub fn ball(radius: Real) -> CollisionShape {
    CollisionShape::ball(radius).unwrap()
}

pub fn at(x: Real, y: Real, z: Real) -> BodyState {
    BodyState::new(Isometry::translation(x, y, z))
}
