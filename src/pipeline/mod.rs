//! The collision detection pipeline.
//!
//! A [`CollisionSystem`] owns the [`CollisionData`] store and runs, at each step, the
//! [`AabbGenerator`], the [`ActiveRegionFilter`], the [`BroadPhase`] and the
//! [`NarrowPhase`] on its own thread pool.

pub use self::aabb_generator::AabbGenerator;
pub use self::active_region::ActiveRegionFilter;
pub use self::broad_phase::BroadPhase;
pub use self::collision_data::{BodyEntry, CollisionData, ShapeDescriptor, ShapeId};
pub use self::collision_groups::Group;
pub use self::collision_model::{
    BodyHandle, BodySet, BodyState, CollisionModel, ModelHandle, ModelShape,
};
pub use self::collision_system::CollisionSystem;
pub use self::contact_container::{ContactContainer, ContactInfo, VecContactContainer};
pub use self::contact_manifold::{ContactManifold, ContactPoint};
pub use self::narrow_phase::NarrowPhase;
pub use self::settings::{default_num_threads, CollisionSettings, ConfigError};
pub use crate::query::NarrowPhaseAlgorithm;

mod aabb_generator;
mod active_region;
mod broad_phase;
mod collision_data;
mod collision_groups;
mod collision_model;
mod collision_system;
mod contact_container;
mod contact_manifold;
mod narrow_phase;
mod settings;
