//! Non-persistent geometric queries.
//!
//! # General cases
//! The [`ContactDispatcher`] selects, for each pair of shape types, the routine computing the
//! contact manifolds between two shapes: a closed-form routine, the general MPR routine for
//! convex shapes, or the per-triangle routine for triangle meshes.
//!
//! # Specific cases
//! The functions exported by the `details` submodule are more specific versions of the
//! ones described above. They are generic over the shape types and take the relative
//! position of the second shape as a single isometry.

pub use self::contact_dispatcher::{
    ContactDispatcher, ContactManifoldFn, ContactRoutine, NarrowPhaseAlgorithm,
};
pub use self::contact_manifolds::{ContactManifold, TrackedContact, MAX_MANIFOLD_POINTS};
pub use self::error::Unsupported;
pub use self::point::{PointProjection, PointQuery};
pub use self::ray::{Ray, RayIntersection};

pub mod clip;
pub mod closest_points;
mod contact_dispatcher;
pub mod contact_manifolds;
mod error;
pub mod mpr;
pub mod point;
mod ray;
pub mod sat;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::clip::clip_halfspace_polygon;
    pub use super::closest_points::closest_points_segment_segment_params;
    pub use super::contact_manifolds::{
        contact_manifold_ball_ball, contact_manifold_capsule_capsule, contact_manifold_convex_ball,
        contact_manifold_cuboid_cuboid, contact_manifold_support_map_support_map,
        contact_manifolds_trimesh_shape,
    };
    pub use super::mpr::mpr_penetration;
}
