//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::aabb::Aabb;
#[doc(inline)]
pub use crate::bounding_volume::bounding_volume::BoundingVolume;

#[doc(hidden)]
pub mod aabb;
mod aabb_ball;
mod aabb_capsule;
mod aabb_cuboid;
mod aabb_support_map;
mod aabb_trimesh;
mod aabb_utils;
#[doc(hidden)]
pub mod bounding_volume;

/// Free functions for some special cases of bounding-volume computation.
pub mod details {
    pub use super::aabb_ball::ball_aabb;
    pub use super::aabb_utils::{local_point_cloud_aabb, point_cloud_aabb, support_map_aabb};
}
