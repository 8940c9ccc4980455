/*!
mccd3d
========

**mccd3d** is a multicore 3-dimensional collision-detection engine written
with the rust programming language.

Each step, it determines which pairs of collision shapes are touching or lie
within a safety margin of each other, and computes the contact geometry
(points, normal, penetration depth) needed by a downstream constraint solver.

The pipeline is:

1. [`pipeline::CollisionSystem::synchronize`] copies the external body state
   into the [`pipeline::CollisionData`] store.
2. [`pipeline::AabbGenerator`] computes one inflated [`bounding_volume::Aabb`]
   per shape.
3. [`pipeline::ActiveRegionFilter`] freezes bodies leaving the active box.
4. [`pipeline::BroadPhase`] bins the AABBs into a [`partitioning::UniformGrid`]
   and emits candidate pairs.
5. [`pipeline::NarrowPhase`] computes exact contacts for every candidate pair.
6. [`pipeline::CollisionSystem::report_contacts`] hands the result to a
   [`pipeline::ContactContainer`].
*/

#![deny(unused_results)]
#![deny(non_upper_case_globals)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(clippy::module_inception)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::manual_range_contains)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod partitioning;
pub mod pipeline;
pub mod query;
pub mod shape;
pub mod utils;

/// Scalar, point and transform types shared by every module.
///
/// The engine is 3D and double precision only.
pub mod math {
    /// Scalar type.
    pub type Real = f64;

    /// Tolerance for normalizations and degeneracy checks.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// Number of space dimensions.
    pub const DIM: usize = 3;

    /// A point.
    pub type Point<N> = na::Point3<N>;

    /// A vector.
    pub type Vector<N> = na::Vector3<N>;

    /// A rigid transform: rotation then translation.
    pub type Isometry<N> = na::Isometry3<N>;
}
