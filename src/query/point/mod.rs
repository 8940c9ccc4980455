//! Point inclusion and projection.

pub use self::point_query::{PointProjection, PointQuery};

mod point_aabb;
mod point_capsule;
mod point_cuboid;
mod point_query;
mod point_segment;
mod point_triangle;
