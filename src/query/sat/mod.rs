//! Separating-axis tests.

pub use self::sat_cuboid_cuboid::{cuboid_edge_separation, cuboid_face_separation, cuboid_separation_along};

mod sat_cuboid_cuboid;
