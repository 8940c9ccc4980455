//! Shapes supported by the collision system.

pub use self::ball::Ball;
pub use self::capsule::Capsule;
pub use self::cone::Cone;
pub use self::convex_polyhedron::ConvexPolyhedron;
pub use self::cuboid::Cuboid;
pub use self::cylinder::Cylinder;
pub use self::segment::Segment;
pub use self::shape::{CollisionShape, ShapeError, ShapeType};
pub use self::support_map::{DilatedShape, SupportMap};
pub use self::triangle::Triangle;
pub use self::trimesh::TriMesh;

mod ball;
mod capsule;
mod cone;
mod convex_polyhedron;
mod cuboid;
mod cylinder;
mod segment;
#[allow(clippy::module_inception)]
mod shape;
mod support_map;
mod triangle;
mod trimesh;
