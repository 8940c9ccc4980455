use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::{
    Ball, Capsule, Cone, ConvexPolyhedron, Cuboid, Cylinder, SupportMap, TriMesh, Triangle,
};

/// Enum representing the type of a shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeType {
    /// A ball shape.
    Ball = 0,
    /// A cuboid shape.
    Cuboid,
    /// A capsule shape.
    Capsule,
    /// A cylindrical shape.
    Cylinder,
    /// A conical shape.
    Cone,
    /// A triangle shape.
    Triangle,
    /// A convex polyhedron.
    ConvexPolyhedron,
    /// A triangle mesh shape.
    TriMesh,
}

impl ShapeType {
    /// The number of shape types.
    pub const COUNT: usize = 8;

    /// All the shape types, ordered by their discriminant.
    pub const ALL: [ShapeType; Self::COUNT] = [
        ShapeType::Ball,
        ShapeType::Cuboid,
        ShapeType::Capsule,
        ShapeType::Cylinder,
        ShapeType::Cone,
        ShapeType::Triangle,
        ShapeType::ConvexPolyhedron,
        ShapeType::TriMesh,
    ];

    /// Is this shape type convex and described by a support map?
    #[inline]
    pub fn is_support_map(self) -> bool {
        self != ShapeType::TriMesh
    }
}

/// Error raised when a shape is built from invalid geometric parameters.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// A radius, half-height or half-extent is negative or not finite.
    #[error("invalid {name} {value}: must be finite and non-negative")]
    InvalidDimension {
        /// The name of the offending parameter.
        name: &'static str,
        /// The offending value.
        value: Real,
    },
    /// A convex polyhedron was given no points.
    #[error("a convex polyhedron needs at least one point")]
    EmptyPointCloud,
    /// A triangle mesh was given no triangles.
    #[error("a triangle mesh needs at least one triangle")]
    EmptyMesh,
    /// A vertex has a NaN or infinite coordinate.
    #[error("vertex coordinates must be finite")]
    NonFiniteCoordinates,
    /// A triangle refers to a vertex that does not exist.
    #[error("triangle {triangle} refers to vertex {index} but the mesh has {num_vertices} vertices")]
    MeshIndexOutOfBounds {
        /// The index of the offending triangle.
        triangle: usize,
        /// The offending vertex index.
        index: u32,
        /// The number of vertices of the mesh.
        num_vertices: usize,
    },
}

fn check_dimension(name: &'static str, value: Real) -> Result<Real, ShapeError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ShapeError::InvalidDimension { name, value })
    }
}

/// The geometry of a collision shape, tagged by its type.
///
/// All the shapes but `TriMesh` are convex and expose a support map. Shapes with an axis
/// (capsules, cylinders and cones) are aligned with the local `y` axis.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum CollisionShape {
    /// A ball.
    Ball(Ball),
    /// A box.
    Cuboid(Cuboid),
    /// A capsule aligned with `y`.
    Capsule(Capsule),
    /// A cylinder aligned with `y`.
    Cylinder(Cylinder),
    /// A cone aligned with `y`, apex toward `+y`.
    Cone(Cone),
    /// A single triangle.
    Triangle(Triangle),
    /// The convex hull of a point cloud.
    ConvexPolyhedron(ConvexPolyhedron),
    /// A non-convex triangle mesh.
    TriMesh(TriMesh),
}

impl CollisionShape {
    /// A ball with the given radius.
    pub fn ball(radius: Real) -> Result<Self, ShapeError> {
        Ok(CollisionShape::Ball(Ball::new(check_dimension(
            "radius", radius,
        )?)))
    }

    /// A box with the given half-extents.
    pub fn cuboid(half_extents: Vector<Real>) -> Result<Self, ShapeError> {
        for value in half_extents.iter() {
            let _ = check_dimension("half-extent", *value)?;
        }
        Ok(CollisionShape::Cuboid(Cuboid::new(half_extents)))
    }

    /// A capsule aligned with the `y` axis.
    ///
    /// `half_height` is the half-length of its inner segment.
    pub fn capsule(half_height: Real, radius: Real) -> Result<Self, ShapeError> {
        Ok(CollisionShape::Capsule(Capsule::new_y(
            check_dimension("half-height", half_height)?,
            check_dimension("radius", radius)?,
        )))
    }

    /// A cylinder aligned with the `y` axis.
    pub fn cylinder(half_height: Real, radius: Real) -> Result<Self, ShapeError> {
        Ok(CollisionShape::Cylinder(Cylinder::new(
            check_dimension("half-height", half_height)?,
            check_dimension("radius", radius)?,
        )))
    }

    /// A cone aligned with the `y` axis.
    pub fn cone(half_height: Real, radius: Real) -> Result<Self, ShapeError> {
        Ok(CollisionShape::Cone(Cone::new(
            check_dimension("half-height", half_height)?,
            check_dimension("radius", radius)?,
        )))
    }

    /// A triangle.
    pub fn triangle(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Result<Self, ShapeError> {
        if [a, b, c]
            .iter()
            .any(|pt| !pt.coords.iter().all(|x| x.is_finite()))
        {
            return Err(ShapeError::NonFiniteCoordinates);
        }
        Ok(CollisionShape::Triangle(Triangle::new(a, b, c)))
    }

    /// The convex hull of the given points.
    pub fn convex_hull(points: Vec<Point<Real>>) -> Result<Self, ShapeError> {
        ConvexPolyhedron::from_points(points).map(CollisionShape::ConvexPolyhedron)
    }

    /// A triangle mesh.
    pub fn trimesh(
        vertices: Vec<Point<Real>>,
        indices: Vec<[u32; 3]>,
    ) -> Result<Self, ShapeError> {
        TriMesh::new(vertices, indices).map(CollisionShape::TriMesh)
    }

    /// The type of this shape.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            CollisionShape::Ball(_) => ShapeType::Ball,
            CollisionShape::Cuboid(_) => ShapeType::Cuboid,
            CollisionShape::Capsule(_) => ShapeType::Capsule,
            CollisionShape::Cylinder(_) => ShapeType::Cylinder,
            CollisionShape::Cone(_) => ShapeType::Cone,
            CollisionShape::Triangle(_) => ShapeType::Triangle,
            CollisionShape::ConvexPolyhedron(_) => ShapeType::ConvexPolyhedron,
            CollisionShape::TriMesh(_) => ShapeType::TriMesh,
        }
    }

    /// Converts this shape into a support map, if it is convex.
    pub fn as_support_map(&self) -> Option<&dyn SupportMap> {
        match self {
            CollisionShape::Ball(s) => Some(s as &dyn SupportMap),
            CollisionShape::Cuboid(s) => Some(s as &dyn SupportMap),
            CollisionShape::Capsule(s) => Some(s as &dyn SupportMap),
            CollisionShape::Cylinder(s) => Some(s as &dyn SupportMap),
            CollisionShape::Cone(s) => Some(s as &dyn SupportMap),
            CollisionShape::Triangle(s) => Some(s as &dyn SupportMap),
            CollisionShape::ConvexPolyhedron(s) => Some(s as &dyn SupportMap),
            CollisionShape::TriMesh(_) => None,
        }
    }

    /// Converts this shape into a triangle mesh, if it is one.
    pub fn as_trimesh(&self) -> Option<&TriMesh> {
        match self {
            CollisionShape::TriMesh(m) => Some(m),
            _ => None,
        }
    }

    /// Computes the world-space AABB of this shape transformed by `position`.
    pub fn compute_aabb(&self, position: &Isometry<Real>) -> Aabb {
        match self {
            CollisionShape::Ball(s) => s.aabb(position),
            CollisionShape::Cuboid(s) => s.aabb(position),
            CollisionShape::Capsule(s) => s.aabb(position),
            CollisionShape::Cylinder(s) => s.aabb(position),
            CollisionShape::Cone(s) => s.aabb(position),
            CollisionShape::Triangle(s) => s.aabb(position),
            CollisionShape::ConvexPolyhedron(s) => s.aabb(position),
            CollisionShape::TriMesh(s) => s.aabb(position),
        }
    }
}
