use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::shape::{ShapeError, Triangle};

/// A triangle mesh.
///
/// Meshes are not convex: each triangle is tested individually during contact generation.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub struct TriMesh {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
    local_aabb: Aabb,
    triangle_aabbs: Vec<Aabb>,
}

impl TriMesh {
    /// A mesh from its vertex buffer and its counter-clockwise index triplets.
    ///
    /// Fails if the mesh has no triangles or if an index does not refer to a vertex.
    pub fn new(vertices: Vec<Point<Real>>, indices: Vec<[u32; 3]>) -> Result<Self, ShapeError> {
        if indices.is_empty() {
            return Err(ShapeError::EmptyMesh);
        }

        if vertices
            .iter()
            .any(|pt| !pt.coords.iter().all(|x| x.is_finite()))
        {
            return Err(ShapeError::NonFiniteCoordinates);
        }

        for (triangle, idx) in indices.iter().enumerate() {
            if let Some(&index) = idx.iter().find(|i| **i as usize >= vertices.len()) {
                return Err(ShapeError::MeshIndexOutOfBounds {
                    triangle,
                    index,
                    num_vertices: vertices.len(),
                });
            }
        }

        let triangle_aabbs: Vec<_> = indices
            .iter()
            .map(|idx| Aabb::from_points(idx.iter().map(|i| &vertices[*i as usize])))
            .collect();
        let local_aabb = Aabb::from_points(indices.iter().flatten().map(|i| &vertices[*i as usize]));

        Ok(TriMesh {
            vertices,
            indices,
            local_aabb,
            triangle_aabbs,
        })
    }

    /// All the vertices, including those no triangle refers to.
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices[..]
    }

    /// One index triplet per triangle.
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices[..]
    }

    /// The triangle count.
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// The triangle number `i`.
    ///
    /// # Panics
    /// If `i >= self.num_triangles()`.
    pub fn triangle(&self, i: u32) -> Triangle {
        let [a, b, c] = self.indices[i as usize].map(|v| self.vertices[v as usize]);
        Triangle::new(a, b, c)
    }

    /// The bounding box of the referenced vertices, in the mesh frame.
    pub fn local_aabb(&self) -> &Aabb {
        &self.local_aabb
    }

    /// The indices of the triangles with a local-space AABB intersecting `aabb`.
    pub fn triangles_intersecting_aabb<'a>(
        &'a self,
        aabb: &'a Aabb,
    ) -> impl Iterator<Item = u32> + 'a {
        use crate::bounding_volume::BoundingVolume;

        self.triangle_aabbs
            .iter()
            .enumerate()
            .filter(move |(_, tri_aabb)| tri_aabb.intersects(aabb))
            .map(|(i, _)| i as u32)
    }
}
