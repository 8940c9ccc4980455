use crate::bounding_volume::BoundingVolume;
use crate::math::{Isometry, Real};
use crate::query::{ContactDispatcher, ContactManifold, Unsupported};
use crate::shape::{CollisionShape, TriMesh};

/// Computes the contact manifolds between a triangle mesh and a convex shape, given as
/// `CollisionShape`s in any order.
///
/// One manifold is generated per triangle in contact, tagged with the triangle index.
pub fn contact_manifolds_trimesh_shape_shapes(
    dispatcher: &ContactDispatcher,
    pos12: &Isometry<Real>,
    shape1: &CollisionShape,
    shape2: &CollisionShape,
    prediction: Real,
    manifolds: &mut Vec<ContactManifold>,
) -> Result<(), Unsupported> {
    match (shape1.as_trimesh(), shape2.as_trimesh()) {
        (Some(_), Some(_)) | (None, None) => Err(Unsupported),
        (Some(mesh1), None) => contact_manifolds_trimesh_shape(
            dispatcher, pos12, mesh1, shape2, prediction, manifolds, false,
        ),
        (None, Some(mesh2)) => contact_manifolds_trimesh_shape(
            dispatcher,
            &pos12.inverse(),
            mesh2,
            shape1,
            prediction,
            manifolds,
            true,
        ),
    }
}

/// Computes the contact manifolds between a triangle mesh and a convex shape.
///
/// `pos12` is the position of `shape2` relative to `mesh1`. If `flipped` is `true`, every
/// generated manifold is flipped so that its first side is `shape2`.
pub fn contact_manifolds_trimesh_shape(
    dispatcher: &ContactDispatcher,
    pos12: &Isometry<Real>,
    mesh1: &TriMesh,
    shape2: &CollisionShape,
    prediction: Real,
    manifolds: &mut Vec<ContactManifold>,
    flipped: bool,
) -> Result<(), Unsupported> {
    // Find the triangles close to the other shape, in the local-space of the mesh.
    let ls_aabb2 = shape2.compute_aabb(pos12).loosened(prediction.max(0.0));

    for tri_id in mesh1.triangles_intersecting_aabb(&ls_aabb2) {
        let triangle = CollisionShape::Triangle(mesh1.triangle(tri_id));
        let mut manifold = ContactManifold::new();
        dispatcher.contact_manifold_convex_convex(
            pos12,
            &triangle,
            shape2,
            prediction,
            &mut manifold,
        )?;

        if !manifold.points.is_empty() {
            manifold.subshape1 = Some(tri_id);

            if flipped {
                manifold.flip();
            }

            manifolds.push(manifold);
        }
    }

    Ok(())
}
