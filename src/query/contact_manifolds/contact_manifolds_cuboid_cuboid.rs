use crate::math::{Isometry, Point, Real, Vector, DIM};
use crate::query::clip::{clip_halfspace_polygon, ClippedPolygon, MAX_CLIPPED_POLYGON_VERTICES};
use crate::query::closest_points::closest_points_segment_segment_params;
use crate::query::{sat, ContactManifold, TrackedContact, MAX_MANIFOLD_POINTS};
use crate::shape::{CollisionShape, Cuboid};
use arrayvec::ArrayVec;

/// An edge-edge axis must beat the best face axis by this amount to be selected.
///
/// Edge cross products collinear with face normals otherwise win on round-off.
const EDGE_AXIS_BIAS: Real = 1.0e-6;

/// Computes the contact manifold between two cuboids given as `CollisionShape`s.
pub fn contact_manifold_cuboid_cuboid_shapes(
    pos12: &Isometry<Real>,
    shape1: &CollisionShape,
    shape2: &CollisionShape,
    prediction: Real,
    manifold: &mut ContactManifold,
) {
    if let (CollisionShape::Cuboid(cuboid1), CollisionShape::Cuboid(cuboid2)) = (shape1, shape2) {
        contact_manifold_cuboid_cuboid(pos12, cuboid1, cuboid2, prediction, manifold);
    }
}

/// Computes the contact manifold between two cuboids.
///
/// The separating axis theorem selects the reference feature. An edge-edge configuration
/// yields a single contact point; otherwise the incident face of one cuboid is clipped by the
/// side planes of the reference face of the other, and at most [`MAX_MANIFOLD_POINTS`] points
/// are kept.
pub fn contact_manifold_cuboid_cuboid(
    pos12: &Isometry<Real>,
    cuboid1: &Cuboid,
    cuboid2: &Cuboid,
    prediction: Real,
    manifold: &mut ContactManifold,
) {
    manifold.clear();

    let pos21 = pos12.inverse();

    /*
     *
     * Point-Face
     *
     */
    let sep1 = sat::cuboid_face_separation(cuboid1, cuboid2, pos12);
    if sep1.0 > prediction {
        return;
    }

    let sep2 = sat::cuboid_face_separation(cuboid2, cuboid1, &pos21);
    if sep2.0 > prediction {
        return;
    }

    /*
     *
     * Edge-Edge cases
     *
     */
    let sep3 = sat::cuboid_edge_separation(cuboid1, cuboid2, pos12);
    if sep3.0 > prediction {
        return;
    }

    /*
     *
     * Select the best combination of features.
     *
     */
    if sep3.0 > sep1.0.max(sep2.0) + EDGE_AXIS_BIAS {
        edge_edge_contact(pos12, cuboid1, cuboid2, &sep3.1, sep3.2, prediction, manifold);
    } else if sep2.0 > sep1.0 {
        face_contacts(&pos21, cuboid2, cuboid1, &sep2.1, prediction, manifold);
        manifold.flip();
    } else {
        face_contacts(pos12, cuboid1, cuboid2, &sep1.1, prediction, manifold);
    }
}

fn edge_edge_contact(
    pos12: &Isometry<Real>,
    cuboid1: &Cuboid,
    cuboid2: &Cuboid,
    local_n1: &Vector<Real>,
    [axis1, axis2]: [usize; 2],
    prediction: Real,
    manifold: &mut ContactManifold,
) {
    manifold.set_normal(pos12, *local_n1);

    let edge1 = cuboid1.local_support_edge_segment(axis1, local_n1);
    let edge2 = cuboid2.local_support_edge_segment(axis2, &manifold.local_n2);
    let edge2_1 = edge2.transformed(pos12);

    let (s, t) = closest_points_segment_segment_params(&edge1, &edge2_1);
    let local_p1 = edge1.point_at(s);
    let local_p2 = edge2.point_at(t);
    let dist = (pos12 * local_p2 - local_p1).dot(local_n1);

    if dist <= prediction {
        manifold
            .points
            .push(TrackedContact::new(local_p1, local_p2, dist));
    }
}

/// Generates the contacts between the face of `reference` with normal `local_n1` and the
/// incident face of `incident`, in the local-space of `reference`.
fn face_contacts(
    pos12: &Isometry<Real>,
    reference: &Cuboid,
    incident: &Cuboid,
    local_n1: &Vector<Real>,
    prediction: Real,
    manifold: &mut ContactManifold,
) {
    manifold.set_normal(pos12, *local_n1);

    let (ref_axis, ref_sign, _) = reference.local_support_face(local_n1);
    let (_, _, incident_face) = incident.local_support_face(&manifold.local_n2);

    let mut polygon: ClippedPolygon = incident_face.iter().map(|pt| pos12 * pt).collect();
    let mut clipped = ClippedPolygon::new();
    let he = reference.half_extents;

    for side_axis in (0..DIM).filter(|i| *i != ref_axis) {
        for side_sign in [1.0, -1.0] {
            let normal = Vector::ith(side_axis, side_sign);
            let center = Point::from(normal * he[side_axis]);
            clip_halfspace_polygon(&center, &normal, &polygon, &mut clipped);
            std::mem::swap(&mut polygon, &mut clipped);
        }
    }

    let mut candidates = ClippedPolygon::new();
    let mut dists = ArrayVec::<Real, MAX_CLIPPED_POLYGON_VERTICES>::new();

    for pt in &polygon {
        let dist = pt[ref_axis] * ref_sign - he[ref_axis];

        if dist <= prediction {
            let mut local_p1 = *pt;
            local_p1[ref_axis] = ref_sign * he[ref_axis];
            candidates.push(local_p1);
            dists.push(dist);
        }
    }

    for i in select_manifold_points(&candidates, &dists, local_n1) {
        let local_p2 = pos12.inverse_transform_point(&(candidates[i] + local_n1 * dists[i]));
        manifold
            .points
            .push(TrackedContact::new(candidates[i], local_p2, dists[i]));
    }
}

/// Selects at most [`MAX_MANIFOLD_POINTS`] points among coplanar contact points.
///
/// The deepest point is selected first, then the point farthest from it, then the point
/// forming the largest triangle with them, and finally the point extending this triangle the
/// most. Ties are resolved toward the smallest index.
fn select_manifold_points(
    points: &[Point<Real>],
    dists: &[Real],
    normal: &Vector<Real>,
) -> ArrayVec<usize, MAX_MANIFOLD_POINTS> {
    let mut selected = ArrayVec::new();

    if points.len() <= MAX_MANIFOLD_POINTS {
        selected.extend(0..points.len());
        return selected;
    }

    let argmax = |score: &dyn Fn(usize) -> Real| {
        let mut best = 0;
        let mut best_score = -Real::MAX;

        for i in 0..points.len() {
            let s = score(i);
            if s > best_score {
                best = i;
                best_score = s;
            }
        }

        (best, best_score)
    };

    let (i0, _) = argmax(&|i| -dists[i]);
    let p0 = points[i0];
    let (i1, _) = argmax(&|i| (points[i] - p0).norm_squared());
    let p1 = points[i1];
    let signed_area = |a: &Point<Real>, b: &Point<Real>, q: &Point<Real>| {
        (b - a).cross(&(q - a)).dot(normal)
    };
    let (i2, _) = argmax(&|i| signed_area(&p0, &p1, &points[i]).abs());
    let p2 = points[i2];

    selected.push(i0);
    if i1 != i0 {
        selected.push(i1);
    }
    if !selected.contains(&i2) {
        selected.push(i2);
    }

    if selected.len() == 3 {
        // A point outside of the triangle has a signed area of opposite sign to the triangle's
        // along at least one of its edges.
        let orientation = signed_area(&p0, &p1, &p2).signum();
        let (i3, score) = argmax(&|i| {
            if selected.contains(&i) {
                return -Real::MAX;
            }

            let q = &points[i];
            [
                signed_area(&p0, &p1, q),
                signed_area(&p1, &p2, q),
                signed_area(&p2, &p0, q),
            ]
            .iter()
            .map(|area| -orientation * area)
            .fold(-Real::MAX, Real::max)
        });

        if score > 0.0 {
            selected.push(i3);
        }
    }

    selected
}
