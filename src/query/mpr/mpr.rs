use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::mpr::CSOPoint;
use crate::shape::{SupportMap, Triangle};
use na::Unit;

/// The portal is considered to have reached the boundary of the CSO once a support point
/// improves it by less than this distance.
pub const MPR_TOLERANCE: Real = 1.0e-6;
/// The maximum number of portal refinements performed while searching for the penetration.
pub const MPR_MAX_ITERATIONS: usize = 100;

/// The penetration between two intersecting convex shapes, as computed by [`mpr_penetration`].
///
/// Everything is expressed in the local-space of the first shape.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MprPenetration {
    /// The penetration depth, always non-negative.
    pub depth: Real,
    /// The penetration direction, pointing from the first shape toward the second one.
    pub normal: Unit<Vector<Real>>,
    /// The point of the first shape that is the deepest inside of the second shape.
    pub point1: Point<Real>,
    /// The point of the second shape that is the deepest inside of the first shape.
    pub point2: Point<Real>,
}

#[inline]
fn is_zero(val: Real) -> bool {
    val.abs() < DEFAULT_EPSILON
}

struct Portal {
    v0: CSOPoint,
    v1: CSOPoint,
    v2: CSOPoint,
    v3: CSOPoint,
}

impl Portal {
    fn dir(&self) -> Option<Unit<Vector<Real>>> {
        let v2v1 = self.v2 - self.v1;
        let v3v1 = self.v3 - self.v1;
        Unit::try_new(v2v1.cross(&v3v1), 0.0)
    }

    fn encapsules_origin(&self, dir: &Vector<Real>) -> bool {
        let dot = dir.dot(&self.v1.point.coords);
        is_zero(dot) || dot > 0.0
    }

    fn reach_tolerance(&self, v4: &CSOPoint, dir: &Vector<Real>) -> bool {
        let dv4 = v4.point.coords.dot(dir);
        let dot1 = dv4 - self.v1.point.coords.dot(dir);
        let dot2 = dv4 - self.v2.point.coords.dot(dir);
        let dot3 = dv4 - self.v3.point.coords.dot(dir);
        dot1.min(dot2).min(dot3) <= MPR_TOLERANCE
    }

    fn expand(&mut self, v4: CSOPoint) {
        let v4v0 = v4.point.coords.cross(&self.v0.point.coords);

        if self.v1.point.coords.dot(&v4v0) > 0.0 {
            if self.v2.point.coords.dot(&v4v0) > 0.0 {
                self.v1 = v4;
            } else {
                self.v3 = v4;
            }
        } else if self.v3.point.coords.dot(&v4v0) > 0.0 {
            self.v2 = v4;
        } else {
            self.v1 = v4;
        }
    }
}

enum Discovery {
    Separated,
    // The origin coincides with the first support point.
    Touching(CSOPoint, CSOPoint),
    // The origin lies on the segment between the interior point and the first support point.
    OnSegment(CSOPoint),
    Portal(Portal),
}

fn discover_portal<G1, G2>(pos12: &Isometry<Real>, g1: &G1, g2: &G2) -> Discovery
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let support = |dir: &Vector<Real>| CSOPoint::from_shapes(pos12, g1, g2, dir);

    let mut v0 = CSOPoint::from_centers(pos12, g1, g2);
    if is_zero(v0.point.coords.norm_squared()) {
        v0 = v0.translate(&Vector::new(DEFAULT_EPSILON * 10.0, 0.0, 0.0));
    }

    let dir = -v0.point.coords.normalize();
    let v1 = support(&dir);
    if v1.point.coords.dot(&dir) <= 0.0 || is_zero(v1.point.coords.dot(&dir)) {
        return Discovery::Separated;
    }

    let dir = v0.point.coords.cross(&v1.point.coords);
    if is_zero(dir.norm_squared()) {
        return if is_zero(v1.point.coords.norm_squared()) {
            Discovery::Touching(v0, v1)
        } else {
            Discovery::OnSegment(v1)
        };
    }

    let dir = dir.normalize();
    let mut v2 = support(&dir);
    if v2.point.coords.dot(&dir) <= 0.0 || is_zero(v2.point.coords.dot(&dir)) {
        return Discovery::Separated;
    }

    let mut v1 = v1;
    let mut dir = (v1 - v0).cross(&(v2 - v0)).normalize();

    // Orient the portal so that its faces point away from the origin.
    if dir.dot(&v0.point.coords) > 0.0 {
        std::mem::swap(&mut v1, &mut v2);
        dir = -dir;
    }

    loop {
        let v3 = support(&dir);
        let dot = v3.point.coords.dot(&dir);
        if dot <= 0.0 || is_zero(dot) {
            return Discovery::Separated;
        }

        let mut cont = false;

        // Is the origin outside of the triangle (v1, v0, v3)?
        let dot = v1.point.coords.cross(&v3.point.coords).dot(&v0.point.coords);
        if dot < 0.0 && !is_zero(dot) {
            v2 = v3;
            cont = true;
        }

        if !cont {
            // Is the origin outside of the triangle (v3, v0, v2)?
            let dot = v3.point.coords.cross(&v2.point.coords).dot(&v0.point.coords);
            if dot < 0.0 && !is_zero(dot) {
                v1 = v3;
                cont = true;
            }
        }

        if cont {
            match Unit::try_new((v1 - v0).cross(&(v2 - v0)), 0.0) {
                Some(new_dir) => dir = new_dir.into_inner(),
                None => return Discovery::Separated,
            }
        } else {
            return Discovery::Portal(Portal { v0, v1, v2, v3 });
        }
    }
}

/// Moves the portal toward the boundary of the CSO until it contains the origin.
///
/// Returns `false` if the origin is found to lie outside of the CSO.
fn refine_portal<G1, G2>(pos12: &Isometry<Real>, g1: &G1, g2: &G2, portal: &mut Portal) -> bool
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    for _ in 0..MPR_MAX_ITERATIONS {
        let Some(dir) = portal.dir() else {
            return false;
        };

        if portal.encapsules_origin(&dir) {
            return true;
        }

        let v4 = CSOPoint::from_shapes(pos12, g1, g2, &dir);
        let dot = v4.point.coords.dot(&dir);
        if !(is_zero(dot) || dot > 0.0) || portal.reach_tolerance(&v4, &dir) {
            return false;
        }

        portal.expand(v4);
    }

    log::debug!("MPR: portal refinement did not converge.");
    false
}

fn find_penetration<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    portal: &mut Portal,
) -> MprPenetration
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let mut niter = 0;

    loop {
        let dir = portal.dir();

        if let Some(dir) = dir {
            let v4 = CSOPoint::from_shapes(pos12, g1, g2, &dir);

            if !portal.reach_tolerance(&v4, &dir) && niter < MPR_MAX_ITERATIONS {
                portal.expand(v4);
                niter += 1;
                continue;
            }

            if niter == MPR_MAX_ITERATIONS {
                log::debug!("MPR: penetration search reached the iteration limit.");
            }
        }

        // Project the origin on the final portal.
        let tri = Triangle::new(portal.v1.point, portal.v2.point, portal.v3.point);
        let [u, v, w] = tri.project_local_point_barycentric(&Point::origin());
        let proj = portal.v1.point.coords * u + portal.v2.point.coords * v + portal.v3.point.coords * w;
        let point1 = Point::from(
            portal.v1.orig1.coords * u + portal.v2.orig1.coords * v + portal.v3.orig1.coords * w,
        );
        let point2 = Point::from(
            portal.v1.orig2.coords * u + portal.v2.orig2.coords * v + portal.v3.orig2.coords * w,
        );

        let (normal, depth) = match Unit::try_new_and_get(proj, DEFAULT_EPSILON) {
            Some((normal, depth)) => (normal, depth),
            None => (
                dir.or_else(|| Unit::try_new(-portal.v0.point.coords, 0.0))
                    .unwrap_or_else(Vector::y_axis),
                0.0,
            ),
        };

        return MprPenetration {
            depth,
            normal,
            point1,
            point2,
        };
    }
}

/// Computes the penetration between two convex shapes with the Minkowski Portal Refinement
/// algorithm.
///
/// `g2` is positioned relative to `g1` by `pos12` and the result is expressed in the
/// local-space of `g1`. Returns `None` if the shapes do not intersect. Shapes that are exactly
/// touching yield a zero depth.
///
/// The depth is measured along the direction joining the interior points of both shapes, so it
/// is an upper bound of the exact penetration depth.
pub fn mpr_penetration<G1, G2>(pos12: &Isometry<Real>, g1: &G1, g2: &G2) -> Option<MprPenetration>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    match discover_portal(pos12, g1, g2) {
        Discovery::Separated => None,
        Discovery::Touching(v0, v1) => {
            let normal = Unit::try_new(-v0.point.coords, 0.0).unwrap_or_else(Vector::y_axis);
            Some(MprPenetration {
                depth: 0.0,
                normal,
                point1: v1.orig1,
                point2: v1.orig2,
            })
        }
        Discovery::OnSegment(v1) => {
            let (normal, depth) = Unit::try_new_and_get(v1.point.coords, 0.0)?;
            Some(MprPenetration {
                depth,
                normal,
                point1: v1.orig1,
                point2: v1.orig2,
            })
        }
        Discovery::Portal(mut portal) => {
            if refine_portal(pos12, g1, g2, &mut portal) {
                Some(find_penetration(pos12, g1, g2, &mut portal))
            } else {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mpr_penetration;
    use crate::math::{Isometry, Point, Vector};
    use crate::shape::{Ball, Cuboid};

    #[test]
    fn ball_ball_penetration() {
        let ball = Ball::new(1.0);
        let pos12 = Isometry::translation(0.0, 0.0, 1.5);
        let pen = mpr_penetration(&pos12, &ball, &ball).unwrap();

        assert_relative_eq!(pen.depth, 0.5, epsilon = 1.0e-6);
        assert_relative_eq!(pen.normal.into_inner(), Vector::z(), epsilon = 1.0e-6);
        assert_relative_eq!(pen.point1, Point::new(0.0, 0.0, 1.0), epsilon = 1.0e-6);
        assert_relative_eq!(pen.point2, Point::new(0.0, 0.0, 0.5), epsilon = 1.0e-6);
    }

    #[test]
    fn separated_shapes() {
        let ball = Ball::new(1.0);
        let cuboid = Cuboid::new(Vector::repeat(1.0));
        let pos12 = Isometry::translation(2.5, 0.3, -0.2);
        assert!(mpr_penetration(&pos12, &ball, &cuboid).is_none());
    }

    #[test]
    fn offset_cuboids_penetration() {
        let cuboid = Cuboid::new(Vector::repeat(1.0));
        let pos12 = Isometry::translation(1.8, 0.1, 0.2);
        let pen = mpr_penetration(&pos12, &cuboid, &cuboid).unwrap();

        // The depth along the center line is an upper bound of the exact depth.
        assert!(pen.depth >= 0.2 - 1.0e-6);
        assert!(pen.normal.x > 0.9);
    }
}
