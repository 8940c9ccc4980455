use crate::math::{Point, Real, Vector};
use arrayvec::ArrayVec;

/// The maximum number of vertices of a polygon resulting from clipping a quad by the four
/// side planes of another quad.
pub const MAX_CLIPPED_POLYGON_VERTICES: usize = 8;

/// A polygon with a bounded number of vertices.
pub type ClippedPolygon = ArrayVec<Point<Real>, MAX_CLIPPED_POLYGON_VERTICES>;

/// Cuts a polygon with the given half-space.
///
/// Given the half-space `center` and outward `normal`,
/// this computes the intersecting between the half-space and
/// the polygon. (Note that a point `pt` is considered as inside of
/// the half-space if `normal.dot(&(pt - center)) <= 0.0`.
///
/// Vertices that would not fit into `result` are dropped.
pub fn clip_halfspace_polygon(
    center: &Point<Real>,
    normal: &Vector<Real>,
    polygon: &[Point<Real>],
    result: &mut ClippedPolygon,
) {
    result.clear();

    let Some(last_pt) = polygon.last() else {
        return;
    };

    let signed_dist = |pt: &Point<Real>| (pt - center).dot(normal);
    let mut last_dist = signed_dist(last_pt);
    let mut last_keep = last_dist <= 0.0;

    if last_keep {
        let _ = result.try_push(*last_pt);
    }

    for i in 0..polygon.len() {
        let pt = &polygon[i];
        let dist = signed_dist(pt);
        let keep = dist <= 0.0;

        if keep != last_keep {
            // We crossed the plane, so we need
            // to cut the edge.
            let prev_i = if i == 0 { polygon.len() - 1 } else { i - 1 };
            let prev_pt = &polygon[prev_i];
            let toi = last_dist / (last_dist - dist);

            if toi > 0.0 && toi < 1.0 {
                let _ = result.try_push(prev_pt + (pt - prev_pt) * toi);
            }

            last_keep = keep;
        }

        if keep && i != polygon.len() - 1 {
            let _ = result.try_push(*pt);
        }

        last_dist = dist;
    }
}

#[cfg(test)]
mod tests {
    use super::{clip_halfspace_polygon, ClippedPolygon};
    use crate::math::{Point, Vector};

    #[test]
    fn clip_square_in_half() {
        let square = [
            Point::new(-1.0, -1.0, 0.0),
            Point::new(1.0, -1.0, 0.0),
            Point::new(1.0, 1.0, 0.0),
            Point::new(-1.0, 1.0, 0.0),
        ];
        let mut result = ClippedPolygon::new();
        clip_halfspace_polygon(&Point::origin(), &Vector::x(), &square, &mut result);

        assert_eq!(result.len(), 4);
        assert!(result.iter().all(|pt| pt.x <= 0.0));
        assert!(result.contains(&Point::new(0.0, -1.0, 0.0)));
        assert!(result.contains(&Point::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn clip_everything_out() {
        let tri = [
            Point::new(1.0, 0.0, 0.0),
            Point::new(2.0, 0.0, 0.0),
            Point::new(2.0, 1.0, 0.0),
        ];
        let mut result = ClippedPolygon::new();
        clip_halfspace_polygon(&Point::origin(), &Vector::x(), &tri, &mut result);
        assert!(result.is_empty());
    }
}
