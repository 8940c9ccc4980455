use crate::math::{Point, Real, Vector};

/// The index of the point of `points` with the greatest projection on `dir`.
///
/// The first one wins on ties. `None` if `points` is empty.
pub fn point_cloud_support_point_id(dir: &Vector<Real>, points: &[Point<Real>]) -> Option<usize> {
    points
        .iter()
        .map(|pt| pt.coords.dot(dir))
        .enumerate()
        .fold(None, |best: Option<(usize, Real)>, (i, dot)| match best {
            Some((_, best_dot)) if best_dot >= dot => best,
            _ => Some((i, dot)),
        })
        .map(|(i, _)| i)
}
