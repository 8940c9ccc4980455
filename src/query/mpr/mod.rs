//! The Minkowski Portal Refinement algorithm for penetration between convex shapes.

pub use self::cso_point::CSOPoint;
pub use self::mpr::{mpr_penetration, MprPenetration, MPR_MAX_ITERATIONS, MPR_TOLERANCE};

mod cso_point;
mod mpr;
