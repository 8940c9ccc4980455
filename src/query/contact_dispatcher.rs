use crate::math::{Isometry, Real};
use crate::query::contact_manifolds::*;
use crate::query::Unsupported;
use crate::shape::{CollisionShape, ShapeType};

/// The policy used to select the contact algorithm of a pair of shapes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum NarrowPhaseAlgorithm {
    /// Use a closed-form routine when one exists for the pair of shape types, and fall back
    /// to the general convex algorithm otherwise.
    #[default]
    Hybrid,
    /// Always use the general convex algorithm, even if a closed-form routine exists.
    AlwaysGeneral,
}

/// A function computing the contact manifold between two convex shapes.
///
/// Its arguments are the position of the second shape relative to the first one, the two
/// shapes, the prediction distance, and the manifold to fill.
pub type ContactManifoldFn =
    fn(&Isometry<Real>, &CollisionShape, &CollisionShape, Real, &mut ContactManifold);

/// The routine selected for a pair of shape types.
#[derive(Copy, Clone, Debug)]
pub enum ContactRoutine {
    /// A closed-form routine dedicated to this pair of shape types.
    Analytic(ContactManifoldFn),
    /// The general MPR routine for convex shapes.
    General,
    /// Per-triangle contacts between a triangle mesh and a convex shape.
    TriMesh,
    /// No routine handles this pair.
    Unsupported,
}

const NUM_TYPES: usize = ShapeType::COUNT;

/// The closed-form routines, indexed by the discriminants of the two shape types.
const ANALYTIC_ROUTINES: [[Option<ContactManifoldFn>; NUM_TYPES]; NUM_TYPES] = {
    const BALL: usize = ShapeType::Ball as usize;
    const CUBOID: usize = ShapeType::Cuboid as usize;
    const CAPSULE: usize = ShapeType::Capsule as usize;
    const TRIANGLE: usize = ShapeType::Triangle as usize;

    let mut table: [[Option<ContactManifoldFn>; NUM_TYPES]; NUM_TYPES] =
        [[None; NUM_TYPES]; NUM_TYPES];
    table[BALL][BALL] = Some(contact_manifold_ball_ball_shapes as ContactManifoldFn);
    table[BALL][CUBOID] = Some(contact_manifold_convex_ball_shapes as ContactManifoldFn);
    table[CUBOID][BALL] = Some(contact_manifold_convex_ball_shapes as ContactManifoldFn);
    table[BALL][CAPSULE] = Some(contact_manifold_convex_ball_shapes as ContactManifoldFn);
    table[CAPSULE][BALL] = Some(contact_manifold_convex_ball_shapes as ContactManifoldFn);
    table[BALL][TRIANGLE] = Some(contact_manifold_convex_ball_shapes as ContactManifoldFn);
    table[TRIANGLE][BALL] = Some(contact_manifold_convex_ball_shapes as ContactManifoldFn);
    table[CAPSULE][CAPSULE] = Some(contact_manifold_capsule_capsule_shapes as ContactManifoldFn);
    table[CUBOID][CUBOID] = Some(contact_manifold_cuboid_cuboid_shapes as ContactManifoldFn);
    table
};

/// Selects and runs the contact routine of each pair of shapes.
///
/// The routine of every pair of shape types is resolved once, when the dispatcher is
/// created:
/// - a closed-form routine if the algorithm is [`NarrowPhaseAlgorithm::Hybrid`] and one
///   exists for the pair;
/// - otherwise the general MPR routine if both shapes are convex;
/// - otherwise the per-triangle routine if exactly one shape is a triangle mesh;
/// - otherwise the pair is unsupported.
#[derive(Clone, Debug)]
pub struct ContactDispatcher {
    algorithm: NarrowPhaseAlgorithm,
    routines: [[ContactRoutine; NUM_TYPES]; NUM_TYPES],
}

impl Default for ContactDispatcher {
    fn default() -> Self {
        Self::new(NarrowPhaseAlgorithm::default())
    }
}

impl ContactDispatcher {
    /// Builds the dispatch table for the given algorithm.
    pub fn new(algorithm: NarrowPhaseAlgorithm) -> Self {
        let mut routines = [[ContactRoutine::Unsupported; NUM_TYPES]; NUM_TYPES];

        for t1 in ShapeType::ALL {
            for t2 in ShapeType::ALL {
                routines[t1 as usize][t2 as usize] = Self::resolve(algorithm, t1, t2);
            }
        }

        Self {
            algorithm,
            routines,
        }
    }

    fn resolve(algorithm: NarrowPhaseAlgorithm, t1: ShapeType, t2: ShapeType) -> ContactRoutine {
        if algorithm == NarrowPhaseAlgorithm::Hybrid {
            if let Some(f) = ANALYTIC_ROUTINES[t1 as usize][t2 as usize] {
                return ContactRoutine::Analytic(f);
            }
        }

        match (t1.is_support_map(), t2.is_support_map()) {
            (true, true) => ContactRoutine::General,
            (true, false) | (false, true) => ContactRoutine::TriMesh,
            (false, false) => ContactRoutine::Unsupported,
        }
    }

    /// The algorithm this dispatcher was built for.
    pub fn algorithm(&self) -> NarrowPhaseAlgorithm {
        self.algorithm
    }

    /// The routine selected for the given pair of shape types.
    #[inline]
    pub fn routine(&self, t1: ShapeType, t2: ShapeType) -> ContactRoutine {
        self.routines[t1 as usize][t2 as usize]
    }

    /// Computes the contact manifold between two convex shapes.
    ///
    /// `pos12` is the position of `shape2` relative to `shape1`.
    pub fn contact_manifold_convex_convex(
        &self,
        pos12: &Isometry<Real>,
        shape1: &CollisionShape,
        shape2: &CollisionShape,
        prediction: Real,
        manifold: &mut ContactManifold,
    ) -> Result<(), Unsupported> {
        match self.routine(shape1.shape_type(), shape2.shape_type()) {
            ContactRoutine::Analytic(f) => f(pos12, shape1, shape2, prediction, manifold),
            ContactRoutine::General => contact_manifold_support_map_support_map_shapes(
                pos12, shape1, shape2, prediction, manifold,
            ),
            ContactRoutine::TriMesh | ContactRoutine::Unsupported => return Err(Unsupported),
        }

        Ok(())
    }

    /// Computes all the contact manifolds between two shapes.
    ///
    /// `pos12` is the position of `shape2` relative to `shape1`. Non-empty manifolds are
    /// appended to `manifolds`.
    pub fn contact_manifolds(
        &self,
        pos12: &Isometry<Real>,
        shape1: &CollisionShape,
        shape2: &CollisionShape,
        prediction: Real,
        manifolds: &mut Vec<ContactManifold>,
    ) -> Result<(), Unsupported> {
        match self.routine(shape1.shape_type(), shape2.shape_type()) {
            ContactRoutine::TriMesh => contact_manifolds_trimesh_shape_shapes(
                self, pos12, shape1, shape2, prediction, manifolds,
            ),
            ContactRoutine::Unsupported => Err(Unsupported),
            ContactRoutine::Analytic(_) | ContactRoutine::General => {
                let mut manifold = ContactManifold::new();
                self.contact_manifold_convex_convex(
                    pos12,
                    shape1,
                    shape2,
                    prediction,
                    &mut manifold,
                )?;

                if !manifold.points.is_empty() {
                    manifolds.push(manifold);
                }

                Ok(())
            }
        }
    }
}
