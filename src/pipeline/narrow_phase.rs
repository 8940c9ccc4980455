use crate::math::Real;
use crate::pipeline::{CollisionData, ContactManifold, ShapeId};
use crate::query::{self, ContactDispatcher, NarrowPhaseAlgorithm, Unsupported};
use rayon::prelude::*;

/// Computes the contact manifolds of every candidate pair.
#[derive(Clone, Debug, Default)]
pub struct NarrowPhase {
    dispatcher: ContactDispatcher,
}

impl NarrowPhase {
    /// A narrow-phase selecting its contact routines with the given policy.
    pub fn new(algorithm: NarrowPhaseAlgorithm) -> Self {
        Self {
            dispatcher: ContactDispatcher::new(algorithm),
        }
    }

    /// The contact routine selection policy.
    pub fn algorithm(&self) -> NarrowPhaseAlgorithm {
        self.dispatcher.algorithm()
    }

    /// Changes the contact routine selection policy.
    pub fn set_algorithm(&mut self, algorithm: NarrowPhaseAlgorithm) {
        if algorithm != self.dispatcher.algorithm() {
            self.dispatcher = ContactDispatcher::new(algorithm);
        }
    }

    /// The dispatcher selecting the contact routine of each pair.
    pub fn dispatcher(&self) -> &ContactDispatcher {
        &self.dispatcher
    }

    /// Replaces the contacts of `data` by the contacts between its candidate pairs.
    ///
    /// The pairs are processed in parallel, on the current rayon thread pool, and their
    /// results are concatenated in pair order. Pairs of unsupported shape types are skipped
    /// and counted.
    pub fn update(&self, data: &mut CollisionData) {
        let shared: &CollisionData = data;
        let results: Vec<Result<Vec<ContactManifold>, Unsupported>> = shared
            .pairs
            .par_iter()
            .map(|(id1, id2)| self.pair_contacts(shared, *id1, *id2))
            .collect();

        let mut contacts = Vec::with_capacity(results.len());
        let mut unsupported = 0;

        for (result, (id1, id2)) in results.into_iter().zip(shared.pairs.iter()) {
            match result {
                Ok(manifolds) => contacts.extend(manifolds),
                Err(Unsupported) => {
                    log::debug!(
                        "Skipping the unsupported pair of shapes {:?} ({:?}) and {:?} ({:?}).",
                        id1,
                        shared.descriptor(*id1).shape_type,
                        id2,
                        shared.descriptor(*id2).shape_type
                    );
                    unsupported += 1;
                }
            }
        }

        data.contacts = contacts;
        data.unsupported_pairs = unsupported;
    }

    fn pair_contacts(
        &self,
        data: &CollisionData,
        id1: ShapeId,
        id2: ShapeId,
    ) -> Result<Vec<ContactManifold>, Unsupported> {
        let desc1 = data.descriptor(id1);
        let desc2 = data.descriptor(id2);
        let pos1 = &data.positions[id1.index()];
        let pos2 = &data.positions[id2.index()];
        let pos12 = pos1.inv_mul(pos2);
        let prediction: Real = desc1.margin.max(desc2.margin);

        let mut local_manifolds: Vec<query::ContactManifold> = Vec::new();
        self.dispatcher.contact_manifolds(
            &pos12,
            data.shape(id1),
            data.shape(id2),
            prediction,
            &mut local_manifolds,
        )?;

        let bodies = [
            data.bodies[desc1.body].handle,
            data.bodies[desc2.body].handle,
        ];

        Ok(local_manifolds
            .iter()
            .map(|local| ContactManifold::from_local([id1, id2], bodies, pos1, pos2, local))
            .collect())
    }
}
