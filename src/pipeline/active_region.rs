use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::pipeline::{BodyHandle, CollisionData};

/// Freezes the bodies leaving the active region.
///
/// A frozen body is excluded from the broad-phase and the narrow-phase until it is
/// explicitly reactivated. Coming back into the active region does not reactivate it.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ActiveRegionFilter {
    region: Option<Aabb>,
}

impl ActiveRegionFilter {
    /// A filter freezing the bodies leaving `region`, or a disabled filter if `region` is `None`.
    pub fn new(region: Option<Aabb>) -> Self {
        Self { region }
    }

    /// The active region, if this filter is enabled.
    pub fn region(&self) -> Option<&Aabb> {
        self.region.as_ref()
    }

    /// Is this filter enabled?
    pub fn is_enabled(&self) -> bool {
        self.region.is_some()
    }

    /// Freezes every active body whose AABB does not intersect the active region.
    ///
    /// Returns the number of bodies frozen by this call.
    pub fn apply(&self, data: &mut CollisionData) -> usize {
        let Some(region) = &self.region else {
            return 0;
        };

        let mut num_frozen = 0;

        for i in 0..data.bodies.len() {
            let body = &data.bodies[i];
            if body.active && body.aabb.is_valid() && !body.aabb.intersects(region) {
                log::debug!(
                    "Body {:?} left the active region {:?}; freezing it.",
                    body.handle,
                    region
                );
                data.freeze_body(i);
                num_frozen += 1;
            }
        }

        num_frozen
    }

    /// The bodies whose AABB is fully contained in `aabb`.
    ///
    /// Frozen bodies are included since their AABB is still computed at each step.
    pub fn overlapping_aabb(data: &CollisionData, aabb: &Aabb) -> Vec<BodyHandle> {
        data.bodies
            .iter()
            .filter(|body| body.aabb.is_valid() && aabb.contains(&body.aabb))
            .map(|body| body.handle)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::ActiveRegionFilter;
    use crate::bounding_volume::Aabb;
    use crate::math::{Isometry, Point};
    use crate::pipeline::{AabbGenerator, BodyHandle, BodyState, CollisionData, CollisionModel};
    use crate::shape::CollisionShape;
    use std::collections::HashMap;

    #[test]
    fn bodies_outside_the_region_are_frozen() {
        let mut data = CollisionData::new();
        let mut bodies = HashMap::new();

        for (i, x) in [0.0, 10.0].into_iter().enumerate() {
            let handle = BodyHandle(i as u64);
            let _ = data.insert_model(
                CollisionModel::new(handle)
                    .with_shape(CollisionShape::ball(1.0).unwrap(), Isometry::identity()),
            );
            let _ = bodies.insert(handle, BodyState::new(Isometry::translation(x, 0.0, 0.0)));
        }

        data.synchronize(&bodies, 0.0);
        AabbGenerator::new().generate(&mut data);

        let region = Aabb::new(Point::new(-5.0, -5.0, -5.0), Point::new(5.0, 5.0, 5.0));
        let filter = ActiveRegionFilter::new(Some(region));
        assert_eq!(filter.apply(&mut data), 1);
        assert!(data.bodies()[0].active);
        assert!(!data.bodies()[1].active);
        assert!(data.is_body_frozen(BodyHandle(1)));

        // Already frozen.
        assert_eq!(filter.apply(&mut data), 0);

        let contained = ActiveRegionFilter::overlapping_aabb(&data, &region);
        assert_eq!(contained, vec![BodyHandle(0)]);

        let everything = Aabb::new(Point::new(-20.0, -5.0, -5.0), Point::new(20.0, 5.0, 5.0));
        let contained = ActiveRegionFilter::overlapping_aabb(&data, &everything);
        assert_eq!(contained, vec![BodyHandle(0), BodyHandle(1)]);
    }

    #[test]
    fn disabled_filter_does_nothing() {
        let mut data = CollisionData::new();
        let filter = ActiveRegionFilter::new(None);
        assert!(!filter.is_enabled());
        assert_eq!(filter.apply(&mut data), 0);
    }
}
