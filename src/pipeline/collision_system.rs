use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::pipeline::settings::{
    validate_active_box, validate_envelope, validate_grid_density, validate_num_bins,
    validate_num_threads,
};
use crate::pipeline::{
    AabbGenerator, ActiveRegionFilter, BodyHandle, BodySet, BroadPhase, CollisionData,
    CollisionModel, CollisionSettings, ConfigError, ContactContainer, ContactInfo,
    ContactManifold, ModelHandle, NarrowPhase, ShapeId,
};
use crate::query::{NarrowPhaseAlgorithm, Ray, RayIntersection};
use crate::utils::Timer;
use rayon::{ThreadPool, ThreadPoolBuilder};

/// The multicore collision detection system.
///
/// Each call to [`CollisionSystem::run`] executes, in order and with a full barrier
/// between each stage:
/// 1. the synchronization of the body states into the [`CollisionData`] store,
/// 2. the AABB generation,
/// 3. the active-region filtering,
/// 4. the broad-phase,
/// 5. the narrow-phase.
///
/// The results can then be pushed to a [`ContactContainer`] with
/// [`CollisionSystem::report_contacts`].
pub struct CollisionSystem {
    settings: CollisionSettings,
    pool: ThreadPool,
    data: CollisionData,
    aabb_generator: AabbGenerator,
    active_region: ActiveRegionFilter,
    broad_phase: BroadPhase,
    narrow_phase: NarrowPhase,
    timer_broad: Timer,
    timer_narrow: Timer,
}

fn build_pool(num_threads: usize) -> Result<ThreadPool, ConfigError> {
    validate_num_threads(num_threads)?;
    Ok(ThreadPoolBuilder::new().num_threads(num_threads).build()?)
}

fn rejected(err: &ConfigError) {
    log::warn!("Rejected collision configuration: {}", err);
}

impl CollisionSystem {
    /// A collision system with the default settings.
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_settings(CollisionSettings::default())
    }

    /// A collision system with the given settings.
    pub fn with_settings(settings: CollisionSettings) -> Result<Self, ConfigError> {
        settings.validate().inspect_err(rejected)?;
        let pool = build_pool(settings.num_threads).inspect_err(rejected)?;

        let mut broad_phase = BroadPhase::new(settings.num_bins);
        broad_phase.set_num_bins(settings.num_bins, settings.fixed_bins);
        broad_phase.set_grid_density(settings.grid_density);

        Ok(Self {
            settings,
            pool,
            data: CollisionData::new(),
            aabb_generator: AabbGenerator::new(),
            active_region: ActiveRegionFilter::new(settings.active_box),
            broad_phase,
            narrow_phase: NarrowPhase::new(settings.narrowphase_algorithm),
            timer_broad: Timer::new(),
            timer_narrow: Timer::new(),
        })
    }

    /// The current settings.
    pub fn settings(&self) -> &CollisionSettings {
        &self.settings
    }

    /// The collision data store.
    pub fn data(&self) -> &CollisionData {
        &self.data
    }

    /// Sets the global envelope.
    pub fn set_envelope(&mut self, envelope: Real) -> Result<(), ConfigError> {
        validate_envelope(envelope).inspect_err(rejected)?;
        self.settings.envelope = envelope;
        Ok(())
    }

    /// Sets the number of broad-phase bins, and whether it is kept fixed.
    ///
    /// If `fixed` is `false`, the number of bins is recomputed at each step from the grid
    /// density, starting from `num_bins`.
    pub fn set_broadphase_num_bins(
        &mut self,
        num_bins: Vector<u32>,
        fixed: bool,
    ) -> Result<(), ConfigError> {
        validate_num_bins(&num_bins).inspect_err(rejected)?;
        self.settings.num_bins = num_bins;
        self.settings.fixed_bins = fixed;
        self.broad_phase.set_num_bins(num_bins, fixed);
        Ok(())
    }

    /// Sets the target average number of shapes per broad-phase bin.
    pub fn set_broadphase_grid_density(&mut self, density: Real) -> Result<(), ConfigError> {
        validate_grid_density(density).inspect_err(rejected)?;
        self.settings.grid_density = density;
        self.broad_phase.set_grid_density(density);
        Ok(())
    }

    /// Sets the contact routine selection policy.
    pub fn set_narrowphase_algorithm(&mut self, algorithm: NarrowPhaseAlgorithm) {
        self.settings.narrowphase_algorithm = algorithm;
        self.narrow_phase.set_algorithm(algorithm);
    }

    /// Enables the freezing of the bodies whose AABB leaves the box `[mins, maxs]`.
    pub fn enable_active_bounding_box(
        &mut self,
        mins: Point<Real>,
        maxs: Point<Real>,
    ) -> Result<(), ConfigError> {
        let aabb = Aabb::new(mins, maxs);
        validate_active_box(&aabb).inspect_err(rejected)?;
        self.settings.active_box = Some(aabb);
        self.active_region = ActiveRegionFilter::new(Some(aabb));
        Ok(())
    }

    /// Disables the active bounding box. Bodies frozen so far stay frozen.
    pub fn disable_active_bounding_box(&mut self) {
        self.settings.active_box = None;
        self.active_region = ActiveRegionFilter::new(None);
    }

    /// The active bounding box, if it is enabled.
    pub fn active_bounding_box(&self) -> Option<&Aabb> {
        self.active_region.region()
    }

    /// Sets the number of worker threads, rebuilding the thread pool.
    pub fn set_num_threads(&mut self, num_threads: usize) -> Result<(), ConfigError> {
        if num_threads == self.settings.num_threads {
            return Ok(());
        }

        self.pool = build_pool(num_threads).inspect_err(rejected)?;
        log::debug!(
            "Collision thread pool rebuilt with {} threads (was {}).",
            num_threads,
            self.settings.num_threads
        );
        self.settings.num_threads = num_threads;
        Ok(())
    }

    /// The number of worker threads.
    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Adds a collision model.
    pub fn add(&mut self, model: CollisionModel) -> ModelHandle {
        self.data.insert_model(model)
    }

    /// Removes a collision model.
    ///
    /// Returns `None` if `handle` does not refer to a model of this system.
    pub fn remove(&mut self, handle: ModelHandle) -> Option<CollisionModel> {
        self.data.remove_model(handle)
    }

    /// Removes all the collision models, and all the data computed so far.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The collision model with the given handle.
    pub fn model(&self, handle: ModelHandle) -> Option<&CollisionModel> {
        self.data.model(handle)
    }

    /// Reads the state of the bodies and copies the collision models into the store.
    ///
    /// # Panics
    /// If a collision model refers to a body unknown to `bodies`.
    pub fn synchronize(&mut self, bodies: &dyn BodySet) {
        self.data.synchronize(bodies, self.settings.envelope);
    }

    /// Runs the whole collision detection pipeline.
    ///
    /// # Panics
    /// If a collision model refers to a body unknown to `bodies`.
    pub fn run(&mut self, bodies: &dyn BodySet) {
        self.synchronize(bodies);

        let Self {
            pool,
            data,
            aabb_generator,
            active_region,
            broad_phase,
            narrow_phase,
            timer_broad,
            timer_narrow,
            ..
        } = self;

        let num_frozen = pool.install(|| {
            aabb_generator.generate(data);
            let num_frozen = active_region.apply(data);

            timer_broad.start();
            broad_phase.update(data);
            timer_broad.stop();

            timer_narrow.start();
            narrow_phase.update(data);
            timer_narrow.stop();

            num_frozen
        });

        if num_frozen > 0 || self.data.unsupported_pairs > 0 {
            log::debug!(
                "Collision step: {} bodies frozen, {} unsupported candidate pairs skipped.",
                num_frozen,
                self.data.unsupported_pairs
            );
        }
    }

    /// Pushes the contacts of the last run to `container`, one contact point at a time.
    pub fn report_contacts(&self, container: &mut dyn ContactContainer) {
        container.begin_add_contact();

        for manifold in &self.data.contacts {
            let models = [
                self.data.descriptor(manifold.shape1).model,
                self.data.descriptor(manifold.shape2).model,
            ];

            for point in &manifold.points {
                container.add_contact(&ContactInfo::new(models, manifold, point));
            }
        }

        container.end_add_contact();
    }

    /// Proximity pairs are not tracked by this system: this does nothing.
    pub fn report_proximities(&self) {}

    /// Resets the broad-phase and narrow-phase timers.
    pub fn reset_timers(&mut self) {
        self.timer_broad.reset();
        self.timer_narrow.reset();
    }

    /// The time spent in the broad-phase since the last timer reset, in seconds.
    pub fn timer_collision_broad(&self) -> Real {
        self.timer_broad.seconds()
    }

    /// The time spent in the narrow-phase since the last timer reset, in seconds.
    pub fn timer_collision_narrow(&self) -> Real {
        self.timer_narrow.seconds()
    }

    /// The AABB enclosing all the shapes of active bodies, computed by the last run.
    pub fn bounding_box(&self) -> Option<Aabb> {
        self.data.bounding_box
    }

    /// The bodies whose AABB is fully contained in the box `[mins, maxs]`.
    pub fn overlapping_aabb(&self, mins: Point<Real>, maxs: Point<Real>) -> Vec<BodyHandle> {
        ActiveRegionFilter::overlapping_aabb(&self.data, &Aabb::new(mins, maxs))
    }

    /// The candidate pairs emitted by the last broad-phase.
    pub fn overlapping_pairs(&self) -> &[(ShapeId, ShapeId)] {
        self.data.pairs()
    }

    /// The contact manifolds computed by the last run.
    pub fn contacts(&self) -> &[ContactManifold] {
        self.data.contacts()
    }

    /// The total number of contact points computed by the last run.
    pub fn num_contacts(&self) -> usize {
        self.data.contacts.iter().map(|m| m.points.len()).sum()
    }

    /// Unfreezes a body frozen by the active-region filter.
    ///
    /// Returns `false` if this body was not frozen.
    pub fn reactivate_body(&mut self, handle: BodyHandle) -> bool {
        self.data.unfreeze_body(handle)
    }

    /// Unfreezes all the bodies frozen by the active-region filter.
    pub fn reactivate_all(&mut self) {
        self.data.unfreeze_all();
    }

    /// Did this body take part in the collision detection of the last synchronization?
    ///
    /// A body is inactive if it is frozen, if its state disables collisions, or if no
    /// collision model refers to it.
    pub fn is_body_active(&self, handle: BodyHandle) -> bool {
        self.data.body(handle).is_some_and(|body| body.active)
    }

    /// The broad-phase grid resolution used by the last run.
    pub fn num_bins(&self) -> Vector<u32> {
        self.broad_phase.num_bins()
    }

    /// The number of candidate pairs skipped by the last run because no contact routine
    /// supports their shape types.
    pub fn unsupported_pair_count(&self) -> usize {
        self.data.unsupported_pairs
    }

    /// Casts a ray against all the collision models.
    ///
    /// Ray casting is not supported by this system: this always returns `None`.
    pub fn ray_hit(
        &self,
        _ray: &Ray,
        _max_time_of_impact: Real,
    ) -> Option<(ModelHandle, RayIntersection)> {
        None
    }

    /// Casts a ray against a single collision model.
    ///
    /// Ray casting is not supported by this system: this always returns `None`.
    pub fn ray_hit_model(
        &self,
        _model: ModelHandle,
        _ray: &Ray,
        _max_time_of_impact: Real,
    ) -> Option<RayIntersection> {
        None
    }
}
