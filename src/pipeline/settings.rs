use crate::bounding_volume::Aabb;
use crate::math::{Real, Vector};
use crate::partitioning::MAX_BINS_PER_AXIS;
use crate::query::NarrowPhaseAlgorithm;

/// Error returned when a collision configuration is rejected.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The envelope is negative or not finite.
    #[error("invalid collision envelope {0}: it must be finite and non-negative")]
    InvalidEnvelope(Real),
    /// One of the broad-phase bin counts is zero.
    #[error("invalid broad-phase bin count {0:?}: every component must be at least 1")]
    ZeroBinCount([u32; 3]),
    /// One of the broad-phase bin counts exceeds [`MAX_BINS_PER_AXIS`].
    #[error("invalid broad-phase bin count {0:?}: at most {max} bins per axis", max = MAX_BINS_PER_AXIS)]
    TooManyBins([u32; 3]),
    /// The broad-phase grid density is not positive.
    #[error("invalid broad-phase grid density {0}: it must be finite and positive")]
    InvalidGridDensity(Real),
    /// The active box is inverted or has a non-finite coordinate.
    #[error("invalid active box: its min corner must be finite and below its max corner")]
    InvalidActiveBox,
    /// The thread count is zero.
    #[error("the collision thread count must be at least 1")]
    ZeroThreads,
    /// The worker thread pool could not be created.
    #[error("could not build the collision thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Parameters of the collision detection pipeline.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CollisionSettings {
    /// The global envelope inflating every shape, for both the AABBs and the contact
    /// prediction distance (default: `0.0`).
    pub envelope: Real,
    /// The number of broad-phase bins along each axis (default: `10 × 10 × 10`).
    pub num_bins: Vector<u32>,
    /// If `false`, the number of bins is recomputed at each step from
    /// [`Self::grid_density`] (default: `true`).
    pub fixed_bins: bool,
    /// The target average number of shapes per broad-phase bin (default: `5.0`).
    pub grid_density: Real,
    /// The contact routine selection policy (default: [`NarrowPhaseAlgorithm::Hybrid`]).
    pub narrowphase_algorithm: NarrowPhaseAlgorithm,
    /// If set, bodies whose AABB leaves this box are frozen (default: `None`).
    pub active_box: Option<Aabb>,
    /// The number of worker threads (default: the available parallelism).
    pub num_threads: usize,
}

impl Default for CollisionSettings {
    fn default() -> Self {
        Self {
            envelope: 0.0,
            num_bins: Vector::repeat(10),
            fixed_bins: true,
            grid_density: 5.0,
            narrowphase_algorithm: NarrowPhaseAlgorithm::Hybrid,
            active_box: None,
            num_threads: default_num_threads(),
        }
    }
}

/// The number of threads used by default.
pub fn default_num_threads() -> usize {
    std::thread::available_parallelism().map_or(1, |n| n.get())
}

impl CollisionSettings {
    /// Checks that every parameter is within its valid range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_envelope(self.envelope)?;
        validate_num_bins(&self.num_bins)?;
        validate_grid_density(self.grid_density)?;
        if let Some(active_box) = &self.active_box {
            validate_active_box(active_box)?;
        }
        validate_num_threads(self.num_threads)
    }
}

pub(crate) fn validate_envelope(envelope: Real) -> Result<(), ConfigError> {
    if envelope.is_finite() && envelope >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidEnvelope(envelope))
    }
}

pub(crate) fn validate_num_bins(num_bins: &Vector<u32>) -> Result<(), ConfigError> {
    if num_bins.iter().any(|n| *n == 0) {
        Err(ConfigError::ZeroBinCount((*num_bins).into()))
    } else if num_bins.iter().any(|n| *n > MAX_BINS_PER_AXIS) {
        Err(ConfigError::TooManyBins((*num_bins).into()))
    } else {
        Ok(())
    }
}

pub(crate) fn validate_grid_density(density: Real) -> Result<(), ConfigError> {
    if density.is_finite() && density > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidGridDensity(density))
    }
}

pub(crate) fn validate_active_box(aabb: &Aabb) -> Result<(), ConfigError> {
    let finite = aabb.mins.iter().chain(aabb.maxs.iter()).all(|x| x.is_finite());
    if finite && aabb.is_valid() {
        Ok(())
    } else {
        Err(ConfigError::InvalidActiveBox)
    }
}

pub(crate) fn validate_num_threads(num_threads: usize) -> Result<(), ConfigError> {
    if num_threads > 0 {
        Ok(())
    } else {
        Err(ConfigError::ZeroThreads)
    }
}
