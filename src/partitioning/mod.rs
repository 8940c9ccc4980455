//! Spatial partitioning tools.

pub use self::uniform_grid::{UniformGrid, MAX_BINS_PER_AXIS};

mod uniform_grid;
