use crate::bounding_volume::BoundingVolume;
use crate::math::{Real, Vector};
use crate::partitioning::UniformGrid;
use crate::pipeline::{AabbGenerator, CollisionData, ShapeId};
use rayon::prelude::*;
use std::ops::Range;

/// A broad-phase based on a uniform grid.
///
/// Every shape of an active body is inserted into each grid bin its AABB overlaps. Then the
/// shapes sharing a bin are tested pairwise. A pair sharing several bins is reported once.
#[derive(Clone, Debug)]
pub struct BroadPhase {
    num_bins: Vector<u32>,
    fixed_bins: bool,
    grid_density: Real,
    grid: Option<UniformGrid>,
}

impl BroadPhase {
    /// A broad-phase with a fixed bin resolution.
    pub fn new(num_bins: Vector<u32>) -> Self {
        Self {
            num_bins,
            fixed_bins: true,
            grid_density: 5.0,
            grid: None,
        }
    }

    /// A broad-phase recomputing its bin resolution at each update to hold `grid_density`
    /// shapes per bin on average.
    pub fn with_density(grid_density: Real) -> Self {
        Self {
            fixed_bins: false,
            grid_density,
            ..Self::new(Vector::repeat(1))
        }
    }

    /// Sets the bin resolution and whether it is kept fixed.
    pub fn set_num_bins(&mut self, num_bins: Vector<u32>, fixed: bool) {
        self.num_bins = num_bins;
        self.fixed_bins = fixed;
    }

    /// Sets the target number of shapes per bin, used if the resolution is not fixed.
    pub fn set_grid_density(&mut self, density: Real) {
        self.grid_density = density;
    }

    /// The bin resolution used by the last update (or the configured one before the
    /// first update).
    pub fn num_bins(&self) -> Vector<u32> {
        self.num_bins
    }

    /// The grid built by the last update, if there were any active shape.
    pub fn grid(&self) -> Option<&UniformGrid> {
        self.grid.as_ref()
    }

    /// Computes the candidate pairs of `data`, sorted and without duplicates.
    ///
    /// Must be called after the AABBs and the active flags of `data` are up-to-date.
    pub fn update(&mut self, data: &mut CollisionData) {
        data.pairs.clear();
        data.bounding_box = AabbGenerator::active_bounding_box(data);

        let Some(bounds) = data.bounding_box else {
            self.grid = None;
            return;
        };

        let active_shapes: Vec<u32> = (0..data.shapes.len() as u32)
            .filter(|id| data.is_shape_active(ShapeId(*id)))
            .collect();

        if !self.fixed_bins {
            let num_bins =
                UniformGrid::resolution_for_density(&bounds, active_shapes.len(), self.grid_density);
            if num_bins != self.num_bins {
                log::debug!(
                    "Broad-phase grid resolution changed from {:?} to {:?}.",
                    self.num_bins.as_slice(),
                    num_bins.as_slice()
                );
                self.num_bins = num_bins;
            }
        }

        let grid = UniformGrid::new(bounds, self.num_bins);

        // (bin, shape) entries, grouped by bin after sorting.
        let mut entries: Vec<(u32, u32)> = active_shapes
            .par_iter()
            .flat_map_iter(|id| {
                grid.bins_intersecting_aabb(&data.aabbs[*id as usize])
                    .map(move |bin| (bin, *id))
            })
            .collect();
        entries.par_sort_unstable();

        let bins = bin_ranges(&entries);
        let shared: &CollisionData = data;

        let mut pairs: Vec<(ShapeId, ShapeId)> = bins
            .par_iter()
            .flat_map_iter(|range| {
                let bin = &entries[range.clone()];
                let mut pairs = Vec::new();

                for (i, (_, id1)) in bin.iter().enumerate() {
                    for (_, id2) in &bin[i + 1..] {
                        let (id1, id2) = (ShapeId(*id1), ShapeId(*id2));
                        if shared.aabbs[id1.index()].intersects(&shared.aabbs[id2.index()])
                            && shared.are_compatible(id1, id2)
                        {
                            pairs.push((id1, id2));
                        }
                    }
                }

                pairs
            })
            .collect();

        pairs.par_sort_unstable();
        pairs.dedup();

        data.pairs = pairs;
        self.grid = Some(grid);
    }
}

/// The ranges of `entries` sharing the same bin, restricted to bins with at least two shapes.
fn bin_ranges(entries: &[(u32, u32)]) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut start = 0;

    for i in 1..=entries.len() {
        if i == entries.len() || entries[i].0 != entries[start].0 {
            if i - start > 1 {
                ranges.push(start..i);
            }
            start = i;
        }
    }

    ranges
}
