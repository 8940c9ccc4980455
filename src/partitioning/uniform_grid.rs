use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector, DIM};

/// The maximum number of bins along each axis of a [`UniformGrid`].
pub const MAX_BINS_PER_AXIS: u32 = 1024;

/// A uniform grid of axis-aligned bins covering a bounding box.
///
/// The bins are indexed linearly in x-major order: the bin at cell coordinates
/// `(i, j, k)` has index `i + nx * (j + ny * k)`. Points outside of the grid bounds
/// are clamped to the nearest boundary bin so every AABB maps to at least one bin.
#[derive(Clone, Debug, PartialEq)]
pub struct UniformGrid {
    bounds: Aabb,
    num_bins: Vector<u32>,
    bin_size: Vector<Real>,
    inv_bin_size: Vector<Real>,
}

impl UniformGrid {
    /// Creates a grid subdividing `bounds` into `num_bins` bins along each axis.
    ///
    /// Zero bin counts are raised to one.
    pub fn new(bounds: Aabb, num_bins: Vector<u32>) -> Self {
        let num_bins = num_bins.map(|n| n.clamp(1, MAX_BINS_PER_AXIS));
        let bin_size = bounds
            .extents()
            .zip_map(&num_bins, |extent, n| extent.max(0.0) / n as Real);
        let inv_bin_size = bin_size.map(|size| if size > 0.0 { 1.0 / size } else { 0.0 });

        Self {
            bounds,
            num_bins,
            bin_size,
            inv_bin_size,
        }
    }

    /// Computes the bin resolution holding `density` shapes per bin on average.
    ///
    /// `num_shapes` shapes are assumed to be spread over `bounds`. Axes along which
    /// `bounds` is flat get a single bin and the density is then distributed over the
    /// remaining axes.
    pub fn resolution_for_density(bounds: &Aabb, num_shapes: usize, density: Real) -> Vector<u32> {
        let extents = bounds.extents();
        let mut measure = 1.0;
        let mut dims = 0;

        for i in 0..DIM {
            if extents[i] > 0.0 {
                measure *= extents[i];
                dims += 1;
            }
        }

        if dims == 0 || num_shapes == 0 || density <= 0.0 {
            return Vector::repeat(1);
        }

        let bins_per_unit = (num_shapes as Real / (density * measure)).powf(1.0 / dims as Real);
        extents.map(|extent| {
            let n = (extent * bins_per_unit).round();
            if n.is_finite() {
                (n as u32).clamp(1, MAX_BINS_PER_AXIS)
            } else {
                1
            }
        })
    }

    /// The region covered by this grid.
    #[inline]
    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    /// The number of bins along each axis.
    #[inline]
    pub fn num_bins(&self) -> Vector<u32> {
        self.num_bins
    }

    /// The total number of bins of this grid.
    #[inline]
    pub fn total_bins(&self) -> usize {
        self.num_bins.iter().map(|n| *n as usize).product()
    }

    /// The size of one bin along each axis.
    #[inline]
    pub fn bin_size(&self) -> Vector<Real> {
        self.bin_size
    }

    /// The integer coordinates of the bin containing `pt`, clamped to the grid.
    pub fn cell_at_point(&self, pt: &Point<Real>) -> Point<u32> {
        let mut cell = Point::origin();

        for i in 0..DIM {
            let rel = (pt[i] - self.bounds.mins[i]) * self.inv_bin_size[i];
            // NaN and negative values saturate to zero.
            let coord = rel.floor().max(0.0) as u32;
            cell[i] = coord.min(self.num_bins[i] - 1);
        }

        cell
    }

    /// The linear index of the bin with the given cell coordinates.
    #[inline]
    pub fn bin_index(&self, cell: &Point<u32>) -> u32 {
        cell.x + self.num_bins.x * (cell.y + self.num_bins.y * cell.z)
    }

    /// The inclusive range of cell coordinates covered by `aabb`.
    pub fn cell_range(&self, aabb: &Aabb) -> (Point<u32>, Point<u32>) {
        (self.cell_at_point(&aabb.mins), self.cell_at_point(&aabb.maxs))
    }

    /// The linear indices of all the bins overlapping `aabb`.
    ///
    /// Overlap uses closed intervals: an AABB touching a bin boundary is inserted into
    /// the bins on both sides. Hence two intersecting AABBs always share at least one bin.
    pub fn bins_intersecting_aabb(&self, aabb: &Aabb) -> impl Iterator<Item = u32> + '_ {
        let (mins, maxs) = self.cell_range(aabb);

        (mins.z..=maxs.z).flat_map(move |k| {
            (mins.y..=maxs.y).flat_map(move |j| {
                (mins.x..=maxs.x).map(move |i| self.bin_index(&Point::new(i, j, k)))
            })
        })
    }
}
