//! The layered grid cache.
//!
//! Each layer (kernel, neighbor costs, obstacles, heuristics) is set and
//! cleared on its own so that a caller can refresh, say, the obstacle layer
//! without re-uploading the others. All grid layers are validated against
//! the single [`GridSize`] recorded by the most recent cost upload.

use std::fmt;

use gridpath_core::{Coord, GridSize, Matrix};
use log::{debug, warn};

use crate::error::CacheError;
use crate::kernel::Kernel;
use crate::traits::{Heuristic, Pather};

/// Names one cache layer in errors and logs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Kernel,
    Costs,
    Obstacles,
    Heuristics,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Kernel => "kernel",
            Self::Costs => "costs",
            Self::Obstacles => "obstacles",
            Self::Heuristics => "heuristics",
        })
    }
}

/// Which layers are currently usable.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CacheStatus {
    pub kernel: bool,
    pub costs: bool,
    pub obstacles: bool,
    pub heuristics: bool,
}

impl CacheStatus {
    /// Whether every layer is present and consistent, i.e. the cache is
    /// searchable.
    #[inline]
    pub fn all(self) -> bool {
        self.kernel && self.costs && self.obstacles && self.heuristics
    }

    /// Layers that are not usable, in upload order.
    pub fn missing(self) -> Vec<Layer> {
        [
            (self.kernel, Layer::Kernel),
            (self.costs, Layer::Costs),
            (self.obstacles, Layer::Obstacles),
            (self.heuristics, Layer::Heuristics),
        ]
        .into_iter()
        .filter(|(ok, _)| !ok)
        .map(|(_, l)| l)
        .collect()
    }
}

impl fmt::Display for CacheStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let missing = self.missing();
        if missing.is_empty() {
            return f.write_str("all layers cached");
        }
        f.write_str("missing ")?;
        for (i, l) in missing.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{l}")?;
        }
        Ok(())
    }
}

/// Static description of a weighted grid, uploaded layer by layer.
#[derive(Clone, Debug, Default)]
pub struct GridCache {
    kernel: Option<Kernel>,
    size: Option<GridSize>,
    costs: Option<Matrix<f32>>,
    obstacles: Option<Matrix<bool>>,
    heuristics: Option<Matrix<f32>>,
}

impl GridCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Population
    // -----------------------------------------------------------------------

    /// Replace the neighbor-offset kernel.
    pub fn set_kernel<I, C>(&mut self, offsets: I) -> Result<(), CacheError>
    where
        I: IntoIterator<Item = C>,
        C: Into<Coord>,
    {
        self.use_kernel(Kernel::new(offsets)?);
        Ok(())
    }

    /// Replace the kernel with an already built one.
    ///
    /// A cost layer cached against a kernel of different length is kept but
    /// no longer counts as cached until costs are uploaded again.
    pub fn use_kernel(&mut self, kernel: Kernel) {
        if let Some(costs) = &self.costs {
            if costs.stride() != kernel.len() {
                warn!(
                    "kernel length changed to {} but cached costs hold {} per cell; re-cache costs",
                    kernel.len(),
                    costs.stride()
                );
            }
        }
        debug!("kernel set ({} offsets)", kernel.len());
        self.kernel = Some(kernel);
    }

    /// Cache per-cell neighbor costs, one per kernel offset, and record the
    /// grid size from their shape.
    ///
    /// If the grid size changes, previously cached obstacle and heuristic
    /// layers are dropped since they no longer describe this grid.
    pub fn cache_costs<R, C>(&mut self, rows: &[R]) -> Result<(), CacheError>
    where
        R: AsRef<[C]>,
        C: AsRef<[f32]>,
    {
        let stride = self.kernel.as_ref().ok_or(CacheError::KernelNotSet)?.len();
        let costs = Matrix::from_nested_cells(rows, stride).map_err(|source| {
            CacheError::Malformed {
                layer: Layer::Costs,
                source,
            }
        })?;
        check_values(&costs, Layer::Costs)?;

        let size = costs.size();
        if self.size.is_some_and(|old| old != size) {
            if self.obstacles.take().is_some() {
                warn!("grid size changed to {size}; dropped cached obstacles");
            }
            if self.heuristics.take().is_some() {
                warn!("grid size changed to {size}; dropped cached heuristics");
            }
        }
        debug!("costs cached ({size}, {stride} per cell)");
        self.size = Some(size);
        self.costs = Some(costs);
        Ok(())
    }

    /// Cache per-cell obstacle flags. Requires costs to have set the grid
    /// size, and the shape to match it.
    pub fn cache_obstacles<R>(&mut self, rows: &[R]) -> Result<(), CacheError>
    where
        R: AsRef<[bool]>,
    {
        let obstacles = self.sized_layer(rows, Layer::Obstacles)?;
        debug!(
            "obstacles cached ({} blocked)",
            obstacles.iter().filter(|&(_, &b)| b).count()
        );
        self.obstacles = Some(obstacles);
        Ok(())
    }

    /// Cache per-cell heuristic values. Requires costs to have set the grid
    /// size, and the shape to match it.
    pub fn cache_heuristics<R>(&mut self, rows: &[R]) -> Result<(), CacheError>
    where
        R: AsRef<[f32]>,
    {
        let heuristics = self.sized_layer(rows, Layer::Heuristics)?;
        check_values(&heuristics, Layer::Heuristics)?;
        debug!("heuristics cached ({})", heuristics.size());
        self.heuristics = Some(heuristics);
        Ok(())
    }

    fn sized_layer<R, T>(&self, rows: &[R], layer: Layer) -> Result<Matrix<T>, CacheError>
    where
        R: AsRef<[T]>,
        T: Clone,
    {
        let expected = self.size.ok_or(CacheError::DimensionsNotSet(layer))?;
        let m = Matrix::from_nested(rows).map_err(|source| CacheError::Malformed { layer, source })?;
        if m.size() != expected {
            return Err(CacheError::ShapeMismatch {
                layer,
                expected,
                found: m.size(),
            });
        }
        Ok(m)
    }

    // -----------------------------------------------------------------------
    // Clearing
    // -----------------------------------------------------------------------

    pub fn clear_kernel(&mut self) {
        self.kernel = None;
        debug!("kernel cleared");
    }

    /// Drop the cost layer. The grid size is kept so other layers stay valid.
    pub fn clear_costs(&mut self) {
        self.costs = None;
        debug!("costs cleared");
    }

    pub fn clear_obstacles(&mut self) {
        self.obstacles = None;
        debug!("obstacles cleared");
    }

    pub fn clear_heuristics(&mut self) {
        self.heuristics = None;
        debug!("heuristics cleared");
    }

    /// Drop every layer and forget the grid size.
    pub fn clear_all(&mut self) {
        *self = Self::default();
        debug!("cache cleared");
    }

    // -----------------------------------------------------------------------
    // Readiness
    // -----------------------------------------------------------------------

    #[inline]
    pub fn kernel_set(&self) -> bool {
        self.kernel.is_some()
    }

    /// Whether a cost layer is present and matches the current kernel length.
    pub fn costs_cached(&self) -> bool {
        match (&self.costs, &self.kernel) {
            (Some(costs), Some(kernel)) => costs.stride() == kernel.len(),
            (Some(_), None) => true,
            (None, _) => false,
        }
    }

    #[inline]
    pub fn obstacles_cached(&self) -> bool {
        self.obstacles.is_some()
    }

    #[inline]
    pub fn heuristics_cached(&self) -> bool {
        self.heuristics.is_some()
    }

    pub fn status(&self) -> CacheStatus {
        CacheStatus {
            kernel: self.kernel_set(),
            costs: self.costs_cached(),
            obstacles: self.obstacles_cached(),
            heuristics: self.heuristics_cached(),
        }
    }

    /// Whether every layer is present and consistent.
    #[inline]
    pub fn all_cached(&self) -> bool {
        self.status().all()
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Grid size recorded by the last cost upload.
    #[inline]
    pub fn size(&self) -> Option<GridSize> {
        self.size
    }

    #[inline]
    pub fn kernel(&self) -> Option<&Kernel> {
        self.kernel.as_ref()
    }

    /// Whether `c` lies inside the cached grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.size.is_some_and(|s| s.contains(c))
    }

    /// Obstacle flag of `c`, or `None` if unknown or out of bounds.
    #[inline]
    pub fn is_obstacle(&self, c: Coord) -> Option<bool> {
        self.obstacles.as_ref()?.at(c).copied()
    }

    /// Cached heuristic of `c`, or `None` if unknown or out of bounds.
    #[inline]
    pub fn heuristic(&self, c: Coord) -> Option<f32> {
        self.heuristics.as_ref()?.at(c).copied()
    }

    /// Cost of leaving `c` through kernel offset `index`.
    #[inline]
    pub fn edge_cost(&self, c: Coord, index: usize) -> Option<f32> {
        if !self.costs_cached() {
            return None;
        }
        self.costs.as_ref()?.cell(c)?.get(index).copied()
    }

    /// Total cost of walking `path` step by step through kernel offsets.
    ///
    /// Returns `None` for an empty path, or if a step is not a kernel offset
    /// or leaves the grid. A single-cell path costs zero.
    pub fn path_cost(&self, path: &[Coord]) -> Option<f32> {
        if path.is_empty() {
            return None;
        }
        let kernel = self.kernel.as_ref()?;
        let mut total = 0.0;
        for w in path.windows(2) {
            if !self.contains(w[0]) || !self.contains(w[1]) {
                return None;
            }
            let i = kernel.index_of(w[1].checked_sub(w[0])?)?;
            total += self.edge_cost(w[0], i)?;
        }
        Some(total)
    }
}

fn check_values(m: &Matrix<f32>, layer: Layer) -> Result<(), CacheError> {
    match m.iter().find(|&(_, &v)| !(v.is_finite() && v >= 0.0)) {
        Some((at, &value)) => Err(CacheError::InvalidValue { layer, at, value }),
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Search traits
// ---------------------------------------------------------------------------

impl Pather for GridCache {
    /// Neighbors through each kernel offset that stay inside the grid and are
    /// not obstacles. Yields nothing unless costs, kernel and obstacles are
    /// all cached.
    fn neighbors(&self, c: Coord, buf: &mut Vec<(Coord, f32)>) {
        if !self.costs_cached() {
            return;
        }
        let (Some(kernel), Some(costs), Some(obstacles)) =
            (&self.kernel, &self.costs, &self.obstacles)
        else {
            return;
        };
        let Some(row) = costs.cell(c) else {
            return;
        };
        for (&offset, &cost) in kernel.offsets().iter().zip(row) {
            let Some(n) = c.checked_add(offset) else {
                continue;
            };
            // Out of bounds reads as blocked.
            if obstacles.at(n).copied().unwrap_or(true) {
                continue;
            }
            buf.push((n, cost));
        }
    }
}

impl Heuristic for GridCache {
    /// Cached heuristic, or zero where none is cached.
    #[inline]
    fn estimate(&self, c: Coord) -> f32 {
        self.heuristic(c).unwrap_or(0.0)
    }
}
