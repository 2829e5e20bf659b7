//! Error types for cache population and search.
//!
//! "No path exists" is not an error: [`PathFinder::solve`](crate::PathFinder::solve)
//! reports it as an empty path. These types cover calls that could not run
//! at all.

use gridpath_core::{Coord, GridSize, ShapeError};

use crate::cache::{CacheStatus, Layer};

/// Rejected cache population or kernel update.
///
/// A failed call leaves the previously cached layer untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CacheError {
    /// `set_kernel` was given no offsets.
    #[error("kernel must contain at least one offset")]
    EmptyKernel,
    /// Costs were cached before any kernel was set.
    #[error("kernel not yet set (set a kernel before caching costs)")]
    KernelNotSet,
    /// A layer was cached before the grid size was known.
    #[error("grid size not yet set (cache costs before {0})")]
    DimensionsNotSet(Layer),
    /// The nested input is empty or not rectangular, or a cost cell does
    /// not hold one value per kernel offset.
    #[error("malformed {layer} input: {source}")]
    Malformed {
        layer: Layer,
        #[source]
        source: ShapeError,
    },
    /// A layer's shape disagrees with the grid size set by the cost layer.
    #[error("{layer} layer is {found}, expected {expected}")]
    ShapeMismatch {
        layer: Layer,
        expected: GridSize,
        found: GridSize,
    },
    /// A cost or heuristic is negative, NaN, or infinite.
    #[error("invalid {layer} value {value} at {at}")]
    InvalidValue { layer: Layer, at: Coord, value: f32 },
}

/// A search that could not be started or finished.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolveError {
    /// One or more cache layers are missing or stale.
    #[error("cache not ready: {0}")]
    NotReady(CacheStatus),
    /// The source or target lies outside the cached grid.
    #[error("{coord} is outside the {size} grid")]
    OutOfBounds { coord: Coord, size: GridSize },
    /// The configured expansion budget ran out before the search finished.
    /// The episode stays resumable.
    #[error("expansion budget exhausted after {expansions} expansions")]
    BudgetExhausted { expansions: usize },
}
