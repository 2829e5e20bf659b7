//! [`PathFinder`]: a grid cache and a search state behind one handle.

use gridpath_core::Coord;

use crate::cache::GridCache;
use crate::config::{FinderConfig, FinderKind};
use crate::error::{CacheError, SolveError};
use crate::solver::Progress;
use crate::state::SearchState;
use crate::traits::ZeroHeuristic;

/// Cache-backed shortest-path finder.
///
/// Upload grid layers through [`cache_mut`](Self::cache_mut) (or all at once
/// with [`prepare_cache`](Self::prepare_cache)), then call
/// [`solve`](Self::solve). The search state persists between calls; call
/// [`reset`](Self::reset) before an unrelated search. The cache is kept
/// across resets, so replanning after a map change only needs the changed
/// layer re-uploaded.
#[derive(Debug, Default)]
pub struct PathFinder {
    config: FinderConfig,
    cache: GridCache,
    state: SearchState,
}

impl PathFinder {
    /// Create a finder of the given kind with no expansion budget.
    pub fn new(kind: FinderKind) -> Self {
        Self::with_config(FinderConfig::new(kind))
    }

    pub fn with_config(config: FinderConfig) -> Self {
        Self {
            config,
            cache: GridCache::new(),
            state: SearchState::new(),
        }
    }

    #[inline]
    pub fn kind(&self) -> FinderKind {
        self.config.kind
    }

    #[inline]
    pub fn config(&self) -> FinderConfig {
        self.config
    }

    #[inline]
    pub fn cache(&self) -> &GridCache {
        &self.cache
    }

    #[inline]
    pub fn cache_mut(&mut self) -> &mut GridCache {
        &mut self.cache
    }

    #[inline]
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Whether the cache is searchable.
    #[inline]
    pub fn all_cached(&self) -> bool {
        self.cache.all_cached()
    }

    /// Upload every layer in order: kernel, costs, obstacles, heuristics.
    ///
    /// Stops at the first rejected layer; layers uploaded before it stay.
    pub fn prepare_cache<K, KC, R, C, RO, RH>(
        &mut self,
        costs: &[R],
        obstacles: &[RO],
        heuristics: &[RH],
        kernel: K,
    ) -> Result<(), CacheError>
    where
        K: IntoIterator<Item = KC>,
        KC: Into<Coord>,
        R: AsRef<[C]>,
        C: AsRef<[f32]>,
        RO: AsRef<[bool]>,
        RH: AsRef<[f32]>,
    {
        self.cache.set_kernel(kernel)?;
        self.cache.cache_costs(costs)?;
        self.cache.cache_obstacles(obstacles)?;
        self.cache.cache_heuristics(heuristics)
    }

    /// Drop every cache layer. The search state is left alone.
    pub fn clear_cache(&mut self) {
        self.cache.clear_all();
    }

    /// Start a fresh episode. Cached grid data is kept.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Find a minimum-cost path from `source` to `target`.
    ///
    /// Returns the path from source to target inclusive, or an empty path if
    /// the target is unreachable. If the configured expansion budget runs
    /// out first, returns [`SolveError::BudgetExhausted`]; calling `solve`
    /// again with the same endpoints resumes the search.
    ///
    /// Once an episode has finished, solving again without
    /// [`reset`](Self::reset) continues from the old closed set and ledger.
    /// A target reached in that episode is already in the ledger at its best
    /// cost and is not queued again, so repeating the same solve returns an
    /// empty path.
    pub fn solve(&mut self, source: Coord, target: Coord) -> Result<Vec<Coord>, SolveError> {
        match self.search(source, target, self.config.max_expansions)? {
            Progress::Found(path) => Ok(path),
            Progress::Exhausted => Ok(Vec::new()),
            Progress::Running => Err(SolveError::BudgetExhausted {
                expansions: self.state.expansions(),
            }),
        }
    }

    /// Advance the search by at most `max_expansions` node expansions.
    pub fn step(
        &mut self,
        source: Coord,
        target: Coord,
        max_expansions: usize,
    ) -> Result<Progress, SolveError> {
        self.search(source, target, Some(max_expansions))
    }

    fn search(
        &mut self,
        source: Coord,
        target: Coord,
        budget: Option<usize>,
    ) -> Result<Progress, SolveError> {
        let status = self.cache.status();
        if !status.all() {
            log::warn!("solve {source} -> {target} refused: {status}");
            return Err(SolveError::NotReady(status));
        }
        if let Some(size) = self.cache.size() {
            for coord in [source, target] {
                if !size.contains(coord) {
                    return Err(SolveError::OutOfBounds { coord, size });
                }
            }
        }

        let progress = if self.config.kind.uses_heuristic() {
            self.state
                .run(&self.cache, &self.cache, source, target, budget)
        } else {
            self.state
                .run(&self.cache, &ZeroHeuristic, source, target, budget)
        };
        Ok(progress)
    }
}
