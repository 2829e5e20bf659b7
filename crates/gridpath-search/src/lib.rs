//! Incremental, cache-backed shortest-path search on weighted grids.
//!
//! A caller uploads the static description of a grid once, as independent
//! layers held by a [`GridCache`]:
//!
//! - the **kernel**, the ordered set of neighbor offsets ([`Kernel`])
//! - per-cell **neighbor costs**, one per kernel offset
//! - per-cell **obstacle** flags
//! - per-cell **heuristic** estimates of the remaining cost to the goal
//!
//! [`PathFinder`] then runs best-first searches against that cache. The
//! same loop serves Dijkstra (heuristic ignored) and A*; the frontier is a
//! lazy-deletion binary heap and a per-coordinate ledger stands in for
//! decrease-key. Search bookkeeping lives in a [`SearchState`] that can be
//! stepped, resumed, and explicitly [`reset`](PathFinder::reset).
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | passable neighbors with step costs |
//! | [`Heuristic`] | estimate of the remaining cost from a cell |
//!
//! [`GridCache`] implements both; [`solve_with`] accepts any pair.

mod cache;
mod config;
mod distance;
mod error;
mod finder;
mod kernel;
mod node;
mod solver;
mod state;
mod traits;

pub use cache::{CacheStatus, GridCache, Layer};
pub use config::{FinderConfig, FinderKind};
pub use distance::{Metric, heuristic_table};
pub use error::{CacheError, SolveError};
pub use finder::PathFinder;
pub use kernel::Kernel;
pub use node::SearchNode;
pub use solver::{Progress, solve_with};
pub use state::{EpisodeStatus, LedgerEntry, SearchState};
pub use traits::{FnHeuristic, FnPather, Heuristic, Pather, ZeroHeuristic};

pub use gridpath_core::{Coord, GridSize};
