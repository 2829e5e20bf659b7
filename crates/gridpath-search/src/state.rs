//! Resumable bookkeeping for one search episode.

use std::collections::BinaryHeap;

use gridpath_core::{Coord, CoordMap};
use log::debug;

use crate::node::{FrontierEntry, SearchNode};

/// Best cost seen so far for a coordinate, with its heuristic cached so it
/// is computed at most once per episode.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LedgerEntry {
    pub g: f32,
    pub h: f32,
}

/// Where the current episode stands.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum EpisodeStatus {
    /// Nothing searched since creation or the last reset.
    #[default]
    Empty,
    /// Stopped early by an expansion budget; can be resumed.
    Running { source: Coord, target: Coord },
    /// The target was reached.
    Found,
    /// The frontier ran dry before reaching the target.
    Exhausted,
}

impl EpisodeStatus {
    /// Whether the episode has finished (found or exhausted).
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Found | Self::Exhausted)
    }
}

/// Frontier, closed set and ledger of a search episode.
///
/// The state is not cleared automatically. Searching again without
/// [`reset`](Self::reset) continues from whatever the previous search left
/// behind, which is how a budgeted search is resumed.
#[derive(Debug, Default)]
pub struct SearchState {
    /// Lazy-deletion priority queue; a coordinate may appear several times.
    pub(crate) frontier: BinaryHeap<FrontierEntry>,
    /// Finalized coordinates mapped to their parent.
    pub(crate) closed: CoordMap<Option<Coord>>,
    /// Every coordinate ever pushed, with its best `g` and cached `h`.
    pub(crate) ledger: CoordMap<LedgerEntry>,
    pub(crate) status: EpisodeStatus,
    seq: u64,
    pub(crate) expansions: usize,
    // scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<(Coord, f32)>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty the frontier, closed set and ledger and start a fresh episode.
    pub fn reset(&mut self) {
        debug!(
            "search state reset ({} closed, {} in ledger, {} queued)",
            self.closed.len(),
            self.ledger.len(),
            self.frontier.len()
        );
        self.frontier.clear();
        self.closed.clear();
        self.ledger.clear();
        self.status = EpisodeStatus::Empty;
        self.seq = 0;
        self.expansions = 0;
    }

    #[inline]
    pub fn status(&self) -> EpisodeStatus {
        self.status
    }

    /// Entries on the frontier, stale duplicates included.
    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    #[inline]
    pub fn closed_len(&self) -> usize {
        self.closed.len()
    }

    #[inline]
    pub fn ledger_len(&self) -> usize {
        self.ledger.len()
    }

    /// Nodes expanded since the last reset.
    #[inline]
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    #[inline]
    pub fn is_closed(&self, c: Coord) -> bool {
        self.closed.contains_key(&c)
    }

    /// Parent recorded when `c` was closed (`Some(None)` for a source).
    #[inline]
    pub fn parent_of(&self, c: Coord) -> Option<Option<Coord>> {
        self.closed.get(&c).copied()
    }

    /// Best `g` seen for `c` in this episode.
    #[inline]
    pub fn best_cost(&self, c: Coord) -> Option<f32> {
        self.ledger.get(&c).map(|e| e.g)
    }

    #[inline]
    pub fn ledger_entry(&self, c: Coord) -> Option<LedgerEntry> {
        self.ledger.get(&c).copied()
    }

    /// Record `node` in the ledger and queue it.
    pub(crate) fn push(&mut self, node: SearchNode) {
        self.ledger.insert(
            node.coord,
            LedgerEntry {
                g: node.g,
                h: node.h,
            },
        );
        self.frontier.push(FrontierEntry {
            node,
            seq: self.seq,
        });
        self.seq += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_records_ledger() {
        let mut s = SearchState::new();
        s.push(SearchNode::source(Coord::new(1, 2), 5.0));
        assert_eq!(s.frontier_len(), 1);
        assert_eq!(s.ledger_len(), 1);
        assert_eq!(
            s.ledger_entry(Coord::new(1, 2)),
            Some(LedgerEntry { g: 0.0, h: 5.0 })
        );
        assert_eq!(s.best_cost(Coord::new(0, 0)), None);
    }

    #[test]
    fn reset_clears_everything() {
        let mut s = SearchState::new();
        s.push(SearchNode::source(Coord::ZERO, 0.0));
        s.closed.insert(Coord::ZERO, None);
        s.status = EpisodeStatus::Found;
        s.expansions = 3;

        s.reset();
        assert_eq!(s.frontier_len(), 0);
        assert_eq!(s.closed_len(), 0);
        assert_eq!(s.ledger_len(), 0);
        assert_eq!(s.expansions(), 0);
        assert_eq!(s.status(), EpisodeStatus::Empty);
        assert!(!s.is_closed(Coord::ZERO));
    }

    #[test]
    fn terminal_statuses() {
        assert!(EpisodeStatus::Found.is_terminal());
        assert!(EpisodeStatus::Exhausted.is_terminal());
        assert!(!EpisodeStatus::Empty.is_terminal());
        let running = EpisodeStatus::Running {
            source: Coord::ZERO,
            target: Coord::new(1, 1),
        };
        assert!(!running.is_terminal());
    }
}
