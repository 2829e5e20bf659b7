//! The best-first search loop shared by Dijkstra and A*.
//!
//! Decrease-key is emulated by re-insertion: a coordinate is pushed again
//! whenever a strictly cheaper route to it is found, and stale copies are
//! discarded when they surface because the coordinate is already closed.

use gridpath_core::Coord;
use log::{debug, trace, warn};

use crate::node::SearchNode;
use crate::state::{EpisodeStatus, SearchState};
use crate::traits::{Heuristic, Pather};

/// Outcome of a (possibly budgeted) search call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Progress {
    /// The expansion budget ran out; call again with the same endpoints to
    /// resume.
    Running,
    /// The target was reached. The path runs from source to target
    /// inclusive.
    Found(Vec<Coord>),
    /// No path exists from the source to the target.
    Exhausted,
}

impl Progress {
    /// The path, if one was found.
    pub fn into_path(self) -> Option<Vec<Coord>> {
        match self {
            Self::Found(path) => Some(path),
            _ => None,
        }
    }
}

impl SearchState {
    /// Run the search from `source` to `target` for at most `budget` node
    /// expansions (`None` for no limit).
    ///
    /// If the state is [`Running`](EpisodeStatus::Running) for the same
    /// endpoints the search resumes where it stopped. In any other non-empty
    /// state the source is pushed onto the surviving frontier, so results
    /// build on the previous episode; call [`reset`](Self::reset) first for
    /// an unrelated search. In particular a coordinate whose ledger cost
    /// cannot be improved is never queued again, so repeating a finished
    /// search without a reset reports [`Progress::Exhausted`].
    pub fn run<P, H>(
        &mut self,
        pather: &P,
        heuristic: &H,
        source: Coord,
        target: Coord,
        budget: Option<usize>,
    ) -> Progress
    where
        P: Pather + ?Sized,
        H: Heuristic + ?Sized,
    {
        if source == target {
            return Progress::Found(vec![target]);
        }

        match self.status {
            EpisodeStatus::Running { source: s, target: t } if s == source && t == target => {
                debug!("resuming search {source} -> {target}");
            }
            status => {
                if status != EpisodeStatus::Empty {
                    warn!(
                        "searching {source} -> {target} on a state left {status:?} without reset; \
                         previous closed set and ledger are reused"
                    );
                }
                debug!("search {source} -> {target} started");
                self.push(SearchNode::source(source, heuristic.estimate(source)));
                self.status = EpisodeStatus::Running { source, target };
            }
        }

        let mut remaining = budget;
        let mut nbuf = std::mem::take(&mut self.nbuf);

        let progress = loop {
            if remaining == Some(0) {
                debug!(
                    "search {source} -> {target} paused after {} expansions",
                    self.expansions
                );
                break Progress::Running;
            }

            let Some(entry) = self.frontier.pop() else {
                self.status = EpisodeStatus::Exhausted;
                debug!(
                    "search {source} -> {target} exhausted after {} expansions",
                    self.expansions
                );
                break Progress::Exhausted;
            };
            let current = entry.node;

            if current.coord == target {
                self.status = EpisodeStatus::Found;
                debug!(
                    "search {source} -> {target} found cost {} after {} expansions",
                    current.g, self.expansions
                );
                break Progress::Found(self.reconstruct(&current, source));
            }

            // Stale duplicate of an already finalized coordinate.
            if self.closed.contains_key(&current.coord) {
                continue;
            }

            self.closed.insert(current.coord, current.parent);
            self.expansions += 1;
            if let Some(r) = remaining.as_mut() {
                *r -= 1;
            }
            trace!("expand {} g={} f={}", current.coord, current.g, current.f());

            nbuf.clear();
            pather.neighbors(current.coord, &mut nbuf);

            for &(nc, step_cost) in nbuf.iter() {
                if self.closed.contains_key(&nc) {
                    continue;
                }
                let g = current.g + step_cost;
                let h = match self.ledger.get(&nc) {
                    // Seen before: only a strictly cheaper route is worth queueing.
                    Some(seen) if g >= seen.g => continue,
                    Some(seen) => seen.h,
                    None => heuristic.estimate(nc),
                };
                self.push(SearchNode {
                    coord: nc,
                    parent: Some(current.coord),
                    g,
                    h,
                });
            }
        };

        self.nbuf = nbuf;
        progress
    }

    /// Walk parent links from `reached` back to `source` through the closed
    /// set and return the path in source-to-target order.
    fn reconstruct(&self, reached: &SearchNode, source: Coord) -> Vec<Coord> {
        let mut path = vec![reached.coord];
        let mut cur = reached.parent;
        while let Some(c) = cur {
            if c == source {
                break;
            }
            let Some(&parent) = self.closed.get(&c) else {
                break;
            };
            path.push(c);
            cur = parent;
        }
        path.push(source);
        path.reverse();
        path
    }
}

/// Run one self-contained search with caller-supplied neighbor and
/// heuristic functions.
///
/// Returns the path from `source` to `target` inclusive, or an empty path if
/// the target cannot be reached.
pub fn solve_with<P, H>(pather: &P, heuristic: &H, source: Coord, target: Coord) -> Vec<Coord>
where
    P: Pather + ?Sized,
    H: Heuristic + ?Sized,
{
    let mut state = SearchState::new();
    state
        .run(pather, heuristic, source, target, None)
        .into_path()
        .unwrap_or_default()
}
