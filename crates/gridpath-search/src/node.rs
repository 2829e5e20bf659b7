use std::cmp::Ordering;

use gridpath_core::Coord;

/// The best known way to reach one coordinate during a search.
///
/// Identity is the coordinate alone; costs and parent are attributes of
/// the current best node there.
#[derive(Copy, Clone, Debug)]
pub struct SearchNode {
    pub coord: Coord,
    /// `None` for the source of an episode.
    pub parent: Option<Coord>,
    /// Accumulated cost from the source.
    pub g: f32,
    /// Heuristic estimate of the remaining cost.
    pub h: f32,
}

impl SearchNode {
    /// Node for the source of an episode.
    #[inline]
    pub fn source(coord: Coord, h: f32) -> Self {
        Self {
            coord,
            parent: None,
            g: 0.0,
            h,
        }
    }

    /// Total estimated cost through this node.
    #[inline]
    pub fn f(&self) -> f32 {
        self.g + self.h
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for SearchNode {}

/// Frontier entry, ordered for use in a `BinaryHeap`.
///
/// The heap pops the smallest `f` first. Ties go to the larger `g` (the
/// node that is further along its path), then to the entry pushed first.
#[derive(Copy, Clone, Debug)]
pub(crate) struct FrontierEntry {
    pub(crate) node: SearchNode,
    /// Monotonically increasing insertion counter.
    pub(crate) seq: u64,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap (max-heap) pops the smallest key first.
        other
            .node
            .f()
            .total_cmp(&self.node.f())
            .then_with(|| self.node.g.total_cmp(&other.node.g))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    fn entry(col: i32, g: f32, h: f32, seq: u64) -> FrontierEntry {
        FrontierEntry {
            node: SearchNode {
                coord: Coord::new(0, col),
                parent: None,
                g,
                h,
            },
            seq,
        }
    }

    #[test]
    fn f_is_derived() {
        let n = SearchNode {
            coord: Coord::ZERO,
            parent: None,
            g: 2.5,
            h: 4.0,
        };
        assert_eq!(n.f(), 6.5);
        assert_eq!(SearchNode::source(Coord::ZERO, 3.0).f(), 3.0);
    }

    #[test]
    fn identity_is_coordinate() {
        let a = SearchNode::source(Coord::new(1, 1), 0.0);
        let mut b = a;
        b.g = 10.0;
        b.parent = Some(Coord::ZERO);
        assert_eq!(a, b);
    }

    #[test]
    fn heap_pops_lowest_f() {
        let mut q = BinaryHeap::new();
        q.push(entry(0, 3.0, 0.0, 0));
        q.push(entry(1, 1.0, 0.0, 1));
        q.push(entry(2, 0.0, 2.0, 2));
        let order: Vec<i32> = std::iter::from_fn(|| q.pop()).map(|e| e.node.coord.col).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn ties_prefer_higher_g_then_fifo() {
        let mut q = BinaryHeap::new();
        q.push(entry(0, 1.0, 2.0, 0));
        q.push(entry(1, 2.0, 1.0, 1));
        q.push(entry(2, 1.0, 2.0, 2));
        let order: Vec<i32> = std::iter::from_fn(|| q.pop()).map(|e| e.node.coord.col).collect();
        assert_eq!(order, vec![1, 0, 2]);
    }
}
