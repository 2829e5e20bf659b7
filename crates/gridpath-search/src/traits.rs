use gridpath_core::Coord;

/// Neighbor enumeration with step costs.
pub trait Pather {
    /// Append the enterable neighbors of `c` into `buf`, each paired with the
    /// cost of stepping there from `c`. The caller clears `buf` before calling.
    fn neighbors(&self, c: Coord, buf: &mut Vec<(Coord, f32)>);
}

/// Estimate of the remaining cost from a cell to the goal.
///
/// Admissibility is the implementor's responsibility; the search does not
/// check it.
pub trait Heuristic {
    fn estimate(&self, c: Coord) -> f32;
}

/// Heuristic that always returns zero, turning A* into Dijkstra.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    #[inline]
    fn estimate(&self, _c: Coord) -> f32 {
        0.0
    }
}

/// Adapts a closure returning `(neighbor, cost)` pairs into a [`Pather`].
pub struct FnPather<F>(pub F);

impl<F, I> Pather for FnPather<F>
where
    F: Fn(Coord) -> I,
    I: IntoIterator<Item = (Coord, f32)>,
{
    fn neighbors(&self, c: Coord, buf: &mut Vec<(Coord, f32)>) {
        buf.extend((self.0)(c));
    }
}

/// Adapts a closure into a [`Heuristic`].
pub struct FnHeuristic<F>(pub F);

impl<F: Fn(Coord) -> f32> Heuristic for FnHeuristic<F> {
    #[inline]
    fn estimate(&self, c: Coord) -> f32 {
        (self.0)(c)
    }
}
