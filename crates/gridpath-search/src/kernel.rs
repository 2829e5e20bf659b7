use gridpath_core::{Coord, GridSize};

use crate::error::CacheError;

/// Ordered set of relative offsets that defines adjacency.
///
/// The position of an offset is the index of its cost inside every cell's
/// neighbor-cost row, so kernel order and cost order must agree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Kernel {
    offsets: Vec<Coord>,
}

impl Kernel {
    /// Build a kernel from offsets. Fails if `offsets` is empty.
    pub fn new<I, C>(offsets: I) -> Result<Self, CacheError>
    where
        I: IntoIterator<Item = C>,
        C: Into<Coord>,
    {
        let offsets: Vec<Coord> = offsets.into_iter().map(Into::into).collect();
        if offsets.is_empty() {
            return Err(CacheError::EmptyKernel);
        }
        Ok(Self { offsets })
    }

    /// Up, down, left, right.
    pub fn four_connected() -> Self {
        Self {
            offsets: vec![
                Coord::new(-1, 0),
                Coord::new(1, 0),
                Coord::new(0, -1),
                Coord::new(0, 1),
            ],
        }
    }

    /// All eight surrounding cells, row by row.
    pub fn eight_connected() -> Self {
        let mut offsets = Vec::with_capacity(8);
        for dr in -1..=1 {
            for dc in -1..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                offsets.push(Coord::new(dr, dc));
            }
        }
        Self { offsets }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    #[inline]
    pub fn offsets(&self) -> &[Coord] {
        &self.offsets
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Coord> {
        self.offsets.get(index).copied()
    }

    /// Kernel index of `offset`, if present (first match).
    pub fn index_of(&self, offset: Coord) -> Option<usize> {
        self.offsets.iter().position(|&o| o == offset)
    }

    /// Cost rows giving every offset the same `cost`, in the nested shape
    /// expected by [`GridCache::cache_costs`](crate::GridCache::cache_costs).
    pub fn uniform_costs(&self, size: GridSize, cost: f32) -> Vec<Vec<Vec<f32>>> {
        let row = vec![vec![cost; self.len()]; size.cols];
        vec![row; size.rows]
    }

    /// Cost rows where each step costs the Euclidean length of its offset
    /// (1 for cardinal moves, √2 for diagonals).
    pub fn euclidean_costs(&self, size: GridSize) -> Vec<Vec<Vec<f32>>> {
        let cell: Vec<f32> = self
            .offsets
            .iter()
            .map(|o| ((o.row as f32).powi(2) + (o.col as f32).powi(2)).sqrt())
            .collect();
        vec![vec![cell; size.cols]; size.rows]
    }
}

impl<'a> IntoIterator for &'a Kernel {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.offsets.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_kernel_rejected() {
        let none: [(i32, i32); 0] = [];
        assert_eq!(Kernel::new(none), Err(CacheError::EmptyKernel));
    }

    #[test]
    fn new_from_tuples() {
        let k = Kernel::new([(-1, 0), (1, 0)]).unwrap();
        assert_eq!(k.len(), 2);
        assert_eq!(k.get(1), Some(Coord::new(1, 0)));
        assert_eq!(k.get(2), None);
        assert_eq!(k.index_of(Coord::new(-1, 0)), Some(0));
        assert_eq!(k.index_of(Coord::new(0, 1)), None);
    }

    #[test]
    fn presets() {
        assert_eq!(Kernel::four_connected().len(), 4);
        let k8 = Kernel::eight_connected();
        assert_eq!(k8.len(), 8);
        assert!(k8.index_of(Coord::ZERO).is_none());
        assert_eq!(k8.get(0), Some(Coord::new(-1, -1)));
    }

    #[test]
    fn cost_builders_have_kernel_stride() {
        let k = Kernel::eight_connected();
        let size = GridSize::new(3, 2);
        let uni = k.uniform_costs(size, 2.0);
        assert_eq!(uni.len(), 3);
        assert_eq!(uni[0].len(), 2);
        assert_eq!(uni[2][1], vec![2.0; 8]);

        let euc = k.euclidean_costs(size);
        let diag = euc[0][0][0];
        assert!((diag - std::f32::consts::SQRT_2).abs() < 1e-6);
        assert_eq!(euc[0][0][1], 1.0);
    }
}
