//! Geometry primitives: [`Coord`] and [`GridSize`].
//!
//! Coordinates are `(row, col)` pairs. The same type is used for absolute
//! cells and for the relative offsets that make up a search kernel.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::hash::szudzik;

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A grid cell (or offset) addressed by row and column.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return the coordinate shifted by `offset`, or `None` on overflow.
    #[inline]
    pub fn checked_add(self, offset: Coord) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add(offset.row)?,
            col: self.col.checked_add(offset.col)?,
        })
    }

    /// Offset leading from `origin` to `self`, or `None` on overflow.
    #[inline]
    pub fn checked_sub(self, origin: Coord) -> Option<Self> {
        Some(Self {
            row: self.row.checked_sub(origin.row)?,
            col: self.col.checked_sub(origin.col)?,
        })
    }

    /// Injective `u64` key for this coordinate (see [`szudzik`]).
    #[inline]
    pub fn pairing(self) -> u64 {
        szudzik(self.row, self.col)
    }

    /// Manhattan (L1) distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Coord) -> i64 {
        (self.row as i64 - other.row as i64).abs() + (self.col as i64 - other.col as i64).abs()
    }

    /// Chebyshev (L∞) distance to `other`.
    #[inline]
    pub fn chebyshev(self, other: Coord) -> i64 {
        (self.row as i64 - other.row as i64)
            .abs()
            .max((self.col as i64 - other.col as i64).abs())
    }
}

// --- trait impls for Coord ---

impl Hash for Coord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.pairing());
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coord> for (i32, i32) {
    #[inline]
    fn from(c: Coord) -> Self {
        (c.row, c.col)
    }
}

// ---------------------------------------------------------------------------
// GridSize
// ---------------------------------------------------------------------------

/// Dimensions of a grid: number of rows and columns.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSize {
    pub rows: usize,
    pub cols: usize,
}

impl GridSize {
    /// Create a new size.
    #[inline]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of cells.
    #[inline]
    pub const fn len(self) -> usize {
        self.rows * self.cols
    }

    /// Whether the size has no cells.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether `c` lies inside `[0, rows) x [0, cols)`.
    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        c.row >= 0 && c.col >= 0 && (c.row as usize) < self.rows && (c.col as usize) < self.cols
    }

    /// Row-major flat index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index(self, c: Coord) -> Option<usize> {
        if self.contains(c) {
            Some(c.row as usize * self.cols + c.col as usize)
        } else {
            None
        }
    }

    /// Iterate over all coordinates in row-major order.
    pub fn iter(self) -> impl Iterator<Item = Coord> {
        let cols = self.cols;
        (0..self.len()).map(move |i| Coord::new((i / cols) as i32, (i % cols) as i32))
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_arithmetic() {
        let a = Coord::new(1, 2);
        let b = Coord::new(3, -4);
        assert_eq!(a.checked_add(b), Some(Coord::new(4, -2)));
        assert_eq!(Coord::new(i32::MAX, 0).checked_add(Coord::new(1, 0)), None);
        assert_eq!(b.checked_sub(a), Some(Coord::new(2, -6)));
        assert_eq!(Coord::new(0, i32::MIN).checked_sub(Coord::new(0, 1)), None);
    }

    #[test]
    fn coord_ordering_is_row_major() {
        let mut v = vec![Coord::new(1, 0), Coord::new(0, 5), Coord::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Coord::new(0, 1), Coord::new(0, 5), Coord::new(1, 0)]);
    }

    #[test]
    fn coord_distances() {
        let a = Coord::new(0, 0);
        let b = Coord::new(7, 5);
        assert_eq!(a.manhattan(b), 12);
        assert_eq!(a.chebyshev(b), 7);
    }

    #[test]
    fn tuple_conversions() {
        let c: Coord = (3, 4).into();
        assert_eq!(c, Coord::new(3, 4));
        let t: (i32, i32) = c.into();
        assert_eq!(t, (3, 4));
    }

    #[test]
    fn size_contains_and_index() {
        let s = GridSize::new(8, 6);
        assert!(s.contains(Coord::new(0, 0)));
        assert!(s.contains(Coord::new(7, 5)));
        assert!(!s.contains(Coord::new(8, 0)));
        assert!(!s.contains(Coord::new(0, 6)));
        assert!(!s.contains(Coord::new(-1, 0)));
        assert_eq!(s.index(Coord::new(1, 2)), Some(8));
        assert_eq!(s.index(Coord::new(0, -1)), None);
    }

    #[test]
    fn size_iter_row_major() {
        let s = GridSize::new(2, 3);
        let pts: Vec<_> = s.iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Coord::new(0, 0));
        assert_eq!(pts[3], Coord::new(1, 0));
        assert_eq!(pts[5], Coord::new(1, 2));
        assert_eq!(GridSize::new(0, 3).iter().count(), 0);
    }
}
