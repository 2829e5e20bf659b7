//! The [`Matrix`] type: a dense, row-major grid layer.
//!
//! Every cell holds `stride` consecutive values in one flat buffer. Layers
//! with a single value per cell (obstacles, heuristics) use a stride of 1;
//! the neighbor-cost layer uses one value per kernel offset.

use crate::geom::{Coord, GridSize};

/// Shape problems found while building a [`Matrix`] from nested input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    /// The input has no rows, or its first row has no columns.
    #[error("matrix is empty ({rows} rows, {cols} columns)")]
    Empty { rows: usize, cols: usize },
    /// A row's length differs from the first row's.
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A cell holds the wrong number of values.
    #[error("cell ({row}, {col}) holds {found} values, expected {expected}")]
    CellLength {
        row: usize,
        col: usize,
        expected: usize,
        found: usize,
    },
}

/// A rectangular grid of values stored contiguously in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    size: GridSize,
    stride: usize,
    data: Vec<T>,
}

impl<T: Clone> Matrix<T> {
    /// Build a one-value-per-cell matrix from a slice of rows.
    pub fn from_nested<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, ShapeError> {
        let size = nested_size(rows)?;
        let mut data = Vec::with_capacity(size.len());
        for row in rows {
            data.extend_from_slice(row.as_ref());
        }
        Ok(Self {
            size,
            stride: 1,
            data,
        })
    }

    /// Build a matrix whose cells each hold exactly `stride` values.
    pub fn from_nested_cells<R, C>(rows: &[R], stride: usize) -> Result<Self, ShapeError>
    where
        R: AsRef<[C]>,
        C: AsRef<[T]>,
    {
        let size = nested_size(rows)?;
        let mut data = Vec::with_capacity(size.len() * stride);
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.as_ref().iter().enumerate() {
                let cell = cell.as_ref();
                if cell.len() != stride {
                    return Err(ShapeError::CellLength {
                        row: r,
                        col: c,
                        expected: stride,
                        found: cell.len(),
                    });
                }
                data.extend_from_slice(cell);
            }
        }
        Ok(Self { size, stride, data })
    }
}

impl<T> Matrix<T> {
    /// Grid dimensions.
    #[inline]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Number of values per cell.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The values stored for `c`, or `None` if out of bounds.
    #[inline]
    pub fn cell(&self, c: Coord) -> Option<&[T]> {
        let i = self.size.index(c)? * self.stride;
        Some(&self.data[i..i + self.stride])
    }

    /// The first value stored for `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<&T> {
        self.cell(c).and_then(|v| v.first())
    }

    /// Iterate over every stored value with the cell that holds it.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &T)> {
        let stride = self.stride.max(1);
        let cols = self.size.cols;
        self.data.iter().enumerate().map(move |(i, v)| {
            let cell = i / stride;
            (Coord::new((cell / cols) as i32, (cell % cols) as i32), v)
        })
    }
}

fn nested_size<R, T>(rows: &[R]) -> Result<GridSize, ShapeError>
where
    R: AsRef<[T]>,
{
    let n_rows = rows.len();
    let n_cols = rows.first().map_or(0, |r| r.as_ref().len());
    if n_rows == 0 || n_cols == 0 {
        return Err(ShapeError::Empty {
            rows: n_rows,
            cols: n_cols,
        });
    }
    for (r, row) in rows.iter().enumerate() {
        let found = row.as_ref().len();
        if found != n_cols {
            return Err(ShapeError::Ragged {
                row: r,
                expected: n_cols,
                found,
            });
        }
    }
    Ok(GridSize::new(n_rows, n_cols))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_nested_rectangular() {
        let m = Matrix::<i32>::from_nested(&[vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(m.size(), GridSize::new(2, 3));
        assert_eq!(m.at(Coord::new(1, 0)), Some(&4));
        assert_eq!(m.at(Coord::new(2, 0)), None);
    }

    #[test]
    fn from_nested_rejects_ragged() {
        let err = Matrix::<bool>::from_nested(&[vec![true, false], vec![true]]).unwrap_err();
        assert_eq!(
            err,
            ShapeError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn from_nested_rejects_empty() {
        let rows: [Vec<u8>; 0] = [];
        assert!(matches!(
            Matrix::<u8>::from_nested(&rows),
            Err(ShapeError::Empty { rows: 0, .. })
        ));
        assert!(matches!(
            Matrix::<u8>::from_nested(&[Vec::<u8>::new(), Vec::new()]),
            Err(ShapeError::Empty { rows: 2, cols: 0 })
        ));
    }

    #[test]
    fn from_nested_cells_with_stride() {
        let rows = vec![vec![vec![1.0, 2.0], vec![3.0, 4.0]]];
        let m = Matrix::<f64>::from_nested_cells(&rows, 2).unwrap();
        assert_eq!(m.size(), GridSize::new(1, 2));
        assert_eq!(m.stride(), 2);
        assert_eq!(m.cell(Coord::new(0, 1)), Some(&[3.0, 4.0][..]));
    }

    #[test]
    fn from_nested_cells_rejects_wrong_cell_length() {
        let rows = vec![vec![vec![1.0f32, 2.0], vec![3.0]]];
        let err = Matrix::<f32>::from_nested_cells(&rows, 2).unwrap_err();
        assert_eq!(
            err,
            ShapeError::CellLength {
                row: 0,
                col: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn iter_visits_cells_row_major() {
        let m = Matrix::<i32>::from_nested(&[[0, 1], [10, 11]]).unwrap();
        let v: Vec<_> = m.iter().map(|(c, &x)| (c, x)).collect();
        assert_eq!(v[3], (Coord::new(1, 1), 11));

        let rows = vec![vec![vec![1u8, 2], vec![3, 4]]];
        let m = Matrix::<u8>::from_nested_cells(&rows, 2).unwrap();
        let cells: Vec<Coord> = m.iter().map(|(c, _)| c).collect();
        assert_eq!(
            cells,
            vec![Coord::new(0, 0), Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 1)]
        );
    }
}
