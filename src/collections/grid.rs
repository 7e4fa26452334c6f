//! Dense two-dimensional grid with row and column access.
//!
//! Cells are stored row-major in a single `Vec`, so a row is a contiguous
//! slice and a column is a strided walk over it.

use std::iter::{FusedIterator, StepBy};
use std::slice;

use crate::error::{Error, Result};

/// Rectangular `rows × cols` grid.
///
/// # Examples
/// ```
/// use u_collections::collections::Grid;
///
/// let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
/// assert_eq!(grid.row(1), Some(&[4, 5, 6][..]));
/// assert_eq!(grid.column(2).unwrap().copied().collect::<Vec<_>>(), vec![3, 6]);
/// assert_eq!(grid.get(0, 1), Some(&2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    cells: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Grid<T> {
    /// Creates a grid with every cell set to `fill`.
    ///
    /// # Complexity
    /// O(rows · cols)
    pub fn new(rows: usize, cols: usize, fill: T) -> Self
    where
        T: Clone,
    {
        Self {
            cells: vec![fill; rows * cols],
            rows,
            cols,
        }
    }

    /// Builds a grid from a list of rows.
    ///
    /// An empty list gives a `0 × 0` grid.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if rows differ in length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let n_rows = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != cols) {
            return Err(Error::invalid_argument("rows", "all rows must have the same length"));
        }
        let cells = rows.into_iter().flatten().collect();
        Ok(Self { cells, rows: n_rows, cols })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Cell at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.offset(row, col).map(|i| &self.cells[i])
    }

    /// Mutable cell at `(row, col)`, or `None` if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.offset(row, col).map(move |i| &mut self.cells[i])
    }

    /// Row `row` as a slice.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Row `row` as a mutable slice.
    pub fn row_mut(&mut self, row: usize) -> Option<&mut [T]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&mut self.cells[start..start + self.cols])
    }

    /// Column `col`, top to bottom.
    pub fn column(&self, col: usize) -> Option<Column<'_, T>> {
        if col >= self.cols {
            return None;
        }
        // A `0 × cols` grid has no cells to offset into.
        let tail = self.cells.get(col..).unwrap_or(&[]);
        Some(Column {
            inner: tail.iter().step_by(self.cols),
        })
    }

    /// Iterates over the rows as slices.
    pub fn iter_rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |r| {
            let start = r * self.cols;
            &self.cells[start..start + self.cols]
        })
    }

    /// Overwrites row `row` with `values`.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `row` is out of range or `values` has
    /// the wrong length.
    pub fn set_row(&mut self, row: usize, values: Vec<T>) -> Result<()> {
        if values.len() != self.cols {
            return Err(Error::invalid_argument("values", "length must equal the column count"));
        }
        let slot = self
            .row_mut(row)
            .ok_or_else(|| Error::invalid_argument("row", "index out of range"))?;
        for (cell, value) in slot.iter_mut().zip(values) {
            *cell = value;
        }
        Ok(())
    }

    /// Overwrites column `col` with `values`, top to bottom.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `col` is out of range or `values` has
    /// the wrong length.
    pub fn set_column(&mut self, col: usize, values: Vec<T>) -> Result<()> {
        if col >= self.cols {
            return Err(Error::invalid_argument("col", "index out of range"));
        }
        if values.len() != self.rows {
            return Err(Error::invalid_argument("values", "length must equal the row count"));
        }
        let Some(tail) = self.cells.get_mut(col..) else {
            return Ok(());
        };
        for (cell, value) in tail.iter_mut().step_by(self.cols).zip(values) {
            *cell = value;
        }
        Ok(())
    }

    /// Consumes the grid, returning the row-major cells.
    pub fn into_cells(self) -> Vec<T> {
        self.cells
    }
}

/// Iterator over one column of a [`Grid`].
#[derive(Debug, Clone)]
pub struct Column<'a, T> {
    inner: StepBy<slice::Iter<'a, T>>,
}

impl<'a, T> Iterator for Column<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Column<'_, T> {}

impl<T> DoubleEndedIterator for Column<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> FusedIterator for Column<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid<i32> {
        Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap()
    }

    #[test]
    fn test_new() {
        let g = Grid::new(2, 3, 0u8);
        assert_eq!(g.rows(), 2);
        assert_eq!(g.cols(), 3);
        assert!(g.iter_rows().all(|r| r == [0, 0, 0]));
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = Grid::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { name: "rows", .. }));
    }

    #[test]
    fn test_from_rows_empty() {
        let g: Grid<i32> = Grid::from_rows(vec![]).unwrap();
        assert!(g.is_empty());
        assert_eq!((g.rows(), g.cols()), (0, 0));
        let g: Grid<i32> = Grid::from_rows(vec![vec![], vec![]]).unwrap();
        assert_eq!((g.rows(), g.cols()), (2, 0));
        assert_eq!(g.row(1), Some(&[][..]));
        assert!(g.column(0).is_none());
    }

    #[test]
    fn test_zero_rows_with_columns() {
        let mut g = Grid::new(0, 3, 0);
        assert!(g.is_empty());
        assert_eq!(g.column(1).unwrap().count(), 0);
        assert_eq!(g.column(2).unwrap().len(), 0);
        assert!(g.column(3).is_none());
        assert_eq!(g.set_column(2, vec![]), Ok(()));
        assert!(g.set_column(1, vec![7]).is_err());
        assert!(g.set_column(3, vec![]).is_err());
        assert_eq!(g.row(0), None);
    }

    #[test]
    fn test_row() {
        let g = sample();
        assert_eq!(g.row(0), Some(&[1, 2, 3][..]));
        assert_eq!(g.row(2), Some(&[7, 8, 9][..]));
        assert_eq!(g.row(3), None);
    }

    #[test]
    fn test_column() {
        let g = sample();
        let col: Vec<i32> = g.column(1).unwrap().copied().collect();
        assert_eq!(col, vec![2, 5, 8]);
        assert_eq!(g.column(0).unwrap().len(), 3);
        let rev: Vec<i32> = g.column(2).unwrap().rev().copied().collect();
        assert_eq!(rev, vec![9, 6, 3]);
        assert!(g.column(3).is_none());
    }

    #[test]
    fn test_get() {
        let mut g = sample();
        assert_eq!(g.get(1, 2), Some(&6));
        assert_eq!(g.get(3, 0), None);
        assert_eq!(g.get(0, 3), None);
        *g.get_mut(2, 0).unwrap() = 70;
        assert_eq!(g.column(0).unwrap().copied().collect::<Vec<_>>(), vec![1, 4, 70]);
    }

    #[test]
    fn test_set_row() {
        let mut g = sample();
        g.set_row(1, vec![0, 0, 0]).unwrap();
        assert_eq!(g.row(1), Some(&[0, 0, 0][..]));
        assert!(g.set_row(1, vec![1]).is_err());
        assert!(g.set_row(5, vec![1, 2, 3]).is_err());
    }

    #[test]
    fn test_set_column() {
        let mut g = sample();
        g.set_column(2, vec![-1, -2, -3]).unwrap();
        assert_eq!(g.into_cells(), vec![1, 2, -1, 4, 5, -2, 7, 8, -3]);
    }

    #[test]
    fn test_set_column_errors() {
        let mut g = sample();
        let err = g.set_column(3, vec![1, 2, 3]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { name: "col", .. }));
        let err = g.set_column(0, vec![1, 2]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { name: "values", .. }));
    }

    #[test]
    fn test_non_square() {
        let g = Grid::from_rows(vec![vec!['a', 'b'], vec!['c', 'd'], vec!['e', 'f']]).unwrap();
        assert_eq!(g.column(1).unwrap().collect::<String>(), "bdf");
        assert_eq!(g.iter_rows().len(), 3);
    }
}
