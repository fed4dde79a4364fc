//! Core SparseMatrix implementation: struct, creation, element access

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Sparse integer matrix in coordinate-map form
///
/// Stores declared dimensions plus a map from `(row, col)` to the value
/// explicitly set there. Cells absent from the map implicitly hold 0.
///
/// Coordinates are `i64` rather than `usize` so that out-of-range entries
/// read from a file are stored as-is; they only surface as an error when
/// read back through the bounds-checked [`get`](SparseMatrix::get).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseMatrix {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) entries: HashMap<(i64, i64), i64>,
}

impl SparseMatrix {
    /// Create an empty matrix with the given dimensions
    ///
    /// Every cell of the new matrix reads as 0.
    pub fn with_dims(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: HashMap::new(),
        }
    }

    /// Returns the declared number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the declared number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the shape as [rows, cols]
    pub fn shape(&self) -> [usize; 2] {
        [self.rows, self.cols]
    }

    /// Returns the number of explicitly stored entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries are stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read the value at `(row, col)`
    ///
    /// Returns the stored value, or 0 if the cell was never set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] unless `0 <= row < rows` and
    /// `0 <= col < cols`, regardless of whether the coordinate has a stored
    /// value.
    pub fn get(&self, row: i64, col: i64) -> Result<i64> {
        if !self.in_bounds(row, col) {
            return Err(Error::out_of_bounds(row, col, self.shape()));
        }
        Ok(self.entries.get(&(row, col)).copied().unwrap_or(0))
    }

    /// Store `value` at `(row, col)`, overwriting any prior value
    ///
    /// Deliberately performs no bounds check, matching `get`'s asymmetric
    /// contract: an out-of-range store succeeds and the value is only
    /// reachable again through the entry map, never through `get`.
    pub fn set(&mut self, row: i64, col: i64, value: i64) {
        self.entries.insert((row, col), value);
    }

    fn in_bounds(&self, row: i64, col: i64) -> bool {
        (0..self.rows as i64).contains(&row) && (0..self.cols as i64).contains(&col)
    }
}
