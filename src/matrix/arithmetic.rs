//! SparseMatrix arithmetic: add, subtract, multiply
//!
//! All three operations are pure: operands are borrowed immutably and the
//! result is a newly allocated matrix.

use super::SparseMatrix;
use crate::error::{Error, Result};

impl SparseMatrix {
    /// Element-wise addition: C = A + B
    ///
    /// Iterates the full `rows x cols` grid through the bounds-checked
    /// accessor, so complexity is O(rows * cols) regardless of sparsity.
    /// Cells that sum to 0 are not stored in the result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] unless both operands have the
    /// same shape.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(Error::dimension_mismatch("add", self.shape(), other.shape()));
        }

        let mut result = Self::with_dims(self.rows, self.cols);
        for row in 0..self.rows as i64 {
            for col in 0..self.cols as i64 {
                let sum = self.get(row, col)? + other.get(row, col)?;
                if sum != 0 {
                    result.set(row, col, sum);
                }
            }
        }
        Ok(result)
    }

    /// Element-wise subtraction: C = A - B
    ///
    /// Same shape contract and dense-iteration complexity as
    /// [`add`](SparseMatrix::add).
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] unless both operands have the
    /// same shape.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(Error::dimension_mismatch(
                "subtract",
                self.shape(),
                other.shape(),
            ));
        }

        let mut result = Self::with_dims(self.rows, self.cols);
        for row in 0..self.rows as i64 {
            for col in 0..self.cols as i64 {
                let diff = self.get(row, col)? - other.get(row, col)?;
                if diff != 0 {
                    result.set(row, col, diff);
                }
            }
        }
        Ok(result)
    }

    /// Matrix multiplication: C = A * B
    ///
    /// Sparse-aware: iterates only A's stored nonzero entries `(i, k)` and,
    /// for each, scans B's columns, accumulating `A[i,k] * B[k,j]` into the
    /// result whenever `B[k,j]` is nonzero. Complexity is O(nnz(A) * cols(B))
    /// rather than the dense O(rows(A) * cols(A) * cols(B)).
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] unless `self.cols == other.rows`.
    /// A stored entry of A whose inner coordinate `k` falls outside B's rows
    /// surfaces as the accessor's [`Error::IndexOutOfBounds`].
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(Error::dimension_mismatch(
                "multiply",
                self.shape(),
                other.shape(),
            ));
        }

        let mut result = Self::with_dims(self.rows, other.cols);
        for (&(i, k), &lhs) in &self.entries {
            if lhs == 0 {
                continue;
            }
            for j in 0..other.cols as i64 {
                let rhs = other.get(k, j)?;
                if rhs != 0 {
                    *result.entries.entry((i, j)).or_insert(0) += lhs * rhs;
                }
            }
        }
        Ok(result)
    }
}
