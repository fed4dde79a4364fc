//! SparseMatrix rendering: full Display plus truncated readable view

use std::fmt;

use super::SparseMatrix;

/// Default row limit for [`SparseMatrix::readable`]
pub const DEFAULT_MAX_ROWS: usize = 10;
/// Default column limit for [`SparseMatrix::readable`]
pub const DEFAULT_MAX_COLS: usize = 10;

/// Width of each cell in the readable rendering
const CELL_WIDTH: usize = 5;

impl SparseMatrix {
    /// Render a truncated view with the default 10x10 window
    ///
    /// See [`readable_with_limits`](SparseMatrix::readable_with_limits).
    pub fn readable(&self) -> String {
        self.readable_with_limits(DEFAULT_MAX_ROWS, DEFAULT_MAX_COLS)
    }

    /// Render a truncated human-readable view
    ///
    /// Shows at most the top-left `max_rows x max_cols` window, each value
    /// right-aligned in a width-5 field. When either dimension exceeds its
    /// limit, the grid is preceded by a one-line size notice and followed by
    /// an `...` marker line.
    pub fn readable_with_limits(&self, max_rows: usize, max_cols: usize) -> String {
        let truncated = self.rows > max_rows || self.cols > max_cols;
        let mut out = String::new();

        if truncated {
            out.push_str(&format!(
                "Matrix is large ({}x{}). Showing only top-left {}x{} elements.\n",
                self.rows, self.cols, max_rows, max_cols
            ));
        }

        for row in 0..self.rows.min(max_rows) as i64 {
            for col in 0..self.cols.min(max_cols) as i64 {
                let value = self.entries.get(&(row, col)).copied().unwrap_or(0);
                out.push_str(&format!("{value:>CELL_WIDTH$} "));
            }
            out.push('\n');
        }

        if truncated {
            out.push_str("...\n");
        }

        out
    }
}

/// Full rendering: `rows` lines of `cols` space-separated values,
/// zeros included.
impl fmt::Display for SparseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows as i64 {
            for col in 0..self.cols as i64 {
                let value = self.entries.get(&(row, col)).copied().unwrap_or(0);
                write!(f, "{value} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
