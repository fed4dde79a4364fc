//! Error types for spmat

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using spmat's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in spmat operations
#[derive(Error, Debug)]
pub enum Error {
    /// Input file could not be opened
    #[error("file not found: {path}")]
    NotFound {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying open failure
        #[source]
        source: std::io::Error,
    },

    /// Input text does not match the coordinate-triple format
    #[error("input file has wrong format: {reason}")]
    Format {
        /// What was malformed and where
        reason: String,
    },

    /// `get` called with a coordinate outside the declared bounds
    #[error("index ({row}, {col}) out of bounds for {}x{} matrix", shape[0], shape[1])]
    IndexOutOfBounds {
        /// Requested row
        row: i64,
        /// Requested column
        col: i64,
        /// Declared matrix shape [rows, cols]
        shape: [usize; 2],
    },

    /// Operand shapes are incompatible for an operation
    #[error("dimension mismatch for {op}: {}x{} vs {}x{}", lhs[0], lhs[1], rhs[0], rhs[1])]
    DimensionMismatch {
        /// The operation name
        op: &'static str,
        /// Left-hand operand shape
        lhs: [usize; 2],
        /// Right-hand operand shape
        rhs: [usize; 2],
    },

    /// Stream read failure after the file was opened
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a format error
    pub fn format(reason: impl Into<String>) -> Self {
        Self::Format {
            reason: reason.into(),
        }
    }

    /// Create an out-of-bounds error
    pub fn out_of_bounds(row: i64, col: i64, shape: [usize; 2]) -> Self {
        Self::IndexOutOfBounds { row, col, shape }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch(op: &'static str, lhs: [usize; 2], rhs: [usize; 2]) -> Self {
        Self::DimensionMismatch { op, lhs, rhs }
    }
}
