//! # spmat
//!
//! **Sparse integer matrix arithmetic over a coordinate-triple text format.**
//!
//! spmat stores matrices as a coordinate map from `(row, col)` to a nonzero
//! `i64` value and supports addition, subtraction, and multiplication, plus a
//! line-oriented parser for a simple text format:
//!
//! ```text
//! rows=3
//! cols=3
//! (0, 0, 5)
//! (2, 1, -3)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use spmat::prelude::*;
//!
//! let a = SparseMatrix::from_path("a.txt")?;
//! let b = SparseMatrix::from_path("b.txt")?;
//!
//! let sum = a.add(&b)?;
//! println!("{}", sum.readable());
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`error::Result`]. Parse failures carry a
//! descriptive reason, `get` is bounds-checked, and the arithmetic operations
//! validate operand shapes up front.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod matrix;
mod parser;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::matrix::SparseMatrix;
}
