//! Sparse matrix storage and arithmetic
//!
//! A [`SparseMatrix`] keeps declared dimensions plus a coordinate map holding
//! only the cells that were explicitly set; every other cell implicitly reads
//! as 0. Construction happens either empty via [`SparseMatrix::with_dims`] or
//! from the text format via [`SparseMatrix::from_path`] /
//! [`SparseMatrix::from_reader`].
//!
//! Arithmetic is pure: `add`, `subtract`, and `multiply` borrow their
//! operands and return a freshly allocated result.

mod arithmetic;
mod core;
mod render;

pub use core::SparseMatrix;
pub use render::{DEFAULT_MAX_COLS, DEFAULT_MAX_ROWS};
