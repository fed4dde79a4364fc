//! Integration tests for sparse matrix arithmetic
//!
//! Exercises the add/subtract/multiply contracts end-to-end, including the
//! dimension checks and the bounds-checked accessor.

use spmat::prelude::*;

/// Helper to build a matrix from coordinate triples
fn from_triples(rows: usize, cols: usize, triples: &[(i64, i64, i64)]) -> SparseMatrix {
    let mut m = SparseMatrix::with_dims(rows, cols);
    for &(r, c, v) in triples {
        m.set(r, c, v);
    }
    m
}

/// Helper to assert two matrices agree on every cell of their shared grid
fn assert_cells_equal(a: &SparseMatrix, b: &SparseMatrix) {
    assert_eq!(a.shape(), b.shape(), "shape mismatch");
    for i in 0..a.rows() as i64 {
        for j in 0..a.cols() as i64 {
            assert_eq!(
                a.get(i, j).unwrap(),
                b.get(i, j).unwrap(),
                "cell ({i}, {j}) differs"
            );
        }
    }
}

#[test]
fn test_add_matches_cellwise_sum() {
    let a = from_triples(3, 4, &[(0, 0, 1), (1, 2, -5), (2, 3, 9)]);
    let b = from_triples(3, 4, &[(0, 0, 2), (1, 2, 5), (2, 0, -7)]);

    let c = a.add(&b).unwrap();
    for i in 0..3 {
        for j in 0..4 {
            assert_eq!(
                c.get(i, j).unwrap(),
                a.get(i, j).unwrap() + b.get(i, j).unwrap()
            );
        }
    }
}

#[test]
fn test_add_then_subtract_recovers_operand() {
    let a = from_triples(4, 4, &[(0, 1, 3), (2, 2, -6), (3, 0, 11)]);
    let b = from_triples(4, 4, &[(0, 1, -3), (1, 1, 4), (3, 3, 2)]);

    let back = a.add(&b).unwrap().subtract(&b).unwrap();
    assert_cells_equal(&back, &a);
}

#[test]
fn test_add_rejects_shape_mismatch() {
    let a = SparseMatrix::with_dims(2, 2);
    let b = SparseMatrix::with_dims(3, 3);
    assert!(matches!(a.add(&b), Err(Error::DimensionMismatch { .. })));
    assert!(matches!(b.subtract(&a), Err(Error::DimensionMismatch { .. })));
}

#[test]
fn test_multiply_result_shape() {
    let a = from_triples(2, 3, &[(0, 0, 1), (1, 2, 2)]);
    let b = from_triples(3, 5, &[(0, 4, 3), (2, 0, 4)]);

    let c = a.multiply(&b).unwrap();
    assert_eq!(c.rows(), a.rows());
    assert_eq!(c.cols(), b.cols());
}

#[test]
fn test_multiply_by_zero_matrix_has_no_nonzeros() {
    let a = from_triples(3, 3, &[(0, 0, 2), (1, 1, 3), (2, 2, 4)]);
    let zero = SparseMatrix::with_dims(3, 3);

    let c = a.multiply(&zero).unwrap();
    assert!(c.is_empty());
    let c = zero.multiply(&a).unwrap();
    assert!(c.is_empty());
}

#[test]
fn test_multiply_against_dense_reference() {
    // A [2, 3] * B [3, 2] checked against a hand-computed dense product
    let a = from_triples(2, 3, &[(0, 0, 1), (0, 1, 2), (1, 2, -3)]);
    let b = from_triples(3, 2, &[(0, 0, 4), (1, 0, 5), (1, 1, 6), (2, 1, 7)]);

    let c = a.multiply(&b).unwrap();
    let expected = from_triples(2, 2, &[(0, 0, 14), (0, 1, 12), (1, 1, -21)]);
    assert_cells_equal(&c, &expected);
}

#[test]
fn test_multiply_rejects_inner_dimension_mismatch() {
    let a = SparseMatrix::with_dims(2, 3);
    let b = SparseMatrix::with_dims(4, 2);
    assert!(matches!(
        a.multiply(&b),
        Err(Error::DimensionMismatch { .. })
    ));
}

#[test]
fn test_get_bounds_contract() {
    let m = from_triples(2, 2, &[(0, 0, 1)]);
    assert!(m.get(1, 1).is_ok());
    assert!(matches!(m.get(2, 1), Err(Error::IndexOutOfBounds { .. })));
    assert!(matches!(m.get(1, 2), Err(Error::IndexOutOfBounds { .. })));
    assert!(matches!(m.get(-1, -1), Err(Error::IndexOutOfBounds { .. })));
}

#[test]
fn test_chained_operations() {
    // (A + B) * C on 2x2 operands
    let a = from_triples(2, 2, &[(0, 0, 1), (1, 1, 1)]);
    let b = from_triples(2, 2, &[(0, 1, 2)]);
    let c = from_triples(2, 2, &[(0, 0, 3), (1, 0, 1)]);

    let result = a.add(&b).unwrap().multiply(&c).unwrap();
    // A + B = [[1, 2], [0, 1]]; times C = [[5, 0], [1, 0]]
    assert_eq!(result.get(0, 0).unwrap(), 5);
    assert_eq!(result.get(0, 1).unwrap(), 0);
    assert_eq!(result.get(1, 0).unwrap(), 1);
    assert_eq!(result.get(1, 1).unwrap(), 0);
}
