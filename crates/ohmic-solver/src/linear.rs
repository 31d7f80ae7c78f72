//! Dense linear system solver.

use nalgebra::{DMatrix, DVector};

use crate::error::{Error, Result};

/// Solve `Ax = b` by Gaussian elimination with partial pivoting.
///
/// At each column the row with the largest absolute value at or below
/// the diagonal becomes the pivot; rows are swapped, entries below the
/// pivot eliminated, and the unknowns recovered by back-substitution.
/// The elimination order is fixed, so identical inputs produce
/// identical outputs.
///
/// A pivot is rejected as singular when its magnitude falls at or below
/// an epsilon scaled to the matrix (`max|A| * n * f64::EPSILON`) rather
/// than compared to exact zero: floating-point elimination of a
/// genuinely singular system rarely lands on exact zero.
pub fn solve_dense(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<DVector<f64>> {
    let n = a.nrows();
    if a.ncols() != n {
        return Err(Error::DimensionMismatch {
            expected: n,
            actual: a.ncols(),
        });
    }
    if b.len() != n {
        return Err(Error::DimensionMismatch {
            expected: n,
            actual: b.len(),
        });
    }

    if n == 0 {
        return Ok(DVector::zeros(0));
    }

    let mut m = a.clone();
    let mut rhs = b.clone();

    let scale = m.amax();
    if scale == 0.0 {
        return Err(Error::SingularMatrix);
    }
    let pivot_tol = scale * n as f64 * f64::EPSILON;

    // Forward elimination.
    for col in 0..n {
        let pivot_row = (col..n)
            .max_by(|&r, &s| m[(r, col)].abs().total_cmp(&m[(s, col)].abs()))
            .expect("non-empty pivot range");
        if m[(pivot_row, col)].abs() <= pivot_tol {
            return Err(Error::SingularMatrix);
        }
        if pivot_row != col {
            m.swap_rows(pivot_row, col);
            rhs.swap_rows(pivot_row, col);
        }

        let pivot = m[(col, col)];
        for row in (col + 1)..n {
            let factor = m[(row, col)] / pivot;
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                m[(row, k)] -= factor * m[(col, k)];
            }
            rhs[row] -= factor * rhs[col];
        }
    }

    // Back-substitution.
    let mut x = DVector::zeros(n);
    for row in (0..n).rev() {
        let mut acc = rhs[row];
        for col in (row + 1)..n {
            acc -= m[(row, col)] * x[col];
        }
        x[row] = acc / m[(row, row)];
    }

    Ok(x)
}
