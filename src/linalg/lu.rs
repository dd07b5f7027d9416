//! LU decomposition with partial pivoting.

use crate::error::{MatrizError, Result};
use crate::primitives::Matrix;

/// LU decomposition of a square matrix: `P · A = L · U`.
///
/// Stores the packed factors (unit-lower `L` below the diagonal, `U` on and
/// above it) and the row permutation. At each elimination step the remaining
/// row with the largest-magnitude pivot candidate is selected, bounding
/// error growth; a pivot indistinguishable from zero relative to the
/// matrix's scale fails the factorization with `SingularMatrix`.
///
/// # Examples
///
/// ```
/// use matriz::linalg::LuDecomposition;
/// use matriz::primitives::Matrix;
///
/// let a = Matrix::from_vec(2, 2, vec![2.0, 1.0, 5.0, 3.0]).expect("data length matches 2x2");
/// let lu = LuDecomposition::new(&a).expect("matrix is well conditioned");
///
/// let b = Matrix::from_vec(2, 1, vec![4.0, 11.0]).expect("data length matches 2x1");
/// let x = lu.solve(&b).expect("dimensions match");
/// assert!((x.get(0, 0).unwrap() - 1.0).abs() < 1e-12);
/// assert!((x.get(1, 0).unwrap() - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LuDecomposition {
    lu: Matrix,
    perm: Vec<usize>,
    even: bool,
}

impl LuDecomposition {
    /// Factors a square matrix.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `a` is not square and
    /// `SingularMatrix` if any pivot magnitude falls below
    /// `f64::EPSILON · n · max|aᵢⱼ|`.
    pub fn new(a: &Matrix) -> Result<Self> {
        if !a.is_square() {
            return Err(MatrizError::shape_mismatch(
                (a.n_rows(), a.n_rows()),
                a.shape(),
            ));
        }
        let n = a.n_rows();
        let mut lu = a.clone();
        let mut perm: Vec<usize> = (0..n).collect();
        let mut even = true;

        let max_abs = a.data().iter().fold(0.0_f64, |m, &x| m.max(x.abs()));
        let tolerance = f64::EPSILON * n as f64 * max_abs;

        for k in 0..n {
            // Pivot search: largest magnitude in column k, rows k..n.
            let mut pivot_row = k;
            let mut pivot_mag = lu.row(k)[k].abs();
            for i in k + 1..n {
                let mag = lu.row(i)[k].abs();
                if mag > pivot_mag {
                    pivot_row = i;
                    pivot_mag = mag;
                }
            }
            if pivot_mag <= tolerance {
                return Err(MatrizError::SingularMatrix { pivot: pivot_mag });
            }
            if pivot_row != k {
                swap_rows(&mut lu, pivot_row, k);
                perm.swap(pivot_row, k);
                even = !even;
            }

            // Eliminate below the pivot; store multipliers in place.
            let inv_pivot = 1.0 / lu.row(k)[k];
            for i in k + 1..n {
                let multiplier = lu.row(i)[k] * inv_pivot;
                lu.row_mut(i)[k] = multiplier;
                for j in k + 1..n {
                    let ukj = lu.row(k)[j];
                    lu.row_mut(i)[j] -= multiplier * ukj;
                }
            }
        }

        Ok(Self { lu, perm, even })
    }

    /// Solves `A · x = b` for `x` via forward/back substitution.
    ///
    /// `b` may carry multiple right-hand-side columns; all are solved
    /// against this single factorization. Output dimensions match `b`.
    ///
    /// # Errors
    ///
    /// Returns an error if `b.n_rows()` differs from the factored size.
    pub fn solve(&self, b: &Matrix) -> Result<Matrix> {
        let n = self.lu.n_rows();
        if b.n_rows() != n {
            return Err(MatrizError::dimension_mismatch(
                "rhs rows",
                n,
                b.n_rows(),
            ));
        }
        let mut x = Matrix::zeros(n, b.n_cols());
        let mut work = vec![0.0; n];
        for col in 0..b.n_cols() {
            // Forward substitution: L · y = P · b (L has a unit diagonal).
            for i in 0..n {
                let mut sum = b.row(self.perm[i])[col];
                for j in 0..i {
                    sum -= self.lu.row(i)[j] * work[j];
                }
                work[i] = sum;
            }
            // Back substitution: U · x = y, overwriting the work buffer.
            for i in (0..n).rev() {
                let mut sum = work[i];
                for j in i + 1..n {
                    sum -= self.lu.row(i)[j] * work[j];
                }
                work[i] = sum / self.lu.row(i)[i];
            }
            for i in 0..n {
                x.row_mut(i)[col] = work[i];
            }
        }
        Ok(x)
    }

    /// Computes the matrix inverse by solving `A · X = I` column by column.
    ///
    /// # Errors
    ///
    /// Never fails for a successfully constructed factorization; the
    /// `Result` mirrors [`solve`](Self::solve).
    pub fn inverse(&self) -> Result<Matrix> {
        self.solve(&Matrix::eye(self.lu.n_rows()))
    }

    /// Computes the determinant from the factor diagonal and the
    /// permutation parity.
    #[must_use]
    pub fn det(&self) -> f64 {
        let n = self.lu.n_rows();
        let mut d = if self.even { 1.0 } else { -1.0 };
        for i in 0..n {
            d *= self.lu.row(i)[i];
        }
        d
    }
}

fn swap_rows(m: &mut Matrix, i: usize, j: usize) {
    let cols = m.n_cols();
    let data = m.data_mut();
    for c in 0..cols {
        data.swap(i * cols + c, j * cols + c);
    }
}

impl Matrix {
    /// Computes the inverse of a square matrix.
    ///
    /// Backed by LU decomposition with partial pivoting; the inverse is
    /// obtained by solving `A · X = I` column by column, never by cofactor
    /// expansion.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the matrix is not square and
    /// `SingularMatrix` if it is singular within working precision.
    pub fn invert(&self) -> Result<Self> {
        LuDecomposition::new(self)?.inverse()
    }

    /// Solves `self · x = b` for `x`.
    ///
    /// `self` must be square with `self.rows == b.rows`; `b` may have
    /// multiple columns, solved simultaneously.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` on incompatible shapes and
    /// `SingularMatrix` if `self` is singular within working precision.
    pub fn solve(&self, b: &Self) -> Result<Self> {
        LuDecomposition::new(self)?.solve(b)
    }
}

#[cfg(test)]
#[path = "lu_tests.rs"]
mod tests;
