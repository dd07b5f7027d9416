//! Elementwise arithmetic and the multiply family.

use crate::error::{MatrizError, Result};
use crate::primitives::Matrix;

impl Matrix {
    /// Adds another matrix element-wise, returning a new matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(MatrizError::shape_mismatch(self.shape(), other.shape()));
        }
        let data: Vec<f64> = self
            .data()
            .iter()
            .zip(other.data().iter())
            .map(|(a, b)| a + b)
            .collect();
        Matrix::from_vec(self.n_rows(), self.n_cols(), data)
    }

    /// Subtracts another matrix element-wise, returning a new matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(MatrizError::shape_mismatch(self.shape(), other.shape()));
        }
        let data: Vec<f64> = self
            .data()
            .iter()
            .zip(other.data().iter())
            .map(|(a, b)| a - b)
            .collect();
        Matrix::from_vec(self.n_rows(), self.n_cols(), data)
    }

    /// Matrix-matrix multiplication: `self · other`.
    ///
    /// Output dimensions are (self.rows, other.cols).
    ///
    /// # Errors
    ///
    /// Returns an error if `self.n_cols() != other.n_rows()`.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        self.matmul_scaled(other, 1.0)
    }

    /// Scaled matrix-matrix multiplication: `scale · (self · other)`.
    ///
    /// # Errors
    ///
    /// Returns an error if `self.n_cols() != other.n_rows()`.
    pub fn matmul_scaled(&self, other: &Self, scale: f64) -> Result<Self> {
        if self.n_cols() != other.n_rows() {
            return Err(MatrizError::dimension_mismatch(
                "inner dimension",
                self.n_cols(),
                other.n_rows(),
            ));
        }
        let mut out = Matrix::zeros(self.n_rows(), other.n_cols());
        for i in 0..self.n_rows() {
            let a_row = self.row(i);
            let out_row = out.row_mut(i);
            for (k, &aik) in a_row.iter().enumerate() {
                let coeff = scale * aik;
                for (o, &b) in out_row.iter_mut().zip(other.row(k)) {
                    *o += coeff * b;
                }
            }
        }
        Ok(out)
    }

    /// Transposed multiplication: `selfᵗ · other`.
    ///
    /// Output dimensions are (self.cols, other.cols). Equivalent to
    /// `self.transpose().matmul(other)` without forming the transpose.
    ///
    /// # Errors
    ///
    /// Returns an error if `self.n_rows() != other.n_rows()`.
    pub fn tr_matmul(&self, other: &Self) -> Result<Self> {
        if self.n_rows() != other.n_rows() {
            return Err(MatrizError::dimension_mismatch(
                "shared row count",
                self.n_rows(),
                other.n_rows(),
            ));
        }
        let mut out = Matrix::zeros(self.n_cols(), other.n_cols());
        // out[i][j] = sum_k self[k][i] * other[k][j]; walking k outermost
        // keeps every access on a contiguous row.
        for k in 0..self.n_rows() {
            let a_row = self.row(k);
            let b_row = other.row(k);
            for (i, &aki) in a_row.iter().enumerate() {
                for (o, &b) in out.row_mut(i).iter_mut().zip(b_row) {
                    *o += aki * b;
                }
            }
        }
        Ok(out)
    }

    /// Multiplication by a transpose: `self · otherᵗ`.
    ///
    /// Output dimensions are (self.rows, other.rows).
    ///
    /// # Errors
    ///
    /// Returns an error if `self.n_cols() != other.n_cols()`.
    pub fn matmul_tr(&self, other: &Self) -> Result<Self> {
        if self.n_cols() != other.n_cols() {
            return Err(MatrizError::dimension_mismatch(
                "shared col count",
                self.n_cols(),
                other.n_cols(),
            ));
        }
        let mut out = Matrix::zeros(self.n_rows(), other.n_rows());
        for i in 0..self.n_rows() {
            let a_row = self.row(i);
            let out_row = out.row_mut(i);
            for (j, o) in out_row.iter_mut().enumerate() {
                *o = dot(a_row, other.row(j));
            }
        }
        Ok(out)
    }

    /// Accumulating multiplication: `self += a · b`.
    ///
    /// The receiver's dimensions must already equal (a.rows, b.cols); there
    /// is no implicit reshape because the prior contents are part of the
    /// result.
    ///
    /// # Errors
    ///
    /// Returns an error if the operand inner dimensions or the receiver
    /// dimensions are incompatible; the receiver is unchanged on failure.
    pub fn add_matmul(&mut self, a: &Self, b: &Self) -> Result<()> {
        if a.n_cols() != b.n_rows() {
            return Err(MatrizError::dimension_mismatch(
                "inner dimension",
                a.n_cols(),
                b.n_rows(),
            ));
        }
        if self.shape() != (a.n_rows(), b.n_cols()) {
            return Err(MatrizError::shape_mismatch(
                (a.n_rows(), b.n_cols()),
                self.shape(),
            ));
        }
        for i in 0..a.n_rows() {
            let a_row = a.row(i);
            let out_row = self.row_mut(i);
            for (k, &aik) in a_row.iter().enumerate() {
                for (o, &bv) in out_row.iter_mut().zip(b.row(k)) {
                    *o += aik * bv;
                }
            }
        }
        Ok(())
    }

    /// Accumulating transposed multiplication: `self += aᵗ · b`.
    ///
    /// The receiver's dimensions must already equal (a.cols, b.cols).
    ///
    /// # Errors
    ///
    /// Returns an error on any dimension incompatibility; the receiver is
    /// unchanged on failure.
    pub fn add_tr_matmul(&mut self, a: &Self, b: &Self) -> Result<()> {
        if a.n_rows() != b.n_rows() {
            return Err(MatrizError::dimension_mismatch(
                "shared row count",
                a.n_rows(),
                b.n_rows(),
            ));
        }
        if self.shape() != (a.n_cols(), b.n_cols()) {
            return Err(MatrizError::shape_mismatch(
                (a.n_cols(), b.n_cols()),
                self.shape(),
            ));
        }
        for k in 0..a.n_rows() {
            let a_row = a.row(k);
            let b_row = b.row(k);
            for (i, &aki) in a_row.iter().enumerate() {
                for (o, &bv) in self.row_mut(i).iter_mut().zip(b_row) {
                    *o += aki * bv;
                }
            }
        }
        Ok(())
    }

    /// Accumulating multiplication by a transpose: `self += a · bᵗ`.
    ///
    /// The receiver's dimensions must already equal (a.rows, b.rows).
    ///
    /// # Errors
    ///
    /// Returns an error on any dimension incompatibility; the receiver is
    /// unchanged on failure.
    pub fn add_matmul_tr(&mut self, a: &Self, b: &Self) -> Result<()> {
        if a.n_cols() != b.n_cols() {
            return Err(MatrizError::dimension_mismatch(
                "shared col count",
                a.n_cols(),
                b.n_cols(),
            ));
        }
        if self.shape() != (a.n_rows(), b.n_rows()) {
            return Err(MatrizError::shape_mismatch(
                (a.n_rows(), b.n_rows()),
                self.shape(),
            ));
        }
        for i in 0..a.n_rows() {
            let a_row = a.row(i);
            let out_row = self.row_mut(i);
            for (j, o) in out_row.iter_mut().enumerate() {
                *o += dot(a_row, b.row(j));
            }
        }
        Ok(())
    }

    /// Quadratic form: `selfᵗ · b · self`.
    ///
    /// `b` must be square with `b.rows == self.rows`. Output dimensions are
    /// (self.cols, self.cols). Computed as `b · self` followed by
    /// `selfᵗ · (b · self)`.
    ///
    /// # Errors
    ///
    /// Returns an error if `b` is not square or its size doesn't match
    /// `self.n_rows()`.
    pub fn quad_form(&self, b: &Self) -> Result<Self> {
        if !b.is_square() {
            return Err(MatrizError::shape_mismatch(
                (b.n_rows(), b.n_rows()),
                b.shape(),
            ));
        }
        if b.n_rows() != self.n_rows() {
            return Err(MatrizError::dimension_mismatch(
                "quadratic form size",
                self.n_rows(),
                b.n_rows(),
            ));
        }
        let ba = b.matmul(self)?;
        self.tr_matmul(&ba)
    }
}

#[inline]
fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
#[path = "arithmetic_tests.rs"]
mod tests;
