//! Matrix type for dense 2D numeric data.

use crate::error::{MatrizError, Result};
use serde::{Deserialize, Serialize};

/// A dense matrix of `f64` values (row-major storage).
///
/// Dimensions may be zero; the logical size is always exactly
/// `rows * cols` elements. Reshaping reuses the allocation where possible.
///
/// # Examples
///
/// ```
/// use matriz::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Creates a matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn eye(n: usize) -> Self {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self {
            data,
            rows: n,
            cols: n,
        }
    }

    /// Creates a new matrix from a vector of row-major data.
    ///
    /// # Errors
    ///
    /// Returns an error if data length doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MatrizError::dimension_mismatch(
                "rows*cols",
                rows * cols,
                data.len(),
            ));
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a new matrix by copying an external row-major representation.
    ///
    /// The copy is value-exact; no precision is lost beyond native `f64`.
    ///
    /// # Errors
    ///
    /// Returns an error if data length doesn't match rows * cols.
    pub fn from_row_major(rows: usize, cols: usize, data: &[f64]) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MatrizError::dimension_mismatch(
                "rows*cols",
                rows * cols,
                data.len(),
            ));
        }
        Ok(Self {
            data: data.to_vec(),
            rows,
            cols,
        })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Returns true if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Gets element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if either index is outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.check_index(row, col)?;
        Ok(self.data[row * self.cols + col])
    }

    /// Sets element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if either index is outside the matrix.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        self.check_index(row, col)?;
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows {
            return Err(MatrizError::out_of_bounds("row", row, self.rows));
        }
        if col >= self.cols {
            return Err(MatrizError::out_of_bounds("col", col, self.cols));
        }
        Ok(())
    }

    /// Returns the underlying row-major data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Row `r` as a contiguous slice. Callers must have validated `r`.
    #[inline]
    pub(crate) fn row(&self, r: usize) -> &[f64] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    #[inline]
    pub(crate) fn row_mut(&mut self, r: usize) -> &mut [f64] {
        let c = self.cols;
        &mut self.data[r * c..(r + 1) * c]
    }

    #[inline]
    pub(crate) fn data(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub(crate) fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Changes the logical dimensions in place, reusing the allocation.
    ///
    /// Elements of any region not subsequently written are unspecified.
    pub fn reshape(&mut self, rows: usize, cols: usize) {
        self.data.resize(rows * cols, 0.0);
        self.rows = rows;
        self.cols = cols;
    }

    /// Copies a full external row-major representation into this matrix,
    /// reshaping the receiver to match if dimensions differ.
    ///
    /// # Errors
    ///
    /// Returns an error if `data.len() != rows * cols`; the receiver is
    /// unchanged on failure.
    pub fn copy_from(&mut self, rows: usize, cols: usize, data: &[f64]) -> Result<()> {
        if data.len() != rows * cols {
            return Err(MatrizError::dimension_mismatch(
                "rows*cols",
                rows * cols,
                data.len(),
            ));
        }
        self.reshape(rows, cols);
        self.data.copy_from_slice(data);
        Ok(())
    }

    /// Copies this matrix into a caller-provided row-major representation of
    /// identical dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if the external dimensions differ from the
    /// receiver's; the external buffer is unchanged on failure.
    pub fn copy_into(&self, rows: usize, cols: usize, data: &mut [f64]) -> Result<()> {
        if rows != self.rows || cols != self.cols {
            return Err(MatrizError::shape_mismatch(
                (self.rows, self.cols),
                (rows, cols),
            ));
        }
        if data.len() != rows * cols {
            return Err(MatrizError::dimension_mismatch(
                "rows*cols",
                rows * cols,
                data.len(),
            ));
        }
        data.copy_from_slice(&self.data);
        Ok(())
    }

    /// Sets all elements to zero, keeping dimensions.
    pub fn zero(&mut self) {
        self.data.fill(0.0);
    }

    /// Sets all elements to `value`, keeping dimensions.
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Returns true if any element is NaN.
    #[must_use]
    pub fn contains_nan(&self) -> bool {
        self.data.iter().any(|x| x.is_nan())
    }

    /// Multiplies each element by a scalar, returning a new matrix.
    #[must_use]
    pub fn mul_scalar(&self, scalar: f64) -> Self {
        Self {
            data: self.data.iter().map(|x| x * scalar).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Transposes the matrix, returning a new (cols, rows) matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = vec![0.0; self.rows * self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Removes one row in place, shifting later rows up.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `row >= n_rows()`.
    pub fn remove_row(&mut self, row: usize) -> Result<()> {
        if row >= self.rows {
            return Err(MatrizError::out_of_bounds("row", row, self.rows));
        }
        let start = row * self.cols;
        self.data.drain(start..start + self.cols);
        self.rows -= 1;
        Ok(())
    }

    /// Removes one column in place, shifting later columns left.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `col >= n_cols()`.
    pub fn remove_col(&mut self, col: usize) -> Result<()> {
        if col >= self.cols {
            return Err(MatrizError::out_of_bounds("col", col, self.cols));
        }
        let old_cols = self.cols;
        let new_cols = old_cols - 1;
        // Compact row by row within the existing buffer, then drop the tail.
        for r in 0..self.rows {
            let src_base = r * old_cols;
            let dst_base = r * new_cols;
            for c in 0..new_cols {
                let src = if c < col { src_base + c } else { src_base + c + 1 };
                self.data[dst_base + c] = self.data[src];
            }
        }
        self.data.truncate(self.rows * new_cols);
        self.cols = new_cols;
        Ok(())
    }

    /// Approximate equality: true iff dimensions match and every pair of
    /// corresponding elements differs by at most `tolerance` in absolute
    /// value. Dimension mismatch yields `false`, never an error.
    #[must_use]
    pub fn is_approx(&self, other: &Self, tolerance: f64) -> bool {
        if self.rows != other.rows || self.cols != other.cols {
            return false;
        }
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
