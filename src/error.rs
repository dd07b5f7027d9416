//! Error types for matriz operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for matriz operations.
///
/// Shape and bounds errors are deterministic contract violations and are
/// detected before the receiver is mutated; singularity is a data-dependent
/// numerical condition reported by the LU factorization.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::DimensionMismatch {
///     expected: "3x4".to_string(),
///     actual: "3x5".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum MatrizError {
    /// Operand or output shape incompatible with the requested operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Index, offset, or extent outside the valid range.
    OutOfBounds {
        /// What was being indexed (e.g. "row", "destination rectangle")
        what: String,
        /// Offending index or extent end
        index: usize,
        /// Exclusive bound that was violated
        bound: usize,
    },

    /// Matrix is singular (non-invertible) within working precision.
    SingularMatrix {
        /// Magnitude of the pivot that fell below tolerance
        pivot: f64,
    },
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Matrix dimension mismatch: expected {expected}, got {actual}"
                )
            }
            MatrizError::OutOfBounds { what, index, bound } => {
                write!(f, "Out of bounds: {what} index {index} exceeds {bound}")
            }
            MatrizError::SingularMatrix { pivot } => {
                write!(
                    f,
                    "Singular matrix detected: pivot magnitude = {pivot}, cannot factor"
                )
            }
        }
    }
}

impl std::error::Error for MatrizError {}

impl MatrizError {
    /// Create a dimension mismatch error from two (rows, cols) pairs.
    #[must_use]
    pub fn shape_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }

    /// Create a dimension mismatch error with descriptive context.
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create an out of bounds error.
    #[must_use]
    pub fn out_of_bounds(what: &str, index: usize, bound: usize) -> Self {
        Self::OutOfBounds {
            what: what.to_string(),
            index,
            bound,
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatrizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = MatrizError::DimensionMismatch {
            expected: "3x4".to_string(),
            actual: "4x3".to_string(),
        };
        assert!(err.to_string().contains("dimension mismatch"));
        assert!(err.to_string().contains("3x4"));
        assert!(err.to_string().contains("4x3"));
    }

    #[test]
    fn test_out_of_bounds_display() {
        let err = MatrizError::out_of_bounds("row", 7, 5);
        let msg = err.to_string();
        assert!(msg.contains("row"));
        assert!(msg.contains('7'));
        assert!(msg.contains('5'));
    }

    #[test]
    fn test_singular_matrix_display() {
        let err = MatrizError::SingularMatrix { pivot: 1e-18 };
        let msg = err.to_string();
        assert!(msg.contains("Singular matrix"));
        assert!(msg.contains("1e-18") || msg.contains("0.000000000000000001"));
    }

    #[test]
    fn test_shape_mismatch_helper() {
        let err = MatrizError::shape_mismatch((2, 3), (3, 2));
        let msg = err.to_string();
        assert!(msg.contains("2x3"));
        assert!(msg.contains("3x2"));
    }

    #[test]
    fn test_dimension_mismatch_helper() {
        let err = MatrizError::dimension_mismatch("rows", 10, 8);
        let msg = err.to_string();
        assert!(msg.contains("rows=10"));
        assert!(msg.contains('8'));
    }

    #[test]
    fn test_error_debug_impl() {
        let err = MatrizError::SingularMatrix { pivot: 0.0 };
        let debug_str = format!("{err:?}");
        assert!(debug_str.contains("SingularMatrix"));
    }

    #[test]
    fn test_error_source_is_none() {
        use std::error::Error;
        let err = MatrizError::out_of_bounds("col", 1, 0);
        assert!(err.source().is_none());
    }
}
