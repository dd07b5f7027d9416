//! Matriz: dense double-precision matrix kernels in pure Rust.
//!
//! Matriz provides the core linear-algebra primitives — the multiply family,
//! elementwise arithmetic, transpose, LU-based invert/solve, and
//! block-region composition — for small-to-medium matrices, intended as the
//! computational kernel beneath optimization and control stacks.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let a = Matrix::from_vec(2, 2, vec![
//!     4.0, 7.0,
//!     2.0, 6.0,
//! ]).unwrap();
//!
//! // Invert via LU with partial pivoting, then check A * A^-1 = I.
//! let inv = a.invert().unwrap();
//! let product = a.matmul(&inv).unwrap();
//! assert!(product.is_approx(&Matrix::eye(2), 1e-10));
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: the dense row-major [`Matrix`](primitives::Matrix) type
//! - [`ops`]: arithmetic, the multiply family, and block operations
//! - [`linalg`]: LU factorization, solve, and invert
//! - [`error`]: error types
//!
//! Every operation validates operand shapes before touching the receiver;
//! shape and bounds violations are reported as errors, and a singular
//! matrix fails `invert`/`solve` rather than yielding a garbage result.

pub mod error;
pub mod linalg;
pub mod ops;
pub mod prelude;
pub mod primitives;
