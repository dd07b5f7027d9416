//! Core compute primitives.
//!
//! The dense row-major [`Matrix`] type underneath the arithmetic, block,
//! and factorization kernels.

mod matrix;

pub use matrix::Matrix;
