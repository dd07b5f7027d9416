//! Factorization-based solvers.
//!
//! LU decomposition with partial pivoting, backing [`Matrix::invert`] and
//! [`Matrix::solve`].
//!
//! [`Matrix::invert`]: crate::primitives::Matrix::invert
//! [`Matrix::solve`]: crate::primitives::Matrix::solve

mod lu;

pub use lu::LuDecomposition;
