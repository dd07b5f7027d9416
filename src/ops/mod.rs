//! Arithmetic, multiply-family, and block-region kernels on [`Matrix`].
//!
//! Producers borrow their operands immutably and return fresh matrices;
//! accumulating operations (`add_*`) mutate the receiver in place and never
//! reshape it, since its prior contents are part of the result.
//!
//! [`Matrix`]: crate::primitives::Matrix

mod arithmetic;
mod block;
