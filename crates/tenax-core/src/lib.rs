//! `tenax-core` — Foundation crate for the Tenax ecosystem.
//!
//! Provides dense N-dimensional tensors, numeric type traits, zero-copy
//! views, and linear algebra. All other `tenax-*` crates build on top of
//! this one.
//!
//! # Design
//!
//! - Generic over numeric types via the [`Scalar`] / [`Float`] / [`Real`]
//!   trait hierarchy; complex elements come from [`num_complex`].
//! - **Zero-copy views**: transposition, conjugation, and broadcasting
//!   are [`TensorView`] metadata changes, never buffer copies.
//! - Fallible throughout: shape and axis mismatches surface as
//!   [`CoreError`] values. Degenerate numerics do not — a singular
//!   matrix factorizes, its determinant is zero, and only Cholesky has
//!   a domain failure of its own.

pub mod dtype;
pub mod error;
pub mod linalg;
pub mod tensor;

// Re-export key types at crate root for convenience.
pub use dtype::{Float, Integer, Real, Scalar};
pub use error::{CoreError, Result};
pub use tensor::{Tensor, TensorView};

/// Items intended for glob-import: `use tenax_core::prelude::*;`
pub mod prelude {
    pub use crate::dtype::{Float, Integer, Real, Scalar};
    pub use crate::error::{CoreError, Result};
    pub use crate::tensor::{Tensor, TensorView};
}
