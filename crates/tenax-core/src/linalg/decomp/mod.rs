//! Matrix decompositions.
//!
//! | Decomposition | Module       | Factorization           |
//! |---------------|--------------|-------------------------|
//! | LU            | [`lu`]       | `A = P L U`             |
//! | LDL           | [`ldl`]      | `A = L D L^H`           |
//! | Cholesky      | [`cholesky`] | `A = L L^H`             |
//!
//! All three accept anything convertible to a [`TensorView`], so a
//! transposed or broadcast view factorizes without a copy. The input is
//! never mutated; each decomposition works on a private copy.
//!
//! [`TensorView`]: crate::tensor::TensorView

pub mod cholesky;
pub mod ldl;
pub mod lu;

pub use cholesky::CholeskyDecomposition;
pub use ldl::LdlDecomposition;
pub use lu::LuDecomposition;
