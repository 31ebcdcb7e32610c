//! Linear algebra operations.
//!
//! All routines are implemented from scratch — no external BLAS/LAPACK
//! bindings. The API is split into broadcast-aware contractions,
//! reductions, and matrix decompositions:
//!
//! | Group        | Operations                                     |
//! |--------------|------------------------------------------------|
//! | Contractions | [`dot`], [`vdot`], [`cross`], [`matmul`], [`tensordot`] |
//! | Reductions   | [`norm`], [`norm_axis`], [`trace`]             |
//! | Systems      | [`solve`], [`inv`], [`det`]                    |
//!
//! Decompositions: [`LuDecomposition`], [`LdlDecomposition`],
//! [`CholeskyDecomposition`]

pub mod contract;
pub mod decomp;
pub mod norms;

pub use contract::{cross, dot, matmul, tensordot, vdot};
pub use decomp::CholeskyDecomposition;
pub use decomp::LdlDecomposition;
pub use decomp::LuDecomposition;
pub use norms::{norm, norm_axis, trace};

use crate::Float;
use crate::error::Result;
use crate::tensor::{Tensor, TensorView};

/// Solve the linear system `Ax = b` for a square matrix `A`.
///
/// Uses LU decomposition with partial pivoting internally.
///
/// ```
/// # use tenax_core::tensor::Tensor;
/// # use tenax_core::linalg;
/// let a = Tensor::from_vec(vec![2.0_f64, 1.0, 1.0, 4.0], vec![2, 2]).unwrap();
/// let b = Tensor::from_vec(vec![5.0_f64, 6.0], vec![2]).unwrap();
/// let x = linalg::solve(&a, &b).unwrap();
/// assert!((x.as_slice()[0] - 2.0).abs() < 1e-10);
/// assert!((x.as_slice()[1] - 1.0).abs() < 1e-10);
/// ```
pub fn solve<'a, T: Float>(a: impl Into<TensorView<'a, T>>, b: &Tensor<T>) -> Result<Tensor<T>> {
    LuDecomposition::decompose(a)?.solve(b)
}

/// Compute the inverse of a square matrix.
///
/// Uses LU decomposition with partial pivoting internally. Singularity
/// is not detected: a singular matrix comes back with non-finite
/// entries rather than an error.
///
/// ```
/// # use tenax_core::tensor::Tensor;
/// # use tenax_core::linalg;
/// let a = Tensor::from_vec(vec![2.0_f64, 1.0, 1.0, 4.0], vec![2, 2]).unwrap();
/// let inv = linalg::inv(&a).unwrap();
/// // A * A^-1 ≈ I
/// let eye = a.matmul(&inv).unwrap();
/// assert!((eye.as_slice()[0] - 1.0).abs() < 1e-10);
/// ```
pub fn inv<'a, T: Float>(a: impl Into<TensorView<'a, T>>) -> Result<Tensor<T>> {
    LuDecomposition::decompose(a)?.inverse()
}

/// Compute the determinant of a square matrix.
///
/// Uses LU decomposition with partial pivoting internally. A singular
/// matrix has determinant zero; only a non-square input is an error.
///
/// ```
/// # use tenax_core::tensor::Tensor;
/// # use tenax_core::linalg;
/// let a = Tensor::from_vec(vec![2.0_f64, 1.0, 1.0, 4.0], vec![2, 2]).unwrap();
/// let det = linalg::det(&a).unwrap();
/// assert!((det - 7.0).abs() < 1e-10);
/// ```
pub fn det<'a, T: Float>(a: impl Into<TensorView<'a, T>>) -> Result<T> {
    LuDecomposition::decompose(a)?.det()
}

// ======================================================================
// Convenience methods on Tensor
// ======================================================================

impl<T: Float> Tensor<T> {
    /// Solve the linear system `self * x = b` for a square matrix `self`.
    ///
    /// Uses LU decomposition with partial pivoting.
    pub fn solve(&self, b: &Tensor<T>) -> Result<Tensor<T>> {
        solve(self, b)
    }

    /// Compute the inverse of a square matrix.
    ///
    /// Uses LU decomposition with partial pivoting.
    pub fn inv(&self) -> Result<Tensor<T>> {
        inv(self)
    }

    /// Compute the determinant of a square matrix.
    ///
    /// Uses LU decomposition with partial pivoting.
    pub fn det(&self) -> Result<T> {
        det(self)
    }
}
