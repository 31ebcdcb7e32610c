//! LDL decomposition (square-root-free Cholesky).
//!
//! Decomposes a Hermitian matrix `A` into `L * D * L^H` where `L` is
//! unit-lower-triangular and `D` is diagonal. Only the lower triangle of
//! the input is read; the upper triangle is assumed to mirror it and is
//! never touched.
//!
//! Unlike [`LuDecomposition`](super::LuDecomposition), no pivoting is
//! performed. A zero divisor on `D`'s diagonal is not detected: the
//! division proceeds and the factors contain infinities or NaNs. Even a
//! well-conditioned matrix can hit this (`[[0, 1], [1, 0]]` does), so
//! callers that cannot vouch for their input should prefer the pivoted
//! LU or, for positive-definite matrices, the Cholesky decomposition.

use crate::Float;
use crate::error::{CoreError, Result};
use crate::tensor::{Tensor, TensorView, try_alloc};

/// Result of an LDL decomposition: `A = L * D * L^H`.
///
/// The factors are packed into one matrix: the strict lower triangle
/// holds `L`'s off-diagonal entries (its unit diagonal is implicit), and
/// the diagonal holds `D`.
#[derive(Debug, Clone)]
pub struct LdlDecomposition<T: Float> {
    ld: Vec<T>,
    n: usize,
}

impl<T: Float> LdlDecomposition<T> {
    /// Perform the LDL decomposition of a Hermitian matrix.
    ///
    /// Reads only the lower triangle of `a`. Fails on a non-square input
    /// or on allocation failure, never on the values themselves: an
    /// indefinite matrix factorizes fine, and a zero divisor yields
    /// non-finite entries in the factors rather than an error (see the
    /// module docs).
    ///
    /// ```
    /// # use tenax_core::tensor::Tensor;
    /// # use tenax_core::linalg::decomp::LdlDecomposition;
    /// // Indefinite, so Cholesky would refuse it. LDL does not mind.
    /// let a = Tensor::from_vec(vec![1.0_f64, 2.0, 2.0, 1.0], vec![2, 2]).unwrap();
    /// let ldl = LdlDecomposition::decompose(&a).unwrap();
    /// assert_eq!(ldl.d().as_slice(), &[1.0, -3.0]);
    /// ```
    pub fn decompose<'a>(a: impl Into<TensorView<'a, T>>) -> Result<Self> {
        let a = a.into();
        if a.ndim() != 2 {
            return Err(CoreError::InvalidArgument {
                reason: "LDL decomposition requires a 2-D tensor (matrix)",
            });
        }
        let n = a.shape()[0];
        if a.shape()[1] != n {
            return Err(CoreError::DimensionMismatch {
                expected: vec![n, n],
                got: a.shape().to_vec(),
            });
        }

        let mut ld = try_alloc::<T>(n * n)?;

        for j in 0..n {
            // D[j] = A[j,j] - sum_k L[j,k] * conj(L[j,k]) * D[k]
            let mut d = a.read(&[j, j]);
            for k in 0..j {
                let ljk = ld[j * n + k];
                d -= ljk * ljk.conj() * ld[k * n + k];
            }
            ld[j * n + j] = d;

            // L[i,j] = (A[i,j] - sum_k L[i,k] * conj(L[j,k]) * D[k]) / D[j]
            // A zero d divides through regardless; the column turns
            // non-finite instead of aborting.
            for i in (j + 1)..n {
                let mut s = a.read(&[i, j]);
                for k in 0..j {
                    let lik = ld[i * n + k];
                    let ljk = ld[j * n + k];
                    s -= lik * ljk.conj() * ld[k * n + k];
                }
                ld[i * n + j] = s / d;
            }
        }

        Ok(Self { ld, n })
    }

    /// The dimension `n` of the factorized matrix.
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Extract the unit-lower-triangular factor `L` as an `n x n` tensor.
    pub fn l(&self) -> Tensor<T> {
        let n = self.n;
        let mut data = vec![T::zero(); n * n];
        for i in 0..n {
            for j in 0..i {
                data[i * n + j] = self.ld[i * n + j];
            }
            data[i * n + i] = T::one(); // Unit diagonal
        }
        Tensor::from_vec(data, vec![n, n]).unwrap()
    }

    /// Extract the diagonal of `D` as a 1-D tensor of length `n`.
    pub fn d(&self) -> Tensor<T> {
        let n = self.n;
        let mut data = vec![T::zero(); n];
        for i in 0..n {
            data[i] = self.ld[i * n + i];
        }
        Tensor::from_vec(data, vec![n]).unwrap()
    }

    /// Compute the determinant from the factorization.
    ///
    /// `L` and `L^H` are unit triangular, so `det(A) = product(diag(D))`.
    pub fn det(&self) -> T {
        let mut d = T::one();
        for i in 0..self.n {
            d *= self.ld[i * self.n + i];
        }
        d
    }

    /// Solve the linear system `Ax = b` using the precomputed
    /// factorization.
    ///
    /// `b` must be a 1-D tensor of length `n`. A zero on `D`'s diagonal
    /// carries through as non-finite solution entries, not an error.
    pub fn solve(&self, b: &Tensor<T>) -> Result<Tensor<T>> {
        if b.ndim() != 1 {
            return Err(CoreError::InvalidArgument {
                reason: "solve: `b` must be a 1-D tensor",
            });
        }
        let n = self.n;
        if b.numel() != n {
            return Err(CoreError::DimensionMismatch {
                expected: vec![n],
                got: b.shape().to_vec(),
            });
        }

        let b_data = b.as_slice();
        let mut x = try_alloc::<T>(n)?;
        x.copy_from_slice(b_data);

        // Forward substitution: Ly = b (unit diagonal)
        #[allow(clippy::needless_range_loop)]
        for i in 1..n {
            for j in 0..i {
                let lij_xj = self.ld[i * n + j] * x[j];
                x[i] -= lij_xj;
            }
        }

        // Diagonal: Dz = y
        for i in 0..n {
            x[i] /= self.ld[i * n + i];
        }

        // Back substitution: L^H x = z, using L^H[i,j] = conj(L[j,i])
        #[allow(clippy::needless_range_loop)]
        for i in (0..n).rev() {
            for j in (i + 1)..n {
                let lji_xj = self.ld[j * n + i].conj() * x[j];
                x[i] -= lji_xj;
            }
        }

        Tensor::from_vec(x, vec![n])
    }
}
