//! Cholesky decomposition for Hermitian positive-definite matrices.
//!
//! Decomposes a Hermitian positive-definite matrix `A` into `A = L L^H`
//! where `L` is lower triangular with positive real diagonal entries.
//! Only the lower triangle of the input is read.

use num_traits::{Float as _, Zero};

use crate::Float;
use crate::error::{CoreError, Result};
use crate::tensor::{Tensor, TensorView, try_alloc};

/// Result of a Cholesky decomposition.
///
/// Stores the factorization `A = L L^H` where `L` is lower triangular.
/// Positive definiteness is a hard requirement: a pivot that is not
/// strictly positive fails with [`CoreError::NotPositiveDefinite`],
/// since no real lower-triangular square root exists for such inputs.
#[derive(Debug, Clone)]
pub struct CholeskyDecomposition<T: Float> {
    /// Lower triangular factor stored as a flat n x n array.
    l_data: Vec<T>,
    /// Matrix dimension.
    n: usize,
}

#[allow(clippy::many_single_char_names)]
impl<T: Float> CholeskyDecomposition<T> {
    /// Compute the Cholesky decomposition of a Hermitian positive-definite
    /// matrix.
    ///
    /// Returns `A = L L^H` where `L` is lower triangular. Reads only the
    /// lower triangle of `a`; the upper triangle is assumed to mirror it.
    ///
    /// ```
    /// # use tenax_core::tensor::Tensor;
    /// # use tenax_core::linalg::{matmul, decomp::CholeskyDecomposition};
    /// let a = Tensor::from_vec(vec![4.0_f64, 2.0, 2.0, 3.0], vec![2, 2]).unwrap();
    /// let chol = CholeskyDecomposition::decompose(&a).unwrap();
    /// let l = chol.l();
    /// // Verify L L^T = A
    /// let prod = matmul(&l, l.transpose()).unwrap();
    /// assert!((prod.as_slice()[0] - 4.0).abs() < 1e-10);
    /// ```
    pub fn decompose<'a>(a: impl Into<TensorView<'a, T>>) -> Result<Self> {
        let a = a.into();
        if a.ndim() != 2 {
            return Err(CoreError::InvalidArgument {
                reason: "Cholesky decomposition requires a 2-D tensor (matrix)",
            });
        }
        let n = a.shape()[0];
        if a.shape()[1] != n {
            return Err(CoreError::DimensionMismatch {
                expected: vec![n, n],
                got: a.shape().to_vec(),
            });
        }

        let mut l = try_alloc::<T>(n * n)?;

        for j in 0..n {
            // Diagonal element, computed in real arithmetic:
            // s = Re(A[j,j]) - sum_k |L[j,k]|^2
            let mut s = a.read(&[j, j]).re();
            for k in 0..j {
                let m = l[j * n + k].modulus();
                s -= m * m;
            }
            // The negated comparison also rejects NaN pivots.
            if !(s > T::Real::zero()) {
                return Err(CoreError::NotPositiveDefinite);
            }
            let diag = T::from_real(s.sqrt());
            l[j * n + j] = diag;

            // Off-diagonal elements
            for i in (j + 1)..n {
                let mut sum = a.read(&[i, j]);
                for k in 0..j {
                    let prod = l[i * n + k] * l[j * n + k].conj();
                    sum -= prod;
                }
                l[i * n + j] = sum / diag;
            }
        }

        Ok(Self { l_data: l, n })
    }

    /// The dimension `n` of the factorized matrix.
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Extract the lower triangular factor `L`.
    pub fn l(&self) -> Tensor<T> {
        Tensor::from_vec(self.l_data.clone(), vec![self.n, self.n]).unwrap()
    }

    /// Solve the linear system `Ax = b` using the Cholesky factorization.
    ///
    /// Since `A = L L^H`, solves `L y = b` (forward) then `L^H x = y`
    /// (backward).
    pub fn solve(&self, b: &Tensor<T>) -> Result<Tensor<T>> {
        if b.ndim() != 1 {
            return Err(CoreError::InvalidArgument {
                reason: "Cholesky solve: `b` must be a 1-D tensor",
            });
        }
        if b.numel() != self.n {
            return Err(CoreError::DimensionMismatch {
                expected: vec![self.n],
                got: b.shape().to_vec(),
            });
        }

        let n = self.n;
        let mut x = try_alloc::<T>(n)?;
        x.copy_from_slice(b.as_slice());

        // Forward substitution: L y = b
        #[allow(clippy::needless_range_loop)]
        for i in 0..n {
            for j in 0..i {
                let l_xj = self.l_data[i * n + j] * x[j];
                x[i] -= l_xj;
            }
            x[i] /= self.l_data[i * n + i];
        }

        // Back substitution: L^H x = y, using L^H[i,j] = conj(L[j,i])
        #[allow(clippy::needless_range_loop)]
        for i in (0..n).rev() {
            for j in (i + 1)..n {
                let lt_xj = self.l_data[j * n + i].conj() * x[j];
                x[i] -= lt_xj;
            }
            x[i] /= self.l_data[i * n + i];
        }

        Tensor::from_vec(x, vec![n])
    }

    /// Compute the inverse using the Cholesky factorization.
    pub fn inverse(&self) -> Result<Tensor<T>> {
        let n = self.n;
        let mut inv_data = try_alloc::<T>(n * n)?;

        for col in 0..n {
            let mut e = vec![T::zero(); n];
            e[col] = T::one();
            let e_tensor = Tensor::from_vec(e, vec![n])?;
            let x = self.solve(&e_tensor)?;
            let x_data = x.as_slice();
            for row in 0..n {
                inv_data[row * n + col] = x_data[row];
            }
        }

        Tensor::from_vec(inv_data, vec![n, n])
    }

    /// Compute the log-determinant (useful for avoiding overflow).
    ///
    /// `log(det(A)) = 2 * sum(log(diag(L)))`, real because the diagonal
    /// of `L` is positive real.
    pub fn log_det(&self) -> T::Real {
        let n = self.n;
        let mut sum = T::Real::zero();
        for i in 0..n {
            sum += self.l_data[i * n + i].re().ln();
        }
        sum + sum // 2 * sum
    }
}
