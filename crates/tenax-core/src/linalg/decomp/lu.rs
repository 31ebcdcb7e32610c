//! LU decomposition with partial pivoting.
//!
//! Decomposes an `m x n` matrix `A` into `P * L * U` where:
//! - `P` is an `m x m` permutation matrix (stored as a pivot vector)
//! - `L` is an `m x k` unit-lower-trapezoidal factor, `k = min(m, n)`
//! - `U` is a `k x n` upper-trapezoidal factor
//!
//! Pivoting picks the largest-modulus entry of each column, which bounds
//! the elimination multipliers by 1. A singular input is not an error: a
//! zero pivot leaves an exact zero on `U`'s diagonal and the factorization
//! simply describes a singular matrix. The only failure modes are a
//! non-2-D input and allocation failure.

use crate::Float;
use crate::error::{CoreError, Result};
use crate::tensor::{Tensor, TensorView, try_alloc};

/// Result of an LU decomposition with partial pivoting.
///
/// Stores the factorization `A = P * L * U` in compact form: `L` and `U`
/// are packed into a single working matrix (the unit diagonal of `L` is
/// implicit), and the permutation is stored as a pivot index vector.
#[derive(Debug, Clone)]
pub struct LuDecomposition<T: Float> {
    /// Packed factors: the strict lower triangle holds `L`'s multipliers,
    /// the diagonal and above hold `U`.
    lu: Vec<T>,
    /// `pivots[i]` is the row of `A` that ended up at row `i` of the
    /// working matrix, so `P[pivots[i], i] = 1`.
    pivots: Vec<usize>,
    rows: usize,
    cols: usize,
    /// Sign of the permutation (+1 or -1), for determinant computation.
    sign: T,
}

impl<T: Float> LuDecomposition<T> {
    /// Perform LU decomposition with partial pivoting on an `m x n` matrix.
    ///
    /// Accepts owned tensors or views, so a transposed view factorizes
    /// without an intermediate copy.
    ///
    /// ```
    /// # use tenax_core::tensor::Tensor;
    /// # use tenax_core::linalg::decomp::LuDecomposition;
    /// let a = Tensor::from_vec(vec![2.0_f64, 1.0, 1.0, 4.0], vec![2, 2]).unwrap();
    /// let lu = LuDecomposition::decompose(&a).unwrap();
    /// assert!((lu.det().unwrap() - 7.0).abs() < 1e-10);
    /// ```
    pub fn decompose<'a>(a: impl Into<TensorView<'a, T>>) -> Result<Self> {
        let a = a.into();
        if a.ndim() != 2 {
            return Err(CoreError::InvalidArgument {
                reason: "LU decomposition requires a 2-D tensor (matrix)",
            });
        }
        let rows = a.shape()[0];
        let cols = a.shape()[1];
        let k_max = rows.min(cols);

        // Private working copy; the caller's matrix is never mutated.
        let mut lu = try_alloc::<T>(rows * cols)?;
        for i in 0..rows {
            for j in 0..cols {
                lu[i * cols + j] = a.read(&[i, j]);
            }
        }
        let mut pivots: Vec<usize> = (0..rows).collect();
        let mut sign = T::one();

        for k in 0..k_max {
            // Find pivot: row with largest modulus in column k, rows >= k
            let mut max_val = lu[k * cols + k].modulus();
            let mut max_row = k;
            for i in (k + 1)..rows {
                let val = lu[i * cols + k].modulus();
                if val > max_val {
                    max_val = val;
                    max_row = i;
                }
            }

            // Swap rows if needed
            if max_row != k {
                for j in 0..cols {
                    lu.swap(k * cols + j, max_row * cols + j);
                }
                pivots.swap(k, max_row);
                sign *= T::from_f64(-1.0);
            }

            // A zero pivot means the whole remaining column is zero:
            // nothing to eliminate, and U keeps an exact zero. Singularity
            // is not an error here.
            let pivot = lu[k * cols + k];
            if pivot == T::zero() {
                continue;
            }

            // Eliminate below the pivot
            for i in (k + 1)..rows {
                let factor = lu[i * cols + k] / pivot;
                lu[i * cols + k] = factor; // Store L factor

                for j in (k + 1)..cols {
                    let ukj = lu[k * cols + j];
                    lu[i * cols + j] -= factor * ukj;
                }
            }
        }

        Ok(Self {
            lu,
            pivots,
            rows,
            cols,
            sign,
        })
    }

    /// The shape `[m, n]` of the factorized matrix.
    pub fn shape(&self) -> [usize; 2] {
        [self.rows, self.cols]
    }

    /// Extract the unit-lower-trapezoidal factor `L` with shape
    /// `[m, min(m, n)]`.
    pub fn l(&self) -> Tensor<T> {
        let k_max = self.rows.min(self.cols);
        let mut data = vec![T::zero(); self.rows * k_max];
        for i in 0..self.rows {
            for j in 0..k_max {
                if j < i {
                    data[i * k_max + j] = self.lu[i * self.cols + j];
                } else if j == i {
                    data[i * k_max + j] = T::one(); // Unit diagonal
                }
            }
        }
        Tensor::from_vec(data, vec![self.rows, k_max]).unwrap()
    }

    /// Extract the upper-trapezoidal factor `U` with shape
    /// `[min(m, n), n]`.
    pub fn u(&self) -> Tensor<T> {
        let k_max = self.rows.min(self.cols);
        let mut data = vec![T::zero(); k_max * self.cols];
        for i in 0..k_max {
            for j in i..self.cols {
                data[i * self.cols + j] = self.lu[i * self.cols + j];
            }
        }
        Tensor::from_vec(data, vec![k_max, self.cols]).unwrap()
    }

    /// Extract the permutation matrix `P` with shape `[m, m]`, satisfying
    /// `P * L * U == A`.
    pub fn p(&self) -> Tensor<T> {
        let m = self.rows;
        let mut data = vec![T::zero(); m * m];
        for (i, &pi) in self.pivots.iter().enumerate() {
            data[pi * m + i] = T::one();
        }
        Tensor::from_vec(data, vec![m, m]).unwrap()
    }

    /// The permutation pivot vector: `pivots()[i]` is the original row of
    /// `A` at row `i` of the permuted matrix.
    pub fn pivots(&self) -> &[usize] {
        &self.pivots
    }

    /// Sign of the row permutation: +1 for an even number of swaps, -1
    /// for odd.
    pub fn sign(&self) -> T {
        self.sign
    }

    /// Compute the determinant from the LU factorization.
    ///
    /// `det(A) = sign * product(diag(U))`. A singular matrix yields zero;
    /// only a non-square factorization is an error.
    pub fn det(&self) -> Result<T> {
        if self.rows != self.cols {
            return Err(CoreError::InvalidArgument {
                reason: "determinant requires a square matrix",
            });
        }
        let mut d = self.sign;
        for i in 0..self.rows {
            d *= self.lu[i * self.cols + i];
        }
        Ok(d)
    }

    /// Solve the linear system `Ax = b` using the precomputed LU
    /// factorization. Requires a square factorization.
    ///
    /// `b` must be a 1-D tensor of length `n`.
    pub fn solve(&self, b: &Tensor<T>) -> Result<Tensor<T>> {
        if self.rows != self.cols {
            return Err(CoreError::InvalidArgument {
                reason: "solve requires a square factorization",
            });
        }
        if b.ndim() != 1 {
            return Err(CoreError::InvalidArgument {
                reason: "solve: `b` must be a 1-D tensor",
            });
        }
        let n = self.rows;
        if b.numel() != n {
            return Err(CoreError::DimensionMismatch {
                expected: vec![n],
                got: b.shape().to_vec(),
            });
        }

        let b_data = b.as_slice();

        // Undo the permutation: P^T b
        let mut x = try_alloc::<T>(n)?;
        for (i, &pi) in self.pivots.iter().enumerate() {
            x[i] = b_data[pi];
        }

        // Forward substitution: Ly = P^T b
        // We index x[j] while updating x[i] where j < i, so iterators
        // are safe but less clear — use index loops instead.
        #[allow(clippy::needless_range_loop)]
        for i in 1..n {
            for j in 0..i {
                let lij_xj = self.lu[i * n + j] * x[j];
                x[i] -= lij_xj;
            }
        }

        // Back substitution: Ux = y
        #[allow(clippy::needless_range_loop)]
        for i in (0..n).rev() {
            for j in (i + 1)..n {
                let uij_xj = self.lu[i * n + j] * x[j];
                x[i] -= uij_xj;
            }
            x[i] /= self.lu[i * n + i];
        }

        Tensor::from_vec(x, vec![n])
    }

    /// Compute the inverse matrix using the LU factorization.
    ///
    /// Solves `AX = I` column by column. Requires a square factorization.
    pub fn inverse(&self) -> Result<Tensor<T>> {
        if self.rows != self.cols {
            return Err(CoreError::InvalidArgument {
                reason: "inverse requires a square factorization",
            });
        }
        let n = self.rows;
        let mut inv_data = try_alloc::<T>(n * n)?;

        for col in 0..n {
            // Create unit vector e_col
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
}
