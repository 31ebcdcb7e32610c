//! Vector norms and diagonal traces.
//!
//! Norms are parameterized by order: 0 counts nonzero elements, positive
//! and negative infinity take the max/min modulus, and any other `ord`
//! computes `(sum |a_i|^ord)^(1/ord)`. Complex elements contribute their
//! modulus, so every norm is real-valued.

use num_traits::{Float as _, One, Zero};

use crate::error::{CoreError, Result};
use crate::tensor::{Tensor, TensorView, increment_index, try_alloc};
use crate::{Float, Scalar};

/// Norm of a 1-D tensor.
///
/// `ord = 0` counts nonzero elements, `ord = inf` / `ord = -inf` take the
/// largest / smallest modulus, and any other order computes the p-norm
/// `(sum |a_i|^ord)^(1/ord)`. An empty input has norm zero for every order.
///
/// ```
/// # use tenax_core::tensor::Tensor;
/// # use tenax_core::linalg::norm;
/// let x = Tensor::from_vec(vec![3.0_f64, 4.0], vec![2]).unwrap();
/// assert_eq!(norm(&x, 2.0).unwrap(), 5.0);
/// assert_eq!(norm(&x, f64::INFINITY).unwrap(), 4.0);
/// ```
pub fn norm<'a, T: Float>(a: impl Into<TensorView<'a, T>>, ord: T::Real) -> Result<T::Real> {
    let a = a.into();
    if a.ndim() != 1 {
        return Err(CoreError::InvalidArgument {
            reason: "norm: expected a 1-D tensor",
        });
    }
    Ok(reduce_norm(a.shape()[0], ord, |i| a.read(&[i])))
}

/// Norm along one axis of a higher-rank tensor.
///
/// Applies the 1-D definition of [`norm`] along `axis`. The reduced axis is
/// kept at extent 1, not removed; call [`Tensor::squeeze`] to drop it.
pub fn norm_axis<'a, T: Float>(
    a: impl Into<TensorView<'a, T>>,
    ord: T::Real,
    axis: usize,
) -> Result<Tensor<T::Real>> {
    let a = a.into();
    if axis >= a.ndim() {
        return Err(CoreError::AxisOutOfBounds {
            axis,
            ndim: a.ndim(),
        });
    }
    let len = a.shape()[axis];
    let mut out_shape = a.shape().to_vec();
    out_shape[axis] = 1;

    let out_numel: usize = out_shape.iter().product();
    let mut out = try_alloc::<T::Real>(out_numel)?;
    let mut idx = vec![0usize; a.ndim()];
    for item in out.iter_mut() {
        *item = reduce_norm(len, ord, |i| {
            idx[axis] = i;
            a.read(&idx)
        });
        idx[axis] = 0;
        increment_index(&mut idx, &out_shape);
    }
    Tensor::from_vec(out, out_shape)
}

/// Sum of the k-th diagonal of a 2-D tensor: `sum(a[i, i+k])`.
///
/// `k = 0` is the main diagonal, `k > 0` shifts toward the upper triangle,
/// `k < 0` toward the lower. A `k` beyond the matrix yields an empty sum
/// (zero), not an error.
///
/// ```
/// # use tenax_core::tensor::Tensor;
/// # use tenax_core::linalg::trace;
/// let a = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]).unwrap();
/// assert_eq!(trace(&a, 0).unwrap(), 5.0);
/// assert_eq!(trace(&a, 1).unwrap(), 2.0);
/// assert_eq!(trace(&a, -5).unwrap(), 0.0);
/// ```
pub fn trace<'a, T: Scalar>(a: impl Into<TensorView<'a, T>>, k: isize) -> Result<T> {
    let a = a.into();
    if a.ndim() != 2 {
        return Err(CoreError::InvalidArgument {
            reason: "trace: expected a 2-D tensor",
        });
    }
    let rows = a.shape()[0];
    let cols = a.shape()[1] as isize;
    let mut sum = T::zero();
    for i in 0..rows {
        let j = i as isize + k;
        if j >= 0 && j < cols {
            sum += a.read(&[i, j as usize]);
        }
    }
    Ok(sum)
}

// ======================================================================
// Convenience methods on Tensor
// ======================================================================

impl<T: Float> Tensor<T> {
    /// Euclidean (L2) norm of a 1-D tensor.
    pub fn norm(&self) -> Result<T::Real> {
        norm(self, T::Real::from_f64(2.0))
    }

    /// Norm of a 1-D tensor with an explicit order; see [`norm`].
    pub fn norm_ord(&self, ord: T::Real) -> Result<T::Real> {
        norm(self, ord)
    }

    /// Norm along one axis, keeping the reduced axis at extent 1.
    pub fn norm_axis(&self, ord: T::Real, axis: usize) -> Result<Tensor<T::Real>> {
        norm_axis(self, ord, axis)
    }
}

impl<T: Scalar> Tensor<T> {
    /// Sum of the k-th diagonal; see [`trace`].
    pub fn trace(&self, k: isize) -> Result<T> {
        trace(self, k)
    }
}

// ======================================================================
// Internal helpers
// ======================================================================

/// The 1-D norm kernel shared by [`norm`] and [`norm_axis`].
fn reduce_norm<T: Float>(len: usize, ord: T::Real, mut elem: impl FnMut(usize) -> T) -> T::Real {
    let zero = T::Real::zero();
    if ord == zero {
        let mut count = 0usize;
        for i in 0..len {
            if elem(i) != T::zero() {
                count += 1;
            }
        }
        return T::Real::from_usize(count);
    }
    if ord == T::Real::infinity() {
        let mut max = zero;
        for i in 0..len {
            let m = elem(i).modulus();
            if m > max {
                max = m;
            }
        }
        return max;
    }
    if ord == T::Real::neg_infinity() {
        if len == 0 {
            return zero;
        }
        let mut min = elem(0).modulus();
        for i in 1..len {
            let m = elem(i).modulus();
            if m < min {
                min = m;
            }
        }
        return min;
    }
    let one = T::Real::one();
    let two = one + one;
    if ord == one {
        let mut sum = zero;
        for i in 0..len {
            sum += elem(i).modulus();
        }
        return sum;
    }
    if ord == two {
        let mut sum = zero;
        for i in 0..len {
            let m = elem(i).modulus();
            sum += m * m;
        }
        return sum.sqrt();
    }
    let mut sum = zero;
    for i in 0..len {
        sum += elem(i).modulus().powf(ord);
    }
    if sum == zero { zero } else { sum.powf(ord.recip()) }
}
