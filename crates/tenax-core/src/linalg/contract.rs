//! Products and contractions: `dot`, `vdot`, `cross`, `matmul`, `tensordot`.
//!
//! All entry points accept owned tensors or [`TensorView`]s, so transposed
//! and conjugate-transposed operands feed the engine without copying.
//! `matmul` dispatches on operand rank:
//!
//! | ranks        | behavior                                             |
//! |--------------|------------------------------------------------------|
//! | 1-D × 1-D    | scalar dot product                                   |
//! | 2-D × 2-D    | conventional matrix product                          |
//! | 1-D × 2-D    | vector promoted to a 1×n row, promoted axis removed  |
//! | 2-D × 1-D    | vector promoted to an n×1 column, promoted axis removed |
//! | rank > 2     | trailing two axes multiplied, leading axes broadcast |

use crate::Scalar;
use crate::error::{CoreError, Result};
use crate::tensor::{Tensor, TensorView, broadcast_shapes, increment_index, try_alloc};

// ======================================================================
// Vector products
// ======================================================================

/// Inner (dot) product of two 1-D tensors: `sum(a_i * b_i)`.
///
/// Both operands must be 1-D with the same length. No conjugation is
/// applied; see [`vdot`] for the sesquilinear variant.
///
/// ```
/// # use tenax_core::tensor::Tensor;
/// # use tenax_core::linalg::dot;
/// let x = Tensor::from_vec(vec![1.0_f64, 2.0, 3.0], vec![3]).unwrap();
/// let y = Tensor::from_vec(vec![4.0_f64, 5.0, 6.0], vec![3]).unwrap();
/// let d = dot(&x, &y).unwrap();
/// assert!((d - 32.0).abs() < 1e-10);
/// ```
pub fn dot<'a, 'b, T: Scalar>(
    a: impl Into<TensorView<'a, T>>,
    b: impl Into<TensorView<'b, T>>,
) -> Result<T> {
    let a = a.into();
    let b = b.into();
    contract_1d(&a, &b, "dot")
}

/// Like [`dot`], but conjugates `a`'s elements before multiplying.
///
/// For non-complex element types this is identical to `dot`.
///
/// ```
/// # use tenax_core::tensor::Tensor;
/// # use tenax_core::dtype::Complex64;
/// # use tenax_core::linalg::vdot;
/// let a = Tensor::from_vec(vec![Complex64::new(1.0, 2.0)], vec![1]).unwrap();
/// let b = Tensor::from_vec(vec![Complex64::new(3.0, 4.0)], vec![1]).unwrap();
/// // conj(1+2i) * (3+4i) = 11 - 2i
/// assert_eq!(vdot(&a, &b).unwrap(), Complex64::new(11.0, -2.0));
/// ```
pub fn vdot<'a, 'b, T: Scalar>(
    a: impl Into<TensorView<'a, T>>,
    b: impl Into<TensorView<'b, T>>,
) -> Result<T> {
    let a = a.into().conj();
    let b = b.into();
    contract_1d(&a, &b, "vdot")
}

/// 3-vector cross product along `axis`, broadcasting the remaining axes.
///
/// Both operands must have extent exactly 3 along `axis`; every other axis
/// is broadcast pairwise. The result keeps the component axis at `axis`.
///
/// ```
/// # use tenax_core::tensor::Tensor;
/// # use tenax_core::linalg::cross;
/// let e1 = Tensor::from_vec(vec![1.0, 0.0, 0.0], vec![3]).unwrap();
/// let e2 = Tensor::from_vec(vec![0.0, 1.0, 0.0], vec![3]).unwrap();
/// let e3 = cross(&e1, &e2, 0).unwrap();
/// assert_eq!(e3.as_slice(), &[0.0, 0.0, 1.0]);
/// ```
pub fn cross<'a, 'b, T: Scalar>(
    a: impl Into<TensorView<'a, T>>,
    b: impl Into<TensorView<'b, T>>,
    axis: usize,
) -> Result<Tensor<T>> {
    let a = a.into();
    let b = b.into();
    check_cross_operand(&a, axis)?;
    check_cross_operand(&b, axis)?;

    // Move the component axis to the end of each operand, broadcast the
    // rest, and compute 3 components per broadcast position.
    let perm_a = move_axis_last(a.ndim(), axis);
    let a = a.transpose_axes(&perm_a)?;
    let perm_b = move_axis_last(b.ndim(), axis);
    let b = b.transpose_axes(&perm_b)?;
    let lead = broadcast_shapes(
        &a.shape()[..a.ndim() - 1],
        &b.shape()[..b.ndim() - 1],
    )?;
    let mut full = lead.clone();
    full.push(3);
    let a = a.broadcast_to(&full)?;
    let b = b.broadcast_to(&full)?;

    let lead_numel: usize = lead.iter().product();
    let mut out = try_alloc::<T>(lead_numel * 3)?;
    let mut idx = vec![0usize; lead.len()];
    for block in out.chunks_exact_mut(3) {
        let av = a.subview(&idx);
        let bv = b.subview(&idx);
        let (a0, a1, a2) = (av.read(&[0]), av.read(&[1]), av.read(&[2]));
        let (b0, b1, b2) = (bv.read(&[0]), bv.read(&[1]), bv.read(&[2]));
        block[0] = a1 * b2 - a2 * b1;
        block[1] = a2 * b0 - a0 * b2;
        block[2] = a0 * b1 - a1 * b0;
        increment_index(&mut idx, &lead);
    }

    // Move the component axis back to its original position.
    let moved = Tensor::from_vec(out, full)?;
    moved
        .transpose_axes(&move_last_axis_to(moved.ndim(), axis))?
        .to_tensor()
}

// ======================================================================
// Matrix products
// ======================================================================

/// Matrix product with rank-dependent dispatch (see the module table).
///
/// 1-D × 1-D returns a 0-D (scalar) tensor. For higher ranks the trailing
/// two axes of each operand form the matrices and all leading axes are
/// broadcast against each other as batch dimensions.
///
/// ```
/// # use tenax_core::tensor::Tensor;
/// # use tenax_core::linalg::matmul;
/// let a = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3]).unwrap();
/// let b = Tensor::from_vec(vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0], vec![3, 2]).unwrap();
/// let c = matmul(&a, &b).unwrap();
/// assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0]);
/// ```
#[allow(clippy::many_single_char_names)]
pub fn matmul<'a, 'b, T: Scalar>(
    a: impl Into<TensorView<'a, T>>,
    b: impl Into<TensorView<'b, T>>,
) -> Result<Tensor<T>> {
    let a = a.into();
    let b = b.into();
    if a.ndim() == 0 || b.ndim() == 0 {
        return Err(CoreError::InvalidArgument {
            reason: "matmul: operands must have at least 1 dimension",
        });
    }

    if a.ndim() == 1 && b.ndim() == 1 {
        return Ok(Tensor::scalar(contract_1d(&a, &b, "matmul")?));
    }

    // Promote 1-D operands: a row for the left side, a column for the
    // right. The promoted axis is removed from the result at the end.
    let a_promoted = a.ndim() == 1;
    let b_promoted = b.ndim() == 1;
    let a = if a_promoted { a.insert_axis(0) } else { a };
    let b = if b_promoted { b.insert_axis(1) } else { b };

    let m = a.shape()[a.ndim() - 2];
    let k = a.shape()[a.ndim() - 1];
    let n = b.shape()[b.ndim() - 1];
    if b.shape()[b.ndim() - 2] != k {
        return Err(CoreError::DimensionMismatch {
            expected: vec![k, n],
            got: vec![b.shape()[b.ndim() - 2], n],
        });
    }

    // Broadcast the leading (batch) axes against each other.
    let batch = broadcast_shapes(&a.shape()[..a.ndim() - 2], &b.shape()[..b.ndim() - 2])?;
    let mut full_a = batch.clone();
    full_a.extend([m, k]);
    let mut full_b = batch.clone();
    full_b.extend([k, n]);
    let a = a.broadcast_to(&full_a)?;
    let b = b.broadcast_to(&full_b)?;

    let batch_numel: usize = batch.iter().product();
    let mut out = try_alloc::<T>(batch_numel * m * n)?;
    if m * n > 0 {
        let mut idx = vec![0usize; batch.len()];
        for block in out.chunks_exact_mut(m * n) {
            gemm_into(&a.subview(&idx), &b.subview(&idx), block, m, k, n);
            increment_index(&mut idx, &batch);
        }
    }

    let mut out_shape = batch;
    if !a_promoted {
        out_shape.push(m);
    }
    if !b_promoted {
        out_shape.push(n);
    }
    Tensor::from_vec(out, out_shape)
}

/// Generalized multi-axis contraction.
///
/// `a_axes` and `b_axes` are equal-length lists of axes to contract; paired
/// extents must match. The result keeps `a`'s uncontracted axes (in order)
/// followed by `b`'s, so its rank is
/// `a.ndim() + b.ndim() - 2 * a_axes.len()`.
///
/// Internally the retained axes are permuted to the front (for `a`) and
/// back (for `b`), flattened, and reduced to a single 2-D matrix product.
///
/// ```
/// # use tenax_core::tensor::Tensor;
/// # use tenax_core::linalg::tensordot;
/// let a = Tensor::<f64>::arange(6).reshape(vec![2, 3]).unwrap();
/// let b = Tensor::<f64>::arange(6).reshape(vec![3, 2]).unwrap();
/// let c = tensordot(&a, &b, &[1], &[0]).unwrap();
/// assert_eq!(c.as_slice(), &[10.0, 13.0, 28.0, 40.0]);
/// ```
pub fn tensordot<'a, 'b, T: Scalar>(
    a: impl Into<TensorView<'a, T>>,
    b: impl Into<TensorView<'b, T>>,
    a_axes: &[usize],
    b_axes: &[usize],
) -> Result<Tensor<T>> {
    let a = a.into();
    let b = b.into();
    if a_axes.len() != b_axes.len() {
        return Err(CoreError::InvalidArgument {
            reason: "tensordot: axis lists must have the same length",
        });
    }
    check_contraction_axes(&a, a_axes)?;
    check_contraction_axes(&b, b_axes)?;

    let ext_a: Vec<usize> = a_axes.iter().map(|&ax| a.shape()[ax]).collect();
    let ext_b: Vec<usize> = b_axes.iter().map(|&ax| b.shape()[ax]).collect();
    if ext_a != ext_b {
        return Err(CoreError::DimensionMismatch {
            expected: ext_a,
            got: ext_b,
        });
    }

    let kept_a: Vec<usize> = (0..a.ndim()).filter(|d| !a_axes.contains(d)).collect();
    let kept_b: Vec<usize> = (0..b.ndim()).filter(|d| !b_axes.contains(d)).collect();

    let m: usize = kept_a.iter().map(|&d| a.shape()[d]).product();
    let n: usize = kept_b.iter().map(|&d| b.shape()[d]).product();
    let k: usize = ext_a.iter().product();

    let mut out_shape: Vec<usize> = kept_a.iter().map(|&d| a.shape()[d]).collect();
    out_shape.extend(kept_b.iter().map(|&d| b.shape()[d]));

    let mut perm_a = kept_a;
    perm_a.extend_from_slice(a_axes);
    let a2 = a.transpose_axes(&perm_a)?.to_tensor()?.reshape(vec![m, k])?;

    let mut perm_b = b_axes.to_vec();
    perm_b.extend_from_slice(&kept_b);
    let b2 = b.transpose_axes(&perm_b)?.to_tensor()?.reshape(vec![k, n])?;

    matmul(&a2, &b2)?.reshape(out_shape)
}

// ======================================================================
// Convenience methods on Tensor
// ======================================================================

impl<T: Scalar> Tensor<T> {
    /// Dot product with another 1-D tensor.
    pub fn dot(&self, other: &Tensor<T>) -> Result<T> {
        dot(self, other)
    }

    /// Conjugating dot product with another 1-D tensor.
    pub fn vdot(&self, other: &Tensor<T>) -> Result<T> {
        vdot(self, other)
    }

    /// Cross product along `axis`; see [`cross`].
    pub fn cross(&self, other: &Tensor<T>, axis: usize) -> Result<Tensor<T>> {
        cross(self, other, axis)
    }

    /// Matrix product; see [`matmul`].
    pub fn matmul(&self, other: &Tensor<T>) -> Result<Tensor<T>> {
        matmul(self, other)
    }

    /// Multi-axis contraction; see [`tensordot`].
    pub fn tensordot(
        &self,
        other: &Tensor<T>,
        a_axes: &[usize],
        b_axes: &[usize],
    ) -> Result<Tensor<T>> {
        tensordot(self, other, a_axes, b_axes)
    }
}

// ======================================================================
// Internal helpers
// ======================================================================

/// `out[i*n + j] = sum_p a[i,p] * b[p,j]` for 2-D views.
// ijk loop order (row-major friendly for the output)
#[allow(clippy::many_single_char_names)]
fn gemm_into<T: Scalar>(
    a: &TensorView<'_, T>,
    b: &TensorView<'_, T>,
    out: &mut [T],
    m: usize,
    k: usize,
    n: usize,
) {
    for i in 0..m {
        for j in 0..n {
            let mut sum = T::zero();
            for p in 0..k {
                sum += a.read(&[i, p]) * b.read(&[p, j]);
            }
            out[i * n + j] = sum;
        }
    }
}

fn contract_1d<T: Scalar>(
    a: &TensorView<'_, T>,
    b: &TensorView<'_, T>,
    name: &'static str,
) -> Result<T> {
    if a.ndim() != 1 || b.ndim() != 1 {
        return Err(CoreError::InvalidArgument {
            reason: match name {
                "dot" => "dot: both arguments must be 1-D tensors",
                "vdot" => "vdot: both arguments must be 1-D tensors",
                _ => "both arguments must be 1-D tensors",
            },
        });
    }
    if a.numel() != b.numel() {
        return Err(CoreError::DimensionMismatch {
            expected: a.shape().to_vec(),
            got: b.shape().to_vec(),
        });
    }
    let mut sum = T::zero();
    for i in 0..a.numel() {
        sum += a.read(&[i]) * b.read(&[i]);
    }
    Ok(sum)
}

fn check_cross_operand<T: Scalar>(v: &TensorView<'_, T>, axis: usize) -> Result<()> {
    if axis >= v.ndim() {
        return Err(CoreError::AxisOutOfBounds {
            axis,
            ndim: v.ndim(),
        });
    }
    if v.shape()[axis] != 3 {
        return Err(CoreError::InvalidShape {
            shape: v.shape().to_vec(),
            reason: "cross requires extent 3 along the chosen axis",
        });
    }
    Ok(())
}

fn check_contraction_axes<T: Scalar>(v: &TensorView<'_, T>, axes: &[usize]) -> Result<()> {
    let mut seen = vec![false; v.ndim()];
    for &ax in axes {
        if ax >= v.ndim() {
            return Err(CoreError::AxisOutOfBounds {
                axis: ax,
                ndim: v.ndim(),
            });
        }
        if seen[ax] {
            return Err(CoreError::InvalidArgument {
                reason: "tensordot: duplicate contraction axis",
            });
        }
        seen[ax] = true;
    }
    Ok(())
}

fn move_axis_last(ndim: usize, axis: usize) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..ndim).filter(|&d| d != axis).collect();
    perm.push(axis);
    perm
}

fn move_last_axis_to(ndim: usize, axis: usize) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..ndim - 1).collect();
    perm.insert(axis, ndim - 1);
    perm
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::dtype::Complex64;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    fn vec_f64(data: &[f64]) -> Tensor<f64> {
        Tensor::from_vec(data.to_vec(), vec![data.len()]).unwrap()
    }

    fn mat_f64(data: &[f64], rows: usize, cols: usize) -> Tensor<f64> {
        Tensor::from_vec(data.to_vec(), vec![rows, cols]).unwrap()
    }

    // ------------------------------------------------------------------
    // dot / vdot
    // ------------------------------------------------------------------

    #[test]
    fn test_dot_basic() {
        let x = vec_f64(&[1.0, 2.0, 3.0]);
        let y = vec_f64(&[4.0, 5.0, 6.0]);
        assert_eq!(dot(&x, &y).unwrap(), 32.0);
    }

    #[test]
    fn test_dot_length_mismatch() {
        let x = vec_f64(&[1.0, 2.0]);
        let y = vec_f64(&[1.0, 2.0, 3.0]);
        assert!(dot(&x, &y).is_err());
    }

    #[test]
    fn test_dot_not_1d() {
        let x = mat_f64(&[1.0, 2.0, 3.0, 4.0], 2, 2);
        let y = vec_f64(&[1.0, 2.0]);
        assert!(dot(&x, &y).is_err());
    }

    #[test]
    fn test_dot_accepts_views() {
        // A strided row of a transposed matrix still dots correctly.
        let m = mat_f64(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3);
        let col = m.transpose().subview(&[1]); // column 1 of m: [2, 5]
        let y = vec_f64(&[10.0, 1.0]);
        assert_eq!(dot(col, &y).unwrap(), 25.0);
    }

    #[test]
    fn test_vdot_real_equals_dot() {
        let x = vec_f64(&[1.0, -2.0, 3.0]);
        let y = vec_f64(&[4.0, 5.0, -6.0]);
        assert_eq!(vdot(&x, &y).unwrap(), dot(&x, &y).unwrap());
    }

    #[test]
    fn test_vdot_conjugates_first_argument() {
        // >>> np.vdot([1+2j], [3+4j])
        // (11-2j)
        let a = Tensor::from_vec(vec![Complex64::new(1.0, 2.0)], vec![1]).unwrap();
        let b = Tensor::from_vec(vec![Complex64::new(3.0, 4.0)], vec![1]).unwrap();
        assert_eq!(vdot(&a, &b).unwrap(), Complex64::new(11.0, -2.0));
        // Not symmetric: vdot(b, a) is the conjugate.
        assert_eq!(vdot(&b, &a).unwrap(), Complex64::new(11.0, 2.0));
    }

    #[test]
    fn test_vdot_self_is_squared_norm() {
        let a = Tensor::from_vec(
            vec![Complex64::new(3.0, 4.0), Complex64::new(0.0, 2.0)],
            vec![2],
        )
        .unwrap();
        // |3+4i|^2 + |2i|^2 = 25 + 4
        assert_eq!(vdot(&a, &a).unwrap(), Complex64::new(29.0, 0.0));
    }

    // ------------------------------------------------------------------
    // cross
    // ------------------------------------------------------------------

    #[test]
    fn test_cross_basis_vectors() {
        let e1 = vec_f64(&[1.0, 0.0, 0.0]);
        let e2 = vec_f64(&[0.0, 1.0, 0.0]);
        let c = cross(&e1, &e2, 0).unwrap();
        assert_eq!(c.as_slice(), &[0.0, 0.0, 1.0]);
        // Anti-commutative
        let c = cross(&e2, &e1, 0).unwrap();
        assert_eq!(c.as_slice(), &[0.0, 0.0, -1.0]);
    }

    #[test]
    fn test_cross_numpy_reference() {
        // >>> np.cross([1,2,3], [4,5,6])
        // array([-3,  6, -3])
        let a = vec_f64(&[1.0, 2.0, 3.0]);
        let b = vec_f64(&[4.0, 5.0, 6.0]);
        let c = cross(&a, &b, 0).unwrap();
        assert_eq!(c.as_slice(), &[-3.0, 6.0, -3.0]);
    }

    #[test]
    fn test_cross_broadcasts_other_axes() {
        // Two rows crossed against a single broadcast row.
        let a = mat_f64(&[1.0, 0.0, 0.0, 0.0, 1.0, 0.0], 2, 3);
        let b = mat_f64(&[0.0, 0.0, 1.0], 1, 3);
        let c = cross(&a, &b, 1).unwrap();
        assert_eq!(c.shape(), &[2, 3]);
        // e1 x e3 = -e2, e2 x e3 = e1
        assert_eq!(c.as_slice(), &[0.0, -1.0, 0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_cross_axis_zero() {
        // Component axis first: columns are the vectors.
        let a = mat_f64(&[1.0, 0.0, 0.0, 1.0, 0.0, 0.0], 3, 2);
        let b = mat_f64(&[0.0, 0.0, 0.0, 0.0, 1.0, 1.0], 3, 2);
        let c = cross(&a, &b, 0).unwrap();
        assert_eq!(c.shape(), &[3, 2]);
        // col 0: e1 x e3 = -e2; col 1: e2 x e3 = e1
        assert_eq!(c.as_slice(), &[0.0, 1.0, -1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_cross_requires_extent_3() {
        let a = vec_f64(&[1.0, 2.0]);
        let b = vec_f64(&[3.0, 4.0]);
        assert!(cross(&a, &b, 0).is_err());
    }

    #[test]
    fn test_cross_axis_out_of_bounds() {
        let a = vec_f64(&[1.0, 2.0, 3.0]);
        let b = vec_f64(&[1.0, 2.0, 3.0]);
        assert!(cross(&a, &b, 1).is_err());
    }

    // ------------------------------------------------------------------
    // matmul
    // ------------------------------------------------------------------

    #[test]
    fn test_matmul_1d_1d_is_scalar() {
        let x = vec_f64(&[1.0, 2.0, 3.0]);
        let y = vec_f64(&[4.0, 5.0, 6.0]);
        let c = matmul(&x, &y).unwrap();
        assert_eq!(c.ndim(), 0);
        assert_eq!(c.as_slice(), &[32.0]);
    }

    #[test]
    fn test_matmul_2d_numpy_reference() {
        // >>> import numpy as np
        // >>> a = np.array([[1,2,3],[4,5,6]], dtype=np.float64)
        // >>> b = np.array([[7,8],[9,10],[11,12]], dtype=np.float64)
        // >>> a @ b
        // array([[ 58.,  64.],
        //        [139., 154.]])
        let a = mat_f64(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3);
        let b = mat_f64(&[7.0, 8.0, 9.0, 10.0, 11.0, 12.0], 3, 2);
        let c = matmul(&a, &b).unwrap();
        assert_eq!(c.shape(), &[2, 2]);
        assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0]);
    }

    #[test]
    fn test_matmul_identity() {
        let a = mat_f64(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0], 3, 3);
        let c = matmul(&a, &Tensor::<f64>::eye(3)).unwrap();
        assert_eq!(c.as_slice(), a.as_slice());
    }

    #[test]
    fn test_matmul_1d_2d_promotes_row() {
        // [1,2] @ [[1,2,3],[4,5,6]] = [9, 12, 15], promoted axis removed
        let x = vec_f64(&[1.0, 2.0]);
        let a = mat_f64(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3);
        let c = matmul(&x, &a).unwrap();
        assert_eq!(c.shape(), &[3]);
        assert_eq!(c.as_slice(), &[9.0, 12.0, 15.0]);
    }

    #[test]
    fn test_matmul_2d_1d_promotes_column() {
        // >>> a = np.array([[1,2,3],[4,5,6]]); a @ [1,1,1]
        // array([ 6, 15])
        let a = mat_f64(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3);
        let x = vec_f64(&[1.0, 1.0, 1.0]);
        let c = matmul(&a, &x).unwrap();
        assert_eq!(c.shape(), &[2]);
        assert_eq!(c.as_slice(), &[6.0, 15.0]);
    }

    #[test]
    fn test_matmul_batched() {
        // Batch of two 2x2 matrices times matching batch of scalings.
        let a = Tensor::<f64>::arange(8).reshape(vec![2, 2, 2]).unwrap();
        let b = Tensor::from_vec(
            vec![1.0, 0.0, 0.0, 1.0, 2.0, 0.0, 0.0, 2.0],
            vec![2, 2, 2],
        )
        .unwrap();
        let c = matmul(&a, &b).unwrap();
        assert_eq!(c.shape(), &[2, 2, 2]);
        // batch 0: identity leaves [[0,1],[2,3]]; batch 1: doubled [[8,10],[12,14]]
        assert_eq!(c.as_slice(), &[0.0, 1.0, 2.0, 3.0, 8.0, 10.0, 12.0, 14.0]);
    }

    #[test]
    fn test_matmul_broadcasts_batch_axes() {
        // A 2-D operand acts as an implicit batch of size 1.
        let a = Tensor::<f64>::arange(8).reshape(vec![2, 2, 2]).unwrap();
        let eye = Tensor::<f64>::eye(2);
        let c = matmul(&a, &eye).unwrap();
        assert_eq!(c.shape(), &[2, 2, 2]);
        assert_eq!(c.as_slice(), a.as_slice());

        // Size-1 batch axis stretches against a larger batch.
        let lhs = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], vec![1, 2, 2]).unwrap();
        let rhs = Tensor::from_vec(
            vec![1.0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0],
            vec![2, 2, 2],
        )
        .unwrap();
        let c = matmul(&lhs, &rhs).unwrap();
        assert_eq!(c.shape(), &[2, 2, 2]);
        // batch 0: identity; batch 1: columns swapped
        assert_eq!(c.as_slice(), &[1.0, 2.0, 3.0, 4.0, 2.0, 1.0, 4.0, 3.0]);
    }

    #[test]
    fn test_matmul_1d_with_batched() {
        // 1-D lhs against a 3-D stack: row promoted, batch broadcast.
        let x = vec_f64(&[1.0, 1.0]);
        let b = Tensor::<f64>::arange(8).reshape(vec![2, 2, 2]).unwrap();
        let c = matmul(&x, &b).unwrap();
        assert_eq!(c.shape(), &[2, 2]);
        // Column sums of each batch matrix.
        assert_eq!(c.as_slice(), &[2.0, 4.0, 10.0, 12.0]);
    }

    #[test]
    fn test_matmul_transposed_view_operand() {
        let a = mat_f64(&[1.0, 2.0, 3.0, 4.0], 2, 2);
        let b = mat_f64(&[5.0, 6.0, 7.0, 8.0], 2, 2);
        let c = matmul(&a, b.transpose()).unwrap();
        assert_eq!(c.as_slice(), &[17.0, 23.0, 39.0, 53.0]);
    }

    #[test]
    fn test_matmul_conj_transpose_operand() {
        let i = Complex64::new(0.0, 1.0);
        let a = Tensor::from_vec(vec![i], vec![1, 1]).unwrap();
        let c = matmul(&a, a.conj_transpose()).unwrap();
        // i * conj(i) = 1
        assert_eq!(c.as_slice(), &[Complex64::new(1.0, 0.0)]);
    }

    #[test]
    fn test_matmul_inner_dimension_mismatch() {
        let a = mat_f64(&[1.0; 6], 2, 3);
        let b = mat_f64(&[1.0; 6], 2, 3);
        assert!(matmul(&a, &b).is_err());
    }

    #[test]
    fn test_matmul_batch_shape_mismatch() {
        let a = Tensor::<f64>::zeros(vec![2, 2, 2]);
        let b = Tensor::<f64>::zeros(vec![3, 2, 2]);
        assert!(matmul(&a, &b).is_err());
    }

    #[test]
    fn test_matmul_rejects_0d() {
        let a = Tensor::scalar(1.0);
        let b = vec_f64(&[1.0]);
        assert!(matmul(&a, &b).is_err());
    }

    // ------------------------------------------------------------------
    // tensordot
    // ------------------------------------------------------------------

    #[test]
    fn test_tensordot_numpy_reference() {
        // >>> a = np.arange(6).reshape(2,3); b = np.arange(6).reshape(3,2)
        // >>> np.tensordot(a, b, axes=([1],[0]))
        // array([[10, 13],
        //        [28, 40]])
        let a = Tensor::<f64>::arange(6).reshape(vec![2, 3]).unwrap();
        let b = Tensor::<f64>::arange(6).reshape(vec![3, 2]).unwrap();
        let c = tensordot(&a, &b, &[1], &[0]).unwrap();
        assert_eq!(c.shape(), &[2, 2]);
        assert_eq!(c.as_slice(), &[10.0, 13.0, 28.0, 40.0]);
    }

    #[test]
    fn test_tensordot_matches_matmul_on_random_matrices() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = Tensor::from_vec((0..12).map(|_| rng.gen::<f64>()).collect(), vec![3, 4]).unwrap();
        let b = Tensor::from_vec((0..20).map(|_| rng.gen::<f64>()).collect(), vec![4, 5]).unwrap();
        let td = tensordot(&a, &b, &[1], &[0]).unwrap();
        let mm = matmul(&a, &b).unwrap();
        assert_eq!(td.shape(), mm.shape());
        for (&x, &y) in td.iter().zip(mm.iter()) {
            assert_relative_eq!(x, y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_tensordot_contract_last_axes() {
        // Contracting both axis-1's multiplies by the transpose.
        let mut rng = StdRng::seed_from_u64(7);
        let a = Tensor::from_vec((0..6).map(|_| rng.gen::<f64>()).collect(), vec![2, 3]).unwrap();
        let b = Tensor::from_vec((0..12).map(|_| rng.gen::<f64>()).collect(), vec![4, 3]).unwrap();
        let td = tensordot(&a, &b, &[1], &[1]).unwrap();
        let mm = matmul(&a, b.transpose()).unwrap();
        for (&x, &y) in td.iter().zip(mm.iter()) {
            assert_relative_eq!(x, y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_tensordot_multi_axis() {
        let a = Tensor::<f64>::arange(24).reshape(vec![2, 3, 4]).unwrap();
        let b = Tensor::<f64>::arange(24).reshape(vec![4, 3, 2]).unwrap();
        let c = tensordot(&a, &b, &[1, 2], &[1, 0]).unwrap();
        assert_eq!(c.shape(), &[2, 2]);
        // Direct sum over the contracted axes.
        let mut expected = [[0.0; 2]; 2];
        for (i, row) in expected.iter_mut().enumerate() {
            for (l, cell) in row.iter_mut().enumerate() {
                for j in 0..3 {
                    for k in 0..4 {
                        *cell += a.get(&[i, j, k]).unwrap() * b.get(&[k, j, l]).unwrap();
                    }
                }
            }
        }
        for i in 0..2 {
            for l in 0..2 {
                assert_eq!(*c.get(&[i, l]).unwrap(), expected[i][l]);
            }
        }
    }

    #[test]
    fn test_tensordot_full_contraction_is_scalar() {
        let a = mat_f64(&[1.0, 2.0, 3.0, 4.0], 2, 2);
        let b = mat_f64(&[5.0, 6.0, 7.0, 8.0], 2, 2);
        let c = tensordot(&a, &b, &[0, 1], &[0, 1]).unwrap();
        assert_eq!(c.ndim(), 0);
        // sum(a_ij * b_ij) = 5 + 12 + 21 + 32
        assert_eq!(c.as_slice(), &[70.0]);
    }

    #[test]
    fn test_tensordot_outer_product() {
        let a = vec_f64(&[1.0, 2.0]);
        let b = vec_f64(&[3.0, 4.0, 5.0]);
        let c = tensordot(&a, &b, &[], &[]).unwrap();
        assert_eq!(c.shape(), &[2, 3]);
        assert_eq!(c.as_slice(), &[3.0, 4.0, 5.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn test_tensordot_extent_mismatch() {
        let a = mat_f64(&[1.0; 6], 2, 3);
        let b = mat_f64(&[1.0; 8], 2, 4);
        assert!(tensordot(&a, &b, &[1], &[1]).is_err());
    }

    #[test]
    fn test_tensordot_axis_list_errors() {
        let a = mat_f64(&[1.0; 4], 2, 2);
        let b = mat_f64(&[1.0; 4], 2, 2);
        assert!(tensordot(&a, &b, &[0, 1], &[0]).is_err());
        assert!(tensordot(&a, &b, &[2], &[0]).is_err());
        assert!(tensordot(&a, &b, &[0, 0], &[0, 1]).is_err());
    }

    // ------------------------------------------------------------------
    // Convenience methods
    // ------------------------------------------------------------------

    #[test]
    fn test_tensor_methods_delegate() {
        let a = mat_f64(&[1.0, 2.0, 3.0, 4.0], 2, 2);
        let b = mat_f64(&[5.0, 6.0, 7.0, 8.0], 2, 2);
        assert_eq!(a.matmul(&b).unwrap().as_slice(), &[19.0, 22.0, 43.0, 50.0]);

        let x = vec_f64(&[1.0, 2.0, 3.0]);
        let y = vec_f64(&[4.0, 5.0, 6.0]);
        assert_eq!(x.dot(&y).unwrap(), 32.0);
        assert_eq!(x.vdot(&y).unwrap(), 32.0);
        assert_eq!(x.cross(&y, 0).unwrap().as_slice(), &[-3.0, 6.0, -3.0]);
        assert_eq!(
            a.tensordot(&b, &[1], &[0]).unwrap().as_slice(),
            &[19.0, 22.0, 43.0, 50.0]
        );
    }
}
