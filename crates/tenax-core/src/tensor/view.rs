//! Zero-copy strided views: transpose, conjugate transpose, and broadcasting.
//!
//! A [`TensorView`] reinterprets a tensor's storage through a shape, per-axis
//! strides, an offset, and a conjugate-on-read flag. Axis permutation is
//! O(rank) stride shuffling; conjugation is applied lazily when an element is
//! read, so `conj_transpose` never touches the data either. For non-complex
//! element types [`Scalar::conj`] is the identity and `conj_transpose`
//! degrades to a plain transpose.
//!
//! Views never own memory: the borrow ties each view to the [`Tensor`] whose
//! buffer it reads, so the buffer outlives every view derived from it.

use crate::Scalar;
use crate::error::{CoreError, Result};

use super::{Tensor, try_alloc};

/// A read-only strided view over a tensor's storage.
///
/// Constructed via [`Tensor::view`], [`Tensor::transpose`], or
/// [`Tensor::conj_transpose`]; further transposed, conjugated, or broadcast
/// without copying. Materialize with [`to_tensor`](TensorView::to_tensor).
#[derive(Debug, Clone)]
pub struct TensorView<'a, T: Scalar> {
    data: &'a [T],
    shape: Vec<usize>,
    strides: Vec<usize>,
    offset: usize,
    conj: bool,
}

impl<'a, T: Scalar> TensorView<'a, T> {
    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The logical shape of the view.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// The per-axis strides (in number of elements).
    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// The offset into the underlying storage, in elements.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The number of dimensions (rank) of the view.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// The total number of logical elements.
    #[inline]
    pub fn numel(&self) -> usize {
        self.shape.iter().product()
    }

    /// Whether element reads apply complex conjugation.
    #[inline]
    pub fn is_conj(&self) -> bool {
        self.conj
    }

    // ------------------------------------------------------------------
    // Element access
    // ------------------------------------------------------------------

    /// Read the element at `index` without bounds checking beyond debug
    /// assertions. Applies the conjugation flag.
    #[inline]
    pub(crate) fn read(&self, index: &[usize]) -> T {
        debug_assert_eq!(index.len(), self.ndim());
        let mut flat = self.offset;
        for (d, &idx) in index.iter().enumerate() {
            debug_assert!(idx < self.shape[d]);
            flat += idx * self.strides[d];
        }
        let v = self.data[flat];
        if self.conj { v.conj() } else { v }
    }

    /// Get the element at the given multi-dimensional index.
    pub fn get(&self, index: &[usize]) -> Result<T> {
        if index.len() != self.ndim() {
            return Err(CoreError::IndexOutOfBounds {
                index: index.to_vec(),
                shape: self.shape.clone(),
            });
        }
        for (&idx, &dim) in index.iter().zip(self.shape.iter()) {
            if idx >= dim {
                return Err(CoreError::IndexOutOfBounds {
                    index: index.to_vec(),
                    shape: self.shape.clone(),
                });
            }
        }
        Ok(self.read(index))
    }

    // ------------------------------------------------------------------
    // Transposition
    // ------------------------------------------------------------------

    /// Transpose by reversing the axis order. O(rank), no copy.
    #[must_use]
    pub fn transpose(mut self) -> Self {
        self.shape.reverse();
        self.strides.reverse();
        self
    }

    /// Transpose according to an explicit axis permutation.
    ///
    /// `axes` must be a permutation of `0..ndim`: axis `i` of the result is
    /// axis `axes[i]` of the input.
    pub fn transpose_axes(self, axes: &[usize]) -> Result<Self> {
        if axes.len() != self.ndim() {
            return Err(CoreError::InvalidArgument {
                reason: "axes length must match tensor rank",
            });
        }

        // Validate it's a valid permutation
        let mut seen = vec![false; self.ndim()];
        for &a in axes {
            if a >= self.ndim() {
                return Err(CoreError::AxisOutOfBounds {
                    axis: a,
                    ndim: self.ndim(),
                });
            }
            if seen[a] {
                return Err(CoreError::InvalidArgument {
                    reason: "duplicate axis in permutation",
                });
            }
            seen[a] = true;
        }

        let shape = axes.iter().map(|&a| self.shape[a]).collect();
        let strides = axes.iter().map(|&a| self.strides[a]).collect();
        Ok(Self {
            shape,
            strides,
            ..self
        })
    }

    /// Toggle lazy conjugation of every element read.
    ///
    /// The identity for non-complex element types.
    #[must_use]
    pub fn conj(mut self) -> Self {
        self.conj = !self.conj;
        self
    }

    /// Conjugate transpose: reverse the axis order and conjugate lazily.
    #[must_use]
    pub fn conj_transpose(self) -> Self {
        self.transpose().conj()
    }

    /// Conjugate transpose with an explicit axis permutation.
    pub fn conj_transpose_axes(self, axes: &[usize]) -> Result<Self> {
        Ok(self.transpose_axes(axes)?.conj())
    }

    // ------------------------------------------------------------------
    // Broadcasting
    // ------------------------------------------------------------------

    /// Broadcast the view to a larger shape without copying.
    ///
    /// Axes align from the trailing edge; each axis extent must equal the
    /// target extent or be 1, in which case the axis is stretched with
    /// stride 0. Leading axes absent from the view are added with stride 0.
    pub fn broadcast_to(&self, shape: &[usize]) -> Result<TensorView<'a, T>> {
        if shape.len() < self.ndim() {
            return Err(CoreError::BroadcastError {
                shape_a: self.shape.clone(),
                shape_b: shape.to_vec(),
            });
        }
        let lead = shape.len() - self.ndim();
        let mut strides = vec![0usize; shape.len()];
        for (d, (&dim, &target)) in self.shape.iter().zip(&shape[lead..]).enumerate() {
            if dim == target {
                strides[lead + d] = self.strides[d];
            } else if dim == 1 {
                strides[lead + d] = 0;
            } else {
                return Err(CoreError::BroadcastError {
                    shape_a: self.shape.clone(),
                    shape_b: shape.to_vec(),
                });
            }
        }
        Ok(TensorView {
            data: self.data,
            shape: shape.to_vec(),
            strides,
            offset: self.offset,
            conj: self.conj,
        })
    }

    /// A view with an extra extent-1 axis inserted at `axis`.
    pub(crate) fn insert_axis(mut self, axis: usize) -> Self {
        debug_assert!(axis <= self.ndim());
        self.shape.insert(axis, 1);
        self.strides.insert(axis, 0);
        self
    }

    /// A view with the first `leading.len()` axes fixed at the given indices.
    ///
    /// Used to pick one matrix out of a batch without copying.
    pub(crate) fn subview(&self, leading: &[usize]) -> TensorView<'a, T> {
        debug_assert!(leading.len() <= self.ndim());
        let mut offset = self.offset;
        for (d, &idx) in leading.iter().enumerate() {
            debug_assert!(idx < self.shape[d]);
            offset += idx * self.strides[d];
        }
        TensorView {
            data: self.data,
            shape: self.shape[leading.len()..].to_vec(),
            strides: self.strides[leading.len()..].to_vec(),
            offset,
            conj: self.conj,
        }
    }

    // ------------------------------------------------------------------
    // Materialization
    // ------------------------------------------------------------------

    /// Copy the view into a new contiguous row-major tensor.
    ///
    /// This is the only view operation that allocates; it fails with an
    /// allocation error if the result buffer cannot be obtained.
    pub fn to_tensor(&self) -> Result<Tensor<T>> {
        let numel = self.numel();
        let mut data = try_alloc::<T>(numel)?;
        let mut index = vec![0usize; self.ndim()];
        for item in data.iter_mut() {
            *item = self.read(&index);
            increment_index(&mut index, &self.shape);
        }
        Tensor::from_vec(data, self.shape.clone())
    }
}

impl<'a, T: Scalar> From<&'a Tensor<T>> for TensorView<'a, T> {
    fn from(t: &'a Tensor<T>) -> Self {
        t.view()
    }
}

/// Element-wise equality of the logical contents (shape plus values, with
/// conjugation applied).
impl<T: Scalar> PartialEq for TensorView<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        if self.shape != other.shape {
            return false;
        }
        let mut index = vec![0usize; self.ndim()];
        for _ in 0..self.numel() {
            if self.read(&index) != other.read(&index) {
                return false;
            }
            increment_index(&mut index, &self.shape);
        }
        true
    }
}

impl<T: Scalar> Tensor<T> {
    /// A zero-copy view of the whole tensor.
    pub fn view(&self) -> TensorView<'_, T> {
        TensorView {
            data: &self.data,
            shape: self.shape.clone(),
            strides: self.strides.clone(),
            offset: 0,
            conj: false,
        }
    }

    /// A transposed view with the axis order reversed. No copy.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tenax_core::Tensor;
    /// let t = Tensor::from_vec(vec![1, 2, 3, 4, 5, 6], vec![2, 3]).unwrap();
    /// let tt = t.transpose();
    /// assert_eq!(tt.shape(), &[3, 2]);
    /// assert_eq!(tt.get(&[0, 1]).unwrap(), 4);
    /// ```
    pub fn transpose(&self) -> TensorView<'_, T> {
        self.view().transpose()
    }

    /// A transposed view with an explicit axis permutation. No copy.
    pub fn transpose_axes(&self, axes: &[usize]) -> Result<TensorView<'_, T>> {
        self.view().transpose_axes(axes)
    }

    /// A conjugate-transposed view: axis order reversed, elements
    /// conjugated on read. For non-complex types this is [`transpose`].
    ///
    /// [`transpose`]: Self::transpose
    ///
    /// # Examples
    ///
    /// ```
    /// # use tenax_core::Tensor;
    /// # use tenax_core::dtype::Complex64;
    /// let z = Complex64::new(1.0, 2.0);
    /// let t = Tensor::from_vec(vec![z; 4], vec![2, 2]).unwrap();
    /// assert_eq!(t.conj_transpose().get(&[0, 0]).unwrap(), z.conj());
    /// ```
    pub fn conj_transpose(&self) -> TensorView<'_, T> {
        self.view().conj_transpose()
    }

    /// A conjugate-transposed view with an explicit axis permutation.
    pub fn conj_transpose_axes(&self, axes: &[usize]) -> Result<TensorView<'_, T>> {
        self.view().conj_transpose_axes(axes)
    }
}

// ======================================================================
// Shape utilities
// ======================================================================

/// Compute the broadcast result shape of two shapes, aligning from the
/// trailing edge: extents must be equal, or one of them 1.
pub fn broadcast_shapes(a: &[usize], b: &[usize]) -> Result<Vec<usize>> {
    let ndim = a.len().max(b.len());
    let mut out = vec![0usize; ndim];
    for d in 0..ndim {
        let da = if d < a.len() { a[a.len() - 1 - d] } else { 1 };
        let db = if d < b.len() { b[b.len() - 1 - d] } else { 1 };
        out[ndim - 1 - d] = if da == db || db == 1 {
            da
        } else if da == 1 {
            db
        } else {
            return Err(CoreError::BroadcastError {
                shape_a: a.to_vec(),
                shape_b: b.to_vec(),
            });
        };
    }
    Ok(out)
}

/// Advance a multi-dimensional index odometer-style. Returns `false` once
/// every index combination has been visited.
pub(crate) fn increment_index(index: &mut [usize], shape: &[usize]) -> bool {
    for d in (0..shape.len()).rev() {
        index[d] += 1;
        if index[d] < shape[d] {
            return true;
        }
        index[d] = 0;
    }
    false
}
