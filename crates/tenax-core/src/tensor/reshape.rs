//! Shape manipulation: reshape, flatten, squeeze, and unsqueeze.
//!
//! Axis reordering does not live here: [`Tensor::transpose`] and friends
//! return zero-copy [`TensorView`](super::TensorView)s instead of shuffling
//! elements.

use crate::Scalar;
use crate::error::{CoreError, Result};

use super::{Tensor, compute_strides};

impl<T: Scalar> Tensor<T> {
    /// Reshape the tensor to a new shape without copying data.
    ///
    /// The total number of elements must remain the same.
    pub fn reshape(mut self, new_shape: Vec<usize>) -> Result<Self> {
        let new_numel: usize = new_shape.iter().product();
        if new_numel != self.numel() {
            return Err(CoreError::InvalidShape {
                shape: new_shape,
                reason: "new shape has different number of elements",
            });
        }
        self.strides = compute_strides(&new_shape);
        self.shape = new_shape;
        Ok(self)
    }

    /// Return a reshaped view without consuming the tensor (copies data).
    pub fn reshaped(&self, new_shape: Vec<usize>) -> Result<Self> {
        self.clone().reshape(new_shape)
    }

    /// Flatten the tensor into a 1-D tensor (consumes self, no copy).
    pub fn flatten(self) -> Self {
        let n = self.numel();
        Tensor {
            data: self.data,
            shape: vec![n],
            strides: vec![1],
        }
    }

    /// Return a flattened copy of the tensor.
    pub fn flattened(&self) -> Self {
        let n = self.numel();
        Tensor {
            data: self.data.clone(),
            shape: vec![n],
            strides: vec![1],
        }
    }

    /// Insert a dimension of size 1 at the given axis.
    pub fn unsqueeze(mut self, axis: usize) -> Result<Self> {
        if axis > self.ndim() {
            return Err(CoreError::AxisOutOfBounds {
                axis,
                ndim: self.ndim(),
            });
        }
        self.shape.insert(axis, 1);
        self.strides = compute_strides(&self.shape);
        Ok(self)
    }

    /// Remove all dimensions of size 1.
    ///
    /// The usual follow-up to an axis reduction such as
    /// [`norm_axis`](Self::norm_axis), which keeps the reduced axis at
    /// extent 1.
    pub fn squeeze(mut self) -> Self {
        self.shape.retain(|&d| d != 1);
        self.strides = compute_strides(&self.shape);
        self
    }
}
