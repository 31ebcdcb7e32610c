//! N-dimensional tensor type with dynamic shape and contiguous storage.
//!
//! The [`Tensor`] type is the fundamental data structure in Tenax, analogous
//! to `NumPy`'s `ndarray`. It stores elements in row-major (C) order by default
//! and is generic over any type implementing [`Scalar`]. Zero-copy transposed,
//! permuted, and broadcast access goes through [`TensorView`].

mod create;
mod display;
mod ops;
mod reshape;
mod view;

pub use view::{TensorView, broadcast_shapes};
pub(crate) use view::increment_index;

use crate::Scalar;
use crate::error::{CoreError, Result};

/// An N-dimensional tensor with dynamic shape.
///
/// Data is stored contiguously in row-major (C) order. The tensor owns its
/// data and cloning performs a deep copy.
///
/// # Type Parameters
///
/// - `T`: The element type, which must implement [`Scalar`].
#[derive(Debug, Clone)]
pub struct Tensor<T: Scalar> {
    data: Vec<T>,
    shape: Vec<usize>,
    strides: Vec<usize>,
}

impl<T: Scalar> Tensor<T> {
    // ------------------------------------------------------------------
    // Construction from raw parts
    // ------------------------------------------------------------------

    /// Create a tensor from a flat data vector and a shape.
    ///
    /// Returns an error if the product of `shape` does not equal `data.len()`.
    pub fn from_vec(data: Vec<T>, shape: Vec<usize>) -> Result<Self> {
        let numel: usize = shape.iter().product();
        if numel != data.len() {
            return Err(CoreError::InvalidShape {
                shape: shape.clone(),
                reason: "shape product does not match data length",
            });
        }
        let strides = compute_strides(&shape);
        Ok(Self {
            data,
            shape,
            strides,
        })
    }

    /// Create a tensor from a flat slice and a shape (copies the data).
    pub fn from_slice(data: &[T], shape: Vec<usize>) -> Result<Self> {
        Self::from_vec(data.to_vec(), shape)
    }

    /// Create a scalar (0-dimensional) tensor.
    pub fn scalar(value: T) -> Self {
        Self {
            data: vec![value],
            shape: vec![],
            strides: vec![],
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The shape of the tensor as a slice.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// The strides of the tensor as a slice (in number of elements).
    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// The number of dimensions (rank) of the tensor.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// The total number of elements.
    #[inline]
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Whether the tensor has zero elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// A flat slice of all elements in storage order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// A mutable flat slice of all elements in storage order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the tensor and return the underlying `Vec<T>`.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    // ------------------------------------------------------------------
    // Element access
    // ------------------------------------------------------------------

    /// Compute the flat index for a multi-dimensional index.
    fn flat_index(&self, index: &[usize]) -> Result<usize> {
        if index.len() != self.ndim() {
            return Err(CoreError::IndexOutOfBounds {
                index: index.to_vec(),
                shape: self.shape.clone(),
            });
        }
        let mut flat = 0;
        for (i, (&idx, &dim)) in index.iter().zip(self.shape.iter()).enumerate() {
            if idx >= dim {
                return Err(CoreError::IndexOutOfBounds {
                    index: index.to_vec(),
                    shape: self.shape.clone(),
                });
            }
            flat += idx * self.strides[i];
        }
        Ok(flat)
    }

    /// Get a reference to the element at the given multi-dimensional index.
    pub fn get(&self, index: &[usize]) -> Result<&T> {
        let flat = self.flat_index(index)?;
        Ok(&self.data[flat])
    }

    /// Get a mutable reference to the element at the given index.
    pub fn get_mut(&mut self, index: &[usize]) -> Result<&mut T> {
        let flat = self.flat_index(index)?;
        Ok(&mut self.data[flat])
    }

    /// Set the element at the given multi-dimensional index.
    pub fn set(&mut self, index: &[usize], value: T) -> Result<()> {
        let flat = self.flat_index(index)?;
        self.data[flat] = value;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Iterators
    // ------------------------------------------------------------------

    /// Iterate over all elements in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate mutably over all elements in storage order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }

    // ------------------------------------------------------------------
    // Map / apply
    // ------------------------------------------------------------------

    /// Apply a function to every element, returning a new tensor.
    pub fn map<F>(&self, f: F) -> Tensor<T>
    where
        F: Fn(T) -> T,
    {
        Tensor {
            data: self.data.iter().map(|&x| f(x)).collect(),
            shape: self.shape.clone(),
            strides: self.strides.clone(),
        }
    }

    /// Apply a function element-wise to two tensors of the same shape.
    pub fn zip_map<F>(&self, other: &Tensor<T>, f: F) -> Result<Tensor<T>>
    where
        F: Fn(T, T) -> T,
    {
        if self.shape != other.shape {
            return Err(CoreError::DimensionMismatch {
                expected: self.shape.clone(),
                got: other.shape.clone(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Tensor {
            data,
            shape: self.shape.clone(),
            strides: self.strides.clone(),
        })
    }

    /// Apply a function to every element in place.
    pub fn apply<F>(&mut self, f: F)
    where
        F: Fn(T) -> T,
    {
        for x in &mut self.data {
            *x = f(*x);
        }
    }
}

impl<T: Scalar> PartialEq for Tensor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.data == other.data
    }
}

// ======================================================================
// Utility functions
// ======================================================================

/// Compute row-major (C-order) strides from a shape.
pub(crate) fn compute_strides(shape: &[usize]) -> Vec<usize> {
    let ndim = shape.len();
    if ndim == 0 {
        return vec![];
    }
    let mut strides = vec![1usize; ndim];
    for i in (0..ndim - 1).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}

/// Allocate a zero-filled buffer of `len` elements, reporting allocation
/// failure as an error instead of aborting.
pub(crate) fn try_alloc<T: Scalar>(len: usize) -> Result<Vec<T>> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| CoreError::AllocationFailure {
            bytes: len.saturating_mul(core::mem::size_of::<T>()),
        })?;
    data.resize(len, T::zero());
    Ok(data)
}
