use thiserror::Error;

/// All errors returned by `tenax-core`.
///
/// Degenerate numeric outcomes are deliberately absent from this taxonomy:
/// a singular pivot in LU or a zero divisor in LDL propagates as an ordinary
/// floating-point value (`0`, `inf`, `NaN`) in the result rather than as an
/// error. Only Cholesky has a domain failure, [`NotPositiveDefinite`],
/// because its factorization is undefined for the offending input.
///
/// [`NotPositiveDefinite`]: CoreError::NotPositiveDefinite
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Operand shapes do not match the required layout.
    #[error("dimension mismatch: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    /// A shape or stride specification is invalid.
    #[error("invalid shape {shape:?}: {reason}")]
    InvalidShape {
        shape: Vec<usize>,
        reason: &'static str,
    },

    /// An axis index is out of bounds for the tensor's rank.
    #[error("axis {axis} out of bounds for tensor with {ndim} dimensions")]
    AxisOutOfBounds { axis: usize, ndim: usize },

    /// A flat or multi-dimensional index is out of bounds.
    #[error("index {index:?} out of bounds for shape {shape:?}")]
    IndexOutOfBounds {
        index: Vec<usize>,
        shape: Vec<usize>,
    },

    /// Shapes cannot be broadcast together.
    #[error("cannot broadcast shapes {shape_a:?} and {shape_b:?}")]
    BroadcastError {
        shape_a: Vec<usize>,
        shape_b: Vec<usize>,
    },

    /// The operation is not supported for the given input.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: &'static str },

    /// Workspace or result storage could not be obtained.
    #[error("allocation of {bytes} bytes failed")]
    AllocationFailure { bytes: usize },

    /// The matrix is not Hermitian positive-definite (Cholesky).
    ///
    /// Distinct from the shape errors above so callers can branch on "this
    /// matrix is not decomposable this way" versus "you called this wrong".
    #[error("matrix is not positive definite")]
    NotPositiveDefinite,
}

/// Convenience alias used throughout `tenax-core`.
pub type Result<T> = std::result::Result<T, CoreError>;
