//! Numeric type hierarchy for generic math.
//!
//! The trait hierarchy is:
//! ```text
//! Scalar
//!   ├── Integer   (i8 ..= i64, u8 ..= u64, usize, isize)
//!   └── Float     (f32, f64, Complex32, Complex64)
//!         └── Real (f32, f64)
//! ```
//!
//! All tensor operations are generic over [`Scalar`]; linear algebra is
//! generic over [`Float`], which covers both real and complex
//! floating-point types. [`Real`] narrows back to the ordered reals, which
//! is why [`Scalar`] does not require `PartialOrd` — complex types have no
//! total order.
//!
//! Arithmetic bounds come from `num-traits` (`Num`, `NumAssignOps`), and
//! complex types from `num-complex`.

use core::fmt;
use core::iter::Sum;
use core::ops::Neg;

use num_traits::{Num, NumAssignOps};

pub use num_complex::{Complex, Complex32, Complex64};

// ---------------------------------------------------------------------------
// Scalar — the root trait for every numeric element type
// ---------------------------------------------------------------------------

/// Base trait for all numeric types storable in a tensor.
///
/// This intentionally does *not* require floating-point operations so that
/// integer tensors remain first-class citizens.
pub trait Scalar:
    Copy
    + fmt::Debug
    + fmt::Display
    + Num
    + NumAssignOps
    + Sum
    + Default
    + Send
    + Sync
    + 'static
{
    /// Convert from `usize` (used for index / shape arithmetic).
    fn from_usize(v: usize) -> Self;

    /// Complex conjugate. The identity for every non-complex type.
    #[inline]
    fn conj(self) -> Self {
        self
    }
}

// ---------------------------------------------------------------------------
// Integer
// ---------------------------------------------------------------------------

/// Marker trait for integer scalar types.
pub trait Integer: Scalar + Ord + Eq {}

// ---------------------------------------------------------------------------
// Float — real and complex floating-point types
// ---------------------------------------------------------------------------

/// Trait for floating-point scalar types, real or complex.
///
/// Linear algebra routines are generic over this trait. Magnitude
/// comparisons (pivot selection, norms) go through [`modulus`], which maps
/// into the ordered associated [`Real`] type.
///
/// [`modulus`]: Float::modulus
/// [`Real`]: Float::Real
pub trait Float: Scalar + Neg<Output = Self> {
    /// The real type underlying this scalar (`Self` for real types).
    type Real: Real;

    /// Absolute value for reals, complex modulus `|z|` for complex types.
    fn modulus(self) -> Self::Real;

    /// Real part (`self` for real types).
    fn re(self) -> Self::Real;

    /// Embed a real value (imaginary part zero for complex types).
    fn from_real(re: Self::Real) -> Self;

    /// Convert from an `f64` literal (used for constants).
    fn from_f64(v: f64) -> Self;
}

/// Trait for real-valued floats (`f32`, `f64`).
///
/// Adds a total order and the full `num_traits::Float` method surface
/// (`sqrt`, `powf`, `infinity`, ...) on top of [`Float`].
pub trait Real: Float<Real = Self> + PartialOrd + num_traits::Float {}

// ===========================================================================
// Macro implementations
// ===========================================================================

macro_rules! impl_scalar_real {
    ($ty:ty) => {
        impl Scalar for $ty {
            #[inline]
            fn from_usize(v: usize) -> Self {
                v as Self
            }
        }

        impl Float for $ty {
            type Real = $ty;

            #[inline]
            fn modulus(self) -> $ty {
                self.abs()
            }
            #[inline]
            fn re(self) -> $ty {
                self
            }
            #[inline]
            fn from_real(re: $ty) -> Self {
                re
            }
            #[inline]
            fn from_f64(v: f64) -> Self {
                v as Self
            }
        }

        impl Real for $ty {}
    };
}

impl_scalar_real!(f32);
impl_scalar_real!(f64);

macro_rules! impl_scalar_complex {
    ($ty:ty, $real:ty) => {
        impl Scalar for $ty {
            #[inline]
            fn from_usize(v: usize) -> Self {
                Complex::new(v as $real, 0.0)
            }
            #[inline]
            fn conj(self) -> Self {
                Complex::conj(&self)
            }
        }

        impl Float for $ty {
            type Real = $real;

            #[inline]
            fn modulus(self) -> $real {
                self.norm()
            }
            #[inline]
            fn re(self) -> $real {
                self.re
            }
            #[inline]
            fn from_real(re: $real) -> Self {
                Complex::new(re, 0.0)
            }
            #[inline]
            fn from_f64(v: f64) -> Self {
                Complex::new(v as $real, 0.0)
            }
        }
    };
}

impl_scalar_complex!(Complex32, f32);
impl_scalar_complex!(Complex64, f64);

macro_rules! impl_scalar_int {
    ($ty:ty) => {
        impl Scalar for $ty {
            #[inline]
            #[allow(clippy::cast_possible_wrap)]
            fn from_usize(v: usize) -> Self {
                v as Self
            }
        }

        impl Integer for $ty {}
    };
}

impl_scalar_int!(i8);
impl_scalar_int!(i16);
impl_scalar_int!(i32);
impl_scalar_int!(i64);
impl_scalar_int!(u8);
impl_scalar_int!(u16);
impl_scalar_int!(u32);
impl_scalar_int!(u64);
impl_scalar_int!(usize);
impl_scalar_int!(isize);

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use num_traits::{One, Zero};

    #[test]
    fn test_scalar_zero_one() {
        assert_eq!(f64::zero(), 0.0);
        assert_eq!(f64::one(), 1.0);
        assert_eq!(i32::zero(), 0);
        assert_eq!(Complex64::zero(), Complex::new(0.0, 0.0));
    }

    #[test]
    fn test_from_usize() {
        assert_eq!(f32::from_usize(42), 42.0_f32);
        assert_eq!(u8::from_usize(255), 255_u8);
        assert_eq!(Complex64::from_usize(3), Complex::new(3.0, 0.0));
    }

    #[test]
    fn test_conj_identity_for_reals() {
        assert_eq!(Scalar::conj(2.5_f64), 2.5);
        assert_eq!(Scalar::conj(-7_i32), -7);
    }

    #[test]
    fn test_conj_complex() {
        let z = Complex64::new(1.0, 2.0);
        assert_eq!(Scalar::conj(z), Complex::new(1.0, -2.0));
        // Involution
        assert_eq!(Scalar::conj(Scalar::conj(z)), z);
    }

    #[test]
    fn test_modulus() {
        assert_eq!(Float::modulus(-3.0_f64), 3.0);
        let z = Complex64::new(3.0, 4.0);
        assert!((z.modulus() - 5.0).abs() < 1e-15);
    }

    #[test]
    fn test_real_embedding() {
        let z = Complex64::from_real(2.0);
        assert_eq!(z, Complex::new(2.0, 0.0));
        assert_eq!(Float::re(z), 2.0);
        assert_eq!(Float::re(1.5_f64), 1.5);
    }

    #[test]
    fn test_real_has_float_surface() {
        fn hypot<R: Real>(a: R, b: R) -> R {
            (a * a + b * b).sqrt()
        }
        assert_eq!(hypot(3.0_f64, 4.0), 5.0);
    }
}
