//! # Tenax
//!
//! Dense N-dimensional arrays and linear algebra in pure Rust.
//!
//! One `use tenax::prelude::*;` gives you generic tensors, zero-copy
//! strided views with lazy transposition and conjugation, broadcasting
//! contractions, and the LU, LDL, and Cholesky decompositions.
//!
//! The actual implementation lives in [`tenax_core`] (re-exported here
//! as [`core`]); this crate is the user-facing entry point, and future
//! sub-crates will be re-exported alongside it.

pub use tenax_core as core;

/// Glob-import convenience: `use tenax::prelude::*;`
pub mod prelude {
    pub use tenax_core::prelude::*;
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_brings_in_tensor() {
        let a = Tensor::from_vec(vec![1.0_f64, 2.0, 3.0, 4.0], vec![2, 2]).unwrap();
        let t = a.transpose();
        assert_eq!(t.shape(), &[2, 2]);
        assert_eq!(t.get(&[0, 1]).unwrap(), 3.0);
    }

    #[test]
    fn test_core_path_reaches_linalg() {
        let a = Tensor::from_vec(vec![2.0_f64, 1.0, 1.0, 4.0], vec![2, 2]).unwrap();
        let det = crate::core::linalg::det(&a).unwrap();
        assert!((det - 7.0).abs() < 1e-10);
    }
}
