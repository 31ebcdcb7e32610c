//! `Display` formatting for [`Tensor`].

use core::fmt;

use crate::Scalar;

use super::Tensor;

impl<T: Scalar> fmt::Display for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "tensor([], shape={:?})", self.shape);
        }

        match self.ndim() {
            0 => write!(f, "tensor({})", self.data[0]),
            1 => {
                write!(f, "tensor([")?;
                for (i, v) in self.data.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, "])")
            }
            2 => {
                let rows = self.shape[0];
                let cols = self.shape[1];
                writeln!(f, "tensor([")?;
                for r in 0..rows {
                    write!(f, "  [")?;
                    for c in 0..cols {
                        if c > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", self.data[r * cols + c])?;
                    }
                    if r < rows - 1 {
                        writeln!(f, "],")?;
                    } else {
                        writeln!(f, "]")?;
                    }
                }
                write!(f, "])")
            }
            _ => {
                // For 3-D+ tensors, show shape and flat data summary
                if self.data.len() < 3 {
                    write!(f, "tensor(shape={:?}, data={:?})", self.shape, self.data)
                } else {
                    write!(
                        f,
                        "tensor(shape={:?}, data=[{}, {}, ..., {}])",
                        self.shape,
                        self.data[0],
                        self.data[1],
                        self.data[self.data.len() - 1]
                    )
                }
            }
        }
    }
}
