#![forbid(unsafe_code)]
#![warn(clippy::must_use_candidate)]

use core::fmt;
use std::sync::Arc;

mod error;
pub mod exponent;
pub mod log;
pub mod lut;
pub mod matrix;
mod operation;


pub use error::OpError;
pub use exponent::ExponentOp;
pub use log::{LogOp, LogParams};
pub use lut::{Interpolation, Lut1D, Lut1DOp, Lut3D, Lut3DOp};
pub use matrix::MatrixOffsetOp;
pub use operation::Operation;

/// The capabilities an optimizer needs from a single stage of a color transform.
///
/// `Display` is the human readable description, used for diagnostics only.
pub trait Op: fmt::Display {
    /// Both ops are the same kind of operation, regardless of their parameters.
    fn is_same_type(&self, other: &Self) -> bool;

    /// Applying this op leaves every value unchanged.
    fn is_no_op(&self) -> bool;

    /// Applying `self` and then `other` (or the reverse) is the identity.
    ///
    /// Only meaningful when `self.is_same_type(other)` holds.
    fn is_inverse(&self, other: &Self) -> bool;
}

impl<T: Op> Op for Arc<T> {
    fn is_same_type(&self, other: &Self) -> bool {
        T::is_same_type(self, other)
    }

    fn is_no_op(&self) -> bool {
        T::is_no_op(self)
    }

    fn is_inverse(&self, other: &Self) -> bool {
        T::is_inverse(self, other)
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum TransformDirection {
    Forward,
    Inverse,
}

impl TransformDirection {
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Forward => Self::Inverse,
            Self::Inverse => Self::Forward,
        }
    }
}

impl fmt::Display for TransformDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => f.write_str("forward"),
            Self::Inverse => f.write_str("inverse"),
        }
    }
}

/// Renders a list of ops, one per line, as `Op {index}: {op}`.
pub struct OpsDisplay<'a, T> {
    ops: &'a [T],
    indent: usize,
}

impl<T: fmt::Display> fmt::Display for OpsDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, op) in self.ops.iter().enumerate() {
            if idx != 0 {
                f.write_str("\n")?;
            }

            write!(f, "{:indent$}Op {idx}: {op}", "", indent = self.indent)?;
        }

        Ok(())
    }
}

#[must_use]
pub fn serialize_ops<T: fmt::Display>(ops: &[T], indent: usize) -> OpsDisplay<'_, T> {
    OpsDisplay { ops, indent }
}

/// Writes `values` separated by `,`.
pub(crate) struct Channels<'a>(pub &'a [f32]);

impl fmt::Display for Channels<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, value) in self.0.iter().enumerate() {
            if idx != 0 {
                f.write_str(",")?;
            }

            write!(f, "{value}")?;
        }

        Ok(())
    }
}
