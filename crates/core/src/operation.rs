use core::fmt;
use std::mem;

use crate::{ExponentOp, LogOp, Lut1DOp, Lut3DOp, MatrixOffsetOp, Op};

#[derive(Debug, Clone)]
pub enum Operation {
    Exponent(ExponentOp),
    Log(LogOp),
    MatrixOffset(MatrixOffsetOp),
    Lut1D(Lut1DOp),
    Lut3D(Lut3DOp),
}

impl Op for Operation {
    fn is_same_type(&self, other: &Self) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }

    fn is_no_op(&self) -> bool {
        match self {
            Self::Exponent(it) => it.is_no_op(),
            Self::MatrixOffset(it) => it.is_no_op(),
            Self::Lut1D(it) => it.is_no_op(),
            Self::Log(_) | Self::Lut3D(_) => false,
        }
    }

    fn is_inverse(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Exponent(lhs), Self::Exponent(rhs)) => lhs.is_inverse(rhs),
            (Self::Log(lhs), Self::Log(rhs)) => lhs.is_inverse(rhs),
            (Self::MatrixOffset(lhs), Self::MatrixOffset(rhs)) => lhs.is_inverse(rhs),
            (Self::Lut1D(lhs), Self::Lut1D(rhs)) => lhs.is_inverse(rhs),
            _ => false,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exponent(it) => fmt::Display::fmt(it, f),
            Self::Log(it) => fmt::Display::fmt(it, f),
            Self::MatrixOffset(it) => fmt::Display::fmt(it, f),
            Self::Lut1D(it) => fmt::Display::fmt(it, f),
            Self::Lut3D(it) => fmt::Display::fmt(it, f),
        }
    }
}

impl From<ExponentOp> for Operation {
    fn from(value: ExponentOp) -> Self {
        Self::Exponent(value)
    }
}

impl From<LogOp> for Operation {
    fn from(value: LogOp) -> Self {
        Self::Log(value)
    }
}

impl From<MatrixOffsetOp> for Operation {
    fn from(value: MatrixOffsetOp) -> Self {
        Self::MatrixOffset(value)
    }
}

impl From<Lut1DOp> for Operation {
    fn from(value: Lut1DOp) -> Self {
        Self::Lut1D(value)
    }
}

impl From<Lut3DOp> for Operation {
    fn from(value: Lut3DOp) -> Self {
        Self::Lut3D(value)
    }
}
