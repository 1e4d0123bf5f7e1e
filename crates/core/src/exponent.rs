use core::fmt;

use crate::{Channels, OpError, TransformDirection};

const INVERSE_TOLERANCE: f32 = 1e-6;

/// Per-channel power curve: `out = in ^ exponent` (or `in ^ (1 / exponent)` in the inverse direction).
#[derive(Debug, PartialEq, Clone)]
pub struct ExponentOp {
    exponent: [f32; 4],
    direction: TransformDirection,
}

impl ExponentOp {
    pub fn new(exponent: [f32; 4], direction: TransformDirection) -> Result<Self, OpError> {
        if direction == TransformDirection::Inverse {
            if let Some(channel) = exponent.iter().position(|it| *it == 0.0) {
                return Err(OpError::ZeroExponentInverse { channel });
            }
        }

        Ok(Self { exponent, direction })
    }

    #[must_use]
    pub const fn exponent(&self) -> [f32; 4] {
        self.exponent
    }

    #[must_use]
    pub const fn direction(&self) -> TransformDirection {
        self.direction
    }

    /// The exponent actually applied, after taking the direction into account.
    #[must_use]
    pub fn effective_exponent(&self) -> [f32; 4] {
        match self.direction {
            TransformDirection::Forward => self.exponent,
            TransformDirection::Inverse => self.exponent.map(|it| 1.0 / it),
        }
    }

    #[must_use]
    pub fn is_no_op(&self) -> bool {
        self.exponent.iter().all(|it| *it == 1.0)
    }

    #[must_use]
    pub fn is_inverse(&self, other: &Self) -> bool {
        let lhs = self.effective_exponent();
        let rhs = other.effective_exponent();

        lhs.iter().zip(&rhs).all(|(a, b)| (a * b - 1.0).abs() <= INVERSE_TOLERANCE)
    }
}

impl fmt::Display for ExponentOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<ExponentOp {} {}>", self.direction, Channels(&self.exponent))
    }
}
