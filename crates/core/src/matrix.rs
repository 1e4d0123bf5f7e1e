use core::fmt;

use crate::{Channels, OpError, TransformDirection};

#[rustfmt::skip]
const IDENTITY: [f32; 16] = [
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 1.0, 0.0,
    0.0, 0.0, 0.0, 1.0,
];

/// `out = m44 * in + offset` over RGBA, `m44` in row-major order.
#[derive(Debug, PartialEq, Clone)]
pub struct MatrixOffsetOp {
    m44: [f32; 16],
    offset: [f32; 4],
    direction: TransformDirection,
}

impl MatrixOffsetOp {
    pub fn new(
        m44: [f32; 16],
        offset: [f32; 4],
        direction: TransformDirection,
    ) -> Result<Self, OpError> {
        if direction == TransformDirection::Inverse && determinant(&m44) == 0.0 {
            return Err(OpError::SingularMatrix);
        }

        Ok(Self { m44, offset, direction })
    }

    pub fn scale(scale: [f32; 4], direction: TransformDirection) -> Result<Self, OpError> {
        let mut m44 = [0.0; 16];
        for (idx, value) in scale.into_iter().enumerate() {
            m44[idx * 5] = value;
        }

        Self::new(m44, [0.0; 4], direction)
    }

    pub fn offset(offset: [f32; 4], direction: TransformDirection) -> Result<Self, OpError> {
        Self::new(IDENTITY, offset, direction)
    }

    #[must_use]
    pub const fn m44(&self) -> &[f32; 16] {
        &self.m44
    }

    #[must_use]
    pub const fn offset_values(&self) -> [f32; 4] {
        self.offset
    }

    #[must_use]
    pub const fn direction(&self) -> TransformDirection {
        self.direction
    }

    #[must_use]
    pub fn is_no_op(&self) -> bool {
        self.m44 == IDENTITY && self.offset.iter().all(|it| *it == 0.0)
    }

    #[must_use]
    pub fn is_inverse(&self, other: &Self) -> bool {
        self.direction == other.direction.inverse()
            && self.m44 == other.m44
            && self.offset == other.offset
    }
}

impl fmt::Display for MatrixOffsetOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<MatrixOffsetOp {} m44={} offset={}>",
            self.direction,
            Channels(&self.m44),
            Channels(&self.offset)
        )
    }
}

/// Cofactor expansion over the first two rows.
fn determinant(m: &[f32; 16]) -> f64 {
    let m = m.map(f64::from);
    let at = |row: usize, col: usize| m[row * 4 + col];

    // 2x2 minors of the top two rows and bottom two rows, indexed by column pair.
    let top = |a: usize, b: usize| at(0, a) * at(1, b) - at(0, b) * at(1, a);
    let bottom = |a: usize, b: usize| at(2, a) * at(3, b) - at(2, b) * at(3, a);

    top(0, 1) * bottom(2, 3) - top(0, 2) * bottom(1, 3) + top(0, 3) * bottom(1, 2)
        + top(1, 2) * bottom(0, 3)
        - top(1, 3) * bottom(0, 2)
        + top(2, 3) * bottom(0, 1)
}
