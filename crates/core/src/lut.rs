use core::cmp::Ordering;
use core::fmt;
use std::sync::Arc;

use crate::{OpError, TransformDirection};

const IDENTITY_TOLERANCE: f32 = 1e-5;

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Interpolation {
    Nearest,
    Linear,
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nearest => f.write_str("nearest"),
            Self::Linear => f.write_str("linear"),
        }
    }
}

/// A per-channel 1D table, sampled evenly over `[from_min, from_max]`.
#[derive(Debug, PartialEq, Clone)]
pub struct Lut1D {
    from_min: [f32; 3],
    from_max: [f32; 3],
    luts: [Vec<f32>; 3],
}

impl Lut1D {
    pub fn new(
        from_min: [f32; 3],
        from_max: [f32; 3],
        luts: [Vec<f32>; 3],
    ) -> Result<Self, OpError> {
        let len = luts[0].len();

        for (channel, lut) in luts.iter().enumerate() {
            if lut.len() < 2 || lut.len() != len {
                return Err(OpError::LutSize { expected: len.max(2), actual: lut.len() });
            }

            let (min, max) = (from_min[channel], from_max[channel]);
            // also catches NaN
            if min.partial_cmp(&max) != Some(Ordering::Less) {
                return Err(OpError::LutDomain { channel, min, max });
            }
        }

        Ok(Self { from_min, from_max, luts })
    }

    /// A table mapping every sample to its own input, over `[0, 1]`.
    pub fn identity(size: usize) -> Result<Self, OpError> {
        if size < 2 {
            return Err(OpError::LutSize { expected: 2, actual: size });
        }

        let ramp: Vec<f32> = (0..size).map(|idx| idx as f32 / (size - 1) as f32).collect();

        Self::new([0.0; 3], [1.0; 3], [ramp.clone(), ramp.clone(), ramp])
    }

    /// Samples per channel.
    #[must_use]
    pub fn size(&self) -> usize {
        self.luts[0].len()
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.luts.iter().enumerate().all(|(channel, lut)| {
            let min = self.from_min[channel];
            let step = (self.from_max[channel] - min) / (lut.len() - 1) as f32;

            lut.iter()
                .enumerate()
                .all(|(idx, value)| (value - (min + step * idx as f32)).abs() <= IDENTITY_TOLERANCE)
        })
    }
}

#[derive(Debug, Clone)]
pub struct Lut1DOp {
    lut: Arc<Lut1D>,
    interpolation: Interpolation,
    direction: TransformDirection,
}

impl Lut1DOp {
    #[must_use]
    pub const fn new(
        lut: Arc<Lut1D>,
        interpolation: Interpolation,
        direction: TransformDirection,
    ) -> Self {
        Self { lut, interpolation, direction }
    }

    #[must_use]
    pub fn lut(&self) -> &Lut1D {
        &self.lut
    }

    /// Nearest sampling snaps values to the table's sample points, so it's never a no-op.
    #[must_use]
    pub fn is_no_op(&self) -> bool {
        self.interpolation == Interpolation::Linear && self.lut.is_identity()
    }

    /// Only linear tables cancel, a nearest lookup loses whatever falls between samples.
    #[must_use]
    pub fn is_inverse(&self, other: &Self) -> bool {
        self.direction == other.direction.inverse()
            && self.interpolation == Interpolation::Linear
            && other.interpolation == Interpolation::Linear
            && (Arc::ptr_eq(&self.lut, &other.lut) || self.lut == other.lut)
    }
}

impl fmt::Display for Lut1DOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Lut1DOp {} {} size={}>", self.direction, self.interpolation, self.lut.size())
    }
}

/// A cube of RGB samples, `edge_len` per side, red varying fastest.
#[derive(Debug, PartialEq, Clone)]
pub struct Lut3D {
    edge_len: usize,
    values: Vec<f32>,
}

impl Lut3D {
    pub fn new(edge_len: usize, values: Vec<f32>) -> Result<Self, OpError> {
        // saturates to a length no `Vec<f32>` can have.
        let expected = edge_len.saturating_pow(3).saturating_mul(3);
        if edge_len < 2 || values.len() != expected {
            return Err(OpError::LutSize { expected, actual: values.len() });
        }

        Ok(Self { edge_len, values })
    }

    #[must_use]
    pub const fn edge_len(&self) -> usize {
        self.edge_len
    }

    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }
}

/// Only ever applied forward, there's no inverse for 3D tables.
#[derive(Debug, Clone)]
pub struct Lut3DOp {
    lut: Arc<Lut3D>,
    interpolation: Interpolation,
}

impl Lut3DOp {
    #[must_use]
    pub const fn new(lut: Arc<Lut3D>, interpolation: Interpolation) -> Self {
        Self { lut, interpolation }
    }

    #[must_use]
    pub fn lut(&self) -> &Lut3D {
        &self.lut
    }
}

impl fmt::Display for Lut3DOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Lut3DOp {} size={}>", self.interpolation, self.lut.edge_len())
    }
}
