use core::fmt;

use crate::{Channels, OpError, TransformDirection};

/// Parameters of a log curve, per channel:
/// `out = k * log(m * in + b, base) + kb`.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct LogParams {
    pub k: [f32; 3],
    pub m: [f32; 3],
    pub b: [f32; 3],
    pub base: [f32; 3],
    pub kb: [f32; 3],
}

#[derive(Debug, PartialEq, Clone)]
pub struct LogOp {
    params: LogParams,
    direction: TransformDirection,
}

impl LogOp {
    pub fn new(params: LogParams, direction: TransformDirection) -> Result<Self, OpError> {
        let LogParams { k, m, b, base, kb } = &params;
        let named = [("k", k), ("m", m), ("b", b), ("base", base), ("kb", kb)];

        for channel in 0..3 {
            for (name, values) in named {
                let value = values[channel];
                if !value.is_finite() {
                    return Err(OpError::InvalidLogParameter { name, channel, value });
                }
            }

            let base = base[channel];
            if base <= 0.0 || base == 1.0 {
                return Err(OpError::InvalidLogParameter { name: "base", channel, value: base });
            }

            // both are divided by in the inverse.
            if k[channel] == 0.0 {
                return Err(OpError::InvalidLogParameter { name: "k", channel, value: 0.0 });
            }

            if m[channel] == 0.0 {
                return Err(OpError::InvalidLogParameter { name: "m", channel, value: 0.0 });
            }
        }

        Ok(Self { params, direction })
    }

    #[must_use]
    pub const fn params(&self) -> &LogParams {
        &self.params
    }

    #[must_use]
    pub const fn direction(&self) -> TransformDirection {
        self.direction
    }

    #[must_use]
    pub fn is_inverse(&self, other: &Self) -> bool {
        self.direction == other.direction.inverse() && self.params == other.params
    }
}

impl fmt::Display for LogOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let LogParams { k, m, b, base, kb } = &self.params;
        write!(
            f,
            "<LogOp {} k={} m={} b={} base={} kb={}>",
            self.direction,
            Channels(k),
            Channels(m),
            Channels(b),
            Channels(base),
            Channels(kb),
        )
    }
}
