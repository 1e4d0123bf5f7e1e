use core::fmt;

#[derive(Debug, PartialEq, Clone)]
pub enum OpError {
    /// An exponent of zero has no inverse.
    ZeroExponentInverse { channel: usize },
    InvalidLogParameter { name: &'static str, channel: usize, value: f32 },
    SingularMatrix,
    LutSize { expected: usize, actual: usize },
    LutDomain { channel: usize, min: f32, max: f32 },
}

impl fmt::Display for OpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroExponentInverse { channel } => {
                write!(f, "cannot invert a 0.0 exponent (channel {channel})")
            }
            Self::InvalidLogParameter { name, channel, value } => {
                write!(f, "invalid log parameter `{name}` = {value} (channel {channel})")
            }
            Self::SingularMatrix => f.write_str("singular matrix can't be inverted"),
            Self::LutSize { expected, actual } => {
                write!(f, "lut has {actual} entries, expected {expected}")
            }
            Self::LutDomain { channel, min, max } => {
                write!(f, "lut domain [{min}, {max}] is empty (channel {channel})")
            }
        }
    }
}

impl std::error::Error for OpError {}
