//! Type-safe entropy sizes

use crate::EntropyError;

/// Size expressed in bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BitSize {
    /// The number of bits
    pub bits: u32,
}

impl BitSize {
    /// Narrow to the `u16` domain entropy sizes live in
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::OutOfRange`] if the size does not fit in `u16`.
    pub fn to_entropy_bits(self) -> Result<u16, EntropyError> {
        u16::try_from(self.bits).map_err(|_| EntropyError::OutOfRange { bits: self.bits })
    }
}

impl From<u32> for BitSize {
    fn from(bits: u32) -> Self {
        Self { bits }
    }
}

impl From<u16> for BitSize {
    fn from(bits: u16) -> Self {
        Self {
            bits: u32::from(bits),
        }
    }
}

/// Extension trait for bit conversion
pub trait Bits {
    /// Convert to `BitSize`
    fn bits(self) -> BitSize;
}

impl Bits for u16 {
    fn bits(self) -> BitSize {
        BitSize::from(self)
    }
}

impl Bits for u32 {
    fn bits(self) -> BitSize {
        BitSize { bits: self }
    }
}

impl Bits for usize {
    fn bits(self) -> BitSize {
        // Oversized values saturate; they are rejected later as out of range
        let bits = u32::try_from(self).unwrap_or(u32::MAX);
        BitSize { bits }
    }
}
