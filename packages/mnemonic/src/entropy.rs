//! Mnemonic entropy generation and validation
//!
//! Entropy is the root secret of a mnemonic. BIP-39 allows 128 to 256 bits in
//! steps of 32, so that each step adds exactly one checksum bit and the total
//! packs into whole 11-bit words.

use crate::EntropyError;
use crate::checksum::checksum_len;
use crate::mnemonic::word_count;
use rand::{CryptoRng, RngCore};
use std::fmt;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

/// Smallest permitted entropy size in bits
pub const MIN_ENTROPY_BITS: u16 = 128;

/// Largest permitted entropy size in bits
pub const MAX_ENTROPY_BITS: u16 = 256;

/// Entropy sizes must be a multiple of this many bits
pub const ENTROPY_STEP_BITS: u16 = 32;

/// Validated entropy of 128, 160, 192, 224 or 256 bits
///
/// The bytes are wiped when the value is dropped, and never printed by
/// `Debug`.
#[derive(Clone)]
pub struct Entropy {
    size: u16,
    data: Zeroizing<Vec<u8>>,
}

impl Entropy {
    /// Generate entropy from the thread-local CSPRNG
    ///
    /// # Errors
    ///
    /// Returns an error if `size_bits` is outside 128..=256 or not a multiple
    /// of 32.
    pub fn generate(size_bits: u16) -> Result<Self, EntropyError> {
        Self::generate_with(size_bits, &mut rand::rng())
    }

    /// Generate entropy from a caller-supplied CSPRNG
    ///
    /// # Errors
    ///
    /// Returns an error if `size_bits` is outside 128..=256 or not a multiple
    /// of 32.
    pub fn generate_with<R>(size_bits: u16, rng: &mut R) -> Result<Self, EntropyError>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let size = validate_size(u32::from(size_bits))?;

        let mut data = Zeroizing::new(vec![0u8; usize::from(size / 8)]);
        rng.fill_bytes(&mut data);

        tracing::debug!(entropy_bits = size, "generated entropy");
        Ok(Self { size, data })
    }

    /// Validate externally supplied entropy bytes
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The bit length of `data` does not fit the `u16` size domain
    /// - The bit length is outside 128..=256
    /// - The bit length is not a multiple of 32
    pub fn from_bytes(data: &[u8]) -> Result<Self, EntropyError> {
        let size = u16::try_from(data.len())
            .ok()
            .and_then(|len| len.checked_mul(8))
            .ok_or(EntropyError::SizeOverflow { bytes: data.len() })?;
        let size = validate_size(u32::from(size))?;

        Ok(Self {
            size,
            data: Zeroizing::new(data.to_vec()),
        })
    }

    /// Size in bits
    #[must_use]
    pub fn size_bits(&self) -> u16 {
        self.size
    }

    /// The raw entropy bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Number of checksum bits this entropy carries (`size / 32`)
    #[must_use]
    pub fn checksum_bits(&self) -> u8 {
        checksum_len(self.size)
    }

    /// Number of words in the mnemonic encoding this entropy
    #[must_use]
    pub fn word_count(&self) -> usize {
        word_count(self.size)
    }
}

impl PartialEq for Entropy {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && bool::from(self.data.as_slice().ct_eq(other.data.as_slice()))
    }
}

impl Eq for Entropy {}

impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entropy")
            .field("size", &self.size)
            .field("data", &"<redacted>")
            .finish()
    }
}

/// Check a bit count against the BIP-39 entropy rules
pub(crate) fn validate_size(bits: u32) -> Result<u16, EntropyError> {
    if !(u32::from(MIN_ENTROPY_BITS)..=u32::from(MAX_ENTROPY_BITS)).contains(&bits) {
        return Err(EntropyError::OutOfRange { bits });
    }

    if bits % u32::from(ENTROPY_STEP_BITS) != 0 {
        return Err(EntropyError::NotMultipleOf32 { bits });
    }

    u16::try_from(bits).map_err(|_| EntropyError::OutOfRange { bits })
}
