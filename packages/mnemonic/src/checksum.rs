//! Entropy checksum
//!
//! The checksum is the leading `size / 32` bits of SHA-256 over the entropy
//! bytes, right-aligned in a `u8`.

use crate::entropy::{ENTROPY_STEP_BITS, Entropy, MAX_ENTROPY_BITS, MIN_ENTROPY_BITS};
use sha2::{Digest, Sha256};

/// Checksum length for the smallest entropy size
pub const MIN_CHECKSUM_BITS: u8 = checksum_len(MIN_ENTROPY_BITS);

/// Checksum length for the largest entropy size
pub const MAX_CHECKSUM_BITS: u8 = checksum_len(MAX_ENTROPY_BITS);

/// Checksum length in bits for a valid entropy size
#[must_use]
pub const fn checksum_len(entropy_bits: u16) -> u8 {
    // Valid sizes give 4..=8, which always fits
    (entropy_bits / ENTROPY_STEP_BITS) as u8
}

/// Compute the checksum of `entropy`
///
/// The result holds the checksum in its low bits; the unused high bits are
/// zero.
#[must_use]
pub fn checksum(entropy: &Entropy) -> u8 {
    let digest = Sha256::digest(entropy.as_bytes());
    digest[0] >> (8 - entropy.checksum_bits())
}
