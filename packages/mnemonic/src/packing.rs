//! 11-bit word index packing
//!
//! Bits are consumed and produced most-significant first, across byte
//! boundaries, exactly as BIP-39 lays out `entropy || checksum`.

use crate::mnemonic::WORD_BITS;

const GROUP_BITS: u32 = WORD_BITS as u32;
const GROUP_MASK: u32 = (1 << GROUP_BITS) - 1;

/// Read the first `group_count` 11-bit groups from `bytes`
///
/// Stops early if `bytes` runs out, so callers check the returned length.
pub(crate) fn split_indices(bytes: &[u8], group_count: usize) -> Vec<u16> {
    let mut indices = Vec::with_capacity(group_count);
    let mut acc: u32 = 0;
    let mut pending: u32 = 0;

    for &byte in bytes {
        if indices.len() == group_count {
            break;
        }

        acc = (acc << 8) | u32::from(byte);
        pending += 8;

        while pending >= GROUP_BITS && indices.len() < group_count {
            pending -= GROUP_BITS;
            indices.push(((acc >> pending) & GROUP_MASK) as u16);
        }

        // At most 10 unread bits survive, so the next shift cannot overflow
        acc &= (1 << pending) - 1;
    }

    indices
}

/// Write 11-bit groups back into bytes
///
/// A trailing partial byte is left-aligned and zero-padded.
pub(crate) fn join_indices(indices: &[u16]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity((indices.len() * WORD_BITS).div_ceil(8));
    let mut acc: u32 = 0;
    let mut pending: u32 = 0;

    for &index in indices {
        acc = (acc << GROUP_BITS) | (u32::from(index) & GROUP_MASK);
        pending += GROUP_BITS;

        while pending >= 8 {
            pending -= 8;
            bytes.push((acc >> pending) as u8);
        }

        acc &= (1 << pending) - 1;
    }

    if pending > 0 {
        bytes.push((acc << (8 - pending)) as u8);
    }

    bytes
}
