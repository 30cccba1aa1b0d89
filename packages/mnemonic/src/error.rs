//! Error handling for the mnemonic pipeline

use cryypt_wordlist::WordlistError;
use thiserror::Error;

/// Entropy validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntropyError {
    /// Size outside the permitted 128..=256 bit range
    #[error("Entropy size out of range: {bits} bits (expected 128 to 256)")]
    OutOfRange {
        /// Requested size in bits
        bits: u32,
    },

    /// Size not divisible into whole 32-bit checksum units
    #[error("Entropy size is not a multiple of 32: {bits} bits")]
    NotMultipleOf32 {
        /// Requested size in bits
        bits: u32,
    },

    /// Byte length too large to express as a bit count
    #[error("Entropy length overflows the size domain: {bytes} bytes")]
    SizeOverflow {
        /// Supplied length in bytes
        bytes: usize,
    },
}

/// Mnemonic encoding, decoding and derivation errors
#[derive(Debug, Error)]
pub enum MnemonicError {
    /// Entropy failed validation
    #[error("Invalid entropy: {0}")]
    Entropy(#[from] EntropyError),

    /// Word list lookup failed
    #[error("Word list lookup failed: {0}")]
    Wordlist(#[from] WordlistError),

    /// Phrase length is not 12, 15, 18, 21 or 24 words
    #[error("Invalid word count: {count} (expected 12, 15, 18, 21 or 24)")]
    WordCount {
        /// Number of words supplied
        count: usize,
    },

    /// Word is not in the word list
    ///
    /// The word itself is kept out of the message so it cannot leak into logs.
    #[error("Unknown word at position {position}")]
    UnknownWord {
        /// The unrecognised word
        word: String,
        /// Zero-based position in the phrase
        position: usize,
    },

    /// Recomputed checksum disagrees with the one carried by the phrase
    #[error("Checksum mismatch: expected {expected:#04x}, found {found:#04x}")]
    ChecksumMismatch {
        /// Checksum of the recovered entropy
        expected: u8,
        /// Checksum bits read from the phrase
        found: u8,
    },

    /// Entropy and checksum do not fill a whole number of 11-bit words
    ///
    /// Internal consistency check. Every validated entropy size packs into
    /// whole words, so this is never returned for valid input.
    #[error("Bit length {bits} is not a whole number of 11-bit words")]
    BitLength {
        /// Total bit length
        bits: usize,
    },

    /// Rejected configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl MnemonicError {
    /// Create an `invalid_config` error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Stable variant name, safe to log
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Entropy(_) => "entropy",
            Self::Wordlist(_) => "wordlist",
            Self::WordCount { .. } => "word_count",
            Self::UnknownWord { .. } => "unknown_word",
            Self::ChecksumMismatch { .. } => "checksum_mismatch",
            Self::BitLength { .. } => "bit_length",
            Self::InvalidConfig(_) => "invalid_config",
        }
    }
}

/// Result type for mnemonic operations
pub type Result<T> = std::result::Result<T, MnemonicError>;
