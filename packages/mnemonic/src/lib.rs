//! # Cyrup Mnemonic
//!
//! BIP-39 mnemonic phrases: entropy generation, checksum, 11-bit word
//! packing, phrase decoding, and PBKDF2 seed derivation.
//!
//! ## Quick Start
//!
//! ```rust
//! use cryypt_mnemonic::{Bip39, EnglishWordlist, bit_size::Bits};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mnemonic = Bip39::size(256u32.bits()).generate()?;
//! let phrase = mnemonic.to_phrase(&EnglishWordlist::new())?;
//!
//! let restored = Bip39::phrase(&phrase).parse()?;
//! assert_eq!(restored.entropy(), mnemonic.entropy());
//!
//! let seed = Bip39::seed(&phrase).with_passphrase("TREZOR").derive();
//! assert_eq!(seed.as_bytes().len(), 64);
//! # Ok(())
//! # }
//! ```
//!
//! Word lists are always passed in explicitly; see [`cryypt_wordlist`] for
//! the English list and the file loader.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod packing;

pub mod bit_size;
pub mod builder;
pub mod checksum;
pub mod entropy;
pub mod error;
pub mod mnemonic;
pub mod seed;

// Re-export core types
pub use builder::{MnemonicBuilder, PhraseBuilder, SeedBuilder};
pub use checksum::{MAX_CHECKSUM_BITS, MIN_CHECKSUM_BITS, checksum, checksum_len};
pub use entropy::{ENTROPY_STEP_BITS, Entropy, MAX_ENTROPY_BITS, MIN_ENTROPY_BITS};
pub use error::{EntropyError, MnemonicError, Result};
pub use mnemonic::{
    MAX_WORD_COUNT, MIN_WORD_COUNT, Mnemonic, WORD_BITS, entropy_bits_for, validate_phrase,
    word_count,
};
pub use seed::{PBKDF2_ROUNDS, SEED_LEN, Seed, SeedConfig, SeedDerivation, derive_seed};

// Word list capability, re-exported so callers need only one import
pub use cryypt_wordlist::{EnglishWordlist, FileWordlist, WORDLIST_SIZE, Wordlist, WordlistError};

/// Main entry point for builder chains
pub struct Bip39;

impl Bip39 {
    /// Start generating a mnemonic with `size` bits of entropy
    pub fn size(size: impl Into<bit_size::BitSize>) -> MnemonicBuilder {
        MnemonicBuilder::new(size.into())
    }

    /// Encode caller-supplied entropy bytes
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not 16, 20, 24, 28 or 32 long.
    pub fn from_entropy(data: &[u8]) -> Result<Mnemonic> {
        Mnemonic::from_bytes(data)
    }

    /// Start decoding a phrase (English unless another list is supplied)
    #[must_use]
    pub fn phrase(phrase: &str) -> PhraseBuilder<'_> {
        PhraseBuilder::new(phrase)
    }

    /// Start deriving a seed from a sentence
    #[must_use]
    pub fn seed(sentence: &str) -> SeedBuilder<'_> {
        SeedBuilder::new(sentence)
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Bip39, Entropy, EnglishWordlist, Mnemonic, MnemonicError, Result, Seed, Wordlist,
        bit_size::{BitSize, Bits},
        derive_seed,
    };
}
