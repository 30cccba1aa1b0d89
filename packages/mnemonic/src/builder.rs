//! Builder entry points
//!
//! Thin chains over [`Mnemonic`] and [`SeedDerivation`] so common tasks read
//! as one expression.

use crate::bit_size::BitSize;
use crate::mnemonic::{Mnemonic, validate_phrase};
use crate::seed::{Seed, SeedConfig, SeedDerivation};
use crate::Result;
use cryypt_wordlist::{EnglishWordlist, Wordlist};
use rand::{CryptoRng, RngCore};

/// Builder for generating a mnemonic of a given size
#[derive(Debug, Clone, Copy)]
pub struct MnemonicBuilder {
    size: BitSize,
}

impl MnemonicBuilder {
    /// Create a builder for `size` bits of entropy
    #[must_use]
    pub fn new(size: BitSize) -> Self {
        Self { size }
    }

    /// Generate from the thread-local CSPRNG
    ///
    /// # Errors
    ///
    /// Returns an error if the size is not a valid entropy size.
    pub fn generate(self) -> Result<Mnemonic> {
        Mnemonic::generate(self.size.to_entropy_bits()?)
    }

    /// Generate from a caller-supplied CSPRNG
    ///
    /// # Errors
    ///
    /// Returns an error if the size is not a valid entropy size.
    pub fn generate_with<R>(self, rng: &mut R) -> Result<Mnemonic>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        Mnemonic::generate_with(self.size.to_entropy_bits()?, rng)
    }
}

/// Builder for decoding a phrase, English by default
///
/// The word list is held by value; pass `&list` to borrow a loaded one.
pub struct PhraseBuilder<'a, W: Wordlist = EnglishWordlist> {
    phrase: &'a str,
    wordlist: W,
}

impl<'a> PhraseBuilder<'a, EnglishWordlist> {
    /// Create a builder over `phrase` using the English list
    #[must_use]
    pub fn new(phrase: &'a str) -> Self {
        Self {
            phrase,
            wordlist: EnglishWordlist::new(),
        }
    }
}

impl<'a, W: Wordlist> PhraseBuilder<'a, W> {
    /// Decode against a different word list
    #[must_use]
    pub fn with_wordlist<V: Wordlist>(self, wordlist: V) -> PhraseBuilder<'a, V> {
        PhraseBuilder {
            phrase: self.phrase,
            wordlist,
        }
    }

    /// Decode the phrase
    ///
    /// # Errors
    ///
    /// Returns an error on bad word count, unknown words or checksum mismatch.
    pub fn parse(self) -> Result<Mnemonic> {
        Mnemonic::from_phrase(self.phrase, &self.wordlist)
    }

    /// Check the phrase without keeping the result
    ///
    /// # Errors
    ///
    /// Returns an error on bad word count, unknown words or checksum mismatch.
    pub fn validate(self) -> Result<()> {
        validate_phrase(self.phrase, &self.wordlist)
    }
}

/// Builder for deriving a seed from a sentence
#[derive(Debug, Clone)]
pub struct SeedBuilder<'a> {
    sentence: &'a str,
    passphrase: Option<&'a str>,
    config: SeedConfig,
}

impl<'a> SeedBuilder<'a> {
    /// Create a builder over `sentence` with no passphrase
    #[must_use]
    pub fn new(sentence: &'a str) -> Self {
        Self {
            sentence,
            passphrase: None,
            config: SeedConfig::default(),
        }
    }

    /// Set the passphrase
    #[must_use]
    pub fn with_passphrase(mut self, passphrase: &'a str) -> Self {
        self.passphrase = Some(passphrase);
        self
    }

    /// Use non-default derivation parameters
    #[must_use]
    pub fn with_config(mut self, config: SeedConfig) -> Self {
        self.config = config;
        self
    }

    /// Derive the seed
    #[must_use]
    pub fn derive(self) -> Seed {
        SeedDerivation::new(self.config).derive(self.sentence, self.passphrase)
    }
}
