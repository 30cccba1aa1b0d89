//! Mnemonic encoding and decoding
//!
//! A [`Mnemonic`] packs `entropy || checksum` into 11-bit word indices. Words
//! only appear once a [`Wordlist`] is supplied, so the same mnemonic can be
//! rendered in any language.

use crate::checksum::{checksum, checksum_len};
use crate::entropy::{self, Entropy, MAX_ENTROPY_BITS, MIN_ENTROPY_BITS};
use crate::packing::{join_indices, split_indices};
use crate::seed::{Seed, derive_seed};
use crate::{MnemonicError, Result};
use cryypt_common::LoggingTransformer;
use cryypt_wordlist::Wordlist;
use rand::{CryptoRng, RngCore};
use std::fmt;
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroizing;

/// Bits per word index
pub const WORD_BITS: usize = 11;

/// Words in a mnemonic over the smallest entropy size
pub const MIN_WORD_COUNT: usize = word_count(MIN_ENTROPY_BITS);

/// Words in a mnemonic over the largest entropy size
pub const MAX_WORD_COUNT: usize = word_count(MAX_ENTROPY_BITS);

/// Number of words for a valid entropy size: `(bits + bits / 32) / 11`
#[must_use]
pub const fn word_count(entropy_bits: u16) -> usize {
    (entropy_bits as usize + checksum_len(entropy_bits) as usize) / WORD_BITS
}

/// Entropy size implied by a phrase length, if the length is a valid one
#[must_use]
pub const fn entropy_bits_for(word_count: usize) -> Option<u16> {
    if word_count < MIN_WORD_COUNT || word_count > MAX_WORD_COUNT || word_count % 3 != 0 {
        return None;
    }
    // 33 phrase bits carry 32 entropy bits
    Some((word_count * WORD_BITS * 32 / 33) as u16)
}

/// Entropy, its checksum, and the word indices encoding both
#[derive(Clone, PartialEq, Eq)]
pub struct Mnemonic {
    entropy: Entropy,
    checksum: u8,
    indices: Zeroizing<Vec<u16>>,
}

impl Mnemonic {
    /// Encode entropy as word indices
    ///
    /// # Errors
    ///
    /// Returns an error if the entropy size breaks the BIP-39 rules, or if
    /// entropy and checksum do not fill a whole number of words.
    pub fn from_entropy(entropy: Entropy) -> Result<Self> {
        let size = entropy::validate_size(u32::from(entropy.size_bits()))?;
        let checksum = checksum(&entropy);
        let checksum_bits = entropy.checksum_bits();

        let total_bits = usize::from(size) + usize::from(checksum_bits);
        if total_bits % WORD_BITS != 0 {
            return Err(MnemonicError::BitLength { bits: total_bits });
        }

        // Checksum bits sit directly after the last entropy bit
        let mut packed = Zeroizing::new(Vec::with_capacity(entropy.as_bytes().len() + 1));
        packed.extend_from_slice(entropy.as_bytes());
        packed.push(checksum << (8 - checksum_bits));

        let indices = split_indices(&packed, total_bits / WORD_BITS);
        if indices.len() * WORD_BITS != total_bits {
            return Err(MnemonicError::BitLength { bits: total_bits });
        }

        LoggingTransformer::log_mnemonic_event("encode", size, indices.len());
        Ok(Self {
            entropy,
            checksum,
            indices: Zeroizing::new(indices),
        })
    }

    /// Generate fresh entropy and encode it
    ///
    /// # Errors
    ///
    /// Returns an error if `size_bits` is outside 128..=256 or not a multiple
    /// of 32.
    pub fn generate(size_bits: u16) -> Result<Self> {
        Self::from_entropy(Entropy::generate(size_bits)?)
    }

    /// Generate entropy from a caller-supplied CSPRNG and encode it
    ///
    /// # Errors
    ///
    /// Returns an error if `size_bits` is outside 128..=256 or not a multiple
    /// of 32.
    pub fn generate_with<R>(size_bits: u16, rng: &mut R) -> Result<Self>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        Self::from_entropy(Entropy::generate_with(size_bits, rng)?)
    }

    /// Validate raw entropy bytes and encode them
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not valid entropy.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_entropy(Entropy::from_bytes(data)?)
    }

    /// Decode words back into a mnemonic, verifying the checksum
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The phrase is not 12, 15, 18, 21 or 24 words long
    /// - A word is missing from `wordlist`
    /// - The checksum carried by the phrase does not match its entropy
    pub fn from_words<S, W>(words: &[S], wordlist: &W) -> Result<Self>
    where
        S: AsRef<str>,
        W: Wordlist + ?Sized,
    {
        Self::decode(words, wordlist).inspect_err(|err| {
            LoggingTransformer::log_validation_failure("decode", err.kind());
        })
    }

    /// Decode a whitespace-separated phrase
    ///
    /// The phrase is NFKD-normalized before lookup, so any run of Unicode
    /// whitespace separates words.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Mnemonic::from_words`].
    pub fn from_phrase<W>(phrase: &str, wordlist: &W) -> Result<Self>
    where
        W: Wordlist + ?Sized,
    {
        let normalized: Zeroizing<String> = Zeroizing::new(phrase.nfkd().collect());
        let words: Vec<&str> = normalized.split_whitespace().collect();
        Self::from_words(words.as_slice(), wordlist)
    }

    /// The encoded entropy
    #[must_use]
    pub fn entropy(&self) -> &Entropy {
        &self.entropy
    }

    /// Checksum value, right-aligned
    #[must_use]
    pub fn checksum(&self) -> u8 {
        self.checksum
    }

    /// Word indices, each in `0..2048`
    #[must_use]
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    /// Number of words
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.indices.len()
    }

    /// Resolve the indices against a word list
    ///
    /// # Errors
    ///
    /// Returns [`MnemonicError::Wordlist`] if the list rejects an index.
    pub fn to_words<W>(&self, wordlist: &W) -> Result<Vec<String>>
    where
        W: Wordlist + ?Sized,
    {
        self.indices
            .iter()
            .map(|&index| {
                wordlist
                    .word_at(index)
                    .map(str::to_owned)
                    .map_err(MnemonicError::from)
            })
            .collect()
    }

    /// Words joined by single spaces, the form seeds are derived from
    ///
    /// # Errors
    ///
    /// Returns [`MnemonicError::Wordlist`] if the list rejects an index.
    pub fn to_phrase<W>(&self, wordlist: &W) -> Result<Zeroizing<String>>
    where
        W: Wordlist + ?Sized,
    {
        let words = Zeroizing::new(self.to_words(wordlist)?);
        Ok(Zeroizing::new(words.join(" ")))
    }

    /// Derive the binary seed for this mnemonic's phrase in `wordlist`
    ///
    /// # Errors
    ///
    /// Returns [`MnemonicError::Wordlist`] if the list rejects an index.
    pub fn to_seed<W>(&self, wordlist: &W, passphrase: Option<&str>) -> Result<Seed>
    where
        W: Wordlist + ?Sized,
    {
        let phrase = self.to_phrase(wordlist)?;
        Ok(derive_seed(&phrase, passphrase))
    }

    fn decode<S, W>(words: &[S], wordlist: &W) -> Result<Self>
    where
        S: AsRef<str>,
        W: Wordlist + ?Sized,
    {
        let count = words.len();
        let entropy_bits = entropy_bits_for(count).ok_or(MnemonicError::WordCount { count })?;

        let indices = words
            .iter()
            .enumerate()
            .map(|(position, word)| {
                let word = word.as_ref();
                wordlist
                    .index_of(word)
                    .ok_or_else(|| MnemonicError::UnknownWord {
                        word: word.to_owned(),
                        position,
                    })
            })
            .collect::<Result<Vec<u16>>>()?;

        let packed = Zeroizing::new(join_indices(&indices));
        let entropy_len = usize::from(entropy_bits / 8);
        let total_bits = count * WORD_BITS;
        let (entropy_bytes, trailer) = match (packed.get(..entropy_len), packed.get(entropy_len)) {
            (Some(entropy_bytes), Some(&trailer)) => (entropy_bytes, trailer),
            _ => return Err(MnemonicError::BitLength { bits: total_bits }),
        };

        let entropy = Entropy::from_bytes(entropy_bytes)?;
        let found = trailer >> (8 - entropy.checksum_bits());
        let expected = checksum(&entropy);
        if found != expected {
            return Err(MnemonicError::ChecksumMismatch { expected, found });
        }

        LoggingTransformer::log_mnemonic_event("decode", entropy_bits, count);
        Ok(Self {
            entropy,
            checksum: expected,
            indices: Zeroizing::new(indices),
        })
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mnemonic")
            .field("entropy", &self.entropy)
            .field("word_count", &self.indices.len())
            .finish_non_exhaustive()
    }
}

/// Check that a phrase decodes with a valid checksum
///
/// # Errors
///
/// Returns the same errors as [`Mnemonic::from_phrase`].
pub fn validate_phrase<W>(phrase: &str, wordlist: &W) -> Result<()>
where
    W: Wordlist + ?Sized,
{
    Mnemonic::from_phrase(phrase, wordlist).map(|_| ())
}
