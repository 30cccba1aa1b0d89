//! Seed derivation from a mnemonic sentence

use super::config::SeedConfig;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use std::fmt;
use subtle::ConstantTimeEq;
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroizing;

/// Seed length in bytes (512 bits)
pub const SEED_LEN: usize = 64;

/// 512-bit binary seed, wiped on drop
#[derive(Clone)]
pub struct Seed(Zeroizing<[u8; SEED_LEN]>);

impl Seed {
    /// The seed bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    /// Lowercase hex encoding
    #[must_use]
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(self.0.as_slice()))
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl PartialEq for Seed {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_slice().ct_eq(other.0.as_slice()).into()
    }
}

impl Eq for Seed {}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(<redacted>)")
    }
}

/// Seed derivation context
///
/// Normalizes both inputs to NFKD and stretches them with
/// PBKDF2-HMAC-SHA512. Intermediate buffers are zeroized.
#[derive(Debug, Clone, Default)]
pub struct SeedDerivation {
    config: SeedConfig,
}

impl SeedDerivation {
    /// Create a derivation context
    #[must_use]
    pub fn new(config: SeedConfig) -> Self {
        Self { config }
    }

    /// Create a context with the BIP-39 parameters
    #[must_use]
    pub fn bip39() -> Self {
        Self::new(SeedConfig::bip39())
    }

    /// The derivation parameters
    #[must_use]
    pub fn config(&self) -> &SeedConfig {
        &self.config
    }

    /// Derive the seed for `sentence` and an optional passphrase
    ///
    /// `None` and `Some("")` give the same seed.
    #[must_use]
    pub fn derive(&self, sentence: &str, passphrase: Option<&str>) -> Seed {
        let password: Zeroizing<String> = Zeroizing::new(sentence.nfkd().collect());

        let mut raw_salt = Zeroizing::new(String::from(self.config.salt_prefix()));
        raw_salt.push_str(passphrase.unwrap_or_default());
        let salt: Zeroizing<String> = Zeroizing::new(raw_salt.nfkd().collect());

        let mut output = Zeroizing::new([0u8; SEED_LEN]);
        pbkdf2_hmac::<Sha512>(
            password.as_bytes(),
            salt.as_bytes(),
            self.config.iterations(),
            output.as_mut_slice(),
        );

        tracing::debug!(
            iterations = self.config.iterations(),
            has_passphrase = passphrase.is_some_and(|p| !p.is_empty()),
            "derived seed"
        );
        Seed(output)
    }
}

/// Derive a BIP-39 seed: NFKD, PBKDF2-HMAC-SHA512, 2048 rounds, 64 bytes
#[must_use]
pub fn derive_seed(sentence: &str, passphrase: Option<&str>) -> Seed {
    SeedDerivation::bip39().derive(sentence, passphrase)
}
