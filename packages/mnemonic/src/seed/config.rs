//! Seed derivation configuration
//!
//! The defaults are the BIP-39 parameters. Changing them produces seeds no
//! other BIP-39 wallet will reproduce, which is occasionally wanted for
//! application-private key stretching.

use crate::{MnemonicError, Result};

/// PBKDF2 iteration count fixed by BIP-39
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Salt prefix fixed by BIP-39; the passphrase is appended to it
pub const SALT_PREFIX: &str = "mnemonic";

/// Parameters for PBKDF2-HMAC-SHA512 seed stretching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    iterations: u32,
    salt_prefix: String,
}

impl SeedConfig {
    /// The BIP-39 parameters
    #[must_use]
    pub fn bip39() -> Self {
        Self {
            iterations: PBKDF2_ROUNDS,
            salt_prefix: SALT_PREFIX.to_string(),
        }
    }

    /// Override the PBKDF2 iteration count
    ///
    /// # Errors
    ///
    /// Returns [`MnemonicError::InvalidConfig`] if `iterations` is zero.
    pub fn with_iterations(mut self, iterations: u32) -> Result<Self> {
        if iterations == 0 {
            return Err(MnemonicError::invalid_config(
                "PBKDF2 iterations must be non-zero",
            ));
        }
        self.iterations = iterations;
        Ok(self)
    }

    /// Override the salt prefix
    #[must_use]
    pub fn with_salt_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.salt_prefix = prefix.into();
        self
    }

    /// PBKDF2 iteration count
    #[must_use]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Salt prefix placed before the passphrase
    #[must_use]
    pub fn salt_prefix(&self) -> &str {
        &self.salt_prefix
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self::bip39()
    }
}
