//! Structured logging infrastructure
//!
//! Provides env_logger-based logging with redaction of secret material.
//! Entropy, phrases, passphrases and seeds never reach a log line; callers log
//! sizes, counts and fingerprints instead.

use log::{debug, info, warn};
use sha2::{Digest, Sha256};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Number of hex characters kept from a fingerprint digest
const FINGERPRINT_HEX_LEN: usize = 12;

/// Logging entry points shared by the mnemonic crates
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging system (should be called once at application startup)
    ///
    /// Configure levels via the `RUST_LOG` environment variable:
    /// - `RUST_LOG=debug` - Enable all debug logs
    /// - `RUST_LOG=cryypt_mnemonic=debug,cryypt_wordlist=info` - Crate-specific levels
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            // Another logger may already be installed by the host application
            if env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .try_init()
                .is_ok()
            {
                info!("Structured logging initialized");
            }
        });
    }

    /// Initialize logging for test environments
    ///
    /// Safe to call from every test; repeated initialization is ignored.
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log a mnemonic pipeline step by its shape only
    pub fn log_mnemonic_event(operation: &str, entropy_bits: u16, word_count: usize) {
        debug!("Mnemonic: {operation} (entropy_bits: {entropy_bits}, words: {word_count})");
    }

    /// Log a word list becoming available, identified by a content fingerprint
    pub fn log_wordlist_loaded(language: &str, source: &str, content: &[u8]) {
        let fingerprint = Self::fingerprint(content);
        info!("Word list loaded: {language} from {source} (fingerprint: {fingerprint})");
    }

    /// Log a rejected input by error kind only
    ///
    /// Error messages may quote user input, so only a fixed kind label is
    /// recorded.
    pub fn log_validation_failure(operation: &str, kind: &str) {
        warn!("Validation failed: {operation} (kind: {kind})");
    }

    /// Short SHA-256 fingerprint for identifying data in logs
    ///
    /// Returns `#` followed by the first 12 hex characters of the digest.
    #[must_use]
    pub fn fingerprint(data: &[u8]) -> String {
        let digest = hex::encode(Sha256::digest(data));
        format!("#{}", &digest[..FINGERPRINT_HEX_LEN])
    }
}
