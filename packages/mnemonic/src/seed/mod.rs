//! Seed derivation - configuration and PBKDF2 stretching of mnemonic sentences

pub mod config;
pub mod derivation;

pub use config::{PBKDF2_ROUNDS, SALT_PREFIX, SeedConfig};
pub use derivation::{SEED_LEN, Seed, SeedDerivation, derive_seed};
