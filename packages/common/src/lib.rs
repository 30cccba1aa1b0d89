//! Common infrastructure shared by the cryypt mnemonic crates
//!
//! Currently this is the logging bootstrap and the redacting log helpers used
//! wherever secret material (entropy, phrases, seeds) is in flight.

#![forbid(unsafe_code)]

pub mod logging;

pub use logging::LoggingTransformer;
