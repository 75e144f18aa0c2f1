//! Nostress - Unix tools for Nostr key management
//!
//! This library provides the key codec core (generation, derivation, and the
//! hex / prefixed-base58 textual formats) plus the shared plumbing used by the
//! nostress command-line tools.

pub mod config;
pub mod error;
pub mod keys;
pub mod logging;
pub mod output;
pub mod tips;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::{NostressError, Result};
pub use keys::{KeyFormat, Keypair, KeyPrefix, PrivateKey, PublicKey};
