//! Error types for Nostress

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NostressError>;

#[derive(Error, Debug)]
pub enum NostressError {
    /// The curve library rejected a scalar during key derivation.
    #[error("Cryptographic error: {0}")]
    Cryptographic(String),

    /// A textual key failed its format's grammar (length, charset, prefix).
    ///
    /// The message describes the violation but never echoes raw secret bytes.
    #[error("Invalid key format: {0}")]
    KeyFormat(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NostressError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            NostressError::Cryptographic(_) => 2,
            NostressError::KeyFormat(_) => 3,
            NostressError::Validation(_) => 3,
            NostressError::Config(_) => 1,
            NostressError::Io(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}
