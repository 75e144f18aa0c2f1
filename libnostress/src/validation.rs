//! Input validation helpers for the CLI layer
//!
//! These return `Validation` errors with human-readable messages; the key
//! codec itself has its own stricter grammar in [`crate::keys`].

use std::path::{Path, PathBuf};

use crate::error::{NostressError, Result};
use crate::keys::{KeyFormat, KeyPrefix, HEX_KEY_LEN};

/// Validate a file path for reading or writing
pub fn validate_file_path(path: &str, must_exist: bool, must_not_exist: bool) -> Result<PathBuf> {
    let expanded = shellexpand::tilde(path).to_string();
    let path_obj = PathBuf::from(expanded);

    if must_exist && !path_obj.exists() {
        return Err(NostressError::Validation(format!(
            "File does not exist: {}",
            path
        )));
    }

    if must_not_exist && path_obj.exists() {
        return Err(NostressError::Validation(format!(
            "File already exists: {}",
            path
        )));
    }

    let parent = path_obj.parent().unwrap_or_else(|| Path::new("."));
    if !parent.as_os_str().is_empty() && !parent.exists() {
        return Err(NostressError::Validation(format!(
            "Directory does not exist: {}",
            parent.display()
        )));
    }

    Ok(path_obj)
}

/// Parse a key format string, normalizing case
pub fn validate_key_format(format_str: &str) -> Result<KeyFormat> {
    format_str.parse()
}

/// Validate a hex string's grammar, optionally with an exact length
///
/// Returns the canonical lowercase form. The error message reports lengths
/// only, never the string itself.
pub fn validate_hex_string(hex_str: &str, expected_length: Option<usize>) -> Result<String> {
    let hex_str = hex_str.trim();

    if hex_str.is_empty() || !hex_str.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(NostressError::Validation(
            "Invalid hexadecimal string".to_string(),
        ));
    }

    if let Some(expected) = expected_length {
        if hex_str.len() != expected {
            return Err(NostressError::Validation(format!(
                "Hex string must be {} characters long, got {}",
                expected,
                hex_str.len()
            )));
        }
    }

    Ok(hex_str.to_lowercase())
}

/// Validate a pseudo-bech32 string's surface grammar
///
/// Checks the character set and, when given, the prefix. Full payload
/// validation happens in [`crate::keys::from_pseudo_bech32`].
pub fn validate_bech32_string(bech32_str: &str, expected_prefix: Option<KeyPrefix>) -> Result<String> {
    let bech32_str = bech32_str.trim();

    if bech32_str.is_empty()
        || !bech32_str.bytes().all(|b| b.is_ascii_alphanumeric())
    {
        return Err(NostressError::Validation(
            "Invalid bech32 string".to_string(),
        ));
    }

    if let Some(prefix) = expected_prefix {
        if !bech32_str.starts_with(prefix.as_str()) {
            return Err(NostressError::Validation(format!(
                "Expected prefix '{}'",
                prefix.as_str()
            )));
        }
    }

    Ok(bech32_str.to_string())
}

/// Validate a hex private or public key (64 characters)
pub fn validate_hex_key(s: &str) -> Result<String> {
    validate_hex_string(s, Some(HEX_KEY_LEN))
}
