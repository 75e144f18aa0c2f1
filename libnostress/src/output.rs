//! Output formatting and writing for the nostress binaries
//!
//! Keys go to stdout (or a file); everything diagnostic goes through
//! `tracing` to stderr so output stays scriptable.

use std::io::Write;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::Serialize;
use serde_json::json;

use crate::error::{NostressError, Result};
use crate::keys::FormattedKeypair;

const OBFUSCATION_HEADER: &str = "# Obfuscated Nostress Keypair\n\
# Content below is base64 of the plain text. This is reversible encoding,\n\
# NOT encryption; it protects against nothing but casual shoulder-surfing.\n";

/// Serialize a value as a JSON string
pub fn format_as_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.map_err(|e| NostressError::Validation(format!("JSON encoding failed: {}", e)))
}

/// Render a formatted keypair as a plain text block
pub fn format_keypair_text(formatted: &FormattedKeypair) -> String {
    match formatted {
        FormattedKeypair::Hex(keys) | FormattedKeypair::Bech32(keys) => format!(
            "Private Key: {}\nPublic Key:  {}",
            keys.private_key, keys.public_key
        ),
        FormattedKeypair::Both { hex, bech32 } => format!(
            "HEX Format:\nPrivate Key: {}\nPublic Key:  {}\n\n\
             Bech32 Format:\nPrivate Key: {}\nPublic Key:  {}",
            hex.private_key, hex.public_key, bech32.private_key, bech32.public_key
        ),
    }
}

/// Render a formatted keypair as a JSON value
pub fn format_keypair_json(formatted: &FormattedKeypair) -> serde_json::Value {
    match formatted {
        FormattedKeypair::Hex(keys) => json!({
            "private_key": keys.private_key,
            "public_key": keys.public_key,
            "format": "hex",
        }),
        FormattedKeypair::Bech32(keys) => json!({
            "private_key": keys.private_key,
            "public_key": keys.public_key,
            "format": "bech32",
        }),
        FormattedKeypair::Both { hex, bech32 } => json!({
            "hex": hex,
            "bech32": bech32,
            "format": "both",
        }),
    }
}

/// Check whether writing to `path` would clobber an existing file
///
/// Prompts for confirmation on a TTY; refuses outright otherwise, so that
/// scripted runs never silently overwrite key files.
pub fn confirm_overwrite(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }

    if !atty::is(atty::Stream::Stdin) {
        return Err(NostressError::Validation(format!(
            "File already exists: {}. Refusing to overwrite in non-interactive mode.",
            path.display()
        )));
    }

    print!("File {} already exists. Overwrite? [y/N]: ", path.display());
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

/// Write content to a file, or to stdout when no path is given
pub fn write_output(content: &str, output_path: Option<&Path>) -> Result<()> {
    match output_path {
        Some(path) => {
            std::fs::write(path, content)?;
            Ok(())
        }
        None => {
            println!("{}", content);
            Ok(())
        }
    }
}

/// Wrap content in base64 with a header stating exactly what it is
///
/// This is *obfuscation*, not encryption: anyone holding the file can decode
/// it. It exists so generated key files are not grep-able plain text, nothing
/// more.
pub fn obfuscate(content: &str) -> String {
    format!("{}\n{}", OBFUSCATION_HEADER, BASE64.encode(content.as_bytes()))
}

/// Reverse [`obfuscate`], ignoring `#` comment lines
pub fn deobfuscate(content: &str) -> Result<String> {
    let payload: String = content
        .lines()
        .filter(|line| !line.trim().starts_with('#') && !line.trim().is_empty())
        .collect();

    let decoded = BASE64
        .decode(payload.as_bytes())
        .map_err(|e| NostressError::Validation(format!("invalid base64 payload: {}", e)))?;

    String::from_utf8(decoded)
        .map_err(|e| NostressError::Validation(format!("payload is not UTF-8: {}", e)))
}

/// Truncate a string for display, appending `...` when shortened
pub fn truncate_string(text: &str, max_length: usize) -> String {
    const SUFFIX: &str = "...";
    if text.len() <= max_length {
        return text.to_string();
    }
    let cut = max_length.saturating_sub(SUFFIX.len());
    format!("{}{}", &text[..cut], SUFFIX)
}
