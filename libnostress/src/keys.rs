//! Key generation, derivation, and textual codecs for Nostr keypairs
//!
//! A private key is a 32-byte secret scalar; the matching public key is the
//! 32-byte x-coordinate of the secp256k1 curve point obtained by multiplying
//! the generator by that scalar. Both keys have two textual representations:
//! lowercase hex (64 characters) and the prefixed-base58 scheme described on
//! [`to_pseudo_bech32`].
//!
//! All values here are immutable value objects that live for a single command
//! invocation. The codec never logs and never panics on bad input; failures
//! are reported through [`NostressError`].

use std::fmt;
use std::str::FromStr;

use rand::rngs::OsRng;
use rand::RngCore;
use secp256k1::{Secp256k1, SecretKey};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{NostressError, Result};

/// Raw key length in bytes
pub const KEY_LEN: usize = 32;

/// Hex-encoded key length in characters
pub const HEX_KEY_LEN: usize = 64;

/// Prefix tag for the pseudo-bech32 representation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPrefix {
    /// `nsec` - private key
    Nsec,
    /// `npub` - public key
    Npub,
}

impl KeyPrefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyPrefix::Nsec => "nsec",
            KeyPrefix::Npub => "npub",
        }
    }
}

impl fmt::Display for KeyPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Textual key format selector
///
/// Closed enumeration: every consumer matches exhaustively, so adding a
/// format is a compile-time change at every call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyFormat {
    Hex,
    Bech32,
    Both,
}

impl KeyFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyFormat::Hex => "hex",
            KeyFormat::Bech32 => "bech32",
            KeyFormat::Both => "both",
        }
    }
}

impl FromStr for KeyFormat {
    type Err = NostressError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "hex" => Ok(KeyFormat::Hex),
            "bech32" => Ok(KeyFormat::Bech32),
            "both" => Ok(KeyFormat::Both),
            _ => Err(NostressError::Validation(format!(
                "Invalid format '{}'. Must be one of: hex, bech32, both",
                s
            ))),
        }
    }
}

impl fmt::Display for KeyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A 32-byte secret scalar
///
/// The buffer is zeroed when the value is dropped, and `Debug` never prints
/// the key material.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey([u8; KEY_LEN]);

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

impl PrivateKey {
    /// Draw a fresh key from the OS secure random source
    ///
    /// The returned scalar is uniform over 32 bytes and is not guaranteed to
    /// be a valid secp256k1 scalar; derivation reports the (astronomically
    /// rare) rejection instead of resampling.
    pub fn generate() -> Self {
        let mut buf = [0u8; KEY_LEN];
        OsRng.fill_bytes(&mut buf);
        Self(buf)
    }

    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Decode from 64 lowercase or uppercase hex characters
    pub fn from_hex(s: &str) -> Result<Self> {
        Ok(Self(key_from_hex(s)?))
    }

    /// Decode from an `nsec`-prefixed pseudo-bech32 string
    pub fn from_bech32(s: &str) -> Result<Self> {
        Ok(Self(from_pseudo_bech32(s, KeyPrefix::Nsec)?))
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Lowercase hex, 64 characters
    pub fn to_hex(&self) -> String {
        key_to_hex(&self.0)
    }

    /// `nsec` pseudo-bech32 (see [`to_pseudo_bech32`] for the caveat)
    pub fn to_bech32(&self) -> String {
        to_pseudo_bech32(&self.0, KeyPrefix::Nsec)
    }
}

/// The 32-byte x-coordinate of a secp256k1 curve point
///
/// Decoding from text does not verify that the bytes correspond to a point
/// on the curve, let alone to any particular private key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicKey([u8; KEY_LEN]);

impl PublicKey {
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Decode from 64 lowercase or uppercase hex characters
    pub fn from_hex(s: &str) -> Result<Self> {
        Ok(Self(key_from_hex(s)?))
    }

    /// Decode from an `npub`-prefixed pseudo-bech32 string
    pub fn from_bech32(s: &str) -> Result<Self> {
        Ok(Self(from_pseudo_bech32(s, KeyPrefix::Npub)?))
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        key_to_hex(&self.0)
    }

    pub fn to_bech32(&self) -> String {
        to_pseudo_bech32(&self.0, KeyPrefix::Npub)
    }
}

/// Derive the public key for a private scalar
///
/// Deterministic: the same input always yields the same output. The 32 bytes
/// are interpreted as a big-endian scalar, multiplied with the secp256k1 base
/// point, and the x-coordinate of the uncompressed point encoding is returned
/// (the leading format byte and the y-coordinate are dropped).
pub fn derive_public_key(private: &PrivateKey) -> Result<PublicKey> {
    let secret = SecretKey::from_slice(private.as_bytes()).map_err(|e| {
        NostressError::Cryptographic(format!("failed to derive public key: {}", e))
    })?;

    let secp = Secp256k1::new();
    let point = secret.public_key(&secp);
    let uncompressed = point.serialize_uncompressed();

    // uncompressed encoding is 0x04 || x || y
    let mut x = [0u8; KEY_LEN];
    x.copy_from_slice(&uncompressed[1..KEY_LEN + 1]);
    Ok(PublicKey(x))
}

/// An owning private/public pair with `public == derive(private)`
///
/// The invariant is checked at every construction site and the fields are
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypair {
    private: PrivateKey,
    public: PublicKey,
}

impl Keypair {
    /// Build a keypair from existing keys, rejecting mismatched halves
    pub fn new(private: PrivateKey, public: PublicKey) -> Result<Self> {
        let derived = derive_public_key(&private)?;
        if derived != public {
            return Err(NostressError::Cryptographic(
                "public key does not match private key".to_string(),
            ));
        }
        Ok(Self { private, public })
    }

    /// Generate a fresh keypair from the OS secure random source
    pub fn generate() -> Result<Self> {
        let private = PrivateKey::generate();
        let public = derive_public_key(&private)?;
        Ok(Self { private, public })
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    fn encode_hex(&self) -> EncodedKeypair {
        EncodedKeypair {
            private_key: self.private.to_hex(),
            public_key: self.public.to_hex(),
        }
    }

    fn encode_bech32(&self) -> EncodedKeypair {
        EncodedKeypair {
            private_key: self.private.to_bech32(),
            public_key: self.public.to_bech32(),
        }
    }

    /// Render both keys in the requested format
    pub fn to_format(&self, format: KeyFormat) -> FormattedKeypair {
        match format {
            KeyFormat::Hex => FormattedKeypair::Hex(self.encode_hex()),
            KeyFormat::Bech32 => FormattedKeypair::Bech32(self.encode_bech32()),
            KeyFormat::Both => FormattedKeypair::Both {
                hex: self.encode_hex(),
                bech32: self.encode_bech32(),
            },
        }
    }
}

/// Both halves of a keypair rendered in one textual format
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodedKeypair {
    pub private_key: String,
    pub public_key: String,
}

/// Result of [`Keypair::to_format`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattedKeypair {
    Hex(EncodedKeypair),
    Bech32(EncodedKeypair),
    Both {
        hex: EncodedKeypair,
        bech32: EncodedKeypair,
    },
}

/// Encode 32 raw bytes as 64 lowercase hex characters
pub fn key_to_hex(key: &[u8; KEY_LEN]) -> String {
    hex::encode(key)
}

/// Decode a 64-character hex string into 32 raw bytes
///
/// Case-insensitive on input. Error messages describe the grammar violation
/// without echoing the input, since the input may be a private key.
pub fn key_from_hex(s: &str) -> Result<[u8; KEY_LEN]> {
    if s.len() != HEX_KEY_LEN {
        return Err(NostressError::KeyFormat(format!(
            "expected {} hex characters, got {}",
            HEX_KEY_LEN,
            s.len()
        )));
    }
    if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(NostressError::KeyFormat(
            "key contains non-hexadecimal characters".to_string(),
        ));
    }

    let decoded = hex::decode(s).map_err(|e| {
        NostressError::KeyFormat(format!("hex decoding failed: {}", e))
    })?;
    let mut out = [0u8; KEY_LEN];
    out.copy_from_slice(&decoded);
    Ok(out)
}

/// Encode 32 raw bytes as `prefix + base58(bytes)`
///
/// **This is not NIP-19 bech32.** The scheme is a literal `nsec`/`npub`
/// prefix concatenated with a plain base58 encoding of the raw key, kept for
/// compatibility with existing nostress key files. It has no checksum and is
/// not interoperable with Nostr clients expecting BIP-173
/// `nsec1...`/`npub1...` strings; anyone needing real interoperability must
/// replace this codec with a genuine bech32 implementation.
pub fn to_pseudo_bech32(key: &[u8; KEY_LEN], prefix: KeyPrefix) -> String {
    format!("{}{}", prefix.as_str(), bs58::encode(key).into_string())
}

/// Decode a `prefix + base58(bytes)` string into 32 raw bytes
///
/// Fails if the prefix does not match, the remainder is not valid base58, or
/// the decoded payload is not exactly 32 bytes.
pub fn from_pseudo_bech32(s: &str, expected_prefix: KeyPrefix) -> Result<[u8; KEY_LEN]> {
    let payload = s.strip_prefix(expected_prefix.as_str()).ok_or_else(|| {
        NostressError::KeyFormat(format!(
            "expected '{}' prefix",
            expected_prefix.as_str()
        ))
    })?;

    let decoded = bs58::decode(payload).into_vec().map_err(|e| {
        NostressError::KeyFormat(format!("invalid base58 payload: {}", e))
    })?;

    if decoded.len() != KEY_LEN {
        return Err(NostressError::KeyFormat(format!(
            "decoded payload must be {} bytes, got {}",
            KEY_LEN,
            decoded.len()
        )));
    }

    let mut out = [0u8; KEY_LEN];
    out.copy_from_slice(&decoded);
    Ok(out)
}

/// True iff `s` is exactly 64 hex characters
pub fn is_valid_hex_key(s: &str) -> bool {
    s.len() == HEX_KEY_LEN && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// True iff `s` carries the expected prefix and base58-decodes to 32 bytes
pub fn is_valid_pseudo_bech32(s: &str, prefix: KeyPrefix) -> bool {
    from_pseudo_bech32(s, prefix).is_ok()
}
