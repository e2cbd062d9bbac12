//! Registry identifiers: deterministic, collision-resistant digests.
//!
//! All identifiers are newtypes over 32-byte Blake3 digests to prevent
//! misuse at compile time. Derivation is pure: any caller can compute an
//! identifier from the human-readable key without touching storage.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Domain prefix for package identifier derivation.
const PACKAGE_ID_DOMAIN: &[u8] = b"depot-package-v1:";

/// Domain prefix for release identifier derivation.
const RELEASE_ID_DOMAIN: &[u8] = b"depot-release-v1:";

/// A 32-byte package identifier, computed as Blake3 of the package name
/// under a domain prefix.
///
/// Two calls with the same name always produce the same PackageId, before
/// or after the package is registered.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageId(pub [u8; 32]);

impl PackageId {
    /// Derive a package identifier from its name.
    pub fn derive(name: &str) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(PACKAGE_ID_DOMAIN);
        hasher.update(name.as_bytes());
        Self(*hasher.finalize().as_bytes())
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render as a `0x`-prefixed lowercase hex string (66 characters).
    pub fn to_hex(&self) -> String {
        encode_digest(&self.0)
    }

    /// Parse from a hex string, with or without the `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        decode_digest(s).map(Self)
    }
}

impl fmt::Debug for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PackageId({})", &hex::encode(self.0)[..16])
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl AsRef<[u8]> for PackageId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for PackageId {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// A 32-byte release identifier, computed as Blake3 of the (name, version)
/// pair under a domain prefix.
///
/// Each field is length-prefixed before hashing so that no two distinct
/// (name, version) pairs share a preimage.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReleaseId(pub [u8; 32]);

impl ReleaseId {
    /// Derive a release identifier from a package name and version.
    pub fn derive(name: &str, version: &str) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(RELEASE_ID_DOMAIN);
        hasher.update(&(name.len() as u64).to_le_bytes());
        hasher.update(name.as_bytes());
        hasher.update(&(version.len() as u64).to_le_bytes());
        hasher.update(version.as_bytes());
        Self(*hasher.finalize().as_bytes())
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render as a `0x`-prefixed lowercase hex string (66 characters).
    pub fn to_hex(&self) -> String {
        encode_digest(&self.0)
    }

    /// Parse from a hex string, with or without the `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        decode_digest(s).map(Self)
    }
}

impl fmt::Debug for ReleaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReleaseId({})", &hex::encode(self.0)[..16])
    }
}

impl fmt::Display for ReleaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl AsRef<[u8]> for ReleaseId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for ReleaseId {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

fn encode_digest(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

fn decode_digest(s: &str) -> Result<[u8; 32], hex::FromHexError> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(s)?;
    if bytes.len() != 32 {
        return Err(hex::FromHexError::InvalidStringLength);
    }
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&bytes);
    Ok(arr)
}
