use crate::CspHashError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Length of a SHA-256 digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// Length of the canonical hex form of a digest.
pub const DIGEST_HEX_LEN: usize = DIGEST_LEN * 2;

/// A finalized SHA-256 digest.
///
/// Only produced by finalizing a hash state or by parsing a well-formed hex
/// string, so a `Digest` value is always complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Lowercase hex representation (64 characters).
    pub fn to_hex(&self) -> String {
        hex_encode(&self.0)
    }

    /// Parse a 64-character hex string. Uppercase input is accepted.
    pub fn from_hex(hex: &str) -> Result<Self, CspHashError> {
        if hex.len() != DIGEST_HEX_LEN {
            return Err(CspHashError::MalformedDigest(hex.to_string()));
        }

        let mut bytes = [0u8; DIGEST_LEN];
        hex::decode_to_slice(hex, &mut bytes)
            .map_err(|_| CspHashError::MalformedDigest(hex.to_string()))?;
        Ok(Self(bytes))
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for Digest {
    type Err = CspHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// A file's digest together with the number of bytes that were hashed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileDigest {
    pub path: String,
    pub size: u64,
    #[serde(rename = "Sha256")]
    pub digest: Digest,
}

/// Returns true if `s` is exactly 64 ASCII hex characters.
pub fn is_digest_hex(s: &str) -> bool {
    let mut scratch = [0u8; DIGEST_LEN];
    s.len() == DIGEST_HEX_LEN && hex::decode_to_slice(s, &mut scratch).is_ok()
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
