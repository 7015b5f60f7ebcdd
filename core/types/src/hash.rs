use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha3::{Digest, Keccak256};

use crate::error::ParseError;

pub const HASH_LENGTH: usize = 32;

/// A 32-byte Keccak-256 content hash. The zero hash is reserved as the
/// "empty" sentinel and never produced by [`Hash::digest`] for real content.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hash([u8; HASH_LENGTH]);

impl Hash {
    pub const EMPTY: Hash = Hash([0u8; HASH_LENGTH]);

    pub const fn new(bytes: [u8; HASH_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Hashes arbitrary bytes with Keccak-256.
    pub fn digest(data: &[u8]) -> Self {
        Self(Keccak256::digest(data).into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_inner(self) -> [u8; HASH_LENGTH] {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

impl From<[u8; HASH_LENGTH]> for Hash {
    fn from(bytes: [u8; HASH_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({self})")
    }
}

impl FromStr for Hash {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(stripped)?;
        let bytes: [u8; HASH_LENGTH] = bytes
            .try_into()
            .map_err(|_| ParseError::InvalidLength {
                expected: HASH_LENGTH,
            })?;
        Ok(Self(bytes))
    }
}

impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_deterministic() {
        let a = Hash::digest(b"seele");
        let b = Hash::digest(b"seele");
        assert_eq!(a, b);
        assert_ne!(a, Hash::digest(b"seele2"));
        assert!(!a.is_empty());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        let hash = Hash::digest(b"round trip");
        let parsed: Hash = hash.to_string().parse().unwrap();
        assert_eq!(hash, parsed);
    }

    #[test]
    fn serde_uses_hex_strings() {
        let hash = Hash::digest(b"wire");
        let json = serde_json::to_string(&hash).unwrap();
        assert!(json.starts_with("\"0x"));
        let back: Hash = serde_json::from_str(&json).unwrap();
        assert_eq!(hash, back);
    }

    #[test]
    fn rejects_wrong_lengths() {
        assert!("0xdeadbeef".parse::<Hash>().is_err());
        assert!("not hex".parse::<Hash>().is_err());
    }
}
