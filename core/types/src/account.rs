use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseError;

pub const ADDRESS_LENGTH: usize = 20;

/// Identifier of a network shard. Shards are numbered starting at 1.
pub type ShardNumber = u32;

/// Number of shards the transaction/state space is partitioned into.
pub const SHARD_COUNT: ShardNumber = 4;

/// A 20-byte account address. The shard an account lives in is a pure
/// function of the address bytes, so any holder of an address can route
/// transactions without a lookup.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; ADDRESS_LENGTH]);

impl Address {
    pub const EMPTY: Address = Address([0u8; ADDRESS_LENGTH]);

    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// The shard this address belongs to, in `1..=SHARD_COUNT`.
    pub fn shard(&self) -> ShardNumber {
        let sum: u32 = self.0.iter().map(|b| u32::from(*b)).sum();
        sum % SHARD_COUNT + 1
    }
}

impl From<[u8; ADDRESS_LENGTH]> for Address {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

impl FromStr for Address {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(stripped)?;
        let bytes: [u8; ADDRESS_LENGTH] = bytes
            .try_into()
            .map_err(|_| ParseError::InvalidLength {
                expected: ADDRESS_LENGTH,
            })?;
        Ok(Self(bytes))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shard_is_always_in_range() {
        for seed in 0u8..=255 {
            let address = Address::new([seed; ADDRESS_LENGTH]);
            let shard = address.shard();
            assert!((1..=SHARD_COUNT).contains(&shard));
        }
    }

    #[test]
    fn shard_is_a_pure_function_of_the_bytes() {
        let a = Address::new([7; ADDRESS_LENGTH]);
        let b = Address::new([7; ADDRESS_LENGTH]);
        assert_eq!(a.shard(), b.shard());
    }

    #[test]
    fn serde_round_trip() {
        let address = Address::new([0xab; ADDRESS_LENGTH]);
        let json = serde_json::to_string(&address).unwrap();
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(address, back);
    }
}
