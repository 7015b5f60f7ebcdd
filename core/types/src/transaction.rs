use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};

use crate::account::Address;
use crate::error::PoolError;
use crate::hash::Hash;

/// The signed payload of a transaction. The transaction's identity is the
/// Keccak-256 digest of this data, see [`TransactionData::digest`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionData {
    pub from: Address,
    pub to: Address,
    #[serde(with = "crate::serde_util::biguint")]
    pub amount: BigUint,
    #[serde(with = "crate::serde_util::biguint")]
    pub fee: BigUint,
    pub nonce: u64,
    pub timestamp: u64,
    pub payload: Vec<u8>,
}

impl TransactionData {
    /// Canonical digest over the payload fields. Variable-length fields are
    /// length-prefixed so no two payloads share an encoding.
    pub fn digest(&self) -> Hash {
        let mut hasher = Keccak256::new();
        hasher.update(self.from.as_bytes());
        hasher.update(self.to.as_bytes());
        let amount = self.amount.to_bytes_be();
        hasher.update((amount.len() as u64).to_be_bytes());
        hasher.update(&amount);
        let fee = self.fee.to_bytes_be();
        hasher.update((fee.len() as u64).to_be_bytes());
        hasher.update(&fee);
        hasher.update(self.nonce.to_be_bytes());
        hasher.update(self.timestamp.to_be_bytes());
        hasher.update((self.payload.len() as u64).to_be_bytes());
        hasher.update(&self.payload);
        Hash::new(hasher.finalize().into())
    }
}

/// A transaction with its hash-derived identity and sender signature.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub hash: Hash,
    pub data: TransactionData,
    pub signature: Vec<u8>,
}

impl Transaction {
    /// Seals the data into a transaction, stamping the canonical hash.
    pub fn new(data: TransactionData, signature: Vec<u8>) -> Self {
        let hash = data.digest();
        Self {
            hash,
            data,
            signature,
        }
    }

    /// Structural well-formedness checks shared by every pool admission
    /// policy: the stamped hash must match the data and the sender must be a
    /// real, signed account. Policy checks (nonce windows, balance, fees)
    /// belong to the pool implementation.
    pub fn validate(&self) -> Result<(), PoolError> {
        if self.hash != self.data.digest() {
            return Err(PoolError::Invalid(format!(
                "hash mismatch, stamped {} does not cover the payload",
                self.hash
            )));
        }
        if self.data.from.is_empty() {
            return Err(PoolError::Invalid("sender address is empty".into()));
        }
        if self.signature.is_empty() {
            return Err(PoolError::Invalid("missing signature".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data(nonce: u64) -> TransactionData {
        TransactionData {
            from: Address::new([1; 20]),
            to: Address::new([2; 20]),
            amount: BigUint::from(10u32),
            fee: BigUint::from(1u32),
            nonce,
            timestamp: 0,
            payload: vec![],
        }
    }

    #[test]
    fn identity_tracks_the_payload() {
        let a = Transaction::new(sample_data(0), vec![1]);
        let b = Transaction::new(sample_data(0), vec![1]);
        let c = Transaction::new(sample_data(1), vec![1]);
        assert_eq!(a.hash, b.hash);
        assert_ne!(a.hash, c.hash);
    }

    #[test]
    fn validate_rejects_a_tampered_hash() {
        let mut tx = Transaction::new(sample_data(0), vec![1]);
        tx.data.nonce += 1;
        assert!(matches!(tx.validate(), Err(PoolError::Invalid(_))));
    }

    #[test]
    fn validate_rejects_missing_signature() {
        let tx = Transaction::new(sample_data(0), vec![]);
        assert!(matches!(tx.validate(), Err(PoolError::Invalid(_))));
    }

    #[test]
    fn validate_accepts_a_sealed_transaction() {
        let tx = Transaction::new(sample_data(3), vec![5, 6]);
        assert!(tx.validate().is_ok());
    }
}
