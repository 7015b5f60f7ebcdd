use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};

use crate::account::Address;
use crate::hash::Hash;
use crate::transaction::Transaction;

/// Header of a block on the canonical chain.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub previous_block_hash: Hash,
    pub creator: Address,
    pub state_hash: Hash,
    pub tx_hash: Hash,
    #[serde(with = "crate::serde_util::biguint")]
    pub difficulty: BigUint,
    pub height: u64,
    pub create_timestamp: u64,
    pub nonce: u64,
    pub extra_data: Vec<u8>,
}

impl BlockHeader {
    /// Canonical digest of the header; this is the block's identity.
    pub fn hash(&self) -> Hash {
        let mut hasher = Keccak256::new();
        hasher.update(self.previous_block_hash.as_bytes());
        hasher.update(self.creator.as_bytes());
        hasher.update(self.state_hash.as_bytes());
        hasher.update(self.tx_hash.as_bytes());
        let difficulty = self.difficulty.to_bytes_be();
        hasher.update((difficulty.len() as u64).to_be_bytes());
        hasher.update(&difficulty);
        hasher.update(self.height.to_be_bytes());
        hasher.update(self.create_timestamp.to_be_bytes());
        hasher.update(self.nonce.to_be_bytes());
        hasher.update((self.extra_data.len() as u64).to_be_bytes());
        hasher.update(&self.extra_data);
        Hash::new(hasher.finalize().into())
    }
}

/// A block: header plus the ordered transactions it packages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
}

impl Block {
    pub fn hash(&self) -> Hash {
        self.header.hash()
    }

    /// Commitment over the ordered transaction hashes, stored in the header's
    /// `tx_hash` field.
    pub fn tx_root(transactions: &[Transaction]) -> Hash {
        let mut hasher = Keccak256::new();
        hasher.update((transactions.len() as u64).to_be_bytes());
        for tx in transactions {
            hasher.update(tx.hash.as_bytes());
        }
        Hash::new(hasher.finalize().into())
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;

    use super::*;
    use crate::transaction::TransactionData;

    #[test]
    fn header_hash_tracks_every_field() {
        let header = BlockHeader {
            height: 1,
            difficulty: BigUint::from(100u32),
            ..Default::default()
        };
        let mut bumped = header.clone();
        bumped.nonce += 1;
        assert_ne!(header.hash(), bumped.hash());
    }

    #[test]
    fn tx_root_depends_on_order() {
        let a = Transaction::new(
            TransactionData {
                nonce: 1,
                ..Default::default()
            },
            vec![1],
        );
        let b = Transaction::new(
            TransactionData {
                nonce: 2,
                ..Default::default()
            },
            vec![1],
        );
        let forward = Block::tx_root(&[a.clone(), b.clone()]);
        let reversed = Block::tx_root(&[b, a]);
        assert_ne!(forward, reversed);
    }
}
