use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use seele_types::{Block, Hash, Receipt, StoreError};

/// Position of a mined transaction inside the canonical chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockIndex {
    pub block_hash: Hash,
    pub block_height: u64,
    /// Position of the transaction within the block.
    pub index: u32,
}

/// Read access to the persistent chain store. Lookups keyed by an identifier
/// that is required to exist (blocks, difficulties) fail with
/// [`StoreError::NotFound`] when it does not; per-transaction records use
/// `Ok(None)` for plain absence.
pub trait BlockchainStore: Send + Sync {
    fn get_head_block_hash(&self) -> Result<Hash, StoreError>;

    fn get_block_by_hash(&self, hash: &Hash) -> Result<Block, StoreError>;

    fn get_block_by_height(&self, height: u64) -> Result<Block, StoreError>;

    fn get_block_total_difficulty(&self, hash: &Hash) -> Result<BigUint, StoreError>;

    /// Receipts of every transaction in the given block, in block order.
    fn get_receipts_by_block_hash(&self, hash: &Hash) -> Result<Vec<Receipt>, StoreError>;

    fn get_receipt_by_tx_hash(&self, tx_hash: &Hash) -> Result<Option<Receipt>, StoreError>;

    /// Where the transaction was mined, if it was.
    fn get_tx_index(&self, tx_hash: &Hash) -> Result<Option<BlockIndex>, StoreError>;
}
