use num_bigint::BigUint;
use seele_types::{Block, Hash, Logger, Receipt, StoreError, Transaction};

use crate::chain::Chain;
use crate::database::Database;
use crate::p2p::P2p;
use crate::pool::{Pool, PoolCore};
use crate::protocol::Protocol;
use crate::store::{BlockIndex, BlockchainStore};

/// Selects a block out of the canonical chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockId {
    Hash(Hash),
    Height(u64),
    /// The canonical tip.
    Latest,
}

/// The aggregate capability set a node implementation must provide to be
/// exposed over RPC. Constructed once at startup, shared read-only across
/// every API service for the process lifetime; full and light clients are
/// two concrete types behind this one trait.
///
/// All operations here are read-only from the API layer's perspective. The
/// only mutations flow through the explicitly mutating capability methods
/// ([`PoolCore::add_transaction`], [`Protocol::send_different_shard_tx`]).
pub trait Backend: Send + Sync {
    fn p2p_server(&self) -> &dyn P2p;
    fn net_version(&self) -> &str;
    fn network_id(&self) -> &str;

    fn tx_pool_backend(&self) -> &dyn Pool;
    fn chain_backend(&self) -> &dyn Chain;
    fn protocol_backend(&self) -> &dyn Protocol;
    fn log(&self) -> &Logger;
    fn is_syncing(&self) -> bool;

    fn account_index_db(&self) -> &dyn Database;
    fn index_account_db(&self) -> &dyn Database;

    /// Convenience block lookup against the chain store.
    fn get_block(&self, id: BlockId) -> Result<Block, StoreError> {
        let store = self.chain_backend().get_store();
        match id {
            BlockId::Hash(hash) => store.get_block_by_hash(&hash),
            BlockId::Height(height) => store.get_block_by_height(height),
            BlockId::Latest => {
                let head = store.get_head_block_hash()?;
                store.get_block_by_hash(&head)
            },
        }
    }

    fn get_block_total_difficulty(&self, hash: Hash) -> Result<BigUint, StoreError> {
        self.chain_backend()
            .get_store()
            .get_block_total_difficulty(&hash)
    }

    fn get_receipt_by_tx_hash(&self, tx_hash: Hash) -> Result<Option<Receipt>, StoreError> {
        self.chain_backend()
            .get_store()
            .get_receipt_by_tx_hash(&tx_hash)
    }

    /// Looks a transaction up in the given pool first, then in the given
    /// store. The pool and store are passed explicitly so a caller can query
    /// an alternate pool/store pair; a pool hit carries no [`BlockIndex`].
    fn get_transaction(
        &self,
        pool: &dyn PoolCore,
        store: &dyn BlockchainStore,
        tx_hash: Hash,
    ) -> Result<Option<(Transaction, Option<BlockIndex>)>, StoreError> {
        if let Some(tx) = pool.get_transaction(tx_hash) {
            return Ok(Some((tx, None)));
        }
        let Some(index) = store.get_tx_index(&tx_hash)? else {
            return Ok(None);
        };
        let block = store.get_block_by_hash(&index.block_hash)?;
        let tx = block
            .transactions
            .into_iter()
            .nth(index.index as usize)
            .ok_or_else(|| {
                StoreError::Corrupted(format!(
                    "transaction index {} out of range for block {}",
                    index.index, index.block_hash
                ))
            })?;
        Ok(Some((tx, Some(index))))
    }
}
