use num_bigint::BigUint;
use seele_interfaces::BlockIndex;
use seele_types::{Address, Hash, Log, ShardNumber, Transaction};
use serde::{Deserialize, Serialize};

/// Snapshot of the node's miner and chain status, assembled at response time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinerInfo {
    pub coinbase: Address,
    pub current_block_height: u64,
    pub header_hash: Hash,
    pub shard: ShardNumber,
    pub miner_status: String,
    pub version: String,
    /// Seconds since the tip block was created.
    pub block_age: u64,
    pub peer_cnt: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBalanceResponse {
    pub account: Address,
    #[serde(with = "seele_types::serde_util::biguint")]
    pub balance: BigUint,
}

/// A log together with its derived identity: the underlying record carries
/// no index, so `(tx_hash, log_index)` is materialized here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetLogsResponse {
    #[serde(flatten)]
    pub log: Log,
    pub tx_hash: Hash,
    pub log_index: u32,
}

/// Result of a transaction lookup across the pool and the chain store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionLookup {
    pub transaction: Transaction,
    /// Where the transaction was mined; `None` while it is still pooled.
    pub block_index: Option<BlockIndex>,
    pub status: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxPoolContent {
    pub processing: Vec<Transaction>,
    pub pending: Vec<Transaction>,
}
