use serde::{Deserialize, Serialize};

use crate::account::Address;
use crate::hash::Hash;

/// An event record emitted while executing a transaction. A log does not
/// carry its own index; its identity is `(transaction hash, position within
/// the receipt)` and is only materialized at the API boundary.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Log {
    pub address: Address,
    pub topics: Vec<Hash>,
    pub data: Vec<u8>,
    pub block_number: u64,
}

/// Execution receipt of a single transaction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub result: Vec<u8>,
    pub post_state: Hash,
    pub logs: Vec<Log>,
    pub tx_hash: Hash,
    pub contract_address: Option<Address>,
    pub failed: bool,
    pub used_gas: u64,
    pub total_fee: u64,
}
