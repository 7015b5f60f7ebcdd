use jsonrpsee::core::RpcResult;
use jsonrpsee::proc_macros::rpc;
use seele_types::{Address, Block, Hash};

use crate::api_types::{GetBalanceResponse, GetLogsResponse, MinerInfo};

#[rpc(client, server, namespace = "seele")]
pub trait SeeleApi {
    #[method(name = "getInfo")]
    async fn get_info(&self) -> RpcResult<MinerInfo>;

    #[method(name = "getBalance")]
    async fn get_balance(&self, account: Address) -> RpcResult<GetBalanceResponse>;

    #[method(name = "getAccountNonce")]
    async fn get_account_nonce(&self, account: Address) -> RpcResult<u64>;

    #[method(name = "getBlockHeight")]
    async fn get_block_height(&self) -> RpcResult<u64>;

    /// Absent height means the canonical tip.
    #[method(name = "getBlockByHeight")]
    async fn get_block_by_height(&self, height: Option<u64>) -> RpcResult<Block>;

    #[method(name = "getBlockByHash")]
    async fn get_block_by_hash(&self, hash: Hash) -> RpcResult<Block>;

    /// Total difficulty as a decimal string.
    #[method(name = "getBlockTotalDifficulty")]
    async fn get_block_total_difficulty(&self, hash: Hash) -> RpcResult<String>;

    /// Logs emitted by the block at `height` (tip when absent), each carrying
    /// its `(tx_hash, log_index)` identity.
    #[method(name = "getLogs")]
    async fn get_logs(&self, height: Option<u64>) -> RpcResult<Vec<GetLogsResponse>>;

    /// Hashes of the mined transactions touching the given account, from the
    /// account index.
    #[method(name = "getAccountTransactions")]
    async fn get_account_transactions(&self, account: Address) -> RpcResult<Vec<Hash>>;
}
