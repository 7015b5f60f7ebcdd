use jsonrpsee::core::RpcResult;
use jsonrpsee::proc_macros::rpc;
use seele_types::Block;

use crate::api_types::TxPoolContent;

#[rpc(client, server, namespace = "debug")]
pub trait DebugApi {
    /// Dumps the block at `height`, tip when absent.
    #[method(name = "printBlock")]
    async fn print_block(&self, height: Option<u64>) -> RpcResult<Block>;

    #[method(name = "isSyncing")]
    async fn is_syncing(&self) -> RpcResult<bool>;

    /// The pool's partitions, separately.
    #[method(name = "getTxPoolContent")]
    async fn get_tx_pool_content(&self) -> RpcResult<TxPoolContent>;
}
