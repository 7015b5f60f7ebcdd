use jsonrpsee::core::RpcResult;
use jsonrpsee::proc_macros::rpc;
use seele_types::{Address, Hash, ShardNumber, Transaction};

#[rpc(client, server, namespace = "subchain")]
pub trait SubchainApi {
    /// The shard of the given account, or of this node when absent.
    #[method(name = "getShardNumber")]
    async fn get_shard_number(&self, account: Option<Address>) -> RpcResult<ShardNumber>;

    /// Best-effort relay of a transaction toward another shard's peer set.
    /// Always returns the transaction hash; delivery is not acknowledged.
    #[method(name = "sendDifferentShardTransaction")]
    async fn send_different_shard_transaction(
        &self,
        tx: Transaction,
        shard: ShardNumber,
    ) -> RpcResult<Hash>;
}
