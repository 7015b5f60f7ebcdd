use std::sync::Arc;

use jsonrpsee::core::RpcResult;
use seele_interfaces::{Backend, Chain, Protocol};
use seele_types::{Address, Hash, ShardNumber, Transaction};
use tracing::trace;

use crate::api::SubchainApiServer;

pub struct SubchainApi<B: Backend> {
    backend: Arc<B>,
}

impl<B: Backend> SubchainApi<B> {
    pub(crate) fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }
}

#[async_trait::async_trait]
impl<B: Backend + 'static> SubchainApiServer for SubchainApi<B> {
    async fn get_shard_number(&self, account: Option<Address>) -> RpcResult<ShardNumber> {
        trace!(target: "rpc::subchain", ?account, "Serving subchain_getShardNumber");

        let shard = match account {
            Some(account) => account.shard(),
            None => self
                .backend
                .chain_backend()
                .current_header()
                .creator
                .shard(),
        };
        Ok(shard)
    }

    async fn send_different_shard_transaction(
        &self,
        tx: Transaction,
        shard: ShardNumber,
    ) -> RpcResult<Hash> {
        trace!(target: "rpc::subchain", hash = %tx.hash, shard, "Serving subchain_sendDifferentShardTransaction");

        let hash = tx.hash;
        self.backend
            .protocol_backend()
            .send_different_shard_tx(tx, shard);
        Ok(hash)
    }
}
